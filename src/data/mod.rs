//! Mock data provider.
//!
//! Static fixtures backing the dashboard: training menus, race profiles, a
//! weight history, and the developer documentation text. Nothing here is
//! computed or persisted; the accessors seed fresh copies on each call.

pub mod types;

use chrono::NaiveDate;

pub use types::{MenuType, RaceProfile, RaceType, TrainingMenu, WeightRecord};

/// Application display name.
pub const APP_NAME: &str = "TT-Pro";

/// Curated training menus shown in the fitness view.
pub fn training_menus() -> Vec<TrainingMenu> {
    vec![
        TrainingMenu {
            id: "1".to_string(),
            title: "2x20min FTP Intervals".to_string(),
            menu_type: MenuType::Ftp,
            duration_min: 90,
            tss: 85,
            description:
                "Classic threshold work. Warm up 20m, 2x20m at 100% FTP with 5m rest, Cool down."
                    .to_string(),
        },
        TrainingMenu {
            id: "2".to_string(),
            title: "VO2Max Micro-bursts".to_string(),
            menu_type: MenuType::Vo2max,
            duration_min: 60,
            tss: 75,
            description: "3 sets of 10x(30s ON / 15s OFF) at 120% FTP.".to_string(),
        },
        TrainingMenu {
            id: "3".to_string(),
            title: "LSD Base Miles".to_string(),
            menu_type: MenuType::Endurance,
            duration_min: 180,
            tss: 150,
            description: "Long slow distance at Zone 2 (65-75% FTP).".to_string(),
        },
    ]
}

/// Target races shown in the strategy view.
pub fn races() -> Vec<RaceProfile> {
    vec![
        RaceProfile {
            id: "r1".to_string(),
            name: "Mt. Fuji Hillclimb".to_string(),
            distance_km: 24.0,
            elevation_gain_m: 1255,
            race_type: RaceType::Mountain,
            description: "Constant gradient averaging 5.2%. Aerodynamics matter less than W/kg."
                .to_string(),
        },
        RaceProfile {
            id: "r2".to_string(),
            name: "Tokyo Bay Time Trial".to_string(),
            distance_km: 40.0,
            elevation_gain_m: 50,
            race_type: RaceType::TT,
            description: "Dead flat, high wind exposure. Pure CdA vs Watts battle.".to_string(),
        },
        RaceProfile {
            id: "r3".to_string(),
            name: "Suzuka Enduro".to_string(),
            distance_km: 120.0,
            elevation_gain_m: 800,
            race_type: RaceType::Hilly,
            description: "Technical corners with punchy climbs.".to_string(),
        },
    ]
}

/// Monthly weight history shown in the fitness view chart.
pub fn weight_history() -> Vec<WeightRecord> {
    [
        (2023, 1, 70.5),
        (2023, 2, 69.8),
        (2023, 3, 69.2),
        (2023, 4, 68.5),
        (2023, 5, 67.9),
        (2023, 6, 67.5),
    ]
    .iter()
    .map(|&(year, month, weight_kg)| WeightRecord {
        date: NaiveDate::from_ymd_opt(year, month, 1).expect("valid fixture date"),
        weight_kg,
    })
    .collect()
}

/// Architecture and design documentation shown in the docs view.
pub const DOCUMENTATION: &str = r#"
# TT-Pro Architecture & Design Documents

## 1. System Architecture
TT-Pro adopts a **Modular Monolith** pattern for the prototype, designed to transition to Microservices.

```mermaid
graph TD
    User[User] -->|Desktop| Frontend[egui Dashboard]
    Frontend -->|Module Call| FitnessModule
    Frontend -->|Module Call| AeroModule
    Frontend -->|Module Call| StrategyModule
    Frontend -->|API Call| GeminiAPI[Google Gemini API]

    subgraph "Core Logic (Local for Demo)"
        FitnessModule[Fitness: Charts/Planning]
        AeroModule[Aero: CV Analysis/CdA Calc]
        StrategyModule[Strategy: Race Sim]
    end
```

## 2. Database Schema (JSON Representation)
Designed for NoSQL or Document-based storage (e.g., Firestore/MongoDB) or structured JSON in Postgres.

```json
{
  "users": {
    "uid_001": {
      "name": "Rider One",
      "ftp": 280,
      "weightKg": 68.5,
      "heightCm": 178
    }
  },
  "training_logs": [
    {
      "id": "log_101",
      "userId": "uid_001",
      "date": "2023-10-25",
      "menuId": "menu_ftp_01",
      "actualTss": 82,
      "notes": "Felt strong"
    }
  ],
  "aero_sessions": [
    {
      "id": "as_552",
      "userId": "uid_001",
      "videoUrl": "s3://...",
      "estimatedCdA": 0.235,
      "timestamp": 1698220000
    }
  ]
}
```

## 3. Video Analysis Algorithm (Low-Load CPU)
For marker detection we use a simplified color-thresholding algorithm runnable on the UI thread or a worker.

1.  **Input:** Frame buffer from the decoded video stream.
2.  **Process:**
    *   Iterate pixels with stride 4 (RGBA).
    *   Compare (R,G,B) against Target (e.g., Red > 200 & G < 100 & B < 100).
    *   Compute Centroid (Average X, Y of matched pixels).
3.  **Output:** Coordinate (x,y) plotted over time.
4.  **Metric:** Vertical oscillation (smoothness) and horizontal tracking (position consistency).
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_history_descends() {
        let history = weight_history();
        for pair in history.windows(2) {
            assert!(pair[0].date < pair[1].date);
            assert!(pair[0].weight_kg > pair[1].weight_kg);
        }
    }

    #[test]
    fn test_fixture_ids_unique() {
        let menus = training_menus();
        let races = races();

        for (i, menu) in menus.iter().enumerate() {
            assert!(menus.iter().skip(i + 1).all(|m| m.id != menu.id));
        }
        for (i, race) in races.iter().enumerate() {
            assert!(races.iter().skip(i + 1).all(|r| r.id != race.id));
        }
    }
}
