//! Data types for training menus, races, and weight history.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Training focus of a menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuType {
    /// Threshold work at or around FTP
    Ftp,
    /// Short maximal-aerobic efforts
    Vo2max,
    /// Long aerobic base riding
    Endurance,
    /// Easy spinning between hard days
    Recovery,
}

impl MenuType {
    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            MenuType::Ftp => "FTP",
            MenuType::Vo2max => "VO2Max",
            MenuType::Endurance => "Endurance",
            MenuType::Recovery => "Recovery",
        }
    }

    /// Get all menu types.
    pub fn all() -> Vec<MenuType> {
        vec![
            MenuType::Ftp,
            MenuType::Vo2max,
            MenuType::Endurance,
            MenuType::Recovery,
        ]
    }
}

impl std::fmt::Display for MenuType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A curated training menu entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingMenu {
    /// Stable identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// Training focus
    pub menu_type: MenuType,
    /// Duration in minutes
    pub duration_min: u16,
    /// Training Stress Score estimate
    pub tss: u16,
    /// Description of the session
    pub description: String,
}

/// Terrain character of a race.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RaceType {
    /// Flat course
    Flat,
    /// Rolling course with punchy climbs
    Hilly,
    /// Sustained climbing
    Mountain,
    /// Time trial
    TT,
}

impl RaceType {
    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            RaceType::Flat => "Flat",
            RaceType::Hilly => "Hilly",
            RaceType::Mountain => "Mountain",
            RaceType::TT => "TT",
        }
    }
}

impl std::fmt::Display for RaceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A target race on the rider's calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceProfile {
    /// Stable identifier
    pub id: String,
    /// Race name
    pub name: String,
    /// Course distance in kilometers
    pub distance_km: f32,
    /// Total elevation gain in meters
    pub elevation_gain_m: u32,
    /// Terrain character
    pub race_type: RaceType,
    /// Course notes
    pub description: String,
}

/// A dated body-weight measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightRecord {
    /// Measurement date
    pub date: NaiveDate,
    /// Weight in kilograms
    pub weight_kg: f32,
}
