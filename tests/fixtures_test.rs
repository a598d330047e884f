//! Unit tests for the mock data fixtures.

use ttpro::data::{self, MenuType, RaceType};

#[test]
fn test_app_name() {
    assert_eq!(data::APP_NAME, "TT-Pro");
}

#[test]
fn test_training_menus_present() {
    let menus = data::training_menus();
    assert!(!menus.is_empty());

    for menu in &menus {
        assert!(!menu.id.is_empty());
        assert!(!menu.title.is_empty());
        assert!(!menu.description.is_empty());
        assert!(menu.duration_min > 0);
        assert!(menu.tss > 0);
    }
}

#[test]
fn test_training_menu_ids_unique() {
    let menus = data::training_menus();
    for (i, menu) in menus.iter().enumerate() {
        assert!(
            menus.iter().skip(i + 1).all(|m| m.id != menu.id),
            "duplicate menu id {}",
            menu.id
        );
    }
}

#[test]
fn test_training_menu_types_are_known() {
    let valid = MenuType::all();
    for menu in data::training_menus() {
        assert!(valid.contains(&menu.menu_type));
    }
}

#[test]
fn test_races_present() {
    let races = data::races();
    assert!(!races.is_empty());

    for race in &races {
        assert!(!race.id.is_empty());
        assert!(!race.name.is_empty());
        assert!(!race.description.is_empty());
        assert!(race.distance_km > 0.0);
    }
}

#[test]
fn test_race_ids_unique() {
    let races = data::races();
    for (i, race) in races.iter().enumerate() {
        assert!(
            races.iter().skip(i + 1).all(|r| r.id != race.id),
            "duplicate race id {}",
            race.id
        );
    }
}

#[test]
fn test_race_fixture_details() {
    let races = data::races();

    let fuji = races.iter().find(|r| r.id == "r1").unwrap();
    assert_eq!(fuji.name, "Mt. Fuji Hillclimb");
    assert_eq!(fuji.race_type, RaceType::Mountain);
    assert_eq!(fuji.elevation_gain_m, 1255);

    let tt = races.iter().find(|r| r.id == "r2").unwrap();
    assert_eq!(tt.race_type, RaceType::TT);
    assert_eq!(tt.distance_km, 40.0);
}

#[test]
fn test_weight_history_realistic_and_sorted() {
    let history = data::weight_history();
    assert!(!history.is_empty());

    for record in &history {
        assert!(record.weight_kg > 40.0 && record.weight_kg < 150.0);
    }

    for pair in history.windows(2) {
        assert!(pair[0].date < pair[1].date, "records must be oldest first");
    }

    let latest = history.last().unwrap();
    assert_eq!(latest.weight_kg, 67.5);
}

#[test]
fn test_documentation_has_content() {
    assert!(data::DOCUMENTATION.contains("TT-Pro Architecture"));
    assert!(data::DOCUMENTATION.contains("Database Schema"));
}
