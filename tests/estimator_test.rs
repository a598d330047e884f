//! Unit tests for the virtual CdA estimator.
//!
//! Exercises the steady-state power-balance model: formula fidelity,
//! feasibility gating, purity, and the speed monotonicity sanity check.

use ttpro::aero::{estimate_cda, format_cda, CdaInputs, ModelInfeasible};

const GRAVITY: f64 = 9.81;
const SYSTEM_MASS_KG: f64 = 80.0;

/// Reference implementation of the closed-form inversion.
fn expected_cda(power: f64, speed_kmh: f64, crr: f64, air_density: f64) -> f64 {
    let v = speed_kmh / 3.6;
    let aero_power = power - crr * SYSTEM_MASS_KG * GRAVITY * v;
    aero_power / (0.5 * air_density * v.powi(3))
}

fn inputs(power: f64, speed_kmh: f64, crr: f64, air_density: f64) -> CdaInputs {
    CdaInputs {
        power_watts: power,
        speed_kmh,
        crr,
        air_density_kg_m3: air_density,
    }
}

#[test]
fn test_matches_formula_within_tolerance() {
    let cases = [
        (300.0, 40.0, 0.004, 1.225),
        (250.0, 35.0, 0.0045, 1.2),
        (180.0, 28.0, 0.005, 1.15),
        (420.0, 52.0, 0.0032, 1.25),
        (95.0, 22.0, 0.004, 1.225),
    ];

    for (power, speed, crr, rho) in cases {
        let cda = estimate_cda(&inputs(power, speed, crr, rho)).unwrap();
        let expected = expected_cda(power, speed, crr, rho);

        assert!(cda.is_finite() && cda > 0.0);
        assert!(
            ((cda - expected) / expected).abs() < 1e-9,
            "power={power} speed={speed}: got {cda}, expected {expected}"
        );
    }
}

#[test]
fn test_scenario_typical_tt_effort() {
    // 300W at 40km/h: rolling ~34.9W, aero ~265.1W, CdA ~0.315
    let result = estimate_cda(&inputs(300.0, 40.0, 0.004, 1.225)).unwrap();
    assert!((result - 0.315).abs() < 0.001);
}

#[test]
fn test_scenario_barely_feasible() {
    // 50W at 40km/h leaves ~15.1W of aero power, a tiny but valid CdA
    let result = estimate_cda(&inputs(50.0, 40.0, 0.004, 1.225)).unwrap();
    assert!((result - 0.018).abs() < 0.001);
}

#[test]
fn test_scenario_rolling_resistance_dominates() {
    // 20W at 40km/h: rolling resistance alone consumes ~34.9W
    assert_eq!(
        estimate_cda(&inputs(20.0, 40.0, 0.004, 1.225)),
        Err(ModelInfeasible)
    );
}

#[test]
fn test_scenario_zero_speed() {
    assert_eq!(
        estimate_cda(&inputs(300.0, 0.0, 0.004, 1.225)),
        Err(ModelInfeasible)
    );
}

#[test]
fn test_negative_speed_is_infeasible() {
    assert_eq!(
        estimate_cda(&inputs(300.0, -10.0, 0.004, 1.225)),
        Err(ModelInfeasible)
    );
}

#[test]
fn test_zero_and_negative_power_are_infeasible() {
    assert_eq!(
        estimate_cda(&inputs(0.0, 40.0, 0.004, 1.225)),
        Err(ModelInfeasible)
    );
    assert_eq!(
        estimate_cda(&inputs(-150.0, 40.0, 0.004, 1.225)),
        Err(ModelInfeasible)
    );
}

#[test]
fn test_exact_balance_is_infeasible() {
    // Power exactly equal to rolling resistance leaves zero aero power
    let speed_kmh = 36.0;
    let rolling = 0.004 * SYSTEM_MASS_KG * GRAVITY * (speed_kmh / 3.6);

    assert_eq!(
        estimate_cda(&inputs(rolling, speed_kmh, 0.004, 1.225)),
        Err(ModelInfeasible)
    );
}

#[test]
fn test_idempotent() {
    let i = inputs(287.5, 41.3, 0.0041, 1.19);
    assert_eq!(estimate_cda(&i), estimate_cda(&i));
}

#[test]
fn test_cda_decreases_with_speed() {
    // With fixed power, faster target speeds leave less drag area to account
    // for the same output, so CdA must fall strictly.
    let mut previous = f64::INFINITY;

    for step in 0..40 {
        let speed_kmh = 25.0 + step as f64 * 0.5;
        let cda = estimate_cda(&inputs(300.0, speed_kmh, 0.004, 1.225)).unwrap();
        assert!(
            cda < previous,
            "CdA should fall as speed rises: {cda} at {speed_kmh} km/h"
        );
        previous = cda;
    }
}

#[test]
fn test_no_nan_leaks_to_display() {
    let weird = [
        inputs(300.0, 0.0, 0.004, 1.225),
        inputs(f64::NAN, 40.0, 0.004, 1.225),
        inputs(300.0, 40.0, f64::NAN, 1.225),
    ];

    for i in weird {
        let rendered = format_cda(&estimate_cda(&i));
        assert!(
            !rendered.contains("NaN"),
            "display must never show NaN, got {rendered}"
        );
    }
}

#[test]
fn test_display_formatting() {
    assert_eq!(format_cda(&Err(ModelInfeasible)), "Invalid Params");
    assert_eq!(format_cda(&Ok(0.2349)), "0.235");
    assert_eq!(format_cda(&Ok(0.2)), "0.200");
}
