//! Unit tests for strategy prompt construction and failure mapping.

use ttpro::data;
use ttpro::storage::config::StrategySettings;
use ttpro::strategy::{
    race_strategy_prompt, race_workout_prompt, AdviceKind, StrategyError, StrategyService,
    MISSING_KEY_MESSAGE,
};

#[test]
fn test_strategy_prompt_structure() {
    let races = data::races();
    let prompt = race_strategy_prompt(&races[0], 265, 68.0);

    // Coach persona and the full rider/race context must be present
    assert!(prompt.contains("Professional Cycling Coach"));
    assert!(prompt.contains("FTP: 265 W"));
    assert!(prompt.contains("Weight: 68 kg"));
    assert!(prompt.contains("Name: Mt. Fuji Hillclimb"));
    assert!(prompt.contains("Distance: 24 km"));
    assert!(prompt.contains("Elevation Gain: 1255 m"));

    // Requested output sections
    assert!(prompt.contains("Pacing Strategy"));
    assert!(prompt.contains("Gear Recommendation"));
    assert!(prompt.contains("Nutrition"));
    assert!(prompt.contains("Aero Focus"));
    assert!(prompt.contains("under 300 words"));
}

#[test]
fn test_workout_prompt_structure() {
    let races = data::races();
    let prompt = race_workout_prompt(&races[2]);

    assert!(prompt.contains("Suzuka Enduro"));
    assert!(prompt.contains("(Hilly)"));
    assert!(prompt.contains("Warmup"));
    assert!(prompt.contains("Main Set"));
    assert!(prompt.contains("Cooldown"));
    assert!(prompt.contains("Why this works"));
}

#[test]
fn test_prompts_differ_per_race() {
    let races = data::races();
    let a = race_strategy_prompt(&races[0], 265, 68.0);
    let b = race_strategy_prompt(&races[1], 265, 68.0);
    assert_ne!(a, b);
}

#[test]
fn test_failure_messages_are_fixed_strings() {
    assert_eq!(
        AdviceKind::Strategy.failure_message(),
        "Failed to generate advice. Please check your connection or API key."
    );
    assert_eq!(
        AdviceKind::Workout.failure_message(),
        "Failed to generate workout."
    );
    assert_eq!(AdviceKind::Strategy.empty_message(), "No advice generated.");
    assert_eq!(AdviceKind::Workout.empty_message(), "No workout generated.");
}

#[test]
fn test_errors_collapse_to_fixed_strings() {
    assert_eq!(
        AdviceKind::Strategy.error_message(&StrategyError::MissingApiKey),
        MISSING_KEY_MESSAGE
    );
    assert_eq!(
        AdviceKind::Strategy.error_message(&StrategyError::EmptyResponse),
        "No advice generated."
    );
    assert_eq!(
        AdviceKind::Workout.error_message(&StrategyError::EmptyResponse),
        "No workout generated."
    );
    assert_eq!(
        AdviceKind::Strategy.error_message(&StrategyError::ApiError("status 500".to_string())),
        AdviceKind::Strategy.failure_message()
    );
    assert_eq!(
        AdviceKind::Workout.error_message(&StrategyError::SerializationError(
            "bad payload".to_string()
        )),
        "Failed to generate workout."
    );
}

#[test]
fn test_service_without_key_reports_missing_key() {
    let settings = StrategySettings {
        model: "gemini-2.5-flash".to_string(),
        api_key_env: "TTPRO_STRATEGY_TEST_NO_SUCH_VAR".to_string(),
    };
    let service = StrategyService::new(&settings);
    assert!(!service.is_configured());

    let races = data::races();
    service.request_workout(&races[0]);

    let outcome = service.poll().expect("missing-key outcome is synchronous");
    assert_eq!(outcome.kind, AdviceKind::Workout);
    assert_eq!(outcome.text, MISSING_KEY_MESSAGE);
    assert!(service.poll().is_none());
}
