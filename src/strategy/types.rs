//! Shared strategy types and error definitions.

use thiserror::Error;

/// Error types for strategy generation.
#[derive(Debug, Error)]
pub enum StrategyError {
    /// No API key configured in the environment
    #[error("API key not found in environment")]
    MissingApiKey,

    /// Remote API error
    #[error("Gemini API error: {0}")]
    ApiError(String),

    /// The API answered but produced no text
    #[error("API returned no text")]
    EmptyResponse,

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Which kind of text the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdviceKind {
    /// Pacing, gear, and nutrition strategy for a race
    Strategy,
    /// Race-specific interval workout
    Workout,
}

impl AdviceKind {
    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            AdviceKind::Strategy => "Gear & Strategy",
            AdviceKind::Workout => "Race-Spec Workout",
        }
    }

    /// Fixed user-facing text when the remote call fails.
    pub fn failure_message(&self) -> &'static str {
        match self {
            AdviceKind::Strategy => {
                "Failed to generate advice. Please check your connection or API key."
            }
            AdviceKind::Workout => "Failed to generate workout.",
        }
    }

    /// Fixed user-facing text when the API answers with no content.
    pub fn empty_message(&self) -> &'static str {
        match self {
            AdviceKind::Strategy => "No advice generated.",
            AdviceKind::Workout => "No workout generated.",
        }
    }

    /// Collapse an error to its fixed user-facing text.
    pub fn error_message(&self, error: &StrategyError) -> &'static str {
        match error {
            StrategyError::MissingApiKey => MISSING_KEY_MESSAGE,
            StrategyError::EmptyResponse => self.empty_message(),
            StrategyError::ApiError(_) | StrategyError::SerializationError(_) => {
                self.failure_message()
            }
        }
    }
}

impl std::fmt::Display for AdviceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Fixed user-facing text when no API key is configured.
pub const MISSING_KEY_MESSAGE: &str = "Error: API_KEY not found in environment.";
