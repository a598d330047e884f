//! Race strategy module.
//!
//! AI-backed race strategy and workout text: prompt construction, the Gemini
//! REST client, and the async service that feeds results back to the UI.

pub mod client;
pub mod prompts;
pub mod service;
pub mod types;

pub use client::GeminiClient;
pub use prompts::{race_strategy_prompt, race_workout_prompt};
pub use service::{AdviceOutcome, StrategyService};
pub use types::{AdviceKind, StrategyError, MISSING_KEY_MESSAGE};
