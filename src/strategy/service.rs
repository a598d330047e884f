//! Strategy request orchestration.
//!
//! Bridges the synchronous egui loop and the async API client: each user
//! action spawns one request on a background runtime, and the finished text
//! comes back over a crossbeam channel that the app drains every frame. The
//! UI keeps a loading flag so only one request is in flight per action.

use std::sync::Arc;

use crossbeam::channel::{unbounded, Receiver, Sender};

use crate::data::RaceProfile;
use crate::storage::config::StrategySettings;

use super::client::GeminiClient;
use super::prompts::{race_strategy_prompt, race_workout_prompt};
use super::types::{AdviceKind, StrategyError};

/// A finished strategy request, ready for display.
///
/// Failures are already collapsed to their fixed user-facing text, so the
/// screen renders `text` verbatim either way.
#[derive(Debug, Clone)]
pub struct AdviceOutcome {
    /// What was requested
    pub kind: AdviceKind,
    /// Generated markdown, or a fixed failure message
    pub text: String,
}

/// Spawns strategy requests and delivers their outcomes to the UI thread.
pub struct StrategyService {
    /// Background runtime for API calls
    runtime: tokio::runtime::Runtime,
    /// Configured client, absent when no API key is available
    client: Option<Arc<GeminiClient>>,
    /// Outcome channel
    tx: Sender<AdviceOutcome>,
    rx: Receiver<AdviceOutcome>,
}

impl StrategyService {
    /// Create a service from settings, reading the API key from the
    /// configured environment variable.
    pub fn new(settings: &StrategySettings) -> Self {
        let client = match std::env::var(&settings.api_key_env) {
            Ok(key) if !key.is_empty() => Some(Arc::new(
                GeminiClient::new(key).with_model(settings.model.clone()),
            )),
            _ => {
                tracing::warn!(
                    "{} not set; strategy generation disabled",
                    settings.api_key_env
                );
                None
            }
        };

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .expect("Failed to create async runtime");

        let (tx, rx) = unbounded();

        Self {
            runtime,
            client,
            tx,
            rx,
        }
    }

    /// Whether a client is configured (an API key was found).
    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    /// Request race strategy and gear advice.
    pub fn request_advice(&self, race: &RaceProfile, user_ftp: u16, user_weight_kg: f32) {
        let prompt = race_strategy_prompt(race, user_ftp, user_weight_kg);
        self.spawn(AdviceKind::Strategy, prompt);
    }

    /// Request a race-specific workout.
    pub fn request_workout(&self, race: &RaceProfile) {
        let prompt = race_workout_prompt(race);
        self.spawn(AdviceKind::Workout, prompt);
    }

    /// Drain one finished outcome, if any.
    pub fn poll(&self) -> Option<AdviceOutcome> {
        self.rx.try_recv().ok()
    }

    fn spawn(&self, kind: AdviceKind, prompt: String) {
        let tx = self.tx.clone();

        let Some(client) = self.client.as_ref().map(Arc::clone) else {
            let _ = tx.send(AdviceOutcome {
                kind,
                text: kind.error_message(&StrategyError::MissingApiKey).to_string(),
            });
            return;
        };

        tracing::info!("Requesting {} text from {}", kind, client.model());

        self.runtime.spawn(async move {
            let text = match client.generate(&prompt).await {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!("Strategy generation failed: {}", e);
                    kind.error_message(&e).to_string()
                }
            };

            let _ = tx.send(AdviceOutcome { kind, text });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;
    use crate::strategy::MISSING_KEY_MESSAGE;

    fn test_settings(api_key_env: &str) -> StrategySettings {
        StrategySettings {
            model: "gemini-2.5-flash".to_string(),
            api_key_env: api_key_env.to_string(),
        }
    }

    #[test]
    fn test_missing_key_yields_fixed_message() {
        let service = StrategyService::new(&test_settings("TTPRO_TEST_UNSET_KEY"));
        assert!(!service.is_configured());

        let races = data::races();
        service.request_advice(&races[0], 265, 68.0);

        let outcome = service.poll().expect("outcome should be immediate");
        assert_eq!(outcome.kind, AdviceKind::Strategy);
        assert_eq!(outcome.text, MISSING_KEY_MESSAGE);
    }

    #[test]
    fn test_poll_empty_when_idle() {
        let service = StrategyService::new(&test_settings("TTPRO_TEST_UNSET_KEY"));
        assert!(service.poll().is_none());
    }
}
