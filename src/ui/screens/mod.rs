//! UI screens for the application.

pub mod aero;
pub mod docs;
pub mod fitness;
pub mod strategy;

pub use aero::AeroScreen;
pub use docs::DocsScreen;
pub use fitness::FitnessScreen;
pub use strategy::{StrategyAction, StrategyScreen};

/// View navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Fitness and conditioning view
    #[default]
    Fitness,
    /// Aero lab view
    Aero,
    /// Race strategy view
    Strategy,
    /// Developer documentation view
    Docs,
}

impl View {
    /// Get the sidebar label for this view.
    pub fn label(&self) -> &'static str {
        match self {
            View::Fitness => "Fitness & Body",
            View::Aero => "Aero Lab",
            View::Strategy => "Race Strategy",
            View::Docs => "Dev Documentation",
        }
    }

    /// All views in sidebar order.
    pub fn all() -> [View; 4] {
        [View::Fitness, View::Aero, View::Strategy, View::Docs]
    }
}
