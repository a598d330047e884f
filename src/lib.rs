//! TT-Pro - Cycling Performance Dashboard
//!
//! A desktop dashboard for time-trial preparation: fitness and conditioning
//! overview, a virtual CdA estimator with simulated motion analysis, and
//! AI-generated race strategy.

pub mod aero;
pub mod data;
pub mod storage;
pub mod strategy;
pub mod ui;

// Re-export commonly used types
pub use aero::{estimate_cda, CdaInputs};
pub use storage::config::UserProfile;
pub use strategy::StrategyService;
