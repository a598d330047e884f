//! Aerodynamics module.
//!
//! Contains the virtual CdA estimator used by the Aero Lab screen and the
//! simulated motion-analysis overlay drawn over position videos.

pub mod estimator;
pub mod overlay;

pub use estimator::{estimate_cda, format_cda, CdaInputs, ModelInfeasible};
pub use overlay::{OverlayFrame, OverlayGeometry};
