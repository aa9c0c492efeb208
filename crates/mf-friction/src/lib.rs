//! mf-friction: Darcy-Weisbach friction factor correlations.
//!
//! Provides:
//! - Colebrook-White solved by bounded fixed-point iteration
//! - Haaland and laminar (`64/Re`) closed forms
//! - A regime dispatcher choosing laminar or turbulent by threshold Reynolds number
//! - Fully-rough (Re→∞) transforms between friction factor and relative roughness
//! - A single-pipe Darcy-Weisbach pressure drop helper
//!
//! Every estimator validates its inputs before any arithmetic. Bad input is a
//! hard [`FrictionError`]; a degraded-but-usable result carries a soft
//! [`Diagnostic`] inside the returned [`Estimate`].
//!
//! # Example
//!
//! ```
//! use mf_friction::{FlowRegime, friction_factor};
//!
//! let laminar = friction_factor(1000.0, 0.001).unwrap();
//! assert_eq!(laminar.regime, FlowRegime::Laminar);
//! assert!((laminar.estimate.factor - 0.064).abs() < 1e-15);
//!
//! let turbulent = friction_factor(1.0e5, 1.0e-4).unwrap();
//! assert_eq!(turbulent.regime, FlowRegime::Turbulent);
//! assert!(turbulent.estimate.diagnostic.is_none());
//! ```

pub mod asymptotic;
pub mod colebrook;
pub mod correlation;
pub mod diagnostic;
pub mod error;
pub mod explicit;
pub mod pipe;
pub mod regime;
pub mod settings;
pub mod validate;

// Re-exports
pub use asymptotic::{
    MIN_ROUND_TRIP_FACTOR, checked_factor_to_roughness, checked_roughness_to_factor,
    factor_to_roughness, roughness_to_factor,
};
pub use colebrook::{
    ColebrookConfig, ColebrookSolution, colebrook_residual, solve_colebrook, solve_colebrook_with,
};
pub use correlation::{Colebrook, FrictionCorrelation, Haaland, Laminar, RegimeDispatch};
pub use diagnostic::{Diagnostic, Estimate};
pub use error::{FrictionError, FrictionResult};
pub use explicit::{HAALAND_MIN_RELIABLE_REYNOLDS, estimate_haaland, estimate_laminar};
pub use pipe::{PipeFlow, PipeSection};
pub use regime::{
    FlowRegime, RegimeEstimate, friction_factor, friction_factor_with,
    friction_factor_with_threshold,
};
pub use settings::{FrictionSettings, Method};
pub use validate::TRANSITION_REYNOLDS;
