//! Laminar/turbulent regime dispatch.

use crate::colebrook::{ColebrookConfig, solve_colebrook_with};
use crate::diagnostic::Estimate;
use crate::error::FrictionResult;
use crate::explicit::estimate_laminar;
use crate::settings::FrictionSettings;
use crate::validate::{self, TRANSITION_REYNOLDS};
use tracing::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Flow regime selected by one threshold comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FlowRegime {
    Laminar,
    Turbulent,
}

impl FlowRegime {
    /// `Turbulent` when `reynolds >= threshold`, otherwise `Laminar`.
    ///
    /// NaN classifies as laminar and is then rejected by laminar validation.
    pub fn classify(reynolds: f64, threshold: f64) -> Self {
        if reynolds >= threshold {
            FlowRegime::Turbulent
        } else {
            FlowRegime::Laminar
        }
    }
}

/// Friction factor tagged with the regime that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RegimeEstimate {
    pub regime: FlowRegime,
    pub estimate: Estimate,
}

/// Friction factor for any regime, transition at `Re = 2300`.
pub fn friction_factor(reynolds: f64, relative_roughness: f64) -> FrictionResult<RegimeEstimate> {
    friction_factor_with_threshold(reynolds, relative_roughness, TRANSITION_REYNOLDS)
}

/// Friction factor for any regime with a caller-chosen transition Reynolds number.
///
/// At or above `threshold` the Colebrook solver runs with its defaults; below
/// it the laminar form runs with diagnostics suppressed.
pub fn friction_factor_with_threshold(
    reynolds: f64,
    relative_roughness: f64,
    threshold: f64,
) -> FrictionResult<RegimeEstimate> {
    dispatch(
        reynolds,
        relative_roughness,
        threshold,
        &ColebrookConfig::default(),
    )
}

/// Friction factor for any regime using threshold and solver settings.
pub fn friction_factor_with(
    reynolds: f64,
    relative_roughness: f64,
    settings: &FrictionSettings,
) -> FrictionResult<RegimeEstimate> {
    dispatch(
        reynolds,
        relative_roughness,
        settings.transition_reynolds,
        &settings.colebrook(),
    )
}

fn dispatch(
    reynolds: f64,
    relative_roughness: f64,
    threshold: f64,
    colebrook: &ColebrookConfig,
) -> FrictionResult<RegimeEstimate> {
    validate::check_threshold(threshold)?;

    let regime = FlowRegime::classify(reynolds, threshold);
    trace!(reynolds, threshold, ?regime, "regime dispatch");

    let estimate = match regime {
        FlowRegime::Turbulent => {
            solve_colebrook_with(reynolds, relative_roughness, colebrook)?.into()
        }
        FlowRegime::Laminar => estimate_laminar(reynolds, true)?,
    };

    Ok(RegimeEstimate { regime, estimate })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colebrook::solve_colebrook;
    use crate::error::FrictionError;

    #[test]
    fn laminar_below_threshold() {
        let r = friction_factor(1000.0, 0.001).unwrap();
        assert_eq!(r.regime, FlowRegime::Laminar);
        assert_eq!(r.estimate.factor, 0.064);
        assert!(r.estimate.is_clean());
    }

    #[test]
    fn threshold_is_turbulent_inclusive() {
        let r = friction_factor(2300.0, 0.0).unwrap();
        assert_eq!(r.regime, FlowRegime::Turbulent);
        let cb = solve_colebrook(2300.0, 0.0).unwrap().factor;
        assert_eq!(r.estimate.factor, cb);
        assert!((r.estimate.factor - 64.0 / 2300.0).abs() > 1e-3);
    }

    #[test]
    fn raised_threshold_keeps_laminar_quiet() {
        let r = friction_factor_with_threshold(3000.0, 0.001, 4000.0).unwrap();
        assert_eq!(r.regime, FlowRegime::Laminar);
        assert!(r.estimate.is_clean());
        assert_eq!(r.estimate.factor, 64.0 / 3000.0);
    }

    #[test]
    fn lowered_threshold_propagates_colebrook_floor() {
        let err = friction_factor_with_threshold(2000.0, 0.001, 1500.0).unwrap_err();
        assert!(matches!(err, FrictionError::InvalidReynolds { .. }));
    }

    #[test]
    fn propagates_validation_errors() {
        assert!(matches!(
            friction_factor(1.0e5, -0.1),
            Err(FrictionError::InvalidRoughness { .. })
        ));
        assert!(matches!(
            friction_factor(0.0, 0.0),
            Err(FrictionError::InvalidReynolds { .. })
        ));
        assert!(matches!(
            friction_factor(f64::NAN, 0.0),
            Err(FrictionError::InvalidReynolds { .. })
        ));
        assert!(matches!(
            friction_factor_with_threshold(1.0e5, 0.0, f64::NAN),
            Err(FrictionError::InvalidThreshold { .. })
        ));
    }

    #[test]
    fn settings_drive_solver_budget() {
        let settings = FrictionSettings {
            max_iterations: 1,
            ..FrictionSettings::default()
        };
        let r = friction_factor_with(1.0e5, 1.0e-4, &settings).unwrap();
        assert_eq!(r.regime, FlowRegime::Turbulent);
        assert!(!r.estimate.is_clean());
    }
}
