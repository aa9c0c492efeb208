//! Closed-form friction factor estimators.

use crate::diagnostic::{Diagnostic, Estimate};
use crate::error::{FrictionError, FrictionResult};
use crate::validate::{self, TRANSITION_REYNOLDS};

/// Below this Reynolds number the Haaland fit is flagged as unreliable.
pub const HAALAND_MIN_RELIABLE_REYNOLDS: f64 = 3000.0;

/// Haaland explicit approximation of Colebrook-White.
///
/// `f = (-1.8·log10((ε/D / 3.7)^1.11 + 6.9/Re))^-2`, valid for `Re >= 2300`.
/// Results for `Re < 3000` carry [`Diagnostic::HaalandLowReynolds`]. When the
/// log argument reaches 1 (`ε/D` near 3.7 and above) there is no positive
/// `1/√f` and the call fails with `NonFinite`.
pub fn estimate_haaland(reynolds: f64, relative_roughness: f64) -> FrictionResult<Estimate> {
    validate::check_roughness(relative_roughness)?;
    validate::check_turbulent_reynolds(reynolds)?;

    let inner = (relative_roughness / 3.7).powf(1.11) + 6.9 / reynolds;
    let inv_sqrt = -1.8 * inner.log10();
    if inv_sqrt <= 0.0 {
        return Err(FrictionError::NonFinite {
            what: "Haaland 1/sqrt(f)",
            value: inv_sqrt,
        });
    }
    let factor = validate::check_factor(inv_sqrt.powi(-2), "Haaland friction factor")?;

    if reynolds < HAALAND_MIN_RELIABLE_REYNOLDS {
        Ok(Estimate::flagged(
            factor,
            Diagnostic::HaalandLowReynolds { reynolds },
        ))
    } else {
        Ok(Estimate::clean(factor))
    }
}

/// Laminar friction factor `f = 64/Re` for `Re > 0`.
///
/// Above the transition Reynolds number the result carries
/// [`Diagnostic::LaminarAboveTransition`] unless `suppress_diagnostics` is set.
pub fn estimate_laminar(reynolds: f64, suppress_diagnostics: bool) -> FrictionResult<Estimate> {
    validate::check_laminar_reynolds(reynolds)?;

    let factor = validate::check_factor(64.0 / reynolds, "laminar friction factor")?;

    if !suppress_diagnostics && reynolds > TRANSITION_REYNOLDS {
        Ok(Estimate::flagged(
            factor,
            Diagnostic::LaminarAboveTransition { reynolds },
        ))
    } else {
        Ok(Estimate::clean(factor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn haaland_reference_point() {
        let est = estimate_haaland(1.0e5, 1.0e-4).unwrap();
        assert!(est.is_clean());
        assert!((est.factor - 0.0185).abs() < 5e-4, "f = {}", est.factor);
    }

    #[test]
    fn haaland_smooth_pipe() {
        let est = estimate_haaland(1.0e6, 0.0).unwrap();
        assert!(est.factor > 0.01 && est.factor < 0.013);
    }

    #[test]
    fn haaland_low_reynolds_is_flagged() {
        let est = estimate_haaland(2500.0, 0.001).unwrap();
        assert!(est.factor > 0.0);
        assert_eq!(
            est.diagnostic,
            Some(Diagnostic::HaalandLowReynolds { reynolds: 2500.0 })
        );
        assert!(estimate_haaland(3000.0, 0.001).unwrap().is_clean());
    }

    #[test]
    fn haaland_validation() {
        assert!(matches!(
            estimate_haaland(1.0e5, -0.01),
            Err(FrictionError::InvalidRoughness { .. })
        ));
        assert!(matches!(
            estimate_haaland(2000.0, 0.01),
            Err(FrictionError::InvalidReynolds { .. })
        ));
    }

    #[test]
    fn haaland_rejects_roughness_beyond_fully_rough_limit() {
        assert!(matches!(
            estimate_haaland(1.0e5, 10.0),
            Err(FrictionError::NonFinite { .. })
        ));
        assert!(estimate_haaland(1.0e5, 3.0).is_ok());
    }

    #[test]
    fn laminar_closed_form() {
        let est = estimate_laminar(1000.0, false).unwrap();
        assert_eq!(est.factor, 64.0 / 1000.0);
        assert!(est.is_clean());
    }

    #[test]
    fn laminar_above_transition() {
        let flagged = estimate_laminar(5000.0, false).unwrap();
        assert_eq!(
            flagged.diagnostic,
            Some(Diagnostic::LaminarAboveTransition { reynolds: 5000.0 })
        );

        let quiet = estimate_laminar(5000.0, true).unwrap();
        assert!(quiet.is_clean());
        assert_eq!(quiet.factor, flagged.factor);

        // threshold itself is not flagged
        assert!(estimate_laminar(2300.0, false).unwrap().is_clean());
    }

    #[test]
    fn laminar_rejects_non_positive() {
        assert!(matches!(
            estimate_laminar(0.0, true),
            Err(FrictionError::InvalidReynolds {
                requirement: "> 0",
                ..
            })
        ));
        assert!(estimate_laminar(-10.0, false).is_err());
    }
}
