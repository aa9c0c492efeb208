//! Domain guards run before any correlation arithmetic.
//!
//! Each check is independent. Callers run them in a fixed order (roughness,
//! Reynolds number, tolerance, iteration budget) so the reported error is
//! reproducible.

use crate::error::{FrictionError, FrictionResult};

/// Conventional laminar/turbulent transition Reynolds number.
pub const TRANSITION_REYNOLDS: f64 = 2300.0;

pub fn check_roughness(relative_roughness: f64) -> FrictionResult<()> {
    // negated comparison also rejects NaN
    if !(relative_roughness >= 0.0) || relative_roughness.is_infinite() {
        return Err(FrictionError::InvalidRoughness {
            value: relative_roughness,
        });
    }
    Ok(())
}

/// Floor shared by the turbulent correlations: `Re >= 2300`.
pub fn check_turbulent_reynolds(reynolds: f64) -> FrictionResult<()> {
    if !(reynolds >= TRANSITION_REYNOLDS) || reynolds.is_infinite() {
        return Err(FrictionError::InvalidReynolds {
            value: reynolds,
            requirement: ">= 2300",
        });
    }
    Ok(())
}

/// Floor for the laminar closed form: `Re > 0`.
pub fn check_laminar_reynolds(reynolds: f64) -> FrictionResult<()> {
    if !(reynolds > 0.0) || reynolds.is_infinite() {
        return Err(FrictionError::InvalidReynolds {
            value: reynolds,
            requirement: "> 0",
        });
    }
    Ok(())
}

pub fn check_tolerance(tolerance: f64) -> FrictionResult<()> {
    if !(tolerance > 0.0) || tolerance.is_infinite() {
        return Err(FrictionError::InvalidTolerance { value: tolerance });
    }
    Ok(())
}

pub fn check_iteration_budget(max_iterations: usize) -> FrictionResult<()> {
    if max_iterations == 0 {
        return Err(FrictionError::InvalidIterationBudget {
            value: max_iterations,
        });
    }
    Ok(())
}

pub fn check_threshold(threshold: f64) -> FrictionResult<()> {
    if !(threshold > 0.0) || threshold.is_infinite() {
        return Err(FrictionError::InvalidThreshold { value: threshold });
    }
    Ok(())
}

/// Guard on outputs: a friction factor must be finite and strictly positive.
pub fn check_factor(value: f64, what: &'static str) -> FrictionResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(FrictionError::NonFinite { what, value })
    }
}
