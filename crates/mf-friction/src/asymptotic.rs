//! Fully-rough (Re→∞) transforms between friction factor and relative roughness.
//!
//! With the Reynolds term gone, Colebrook-White reduces to
//! `1/√f = -2·log10(ε/D / 3.7)`, which inverts in closed form. These are axis
//! helpers for a Moody chart, not flow calculations.
//!
//! `ε/D = 0` maps to `f = 0`, the limit of the relation as the wall becomes
//! smooth, and `f = 0` maps back to `ε/D = 0`. Negative or NaN inputs produce
//! NaN. The `checked_*` variants turn those cases into errors instead.
//!
//! In f64 the pair round-trips to within 1e-9 relative error for
//! `0 < ε/D < 3.7` and for `f >= MIN_ROUND_TRIP_FACTOR`. Below that factor
//! `10^(-1/(2√f))` leaves the normal f64 range and underflows to `ε/D = 0`,
//! so the inverse returns the smooth-pipe sentinel `0` instead of `f`.

use crate::error::{FrictionError, FrictionResult};
use crate::validate;

/// Smallest friction factor whose fully-rough roughness is a normal f64.
pub const MIN_ROUND_TRIP_FACTOR: f64 = 2.7e-6;

/// Relative roughness → fully-rough friction factor, `(-2·log10(ε/D / 3.7))^-2`.
pub fn roughness_to_factor(relative_roughness: f64) -> f64 {
    if relative_roughness == 0.0 {
        return 0.0;
    }
    (-2.0 * (relative_roughness / 3.7).log10()).powi(-2)
}

/// Fully-rough friction factor → relative roughness, `3.7·10^(-1/(2√f))`.
pub fn factor_to_roughness(factor: f64) -> f64 {
    if factor == 0.0 {
        return 0.0;
    }
    3.7 * 10f64.powf(-0.5 / factor.sqrt())
}

/// As [`roughness_to_factor`], rejecting `ε/D <= 0` and non-finite results.
pub fn checked_roughness_to_factor(relative_roughness: f64) -> FrictionResult<f64> {
    validate::check_roughness(relative_roughness)?;
    if relative_roughness == 0.0 {
        return Err(FrictionError::UndefinedAtSmoothLimit);
    }
    validate::check_factor(
        roughness_to_factor(relative_roughness),
        "fully-rough friction factor",
    )
}

/// As [`factor_to_roughness`], rejecting `f <= 0` and non-finite input.
pub fn checked_factor_to_roughness(factor: f64) -> FrictionResult<f64> {
    let factor = validate::check_factor(factor, "friction factor")?;
    let rr = factor_to_roughness(factor);
    validate::check_roughness(rr)?;
    Ok(rr)
}
