//! Colebrook-White correlation solved by fixed-point iteration.
//!
//! The implicit relation
//!
//! ```text
//! 1/√f = -2·log10(ε/D / 3.7 + 2.51 / (Re·√f))
//! ```
//!
//! is iterated on `x = 1/√f` starting from `x = 1`. The iteration count is a
//! hard ceiling: when it runs out the last iterate is returned together with
//! [`Diagnostic::IterationBudgetExhausted`].

use crate::diagnostic::{Diagnostic, Estimate};
use crate::error::{FrictionError, FrictionResult};
use crate::validate;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default convergence tolerance on successive `1/√f` iterates.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Default iteration ceiling.
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// Colebrook solver configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColebrookConfig {
    /// Stop once `|x_next - x| <= tolerance`
    pub tolerance: f64,
    /// Maximum iterations
    pub max_iterations: usize,
}

impl Default for ColebrookConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// Colebrook iteration result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColebrookSolution {
    /// Friction factor `f = (1/x)^2`
    pub factor: f64,
    /// Number of iterations performed
    pub iterations: usize,
    /// Last step size `|x_next - x|`
    pub last_delta: f64,
    /// Set when the budget ran out before tolerance was met
    pub diagnostic: Option<Diagnostic>,
}

impl ColebrookSolution {
    pub fn converged(&self) -> bool {
        self.diagnostic.is_none()
    }
}

impl From<ColebrookSolution> for Estimate {
    fn from(s: ColebrookSolution) -> Self {
        Estimate {
            factor: s.factor,
            diagnostic: s.diagnostic,
        }
    }
}

/// Solve Colebrook-White with the default tolerance and iteration budget.
pub fn solve_colebrook(
    reynolds: f64,
    relative_roughness: f64,
) -> FrictionResult<ColebrookSolution> {
    solve_colebrook_with(reynolds, relative_roughness, &ColebrookConfig::default())
}

/// Solve Colebrook-White with an explicit configuration.
///
/// # Errors
/// `InvalidRoughness`, `InvalidReynolds` (Re < 2300), `InvalidTolerance` and
/// `InvalidIterationBudget`, checked in that order before iterating.
/// `NonFinite` if the iterate leaves the positive half-line, which happens
/// for `ε/D` at or above about 3.7 where the equation has no physical root.
pub fn solve_colebrook_with(
    reynolds: f64,
    relative_roughness: f64,
    config: &ColebrookConfig,
) -> FrictionResult<ColebrookSolution> {
    validate::check_roughness(relative_roughness)?;
    validate::check_turbulent_reynolds(reynolds)?;
    validate::check_tolerance(config.tolerance)?;
    validate::check_iteration_budget(config.max_iterations)?;

    let a = relative_roughness / 3.7;
    let b = 2.51 / reynolds;

    let mut x = 1.0;
    let mut delta = f64::INFINITY;
    let mut iterations = 0;

    while iterations < config.max_iterations {
        let next = -2.0 * (a + b * x).log10();
        if !next.is_finite() {
            return Err(FrictionError::NonFinite {
                what: "Colebrook iterate",
                value: next,
            });
        }
        delta = (next - x).abs();
        x = next;
        iterations += 1;
        if delta <= config.tolerance {
            break;
        }
    }

    if x <= 0.0 {
        return Err(FrictionError::NonFinite {
            what: "Colebrook iterate",
            value: x,
        });
    }
    let factor = validate::check_factor((1.0 / x).powi(2), "Colebrook friction factor")?;
    let converged = delta <= config.tolerance;

    debug!(
        reynolds,
        relative_roughness,
        iterations,
        delta,
        converged,
        factor,
        "colebrook solve"
    );

    let diagnostic = (!converged).then_some(Diagnostic::IterationBudgetExhausted {
        iterations,
        last_delta: delta,
    });

    Ok(ColebrookSolution {
        factor,
        iterations,
        last_delta: delta,
        diagnostic,
    })
}

/// Residual of the implicit equation in `1/√f` form for a candidate `factor`.
///
/// Zero at an exact solution. Returns NaN for a non-positive `factor`.
pub fn colebrook_residual(reynolds: f64, relative_roughness: f64, factor: f64) -> f64 {
    let x = 1.0 / factor.sqrt();
    x + 2.0 * (relative_roughness / 3.7 + 2.51 / reynolds * x).log10()
}
