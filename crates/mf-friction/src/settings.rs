//! Solver settings and correlation selection.

use crate::colebrook::{ColebrookConfig, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};
use crate::error::FrictionResult;
use crate::validate::{self, TRANSITION_REYNOLDS};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tunables shared by the Colebrook solver and the regime dispatcher.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FrictionSettings {
    /// Colebrook convergence tolerance on `1/√f`
    pub tolerance: f64,
    /// Colebrook iteration ceiling
    pub max_iterations: usize,
    /// Laminar/turbulent transition Reynolds number
    pub transition_reynolds: f64,
}

impl Default for FrictionSettings {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            transition_reynolds: TRANSITION_REYNOLDS,
        }
    }
}

impl FrictionSettings {
    pub fn validate(&self) -> FrictionResult<()> {
        validate::check_tolerance(self.tolerance)?;
        validate::check_iteration_budget(self.max_iterations)?;
        validate::check_threshold(self.transition_reynolds)?;
        Ok(())
    }

    pub fn colebrook(&self) -> ColebrookConfig {
        ColebrookConfig {
            tolerance: self.tolerance,
            max_iterations: self.max_iterations,
        }
    }
}

/// Which correlation to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Method {
    Colebrook,
    Haaland,
    Laminar,
    /// Pick laminar or Colebrook by the transition Reynolds number
    #[default]
    Auto,
}

impl Method {
    pub const ALL: [Method; 4] = [
        Method::Colebrook,
        Method::Haaland,
        Method::Laminar,
        Method::Auto,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Method::Colebrook => "colebrook",
            Method::Haaland => "haaland",
            Method::Laminar => "laminar",
            Method::Auto => "auto",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!("unknown method '{s}' (expected colebrook, haaland, laminar or auto)")
            })
    }
}
