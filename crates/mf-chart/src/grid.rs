//! Reynolds number grids and the standard relative roughness set.

use crate::error::{ChartError, ChartResult};
use mf_core::{Real, linspace};
use serde::{Deserialize, Serialize};

/// Relative roughness values drawn as turbulent curves on a standard Moody chart.
pub const STANDARD_RELATIVE_ROUGHNESS: [Real; 19] = [
    0.0, 1e-5, 5e-5, 1e-4, 2e-4, 4e-4, 6e-4, 8e-4, 1e-3, 2e-3, 4e-3, 6e-3, 8e-3, 0.01, 0.015,
    0.02, 0.03, 0.04, 0.05,
];

/// Evenly spaced samples over `[start, stop]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearRange {
    pub start: Real,
    pub stop: Real,
    pub points: usize,
}

impl LinearRange {
    pub fn new(start: Real, stop: Real, points: usize) -> Self {
        Self {
            start,
            stop,
            points,
        }
    }

    pub fn samples(&self) -> Vec<Real> {
        linspace(self.start, self.stop, self.points)
    }

    fn validate(&self, what: &'static str) -> ChartResult<()> {
        let ok = self.start.is_finite()
            && self.stop.is_finite()
            && self.start > 0.0
            && self.stop > self.start
            && self.points > 0;
        if ok {
            Ok(())
        } else {
            Err(ChartError::InvalidSettings { what })
        }
    }
}

/// Grid and curve-set configuration for a Moody chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    /// Reynolds numbers for the laminar line
    pub laminar: LinearRange,
    /// Leading turbulent samples, from the transition up to the first decade
    pub transition: LinearRange,
    /// First decade exponent `n` of the `[10^n, 10^(n+1)]` spans
    pub first_decade: i32,
    /// Last decade exponent
    pub last_decade: i32,
    /// Linear samples per decade span
    pub points_per_decade: usize,
    /// One turbulent curve per entry
    pub relative_roughness: Vec<Real>,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            laminar: LinearRange::new(500.0, 5000.0, 10),
            transition: LinearRange::new(2300.0, 1e4, 10),
            first_decade: 4,
            last_decade: 8,
            points_per_decade: 100,
            relative_roughness: STANDARD_RELATIVE_ROUGHNESS.to_vec(),
        }
    }
}

impl ChartSettings {
    pub fn validate(&self) -> ChartResult<()> {
        self.laminar.validate("laminar range")?;
        self.transition.validate("transition range")?;
        if self.last_decade < self.first_decade {
            return Err(ChartError::InvalidSettings {
                what: "last_decade must not precede first_decade",
            });
        }
        if self.points_per_decade == 0 {
            return Err(ChartError::InvalidSettings {
                what: "points_per_decade must be positive",
            });
        }
        if self.relative_roughness.is_empty() {
            return Err(ChartError::InvalidSettings {
                what: "relative_roughness must not be empty",
            });
        }
        for &rr in &self.relative_roughness {
            mf_friction::validate::check_roughness(rr)?;
        }
        Ok(())
    }
}

/// Reynolds samples for the laminar and turbulent families.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReynoldsGrid {
    pub laminar: Vec<Real>,
    pub turbulent: Vec<Real>,
}

impl ReynoldsGrid {
    /// Build the grids. Decade spans are concatenated as-is, so a shared
    /// boundary such as `1e5` appears twice.
    pub fn from_settings(settings: &ChartSettings) -> ChartResult<Self> {
        settings.validate()?;

        let laminar = settings.laminar.samples();
        let mut turbulent = settings.transition.samples();
        for n in settings.first_decade..=settings.last_decade {
            let lo = 10f64.powi(n);
            let hi = 10f64.powi(n + 1);
            turbulent.extend(linspace(lo, hi, settings.points_per_decade));
        }

        Ok(Self { laminar, turbulent })
    }

    pub fn laminar_min(&self) -> Real {
        self.laminar.iter().copied().fold(Real::INFINITY, Real::min)
    }

    pub fn turbulent_max(&self) -> Real {
        self.turbulent
            .iter()
            .copied()
            .fold(Real::NEG_INFINITY, Real::max)
    }
}
