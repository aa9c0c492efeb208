//! Curve families of the Moody chart.

use crate::axis::{AxisTick, secondary_axis_ticks};
use crate::error::ChartResult;
use crate::grid::{ChartSettings, ReynoldsGrid};
use mf_core::Real;
use mf_friction::{
    ColebrookConfig, FlowRegime, FrictionSettings, estimate_laminar, solve_colebrook_with,
};
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    pub reynolds: Real,
    pub friction_factor: Real,
}

/// One tabulated line of the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Curve {
    pub label: String,
    pub regime: FlowRegime,
    /// `None` for the laminar line
    pub relative_roughness: Option<Real>,
    pub points: Vec<CurvePoint>,
    /// Points whose solve hit the iteration budget
    pub flagged_points: usize,
}

/// Full chart data set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodyChart {
    pub grid: ReynoldsGrid,
    pub laminar: Curve,
    /// Largest roughness first
    pub turbulent: Vec<Curve>,
    pub secondary_axis: Vec<AxisTick>,
}

pub fn laminar_curve(reynolds: &[Real]) -> ChartResult<Curve> {
    let points = reynolds
        .iter()
        .map(|&re| -> ChartResult<CurvePoint> {
            let est = estimate_laminar(re, true)?;
            Ok(CurvePoint {
                reynolds: re,
                friction_factor: est.factor,
            })
        })
        .collect::<ChartResult<Vec<_>>>()?;

    Ok(Curve {
        label: "laminar (64/Re)".to_string(),
        regime: FlowRegime::Laminar,
        relative_roughness: None,
        points,
        flagged_points: 0,
    })
}

pub fn colebrook_curve(
    reynolds: &[Real],
    relative_roughness: Real,
    config: &ColebrookConfig,
) -> ChartResult<Curve> {
    let mut flagged_points = 0;
    let mut points = Vec::with_capacity(reynolds.len());
    for &re in reynolds {
        let sol = solve_colebrook_with(re, relative_roughness, config)?;
        if !sol.converged() {
            flagged_points += 1;
        }
        points.push(CurvePoint {
            reynolds: re,
            friction_factor: sol.factor,
        });
    }

    Ok(Curve {
        label: format!("e/D = {relative_roughness}"),
        regime: FlowRegime::Turbulent,
        relative_roughness: Some(relative_roughness),
        points,
        flagged_points,
    })
}

/// Tabulate the laminar line, every roughness curve and the secondary axis.
///
/// Turbulent curves are solved in parallel, one task per roughness.
pub fn tabulate(chart: &ChartSettings, friction: &FrictionSettings) -> ChartResult<MoodyChart> {
    friction.validate()?;
    let grid = ReynoldsGrid::from_settings(chart)?;
    let config = friction.colebrook();

    let laminar = laminar_curve(&grid.laminar)?;
    let turbulent = chart
        .relative_roughness
        .par_iter()
        .rev()
        .map(|&rr| colebrook_curve(&grid.turbulent, rr, &config))
        .collect::<ChartResult<Vec<_>>>()?;

    let flagged: usize = turbulent.iter().map(|c| c.flagged_points).sum();
    debug!(
        curves = turbulent.len(),
        points = grid.turbulent.len(),
        flagged,
        "tabulated moody chart"
    );

    let secondary_axis = secondary_axis_ticks(&chart.relative_roughness);

    Ok(MoodyChart {
        grid,
        laminar,
        turbulent,
        secondary_axis,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn laminar_curve_is_64_over_re() {
        let curve = laminar_curve(&[500.0, 1000.0, 2000.0]).unwrap();
        assert_eq!(curve.regime, FlowRegime::Laminar);
        assert_eq!(curve.points[1].friction_factor, 0.064);
    }

    #[test]
    fn colebrook_curve_decreases_with_reynolds() {
        let curve =
            colebrook_curve(&[1e4, 1e5, 1e6], 0.0, &ColebrookConfig::default()).unwrap();
        assert_eq!(curve.flagged_points, 0);
        assert!(
            curve
                .points
                .windows(2)
                .all(|w| w[1].friction_factor < w[0].friction_factor)
        );
    }

    #[test]
    fn colebrook_curve_counts_flagged_points() {
        let config = ColebrookConfig {
            tolerance: 1e-6,
            max_iterations: 1,
        };
        let curve = colebrook_curve(&[1e4, 1e5], 0.001, &config).unwrap();
        assert_eq!(curve.flagged_points, 2);
    }

    #[test]
    fn colebrook_curve_rejects_laminar_samples() {
        assert!(colebrook_curve(&[1000.0], 0.0, &ColebrookConfig::default()).is_err());
    }
}
