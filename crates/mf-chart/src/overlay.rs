//! Highlight for a single operating point on the chart.

use crate::curves::{Curve, CurvePoint, colebrook_curve, laminar_curve};
use crate::error::ChartResult;
use crate::grid::ReynoldsGrid;
use mf_core::Real;
use mf_friction::{
    Diagnostic, FlowRegime, FrictionSettings, friction_factor_with, solve_colebrook_with,
};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub from: CurvePoint,
    pub to: CurvePoint,
}

/// Marker, highlighted curve and dashed guides for one `(Re, ε/D)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperatingPointOverlay {
    pub point: CurvePoint,
    pub relative_roughness: Real,
    pub regime: FlowRegime,
    pub diagnostic: Option<Diagnostic>,
    /// Laminar line, or the Colebrook curve through the point's roughness
    pub curve: Curve,
    /// From the smallest laminar Reynolds number across to the point
    pub horizontal_guide: Segment,
    /// From the smooth-pipe value at the largest turbulent Reynolds number up to the point
    pub vertical_guide: Segment,
}

pub fn operating_point(
    reynolds: Real,
    relative_roughness: Real,
    grid: &ReynoldsGrid,
    settings: &FrictionSettings,
) -> ChartResult<OperatingPointOverlay> {
    let result = friction_factor_with(reynolds, relative_roughness, settings)?;
    let f = result.estimate.factor;
    let point = CurvePoint {
        reynolds,
        friction_factor: f,
    };

    let config = settings.colebrook();
    let curve = match result.regime {
        FlowRegime::Laminar => laminar_curve(&grid.laminar)?,
        FlowRegime::Turbulent => colebrook_curve(&grid.turbulent, relative_roughness, &config)?,
    };

    let horizontal_guide = Segment {
        from: CurvePoint {
            reynolds: grid.laminar_min(),
            friction_factor: f,
        },
        to: point,
    };

    let floor = solve_colebrook_with(grid.turbulent_max(), 0.0, &config)?.factor;
    let vertical_guide = Segment {
        from: CurvePoint {
            reynolds,
            friction_factor: floor,
        },
        to: point,
    };

    Ok(OperatingPointOverlay {
        point,
        relative_roughness,
        regime: result.regime,
        diagnostic: result.estimate.diagnostic,
        curve,
        horizontal_guide,
        vertical_guide,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::ChartSettings;

    fn grid() -> ReynoldsGrid {
        ReynoldsGrid::from_settings(&ChartSettings::default()).unwrap()
    }

    #[test]
    fn laminar_point_highlights_laminar_line() {
        let overlay =
            operating_point(1000.0, 0.001, &grid(), &FrictionSettings::default()).unwrap();
        assert_eq!(overlay.regime, FlowRegime::Laminar);
        assert_eq!(overlay.point.friction_factor, 0.064);
        assert_eq!(overlay.curve.regime, FlowRegime::Laminar);
        assert_eq!(overlay.horizontal_guide.from.reynolds, 500.0);
        assert_eq!(overlay.horizontal_guide.from.friction_factor, 0.064);
    }

    #[test]
    fn turbulent_point_lies_on_its_curve() {
        let g = grid();
        let overlay = operating_point(1e5, 1e-4, &g, &FrictionSettings::default()).unwrap();
        assert_eq!(overlay.regime, FlowRegime::Turbulent);
        assert_eq!(overlay.curve.relative_roughness, Some(1e-4));
        assert_eq!(overlay.curve.points.len(), g.turbulent.len());

        let on_curve = overlay
            .curve
            .points
            .iter()
            .find(|p| p.reynolds == 1e5)
            .unwrap();
        assert_eq!(on_curve.friction_factor, overlay.point.friction_factor);
    }

    #[test]
    fn vertical_guide_starts_below_point() {
        let overlay = operating_point(5e4, 0.01, &grid(), &FrictionSettings::default()).unwrap();
        let guide = overlay.vertical_guide;
        assert_eq!(guide.from.reynolds, 5e4);
        assert!(guide.from.friction_factor < guide.to.friction_factor);
        assert!(guide.from.friction_factor > 0.0);
    }

    #[test]
    fn invalid_point_is_an_error() {
        assert!(operating_point(1e5, -1.0, &grid(), &FrictionSettings::default()).is_err());
    }
}
