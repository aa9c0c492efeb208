//! Secondary relative-roughness axis.

use mf_core::Real;
use mf_friction::roughness_to_factor;
use serde::Serialize;

/// A roughness label placed at its fully-rough friction factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisTick {
    pub relative_roughness: Real,
    pub friction_factor: Real,
}

/// Ticks for each positive roughness, ascending in friction factor.
///
/// `ε/D = 0` maps to `f = 0`, which has no place on a log axis, so it is skipped.
pub fn secondary_axis_ticks(relative_roughness: &[Real]) -> Vec<AxisTick> {
    let mut ticks: Vec<AxisTick> = relative_roughness
        .iter()
        .copied()
        .filter(|&rr| rr > 0.0)
        .map(|rr| AxisTick {
            relative_roughness: rr,
            friction_factor: roughness_to_factor(rr),
        })
        .collect();
    ticks.sort_by(|a, b| a.friction_factor.total_cmp(&b.friction_factor));
    ticks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::STANDARD_RELATIVE_ROUGHNESS;
    use mf_friction::factor_to_roughness;

    #[test]
    fn skips_smooth_pipe() {
        let ticks = secondary_axis_ticks(&STANDARD_RELATIVE_ROUGHNESS);
        assert_eq!(ticks.len(), STANDARD_RELATIVE_ROUGHNESS.len() - 1);
    }

    #[test]
    fn ticks_invert_back_to_labels() {
        for tick in secondary_axis_ticks(&[0.05, 1e-4, 0.002]) {
            let rr = factor_to_roughness(tick.friction_factor);
            assert!((rr - tick.relative_roughness).abs() <= 1e-9 * tick.relative_roughness);
        }
    }

    #[test]
    fn ticks_are_ordered() {
        let ticks = secondary_axis_ticks(&[0.05, 1e-4, 0.002]);
        assert_eq!(ticks[0].relative_roughness, 1e-4);
        assert_eq!(ticks[2].relative_roughness, 0.05);
    }
}
