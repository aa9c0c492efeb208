//! Straight pipe section with Darcy-Weisbach pressure drop.

use crate::error::FrictionResult;
use crate::regime::{RegimeEstimate, friction_factor_with};
use crate::settings::FrictionSettings;
use mf_core::units::{Density, DynVisc, Length, Pressure, Velocity, pa};
use mf_core::{ensure_finite, relative_roughness, reynolds_number};

/// Below this mean velocity (m/s) the section is treated as stagnant.
pub const EPSILON_VELOCITY: f64 = 1e-12;

/// One straight pipe with wall roughness and lumped fittings.
#[derive(Debug, Clone)]
pub struct PipeSection {
    /// Pipe length
    pub length: Length,
    /// Pipe inner diameter
    pub diameter: Length,
    /// Surface roughness (absolute)
    pub roughness: Length,
    /// Minor loss coefficient (sum of K factors for fittings, bends, etc.)
    pub k_minor: f64,
}

/// Flow evaluation for a [`PipeSection`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeFlow {
    pub reynolds: f64,
    pub relative_roughness: f64,
    /// `None` when the section is stagnant
    pub friction: Option<RegimeEstimate>,
    /// Signed with the flow direction
    pub pressure_drop: Pressure,
}

impl PipeSection {
    pub fn new(length: Length, diameter: Length, roughness: Length, k_minor: f64) -> Self {
        Self {
            length,
            diameter,
            roughness,
            k_minor,
        }
    }

    pub fn relative_roughness(&self) -> FrictionResult<f64> {
        Ok(relative_roughness(self.roughness, self.diameter)?.value)
    }

    pub fn reynolds(
        &self,
        density: Density,
        velocity: Velocity,
        viscosity: DynVisc,
    ) -> FrictionResult<f64> {
        Ok(reynolds_number(density, velocity, self.diameter, viscosity)?)
    }

    /// Pressure drop `Δp = (f·L/D + K)·½ρv²` at mean velocity `velocity`.
    pub fn evaluate(
        &self,
        density: Density,
        velocity: Velocity,
        viscosity: DynVisc,
        settings: &FrictionSettings,
    ) -> FrictionResult<PipeFlow> {
        let rr = self.relative_roughness()?;
        let reynolds = self.reynolds(density, velocity, viscosity)?;

        let v = velocity.value;
        if v.abs() < EPSILON_VELOCITY {
            return Ok(PipeFlow {
                reynolds,
                relative_roughness: rr,
                friction: None,
                pressure_drop: pa(0.0),
            });
        }

        let friction = friction_factor_with(reynolds, rr, settings)?;
        let f = friction.estimate.factor;
        let d = self.diameter.value;

        let dp = (f * self.length.value / d + self.k_minor) * 0.5 * density.value * v.powi(2);
        let dp = ensure_finite(v.signum() * dp, "pressure drop")?;

        Ok(PipeFlow {
            reynolds,
            relative_roughness: rr,
            friction: Some(friction),
            pressure_drop: pa(dp),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regime::FlowRegime;
    use mf_core::units::{kgpm3, m, mps, pas};

    fn steel_pipe(length: f64) -> PipeSection {
        PipeSection::new(m(length), m(0.05), m(4.5e-5), 0.0)
    }

    #[test]
    fn stagnant_pipe_has_no_drop() {
        let flow = steel_pipe(10.0)
            .evaluate(
                kgpm3(998.0),
                mps(0.0),
                pas(1.0e-3),
                &FrictionSettings::default(),
            )
            .unwrap();
        assert!(flow.friction.is_none());
        assert_eq!(flow.pressure_drop.value, 0.0);
    }

    #[test]
    fn water_turbulent_drop() {
        let flow = steel_pipe(10.0)
            .evaluate(
                kgpm3(1000.0),
                mps(1.0),
                pas(1.0e-3),
                &FrictionSettings::default(),
            )
            .unwrap();
        assert!((flow.reynolds - 50_000.0).abs() < 1e-6);
        assert!((flow.relative_roughness - 9.0e-4).abs() < 1e-15);
        let friction = flow.friction.unwrap();
        assert_eq!(friction.regime, FlowRegime::Turbulent);
        // f ≈ 0.0235 → Δp = f·(10/0.05)·500 ≈ 2.35 kPa
        let dp = flow.pressure_drop.value;
        assert!(dp > 2000.0 && dp < 2700.0, "dp = {dp}");
    }

    #[test]
    fn laminar_oil_drop_matches_hagen_poiseuille() {
        // Δp = 32·μ·L·v/D² for laminar flow without fittings
        let pipe = steel_pipe(2.0);
        let flow = pipe
            .evaluate(
                kgpm3(900.0),
                mps(0.2),
                pas(0.1),
                &FrictionSettings::default(),
            )
            .unwrap();
        assert_eq!(flow.friction.unwrap().regime, FlowRegime::Laminar);
        let expected = 32.0 * 0.1 * 2.0 * 0.2 / 0.05_f64.powi(2);
        assert!((flow.pressure_drop.value - expected).abs() < 1e-9 * expected);
    }

    #[test]
    fn reverse_flow_negates_drop() {
        let pipe = steel_pipe(10.0);
        let settings = FrictionSettings::default();
        let fwd = pipe
            .evaluate(kgpm3(1000.0), mps(2.0), pas(1.0e-3), &settings)
            .unwrap();
        let rev = pipe
            .evaluate(kgpm3(1000.0), mps(-2.0), pas(1.0e-3), &settings)
            .unwrap();
        assert_eq!(fwd.pressure_drop.value, -rev.pressure_drop.value);
    }

    #[test]
    fn longer_pipe_means_more_drop() {
        let settings = FrictionSettings::default();
        let short = steel_pipe(5.0)
            .evaluate(kgpm3(1000.0), mps(1.5), pas(1.0e-3), &settings)
            .unwrap();
        let long = steel_pipe(20.0)
            .evaluate(kgpm3(1000.0), mps(1.5), pas(1.0e-3), &settings)
            .unwrap();
        assert!(long.pressure_drop.value > short.pressure_drop.value);
    }

    #[test]
    fn bad_geometry_is_rejected() {
        let pipe = PipeSection::new(m(1.0), m(0.0), m(1e-5), 0.0);
        assert!(
            pipe.evaluate(
                kgpm3(1000.0),
                mps(1.0),
                pas(1.0e-3),
                &FrictionSettings::default()
            )
            .is_err()
        );
    }
}
