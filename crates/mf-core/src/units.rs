// mf-core/src/units.rs

use crate::{MfError, MfResult, Real, ensure_finite, ensure_positive};
use uom::si::f64::{
    DynamicViscosity as UomDynamicViscosity, Length as UomLength, MassDensity as UomMassDensity,
    Pressure as UomPressure, Ratio as UomRatio, Velocity as UomVelocity,
};

// Public canonical unit types (SI, f64)
pub type Density = UomMassDensity;
pub type DynVisc = UomDynamicViscosity;
pub type Length = UomLength;
pub type Pressure = UomPressure;
pub type Ratio = UomRatio;
pub type Velocity = UomVelocity;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn kgpm3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

#[inline]
pub fn pas(v: f64) -> DynVisc {
    use uom::si::dynamic_viscosity::pascal_second;
    DynVisc::new::<pascal_second>(v)
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}

/// Reynolds number `Re = ρ·|v|·D/μ` for flow in a circular pipe.
pub fn reynolds_number(
    density: Density,
    velocity: Velocity,
    diameter: Length,
    viscosity: DynVisc,
) -> MfResult<Real> {
    let rho = ensure_positive(density.value, "density")?;
    let d = ensure_positive(diameter.value, "diameter")?;
    let mu = ensure_positive(viscosity.value, "viscosity")?;
    let v = ensure_finite(velocity.value, "velocity")?;
    ensure_finite(rho * v.abs() * d / mu, "Reynolds number")
}

/// Relative roughness `ε/D` from absolute wall roughness and inner diameter.
pub fn relative_roughness(roughness: Length, diameter: Length) -> MfResult<Ratio> {
    let d = ensure_positive(diameter.value, "diameter")?;
    let eps = ensure_finite(roughness.value, "roughness")?;
    if eps < 0.0 {
        return Err(MfError::OutOfDomain {
            what: "roughness",
            value: eps,
        });
    }
    Ok(unitless(eps / d))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _p = pa(101_325.0);
        let _l = m(2.0);
        let _rho = kgpm3(998.0);
        let _v = mps(1.5);
        let _mu = pas(1.0e-3);
        let _r = unitless(0.5);
    }

    #[test]
    fn water_in_small_pipe() {
        // 1 m/s water in a 50 mm pipe
        let re = reynolds_number(kgpm3(1000.0), mps(1.0), m(0.05), pas(1.0e-3)).unwrap();
        assert!((re - 50_000.0).abs() < 1e-6);
    }

    #[test]
    fn reynolds_ignores_flow_direction() {
        let fwd = reynolds_number(kgpm3(1.2), mps(3.0), m(0.1), pas(1.8e-5)).unwrap();
        let rev = reynolds_number(kgpm3(1.2), mps(-3.0), m(0.1), pas(1.8e-5)).unwrap();
        assert_eq!(fwd, rev);
    }

    #[test]
    fn reynolds_rejects_zero_viscosity() {
        let err = reynolds_number(kgpm3(1000.0), mps(1.0), m(0.05), pas(0.0)).unwrap_err();
        assert!(err.to_string().contains("viscosity"));
    }

    #[test]
    fn relative_roughness_commercial_steel() {
        let rr = relative_roughness(m(4.5e-5), m(0.1)).unwrap();
        assert!((rr.value - 4.5e-4).abs() < 1e-15);
        assert!(relative_roughness(m(-1e-5), m(0.1)).is_err());
        assert!(relative_roughness(m(1e-5), m(0.0)).is_err());
    }
}
