//! Interchangeable friction factor correlations behind one trait.

use crate::colebrook::{ColebrookConfig, solve_colebrook_with};
use crate::diagnostic::Estimate;
use crate::error::FrictionResult;
use crate::explicit::{estimate_haaland, estimate_laminar};
use crate::regime::friction_factor_with;
use crate::settings::{FrictionSettings, Method};

/// A friction factor correlation `f(Re, ε/D)`.
///
/// Implementations are stateless between calls and safe to share across threads.
pub trait FrictionCorrelation: Send + Sync {
    /// Short name for reports and logs.
    fn name(&self) -> &str;

    /// Evaluate the correlation.
    ///
    /// # Arguments
    /// * `reynolds` - Reynolds number
    /// * `relative_roughness` - Wall roughness over inner diameter
    fn estimate(&self, reynolds: f64, relative_roughness: f64) -> FrictionResult<Estimate>;
}

/// Implicit Colebrook-White, solved iteratively.
#[derive(Debug, Clone, Copy, Default)]
pub struct Colebrook {
    pub config: ColebrookConfig,
}

impl FrictionCorrelation for Colebrook {
    fn name(&self) -> &str {
        "colebrook"
    }

    fn estimate(&self, reynolds: f64, relative_roughness: f64) -> FrictionResult<Estimate> {
        solve_colebrook_with(reynolds, relative_roughness, &self.config).map(Estimate::from)
    }
}

/// Explicit Haaland approximation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Haaland;

impl FrictionCorrelation for Haaland {
    fn name(&self) -> &str {
        "haaland"
    }

    fn estimate(&self, reynolds: f64, relative_roughness: f64) -> FrictionResult<Estimate> {
        estimate_haaland(reynolds, relative_roughness)
    }
}

/// Laminar `64/Re`. Roughness does not enter.
#[derive(Debug, Clone, Copy, Default)]
pub struct Laminar {
    pub suppress_diagnostics: bool,
}

impl FrictionCorrelation for Laminar {
    fn name(&self) -> &str {
        "laminar"
    }

    fn estimate(&self, reynolds: f64, _relative_roughness: f64) -> FrictionResult<Estimate> {
        estimate_laminar(reynolds, self.suppress_diagnostics)
    }
}

/// Laminar below the transition Reynolds number, Colebrook at or above it.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegimeDispatch {
    pub settings: FrictionSettings,
}

impl FrictionCorrelation for RegimeDispatch {
    fn name(&self) -> &str {
        "auto"
    }

    fn estimate(&self, reynolds: f64, relative_roughness: f64) -> FrictionResult<Estimate> {
        friction_factor_with(reynolds, relative_roughness, &self.settings).map(|r| r.estimate)
    }
}

impl Method {
    /// Build the correlation for this method from shared settings.
    pub fn correlation(self, settings: &FrictionSettings) -> Box<dyn FrictionCorrelation> {
        match self {
            Method::Colebrook => Box::new(Colebrook {
                config: settings.colebrook(),
            }),
            Method::Haaland => Box::new(Haaland),
            Method::Laminar => Box::new(Laminar::default()),
            Method::Auto => Box::new(RegimeDispatch {
                settings: *settings,
            }),
        }
    }
}
