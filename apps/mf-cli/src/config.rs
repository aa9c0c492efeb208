//! Optional YAML configuration file.
//!
//! ```yaml
//! friction:
//!   tolerance: 1.0e-8
//!   transition_reynolds: 2000
//! chart:
//!   points_per_decade: 50
//! ```
//!
//! Missing sections and fields fall back to defaults.

use crate::error::{CliError, CliResult};
use mf_chart::ChartSettings;
use mf_friction::FrictionSettings;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub friction: FrictionSettings,
    pub chart: ChartSettings,
}

/// Command-line overrides for [`FrictionSettings`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FrictionOverrides {
    pub tolerance: Option<f64>,
    pub max_iterations: Option<usize>,
    pub transition_reynolds: Option<f64>,
}

impl CliConfig {
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&text).map_err(|source| CliError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text)
    }

    /// Friction settings with command-line values taking precedence, validated.
    pub fn friction_with(&self, overrides: FrictionOverrides) -> CliResult<FrictionSettings> {
        let mut settings = self.friction;
        if let Some(tol) = overrides.tolerance {
            settings.tolerance = tol;
        }
        if let Some(n) = overrides.max_iterations {
            settings.max_iterations = n;
        }
        if let Some(threshold) = overrides.transition_reynolds {
            settings.transition_reynolds = threshold;
        }
        settings.validate()?;
        Ok(settings)
    }
}
