//! Error types for friction factor calculations.

use mf_core::MfError;
use thiserror::Error;

/// Hard failures: the computation was refused and produced no value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FrictionError {
    #[error("Relative roughness must be a non-negative finite value, got {value}")]
    InvalidRoughness { value: f64 },

    #[error("Reynolds number must be {requirement}, got {value}")]
    InvalidReynolds {
        value: f64,
        requirement: &'static str,
    },

    #[error("Tolerance must be a positive finite value, got {value}")]
    InvalidTolerance { value: f64 },

    #[error("The maximum number of iterations must be positive, got {value}")]
    InvalidIterationBudget { value: usize },

    #[error("Transition Reynolds number must be a positive finite value, got {value}")]
    InvalidThreshold { value: f64 },

    #[error("Friction factor is undefined at the smooth-pipe limit (relative roughness 0)")]
    UndefinedAtSmoothLimit,

    #[error("Non-finite or non-positive result for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Pipe input error: {0}")]
    Pipe(#[from] MfError),
}

pub type FrictionResult<T> = Result<T, FrictionError>;

impl From<FrictionError> for MfError {
    fn from(e: FrictionError) -> Self {
        match e {
            FrictionError::InvalidRoughness { value } => MfError::OutOfDomain {
                what: "relative roughness",
                value,
            },
            FrictionError::InvalidReynolds { value, .. } => MfError::OutOfDomain {
                what: "Reynolds number",
                value,
            },
            FrictionError::InvalidTolerance { value } => MfError::OutOfDomain {
                what: "tolerance",
                value,
            },
            FrictionError::InvalidIterationBudget { .. } => MfError::InvalidArg {
                what: "iteration budget",
            },
            FrictionError::InvalidThreshold { value } => MfError::OutOfDomain {
                what: "transition Reynolds number",
                value,
            },
            FrictionError::UndefinedAtSmoothLimit => MfError::InvalidArg {
                what: "smooth-pipe limit",
            },
            FrictionError::NonFinite { what, value } => MfError::NonFinite { what, value },
            FrictionError::Pipe(inner) => inner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FrictionError::InvalidReynolds {
            value: 1500.0,
            requirement: ">= 2300",
        };
        let msg = err.to_string();
        assert!(msg.contains(">= 2300"));
        assert!(msg.contains("1500"));
    }

    #[test]
    fn error_conversion() {
        let err = FrictionError::InvalidRoughness { value: -1.0 };
        let core: MfError = err.into();
        assert!(matches!(core, MfError::OutOfDomain { value, .. } if value == -1.0));

        let wrapped: FrictionError = MfError::InvalidArg { what: "diameter" }.into();
        let back: MfError = wrapped.into();
        assert_eq!(back, MfError::InvalidArg { what: "diameter" });
    }
}
