//! Error types for chart tabulation.

use mf_friction::FrictionError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Invalid chart settings: {what}")]
    InvalidSettings { what: &'static str },

    #[error("Friction error: {0}")]
    Friction(#[from] FrictionError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ChartResult<T> = Result<T, ChartError>;
