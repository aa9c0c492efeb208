//! mf-core: shared foundation for moodyflow.
//!
//! Contains:
//! - numeric (Real + float and grid helpers)
//! - units (uom SI types + dimensionless pipe-flow groups)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{MfError, MfResult};
pub use numeric::*;
pub use units::*;
