//! mf-chart: Moody chart tabulation.
//!
//! Sweeps Reynolds number grids through the correlations in `mf-friction` and
//! returns plain curve data (no rendering):
//! - the laminar line `64/Re`
//! - one Colebrook curve per standard relative roughness
//! - secondary-axis ticks from the fully-rough transforms
//! - the highlighted curve and guide lines for one operating point

pub mod axis;
pub mod curves;
pub mod error;
pub mod export;
pub mod grid;
pub mod overlay;

pub use axis::{AxisTick, secondary_axis_ticks};
pub use curves::{Curve, CurvePoint, MoodyChart, colebrook_curve, laminar_curve, tabulate};
pub use error::{ChartError, ChartResult};
pub use grid::{ChartSettings, LinearRange, ReynoldsGrid, STANDARD_RELATIVE_ROUGHNESS};
pub use overlay::{OperatingPointOverlay, Segment, operating_point};
