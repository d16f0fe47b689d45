//! Alignment and calibration core for hydrographic survey series.
//!
//! Coordinate fixes and depth soundings are recorded by independent devices.
//! The modules here parse both line-oriented inputs, derive comparable time
//! keys, calibrate heights, align the two series and export the merged result.

pub mod math;
pub mod parsing;
pub mod prelude;
pub mod processing;
pub mod records;
pub mod session;
pub mod telemetry;
pub mod validation;

pub use prelude::{CalibrationInputs, SeriesKind, SeriesParser, SeriesRecord};
pub use session::{Outcome, RunResult, RunStatus, SeriesInput, Session};
