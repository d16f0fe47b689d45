pub mod result;
#[allow(clippy::module_inception)]
pub mod session;
pub mod status;

pub use result::{Outcome, RunResult, NO_MATCHES_MESSAGE, PARTIAL_MESSAGE, SUCCESS_MESSAGE};
pub use session::{SeriesInput, Session};
pub use status::RunStatus;
