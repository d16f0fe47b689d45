pub mod patterns;
pub mod report;

pub use patterns::{validate_clock_delta, validate_decimal_offset, validate_output_filename};
pub use report::{combined_message, Issue, IssueKind, IssueReport};
