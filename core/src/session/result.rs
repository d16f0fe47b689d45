use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::processing::{Alignment, Coverage};
use crate::records::OutputRecord;
use crate::validation::{combined_message, Issue};

pub const SUCCESS_MESSAGE: &str = "Output data calculated successfully.";
pub const PARTIAL_MESSAGE: &str =
    "Output data calculated with only PARTIALLY matched coordinates and depths.";
pub const NO_MATCHES_MESSAGE: &str =
    "Output data calculation found NO matching coordinates and depths.";

/// Terminal state of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Success,
    Partial,
    NoMatches,
    Failed,
}

/// Immutable summary of a run: the outcome, every issue found, and the
/// merged records when a file was written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    pub outcome: Outcome,
    pub issues: Vec<Issue>,
    pub records: Vec<OutputRecord>,
    pub coverage: Option<Coverage>,
    pub saved_to: Option<PathBuf>,
}

impl RunResult {
    pub fn failed(issues: Vec<Issue>) -> Self {
        Self {
            outcome: Outcome::Failed,
            issues,
            records: Vec::new(),
            coverage: None,
            saved_to: None,
        }
    }

    pub fn no_matches() -> Self {
        Self {
            outcome: Outcome::NoMatches,
            issues: Vec::new(),
            records: Vec::new(),
            coverage: Some(Coverage::None),
            saved_to: None,
        }
    }

    pub fn saved(alignment: Alignment, saved_to: PathBuf) -> Self {
        let outcome = match alignment.coverage {
            Coverage::Full => Outcome::Success,
            Coverage::Partial => Outcome::Partial,
            Coverage::None => Outcome::NoMatches,
        };
        Self {
            outcome,
            issues: Vec::new(),
            records: alignment.records,
            coverage: Some(alignment.coverage),
            saved_to: Some(saved_to),
        }
    }

    pub fn success_message(&self) -> Option<&'static str> {
        match self.outcome {
            Outcome::Success => Some(SUCCESS_MESSAGE),
            _ => None,
        }
    }

    pub fn warning_message(&self) -> Option<&'static str> {
        match self.outcome {
            Outcome::Partial => Some(PARTIAL_MESSAGE),
            Outcome::NoMatches => Some(NO_MATCHES_MESSAGE),
            _ => None,
        }
    }

    /// All issues joined into one message, one per line.
    pub fn error_message(&self) -> Option<String> {
        combined_message(&self.issues)
    }
}
