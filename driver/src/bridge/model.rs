use serde::{Deserialize, Serialize};
use soundcore::RunResult;
use std::path::PathBuf;

/// Observable status fields of the latest run.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StatusModel {
    pub success_message: Option<String>,
    pub warning_message: Option<String>,
    pub error_message: Option<String>,
    pub in_progress: bool,
    pub records: usize,
    pub saved_to: Option<PathBuf>,
}

impl StatusModel {
    pub fn running() -> Self {
        Self {
            in_progress: true,
            ..Default::default()
        }
    }

    pub fn failed(message: String) -> Self {
        Self {
            error_message: Some(message),
            ..Default::default()
        }
    }

    pub fn from_result(result: &RunResult) -> Self {
        Self {
            success_message: result.success_message().map(str::to_string),
            warning_message: result.warning_message().map(str::to_string),
            error_message: result.error_message(),
            in_progress: false,
            records: result.records.len(),
            saved_to: result.saved_to.clone(),
        }
    }
}
