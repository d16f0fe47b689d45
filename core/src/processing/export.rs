use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::prelude::OUTPUT_SEPARATOR;
use crate::records::OutputRecord;

pub const CSV_MIME_TYPE: &str = "text/csv;charset=utf-8";

/// Directory and operator-chosen filename of the merged result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputTarget {
    pub directory: PathBuf,
    pub filename: String,
}

impl OutputTarget {
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.filename)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    #[error("no records to export")]
    Empty,
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Renders records one per line, cells joined by a single space.
pub fn to_csv(records: &[OutputRecord]) -> String {
    records
        .iter()
        .map(|record| {
            record
                .fields()
                .iter()
                .map(|cell| escape_cell(cell))
                .collect::<Vec<_>>()
                .join(OUTPUT_SEPARATOR)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Quotes a cell only when it holds a quote, comma or newline.
fn escape_cell(cell: &str) -> String {
    let escaped = cell.replace('"', "\"\"");
    if escaped.contains(['"', ',', '\n']) {
        format!("\"{}\"", escaped)
    } else {
        escaped
    }
}

/// Writes the rendered records to the target and returns the written path.
pub async fn save(target: &OutputTarget, records: &[OutputRecord]) -> Result<PathBuf, ExportError> {
    if records.is_empty() {
        return Err(ExportError::Empty);
    }
    let path = target.path();
    tokio::fs::write(&path, to_csv(records))
        .await
        .map_err(|source| ExportError::Io {
            path: path.clone(),
            source,
        })?;
    Ok(path)
}
