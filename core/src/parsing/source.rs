use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the content of one input series comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputSource {
    Path(PathBuf),
    /// Content already held in memory, e.g. received over the status bridge.
    Text(String),
}

#[derive(thiserror::Error, Debug)]
pub enum SourceError {
    #[error("no input selected")]
    Missing,
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Reads the whole source as text. Runs to completion or failure; there is
/// no timeout.
pub async fn read_source(source: Option<&InputSource>) -> Result<String, SourceError> {
    match source {
        None => Err(SourceError::Missing),
        Some(InputSource::Text(text)) => Ok(text.clone()),
        Some(InputSource::Path(path)) => {
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| SourceError::Io {
                    path: path.clone(),
                    source,
                })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn reads_files_and_inline_text() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"00:00:05   1   2\r\n").unwrap();
        let from_file = read_source(Some(&InputSource::Path(temp.path().to_path_buf())))
            .await
            .unwrap();
        assert_eq!(from_file, "00:00:05   1   2\r\n");

        let inline = read_source(Some(&InputSource::Text("x".into()))).await.unwrap();
        assert_eq!(inline, "x");
    }

    #[tokio::test]
    async fn missing_or_unreadable_sources_fail() {
        assert!(matches!(read_source(None).await, Err(SourceError::Missing)));
        let missing = InputSource::Path(PathBuf::from("/nonexistent/survey/coordinates.txt"));
        assert!(matches!(
            read_source(Some(&missing)).await,
            Err(SourceError::Io { .. })
        ));
    }
}
