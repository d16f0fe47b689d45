use anyhow::Context;
use serde::{Deserialize, Serialize};
use soundcore::parsing::InputSource;
use soundcore::SeriesInput;
use std::fs;
use std::path::{Path, PathBuf};

/// One alignment job: both inputs, calibration and the output target.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobConfig {
    pub coordinates: Option<PathBuf>,
    pub depths: Option<PathBuf>,
    pub clock_delta: Option<String>,
    pub antenna_delta: Option<String>,
    pub instrument_base: Option<String>,
    pub output: String,
    pub output_dir: PathBuf,
}

impl JobConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading job config {}", path_ref.display()))?;
        let config: JobConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing job config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn has_inputs(&self) -> bool {
        self.coordinates.is_some() || self.depths.is_some()
    }

    pub fn coordinates_input(&self) -> SeriesInput {
        SeriesInput {
            source: self.coordinates.clone().map(InputSource::Path),
            delta: self.clock_delta.clone(),
            base: None,
        }
    }

    pub fn depths_input(&self) -> SeriesInput {
        SeriesInput {
            source: self.depths.clone().map(InputSource::Path),
            delta: self.antenna_delta.clone(),
            base: self.instrument_base.clone(),
        }
    }
}
