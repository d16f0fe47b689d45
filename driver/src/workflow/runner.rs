use crate::workflow::config::JobConfig;
use anyhow::Context;
use soundcore::{RunResult, SeriesKind, Session};

/// Drives one alignment job through a fresh [`Session`].
#[derive(Clone)]
pub struct Runner {
    config: JobConfig,
}

impl Runner {
    pub fn new(config: JobConfig) -> Self {
        Self { config }
    }

    pub fn session(&self) -> Session {
        let mut session = Session::new(self.config.output_dir.clone());
        session.set_input(self.config.coordinates_input(), SeriesKind::Coordinates);
        session.set_input(self.config.depths_input(), SeriesKind::Depths);
        session.set_output_target(self.config.output.clone());
        session
    }

    pub async fn execute(&self) -> anyhow::Result<RunResult> {
        if !self.config.output_dir.as_os_str().is_empty() {
            tokio::fs::create_dir_all(&self.config.output_dir)
                .await
                .with_context(|| {
                    format!(
                        "creating output directory {}",
                        self.config.output_dir.display()
                    )
                })?;
        }

        let mut session = self.session();
        Ok(session.run().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::profile::{write_survey, SurveyProfile};
    use soundcore::processing::Coverage;
    use soundcore::Outcome;

    #[tokio::test]
    async fn runner_aligns_generated_survey() {
        let dir = tempfile::tempdir().unwrap();
        let profile = SurveyProfile {
            fixes: 20,
            ..Default::default()
        };
        let survey = write_survey(dir.path(), &profile).unwrap();

        let job = JobConfig {
            coordinates: Some(survey.coordinates.clone()),
            depths: Some(survey.depths.clone()),
            clock_delta: Some(survey.clock_delta.clone()),
            antenna_delta: Some("0.30".into()),
            instrument_base: None,
            output: "aligned.csv".into(),
            output_dir: dir.path().join("out"),
        };
        let result = Runner::new(job).execute().await.unwrap();

        assert_eq!(result.outcome, Outcome::Success);
        assert_eq!(result.coverage, Some(Coverage::Full));
        assert_eq!(result.records.len(), 20);
        assert!(dir.path().join("out/aligned.csv").exists());
    }

    #[tokio::test]
    async fn short_sounding_log_gives_partial_coverage() {
        let dir = tempfile::tempdir().unwrap();
        let profile = SurveyProfile {
            fixes: 10,
            soundings: Some(8),
            lead: 3,
            ..Default::default()
        };
        let survey = write_survey(dir.path(), &profile).unwrap();

        let job = JobConfig {
            coordinates: Some(survey.coordinates.clone()),
            depths: Some(survey.depths.clone()),
            clock_delta: Some(survey.clock_delta.clone()),
            output: "aligned.csv".into(),
            output_dir: dir.path().to_path_buf(),
            ..Default::default()
        };
        let result = Runner::new(job).execute().await.unwrap();

        assert_eq!(result.outcome, Outcome::Partial);
        assert_eq!(result.records.len(), 5);
    }

    #[tokio::test]
    async fn missing_inputs_fail_without_output() {
        let dir = tempfile::tempdir().unwrap();
        let job = JobConfig {
            output: "aligned.csv".into(),
            output_dir: dir.path().to_path_buf(),
            ..Default::default()
        };
        let result = Runner::new(job).execute().await.unwrap();
        assert_eq!(result.outcome, Outcome::Failed);
        assert_eq!(result.issues.len(), 2);
        assert!(!dir.path().join("aligned.csv").exists());
    }
}
