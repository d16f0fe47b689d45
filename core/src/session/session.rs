use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::math::coerce_offset;
use crate::parsing::{
    all_valid, parse_content, read_source, CoordinateParser, DepthParser, InputSource, SourceError,
};
use crate::prelude::{CalibrationInputs, SeriesKind, SeriesParser};
use crate::processing::{align, save, Coverage, OutputTarget};
use crate::session::result::{Outcome, RunResult};
use crate::session::status::RunStatus;
use crate::telemetry::{LogManager, MetricsRecorder};
use crate::validation::{
    validate_clock_delta, validate_decimal_offset, validate_output_filename, Issue, IssueKind,
    IssueReport,
};

/// What the operator selected for one series.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesInput {
    pub source: Option<InputSource>,
    /// Clock delta for coordinates, antenna delta for depths.
    pub delta: Option<String>,
    /// Instrument base; only read for depths.
    pub base: Option<String>,
}

/// Collaborator-facing façade. Holds the latest inputs and runs the
/// validate, read, calculate and save sequence on demand.
///
/// Runs are single-flight: `run` takes `&mut self`, and each run starts from
/// empty record state. [`Session::status`] hands out a handle that reports
/// whether a run is under way while the session itself is borrowed.
pub struct Session {
    coordinates: SeriesInput,
    depths: SeriesInput,
    output: OutputTarget,
    status: RunStatus,
    last_result: Option<RunResult>,
    logger: LogManager,
    metrics: MetricsRecorder,
}

impl Session {
    pub fn new(output_directory: impl Into<PathBuf>) -> Self {
        Self {
            coordinates: SeriesInput::default(),
            depths: SeriesInput::default(),
            output: OutputTarget {
                directory: output_directory.into(),
                filename: String::new(),
            },
            status: RunStatus::default(),
            last_result: None,
            logger: LogManager::new(),
            metrics: MetricsRecorder::new(),
        }
    }

    pub fn set_input(&mut self, input: SeriesInput, kind: SeriesKind) {
        match kind {
            SeriesKind::Coordinates => self.coordinates = input,
            SeriesKind::Depths => self.depths = input,
        }
    }

    pub fn set_output_target(&mut self, filename: impl Into<String>) {
        self.output.filename = filename.into();
    }

    pub fn calibration(&self) -> CalibrationInputs {
        CalibrationInputs {
            clock_delta: self.coordinates.delta.clone(),
            antenna_delta: self.depths.delta.clone(),
            instrument_base: self.depths.base.clone(),
        }
    }

    pub fn in_progress(&self) -> bool {
        self.status.in_progress()
    }

    pub fn status(&self) -> RunStatus {
        self.status.clone()
    }

    pub fn last_result(&self) -> Option<&RunResult> {
        self.last_result.as_ref()
    }

    pub fn metrics(&self) -> &MetricsRecorder {
        &self.metrics
    }

    /// Validates, reads both series, and when nothing is wrong aligns them
    /// and saves the result. Never fails; every problem ends up in the
    /// returned [`RunResult`].
    pub async fn run(&mut self) -> RunResult {
        let _progress = self.status.begin();
        self.last_result = None;
        self.logger.record(&format!(
            "run started -> output {}",
            self.output.path().display()
        ));

        let result = self.validate_and_calculate().await;

        match result.outcome {
            Outcome::Failed => {
                self.metrics.record_failure();
                if let Some(message) = result.error_message() {
                    self.logger.warn(&format!("run failed: {}", message.replace('\n', "; ")));
                }
            }
            outcome => {
                self.metrics.record_run(result.records.len());
                self.logger.record(&format!(
                    "run finished -> {:?}, {} records",
                    outcome,
                    result.records.len()
                ));
            }
        }

        self.last_result = Some(result.clone());
        result
    }

    async fn validate_and_calculate(&self) -> RunResult {
        let calibration = self.calibration();
        let mut report = IssueReport::new();

        // Invalid fields fall back to neutral values so both files are still checked.
        let clock_delta = accepted(
            &mut report,
            calibration.clock_delta.as_deref(),
            validate_clock_delta,
            IssueKind::ClockDelta,
        );
        let antenna_delta = accepted(
            &mut report,
            calibration.antenna_delta.as_deref(),
            validate_decimal_offset,
            IssueKind::AntennaDelta,
        );
        let instrument_base = accepted(
            &mut report,
            calibration.instrument_base.as_deref(),
            validate_decimal_offset,
            IssueKind::InstrumentBase,
        );
        report.check(
            validate_output_filename(&self.output.filename),
            IssueKind::OutputFilename,
        );

        let (coordinate_content, depth_content) = tokio::join!(
            read_source(self.coordinates.source.as_ref()),
            read_source(self.depths.source.as_ref())
        );

        let coordinates = load_series(
            &CoordinateParser::new(clock_delta),
            coordinate_content,
            (IssueKind::CoordinatesFile, IssueKind::CoordinatesContent),
            &mut report,
        );
        let depths = load_series(
            &DepthParser::new(coerce_offset(antenna_delta), coerce_offset(instrument_base)),
            depth_content,
            (IssueKind::DepthsFile, IssueKind::DepthsContent),
            &mut report,
        );
        self.logger.record(&format!(
            "parsed {} coordinates and {} depths",
            coordinates.len(),
            depths.len()
        ));

        if !report.is_empty() {
            return RunResult::failed(report.into_issues());
        }

        let alignment = align(&coordinates, &depths);
        if alignment.coverage == Coverage::None {
            return RunResult::no_matches();
        }

        match save(&self.output, &alignment.records).await {
            Ok(path) => RunResult::saved(alignment, path),
            Err(err) => RunResult::failed(vec![Issue::with_detail(
                IssueKind::Calculation,
                err.to_string(),
            )]),
        }
    }
}

/// Returns the value when it passes `validate`, otherwise records `kind`.
fn accepted<'a>(
    report: &mut IssueReport,
    value: Option<&'a str>,
    validate: fn(Option<&str>) -> bool,
    kind: IssueKind,
) -> Option<&'a str> {
    if report.check(validate(value), kind) {
        value
    } else {
        None
    }
}

fn load_series<P: SeriesParser>(
    parser: &P,
    content: Result<String, SourceError>,
    (file_kind, content_kind): (IssueKind, IssueKind),
    report: &mut IssueReport,
) -> Vec<P::Record> {
    match content {
        Ok(content) => {
            let records = parse_content(parser, &content);
            report.check(all_valid(&records), content_kind);
            records
        }
        Err(err) => {
            report.push(Issue::with_detail(file_kind, err.to_string()));
            Vec::new()
        }
    }
}
