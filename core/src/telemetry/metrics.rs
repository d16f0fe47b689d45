use std::sync::Mutex;

/// Running totals across every run of a session.
pub struct MetricsRecorder {
    inner: Mutex<Metrics>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Metrics {
    pub runs: usize,
    pub failed_runs: usize,
    pub records_emitted: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Metrics::default()),
        }
    }

    pub fn record_run(&self, records_emitted: usize) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.runs += 1;
            metrics.records_emitted += records_emitted;
        }
    }

    pub fn record_failure(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.runs += 1;
            metrics.failed_runs += 1;
        }
    }

    pub fn snapshot(&self) -> Metrics {
        self.inner
            .lock()
            .map(|metrics| *metrics)
            .unwrap_or_default()
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_runs_failures_and_records() {
        let recorder = MetricsRecorder::new();
        recorder.record_run(3);
        recorder.record_failure();
        recorder.record_run(0);
        assert_eq!(
            recorder.snapshot(),
            Metrics {
                runs: 3,
                failed_runs: 1,
                records_emitted: 3,
            }
        );
    }
}
