use serde::{Deserialize, Serialize};
use std::fmt;

/// Everything a run can report as a problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    ClockDelta,
    AntennaDelta,
    InstrumentBase,
    OutputFilename,
    CoordinatesFile,
    CoordinatesContent,
    DepthsFile,
    DepthsContent,
    Calculation,
}

impl IssueKind {
    pub fn message(self) -> &'static str {
        match self {
            IssueKind::ClockDelta => "Invalid clock delta - expected format \"hh:mm:ss\"",
            IssueKind::AntennaDelta => "Invalid antenna height - expected format \"m.cm\"",
            IssueKind::InstrumentBase => "Invalid instrument base height - expected format \"m.cm\"",
            IssueKind::OutputFilename => "Invalid output file name",
            IssueKind::CoordinatesFile => "Invalid coordinates file",
            IssueKind::CoordinatesContent => "Invalid data in the coordinates file",
            IssueKind::DepthsFile => "Invalid depths file",
            IssueKind::DepthsContent => "Invalid data in the depths file",
            IssueKind::Calculation => "A problem occurred while calculating the output data",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub kind: IssueKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Issue {
    pub fn new(kind: IssueKind) -> Self {
        Self { kind, detail: None }
    }

    pub fn with_detail(kind: IssueKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: Some(detail.into()),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.detail {
            Some(detail) => write!(f, "{} ({})", self.kind.message(), detail),
            None => f.write_str(self.kind.message()),
        }
    }
}

/// Collects every issue of a run; nothing here short-circuits.
#[derive(Debug, Clone, Default)]
pub struct IssueReport {
    issues: Vec<Issue>,
}

impl IssueReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    /// Records `kind` unless `valid` holds; returns `valid`.
    pub fn check(&mut self, valid: bool, kind: IssueKind) -> bool {
        if !valid {
            self.push(Issue::new(kind));
        }
        valid
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn into_issues(self) -> Vec<Issue> {
        self.issues
    }
}

/// One line per issue, in the order they were found.
pub fn combined_message(issues: &[Issue]) -> Option<String> {
    if issues.is_empty() {
        return None;
    }
    Some(
        issues
            .iter()
            .map(Issue::to_string)
            .collect::<Vec<_>>()
            .join("\n"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_accumulates_without_short_circuit() {
        let mut report = IssueReport::new();
        assert!(!report.check(false, IssueKind::ClockDelta));
        assert!(report.check(true, IssueKind::AntennaDelta));
        report.push(Issue::with_detail(IssueKind::DepthsFile, "permission denied"));

        let kinds: Vec<_> = report.issues().iter().map(|issue| issue.kind).collect();
        assert_eq!(kinds, vec![IssueKind::ClockDelta, IssueKind::DepthsFile]);

        let message = combined_message(report.issues()).unwrap();
        assert_eq!(
            message,
            "Invalid clock delta - expected format \"hh:mm:ss\"\nInvalid depths file (permission denied)"
        );
    }

    #[test]
    fn empty_report_has_no_message() {
        assert!(combined_message(&[]).is_none());
    }
}
