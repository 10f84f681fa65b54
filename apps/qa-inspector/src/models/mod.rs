//! Shared data models for scan output and the exec summary document shape.

pub mod exec_summary;

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Issue severity. Declaration order is report order.
pub enum Severity {
    Critical,
    Warning,
    Minor,
}

impl Severity {
    /// All severities in the order the report prints them.
    pub const ALL: [Severity; 3] = [Severity::Critical, Severity::Warning, Severity::Minor];

    pub fn label(self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::Warning => "WARNING",
            Severity::Minor => "MINOR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A single finding with severity, the file it concerns, and a message.
pub struct Issue {
    pub severity: Severity,
    pub file: String,
    pub message: String,
}

impl Issue {
    pub fn new(severity: Severity, file: impl Into<String>, message: impl Into<String>) -> Self {
        Issue {
            severity,
            file: file.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Aggregated counts used by the report header.
pub struct Summary {
    pub critical: usize,
    pub warnings: usize,
    pub minor: usize,
    pub files: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Scan results container.
pub struct ScanResult {
    pub issues: Vec<Issue>,
    pub summary: Summary,
}

impl ScanResult {
    /// Build a result from collected issues, computing the per-severity summary.
    pub fn from_issues(issues: Vec<Issue>, files: usize) -> Self {
        let mut summary = Summary {
            files,
            ..Summary::default()
        };
        for is in &issues {
            match is.severity {
                Severity::Critical => summary.critical += 1,
                Severity::Warning => summary.warnings += 1,
                Severity::Minor => summary.minor += 1,
            }
        }
        ScanResult { issues, summary }
    }

    /// Issues of one severity, in recorded order.
    pub fn by_severity(&self, severity: Severity) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(move |is| is.severity == severity)
    }

    /// `1` when any CRITICAL issue was recorded, `0` otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.summary.critical > 0 {
            1
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts_and_exit_code() {
        let res = ScanResult::from_issues(
            vec![
                Issue::new(Severity::Warning, "a", "w"),
                Issue::new(Severity::Minor, "b", "m1"),
                Issue::new(Severity::Minor, "c", "m2"),
            ],
            3,
        );
        assert_eq!(res.summary.critical, 0);
        assert_eq!(res.summary.warnings, 1);
        assert_eq!(res.summary.minor, 2);
        // warnings and minors alone never fail the run
        assert_eq!(res.exit_code(), 0);

        let res = ScanResult::from_issues(vec![Issue::new(Severity::Critical, "x", "c")], 1);
        assert_eq!(res.exit_code(), 1);
    }

    #[test]
    fn test_by_severity_keeps_recorded_order() {
        let res = ScanResult::from_issues(
            vec![
                Issue::new(Severity::Minor, "a", "first"),
                Issue::new(Severity::Critical, "b", "crit"),
                Issue::new(Severity::Minor, "c", "second"),
            ],
            0,
        );
        let minors: Vec<_> = res
            .by_severity(Severity::Minor)
            .map(|is| is.message.as_str())
            .collect();
        assert_eq!(minors, vec!["first", "second"]);
    }
}
