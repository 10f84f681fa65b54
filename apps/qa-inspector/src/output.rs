//! Report rendering.
//!
//! The report is composed as a string first so that repeated runs can be
//! compared byte for byte, then written to stdout.

use crate::models::{ScanResult, Severity};
use owo_colors::OwoColorize;
use std::fmt::Write as _;

const RULE_WIDTH: usize = 60;

/// Banner printed before the scan starts.
pub fn compose_banner(project: &str) -> String {
    format!("  Running QA Inspector on {}...", project)
}

/// Compose the human report (pure) for testing and printing.
pub fn render_report(res: &ScanResult, color: bool) -> String {
    let mut out = String::new();
    if res.issues.is_empty() {
        let line = "ALL CLEAR. No issues found.";
        let line = if color {
            line.green().bold().to_string()
        } else {
            line.to_string()
        };
        let _ = writeln!(out, "\n  {}\n", line);
        return out;
    }

    let title = if color {
        "QA INSPECTOR REPORT".bold().to_string()
    } else {
        "QA INSPECTOR REPORT".to_string()
    };
    let _ = writeln!(out, "\n  {}", title);
    let _ = writeln!(out, "  {}", "=".repeat(RULE_WIDTH));
    let _ = writeln!(
        out,
        "  {} critical | {} warnings | {} minor\n",
        res.summary.critical, res.summary.warnings, res.summary.minor
    );

    for severity in Severity::ALL {
        let mut items = res.by_severity(severity).peekable();
        if items.peek().is_none() {
            continue;
        }
        let _ = writeln!(out, "  {}", label(severity, color));
        for is in items {
            let file = if color {
                is.file.bold().to_string()
            } else {
                is.file.clone()
            };
            let _ = writeln!(out, "    {}: {}", file, is.message);
        }
        out.push('\n');
    }
    out
}

fn label(severity: Severity, color: bool) -> String {
    let text = format!("[{}]", severity.label());
    if !color {
        return text;
    }
    match severity {
        Severity::Critical => text.red().bold().to_string(),
        Severity::Warning => text.yellow().bold().to_string(),
        Severity::Minor => text.blue().bold().to_string(),
    }
}

/// Print the report to stdout.
pub fn print_report(res: &ScanResult, color: bool) {
    print!("{}", render_report(res, color));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Issue;

    #[test]
    fn test_all_clear() {
        let res = ScanResult::from_issues(Vec::new(), 4);
        assert_eq!(
            render_report(&res, false),
            "\n  ALL CLEAR. No issues found.\n\n"
        );
    }

    #[test]
    fn test_groups_in_fixed_severity_order() {
        let res = ScanResult::from_issues(
            vec![
                Issue::new(Severity::Minor, "prep/execsummary-2.json", "No keywords defined."),
                Issue::new(Severity::Critical, "index.html", "index.html not found!"),
                Issue::new(Severity::Minor, "print/platebook-1.html", "Em dash overuse (12 instances). Use periods, commas, colons."),
            ],
            2,
        );
        let expected = format!(
            "\n  QA INSPECTOR REPORT\n  {}\n  1 critical | 0 warnings | 2 minor\n\n  [CRITICAL]\n    index.html: index.html not found!\n\n  [MINOR]\n    prep/execsummary-2.json: No keywords defined.\n    print/platebook-1.html: Em dash overuse (12 instances). Use periods, commas, colons.\n\n",
            "=".repeat(60)
        );
        assert_eq!(render_report(&res, false), expected);
    }

    #[test]
    fn test_color_only_decorates() {
        let res = ScanResult::from_issues(
            vec![Issue::new(Severity::Warning, "print/platebook-25.html", "Platebook 25 does not exist.")],
            0,
        );
        let colored = render_report(&res, true);
        assert!(colored.contains("\u{1b}["));
        assert!(colored.contains("Platebook 25 does not exist."));
        assert!(!render_report(&res, false).contains("\u{1b}["));
    }

    #[test]
    fn test_banner() {
        assert_eq!(
            compose_banner("hist213-dashboard"),
            "  Running QA Inspector on hist213-dashboard..."
        );
    }
}
