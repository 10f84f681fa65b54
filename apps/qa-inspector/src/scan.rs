//! Scan runner: discovers inputs, applies every rule, and collects issues.
//!
//! Produces a `ScanResult` with issues and a summary. Issues are appended in
//! a fixed order so repeated runs over the same tree report identically:
//! platebooks, exec summaries, dashboard rules, missing platebooks, and
//! finally dashboard links.

use crate::checks::dashboard::{self, LinkRules};
use crate::checks::{exec_summary, platebook, read_source};
use crate::config::Effective;
use crate::discover::{discover, Discovery};
use crate::error::ScanError;
use crate::models::{Issue, ScanResult};
use crate::utils::display_path;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Run the full checklist against the project rooted at `eff.repo_root`.
///
/// The only error is an unreadable root; everything else becomes an issue.
pub fn run_scan(eff: &Effective) -> Result<ScanResult, ScanError> {
    fs::read_dir(&eff.repo_root).map_err(|source| ScanError::RootUnreadable {
        path: eff.repo_root.clone(),
        source,
    })?;

    let found = discover(eff);
    let mut issues: Vec<Issue> = Vec::new();
    let mut files_count: usize = 0;

    scan_platebooks(eff, &found, &mut issues, &mut files_count);
    scan_exec_summaries(eff, &found, &mut issues, &mut files_count);

    let dash_display = display_path(&eff.repo_root, &eff.dashboard_path());
    let dash_content = match found.dashboard.as_ref() {
        Some(path) => {
            files_count += 1;
            match read_source(path, &dash_display) {
                Ok(s) => Some(s),
                Err(is) => {
                    issues.push(is);
                    None
                }
            }
        }
        None => {
            issues.push(dashboard::dashboard_not_found(&dash_display));
            None
        }
    };

    if let Some(content) = dash_content.as_deref() {
        debug!(file = %dash_display, "dashboard rules");
        issues.extend(dashboard::links_in_main_content(&dash_display, content));
        issues.extend(dashboard::plates_without_exec_summary(
            &dash_display,
            content,
            &eff.prep_path(),
            &eff.prep_dir,
        ));
        issues.extend(dashboard::duplicated_deep_dives(&dash_display, content));
    }

    issues.extend(platebook::missing_platebooks(
        &eff.repo_root,
        &eff.print_path(),
        found.plates,
    ));

    if let Some(content) = dash_content.as_deref() {
        let rules = LinkRules::new(&eff.print_dir);
        issues.extend(rules.broken_links(&dash_display, &eff.repo_root, content));
    }

    Ok(ScanResult::from_issues(issues, files_count))
}

fn scan_platebooks(
    eff: &Effective,
    found: &Discovery,
    issues: &mut Vec<Issue>,
    files_count: &mut usize,
) {
    for path in &found.platebooks {
        let file = display_path(&eff.repo_root, path);
        *files_count += 1;
        let content = match read_source(path, &file) {
            Ok(s) => s,
            Err(is) => {
                issues.push(is);
                continue;
            }
        };
        debug!(file = %file, "platebook rules");
        let dir = path.parent().unwrap_or(Path::new("."));
        issues.extend(platebook::check_platebook(
            &file,
            dir,
            &content,
            &eff.thresholds,
        ));
    }
}

fn scan_exec_summaries(
    eff: &Effective,
    found: &Discovery,
    issues: &mut Vec<Issue>,
    files_count: &mut usize,
) {
    for path in &found.exec_summaries {
        let file = display_path(&eff.repo_root, path);
        *files_count += 1;
        let content = match read_source(path, &file) {
            Ok(s) => s,
            Err(is) => {
                issues.push(is);
                continue;
            }
        };
        debug!(file = %file, "exec summary rules");
        issues.extend(exec_summary::check_exec_summary(
            &file,
            &content,
            eff.thresholds.summary_min_chars,
        ));
    }
}
