//! File discovery for platebooks, exec summaries, and the dashboard.
//!
//! Discovery never fails. A missing directory or file simply yields an empty
//! set; the rules decide whether absence is worth reporting.

use crate::config::Effective;
use glob::glob;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const PLATEBOOK_GLOB: &str = "platebook-*.html";
pub const EXEC_SUMMARY_GLOB: &str = "execsummary-*.json";

#[derive(Debug, Default)]
/// Files found under the project root.
pub struct Discovery {
    pub platebooks: Vec<PathBuf>,
    pub exec_summaries: Vec<PathBuf>,
    /// The dashboard entry point, when it exists.
    pub dashboard: Option<PathBuf>,
    pub plates: u32,
}

/// Enumerate inputs under `eff.repo_root`. Lists are sorted by path.
pub fn discover(eff: &Effective) -> Discovery {
    let platebooks = matching(&eff.print_path(), PLATEBOOK_GLOB);
    let exec_summaries = matching(&eff.prep_path(), EXEC_SUMMARY_GLOB);
    let dash = eff.dashboard_path();
    let dashboard = dash.is_file().then_some(dash);
    info!(
        platebooks = platebooks.len(),
        exec_summaries = exec_summaries.len(),
        dashboard = dashboard.is_some(),
        "discovered inputs"
    );
    Discovery {
        platebooks,
        exec_summaries,
        dashboard,
        plates: eff.plates,
    }
}

/// Expected platebook path for plate `n`.
pub fn platebook_path(print_dir: &Path, n: u32) -> PathBuf {
    print_dir.join(format!("platebook-{}.html", n))
}

/// Expected exec summary path for plate `n`.
pub fn exec_summary_path(prep_dir: &Path, n: &str) -> PathBuf {
    prep_dir.join(format!("execsummary-{}.json", n))
}

fn matching(dir: &Path, pattern: &str) -> Vec<PathBuf> {
    // Only the directory is escaped; the file pattern keeps its wildcard
    let pattern = format!(
        "{}/{}",
        glob::Pattern::escape(&dir.to_string_lossy()),
        pattern
    );
    debug!(glob = %pattern, "collecting");
    let mut targets: Vec<PathBuf> = match glob(&pattern) {
        Ok(paths) => paths.flatten().filter(|p| p.is_file()).collect(),
        Err(_) => Vec::new(),
    };
    targets.sort();
    targets
}
