//! CLI argument parsing via `clap`.

use crate::config::CliOverrides;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "qa-inspector",
    version,
    about = "Content QA inspector for the platebook dashboard",
    long_about = "Scan platebook pages, exec summary prep files, and the dashboard for known content defects.\n\nConfiguration precedence: CLI > qa-inspector.toml > defaults.\nExit status is 1 when any CRITICAL issue is found, 2 when the scan cannot run.",
    after_help = "Examples:\n  qa-inspector\n  qa-inspector --repo-root ../hist213-dashboard --no-color\n  QA_INSPECTOR_LOG=debug qa-inspector"
)]
/// Top-level CLI options.
pub struct Cli {
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Accepted for compatibility; no fixes are applied")]
    pub fix: bool,
    #[arg(long, help = "Project root (default: nearest dir with qa-inspector.toml or .git)")]
    pub repo_root: Option<String>,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Disable colored output")]
    pub no_color: bool,
    #[arg(short, long, action = clap::ArgAction::SetTrue, help = "Log scan progress to stderr")]
    pub verbose: bool,
}

impl Cli {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            repo_root: self.repo_root.clone(),
            no_color: self.no_color,
            fix: self.fix,
        }
    }
}
