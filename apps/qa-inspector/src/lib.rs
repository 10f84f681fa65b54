//! QA inspector core library.
//!
//! Scans a generated platebook site for known content defects and reports
//! them by severity. The binary is a thin wrapper over `scan::run_scan` and
//! `output::render_report`.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `discover`: Locating platebooks, exec summaries, and the dashboard.
//! - `checks`: The rule checklist, one module per file kind.
//! - `scan`: Runs every rule and aggregates issues in report order.
//! - `models`: Issue, summary, and exec summary document types.
//! - `output`: Human report rendering.
//! - `error`: Configuration and fatal scan errors.
//! - `logging`: stderr diagnostics.
//! - `utils`: Supporting helpers.
pub mod checks;
pub mod cli;
pub mod config;
pub mod discover;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod scan;
pub mod utils;
