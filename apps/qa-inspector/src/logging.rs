//! Diagnostic logging to stderr via `tracing`.
//!
//! Stdout carries only the report, so the subscriber always writes to
//! stderr. `QA_INSPECTOR_LOG` takes an `EnvFilter` directive; without it the
//! level is `warn`, or `debug` when `--verbose` is set.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "QA_INSPECTOR_LOG";

/// Filter directive used when `QA_INSPECTOR_LOG` is unset.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Install the global subscriber. Safe to call once per process.
pub fn init(verbose: bool, color: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .with_ansi(color)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "warn");
        assert_eq!(default_directive(true), "debug");
    }
}
