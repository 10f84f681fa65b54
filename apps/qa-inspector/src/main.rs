//! QA inspector binary entry point.
//! Resolves configuration, runs the scan, and prints the report.

use clap::Parser;
use qa_inspector::cli::Cli;
use qa_inspector::{config, logging, output, scan, utils};
use tracing::debug;

fn main() {
    let cli = Cli::parse();
    let eff = match config::resolve_effective(&cli.overrides()) {
        Ok(eff) => eff,
        Err(e) => {
            let color = !cli.no_color && std::env::var_os("NO_COLOR").is_none();
            eprintln!("{} {}", utils::error_prefix(color), e);
            std::process::exit(2);
        }
    };
    logging::init(cli.verbose, eff.color);

    if eff.fix {
        debug!("fix mode requested; no fixer exists");
        eprintln!(
            "{} --fix is accepted but not implemented; no files will be changed.",
            utils::note_prefix(eff.color)
        );
    }

    println!("{}", output::compose_banner(&eff.project));
    let result = match scan::run_scan(&eff) {
        Ok(res) => res,
        Err(e) => {
            eprintln!("{} {}", utils::error_prefix(eff.color), e);
            std::process::exit(2);
        }
    };
    output::print_report(&result, eff.color);
    std::process::exit(result.exit_code());
}
