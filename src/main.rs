//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `mail_auth_check` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - The closing summary line
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;

use mail_auth_check::initialization::init_logger_with;
use mail_auth_check::{run_checks, Config};

fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    init_logger_with(log_level.into()).context("Failed to initialize logger")?;

    let report = run_checks(&config);

    // Guard conditions (no domains, no record types) already printed their
    // own message; only a run that actually checked something gets a summary.
    if report.checks_run > 0 {
        println!(
            "Checked {} record{} across {} domain{} ({} found, {} missing, {} error{})",
            report.checks_run,
            if report.checks_run == 1 { "" } else { "s" },
            report.domains,
            if report.domains == 1 { "" } else { "s" },
            report.records_found,
            report.records_missing,
            report.check_errors,
            if report.check_errors == 1 { "" } else { "s" },
        );
    }

    Ok(())
}
