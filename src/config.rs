//! Configuration types and CLI options.
//!
//! This module defines the command-line surface of the tool. The same struct
//! doubles as the library configuration so callers can construct it
//! programmatically without going through argument parsing.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::lookup::RecordType;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Command-line options and library configuration.
///
/// At least one of the record-type flags must be set for any check to run;
/// that guard lives in [`crate::run_checks`], not in the parser, so that a
/// bare invocation still prints a helpful message instead of a usage error.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "mail_auth_check",
    about = "DNS record checker for SPF, DMARC, and DKIM.",
    disable_version_flag = true
)]
pub struct Config {
    /// Domain(s) to check
    pub domains: Vec<String>,

    /// File containing a list of domains to check, one per line
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Check SPF records
    #[arg(short, long)]
    pub spf: bool,

    /// Check DMARC records
    #[arg(short, long)]
    pub dmarc: bool,

    /// Check DKIM records
    #[arg(short = 'k', long)]
    pub dkim: bool,

    /// Print the raw lookup output after each status line
    #[arg(short = 'V', long)]
    pub verbose: bool,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,
}

impl Config {
    /// Returns the enabled record types in their fixed check order.
    ///
    /// The order is always SPF, DMARC, DKIM regardless of how the flags were
    /// grouped on the command line.
    pub fn selected_records(&self) -> Vec<RecordType> {
        let mut selected = Vec::new();
        if self.spf {
            selected.push(RecordType::Spf);
        }
        if self.dmarc {
            selected.push(RecordType::Dmarc);
        }
        if self.dkim {
            selected.push(RecordType::Dkim);
        }
        selected
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domains: Vec::new(),
            file: None,
            spf: false,
            dmarc: false,
            dkim: false,
            verbose: false,
            log_level: LogLevel::Warn,
        }
    }
}
