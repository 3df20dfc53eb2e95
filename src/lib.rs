//! mail_auth_check library: SPF/DMARC/DKIM record checking functionality
//!
//! This library provides the core logic for checking whether domains publish
//! SPF, DMARC, and DKIM anti-spoofing DNS records. It shells out to the
//! external lookup utilities (`nslookup`, `dig`) via argument vectors and
//! pattern-matches their text output for the record marker substrings.
//!
//! # Example
//!
//! ```no_run
//! use mail_auth_check::{run_checks, Config};
//!
//! let config = Config {
//!     domains: vec!["example.com".to_string()],
//!     spf: true,
//!     dmarc: true,
//!     ..Default::default()
//! };
//!
//! let report = run_checks(&config);
//! println!("{} of {} checks found a record",
//!          report.records_found, report.checks_run);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod domains;
pub mod error_handling;
pub mod initialization;
pub mod lookup;
pub mod report;

// Re-export public API
pub use config::{Config, LogLevel};
pub use run::{run_checks, CheckReport};

// Internal run module (contains the main checking logic)
mod run {
    use log::debug;

    use crate::config::Config;
    use crate::domains::collect_domains;
    use crate::lookup::{record_marker_present, run_lookup, RecordType};
    use crate::report;

    /// Summary of a completed check run.
    ///
    /// Returned by [`run_checks`] so the binary can print a closing summary
    /// line. All counters are zero when guard conditions (no domains, no
    /// record types selected) prevented any lookups from running.
    #[derive(Debug, Default, Clone, PartialEq, Eq)]
    pub struct CheckReport {
        /// Number of domains that were checked.
        pub domains: usize,
        /// Total number of (domain, record type) checks attempted.
        pub checks_run: usize,
        /// Checks whose lookup output contained a record marker.
        pub records_found: usize,
        /// Checks whose lookup output contained no record marker.
        pub records_missing: usize,
        /// Checks where the lookup command itself failed to run.
        pub check_errors: usize,
    }

    /// Runs the configured record checks for every collected domain.
    ///
    /// Domains come from the positional arguments plus the optional domain
    /// file, in that order. For each domain the enabled checks run in fixed
    /// order (SPF, DMARC, DKIM), strictly sequentially, one external process
    /// at a time. A failed lookup is reported inline and never stops the
    /// remaining checks.
    ///
    /// Guard conditions are user errors, not failures: with no domains or no
    /// record types selected this prints a red message, runs nothing, and
    /// returns an empty report.
    pub fn run_checks(config: &Config) -> CheckReport {
        let mut report = CheckReport::default();

        let domains = collect_domains(&config.domains, config.file.as_deref());
        let selected = config.selected_records();

        if domains.is_empty() {
            report::print_user_error("No domains provided to check.");
            return report;
        }
        if selected.is_empty() {
            report::print_user_error(
                "No record types specified. Please select at least one record type to check (-s, -d, -k).",
            );
            return report;
        }

        report.domains = domains.len();
        for domain in &domains {
            report::print_domain_header(domain);
            for record in &selected {
                check_record(*record, domain, config.verbose, &mut report);
            }
        }

        report
    }

    /// Runs one lookup and reports its outcome.
    ///
    /// The lookup command's exit status is not inspected: only its captured
    /// stdout matters. Spawn failures (e.g. the lookup tool is not on the
    /// PATH) are reported as a red error line and counted, nothing more.
    fn check_record(record: RecordType, domain: &str, verbose: bool, report: &mut CheckReport) {
        let command = record.command(domain);
        debug!("Running lookup: {}", command);

        report.checks_run += 1;
        match run_lookup(&command) {
            Ok(output) => {
                let exists = record_marker_present(&output);
                report::print_record_status(record.label(), exists);
                if exists {
                    report.records_found += 1;
                } else {
                    report.records_missing += 1;
                }
                if verbose {
                    report::print_raw_output(&output);
                }
            }
            Err(e) => {
                report::print_check_error(record.label(), &e);
                report.check_errors += 1;
            }
        }
    }
}
