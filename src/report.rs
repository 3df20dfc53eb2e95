//! Console output formatting.
//!
//! All user-facing lines go through the stateless helpers here: a severity
//! enum plus a message in, a colored line out. Printing sites hold no
//! formatting state of their own.

use colored::{ColoredString, Colorize};

use crate::error_handling::LookupError;

/// Severity of a reported line, mapped to its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// A record was found (green).
    Success,
    /// A record was not found, or something went wrong (red).
    Failure,
}

/// Applies the severity's color to a message.
pub fn paint(severity: Severity, message: &str) -> ColoredString {
    match severity {
        Severity::Success => message.green(),
        Severity::Failure => message.red(),
    }
}

/// Prints the uncolored header line introducing a domain's checks.
pub fn print_domain_header(domain: &str) {
    println!("Checking records for domain: {domain}");
}

/// Prints the pass/fail line for one record check.
pub fn print_record_status(label: &str, exists: bool) {
    if exists {
        println!("{}", paint(Severity::Success, &format!("{label} record exists!")));
    } else {
        println!("{}", paint(Severity::Failure, &format!("No {label} record found.")));
    }
}

/// Prints the raw lookup output (verbose mode).
pub fn print_raw_output(output: &str) {
    println!("{output}");
}

/// Prints the error line for a lookup that failed to run.
pub fn print_check_error(label: &str, error: &LookupError) {
    println!(
        "{}",
        paint(
            Severity::Failure,
            &format!("Error checking {label} record: {error}")
        )
    );
}

/// Prints a user/configuration error (no domains, no record types, bad file).
pub fn print_user_error(message: &str) {
    println!("{}", paint(Severity::Failure, message));
}
