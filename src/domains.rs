//! Domain list collection.
//!
//! Domains come from two sources: positional command-line arguments and an
//! optional file with one domain per line. File-sourced domains are appended
//! after the CLI-sourced ones. No hostname syntax validation is performed and
//! duplicates are kept.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::error;

use crate::report;

/// Builds the full domain sequence from CLI arguments and an optional file.
///
/// An unreadable file is reported as an error and contributes zero domains;
/// the run continues with whatever domains came from the command line.
pub fn collect_domains(cli_domains: &[String], file: Option<&Path>) -> Vec<String> {
    let mut domains = cli_domains.to_vec();

    if let Some(path) = file {
        match read_domain_file(path) {
            Ok(from_file) => domains.extend(from_file),
            Err(e) => {
                error!("Could not read domain file {}: {e}", path.display());
                report::print_user_error(&format!("Error loading domain list: {e}"));
            }
        }
    }

    domains
}

/// Reads a domain file: one domain per line, whitespace trimmed, blank lines
/// dropped, original order preserved.
fn read_domain_file(path: &Path) -> std::io::Result<Vec<String>> {
    let reader = BufReader::new(File::open(path)?);
    let mut domains = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            domains.push(trimmed.to_string());
        }
    }

    Ok(domains)
}
