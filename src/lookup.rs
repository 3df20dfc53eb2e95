//! Record types, lookup command construction, and marker matching.
//!
//! Each record type maps to a distinct external lookup command and query
//! name. Commands are built as argument vectors and executed directly, never
//! through a shell, so domain strings are passed to the lookup tool verbatim
//! with no shell interpretation.

use std::fmt;
use std::process::Command;
use std::sync::LazyLock;

use regex::Regex;

use crate::error_handling::LookupError;

/// The DKIM selector queried for every domain.
pub const DKIM_SELECTOR: &str = "selector1";

/// Marker substrings that indicate a published record.
///
/// Every lookup is matched against the full marker set, not just the tag of
/// the record type being checked. A DKIM lookup whose answer happens to
/// contain `v=spf1` therefore counts as found. This is a known discrepancy,
/// kept for compatibility with existing output.
static RECORD_MARKERS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new("(?i)v=spf1").unwrap(),
        Regex::new("(?i)v=DMARC1").unwrap(),
        Regex::new("(?i)v=DKIM").unwrap(),
    ]
});

/// The DNS record types this tool can check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordType {
    /// Sender Policy Framework TXT record on the domain itself.
    Spf,
    /// DMARC policy TXT record on `_dmarc.<domain>`.
    Dmarc,
    /// DKIM public key TXT record on `selector1._domainkey.<domain>`.
    Dkim,
}

impl RecordType {
    /// Human-readable label used in status and error lines.
    pub fn label(&self) -> &'static str {
        match self {
            RecordType::Spf => "SPF",
            RecordType::Dmarc => "DMARC",
            RecordType::Dkim => "DKIM",
        }
    }

    /// The DNS name queried for this record type.
    pub fn query_name(&self, domain: &str) -> String {
        match self {
            RecordType::Spf => domain.to_string(),
            RecordType::Dmarc => format!("_dmarc.{domain}"),
            RecordType::Dkim => format!("{DKIM_SELECTOR}._domainkey.{domain}"),
        }
    }

    /// Builds the external lookup command for this record type.
    ///
    /// SPF and DMARC go through `nslookup -type=txt`; DKIM goes through
    /// `dig txt`. Both tools are expected on the PATH. Their absence is not
    /// checked up front, it surfaces as a spawn error when the lookup runs.
    pub fn command(&self, domain: &str) -> LookupCommand {
        match self {
            RecordType::Spf | RecordType::Dmarc => LookupCommand::new(
                "nslookup",
                vec!["-type=txt".to_string(), self.query_name(domain)],
            ),
            RecordType::Dkim => {
                LookupCommand::new("dig", vec!["txt".to_string(), self.query_name(domain)])
            }
        }
    }
}

/// An external lookup invocation: a program plus its argument vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupCommand {
    /// The program to execute (resolved via the PATH).
    pub program: String,
    /// Arguments passed to the program verbatim.
    pub args: Vec<String>,
}

impl LookupCommand {
    /// Creates a lookup command from a program name and its arguments.
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl fmt::Display for LookupCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Runs a lookup command to completion and captures its stdout as text.
///
/// The command's exit status is deliberately ignored: `nslookup` in
/// particular exits non-zero for names with no TXT answer while still
/// printing useful output. Stdout is decoded lossily and trimmed.
///
/// # Errors
///
/// Returns [`LookupError::Spawn`] when the process cannot be started, e.g.
/// when the lookup tool is not installed.
pub fn run_lookup(command: &LookupCommand) -> Result<String, LookupError> {
    let output = Command::new(&command.program)
        .args(&command.args)
        .output()
        .map_err(|source| LookupError::Spawn {
            program: command.program.clone(),
            source,
        })?;

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Returns true when the output contains any record marker, case-insensitively.
pub fn record_marker_present(output: &str) -> bool {
    RECORD_MARKERS.iter().any(|marker| marker.is_match(output))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_names() {
        assert_eq!(RecordType::Spf.query_name("example.com"), "example.com");
        assert_eq!(
            RecordType::Dmarc.query_name("example.com"),
            "_dmarc.example.com"
        );
        assert_eq!(
            RecordType::Dkim.query_name("example.com"),
            "selector1._domainkey.example.com"
        );
    }

    #[test]
    fn test_spf_and_dmarc_use_nslookup() {
        let spf = RecordType::Spf.command("example.com");
        assert_eq!(spf.program, "nslookup");
        assert_eq!(spf.args, vec!["-type=txt", "example.com"]);

        let dmarc = RecordType::Dmarc.command("example.com");
        assert_eq!(dmarc.program, "nslookup");
        assert_eq!(dmarc.args, vec!["-type=txt", "_dmarc.example.com"]);
    }

    #[test]
    fn test_dkim_uses_dig() {
        let dkim = RecordType::Dkim.command("example.com");
        assert_eq!(dkim.program, "dig");
        assert_eq!(dkim.args, vec!["txt", "selector1._domainkey.example.com"]);
    }

    #[test]
    fn test_command_takes_domain_verbatim() {
        // No shell is involved, so metacharacters stay inert argument text
        let cmd = RecordType::Spf.command("example.com; rm -rf /");
        assert_eq!(cmd.args[1], "example.com; rm -rf /");
    }

    #[test]
    fn test_marker_matching_is_case_insensitive() {
        assert!(record_marker_present("text = \"v=spf1 include:_spf.example.com ~all\""));
        assert!(record_marker_present("V=SPF1 -all"));
        assert!(record_marker_present("\"v=dmarc1; p=reject\""));
        assert!(record_marker_present("v=DKIM1; k=rsa; p=MIGf..."));
    }

    #[test]
    fn test_marker_matching_any_marker_counts() {
        // The marker set is shared across record types
        assert!(record_marker_present("answer: v=DMARC1; p=none"));
        assert!(record_marker_present("answer: v=spf1 -all"));
    }

    #[test]
    fn test_no_marker_in_output() {
        assert!(!record_marker_present(""));
        assert!(!record_marker_present("server can't find example.com: NXDOMAIN"));
        assert!(!record_marker_present("v=spf is too short to be a marker"));
    }

    #[test]
    fn test_lookup_command_display() {
        let cmd = RecordType::Dmarc.command("example.org");
        assert_eq!(cmd.to_string(), "nslookup -type=txt _dmarc.example.org");
    }

    #[test]
    fn test_run_lookup_captures_stdout() {
        // Stub the lookup tool with `echo` so no network is involved
        let cmd = LookupCommand::new(
            "echo",
            vec!["v=spf1 include:_spf.example.com ~all".to_string()],
        );
        let output = run_lookup(&cmd).expect("echo should run");
        assert_eq!(output, "v=spf1 include:_spf.example.com ~all");
        assert!(record_marker_present(&output));
    }

    #[test]
    fn test_run_lookup_trims_output() {
        let cmd = LookupCommand::new("echo", vec!["  spaced  ".to_string()]);
        let output = run_lookup(&cmd).expect("echo should run");
        assert_eq!(output, "spaced");
    }

    #[test]
    fn test_run_lookup_ignores_exit_status() {
        // `false` exits non-zero with empty stdout; that is still Ok here
        let cmd = LookupCommand::new("false", vec![]);
        let output = run_lookup(&cmd).expect("exit status must not be inspected");
        assert_eq!(output, "");
    }

    #[test]
    fn test_run_lookup_spawn_failure() {
        let cmd = LookupCommand::new("mail-auth-check-no-such-tool", vec![]);
        let err = run_lookup(&cmd).expect_err("missing program should fail to spawn");
        assert!(err.to_string().contains("mail-auth-check-no-such-tool"));
    }
}
