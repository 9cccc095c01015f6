//! Rule file loading and persistence.
//!
//! The rule file is line-oriented CSV with no header: `host,decision` where
//! `decision` is `keep`, `delete`, or `undecided` (case-insensitive). A
//! missing or empty decision field reads as undecided, which is also how
//! newly discovered hosts are appended (`host,`).

use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

use crate::error::{Error, Result};

/// Operator decision for a single host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Keep,
    Delete,
    Undecided,
}

impl Decision {
    /// Parses a decision token case-insensitively. Unrecognized or empty
    /// tokens fall back to `Undecided` rather than failing the load.
    pub fn parse(token: &str) -> Decision {
        match token.trim().to_ascii_lowercase().as_str() {
            "keep" => Decision::Keep,
            "delete" => Decision::Delete,
            _ => Decision::Undecided,
        }
    }
}

/// Parses one rule line into `(host, decision)`.
///
/// `line` must already be trimmed and non-empty. Tolerates a trailing comma
/// (`host,`) and extra fields beyond the second. A line whose host field is
/// empty (for example `,delete`) is malformed.
fn parse_rule_line(line: &str, line_number: usize) -> Result<(String, Decision)> {
    let mut fields = line.split(',');
    let host = fields.next().unwrap_or("").trim();
    if host.is_empty() {
        return Err(Error::MalformedRecord {
            line: line_number,
            reason: "empty host field".to_string(),
        });
    }
    let decision = fields
        .next()
        .map(Decision::parse)
        .unwrap_or(Decision::Undecided);
    Ok((host.to_string(), decision))
}

/// Loads the host -> decision mapping from the rule file.
///
/// Fails if the file does not exist. Malformed lines are skipped with a
/// warning so one bad record cannot block the whole run. When the same host
/// appears more than once, the last occurrence wins.
pub fn load_rules(path: &Path) -> Result<HashMap<String, Decision>> {
    if !path.exists() {
        return Err(Error::RulesNotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    let mut rules = HashMap::new();
    for (line_num, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_rule_line(line, line_num + 1) {
            Ok((host, decision)) => {
                rules.insert(host, decision);
            }
            Err(e) => {
                warn!(action = "parse", component = "rule_file", line_number = line_num + 1, error = %e, "Skipping malformed rule line");
            }
        }
    }

    info!(action = "loaded", component = "rule_file", rule_count = rules.len(), file_path = ?path, "Loaded rules");
    Ok(rules)
}

/// Appends one undecided record per host to the rule file.
///
/// Append-only: existing records are never rewritten or reordered. Does not
/// touch the file at all when `hosts` is empty. A file that does not end in
/// a newline gets one first so the appended records start on their own line.
pub fn append_hosts(path: &Path, hosts: &[String]) -> Result<()> {
    if hosts.is_empty() {
        return Ok(());
    }

    let existing = fs::read(path)?;
    let mut file = OpenOptions::new().append(true).open(path)?;
    if !existing.is_empty() && existing.last() != Some(&b'\n') {
        writeln!(file)?;
    }
    for host in hosts {
        writeln!(file, "{host},")?;
    }

    info!(action = "append", component = "rule_file", host_count = hosts.len(), file_path = ?path, "Appended new hosts as undecided");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    fn rules_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn parses_decision_tokens_case_insensitively() {
        assert_eq!(Decision::parse("keep"), Decision::Keep);
        assert_eq!(Decision::parse("KEEP"), Decision::Keep);
        assert_eq!(Decision::parse("Delete"), Decision::Delete);
        assert_eq!(Decision::parse("undecided"), Decision::Undecided);
    }

    #[test]
    fn unknown_or_empty_decision_reads_as_undecided() {
        assert_eq!(Decision::parse(""), Decision::Undecided);
        assert_eq!(Decision::parse("purge"), Decision::Undecided);
    }

    #[test]
    fn parses_host_with_trailing_comma() {
        let (host, decision) = parse_rule_line("example.com,", 1).unwrap();
        assert_eq!(host, "example.com");
        assert_eq!(decision, Decision::Undecided);
    }

    #[test]
    fn parses_host_without_decision_field() {
        let (host, decision) = parse_rule_line("example.com", 1).unwrap();
        assert_eq!(host, "example.com");
        assert_eq!(decision, Decision::Undecided);
    }

    #[test]
    fn empty_host_field_is_malformed() {
        let err = parse_rule_line(",delete", 7).unwrap_err();
        match err {
            Error::MalformedRecord { line, .. } => assert_eq!(line, 7),
            other => panic!("expected MalformedRecord, got {other:?}"),
        }
    }

    #[test]
    fn load_maps_hosts_to_decisions() {
        let file = rules_file("example.com,keep\nbad.com,delete\npending.com,\n");
        let rules = load_rules(file.path()).unwrap();
        assert_eq!(rules.len(), 3);
        assert_eq!(rules["example.com"], Decision::Keep);
        assert_eq!(rules["bad.com"], Decision::Delete);
        assert_eq!(rules["pending.com"], Decision::Undecided);
    }

    #[test]
    fn load_fails_when_file_is_missing() {
        let err = load_rules(Path::new("/nonexistent/Cookies.csv")).unwrap_err();
        assert!(matches!(err, Error::RulesNotFound(_)));
    }

    #[test]
    fn load_skips_malformed_lines_and_keeps_the_rest() {
        let file = rules_file("example.com,keep\n,delete\nbad.com,delete\n");
        let rules = load_rules(file.path()).unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules["example.com"], Decision::Keep);
        assert_eq!(rules["bad.com"], Decision::Delete);
    }

    #[test]
    fn duplicate_hosts_last_occurrence_wins() {
        let file = rules_file("example.com,keep\nexample.com,delete\n");
        let rules = load_rules(file.path()).unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules["example.com"], Decision::Delete);
    }

    #[test]
    fn append_writes_trailing_comma_records_in_order() {
        let file = rules_file("example.com,keep\n");
        let hosts = vec!["new.com".to_string(), "later.com".to_string()];
        append_hosts(file.path(), &hosts).unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        assert_eq!(content, "example.com,keep\nnew.com,\nlater.com,\n");
    }

    #[test]
    fn append_is_a_noop_for_empty_host_list() {
        let file = rules_file("example.com,keep\n");
        append_hosts(file.path(), &[]).unwrap();
        let content = fs::read_to_string(file.path()).unwrap();
        assert_eq!(content, "example.com,keep\n");
    }

    #[test]
    fn append_preserves_a_file_without_trailing_newline() {
        let file = rules_file("example.com,keep");
        append_hosts(file.path(), &["new.com".to_string()]).unwrap();
        let content = fs::read_to_string(file.path()).unwrap();
        assert_eq!(content, "example.com,keep\nnew.com,\n");
    }

    #[test]
    fn appended_hosts_load_back_as_undecided() {
        let file = rules_file("example.com,keep\n");
        append_hosts(file.path(), &["new.com".to_string()]).unwrap();
        let rules = load_rules(file.path()).unwrap();
        assert_eq!(rules["new.com"], Decision::Undecided);
    }
}
