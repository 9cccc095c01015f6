//! The reconciliation pass: classify every host found in the cookie
//! database against the rule mapping and act on the result.

use std::collections::HashMap;
use tracing::{info, warn};

use crate::cookies::CookieStore;
use crate::error::{Error, Result};
use crate::rules::Decision;

/// How one observed host relates to the rule mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// No rule exists for this host yet
    New,
    /// Rule present with an undecided decision
    Undecided,
    /// Rule says keep the cookies
    Keep,
    /// Rule says delete the cookies
    Delete,
}

/// Classifies a single host by joining it against the rule mapping.
pub fn classify(host: &str, rules: &HashMap<String, Decision>) -> Classification {
    match rules.get(host) {
        None => Classification::New,
        Some(Decision::Undecided) => Classification::Undecided,
        Some(Decision::Keep) => Classification::Keep,
        Some(Decision::Delete) => Classification::Delete,
    }
}

/// Everything one reconciliation run produced. Built fresh per run; the
/// durable side effects (deletions, the rule-file append) happen elsewhere.
#[derive(Debug, Default)]
pub struct ReconcileOutcome {
    /// Hosts with no rule yet, in discovery order
    pub new_hosts: Vec<String>,
    /// Hosts whose rule is still undecided
    pub undecided_hosts: Vec<String>,
    /// Hosts with a keep rule, retained for diagnostics
    pub keep_hosts: Vec<String>,
    /// Hosts whose cookies were deleted (or would be, under dry-run)
    pub deleted_hosts: Vec<String>,
    /// Total cookie rows removed
    pub rows_deleted: usize,
    /// Hosts whose deletion failed, with the error; these never abort the run
    pub failures: Vec<(String, Error)>,
}

/// Runs one reconciliation pass.
///
/// Pulls the distinct host set once (failure here is fatal), classifies each
/// host, and deletes immediately on a delete rule. A single host's failed
/// deletion is recorded and the pass continues; halting midway would leave
/// partial deletions with no report of what was left unprocessed.
///
/// Every host lands in exactly one bucket. Bucket ordering follows the
/// backend's host ordering, which is not deterministic across runs.
pub fn reconcile(
    rules: &HashMap<String, Decision>,
    cookies: &CookieStore,
    dry_run: bool,
) -> Result<ReconcileOutcome> {
    let hosts = cookies.distinct_hosts()?;
    info!(action = "start", component = "reconcile", host_count = hosts.len(), dry_run = dry_run, "Starting reconciliation pass");

    let mut outcome = ReconcileOutcome::default();
    for host in hosts {
        match classify(&host, rules) {
            Classification::New => outcome.new_hosts.push(host),
            Classification::Undecided => outcome.undecided_hosts.push(host),
            Classification::Keep => outcome.keep_hosts.push(host),
            Classification::Delete => {
                if dry_run {
                    info!(action = "skip", component = "reconcile", host = %host, "Dry run, would delete cookies for host");
                    outcome.deleted_hosts.push(host);
                    continue;
                }
                match cookies.delete_by_host(&host) {
                    Ok(removed) => {
                        outcome.rows_deleted += removed;
                        outcome.deleted_hosts.push(host);
                    }
                    Err(e) => {
                        warn!(action = "delete", component = "reconcile", host = %host, error = %e, "Failed to delete cookies for host");
                        outcome.failures.push((host, e));
                    }
                }
            }
        }
    }

    info!(
        action = "complete",
        component = "reconcile",
        new = outcome.new_hosts.len(),
        undecided = outcome.undecided_hosts.len(),
        keep = outcome.keep_hosts.len(),
        deleted = outcome.deleted_hosts.len(),
        rows_deleted = outcome.rows_deleted,
        failed = outcome.failures.len(),
        "Reconciliation pass completed"
    );
    Ok(outcome)
}
