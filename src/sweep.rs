//! One full sweep: load rules, open the cookie database, reconcile, and
//! persist newly discovered hosts.

use anyhow::{Context, Result};
use std::time::Instant;
use tracing::{info, warn};

use crate::{cookies::CookieStore, paths, reconcile, rules, Args, ReconcileOutcome};

/// Runs a complete sweep as configured by `args`.
///
/// Precondition: the browser that owns the cookie database must be closed.
/// Fatal errors (missing rule file, missing or unreadable database) abort
/// before any cookies are touched; per-host delete failures are carried in
/// the returned outcome instead.
pub fn run_sweep(args: &Args) -> Result<ReconcileOutcome> {
    let start_time = Instant::now();
    info!(action = "start", component = "sweep", "Starting cookie sweep");

    let loaded_rules = rules::load_rules(&args.rules)
        .with_context(|| format!("Failed to load rules from {:?}", args.rules))?;
    info!(action = "rules", component = "sweep", rule_count = loaded_rules.len(), "Rules loaded");

    let db_path = match &args.cookies_path {
        Some(path) => path.clone(),
        None => paths::cookie_db_path(&args.browser, &args.profile)?,
    };
    let store = CookieStore::open(&db_path)
        .with_context(|| format!("Failed to open cookie database at {db_path:?}"))?;

    let outcome = reconcile::reconcile(&loaded_rules, &store, args.dry_run)?;
    drop(store);

    if args.dry_run {
        info!(action = "skip", component = "sweep", "Dry run, leaving rule file untouched");
    } else {
        rules::append_hosts(&args.rules, &outcome.new_hosts)
            .with_context(|| format!("Failed to append new hosts to {:?}", args.rules))?;
    }

    if !outcome.failures.is_empty() {
        warn!(action = "complete", component = "sweep", failed = outcome.failures.len(), "Sweep completed with per-host failures");
    }

    let total_time = start_time.elapsed();
    info!(action = "complete", component = "sweep", duration_ms = total_time.as_millis(), "Sweep completed");
    Ok(outcome)
}

/// Prints the operator-facing summary for a finished sweep.
pub fn print_summary(outcome: &ReconcileOutcome, args: &Args) {
    println!("\n--- {} Cookie Sweep Summary ---", args.browser);
    if args.dry_run {
        println!("(dry run: nothing was deleted or appended)");
    }

    println!(
        "Hosts seen: {} ({} keep, {} undecided, {} new, {} delete)",
        outcome.new_hosts.len()
            + outcome.undecided_hosts.len()
            + outcome.keep_hosts.len()
            + outcome.deleted_hosts.len()
            + outcome.failures.len(),
        outcome.keep_hosts.len(),
        outcome.undecided_hosts.len(),
        outcome.new_hosts.len(),
        outcome.deleted_hosts.len() + outcome.failures.len(),
    );
    println!(
        "Cookie rows deleted: {} across {} hosts",
        outcome.rows_deleted,
        outcome.deleted_hosts.len()
    );

    if !outcome.new_hosts.is_empty() {
        println!("\nWARNING: new hosts found (appended to rule file, pending a decision):");
        for host in &outcome.new_hosts {
            println!("- {host}");
        }
    }

    if !outcome.undecided_hosts.is_empty() {
        println!("\nWARNING: undecided hosts with no decision yet:");
        for host in &outcome.undecided_hosts {
            println!("- {host}");
        }
    }

    if !outcome.failures.is_empty() {
        println!("\nWARNING: deletions that failed:");
        for (host, error) in &outcome.failures {
            println!("- {host}: {error}");
        }
    }
}
