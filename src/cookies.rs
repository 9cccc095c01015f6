//! Cookie database access.
//!
//! Chromium-family browsers keep cookies in a SQLite database with a
//! `cookies` table keyed by `host_key`. The owning browser must be closed
//! while a sweep runs; a busy timeout keeps a stale lock from hanging the
//! run forever, but concurrent writers are out of scope.

use rusqlite::{Connection, Result as SqliteResult};
use std::path::Path;
use std::time::Duration;
use tracing::info;

use crate::error::{Error, Result};

/// Queries against the discovery and delete statements wait this long on a
/// locked database before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(30);

/// Shortest host key accepted by [`CookieStore::delete_by_host`].
const MIN_DELETE_HOST_LEN: usize = 2;

#[derive(Debug)]
pub struct CookieStore {
    conn: Connection,
}

impl CookieStore {
    /// Opens the cookie database at `path`.
    pub fn open(path: &Path) -> Result<CookieStore> {
        if !path.exists() {
            return Err(Error::DatabaseNotFound(path.to_path_buf()));
        }

        let conn = Connection::open(path)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        info!(action = "open", component = "cookie_store", path = ?path, "Connected to cookie database");
        Ok(CookieStore { conn })
    }

    /// Returns every distinct host key present in the database. Ordering is
    /// whatever SQLite yields and callers must not rely on it.
    pub fn distinct_hosts(&self) -> Result<Vec<String>> {
        let hosts: Vec<String> = self
            .conn
            .prepare("SELECT DISTINCT host_key FROM cookies")?
            .query_map([], |row| row.get(0))?
            .collect::<SqliteResult<Vec<String>>>()?;

        info!(action = "query", component = "cookie_store", host_count = hosts.len(), "Found distinct host keys");
        Ok(hosts)
    }

    /// Deletes every cookie row whose host key exactly matches `host`,
    /// returning the number of rows removed.
    ///
    /// Host keys shorter than two characters are rejected before any SQL
    /// runs. Deletions are auto-committed, there is no rollback.
    pub fn delete_by_host(&self, host: &str) -> Result<usize> {
        if host.len() < MIN_DELETE_HOST_LEN {
            return Err(Error::HostTooShort(host.to_string()));
        }

        let removed = self
            .conn
            .execute("DELETE FROM cookies WHERE host_key = ?1", [host])?;
        info!(action = "delete", component = "cookie_store", host = host, rows_removed = removed, "Deleted cookies for host");
        Ok(removed)
    }
}
