//! Address book schema history.
//!
//! # Responsibility
//! - List every schema step of the address book file, oldest first.
//! - Bring an older file up to the layout `SqlitePersonRepository` expects.
//!
//! # Invariants
//! - Steps run inside one transaction; a failed step leaves the file at its
//!   previous version.
//! - `PRAGMA user_version` equals the number of the last applied step.
//! - Files written by a newer build are refused, never downgraded.

use crate::db::{DbError, DbResult};
use log::{error, info};
use rusqlite::{Connection, Transaction};

/// One schema step: `persons`/`person_tags`/`address_book_meta` tables,
/// then the `persons.remark` column.
const SCHEMA_STEPS: [(u32, &str); 2] = [
    (1, include_str!("0001_init.sql")),
    (2, include_str!("0002_remarks.sql")),
];

/// Schema version written by this build.
pub fn latest_version() -> u32 {
    SCHEMA_STEPS.last().map_or(0, |(version, _)| *version)
}

/// Upgrades the address book schema on `conn` to `latest_version()`.
///
/// # Errors
/// - `UnsupportedSchemaVersion` when the file is newer than this build.
/// - `MigrationFailed` naming the step whose SQL was rejected.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let from_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    let latest = latest_version();
    if from_version > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: from_version,
            latest_supported: latest,
        });
    }
    if from_version == latest {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for (version, sql) in SCHEMA_STEPS
        .iter()
        .filter(|(version, _)| *version > from_version)
    {
        if let Err(source) = run_step(&tx, *version, sql) {
            error!(
                "event=db_migrate module=db status=error from_version={from_version} failed_version={version}"
            );
            return Err(DbError::MigrationFailed {
                version: *version,
                source,
            });
        }
    }
    tx.commit()?;

    info!("event=db_migrate module=db status=ok from_version={from_version} to_version={latest}");
    Ok(())
}

fn run_step(tx: &Transaction<'_>, version: u32, sql: &str) -> rusqlite::Result<()> {
    tx.execute_batch(sql)?;
    tx.pragma_update(None, "user_version", version)
}
