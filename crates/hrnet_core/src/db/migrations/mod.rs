//! Ordered schema scripts for the slot database.
//!
//! # Invariants
//! - Versions start at 1 and increase by one.
//! - All pending scripts run in one transaction; partial upgrades never commit.

use crate::db::{DbError, DbResult};
use log::{error, info};
use rusqlite::Connection;

const MIGRATIONS: &[(u32, &str)] = &[(1, include_str!("0001_storage_slots.sql"))];

/// Schema version this build writes.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |(version, _)| *version)
}

/// Brings `conn` up to [`latest_version`].
///
/// # Errors
/// - [`DbError::UnsupportedSchemaVersion`] when the file is ahead of this build.
/// - [`DbError::Migration`] naming the script that failed.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let from_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    let latest = latest_version();

    if from_version > latest {
        error!(
            "event=db_migrate module=db status=error error_code=schema_too_new from_version={} latest={}",
            from_version, latest
        );
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: from_version,
            latest_supported: latest,
        });
    }
    if from_version == latest {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for (version, sql) in MIGRATIONS.iter().filter(|(version, _)| *version > from_version) {
        tx.execute_batch(sql)
            .and_then(|()| tx.pragma_update(None, "user_version", version))
            .map_err(|source| DbError::Migration {
                version: *version,
                source,
            })?;
    }
    tx.commit()?;

    info!(
        "event=db_migrate module=db status=ok from_version={} to_version={}",
        from_version, latest
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{latest_version, MIGRATIONS};

    #[test]
    fn versions_are_contiguous_from_one() {
        for (index, (version, _)) in MIGRATIONS.iter().enumerate() {
            assert_eq!(*version as usize, index + 1);
        }
        assert_eq!(latest_version() as usize, MIGRATIONS.len());
    }
}
