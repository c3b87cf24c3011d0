//! Ordered schema migrations for the journal database.
//!
//! # Invariants
//! - `version` values are strictly increasing.
//! - The applied version is mirrored to `PRAGMA user_version`.
//! - Pending migrations are applied in one transaction.

use crate::db::{DbError, DbResult};
use rusqlite::Connection;

#[derive(Debug, Clone, Copy)]
struct Migration {
    version: u32,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    sql: include_str!("0001_key_value.sql"),
}];

/// Latest schema version this build knows how to produce.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

/// Brings `conn` up to [`latest_version`].
///
/// # Errors
/// - `DbError::UnsupportedSchemaVersion` when the file was written by a newer build.
/// - `DbError::Sqlite` when a migration statement fails; nothing is applied then.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let current = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    let latest = latest_version();

    if current > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: current,
            latest_supported: latest,
        });
    }
    if current == latest {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for migration in MIGRATIONS.iter().filter(|m| m.version > current) {
        tx.execute_batch(migration.sql)?;
        tx.execute_batch(&format!("PRAGMA user_version = {};", migration.version))?;
    }
    tx.commit()?;

    Ok(())
}
