//! SQLite-backed slot adapter.
//!
//! # Responsibility
//! - Keep each named slot as one row of `storage_slots`.
//!
//! # Invariants
//! - Connections are opened through `db::open_db*`, so the table exists.
//! - Saves upsert the whole payload in a single statement.
//! - An unreadable payload is renamed to slot `<slot_name>.corrupt[.N]`.

use super::persistence::{
    decode_collection, encode_collection, preserved_names, EmployeePersistence, StorageResult,
};
use crate::db::{open_db, open_db_in_memory};
use crate::model::employee::Employee;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

/// Slot stored in a migrated SQLite database.
pub struct SqliteSlotPersistence {
    conn: Connection,
    slot_name: String,
}

impl SqliteSlotPersistence {
    /// Opens (and migrates) the database file at `path`.
    pub fn open(path: impl AsRef<Path>, slot_name: impl Into<String>) -> StorageResult<Self> {
        Ok(Self::from_connection(open_db(path)?, slot_name))
    }

    pub fn in_memory(slot_name: impl Into<String>) -> StorageResult<Self> {
        Ok(Self::from_connection(open_db_in_memory()?, slot_name))
    }

    /// Wraps an already migrated connection.
    pub fn from_connection(conn: Connection, slot_name: impl Into<String>) -> Self {
        Self {
            conn,
            slot_name: slot_name.into(),
        }
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Raw payload currently stored for this slot.
    pub fn raw_payload(&self) -> StorageResult<Option<String>> {
        let payload = self
            .conn
            .query_row(
                "SELECT payload FROM storage_slots WHERE name = ?1;",
                [self.slot_name.as_str()],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(payload)
    }
}

impl EmployeePersistence for SqliteSlotPersistence {
    fn load(&self) -> StorageResult<Vec<Employee>> {
        match self.raw_payload()? {
            Some(payload) => decode_collection(&self.slot_name, &payload),
            None => Ok(Vec::new()),
        }
    }

    fn save(&mut self, employees: &[Employee]) -> StorageResult<()> {
        let payload = encode_collection(employees)?;
        self.conn.execute(
            "INSERT INTO storage_slots (name, payload)
             VALUES (?1, ?2)
             ON CONFLICT(name) DO UPDATE SET
                payload = excluded.payload,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![self.slot_name.as_str(), payload],
        )?;
        Ok(())
    }

    fn preserve_unreadable(&mut self) -> StorageResult<Option<String>> {
        let tx = self.conn.transaction()?;
        let mut target = None;
        for name in preserved_names(&self.slot_name) {
            let taken: bool = tx.query_row(
                "SELECT EXISTS(SELECT 1 FROM storage_slots WHERE name = ?1);",
                [name.as_str()],
                |row| row.get(0),
            )?;
            if !taken {
                target = Some(name);
                break;
            }
        }

        let Some(target) = target else {
            return Ok(None);
        };
        let moved = tx.execute(
            "UPDATE storage_slots SET name = ?1 WHERE name = ?2;",
            params![target.as_str(), self.slot_name.as_str()],
        )?;
        tx.commit()?;

        Ok((moved > 0).then(|| format!("sqlite slot `{target}`")))
    }
}
