//! Persistence adapter contract and slot payload codec.
//!
//! # Responsibility
//! - Define the narrow `load`/`save` seam used by the record store.
//! - Encode/decode the whole collection as one JSON array payload.
//!
//! # Invariants
//! - One slot holds the entire collection; every save rewrites it.
//! - An absent slot loads as an empty collection, not an error.
//! - A `null` payload also loads as an empty collection.
//! - An unreadable payload is moved aside, never overwritten in place.

use crate::db::DbError;
use crate::model::employee::Employee;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Default storage slot name.
pub const DEFAULT_SLOT_NAME: &str = "employees";

pub type StorageResult<T> = Result<T, StorageError>;

/// Durable storage failure.
#[derive(Debug)]
pub enum StorageError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Db(DbError),
    /// Slot payload exists but is not a valid collection.
    Corrupt {
        slot: String,
        source: serde_json::Error,
    },
    Encode(serde_json::Error),
    /// Adapter refused the write (e.g. read-only slot).
    Unavailable(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "storage I/O on `{}`: {source}", path.display()),
            Self::Db(err) => write!(f, "{err}"),
            Self::Corrupt { slot, source } => {
                write!(f, "storage slot `{slot}` is not a valid collection: {source}")
            }
            Self::Encode(err) => write!(f, "failed to encode collection: {err}"),
            Self::Unavailable(message) => write!(f, "storage unavailable: {message}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Db(err) => Some(err),
            Self::Corrupt { source, .. } => Some(source),
            Self::Encode(err) => Some(err),
            Self::Unavailable(_) => None,
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Durable home of the employee collection.
pub trait EmployeePersistence {
    /// Reads the persisted collection in insertion order.
    fn load(&self) -> StorageResult<Vec<Employee>>;
    /// Replaces the persisted collection with `employees`.
    fn save(&mut self, employees: &[Employee]) -> StorageResult<()>;
    /// Moves the current payload out of the slot so the next `save` cannot
    /// overwrite it.
    ///
    /// Returns where the payload now lives, or `None` when the slot is empty.
    fn preserve_unreadable(&mut self) -> StorageResult<Option<String>>;
}

impl<P: EmployeePersistence + ?Sized> EmployeePersistence for Box<P> {
    fn load(&self) -> StorageResult<Vec<Employee>> {
        (**self).load()
    }

    fn save(&mut self, employees: &[Employee]) -> StorageResult<()> {
        (**self).save(employees)
    }

    fn preserve_unreadable(&mut self) -> StorageResult<Option<String>> {
        (**self).preserve_unreadable()
    }
}

/// Candidate names for a preserved payload: `<base>.corrupt`, then
/// `<base>.corrupt.1`, `<base>.corrupt.2`, ...
pub(crate) fn preserved_names(base: &str) -> impl Iterator<Item = String> + '_ {
    (0u32..).map(move |attempt| match attempt {
        0 => format!("{base}.corrupt"),
        n => format!("{base}.corrupt.{n}"),
    })
}

/// Serializes the collection into a slot payload.
pub fn encode_collection(employees: &[Employee]) -> StorageResult<String> {
    serde_json::to_string(employees).map_err(StorageError::Encode)
}

/// Parses a slot payload.
pub fn decode_collection(slot: &str, payload: &str) -> StorageResult<Vec<Employee>> {
    serde_json::from_str::<Option<Vec<Employee>>>(payload)
        .map(Option::unwrap_or_default)
        .map_err(|source| StorageError::Corrupt {
            slot: slot.to_string(),
            source,
        })
}

/// In-process slot, used by tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemorySlotPersistence {
    payload: Option<String>,
    preserved: Option<String>,
    read_only: bool,
}

impl MemorySlotPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing raw payload (possibly corrupt).
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            payload: Some(payload.into()),
            ..Self::default()
        }
    }

    /// Raw payload as last written.
    pub fn payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }

    /// Payload moved aside by `preserve_unreadable`.
    pub fn preserved(&self) -> Option<&str> {
        self.preserved.as_deref()
    }

    /// When set, every `save` fails with `StorageError::Unavailable`.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }
}

impl EmployeePersistence for MemorySlotPersistence {
    fn load(&self) -> StorageResult<Vec<Employee>> {
        match self.payload.as_deref() {
            Some(payload) => decode_collection(DEFAULT_SLOT_NAME, payload),
            None => Ok(Vec::new()),
        }
    }

    fn save(&mut self, employees: &[Employee]) -> StorageResult<()> {
        if self.read_only {
            return Err(StorageError::Unavailable(
                "memory slot is read-only".to_string(),
            ));
        }
        self.payload = Some(encode_collection(employees)?);
        Ok(())
    }

    fn preserve_unreadable(&mut self) -> StorageResult<Option<String>> {
        match self.payload.take() {
            Some(payload) => {
                self.preserved = Some(payload);
                Ok(Some(format!("memory slot `{DEFAULT_SLOT_NAME}.corrupt`")))
            }
            None => Ok(None),
        }
    }
}
