//! Record store and its durable persistence adapters.
//!
//! # Responsibility
//! - Own the append-only employee collection.
//! - Isolate storage media (memory, JSON file, SQLite) behind
//!   `EmployeePersistence`.
//!
//! # Invariants
//! - The store performs no validation; callers append accepted records only.
//! - Persisted dates stay `YYYY-MM-DD` text.

mod employee_store;
mod file_slot;
mod persistence;
mod sqlite_slot;

pub use employee_store::{EmployeeStore, StoreStartup};
pub use file_slot::FileSlotPersistence;
pub use persistence::{
    decode_collection, encode_collection, EmployeePersistence, MemorySlotPersistence,
    StorageError, StorageResult, DEFAULT_SLOT_NAME,
};
pub use sqlite_slot::SqliteSlotPersistence;
