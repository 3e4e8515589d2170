//! Record store owning the canonical employee collection.
//!
//! # Responsibility
//! - Load the persisted snapshot once at startup.
//! - Append accepted records and write the full collection back.
//!
//! # Invariants
//! - `append` is the only mutation; insertion order is creation order.
//! - After `append` returns `Ok`, `snapshot` and storage both hold the record.
//! - After `append` returns `Err`, neither holds it.
//! - Startup never fails; unreadable snapshots degrade to an empty collection.
//! - An unreadable snapshot is preserved before any save. When it cannot be
//!   preserved the store stays read-only for the session.

use super::persistence::{EmployeePersistence, StorageError, StorageResult};
use crate::model::employee::Employee;
use log::{error, info, warn};

/// How the store obtained its initial collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreStartup {
    /// Snapshot read successfully (0 when the slot was absent).
    Loaded { count: usize },
    /// Snapshot could not be read; started empty.
    Recovered {
        reason: String,
        /// Where the unreadable payload was moved, if anywhere.
        preserved_as: Option<String>,
    },
}

impl StoreStartup {
    pub fn is_recovered(&self) -> bool {
        matches!(self, Self::Recovered { .. })
    }
}

/// Single owner of the employee collection.
pub struct EmployeeStore<P: EmployeePersistence> {
    employees: Vec<Employee>,
    persistence: P,
    startup: StoreStartup,
    read_only: bool,
}

impl<P: EmployeePersistence> EmployeeStore<P> {
    /// Reads the durable snapshot, failing open to an empty collection.
    ///
    /// # Side effects
    /// - Emits `store_init` with `status=ok` or `status=recovered`.
    pub fn initialize(mut persistence: P) -> Self {
        let err = match persistence.load() {
            Ok(employees) => {
                info!(
                    "event=store_init module=store status=ok count={}",
                    employees.len()
                );
                let count = employees.len();
                return Self {
                    employees,
                    persistence,
                    startup: StoreStartup::Loaded { count },
                    read_only: false,
                };
            }
            Err(err) => err,
        };

        let (preserved_as, read_only) = match persistence.preserve_unreadable() {
            Ok(preserved_as) => {
                warn!(
                    "event=store_init module=store status=recovered error_code=snapshot_unreadable preserved_as={} error={}",
                    preserved_as.as_deref().unwrap_or("none"),
                    err
                );
                (preserved_as, false)
            }
            Err(preserve_err) => {
                error!(
                    "event=store_init module=store status=recovered error_code=snapshot_not_preserved read_only=true error={}",
                    preserve_err
                );
                (None, true)
            }
        };

        Self {
            employees: Vec::new(),
            persistence,
            startup: StoreStartup::Recovered {
                reason: err.to_string(),
                preserved_as,
            },
            read_only,
        }
    }

    /// Appends an already validated record and persists the collection.
    ///
    /// # Errors
    /// - Returns the adapter error when the write fails; the in-memory
    ///   collection is rolled back first.
    /// - Returns `StorageError::Unavailable` when startup could not preserve
    ///   an unreadable snapshot.
    pub fn append(&mut self, employee: Employee) -> StorageResult<()> {
        if self.read_only {
            return Err(StorageError::Unavailable(
                "unreadable snapshot could not be preserved; refusing to overwrite it".to_string(),
            ));
        }

        self.employees.push(employee);
        if let Err(err) = self.persistence.save(&self.employees) {
            self.employees.pop();
            error!(
                "event=store_append module=store status=error error_code=save_failed count={} error={}",
                self.employees.len(),
                err
            );
            return Err(err);
        }

        info!(
            "event=store_append module=store status=ok count={}",
            self.employees.len()
        );
        Ok(())
    }

    /// Current collection in insertion order.
    pub fn snapshot(&self) -> &[Employee] {
        &self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn startup(&self) -> &StoreStartup {
        &self.startup
    }

    /// Whether `append` is refused for this session.
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    /// Releases the adapter, e.g. to re-initialize from storage.
    pub fn into_persistence(self) -> P {
        self.persistence
    }
}
