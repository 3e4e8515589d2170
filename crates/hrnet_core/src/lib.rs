//! Core domain logic for HRnet.
//! This crate is the single source of truth for employee record invariants.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod reference;
pub mod search;
pub mod service;
pub mod store;
pub mod validation;

pub use config::{load_config, parse_config, ConfigError, CoreConfig, StorageBackend};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::draft::{EmployeeDraft, FieldUpdate, FieldUpdateError};
pub use model::employee::{Employee, IsoDate};
pub use model::field::EmployeeField;
pub use reference::{department_options, Department, DepartmentOption, Region, RegionTable};
pub use search::{
    page_of, present, EmployeeListView, EmployeeRow, ManualScheduler, QueryDebouncer, SortDirection,
    SortSpec, TimerHandle, TimerScheduler,
};
pub use service::employee_service::{CreateEmployeeError, EmployeeService};
pub use store::{
    EmployeePersistence, EmployeeStore, FileSlotPersistence, MemorySlotPersistence,
    SqliteSlotPersistence, StorageError, StorageResult, StoreStartup,
};
pub use validation::{validate, validate_now, FieldErrors};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
