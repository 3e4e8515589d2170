//! Employee use-case service.
//!
//! # Responsibility
//! - Provide the create-employee flow (validate, then append).
//! - Provide list presentation over the current snapshot.
//!
//! # Invariants
//! - Nothing reaches the store without passing validation first.
//! - A rejected draft never mutates state.

use crate::model::draft::EmployeeDraft;
use crate::model::employee::Employee;
use crate::reference::RegionTable;
use crate::search::{present, EmployeeRow, SortSpec};
use crate::store::{EmployeePersistence, EmployeeStore, StorageError};
use crate::validation::FieldErrors;
use chrono::{Local, NaiveDate};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Create-employee failure.
#[derive(Debug)]
pub enum CreateEmployeeError {
    /// Draft rejected; per-field messages for inline display.
    Validation(FieldErrors),
    /// Draft accepted but the collection could not be persisted.
    Storage(StorageError),
}

impl Display for CreateEmployeeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(errors) => write!(f, "employee rejected: {errors}"),
            Self::Storage(err) => write!(f, "employee not saved: {err}"),
        }
    }
}

impl Error for CreateEmployeeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(errors) => Some(errors),
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<FieldErrors> for CreateEmployeeError {
    fn from(value: FieldErrors) -> Self {
        Self::Validation(value)
    }
}

impl From<StorageError> for CreateEmployeeError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Use-case facade over an [`EmployeeStore`].
pub struct EmployeeService<P: EmployeePersistence> {
    store: EmployeeStore<P>,
}

impl<P: EmployeePersistence> EmployeeService<P> {
    pub fn new(store: EmployeeStore<P>) -> Self {
        Self { store }
    }

    /// Initializes the store from `persistence` and wraps it.
    pub fn initialize(persistence: P) -> Self {
        Self::new(EmployeeStore::initialize(persistence))
    }

    /// Validates `draft` against `today` and appends the accepted record.
    ///
    /// Returns the stored record.
    pub fn create(
        &mut self,
        draft: &EmployeeDraft,
        today: NaiveDate,
    ) -> Result<Employee, CreateEmployeeError> {
        let employee = Employee::try_from_draft(draft, today).map_err(|errors| {
            info!(
                "event=employee_create module=service status=rejected field_errors={}",
                errors.len()
            );
            errors
        })?;

        self.store.append(employee.clone())?;
        Ok(employee)
    }

    /// [`EmployeeService::create`] against the local calendar date.
    pub fn create_now(&mut self, draft: &EmployeeDraft) -> Result<Employee, CreateEmployeeError> {
        self.create(draft, Local::now().date_naive())
    }

    /// Rows for a settled query and optional sort.
    pub fn list<'a>(
        &'a self,
        settled_query: &str,
        sort: Option<SortSpec>,
        regions: &'a RegionTable,
    ) -> Vec<EmployeeRow<'a>> {
        present(self.store.snapshot(), settled_query, sort, regions)
    }

    pub fn store(&self) -> &EmployeeStore<P> {
        &self.store
    }

    pub fn into_store(self) -> EmployeeStore<P> {
        self.store
    }
}
