//! Candidate record under construction and typed field-update commands.
//!
//! # Responsibility
//! - Hold form input before validation.
//! - Normalize raw `{fieldId, newValue}` UI events into typed updates.
//!
//! # Invariants
//! - A draft carries no guarantees; only `Employee::try_from_draft`
//!   turns it into a record.
//! - Every `FieldUpdate` variant carries a value typed for its field.

use crate::model::employee::ISO_DATE_FORMAT;
use crate::model::field::EmployeeField;
use crate::reference::Department;
use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Candidate employee record as entered by a caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeDraft {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub department: Option<Department>,
}

impl EmployeeDraft {
    /// Blank create-form state. Department is preselected to `Sales`.
    pub fn new() -> Self {
        Self {
            department: Some(Department::Sales),
            ..Self::default()
        }
    }

    /// Applies one field update in place.
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::FirstName(value) => self.first_name = value,
            FieldUpdate::LastName(value) => self.last_name = value,
            FieldUpdate::DateOfBirth(value) => self.date_of_birth = value,
            FieldUpdate::StartDate(value) => self.start_date = value,
            FieldUpdate::Street(value) => self.street = value,
            FieldUpdate::City(value) => self.city = value,
            FieldUpdate::State(value) => self.state = value,
            FieldUpdate::ZipCode(value) => self.zip_code = value,
            FieldUpdate::Department(value) => self.department = value,
        }
    }

    /// Builder-style variant of [`EmployeeDraft::apply`].
    pub fn with(mut self, update: FieldUpdate) -> Self {
        self.apply(update);
        self
    }
}

/// Typed field-update command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    FirstName(String),
    LastName(String),
    DateOfBirth(Option<NaiveDate>),
    StartDate(Option<NaiveDate>),
    Street(String),
    City(String),
    State(String),
    ZipCode(String),
    Department(Option<Department>),
}

impl FieldUpdate {
    /// Field targeted by this update.
    pub fn field(&self) -> EmployeeField {
        match self {
            Self::FirstName(_) => EmployeeField::FirstName,
            Self::LastName(_) => EmployeeField::LastName,
            Self::DateOfBirth(_) => EmployeeField::DateOfBirth,
            Self::StartDate(_) => EmployeeField::StartDate,
            Self::Street(_) => EmployeeField::Street,
            Self::City(_) => EmployeeField::City,
            Self::State(_) => EmployeeField::State,
            Self::ZipCode(_) => EmployeeField::ZipCode,
            Self::Department(_) => EmployeeField::Department,
        }
    }

    /// Normalizes a raw `{fieldId, newValue}` event.
    ///
    /// Blank date and department values clear the field; text values are
    /// kept untrimmed so validation sees exactly what was typed.
    ///
    /// # Errors
    /// - `UnknownField` for ids outside [`EmployeeField::ALL`].
    /// - `InvalidDate` when a non-blank date is not `YYYY-MM-DD`.
    /// - `UnknownDepartment` when a non-blank department is not in the table.
    pub fn parse(field_id: &str, raw: &str) -> Result<Self, FieldUpdateError> {
        let field = EmployeeField::from_id(field_id)
            .ok_or_else(|| FieldUpdateError::UnknownField(field_id.to_string()))?;

        let update = match field {
            EmployeeField::FirstName => Self::FirstName(raw.to_string()),
            EmployeeField::LastName => Self::LastName(raw.to_string()),
            EmployeeField::DateOfBirth => Self::DateOfBirth(parse_date(field, raw)?),
            EmployeeField::StartDate => Self::StartDate(parse_date(field, raw)?),
            EmployeeField::Street => Self::Street(raw.to_string()),
            EmployeeField::City => Self::City(raw.to_string()),
            EmployeeField::State => Self::State(raw.to_string()),
            EmployeeField::ZipCode => Self::ZipCode(raw.to_string()),
            EmployeeField::Department => Self::Department(parse_department(raw)?),
        };
        Ok(update)
    }
}

/// Raw field event could not be turned into a typed update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdateError {
    UnknownField(String),
    InvalidDate { field: EmployeeField, value: String },
    UnknownDepartment(String),
}

impl Display for FieldUpdateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownField(id) => write!(f, "unknown field id `{id}`"),
            Self::InvalidDate { field, value } => {
                write!(f, "invalid date `{value}` for {field}; expected YYYY-MM-DD")
            }
            Self::UnknownDepartment(value) => write!(f, "unknown department `{value}`"),
        }
    }
}

impl Error for FieldUpdateError {}

fn parse_date(field: EmployeeField, raw: &str) -> Result<Option<NaiveDate>, FieldUpdateError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT)
        .map(Some)
        .map_err(|_| FieldUpdateError::InvalidDate {
            field,
            value: trimmed.to_string(),
        })
}

fn parse_department(raw: &str) -> Result<Option<Department>, FieldUpdateError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    Department::from_label(trimmed)
        .map(Some)
        .ok_or_else(|| FieldUpdateError::UnknownDepartment(trimmed.to_string()))
}
