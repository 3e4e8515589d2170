//! Field validation engine.
//!
//! # Responsibility
//! - Decide whether a candidate record is acceptable.
//! - Report every applicable error for every field in one pass.
//!
//! # Invariants
//! - Pure: no I/O, no state; the reference date is an explicit input.
//! - Requiredness and pattern errors are mutually exclusive per field.
//! - Region codes are checked for presence only, not against the table.

mod field_errors;

pub use field_errors::FieldErrors;

use crate::model::draft::EmployeeDraft;
use crate::model::field::EmployeeField;
use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

pub const REQUIRED_MESSAGE: &str = "This field is required.";
pub const LETTERS_ONLY_MESSAGE: &str = "Only letters are allowed.";
pub const FUTURE_BIRTH_DATE_MESSAGE: &str = "Date of birth cannot be in the future.";
pub const NEGATIVE_ZIP_MESSAGE: &str = "Zip Code cannot be negative.";

// Letters (accented and combining marks included), plain spaces, hyphens, apostrophes.
static LETTERS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L}\p{M} '\-]+$").expect("valid letters regex"));

/// Validates `draft` with `today` as the latest acceptable birth date.
pub fn validate(draft: &EmployeeDraft, today: NaiveDate) -> FieldErrors {
    let mut errors = FieldErrors::default();

    check_letters(&mut errors, EmployeeField::FirstName, &draft.first_name);
    check_letters(&mut errors, EmployeeField::LastName, &draft.last_name);

    match draft.date_of_birth {
        None => errors.insert(EmployeeField::DateOfBirth, REQUIRED_MESSAGE),
        Some(date) if date > today => {
            errors.insert(EmployeeField::DateOfBirth, FUTURE_BIRTH_DATE_MESSAGE)
        }
        Some(_) => {}
    }
    if draft.start_date.is_none() {
        errors.insert(EmployeeField::StartDate, REQUIRED_MESSAGE);
    }

    check_required(&mut errors, EmployeeField::Street, &draft.street);
    check_letters(&mut errors, EmployeeField::City, &draft.city);
    check_required(&mut errors, EmployeeField::State, &draft.state);

    if check_required(&mut errors, EmployeeField::ZipCode, &draft.zip_code)
        && is_negative_number(&draft.zip_code)
    {
        errors.insert(EmployeeField::ZipCode, NEGATIVE_ZIP_MESSAGE);
    }

    if draft.department.is_none() {
        errors.insert(EmployeeField::Department, REQUIRED_MESSAGE);
    }

    errors
}

/// Validates `draft` against the local calendar date.
pub fn validate_now(draft: &EmployeeDraft) -> FieldErrors {
    validate(draft, Local::now().date_naive())
}

/// Whether `value` matches the letters-only pattern.
pub fn is_letters_only(value: &str) -> bool {
    LETTERS_RE.is_match(value.trim())
}

/// Records a requiredness error; returns `true` when the value is present.
fn check_required(errors: &mut FieldErrors, field: EmployeeField, value: &str) -> bool {
    if value.trim().is_empty() {
        errors.insert(field, REQUIRED_MESSAGE);
        return false;
    }
    true
}

fn check_letters(errors: &mut FieldErrors, field: EmployeeField, value: &str) {
    if check_required(errors, field, value) && !is_letters_only(value) {
        errors.insert(field, LETTERS_ONLY_MESSAGE);
    }
}

fn is_negative_number(value: &str) -> bool {
    value
        .trim()
        .parse::<f64>()
        .map(|number| number < 0.0)
        .unwrap_or(false)
}
