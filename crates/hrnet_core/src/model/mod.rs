//! Personnel record domain model.
//!
//! # Responsibility
//! - Define the canonical `Employee` record and its persisted shape.
//! - Define the mutable `EmployeeDraft` fed by typed `FieldUpdate`s.
//!
//! # Invariants
//! - Records are append-only and immutable after acceptance.
//! - Dates are persisted as `YYYY-MM-DD` text, never reformatted.

pub mod draft;
pub mod employee;
pub mod field;
