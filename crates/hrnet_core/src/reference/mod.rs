//! Read-only reference datasets consumed by validation and search.

mod departments;
mod regions;

pub use departments::{department_options, Department, DepartmentOption};
pub use regions::{ReferenceDataError, Region, RegionTable};
