//! Field identifiers shared by validation, field updates and column sort.

use std::fmt::{Display, Formatter};

/// Closed set of employee record fields.
///
/// Declaration order is form order; error maps iterate in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EmployeeField {
    FirstName,
    LastName,
    DateOfBirth,
    StartDate,
    Street,
    City,
    State,
    ZipCode,
    Department,
}

impl EmployeeField {
    pub const ALL: [Self; 9] = [
        Self::FirstName,
        Self::LastName,
        Self::DateOfBirth,
        Self::StartDate,
        Self::Street,
        Self::City,
        Self::State,
        Self::ZipCode,
        Self::Department,
    ];

    /// Stable camelCase id, identical to the storage key.
    pub fn id(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::DateOfBirth => "dateOfBirth",
            Self::StartDate => "startDate",
            Self::Street => "street",
            Self::City => "city",
            Self::State => "state",
            Self::ZipCode => "zipCode",
            Self::Department => "department",
        }
    }

    /// Human-readable column/label text.
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::DateOfBirth => "Date of Birth",
            Self::StartDate => "Start Date",
            Self::Street => "Street",
            Self::City => "City",
            Self::State => "State",
            Self::ZipCode => "Zip Code",
            Self::Department => "Department",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.id() == id)
    }

    pub fn is_date(self) -> bool {
        matches!(self, Self::DateOfBirth | Self::StartDate)
    }
}

impl Display for EmployeeField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::EmployeeField;

    #[test]
    fn ids_round_trip() {
        for field in EmployeeField::ALL {
            assert_eq!(EmployeeField::from_id(field.id()), Some(field));
        }
        assert_eq!(EmployeeField::from_id("salary"), None);
    }
}
