//! Fixed department enumeration.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Internal company department.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    Sales,
    Marketing,
    Engineering,
    #[serde(rename = "Human Resources")]
    HumanResources,
    Legal,
}

impl Department {
    pub const ALL: [Self; 5] = [
        Self::Sales,
        Self::Marketing,
        Self::Engineering,
        Self::HumanResources,
        Self::Legal,
    ];

    /// Display label; also the persisted value.
    pub fn label(self) -> &'static str {
        match self {
            Self::Sales => "Sales",
            Self::Marketing => "Marketing",
            Self::Engineering => "Engineering",
            Self::HumanResources => "Human Resources",
            Self::Legal => "Legal",
        }
    }

    /// Case-insensitive lookup by label.
    pub fn from_label(label: &str) -> Option<Self> {
        let wanted = label.trim();
        Self::ALL
            .into_iter()
            .find(|department| department.label().eq_ignore_ascii_case(wanted))
    }
}

impl Display for Department {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Select-option view of one department.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DepartmentOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Department table in display order (`value == label`).
pub fn department_options() -> Vec<DepartmentOption> {
    Department::ALL
        .into_iter()
        .map(|department| DepartmentOption {
            value: department.label(),
            label: department.label(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{department_options, Department};

    #[test]
    fn labels_round_trip_case_insensitively() {
        assert_eq!(
            Department::from_label("human resources"),
            Some(Department::HumanResources)
        );
        assert_eq!(Department::from_label("Finance"), None);
    }

    #[test]
    fn options_keep_table_order() {
        let labels: Vec<_> = department_options()
            .into_iter()
            .map(|option| option.label)
            .collect();
        assert_eq!(
            labels,
            ["Sales", "Marketing", "Engineering", "Human Resources", "Legal"]
        );
    }
}
