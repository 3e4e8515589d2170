//! Per-field validation result.

use crate::model::field::EmployeeField;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Field -> message map. Empty means the candidate is acceptable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<EmployeeField, &'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: EmployeeField) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn contains(&self, field: EmployeeField) -> bool {
        self.errors.contains_key(&field)
    }

    /// Fields with an error, in form order.
    pub fn fields(&self) -> impl Iterator<Item = EmployeeField> + '_ {
        self.errors.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (EmployeeField, &'static str)> + '_ {
        self.errors.iter().map(|(field, message)| (*field, *message))
    }

    /// Drops the message for `field`, e.g. once the user edits it again.
    pub fn clear(&mut self, field: EmployeeField) {
        self.errors.remove(&field);
    }

    /// String-keyed view (`{"firstName": "..."}`) for inline display.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.iter()
            .map(|(field, message)| (field.id().to_string(), message.to_string()))
            .collect()
    }

    pub(crate) fn insert(&mut self, field: EmployeeField, message: &'static str) {
        self.errors.insert(field, message);
    }
}

impl Display for FieldErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl Error for FieldErrors {}
