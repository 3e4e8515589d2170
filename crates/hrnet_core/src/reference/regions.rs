//! Region code -> name lookup table.
//!
//! # Invariants
//! - Codes are unique case-insensitively and non-blank.
//! - Table order is preserved for select-option rendering.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One region entry, e.g. `{code: "CA", name: "California"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub code: String,
    pub name: String,
}

impl Region {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// Region table construction error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceDataError {
    BlankRegionCode { index: usize },
    DuplicateRegionCode(String),
}

impl Display for ReferenceDataError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankRegionCode { index } => write!(f, "region at index {index} has a blank code"),
            Self::DuplicateRegionCode(code) => write!(f, "duplicate region code `{code}`"),
        }
    }
}

impl Error for ReferenceDataError {}

/// Read-only region table with case-insensitive code lookup.
#[derive(Debug, Clone)]
pub struct RegionTable {
    regions: Vec<Region>,
    by_code: HashMap<String, usize>,
}

impl RegionTable {
    /// Builds a table from ordered entries.
    ///
    /// # Errors
    /// - Returns an error on blank or duplicate codes.
    pub fn new(regions: Vec<Region>) -> Result<Self, ReferenceDataError> {
        let mut by_code = HashMap::with_capacity(regions.len());
        for (index, region) in regions.iter().enumerate() {
            let key = normalize_code(&region.code);
            if key.is_empty() {
                return Err(ReferenceDataError::BlankRegionCode { index });
            }
            if by_code.insert(key, index).is_some() {
                return Err(ReferenceDataError::DuplicateRegionCode(region.code.clone()));
            }
        }
        Ok(Self { regions, by_code })
    }

    /// United States states, district and territories.
    pub fn us_states() -> Self {
        let regions = US_STATES
            .iter()
            .map(|(code, name)| Region::new(*code, *name))
            .collect::<Vec<_>>();
        let by_code = regions
            .iter()
            .enumerate()
            .map(|(index, region)| (normalize_code(&region.code), index))
            .collect();
        Self { regions, by_code }
    }

    /// Full region name for `code`, if known.
    pub fn name_for(&self, code: &str) -> Option<&str> {
        self.by_code
            .get(&normalize_code(code))
            .and_then(|index| self.regions.get(*index))
            .map(|region| region.name.as_str())
    }

    pub fn contains(&self, code: &str) -> bool {
        self.by_code.contains_key(&normalize_code(code))
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

impl Default for RegionTable {
    fn default() -> Self {
        Self::us_states()
    }
}

fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

const US_STATES: &[(&str, &str)] = &[
    ("AL", "Alabama"),
    ("AK", "Alaska"),
    ("AS", "American Samoa"),
    ("AZ", "Arizona"),
    ("AR", "Arkansas"),
    ("CA", "California"),
    ("CO", "Colorado"),
    ("CT", "Connecticut"),
    ("DE", "Delaware"),
    ("DC", "District Of Columbia"),
    ("FM", "Federated States Of Micronesia"),
    ("FL", "Florida"),
    ("GA", "Georgia"),
    ("GU", "Guam"),
    ("HI", "Hawaii"),
    ("ID", "Idaho"),
    ("IL", "Illinois"),
    ("IN", "Indiana"),
    ("IA", "Iowa"),
    ("KS", "Kansas"),
    ("KY", "Kentucky"),
    ("LA", "Louisiana"),
    ("ME", "Maine"),
    ("MH", "Marshall Islands"),
    ("MD", "Maryland"),
    ("MA", "Massachusetts"),
    ("MI", "Michigan"),
    ("MN", "Minnesota"),
    ("MS", "Mississippi"),
    ("MO", "Missouri"),
    ("MT", "Montana"),
    ("NE", "Nebraska"),
    ("NV", "Nevada"),
    ("NH", "New Hampshire"),
    ("NJ", "New Jersey"),
    ("NM", "New Mexico"),
    ("NY", "New York"),
    ("NC", "North Carolina"),
    ("ND", "North Dakota"),
    ("MP", "Northern Mariana Islands"),
    ("OH", "Ohio"),
    ("OK", "Oklahoma"),
    ("OR", "Oregon"),
    ("PW", "Palau"),
    ("PA", "Pennsylvania"),
    ("PR", "Puerto Rico"),
    ("RI", "Rhode Island"),
    ("SC", "South Carolina"),
    ("SD", "South Dakota"),
    ("TN", "Tennessee"),
    ("TX", "Texas"),
    ("UT", "Utah"),
    ("VT", "Vermont"),
    ("VI", "Virgin Islands"),
    ("VA", "Virginia"),
    ("WA", "Washington"),
    ("WV", "West Virginia"),
    ("WI", "Wisconsin"),
    ("WY", "Wyoming"),
];

#[cfg(test)]
mod tests {
    use super::{ReferenceDataError, Region, RegionTable};

    #[test]
    fn lookup_is_case_insensitive() {
        let table = RegionTable::us_states();
        assert_eq!(table.name_for("ca"), Some("California"));
        assert_eq!(table.name_for(" NY "), Some("New York"));
        assert_eq!(table.name_for("ZZ"), None);
        assert_eq!(table.len(), 59);
    }

    #[test]
    fn new_rejects_duplicate_codes() {
        let err = RegionTable::new(vec![
            Region::new("CA", "California"),
            Region::new("ca", "Also California"),
        ])
        .unwrap_err();
        assert_eq!(err, ReferenceDataError::DuplicateRegionCode("ca".to_string()));
    }

    #[test]
    fn new_rejects_blank_codes() {
        let err = RegionTable::new(vec![Region::new(" ", "Nowhere")]).unwrap_err();
        assert_eq!(err, ReferenceDataError::BlankRegionCode { index: 0 });
    }
}
