//! Employee record model.
//!
//! # Responsibility
//! - Define the canonical record accepted into the store.
//! - Keep persisted date text stable (`YYYY-MM-DD`) across load/save.
//!
//! # Invariants
//! - An `Employee` is only built from a draft that passed validation, or
//!   decoded from a previously persisted snapshot.
//! - Records are immutable once built; fields are exposed read-only.
//! - Malformed persisted dates are kept verbatim and surface as invalid
//!   dates instead of failing the whole collection.
//! - A persisted record with missing, null or numeric fields still decodes;
//!   absent values read as empty text.

use crate::model::draft::EmployeeDraft;
use crate::validation::{validate, FieldErrors};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{Display, Formatter};

/// Wire/persistence format for calendar dates.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";
/// Display format used by list rows (`3/1/2020`).
pub const DISPLAY_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Calendar date stored as its persisted `YYYY-MM-DD` text.
///
/// The raw text is the source of truth; `to_date` parses lazily so a
/// corrupted value only affects the record carrying it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IsoDate(#[serde(deserialize_with = "lenient_text")] String);

impl IsoDate {
    /// Formats a calendar date into persisted text.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.format(ISO_DATE_FORMAT).to_string())
    }

    /// Wraps already-persisted text without checking it.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses the stored text. Returns `None` for malformed values.
    pub fn to_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.0.trim(), ISO_DATE_FORMAT).ok()
    }

    /// Month/day/year rendering used in list rows.
    ///
    /// Falls back to the raw text when the value cannot be parsed.
    pub fn display(&self) -> String {
        match self.to_date() {
            Some(date) => date.format(DISPLAY_DATE_FORMAT).to_string(),
            None => self.0.clone(),
        }
    }

    /// Leading year segment of the stored text (`2020` for `2020-03-01`).
    pub fn year_segment(&self) -> &str {
        self.0.trim().split('-').next().unwrap_or_default()
    }
}

impl Display for IsoDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Accepted personnel record.
///
/// Serialized with camelCase keys to match the storage slot schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(default, deserialize_with = "lenient_text")]
    first_name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    last_name: String,
    #[serde(default)]
    date_of_birth: IsoDate,
    #[serde(default)]
    start_date: IsoDate,
    #[serde(default, deserialize_with = "lenient_text")]
    street: String,
    #[serde(default, deserialize_with = "lenient_text")]
    city: String,
    /// Region code, e.g. `CA`.
    #[serde(default, deserialize_with = "lenient_text")]
    state: String,
    /// Older snapshots stored this as a JSON number.
    #[serde(default, deserialize_with = "lenient_text")]
    zip_code: String,
    #[serde(default, deserialize_with = "lenient_text")]
    department: String,
}

impl Employee {
    /// Validates `draft` against `today` and builds the immutable record.
    ///
    /// Text fields are trimmed on acceptance. Returns every field error
    /// when the draft is not acceptable.
    pub fn try_from_draft(draft: &EmployeeDraft, today: NaiveDate) -> Result<Self, FieldErrors> {
        let errors = validate(draft, today);
        match (draft.date_of_birth, draft.start_date, draft.department) {
            (Some(date_of_birth), Some(start_date), Some(department)) if errors.is_empty() => {
                Ok(Self {
                    first_name: draft.first_name.trim().to_string(),
                    last_name: draft.last_name.trim().to_string(),
                    date_of_birth: IsoDate::from_date(date_of_birth),
                    start_date: IsoDate::from_date(start_date),
                    street: draft.street.trim().to_string(),
                    city: draft.city.trim().to_string(),
                    state: draft.state.trim().to_string(),
                    zip_code: draft.zip_code.trim().to_string(),
                    department: department.label().to_string(),
                })
            }
            _ => Err(errors),
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn date_of_birth(&self) -> &IsoDate {
        &self.date_of_birth
    }

    pub fn start_date(&self) -> &IsoDate {
        &self.start_date
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn zip_code(&self) -> &str {
        &self.zip_code
    }

    pub fn department(&self) -> &str {
        &self.department
    }
}

/// Reads a persisted scalar as text: strings as-is, numbers and booleans
/// in their JSON spelling, `null` as empty.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ScalarWire {
        Text(String),
        Number(serde_json::Number),
        Flag(bool),
        Null(()),
    }

    Ok(match ScalarWire::deserialize(deserializer)? {
        ScalarWire::Text(text) => text,
        ScalarWire::Number(number) => number.to_string(),
        ScalarWire::Flag(flag) => flag.to_string(),
        ScalarWire::Null(()) => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::IsoDate;
    use chrono::NaiveDate;

    #[test]
    fn display_drops_leading_zeros() {
        let date = IsoDate::from_date(NaiveDate::from_ymd_opt(2020, 3, 1).unwrap());
        assert_eq!(date.as_str(), "2020-03-01");
        assert_eq!(date.display(), "3/1/2020");
        assert_eq!(date.year_segment(), "2020");
    }

    #[test]
    fn malformed_text_is_kept_verbatim() {
        let date = IsoDate::from_raw("not-a-date");
        assert_eq!(date.to_date(), None);
        assert_eq!(date.display(), "not-a-date");
        assert_eq!(date.year_segment(), "not");
    }

    #[test]
    fn partial_record_decodes_with_empty_fields() {
        let employee: super::Employee = serde_json::from_str(
            r#"{"firstName": "Bob", "lastName": null, "zipCode": 2101, "startDate": "2021-01-04"}"#,
        )
        .unwrap();
        assert_eq!(employee.first_name(), "Bob");
        assert_eq!(employee.last_name(), "");
        assert_eq!(employee.street(), "");
        assert_eq!(employee.zip_code(), "2101");
        assert_eq!(employee.date_of_birth().as_str(), "");
        assert_eq!(employee.date_of_birth().to_date(), None);
        assert_eq!(employee.start_date().display(), "1/4/2021");
    }
}
