//! Filter and sort pipeline producing list rows.
//!
//! # Responsibility
//! - Turn a settled query and optional column sort into ordered rows.
//!
//! # Invariants
//! - Base order is reverse insertion order (most recent first).
//! - A two-character query matches the region code exactly and nothing else.
//! - Sorting is stable; invalid dates and non-numeric zip codes sort last
//!   in both directions.
//! - The input collection is never mutated.

use crate::model::employee::{Employee, IsoDate};
use crate::model::field::EmployeeField;
use crate::reference::RegionTable;
use chrono::NaiveDate;
use std::cmp::Ordering;

/// Column sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// Explicit column sort request (`{columnId, direction}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub column: EmployeeField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn ascending(column: EmployeeField) -> Self {
        Self {
            column,
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(column: EmployeeField) -> Self {
        Self {
            column,
            direction: SortDirection::Descending,
        }
    }
}

/// Trimmed, lowercased query plus its slash-separated date variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedQuery {
    text: String,
    date_text: String,
}

impl NormalizedQuery {
    pub fn new(raw: &str) -> Self {
        let text = raw.trim().to_lowercase();
        let date_text = text.replace('-', "/");
        Self { text, date_text }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn date_text(&self) -> &str {
        &self.date_text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Exactly two characters: treated as a region code.
    pub fn is_region_code(&self) -> bool {
        self.text.chars().count() == 2
    }
}

/// One rendered row: the record plus display-ready values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRow<'a> {
    pub employee: &'a Employee,
    pub date_of_birth_display: String,
    pub start_date_display: String,
    /// Full region name, when the code is in the table.
    pub state_name: Option<&'a str>,
}

impl<'a> EmployeeRow<'a> {
    pub fn new(employee: &'a Employee, regions: &'a RegionTable) -> Self {
        Self {
            employee,
            date_of_birth_display: employee.date_of_birth().display(),
            start_date_display: employee.start_date().display(),
            state_name: regions.name_for(employee.state()),
        }
    }

    /// Applies the matching policy for a normalized query.
    pub fn matches(&self, query: &NormalizedQuery) -> bool {
        if query.is_empty() {
            return true;
        }
        if query.is_region_code() {
            return self.employee.state().trim().to_lowercase() == query.text();
        }

        let needle = query.text();
        let employee = self.employee;
        let text_hit = [
            employee.first_name(),
            employee.last_name(),
            employee.department(),
            employee.street(),
            employee.city(),
            employee.zip_code(),
        ]
        .into_iter()
        .chain(self.state_name)
        .any(|value| value.to_lowercase().contains(needle));

        text_hit
            || date_matches(employee.date_of_birth(), &self.date_of_birth_display, query)
            || date_matches(employee.start_date(), &self.start_date_display, query)
    }

    /// Raw text of `column` as shown in the table.
    pub fn column_text(&self, column: EmployeeField) -> &str {
        let employee = self.employee;
        match column {
            EmployeeField::FirstName => employee.first_name(),
            EmployeeField::LastName => employee.last_name(),
            EmployeeField::DateOfBirth => &self.date_of_birth_display,
            EmployeeField::StartDate => &self.start_date_display,
            EmployeeField::Street => employee.street(),
            EmployeeField::City => employee.city(),
            EmployeeField::State => employee.state(),
            EmployeeField::ZipCode => employee.zip_code(),
            EmployeeField::Department => employee.department(),
        }
    }
}

/// Produces the ordered rows for one render.
///
/// `settled_query` must already be debounced; this function is pure and
/// recomputes everything from `collection`.
pub fn present<'a>(
    collection: &'a [Employee],
    settled_query: &str,
    sort: Option<SortSpec>,
    regions: &'a RegionTable,
) -> Vec<EmployeeRow<'a>> {
    let query = NormalizedQuery::new(settled_query);
    let mut rows = collection
        .iter()
        .rev()
        .map(|employee| EmployeeRow::new(employee, regions))
        .filter(|row| row.matches(&query))
        .collect::<Vec<_>>();

    if let Some(spec) = sort {
        sort_rows(&mut rows, spec);
    }
    rows
}

/// Stable in-place column sort.
pub fn sort_rows(rows: &mut [EmployeeRow<'_>], spec: SortSpec) {
    rows.sort_by(|left, right| compare_rows(left, right, spec));
}

fn compare_rows(left: &EmployeeRow<'_>, right: &EmployeeRow<'_>, spec: SortSpec) -> Ordering {
    match spec.column {
        EmployeeField::DateOfBirth => compare_valid_first(
            left.employee.date_of_birth().to_date(),
            right.employee.date_of_birth().to_date(),
            spec.direction,
            |a: NaiveDate, b: NaiveDate| a.cmp(&b),
        ),
        EmployeeField::StartDate => compare_valid_first(
            left.employee.start_date().to_date(),
            right.employee.start_date().to_date(),
            spec.direction,
            |a: NaiveDate, b: NaiveDate| a.cmp(&b),
        ),
        EmployeeField::ZipCode => compare_valid_first(
            numeric_zip(left.employee.zip_code()),
            numeric_zip(right.employee.zip_code()),
            spec.direction,
            |a: f64, b: f64| a.total_cmp(&b),
        ),
        column => spec
            .direction
            .apply(left.column_text(column).cmp(right.column_text(column))),
    }
}

/// Rows of 1-based page `number` when `per_page` rows fit on a page.
///
/// `per_page == 0` disables paging; pages past the end are empty.
pub fn page_of<T>(rows: &[T], number: usize, per_page: usize) -> &[T] {
    if per_page == 0 {
        return rows;
    }
    let start = number.max(1).saturating_sub(1).saturating_mul(per_page);
    let end = start.saturating_add(per_page).min(rows.len());
    rows.get(start..end).unwrap_or_default()
}

/// Orders present values by `cmp` (direction-aware); absent values go last.
fn compare_valid_first<T>(
    left: Option<T>,
    right: Option<T>,
    direction: SortDirection,
    cmp: impl Fn(T, T) -> Ordering,
) -> Ordering {
    match (left, right) {
        (Some(a), Some(b)) => direction.apply(cmp(a, b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn numeric_zip(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}

fn date_matches(date: &IsoDate, display: &str, query: &NormalizedQuery) -> bool {
    let display = display.to_lowercase();
    display.contains(query.text())
        || display.contains(query.date_text())
        || date.year_segment().contains(query.text())
        || date.as_str().to_lowercase().contains(query.text())
}
