//! List-screen state: debounced query plus active column sort.

use super::debounce::{QueryDebouncer, TimerScheduler};
use super::present::{present, EmployeeRow, SortDirection, SortSpec};
use crate::model::employee::Employee;
use crate::model::field::EmployeeField;
use crate::reference::RegionTable;
use std::time::Duration;

/// Query/sort state behind an employee list.
///
/// Rows are recomputed from scratch on every `rows` call; callers render
/// after a timer fires or the sort changes.
#[derive(Debug, Default)]
pub struct EmployeeListView {
    debouncer: QueryDebouncer,
    sort: Option<SortSpec>,
}

impl EmployeeListView {
    pub fn new(debounce: Duration) -> Self {
        Self {
            debouncer: QueryDebouncer::new(debounce),
            sort: None,
        }
    }

    /// Forwards one keystroke's worth of search text to the debouncer.
    pub fn on_search_input<S>(&mut self, scheduler: &mut S, raw: impl Into<String>)
    where
        S: TimerScheduler + ?Sized,
    {
        self.debouncer.on_input(scheduler, raw);
    }

    pub fn request_sort(&mut self, spec: SortSpec) {
        self.sort = Some(spec);
    }

    /// Header-click behaviour: a new column sorts ascending, the same column flips.
    pub fn toggle_sort(&mut self, column: EmployeeField) -> SortSpec {
        let direction = match self.sort {
            Some(current) if current.column == column => current.direction.toggled(),
            _ => SortDirection::Ascending,
        };
        let spec = SortSpec { column, direction };
        self.sort = Some(spec);
        spec
    }

    /// Back to the default most-recent-first order.
    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    pub fn sort(&self) -> Option<SortSpec> {
        self.sort
    }

    pub fn raw_query(&self) -> &str {
        self.debouncer.raw_query()
    }

    pub fn settled_query(&self) -> String {
        self.debouncer.settled_query()
    }

    pub fn is_settled(&self) -> bool {
        self.debouncer.is_settled()
    }

    /// Rows for the current settled query and sort.
    pub fn rows<'a>(
        &self,
        collection: &'a [Employee],
        regions: &'a RegionTable,
    ) -> Vec<EmployeeRow<'a>> {
        present(collection, &self.settled_query(), self.sort, regions)
    }
}
