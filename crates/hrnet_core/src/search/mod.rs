//! Search, filter and sort over the employee collection.
//!
//! # Responsibility
//! - Debounce free-text input into a settled query.
//! - Filter and order the collection into display rows.
//!
//! # Invariants
//! - Presentation never mutates the store's collection or its order.

mod debounce;
mod present;
mod view;

pub use debounce::{
    ManualScheduler, QueryDebouncer, TimerHandle, TimerScheduler, TimerTask, DEFAULT_DEBOUNCE,
};
pub use present::{
    page_of, present, sort_rows, EmployeeRow, NormalizedQuery, SortDirection, SortSpec,
};
pub use view::EmployeeListView;
