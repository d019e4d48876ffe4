//! In-memory search over the HR record collections.
//!
//! Stands in for a networked search index: queries filter, sort and
//! paginate a borrowed slice of records and return facet counts alongside
//! the page. Everything is synchronous — there is no I/O to suspend on —
//! and the engine holds no state; the caller owns the collections and the
//! current filter/sort/page values.
//!
//! Two deliberate contracts worth calling out:
//!
//! - Filters compose with AND across filter kinds and OR inside the
//!   free-text group, built from the [`Condition`] combinator.
//! - Facet counts are always computed over the full unfiltered input, so
//!   filter dropdowns keep full-population counts whatever the active
//!   filter state is.

pub mod condition;
pub mod engine;
pub mod facets;
pub mod query;

pub use condition::Condition;
pub use engine::{SearchResult, search_employees, search_leave_requests};
pub use facets::{EmployeeAggregations, LeaveAggregations, SalaryBands};
pub use query::{
    DateRange, EmployeeQuery, EmployeeSortField, LeaveQuery, LeaveSortField, QueryIssue,
    SalaryRange, SortOrder,
};
