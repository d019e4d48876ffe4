//! Domain records for the HR suite.
//!
//! Pure data: every type here is an immutable in-memory value with serde
//! derives matching the wire casing of the original dashboard payloads
//! (camelCase fields, lowercase enum values). Query behavior lives in the
//! `search` crate, workflow behavior in `products-hr`.

pub mod department;
pub mod employee;
pub mod leave_request;
pub mod metrics;
pub mod payroll;

pub use department::Department;
pub use employee::Employee;
pub use leave_request::LeaveRequest;
pub use metrics::BiMetrics;
pub use payroll::PayrollRecord;
