//! Query specifications: filters, sort keys and pagination for one search.
//!
//! All mutable search state (current page, sort field, filter values)
//! lives in the caller; a query is a plain value describing one request.

use chrono::NaiveDate;
use entity::{employee, leave_request};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_PAGE_SIZE: i32 = 10;

/// Filters, sort and pagination for an employee search. Unset fields
/// apply no constraint; set filters compose with AND.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeQuery {
    /// Case-insensitive substring matched against name, email, phone,
    /// national id, department, position and address (OR across fields).
    pub search_term: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub status: Option<employee::Status>,
    /// Matched against the trailing comma-segment of the address.
    pub city: Option<String>,
    pub salary_range: Option<SalaryRange>,
    pub start_date_range: Option<DateRange>,
    pub sort_by: Option<EmployeeSortField>,
    pub sort_order: SortOrder,
    /// 1-based. Values below 1 clamp to 1 and record an issue.
    pub page: Option<i32>,
    /// Defaults to 10. Non-positive sizes yield an empty page.
    pub size: Option<i32>,
}

/// Filters, sort and pagination for a leave-request search.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeaveQuery {
    /// Case-insensitive substring matched against the employee display
    /// name and the request reason.
    pub search_term: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<leave_request::Kind>,
    pub status: Option<leave_request::Status>,
    pub date_range: Option<DateRange>,
    pub sort_by: Option<LeaveSortField>,
    pub sort_order: SortOrder,
    pub page: Option<i32>,
    pub size: Option<i32>,
}

/// Inclusive salary bound: a record passes when `min <= salary <= max`.
#[derive(Copy, Clone, Debug, Deserialize, Serialize)]
pub struct SalaryRange {
    pub min: i64,
    pub max: i64,
}

impl SalaryRange {
    pub fn contains(&self, salary: i64) -> bool {
        salary >= self.min && salary <= self.max
    }
}

/// Inclusive calendar-date bound. Bounds arrive as raw strings, as a
/// date-picker posts them; [`DateRange::parse`] rejects anything that is
/// not an ISO `YYYY-MM-DD` date.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DateRange {
    pub from: String,
    pub to: String,
}

impl DateRange {
    pub fn parse(&self) -> Result<(NaiveDate, NaiveDate), QueryIssue> {
        let from = self
            .from
            .trim()
            .parse::<NaiveDate>()
            .map_err(|_| QueryIssue::InvalidDateRange {
                value: self.from.clone(),
            })?;
        let to = self
            .to
            .trim()
            .parse::<NaiveDate>()
            .map_err(|_| QueryIssue::InvalidDateRange {
                value: self.to.clone(),
            })?;
        Ok((from, to))
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Sortable employee fields. `FullName` is synthetic: it compares
/// `first_name + " " + last_name`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EmployeeSortField {
    FirstName,
    LastName,
    FullName,
    Email,
    Department,
    Position,
    StartDate,
    BirthDate,
    Salary,
    Status,
}

impl EmployeeSortField {
    pub fn as_str(self) -> &'static str {
        match self {
            EmployeeSortField::FirstName => "firstName",
            EmployeeSortField::LastName => "lastName",
            EmployeeSortField::FullName => "fullName",
            EmployeeSortField::Email => "email",
            EmployeeSortField::Department => "department",
            EmployeeSortField::Position => "position",
            EmployeeSortField::StartDate => "startDate",
            EmployeeSortField::BirthDate => "birthDate",
            EmployeeSortField::Salary => "salary",
            EmployeeSortField::Status => "status",
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LeaveSortField {
    EmployeeName,
    #[serde(rename = "type")]
    Kind,
    StartDate,
    EndDate,
    Days,
    Status,
}

impl LeaveSortField {
    pub fn as_str(self) -> &'static str {
        match self {
            LeaveSortField::EmployeeName => "employeeName",
            LeaveSortField::Kind => "type",
            LeaveSortField::StartDate => "startDate",
            LeaveSortField::EndDate => "endDate",
            LeaveSortField::Days => "days",
            LeaveSortField::Status => "status",
        }
    }
}

/// Recoverable problems found while normalizing a query.
///
/// The engine never fails a search over these; it degrades to a safe
/// default (drops the filter, clamps the page, returns an empty page) and
/// reports what it did through `SearchResult::issues`.
#[derive(Clone, Debug, Eq, PartialEq, Error, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum QueryIssue {
    #[error("invalid date in range filter: {value:?}")]
    InvalidDateRange { value: String },
    #[error("invalid page request: page {page}, size {size}")]
    InvalidPageRequest { page: i32, size: i32 },
}
