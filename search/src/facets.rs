//! Facet counts for filter dropdowns.
//!
//! Facets are always computed over the full collection handed to the
//! engine, never over the filtered matches: option lists keep showing
//! full-population counts whatever the active filter state is. That is a
//! deliberate UX choice, so this module runs as its own pass over the
//! data, separate from the filter pass.

use std::collections::BTreeMap;

use entity::{Employee, LeaveRequest};
use serde::Serialize;

/// Facet label for employees whose address carries no city segment.
pub const UNKNOWN_CITY: &str = "Unknown";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeAggregations {
    pub departments: BTreeMap<String, u64>,
    pub positions: BTreeMap<String, u64>,
    pub statuses: BTreeMap<String, u64>,
    pub cities: BTreeMap<String, u64>,
    pub salary_ranges: SalaryBands,
}

/// Fixed salary buckets, serialized under the dashboard's band labels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SalaryBands {
    #[serde(rename = "0-15000")]
    pub under_15000: u64,
    #[serde(rename = "15000-25000")]
    pub from_15000: u64,
    #[serde(rename = "25000-35000")]
    pub from_25000: u64,
    #[serde(rename = "35000+")]
    pub from_35000: u64,
}

impl SalaryBands {
    fn bump(&mut self, salary: i64) {
        if salary < 15_000 {
            self.under_15000 += 1;
        } else if salary < 25_000 {
            self.from_15000 += 1;
        } else if salary < 35_000 {
            self.from_25000 += 1;
        } else {
            self.from_35000 += 1;
        }
    }

    pub fn total(&self) -> u64 {
        self.under_15000 + self.from_15000 + self.from_25000 + self.from_35000
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveAggregations {
    #[serde(rename = "types")]
    pub kinds: BTreeMap<String, u64>,
    pub statuses: BTreeMap<String, u64>,
    /// Requests per calendar month (`YYYY-MM`) of the start date.
    pub monthly_requests: BTreeMap<String, u64>,
}

pub fn employee_aggregations(employees: &[Employee]) -> EmployeeAggregations {
    let mut aggregations = EmployeeAggregations::default();
    for employee in employees {
        bump(&mut aggregations.departments, &employee.department);
        bump(&mut aggregations.positions, &employee.position);
        bump(&mut aggregations.statuses, employee.status.as_str());
        bump(
            &mut aggregations.cities,
            employee.city().unwrap_or(UNKNOWN_CITY),
        );
        aggregations.salary_ranges.bump(employee.salary);
    }
    aggregations
}

pub fn leave_aggregations(requests: &[LeaveRequest]) -> LeaveAggregations {
    let mut aggregations = LeaveAggregations::default();
    for request in requests {
        bump(&mut aggregations.kinds, request.kind.as_str());
        bump(&mut aggregations.statuses, request.status.as_str());
        let month = request.start_date.format("%Y-%m").to_string();
        bump(&mut aggregations.monthly_requests, &month);
    }
    aggregations
}

fn bump(counts: &mut BTreeMap<String, u64>, key: &str) {
    *counts.entry(key.to_string()).or_insert(0) += 1;
}
