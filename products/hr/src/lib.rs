//! HR vertical slice: the seed dataset, the leave decision workflow and
//! the dashboard-facing facade over the search engine.

pub mod leave;
pub mod seed;
pub mod summary;

use entity::{BiMetrics, Department, Employee, LeaveRequest, PayrollRecord};
use search::{
    EmployeeAggregations, EmployeeQuery, LeaveAggregations, LeaveQuery, SearchResult,
    search_employees, search_leave_requests,
};

use crate::leave::{LeaveBook, LeaveError};
use crate::summary::LeaveStatusSummary;

/// Owns the HR record collections for the lifetime of the process and
/// routes queries and leave decisions to the right place. Everything else
/// is read-only.
#[derive(Clone, Debug)]
pub struct HrModule {
    employees: Vec<Employee>,
    departments: Vec<Department>,
    payroll: Vec<PayrollRecord>,
    metrics: BiMetrics,
    leaves: LeaveBook,
}

impl HrModule {
    pub fn new(
        employees: Vec<Employee>,
        leave_requests: Vec<LeaveRequest>,
        payroll: Vec<PayrollRecord>,
        departments: Vec<Department>,
        metrics: BiMetrics,
    ) -> Self {
        Self {
            employees,
            departments,
            payroll,
            metrics,
            leaves: LeaveBook::new(leave_requests),
        }
    }

    pub fn with_seed_data() -> Self {
        Self::new(
            seed::employees(),
            seed::leave_requests(),
            seed::payroll_records(),
            seed::departments(),
            seed::bi_metrics(),
        )
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn leave_requests(&self) -> &[LeaveRequest] {
        self.leaves.records()
    }

    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    pub fn payroll(&self) -> &[PayrollRecord] {
        &self.payroll
    }

    pub fn metrics(&self) -> &BiMetrics {
        &self.metrics
    }

    pub fn search_employees(
        &self,
        query: &EmployeeQuery,
    ) -> SearchResult<Employee, EmployeeAggregations> {
        search_employees(&self.employees, query)
    }

    pub fn search_leave_requests(
        &self,
        query: &LeaveQuery,
    ) -> SearchResult<LeaveRequest, LeaveAggregations> {
        search_leave_requests(self.leaves.records(), query)
    }

    pub fn approve_leave(&mut self, id: &str) -> Result<&LeaveRequest, LeaveError> {
        self.leaves.approve(id)
    }

    pub fn reject_leave(&mut self, id: &str) -> Result<&LeaveRequest, LeaveError> {
        self.leaves.reject(id)
    }

    pub fn leave_summary(&self) -> LeaveStatusSummary {
        summary::leave_status_summary(self.leaves.records())
    }
}

impl Default for HrModule {
    fn default() -> Self {
        Self::with_seed_data()
    }
}
