//! The filter/sort/paginate passes behind the search operations.

use std::cmp::Ordering;

use entity::{Employee, LeaveRequest};
use serde::Serialize;
use tracing::{debug, info_span};

use crate::condition::Condition;
use crate::facets::{self, EmployeeAggregations, LeaveAggregations};
use crate::query::{
    DEFAULT_PAGE_SIZE, EmployeeQuery, EmployeeSortField, LeaveQuery, LeaveSortField, QueryIssue,
    SortOrder,
};

/// One page of matches plus the counts a filter UI needs.
///
/// `total` counts every match before paging; `aggregations` are computed
/// over the full input collection, not the matches; `issues` lists the
/// recoverable problems the engine worked around while normalizing the
/// query.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult<T, A> {
    pub records: Vec<T>,
    pub total: usize,
    pub aggregations: A,
    pub issues: Vec<QueryIssue>,
}

/// Search a collection of employees. Pure and synchronous: the slice is
/// read-only and all query state belongs to the caller.
pub fn search_employees(
    employees: &[Employee],
    query: &EmployeeQuery,
) -> SearchResult<Employee, EmployeeAggregations> {
    let span = info_span!(
        "hr.search.employees",
        collection = employees.len(),
        has_term = query.search_term.is_some(),
        sort = query.sort_by.map(|field| field.as_str()).unwrap_or(""),
        order = query.sort_order.as_str(),
    );
    let _guard = span.enter();

    let mut issues = Vec::new();
    let condition = employee_condition(query, &mut issues);
    let mut matched: Vec<Employee> = employees
        .iter()
        .filter(|employee| condition.matches(employee))
        .cloned()
        .collect();
    let total = matched.len();

    if let Some(field) = query.sort_by {
        sort_employees(&mut matched, field, query.sort_order);
    }

    let window = page_window(query.page, query.size, &mut issues);
    let records = window.apply(matched);
    let aggregations = facets::employee_aggregations(employees);
    debug!(total, returned = records.len(), "employee search complete");

    SearchResult {
        records,
        total,
        aggregations,
        issues,
    }
}

/// Search a collection of leave requests.
pub fn search_leave_requests(
    requests: &[LeaveRequest],
    query: &LeaveQuery,
) -> SearchResult<LeaveRequest, LeaveAggregations> {
    let span = info_span!(
        "hr.search.leave_requests",
        collection = requests.len(),
        has_term = query.search_term.is_some(),
        sort = query.sort_by.map(|field| field.as_str()).unwrap_or(""),
        order = query.sort_order.as_str(),
    );
    let _guard = span.enter();

    let mut issues = Vec::new();
    let condition = leave_condition(query, &mut issues);
    let mut matched: Vec<LeaveRequest> = requests
        .iter()
        .filter(|request| condition.matches(request))
        .cloned()
        .collect();
    let total = matched.len();

    if let Some(field) = query.sort_by {
        sort_leave_requests(&mut matched, field, query.sort_order);
    }

    let window = page_window(query.page, query.size, &mut issues);
    let records = window.apply(matched);
    let aggregations = facets::leave_aggregations(requests);
    debug!(total, returned = records.len(), "leave search complete");

    SearchResult {
        records,
        total,
        aggregations,
        issues,
    }
}

fn employee_condition(query: &EmployeeQuery, issues: &mut Vec<QueryIssue>) -> Condition<Employee> {
    let mut condition = Condition::all();

    if let Some(term) = normalized_term(query.search_term.as_deref()) {
        condition = condition.add_group(employee_text_condition(&term));
    }
    if let Some(department) = query.department.clone() {
        condition = condition.add(move |employee: &Employee| employee.department == department);
    }
    if let Some(position) = query.position.clone() {
        condition = condition.add(move |employee: &Employee| employee.position == position);
    }
    if let Some(status) = query.status {
        condition = condition.add(move |employee: &Employee| employee.status == status);
    }
    if let Some(city) = &query.city {
        let needle = fold_lower(city);
        condition = condition.add(move |employee: &Employee| {
            employee
                .city()
                .is_some_and(|segment| fold_lower(segment).contains(&needle))
        });
    }
    if let Some(range) = query.salary_range {
        condition = condition.add(move |employee: &Employee| range.contains(employee.salary));
    }
    if let Some(range) = &query.start_date_range {
        match range.parse() {
            Ok((from, to)) => {
                condition = condition.add(move |employee: &Employee| {
                    employee.start_date >= from && employee.start_date <= to
                });
            }
            // Unparsable bound: drop the filter, report the issue.
            Err(issue) => issues.push(issue),
        }
    }

    condition
}

/// OR-match of the folded term over every free-text-searchable field.
fn employee_text_condition(term: &str) -> Condition<Employee> {
    const FIELDS: [fn(&Employee) -> &str; 8] = [
        |employee| &employee.first_name,
        |employee| &employee.last_name,
        |employee| &employee.email,
        |employee| &employee.phone,
        |employee| &employee.national_id,
        |employee| &employee.department,
        |employee| &employee.position,
        |employee| &employee.address,
    ];
    let mut group = Condition::any();
    for select in FIELDS {
        let term = term.to_string();
        group = group.add(move |employee: &Employee| fold_lower(select(employee)).contains(&term));
    }
    group
}

fn leave_condition(query: &LeaveQuery, issues: &mut Vec<QueryIssue>) -> Condition<LeaveRequest> {
    let mut condition = Condition::all();

    if let Some(term) = normalized_term(query.search_term.as_deref()) {
        condition = condition.add_group(leave_text_condition(&term));
    }
    if let Some(kind) = query.kind {
        condition = condition.add(move |request: &LeaveRequest| request.kind == kind);
    }
    if let Some(status) = query.status {
        condition = condition.add(move |request: &LeaveRequest| request.status == status);
    }
    if let Some(range) = &query.date_range {
        match range.parse() {
            Ok((from, to)) => {
                condition = condition.add(move |request: &LeaveRequest| {
                    request.start_date >= from && request.start_date <= to
                });
            }
            Err(issue) => issues.push(issue),
        }
    }

    condition
}

fn leave_text_condition(term: &str) -> Condition<LeaveRequest> {
    const FIELDS: [fn(&LeaveRequest) -> &str; 2] = [
        |request| &request.employee_name,
        |request| &request.reason,
    ];
    let mut group = Condition::any();
    for select in FIELDS {
        let term = term.to_string();
        group = group.add(move |request: &LeaveRequest| fold_lower(select(request)).contains(&term));
    }
    group
}

fn normalized_term(term: Option<&str>) -> Option<String> {
    term.map(str::trim)
        .filter(|trimmed| !trimmed.is_empty())
        .map(fold_lower)
}

/// Case-folds a value for matching and comparison. `to_lowercase` maps
/// the dotted capital `İ` to `i` followed by U+0307, which would break
/// contiguous substring checks against Turkish text, so the combining
/// mark is stripped.
fn fold_lower(value: &str) -> String {
    value
        .to_lowercase()
        .chars()
        .filter(|c| *c != '\u{0307}')
        .collect()
}

fn sort_employees(records: &mut [Employee], field: EmployeeSortField, order: SortOrder) {
    // sort_by is stable: exact ties keep their source order.
    records.sort_by(|a, b| directed(compare_employees(a, b, field), order));
}

fn compare_employees(a: &Employee, b: &Employee, field: EmployeeSortField) -> Ordering {
    match field {
        EmployeeSortField::FirstName => folded_cmp(&a.first_name, &b.first_name),
        EmployeeSortField::LastName => folded_cmp(&a.last_name, &b.last_name),
        EmployeeSortField::FullName => folded_cmp(&a.full_name(), &b.full_name()),
        EmployeeSortField::Email => folded_cmp(&a.email, &b.email),
        EmployeeSortField::Department => folded_cmp(&a.department, &b.department),
        EmployeeSortField::Position => folded_cmp(&a.position, &b.position),
        EmployeeSortField::StartDate => a.start_date.cmp(&b.start_date),
        EmployeeSortField::BirthDate => a.birth_date.cmp(&b.birth_date),
        EmployeeSortField::Salary => a.salary.cmp(&b.salary),
        EmployeeSortField::Status => a.status.as_str().cmp(b.status.as_str()),
    }
}

fn sort_leave_requests(records: &mut [LeaveRequest], field: LeaveSortField, order: SortOrder) {
    records.sort_by(|a, b| directed(compare_leave_requests(a, b, field), order));
}

fn compare_leave_requests(a: &LeaveRequest, b: &LeaveRequest, field: LeaveSortField) -> Ordering {
    match field {
        LeaveSortField::EmployeeName => folded_cmp(&a.employee_name, &b.employee_name),
        LeaveSortField::Kind => a.kind.as_str().cmp(b.kind.as_str()),
        LeaveSortField::StartDate => a.start_date.cmp(&b.start_date),
        LeaveSortField::EndDate => a.end_date.cmp(&b.end_date),
        LeaveSortField::Days => a.days.cmp(&b.days),
        LeaveSortField::Status => a.status.as_str().cmp(b.status.as_str()),
    }
}

fn folded_cmp(a: &str, b: &str) -> Ordering {
    fold_lower(a).cmp(&fold_lower(b))
}

fn directed(ordering: Ordering, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    }
}

#[derive(Copy, Clone, Debug)]
struct PageWindow {
    start: usize,
    len: usize,
}

impl PageWindow {
    fn apply<T>(self, records: Vec<T>) -> Vec<T> {
        records.into_iter().skip(self.start).take(self.len).collect()
    }
}

/// Normalize 1-based pagination. Pages below 1 clamp to 1; a non-positive
/// size yields an empty page. Both record an issue, and out-of-range
/// pages simply fall off the end of the collection.
fn page_window(page: Option<i32>, size: Option<i32>, issues: &mut Vec<QueryIssue>) -> PageWindow {
    let requested_page = page.unwrap_or(1);
    let requested_size = size.unwrap_or(DEFAULT_PAGE_SIZE);
    if requested_page < 1 || requested_size <= 0 {
        issues.push(QueryIssue::InvalidPageRequest {
            page: requested_page,
            size: requested_size,
        });
    }
    if requested_size <= 0 {
        return PageWindow { start: 0, len: 0 };
    }
    let page = requested_page.max(1) as usize;
    let size = requested_size as usize;
    PageWindow {
        start: (page - 1) * size,
        len: size,
    }
}
