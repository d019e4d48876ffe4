use serde::{Deserialize, Serialize};

/// Precomputed KPI snapshot for the dashboard.
///
/// Supplied as an independent static value rather than derived from the
/// record collections at runtime; keeping it consistent with them is the
/// caller's responsibility.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BiMetrics {
    pub total_employees: u32,
    pub turnover_rate: f64,
    pub average_tenure: f64,
    pub total_payroll_cost: i64,
    pub average_salary: i64,
    pub active_leaves: u32,
    pub pending_leaves: u32,
    pub overtime_hours: u32,
}
