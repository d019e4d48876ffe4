use serde::{Deserialize, Serialize};

/// One month of payroll for one employee. Seeded but only reachable
/// through the `HrModule` accessor; no current view renders it.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollRecord {
    pub id: String,
    pub employee_id: String,
    pub employee_name: String,
    /// Calendar month in `YYYY-MM` form.
    pub month: String,
    pub gross_salary: i64,
    pub net_salary: i64,
    pub statutory_premium: i64,
    pub income_tax: i64,
    pub overtime_hours: u32,
    pub overtime_pay: i64,
}
