use serde::{Deserialize, Serialize};

/// A department as configured in the seed data. `employee_count` is part
/// of the static record, not a live aggregation over employees.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: String,
    pub name: String,
    pub employee_count: u32,
    pub manager: String,
    pub budget: i64,
}
