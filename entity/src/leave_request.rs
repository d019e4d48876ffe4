use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A leave request, referencing its employee by id plus a denormalized
/// display name so list views render without a join.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    pub id: String,
    pub employee_id: String,
    pub employee_name: String,
    #[serde(rename = "type")]
    pub kind: Kind,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Supplied by the requester, not derived from the date span.
    pub days: u32,
    pub status: Status,
    pub reason: String,
}

impl LeaveRequest {
    /// Inclusive number of calendar days between start and end.
    pub fn span_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// Whether the supplied `days` agrees with the calendar span. Nothing
    /// enforces this; `products-hr` exposes an audit over it instead.
    pub fn day_count_consistent(&self) -> bool {
        self.span_days() == i64::from(self.days)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Annual,
    Sick,
    Maternity,
    Personal,
}

impl Kind {
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Annual => "annual",
            Kind::Sick => "sick",
            Kind::Maternity => "maternity",
            Kind::Personal => "personal",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pending,
    Approved,
    Rejected,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::Approved => "approved",
            Status::Rejected => "rejected",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
