use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An employee record as seeded into the suite.
///
/// Records are process-lifetime values: nothing in the suite creates,
/// updates or deletes them after seeding.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub national_id: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub position: String,
    pub start_date: NaiveDate,
    pub salary: i64,
    pub status: Status,
    pub social_insurance_no: Option<String>,
    pub birth_date: NaiveDate,
    pub address: String,
    pub emergency_contact: EmergencyContact,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Trailing comma-separated segment of the address, trimmed.
    ///
    /// Addresses are free text; the last segment is treated as the city
    /// until they become structured. `None` when the address is empty.
    pub fn city(&self) -> Option<&str> {
        self.address
            .rsplit(',')
            .next()
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyContact {
    pub name: String,
    pub phone: String,
    pub relation: String,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Active,
    Inactive,
    Terminated,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Inactive => "inactive",
            Status::Terminated => "terminated",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
