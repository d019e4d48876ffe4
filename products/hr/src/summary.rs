//! Derived dashboard counts over the live collections, as opposed to the
//! static `BiMetrics` snapshot.

use entity::LeaveRequest;
use entity::leave_request::Status;

/// Leave requests per status, as shown on the leave view's KPI cards.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct LeaveStatusSummary {
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

pub fn leave_status_summary(requests: &[LeaveRequest]) -> LeaveStatusSummary {
    let mut summary = LeaveStatusSummary::default();
    for request in requests {
        match request.status {
            Status::Pending => summary.pending += 1,
            Status::Approved => summary.approved += 1,
            Status::Rejected => summary.rejected += 1,
        }
    }
    summary
}

/// Requests whose supplied `days` disagrees with the inclusive date span.
/// The field is requester-supplied and never enforced, so this audit is
/// how the gap stays visible.
pub fn inconsistent_day_counts(requests: &[LeaveRequest]) -> Vec<&LeaveRequest> {
    requests
        .iter()
        .filter(|request| !request.day_count_consistent())
        .collect()
}
