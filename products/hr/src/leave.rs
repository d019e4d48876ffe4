//! Leave request decision workflow.
//!
//! A request starts pending and is decided exactly once: approve and
//! reject both refuse to touch a request that already carries a final
//! status.

use entity::LeaveRequest;
use entity::leave_request::Status;
use thiserror::Error;
use tracing::info;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum LeaveError {
    #[error("leave request not found: {0}")]
    NotFound(String),
    #[error("leave request {id} already {status}")]
    AlreadyDecided { id: String, status: Status },
}

/// Owns the leave request collection and applies decisions to it.
#[derive(Clone, Debug, Default)]
pub struct LeaveBook {
    requests: Vec<LeaveRequest>,
}

impl LeaveBook {
    pub fn new(requests: Vec<LeaveRequest>) -> Self {
        Self { requests }
    }

    pub fn records(&self) -> &[LeaveRequest] {
        &self.requests
    }

    pub fn get(&self, id: &str) -> Option<&LeaveRequest> {
        self.requests.iter().find(|request| request.id == id)
    }

    pub fn approve(&mut self, id: &str) -> Result<&LeaveRequest, LeaveError> {
        self.decide(id, Status::Approved)
    }

    pub fn reject(&mut self, id: &str) -> Result<&LeaveRequest, LeaveError> {
        self.decide(id, Status::Rejected)
    }

    fn decide(&mut self, id: &str, decision: Status) -> Result<&LeaveRequest, LeaveError> {
        let request = self
            .requests
            .iter_mut()
            .find(|request| request.id == id)
            .ok_or_else(|| LeaveError::NotFound(id.to_string()))?;
        if request.status != Status::Pending {
            return Err(LeaveError::AlreadyDecided {
                id: id.to_string(),
                status: request.status,
            });
        }
        request.status = decision;
        info!(
            id = %request.id,
            employee = %request.employee_name,
            status = decision.as_str(),
            "leave request decided"
        );
        Ok(&*request)
    }
}
