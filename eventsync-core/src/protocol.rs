//! Response bodies of the event server's mutation endpoints.

use serde::Deserialize;

/// Body returned by `/add` and `/delete/:id`.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Outcome the server reported for a mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreStatus {
    Success,
    Failure { message: Option<String> },
}

impl StoreStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, StoreStatus::Success)
    }
}

impl From<StatusResponse> for StoreStatus {
    fn from(resp: StatusResponse) -> Self {
        if resp.status == "success" {
            StoreStatus::Success
        } else {
            StoreStatus::Failure {
                message: resp.message.or(Some(resp.status)),
            }
        }
    }
}
