//! Error taxonomy shared by every client surface.
//!
//! ERROR HANDLING
//! ==============
//! Four classes, none retried:
//! - transport failure (`ApiError::Unreachable`) always maps to a fixed
//!   message naming the expected backend address;
//! - `401` on an authenticated call (`ApiError::Unauthorized`) always ends the
//!   session, whichever operation hit it;
//! - local validation (`ValidationError`) is raised before any request;
//! - any other backend rejection surfaces its `detail` text verbatim, else a
//!   per-operation fallback.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::endpoints::Access;

/// Notice shown after a `401` on an authenticated call.
pub const SESSION_EXPIRED: &str = "Session expired. Please login again.";

/// Failure talking to the design backend.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("backend unreachable: {0}")]
    Unreachable(String),
    /// `401` on a call that carried (or required) the bearer credential.
    #[error("session is no longer valid")]
    Unauthorized,
    /// Any other non-success status.
    #[error("backend rejected request with status {status}")]
    Rejected { status: u16, detail: Option<String> },
    /// A success status whose body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-success response.
    ///
    /// A `401` only counts as an invalid session on authenticated endpoints;
    /// on login/register it is an ordinary rejection ("wrong password").
    #[must_use]
    pub fn from_status(status: u16, body: &str, access: Access) -> Self {
        if status == 401 && access == Access::Authenticated {
            return Self::Unauthorized;
        }
        Self::Rejected { status, detail: detail_from_body(body) }
    }
}

/// Extract a string `detail` field from a JSON error body.
///
/// Validation errors report `detail` as a list; those are not shown verbatim.
#[must_use]
pub fn detail_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).unwrap_or_default();
    value
        .get("detail")
        .and_then(serde_json::Value::as_str)
        .filter(|detail| !detail.trim().is_empty())
        .map(str::to_owned)
}

/// Fixed notice for an unreachable backend.
#[must_use]
pub fn unreachable_notice(api_base: &str) -> String {
    format!("Cannot connect to backend. Make sure backend is running on {api_base}")
}

/// A precondition checked locally before any request is made.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter your email and password")]
    MissingCredentials,
    #[error("Please enter a project title")]
    EmptyTitle,
    #[error("Please select or create a project first")]
    NoProjectSelected,
    #[error("Please enter a design brief")]
    EmptyBrief,
    #[error("A design is already being generated")]
    Busy,
    #[error("Draw something before saving")]
    EmptySketch,
}

/// The durable credential slot could not be written.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("credential storage failed: {0}")]
pub struct StorageError(pub String);

/// Any failure of a user action.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ClientError {
    /// Whether this failure must end the session.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Api(ApiError::Unauthorized))
    }

    /// Human-readable message for the action that failed.
    #[must_use]
    pub fn notice(&self, operation: Operation, api_base: &str) -> String {
        match self {
            Self::Validation(err) => err.to_string(),
            Self::Api(ApiError::Unreachable(_)) => unreachable_notice(api_base),
            Self::Api(ApiError::Unauthorized) => SESSION_EXPIRED.to_owned(),
            Self::Api(ApiError::Rejected { detail: Some(detail), .. }) => detail.clone(),
            Self::Api(ApiError::Rejected { detail: None, .. } | ApiError::Decode(_)) | Self::Storage(_) => {
                operation.fallback().to_owned()
            }
        }
    }
}

/// User actions, used to pick the fallback notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Login,
    Register,
    LoadProjects,
    CreateProject,
    DeleteProject,
    GenerateDesign,
    SaveSketch,
}

impl Operation {
    /// Notice used when the backend gave no usable detail.
    #[must_use]
    pub fn fallback(self) -> &'static str {
        match self {
            Self::Login => "Login failed",
            Self::Register => "Registration failed",
            Self::LoadProjects => "Failed to load projects",
            Self::CreateProject => "Failed to create project",
            Self::DeleteProject => "Failed to delete project",
            Self::GenerateDesign => "Failed to generate design",
            Self::SaveSketch => "Failed to save sketch.",
        }
    }
}
