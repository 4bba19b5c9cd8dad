//! Backend paths.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

use crate::types::ProjectId;

pub const AUTH_ME: &str = "/auth/me";
pub const AUTH_LOGIN: &str = "/auth/login/json";
pub const AUTH_REGISTER: &str = "/auth/register";
pub const PROJECTS: &str = "/projects/";
pub const GENERATE_DESIGN: &str = "/ai/generate_design/form";
pub const HEALTH: &str = "/health";

/// Whether an endpoint expects the bearer credential.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
}

#[must_use]
pub fn project(id: ProjectId) -> String {
    format!("/projects/{id}")
}

#[must_use]
pub fn project_sketch(id: ProjectId) -> String {
    format!("/projects/{id}/sketch")
}

/// Join the configured API base with an absolute path.
#[must_use]
pub fn join(api_base: &str, path: &str) -> String {
    format!("{}{path}", api_base.trim_end_matches('/'))
}

/// Resolve a concept reference returned by the backend.
///
/// Absolute URLs pass through; backend-relative paths such as
/// `/static/mock_model.glb` are joined onto the API base.
#[must_use]
pub fn resolve_asset(api_base: &str, reference: &str) -> String {
    let absolute = ["http://", "https://", "data:", "blob:"]
        .iter()
        .any(|scheme| reference.starts_with(scheme));
    if absolute {
        reference.to_owned()
    } else if reference.starts_with('/') {
        join(api_base, reference)
    } else {
        join(api_base, &format!("/{reference}"))
    }
}
