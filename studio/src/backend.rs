//! The seam between client logic and HTTP.
//!
//! DESIGN
//! ======
//! The bearer credential travels in an explicit [`RequestContext`] on every
//! call instead of living on a shared request configuration, so a session
//! reset cannot leave a stale header behind. The trait is `?Send`: the WASM
//! implementation holds browser handles and runs on the single UI thread.
//!
//! Implementations map transport failures to `ApiError::Unreachable` and
//! non-success statuses through `ApiError::from_status`.

use async_trait::async_trait;

use crate::credential::Credential;
use crate::error::ApiError;
use crate::types::{
    AuthGrant, DesignResult, GenerationForm, Identity, LoginRequest, NewProject, Project, ProjectId, ProjectUpdate,
    RegisterRequest, SketchUpload,
};

/// Per-request authorization context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestContext {
    credential: Option<Credential>,
}

impl RequestContext {
    /// Context for calls made without a credential.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Context carrying `credential` as a bearer token.
    #[must_use]
    pub fn bearer(credential: Credential) -> Self {
        Self { credential: Some(credential) }
    }

    #[must_use]
    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    /// `Authorization` header value, when a credential is attached.
    #[must_use]
    pub fn authorization(&self) -> Option<String> {
        self.credential.as_ref().map(Credential::bearer)
    }
}

/// Design backend operations used by the client.
#[async_trait(?Send)]
pub trait Backend {
    /// `GET /auth/me`.
    async fn current_identity(&self, ctx: &RequestContext) -> Result<Identity, ApiError>;

    /// `POST /auth/login/json`.
    async fn login(&self, request: &LoginRequest) -> Result<AuthGrant, ApiError>;

    /// `POST /auth/register`.
    async fn register(&self, request: &RegisterRequest) -> Result<AuthGrant, ApiError>;

    /// `GET /projects/`.
    async fn list_projects(&self, ctx: &RequestContext) -> Result<Vec<Project>, ApiError>;

    /// `GET /projects/{id}`.
    async fn fetch_project(&self, ctx: &RequestContext, id: ProjectId) -> Result<Project, ApiError>;

    /// `POST /projects/`.
    async fn create_project(&self, ctx: &RequestContext, request: &NewProject) -> Result<Project, ApiError>;

    /// `PUT /projects/{id}`; the reply body is discarded.
    async fn update_project(&self, ctx: &RequestContext, id: ProjectId, update: &ProjectUpdate) -> Result<(), ApiError>;

    /// `DELETE /projects/{id}`.
    async fn delete_project(&self, ctx: &RequestContext, id: ProjectId) -> Result<(), ApiError>;

    /// `POST /projects/{id}/sketch`.
    async fn save_sketch(&self, ctx: &RequestContext, id: ProjectId, upload: &SketchUpload) -> Result<(), ApiError>;

    /// Multipart `POST /ai/generate_design/form`.
    async fn generate_design(&self, ctx: &RequestContext, form: &GenerationForm) -> Result<DesignResult, ApiError>;
}
