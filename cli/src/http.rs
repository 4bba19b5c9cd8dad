//! `reqwest` implementation of the design backend.
//!
//! ERROR HANDLING
//! ==============
//! Connect and send failures become `ApiError::Unreachable`; non-success
//! statuses are classified by `ApiError::from_status` exactly as in the
//! browser; undecodable success bodies become `ApiError::Decode`.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use async_trait::async_trait;
use reqwest::Method;
use reqwest::multipart::Form;
use serde::de::DeserializeOwned;
use studio::backend::{Backend, RequestContext};
use studio::endpoints::{self, Access};
use studio::error::ApiError;
use studio::types::{
    AuthGrant, DesignResult, GenerationForm, Health, Identity, LoginRequest, NewProject, Project, ProjectId,
    ProjectUpdate, RegisterRequest, SketchUpload,
};

enum Body {
    Empty,
    Json(serde_json::Value),
    Multipart(Form),
}

#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: reqwest::Client,
    base: String,
}

impl HttpBackend {
    pub fn new(base: impl Into<String>) -> Self {
        Self { client: reqwest::Client::new(), base: base.into() }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// `GET /health`.
    pub async fn health(&self) -> Result<Health, ApiError> {
        self.call(Method::GET, endpoints::HEALTH, Access::Public, &RequestContext::anonymous(), Body::Empty)
            .await
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        access: Access,
        ctx: &RequestContext,
        body: Body,
    ) -> Result<T, ApiError> {
        let text = self.send(method, path, access, ctx, body).await?;
        decode(&text)
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        access: Access,
        ctx: &RequestContext,
        body: Body,
    ) -> Result<String, ApiError> {
        let url = endpoints::join(&self.base, path);
        tracing::debug!(%method, %url, "backend request");
        let mut request = self.client.request(method.clone(), &url);
        if let Some(authorization) = ctx.authorization() {
            request = request.header(reqwest::header::AUTHORIZATION, authorization);
        }
        request = match body {
            Body::Empty => request,
            Body::Json(value) => request.json(&value),
            Body::Multipart(form) => request.multipart(form),
        };

        let response = request.send().await.map_err(|e| ApiError::Unreachable(e.to_string()))?;
        let status = response.status();
        let text = response.text().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        if !status.is_success() {
            tracing::warn!(%method, path, status = status.as_u16(), "backend rejected request");
            return Err(ApiError::from_status(status.as_u16(), &text, access));
        }
        Ok(text)
    }
}

/// Parse a success body. Empty bodies decode as JSON `null`.
fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let body = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn json<T: serde::Serialize>(value: &T) -> Result<Body, ApiError> {
    serde_json::to_value(value)
        .map(Body::Json)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

fn multipart(form: &GenerationForm) -> Form {
    form.fields()
        .into_iter()
        .fold(Form::new(), |parts, (name, value)| parts.text(name, value))
}

#[async_trait(?Send)]
impl Backend for HttpBackend {
    async fn current_identity(&self, ctx: &RequestContext) -> Result<Identity, ApiError> {
        self.call(Method::GET, endpoints::AUTH_ME, Access::Authenticated, ctx, Body::Empty)
            .await
    }

    async fn login(&self, request: &LoginRequest) -> Result<AuthGrant, ApiError> {
        let ctx = RequestContext::anonymous();
        self.call(Method::POST, endpoints::AUTH_LOGIN, Access::Public, &ctx, json(request)?)
            .await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthGrant, ApiError> {
        let ctx = RequestContext::anonymous();
        self.call(Method::POST, endpoints::AUTH_REGISTER, Access::Public, &ctx, json(request)?)
            .await
    }

    async fn list_projects(&self, ctx: &RequestContext) -> Result<Vec<Project>, ApiError> {
        self.call(Method::GET, endpoints::PROJECTS, Access::Authenticated, ctx, Body::Empty)
            .await
    }

    async fn fetch_project(&self, ctx: &RequestContext, id: ProjectId) -> Result<Project, ApiError> {
        self.call(Method::GET, &endpoints::project(id), Access::Authenticated, ctx, Body::Empty)
            .await
    }

    async fn create_project(&self, ctx: &RequestContext, request: &NewProject) -> Result<Project, ApiError> {
        self.call(Method::POST, endpoints::PROJECTS, Access::Authenticated, ctx, json(request)?)
            .await
    }

    async fn update_project(&self, ctx: &RequestContext, id: ProjectId, update: &ProjectUpdate) -> Result<(), ApiError> {
        self.send(Method::PUT, &endpoints::project(id), Access::Authenticated, ctx, json(update)?)
            .await
            .map(drop)
    }

    async fn delete_project(&self, ctx: &RequestContext, id: ProjectId) -> Result<(), ApiError> {
        self.send(Method::DELETE, &endpoints::project(id), Access::Authenticated, ctx, Body::Empty)
            .await
            .map(drop)
    }

    async fn save_sketch(&self, ctx: &RequestContext, id: ProjectId, upload: &SketchUpload) -> Result<(), ApiError> {
        self.send(Method::POST, &endpoints::project_sketch(id), Access::Authenticated, ctx, json(upload)?)
            .await
            .map(drop)
    }

    async fn generate_design(&self, ctx: &RequestContext, form: &GenerationForm) -> Result<DesignResult, ApiError> {
        self.call(Method::POST, endpoints::GENERATE_DESIGN, Access::Authenticated, ctx, Body::Multipart(multipart(form)))
            .await
    }
}
