//! REST client for the design backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with `ApiError::Unreachable`, since
//! the backend is only ever called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! A rejected `fetch` becomes `ApiError::Unreachable`; non-success statuses
//! go through `ApiError::from_status`; bodies that fail to parse become
//! `ApiError::Decode`. Nothing is retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use studio::backend::{Backend, RequestContext};
use studio::endpoints::{self, Access};
use studio::error::ApiError;
use studio::types::{
    AuthGrant, DesignResult, GenerationForm, Identity, LoginRequest, NewProject, Project, ProjectId, ProjectUpdate,
    RegisterRequest, SketchUpload,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

enum Payload<'a> {
    Empty,
    Json(serde_json::Value),
    Form(&'a GenerationForm),
}

/// Browser HTTP client bound to one API base.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiBackend {
    base: String,
}

impl ApiBackend {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        verb: Verb,
        path: &str,
        access: Access,
        ctx: &RequestContext,
        payload: Payload<'_>,
    ) -> Result<T, ApiError> {
        let body = self.exchange(verb, path, access, ctx, payload).await?;
        decode(&body)
    }

    async fn exchange(
        &self,
        verb: Verb,
        path: &str,
        access: Access,
        ctx: &RequestContext,
        payload: Payload<'_>,
    ) -> Result<String, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::{Method, RequestBuilder};

            let url = endpoints::join(&self.base, path);
            let method = match verb {
                Verb::Get => Method::GET,
                Verb::Post => Method::POST,
                Verb::Put => Method::PUT,
                Verb::Delete => Method::DELETE,
            };
            let mut builder = RequestBuilder::new(&url).method(method);
            if let Some(authorization) = ctx.authorization() {
                builder = builder.header("Authorization", &authorization);
            }
            let request = match payload {
                Payload::Empty => builder.build(),
                Payload::Json(value) => builder.json(&value),
                Payload::Form(form) => builder.body(form_data(form)?),
            }
            .map_err(|e| ApiError::Decode(e.to_string()))?;

            let response = request.send().await.map_err(|e| ApiError::Unreachable(e.to_string()))?;
            let status = response.status();
            let text = response.text().await.map_err(|e| ApiError::Decode(e.to_string()))?;
            if !response.ok() {
                leptos::logging::warn!("{} {path} -> {status}", verb_name(verb));
                return Err(ApiError::from_status(status, &text, access));
            }
            Ok(text)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (verb, path, access, ctx, payload, &self.base);
            Err(ApiError::Unreachable("not available on server".to_owned()))
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn verb_name(verb: Verb) -> &'static str {
    match verb {
        Verb::Get => "GET",
        Verb::Post => "POST",
        Verb::Put => "PUT",
        Verb::Delete => "DELETE",
    }
}

/// Parse a success body. Empty bodies decode as JSON `null`.
fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let body = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn json<T: serde::Serialize>(value: &T) -> Result<Payload<'static>, ApiError> {
    serde_json::to_value(value)
        .map(Payload::Json)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
fn form_data(form: &GenerationForm) -> Result<web_sys::FormData, ApiError> {
    let data = web_sys::FormData::new().map_err(|e| ApiError::Decode(format!("{e:?}")))?;
    for (name, value) in form.fields() {
        data.append_with_str(name, &value)
            .map_err(|e| ApiError::Decode(format!("{e:?}")))?;
    }
    Ok(data)
}

#[async_trait(?Send)]
impl Backend for ApiBackend {
    async fn current_identity(&self, ctx: &RequestContext) -> Result<Identity, ApiError> {
        self.fetch(Verb::Get, endpoints::AUTH_ME, Access::Authenticated, ctx, Payload::Empty)
            .await
    }

    async fn login(&self, request: &LoginRequest) -> Result<AuthGrant, ApiError> {
        let ctx = RequestContext::anonymous();
        self.fetch(Verb::Post, endpoints::AUTH_LOGIN, Access::Public, &ctx, json(request)?)
            .await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthGrant, ApiError> {
        let ctx = RequestContext::anonymous();
        self.fetch(Verb::Post, endpoints::AUTH_REGISTER, Access::Public, &ctx, json(request)?)
            .await
    }

    async fn list_projects(&self, ctx: &RequestContext) -> Result<Vec<Project>, ApiError> {
        self.fetch(Verb::Get, endpoints::PROJECTS, Access::Authenticated, ctx, Payload::Empty)
            .await
    }

    async fn fetch_project(&self, ctx: &RequestContext, id: ProjectId) -> Result<Project, ApiError> {
        self.fetch(Verb::Get, &endpoints::project(id), Access::Authenticated, ctx, Payload::Empty)
            .await
    }

    async fn create_project(&self, ctx: &RequestContext, request: &NewProject) -> Result<Project, ApiError> {
        self.fetch(Verb::Post, endpoints::PROJECTS, Access::Authenticated, ctx, json(request)?)
            .await
    }

    async fn update_project(&self, ctx: &RequestContext, id: ProjectId, update: &ProjectUpdate) -> Result<(), ApiError> {
        self.exchange(Verb::Put, &endpoints::project(id), Access::Authenticated, ctx, json(update)?)
            .await
            .map(drop)
    }

    async fn delete_project(&self, ctx: &RequestContext, id: ProjectId) -> Result<(), ApiError> {
        self.exchange(Verb::Delete, &endpoints::project(id), Access::Authenticated, ctx, Payload::Empty)
            .await
            .map(drop)
    }

    async fn save_sketch(&self, ctx: &RequestContext, id: ProjectId, upload: &SketchUpload) -> Result<(), ApiError> {
        self.exchange(Verb::Post, &endpoints::project_sketch(id), Access::Authenticated, ctx, json(upload)?)
            .await
            .map(drop)
    }

    async fn generate_design(&self, ctx: &RequestContext, form: &GenerationForm) -> Result<DesignResult, ApiError> {
        self.fetch(Verb::Post, endpoints::GENERATE_DESIGN, Access::Authenticated, ctx, Payload::Form(form))
            .await
    }
}
