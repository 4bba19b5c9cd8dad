//! In-memory stand-in for the design backend used by unit tests.
//!
//! It behaves like the real service closely enough for round-trip tests:
//! it checks the bearer token, assigns project ids, stores updates and
//! returns a configured design result. Every call is recorded by name.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use crate::backend::{Backend, RequestContext};
use crate::error::ApiError;
use crate::types::{
    AuthGrant, DesignResult, GenerationForm, Identity, LoginRequest, NewProject, Project, ProjectId, ProjectUpdate,
    RegisterRequest, SketchUpload,
};

pub(crate) const TOKEN: &str = "T";

pub(crate) struct ScriptedBackend {
    /// Every call fails as if the network were down.
    pub offline: Cell<bool>,
    /// Reply to login/register; `None` rejects with a 401 detail.
    pub grant: RefCell<Option<AuthGrant>>,
    /// Token the backend accepts on authenticated calls.
    pub accepted_token: RefCell<Option<String>>,
    pub identity: RefCell<Identity>,
    pub projects: RefCell<Vec<Project>>,
    pub result: RefCell<DesignResult>,
    /// Returned (once) by the next call instead of its normal reply.
    pub fail_next: RefCell<Option<ApiError>>,
    pub calls: RefCell<Vec<&'static str>>,
    pub forms: RefCell<Vec<GenerationForm>>,
    pub updates: RefCell<Vec<(ProjectId, ProjectUpdate)>>,
    pub sketches: RefCell<Vec<(ProjectId, String)>>,
    pub registered_names: RefCell<Vec<String>>,
    next_id: Cell<ProjectId>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self {
            offline: Cell::new(false),
            grant: RefCell::new(Some(AuthGrant {
                access_token: TOKEN.to_owned(),
                user_id: 1,
                email: "a@b.com".to_owned(),
                name: None,
            })),
            accepted_token: RefCell::new(Some(TOKEN.to_owned())),
            identity: RefCell::new(Identity { id: 1, email: "a@b.com".to_owned(), name: "Ada".to_owned() }),
            projects: RefCell::new(Vec::new()),
            result: RefCell::new(DesignResult {
                design_narrative: "A timber cabin with a south-facing glazed gable.".to_owned(),
                compliance_notes: "Meets standard building codes".to_owned(),
                design_concept_url: Some("/static/mock_model.glb".to_owned()),
                error: None,
            }),
            fail_next: RefCell::new(None),
            calls: RefCell::new(Vec::new()),
            forms: RefCell::new(Vec::new()),
            updates: RefCell::new(Vec::new()),
            sketches: RefCell::new(Vec::new()),
            registered_names: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
        }
    }

    /// Seed the server-side project list.
    pub fn with_projects(self, projects: Vec<Project>) -> Self {
        let next = projects.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        self.next_id.set(next);
        *self.projects.borrow_mut() = projects;
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    /// Invalidate every issued token, as if it had expired.
    pub fn expire_tokens(&self) {
        self.accepted_token.borrow_mut().take();
    }

    fn enter(&self, name: &'static str) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(name);
        if self.offline.get() {
            return Err(ApiError::Unreachable("connection refused".to_owned()));
        }
        match self.fail_next.borrow_mut().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn authorize(&self, name: &'static str, ctx: &RequestContext) -> Result<(), ApiError> {
        self.enter(name)?;
        let presented = ctx.credential().map(|c| c.as_str().to_owned());
        if presented.is_some() && presented == *self.accepted_token.borrow() {
            Ok(())
        } else {
            Err(ApiError::Unauthorized)
        }
    }

    fn not_found() -> ApiError {
        ApiError::Rejected { status: 404, detail: Some("Project not found".to_owned()) }
    }

    fn grant(&self) -> Result<AuthGrant, ApiError> {
        self.grant.borrow().clone().ok_or(ApiError::Rejected {
            status: 401,
            detail: Some("Incorrect email or password".to_owned()),
        })
    }
}

pub(crate) fn project(id: ProjectId, title: &str, description: Option<&str>) -> Project {
    Project {
        id,
        title: title.to_owned(),
        description: description.map(str::to_owned),
        sketch_data: None,
        design_narrative: None,
        compliance_notes: None,
        design_concept_url: None,
    }
}

#[async_trait(?Send)]
impl Backend for ScriptedBackend {
    async fn current_identity(&self, ctx: &RequestContext) -> Result<Identity, ApiError> {
        self.authorize("current_identity", ctx)?;
        Ok(self.identity.borrow().clone())
    }

    async fn login(&self, _request: &LoginRequest) -> Result<AuthGrant, ApiError> {
        self.enter("login")?;
        self.grant()
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthGrant, ApiError> {
        self.enter("register")?;
        self.registered_names.borrow_mut().push(request.name.clone());
        self.grant()
    }

    async fn list_projects(&self, ctx: &RequestContext) -> Result<Vec<Project>, ApiError> {
        self.authorize("list_projects", ctx)?;
        Ok(self.projects.borrow().clone())
    }

    async fn fetch_project(&self, ctx: &RequestContext, id: ProjectId) -> Result<Project, ApiError> {
        self.authorize("fetch_project", ctx)?;
        self.projects.borrow().iter().find(|p| p.id == id).cloned().ok_or_else(Self::not_found)
    }

    async fn create_project(&self, ctx: &RequestContext, request: &NewProject) -> Result<Project, ApiError> {
        self.authorize("create_project", ctx)?;
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let created = project(id, &request.title, Some(&request.description));
        self.projects.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn update_project(&self, ctx: &RequestContext, id: ProjectId, update: &ProjectUpdate) -> Result<(), ApiError> {
        self.authorize("update_project", ctx)?;
        self.updates.borrow_mut().push((id, update.clone()));
        let mut projects = self.projects.borrow_mut();
        let stored = projects.iter_mut().find(|p| p.id == id).ok_or_else(Self::not_found)?;
        stored.description = Some(update.description.clone());
        stored.sketch_data.clone_from(&update.sketch_data);
        stored.design_narrative = Some(update.design_narrative.clone());
        stored.compliance_notes = Some(update.compliance_notes.clone());
        stored.design_concept_url.clone_from(&update.design_concept_url);
        Ok(())
    }

    async fn delete_project(&self, ctx: &RequestContext, id: ProjectId) -> Result<(), ApiError> {
        self.authorize("delete_project", ctx)?;
        let mut projects = self.projects.borrow_mut();
        let before = projects.len();
        projects.retain(|p| p.id != id);
        if projects.len() == before { Err(Self::not_found()) } else { Ok(()) }
    }

    async fn save_sketch(&self, ctx: &RequestContext, id: ProjectId, upload: &SketchUpload) -> Result<(), ApiError> {
        self.authorize("save_sketch", ctx)?;
        self.sketches.borrow_mut().push((id, upload.sketch.clone()));
        Ok(())
    }

    async fn generate_design(&self, ctx: &RequestContext, form: &GenerationForm) -> Result<DesignResult, ApiError> {
        self.authorize("generate_design", ctx)?;
        self.forms.borrow_mut().push(form.clone());
        Ok(self.result.borrow().clone())
    }
}
