//! Single-owner facade over session, directory and workflow.
//!
//! The CLI and the tests drive the client through this type. Every
//! authenticated operation passes its error through one place that turns a
//! `401` into a full sign-out, so no caller can forget to.

#[cfg(test)]
#[path = "workspace_test.rs"]
mod workspace_test;

use crate::backend::Backend;
use crate::credential::CredentialStore;
use crate::directory::{self, ProjectDirectory};
use crate::error::ClientError;
use crate::session::{self, Session};
use crate::types::{DesignResult, Project, ProjectId};
use crate::workflow::{self, DesignWorkflow, SketchSource};

pub struct Workspace<B, S> {
    backend: B,
    store: S,
    session: Session,
    directory: ProjectDirectory,
    workflow: DesignWorkflow,
}

impl<B: Backend, S: CredentialStore> Workspace<B, S> {
    #[must_use]
    pub fn new(backend: B, store: S) -> Self {
        Self {
            backend,
            store,
            session: Session::Anonymous,
            directory: ProjectDirectory::default(),
            workflow: DesignWorkflow::default(),
        }
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn directory(&self) -> &ProjectDirectory {
        &self.directory
    }

    #[must_use]
    pub fn workflow(&self) -> &DesignWorkflow {
        &self.workflow
    }

    /// Resume from the stored credential, if any.
    pub async fn check_existing_session(&mut self) -> &Session {
        self.session = session::restore(&self.backend, &self.store).await;
        &self.session
    }

    /// # Errors
    ///
    /// See [`session::login`].
    pub async fn login(&mut self, email: &str, password: &str) -> Result<(), ClientError> {
        self.session = session::login(&self.backend, &self.store, email, password).await?;
        Ok(())
    }

    /// # Errors
    ///
    /// See [`session::register`].
    pub async fn register(&mut self, email: &str, password: &str, name: &str) -> Result<(), ClientError> {
        self.session = session::register(&self.backend, &self.store, email, password, name).await?;
        Ok(())
    }

    pub fn logout(&mut self) {
        self.session = session::logout(&self.store);
        self.reset_local_state();
    }

    /// Reload the project list.
    ///
    /// # Errors
    ///
    /// Returns the backend failure; a `401` also ends the session.
    pub async fn load_all(&mut self) -> Result<(), ClientError> {
        let ctx = self.session.context();
        match directory::fetch_all(&self.backend, &ctx).await {
            Ok(projects) => {
                self.directory.replace_all(projects);
                Ok(())
            }
            Err(err) => Err(self.absorb(err)),
        }
    }

    /// Create a project and select it.
    ///
    /// # Errors
    ///
    /// A blank title is rejected before any request.
    pub async fn create_project(&mut self, title: &str, description: &str) -> Result<ProjectId, ClientError> {
        let ctx = self.session.context();
        match directory::create(&self.backend, &ctx, title, description).await {
            Ok(project) => {
                let id = project.id;
                self.directory.insert_created(project);
                Ok(id)
            }
            Err(err) => Err(self.absorb(err)),
        }
    }

    /// Fetch one project without touching the local list.
    ///
    /// # Errors
    ///
    /// Returns the backend failure.
    pub async fn fetch_project(&mut self, id: ProjectId) -> Result<Project, ClientError> {
        let ctx = self.session.context();
        match self.backend.fetch_project(&ctx, id).await {
            Ok(project) => Ok(project),
            Err(err) => Err(self.absorb(err.into())),
        }
    }

    /// Delete a project on the backend, then locally.
    ///
    /// # Errors
    ///
    /// Returns the backend failure; the local list is untouched then.
    pub async fn delete_project(&mut self, id: ProjectId) -> Result<(), ClientError> {
        let ctx = self.session.context();
        match directory::delete(&self.backend, &ctx, id).await {
            Ok(()) => {
                self.directory.forget(id);
                Ok(())
            }
            Err(err) => Err(self.absorb(err)),
        }
    }

    pub fn select(&mut self, id: ProjectId) -> bool {
        self.directory.select(id)
    }

    pub fn set_brief(&mut self, brief: impl Into<String>) {
        self.directory.set_brief(brief);
    }

    /// Run one generation round trip for the selected project.
    ///
    /// The result is shown as soon as it arrives. The project write and
    /// reload follow; if either fails the error is returned but the result
    /// stays displayed. A `401` from generation ends the session without
    /// writing anything.
    ///
    /// # Errors
    ///
    /// Validation failures, the generation failure, or the persist failure.
    pub async fn generate_design(&mut self, sketch: Option<&dyn SketchSource>) -> Result<DesignResult, ClientError> {
        let submission = self.workflow.begin(&self.directory, sketch)?;
        let ctx = self.session.context();

        let result = match workflow::submit(&self.backend, &ctx, &submission).await {
            Ok(result) => result,
            Err(err) => {
                self.workflow.finish();
                return Err(self.absorb(err));
            }
        };
        self.directory.show_result(submission.project_id, result.clone());

        self.workflow.persisting();
        let persisted = workflow::persist(&self.backend, &ctx, &submission, &result).await;
        self.workflow.finish();
        match persisted {
            Ok(projects) => {
                self.directory.replace_all(projects);
                Ok(result)
            }
            Err(err) => Err(self.absorb(err)),
        }
    }

    /// Save the sketch to the selected project.
    ///
    /// # Errors
    ///
    /// Validation failures or the backend failure.
    pub async fn save_sketch(&mut self, sketch: Option<&dyn SketchSource>) -> Result<(), ClientError> {
        let (project_id, snapshot) = workflow::prepare_sketch(&self.directory, sketch)?;
        let ctx = self.session.context();
        match workflow::save_sketch(&self.backend, &ctx, project_id, snapshot).await {
            Ok(()) => Ok(()),
            Err(err) => Err(self.absorb(err)),
        }
    }

    fn absorb(&mut self, err: ClientError) -> ClientError {
        if err.is_unauthorized() {
            session::invalidate(&self.store, &mut self.session);
            self.reset_local_state();
        }
        err
    }

    fn reset_local_state(&mut self) {
        self.directory = ProjectDirectory::default();
        self.workflow = DesignWorkflow::default();
    }
}
