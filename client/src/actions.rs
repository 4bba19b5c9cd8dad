//! User actions over the shared signals.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components call these instead of talking to the backend themselves. Each
//! action reads what it needs from the signals untracked, spawns one local
//! task for its request, and writes the outcome back. Rules (validation,
//! selection, result folding) come from `studio`; this module only moves
//! values between signals and requests.
//!
//! ERROR HANDLING
//! ==============
//! Every failure ends in [`Handles::report`]: a `401` on an authenticated
//! call clears the stored token and every piece of signed-in state (the
//! route guard then sends the user to `/login`), and the notice banner shows
//! the message for the failed operation.
//!
//! Requests are never cancelled, but a reply is only applied while the
//! session that sent it is still current; after a logout or a new login it
//! is dropped.

use leptos::prelude::*;
use leptos::task::spawn_local;
use studio::credential::Credential;
use studio::session;
use studio::workflow::{self, SKETCH_SAVED};
use studio::{ClientError, DesignWorkflow, Operation, ProjectDirectory, ProjectId, RequestContext, SketchSource};

use crate::net::api::ApiBackend;
use crate::state::notice::Notice;
use crate::state::session::SessionState;
use crate::state::sketch::SketchState;
use crate::util::config::ClientConfig;
use crate::util::storage::LocalStorageCredentials;

/// Copyable bundle of the app-wide signals.
#[derive(Clone, Copy)]
pub struct Handles {
    pub config: StoredValue<ClientConfig>,
    pub session: RwSignal<SessionState>,
    pub directory: RwSignal<ProjectDirectory>,
    pub workflow: RwSignal<DesignWorkflow>,
    pub sketch: RwSignal<SketchState>,
    pub notice: RwSignal<Option<Notice>>,
}

impl Handles {
    /// Collect the contexts provided by `App`.
    pub fn from_context() -> Self {
        Self {
            config: StoredValue::new(expect_context::<ClientConfig>()),
            session: expect_context::<RwSignal<SessionState>>(),
            directory: expect_context::<RwSignal<ProjectDirectory>>(),
            workflow: expect_context::<RwSignal<DesignWorkflow>>(),
            sketch: expect_context::<RwSignal<SketchState>>(),
            notice: expect_context::<RwSignal<Option<Notice>>>(),
        }
    }

    pub fn api_base(self) -> String {
        self.config.with_value(|config| config.api_base.clone())
    }

    fn backend(self) -> ApiBackend {
        ApiBackend::new(self.api_base())
    }

    fn context(self) -> RequestContext {
        self.session.with_untracked(|state| state.session.context())
    }

    /// Show the notice for a failed `operation`; a `401` also signs out.
    pub fn report(self, err: &ClientError, operation: Operation) {
        leptos::logging::warn!("{operation:?} failed: {err}");
        if err.is_unauthorized() {
            self.session.update(|state| {
                session::invalidate(&LocalStorageCredentials, &mut state.session);
                state.loading = false;
            });
            self.reset_workspace();
        }
        self.notice.set(Some(Notice::from_error(err, operation, &self.api_base())));
    }

    /// Whether a reply to a request made with `started` may still be applied.
    fn still_current(self, started: Option<&Credential>) -> bool {
        let current = self.session.with_untracked(|state| state.is_current(started));
        if !current {
            leptos::logging::warn!("dropping reply from an ended session");
        }
        current
    }

    fn reset_workspace(self) {
        self.directory.set(ProjectDirectory::default());
        self.workflow.set(DesignWorkflow::default());
        self.sketch.update(|sketch| sketch.clear());
    }

    pub fn dismiss_notice(self) {
        self.notice.set(None);
    }

    // =============================================================
    // session
    // =============================================================

    /// Resume from the stored token, then load projects when signed in.
    pub fn restore_session(self) {
        spawn_local(async move {
            let restored = session::restore(&self.backend(), &LocalStorageCredentials).await;
            let signed_in = restored.is_signed_in();
            self.session.set(SessionState::settled(restored));
            if signed_in {
                self.load_projects();
            }
        });
    }

    pub fn login(self, email: String, password: String) {
        self.begin_auth();
        spawn_local(async move {
            let outcome = session::login(&self.backend(), &LocalStorageCredentials, &email, &password).await;
            self.finish_auth(outcome, Operation::Login);
        });
    }

    pub fn register(self, email: String, password: String, name: String) {
        self.begin_auth();
        spawn_local(async move {
            let outcome =
                session::register(&self.backend(), &LocalStorageCredentials, &email, &password, &name).await;
            self.finish_auth(outcome, Operation::Register);
        });
    }

    fn begin_auth(self) {
        self.notice.set(None);
        self.session.update(|state| state.submitting = true);
    }

    fn finish_auth(self, outcome: Result<studio::Session, ClientError>, operation: Operation) {
        match outcome {
            Ok(signed_in) => {
                self.session.set(SessionState::settled(signed_in));
                self.load_projects();
            }
            Err(err) => {
                self.session.update(|state| state.submitting = false);
                self.report(&err, operation);
            }
        }
    }

    /// Sign out locally; no request is made.
    pub fn logout(self) {
        self.session.set(SessionState::settled(session::logout(&LocalStorageCredentials)));
        self.reset_workspace();
        self.notice.set(None);
    }

    // =============================================================
    // projects
    // =============================================================

    pub fn load_projects(self) {
        let ctx = self.context();
        spawn_local(async move {
            let outcome = studio::directory::fetch_all(&self.backend(), &ctx).await;
            if !self.still_current(ctx.credential()) {
                return;
            }
            match outcome {
                Ok(projects) => self.directory.update(|d| d.replace_all(projects)),
                Err(err) => self.report(&err, Operation::LoadProjects),
            }
        });
    }

    /// Create a project from the form fields; they are cleared on success.
    pub fn create_project(self, title: RwSignal<String>, description: RwSignal<String>) {
        let (title_text, description_text) = (title.get_untracked(), description.get_untracked());
        let ctx = self.context();
        spawn_local(async move {
            let outcome = studio::directory::create(&self.backend(), &ctx, &title_text, &description_text).await;
            if !self.still_current(ctx.credential()) {
                return;
            }
            match outcome {
                Ok(project) => {
                    self.directory.update(|d| d.insert_created(project));
                    title.try_set(String::new());
                    description.try_set(String::new());
                }
                Err(err) => self.report(&err, Operation::CreateProject),
            }
        });
    }

    pub fn select_project(self, id: ProjectId) {
        self.directory.update(|d| {
            d.select(id);
        });
    }

    pub fn delete_project(self, id: ProjectId) {
        let ctx = self.context();
        spawn_local(async move {
            let outcome = studio::directory::delete(&self.backend(), &ctx, id).await;
            if !self.still_current(ctx.credential()) {
                return;
            }
            match outcome {
                Ok(()) => self.directory.update(|d| {
                    d.forget(id);
                }),
                Err(err) => self.report(&err, Operation::DeleteProject),
            }
        });
    }

    pub fn set_brief(self, brief: String) {
        self.directory.update(|d| d.set_brief(brief));
    }

    // =============================================================
    // design workflow
    // =============================================================

    /// One generation round trip for the selected project.
    ///
    /// The result is shown as soon as it arrives; persisting it and reloading
    /// the list follow. A `401` from generation signs out without persisting.
    pub fn generate_design(self) {
        let directory = self.directory.get_untracked();
        let sketch = self.sketch.get_untracked();
        let mut state = self.workflow.get_untracked();
        let begun = state.begin(&directory, Some(&sketch));
        self.workflow.set(state);
        let submission = match begun {
            Ok(submission) => submission,
            Err(err) => {
                self.report(&err.into(), Operation::GenerateDesign);
                return;
            }
        };
        self.notice.set(None);

        let ctx = self.context();
        spawn_local(async move {
            let backend = self.backend();
            let submitted = workflow::submit(&backend, &ctx, &submission).await;
            if !self.still_current(ctx.credential()) {
                return;
            }
            let result = match submitted {
                Ok(result) => result,
                Err(err) => {
                    self.workflow.update(DesignWorkflow::finish);
                    self.report(&err, Operation::GenerateDesign);
                    return;
                }
            };
            self.directory.update(|d| {
                d.show_result(submission.project_id, result.clone());
            });

            self.workflow.update(DesignWorkflow::persisting);
            let persisted = workflow::persist(&backend, &ctx, &submission, &result).await;
            if !self.still_current(ctx.credential()) {
                return;
            }
            self.workflow.update(DesignWorkflow::finish);
            match persisted {
                Ok(projects) => self.directory.update(|d| d.replace_all(projects)),
                Err(err) => self.report(&err, Operation::GenerateDesign),
            }
        });
    }

    /// Store the current drawing on the selected project.
    pub fn save_sketch(self) {
        let directory = self.directory.get_untracked();
        let sketch = self.sketch.get_untracked();
        let (project_id, snapshot) = match workflow::prepare_sketch(&directory, Some(&sketch)) {
            Ok(prepared) => prepared,
            Err(err) => {
                self.report(&err.into(), Operation::SaveSketch);
                return;
            }
        };

        let ctx = self.context();
        spawn_local(async move {
            let outcome = workflow::save_sketch(&self.backend(), &ctx, project_id, snapshot).await;
            if !self.still_current(ctx.credential()) {
                return;
            }
            match outcome {
                Ok(()) => self.notice.set(Some(Notice::success(SKETCH_SAVED))),
                Err(err) => self.report(&err, Operation::SaveSketch),
            }
        });
    }

    pub fn clear_sketch(self) {
        self.sketch.update(|sketch| sketch.clear());
    }
}
