//! Brief/design workflow: one generation round trip per submission.
//!
//! SYSTEM CONTEXT
//! ==============
//! A submission moves through `Idle -> Validating -> Submitting ->
//! Persisting -> Idle`. Validation failures return to `Idle` without any
//! request. The phase doubles as the busy flag the UI disables its buttons
//! from; only generation is guarded this way.
//!
//! DESIGN
//! ======
//! The state machine and the requests are split. [`DesignWorkflow::begin`] is
//! synchronous and produces an owned [`Submission`]; the async steps
//! ([`submit`], [`persist`]) take that submission and never borrow client
//! state across an await. The browser composes them over signals, the
//! [`crate::Workspace`] facade over plain fields.
//!
//! The sketch is pulled, not pushed: the workflow asks a [`SketchSource`] for
//! a snapshot once validation has passed and never inspects drawing state.

#[cfg(test)]
#[path = "workflow_test.rs"]
mod workflow_test;

use crate::backend::{Backend, RequestContext};
use crate::directory::ProjectDirectory;
use crate::error::{ClientError, ValidationError};
use crate::types::{DesignResult, GenerationForm, Project, ProjectId, ProjectUpdate, SketchUpload};

/// Notice shown after a sketch was stored.
pub const SKETCH_SAVED: &str = "Sketch saved successfully!";

/// Where the current submission is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Persisting,
}

/// Why a sketch snapshot could not be read.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SketchError {
    #[error("sketch surface is not mounted")]
    NotMounted,
    #[error("sketch could not be read: {0}")]
    Unreadable(String),
}

/// A drawing surface the workflow can pull a snapshot from.
pub trait SketchSource {
    /// Serialized drawing; `Ok(None)` when nothing has been drawn.
    ///
    /// # Errors
    ///
    /// Returns [`SketchError`] when the surface cannot be read.
    fn snapshot(&self) -> Result<Option<String>, SketchError>;

    /// Drop every stroke.
    fn clear(&mut self);
}

/// Everything one generation request needs, captured at validation time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub project_id: ProjectId,
    pub brief: String,
    pub snapshot: Option<String>,
}

impl Submission {
    #[must_use]
    pub fn form(&self) -> GenerationForm {
        GenerationForm {
            project_id: self.project_id,
            text_brief: self.brief.clone(),
            sketch_data: self.snapshot.clone(),
        }
    }

    /// The project write that folds `result` into the submitted project.
    #[must_use]
    pub fn update(&self, result: &DesignResult) -> ProjectUpdate {
        ProjectUpdate {
            description: self.brief.clone(),
            sketch_data: self.snapshot.clone(),
            design_narrative: result.design_narrative.clone(),
            compliance_notes: result.compliance_notes.clone(),
            design_concept_url: result.design_concept_url.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DesignWorkflow {
    phase: Phase,
}

impl DesignWorkflow {
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Validate against the directory and capture the sketch.
    ///
    /// On success the workflow is `Submitting` and stays busy until
    /// [`DesignWorkflow::finish`].
    ///
    /// # Errors
    ///
    /// [`ValidationError::Busy`] while a submission is in flight, then
    /// [`ValidationError::NoProjectSelected`] and [`ValidationError::EmptyBrief`]
    /// in that order. A rejected attempt leaves the workflow idle.
    pub fn begin(
        &mut self,
        directory: &ProjectDirectory,
        sketch: Option<&dyn SketchSource>,
    ) -> Result<Submission, ValidationError> {
        if self.is_busy() {
            return Err(ValidationError::Busy);
        }
        self.phase = Phase::Validating;
        let project_id = match validate(directory) {
            Ok(id) => id,
            Err(err) => {
                self.phase = Phase::Idle;
                return Err(err);
            }
        };
        let snapshot = capture_snapshot(sketch);
        self.phase = Phase::Submitting;
        Ok(Submission { project_id, brief: directory.brief().to_owned(), snapshot })
    }

    /// The generation reply arrived; the project write is next.
    pub fn persisting(&mut self) {
        self.phase = Phase::Persisting;
    }

    /// Back to idle, whatever the outcome.
    pub fn finish(&mut self) {
        self.phase = Phase::Idle;
    }
}

fn validate(directory: &ProjectDirectory) -> Result<ProjectId, ValidationError> {
    let project_id = directory.selected_id().ok_or(ValidationError::NoProjectSelected)?;
    if directory.brief().trim().is_empty() {
        return Err(ValidationError::EmptyBrief);
    }
    Ok(project_id)
}

/// Read the sketch, logging and discarding failures.
#[must_use]
pub fn capture_snapshot(sketch: Option<&dyn SketchSource>) -> Option<String> {
    let source = sketch?;
    match source.snapshot() {
        Ok(snapshot) => snapshot,
        Err(err) => {
            tracing::warn!(error = %err, "continuing without sketch");
            None
        }
    }
}

/// Send the multipart generation request.
///
/// # Errors
///
/// Returns the backend failure.
pub async fn submit<B: Backend + ?Sized>(
    backend: &B,
    ctx: &RequestContext,
    submission: &Submission,
) -> Result<DesignResult, ClientError> {
    tracing::debug!(
        project_id = submission.project_id,
        with_sketch = submission.snapshot.is_some(),
        "generating design"
    );
    let result = backend.generate_design(ctx, &submission.form()).await?;
    if let Some(note) = &result.error {
        tracing::warn!(project_id = submission.project_id, note = %note, "backend returned a fallback design");
    }
    Ok(result)
}

/// Write `result` onto the submitted project, then reload every project.
///
/// # Errors
///
/// Returns the failure of either request; the update reply is discarded.
pub async fn persist<B: Backend + ?Sized>(
    backend: &B,
    ctx: &RequestContext,
    submission: &Submission,
    result: &DesignResult,
) -> Result<Vec<Project>, ClientError> {
    backend
        .update_project(ctx, submission.project_id, &submission.update(result))
        .await?;
    let projects = backend.list_projects(ctx).await?;
    tracing::debug!(project_id = submission.project_id, "design persisted");
    Ok(projects)
}

/// Check that a sketch can be saved to the selected project.
///
/// # Errors
///
/// [`ValidationError::NoProjectSelected`], or [`ValidationError::EmptySketch`]
/// when nothing is drawn or the surface cannot be read.
pub fn prepare_sketch(
    directory: &ProjectDirectory,
    sketch: Option<&dyn SketchSource>,
) -> Result<(ProjectId, String), ValidationError> {
    let project_id = directory.selected_id().ok_or(ValidationError::NoProjectSelected)?;
    let snapshot = capture_snapshot(sketch).ok_or(ValidationError::EmptySketch)?;
    Ok((project_id, snapshot))
}

/// Store a sketch on its project. Independent of the generation workflow.
///
/// # Errors
///
/// Returns the backend failure.
pub async fn save_sketch<B: Backend + ?Sized>(
    backend: &B,
    ctx: &RequestContext,
    project_id: ProjectId,
    sketch: String,
) -> Result<(), ClientError> {
    backend.save_sketch(ctx, project_id, &SketchUpload { sketch }).await?;
    tracing::debug!(project_id, "sketch saved");
    Ok(())
}
