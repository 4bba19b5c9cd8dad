//! Project directory: the user's projects with at most one selected.
//!
//! DESIGN
//! ======
//! Selection is held by id, so a reload that replaces the list keeps pointing
//! at the fresh copy of the selected project. The brief text and the
//! transient "last result" live here too because both follow the selection:
//! selecting a project resets the brief to its description and redisplays
//! its stored design (or clears the result when it has none).

#[cfg(test)]
#[path = "directory_test.rs"]
mod directory_test;

use crate::backend::{Backend, RequestContext};
use crate::error::{ClientError, ValidationError};
use crate::types::{DesignResult, NewProject, Project, ProjectId};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectDirectory {
    projects: Vec<Project>,
    selected: Option<ProjectId>,
    brief: String,
    last_result: Option<DesignResult>,
}

impl ProjectDirectory {
    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    #[must_use]
    pub fn selected_id(&self) -> Option<ProjectId> {
        self.selected
    }

    #[must_use]
    pub fn selected(&self) -> Option<&Project> {
        let id = self.selected?;
        self.projects.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn brief(&self) -> &str {
        &self.brief
    }

    pub fn set_brief(&mut self, brief: impl Into<String>) {
        self.brief = brief.into();
    }

    #[must_use]
    pub fn last_result(&self) -> Option<&DesignResult> {
        self.last_result.as_ref()
    }

    /// Show a freshly generated result if `project_id` is still selected.
    pub fn show_result(&mut self, project_id: ProjectId, result: DesignResult) -> bool {
        if self.selected != Some(project_id) {
            return false;
        }
        self.last_result = Some(result);
        true
    }

    /// Replace the list with the backend's copy.
    ///
    /// Keeps the current selection when it still exists; otherwise selects the
    /// first project (or nothing for an empty list).
    pub fn replace_all(&mut self, projects: Vec<Project>) {
        self.projects = projects;
        let still_present = self.selected.is_some_and(|id| self.projects.iter().any(|p| p.id == id));
        if still_present {
            return;
        }
        match self.projects.first().map(|p| p.id) {
            Some(first) => {
                self.select(first);
            }
            None => self.clear_selection(),
        }
    }

    /// Append a newly created project and select it.
    pub fn insert_created(&mut self, project: Project) {
        let id = project.id;
        self.projects.retain(|p| p.id != id);
        self.projects.push(project);
        self.select(id);
    }

    /// Select `id`. Unknown ids leave the directory untouched.
    pub fn select(&mut self, id: ProjectId) -> bool {
        let Some(project) = self.projects.iter().find(|p| p.id == id) else {
            return false;
        };
        self.brief = project.brief().to_owned();
        self.last_result = project.stored_result();
        self.selected = Some(id);
        true
    }

    /// Drop a project locally; a removed selection moves to the first project.
    pub fn forget(&mut self, id: ProjectId) -> bool {
        let before = self.projects.len();
        self.projects.retain(|p| p.id != id);
        if self.projects.len() == before {
            return false;
        }
        if self.selected == Some(id) {
            self.selected = None;
            let projects = std::mem::take(&mut self.projects);
            self.replace_all(projects);
        }
        true
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.brief.clear();
        self.last_result = None;
    }
}

/// Check a new project title; returns it trimmed.
///
/// # Errors
///
/// [`ValidationError::EmptyTitle`] for empty or whitespace-only titles.
pub fn validate_title(title: &str) -> Result<&str, ValidationError> {
    let title = title.trim();
    if title.is_empty() { Err(ValidationError::EmptyTitle) } else { Ok(title) }
}

/// Fetch the caller's projects.
///
/// # Errors
///
/// Returns the backend failure.
pub async fn fetch_all<B: Backend + ?Sized>(backend: &B, ctx: &RequestContext) -> Result<Vec<Project>, ClientError> {
    let projects = backend.list_projects(ctx).await?;
    tracing::debug!(count = projects.len(), "projects loaded");
    Ok(projects)
}

/// Validate and create a project. A blank title never reaches the backend.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyTitle`] or the backend failure.
pub async fn create<B: Backend + ?Sized>(
    backend: &B,
    ctx: &RequestContext,
    title: &str,
    description: &str,
) -> Result<Project, ClientError> {
    let title = validate_title(title)?;
    let request = NewProject { title: title.to_owned(), description: description.to_owned() };
    let project = backend.create_project(ctx, &request).await?;
    tracing::debug!(project_id = project.id, "project created");
    Ok(project)
}

/// Delete a project on the backend.
///
/// # Errors
///
/// Returns the backend failure.
pub async fn delete<B: Backend + ?Sized>(backend: &B, ctx: &RequestContext, id: ProjectId) -> Result<(), ClientError> {
    backend.delete_project(ctx, id).await?;
    tracing::debug!(project_id = id, "project deleted");
    Ok(())
}
