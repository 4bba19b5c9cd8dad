//! Shared core for the architectural design assistant clients.
//!
//! This crate owns everything the browser client and the CLI agree on: the
//! wire types exchanged with the design backend, the error taxonomy and its
//! user-facing notices, endpoint paths, and the three stateful pieces of the
//! client (session, project directory, design workflow). It performs no I/O
//! itself; callers plug in a [`backend::Backend`] and a
//! [`credential::CredentialStore`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | Wire DTOs (`Identity`, `Project`, `DesignResult`, request bodies) |
//! | [`error`] | `ApiError`, `ValidationError`, `ClientError` and notice rendering |
//! | [`endpoints`] | Backend paths and URL joining |
//! | [`backend`] | The async `Backend` seam and the per-call `RequestContext` |
//! | [`credential`] | Bearer credential newtype and durable storage seam |
//! | [`session`] | Restore / login / register / logout / invalidate |
//! | [`directory`] | Project list with a single selection, brief and last result |
//! | [`workflow`] | Generation state machine, snapshot capture, persist + reload |
//! | [`workspace`] | Facade that sequences the above for single-owner callers |

pub mod backend;
pub mod credential;
pub mod directory;
pub mod endpoints;
pub mod error;
pub mod session;
pub mod types;
pub mod workflow;
pub mod workspace;

#[cfg(test)]
#[path = "scripted_test.rs"]
mod scripted;

pub use backend::{Backend, RequestContext};
pub use credential::{Credential, CredentialStore, MemoryCredentials};
pub use directory::ProjectDirectory;
pub use error::{ApiError, ClientError, Operation, ValidationError};
pub use session::Session;
pub use types::{DesignResult, Identity, Project, ProjectId};
pub use workflow::{DesignWorkflow, Phase, SketchError, SketchSource};
pub use workspace::Workspace;

/// Backend address used when nothing else is configured.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";
