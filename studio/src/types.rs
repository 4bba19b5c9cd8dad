//! Wire DTOs for the design backend.
//!
//! DESIGN
//! ======
//! Response types tolerate missing optional fields and ignore unknown ones so
//! the client keeps working when the backend grows columns (`owner_id`,
//! `created_at`, ...). Request types serialize exactly the fields each
//! endpoint reads.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Backend user identifier.
pub type UserId = i64;

/// Backend project identifier.
pub type ProjectId = i64;

/// The authenticated user as held in memory for the session lifetime.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: UserId,
    pub email: String,
    /// Display name; empty when the backend has none.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
}

impl Identity {
    /// Name to greet the user with: display name, else email.
    #[must_use]
    pub fn greeting_name(&self) -> &str {
        if self.name.is_empty() { &self.email } else { &self.name }
    }
}

/// Reply of the login and register endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthGrant {
    pub access_token: String,
    pub user_id: UserId,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Body of `POST /auth/login/json`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// A project as listed by `GET /projects/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Last saved sketch snapshot (opaque JSON string).
    #[serde(default)]
    pub sketch_data: Option<String>,
    #[serde(default)]
    pub design_narrative: Option<String>,
    #[serde(default)]
    pub compliance_notes: Option<String>,
    #[serde(default)]
    pub design_concept_url: Option<String>,
}

impl Project {
    /// The stored description, or `""`.
    #[must_use]
    pub fn brief(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// The design result folded into this project, if a narrative is stored.
    #[must_use]
    pub fn stored_result(&self) -> Option<DesignResult> {
        let narrative = self.design_narrative.as_deref().filter(|n| !n.is_empty())?;
        Some(DesignResult {
            design_narrative: narrative.to_owned(),
            compliance_notes: self.compliance_notes.clone().unwrap_or_default(),
            design_concept_url: self.design_concept_url.clone(),
            error: None,
        })
    }
}

/// Body of `POST /projects/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewProject {
    pub title: String,
    pub description: String,
}

/// Body of `PUT /projects/{id}` written after a successful generation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProjectUpdate {
    pub description: String,
    pub sketch_data: Option<String>,
    pub design_narrative: String,
    pub compliance_notes: String,
    pub design_concept_url: Option<String>,
}

/// Body of `POST /projects/{id}/sketch`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SketchUpload {
    pub sketch: String,
}

/// Reply of the generation endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignResult {
    #[serde(default)]
    pub design_narrative: String,
    #[serde(default)]
    pub compliance_notes: String,
    #[serde(default)]
    pub design_concept_url: Option<String>,
    /// Set by the backend when it fell back to a canned result.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Multipart fields of `POST /ai/generate_design/form`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationForm {
    pub project_id: ProjectId,
    pub text_brief: String,
    pub sketch_data: Option<String>,
}

impl GenerationForm {
    /// Form fields in submission order; `sketch_data` only when present.
    #[must_use]
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("project_id", self.project_id.to_string()),
            ("text_brief", self.text_brief.clone()),
        ];
        if let Some(sketch) = &self.sketch_data {
            fields.push(("sketch_data", sketch.clone()));
        }
        fields
    }
}

/// Reply of `GET /health`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Health {
    pub status: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
