//! Session store: who is signed in and with which credential.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session gates everything else: without one the clients only show the
//! login/register forms. Every operation is a single request whose outcome
//! fully determines the next session; there is no refresh and no retry.
//!
//! `Session` is an enum so identity and credential are always set and cleared
//! together.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::backend::{Backend, RequestContext};
use crate::credential::{Credential, CredentialStore};
use crate::error::{ApiError, ClientError, ValidationError};
use crate::types::{AuthGrant, Identity, LoginRequest, RegisterRequest};

/// Current authentication state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Anonymous,
    SignedIn { identity: Identity, credential: Credential },
}

impl Session {
    #[must_use]
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Anonymous => None,
            Self::SignedIn { identity, .. } => Some(identity),
        }
    }

    #[must_use]
    pub fn credential(&self) -> Option<&Credential> {
        match self {
            Self::Anonymous => None,
            Self::SignedIn { credential, .. } => Some(credential),
        }
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        matches!(self, Self::SignedIn { .. })
    }

    /// Request context for the next authenticated call.
    #[must_use]
    pub fn context(&self) -> RequestContext {
        self.credential().cloned().map_or_else(RequestContext::anonymous, RequestContext::bearer)
    }
}

/// Resume a session from the persisted credential.
///
/// Any failure (rejected token, unreachable backend, bad reply) clears the
/// persisted credential and yields [`Session::Anonymous`].
pub async fn restore<B, S>(backend: &B, store: &S) -> Session
where
    B: Backend + ?Sized,
    S: CredentialStore + ?Sized,
{
    let Some(credential) = store.load() else {
        return Session::Anonymous;
    };
    match backend.current_identity(&RequestContext::bearer(credential.clone())).await {
        Ok(identity) => {
            tracing::debug!(user_id = identity.id, "session restored");
            Session::SignedIn { identity, credential }
        }
        Err(err) => {
            if matches!(err, ApiError::Unreachable(_)) {
                tracing::warn!(error = %err, "backend not reachable while restoring session");
            } else {
                tracing::info!(error = %err, "stored credential rejected");
            }
            store.clear();
            Session::Anonymous
        }
    }
}

/// Sign in with email and password.
///
/// # Errors
///
/// Returns a validation error for blank input, the backend failure, or a
/// storage failure when the credential cannot be persisted.
pub async fn login<B, S>(backend: &B, store: &S, email: &str, password: &str) -> Result<Session, ClientError>
where
    B: Backend + ?Sized,
    S: CredentialStore + ?Sized,
{
    let email = validate_credentials(email, password)?;
    let grant = backend
        .login(&LoginRequest { email: email.to_owned(), password: password.to_owned() })
        .await?;
    let name = grant.name.clone().unwrap_or_default();
    establish(store, grant, name)
}

/// Create an account and sign in.
///
/// The display name is the backend's name, else the requested one, else the
/// local part of the email.
///
/// # Errors
///
/// Same as [`login`].
pub async fn register<B, S>(
    backend: &B,
    store: &S,
    email: &str,
    password: &str,
    name: &str,
) -> Result<Session, ClientError>
where
    B: Backend + ?Sized,
    S: CredentialStore + ?Sized,
{
    let email = validate_credentials(email, password)?;
    let requested = name.trim();
    let grant = backend
        .register(&RegisterRequest {
            email: email.to_owned(),
            password: password.to_owned(),
            name: requested.to_owned(),
        })
        .await?;
    let name = display_name(&grant, requested);
    establish(store, grant, name)
}

/// Sign out locally. No backend call is made.
pub fn logout<S: CredentialStore + ?Sized>(store: &S) -> Session {
    store.clear();
    Session::Anonymous
}

/// End the session after the backend rejected its credential.
pub fn invalidate<S: CredentialStore + ?Sized>(store: &S, session: &mut Session) {
    if session.is_signed_in() {
        tracing::info!("credential rejected by backend, signing out");
    }
    store.clear();
    *session = Session::Anonymous;
}

/// Text before the `@` of an email address.
#[must_use]
pub fn email_local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

fn validate_credentials<'a>(email: &'a str, password: &str) -> Result<&'a str, ValidationError> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingCredentials);
    }
    Ok(email)
}

fn display_name(grant: &AuthGrant, requested: &str) -> String {
    match grant.name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => name.to_owned(),
        _ if !requested.is_empty() => requested.to_owned(),
        _ => email_local_part(&grant.email).to_owned(),
    }
}

fn establish<S: CredentialStore + ?Sized>(store: &S, grant: AuthGrant, name: String) -> Result<Session, ClientError> {
    let credential =
        Credential::parse(&grant.access_token).ok_or_else(|| ApiError::Decode("empty access token".to_owned()))?;
    store.save(&credential)?;
    let identity = Identity { id: grant.user_id, email: grant.email, name };
    tracing::debug!(user_id = identity.id, "signed in");
    Ok(Session::SignedIn { identity, credential })
}
