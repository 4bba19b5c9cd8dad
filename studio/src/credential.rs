//! Bearer credential and its durable storage seam.
//!
//! The browser keeps the token in `localStorage`, the CLI in a file; both sit
//! behind [`CredentialStore`] under the same fixed key.

#[cfg(test)]
#[path = "credential_test.rs"]
mod credential_test;

use std::cell::RefCell;
use std::fmt;

use crate::error::StorageError;

/// Storage key under which the bearer token is persisted.
pub const TOKEN_KEY: &str = "token";

/// Opaque bearer token. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a raw token; blank input yields `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let token = raw.trim();
        if token.is_empty() { None } else { Some(Self(token.to_owned())) }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value of the `Authorization` header.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

/// Durable slot holding at most one credential.
pub trait CredentialStore {
    /// Read the persisted credential, if any.
    fn load(&self) -> Option<Credential>;

    /// Persist `credential`, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the slot cannot be written.
    fn save(&self, credential: &Credential) -> Result<(), StorageError>;

    /// Remove the persisted credential. Missing credentials are not an error.
    fn clear(&self);
}

/// In-process store; nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryCredentials {
    slot: RefCell<Option<Credential>>,
}

impl MemoryCredentials {
    /// A store that already holds `credential`.
    #[must_use]
    pub fn with(credential: Credential) -> Self {
        Self { slot: RefCell::new(Some(credential)) }
    }
}

impl CredentialStore for MemoryCredentials {
    fn load(&self) -> Option<Credential> {
        self.slot.borrow().clone()
    }

    fn save(&self, credential: &Credential) -> Result<(), StorageError> {
        *self.slot.borrow_mut() = Some(credential.clone());
        Ok(())
    }

    fn clear(&self) {
        self.slot.borrow_mut().take();
    }
}
