//! Token file credential store.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use studio::credential::{Credential, CredentialStore, TOKEN_KEY};
use studio::error::StorageError;

/// Keeps the bearer token in a single file.
#[derive(Clone, Debug)]
pub struct FileCredentials {
    path: PathBuf,
}

impl FileCredentials {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// `<home>/.archassist/token`; `None` when the home directory is unknown.
pub fn default_token_path() -> Option<PathBuf> {
    token_path_in(dirs::home_dir())
}

fn token_path_in(home: Option<PathBuf>) -> Option<PathBuf> {
    home.filter(|h| h.is_absolute()).map(|h| h.join(".archassist").join(TOKEN_KEY))
}

impl CredentialStore for FileCredentials {
    fn load(&self) -> Option<Credential> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => Credential::parse(&raw),
            Err(err) if err.kind() == ErrorKind::NotFound => None,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "token file unreadable");
                None
            }
        }
    }

    fn save(&self, credential: &Credential) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| StorageError(e.to_string()))?;
        }
        std::fs::write(&self.path, credential.as_str()).map_err(|e| StorageError(e.to_string()))
    }

    fn clear(&self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(err) => tracing::warn!(path = %self.path.display(), error = %err, "failed to remove token file"),
        }
    }
}
