//! `localStorage`-backed credential slot.
//!
//! Requires a browser environment; on the server nothing is ever stored and
//! writes fail.

use studio::credential::{Credential, CredentialStore, TOKEN_KEY};
use studio::error::StorageError;

/// Keeps the bearer token under the `token` key of `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageCredentials;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl CredentialStore for LocalStorageCredentials {
    fn load(&self) -> Option<Credential> {
        #[cfg(feature = "hydrate")]
        {
            let raw = local_storage()?.get_item(TOKEN_KEY).ok().flatten()?;
            Credential::parse(&raw)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, credential: &Credential) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or_else(|| StorageError("localStorage unavailable".to_owned()))?;
            storage
                .set_item(TOKEN_KEY, credential.as_str())
                .map_err(|e| StorageError(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credential, TOKEN_KEY);
            Err(StorageError("not available on server".to_owned()))
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                if let Err(e) = storage.remove_item(TOKEN_KEY) {
                    leptos::logging::warn!("failed to clear stored token: {e:?}");
                }
            }
        }
    }
}
