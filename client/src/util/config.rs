//! Client configuration read from the server-rendered document.
//!
//! The host writes the design backend address into
//! `<meta name="archassist-api">`; anything missing or blank falls back to
//! [`studio::DEFAULT_API_BASE`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// `name` of the meta tag carrying the backend address.
pub const API_META_NAME: &str = "archassist-api";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(None)
    }
}

impl ClientConfig {
    /// Normalize a configured base: trimmed, no trailing `/`, default when blank.
    pub fn new(raw: Option<&str>) -> Self {
        let api_base = raw
            .map(|base| base.trim().trim_end_matches('/'))
            .filter(|base| !base.is_empty())
            .unwrap_or(studio::DEFAULT_API_BASE)
            .to_owned();
        Self { api_base }
    }

    /// Read the meta tag in the browser; the default elsewhere.
    pub fn from_document() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let selector = format!("meta[name=\"{API_META_NAME}\"]");
            let content = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.query_selector(&selector).ok().flatten())
                .and_then(|meta| meta.get_attribute("content"));
            Self::new(content.as_deref())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }
}
