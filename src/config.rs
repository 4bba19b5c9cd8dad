//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use client::util::config::ClientConfig;

/// Backend address handed to the browser.
pub const API_URL_VAR: &str = "ARCHASSIST_API_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub api_base: String,
}

impl HostConfig {
    /// Build from the environment (after `.env` has been loaded).
    ///
    /// Optional:
    /// - `ARCHASSIST_API_URL`: design backend base, default `http://localhost:8000`
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(API_URL_VAR).ok().as_deref())
    }

    pub fn from_value(raw: Option<&str>) -> Self {
        Self { api_base: ClientConfig::new(raw).api_base }
    }
}
