//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use client::net::auth::{AuthConfig, AuthError};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("missing env var {var}")]
    MissingVar { var: &'static str },

    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    #[error("invalid auth provider config: {0}")]
    Auth(#[from] AuthError),

    /// Leptos options could not be loaded from the workspace metadata.
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub auth: AuthConfig,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Required:
    /// - `AUTH_BASE_URL`: origin of the hosted auth service
    /// - `AUTH_PROJECT_ID`: project id registered with that service
    ///
    /// Optional:
    /// - `PORT`: default 3000
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or a value fails
    /// to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let base_url = lookup("AUTH_BASE_URL").ok_or(ConfigError::MissingVar { var: "AUTH_BASE_URL" })?;
        let project_id = lookup("AUTH_PROJECT_ID").ok_or(ConfigError::MissingVar { var: "AUTH_PROJECT_ID" })?;
        let auth = AuthConfig::new(&base_url, &project_id)?;

        Ok(Self { port, auth })
    }
}
