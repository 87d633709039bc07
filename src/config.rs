//! Server configuration parsed from environment variables.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read once at startup and injected into `AppState`. Nothing here is
//! mutated after the listener binds.

use std::fmt;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_AUTH_PASSWORD: &str = "mike2025";

/// Errors produced while reading startup configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable was present but could not be parsed.
    #[error("invalid {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// The single shared secret accepted by `/auth-login`.
///
/// `Debug` is redacted so the value never reaches logs.
#[derive(Clone, PartialEq, Eq)]
pub struct SharedSecret(String);

impl SharedSecret {
    /// Wrap a non-empty secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for an empty string.
    pub fn new(value: impl Into<String>) -> Result<Self, ConfigError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ConfigError::Invalid { var: "AUTH_PASSWORD", reason: "must not be empty".into() });
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedSecret(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub auth_password: SharedSecret,
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// - `PORT`: listen port, default 3000
    /// - `AUTH_PASSWORD`: shared login secret, default `mike2025`
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is not a valid port or `AUTH_PASSWORD` is empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| ConfigError::Invalid { var: "PORT", reason: e.to_string() })?,
            None => DEFAULT_PORT,
        };
        let auth_password = SharedSecret::new(lookup("AUTH_PASSWORD").unwrap_or_else(|| DEFAULT_AUTH_PASSWORD.into()))?;
        Ok(Self { port, auth_password })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
