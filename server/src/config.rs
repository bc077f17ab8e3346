//! Host server configuration parsed from environment variables.
//!
//! Recognized variables:
//! - `PORT`: listen port, default 8080
//! - `SATS_JAR_API_PROXY_TARGET`: upstream origin for `/api/*`; proxy is off when unset
//! - `SATS_JAR_PROXY_TIMEOUT_SECS`: upstream request timeout, default 30
//! - `SITE_ROOT`: directory holding the built `/pkg` assets; defaults to the
//!   Leptos `site-root` from `[package.metadata.leptos]`

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },

    #[error("invalid proxy target {0:?}: expected an http:// or https:// origin")]
    InvalidProxyTarget(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub proxy_target: Option<String>,
    pub proxy_timeout: Duration,
    pub site_root: Option<PathBuf>,
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable does not parse or the proxy
    /// target is not an http(s) origin.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let timeout_secs = parse_or(
            "SATS_JAR_PROXY_TIMEOUT_SECS",
            lookup("SATS_JAR_PROXY_TIMEOUT_SECS"),
            DEFAULT_PROXY_TIMEOUT_SECS,
        )?;
        let proxy_target = lookup("SATS_JAR_API_PROXY_TARGET")
            .map(|raw| raw.trim().trim_end_matches('/').to_owned())
            .filter(|raw| !raw.is_empty())
            .map(validate_proxy_target)
            .transpose()?;
        let site_root = lookup("SITE_ROOT")
            .map(|raw| raw.trim().to_owned())
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from);

        Ok(Self { port, proxy_target, proxy_timeout: Duration::from_secs(timeout_secs), site_root })
    }
}

fn parse_or<T>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value: value.to_owned() }),
    }
}

fn validate_proxy_target(target: String) -> Result<String, ConfigError> {
    if target.starts_with("http://") || target.starts_with("https://") {
        Ok(target)
    } else {
        Err(ConfigError::InvalidProxyTarget(target))
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
