//! API origin resolution.
//!
//! DESIGN
//! ======
//! The origin is resolved once when the app boots and handed to pages through
//! Leptos context. Request helpers only ever join a path onto it.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Origin used when neither an option override nor the build environment
/// supplies one.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";

/// Recognized configuration overrides.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiOptions {
    /// Overrides the default origin when set.
    pub api_base_url: Option<String>,
}

/// Resolved API configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    api_base_url: String,
}

impl ApiConfig {
    /// Resolve from explicit options, then the `SATS_JAR_API_URL` build
    /// environment variable, then the local development default.
    #[must_use]
    pub fn resolve(options: &ApiOptions) -> Self {
        Self::resolve_with(options, option_env!("SATS_JAR_API_URL"))
    }

    fn resolve_with(options: &ApiOptions, build_env: Option<&str>) -> Self {
        let raw = options
            .api_base_url
            .as_deref()
            .and_then(non_blank)
            .or_else(|| build_env.and_then(non_blank))
            .unwrap_or(DEFAULT_API_BASE_URL);
        Self { api_base_url: raw.trim_end_matches('/').to_owned() }
    }

    #[must_use]
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Join an endpoint path (with leading `/`) onto the origin.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::resolve(&ApiOptions::default())
    }
}

fn non_blank(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
