use super::*;

#[test]
fn resolve_uses_default_when_nothing_set() {
    let cfg = ApiConfig::resolve_with(&ApiOptions::default(), None);
    assert_eq!(cfg.api_base_url(), DEFAULT_API_BASE_URL);
}

#[test]
fn resolve_prefers_build_env_over_default() {
    let cfg = ApiConfig::resolve_with(&ApiOptions::default(), Some("https://jar.example/api"));
    assert_eq!(cfg.api_base_url(), "https://jar.example/api");
}

#[test]
fn resolve_prefers_option_over_build_env() {
    let options = ApiOptions { api_base_url: Some("https://override.example/api".to_owned()) };
    let cfg = ApiConfig::resolve_with(&options, Some("https://jar.example/api"));
    assert_eq!(cfg.api_base_url(), "https://override.example/api");
}

#[test]
fn resolve_trims_trailing_slash() {
    let options = ApiOptions { api_base_url: Some("https://jar.example/api/".to_owned()) };
    let cfg = ApiConfig::resolve_with(&options, None);
    assert_eq!(cfg.api_base_url(), "https://jar.example/api");
}

#[test]
fn resolve_ignores_blank_values() {
    let options = ApiOptions { api_base_url: Some("   ".to_owned()) };
    let cfg = ApiConfig::resolve_with(&options, Some(""));
    assert_eq!(cfg.api_base_url(), DEFAULT_API_BASE_URL);
}

#[test]
fn resolve_blank_option_falls_back_to_build_env() {
    let options = ApiOptions { api_base_url: Some("  ".to_owned()) };
    let cfg = ApiConfig::resolve_with(&options, Some("https://jar.example/api/"));
    assert_eq!(cfg.api_base_url(), "https://jar.example/api");
}

#[test]
fn endpoint_joins_path() {
    let cfg = ApiConfig::resolve_with(&ApiOptions::default(), None);
    assert_eq!(cfg.endpoint("/auth/login"), "http://localhost:3000/api/auth/login");
}
