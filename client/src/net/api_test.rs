use futures::executor::block_on;

use super::*;
use crate::config::ApiOptions;
use crate::net::transport::test_helpers::ScriptedTransport;

fn api() -> ApiConfig {
    ApiConfig::resolve(&ApiOptions { api_base_url: Some("http://jar.test/api".to_owned()) })
}

fn reply(status: u16, body: &str) -> HttpReply {
    HttpReply { status, status_text: String::new(), body: body.to_owned() }
}

// =============================================================
// attempt_login
// =============================================================

#[test]
fn empty_parent_fields_skip_network() {
    let transport = ScriptedTransport::replying(200, r#"{"token":"abc","user":{}}"#);
    let result = block_on(attempt_login(&transport, &api(), &LoginCredentials::parent("", "1234")));
    assert_eq!(result, Err(LoginError::Validation));
    assert_eq!(transport.request_count(), 0);
}

#[test]
fn empty_child_fields_skip_network() {
    let transport = ScriptedTransport::replying(200, r#"{"token":"abc","user":{}}"#);
    let result = block_on(attempt_login(&transport, &api(), &LoginCredentials::child("JAR-1", "")));
    assert_eq!(result, Err(LoginError::Validation));
    assert_eq!(transport.request_count(), 0);
}

#[test]
fn parent_login_posts_json_to_login_endpoint() {
    let transport = ScriptedTransport::replying(200, r#"{"token":"abc","user":{"name":"Amina"}}"#);
    let session = block_on(attempt_login(&transport, &api(), &LoginCredentials::parent("+254700", "1234"))).unwrap();

    assert_eq!(session.token, "abc");
    assert_eq!(session.user.display_name(), Some("Amina"));

    let requests = transport.requests.borrow();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].url, "http://jar.test/api/auth/login");
    assert_eq!(requests[0].body, Some(serde_json::json!({ "phoneNumber": "+254700", "pin": "1234" })));
}

#[test]
fn child_login_posts_json_to_child_endpoint() {
    let transport = ScriptedTransport::replying(200, r#"{"token":"kid","user":{"name":"Zawadi"}}"#);
    let session = block_on(attempt_login(&transport, &api(), &LoginCredentials::child("JAR-9", "0000"))).unwrap();

    assert_eq!(session.token, "kid");
    let requests = transport.requests.borrow();
    assert_eq!(requests[0].url, "http://jar.test/api/auth/child-login");
    assert_eq!(requests[0].body, Some(serde_json::json!({ "jarId": "JAR-9", "childPin": "0000" })));
}

#[test]
fn transport_failure_becomes_request_failed() {
    let transport = ScriptedTransport::failing(TransportError::Network("Failed to fetch".to_owned()));
    let result = block_on(attempt_login(&transport, &api(), &LoginCredentials::parent("+254700", "1234")));
    assert_eq!(
        result,
        Err(LoginError::RequestFailed(RequestFailure::Transport(TransportError::Network(
            "Failed to fetch".to_owned()
        ))))
    );
}

// =============================================================
// interpret_login_reply
// =============================================================

#[test]
fn error_status_uses_error_field() {
    let err = interpret_login_reply(&reply(401, r#"{"error":"Invalid PIN"}"#)).unwrap_err();
    assert_eq!(err, LoginError::RequestFailed(RequestFailure::Status { status: 401, message: "Invalid PIN".to_owned() }));
    assert_eq!(err.user_message().as_deref(), Some("Invalid PIN"));
}

#[test]
fn error_status_without_error_field_synthesizes_status_message() {
    let err = interpret_login_reply(&reply(500, r#"{"message":"boom"}"#)).unwrap_err();
    assert_eq!(err.user_message().as_deref(), Some("Login failed with status: 500"));
}

#[test]
fn error_status_with_non_json_body_synthesizes_status_message() {
    let err = interpret_login_reply(&reply(502, "<html>Bad Gateway</html>")).unwrap_err();
    assert_eq!(err.user_message().as_deref(), Some("Login failed with status: 502"));
}

#[test]
fn error_status_with_blank_error_field_synthesizes_status_message() {
    let err = interpret_login_reply(&reply(403, r#"{"error":""}"#)).unwrap_err();
    assert_eq!(err.user_message().as_deref(), Some("Login failed with status: 403"));
}

#[test]
fn success_without_token_is_malformed() {
    let err = interpret_login_reply(&reply(200, r#"{"user":{"name":"Amina"}}"#)).unwrap_err();
    assert_eq!(err, LoginError::MalformedResponse);
}

#[test]
fn success_with_empty_token_is_malformed() {
    let err = interpret_login_reply(&reply(200, r#"{"token":"","user":{}}"#)).unwrap_err();
    assert_eq!(err, LoginError::MalformedResponse);
}

#[test]
fn success_without_user_is_malformed() {
    let err = interpret_login_reply(&reply(200, r#"{"token":"abc"}"#)).unwrap_err();
    assert_eq!(err, LoginError::MalformedResponse);
}

#[test]
fn success_with_non_object_user_is_malformed() {
    let err = interpret_login_reply(&reply(200, r#"{"token":"abc","user":"Amina"}"#)).unwrap_err();
    assert_eq!(err, LoginError::MalformedResponse);
}

#[test]
fn success_with_non_object_body_is_malformed() {
    let err = interpret_login_reply(&reply(200, r#"["abc",{}]"#)).unwrap_err();
    assert_eq!(err, LoginError::MalformedResponse);
}

#[test]
fn success_with_invalid_json_is_request_failed() {
    let err = interpret_login_reply(&reply(200, "not json")).unwrap_err();
    assert!(matches!(err, LoginError::RequestFailed(RequestFailure::Decode(_))));
    assert_eq!(err.user_message(), None);
}

#[test]
fn any_2xx_counts_as_success() {
    let session = interpret_login_reply(&reply(201, r#"{"token":"abc","user":{}}"#)).unwrap();
    assert_eq!(session.token, "abc");
    assert_eq!(session.user.display_name(), None);
}

#[test]
fn success_with_non_string_name_still_logs_in() {
    let session = interpret_login_reply(&reply(200, r#"{"token":"abc","user":{"name":7}}"#)).unwrap();
    assert_eq!(session.token, "abc");
    assert_eq!(session.user.display_name(), None);
}

// =============================================================
// probe_health
// =============================================================

#[test]
fn health_ok_is_connected() {
    let transport = ScriptedTransport::replying(200, "");
    let status = block_on(probe_health(&transport, &api()));
    assert_eq!(status, ApiStatus::Connected);
    assert_eq!(status.label(), "API connected successfully");

    let requests = transport.requests.borrow();
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].url, "http://jar.test/api/health");
}

#[test]
fn health_error_status_is_failed() {
    let transport = ScriptedTransport::replying(503, "");
    let status = block_on(probe_health(&transport, &api()));
    assert_eq!(status, ApiStatus::Failed { status: 503, status_text: "Service Unavailable".to_owned() });
    assert_eq!(status.label(), "API connection failed: 503 Service Unavailable");
}

#[test]
fn health_transport_error_is_error() {
    let transport = ScriptedTransport::failing(TransportError::Network("Failed to fetch".to_owned()));
    let status = block_on(probe_health(&transport, &api()));
    assert_eq!(status, ApiStatus::Error("network error: Failed to fetch".to_owned()));
    assert_eq!(status.label(), "API connection error: network error: Failed to fetch");
}

#[test]
fn api_status_defaults_to_checking() {
    assert_eq!(ApiStatus::default().label(), "Checking API connection...");
}
