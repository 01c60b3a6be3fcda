//! Integration tests for the Portico session client

use portico_http::client::error::ClientError;
use portico_http::types::{LoginRequest, SendResetPasswordRequest, SignupRequest};
use portico_http::ApiClient;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

/// Matches only requests without an anti-forgery header.
struct WithoutCsrfHeader;

impl Match for WithoutCsrfHeader {
    fn matches(&self, request: &Request) -> bool {
        !request.headers.contains_key("X-CSRFToken")
    }
}

fn user_json() -> serde_json::Value {
    json!({
        "user_id": 42,
        "username": "ada",
        "email": "ada@example.com",
        "avatar": null
    })
}

#[tokio::test]
async fn check_auth_decodes_user_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "user": user_json() })))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri()).unwrap();
    let user = client.check_auth().await.unwrap();

    assert_eq!(user.id, 42);
    assert_eq!(user.username, "ada");
    assert!(user.avatar.is_none());
}

#[tokio::test]
async fn check_auth_without_session_is_unauthorized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/user"))
        .respond_with(
            ResponseTemplate::new(403)
                .set_body_json(json!({ "detail": "Authentication credentials were not provided." })),
        )
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri()).unwrap();
    let result = client.check_auth().await;

    assert!(matches!(result, Err(ClientError::Unauthorized(_))));
}

#[tokio::test]
async fn login_returns_user_record() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .and(body_json(json!({
            "email": "ada@example.com",
            "password": "hunter22"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri()).unwrap();
    let user = client
        .login(LoginRequest {
            email: "ada@example.com".into(),
            password: "hunter22".into(),
        })
        .await
        .unwrap();

    assert_eq!(user.email, "ada@example.com");
}

#[tokio::test]
async fn login_surfaces_validation_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({ "email": ["Enter a valid email address."] })),
        )
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri()).unwrap();
    let result = client
        .login(LoginRequest {
            email: "not-an-email".into(),
            password: "pw".into(),
        })
        .await;

    match result {
        Err(ClientError::Validation(errors)) => {
            assert_eq!(errors.messages(), vec!["Enter a valid email address."]);
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn signup_returns_created_user() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/register"))
        .respond_with(ResponseTemplate::new(201).set_body_json(user_json()))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri()).unwrap();
    let user = client
        .signup(SignupRequest {
            email: "ada@example.com".into(),
            username: "ada".into(),
            password: "hunter22".into(),
        })
        .await
        .unwrap();

    assert_eq!(user.username, "ada");
}

#[tokio::test]
async fn logout_accepts_empty_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/logout"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri()).unwrap();
    assert!(client.logout().await.is_ok());
}

#[tokio::test]
async fn state_changing_requests_echo_csrf_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .and(header("X-CSRFToken", "tok456"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
        .mount(&mock_server)
        .await;

    let client = ApiClient::builder()
        .base_url(mock_server.uri())
        .csrf_token("tok456")
        .build()
        .unwrap();

    // The mock only matches when the header arrives on the wire.
    let result = client
        .login(LoginRequest {
            email: "ada@example.com".into(),
            password: "hunter22".into(),
        })
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn safe_requests_omit_csrf_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/user"))
        .and(WithoutCsrfHeader)
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "user": user_json() })))
        .mount(&mock_server)
        .await;

    // Even with a token configured, GET must not carry the header.
    let client = ApiClient::builder()
        .base_url(mock_server.uri())
        .csrf_token("tok456")
        .build()
        .unwrap();

    assert!(client.check_auth().await.is_ok());
}

#[tokio::test]
async fn reset_request_maps_transport_failure_to_network() {
    // Point at a closed port; the request never reaches a server.
    let client = ApiClient::new("http://127.0.0.1:1").unwrap();
    let result = client
        .request_password_reset(SendResetPasswordRequest {
            email: "ada@example.com".into(),
        })
        .await;

    assert!(matches!(result, Err(ClientError::Network(_))));
}
