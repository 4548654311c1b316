//! API integration tests

#![allow(clippy::unwrap_used)]

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Json, Router,
    body::Body,
    http::{HeaderMap, HeaderValue, Request, StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use http_body_util::BodyExt;
use plantventory_core::{
    AuthUrls, ClientConfig, InMemoryProfiles, Profile, Session, SessionState, SessionView, Theme,
    UserId,
};
use plantventory_web::{AppState, SessionStrategy, create_router};
use serde_json::{Value, json};
use tower::ServiceExt;

fn profiles() -> Arc<InMemoryProfiles> {
    Arc::new(InMemoryProfiles::new().with(UserId::new("u-ada"), Profile::named("Ada")))
}

fn client_config() -> ClientConfig {
    ClientConfig {
        auth: AuthUrls {
            sign_in: "https://auth.example.com/sign-in".to_string(),
            ..AuthUrls::default()
        },
        theme: Theme::Dark,
        session_lookup: false,
    }
}

fn app(sessions: SessionStrategy) -> Router {
    create_router(AppState::new(client_config(), sessions, profiles()))
}

async fn get_json(app: Router, uri: &str, cookie: Option<&str>) -> (StatusCode, Value) {
    let mut request = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        request = request.header(header::COOKIE, cookie);
    }
    let response = app
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

/// Identity provider stand-in: reads the `session` pair of the cookie, knows
/// one user, answers 401 for others and 500 for `session=broken`.
async fn spawn_identity_provider() -> SocketAddr {
    async fn me(headers: HeaderMap) -> axum::response::Response {
        let cookie = headers
            .get(header::COOKIE)
            .and_then(|v| std::str::from_utf8(v.as_bytes()).ok())
            .unwrap_or_default();
        let session = cookie
            .split("; ")
            .find(|pair| pair.starts_with("session="))
            .unwrap_or_default();
        match session {
            "session=ada" => Json(json!({"id": "u-ada", "primary_email": "ada@example.com"}))
                .into_response(),
            "session=nameless" => Json(json!({"id": "u-nobody"})).into_response(),
            "session=broken" => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
            _ => StatusCode::UNAUTHORIZED.into_response(),
        }
    }

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, Router::new().route("/api/v1/users/me", get(me)))
            .await
            .unwrap();
    });
    addr
}

async fn provider_strategy() -> SessionStrategy {
    let addr = spawn_identity_provider().await;
    SessionStrategy::provider(&format!("http://{addr}/api/v1/users/me")).unwrap()
}

#[tokio::test]
async fn test_health_check_returns_ok() {
    let (status, body) = get_json(app(SessionStrategy::Anonymous), "/api/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_config_exposes_supplied_urls_verbatim() {
    let (status, body) = get_json(app(SessionStrategy::Anonymous), "/api/config", None).await;

    assert_eq!(status, StatusCode::OK);
    let config: ClientConfig = serde_json::from_value(body).unwrap();
    assert_eq!(config.auth.sign_in, "https://auth.example.com/sign-in");
    assert_eq!(config.theme, Theme::Dark);
    assert!(!config.session_lookup);
}

#[tokio::test]
async fn test_config_reports_session_lookup_when_strategy_can_authenticate() {
    let (_, body) = get_json(
        app(SessionStrategy::Fixed(SessionState::Anonymous)),
        "/api/config",
        None,
    )
    .await;
    assert_eq!(body["session_lookup"], true);
}

#[tokio::test]
async fn test_session_without_provider_is_anonymous() {
    let (status, body) = get_json(
        app(SessionStrategy::Anonymous),
        "/api/session",
        Some("session=ada"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"signed_in": false}));
}

#[tokio::test]
async fn test_fixed_session_gets_profile_name() {
    let state = SessionState::Authenticated(Session::new(UserId::new("u-ada")));
    let (_, body) = get_json(app(SessionStrategy::Fixed(state)), "/api/session", None).await;

    let view: SessionView = serde_json::from_value(body).unwrap();
    assert!(view.signed_in);
    assert_eq!(view.display_name.as_deref(), Some("Ada"));
}

#[tokio::test]
async fn test_provider_session_with_known_user_is_signed_in_and_named() {
    let (status, body) = get_json(
        app(provider_strategy().await),
        "/api/session",
        Some("session=ada"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"signed_in": true, "display_name": "Ada"}));
}

#[tokio::test]
async fn test_provider_session_without_profile_has_no_name() {
    let (_, body) = get_json(
        app(provider_strategy().await),
        "/api/session",
        Some("session=nameless"),
    )
    .await;

    assert_eq!(body, json!({"signed_in": true}));
}

#[tokio::test]
async fn test_provider_rejecting_cookie_is_anonymous() {
    let (status, body) = get_json(
        app(provider_strategy().await),
        "/api/session",
        Some("session=stale"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"signed_in": false}));
}

#[tokio::test]
async fn test_provider_failure_is_bad_gateway_problem() {
    let (status, body) = get_json(
        app(provider_strategy().await),
        "/api/session",
        Some("session=broken"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["status"], 502);
    assert!(
        body["detail"]
            .as_str()
            .unwrap()
            .contains("identity provider returned 500")
    );
}

#[tokio::test]
async fn test_unreachable_provider_is_bad_gateway() {
    // Bind then drop to get a port nothing listens on.
    let addr = {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    let strategy = SessionStrategy::provider(&format!("http://{addr}/me")).unwrap();

    let (status, _) = get_json(app(strategy), "/api/session", Some("session=ada")).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

async fn get_session_with_cookies(app: Router, cookies: &[&[u8]]) -> axum::response::Response {
    let mut request = Request::builder().uri("/api/session");
    for cookie in cookies {
        request = request.header(header::COOKIE, HeaderValue::from_bytes(cookie).unwrap());
    }
    app.oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_session_response_is_not_cacheable() {
    let response = get_session_with_cookies(app(SessionStrategy::Anonymous), &[]).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).unwrap(),
        "no-store"
    );
}

#[tokio::test]
async fn test_provider_receives_every_cookie_header() {
    let response = get_session_with_cookies(
        app(provider_strategy().await),
        &[b"theme=dark".as_slice(), b"session=ada".as_slice()],
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"signed_in": true, "display_name": "Ada"})
    );
}

#[tokio::test]
async fn test_non_ascii_cookie_is_still_forwarded() {
    let response = get_session_with_cookies(
        app(provider_strategy().await),
        &["session=ada; name=José".as_bytes()],
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["signed_in"], true);
}
