//! Shared test infrastructure: a mocked backend, JSON fixtures and a test app.
//!
//! # Backend
//! - `mock_backend()` - wiremock server standing in for the case API
//! - `client_for()` - `BackendClient` pointed at that server
//!
//! # App
//! - `test_app!` - the full route table behind a cookie session
//! - `session_cookie()` / `csrf_token()` - carry state between requests

#![allow(dead_code)]

use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use serde_json::{json, Value};
use wiremock::MockServer;

use casedesk::backend::BackendClient;

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const TOKEN: &str = "test-access-token";
pub const LAWYER_NAME: &str = "Айгерим Сапарова";

// ============================================================================
// BACKEND
// ============================================================================

pub async fn mock_backend() -> MockServer {
    MockServer::start().await
}

pub fn client_for(server: &MockServer) -> BackendClient {
    BackendClient::new(&server.uri(), None).expect("Failed to build backend client")
}

// ============================================================================
// FIXTURES
// ============================================================================

pub fn lawyer_json() -> Value {
    json!({
        "id": 4,
        "telegram_id": 700100200,
        "name": LAWYER_NAME,
        "username": "aigerim",
        "role": "lawyer",
        "is_active": true,
        "created_at": "2025-01-10T08:00:00.000Z",
        "updated_at": "2025-01-10T08:00:00.000Z"
    })
}

pub fn assistant_json() -> Value {
    json!({
        "id": 5,
        "telegram_id": "700100300",
        "name": "Данияр Оспанов",
        "username": null,
        "role": "assistant",
        "is_active": true
    })
}

/// A case in `status` with no optional dates set.
pub fn case_json(id: i64, status: &str) -> Value {
    json!({
        "id": id,
        "number": format!("A1-2025-{id:03}"),
        "title": "Иванов против ООО «Ромашка»",
        "description": "Взыскание задолженности по договору поставки",
        "status": status,
        "filing_date": "2025-02-03",
        "created_at": "2025-02-03T09:00:00.000Z",
        "updated_at": "2025-02-03T09:00:00.000Z",
        "responsible": lawyer_json()
    })
}

/// `case_json` with extra fields merged in.
pub fn case_with(id: i64, status: &str, extra: Value) -> Value {
    let mut case = case_json(id, status);
    if let (Some(base), Some(extra)) = (case.as_object_mut(), extra.as_object()) {
        for (k, v) in extra {
            base.insert(k.clone(), v.clone());
        }
    }
    case
}

pub fn case(id: i64, status: &str, extra: Value) -> casedesk::models::case::Case {
    serde_json::from_value(case_with(id, status, extra)).expect("Fixture is not a valid case")
}

// ============================================================================
// APP
// ============================================================================

/// Build the full app against `$backend_url` with DEV_AUTH set to `$dev_auth`.
#[macro_export]
macro_rules! test_app {
    ($backend_url:expr, $dev_auth:expr) => {{
        let mut config = casedesk::config::AppConfig::local($backend_url).expect("Invalid test config");
        config.dev_auth = $dev_auth;
        let backend = casedesk::backend::BackendClient::from_config(&config).expect("Failed to build client");
        let dev_auth = config.dev_auth;
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(
                    actix_session::SessionMiddleware::builder(
                        actix_session::storage::CookieSessionStore::default(),
                        actix_web::cookie::Key::generate(),
                    )
                    .cookie_secure(false)
                    .build(),
                )
                .app_data(actix_web::web::Data::new(backend))
                .app_data(actix_web::web::Data::new(config))
                .configure(|cfg| casedesk::handlers::configure(cfg, dev_auth)),
        )
        .await
    }};
}

/// The session cookie set by a response, if it changed the session.
pub fn session_cookie<B>(resp: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    resp.response()
        .cookies()
        .find(|c| c.name() == "id")
        .map(|c| c.into_owned())
}

/// CSRF token embedded in a rendered form.
pub fn csrf_token(html: &str) -> String {
    let re = regex::Regex::new(r#"name="csrf_token" value="([0-9a-f]{64})""#).expect("Invalid regex");
    re.captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .expect("No CSRF token in page")
}

pub fn location<B>(resp: &ServiceResponse<B>) -> String {
    resp.headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}
