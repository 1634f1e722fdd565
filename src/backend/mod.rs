//! Typed client for the case backend's REST API.
//!
//! Every user-facing operation goes through here; handlers never build
//! backend URLs themselves. Calls made on behalf of a signed-in user carry
//! that user's bearer token. A 401 from any such call surfaces as
//! [`BackendError::Unauthorized`].
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | GET    | `cases/{category}` | list cases of one board |
//! | GET    | `cases/{id}` | one case |
//! | POST   | `cases` | create |
//! | DELETE | `cases/{id}` | delete |
//! | PATCH  | `cases/{id}/{accept,status,hearing,accepted-date,return-date,appeal-hearing}` | field updates |
//! | GET    | `users?role=lawyer` | responsible dropdown |
//! | POST   | `auth/telegram` | exchange widget payload for a token |
//! | POST   | `auth/dev-token-{lawyer,assistant}` | development login |
//! | GET    | `auth/me` | validate a token |

pub mod auth;
pub mod cases;
mod error;

pub use self::auth::{AuthApi, LoginSession, TelegramLogin};
pub use self::cases::{CallOutcome, CaseApi, UpdateReport};
pub use self::error::{delete_failure_message, BackendError};

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::config::AppConfig;

/// Shared HTTP client for the backend. Cheap to clone.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, BackendError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|e| BackendError::Setup(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, BackendError> {
        Self::new(config.backend_url.as_str(), config.backend_timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Case endpoints, authenticated with `token`.
    pub fn cases<'a>(&'a self, token: &'a str) -> CaseApi<'a> {
        CaseApi::new(self, token)
    }

    /// Login and token validation endpoints.
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }
}

/// Send a prepared request, mapping transport failures and non-2xx answers.
pub(crate) async fn send(
    endpoint: &str,
    request: reqwest::RequestBuilder,
) -> Result<reqwest::Response, BackendError> {
    let resp = request.send().await.map_err(|e| {
        log::error!("Network error calling {endpoint}: {e}");
        BackendError::Network { endpoint: endpoint.to_string(), source: e }
    })?;

    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    if status == reqwest::StatusCode::UNAUTHORIZED {
        log::warn!("{endpoint} answered 401, token no longer valid");
        return Err(BackendError::Unauthorized { endpoint: endpoint.to_string() });
    }

    let body = resp.text().await.unwrap_or_default();
    log::error!("{endpoint} failed with HTTP {}", status.as_u16());
    Err(BackendError::Status {
        endpoint: endpoint.to_string(),
        status: status.as_u16(),
        body,
    })
}

pub(crate) async fn read_json(endpoint: &str, resp: reqwest::Response) -> Result<serde_json::Value, BackendError> {
    resp.json().await.map_err(|e| BackendError::Decode { endpoint: endpoint.to_string(), source: e })
}

pub(crate) fn from_value<T: DeserializeOwned>(endpoint: &str, value: serde_json::Value) -> Result<T, BackendError> {
    serde_json::from_value(value).map_err(|e| BackendError::Payload { endpoint: endpoint.to_string(), source: e })
}

/// Some endpoints wrap their payload as `{"data": ...}`, others return it bare.
pub(crate) fn unwrap_data(value: serde_json::Value) -> serde_json::Value {
    match value {
        serde_json::Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(serde_json::Value::Null)
        }
        other => other,
    }
}
