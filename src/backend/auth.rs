use serde::{Deserialize, Serialize};

use super::{from_value, read_json, send, unwrap_data, BackendClient, BackendError};
use crate::models::user::{DevRole, User};

/// Fields the Telegram login widget appends to its auth URL.
///
/// Forwarded unchanged; the backend checks `hash` against the bot token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramLogin {
    pub id: i64,
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    pub auth_date: i64,
    pub hash: String,
}

/// A token issued by the backend, with the user when the endpoint returns one.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginSession {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

/// Unauthenticated endpoints plus token validation.
#[derive(Debug, Clone, Copy)]
pub struct AuthApi<'a> {
    client: &'a BackendClient,
}

impl<'a> AuthApi<'a> {
    pub(crate) fn new(client: &'a BackendClient) -> Self {
        Self { client }
    }

    /// Exchange a widget payload for an access token.
    pub async fn login_telegram(&self, login: &TelegramLogin) -> Result<(String, Option<User>), BackendError> {
        let endpoint = "POST auth/telegram";
        let request = self.client.http().post(self.client.url("auth/telegram")).json(login);
        let resp = send(endpoint, request).await?;
        let session: LoginSession = from_value(endpoint, read_json(endpoint, resp).await?)?;
        session_token(endpoint, session)
    }

    /// Development bypass: a token for a fixed lawyer or assistant account.
    pub async fn dev_token(&self, role: DevRole) -> Result<(String, Option<User>), BackendError> {
        let path = role.token_path();
        let endpoint = format!("POST {path}");
        let request = self
            .client
            .http()
            .post(self.client.url(path))
            .header(reqwest::header::CONTENT_TYPE, "application/json");
        let resp = send(&endpoint, request).await?;
        let session: LoginSession = from_value(&endpoint, read_json(&endpoint, resp).await?)?;
        session_token(&endpoint, session)
    }

    /// The user a token belongs to. Fails with `Unauthorized` for a stale token.
    pub async fn me(&self, token: &str) -> Result<User, BackendError> {
        let endpoint = "GET auth/me";
        let request = self.client.http().get(self.client.url("auth/me")).bearer_auth(token);
        let resp = send(endpoint, request).await?;
        from_value(endpoint, unwrap_data(read_json(endpoint, resp).await?))
    }
}

fn session_token(endpoint: &str, session: LoginSession) -> Result<(String, Option<User>), BackendError> {
    match session.access_token.filter(|t| !t.is_empty()) {
        Some(token) => Ok((token, session.user)),
        None => Err(BackendError::MissingToken { endpoint: endpoint.to_string() }),
    }
}
