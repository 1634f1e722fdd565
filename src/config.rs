//! Runtime configuration, read from the environment (and `.env` via dotenvy).
//!
//! | Variable | Default |
//! |----------|---------|
//! | `BACKEND_URL` | `http://localhost:3000` |
//! | `BIND_ADDR` | `127.0.0.1:8080` |
//! | `SESSION_KEY` | random per start (64+ bytes to persist sessions) |
//! | `TELEGRAM_BOT_NAME` | `lawyer_tore_crm_bot` |
//! | `DEV_AUTH` | off; `true` or `1` shows the development login |
//! | `BACKEND_TIMEOUT_SECS` | none |
//! | `COOKIE_SECURE` | off |

use std::time::Duration;

use url::Url;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:3000";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_BOT_NAME: &str = "lawyer_tore_crm_bot";

#[derive(Clone)]
pub struct AppConfig {
    pub backend_url: Url,
    pub bind_addr: String,
    pub session_key: Option<String>,
    pub telegram_bot_name: String,
    pub dev_auth: bool,
    pub backend_timeout: Option<Duration>,
    pub cookie_secure: bool,
}

// SESSION_KEY stays out of logs.
impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("backend_url", &self.backend_url.as_str())
            .field("bind_addr", &self.bind_addr)
            .field("session_key", &self.session_key.as_ref().map(|_| "[REDACTED]"))
            .field("telegram_bot_name", &self.telegram_bot_name)
            .field("dev_auth", &self.dev_auth)
            .field("backend_timeout", &self.backend_timeout)
            .field("cookie_secure", &self.cookie_secure)
            .finish()
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_url = get("BACKEND_URL").unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());
        let backend_url = Url::parse(&raw_url).map_err(|e| ConfigError::InvalidUrl(raw_url.clone(), e.to_string()))?;

        let backend_timeout = match get("BACKEND_TIMEOUT_SECS") {
            None => None,
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidNumber("BACKEND_TIMEOUT_SECS", raw.clone()))?;
                (secs > 0).then(|| Duration::from_secs(secs))
            }
        };

        Ok(Self {
            backend_url,
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            session_key: get("SESSION_KEY"),
            telegram_bot_name: get("TELEGRAM_BOT_NAME").unwrap_or_else(|| DEFAULT_BOT_NAME.to_string()),
            dev_auth: get("DEV_AUTH").as_deref().is_some_and(is_truthy),
            backend_timeout,
            cookie_secure: get("COOKIE_SECURE").as_deref().is_some_and(is_truthy),
        })
    }

    /// Defaults pointing at a local backend (for tests).
    pub fn local(backend_url: &str) -> Result<Self, ConfigError> {
        let backend_url = backend_url.to_string();
        Self::from_lookup(move |key| (key == "BACKEND_URL").then(|| backend_url.clone()))
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid BACKEND_URL {0}: {1}")]
    InvalidUrl(String, String),
    #[error("{0} must be a whole number of seconds, got {1:?}")]
    InvalidNumber(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let cfg = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.backend_url.as_str(), "http://localhost:3000/");
        assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(cfg.telegram_bot_name, DEFAULT_BOT_NAME);
        assert!(!cfg.dev_auth);
        assert!(cfg.backend_timeout.is_none());
        assert!(cfg.session_key.is_none());
    }

    #[test]
    fn reads_overrides() {
        let cfg = AppConfig::from_lookup(lookup(&[
            ("BACKEND_URL", "https://bot.example.kz/api"),
            ("DEV_AUTH", "true"),
            ("BACKEND_TIMEOUT_SECS", "15"),
            ("COOKIE_SECURE", "1"),
        ]))
        .unwrap();
        assert_eq!(cfg.backend_url.as_str(), "https://bot.example.kz/api");
        assert!(cfg.dev_auth);
        assert!(cfg.cookie_secure);
        assert_eq!(cfg.backend_timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(AppConfig::from_lookup(lookup(&[("BACKEND_URL", "not a url")])).is_err());
        assert!(AppConfig::from_lookup(lookup(&[("BACKEND_TIMEOUT_SECS", "soon")])).is_err());
    }

    #[test]
    fn debug_redacts_session_key() {
        let cfg = AppConfig::from_lookup(lookup(&[("SESSION_KEY", "super-secret")])).unwrap();
        let printed = format!("{cfg:?}");
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("[REDACTED]"));
    }
}
