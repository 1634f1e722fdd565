/// Errors from talking to the case backend.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("request to {endpoint} failed: {source}")]
    Network {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The bearer token was rejected; the session has to end.
    #[error("{endpoint} rejected the session token")]
    Unauthorized { endpoint: String },

    #[error("{endpoint} returned HTTP {status}: {body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error("could not read response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected payload from {endpoint}: {source}")]
    Payload {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{endpoint} did not return an access token")]
    MissingToken { endpoint: String },

    #[error("backend client setup failed: {0}")]
    Setup(String),
}

impl BackendError {
    /// HTTP status the backend answered with, if it answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            BackendError::Unauthorized { .. } => Some(401),
            BackendError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, BackendError::Unauthorized { .. })
    }

    pub fn is_network(&self) -> bool {
        matches!(self, BackendError::Network { .. })
    }
}

/// User-facing message for a failed case deletion.
pub fn delete_failure_message(err: &BackendError) -> &'static str {
    match err {
        BackendError::Network { .. } => "Ошибка сети при удалении дела",
        _ => match err.status() {
            Some(403) => "Только юристы могут удалять дела",
            Some(404) => "Дело не найдено",
            _ => "Ошибка при удалении дела",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(code: u16) -> BackendError {
        BackendError::Status { endpoint: "DELETE cases/1".into(), status: code, body: String::new() }
    }

    #[test]
    fn delete_messages_by_status() {
        assert_eq!(delete_failure_message(&status(403)), "Только юристы могут удалять дела");
        assert_eq!(delete_failure_message(&status(404)), "Дело не найдено");
        assert_eq!(delete_failure_message(&status(500)), "Ошибка при удалении дела");
    }

    #[test]
    fn unauthorized_reports_401() {
        let err = BackendError::Unauthorized { endpoint: "GET auth/me".into() };
        assert_eq!(err.status(), Some(401));
        assert!(err.is_unauthorized());
    }
}
