use actix_session::Session;
use rand::Rng;

use crate::errors::AppError;

const CSRF_KEY: &str = "csrf_token";

/// Token for the hidden `csrf_token` input of every form, created on first use.
///
/// Survives `Session::renew` at sign-in, so the login page's token stays
/// valid for the forms after it; `purge` at logout drops it.
pub fn get_or_create_token(session: &Session) -> String {
    if let Ok(Some(token)) = session.get::<String>(CSRF_KEY) {
        return token;
    }
    let token = generate_token();
    let _ = session.insert(CSRF_KEY, &token);
    token
}

/// Check a submitted form token. A session that never rendered a form has none.
pub fn validate_csrf(session: &Session, submitted: &str) -> Result<(), AppError> {
    match session.get::<String>(CSRF_KEY).unwrap_or(None) {
        None => Err(AppError::Csrf("no token in session".to_string())),
        Some(stored) if !constant_time_eq(&stored, submitted) => {
            Err(AppError::Csrf("token mismatch".to_string()))
        }
        Some(_) => Ok(()),
    }
}

fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    hex::encode(bytes)
}

fn constant_time_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.bytes()
        .zip(b.bytes())
        .fold(0u8, |acc, (x, y)| acc | (x ^ y))
        == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_64_hex_chars_and_unique() {
        let a = generate_token();
        let b = generate_token();
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }

    #[test]
    fn constant_time_eq_compares_content() {
        assert!(constant_time_eq("abc", "abc"));
        assert!(!constant_time_eq("abc", "abd"));
        assert!(!constant_time_eq("abc", "abcd"));
    }
}
