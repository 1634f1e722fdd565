use actix_session::Session;

use crate::errors::AppError;
use crate::models::user::User;

const TOKEN_KEY: &str = "auth_token";
const USER_KEY: &str = "user";
const FLASH_KEY: &str = "flash";

/// Bearer token for the backend, if the session is signed in.
pub fn get_token(session: &Session) -> Option<String> {
    session.get::<String>(TOKEN_KEY).unwrap_or(None)
}

/// Token or a redirect to the login page.
pub fn require_token(session: &Session) -> Result<String, AppError> {
    get_token(session).ok_or_else(|| AppError::Session("Not authenticated".to_string()))
}

pub fn get_user(session: &Session) -> Option<User> {
    session.get::<User>(USER_KEY).unwrap_or(None)
}

/// Store a freshly issued token, and the user when the backend sent one.
pub fn sign_in(session: &Session, token: &str, user: Option<&User>) -> Result<(), AppError> {
    session.renew();
    session
        .insert(TOKEN_KEY, token)
        .map_err(|e| AppError::Session(format!("Failed to store token: {e}")))?;
    if let Some(user) = user {
        session
            .insert(USER_KEY, user)
            .map_err(|e| AppError::Session(format!("Failed to store user: {e}")))?;
    }
    Ok(())
}

pub fn set_user(session: &Session, user: &User) {
    let _ = session.insert(USER_KEY, user);
}

pub fn set_flash(session: &Session, message: &str) {
    let _ = session.insert(FLASH_KEY, message);
}

pub fn take_flash(session: &Session) -> Option<String> {
    let flash = session.get::<String>(FLASH_KEY).unwrap_or(None);
    if flash.is_some() {
        session.remove(FLASH_KEY);
    }
    flash
}
