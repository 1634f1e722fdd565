use actix_session::Session;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::auth::csrf;
use crate::auth::session::{get_token, set_user, sign_in};
use crate::backend::{BackendClient, TelegramLogin};
use crate::config::AppConfig;
use crate::errors::{render, see_other, AppError};
use crate::models::user::{DevRole, User};
use crate::templates_structs::{LoginTemplate, APP_NAME};

pub const TELEGRAM_LOGIN_FAILED: &str = "Ошибка авторизации. Пожалуйста, попробуйте снова.";
pub const DEV_LOGIN_FAILED: &str = "Ошибка dev авторизации";
pub const SESSION_EXPIRED: &str = "Сессия истекла. Войдите снова.";

#[derive(Deserialize)]
pub struct CsrfOnly {
    pub csrf_token: String,
}

#[derive(Deserialize)]
pub struct LoginQuery {
    #[serde(default)]
    pub expired: Option<String>,
}

fn login_template(session: &Session, config: &AppConfig, error: Option<String>, notice: Option<String>) -> LoginTemplate {
    LoginTemplate {
        error,
        notice,
        app_name: APP_NAME,
        csrf_token: csrf::get_or_create_token(session),
        bot_name: config.telegram_bot_name.clone(),
        dev_auth: config.dev_auth,
    }
}

/// GET /login
pub async fn login_page(
    backend: web::Data<BackendClient>,
    config: web::Data<AppConfig>,
    session: Session,
    query: web::Query<LoginQuery>,
) -> Result<HttpResponse, AppError> {
    // A token from an earlier visit is only trusted once the backend confirms it.
    if let Some(token) = get_token(&session) {
        match backend.auth().me(&token).await {
            Ok(user) => {
                set_user(&session, &user);
                return Ok(see_other("/dashboard"));
            }
            Err(e) => {
                // A purged session drops later inserts, so the form's CSRF
                // token needs a fresh request.
                log::info!("Discarding stored token: {e}");
                session.purge();
                return Ok(see_other("/login"));
            }
        }
    }

    let notice = query.expired.as_ref().map(|_| SESSION_EXPIRED.to_string());
    render(login_template(&session, &config, None, notice))
}

/// GET /auth/telegram — target of the login widget's `data-auth-url`.
pub async fn telegram_callback(
    backend: web::Data<BackendClient>,
    config: web::Data<AppConfig>,
    session: Session,
    query: Option<web::Query<TelegramLogin>>,
) -> Result<HttpResponse, AppError> {
    let Some(login) = query else {
        log::warn!("Telegram callback without a complete widget payload");
        return render(login_template(&session, &config, Some(TELEGRAM_LOGIN_FAILED.to_string()), None));
    };

    log::info!("Telegram auth received for id {}", login.id);
    match backend.auth().login_telegram(&login).await {
        Ok((token, user)) => {
            complete_sign_in(&backend, &session, &token, user).await?;
            Ok(see_other("/dashboard"))
        }
        Err(e) => {
            log::error!("Login error: {e}");
            render(login_template(&session, &config, Some(TELEGRAM_LOGIN_FAILED.to_string()), None))
        }
    }
}

/// POST /auth/dev/{role} — only routed to when DEV_AUTH is on.
pub async fn dev_login(
    backend: web::Data<BackendClient>,
    config: web::Data<AppConfig>,
    session: Session,
    path: web::Path<String>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    if !config.dev_auth {
        return Err(AppError::NotFound);
    }
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let role = DevRole::parse(&path.into_inner()).ok_or(AppError::NotFound)?;

    match backend.auth().dev_token(role).await {
        Ok((token, user)) => {
            complete_sign_in(&backend, &session, &token, user).await?;
            Ok(see_other("/dashboard"))
        }
        Err(e) => {
            log::error!("Dev login failed: {e}");
            render(login_template(&session, &config, Some(DEV_LOGIN_FAILED.to_string()), None))
        }
    }
}

// Store the token; fetch the profile when the login response left it out.
async fn complete_sign_in(
    backend: &BackendClient,
    session: &Session,
    token: &str,
    user: Option<User>,
) -> Result<(), AppError> {
    let user = match user {
        Some(user) => Some(user),
        None => backend.auth().me(token).await.ok(),
    };
    sign_in(session, token, user.as_ref())?;
    if let Some(user) = &user {
        log::info!("User {} ({}) signed in", user.id, user.role);
    }
    Ok(())
}

/// POST /logout
pub async fn logout(
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    session.purge();
    Ok(see_other("/login"))
}

/// GET /session/expired — where a 401 from the backend lands.
pub async fn session_expired(session: Session) -> HttpResponse {
    session.purge();
    see_other("/login?expired=1")
}
