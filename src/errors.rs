use actix_web::{HttpResponse, ResponseError};
use askama::Template;
use std::fmt;

use crate::backend::BackendError;

/// Body of every 404, from the route table's default service or a handler.
pub const NOT_FOUND_PAGE: &str = include_str!("../templates/errors/404.html");

#[derive(Debug)]
pub enum AppError {
    Backend(BackendError),
    Template(askama::Error),
    Session(String),
    Csrf(String),
    NotFound,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Backend(e) => write!(f, "Backend error: {e}"),
            AppError::Template(e) => write!(f, "Template error: {e}"),
            AppError::Session(e) => write!(f, "Session error: {e}"),
            AppError::Csrf(e) => write!(f, "CSRF error: {e}"),
            AppError::NotFound => write!(f, "Not found"),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::NotFound => not_found(),
            // Rejected token: end the session and send the user back to login.
            AppError::Backend(e) if e.is_unauthorized() => HttpResponse::SeeOther()
                .insert_header(("Location", "/session/expired"))
                .finish(),
            AppError::Session(_) => HttpResponse::SeeOther()
                .insert_header(("Location", "/login"))
                .finish(),
            AppError::Csrf(e) => {
                log::warn!("Rejected form: {e}");
                HttpResponse::Forbidden().body("Invalid or missing CSRF token")
            }
            AppError::Backend(e) if e.is_network() => {
                log::error!("{self}");
                HttpResponse::BadGateway().body("Ошибка сети")
            }
            _ => {
                log::error!("{self}");
                HttpResponse::InternalServerError().body("Internal Server Error")
            }
        }
    }
}

impl From<BackendError> for AppError {
    fn from(e: BackendError) -> Self {
        AppError::Backend(e)
    }
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        AppError::Template(e)
    }
}

pub fn not_found() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body(NOT_FOUND_PAGE)
}

/// Render a template into a 200 HTML response.
pub fn render(tmpl: impl Template) -> Result<HttpResponse, AppError> {
    let body = tmpl.render()?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body))
}

/// 303 to `location`, the post/redirect/get step after every form.
pub fn see_other(location: impl AsRef<str>) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", location.as_ref()))
        .finish()
}
