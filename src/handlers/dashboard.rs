use actix_session::Session;
use actix_web::{web, HttpResponse};
use chrono::{Local, Timelike};

use crate::auth::session::require_token;
use crate::backend::BackendClient;
use crate::errors::{render, AppError};
use crate::models::case::{CaseCard, CaseCategory, CaseStatus};
use crate::templates_structs::{DashboardTemplate, PageContext};

pub const LIST_FAILED: &str = "Ошибка при получении дел";

fn time_greeting(name: &str, hour: u32) -> String {
    let period = match hour {
        5..=11 => "Доброе утро",
        12..=16 => "Добрый день",
        _ => "Добрый вечер",
    };
    format!("{period}, {name}")
}

/// GET /dashboard
pub async fn index(
    backend: web::Data<BackendClient>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let token = require_token(&session)?;
    let ctx = PageContext::build(&session, "/dashboard");
    let greeting = time_greeting(&ctx.display_name, Local::now().hour());

    let (cases, load_error) = match backend.cases(&token).list(CaseCategory(CaseStatus::Submitted)).await {
        Ok(cases) => (cases.iter().map(CaseCard::from).collect(), None),
        Err(e) if e.is_unauthorized() => return Err(e.into()),
        Err(e) => {
            log::error!("{LIST_FAILED}: {e}");
            (Vec::new(), Some(LIST_FAILED.to_string()))
        }
    };

    render(DashboardTemplate { ctx, greeting, cases, load_error })
}
