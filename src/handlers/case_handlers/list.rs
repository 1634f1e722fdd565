use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::auth::session::require_token;
use crate::backend::BackendClient;
use crate::errors::{render, AppError};
use crate::handlers::dashboard::LIST_FAILED;
use crate::models::case::{CaseCard, CaseCategory};
use crate::templates_structs::{CaseListTemplate, PageContext};

/// GET /cases/{category} — one status board, fetched fresh on every load.
pub async fn list(
    backend: web::Data<BackendClient>,
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let category = CaseCategory::from_slug(&path.into_inner()).ok_or(AppError::NotFound)?;
    let token = require_token(&session)?;
    let ctx = PageContext::build(&session, &category.href());

    let (cases, load_error) = match backend.cases(&token).list(category).await {
        Ok(cases) => (cases.iter().map(CaseCard::from).collect(), None),
        Err(e) if e.is_unauthorized() => return Err(e.into()),
        Err(e) => {
            log::error!("{LIST_FAILED} ({}): {e}", category.slug());
            (Vec::new(), Some(LIST_FAILED.to_string()))
        }
    };

    render(CaseListTemplate {
        ctx,
        title: category.title(),
        empty_message: category.empty_message(),
        cases,
        load_error,
    })
}
