use actix_session::Session;
use actix_web::{web, HttpResponse};
use chrono::Local;

use crate::auth::csrf;
use crate::auth::session::{require_token, set_flash};
use crate::backend::{BackendClient, BackendError};
use crate::errors::{render, see_other, AppError};
use crate::models::case::{
    compose_updates, status_options, Case, CaseCard, CaseCategory, EditCaseForm, EditFormValues, UpdateIntent,
};
use crate::templates_structs::{CaseEditTemplate, PageContext};

pub const UPDATE_FAILED: &str = "Ошибка при обновлении дела";
pub const CASE_NOT_FOUND: &str = "Дело не найдено";

async fn fetch_case(backend: &BackendClient, token: &str, id: i64) -> Result<Option<Case>, AppError> {
    Ok(backend.cases(token).get_case(id).await?)
}

fn edit_page(
    session: &Session,
    case: &Case,
    selected: &str,
    values: EditFormValues,
    errors: Vec<String>,
) -> Result<HttpResponse, AppError> {
    let back_href = CaseCategory::for_status(&case.status).href();
    let ctx = PageContext::build(session, &back_href);
    render(CaseEditTemplate {
        ctx,
        case: CaseCard::from(case),
        status_options: status_options(&case.status, selected),
        values,
        back_href,
        errors,
    })
}

/// GET /cases/{id}/edit
pub async fn edit_form(
    backend: web::Data<BackendClient>,
    session: Session,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let token = require_token(&session)?;
    let id = path.into_inner();

    let Some(case) = fetch_case(&backend, &token, id).await? else {
        set_flash(&session, CASE_NOT_FOUND);
        return Ok(see_other("/dashboard"));
    };
    edit_page(&session, &case, &case.status, EditFormValues::from(&case), vec![])
}

/// POST /cases/{id}
///
/// Composes the PATCH calls against the case as the backend has it now,
/// issues them together and only returns to the board when all succeeded.
pub async fn update(
    backend: web::Data<BackendClient>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<EditCaseForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let token = require_token(&session)?;
    let id = path.into_inner();

    let Some(case) = fetch_case(&backend, &token, id).await? else {
        set_flash(&session, CASE_NOT_FOUND);
        return Ok(see_other("/dashboard"));
    };

    let submitted = EditFormValues {
        hearing_date: form.hearing_date.clone(),
        hearing_time: form.hearing_time.clone(),
        acceptance_date: form.acceptance_date.clone(),
        return_date: form.return_date.clone(),
        appeal_hearing_date: form.appeal_hearing_date.clone(),
    };

    let intent = match UpdateIntent::from_form(&form) {
        Ok(intent) => intent,
        Err(message) => return edit_page(&session, &case, &form.status, submitted, vec![message]),
    };

    let calls = compose_updates(&case, &intent, Local::now().date_naive());
    log::debug!("Case {id}: {} update call(s) for status {}", calls.len(), intent.status);
    let report = backend.cases(&token).apply_updates(id, &calls).await;

    if report.unauthorized() {
        return Err(BackendError::Unauthorized { endpoint: format!("PATCH cases/{id}") }.into());
    }
    if report.all_succeeded() {
        set_flash(&session, &format!("Дело {} обновлено", case.number));
        return Ok(see_other(CaseCategory::for_status(&case.status).href()));
    }

    let mut errors = vec![UPDATE_FAILED.to_string()];
    errors.extend(
        report
            .outcomes
            .iter()
            .enumerate()
            .filter(|(_, outcome)| !outcome.is_success())
            .map(|(index, outcome)| format!("Ошибка в запросе {}: {}", index + 1, outcome.summary())),
    );
    edit_page(&session, &case, &form.status, submitted, errors)
}
