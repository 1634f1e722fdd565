use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::auth::csrf;
use crate::auth::session::{require_token, set_flash};
use crate::auth::validate::validate_new_case;
use crate::backend::BackendClient;
use crate::errors::{render, see_other, AppError};
use crate::models::case::NewCaseForm;
use crate::models::user::Lawyer;
use crate::templates_structs::{CaseNewTemplate, NewCaseValues, PageContext};

pub const CREATE_FAILED: &str = "Ошибка при создании дела";

async fn load_lawyers(backend: &BackendClient, token: &str) -> Result<Vec<Lawyer>, AppError> {
    match backend.cases(token).lawyers().await {
        Ok(lawyers) => Ok(lawyers),
        Err(e) if e.is_unauthorized() => Err(e.into()),
        Err(e) => {
            log::error!("Ошибка при получении списка юристов: {e}");
            Ok(Vec::new())
        }
    }
}

/// GET /cases/new
pub async fn new_form(
    backend: web::Data<BackendClient>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let token = require_token(&session)?;
    let lawyers = load_lawyers(&backend, &token).await?;
    let ctx = PageContext::build(&session, "/cases/new");
    render(CaseNewTemplate::new(ctx, NewCaseValues::default(), &lawyers, vec![]))
}

/// POST /cases
pub async fn create(
    backend: web::Data<BackendClient>,
    session: Session,
    form: web::Form<NewCaseForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let token = require_token(&session)?;

    let errors = match validate_new_case(&form) {
        Ok(new_case) => match backend.cases(&token).create(&new_case).await {
            Ok(()) => {
                set_flash(&session, &format!("Дело {} создано", new_case.number));
                return Ok(see_other("/cases/submitted"));
            }
            Err(e) if e.is_unauthorized() => return Err(e.into()),
            Err(e) => {
                log::error!("{CREATE_FAILED}: {e}");
                vec![CREATE_FAILED.to_string()]
            }
        },
        Err(errors) => errors,
    };

    let lawyers = load_lawyers(&backend, &token).await?;
    let ctx = PageContext::build(&session, "/cases/new");
    let form = form.into_inner();
    let values = NewCaseValues {
        number: form.number,
        title: form.title,
        description: form.description,
        filing_date: form.filing_date,
        responsible_id: form.responsible_id,
    };
    render(CaseNewTemplate::new(ctx, values, &lawyers, errors))
}
