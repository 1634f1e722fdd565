use actix_session::Session;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::auth::csrf;
use crate::auth::session::{require_token, set_flash};
use crate::backend::{delete_failure_message, BackendClient};
use crate::errors::{see_other, AppError};

#[derive(Deserialize)]
pub struct DeleteForm {
    pub csrf_token: String,
    /// Board to return to; anything outside `/cases/` falls back to the dashboard.
    #[serde(default)]
    pub back: String,
}

fn safe_back(back: &str) -> &str {
    let local = back.starts_with("/cases/") && !back.contains("//") && !back.contains('\\');
    if local { back } else { "/dashboard" }
}

/// POST /cases/{id}/delete — the browser asks for confirmation before submitting.
pub async fn delete(
    backend: web::Data<BackendClient>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<DeleteForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let token = require_token(&session)?;
    let id = path.into_inner();

    match backend.cases(&token).delete(id).await {
        Ok(()) => set_flash(&session, "Дело удалено"),
        Err(e) if e.is_unauthorized() => return Err(e.into()),
        Err(e) => {
            log::error!("Delete of case {id} failed: {e}");
            set_flash(&session, delete_failure_message(&e));
        }
    }
    Ok(see_other(safe_back(&form.back)))
}

#[cfg(test)]
mod tests {
    use super::safe_back;

    #[test]
    fn back_link_stays_on_case_boards() {
        assert_eq!(safe_back("/cases/returned"), "/cases/returned");
        assert_eq!(safe_back("https://evil.example"), "/dashboard");
        assert_eq!(safe_back("/cases//evil.example"), "/dashboard");
        assert_eq!(safe_back(""), "/dashboard");
    }
}
