use askama::Template;

use crate::models::case::{CaseCard, EditFormValues, StatusOption};
use crate::models::user::Lawyer;
use super::PageContext;

#[derive(Template)]
#[template(path = "cases/list.html")]
pub struct CaseListTemplate {
    pub ctx: PageContext,
    pub title: &'static str,
    pub empty_message: &'static str,
    pub cases: Vec<CaseCard>,
    pub load_error: Option<String>,
}

#[derive(Template)]
#[template(path = "cases/edit.html")]
pub struct CaseEditTemplate {
    pub ctx: PageContext,
    pub case: CaseCard,
    pub status_options: Vec<StatusOption>,
    pub values: EditFormValues,
    pub back_href: String,
    pub errors: Vec<String>,
}

/// Values typed into the create form, echoed back after a failed submit.
#[derive(Default)]
pub struct NewCaseValues {
    pub number: String,
    pub title: String,
    pub description: String,
    pub filing_date: String,
    pub responsible_id: String,
}

/// One entry of the responsible-lawyer dropdown.
pub struct LawyerOption {
    pub id: i64,
    pub name: String,
    pub selected: bool,
}

#[derive(Template)]
#[template(path = "cases/new.html")]
pub struct CaseNewTemplate {
    pub ctx: PageContext,
    pub values: NewCaseValues,
    pub lawyers: Vec<LawyerOption>,
    pub errors: Vec<String>,
}

impl CaseNewTemplate {
    pub fn new(ctx: PageContext, values: NewCaseValues, lawyers: &[Lawyer], errors: Vec<String>) -> Self {
        let lawyers = lawyers
            .iter()
            .map(|l| LawyerOption {
                id: l.id,
                name: l.name.clone(),
                selected: values.responsible_id == l.id.to_string(),
            })
            .collect();
        Self { ctx, values, lawyers, errors }
    }
}
