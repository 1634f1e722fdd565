use askama::Template;

use crate::models::case::CaseCard;
use super::PageContext;

/// Landing page after sign-in: greeting plus the submitted board.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub ctx: PageContext,
    pub greeting: String,
    pub cases: Vec<CaseCard>,
    pub load_error: Option<String>,
}
