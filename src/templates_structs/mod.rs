// Template context structures for Askama templates, organized by domain.

use actix_session::Session;

use crate::auth::csrf;
use crate::auth::session::{get_user, take_flash};
use crate::models::case::CaseCategory;

mod case;
mod common;
mod dashboard;

pub use self::case::{CaseEditTemplate, CaseListTemplate, CaseNewTemplate, LawyerOption, NewCaseValues};
pub use self::common::LoginTemplate;
pub use self::dashboard::DashboardTemplate;

pub const APP_NAME: &str = "Prime Legal CRM";

/// One entry of the status-board navigation.
pub struct NavLink {
    pub href: String,
    pub label: &'static str,
    pub active: bool,
}

/// Common context shared by all authenticated pages.
/// Templates access these as `ctx.display_name`, `ctx.nav`, etc.
pub struct PageContext {
    pub display_name: String,
    pub avatar_initial: String,
    pub role_label: String,
    /// Deleting is lawyer-only on the backend; assistants get no delete button.
    pub is_lawyer: bool,
    pub flash: Option<String>,
    pub nav: Vec<NavLink>,
    pub app_name: &'static str,
    pub csrf_token: String,
    pub current_path: String,
}

impl PageContext {
    pub fn build(session: &Session, current_path: &str) -> Self {
        let user = get_user(session);
        let display_name = user.as_ref().map(|u| u.name.clone()).filter(|n| !n.is_empty()).unwrap_or_else(|| "Пользователь".to_string());
        let avatar_initial = display_name.chars().next().unwrap_or('?').to_uppercase().to_string();
        let role_label = user.as_ref().map(|u| u.role_label().to_string()).unwrap_or_default();
        let is_lawyer = user.as_ref().is_some_and(|u| u.is_lawyer());
        let nav = CaseCategory::all()
            .map(|c| {
                let href = c.href();
                NavLink { active: current_path == href, href, label: c.0.label() }
            })
            .collect();
        Self {
            display_name,
            avatar_initial,
            role_label,
            is_lawyer,
            flash: take_flash(session),
            nav,
            app_name: APP_NAME,
            csrf_token: csrf::get_or_create_token(session),
            current_path: current_path.to_string(),
        }
    }
}
