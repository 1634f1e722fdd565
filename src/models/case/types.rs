use serde::{Deserialize, Serialize};

use crate::models::user::Responsible;

/// Case as returned by the backend. Optional fields accept both absence and `null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Case {
    pub id: i64,
    pub number: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Kept verbatim so a status this build does not know still renders.
    pub status: String,
    #[serde(default)]
    pub filing_date: Option<String>,
    #[serde(default)]
    pub check_deadline: Option<String>,
    #[serde(default)]
    pub hearing_date: Option<String>,
    #[serde(default)]
    pub accepted_date: Option<String>,
    #[serde(default)]
    pub decision_date: Option<String>,
    #[serde(default)]
    pub decision_deadline: Option<String>,
    #[serde(default)]
    pub appeal_hearing_date: Option<String>,
    #[serde(default)]
    pub appeal_deadline: Option<String>,
    #[serde(default)]
    pub case_end_date: Option<String>,
    #[serde(default)]
    pub return_date: Option<String>,
    #[serde(default)]
    pub return_reason: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub notifications_sent: Option<NotificationsSent>,
    pub responsible: Responsible,
}

/// Reminder bookkeeping the backend's notifier keeps per case.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationsSent {
    #[serde(default)]
    pub day_before: Option<bool>,
    #[serde(default)]
    pub hour_before: Option<bool>,
    #[serde(default)]
    pub check_reminder: Option<bool>,
    #[serde(default)]
    pub day_before_sent_at: Option<String>,
    #[serde(default)]
    pub hour_before_sent_at: Option<String>,
    #[serde(default)]
    pub check_reminder_sent_at: Option<String>,
}

/// Payload for `POST /cases`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCase {
    pub number: String,
    pub title: String,
    pub description: String,
    pub filing_date: String,
    pub responsible_id: i64,
}

/// Form data from the create-case form.
#[derive(Debug, Deserialize)]
pub struct NewCaseForm {
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub filing_date: String,
    #[serde(default)]
    pub responsible_id: String,
    pub csrf_token: String,
}

/// Form data from the edit-case form. Empty inputs arrive as empty strings.
#[derive(Debug, Deserialize)]
pub struct EditCaseForm {
    pub status: String,
    #[serde(default)]
    pub hearing_date: String,
    #[serde(default)]
    pub hearing_time: String,
    #[serde(default)]
    pub acceptance_date: String,
    #[serde(default)]
    pub return_date: String,
    #[serde(default)]
    pub appeal_hearing_date: String,
    pub csrf_token: String,
}
