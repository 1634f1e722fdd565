//! Translating an edit-form submission into backend PATCH calls.
//!
//! The backend exposes one endpoint per field group rather than a single
//! update, so a save may fan out into several calls. `compose_updates` is
//! pure: it decides which calls to make and with what payload, and the
//! backend client executes them.

use chrono::NaiveDate;
use serde_json::{json, Map, Value};

use super::format::{date_differs, date_part, datetime_differs};
use super::status::CaseStatus;
use super::types::{Case, EditCaseForm};

pub const HEARING_REQUIRED: &str = "Дата и время заседания обязательны для заполнения";

/// What the user asked for on the edit form. `None` means the field was left empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateIntent {
    pub status: String,
    /// `YYYY-MM-DDTHH:MM`
    pub hearing_date: Option<String>,
    /// `YYYY-MM-DD`
    pub acceptance_date: Option<String>,
    /// `YYYY-MM-DD`
    pub return_date: Option<String>,
    pub appeal_hearing_date: Option<String>,
}

impl UpdateIntent {
    pub fn new(status: impl Into<String>) -> Self {
        Self { status: status.into(), ..Self::default() }
    }

    /// Build an intent from the submitted form, rejecting it before any
    /// request is made when a required field is missing.
    pub fn from_form(form: &EditCaseForm) -> Result<Self, String> {
        let status = form.status.trim().to_string();
        let target = CaseStatus::parse(&status);
        let hearing_date = non_empty(&form.hearing_date);
        let hearing_time = non_empty(&form.hearing_time);

        if target == Some(CaseStatus::DecisionMade) && (hearing_date.is_none() || hearing_time.is_none()) {
            return Err(HEARING_REQUIRED.to_string());
        }

        // A returned case has no hearing; its date input is the return date.
        let hearing = match (target, hearing_date, hearing_time) {
            (Some(CaseStatus::Returned), _, _) => None,
            (_, Some(date), Some(time)) => Some(format!("{date}T{time}")),
            _ => None,
        };

        Ok(Self {
            status,
            hearing_date: hearing,
            acceptance_date: non_empty(&form.acceptance_date),
            return_date: non_empty(&form.return_date),
            appeal_hearing_date: non_empty(&form.appeal_hearing_date),
        })
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// One outbound PATCH against `/cases/{id}/...`.
#[derive(Debug, Clone, PartialEq)]
pub enum CaseUpdateCall {
    /// Composite call that moves a case to `accepted` and sets its dates.
    Accept { accepted_date: Option<String>, hearing_date: Option<String> },
    Status {
        status: String,
        return_date: Option<String>,
        appeal_hearing_date: Option<String>,
    },
    Hearing { hearing_date: String },
    AcceptedDate { accepted_date: String },
    ReturnDate { return_date: String },
    AppealHearing { appeal_hearing_date: String },
}

impl CaseUpdateCall {
    /// Last path segment of the endpoint.
    pub fn endpoint(&self) -> &'static str {
        match self {
            CaseUpdateCall::Accept { .. } => "accept",
            CaseUpdateCall::Status { .. } => "status",
            CaseUpdateCall::Hearing { .. } => "hearing",
            CaseUpdateCall::AcceptedDate { .. } => "accepted-date",
            CaseUpdateCall::ReturnDate { .. } => "return-date",
            CaseUpdateCall::AppealHearing { .. } => "appeal-hearing",
        }
    }

    /// Path relative to the API base.
    pub fn path(&self, case_id: i64) -> String {
        format!("cases/{case_id}/{}", self.endpoint())
    }

    pub fn body(&self) -> Value {
        match self {
            CaseUpdateCall::Accept { accepted_date, hearing_date } => {
                let mut body = Map::new();
                insert_opt(&mut body, "accepted_date", accepted_date);
                insert_opt(&mut body, "hearing_date", hearing_date);
                Value::Object(body)
            }
            CaseUpdateCall::Status { status, return_date, appeal_hearing_date } => {
                let mut body = Map::new();
                body.insert("status".into(), Value::String(status.clone()));
                insert_opt(&mut body, "return_date", return_date);
                insert_opt(&mut body, "appeal_hearing_date", appeal_hearing_date);
                Value::Object(body)
            }
            CaseUpdateCall::Hearing { hearing_date } => json!({ "hearing_date": hearing_date }),
            CaseUpdateCall::AcceptedDate { accepted_date } => json!({ "accepted_date": accepted_date }),
            CaseUpdateCall::ReturnDate { return_date } => json!({ "return_date": return_date }),
            CaseUpdateCall::AppealHearing { appeal_hearing_date } => {
                json!({ "appeal_hearing_date": appeal_hearing_date })
            }
        }
    }
}

fn insert_opt(body: &mut Map<String, Value>, key: &str, value: &Option<String>) {
    if let Some(v) = value {
        body.insert(key.to_string(), Value::String(v.clone()));
    }
}

/// Decide which calls a save needs, given the case as currently stored.
///
/// `today` fills in the acceptance date when a returned case gets new
/// dates but has never had one.
pub fn compose_updates(case: &Case, intent: &UpdateIntent, today: NaiveDate) -> Vec<CaseUpdateCall> {
    let mut calls = Vec::new();
    let target = CaseStatus::parse(&intent.status);
    let to_accepted = target == Some(CaseStatus::Accepted);
    let was_returned = case.status == CaseStatus::Returned.as_str();

    if intent.status != case.status {
        calls.push(match target {
            Some(CaseStatus::Accepted) => CaseUpdateCall::Accept {
                accepted_date: intent.acceptance_date.clone(),
                hearing_date: intent.hearing_date.clone(),
            },
            Some(CaseStatus::Returned) => CaseUpdateCall::Status {
                status: intent.status.clone(),
                return_date: intent.return_date.clone(),
                appeal_hearing_date: None,
            },
            Some(CaseStatus::Appeal) => CaseUpdateCall::Status {
                status: intent.status.clone(),
                return_date: None,
                appeal_hearing_date: intent.appeal_hearing_date.clone(),
            },
            _ => CaseUpdateCall::Status {
                status: intent.status.clone(),
                return_date: None,
                appeal_hearing_date: None,
            },
        });
    }

    let hearing_changed = intent
        .hearing_date
        .as_deref()
        .is_some_and(|h| datetime_differs(h, case.hearing_date.as_deref()));
    let acceptance_changed = intent
        .acceptance_date
        .as_deref()
        .is_some_and(|a| date_differs(a, case.accepted_date.as_deref()));

    if !to_accepted {
        if was_returned {
            // The dedicated date endpoints reject returned cases; dates go through /accept.
            if hearing_changed || acceptance_changed {
                let accepted_date = intent
                    .acceptance_date
                    .clone()
                    .or_else(|| case.accepted_date.as_deref().map(|d| date_part(d).to_string()))
                    .unwrap_or_else(|| today.format("%Y-%m-%d").to_string());
                calls.push(CaseUpdateCall::Accept {
                    accepted_date: Some(accepted_date),
                    hearing_date: intent.hearing_date.clone(),
                });
            }
        } else {
            if let (true, Some(h)) = (hearing_changed, &intent.hearing_date) {
                calls.push(CaseUpdateCall::Hearing { hearing_date: h.clone() });
            }
            if let (true, Some(a)) = (acceptance_changed, &intent.acceptance_date) {
                calls.push(CaseUpdateCall::AcceptedDate { accepted_date: a.clone() });
            }
        }
    }

    if was_returned {
        if let Some(r) = &intent.return_date {
            if date_differs(r, case.return_date.as_deref()) {
                calls.push(CaseUpdateCall::ReturnDate { return_date: r.clone() });
            }
        }
    }

    if let Some(a) = &intent.appeal_hearing_date {
        if datetime_differs(a, case.appeal_hearing_date.as_deref()) {
            calls.push(CaseUpdateCall::AppealHearing { appeal_hearing_date: a.clone() });
        }
    }

    calls
}
