use futures::future::join_all;
use serde_json::Value;

use super::{from_value, read_json, send, unwrap_data, BackendClient, BackendError};
use crate::models::case::{Case, CaseCategory, CaseUpdateCall, NewCase};
use crate::models::user::Lawyer;

/// Case endpoints bound to one user's token.
#[derive(Debug, Clone, Copy)]
pub struct CaseApi<'a> {
    client: &'a BackendClient,
    token: &'a str,
}

impl<'a> CaseApi<'a> {
    pub(crate) fn new(client: &'a BackendClient, token: &'a str) -> Self {
        Self { client, token }
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.http().get(self.client.url(path)).bearer_auth(self.token)
    }

    /// All cases on one board. A payload that is neither a list nor
    /// `{"data": [...]}` reads as an empty board.
    pub async fn list(&self, category: CaseCategory) -> Result<Vec<Case>, BackendError> {
        let path = category.backend_path();
        let endpoint = format!("GET {path}");
        let resp = send(&endpoint, self.get(path)).await?;
        let value = unwrap_data(read_json(&endpoint, resp).await?);
        match value {
            Value::Array(_) => from_value(&endpoint, value),
            other => {
                log::warn!("{endpoint} returned a non-list payload ({}), showing no cases", kind(&other));
                Ok(Vec::new())
            }
        }
    }

    /// One case, or `None` when the backend does not know the id.
    pub async fn get_case(&self, id: i64) -> Result<Option<Case>, BackendError> {
        let path = format!("cases/{id}");
        let endpoint = format!("GET {path}");
        match send(&endpoint, self.get(&path)).await {
            Ok(resp) => {
                let value = unwrap_data(read_json(&endpoint, resp).await?);
                from_value(&endpoint, value).map(Some)
            }
            Err(BackendError::Status { status: 404, .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn create(&self, new_case: &NewCase) -> Result<(), BackendError> {
        let endpoint = "POST cases";
        let request = self
            .client
            .http()
            .post(self.client.url("cases"))
            .bearer_auth(self.token)
            .json(new_case);
        send(endpoint, request).await?;
        log::info!("Created case {}", new_case.number);
        Ok(())
    }

    /// Delete a case. Use [`super::delete_failure_message`] for what to tell the user.
    pub async fn delete(&self, id: i64) -> Result<(), BackendError> {
        let path = format!("cases/{id}");
        let endpoint = format!("DELETE {path}");
        let request = self.client.http().delete(self.client.url(&path)).bearer_auth(self.token);
        send(&endpoint, request).await?;
        log::info!("Deleted case {id}");
        Ok(())
    }

    /// Lawyers that can be made responsible for a new case.
    pub async fn lawyers(&self) -> Result<Vec<Lawyer>, BackendError> {
        let endpoint = "GET users?role=lawyer";
        let request = self
            .client
            .http()
            .get(self.client.url("users"))
            .query(&[("role", "lawyer")])
            .bearer_auth(self.token);
        let resp = send(endpoint, request).await?;
        let value = unwrap_data(read_json(endpoint, resp).await?);
        from_value(endpoint, value)
    }

    /// Issue every update call concurrently and wait for all of them.
    ///
    /// Calls are independent: a failure does not stop or undo the others.
    pub async fn apply_updates(&self, case_id: i64, calls: &[CaseUpdateCall]) -> UpdateReport {
        let pending = calls.iter().map(|call| {
            let path = call.path(case_id);
            let endpoint = format!("PATCH {path}");
            let request = self
                .client
                .http()
                .patch(self.client.url(&path))
                .bearer_auth(self.token)
                .json(&call.body());
            async move {
                let result = send(&endpoint, request).await.map(|_| ());
                CallOutcome { endpoint, result }
            }
        });
        let outcomes = join_all(pending).await;

        let report = UpdateReport { outcomes };
        if report.all_succeeded() {
            log::info!("Updated case {case_id} with {} call(s)", report.outcomes.len());
        } else {
            for (index, outcome) in report.outcomes.iter().enumerate() {
                if !outcome.is_success() {
                    log::error!("Case {case_id} update call {} failed: {}", index + 1, outcome.summary());
                }
            }
        }
        report
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Result of one PATCH issued by [`CaseApi::apply_updates`].
#[derive(Debug)]
pub struct CallOutcome {
    pub endpoint: String,
    pub result: Result<(), BackendError>,
}

impl CallOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    /// Endpoint plus status code, or the network failure.
    pub fn summary(&self) -> String {
        match &self.result {
            Ok(()) => format!("{}: OK", self.endpoint),
            Err(e) => match e.status() {
                Some(status) => format!("{}: HTTP {status}", self.endpoint),
                None => format!("{}: {e}", self.endpoint),
            },
        }
    }
}

/// Joined outcome of a save. Succeeds only if every call did.
#[derive(Debug, Default)]
pub struct UpdateReport {
    pub outcomes: Vec<CallOutcome>,
}

impl UpdateReport {
    pub fn all_succeeded(&self) -> bool {
        self.outcomes.iter().all(CallOutcome::is_success)
    }

    pub fn failures(&self) -> impl Iterator<Item = &CallOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    pub fn unauthorized(&self) -> bool {
        self.outcomes
            .iter()
            .any(|o| o.result.as_ref().is_err_and(BackendError::is_unauthorized))
    }

    /// Status codes of failed calls, in issue order; `None` for network failures.
    pub fn failed_statuses(&self) -> Vec<Option<u16>> {
        self.failures()
            .map(|o| o.result.as_ref().err().and_then(BackendError::status))
            .collect()
    }
}
