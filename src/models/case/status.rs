use serde::{Deserialize, Serialize};
use std::fmt;

/// Workflow status of a case as the backend reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    Submitted,
    PendingCheck,
    Accepted,
    Returned,
    DecisionMade,
    Appeal,
    Closed,
}

impl CaseStatus {
    pub const ALL: [CaseStatus; 7] = [
        CaseStatus::Submitted,
        CaseStatus::PendingCheck,
        CaseStatus::Accepted,
        CaseStatus::Returned,
        CaseStatus::DecisionMade,
        CaseStatus::Appeal,
        CaseStatus::Closed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStatus::Submitted => "submitted",
            CaseStatus::PendingCheck => "pending_check",
            CaseStatus::Accepted => "accepted",
            CaseStatus::Returned => "returned",
            CaseStatus::DecisionMade => "decision_made",
            CaseStatus::Appeal => "appeal",
            CaseStatus::Closed => "closed",
        }
    }

    /// Parse a wire value. Unknown strings yield `None`.
    pub fn parse(value: &str) -> Option<CaseStatus> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }

    pub fn label(&self) -> &'static str {
        match self {
            CaseStatus::Submitted => "Подано в суд",
            CaseStatus::PendingCheck => "На проверке",
            CaseStatus::Accepted => "Принято",
            CaseStatus::Returned => "Возвращено",
            CaseStatus::Closed => "Дело закрыто",
            CaseStatus::DecisionMade => "Решение принято",
            CaseStatus::Appeal => "Обжалование",
        }
    }

    /// Statuses reachable from this one, in the order the edit form lists them.
    pub fn next(&self) -> &'static [CaseStatus] {
        use CaseStatus::*;
        match self {
            Submitted => &[PendingCheck, Accepted, Returned],
            PendingCheck => &[Accepted, Returned],
            Accepted => &[DecisionMade, Closed, Returned],
            DecisionMade => &[Appeal, Closed],
            Returned => &[Appeal, Closed, Submitted],
            Appeal => &[Closed],
            Closed => &[],
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.next().is_empty()
    }
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reachable statuses for a raw status string. Empty for `closed` and for
/// anything the table does not know.
pub fn available_transitions(current: &str) -> &'static [CaseStatus] {
    CaseStatus::parse(current).map(|s| s.next()).unwrap_or(&[])
}

/// Display label for a raw status string, falling back to the raw value.
pub fn status_label(raw: &str) -> String {
    CaseStatus::parse(raw)
        .map(|s| s.label().to_string())
        .unwrap_or_else(|| raw.to_string())
}
