mod category;
mod display;
pub mod format;
mod status;
mod types;
mod update;

pub use self::category::CaseCategory;
pub use self::display::{status_options, CaseCard, DetailRow, EditFormValues, StatusOption};
pub use self::status::{available_transitions, status_label, CaseStatus};
pub use self::types::{Case, EditCaseForm, NewCase, NewCaseForm, NotificationsSent};
pub use self::update::{compose_updates, CaseUpdateCall, UpdateIntent, HEARING_REQUIRED};
