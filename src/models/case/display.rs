use super::format::{date_part, format_date, format_datetime, time_part};
use super::status::{available_transitions, status_label};
use super::types::Case;

/// A labelled value on a case card.
#[derive(Debug, Clone)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
}

#[derive(Clone, Copy)]
enum Shown {
    Text,
    Date,
    DateTime,
}

/// Safe version for templates: everything pre-formatted.
#[derive(Debug, Clone)]
pub struct CaseCard {
    pub id: i64,
    pub number: String,
    pub title: String,
    pub description: String,
    pub status: String,
    pub status_label: String,
    pub responsible: String,
    pub details: Vec<DetailRow>,
    pub reminders: Vec<DetailRow>,
}

impl From<&Case> for CaseCard {
    fn from(c: &Case) -> Self {
        let mut details = vec![
            DetailRow { label: "Дата подачи", value: format_date(c.filing_date.as_deref()) },
            DetailRow { label: "Дата принятия", value: format_date(c.accepted_date.as_deref()) },
            DetailRow { label: "Дата заседания", value: format_datetime(c.hearing_date.as_deref()) },
            DetailRow { label: "Дата окончания дела", value: format_date(c.case_end_date.as_deref()) },
        ];
        // Optional rows only appear once the backend has a value for them.
        let optional: [(&'static str, &Option<String>, Shown); 7] = [
            ("Срок проверки", &c.check_deadline, Shown::Date),
            ("Дата возврата", &c.return_date, Shown::Date),
            ("Причина возврата", &c.return_reason, Shown::Text),
            ("Дата решения", &c.decision_date, Shown::Date),
            ("Срок обжалования решения", &c.decision_deadline, Shown::Date),
            ("Дата заседания по апелляции", &c.appeal_hearing_date, Shown::DateTime),
            ("Срок апелляции", &c.appeal_deadline, Shown::Date),
        ];
        for (label, value, shown) in optional {
            let Some(raw) = value.as_deref().filter(|v| !v.is_empty()) else { continue };
            let value = match shown {
                Shown::Text => raw.to_string(),
                Shown::Date => format_date(Some(raw)),
                Shown::DateTime => format_datetime(Some(raw)),
            };
            details.push(DetailRow { label, value });
        }
        details.push(DetailRow { label: "Роль ответственного", value: c.responsible.role_label().to_string() });

        let mut reminders = Vec::new();
        if let Some(n) = &c.notifications_sent {
            let sent: [(&'static str, Option<bool>, &Option<String>); 3] = [
                ("Напоминание за день", n.day_before, &n.day_before_sent_at),
                ("Напоминание за час", n.hour_before, &n.hour_before_sent_at),
                ("Напоминание о проверке", n.check_reminder, &n.check_reminder_sent_at),
            ];
            for (label, flag, at) in sent {
                if flag == Some(true) {
                    reminders.push(DetailRow { label, value: format_datetime(at.as_deref()) });
                }
            }
        }

        let responsible = match c.responsible.username.as_deref().filter(|u| !u.is_empty()) {
            Some(username) => format!("{} (@{})", c.responsible.name, username),
            None => c.responsible.name.clone(),
        };

        Self {
            id: c.id,
            number: c.number.clone(),
            title: c.title.clone(),
            description: c.description.clone(),
            status: c.status.clone(),
            status_label: status_label(&c.status),
            responsible,
            details,
            reminders,
        }
    }
}

/// One option of the status selector.
#[derive(Debug, Clone)]
pub struct StatusOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// The current status first, marked "(текущий)", then every reachable status.
pub fn status_options(current: &str, selected: &str) -> Vec<StatusOption> {
    let mut options = vec![StatusOption {
        value: current.to_string(),
        label: format!("{} (текущий)", status_label(current)),
        selected: selected == current,
    }];
    options.extend(available_transitions(current).iter().map(|s| StatusOption {
        value: s.as_str().to_string(),
        label: s.label().to_string(),
        selected: selected == s.as_str(),
    }));
    options
}

/// Prefilled values for the edit form inputs.
#[derive(Debug, Clone, Default)]
pub struct EditFormValues {
    pub hearing_date: String,
    pub hearing_time: String,
    pub acceptance_date: String,
    pub return_date: String,
    pub appeal_hearing_date: String,
}

impl From<&Case> for EditFormValues {
    fn from(c: &Case) -> Self {
        let day = |v: &Option<String>| v.as_deref().map(|d| date_part(d).to_string()).unwrap_or_default();
        Self {
            hearing_date: day(&c.hearing_date),
            hearing_time: c.hearing_date.as_deref().map(time_part).unwrap_or_default(),
            acceptance_date: day(&c.accepted_date),
            return_date: day(&c.return_date),
            appeal_hearing_date: c
                .appeal_hearing_date
                .as_deref()
                .and_then(|d| {
                    let time = time_part(d);
                    (!time.is_empty()).then(|| format!("{}T{time}", date_part(d)))
                })
                .unwrap_or_default(),
        }
    }
}
