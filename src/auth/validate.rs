use chrono::NaiveDate;

use crate::models::case::{NewCase, NewCaseForm};

pub const REQUIRED_FIELDS_MISSING: &str = "Заполните все обязательные поля";

/// Validate a required text field with a max length.
pub fn validate_required(value: &str, field_name: &str, max_len: usize) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(format!("{field_name}: обязательное поле"));
    }
    if trimmed.chars().count() > max_len {
        return Some(format!("{field_name}: не более {max_len} символов"));
    }
    None
}

/// Validate an optional text field with a max length (empty is OK).
pub fn validate_optional(value: &str, field_name: &str, max_len: usize) -> Option<String> {
    let trimmed = value.trim();
    if !trimmed.is_empty() && trimmed.chars().count() > max_len {
        return Some(format!("{field_name}: не более {max_len} символов"));
    }
    None
}

/// Validate a `YYYY-MM-DD` date from a date input.
pub fn validate_date(value: &str, field_name: &str) -> Option<String> {
    match NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d") {
        Ok(_) => None,
        Err(_) => Some(format!("{field_name}: неверный формат даты")),
    }
}

/// Check the create-case form and build the backend payload.
///
/// Any missing required field (number, title, filing date, responsible)
/// yields the single "fill in all required fields" message, as the form
/// shows it; format problems are listed per field after that.
pub fn validate_new_case(form: &NewCaseForm) -> Result<NewCase, Vec<String>> {
    let required = [&form.number, &form.title, &form.filing_date, &form.responsible_id];
    if required.iter().any(|v| v.trim().is_empty()) {
        return Err(vec![REQUIRED_FIELDS_MISSING.to_string()]);
    }

    let mut errors = Vec::new();
    errors.extend(validate_required(&form.number, "Номер дела", 100));
    errors.extend(validate_required(&form.title, "Название дела", 255));
    errors.extend(validate_optional(&form.description, "Описание дела", 5000));
    errors.extend(validate_date(&form.filing_date, "Дата подачи"));
    let responsible_id = form.responsible_id.trim().parse::<i64>();
    if responsible_id.is_err() {
        errors.push("Ответственный юрист: выберите из списка".to_string());
    }

    match (errors.is_empty(), responsible_id) {
        (true, Ok(responsible_id)) => Ok(NewCase {
            number: form.number.trim().to_string(),
            title: form.title.trim().to_string(),
            description: form.description.trim().to_string(),
            filing_date: form.filing_date.trim().to_string(),
            responsible_id,
        }),
        _ => Err(errors),
    }
}
