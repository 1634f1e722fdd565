use serde::{Deserialize, Deserializer, Serialize};

/// Backend user record: the signed-in account and each case's responsible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default, deserialize_with = "string_or_number")]
    pub telegram_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// The user a case is assigned to.
pub type Responsible = User;

impl User {
    pub fn role_label(&self) -> &'static str {
        role_label(&self.role)
    }

    pub fn is_lawyer(&self) -> bool {
        self.role == "lawyer"
    }
}

/// Entry of the responsible-lawyer dropdown (`GET /users?role=lawyer`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lawyer {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub role: String,
}

/// Role used by the development login bypass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DevRole {
    Lawyer,
    Assistant,
}

impl DevRole {
    pub fn parse(value: &str) -> Option<DevRole> {
        match value {
            "lawyer" => Some(DevRole::Lawyer),
            "assistant" => Some(DevRole::Assistant),
            _ => None,
        }
    }

    /// Backend path issuing a token for this role.
    pub fn token_path(&self) -> &'static str {
        match self {
            DevRole::Lawyer => "auth/dev-token-lawyer",
            DevRole::Assistant => "auth/dev-token-assistant",
        }
    }
}

/// "lawyer" reads as Юрист; every other role is shown as Ассистент.
pub fn role_label(role: &str) -> &'static str {
    if role == "lawyer" { "Юрист" } else { "Ассистент" }
}

// The backend has sent telegram_id both as a JSON string and as a number.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => s,
        Some(serde_json::Value::Number(n)) => n.to_string(),
        _ => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn telegram_id_accepts_number_and_string() {
        let a: User = serde_json::from_value(serde_json::json!({
            "id": 1, "telegram_id": 12345, "name": "A", "role": "lawyer"
        }))
        .unwrap();
        let b: User = serde_json::from_value(serde_json::json!({
            "id": 2, "telegram_id": "67890", "name": "B", "role": "assistant", "username": null
        }))
        .unwrap();
        assert_eq!(a.telegram_id, "12345");
        assert_eq!(b.telegram_id, "67890");
        assert!(b.username.is_none());
    }

    #[test]
    fn role_labels() {
        assert_eq!(role_label("lawyer"), "Юрист");
        assert_eq!(role_label("assistant"), "Ассистент");
        assert_eq!(role_label(""), "Ассистент");
    }

    #[test]
    fn dev_role_paths() {
        assert_eq!(DevRole::parse("lawyer").map(|r| r.token_path()), Some("auth/dev-token-lawyer"));
        assert_eq!(DevRole::parse("assistant").map(|r| r.token_path()), Some("auth/dev-token-assistant"));
        assert_eq!(DevRole::parse("admin"), None);
    }
}
