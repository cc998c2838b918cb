use serde_json::{json, Map, Value};

use super::optional_text;
use crate::editor::FormDraft;
use crate::models::User;

/// Staff account form. The password is only sent when typed.
#[derive(Debug, Clone, PartialEq)]
pub struct UserDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role_id: String,
    pub is_active: bool,
    creating: bool,
}

impl Default for UserDraft {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            password: String::new(),
            role_id: String::new(),
            is_active: true,
            creating: true,
        }
    }
}

impl FormDraft for UserDraft {
    type Record = User;

    fn from_record(user: &User) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            password: String::new(),
            role_id: user
                .role
                .as_ref()
                .and_then(|r| r.id)
                .map(|id| id.to_string())
                .unwrap_or_default(),
            is_active: user.is_active,
            creating: false,
        }
    }

    fn validate(&self) -> Result<(), String> {
        if self.first_name.trim().is_empty() || self.last_name.trim().is_empty() || self.email.trim().is_empty() {
            return Err("Ad, soyad ve e-posta zorunludur".to_string());
        }
        if self.creating && self.password.is_empty() {
            return Err("Yeni kullanıcı için şifre zorunludur".to_string());
        }
        Ok(())
    }

    fn to_payload(&self) -> Value {
        let mut body = Map::new();
        body.insert("firstName".into(), json!(self.first_name.trim()));
        body.insert("lastName".into(), json!(self.last_name.trim()));
        body.insert("email".into(), json!(self.email.trim()));
        body.insert("isActive".into(), json!(self.is_active));
        body.insert(
            "roleId".into(),
            self.role_id.parse::<i64>().map(Value::from).unwrap_or(Value::Null),
        );
        if !self.password.is_empty() {
            body.insert("password".into(), optional_text(&self.password));
        }
        Value::Object(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_requires_password() {
        let draft = UserDraft {
            first_name: "Ece".into(),
            last_name: "Naz".into(),
            email: "ece@han.com".into(),
            ..Default::default()
        };
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_edit_omits_blank_password() {
        let user: User = serde_json::from_value(json!({
            "id": 3, "firstName": "Ece", "lastName": "Naz", "email": "ece@han.com",
            "isActive": true, "role": { "id": 2, "name": "Danışman" }
        }))
        .unwrap();
        let draft = UserDraft::from_record(&user);
        assert!(draft.validate().is_ok());
        let payload = draft.to_payload();
        assert!(payload.get("password").is_none());
        assert_eq!(payload["roleId"], json!(2));
    }
}
