use serde_json::{json, Value};

use super::optional_text;
use crate::editor::FormDraft;
use crate::models::Role;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoleDraft {
    pub name: String,
    pub description: String,
    pub permissions: Vec<String>,
}

impl RoleDraft {
    /// Add the token if absent, remove it otherwise
    pub fn toggle_permission(&mut self, token: &str) {
        if let Some(pos) = self.permissions.iter().position(|p| p == token) {
            self.permissions.remove(pos);
        } else {
            self.permissions.push(token.to_string());
        }
    }

    pub fn grants(&self, token: &str) -> bool {
        self.permissions.iter().any(|p| p == token)
    }
}

impl FormDraft for RoleDraft {
    type Record = Role;

    fn from_record(role: &Role) -> Self {
        Self {
            name: role.name.clone(),
            description: role.description.clone().unwrap_or_default(),
            permissions: role.permissions.clone(),
        }
    }

    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Rol adı zorunludur".to_string());
        }
        Ok(())
    }

    fn to_payload(&self) -> Value {
        json!({
            "name": self.name.trim(),
            "description": optional_text(&self.description),
            "permissions": self.permissions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_permission() {
        let mut draft = RoleDraft::default();
        draft.toggle_permission("leads.view");
        draft.toggle_permission("leads.update");
        assert!(draft.grants("leads.view"));
        draft.toggle_permission("leads.view");
        assert!(!draft.grants("leads.view"));
        assert_eq!(draft.to_payload()["permissions"], json!(["leads.update"]));
    }
}
