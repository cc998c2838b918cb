use serde_json::{json, Value};

use super::{amount_text, contact_fields_filled, optional_amount, optional_text, REQUIRED_CONTACT_FIELDS};
use crate::editor::FormDraft;
use crate::models::Customer;

#[derive(Debug, Clone, PartialEq)]
pub struct CustomerDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub status: String,
    pub budget: String,
    pub property_type: String,
    pub notes: String,
}

impl Default for CustomerDraft {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            city: String::new(),
            status: "active".to_string(),
            budget: String::new(),
            property_type: String::new(),
            notes: String::new(),
        }
    }
}

impl FormDraft for CustomerDraft {
    type Record = Customer;

    fn from_record(c: &Customer) -> Self {
        Self {
            first_name: c.first_name.clone(),
            last_name: c.last_name.clone(),
            email: c.email.clone().unwrap_or_default(),
            phone: c.phone.clone(),
            address: c.address.clone().unwrap_or_default(),
            city: c.city.clone().unwrap_or_default(),
            status: c.status.clone(),
            budget: amount_text(c.budget),
            property_type: c.property_type.clone().unwrap_or_default(),
            notes: c.notes.clone().unwrap_or_default(),
        }
    }

    fn validate(&self) -> Result<(), String> {
        if contact_fields_filled(&self.first_name, &self.last_name, &self.phone) {
            Ok(())
        } else {
            Err(REQUIRED_CONTACT_FIELDS.to_string())
        }
    }

    fn to_payload(&self) -> Value {
        json!({
            "firstName": self.first_name.trim(),
            "lastName": self.last_name.trim(),
            "email": optional_text(&self.email),
            "phone": self.phone.trim(),
            "address": optional_text(&self.address),
            "city": optional_text(&self.city),
            "status": self.status,
            "budget": optional_amount(&self.budget),
            "propertyType": optional_text(&self.property_type),
            "notes": optional_text(&self.notes),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_customer_defaults_to_active() {
        assert_eq!(CustomerDraft::default().status, "active");
    }

    #[test]
    fn test_payload_normalizes_blanks() {
        let draft = CustomerDraft {
            first_name: "Ali".into(),
            last_name: "Kaya".into(),
            phone: "0532".into(),
            budget: "1500000".into(),
            ..CustomerDraft::default()
        };
        let payload = draft.to_payload();
        assert_eq!(payload["email"], Value::Null);
        assert_eq!(payload["budget"], json!(1500000.0));
        assert_eq!(payload["status"], json!("active"));
    }
}
