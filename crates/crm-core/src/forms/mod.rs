//! Form Drafts
//!
//! One draft per editable record type. Inputs are bound to plain strings;
//! conversion to the API payload happens in `FormDraft::to_payload`.

mod customer;
mod lead;
mod role;
mod blog;
mod user;

pub use customer::CustomerDraft;
pub use lead::{LeadDraft, LeadForm, LeadStep};
pub use role::RoleDraft;
pub use blog::BlogDraft;
pub use user::UserDraft;

use serde_json::Value;

/// Shown when a required contact field is empty
pub const REQUIRED_CONTACT_FIELDS: &str = "Lütfen zorunlu alanları doldurun (Ad, Soyad, Telefon)";

/// Optional text: blank becomes `null`
pub(crate) fn optional_text(value: &str) -> Value {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Value::Null
    } else {
        Value::String(trimmed.to_string())
    }
}

/// Amount typed into a number input: blank or unparsable becomes `null`
pub(crate) fn optional_amount(value: &str) -> Value {
    value
        .trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

/// Amount as shown in an edit form, without a trailing `.0`
pub(crate) fn amount_text(value: Option<f64>) -> String {
    match value {
        Some(v) if v.fract() == 0.0 => format!("{}", v as i64),
        Some(v) => v.to_string(),
        None => String::new(),
    }
}

pub(crate) fn contact_fields_filled(first: &str, last: &str, phone: &str) -> bool {
    !first.trim().is_empty() && !last.trim().is_empty() && !phone.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_optional_helpers() {
        assert_eq!(optional_text("  "), Value::Null);
        assert_eq!(optional_text(" Kadıköy "), json!("Kadıköy"));
        assert_eq!(optional_amount("5000000"), json!(5000000.0));
        assert_eq!(optional_amount("abc"), Value::Null);
        assert_eq!(amount_text(Some(2_500_000.0)), "2500000");
        assert_eq!(amount_text(None), "");
    }
}
