use percent_encoding::utf8_percent_encode;

use super::dates::format_tr_date;
use crate::api::URI_COMPONENT;
use crate::models::Lead;

/// Turkey
pub const COUNTRY_CODE: &str = "90";

/// Digits only, with one leading trunk `0` dropped
pub fn whatsapp_number(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    match digits.strip_prefix('0') {
        Some(rest) => rest.to_string(),
        None => digits,
    }
}

/// Appointment request text, with the follow-up date when one is set
pub fn whatsapp_message(lead: &Lead) -> String {
    let mut msg = format!(
        "Sayın {} {}, görüşmemize istinaden randevu talebinde bulunmak istiyorum.",
        lead.first_name, lead.last_name
    );
    if let Some(date) = lead.next_follow_up.as_deref().and_then(format_tr_date) {
        msg.push_str(&format!(" Randevu tarihi: {}.", date));
    }
    msg
}

/// `https://wa.me/90<number>?text=<message>`
pub fn whatsapp_link(lead: &Lead) -> String {
    format!(
        "https://wa.me/{}{}?text={}",
        COUNTRY_CODE,
        whatsapp_number(&lead.phone),
        utf8_percent_encode(&whatsapp_message(lead), URI_COMPONENT)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn lead(phone: &str, follow_up: Option<&str>) -> Lead {
        serde_json::from_value(json!({
            "id": 1, "firstName": "Ayşe", "lastName": "Demir", "phone": phone,
            "nextFollowUp": follow_up
        }))
        .unwrap()
    }

    #[test]
    fn test_number_normalization() {
        assert_eq!(whatsapp_number("05321234567"), "5321234567");
        assert_eq!(whatsapp_number("0 (532) 123-45-67"), "5321234567");
        assert_eq!(whatsapp_number("5321234567"), "5321234567");
        assert_eq!(whatsapp_number("005321234567"), "05321234567");
    }

    #[test]
    fn test_link_targets_country_code() {
        let link = whatsapp_link(&lead("05321234567", None));
        assert!(link.starts_with("https://wa.me/905321234567?text="));
        assert!(link.contains("Say%C4%B1n%20Ay%C5%9Fe%20Demir%2C"));
        assert!(!link.contains("Randevu"));
    }

    #[test]
    fn test_message_appends_follow_up_date() {
        let msg = whatsapp_message(&lead("0532", Some("2025-04-01T09:30:00.000Z")));
        assert!(msg.ends_with(" Randevu tarihi: 01.04.2025."));
    }
}
