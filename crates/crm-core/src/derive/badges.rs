//! Status → badge tables
//!
//! Unknown codes fall back to the neutral style with the raw code as label.

/// Used for unknown codes and for neutral states
pub const NEUTRAL_BADGE: &str = "bg-gray-100 text-gray-800";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeDef {
    pub code: &'static str,
    pub label: &'static str,
    pub class: &'static str,
}

const fn badge(code: &'static str, label: &'static str, class: &'static str) -> BadgeDef {
    BadgeDef { code, label, class }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub class: &'static str,
    pub label: String,
}

pub const PROPERTY_STATUSES: &[BadgeDef] = &[
    badge("aranacak", "Aranacak", "bg-blue-100 text-blue-800"),
    badge("arandi", "Arandı", "bg-yellow-100 text-yellow-800"),
    badge("ziyaret_planlandi", "Ziyaret Planlandı", "bg-purple-100 text-purple-800"),
    badge("kaybedildi", "Kaybedildi", "bg-red-100 text-red-800"),
    badge("kazanildi", "Kazanıldı", "bg-green-100 text-green-800"),
];

pub const LISTING_TYPES: &[BadgeDef] = &[
    badge("sale", "Satılık", "bg-green-100 text-green-800"),
    badge("rent", "Kiralık", "bg-blue-100 text-blue-800"),
];

pub const LISTING_STATUSES: &[BadgeDef] = &[
    badge("active", "Aktif", "bg-green-100 text-green-800"),
    badge("passive", "Pasif", NEUTRAL_BADGE),
    badge("sold", "Satıldı", "bg-blue-100 text-blue-800"),
    badge("rented", "Kiralandı", "bg-purple-100 text-purple-800"),
];

pub const CUSTOMER_STATUSES: &[BadgeDef] = &[
    badge("active", "Aktif", "bg-green-100 text-green-800"),
    badge("potential", "Potansiyel", NEUTRAL_BADGE),
    badge("passive", "Pasif", NEUTRAL_BADGE),
];

pub const ACTIVITY_ACTIONS: &[BadgeDef] = &[
    badge("login", "Giriş", "bg-blue-100 text-blue-800"),
    badge("logout", "Çıkış", NEUTRAL_BADGE),
    badge("create", "Oluşturma", "bg-green-100 text-green-800"),
    badge("update", "Güncelleme", "bg-yellow-100 text-yellow-800"),
    badge("delete", "Silme", "bg-red-100 text-red-800"),
    badge("view", "Görüntüleme", "bg-purple-100 text-purple-800"),
    badge("export", "Dışa Aktarma", "bg-indigo-100 text-indigo-800"),
];

/// Lead acquisition channels (no badge colour, labels only)
pub const LEAD_SOURCES: &[BadgeDef] = &[
    badge("direct", "Direkt", NEUTRAL_BADGE),
    badge("website", "Web Sitesi", NEUTRAL_BADGE),
    badge("referral", "Referans", NEUTRAL_BADGE),
    badge("social_media", "Sosyal Medya", NEUTRAL_BADGE),
    badge("advertisement", "Reklam", NEUTRAL_BADGE),
    badge("other", "Diğer", NEUTRAL_BADGE),
];

fn lookup(table: &[BadgeDef], code: &str) -> Badge {
    match table.iter().find(|b| b.code == code) {
        Some(def) => Badge { class: def.class, label: def.label.to_string() },
        None => Badge { class: NEUTRAL_BADGE, label: code.to_string() },
    }
}

/// Label from a table, the raw code when unknown
pub fn label_for<'a>(table: &[BadgeDef], code: &'a str) -> &'a str {
    table.iter().find(|b| b.code == code).map(|b| b.label).unwrap_or(code)
}

pub fn property_status_badge(code: &str) -> Badge {
    lookup(PROPERTY_STATUSES, code)
}

pub fn listing_type_badge(code: &str) -> Badge {
    lookup(LISTING_TYPES, code)
}

pub fn listing_status_badge(code: &str) -> Badge {
    lookup(LISTING_STATUSES, code)
}

pub fn customer_status_badge(code: &str) -> Badge {
    lookup(CUSTOMER_STATUSES, code)
}

pub fn activity_action_badge(code: &str) -> Badge {
    lookup(ACTIVITY_ACTIONS, code)
}

pub fn lead_source_label(code: &str) -> &str {
    label_for(LEAD_SOURCES, code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(
            property_status_badge("ziyaret_planlandi"),
            Badge { class: "bg-purple-100 text-purple-800", label: "Ziyaret Planlandı".into() }
        );
        assert_eq!(listing_type_badge("rent").label, "Kiralık");
        assert_eq!(listing_status_badge("sold").class, "bg-blue-100 text-blue-800");
        assert_eq!(activity_action_badge("export").label, "Dışa Aktarma");
    }

    #[test]
    fn test_unknown_code_is_neutral_raw_label() {
        let badge = property_status_badge("beklemede");
        assert_eq!(badge.class, NEUTRAL_BADGE);
        assert_eq!(badge.label, "beklemede");
        assert_eq!(lead_source_label("fuar"), "fuar");
        assert_eq!(lead_source_label("social_media"), "Sosyal Medya");
    }
}
