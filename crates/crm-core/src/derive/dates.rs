//! Date parsing and Turkish formatting
//!
//! Backend timestamps are ISO-8601 strings. Bare dates (`2025-03-17`) are read
//! as UTC midnight. Display is always in UTC.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, Utc};

const MONTHS_TR: [&str; 12] = [
    "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran",
    "Temmuz", "Ağustos", "Eylül", "Ekim", "Kasım", "Aralık",
];

pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// `17.03.2025`
pub fn format_tr_date(value: &str) -> Option<String> {
    parse_timestamp(value).map(|dt| dt.format("%d.%m.%Y").to_string())
}

/// `17.03.2025 14:05`
pub fn format_tr_datetime(value: &str) -> Option<String> {
    parse_timestamp(value).map(|dt| dt.format("%d.%m.%Y %H:%M").to_string())
}

/// `17 Mart 2025`
pub fn format_tr_long_date(value: &str) -> Option<String> {
    parse_timestamp(value).map(|dt| {
        format!("{} {} {}", dt.day(), MONTHS_TR[dt.month0() as usize], dt.year())
    })
}

/// Value for `<input type="date">`: the part before `T`
pub fn date_input_value(value: &str) -> String {
    value.split('T').next().unwrap_or_default().to_string()
}

/// `today + 7 days` as `YYYY-MM-DD`
pub fn one_week_later(today: NaiveDate) -> String {
    (today + Duration::days(7)).format("%Y-%m-%d").to_string()
}

/// Colour of the reminder cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderTone {
    Overdue,
    Today,
    Upcoming,
}

impl ReminderTone {
    pub fn class(self) -> &'static str {
        match self {
            ReminderTone::Overdue => "text-red-600",
            ReminderTone::Today => "text-yellow-600",
            ReminderTone::Upcoming => "text-green-600",
        }
    }
}

pub fn reminder_tone(value: &str, now: DateTime<Utc>) -> Option<ReminderTone> {
    let at = parse_timestamp(value)?;
    Some(if at.date_naive() == now.date_naive() {
        ReminderTone::Today
    } else if at < now {
        ReminderTone::Overdue
    } else {
        ReminderTone::Upcoming
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_variants() {
        assert!(parse_timestamp("2025-03-17T10:00:00.000Z").is_some());
        assert!(parse_timestamp("2025-03-17T10:00:00").is_some());
        assert_eq!(
            parse_timestamp("2025-03-17"),
            Some(Utc.with_ymd_and_hms(2025, 3, 17, 0, 0, 0).unwrap())
        );
        assert_eq!(parse_timestamp("yarın"), None);
        assert_eq!(parse_timestamp(""), None);
    }

    #[test]
    fn test_turkish_formats() {
        assert_eq!(format_tr_date("2025-03-07T08:00:00Z").as_deref(), Some("07.03.2025"));
        assert_eq!(format_tr_datetime("2025-03-07T08:05:00Z").as_deref(), Some("07.03.2025 08:05"));
        assert_eq!(format_tr_long_date("2025-08-30").as_deref(), Some("30 Ağustos 2025"));
    }

    #[test]
    fn test_date_input_value() {
        assert_eq!(date_input_value("2025-04-01T09:30:00.000Z"), "2025-04-01");
        assert_eq!(date_input_value("2025-04-01"), "2025-04-01");
    }

    #[test]
    fn test_one_week_later_crosses_month() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 28).unwrap();
        assert_eq!(one_week_later(today), "2025-02-04");
    }

    #[test]
    fn test_reminder_tone() {
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap();
        assert_eq!(reminder_tone("2025-03-10T08:00:00Z", now), Some(ReminderTone::Today));
        assert_eq!(reminder_tone("2025-03-09", now), Some(ReminderTone::Overdue));
        assert_eq!(reminder_tone("2025-03-12", now), Some(ReminderTone::Upcoming));
        assert_eq!(reminder_tone("", now), None);
    }
}
