use chrono::{DateTime, Duration, Utc};

use super::dates::parse_timestamp;
use crate::models::Lead;

/// Pipeline states that end tracking
pub const CLOSED_STATUSES: [&str; 2] = ["kaybedildi", "kazanildi"];

pub const STALE_AFTER_DAYS: i64 = 7;

/// A lead is stale when it is still open, older than a week, and has no
/// follow-up scheduled in the future.
///
/// Must agree with the backend's `isStale=true` filter. A missing
/// `createdAt` is never stale, while one that does not parse fails the
/// "created this week" check and falls through. An unreadable follow-up
/// date never counts as overdue.
pub fn is_stale(lead: &Lead, now: DateTime<Utc>) -> bool {
    let status = lead.property_status.to_lowercase();
    if CLOSED_STATUSES.contains(&status.as_str()) {
        return false;
    }
    let Some(raw_created) = lead.created_at.as_deref().filter(|v| !v.is_empty()) else {
        return false;
    };
    let week_ago = now - Duration::days(STALE_AFTER_DAYS);
    if parse_timestamp(raw_created).is_some_and(|created| created > week_ago) {
        return false;
    }
    match lead.next_follow_up.as_deref().filter(|v| !v.is_empty()) {
        None => true,
        Some(raw) => parse_timestamp(raw).is_some_and(|follow_up| follow_up < now),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 20, 12, 0, 0).unwrap()
    }

    fn lead(status: &str, created: Option<&str>, follow_up: Option<&str>) -> Lead {
        serde_json::from_value(json!({
            "id": 1, "firstName": "Ali", "lastName": "Kaya", "phone": "0532",
            "propertyStatus": status, "createdAt": created, "nextFollowUp": follow_up
        }))
        .unwrap()
    }

    #[test]
    fn test_old_open_lead_without_follow_up_is_stale() {
        assert!(is_stale(&lead("arandi", Some("2025-03-01T10:00:00Z"), None), now()));
    }

    #[test]
    fn test_future_follow_up_is_not_stale() {
        let l = lead("arandi", Some("2025-03-01T10:00:00Z"), Some("2025-03-21"));
        assert!(!is_stale(&l, now()));
    }

    #[test]
    fn test_past_follow_up_is_stale() {
        let l = lead("aranacak", Some("2025-03-01T10:00:00Z"), Some("2025-03-15"));
        assert!(is_stale(&l, now()));
    }

    #[test]
    fn test_recent_lead_is_never_stale() {
        assert!(!is_stale(&lead("arandi", Some("2025-03-18T10:00:00Z"), None), now()));
        assert!(!is_stale(&lead("arandi", Some("2025-03-18T10:00:00Z"), Some("2025-03-01")), now()));
    }

    #[test]
    fn test_closed_statuses_ignore_case() {
        assert!(!is_stale(&lead("KAZANILDI", Some("2025-01-01T00:00:00Z"), None), now()));
        assert!(!is_stale(&lead("kaybedildi", Some("2025-01-01T00:00:00Z"), None), now()));
    }

    #[test]
    fn test_missing_or_bad_dates() {
        assert!(!is_stale(&lead("arandi", None, None), now()));
        assert!(!is_stale(&lead("arandi", Some(""), None), now()));
        assert!(!is_stale(&lead("arandi", Some("2025-01-01T00:00:00Z"), Some("??")), now()));
    }

    #[test]
    fn test_unreadable_created_at_falls_through_to_follow_up() {
        assert!(is_stale(&lead("arandi", Some("geçen ay"), None), now()));
        assert!(is_stale(&lead("arandi", Some("geçen ay"), Some("2025-03-15")), now()));
        assert!(!is_stale(&lead("arandi", Some("geçen ay"), Some("2025-03-21")), now()));
    }
}
