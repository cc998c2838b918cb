//! Notification Settings
//!
//! Recipients subscribe to one of three scheduled or event-driven mails;
//! delivery attempts are listed in the email log tab.

use crate::models::{Recipient, User};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationType {
    MujdeAlarm,
    DailySummary,
    WeeklyStale,
}

impl NotificationType {
    pub const ALL: [NotificationType; 3] = [
        NotificationType::MujdeAlarm,
        NotificationType::DailySummary,
        NotificationType::WeeklyStale,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NotificationType::MujdeAlarm => "mujde_alarm",
            NotificationType::DailySummary => "daily_summary",
            NotificationType::WeeklyStale => "weekly_stale",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NotificationType::MujdeAlarm => "Müjde Alarmı",
            NotificationType::DailySummary => "Günlük Özet",
            NotificationType::WeeklyStale => "Haftalık Bayat Raporu",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            NotificationType::MujdeAlarm => {
                "Bir lead \"Kazanıldı\" statüsüne geçtiğinde bu kişilere mail gönderilir."
            }
            NotificationType::DailySummary => {
                "Her sabah 08:00'de dünkü yeni kayıtların özeti bu kişilere gönderilir."
            }
            NotificationType::WeeklyStale => {
                "Her Cuma 16:00'da hareketsiz müşteri raporu bu kişilere gönderilir."
            }
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

/// Tabs of the settings page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsTab {
    Recipients(NotificationType),
    EmailLogs,
}

impl Default for SettingsTab {
    fn default() -> Self {
        SettingsTab::Recipients(NotificationType::MujdeAlarm)
    }
}

impl SettingsTab {
    pub fn all() -> Vec<SettingsTab> {
        NotificationType::ALL
            .into_iter()
            .map(SettingsTab::Recipients)
            .chain(std::iter::once(SettingsTab::EmailLogs))
            .collect()
    }

    pub fn label(self) -> &'static str {
        match self {
            SettingsTab::Recipients(kind) => kind.label(),
            SettingsTab::EmailLogs => "Email Logları",
        }
    }

    pub fn notification(self) -> Option<NotificationType> {
        match self {
            SettingsTab::Recipients(kind) => Some(kind),
            SettingsTab::EmailLogs => None,
        }
    }
}

/// Users not yet subscribed to the current type
pub fn available_users<'a>(users: &'a [User], recipients: &[Recipient]) -> Vec<&'a User> {
    users
        .iter()
        .filter(|u| !recipients.iter().any(|r| r.user_id == Some(u.id)))
        .collect()
}

/// Main line and secondary line of a recipient row
pub fn recipient_lines(recipient: &Recipient) -> (String, String) {
    match recipient.user_id {
        Some(_) => (
            recipient.user_name.clone().unwrap_or_else(|| recipient.email.clone()),
            recipient.email.clone(),
        ),
        None => (recipient.email.clone(), "Harici".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user(id: i64) -> User {
        serde_json::from_value(json!({
            "id": id, "firstName": "U", "lastName": id.to_string(), "email": format!("u{}@han.com", id)
        }))
        .unwrap()
    }

    fn recipient(id: i64, user_id: Option<i64>, email: &str) -> Recipient {
        Recipient {
            id,
            notification_type: "mujde_alarm".into(),
            user_id,
            user_name: user_id.map(|u| format!("U {}", u)),
            email: email.into(),
        }
    }

    #[test]
    fn test_available_users_hides_subscribed() {
        let users = vec![user(1), user(2), user(3)];
        let recipients = vec![recipient(10, Some(2), "u2@han.com"), recipient(11, None, "dis@x.com")];
        let ids: Vec<i64> = available_users(&users, &recipients).iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_tabs_and_parse() {
        let tabs = SettingsTab::all();
        assert_eq!(tabs.len(), 4);
        assert_eq!(tabs[3].label(), "Email Logları");
        assert_eq!(NotificationType::parse("weekly_stale"), Some(NotificationType::WeeklyStale));
        assert_eq!(NotificationType::parse("monthly"), None);
    }

    #[test]
    fn test_recipient_lines() {
        assert_eq!(
            recipient_lines(&recipient(1, None, "dis@x.com")),
            ("dis@x.com".to_string(), "Harici".to_string())
        );
        assert_eq!(recipient_lines(&recipient(2, Some(5), "u5@han.com")).0, "U 5");
    }
}
