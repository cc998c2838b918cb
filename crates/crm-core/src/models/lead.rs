use serde::{Deserialize, Serialize};

use super::entity::Record;
use super::user::UserRef;

/// Prospective customer tracked through the sales pipeline
///
/// Date fields stay as the ISO strings the API sends; `derive` parses them on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub status: Option<String>,
    /// aranacak | arandi | ziyaret_planlandi | kaybedildi | kazanildi
    #[serde(default)]
    pub property_status: String,
    #[serde(default)]
    pub interest: Option<String>,
    #[serde(default, deserialize_with = "super::amount::deserialize")]
    pub budget: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub next_follow_up: Option<String>,
    #[serde(default)]
    pub listing_url: Option<String>,
    /// sale | rent
    #[serde(default)]
    pub listing_type: Option<String>,
    /// active | passive | sold | rented
    #[serde(default)]
    pub listing_status: Option<String>,
    #[serde(default)]
    pub last_action_date: Option<String>,
    #[serde(default)]
    pub reminder_date: Option<String>,
    #[serde(default)]
    pub notification_status: Option<String>,
    #[serde(default)]
    pub is_agenda: Option<bool>,
    #[serde(default)]
    pub is_archived: Option<bool>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub assigned_to: Option<i64>,
    #[serde(default)]
    pub assigned_user: Option<UserRef>,
}

impl Lead {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Record for Lead {
    fn id(&self) -> i64 {
        self.id
    }
}
