use serde::{Deserialize, Serialize};

use super::entity::Record;

/// Subscriber of one notification type: a staff user or an external address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipient {
    pub id: i64,
    pub notification_type: String,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub user_name: Option<String>,
    pub email: String,
}

impl Record for Recipient {
    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailLog {
    pub id: i64,
    pub to: String,
    pub subject: String,
    pub success: bool,
    #[serde(default)]
    pub error_message: Option<String>,
    pub sent_at: String,
}

impl Record for EmailLog {
    fn id(&self) -> i64 {
        self.id
    }
}
