use serde::{Deserialize, Serialize};

use super::entity::Record;
use super::user::UserRef;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLog {
    pub id: i64,
    /// login | logout | create | update | delete | view | export
    pub action: String,
    #[serde(default)]
    pub entity: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub user: Option<UserRef>,
}

impl Record for ActivityLog {
    fn id(&self) -> i64 {
        self.id
    }
}
