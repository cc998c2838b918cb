use serde::{Deserialize, Serialize};

use super::entity::Record;
use super::user::UserRef;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    /// active | potential | passive
    #[serde(default)]
    pub status: String,
    #[serde(default, deserialize_with = "super::amount::deserialize")]
    pub budget: Option<f64>,
    #[serde(default)]
    pub property_type: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub assigned_user: Option<UserRef>,
}

impl Record for Customer {
    fn id(&self) -> i64 {
        self.id
    }
}
