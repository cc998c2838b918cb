use serde::{Deserialize, Serialize};

use super::entity::Record;

/// Embedded user reference (assignee, log author)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: String,
}

impl UserRef {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Role as embedded in a user payload
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleSummary {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// Staff member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub role: Option<RoleSummary>,
}

fn default_true() -> bool {
    true
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Record for User {
    fn id(&self) -> i64 {
        self.id
    }
}

/// The logged-in user, as returned by `/auth/login`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Option<RoleSummary>,
}

impl AuthUser {
    /// Two-letter avatar text
    pub fn initials(&self) -> String {
        self.first_name
            .chars()
            .take(1)
            .chain(self.last_name.chars().take(1))
            .collect()
    }
}

/// Per-consultant pipeline counters from `/users/performance`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPerformance {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub total_leads: u32,
    #[serde(default)]
    pub won_leads: u32,
    #[serde(default)]
    pub lost_leads: u32,
    #[serde(default)]
    pub to_be_called_leads: u32,
    #[serde(default)]
    pub called_leads: u32,
    #[serde(default)]
    pub visit_scheduled_leads: u32,
    /// Percentage as a decimal string, e.g. "42.50"
    #[serde(default)]
    pub conversion_rate: String,
}

impl UserPerformance {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn conversion_rate_value(&self) -> f64 {
        self.conversion_rate.trim().parse().unwrap_or(0.0)
    }
}
