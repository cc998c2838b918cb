//! Response Envelopes

use serde::{Deserialize, Serialize};

use super::{ActivityLog, BlogPost, EmailLog, Lead, User};

/// `{ "data": ... }` wrapper used by most endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// Error body `{ "message": ... }`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadPage {
    #[serde(default)]
    pub leads: Vec<Lead>,
    #[serde(default)]
    pub total_count: u32,
    #[serde(default)]
    pub total_pages: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPage {
    #[serde(default)]
    pub posts: Vec<BlogPost>,
    #[serde(default)]
    pub total_count: u32,
    #[serde(default)]
    pub total_pages: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailLogPage {
    #[serde(default)]
    pub logs: Vec<EmailLog>,
    #[serde(default)]
    pub total: u32,
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default)]
    pub total_pages: u32,
}

fn first_page() -> u32 {
    1
}

/// `/activitylogs` returns either `{ logs, totalCount }` or a bare array
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActivityLogList {
    #[serde(rename_all = "camelCase")]
    Paged {
        logs: Vec<ActivityLog>,
        #[serde(default)]
        total_count: Option<u32>,
    },
    Bare(Vec<ActivityLog>),
}

impl ActivityLogList {
    pub fn total_count(&self) -> u32 {
        match self {
            ActivityLogList::Paged { logs, total_count } => total_count.unwrap_or(logs.len() as u32),
            ActivityLogList::Bare(logs) => logs.len() as u32,
        }
    }

    pub fn into_logs(self) -> Vec<ActivityLog> {
        match self {
            ActivityLogList::Paged { logs, .. } => logs,
            ActivityLogList::Bare(logs) => logs,
        }
    }
}

/// `/users` returns either `{ users }` or a bare array
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserList {
    Wrapped { users: Vec<User> },
    Bare(Vec<User>),
}

impl UserList {
    pub fn into_users(self) -> Vec<User> {
        match self {
            UserList::Wrapped { users } => users,
            UserList::Bare(users) => users,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedImage {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lead_page_parses_string_budget() {
        let json = r#"{"data":{"leads":[{"id":3,"firstName":"Ayşe","lastName":"Demir","phone":"0532","propertyStatus":"arandi","budget":"2500000.00","createdAt":"2025-01-02T10:00:00.000Z"}],"totalCount":150,"totalPages":2}}"#;
        let page: Envelope<LeadPage> = serde_json::from_str(json).unwrap();
        assert_eq!(page.data.total_pages, 2);
        assert_eq!(page.data.leads[0].budget, Some(2_500_000.0));
        assert_eq!(page.data.leads[0].next_follow_up, None);
    }

    #[test]
    fn test_activity_logs_accept_both_shapes() {
        let paged: ActivityLogList = serde_json::from_str(
            r#"{"logs":[{"id":1,"action":"login","description":"Giriş yapıldı","createdAt":"2025-01-01T00:00:00Z"}],"totalCount":42}"#,
        )
        .unwrap();
        assert_eq!(paged.total_count(), 42);

        let bare: ActivityLogList = serde_json::from_str(
            r#"[{"id":1,"action":"login","description":"x","createdAt":"2025-01-01T00:00:00Z"}]"#,
        )
        .unwrap();
        assert_eq!(bare.total_count(), 1);
        assert_eq!(bare.into_logs()[0].action, "login");
    }

    #[test]
    fn test_user_list_accepts_both_shapes() {
        let wrapped: UserList =
            serde_json::from_str(r#"{"users":[{"id":1,"firstName":"Ali","lastName":"Kaya","email":"a@x.com","isActive":true}]}"#)
                .unwrap();
        assert_eq!(wrapped.into_users().len(), 1);

        let bare: UserList =
            serde_json::from_str(r#"[{"id":2,"firstName":"Can","lastName":"Ak","email":"c@x.com","isActive":false}]"#).unwrap();
        assert!(!bare.into_users()[0].is_active);
    }
}
