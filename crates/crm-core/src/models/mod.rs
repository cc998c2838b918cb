//! Frontend Models
//!
//! Data structures matching the REST API payloads. The backend owns every
//! schema; these types only mirror what the pages read and write.

mod entity;
mod customer;
mod lead;
mod role;
mod user;
mod blog;
mod activity;
mod notification;
mod google;
mod envelope;

pub use entity::Record;
pub use customer::Customer;
pub use lead::Lead;
pub use role::Role;
pub use user::{AuthUser, RoleSummary, User, UserPerformance, UserRef};
pub use blog::BlogPost;
pub use activity::ActivityLog;
pub use notification::{EmailLog, Recipient};
pub use google::{
    AuthUrl, AvailableField, ColumnMapping, GoogleStatus, ImportSummary, MappingSuggestion,
    PreviewData, SheetInfo, SpreadsheetInfo,
};
pub use envelope::{
    ActivityLogList, BlogPage, EmailLogPage, Envelope, ErrorBody, LeadPage, UploadedImage, UserList,
};

/// Decimal columns arrive either as JSON numbers or as strings ("2500000.00")
pub(crate) mod amount {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Raw>::deserialize(deserializer)? {
            Some(Raw::Number(n)) => Some(n),
            Some(Raw::Text(s)) => s.trim().parse().ok(),
            None => None,
        })
    }
}
