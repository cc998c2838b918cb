//! Notification recipients and email delivery logs

use serde_json::{json, Value};

use super::client::ApiClient;
use super::query::EmailLogQuery;
use crate::error::ApiResult;
use crate::models::{EmailLogPage, Recipient};
use crate::notifications::NotificationType;

/// A subscriber to add: a staff user or an outside address
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewRecipient {
    User(i64),
    Email(String),
}

impl NewRecipient {
    pub fn to_body(&self) -> Value {
        match self {
            NewRecipient::User(id) => json!({ "userId": id }),
            NewRecipient::Email(email) => json!({ "externalEmail": email }),
        }
    }
}

impl ApiClient {
    pub async fn recipients(&self, kind: NotificationType) -> ApiResult<Vec<Recipient>> {
        self.get_data(&format!("/notification-settings/{}/recipients", kind.as_str()))
            .await
    }

    pub async fn add_recipient(&self, kind: NotificationType, recipient: &NewRecipient) -> ApiResult<()> {
        self.post_unit(
            &format!("/notification-settings/{}/recipients", kind.as_str()),
            &recipient.to_body(),
        )
        .await
    }

    pub async fn remove_recipient(&self, kind: NotificationType, id: i64) -> ApiResult<()> {
        self.delete(&format!("/notification-settings/{}/recipients/{}", kind.as_str(), id))
            .await
    }

    pub async fn email_logs(&self, query: &EmailLogQuery) -> ApiResult<EmailLogPage> {
        self.get_data(&format!("/email-logs{}", query.to_params().to_query_string()))
            .await
    }

    pub async fn clear_email_logs(&self) -> ApiResult<()> {
        self.delete("/email-logs").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipient_bodies() {
        assert_eq!(NewRecipient::User(7).to_body(), json!({ "userId": 7 }));
        assert_eq!(
            NewRecipient::Email("ofis@han.com".into()).to_body(),
            json!({ "externalEmail": "ofis@han.com" })
        );
    }
}
