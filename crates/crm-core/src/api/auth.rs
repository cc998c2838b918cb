//! Session endpoints

use serde::Serialize;
use tracing::info;

use super::client::ApiClient;
use crate::error::{ApiError, ApiResult};
use crate::permissions::Session;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    /// Both fields are required; rejected locally otherwise
    pub fn validate(&self) -> ApiResult<()> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(ApiError::InvalidInput("E-posta ve şifre zorunludur".to_string()));
        }
        Ok(())
    }
}

impl ApiClient {
    /// `POST /auth/login` → `{ data: { token, user } }`
    pub async fn login(&self, request: &LoginRequest) -> ApiResult<Session> {
        request.validate()?;
        let session: Session = self
            .post::<_, crate::models::Envelope<Session>>("/auth/login", request)
            .await?
            .data;
        info!(user_id = session.user.id, "logged in");
        Ok(session)
    }

    /// `POST /auth/logout`; callers clear the local session whatever the outcome
    pub async fn logout(&self) -> ApiResult<()> {
        self.post_unit("/auth/logout", &serde_json::json!({})).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_requires_both_fields() {
        let request = LoginRequest { email: " ".into(), password: "x".into() };
        assert!(matches!(request.validate(), Err(ApiError::InvalidInput(_))));
        let request = LoginRequest { email: "a@han.com".into(), password: "secret".into() };
        assert!(request.validate().is_ok());
    }
}
