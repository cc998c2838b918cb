//! API Errors
//!
//! Every backend call resolves to `ApiResult<T>`.

use thiserror::Error;

/// Common result type for backend operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Fallback shown when the server sent no message
pub const GENERIC_FAILURE: &str = "Bir hata oluştu";

/// Prefix for duplicate-record (409) failures
pub const CONFLICT_PREFIX: &str = "⛔ Mükerrer kayıt";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx response; `message` comes from the `{ message }` body
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Status { status: u16, message: Option<String> },
    /// 2xx response whose body did not match the expected shape
    #[error("unexpected response body: {0}")]
    Decode(String),
    /// Rejected locally, no request was sent
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_conflict(&self) -> bool {
        self.status() == Some(409)
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Server-provided message, local validation text, or `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status { message: Some(m), .. } if !m.is_empty() => m.clone(),
            ApiError::InvalidInput(m) => m.clone(),
            _ => fallback.to_string(),
        }
    }

    /// Message for the record editor: conflicts get a dedicated prefix
    pub fn editor_message(&self) -> String {
        let msg = self.user_message(GENERIC_FAILURE);
        if self.is_conflict() {
            format!("{}: {}", CONFLICT_PREFIX, msg)
        } else {
            msg
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(code: u16, msg: Option<&str>) -> ApiError {
        ApiError::Status { status: code, message: msg.map(String::from) }
    }

    #[test]
    fn test_conflict_gets_prefix() {
        let err = status(409, Some("Bu telefon numarası zaten kayıtlı"));
        assert!(err.is_conflict());
        assert_eq!(err.editor_message(), "⛔ Mükerrer kayıt: Bu telefon numarası zaten kayıtlı");
    }

    #[test]
    fn test_other_status_shows_server_message() {
        let err = status(400, Some("Telefon zorunludur"));
        assert_eq!(err.editor_message(), "Telefon zorunludur");
    }

    #[test]
    fn test_missing_message_falls_back() {
        assert_eq!(status(500, None).editor_message(), GENERIC_FAILURE);
        assert_eq!(ApiError::Network("offline".into()).editor_message(), GENERIC_FAILURE);
        assert_eq!(
            ApiError::Network("offline".into()).user_message("Silme işlemi başarısız"),
            "Silme işlemi başarısız"
        );
    }
}
