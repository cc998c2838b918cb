//! HTTP client wrapper
//!
//! `reqwest` runs on top of `fetch` in the browser build, so the same client
//! serves wasm32 and native tests.

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{ApiError, ApiResult};
use crate::models::{Envelope, ErrorBody};

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url && self.token == other.token
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Same client, authenticated with a bearer token
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path such as `/leads?page=1`
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        debug!(%method, path, "api request");
        let builder = self.http.request(method, self.url(path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    // ========================
    // Verbs
    // ========================

    /// GET, decoding the whole body
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let resp = self.request(Method::GET, path).send().await?;
        decode(check(resp).await?).await
    }

    /// GET, unwrapping the `{ data }` envelope
    pub async fn get_data<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.get::<Envelope<T>>(path).await.map(|e| e.data)
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resp = self.request(Method::POST, path).json(body).send().await?;
        decode(check(resp).await?).await
    }

    /// POST whose response body is ignored
    pub async fn post_unit<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<()> {
        let resp = self.request(Method::POST, path).json(body).send().await?;
        check(resp).await.map(|_| ())
    }

    /// PUT whose response body is ignored
    pub async fn put_unit<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<()> {
        let resp = self.request(Method::PUT, path).json(body).send().await?;
        check(resp).await.map(|_| ())
    }

    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        let resp = self.request(Method::DELETE, path).send().await?;
        check(resp).await.map(|_| ())
    }

    /// Multipart upload, unwrapping the `{ data }` envelope
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> ApiResult<T> {
        let resp = self.request(Method::POST, path).multipart(form).send().await?;
        decode::<Envelope<T>>(check(resp).await?).await.map(|e| e.data)
    }
}

/// Map non-2xx responses to `ApiError::Status`, reading the `{ message }` body
async fn check(resp: Response) -> ApiResult<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    let message = parse_error_message(&body);
    warn!(status = status.as_u16(), message = message.as_deref().unwrap_or(""), "request rejected");
    Err(ApiError::Status { status: status.as_u16(), message })
}

async fn decode<T: DeserializeOwned>(resp: Response) -> ApiResult<T> {
    let body = resp.text().await?;
    Ok(serde_json::from_str(&body)?)
}

fn parse_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_paths() {
        let client = ApiClient::new("http://localhost:5000/api/");
        assert_eq!(client.base_url(), "http://localhost:5000/api");
        assert_eq!(client.url("/leads?page=2"), "http://localhost:5000/api/leads?page=2");
        assert_eq!(client.url("roles"), "http://localhost:5000/api/roles");
    }

    #[test]
    fn test_empty_token_is_dropped() {
        let client = ApiClient::new("/api").with_token(Some(String::new()));
        assert_eq!(client.token(), None);
        let client = client.with_token(Some("abc".into()));
        assert_eq!(client.token(), Some("abc"));
    }

    #[test]
    fn test_error_message_parsing() {
        assert_eq!(
            parse_error_message(r#"{"message":"Bu telefon numarası zaten kayıtlı"}"#).as_deref(),
            Some("Bu telefon numarası zaten kayıtlı")
        );
        assert_eq!(parse_error_message(r#"{"message":""}"#), None);
        assert_eq!(parse_error_message("<html>502</html>"), None);
    }
}
