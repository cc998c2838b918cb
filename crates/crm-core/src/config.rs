//! Application Configuration
//!
//! Defaults plus build-time overrides (`CRM_API_URL`, `CRM_LOG_LEVEL`).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// REST API root, without trailing slash
    pub api_base_url: String,
    pub leads_page_size: u32,
    /// Public blog listing
    pub blog_page_size: u32,
    /// Blog management listing
    pub blog_admin_limit: u32,
    pub activity_log_limit: u32,
    pub email_log_page_size: u32,
    pub log_level: String,
    pub app_version: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "/api".to_string(),
            leads_page_size: 100,
            blog_page_size: 9,
            blog_admin_limit: 100,
            activity_log_limit: 100,
            email_log_page_size: 50,
            log_level: "info".to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl AppConfig {
    /// Defaults with the compile-time environment applied
    pub fn from_build_env() -> Self {
        Self::default().with_overrides(option_env!("CRM_API_URL"), option_env!("CRM_LOG_LEVEL"))
    }

    fn with_overrides(mut self, api_url: Option<&str>, log_level: Option<&str>) -> Self {
        if let Some(url) = api_url.map(str::trim).filter(|u| !u.is_empty()) {
            self.api_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(level) = log_level.map(str::trim).filter(|l| !l.is_empty()) {
            self.log_level = level.to_string();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "/api");
        assert_eq!(config.leads_page_size, 100);
        assert_eq!(config.blog_page_size, 9);
        assert_eq!(config.email_log_page_size, 50);
    }

    #[test]
    fn test_overrides_trim_trailing_slash() {
        let config = AppConfig::default().with_overrides(Some("https://crm.example.com/api/"), Some("debug"));
        assert_eq!(config.api_base_url, "https://crm.example.com/api");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_blank_overrides_ignored() {
        let config = AppConfig::default().with_overrides(Some("  "), None);
        assert_eq!(config.api_base_url, "/api");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"apiBaseUrl":"http://localhost:3000/api"}"#).unwrap();
        assert_eq!(config.api_base_url, "http://localhost:3000/api");
        assert_eq!(config.leads_page_size, 100);
    }
}
