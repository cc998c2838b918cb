//! Query strings
//!
//! Filters left empty are never sent.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters escaped the way `encodeURIComponent` escapes them
pub(crate) const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Ordered key/value pairs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(&'static str, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, key: &'static str, value: impl ToString) -> Self {
        self.0.push((key, value.to_string()));
        self
    }

    /// Push only when `value` is non-empty
    pub fn push_nonempty(self, key: &'static str, value: &str) -> Self {
        if value.is_empty() {
            self
        } else {
            self.push(key, value)
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `""` or `"?a=1&b=2"`
    pub fn to_query_string(&self) -> String {
        if self.0.is_empty() {
            return String::new();
        }
        let pairs: Vec<String> = self
            .0
            .iter()
            .map(|(k, v)| format!("{}={}", k, utf8_percent_encode(v, URI_COMPONENT)))
            .collect();
        format!("?{}", pairs.join("&"))
    }
}

/// `GET /leads` parameters
///
/// String filters hold the raw `<select>` value; `""` means "all".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadQuery {
    pub page: u32,
    pub limit: u32,
    pub is_archived: Option<bool>,
    pub property_status: String,
    pub listing_type: String,
    pub listing_status: String,
    pub assigned_to: String,
    pub is_agenda: String,
    pub is_stale: String,
}

impl LeadQuery {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page,
            limit,
            is_archived: None,
            property_status: String::new(),
            listing_type: String::new(),
            listing_status: String::new(),
            assigned_to: String::new(),
            is_agenda: String::new(),
            is_stale: String::new(),
        }
    }

    pub fn archived(page: u32, limit: u32) -> Self {
        Self {
            is_archived: Some(true),
            ..Self::new(page, limit)
        }
    }

    pub fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new().push("page", self.page).push("limit", self.limit);
        if let Some(archived) = self.is_archived {
            params = params.push("isArchived", archived);
        }
        params
            .push_nonempty("propertyStatus", &self.property_status)
            .push_nonempty("listingType", &self.listing_type)
            .push_nonempty("listingStatus", &self.listing_status)
            .push_nonempty("assignedTo", &self.assigned_to)
            .push_nonempty("isAgenda", &self.is_agenda)
            .push_nonempty("isStale", &self.is_stale)
    }
}

/// `GET /blog` parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogQuery {
    pub published_only: bool,
    pub page: Option<u32>,
    pub limit: u32,
}

impl BlogQuery {
    /// Management listing: everything, one large page
    pub fn management(limit: u32) -> Self {
        Self { published_only: false, page: None, limit }
    }

    /// Public listing: published posts only, paginated
    pub fn public(page: u32, limit: u32) -> Self {
        Self { published_only: true, page: Some(page), limit }
    }

    pub fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        if self.published_only {
            params = params.push("isPublished", true);
        }
        if let Some(page) = self.page {
            params = params.push("page", page);
        }
        params.push("limit", self.limit)
    }
}

/// `GET /activitylogs` parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityLogQuery {
    pub limit: u32,
    pub action_type: String,
}

impl ActivityLogQuery {
    pub fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .push("limit", self.limit)
            .push_nonempty("actionType", &self.action_type)
    }
}

/// `GET /email-logs` parameters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmailLogQuery {
    pub page: u32,
    pub limit: u32,
}

impl EmailLogQuery {
    pub fn to_params(&self) -> QueryParams {
        QueryParams::new().push("page", self.page).push("limit", self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lead_query_omits_empty_filters() {
        let mut query = LeadQuery::new(2, 100);
        query.property_status = "arandi".into();
        query.is_stale = "true".into();
        assert_eq!(
            query.to_params().to_query_string(),
            "?page=2&limit=100&propertyStatus=arandi&isStale=true"
        );
    }

    #[test]
    fn test_archived_query() {
        let query = LeadQuery::archived(1, 100);
        assert_eq!(query.to_params().to_query_string(), "?page=1&limit=100&isArchived=true");
    }

    #[test]
    fn test_blog_queries() {
        assert_eq!(BlogQuery::management(100).to_params().to_query_string(), "?limit=100");
        assert_eq!(
            BlogQuery::public(3, 9).to_params().to_query_string(),
            "?isPublished=true&page=3&limit=9"
        );
    }

    #[test]
    fn test_values_are_escaped() {
        let params = QueryParams::new().push("actionType", "a b&c");
        assert_eq!(params.to_query_string(), "?actionType=a%20b%26c");
        assert_eq!(QueryParams::new().to_query_string(), "");
    }

    #[test]
    fn test_activity_log_query() {
        let query = ActivityLogQuery { limit: 100, action_type: String::new() };
        assert_eq!(query.to_params().get("actionType"), None);
        let query = ActivityLogQuery { limit: 100, action_type: "login".into() };
        assert_eq!(query.to_params().get("actionType"), Some("login"));
    }
}
