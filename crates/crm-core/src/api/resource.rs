//! Record API - Core Trait
//!
//! The generic list view and record editor only ever talk to this trait,
//! so pages stay agnostic of the transport.

use std::marker::PhantomData;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use super::client::ApiClient;
use super::query::QueryParams;
use crate::error::ApiResult;
use crate::models::{BlogPost, Customer, Lead, Record, Role, User};

/// One fetched page of records
#[derive(Debug, Clone, PartialEq)]
pub struct Listing<R> {
    pub items: Vec<R>,
    pub total_count: u32,
    pub total_pages: u32,
}

impl<R> Listing<R> {
    /// Whole collection in a single page
    pub fn unpaged(items: Vec<R>) -> Self {
        let total_count = items.len() as u32;
        Self { items, total_count, total_pages: 1 }
    }
}

/// CRUD over one REST collection
///
/// Futures are not `Send`: the browser client is single-threaded.
#[async_trait(?Send)]
pub trait RecordApi<R: Record> {
    /// Fetch one page with the given filters
    async fn list(&self, query: &QueryParams) -> ApiResult<Listing<R>>;

    /// Create from a draft payload
    async fn create(&self, body: &Value) -> ApiResult<()>;

    /// Update (full draft or partial patch)
    async fn update(&self, id: i64, body: &Value) -> ApiResult<()>;

    /// Delete by id
    async fn delete(&self, id: i64) -> ApiResult<()>;
}

/// How a collection endpoint lays out `data`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListShape {
    /// `{ data: [...] }`
    Bare,
    /// `{ data: { <key>: [...], totalCount, totalPages } }`, bare arrays also accepted
    Keyed(&'static str),
}

/// `RecordApi` backed by the REST backend
#[derive(Debug, Clone)]
pub struct RestResource<R> {
    client: ApiClient,
    path: &'static str,
    shape: ListShape,
    _record: PhantomData<fn() -> R>,
}

impl<R> RestResource<R> {
    pub fn new(client: ApiClient, path: &'static str, shape: ListShape) -> Self {
        Self { client, path, shape, _record: PhantomData }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}

impl RestResource<Customer> {
    pub fn customers(client: &ApiClient) -> Self {
        Self::new(client.clone(), "/customers", ListShape::Bare)
    }
}

impl RestResource<Lead> {
    pub fn leads(client: &ApiClient) -> Self {
        Self::new(client.clone(), "/leads", ListShape::Keyed("leads"))
    }
}

impl RestResource<Role> {
    pub fn roles(client: &ApiClient) -> Self {
        Self::new(client.clone(), "/roles", ListShape::Bare)
    }
}

impl RestResource<BlogPost> {
    pub fn blog_posts(client: &ApiClient) -> Self {
        Self::new(client.clone(), "/blog", ListShape::Keyed("posts"))
    }
}

impl RestResource<User> {
    pub fn users(client: &ApiClient) -> Self {
        Self::new(client.clone(), "/users", ListShape::Keyed("users"))
    }
}

#[async_trait(?Send)]
impl<R> RecordApi<R> for RestResource<R>
where
    R: Record + DeserializeOwned,
{
    async fn list(&self, query: &QueryParams) -> ApiResult<Listing<R>> {
        let path = format!("{}{}", self.path, query.to_query_string());
        let data: Value = self.client.get_data(&path).await?;
        let listing = decode_listing(data, self.shape)?;
        debug!(resource = self.path, count = listing.items.len(), total = listing.total_count, "listed");
        Ok(listing)
    }

    async fn create(&self, body: &Value) -> ApiResult<()> {
        self.client.post_unit(self.path, body).await
    }

    async fn update(&self, id: i64, body: &Value) -> ApiResult<()> {
        self.client.put_unit(&format!("{}/{}", self.path, id), body).await
    }

    async fn delete(&self, id: i64) -> ApiResult<()> {
        self.client.delete(&format!("{}/{}", self.path, id)).await
    }
}

/// Normalize the `data` member of a list response.
///
/// Missing counters fall back to the item count and a single page.
pub(crate) fn decode_listing<R: DeserializeOwned>(data: Value, shape: ListShape) -> ApiResult<Listing<R>> {
    match (data, shape) {
        (Value::Array(items), _) => {
            let items: Vec<R> = serde_json::from_value(Value::Array(items))?;
            Ok(Listing::unpaged(items))
        }
        (Value::Object(mut map), ListShape::Keyed(key)) => {
            let items: Vec<R> = match map.remove(key) {
                Some(items) => serde_json::from_value(items)?,
                None => Vec::new(),
            };
            let counter = |name: &str| map.get(name).and_then(Value::as_u64).map(|n| n as u32);
            let total_count = counter("totalCount").unwrap_or(items.len() as u32);
            let total_pages = counter("totalPages").filter(|p| *p > 0).unwrap_or(1);
            Ok(Listing { items, total_count, total_pages })
        }
        (other, _) => {
            let items: Vec<R> = serde_json::from_value(other)?;
            Ok(Listing::unpaged(items))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_keyed_listing_reads_counters() {
        let data = json!({
            "leads": [{ "id": 1, "firstName": "Ali", "lastName": "Kaya", "phone": "0532" }],
            "totalCount": 150,
            "totalPages": 2
        });
        let listing: Listing<Lead> = decode_listing(data, ListShape::Keyed("leads")).unwrap();
        assert_eq!(listing.items.len(), 1);
        assert_eq!(listing.total_count, 150);
        assert_eq!(listing.total_pages, 2);
    }

    #[test]
    fn test_keyed_listing_defaults() {
        let listing: Listing<Lead> = decode_listing(json!({}), ListShape::Keyed("leads")).unwrap();
        assert!(listing.items.is_empty());
        assert_eq!(listing.total_pages, 1);
    }

    #[test]
    fn test_users_accept_bare_array() {
        let data = json!([{ "id": 4, "firstName": "Can", "lastName": "Ak", "email": "c@x.com", "isActive": true }]);
        let listing: Listing<User> = decode_listing(data, ListShape::Keyed("users")).unwrap();
        assert_eq!(listing.total_count, 1);
        assert_eq!(listing.items[0].id, 4);
    }

    #[test]
    fn test_bad_shape_is_decode_error() {
        let result: ApiResult<Listing<Role>> = decode_listing(json!("nope"), ListShape::Bare);
        assert!(matches!(result, Err(crate::error::ApiError::Decode(_))));
    }
}
