//! REST Client
//!
//! Typed access to the CRM backend. `RecordApi` is the seam the generic
//! list/editor pattern is written against; the remaining modules wrap the
//! page-specific endpoints.

mod client;
mod query;
mod resource;
mod auth;
mod leads;
mod blog;
mod google;
mod settings;
mod reports;

#[cfg(test)]
pub(crate) mod fake;

pub use client::ApiClient;
pub use query::{ActivityLogQuery, BlogQuery, EmailLogQuery, LeadQuery, QueryParams};
pub(crate) use query::URI_COMPONENT;
pub use resource::{ListShape, Listing, RecordApi, RestResource};
pub use auth::LoginRequest;
pub use leads::LeadPatch;
pub use blog::set_published;
pub use google::{ImportRequest, MappingSelection, SheetBundle};
pub use settings::NewRecipient;
