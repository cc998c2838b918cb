//! HAN CRM core
//!
//! Everything below the components: REST models and client, the permission
//! gate, list/editor state, form drafts and the derived-field rules. No DOM
//! access here, so all of it is testable natively.

pub mod error;
pub mod config;
pub mod models;
pub mod api;
pub mod permissions;
pub mod listing;
pub mod editor;
pub mod forms;
pub mod derive;
pub mod import;
pub mod bulk;
pub mod notifications;
pub mod dashboard;

pub use config::AppConfig;
pub use error::{ApiError, ApiResult};
pub use permissions::{PermissionSet, ResourceGate, Session};
