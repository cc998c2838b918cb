use serde::{Deserialize, Serialize};

use super::entity::Record;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: i64,
    pub title: String,
    pub slug: String,
    /// HTML body
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl BlogPost {
    /// Date shown on public pages
    pub fn display_date(&self) -> &str {
        self.published_at.as_deref().unwrap_or(&self.created_at)
    }
}

impl Record for BlogPost {
    fn id(&self) -> i64 {
        self.id
    }
}
