use serde_json::{json, Value};

use crate::editor::FormDraft;
use crate::models::BlogPost;

/// Blog post form. `content` is the editor's HTML, captured right before submit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogDraft {
    pub title: String,
    pub excerpt: String,
    pub cover_image_url: String,
    pub is_published: bool,
    pub content: String,
}

impl BlogDraft {
    pub fn set_content(&mut self, html: impl Into<String>) {
        self.content = html.into();
    }
}

impl FormDraft for BlogDraft {
    type Record = BlogPost;

    fn from_record(post: &BlogPost) -> Self {
        Self {
            title: post.title.clone(),
            excerpt: post.excerpt.clone().unwrap_or_default(),
            cover_image_url: post.cover_image_url.clone().unwrap_or_default(),
            is_published: post.is_published,
            content: post.content.clone(),
        }
    }

    fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Başlık zorunludur".to_string());
        }
        Ok(())
    }

    fn to_payload(&self) -> Value {
        json!({
            "title": self.title.trim(),
            "excerpt": self.excerpt,
            "coverImageUrl": self.cover_image_url,
            "isPublished": self.is_published,
            "content": self.content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_carries_html_body() {
        let mut draft = BlogDraft { title: "Kadıköy'de kira".into(), ..Default::default() };
        draft.set_content("<p><strong>Merhaba</strong></p>");
        let payload = draft.to_payload();
        assert_eq!(payload["content"], json!("<p><strong>Merhaba</strong></p>"));
        assert_eq!(payload["isPublished"], json!(false));
    }
}
