//! Blog endpoints outside the generic CRUD pattern

use serde_json::json;

use super::client::ApiClient;
use super::query::BlogQuery;
use super::resource::{decode_listing, ListShape, Listing, RecordApi};
use crate::error::{ApiError, ApiResult};
use crate::models::{BlogPost, UploadedImage};

/// Flip the published flag of a post
pub async fn set_published<A>(api: &A, id: i64, published: bool) -> ApiResult<()>
where
    A: RecordApi<BlogPost> + ?Sized,
{
    api.update(id, &json!({ "isPublished": published })).await
}

impl ApiClient {
    /// Public listing (`/blog?isPublished=true&page&limit`)
    pub async fn blog_page(&self, query: &BlogQuery) -> ApiResult<Listing<BlogPost>> {
        let path = format!("/blog{}", query.to_params().to_query_string());
        let data: serde_json::Value = self.get_data(&path).await?;
        decode_listing(data, ListShape::Keyed("posts"))
    }

    /// `GET /blog/slug/:slug`; `Ok(None)` on 404
    pub async fn blog_post_by_slug(&self, slug: &str) -> ApiResult<Option<BlogPost>> {
        let encoded = percent_encoding::utf8_percent_encode(slug, super::URI_COMPONENT).to_string();
        match self.get_data::<BlogPost>(&format!("/blog/slug/{}", encoded)).await {
            Ok(post) => Ok(Some(post)),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Multipart `POST /upload/image`, field `file`; returns the stored URL
    pub async fn upload_image(&self, file_name: &str, mime: &str, bytes: Vec<u8>) -> ApiResult<String> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime)
            .map_err(|e| ApiError::InvalidInput(e.to_string()))?;
        let form = reqwest::multipart::Form::new().part("file", part);
        let uploaded: UploadedImage = self.post_multipart("/upload/image", form).await?;
        Ok(uploaded.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::FakeApi;
    use crate::api::QueryParams;

    #[tokio::test]
    async fn test_publish_toggle_sends_flag() {
        let api: FakeApi<BlogPost> = FakeApi::new(vec![]);
        api.create(&json!({ "title": "Yeni", "slug": "yeni", "isPublished": false }))
            .await
            .unwrap();
        let id = api.list(&QueryParams::new()).await.unwrap().items[0].id;

        set_published(&api, id, true).await.unwrap();

        let post = &api.list(&QueryParams::new()).await.unwrap().items[0];
        assert!(post.is_published);
        assert_eq!(api.last_update_body(), Some(json!({ "isPublished": true })));
    }
}
