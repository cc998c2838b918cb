//! Lead-specific writes: partial patches on `PUT /leads/:id`

use serde_json::{json, Value};

use super::resource::RecordApi;
use crate::error::ApiResult;
use crate::models::Lead;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeadPatch {
    Archived(bool),
    ListingStatus(String),
}

impl LeadPatch {
    pub fn to_body(&self) -> Value {
        match self {
            LeadPatch::Archived(archived) => json!({ "isArchived": archived }),
            LeadPatch::ListingStatus(status) => json!({ "listingStatus": status }),
        }
    }

    /// Apply the same change to a locally held copy
    pub fn apply(&self, lead: &mut Lead) {
        match self {
            LeadPatch::Archived(archived) => lead.is_archived = Some(*archived),
            LeadPatch::ListingStatus(status) => lead.listing_status = Some(status.clone()),
        }
    }

    pub async fn send<A>(&self, api: &A, id: i64) -> ApiResult<()>
    where
        A: RecordApi<Lead> + ?Sized,
    {
        api.update(id, &self.to_body()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::FakeApi;
    use crate::api::QueryParams;

    #[test]
    fn test_patch_bodies() {
        assert_eq!(LeadPatch::Archived(false).to_body(), json!({ "isArchived": false }));
        assert_eq!(
            LeadPatch::ListingStatus("sold".into()).to_body(),
            json!({ "listingStatus": "sold" })
        );
    }

    #[tokio::test]
    async fn test_listing_status_patch_reaches_server() {
        let api = FakeApi::with_leads(3);
        LeadPatch::ListingStatus("rented".into()).send(&api, 2).await.unwrap();
        let listing = api.list(&QueryParams::new()).await.unwrap();
        let lead = listing.items.iter().find(|l| l.id == 2).unwrap();
        assert_eq!(lead.listing_status.as_deref(), Some("rented"));
    }
}
