//! Bulk Actions
//!
//! Row selection on the leads table and the concurrent archive action.
//! There is no batch endpoint: each id gets its own request, and partial
//! success is reported rather than rolled back.

use std::collections::BTreeSet;

use futures::future::join_all;
use tracing::{info, warn};

use crate::api::{LeadPatch, RecordApi};
use crate::error::ApiError;
use crate::models::Lead;

/// Checked rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<i64>,
    all: bool,
}

impl Selection {
    pub fn toggle(&mut self, id: i64, checked: bool) {
        if checked {
            self.ids.insert(id);
        } else {
            self.ids.remove(&id);
            self.all = false;
        }
    }

    /// Header checkbox: select the given (visible) ids, or clear
    pub fn set_all(&mut self, checked: bool, visible: impl IntoIterator<Item = i64>) {
        self.all = checked;
        self.ids.clear();
        if checked {
            self.ids.extend(visible);
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
        self.all = false;
    }

    pub fn contains(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }

    pub fn all_checked(&self) -> bool {
        self.all
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> Vec<i64> {
        self.ids.iter().copied().collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BulkOutcome {
    pub archived: Vec<i64>,
    pub failed: Vec<(i64, ApiError)>,
}

impl BulkOutcome {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// Alert text when something failed
    pub fn failure_message(&self) -> Option<String> {
        let (_, first) = self.failed.first()?;
        let reason = first.user_message("Arşivleme işlemi başarısız");
        if self.archived.is_empty() {
            Some(reason)
        } else {
            Some(format!(
                "{} kayıt arşivlendi, {} kayıt arşivlenemedi: {}",
                self.archived.len(),
                self.failed.len(),
                reason
            ))
        }
    }
}

/// Archive every id concurrently, one request each
pub async fn archive_many<A>(api: &A, ids: &[i64]) -> BulkOutcome
where
    A: RecordApi<Lead> + ?Sized,
{
    let patch = LeadPatch::Archived(true);
    let results = join_all(ids.iter().map(|&id| {
        let patch = &patch;
        async move { (id, patch.send(api, id).await) }
    }))
    .await;

    let mut outcome = BulkOutcome::default();
    for (id, result) in results {
        match result {
            Ok(()) => outcome.archived.push(id),
            Err(err) => {
                warn!(id, error = %err, "archive failed");
                outcome.failed.push((id, err));
            }
        }
    }
    info!(archived = outcome.archived.len(), failed = outcome.failed.len(), "bulk archive finished");
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::FakeApi;
    use crate::api::{LeadQuery, QueryParams};

    #[test]
    fn test_unchecking_one_clears_select_all() {
        let mut selection = Selection::default();
        selection.set_all(true, [1, 2, 3]);
        assert!(selection.all_checked());
        selection.toggle(2, false);
        assert!(!selection.all_checked());
        assert_eq!(selection.ids(), vec![1, 3]);
        selection.set_all(false, []);
        assert!(selection.is_empty());
    }

    #[tokio::test]
    async fn test_archive_many_moves_records() {
        let api = FakeApi::with_leads(4);
        let outcome = archive_many(&api, &[1, 3]).await;
        assert!(outcome.is_complete());
        assert_eq!(outcome.archived, vec![1, 3]);
        assert_eq!(api.requests.get(), 2);

        let active = api.list(&QueryParams::new()).await.unwrap();
        assert_eq!(active.items.iter().map(|l| l.id).collect::<Vec<_>>(), vec![2, 4]);
        let archived = api.list(&LeadQuery::archived(1, 100).to_params()).await.unwrap();
        assert_eq!(archived.total_count, 2);
    }

    #[tokio::test]
    async fn test_partial_failure_is_reported_without_rollback() {
        let api = FakeApi::with_leads(3);
        api.fail_on(2);
        let outcome = archive_many(&api, &[1, 2, 3]).await;

        assert!(!outcome.is_complete());
        assert_eq!(outcome.archived, vec![1, 3]);
        assert_eq!(outcome.failed.len(), 1);
        assert_eq!(outcome.failed[0].0, 2);
        assert_eq!(
            outcome.failure_message().as_deref(),
            Some("2 kayıt arşivlendi, 1 kayıt arşivlenemedi: kayıt 2 güncellenemedi")
        );

        let archived = api.list(&LeadQuery::archived(1, 100).to_params()).await.unwrap();
        assert_eq!(archived.total_count, 2);
    }

    #[tokio::test]
    async fn test_total_failure_message() {
        let api = FakeApi::with_leads(1);
        let outcome = archive_many(&api, &[9]).await;
        assert_eq!(outcome.failure_message().as_deref(), Some("Kayıt bulunamadı"));
    }
}
