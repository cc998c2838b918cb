//! Record Editor
//!
//! Modal lifecycle as an explicit state machine:
//!
//! ```text
//! Closed ──open──▶ Creating / Editing ──submit──▶ Submitting ──ok──▶ Closed
//!                         ▲                            │
//!                         └──────── Error ◀───fail─────┘
//! ```
//!
//! The draft survives a failed submit so the user can correct and retry.

use serde_json::Value;
use tracing::{debug, info};

use crate::api::RecordApi;
use crate::error::{ApiError, ApiResult};
use crate::models::Record;

/// Form state bound to the modal inputs
pub trait FormDraft: Clone {
    type Record: Record;

    /// Seed an edit draft; date-time fields become `YYYY-MM-DD`
    fn from_record(record: &Self::Record) -> Self;

    /// Local validation before any request is sent
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }

    /// JSON body for POST/PUT
    fn to_payload(&self) -> Value;
}

/// What `begin_submit` hands to the transport
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitRequest {
    /// `None` creates, `Some` updates
    pub id: Option<i64>,
    pub payload: Value,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditorState<D> {
    #[default]
    Closed,
    Creating(D),
    Editing { id: i64, draft: D },
    Submitting { id: Option<i64>, draft: D },
    Error { id: Option<i64>, draft: D, message: String },
}

impl<D: FormDraft> EditorState<D> {
    pub fn open_create(&mut self, draft: D) {
        *self = EditorState::Creating(draft);
    }

    pub fn open_edit(&mut self, record: &D::Record) {
        *self = EditorState::Editing { id: record.id(), draft: D::from_record(record) };
    }

    pub fn close(&mut self) {
        *self = EditorState::Closed;
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, EditorState::Closed)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, EditorState::Submitting { .. })
    }

    /// Id of the record being edited, `None` when creating or closed
    pub fn editing_id(&self) -> Option<i64> {
        match self {
            EditorState::Closed | EditorState::Creating(_) => None,
            EditorState::Editing { id, .. } => Some(*id),
            EditorState::Submitting { id, .. } | EditorState::Error { id, .. } => *id,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id().is_some()
    }

    pub fn draft(&self) -> Option<&D> {
        match self {
            EditorState::Closed => None,
            EditorState::Creating(draft)
            | EditorState::Editing { draft, .. }
            | EditorState::Submitting { draft, .. }
            | EditorState::Error { draft, .. } => Some(draft),
        }
    }

    /// Mutable draft; unavailable while a submit is in flight
    pub fn draft_mut(&mut self) -> Option<&mut D> {
        match self {
            EditorState::Closed | EditorState::Submitting { .. } => None,
            EditorState::Creating(draft)
            | EditorState::Editing { draft, .. }
            | EditorState::Error { draft, .. } => Some(draft),
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            EditorState::Error { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Move to `Submitting` and produce the request.
    ///
    /// Returns `None` when closed, already submitting, or the draft fails
    /// validation (the state then carries the validation message).
    pub fn begin_submit(&mut self) -> Option<SubmitRequest> {
        let (id, draft) = match std::mem::take(self) {
            EditorState::Creating(draft) => (None, draft),
            EditorState::Editing { id, draft } => (Some(id), draft),
            EditorState::Error { id, draft, .. } => (id, draft),
            other => {
                *self = other;
                return None;
            }
        };
        if let Err(message) = draft.validate() {
            *self = EditorState::Error { id, draft, message };
            return None;
        }
        let request = SubmitRequest { id, payload: draft.to_payload() };
        *self = EditorState::Submitting { id, draft };
        Some(request)
    }

    /// Submit accepted: the modal closes and the draft is discarded
    pub fn succeed(&mut self) {
        *self = EditorState::Closed;
    }

    /// Submit rejected: stay open and show the message
    pub fn fail(&mut self, err: &ApiError) {
        let message = err.editor_message();
        *self = match std::mem::take(self) {
            EditorState::Submitting { id, draft }
            | EditorState::Error { id, draft, .. } => EditorState::Error { id, draft, message },
            EditorState::Creating(draft) => EditorState::Error { id: None, draft, message },
            EditorState::Editing { id, draft } => EditorState::Error { id: Some(id), draft, message },
            EditorState::Closed => EditorState::Closed,
        };
    }
}

/// POST when `request.id` is `None`, PUT otherwise
pub async fn persist<R, A>(api: &A, request: &SubmitRequest) -> ApiResult<()>
where
    R: Record,
    A: RecordApi<R> + ?Sized,
{
    match request.id {
        Some(id) => {
            debug!(id, "updating record");
            api.update(id, &request.payload).await?;
            info!(id, "record updated");
        }
        None => {
            api.create(&request.payload).await?;
            info!("record created");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::FakeApi;
    use crate::api::QueryParams;
    use crate::forms::CustomerDraft;
    use crate::models::Customer;
    use serde_json::json;

    fn customer(id: i64, first: &str) -> Customer {
        serde_json::from_value(json!({
            "id": id, "firstName": first, "lastName": "Kaya", "phone": "0532", "status": "active"
        }))
        .unwrap()
    }

    fn filled_draft() -> CustomerDraft {
        let mut draft = CustomerDraft::default();
        draft.first_name = "Zeynep".into();
        draft.last_name = "Ak".into();
        draft.phone = "0533 000 00 00".into();
        draft
    }

    #[test]
    fn test_open_edit_seeds_from_record() {
        let mut editor: EditorState<CustomerDraft> = EditorState::default();
        assert!(!editor.is_open());
        editor.open_edit(&customer(4, "Ali"));
        assert_eq!(editor.editing_id(), Some(4));
        assert_eq!(editor.draft().unwrap().first_name, "Ali");
    }

    #[test]
    fn test_failed_submit_keeps_draft_and_stays_open() {
        let mut editor = EditorState::default();
        editor.open_create(filled_draft());
        let request = editor.begin_submit().unwrap();
        assert_eq!(request.id, None);
        assert!(editor.is_submitting());
        assert!(editor.draft_mut().is_none());

        editor.fail(&ApiError::Status { status: 409, message: Some("Telefon kayıtlı".into()) });
        assert!(editor.is_open());
        assert_eq!(editor.error(), Some("⛔ Mükerrer kayıt: Telefon kayıtlı"));
        assert_eq!(editor.draft().unwrap().first_name, "Zeynep");

        // retry from the error state
        assert!(editor.begin_submit().is_some());
        editor.succeed();
        assert!(!editor.is_open());
    }

    #[test]
    fn test_invalid_draft_never_submits() {
        let mut editor: EditorState<CustomerDraft> = EditorState::default();
        editor.open_create(CustomerDraft::default());
        assert!(editor.begin_submit().is_none());
        assert!(editor.error().is_some());
        assert!(!editor.is_submitting());
    }

    #[test]
    fn test_begin_submit_when_closed_is_noop() {
        let mut editor: EditorState<CustomerDraft> = EditorState::default();
        assert!(editor.begin_submit().is_none());
        assert_eq!(editor, EditorState::Closed);
    }

    #[tokio::test]
    async fn test_create_then_refetch_shows_server_id() {
        let api = FakeApi::new(vec![customer(1, "Ali")]);
        let mut editor = EditorState::default();
        editor.open_create(filled_draft());

        let request = editor.begin_submit().unwrap();
        persist(&api, &request).await.unwrap();
        editor.succeed();

        let listing = api.list(&QueryParams::new()).await.unwrap();
        let created = listing.items.iter().find(|c| c.first_name == "Zeynep").unwrap();
        assert_eq!(created.id, 2);
    }

    #[tokio::test]
    async fn test_edit_sends_put_and_refetch_shows_value() {
        let api = FakeApi::new(vec![customer(1, "Ali")]);
        let mut editor: EditorState<CustomerDraft> = EditorState::default();
        editor.open_edit(&customer(1, "Ali"));
        editor.draft_mut().unwrap().city = "İstanbul".into();

        let request = editor.begin_submit().unwrap();
        assert_eq!(request.id, Some(1));
        persist(&api, &request).await.unwrap();

        let listing = api.list(&QueryParams::new()).await.unwrap();
        assert_eq!(listing.items[0].city.as_deref(), Some("İstanbul"));
        assert_eq!(api.creates.get(), 0);
    }

    #[tokio::test]
    async fn test_conflict_on_create() {
        let api: FakeApi<Customer> = FakeApi::new(vec![]);
        api.fail_next_create(ApiError::Status { status: 409, message: None });
        let mut editor = EditorState::default();
        editor.open_create(filled_draft());

        let request = editor.begin_submit().unwrap();
        match persist(&api, &request).await {
            Ok(()) => editor.succeed(),
            Err(err) => editor.fail(&err),
        }
        assert_eq!(editor.error(), Some("⛔ Mükerrer kayıt: Bir hata oluştu"));
        assert_eq!(api.len(), 0);
    }
}
