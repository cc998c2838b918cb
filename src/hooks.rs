//! Page Hooks
//!
//! Glue between the `crm_core` state machines and Leptos signals.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::warn;

use crm_core::api::{Listing, RecordApi};
use crm_core::editor::{persist, EditorState, FormDraft};
use crm_core::listing::ListState;
use crm_core::models::Record;
use crm_core::ApiResult;

/// Run `fetch` and commit its result unless a newer load started meanwhile
pub fn load_list<R, Fut>(state: RwSignal<ListState<R>>, fetch: Fut)
where
    R: Record + Send + Sync,
    Fut: Future<Output = ApiResult<Listing<R>>> + 'static,
{
    let Some(ticket) = state.try_update(ListState::begin_load) else {
        return;
    };
    spawn_local(async move {
        let result = fetch.await;
        state.try_update(|s| match result {
            Ok(listing) => s.commit(ticket, listing),
            Err(err) => s.fail(ticket, &err),
        });
    });
}

/// Validate, send and settle the editor; `on_saved` runs after a success
pub fn submit_editor<D, A>(editor: RwSignal<EditorState<D>>, api: A, on_saved: impl FnOnce() + 'static)
where
    D: FormDraft + Send + Sync + 'static,
    A: RecordApi<D::Record> + 'static,
{
    let Some(request) = editor.try_update(EditorState::begin_submit).flatten() else {
        return;
    };
    spawn_local(async move {
        match persist::<D::Record, _>(&api, &request).await {
            Ok(()) => {
                editor.update(EditorState::succeed);
                on_saved();
            }
            Err(err) => editor.update(|e| e.fail(&err)),
        }
    });
}

/// Delete `id`; failures are alerted with the server message
pub fn delete_record<R, A>(api: A, id: i64, on_deleted: impl FnOnce() + 'static)
where
    R: Record + 'static,
    A: RecordApi<R> + 'static,
{
    spawn_local(async move {
        match api.delete(id).await {
            Ok(()) => on_deleted(),
            Err(err) => {
                warn!(id, error = %err, "delete failed");
                alert(&err.user_message("Silme işlemi başarısız"));
            }
        }
    });
}

/// Reactive read of one draft field
pub fn draft_value<D>(editor: RwSignal<EditorState<D>>, get: fn(&D) -> String) -> impl Fn() -> String + Copy
where
    D: FormDraft + Send + Sync + 'static,
{
    move || editor.with(|e| e.draft().map(get).unwrap_or_default())
}

/// `on:input` handler writing one draft field
pub fn draft_input<D>(editor: RwSignal<EditorState<D>>, set: fn(&mut D, String)) -> impl Fn(web_sys::Event) + Copy
where
    D: FormDraft + Send + Sync + 'static,
{
    move |ev| {
        let value = event_target_value(&ev);
        editor.update(|e| {
            if let Some(draft) = e.draft_mut() {
                set(draft, value);
            }
        });
    }
}

/// `on:change` handler for a draft checkbox
pub fn draft_check<D>(editor: RwSignal<EditorState<D>>, set: fn(&mut D, bool)) -> impl Fn(web_sys::Event) + Copy
where
    D: FormDraft + Send + Sync + 'static,
{
    move |ev| {
        let checked = event_target_checked(&ev);
        editor.update(|e| {
            if let Some(draft) = e.draft_mut() {
                set(draft, checked);
            }
        });
    }
}

// ========================
// Browser dialogs
// ========================

pub fn confirm(message: &str) -> bool {
    window().confirm_with_message(message).unwrap_or(false)
}

pub fn alert(message: &str) {
    if window().alert_with_message(message).is_err() {
        warn!(message, "alert could not be shown");
    }
}
