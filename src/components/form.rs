//! Form building blocks shared by the record editors

use leptos::prelude::*;

use crate::pages::{PRIMARY_BUTTON, SECONDARY_BUTTON};

/// Labelled form row
#[component]
pub fn Field(label: &'static str, children: Children) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm font-medium text-gray-700 mb-1">{label}</label>
            {children()}
        </div>
    }
}

/// Red box above the form; hidden when `message` is `None`
#[component]
pub fn ErrorBanner(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message.get().map(|msg| view! {
            <div class="p-3 rounded bg-red-50 text-red-700 text-sm">{msg}</div>
        })
    }
}

/// İptal + Oluştur/Güncelle
#[component]
pub fn EditorActions(
    #[prop(into)] editing: Signal<bool>,
    #[prop(into)] submitting: Signal<bool>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="flex gap-3 pt-4">
            <button type="button" class=format!("flex-1 {}", SECONDARY_BUTTON) on:click=move |_| on_cancel.run(())>
                "İptal"
            </button>
            <button type="submit" class=format!("flex-1 {}", PRIMARY_BUTTON) disabled=move || submitting.get()>
                {move || if editing.get() { "Güncelle" } else { "Oluştur" }}
            </button>
        </div>
    }
}
