//! Confirm Delete Button Component
//!
//! Inline delete confirmation with confirm/cancel actions.

use leptos::prelude::*;

/// Shows "Sil" initially. When clicked, shows "Silinsin mi?" with ✓/✗ buttons.
///
/// # Arguments
/// * `label` - text of the initial button
/// * `on_confirm` - Callback to execute when user confirms deletion
#[component]
pub fn ConfirmDeleteButton(
    #[prop(into, default = "Sil".to_string())] label: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);

    view! {
        <Show
            when=move || confirming.get()
            fallback=move || {
                let label = label.clone();
                view! {
                    <button
                        class="text-red-600 hover:text-red-900"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_confirming.set(true);
                        }
                    >
                        {label}
                    </button>
                }
            }
        >
            <span class="inline-flex items-center gap-1 text-sm">
                <span class="text-gray-600">"Silinsin mi?"</span>
                <button
                    class="px-1 text-red-600 font-bold"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    class="px-1 text-gray-500"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
