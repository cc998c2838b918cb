//! Placeholder table rows

use leptos::prelude::*;

#[component]
pub fn LoadingRow(colspan: u32) -> impl IntoView {
    view! {
        <tr>
            <td colspan=colspan class="px-6 py-8 text-center text-gray-500">"Yükleniyor..."</td>
        </tr>
    }
}

#[component]
pub fn EmptyRow(colspan: u32, #[prop(into)] message: String) -> impl IntoView {
    view! {
        <tr>
            <td colspan=colspan class="px-6 py-8 text-center text-gray-500">{message}</td>
        </tr>
    }
}
