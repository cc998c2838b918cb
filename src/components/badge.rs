use leptos::prelude::*;

use crm_core::derive::Badge;

#[component]
pub fn StatusBadge(badge: Badge) -> impl IntoView {
    view! {
        <span class=format!("px-2 inline-flex text-xs leading-5 font-semibold rounded-full {}", badge.class)>
            {badge.label}
        </span>
    }
}
