//! Pager: previous, a window of page numbers, next

use leptos::prelude::*;

#[component]
pub fn Pagination(
    #[prop(into)] current: Signal<u32>,
    #[prop(into)] total_pages: Signal<u32>,
    #[prop(into)] pages: Signal<Vec<u32>>,
    #[prop(into)] on_page: Callback<u32>,
) -> impl IntoView {
    let button = "px-3 py-1 rounded border text-sm disabled:opacity-50";

    view! {
        <div class="flex items-center justify-end px-4 py-3 border-t">
            <div class="flex gap-1">
                <button
                    class=button
                    disabled=move || current.get() <= 1
                    on:click=move |_| on_page.run(current.get().saturating_sub(1))
                >
                    "Önceki"
                </button>
                <For
                    each=move || pages.get()
                    key=|page| *page
                    children=move |page| {
                        view! {
                            <button
                                class=move || {
                                    if current.get() == page {
                                        "px-3 py-1 rounded border text-sm bg-blue-600 text-white"
                                    } else {
                                        "px-3 py-1 rounded border text-sm hover:bg-gray-50"
                                    }
                                }
                                on:click=move |_| on_page.run(page)
                            >
                                {page}
                            </button>
                        }
                    }
                />
                <button
                    class=button
                    disabled=move || current.get() >= total_pages.get()
                    on:click=move |_| on_page.run(current.get() + 1)
                >
                    "Sonraki"
                </button>
            </div>
        </div>
    }
}
