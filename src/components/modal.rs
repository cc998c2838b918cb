//! Modal dialog shell

use leptos::prelude::*;

#[component]
pub fn Modal(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] on_close: Callback<()>,
    /// Tailwind max-width class
    #[prop(default = "max-w-2xl")] width: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/50 p-4">
            <div class=format!("bg-white rounded-lg shadow-xl w-full {} max-h-[90vh] overflow-y-auto", width)>
                <div class="flex items-center justify-between border-b px-6 py-4">
                    <h2 class="text-lg font-semibold text-gray-900">{move || title.get()}</h2>
                    <button class="text-gray-400 hover:text-gray-600 text-xl" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                </div>
                <div class="px-6 py-4">{children()}</div>
            </div>
        </div>
    }
}
