//! Dashboard Layout
//!
//! Sidebar with the permission-filtered navigation, user card and logout.
//! Renders a redirect to `/login` when there is no session.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Outlet, Redirect, A};
use leptos_router::hooks::{use_location, use_navigate};
use tracing::{info, warn};

use crate::context::use_auth;

#[component]
pub fn DashboardLayout() -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show
            when=move || auth.is_authenticated()
            fallback=|| view! { <Redirect path="/login"/> }
        >
            <div class="flex min-h-screen bg-gray-100">
                <Sidebar/>
                <main class="flex-1 p-6 overflow-x-auto">
                    <Outlet/>
                </main>
            </div>
        </Show>
    }
}

#[component]
fn Sidebar() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let location = use_location();
    let version = auth.config().app_version;

    let logout = move |_| {
        let client = auth.client();
        auth.sign_out();
        info!("signed out");
        spawn_local(async move {
            if let Err(err) = client.logout().await {
                warn!(error = %err, "logout request failed");
            }
        });
        navigate("/login", Default::default());
    };

    view! {
        <aside class="w-64 bg-gray-900 text-gray-100 flex flex-col">
            <div class="px-6 py-5 border-b border-gray-800">
                <span class="text-xl font-bold">"HAN CRM"</span>
            </div>
            <nav class="flex-1 px-3 py-4 space-y-1">
                {move || {
                    auth.navigation()
                        .into_iter()
                        .map(|item| {
                            let active = move || location.pathname.get() == item.href;
                            view! {
                                <A href=item.href>
                                    <span class=move || {
                                        if active() {
                                            "block px-3 py-2 rounded-md bg-gray-800 text-white"
                                        } else {
                                            "block px-3 py-2 rounded-md text-gray-300 hover:bg-gray-800"
                                        }
                                    }>{item.name}</span>
                                </A>
                            }
                        })
                        .collect_view()
                }}
            </nav>
            {move || auth.session().map(|session| {
                let role = session.role_name().to_string();
                view! {
                    <div class="px-4 py-3 border-t border-gray-800 flex items-center gap-3">
                        <div class="w-9 h-9 rounded-full bg-blue-600 flex items-center justify-center text-sm font-semibold">
                            {session.user.initials()}
                        </div>
                        <div class="text-sm">
                            <div>{format!("{} {}", session.user.first_name, session.user.last_name)}</div>
                            <div class="text-gray-400">{role}</div>
                        </div>
                    </div>
                }
            })}
            <div class="px-4 py-3 border-t border-gray-800">
                <button class="w-full text-left text-sm text-red-300 hover:text-red-200" on:click=logout>
                    "Çıkış Yap"
                </button>
                <p class="mt-2 text-xs text-gray-500">{format!("v{}", version)}</p>
            </div>
        </aside>
    }
}
