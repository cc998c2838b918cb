//! Login Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_navigate;
use tracing::{info, warn};

use crm_core::api::LoginRequest;

use crate::context::use_auth;
use crate::pages::{INPUT, PRIMARY_BUTTON};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let request = LoginRequest { email: email.get(), password: password.get() };
        if let Err(err) = request.validate() {
            set_error.set(Some(err.user_message("")));
            return;
        }
        set_error.set(None);
        set_submitting.set(true);
        let client = auth.public_client();
        let navigate = navigate.clone();
        spawn_local(async move {
            match client.login(&request).await {
                Ok(session) => {
                    info!(user = session.user.id, "signed in");
                    auth.sign_in(session);
                    navigate("/dashboard", Default::default());
                }
                Err(err) => {
                    warn!(error = %err, "login failed");
                    set_error.set(Some(err.user_message("Giriş başarısız")));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <Show when=move || !auth.is_authenticated() fallback=|| view! { <Redirect path="/dashboard"/> }>
            <div class="min-h-screen flex items-center justify-center bg-gray-100 px-4">
                <form class="bg-white rounded-lg shadow p-8 w-full max-w-md space-y-4" on:submit=on_submit.clone()>
                    <h1 class="text-2xl font-bold text-gray-900 text-center">"HAN CRM"</h1>
                    <p class="text-center text-gray-600">"Hesabınıza giriş yapın"</p>
                    {move || error.get().map(|msg| view! {
                        <div class="p-3 rounded bg-red-50 text-red-700 text-sm">{msg}</div>
                    })}
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">"E-posta"</label>
                        <input
                            type="email"
                            class=INPUT
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">"Şifre"</label>
                        <input
                            type="password"
                            class=INPUT
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </div>
                    <button type="submit" class=format!("{} w-full", PRIMARY_BUTTON) disabled=move || submitting.get()>
                        {move || if submitting.get() { "Giriş yapılıyor..." } else { "Giriş Yap" }}
                    </button>
                </form>
            </div>
        </Show>
    }
}
