//! System Settings
//!
//! One tab per notification type for its recipients, plus the email log.

use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::warn;

use crm_core::api::{EmailLogQuery, NewRecipient, QueryParams, RecordApi, RestResource};
use crm_core::derive::format_tr_datetime;
use crm_core::models::{EmailLog, Recipient, User};
use crm_core::notifications::{available_users, recipient_lines, NotificationType, SettingsTab};

use crate::context::use_auth;
use crate::hooks::confirm;

const FAILURE: &str = "Hata oluştu.";

#[component]
pub fn SettingsPage() -> impl IntoView {
    let auth = use_auth();
    let (tab, set_tab) = signal(SettingsTab::default());
    let (users, set_users) = signal(Vec::<User>::new());

    Effect::new(move |_| {
        let api = RestResource::users(&auth.client());
        let query = QueryParams::new().push("page", 1).push("limit", 100);
        spawn_local(async move {
            match api.list(&query).await {
                Ok(listing) => set_users.set(listing.items),
                Err(err) => warn!(error = %err, "user list unavailable"),
            }
        });
    });

    view! {
        <div class="max-w-4xl mx-auto">
            <h1 class="text-2xl font-bold text-gray-900 mb-6">"Sistem Ayarları"</h1>
            <div class="bg-white rounded-xl shadow-sm border border-gray-200">
                <div class="flex border-b border-gray-200 overflow-x-auto">
                    {SettingsTab::all().into_iter().map(|item| view! {
                        <button
                            class=move || if tab.get() == item {
                                "flex-shrink-0 py-3 px-5 text-sm font-medium whitespace-nowrap border-b-2 border-blue-600 text-blue-600"
                            } else {
                                "flex-shrink-0 py-3 px-5 text-sm font-medium whitespace-nowrap text-gray-500 hover:text-gray-700"
                            }
                            on:click=move |_| set_tab.set(item)
                        >
                            {item.label()}
                        </button>
                    }).collect_view()}
                </div>
                <div class="p-6">
                    {move || match tab.get().notification() {
                        Some(kind) => view! { <RecipientsPanel kind=kind users=users/> }.into_any(),
                        None => view! { <EmailLogsPanel/> }.into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}

#[component]
fn RecipientsPanel(kind: NotificationType, users: ReadSignal<Vec<User>>) -> impl IntoView {
    let auth = use_auth();
    let (recipients, set_recipients) = signal(Vec::<Recipient>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let (selected_user, set_selected_user) = signal(String::new());
    let (external_email, set_external_email) = signal(String::new());
    let (reload, set_reload) = signal(0u32);

    Effect::new(move |_| {
        reload.track();
        set_loading.set(true);
        let client = auth.client();
        spawn_local(async move {
            match client.recipients(kind).await {
                Ok(list) => set_recipients.set(list),
                Err(err) => {
                    warn!(kind = kind.as_str(), error = %err, "recipient list failed");
                    set_recipients.set(Vec::new());
                }
            }
            set_loading.set(false);
        });
    });

    let add = move |recipient: NewRecipient| {
        set_error.set(None);
        let client = auth.client();
        spawn_local(async move {
            match client.add_recipient(kind, &recipient).await {
                Ok(()) => {
                    match recipient {
                        NewRecipient::User(_) => set_selected_user.set(String::new()),
                        NewRecipient::Email(_) => set_external_email.set(String::new()),
                    }
                    set_reload.update(|n| *n += 1);
                }
                Err(err) => set_error.set(Some(err.user_message(FAILURE))),
            }
        });
    };
    let add_user = move || {
        if let Ok(id) = selected_user.get_untracked().parse::<i64>() {
            add(NewRecipient::User(id));
        }
    };
    let add_email = move || {
        let email = external_email.get_untracked().trim().to_string();
        if !email.is_empty() {
            add(NewRecipient::Email(email));
        }
    };
    let remove = move |id: i64| {
        let client = auth.client();
        spawn_local(async move {
            match client.remove_recipient(kind, id).await {
                Ok(()) => set_recipients.update(|list| list.retain(|r| r.id != id)),
                Err(err) => {
                    warn!(id, error = %err, "recipient removal failed");
                    set_error.set(Some("Silme işlemi başarısız.".to_string()));
                }
            }
        });
    };

    let candidates = move || {
        users.with(|all| {
            recipients.with(|subscribed| {
                available_users(all, subscribed)
                    .into_iter()
                    .map(|u| (u.id, format!("{} ({})", u.full_name(), u.email)))
                    .collect::<Vec<_>>()
            })
        })
    };

    view! {
        <p class="text-sm text-gray-500 mb-6">{kind.description()}</p>
        <div class="flex gap-2 mb-3">
            <select
                class="flex-1 border border-gray-300 rounded-lg px-3 py-2 text-sm"
                prop:value=move || selected_user.get()
                on:change=move |ev| set_selected_user.set(event_target_value(&ev))
            >
                <option value="">"Kullanıcı seçin..."</option>
                {move || candidates().into_iter().map(|(id, label)| view! {
                    <option value=id.to_string()>{label}</option>
                }).collect_view()}
            </select>
            <button
                class="px-4 py-2 bg-blue-600 text-white rounded-lg text-sm hover:bg-blue-700 disabled:opacity-40"
                disabled=move || selected_user.with(String::is_empty)
                on:click=move |_| add_user()
            >
                "Kullanıcı Ekle"
            </button>
        </div>
        <div class="flex gap-2 mb-6">
            <input
                type="email"
                class="flex-1 border border-gray-300 rounded-lg px-3 py-2 text-sm"
                placeholder="harici@email.com"
                prop:value=move || external_email.get()
                on:input=move |ev| set_external_email.set(event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        add_email();
                    }
                }
            />
            <button
                class="px-4 py-2 bg-gray-700 text-white rounded-lg text-sm hover:bg-gray-800 disabled:opacity-40"
                disabled=move || external_email.with(String::is_empty)
                on:click=move |_| add_email()
            >
                "Email Ekle"
            </button>
        </div>
        {move || error.get().map(|msg| view! { <p class="text-sm text-red-600 mb-4">{msg}</p> })}
        {move || {
            if loading.get() {
                return view! { <div class="text-center py-8 text-gray-400 text-sm">"Yükleniyor..."</div> }.into_any();
            }
            let list = recipients.get();
            if list.is_empty() {
                return view! { <div class="text-center py-8 text-gray-400 text-sm">"Henüz alıcı eklenmedi."</div> }.into_any();
            }
            view! {
                <ul class="divide-y divide-gray-100 border border-gray-100 rounded-lg overflow-hidden">
                    {list.into_iter().map(|recipient| {
                        let id = recipient.id;
                        let (main, secondary) = recipient_lines(&recipient);
                        view! {
                            <li class="flex items-center justify-between px-4 py-3 bg-white hover:bg-gray-50">
                                <div>
                                    <span class="text-sm font-medium text-gray-900">{main}</span>
                                    <span class="ml-2 text-xs text-gray-400">{secondary}</span>
                                </div>
                                <button class="text-sm text-red-500 hover:text-red-700" on:click=move |_| remove(id)>
                                    "Kaldır"
                                </button>
                            </li>
                        }
                    }).collect_view()}
                </ul>
            }.into_any()
        }}
    }
}

#[component]
fn EmailLogsPanel() -> impl IntoView {
    let auth = use_auth();
    let limit = auth.config().email_log_page_size;
    let (logs, set_logs) = signal(Vec::<EmailLog>::new());
    let (total, set_total) = signal(0u32);
    let (page, set_page) = signal(1u32);
    let (total_pages, set_total_pages) = signal(1u32);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let (reload, set_reload) = signal(0u32);

    Effect::new(move |_| {
        reload.track();
        let query = EmailLogQuery { page: page.get(), limit };
        set_loading.set(true);
        let client = auth.client();
        spawn_local(async move {
            match client.email_logs(&query).await {
                Ok(result) => {
                    set_logs.set(result.logs);
                    set_total.set(result.total);
                    set_total_pages.set(result.total_pages.max(1));
                }
                Err(err) => {
                    warn!(error = %err, "email log fetch failed");
                    set_logs.set(Vec::new());
                }
            }
            set_loading.set(false);
        });
    });

    let clear = move |_| {
        if !confirm("Tüm email logları silinsin mi?") {
            return;
        }
        let client = auth.client();
        spawn_local(async move {
            match client.clear_email_logs().await {
                Ok(()) => {
                    set_logs.set(Vec::new());
                    set_total.set(0);
                }
                Err(err) => {
                    warn!(error = %err, "email log clear failed");
                    set_error.set(Some("Loglar silinemedi.".to_string()));
                }
            }
        });
    };

    view! {
        <div class="flex items-center justify-between mb-4">
            <p class="text-sm text-gray-500">
                "Son email gönderim denemeleri. Toplam: " <strong>{move || total.get()}</strong>
            </p>
            <div class="flex gap-2">
                <button class="px-3 py-1.5 border border-gray-300 rounded-lg text-sm hover:bg-gray-50"
                    on:click=move |_| set_reload.update(|n| *n += 1)>
                    "Yenile"
                </button>
                <button class="px-3 py-1.5 border border-red-300 text-red-600 rounded-lg text-sm hover:bg-red-50" on:click=clear>
                    "Temizle"
                </button>
            </div>
        </div>
        {move || error.get().map(|msg| view! { <p class="text-sm text-red-600 mb-4">{msg}</p> })}
        {move || {
            if loading.get() {
                return view! { <div class="text-center py-10 text-gray-400 text-sm">"Yükleniyor..."</div> }.into_any();
            }
            let rows = logs.get();
            if rows.is_empty() {
                return view! { <div class="text-center py-10 text-gray-400 text-sm">"Henüz email logu yok."</div> }.into_any();
            }
            view! {
                <div class="overflow-x-auto rounded-lg border border-gray-100">
                    <table class="w-full text-sm">
                        <thead>
                            <tr class="bg-gray-50 text-left text-xs text-gray-500 uppercase">
                                <th class="px-3 py-2 w-8"></th>
                                <th class="px-3 py-2">"Alıcı"</th>
                                <th class="px-3 py-2">"Konu"</th>
                                <th class="px-3 py-2 whitespace-nowrap">"Tarih"</th>
                                <th class="px-3 py-2">"Hata"</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-gray-100">
                            {rows.into_iter().map(|log| {
                                let (row_class, mark, mark_class) = if log.success {
                                    ("hover:bg-gray-50", "✓", "text-green-500")
                                } else {
                                    ("bg-red-50 hover:bg-red-100", "✗", "text-red-500")
                                };
                                let failure = log.error_message.clone().unwrap_or_default();
                                let shown = if failure.is_empty() { "-".to_string() } else { failure.clone() };
                                view! {
                                    <tr class=row_class>
                                        <td class=format!("px-3 py-2 {}", mark_class)>{mark}</td>
                                        <td class="px-3 py-2 text-gray-700 max-w-[160px] truncate" title=log.to.clone()>{log.to.clone()}</td>
                                        <td class="px-3 py-2 text-gray-600 max-w-[220px] truncate" title=log.subject.clone()>{log.subject.clone()}</td>
                                        <td class="px-3 py-2 text-gray-500 whitespace-nowrap text-xs">
                                            {format_tr_datetime(&log.sent_at).unwrap_or_else(|| log.sent_at.clone())}
                                        </td>
                                        <td class="px-3 py-2 text-red-600 text-xs max-w-[200px] truncate" title=failure>
                                            {shown}
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>
            }.into_any()
        }}
        <Show when=move || (total_pages.get() > 1)>
            <div class="flex justify-center items-center gap-3 mt-4 text-sm">
                <button class="px-3 py-1 border rounded disabled:opacity-40 hover:bg-gray-50"
                    disabled=move || page.get() <= 1
                    on:click=move |_| set_page.update(|p| *p = p.saturating_sub(1).max(1))>
                    "‹"
                </button>
                <span class="text-gray-500">{move || format!("{} / {}", page.get(), total_pages.get())}</span>
                <button class="px-3 py-1 border rounded disabled:opacity-40 hover:bg-gray-50"
                    disabled=move || page.get() >= total_pages.get()
                    on:click=move |_| set_page.update(|p| *p += 1)>
                    "›"
                </button>
            </div>
        </Show>
    }
}
