//! Users Page
//!
//! Staff accounts with their role assignment.

use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::warn;

use crm_core::api::{QueryParams, RecordApi, RestResource};
use crm_core::editor::EditorState;
use crm_core::forms::UserDraft;
use crm_core::listing::ListState;
use crm_core::models::{Role, User};

use crate::components::{
    ConfirmDeleteButton, EditorActions, EmptyRow, ErrorBanner, Field, LoadingRow, Modal, SearchBox,
};
use crate::context::use_auth;
use crate::hooks::{delete_record, draft_check, draft_input, draft_value, load_list, submit_editor};
use crate::pages::{INPUT, PRIMARY_BUTTON, TD, TH};

#[component]
pub fn UsersPage() -> impl IntoView {
    let auth = use_auth();
    let list = RwSignal::new(ListState::<User>::new());
    let editor = RwSignal::new(EditorState::<UserDraft>::Closed);
    let (roles, set_roles) = signal(Vec::<Role>::new());
    let (reload, set_reload) = signal(0u32);
    let refresh = move || set_reload.update(|n| *n += 1);

    Effect::new(move |_| {
        reload.track();
        let api = RestResource::users(&auth.client());
        load_list(list, async move { api.list(&QueryParams::new()).await });
    });

    // Role choices for the editor
    Effect::new(move |_| {
        let api = RestResource::roles(&auth.client());
        spawn_local(async move {
            match api.list(&QueryParams::new()).await {
                Ok(listing) => set_roles.set(listing.items),
                Err(err) => warn!(error = %err, "role list unavailable"),
            }
        });
    });

    let gate = move || auth.gate("users");
    let on_delete = move |id: i64| {
        delete_record(RestResource::users(&auth.client()), id, refresh);
    };

    view! {
        <div>
            <div class="mb-6">
                <h1 class="text-2xl font-bold text-gray-900">"Kullanıcı Yönetimi"</h1>
                <p class="text-gray-600 mt-1">"Sistem kullanıcılarını ve rollerini yönetin"</p>
            </div>
            <div class="bg-white rounded-lg shadow">
                <div class="p-6 border-b flex flex-col sm:flex-row justify-between gap-4">
                    <SearchBox
                        value=Signal::derive(move || list.with(|l| l.search_term().to_string()))
                        on_input=move |term: String| list.update(|l| l.set_search(term))
                        placeholder="Kullanıcı ara..."
                    />
                    <Show when=move || gate().create>
                        <button class=PRIMARY_BUTTON on:click=move |_| editor.update(|e| e.open_create(UserDraft::default()))>
                            "Yeni Kullanıcı"
                        </button>
                    </Show>
                </div>
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-gray-200">
                        <thead class="bg-gray-50">
                            <tr>
                                <th class=TH>"Ad Soyad"</th>
                                <th class=TH>"E-posta"</th>
                                <th class=TH>"Rol"</th>
                                <th class=TH>"Durum"</th>
                                <Show when=move || gate().shows_actions_column()>
                                    <th class=TH>"İşlemler"</th>
                                </Show>
                            </tr>
                        </thead>
                        <tbody class="bg-white divide-y divide-gray-200">
                            {move || {
                                if list.with(|l| l.loading()) {
                                    return view! { <LoadingRow colspan=5/> }.into_any();
                                }
                                let rows: Vec<User> = list.with(|l| l.visible().into_iter().cloned().collect());
                                if rows.is_empty() {
                                    return view! { <EmptyRow colspan=5 message="Kullanıcı bulunamadı"/> }.into_any();
                                }
                                let gate = gate();
                                rows.into_iter().map(|user| {
                                    let id = user.id;
                                    let for_edit = user.clone();
                                    let role = user.role.as_ref().map(|r| r.name.clone()).unwrap_or_else(|| "-".into());
                                    let (status_class, status_label) = if user.is_active {
                                        ("bg-green-100 text-green-800", "Aktif")
                                    } else {
                                        ("bg-gray-100 text-gray-800", "Pasif")
                                    };
                                    view! {
                                        <tr class="hover:bg-gray-50">
                                            <td class=format!("{} font-medium text-gray-900", TD)>{user.full_name()}</td>
                                            <td class=format!("{} text-gray-500", TD)>{user.email.clone()}</td>
                                            <td class=TD>{role}</td>
                                            <td class=TD>
                                                <span class=format!("px-2 py-1 text-xs font-semibold rounded-full {}", status_class)>
                                                    {status_label}
                                                </span>
                                            </td>
                                            {gate.shows_actions_column().then(|| view! {
                                                <td class=format!("{} space-x-3", TD)>
                                                    {gate.update.then(|| view! {
                                                        <button
                                                            class="text-blue-600 hover:text-blue-900"
                                                            on:click=move |_| editor.update(|e| e.open_edit(&for_edit))
                                                        >
                                                            "Düzenle"
                                                        </button>
                                                    })}
                                                    {gate.delete.then(|| view! {
                                                        <ConfirmDeleteButton on_confirm=move |_| on_delete(id)/>
                                                    })}
                                                </td>
                                            })}
                                        </tr>
                                    }
                                }).collect_view().into_any()
                            }}
                        </tbody>
                    </table>
                </div>
            </div>
            <Show when=move || editor.with(EditorState::is_open)>
                <UserEditor editor=editor roles=roles on_saved=Callback::new(move |_| refresh())/>
            </Show>
        </div>
    }
}

#[component]
fn UserEditor(
    editor: RwSignal<EditorState<UserDraft>>,
    roles: ReadSignal<Vec<Role>>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let auth = use_auth();
    let editing = Signal::derive(move || editor.with(EditorState::is_editing));
    let title = Signal::derive(move || {
        if editing.get() { "Kullanıcıyı Düzenle" } else { "Yeni Kullanıcı" }.to_string()
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let api = RestResource::users(&auth.client());
        submit_editor(editor, api, move || on_saved.run(()));
    };

    view! {
        <Modal title=title on_close=move |_| editor.update(EditorState::close)>
            <form class="space-y-4" on:submit=on_submit>
                <ErrorBanner message=Signal::derive(move || editor.with(|e| e.error().map(str::to_string)))/>
                <div class="grid grid-cols-2 gap-4">
                    <Field label="Ad">
                        <input type="text" class=INPUT required=true
                            prop:value=draft_value(editor, |d| d.first_name.clone())
                            on:input=draft_input(editor, |d, v| d.first_name = v)/>
                    </Field>
                    <Field label="Soyad">
                        <input type="text" class=INPUT required=true
                            prop:value=draft_value(editor, |d| d.last_name.clone())
                            on:input=draft_input(editor, |d, v| d.last_name = v)/>
                    </Field>
                </div>
                <Field label="E-posta">
                    <input type="email" class=INPUT required=true
                        prop:value=draft_value(editor, |d| d.email.clone())
                        on:input=draft_input(editor, |d, v| d.email = v)/>
                </Field>
                <Field label="Şifre">
                    <input type="password" class=INPUT
                        placeholder=move || if editing.get() { "Değiştirmek için yeni şifre girin" } else { "" }
                        prop:value=draft_value(editor, |d| d.password.clone())
                        on:input=draft_input(editor, |d, v| d.password = v)/>
                </Field>
                <Field label="Rol">
                    <select class=INPUT
                        prop:value=draft_value(editor, |d| d.role_id.clone())
                        on:change=draft_input(editor, |d, v| d.role_id = v)>
                        <option value="">"Rol seçin..."</option>
                        <For
                            each=move || roles.get()
                            key=|role| role.id
                            children=|role| view! { <option value=role.id.to_string()>{role.name}</option> }
                        />
                    </select>
                </Field>
                <label class="flex items-center gap-2 text-sm text-gray-700">
                    <input type="checkbox"
                        prop:checked=move || editor.with(|e| e.draft().is_some_and(|d| d.is_active))
                        on:change=draft_check(editor, |d, v| d.is_active = v)/>
                    "Aktif"
                </label>
                <EditorActions
                    editing=editing
                    submitting=Signal::derive(move || editor.with(EditorState::is_submitting))
                    on_cancel=move |_| editor.update(EditorState::close)
                />
            </form>
        </Modal>
    }
}
