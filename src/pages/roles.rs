//! Roles and Permissions Page

use leptos::prelude::*;

use crm_core::api::{QueryParams, RecordApi, RestResource};
use crm_core::editor::EditorState;
use crm_core::forms::RoleDraft;
use crm_core::listing::ListState;
use crm_core::models::Role;
use crm_core::permissions::{permission_label, PERMISSION_CATALOG};

use crate::components::{ConfirmDeleteButton, EditorActions, ErrorBanner, Field, Modal};
use crate::context::use_auth;
use crate::hooks::{delete_record, draft_input, draft_value, load_list, submit_editor};
use crate::pages::{INPUT, PRIMARY_BUTTON};

#[component]
pub fn RolesPage() -> impl IntoView {
    let auth = use_auth();
    let list = RwSignal::new(ListState::<Role>::new());
    let editor = RwSignal::new(EditorState::<RoleDraft>::Closed);
    let (reload, set_reload) = signal(0u32);
    let refresh = move || set_reload.update(|n| *n += 1);

    Effect::new(move |_| {
        reload.track();
        let api = RestResource::roles(&auth.client());
        load_list(list, async move { api.list(&QueryParams::new()).await });
    });

    let gate = move || auth.gate("roles");
    let on_delete = move |id: i64| {
        delete_record(RestResource::roles(&auth.client()), id, refresh);
    };

    view! {
        <div>
            <div class="mb-6">
                <h1 class="text-2xl font-bold text-gray-900">"Rol ve Yetki Yönetimi"</h1>
                <p class="text-gray-600 mt-1">"Kullanıcı rollerini ve yetkilerini yönetin"</p>
            </div>
            <div class="bg-white rounded-lg shadow">
                <div class="p-6 border-b flex justify-between items-center">
                    <h2 class="text-lg font-semibold text-gray-900">"Roller"</h2>
                    <Show when=move || gate().create>
                        <button class=PRIMARY_BUTTON on:click=move |_| editor.update(|e| e.open_create(RoleDraft::default()))>
                            "Yeni Rol"
                        </button>
                    </Show>
                </div>
                <div class="p-6">
                    {move || {
                        if list.with(|l| l.loading()) {
                            return view! { <div class="text-center text-gray-500 py-8">"Yükleniyor..."</div> }.into_any();
                        }
                        let roles = list.with(|l| l.items().to_vec());
                        if roles.is_empty() {
                            return view! { <div class="text-center text-gray-500 py-8">"Rol bulunamadı"</div> }.into_any();
                        }
                        let gate = gate();
                        view! {
                            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                                {roles.into_iter().map(|role| {
                                    let id = role.id;
                                    let for_edit = role.clone();
                                    let labels = role
                                        .permissions
                                        .iter()
                                        .map(|p| permission_label(p).to_string())
                                        .collect::<Vec<_>>()
                                        .join(", ");
                                    view! {
                                        <div class="border border-gray-200 rounded-lg p-4 hover:shadow-md transition-shadow">
                                            <div class="flex justify-between items-start mb-3">
                                                <div>
                                                    <h3 class="font-semibold text-gray-900">{role.name.clone()}</h3>
                                                    {role.description.clone().filter(|d| !d.is_empty()).map(|d| view! {
                                                        <p class="text-sm text-gray-600 mt-1">{d}</p>
                                                    })}
                                                </div>
                                                {gate.shows_actions_column().then(|| view! {
                                                    <div class="flex space-x-2 text-sm">
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
                                                    </div>
                                                })}
                                            </div>
                                            <div class="text-sm text-gray-600" title=labels>
                                                <span class="font-medium">{role.permissions.len()}</span>
                                                " yetki"
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        }.into_any()
                    }}
                </div>
            </div>
            <Show when=move || editor.with(EditorState::is_open)>
                <RoleEditor editor=editor on_saved=Callback::new(move |_| refresh())/>
            </Show>
        </div>
    }
}

#[component]
fn RoleEditor(editor: RwSignal<EditorState<RoleDraft>>, on_saved: Callback<()>) -> impl IntoView {
    let auth = use_auth();
    let editing = Signal::derive(move || editor.with(EditorState::is_editing));
    let title = Signal::derive(move || if editing.get() { "Rolü Düzenle" } else { "Yeni Rol" }.to_string());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let api = RestResource::roles(&auth.client());
        submit_editor(editor, api, move || on_saved.run(()));
    };

    view! {
        <Modal title=title on_close=move |_| editor.update(EditorState::close)>
            <form class="space-y-4" on:submit=on_submit>
                <ErrorBanner message=Signal::derive(move || editor.with(|e| e.error().map(str::to_string)))/>
                <Field label="Rol Adı">
                    <input type="text" class=INPUT required=true
                        prop:value=draft_value(editor, |d| d.name.clone())
                        on:input=draft_input(editor, |d, v| d.name = v)/>
                </Field>
                <Field label="Açıklama">
                    <textarea class=INPUT rows=3
                        prop:value=draft_value(editor, |d| d.description.clone())
                        on:input=draft_input(editor, |d, v| d.description = v)/>
                </Field>
                <Field label="Yetkiler">
                    <div class="border border-gray-300 rounded-lg p-4 max-h-96 overflow-y-auto">
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-3">
                            {PERMISSION_CATALOG.iter().map(|perm| {
                                let token = perm.value;
                                view! {
                                    <label class="flex items-center space-x-2 cursor-pointer">
                                        <input type="checkbox" class="h-4 w-4 rounded border-gray-300"
                                            prop:checked=move || editor.with(|e| e.draft().is_some_and(|d| d.grants(token)))
                                            on:change=move |_| editor.update(|e| {
                                                if let Some(draft) = e.draft_mut() {
                                                    draft.toggle_permission(token);
                                                }
                                            })/>
                                        <span class="text-sm text-gray-700">{perm.label}</span>
                                    </label>
                                }
                            }).collect_view()}
                        </div>
                    </div>
                </Field>
                <EditorActions
                    editing=editing
                    submitting=Signal::derive(move || editor.with(EditorState::is_submitting))
                    on_cancel=move |_| editor.update(EditorState::close)
                />
            </form>
        </Modal>
    }
}
