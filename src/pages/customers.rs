//! Customers Page

use leptos::prelude::*;

use crm_core::api::{QueryParams, RecordApi, RestResource};
use crm_core::derive::{customer_status_badge, CUSTOMER_STATUSES};
use crm_core::editor::EditorState;
use crm_core::forms::CustomerDraft;
use crm_core::listing::ListState;
use crm_core::models::Customer;

use crate::components::{
    ConfirmDeleteButton, EditorActions, EmptyRow, ErrorBanner, Field, LoadingRow, Modal, SearchBox, StatusBadge,
};
use crate::context::use_auth;
use crate::hooks::{delete_record, draft_input, draft_value, load_list, submit_editor};
use crate::pages::{INPUT, PRIMARY_BUTTON, TD, TH};

#[component]
pub fn CustomersPage() -> impl IntoView {
    let auth = use_auth();
    let list = RwSignal::new(ListState::<Customer>::new());
    let editor = RwSignal::new(EditorState::<CustomerDraft>::Closed);
    let (reload, set_reload) = signal(0u32);
    let refresh = move || set_reload.update(|n| *n += 1);

    Effect::new(move |_| {
        reload.track();
        let api = RestResource::customers(&auth.client());
        load_list(list, async move { api.list(&QueryParams::new()).await });
    });

    let gate = move || auth.gate("customers");
    let on_delete = move |id: i64| {
        delete_record(RestResource::customers(&auth.client()), id, refresh);
    };

    view! {
        <div>
            <div class="mb-6">
                <h1 class="text-2xl font-bold text-gray-900">"Müşteri Yönetimi"</h1>
                <p class="text-gray-600 mt-1">"Müşterilerinizi yönetin"</p>
            </div>
            <div class="bg-white rounded-lg shadow">
                <div class="p-6 border-b flex flex-col sm:flex-row justify-between gap-4">
                    <SearchBox
                        value=Signal::derive(move || list.with(|l| l.search_term().to_string()))
                        on_input=move |term: String| list.update(|l| l.set_search(term))
                        placeholder="Müşteri ara..."
                    />
                    <Show when=move || gate().create>
                        <button class=PRIMARY_BUTTON on:click=move |_| editor.update(|e| e.open_create(CustomerDraft::default()))>
                            "Yeni Müşteri"
                        </button>
                    </Show>
                </div>
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-gray-200">
                        <thead class="bg-gray-50">
                            <tr>
                                <th class=TH>"Ad Soyad"</th>
                                <th class=TH>"Telefon"</th>
                                <th class=TH>"Şehir"</th>
                                <th class=TH>"Emlak Tipi"</th>
                                <th class=TH>"Durum"</th>
                                <Show when=move || gate().shows_actions_column()>
                                    <th class=TH>"İşlemler"</th>
                                </Show>
                            </tr>
                        </thead>
                        <tbody class="bg-white divide-y divide-gray-200">
                            {move || {
                                if list.with(|l| l.loading()) {
                                    return view! { <LoadingRow colspan=6/> }.into_any();
                                }
                                let rows: Vec<Customer> = list.with(|l| l.visible().into_iter().cloned().collect());
                                if rows.is_empty() {
                                    return view! { <EmptyRow colspan=6 message="Müşteri bulunamadı"/> }.into_any();
                                }
                                let gate = gate();
                                rows.into_iter().map(|customer| {
                                    let id = customer.id;
                                    let for_edit = customer.clone();
                                    view! {
                                        <tr class="hover:bg-gray-50">
                                            <td class=format!("{} font-medium text-gray-900", TD)>
                                                {format!("{} {}", customer.first_name, customer.last_name)}
                                            </td>
                                            <td class=TD>{customer.phone.clone()}</td>
                                            <td class=TD>{customer.city.clone().unwrap_or_else(|| "-".into())}</td>
                                            <td class=TD>{customer.property_type.clone().unwrap_or_else(|| "-".into())}</td>
                                            <td class=TD><StatusBadge badge=customer_status_badge(&customer.status)/></td>
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
                <CustomerEditor editor=editor on_saved=Callback::new(move |_| refresh())/>
            </Show>
        </div>
    }
}

#[component]
fn CustomerEditor(editor: RwSignal<EditorState<CustomerDraft>>, on_saved: Callback<()>) -> impl IntoView {
    let auth = use_auth();
    let title = Signal::derive(move || {
        if editor.with(EditorState::is_editing) { "Müşteriyi Düzenle" } else { "Yeni Müşteri" }.to_string()
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let api = RestResource::customers(&auth.client());
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
                    <input type="email" class=INPUT
                        prop:value=draft_value(editor, |d| d.email.clone())
                        on:input=draft_input(editor, |d, v| d.email = v)/>
                </Field>
                <Field label="Telefon">
                    <input type="tel" class=INPUT required=true
                        prop:value=draft_value(editor, |d| d.phone.clone())
                        on:input=draft_input(editor, |d, v| d.phone = v)/>
                </Field>
                <div class="grid grid-cols-2 gap-4">
                    <Field label="Şehir">
                        <input type="text" class=INPUT
                            prop:value=draft_value(editor, |d| d.city.clone())
                            on:input=draft_input(editor, |d, v| d.city = v)/>
                    </Field>
                    <Field label="Emlak Tipi">
                        <input type="text" class=INPUT
                            prop:value=draft_value(editor, |d| d.property_type.clone())
                            on:input=draft_input(editor, |d, v| d.property_type = v)/>
                    </Field>
                </div>
                <div class="grid grid-cols-2 gap-4">
                    <Field label="Bütçe">
                        <input type="number" class=INPUT
                            prop:value=draft_value(editor, |d| d.budget.clone())
                            on:input=draft_input(editor, |d, v| d.budget = v)/>
                    </Field>
                    <Field label="Durum">
                        <select class=INPUT
                            prop:value=draft_value(editor, |d| d.status.clone())
                            on:change=draft_input(editor, |d, v| d.status = v)>
                            {CUSTOMER_STATUSES.iter().map(|s| view! { <option value=s.code>{s.label}</option> }).collect_view()}
                        </select>
                    </Field>
                </div>
                <Field label="Adres">
                    <textarea class=INPUT rows=2
                        prop:value=draft_value(editor, |d| d.address.clone())
                        on:input=draft_input(editor, |d, v| d.address = v)/>
                </Field>
                <Field label="Notlar">
                    <textarea class=INPUT rows=3
                        prop:value=draft_value(editor, |d| d.notes.clone())
                        on:input=draft_input(editor, |d, v| d.notes = v)/>
                </Field>
                <EditorActions
                    editing=Signal::derive(move || editor.with(EditorState::is_editing))
                    submitting=Signal::derive(move || editor.with(EditorState::is_submitting))
                    on_cancel=move |_| editor.update(EditorState::close)
                />
            </form>
        </Modal>
    }
}
