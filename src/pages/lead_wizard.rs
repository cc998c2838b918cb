//! Lead Wizard
//!
//! Three-step create/edit modal. Steps only gate navigation; the draft
//! lives in the editor state and is submitted once, from the last step.

use leptos::prelude::*;

use crm_core::api::RestResource;
use crm_core::derive::{LEAD_SOURCES, LISTING_STATUSES, LISTING_TYPES, PROPERTY_STATUSES};
use crm_core::editor::EditorState;
use crm_core::forms::{LeadDraft, LeadForm, LeadStep};

use crate::components::{ErrorBanner, Field, Modal};
use crate::context::use_auth;
use crate::hooks::{alert, draft_check, draft_input, draft_value, submit_editor};
use crate::pages::{INPUT, PRIMARY_BUTTON, SECONDARY_BUTTON};

#[component]
pub fn LeadWizard(
    editor: RwSignal<EditorState<LeadDraft>>,
    form: RwSignal<LeadForm>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let auth = use_auth();
    let step = move || form.with(LeadForm::step);
    let title = Signal::derive(move || {
        let heading = if editor.with(EditorState::is_editing) { "Düzenle" } else { "Yeni Potansiyel Müşteri" };
        format!("{} · Adım {} / 3", heading, step().number())
    });
    let close = move || {
        editor.update(EditorState::close);
        form.update(LeadForm::reset);
    };

    let on_back = move |_| {
        if !form.try_update(LeadForm::back).unwrap_or(false) {
            close();
        }
    };
    let on_next = move |_| {
        let Some(draft) = editor.with_untracked(|e| e.draft().cloned()) else {
            return;
        };
        if let Some(Err(msg)) = form.try_update(|f| f.advance(&draft)) {
            alert(msg);
        }
    };
    let on_submit = move |_| {
        if !form.with_untracked(LeadForm::can_submit) {
            return;
        }
        let api = RestResource::leads(&auth.client());
        submit_editor(editor, api, move || {
            form.update(LeadForm::reset);
            on_saved.run(());
        });
    };

    view! {
        <Modal title=title on_close=move |_| close() width="max-w-lg">
            <StepIndicator current=Signal::derive(step)/>
            <ErrorBanner message=Signal::derive(move || editor.with(|e| e.error().map(str::to_string)))/>
            <div class="space-y-4 py-4">
                {move || match step() {
                    LeadStep::Contact => view! { <ContactStep editor=editor/> }.into_any(),
                    LeadStep::Listing => view! { <ListingStep editor=editor/> }.into_any(),
                    LeadStep::FollowUp => view! { <FollowUpStep editor=editor/> }.into_any(),
                }}
            </div>
            <div class="flex justify-between pt-4 border-t">
                <button type="button" class=SECONDARY_BUTTON on:click=on_back>
                    {move || if form.with(LeadForm::is_first) { "İptal" } else { "Geri" }}
                </button>
                <Show
                    when=move || form.with(LeadForm::is_last)
                    fallback=move || view! {
                        <button type="button" class=PRIMARY_BUTTON on:click=on_next>"İleri"</button>
                    }
                >
                    <button
                        type="button"
                        class="px-6 py-2 bg-green-600 text-white rounded-md text-sm hover:bg-green-700 disabled:opacity-50"
                        disabled=move || editor.with(EditorState::is_submitting)
                        on:click=on_submit
                    >
                        {move || if editor.with(EditorState::is_editing) { "Güncelle" } else { "Kaydet" }}
                    </button>
                </Show>
            </div>
        </Modal>
    }
}

#[component]
fn StepIndicator(current: Signal<LeadStep>) -> impl IntoView {
    view! {
        <div class="flex gap-2">
            {LeadStep::ALL.into_iter().map(|s| view! {
                <div class="flex-1 text-center">
                    <div class=move || {
                        if current.get() >= s {
                            "mx-auto w-8 h-8 rounded-full flex items-center justify-center text-sm bg-blue-600 text-white"
                        } else {
                            "mx-auto w-8 h-8 rounded-full flex items-center justify-center text-sm bg-gray-200 text-gray-600"
                        }
                    }>{s.number()}</div>
                    <div class="mt-1 text-xs text-gray-500">{s.title()}</div>
                </div>
            }).collect_view()}
        </div>
    }
}

#[component]
fn ContactStep(editor: RwSignal<EditorState<LeadDraft>>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 gap-3">
            <Field label="Ad *">
                <input type="text" class=INPUT placeholder="Ad"
                    prop:value=draft_value(editor, |d| d.first_name.clone())
                    on:input=draft_input(editor, |d, v| d.first_name = v)/>
            </Field>
            <Field label="Soyad *">
                <input type="text" class=INPUT placeholder="Soyad"
                    prop:value=draft_value(editor, |d| d.last_name.clone())
                    on:input=draft_input(editor, |d, v| d.last_name = v)/>
            </Field>
        </div>
        <Field label="Telefon *">
            <input type="tel" class=INPUT placeholder="05XX XXX XX XX"
                prop:value=draft_value(editor, |d| d.phone.clone())
                on:input=draft_input(editor, |d, v| d.phone = v)/>
        </Field>
        <Field label="İlan Linki">
            <input type="url" class=INPUT placeholder="https://sahibinden.com/ilan/..."
                prop:value=draft_value(editor, |d| d.listing_url.clone())
                on:input=draft_input(editor, |d, v| d.listing_url = v)/>
        </Field>
        <Field label="E-posta">
            <input type="email" class=INPUT placeholder="ornek@email.com"
                prop:value=draft_value(editor, |d| d.email.clone())
                on:input=draft_input(editor, |d, v| d.email = v)/>
        </Field>
    }
}

#[component]
fn ListingStep(editor: RwSignal<EditorState<LeadDraft>>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 gap-3">
            <Field label="İlan Tipi">
                <select class=INPUT
                    prop:value=draft_value(editor, |d| d.listing_type.clone())
                    on:change=draft_input(editor, |d, v| d.listing_type = v)>
                    <option value="">"Seçiniz"</option>
                    {LISTING_TYPES.iter().map(|t| view! { <option value=t.code>{t.label}</option> }).collect_view()}
                </select>
            </Field>
            <Field label="İlan Durumu">
                <select class=INPUT
                    prop:value=draft_value(editor, |d| d.listing_status.clone())
                    on:change=draft_input(editor, |d, v| d.listing_status = v)>
                    {LISTING_STATUSES.iter().map(|t| view! { <option value=t.code>{t.label}</option> }).collect_view()}
                </select>
            </Field>
        </div>
        <Field label="İlgi Alanı">
            <input type="text" class=INPUT placeholder="Örn: Kadıköy, 3+1"
                prop:value=draft_value(editor, |d| d.interest.clone())
                on:input=draft_input(editor, |d, v| d.interest = v)/>
        </Field>
        <Field label="Bütçe (TL)">
            <input type="number" class=INPUT placeholder="Örn: 5000000"
                prop:value=draft_value(editor, |d| d.budget.clone())
                on:input=draft_input(editor, |d, v| d.budget = v)/>
        </Field>
        <Field label="Kaynak">
            <select class=INPUT
                prop:value=draft_value(editor, |d| d.source.clone())
                on:change=draft_input(editor, |d, v| d.source = v)>
                {LEAD_SOURCES.iter().map(|t| view! { <option value=t.code>{t.label}</option> }).collect_view()}
            </select>
        </Field>
    }
}

#[component]
fn FollowUpStep(editor: RwSignal<EditorState<LeadDraft>>) -> impl IntoView {
    view! {
        <Field label="Durum">
            <select class=INPUT
                prop:value=draft_value(editor, |d| d.property_status.clone())
                on:change=draft_input(editor, |d, v| d.property_status = v)>
                {PROPERTY_STATUSES.iter().map(|t| view! { <option value=t.code>{t.label}</option> }).collect_view()}
            </select>
        </Field>
        <div class="grid grid-cols-2 gap-3">
            <Field label="Sonraki Takip">
                <input type="date" class=INPUT
                    prop:value=draft_value(editor, |d| d.next_follow_up.clone())
                    on:input=draft_input(editor, |d, v| d.next_follow_up = v)/>
            </Field>
            <Field label="Hatırlatma">
                <input type="date" class=INPUT
                    prop:value=draft_value(editor, |d| d.reminder_date.clone())
                    on:input=draft_input(editor, |d, v| d.reminder_date = v)/>
            </Field>
        </div>
        <label class="flex items-center p-3 bg-gray-50 rounded-lg gap-3 text-sm font-medium text-gray-700">
            <input type="checkbox" class="h-5 w-5"
                prop:checked=move || editor.with(|e| e.draft().is_some_and(|d| d.is_agenda))
                on:change=draft_check(editor, |d, v| d.is_agenda = v)/>
            "Ajandaya Ekle"
        </label>
        <Field label="Notlar">
            <textarea class=INPUT rows=3 placeholder="Ek bilgiler..."
                prop:value=draft_value(editor, |d| d.notes.clone())
                on:input=draft_input(editor, |d, v| d.notes = v)/>
        </Field>
    }
}
