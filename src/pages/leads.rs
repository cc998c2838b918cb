//! Leads Page
//!
//! Server-paginated pipeline table with filters, bulk archive, listing
//! preview and the three-step wizard.

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::warn;

use crm_core::api::{LeadPatch, LeadQuery, QueryParams, RecordApi, RestResource};
use crm_core::bulk::{archive_many, Selection};
use crm_core::derive::{
    format_tr_date, is_stale, lead_source_label, listing_status_badge, listing_type_badge,
    property_status_badge, reminder_tone, whatsapp_link, LISTING_STATUSES, LISTING_TYPES,
    PROPERTY_STATUSES,
};
use crm_core::editor::EditorState;
use crm_core::forms::{LeadDraft, LeadForm};
use crm_core::listing::ListState;
use crm_core::models::{Lead, User};

use super::lead_wizard::LeadWizard;
use crate::components::{ConfirmDeleteButton, EmptyRow, LoadingRow, Pagination, SearchBox, StatusBadge};
use crate::context::use_auth;
use crate::hooks::{alert, confirm, delete_record, load_list};
use crate::pages::{PRIMARY_BUTTON, TD, TH};

const FILTER: &str = "px-3 py-2 border border-gray-300 rounded-lg text-sm";

/// Preview toggle styles: (code, label, selected, idle)
const STATUS_TOGGLES: &[(&str, &str, &str, &str)] = &[
    ("active", "Aktif", "bg-green-600 text-white", "bg-green-100 text-green-800 hover:bg-green-200"),
    ("passive", "Pasif", "bg-gray-600 text-white", "bg-gray-100 text-gray-800 hover:bg-gray-200"),
    ("sold", "Satıldı", "bg-blue-600 text-white", "bg-blue-100 text-blue-800 hover:bg-blue-200"),
    ("rented", "Kiralandı", "bg-purple-600 text-white", "bg-purple-100 text-purple-800 hover:bg-purple-200"),
];

#[component]
pub fn LeadsPage() -> impl IntoView {
    let auth = use_auth();
    let page_size = auth.config().leads_page_size;

    let list = RwSignal::new(ListState::<Lead>::new());
    let filters = RwSignal::new(LeadQuery::new(1, page_size));
    let selection = RwSignal::new(Selection::default());
    let editor = RwSignal::new(EditorState::<LeadDraft>::Closed);
    let form = RwSignal::new(LeadForm::default());
    let preview = RwSignal::new(None::<Lead>);
    let (consultants, set_consultants) = signal(Vec::<User>::new());
    let (reload, set_reload) = signal(0u32);
    let refresh = move || set_reload.update(|n| *n += 1);

    // Active consultants for the filter dropdown
    Effect::new(move |_| {
        let api = RestResource::users(&auth.client());
        spawn_local(async move {
            match api.list(&QueryParams::new()).await {
                Ok(listing) => set_consultants.set(listing.items.into_iter().filter(|u| u.is_active).collect()),
                Err(err) => warn!(error = %err, "consultant list unavailable"),
            }
        });
    });

    Effect::new(move |_| {
        reload.track();
        let mut query = filters.get();
        query.page = list.with_untracked(ListState::current_page);
        let api = RestResource::leads(&auth.client());
        load_list(list, async move { api.list(&query.to_params()).await });
    });

    let set_filter = move |apply: fn(&mut LeadQuery, String)| {
        move |ev: web_sys::Event| {
            let value = event_target_value(&ev);
            list.update(ListState::reset_page);
            filters.update(|q| apply(q, value));
        }
    };
    let go_to_page = Callback::new(move |page: u32| {
        if list.try_update(|l| l.set_page(page)).unwrap_or(false) {
            selection.update(Selection::clear);
            refresh();
        }
    });

    let gate = move || auth.gate("leads");
    let visible_ids = move || list.with(|l| l.visible().iter().map(|lead| lead.id).collect::<Vec<_>>());

    let bulk_archive = move |_| {
        let ids = selection.with_untracked(Selection::ids);
        if !confirm(&format!("{} kaydı arşive atmak istediğinizden emin misiniz?", ids.len())) {
            return;
        }
        let api = RestResource::leads(&auth.client());
        spawn_local(async move {
            let outcome = archive_many(&api, &ids).await;
            if let Some(msg) = outcome.failure_message() {
                alert(&msg);
            }
            selection.update(Selection::clear);
            refresh();
        });
    };

    let update_listing_status = move |id: i64, status: &'static str| {
        let api = RestResource::leads(&auth.client());
        let patch = LeadPatch::ListingStatus(status.to_string());
        spawn_local(async move {
            match patch.send(&api, id).await {
                Ok(()) => {
                    list.update(|l| {
                        l.patch(id, |lead| patch.apply(lead));
                    });
                    preview.update(|p| {
                        if let Some(lead) = p.as_mut().filter(|lead| lead.id == id) {
                            patch.apply(lead);
                        }
                    });
                }
                Err(err) => alert(&err.user_message("Güncelleme başarısız")),
            }
        });
    };

    let open_create = move |_| {
        form.update(LeadForm::reset);
        editor.update(|e| e.open_create(LeadDraft::new(Utc::now().date_naive())));
    };

    view! {
        <div>
            <div class="mb-6">
                <h1 class="text-2xl font-bold text-gray-900">"Potansiyel Müşteri Yönetimi"</h1>
                <p class="text-gray-600 mt-1">"Potansiyel müşterilerinizi takip edin"</p>
            </div>
            <div class="bg-white rounded-lg shadow">
                <div class="p-6 border-b space-y-4">
                    <div class="flex flex-col sm:flex-row justify-between gap-4">
                        <SearchBox
                            value=Signal::derive(move || list.with(|l| l.search_term().to_string()))
                            on_input=move |term: String| list.update(|l| l.set_search(term))
                            placeholder="Potansiyel müşteri ara..."
                        />
                        <Show when=move || gate().create>
                            <button class=PRIMARY_BUTTON on:click=open_create>"Yeni Potansiyel Müşteri"</button>
                        </Show>
                    </div>
                    <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-6 gap-3">
                        <select class=FILTER on:change=set_filter(|q, v| q.property_status = v)>
                            <option value="">"Emlak Durumu: Tümü"</option>
                            {PROPERTY_STATUSES.iter().map(|s| view! { <option value=s.code>{s.label}</option> }).collect_view()}
                        </select>
                        <select class=FILTER on:change=set_filter(|q, v| q.listing_type = v)>
                            <option value="">"İlan Tipi: Tümü"</option>
                            {LISTING_TYPES.iter().map(|s| view! { <option value=s.code>{s.label}</option> }).collect_view()}
                        </select>
                        <select class=FILTER on:change=set_filter(|q, v| q.listing_status = v)>
                            <option value="">"İlan Durumu: Tümü"</option>
                            {LISTING_STATUSES.iter().map(|s| view! { <option value=s.code>{s.label}</option> }).collect_view()}
                        </select>
                        <select class=FILTER on:change=set_filter(|q, v| q.assigned_to = v)>
                            <option value="">"Danışman: Tümü"</option>
                            <For
                                each=move || consultants.get()
                                key=|u| u.id
                                children=|u| view! { <option value=u.id.to_string()>{u.full_name()}</option> }
                            />
                        </select>
                        <select class=FILTER on:change=set_filter(|q, v| q.is_agenda = v)>
                            <option value="">"Ajanda: Tümü"</option>
                            <option value="true">"Evet"</option>
                            <option value="false">"Hayır"</option>
                        </select>
                        <select class=FILTER on:change=set_filter(|q, v| q.is_stale = v)>
                            <option value="">"Bayat: Tümü"</option>
                            <option value="true">"🕸️ Bayat Müşteriler"</option>
                        </select>
                    </div>
                </div>

                <Show when=move || gate().update && !selection.with(Selection::is_empty)>
                    <div class="bg-blue-50 border-l-4 border-blue-400 p-4 mx-6 mt-4 flex items-center justify-between">
                        <span class="text-sm font-medium text-blue-800">
                            {move || format!("{} kayıt seçildi", selection.with(Selection::len))}
                        </span>
                        <div class="flex gap-2">
                            <button class="px-4 py-2 bg-yellow-600 text-white text-sm rounded-lg hover:bg-yellow-700" on:click=bulk_archive>
                                "Arşive At"
                            </button>
                            <button
                                class="px-4 py-2 bg-gray-600 text-white text-sm rounded-lg hover:bg-gray-700"
                                on:click=move |_| selection.update(Selection::clear)
                            >
                                "İptal"
                            </button>
                        </div>
                    </div>
                </Show>

                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-gray-200">
                        <thead class="bg-gray-50">
                            <tr>
                                <Show when=move || gate().update>
                                    <th class="px-6 py-3 text-center">
                                        <input
                                            type="checkbox"
                                            class="h-4 w-4"
                                            prop:checked=move || selection.with(Selection::all_checked)
                                            on:change=move |ev| {
                                                let checked = event_target_checked(&ev);
                                                let ids = visible_ids();
                                                selection.update(|s| s.set_all(checked, ids));
                                            }
                                        />
                                    </th>
                                </Show>
                                <th class=TH>"Ad Soyad"</th>
                                <th class=TH>"Telefon"</th>
                                <th class=TH>"Danışman"</th>
                                <th class=TH>"İlan"</th>
                                <th class=TH>"Tip"</th>
                                <th class=TH>"İlan Durumu"</th>
                                <th class=TH>"Durum"</th>
                                <th class=TH>"Hatırlatma"</th>
                                <th class=TH>"Ajanda"</th>
                                <Show when=move || gate().shows_actions_column()>
                                    <th class=TH>"İşlemler"</th>
                                </Show>
                            </tr>
                        </thead>
                        <tbody class="bg-white divide-y divide-gray-200">
                            {move || {
                                let gate = gate();
                                let colspan = if gate.update { 11 } else { 10 };
                                if list.with(|l| l.loading()) {
                                    return view! { <LoadingRow colspan=colspan/> }.into_any();
                                }
                                let rows: Vec<Lead> = list.with(|l| l.visible().into_iter().cloned().collect());
                                if rows.is_empty() {
                                    return view! { <EmptyRow colspan=colspan message="Potansiyel müşteri bulunamadı"/> }.into_any();
                                }
                                rows.into_iter()
                                    .map(|lead| view! {
                                        <LeadRow
                                            lead=lead
                                            gate=gate
                                            selection=selection
                                            on_preview=Callback::new(move |lead: Lead| preview.set(Some(lead)))
                                            on_edit=Callback::new(move |lead: Lead| {
                                                form.update(LeadForm::reset);
                                                editor.update(|e| e.open_edit(&lead));
                                            })
                                            on_delete=Callback::new(move |id: i64| {
                                                delete_record(RestResource::leads(&auth.client()), id, refresh)
                                            })
                                        />
                                    })
                                    .collect_view()
                                    .into_any()
                            }}
                        </tbody>
                    </table>
                </div>
                <div class="px-6 py-3 border-t text-sm text-gray-700">
                    {move || list.with(|l| {
                        if l.search_term().is_empty() {
                            format!("Toplam {} kayıt - Sayfa {} / {}", l.total_count(), l.current_page(), l.total_pages())
                        } else {
                            format!("Toplam {} kayıt ({} gösteriliyor)", l.total_count(), l.visible().len())
                        }
                    })}
                </div>
                <Show when=move || list.with(ListState::show_pagination)>
                    <Pagination
                        current=Signal::derive(move || list.with(ListState::current_page))
                        total_pages=Signal::derive(move || list.with(ListState::total_pages))
                        pages=Signal::derive(move || list.with(ListState::page_numbers))
                        on_page=go_to_page
                    />
                </Show>
            </div>

            <Show when=move || editor.with(EditorState::is_open)>
                <LeadWizard editor=editor form=form on_saved=Callback::new(move |_| refresh())/>
            </Show>

            {move || preview.get().map(|lead| view! {
                <ListingPreview
                    lead=lead
                    on_status=Callback::new(move |(id, status): (i64, &'static str)| update_listing_status(id, status))
                    on_close=Callback::new(move |_| preview.set(None))
                />
            })}
        </div>
    }
}

#[component]
fn LeadRow(
    lead: Lead,
    gate: crm_core::ResourceGate,
    selection: RwSignal<Selection>,
    on_preview: Callback<Lead>,
    on_edit: Callback<Lead>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    let id = lead.id;
    let now = Utc::now();
    let row_class = if is_stale(&lead, now) {
        "hover:bg-gray-50 border-l-4 border-orange-400"
    } else {
        "hover:bg-gray-50"
    };
    let whatsapp = (!lead.phone.is_empty()).then(|| whatsapp_link(&lead));
    let reminder = lead.reminder_date.as_deref().and_then(|value| {
        let text = format_tr_date(value)?;
        let tone = reminder_tone(value, now).map(|t| t.class()).unwrap_or("");
        Some((text, tone))
    });
    let listing_url = lead.listing_url.clone().filter(|url| !url.is_empty());
    let for_preview = lead.clone();
    let for_edit = lead.clone();

    view! {
        <tr class=row_class>
            {gate.update.then(|| view! {
                <td class="px-6 py-4 text-center">
                    <input
                        type="checkbox"
                        class="h-4 w-4"
                        prop:checked=move || selection.with(|s| s.contains(id))
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            selection.update(|s| s.toggle(id, checked));
                        }
                    />
                </td>
            })}
            <td class=format!("{} font-medium text-gray-900", TD)>{lead.full_name()}</td>
            <td class=TD>
                <div class="flex items-center gap-2">
                    <span>{lead.phone.clone()}</span>
                    {whatsapp.map(|href| view! {
                        <a href=href target="_blank" rel="noopener noreferrer" title="WhatsApp ile mesaj gönder"
                            class="text-green-600 hover:text-green-800">"WA"</a>
                    })}
                </div>
            </td>
            <td class=TD>
                {match lead.assigned_user.as_ref() {
                    Some(user) => view! { <span>{user.first_name.clone()}</span> }.into_any(),
                    None => view! { <span class="text-gray-400">"-"</span> }.into_any(),
                }}
            </td>
            <td class=TD>
                {match listing_url {
                    Some(url) => view! {
                        <div class="flex items-center gap-2">
                            <button class="text-blue-600 hover:text-blue-900" title="Önizleme"
                                on:click=move |_| on_preview.run(for_preview.clone())>"Önizle"</button>
                            <a href=url target="_blank" rel="noopener noreferrer" title="Yeni sekmede aç"
                                class="text-gray-500 hover:text-gray-700">"↗"</a>
                        </div>
                    }.into_any(),
                    None => "-".into_any(),
                }}
            </td>
            <td class=TD>
                {match lead.listing_type.as_deref().filter(|t| !t.is_empty()) {
                    Some(t) => view! { <StatusBadge badge=listing_type_badge(t)/> }.into_any(),
                    None => "-".into_any(),
                }}
            </td>
            <td class=TD>
                {match lead.listing_status.as_deref().filter(|s| !s.is_empty()) {
                    Some(s) => view! { <StatusBadge badge=listing_status_badge(s)/> }.into_any(),
                    None => "-".into_any(),
                }}
            </td>
            <td class=TD><StatusBadge badge=property_status_badge(&lead.property_status)/></td>
            <td class=TD>
                {match reminder {
                    Some((text, tone)) => view! { <span class=tone>{text}</span> }.into_any(),
                    None => "-".into_any(),
                }}
            </td>
            <td class=format!("{} text-center", TD)>
                {if lead.is_agenda.unwrap_or(false) { "✔" } else { "-" }}
            </td>
            {gate.shows_actions_column().then(|| view! {
                <td class=format!("{} space-x-3", TD)>
                    {gate.update.then(|| view! {
                        <button class="text-blue-600 hover:text-blue-900" on:click=move |_| on_edit.run(for_edit.clone())>
                            "Düzenle"
                        </button>
                    })}
                    {gate.delete.then(|| view! {
                        <ConfirmDeleteButton on_confirm=move |_| on_delete.run(id)/>
                    })}
                </td>
            })}
        </tr>
    }
}

/// Listing page in a sandboxed iframe, with listing-status toggles
#[component]
fn ListingPreview(
    lead: Lead,
    on_status: Callback<(i64, &'static str)>,
    on_close: Callback<()>,
) -> impl IntoView {
    let id = lead.id;
    let url = lead.listing_url.clone().unwrap_or_default();
    let current = lead.listing_status.clone().unwrap_or_default();
    let badge = lead.listing_status.as_deref().filter(|s| !s.is_empty()).map(listing_status_badge);
    let source = (!lead.source.is_empty()).then(|| lead_source_label(&lead.source).to_string());

    view! {
        <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50">
            <div class="bg-white rounded-lg w-full max-w-6xl h-[90vh] flex flex-col">
                <div class="flex items-center justify-between p-4 border-b">
                    <div class="flex items-center gap-4">
                        <h3 class="text-lg font-semibold text-gray-900">{format!("İlan Önizleme - {}", lead.full_name())}</h3>
                        {badge.map(|badge| view! { <StatusBadge badge=badge/> })}
                        {source.map(|source| view! {
                            <span class="text-sm text-gray-500">{format!("Kaynak: {}", source)}</span>
                        })}
                    </div>
                    <div class="flex items-center gap-2">
                        <a href=url.clone() target="_blank" rel="noopener noreferrer"
                            class="px-3 py-2 text-sm bg-gray-100 hover:bg-gray-200 rounded-lg">"Yeni Sekmede Aç"</a>
                        <button class="p-2 hover:bg-gray-100 rounded-lg" on:click=move |_| on_close.run(())>"×"</button>
                    </div>
                </div>
                <div class="flex items-center gap-2 p-4 bg-gray-50 border-b">
                    <span class="text-sm font-medium text-gray-700 mr-2">"İlan Durumu Güncelle:"</span>
                    {STATUS_TOGGLES.iter().map(|&(code, label, selected, idle)| {
                        let class = if current == code { selected } else { idle };
                        view! {
                            <button
                                class=format!("px-3 py-1 text-sm rounded-full {}", class)
                                on:click=move |_| on_status.run((id, code))
                            >
                                {label}
                            </button>
                        }
                    }).collect_view()}
                </div>
                <div class="flex-1 p-4">
                    <iframe
                        src=url
                        class="w-full h-full border rounded-lg"
                        title="İlan Önizleme"
                        sandbox="allow-scripts allow-same-origin"
                    ></iframe>
                </div>
            </div>
        </div>
    }
}
