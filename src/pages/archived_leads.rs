//! Archived Leads Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crm_core::api::{LeadPatch, LeadQuery, RecordApi, RestResource};
use crm_core::derive::{format_tr_date, listing_status_badge, listing_type_badge, property_status_badge};
use crm_core::listing::ListState;
use crm_core::models::Lead;

use crate::components::{EmptyRow, LoadingRow, Pagination, SearchBox, StatusBadge};
use crate::context::use_auth;
use crate::hooks::{alert, confirm, load_list};
use crate::pages::{TD, TH};

#[component]
pub fn ArchivedLeadsPage() -> impl IntoView {
    let auth = use_auth();
    let page_size = auth.config().leads_page_size;
    let list = RwSignal::new(ListState::<Lead>::new());
    let (reload, set_reload) = signal(0u32);
    let refresh = move || set_reload.update(|n| *n += 1);

    Effect::new(move |_| {
        reload.track();
        let query = LeadQuery::archived(list.with_untracked(ListState::current_page), page_size);
        let api = RestResource::leads(&auth.client());
        load_list(list, async move { api.list(&query.to_params()).await });
    });

    let can_update = move || auth.has_permission("leads.update");
    let unarchive = move |id: i64| {
        if !confirm("Bu kaydı arşivden çıkarmak istiyor musunuz?") {
            return;
        }
        let api = RestResource::leads(&auth.client());
        spawn_local(async move {
            match LeadPatch::Archived(false).send(&api, id).await {
                Ok(()) => refresh(),
                Err(err) => alert(&err.user_message("Arşivden çıkarma işlemi başarısız")),
            }
        });
    };

    view! {
        <div>
            <div class="mb-6">
                <h1 class="text-2xl font-bold text-gray-900">"Arşivlenmiş Potansiyel Müşteriler"</h1>
                <p class="text-gray-600 mt-1">"Arşivlenmiş müşterilerinizi görüntüleyin"</p>
            </div>
            <div class="bg-white rounded-lg shadow">
                <div class="p-6 border-b">
                    <SearchBox
                        value=Signal::derive(move || list.with(|l| l.search_term().to_string()))
                        on_input=move |term: String| list.update(|l| l.set_search(term))
                        placeholder="Arşivde ara..."
                    />
                </div>
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-gray-200">
                        <thead class="bg-gray-50">
                            <tr>
                                <th class=TH>"Ad Soyad"</th>
                                <th class=TH>"Telefon"</th>
                                <th class=TH>"Personel"</th>
                                <th class=TH>"İlan"</th>
                                <th class=TH>"Tip"</th>
                                <th class=TH>"İlan Durumu"</th>
                                <th class=TH>"Durum"</th>
                                <th class=TH>"Hatırlatma"</th>
                                <th class=TH>"Ajanda"</th>
                                <Show when=can_update>
                                    <th class=TH>"İşlemler"</th>
                                </Show>
                            </tr>
                        </thead>
                        <tbody class="bg-white divide-y divide-gray-200">
                            {move || {
                                if list.with(|l| l.loading()) {
                                    return view! { <LoadingRow colspan=10/> }.into_any();
                                }
                                let rows: Vec<Lead> = list.with(|l| l.visible().into_iter().cloned().collect());
                                if rows.is_empty() {
                                    return view! { <EmptyRow colspan=10 message="Arşivlenmiş kayıt bulunamadı"/> }.into_any();
                                }
                                let can_update = can_update();
                                rows.into_iter().map(|lead| {
                                    let id = lead.id;
                                    view! {
                                        <tr class="hover:bg-gray-50">
                                            <td class=format!("{} font-medium text-gray-900", TD)>{lead.full_name()}</td>
                                            <td class=TD>{lead.phone.clone()}</td>
                                            <td class=TD>
                                                {lead.assigned_user.as_ref().map(|u| u.first_name.clone()).unwrap_or_else(|| "-".into())}
                                            </td>
                                            <td class=TD>
                                                {match lead.listing_url.clone().filter(|u| !u.is_empty()) {
                                                    Some(url) => view! {
                                                        <a href=url target="_blank" rel="noopener noreferrer" class="text-blue-600">"İlanı Aç"</a>
                                                    }.into_any(),
                                                    None => "-".into_any(),
                                                }}
                                            </td>
                                            <td class=TD>
                                                {lead.listing_type.as_deref().filter(|t| !t.is_empty())
                                                    .map(|t| view! { <StatusBadge badge=listing_type_badge(t)/> })}
                                            </td>
                                            <td class=TD>
                                                {lead.listing_status.as_deref().filter(|s| !s.is_empty())
                                                    .map(|s| view! { <StatusBadge badge=listing_status_badge(s)/> })}
                                            </td>
                                            <td class=TD><StatusBadge badge=property_status_badge(&lead.property_status)/></td>
                                            <td class=TD>
                                                {lead.reminder_date.as_deref().and_then(format_tr_date).unwrap_or_else(|| "-".into())}
                                            </td>
                                            <td class=format!("{} text-center", TD)>
                                                {if lead.is_agenda.unwrap_or(false) { "✔" } else { "-" }}
                                            </td>
                                            {can_update.then(|| view! {
                                                <td class=TD>
                                                    <button class="text-green-600 hover:text-green-900" on:click=move |_| unarchive(id)>
                                                        "Arşivden Çıkar"
                                                    </button>
                                                </td>
                                            })}
                                        </tr>
                                    }
                                }).collect_view().into_any()
                            }}
                        </tbody>
                    </table>
                </div>
                <div class="px-6 py-3 border-t text-sm text-gray-700">
                    {move || format!("Toplam {} arşivlenmiş kayıt", list.with(ListState::total_count))}
                </div>
                <Show when=move || list.with(ListState::show_pagination)>
                    <Pagination
                        current=Signal::derive(move || list.with(ListState::current_page))
                        total_pages=Signal::derive(move || list.with(ListState::total_pages))
                        pages=Signal::derive(move || list.with(ListState::page_numbers))
                        on_page=move |page: u32| {
                            if list.try_update(|l| l.set_page(page)).unwrap_or(false) {
                                refresh();
                            }
                        }
                    />
                </Show>
            </div>
        </div>
    }
}
