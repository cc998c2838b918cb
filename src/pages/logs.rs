//! Activity Log Page

use leptos::prelude::*;

use crm_core::api::{ActivityLogQuery, Listing};
use crm_core::derive::{activity_action_badge, format_tr_datetime, ACTIVITY_ACTIONS};
use crm_core::listing::ListState;
use crm_core::models::ActivityLog;

use crate::components::{EmptyRow, LoadingRow, SearchBox, StatusBadge};
use crate::context::use_auth;
use crate::hooks::load_list;
use crate::pages::{TD, TH};

#[component]
pub fn LogsPage() -> impl IntoView {
    let auth = use_auth();
    let list = RwSignal::new(ListState::<ActivityLog>::new());
    let (action, set_action) = signal(String::new());

    Effect::new(move |_| {
        let query = ActivityLogQuery {
            limit: auth.config().activity_log_limit,
            action_type: action.get(),
        };
        let client = auth.client();
        load_list(list, async move {
            client
                .activity_logs(&query)
                .await
                .map(|logs| Listing::unpaged(logs.into_logs()))
        });
    });

    view! {
        <div>
            <div class="mb-6">
                <h1 class="text-2xl font-bold text-gray-900">"Aktivite Logları"</h1>
                <p class="text-gray-600 mt-1">"Sistem aktivitelerini görüntüleyin"</p>
            </div>
            <div class="bg-white rounded-lg shadow">
                <div class="p-6 border-b flex flex-col sm:flex-row gap-4">
                    <SearchBox
                        value=Signal::derive(move || list.with(|l| l.search_term().to_string()))
                        on_input=move |term: String| list.update(|l| l.set_search(term))
                        placeholder="Log ara..."
                    />
                    <select
                        class="px-4 py-2 border border-gray-300 rounded-lg text-sm"
                        prop:value=move || action.get()
                        on:change=move |ev| set_action.set(event_target_value(&ev))
                    >
                        <option value="">"Tüm Aktiviteler"</option>
                        {ACTIVITY_ACTIONS.iter().map(|a| view! { <option value=a.code>{a.label}</option> }).collect_view()}
                    </select>
                </div>
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-gray-200">
                        <thead class="bg-gray-50">
                            <tr>
                                <th class=TH>"Kullanıcı"</th>
                                <th class=TH>"Aktivite"</th>
                                <th class=TH>"Açıklama"</th>
                                <th class=TH>"Tarih"</th>
                            </tr>
                        </thead>
                        <tbody class="bg-white divide-y divide-gray-200">
                            {move || {
                                if list.with(|l| l.loading()) {
                                    return view! { <LoadingRow colspan=4/> }.into_any();
                                }
                                let rows: Vec<ActivityLog> = list.with(|l| l.visible().into_iter().cloned().collect());
                                if rows.is_empty() {
                                    return view! { <EmptyRow colspan=4 message="Log bulunamadı"/> }.into_any();
                                }
                                rows.into_iter().map(|log| {
                                    let (name, email) = log
                                        .user
                                        .as_ref()
                                        .map(|u| (u.full_name(), u.email.clone()))
                                        .unwrap_or_else(|| ("-".to_string(), String::new()));
                                    view! {
                                        <tr class="hover:bg-gray-50">
                                            <td class=TD>
                                                <div class="font-medium text-gray-900">{name}</div>
                                                <div class="text-gray-500">{email}</div>
                                            </td>
                                            <td class=TD><StatusBadge badge=activity_action_badge(&log.action)/></td>
                                            <td class="px-6 py-4 text-sm">
                                                <div class="text-gray-900">{log.description.clone()}</div>
                                                {log.entity.clone().map(|entity| view! {
                                                    <div class="text-xs text-gray-500 mt-1">{format!("Entity: {}", entity)}</div>
                                                })}
                                            </td>
                                            <td class=format!("{} text-gray-900", TD)>
                                                {format_tr_datetime(&log.created_at).unwrap_or_else(|| "-".into())}
                                            </td>
                                        </tr>
                                    }
                                }).collect_view().into_any()
                            }}
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}
