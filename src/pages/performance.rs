//! Consultant Performance Report

use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::warn;

use crm_core::derive::{conversion_rate_class, PerformanceSummary};
use crm_core::models::UserPerformance;

use crate::components::{EmptyRow, LoadingRow};
use crate::context::use_auth;
use crate::pages::{TD, TH};

#[component]
pub fn PerformancePage() -> impl IntoView {
    let auth = use_auth();
    let (rows, set_rows) = signal(Vec::<UserPerformance>::new());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        let client = auth.client();
        spawn_local(async move {
            match client.performance().await {
                Ok(data) => set_rows.set(data),
                Err(err) => {
                    warn!(error = %err, "performance report failed");
                    set_rows.set(Vec::new());
                }
            }
            set_loading.set(false);
        });
    });

    let summary = Memo::new(move |_| rows.with(|r| PerformanceSummary::from(&r[..])));

    view! {
        <div>
            <div class="mb-6">
                <h1 class="text-2xl font-bold text-gray-900">"Danışman Performans Raporu"</h1>
                <p class="text-gray-600 mt-1">"Danışmanların başarı metrikleri ve performans analizi"</p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-4 gap-6 mb-6">
                <SummaryCard title="Toplam Lead" value=Signal::derive(move || summary.with(|s| s.total_leads.to_string()))/>
                <SummaryCard title="Toplam Kazanılan" value=Signal::derive(move || summary.with(|s| s.won_leads.to_string()))/>
                <SummaryCard
                    title="Ortalama Başarı Oranı"
                    value=Signal::derive(move || summary.with(|s| format!("{}%", s.average_rate)))
                />
                <SummaryCard
                    title="En Başarılı Danışman"
                    value=Signal::derive(move || {
                        summary.with(|s| s.top_performer.as_ref().map(UserPerformance::full_name).unwrap_or_else(|| "-".into()))
                    })
                />
            </div>

            <div class="bg-white rounded-lg shadow">
                <div class="p-6 border-b">
                    <h2 class="text-lg font-semibold text-gray-900">"Detaylı Performans Metrikleri"</h2>
                </div>
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-gray-200">
                        <thead class="bg-gray-50">
                            <tr>
                                <th class=TH>"Danışman"</th>
                                <th class=TH>"Toplam Lead"</th>
                                <th class=TH>"Kazanıldı"</th>
                                <th class=TH>"Kaybedildi"</th>
                                <th class=TH>"Aranacak"</th>
                                <th class=TH>"Arandı"</th>
                                <th class=TH>"Ziyaret Planlandı"</th>
                                <th class=TH>"Başarı Oranı"</th>
                            </tr>
                        </thead>
                        <tbody class="bg-white divide-y divide-gray-200">
                            {move || {
                                if loading.get() {
                                    return view! { <LoadingRow colspan=8/> }.into_any();
                                }
                                let data = rows.get();
                                if data.is_empty() {
                                    return view! { <EmptyRow colspan=8 message="Performans verisi bulunamadı"/> }.into_any();
                                }
                                data.into_iter().map(|row| {
                                    let pill = format!(
                                        "px-3 py-1 rounded-full text-xs font-semibold text-white {}",
                                        conversion_rate_class(row.conversion_rate_value())
                                    );
                                    view! {
                                        <tr class="hover:bg-gray-50">
                                            <td class=TD>
                                                <div class="font-medium text-gray-900">{row.full_name()}</div>
                                                <div class="text-gray-500">{row.email.clone()}</div>
                                            </td>
                                            <td class=TD>{row.total_leads}</td>
                                            <td class=format!("{} text-green-600 font-semibold", TD)>{row.won_leads}</td>
                                            <td class=format!("{} text-red-600 font-semibold", TD)>{row.lost_leads}</td>
                                            <td class=TD>{row.to_be_called_leads}</td>
                                            <td class=TD>{row.called_leads}</td>
                                            <td class=TD>{row.visit_scheduled_leads}</td>
                                            <td class=TD><span class=pill>{format!("{}%", row.conversion_rate)}</span></td>
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

#[component]
fn SummaryCard(title: &'static str, #[prop(into)] value: Signal<String>) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow p-6">
            <p class="text-sm font-medium text-gray-600">{title}</p>
            <p class="text-2xl font-bold text-gray-900 mt-2">{move || value.get()}</p>
        </div>
    }
}
