//! Dashboard Home
//!
//! Five counter cards loaded in parallel.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crm_core::dashboard::DashboardStats;

use crate::context::use_auth;

#[component]
pub fn DashboardHome() -> impl IntoView {
    let auth = use_auth();
    let (stats, set_stats) = signal(DashboardStats::default());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        let client = auth.client();
        spawn_local(async move {
            // failure is logged inside `load`; the cards stay at zero
            if let Ok(loaded) = DashboardStats::load(&client).await {
                set_stats.set(loaded);
            }
            set_loading.set(false);
        });
    });

    let cards = move || {
        let s = stats.get();
        vec![
            ("Toplam Müşteri", s.total_customers, "text-blue-500 bg-blue-50"),
            ("Potansiyel Müşteri", s.total_leads, "text-green-500 bg-green-50"),
            ("Aktif Kullanıcı", s.active_users, "text-purple-500 bg-purple-50"),
            ("Son Aktiviteler", s.recent_activities, "text-orange-500 bg-orange-50"),
            ("Bayat Müşteri", s.stale_leads, "text-red-500 bg-red-50"),
        ]
    };

    view! {
        <div>
            <div class="mb-6">
                <h1 class="text-2xl font-bold text-gray-900">"Dashboard"</h1>
                <p class="text-gray-600 mt-1">"HAN CRM Sistemi Genel Görünümü"</p>
            </div>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="text-center py-12 text-gray-500">"Yükleniyor..."</div> }
            >
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-5 gap-6 mb-8">
                    {move || cards().into_iter().map(|(title, value, tone)| view! {
                        <div class="bg-white rounded-lg shadow p-6">
                            <p class="text-sm font-medium text-gray-600 mb-1">{title}</p>
                            <p class=format!("text-3xl font-bold rounded px-2 inline-block {}", tone)>{value}</p>
                        </div>
                    }).collect_view()}
                </div>
                <div class="grid lg:grid-cols-2 gap-6">
                    <div class="bg-white rounded-lg shadow p-6">
                        <h2 class="text-lg font-semibold text-gray-900 mb-4">"Hoş Geldiniz"</h2>
                        <p class="text-gray-600">
                            "HAN CRM sistemine hoş geldiniz. Bu panel üzerinden tüm müşteri ve potansiyel müşteri işlemlerinizi yönetebilir, ekip üyelerinizi takip edebilir ve sistem aktivitelerini izleyebilirsiniz."
                        </p>
                    </div>
                    <div class="bg-white rounded-lg shadow p-6 space-y-3">
                        <h2 class="text-lg font-semibold text-gray-900 mb-4">"Hızlı Bağlantılar"</h2>
                        <QuickLink href="/dashboard/customers" title="Müşteriler" text="Müşteri listesini görüntüle"/>
                        <QuickLink href="/dashboard/leads" title="Potansiyel Müşteriler" text="Potansiyel müşteri takibi"/>
                        <QuickLink href="/dashboard/users" title="Çalışanlar" text="Kullanıcı yönetimi"/>
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn QuickLink(href: &'static str, title: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <A href=href>
            <div class="block p-3 rounded-lg border border-gray-200 hover:border-blue-500 hover:bg-blue-50">
                <div class="font-medium text-gray-900">{title}</div>
                <div class="text-sm text-gray-600">{text}</div>
            </div>
        </A>
    }
}
