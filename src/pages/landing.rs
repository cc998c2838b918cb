use leptos::prelude::*;
use leptos_router::components::A;

const FEATURES: &[(&str, &str)] = &[
    (
        "Müşteri Yönetimi",
        "Tüm müşteri bilgilerinizi tek bir platformda saklayın ve kolayca erişin. Detaylı müşteri profilleri ve geçmiş takibi.",
    ),
    (
        "Potansiyel Müşteri Takibi",
        "Potansiyel müşterilerinizi etkili bir şekilde yönetin. Satış hunisini takip edin ve dönüşüm oranlarınızı artırın.",
    ),
    (
        "Yetki Yönetimi",
        "Ekibinizdeki her kullanıcı için özel rol ve yetki tanımlamaları yapın. Güvenli ve kontrollü erişim.",
    ),
    (
        "Raporlama ve Analiz",
        "Detaylı raporlar ve analizlerle performansınızı takip edin. Veri odaklı kararlar alın.",
    ),
    (
        "Aktivite Logları",
        "Tüm sistem aktivitelerini kaydedin ve takip edin. Tam şeffaflık ve denetim imkanı.",
    ),
    (
        "Gayrimenkul Özelinde",
        "Gayrimenkul sektörünün ihtiyaçlarına özel tasarlanmış özellikler. Emlak takibi ve müşteri eşleştirme.",
    ),
];

/// Public marketing page
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gradient-to-br from-blue-50 via-white to-blue-50">
            <nav class="bg-white shadow-sm">
                <div class="max-w-6xl mx-auto px-4 py-4 flex justify-between items-center">
                    <span class="text-2xl font-bold text-gray-900">"HAN CRM"</span>
                    <div class="flex gap-4 items-center">
                        <A href="/blog"><span class="text-gray-700 hover:text-blue-600">"Blog"</span></A>
                        <A href="/login">
                            <span class="px-6 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700">"Giriş Yap"</span>
                        </A>
                    </div>
                </div>
            </nav>
            <section class="max-w-6xl mx-auto px-4 py-20">
                <div class="text-center max-w-4xl mx-auto">
                    <h1 class="text-5xl font-bold text-gray-900 mb-6">
                        "Gayrimenkul Danışmanlığınızı " <span class="text-blue-600">"Dijitalleştirin"</span>
                    </h1>
                    <p class="text-xl text-gray-600 mb-8">
                        "HAN CRM ile müşterilerinizi takip edin, potansiyel müşterilerinizi yönetin ve satış süreçlerinizi optimize edin."
                    </p>
                    <A href="/login">
                        <span class="px-8 py-3 bg-blue-600 text-white rounded-lg text-lg font-semibold">"Hemen Başlayın"</span>
                    </A>
                </div>
                <div id="features" class="mt-20 grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {FEATURES.iter().map(|(title, text)| view! {
                        <div class="bg-white p-8 rounded-xl shadow-lg">
                            <h3 class="text-xl font-semibold text-gray-900 mb-2">{*title}</h3>
                            <p class="text-gray-600">{*text}</p>
                        </div>
                    }).collect_view()}
                </div>
            </section>
            <footer class="bg-gray-900 text-white py-8 mt-20 text-center">
                <span class="text-xl font-bold">"HAN CRM"</span>
                <p class="text-gray-400 mt-2">"© HAN Gayrimenkul CRM. Tüm hakları saklıdır."</p>
            </footer>
        </div>
    }
}
