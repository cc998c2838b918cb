//! Google Sheets Import
//!
//! Connect the Google account, load a spreadsheet by URL, adjust the
//! suggested column mapping and import the rows as leads.

use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::{info, warn};

use crm_core::import::{column_title, load_sheet, ImportWizard, MappingTone, PREVIEW_ROWS};

use crate::context::use_auth;
use crate::pages::PRIMARY_BUTTON;

#[component]
pub fn GoogleImportPage() -> impl IntoView {
    let auth = use_auth();
    let wizard = RwSignal::new(ImportWizard::default());
    let (checking, set_checking) = signal(true);
    let (loading, set_loading) = signal(false);
    let (importing, set_importing) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (auth_code, set_auth_code) = signal(String::new());
    let (sheet_url, set_sheet_url) = signal(String::new());

    Effect::new(move |_| {
        let client = auth.client();
        spawn_local(async move {
            match client.google_status().await {
                Ok(authenticated) => wizard.update(|w| w.set_authenticated(authenticated)),
                Err(err) => warn!(error = %err, "google status check failed"),
            }
            set_checking.set(false);
        });
    });

    let request_auth_url = move |_| {
        set_error.set(None);
        let client = auth.client();
        spawn_local(async move {
            match client.google_auth_url().await {
                Ok(url) => wizard.update(|w| w.auth_url = Some(url)),
                Err(err) => set_error.set(Some(err.user_message("Auth URL alınamadı"))),
            }
        });
    };

    let submit_code = move |_| {
        let code = auth_code.get_untracked();
        if code.trim().is_empty() {
            return;
        }
        set_error.set(None);
        let client = auth.client();
        spawn_local(async move {
            match client.google_callback(code.trim()).await {
                Ok(()) => {
                    wizard.update(|w| w.set_authenticated(true));
                    set_auth_code.set(String::new());
                }
                Err(err) => set_error.set(Some(err.user_message("Yetkilendirme başarısız"))),
            }
        });
    };

    let load_spreadsheet = move |_| {
        set_error.set(None);
        set_loading.set(true);
        wizard.update(ImportWizard::clear_result);
        let client = auth.client();
        let url = sheet_url.get_untracked();
        spawn_local(async move {
            match load_sheet(&client, &url).await {
                Ok((id, bundle)) => wizard.update(|w| w.load(id, bundle)),
                Err(err) => set_error.set(Some(err.user_message("Spreadsheet yüklenemedi"))),
            }
            set_loading.set(false);
        });
    };

    let run_import = move |_| {
        let Some(request) = wizard.with_untracked(ImportWizard::import_request) else {
            return;
        };
        set_error.set(None);
        set_importing.set(true);
        wizard.update(ImportWizard::clear_result);
        let client = auth.client();
        spawn_local(async move {
            match client.import_sheet(&request).await {
                Ok(summary) => {
                    info!(imported = summary.imported, skipped = summary.skipped, "sheet imported");
                    wizard.update(|w| w.set_result(summary));
                }
                Err(err) => set_error.set(Some(err.user_message("Import başarısız"))),
            }
            set_importing.set(false);
        });
    };

    let authenticated = move || wizard.with(|w| w.authenticated);
    let auth_url = move || wizard.with(|w| w.auth_url.clone());

    view! {
        <Show
            when=move || !checking.get()
            fallback=|| view! { <div class="flex items-center justify-center h-64 text-gray-500">"Yükleniyor..."</div> }
        >
            <div>
                <div class="mb-6">
                    <h1 class="text-2xl font-bold text-gray-900">"Google Sheets Import"</h1>
                    <p class="text-gray-600 mt-1">"Google Sheets'ten lead verilerini içe aktarın"</p>
                </div>

                <div class="bg-white rounded-lg shadow p-6 mb-6">
                    <div class="flex items-center justify-between">
                        <div>
                            <h3 class="font-medium text-gray-900">"Google Hesabı"</h3>
                            <p class=move || if authenticated() { "text-sm text-green-600" } else { "text-sm text-yellow-600" }>
                                {move || if authenticated() { "Bağlı" } else { "Bağlı değil" }}
                            </p>
                        </div>
                        <Show when=move || !authenticated() && auth_url().is_none()>
                            <button class=PRIMARY_BUTTON on:click=request_auth_url>"Google ile Bağlan"</button>
                        </Show>
                    </div>
                    {move || (!authenticated()).then(auth_url).flatten().map(|url| view! {
                        <div class="mt-6 space-y-4">
                            <div class="p-4 bg-blue-50 rounded-lg">
                                <h4 class="font-medium text-blue-900 mb-2">"Adım 1: Google'da Yetkilendirme"</h4>
                                <p class="text-sm text-blue-700 mb-3">
                                    "Aşağıdaki linke tıklayın ve Google hesabınızla giriş yapın. Onay verdikten sonra size bir kod verilecek."
                                </p>
                                <a href=url target="_blank" rel="noopener noreferrer"
                                    class="inline-flex px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700">
                                    "Google'da Yetkilendir"
                                </a>
                            </div>
                            <div class="p-4 bg-gray-50 rounded-lg">
                                <h4 class="font-medium text-gray-900 mb-2">"Adım 2: Kodu Girin"</h4>
                                <div class="flex space-x-2">
                                    <input type="text" class="flex-1 px-4 py-2 border rounded-lg"
                                        placeholder="Yetkilendirme kodunu yapıştırın..."
                                        prop:value=move || auth_code.get()
                                        on:input=move |ev| set_auth_code.set(event_target_value(&ev))/>
                                    <button
                                        class="px-4 py-2 bg-green-600 text-white rounded-lg hover:bg-green-700 disabled:opacity-50"
                                        disabled=move || auth_code.with(String::is_empty)
                                        on:click=submit_code
                                    >
                                        "Onayla"
                                    </button>
                                </div>
                            </div>
                        </div>
                    })}
                </div>

                <Show when=authenticated>
                    <div class="bg-white rounded-lg shadow p-6 mb-6">
                        <h3 class="font-medium text-gray-900 mb-4">"Google Sheets URL"</h3>
                        <div class="flex space-x-2">
                            <input type="text" class="flex-1 px-4 py-2 border rounded-lg"
                                placeholder="https://docs.google.com/spreadsheets/d/..."
                                prop:value=move || sheet_url.get()
                                on:input=move |ev| set_sheet_url.set(event_target_value(&ev))/>
                            <button
                                class=PRIMARY_BUTTON
                                disabled=move || loading.get() || sheet_url.with(String::is_empty)
                                on:click=load_spreadsheet
                            >
                                {move || if loading.get() { "Yükleniyor..." } else { "Yükle" }}
                            </button>
                        </div>
                    </div>
                </Show>

                {move || error.get().map(|msg| view! {
                    <div class="bg-red-50 border-l-4 border-red-400 p-4 mb-6">
                        <p class="text-red-700">{msg}</p>
                    </div>
                })}

                {move || wizard.with(|w| w.result()).map(|summary| view! {
                    <div class="bg-green-50 border-l-4 border-green-400 p-4 mb-6">
                        <p class="text-green-700">
                            "Import tamamlandı! " <strong>{summary.imported}</strong> " kayıt eklendi, "
                            <strong>{summary.skipped}</strong> " atlandı."
                        </p>
                    </div>
                })}

                <MappingPanel wizard=wizard/>

                <Show when=move || wizard.with(ImportWizard::is_loaded)>
                    <div class="bg-white rounded-lg shadow mb-6">
                        <div class="p-6 border-b flex items-center justify-between">
                            <div>
                                <h3 class="font-medium text-gray-900">
                                    {move || wizard.with(|w| w.info().map(|i| i.title.clone()).unwrap_or_default())}
                                </h3>
                                <p class="text-sm text-gray-500 mt-1">
                                    {move || wizard.with(|w| format!(
                                        "{} sayfa, toplam {} satır veri",
                                        w.info().map_or(0, |i| i.sheets.len()),
                                        w.preview().map_or(0, |p| p.total_rows),
                                    ))}
                                </p>
                            </div>
                            <button
                                class="px-4 py-2 bg-green-600 text-white rounded-lg hover:bg-green-700 disabled:opacity-50"
                                disabled=move || importing.get() || !wizard.with(ImportWizard::can_import)
                                on:click=run_import
                            >
                                {move || if importing.get() { "Import Ediliyor..." } else { "Import Et" }}
                            </button>
                        </div>
                        <PreviewTable wizard=wizard/>
                    </div>
                </Show>
            </div>
        </Show>
    }
}

#[component]
fn MappingPanel(wizard: RwSignal<ImportWizard>) -> impl IntoView {
    move || {
        let (mappings, fields) = wizard.with(|w| (w.mappings().to_vec(), w.available_fields().to_vec()));
        if mappings.is_empty() {
            return None;
        }
        let (mapped, unmapped) = wizard.with(|w| (w.mapped_count(), w.unmapped_count()));
        Some(view! {
            <div class="bg-white rounded-lg shadow p-6 mb-6">
                <h3 class="font-medium text-gray-900">"Kolon Eşleştirme"</h3>
                <p class="text-sm text-gray-500 mt-1 mb-4">
                    "Her sütunun hangi alana karşılık geldiğini kontrol edin."
                    <span class="ml-2 text-green-600 font-medium">{format!("{} eşleşti", mapped)}</span>
                    {(unmapped > 0).then(|| view! {
                        <span class="ml-2 text-yellow-600 font-medium">{format!("{} eşleşmedi", unmapped)}</span>
                    })}
                </p>
                <div class="space-y-2">
                    {mappings.into_iter().enumerate().map(|(position, mapping)| {
                        let tone = MappingTone::of(&mapping);
                        let selected = mapping.mapped_field.clone();
                        view! {
                            <div class=format!("flex items-center space-x-3 p-3 rounded-lg {}", tone.row_class())>
                                <div class="w-1/3 min-w-0">
                                    <span class="text-sm font-medium text-gray-700 truncate block">
                                        {column_title(&mapping.sheet_column, position)}
                                    </span>
                                </div>
                                <span class="text-gray-400">"→"</span>
                                <div class="w-1/3 min-w-0">
                                    <select
                                        class=format!("w-full px-3 py-1.5 border rounded-lg text-sm {}", tone.select_class())
                                        prop:value=selected
                                        on:change=move |ev| {
                                            let field = event_target_value(&ev);
                                            wizard.update(|w| {
                                                w.update_mapping(position, &field);
                                            });
                                        }
                                    >
                                        {fields.iter().map(|f| view! {
                                            <option value=f.value.clone()>{f.label.clone()}</option>
                                        }).collect_view()}
                                    </select>
                                </div>
                                <div class="flex-shrink-0 w-20 text-right">
                                    {tone.tag().map(|tag| {
                                        let class = match tone {
                                            MappingTone::Auto => "text-xs bg-green-100 text-green-700 px-2 py-0.5 rounded-full",
                                            _ => "text-xs bg-blue-100 text-blue-700 px-2 py-0.5 rounded-full",
                                        };
                                        view! { <span class=class>{tag}</span> }
                                    })}
                                </div>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </div>
        })
    }
}

#[component]
fn PreviewTable(wizard: RwSignal<ImportWizard>) -> impl IntoView {
    move || {
        wizard.with(|w| {
            let preview = w.preview()?;
            let headers = preview
                .headers
                .iter()
                .enumerate()
                .map(|(col, header)| (column_title(header, col), w.column_target_label(col).map(str::to_string)))
                .collect::<Vec<_>>();
            let rows = preview
                .rows
                .iter()
                .map(|row| {
                    row.iter()
                        .enumerate()
                        .map(|(col, cell)| {
                            let text = if cell.is_empty() { "-".to_string() } else { cell.clone() };
                            (text, w.column_skipped(col))
                        })
                        .collect::<Vec<_>>()
                })
                .collect::<Vec<_>>();
            let total_rows = preview.total_rows;
            Some(view! {
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-gray-200">
                        <thead class="bg-gray-50">
                            <tr>
                                {headers.into_iter().map(|(title, target)| view! {
                                    <th class="px-4 py-3 text-left text-xs font-medium text-gray-500">
                                        <div>{title}</div>
                                        {target.map(|label| view! {
                                            <div class="text-blue-600 font-normal mt-0.5">{format!("→ {}", label)}</div>
                                        })}
                                    </th>
                                }).collect_view()}
                            </tr>
                        </thead>
                        <tbody class="bg-white divide-y divide-gray-200">
                            {rows.into_iter().map(|cells| view! {
                                <tr>
                                    {cells.into_iter().map(|(text, skipped)| {
                                        let tone = if skipped { "text-gray-300" } else { "text-gray-900" };
                                        view! { <td class=format!("px-4 py-3 text-sm max-w-xs truncate {}", tone)>{text}</td> }
                                    }).collect_view()}
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                    {(total_rows > PREVIEW_ROWS).then(|| view! {
                        <div class="p-4 bg-gray-50 text-center text-sm text-gray-500">
                            {format!("İlk {} satır gösteriliyor. Toplam {} satır.", PREVIEW_ROWS, total_rows)}
                        </div>
                    })}
                </div>
            })
        })
    }
}
