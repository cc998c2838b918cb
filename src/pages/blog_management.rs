//! Blog Management
//!
//! Post list with publish toggle, and a modal editor whose body is a
//! contenteditable area driven by `document.execCommand`.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crm_core::api::{set_published, BlogQuery, RestResource};
use crm_core::derive::format_tr_date;
use crm_core::editor::EditorState;
use crm_core::error::GENERIC_FAILURE;
use crm_core::forms::BlogDraft;
use crm_core::listing::ListState;
use crm_core::models::BlogPost;

use crate::components::{ConfirmDeleteButton, ErrorBanner, Field, Modal};
use crate::context::use_auth;
use crate::hooks::{alert, delete_record, draft_check, draft_input, draft_value, load_list, submit_editor};
use crate::pages::{INPUT, PRIMARY_BUTTON, SECONDARY_BUTTON};

/// Toolbar entries: (label, title, command, argument)
const TOOLBAR: &[(&str, &str, &str, Option<&str>)] = &[
    ("B", "Kalın", "bold", None),
    ("I", "İtalik", "italic", None),
    ("H1", "Başlık 1", "formatBlock", Some("h1")),
    ("H2", "Başlık 2", "formatBlock", Some("h2")),
    ("•", "Madde listesi", "insertUnorderedList", None),
    ("1.", "Numaralı liste", "insertOrderedList", None),
    ("❝", "Alıntı", "formatBlock", Some("blockquote")),
    ("↶", "Geri al", "undo", None),
    ("↷", "İleri al", "redo", None),
];

#[component]
pub fn BlogManagementPage() -> impl IntoView {
    let auth = use_auth();
    let list = RwSignal::new(ListState::<BlogPost>::new());
    let editor = RwSignal::new(EditorState::<BlogDraft>::Closed);
    let (reload, set_reload) = signal(0u32);
    let refresh = move || set_reload.update(|n| *n += 1);

    Effect::new(move |_| {
        reload.track();
        let query = BlogQuery::management(auth.config().blog_admin_limit);
        let client = auth.client();
        load_list(list, async move { client.blog_page(&query).await });
    });

    let toggle_publish = move |post: &BlogPost| {
        let (id, published) = (post.id, !post.is_published);
        let api = RestResource::blog_posts(&auth.client());
        spawn_local(async move {
            match set_published(&api, id, published).await {
                Ok(()) => refresh(),
                Err(err) => {
                    warn!(id, error = %err, "publish toggle failed");
                    alert(&err.user_message(GENERIC_FAILURE));
                }
            }
        });
    };
    let on_delete = move |id: i64| {
        delete_record(RestResource::blog_posts(&auth.client()), id, refresh);
    };
    let open_create = move |_| editor.update(|e| e.open_create(BlogDraft::default()));

    view! {
        <div>
            <div class="flex justify-between items-center mb-6">
                <div>
                    <h1 class="text-2xl font-bold text-gray-900">"Blog Yazıları"</h1>
                    <p class="text-gray-500 text-sm mt-1">"Landing page'de yayınlanacak blog yazılarını yönetin"</p>
                </div>
                <button class=PRIMARY_BUTTON on:click=open_create>"Yeni Yazı"</button>
            </div>
            {move || {
                if list.with(|l| l.loading()) {
                    return view! { <div class="text-center py-16 text-gray-500">"Yükleniyor..."</div> }.into_any();
                }
                let posts = list.with(|l| l.items().to_vec());
                if posts.is_empty() {
                    return view! {
                        <div class="text-center py-16 text-gray-500">
                            <p class="text-lg">"Henüz blog yazısı yok."</p>
                            <button class="mt-4 text-blue-600 hover:underline" on:click=open_create>"İlk yazıyı oluştur"</button>
                        </div>
                    }.into_any();
                }
                view! {
                    <div class="grid gap-4">
                        {posts.into_iter().map(|post| {
                            let id = post.id;
                            let for_edit = post.clone();
                            let for_toggle = post.clone();
                            let (state_class, state_label) = if post.is_published {
                                ("bg-green-100 text-green-700", "Yayında")
                            } else {
                                ("bg-gray-100 text-gray-600", "Taslak")
                            };
                            let mut meta = format!(
                                "{} · {}",
                                post.author_name.clone().unwrap_or_default(),
                                format_tr_date(&post.created_at).unwrap_or_default()
                            );
                            if let Some(published) = post.published_at.as_deref().filter(|_| post.is_published).and_then(format_tr_date) {
                                meta.push_str(&format!(" · Yayınlandı: {}", published));
                            }
                            view! {
                                <div class="bg-white rounded-lg shadow-sm border border-gray-200 p-4 flex items-start gap-4">
                                    {post.cover_image_url.clone().filter(|u| !u.is_empty()).map(|url| view! {
                                        <img src=url alt=post.title.clone() class="w-24 h-16 object-cover rounded flex-shrink-0"/>
                                    })}
                                    <div class="flex-1 min-w-0">
                                        <div class="flex items-center gap-2 flex-wrap">
                                            <h2 class="font-semibold text-gray-900 truncate">{post.title.clone()}</h2>
                                            <span class=format!("text-xs px-2 py-0.5 rounded-full font-medium {}", state_class)>{state_label}</span>
                                        </div>
                                        {post.excerpt.clone().filter(|e| !e.is_empty()).map(|excerpt| view! {
                                            <p class="text-sm text-gray-500 mt-1 line-clamp-2">{excerpt}</p>
                                        })}
                                        <p class="text-xs text-gray-400 mt-1">{meta}</p>
                                    </div>
                                    <div class="flex items-center gap-3 flex-shrink-0 text-sm">
                                        <button
                                            class=if post.is_published { "text-green-600 hover:underline" } else { "text-gray-500 hover:underline" }
                                            on:click=move |_| toggle_publish(&for_toggle)
                                        >
                                            {if post.is_published { "Yayından Kaldır" } else { "Yayınla" }}
                                        </button>
                                        <button class="text-blue-600 hover:underline" on:click=move |_| editor.update(|e| e.open_edit(&for_edit))>
                                            "Düzenle"
                                        </button>
                                        <ConfirmDeleteButton on_confirm=move |_| on_delete(id)/>
                                    </div>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                }.into_any()
            }}
            <Show when=move || editor.with(EditorState::is_open)>
                <BlogEditor editor=editor on_saved=Callback::new(move |_| refresh())/>
            </Show>
        </div>
    }
}

#[component]
fn BlogEditor(editor: RwSignal<EditorState<BlogDraft>>, on_saved: Callback<()>) -> impl IntoView {
    let auth = use_auth();
    let body_ref = NodeRef::<html::Div>::new();
    let (uploading, set_uploading) = signal(false);
    let editing = Signal::derive(move || editor.with(EditorState::is_editing));
    let title = Signal::derive(move || {
        if editing.get() { "Blog Yazısını Düzenle" } else { "Yeni Blog Yazısı" }.to_string()
    });

    // Seed the editable area once it is mounted
    Effect::new(move |_| {
        if let Some(body) = body_ref.get() {
            let html = editor.with_untracked(|e| e.draft().map(|d| d.content.clone()).unwrap_or_default());
            body.set_inner_html(&html);
        }
    });

    let on_cover = move |ev: web_sys::Event| {
        let Some(file) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0))
        else {
            return;
        };
        set_uploading.set(true);
        let client = auth.client();
        spawn_local(async move {
            let uploaded = match read_file(&file).await {
                Some(bytes) => client.upload_image(&file.name(), &file.type_(), bytes).await,
                None => Err(crm_core::ApiError::InvalidInput("Dosya okunamadı".to_string())),
            };
            match uploaded {
                Ok(url) => editor.update(|e| {
                    if let Some(draft) = e.draft_mut() {
                        draft.cover_image_url = url;
                    }
                }),
                Err(err) => {
                    warn!(error = %err, "cover upload failed");
                    alert(&err.user_message("Fotoğraf yüklenemedi"));
                }
            }
            set_uploading.set(false);
        });
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Some(body) = body_ref.get_untracked() {
            let html = body.inner_html();
            editor.update(|e| {
                if let Some(draft) = e.draft_mut() {
                    draft.set_content(html);
                }
            });
        }
        let api = RestResource::blog_posts(&auth.client());
        submit_editor(editor, api, move || on_saved.run(()));
    };

    let cover = move || editor.with(|e| e.draft().map(|d| d.cover_image_url.clone()).unwrap_or_default());
    let published = move || editor.with(|e| e.draft().is_some_and(|d| d.is_published));

    view! {
        <Modal title=title on_close=move |_| editor.update(EditorState::close) width="max-w-4xl">
            <form class="space-y-5" on:submit=on_submit>
                <ErrorBanner message=Signal::derive(move || editor.with(|e| e.error().map(str::to_string)))/>
                <Field label="Başlık *">
                    <input type="text" class=INPUT required=true placeholder="Blog yazısı başlığı"
                        prop:value=draft_value(editor, |d| d.title.clone())
                        on:input=draft_input(editor, |d, v| d.title = v)/>
                </Field>
                <Field label="Özet">
                    <textarea class=INPUT rows=2 placeholder="Blog listesinde görünecek kısa açıklama (opsiyonel)"
                        prop:value=draft_value(editor, |d| d.excerpt.clone())
                        on:input=draft_input(editor, |d, v| d.excerpt = v)/>
                </Field>
                <Field label="Kapak Fotoğrafı">
                    <div class="flex items-center gap-3">
                        <Show when=move || !cover().is_empty()>
                            <img src=cover alt="Kapak" class="h-16 w-24 object-cover rounded border"/>
                        </Show>
                        <label class=move || format!(
                            "px-4 py-2 border border-gray-300 rounded-lg cursor-pointer hover:bg-gray-50 text-sm text-gray-600 {}",
                            if uploading.get() { "opacity-50 pointer-events-none" } else { "" }
                        )>
                            {move || if uploading.get() { "Yükleniyor..." } else { "Fotoğraf Yükle" }}
                            <input type="file" accept="image/*" class="hidden" disabled=move || uploading.get() on:change=on_cover/>
                        </label>
                        <Show when=move || !cover().is_empty()>
                            <button type="button" class="text-red-500 hover:text-red-700 text-sm"
                                on:click=move |_| editor.update(|e| {
                                    if let Some(draft) = e.draft_mut() {
                                        draft.cover_image_url.clear();
                                    }
                                })>
                                "Kaldır"
                            </button>
                        </Show>
                    </div>
                </Field>
                <Field label="İçerik *">
                    <div class="border border-gray-300 rounded-lg overflow-hidden">
                        <div class="flex flex-wrap gap-1 p-2 border-b border-gray-200 bg-gray-50">
                            {TOOLBAR.iter().map(|&(label, hint, command, arg)| view! {
                                <button type="button" title=hint class="px-2 py-1 rounded hover:bg-gray-200 text-sm font-medium"
                                    on:click=move |_| format_selection(command, arg)>
                                    {label}
                                </button>
                            }).collect_view()}
                            <button type="button" title="Link ekle" class="px-2 py-1 rounded hover:bg-gray-200 text-sm"
                                on:click=move |_| insert_link()>
                                "🔗"
                            </button>
                        </div>
                        <div
                            node_ref=body_ref
                            contenteditable="true"
                            data-placeholder="Blog içeriğini buraya yazın..."
                            class="prose prose-sm max-w-none p-4 min-h-[300px] focus:outline-none"
                        ></div>
                    </div>
                </Field>
                <label class="flex items-center gap-3 text-sm font-medium text-gray-700">
                    <input type="checkbox"
                        prop:checked=published
                        on:change=draft_check(editor, |d, v| d.is_published = v)/>
                    {move || if published() { "Yayında" } else { "Taslak olarak kaydet" }}
                </label>
                <div class="flex justify-end gap-3 pt-2">
                    <button type="button" class=SECONDARY_BUTTON on:click=move |_| editor.update(EditorState::close)>
                        "İptal"
                    </button>
                    <button type="submit" class=PRIMARY_BUTTON disabled=move || editor.with(EditorState::is_submitting)>
                        {move || if editor.with(EditorState::is_submitting) {
                            "Kaydediliyor..."
                        } else if editing.get() {
                            "Güncelle"
                        } else {
                            "Oluştur"
                        }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}

fn html_document() -> Option<web_sys::HtmlDocument> {
    document().dyn_into::<web_sys::HtmlDocument>().ok()
}

/// Apply a formatting command to the current selection
fn format_selection(command: &str, arg: Option<&str>) {
    let Some(doc) = html_document() else {
        return;
    };
    let applied = match arg {
        Some(value) => doc.exec_command_with_show_ui_and_value(command, false, value),
        None => doc.exec_command(command),
    };
    if let Err(err) = applied {
        warn!(command, ?err, "execCommand failed");
    }
}

fn insert_link() {
    let url = window().prompt_with_message("Link URL:").ok().flatten();
    if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
        format_selection("createLink", Some(url.trim()));
    }
}

async fn read_file(file: &web_sys::File) -> Option<Vec<u8>> {
    match JsFuture::from(file.array_buffer()).await {
        Ok(buffer) => Some(js_sys::Uint8Array::new(&buffer).to_vec()),
        Err(err) => {
            warn!(?err, "file read failed");
            None
        }
    }
}
