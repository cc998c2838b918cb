//! Public Blog
//!
//! Paginated list of published posts and the single-post view.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use tracing::warn;

use crm_core::api::BlogQuery;
use crm_core::derive::{format_tr_date, format_tr_long_date};
use crm_core::listing::ListState;
use crm_core::models::BlogPost;

use crate::context::use_auth;
use crate::hooks::load_list;

#[component]
fn PublicNav() -> impl IntoView {
    view! {
        <nav class="bg-white shadow-sm border-b">
            <div class="max-w-6xl mx-auto px-4 py-4 flex justify-between items-center">
                <A href="/"><span class="text-2xl font-bold text-gray-900">"HAN CRM"</span></A>
                <A href="/login">
                    <span class="px-6 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700">"Giriş Yap"</span>
                </A>
            </div>
        </nav>
    }
}

#[component]
pub fn BlogListPage() -> impl IntoView {
    let auth = use_auth();
    let page_size = auth.config().blog_page_size;
    let list = RwSignal::new(ListState::<BlogPost>::new());
    let (page, set_page) = signal(1u32);

    Effect::new(move |_| {
        let query = BlogQuery::public(page.get(), page_size);
        let client = auth.public_client();
        load_list(list, async move { client.blog_page(&query).await });
    });

    let total_pages = move || list.with(|l| l.total_pages());

    view! {
        <div class="min-h-screen bg-gradient-to-br from-blue-50 via-white to-blue-50">
            <PublicNav/>
            <div class="max-w-6xl mx-auto px-4 py-16">
                <div class="text-center mb-12">
                    <h1 class="text-4xl font-bold text-gray-900 mb-4">"Blog"</h1>
                    <p class="text-lg text-gray-600">"Gayrimenkul sektörü hakkında güncel haberler ve makaleler"</p>
                </div>
                {move || {
                    if list.with(|l| l.loading()) {
                        return view! { <div class="text-center py-20 text-gray-500">"Yükleniyor..."</div> }.into_any();
                    }
                    let posts = list.with(|l| l.items().to_vec());
                    if posts.is_empty() {
                        return view! {
                            <div class="text-center py-20 text-gray-500">
                                <p class="text-xl">"Henüz yayınlanmış blog yazısı bulunmuyor."</p>
                            </div>
                        }.into_any();
                    }
                    view! {
                        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                            {posts.into_iter().map(|post| view! { <PostCard post=post/> }).collect_view()}
                        </div>
                    }.into_any()
                }}
                <Show when=move || (total_pages() > 1)>
                    <div class="flex justify-center items-center gap-4 mt-12">
                        <button
                            class="px-3 py-2 rounded-lg border border-gray-300 hover:bg-gray-100 disabled:opacity-40"
                            disabled=move || page.get() <= 1
                            on:click=move |_| set_page.update(|p| *p = p.saturating_sub(1).max(1))
                        >
                            "‹"
                        </button>
                        <span class="text-gray-600 text-sm">{move || format!("{} / {}", page.get(), total_pages())}</span>
                        <button
                            class="px-3 py-2 rounded-lg border border-gray-300 hover:bg-gray-100 disabled:opacity-40"
                            disabled=move || page.get() >= total_pages()
                            on:click=move |_| set_page.update(|p| *p = (*p + 1).min(total_pages()))
                        >
                            "›"
                        </button>
                    </div>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn PostCard(post: BlogPost) -> impl IntoView {
    let date = format_tr_date(post.display_date()).unwrap_or_default();
    view! {
        <A href=format!("/blog/{}", post.slug)>
            <div class="bg-white rounded-xl shadow-md hover:shadow-xl transition-shadow overflow-hidden group h-full">
                {match post.cover_image_url.clone().filter(|u| !u.is_empty()) {
                    Some(url) => view! {
                        <img src=url alt=post.title.clone() class="w-full h-48 object-cover"/>
                    }.into_any(),
                    None => view! {
                        <div class="w-full h-48 bg-gradient-to-br from-blue-100 to-blue-200"></div>
                    }.into_any(),
                }}
                <div class="p-6">
                    <h2 class="text-xl font-semibold text-gray-900 mb-2 group-hover:text-blue-600 line-clamp-2">
                        {post.title.clone()}
                    </h2>
                    {post.excerpt.clone().filter(|e| !e.is_empty()).map(|excerpt| view! {
                        <p class="text-gray-600 text-sm mb-4 line-clamp-3">{excerpt}</p>
                    })}
                    <div class="flex items-center justify-between text-xs text-gray-400">
                        <div class="flex items-center gap-3">
                            {post.author_name.clone().map(|author| view! { <span>{author}</span> })}
                            <span>{date}</span>
                        </div>
                        <span class="text-blue-600 font-medium">"Oku →"</span>
                    </div>
                </div>
            </div>
        </A>
    }
}

#[derive(Clone, PartialEq)]
enum PostView {
    Loading,
    NotFound,
    Loaded(Box<BlogPost>),
}

#[component]
pub fn BlogPostPage() -> impl IntoView {
    let auth = use_auth();
    let params = use_params_map();
    let (state, set_state) = signal(PostView::Loading);

    Effect::new(move |_| {
        let Some(slug) = params.read().get("slug") else {
            set_state.set(PostView::NotFound);
            return;
        };
        set_state.set(PostView::Loading);
        let client = auth.public_client();
        spawn_local(async move {
            let next = match client.blog_post_by_slug(&slug).await {
                Ok(Some(post)) => PostView::Loaded(Box::new(post)),
                Ok(None) => PostView::NotFound,
                Err(err) => {
                    warn!(slug, error = %err, "blog post unavailable");
                    PostView::NotFound
                }
            };
            set_state.set(next);
        });
    });

    move || match state.get() {
        PostView::Loading => view! {
            <div class="min-h-screen flex items-center justify-center text-gray-500">"Yükleniyor..."</div>
        }
        .into_any(),
        PostView::NotFound => view! {
            <div class="min-h-screen flex flex-col items-center justify-center gap-4">
                <h1 class="text-2xl font-bold text-gray-900">"Yazı bulunamadı"</h1>
                <A href="/blog"><span class="text-blue-600 hover:underline">"Blog'a dön"</span></A>
            </div>
        }
        .into_any(),
        PostView::Loaded(post) => view! {
            <div class="min-h-screen bg-white">
                <PublicNav/>
                <article class="max-w-3xl mx-auto px-4 py-12">
                    <A href="/blog"><span class="text-blue-600 hover:underline text-sm">"← Blog'a Dön"</span></A>
                    {post.cover_image_url.clone().filter(|u| !u.is_empty()).map(|url| view! {
                        <img src=url alt=post.title.clone() class="w-full h-64 md:h-96 object-cover rounded-xl my-8"/>
                    })}
                    <h1 class="text-3xl md:text-4xl font-bold text-gray-900 mb-4 mt-8">{post.title.clone()}</h1>
                    <div class="flex items-center gap-4 text-sm text-gray-500 mb-8 pb-8 border-b">
                        {post.author_name.clone().map(|author| view! { <span>{author}</span> })}
                        <span>{format_tr_long_date(post.display_date()).unwrap_or_default()}</span>
                    </div>
                    <div class="prose prose-lg max-w-none" inner_html=post.content.clone()></div>
                </article>
            </div>
        }
        .into_any(),
    }
}
