//! Home Page
//!
//! Paginated post list with a category filter bar.

use leptos::prelude::*;
use leptos::task::spawn_local;
use ui_widgets::{use_toasts, Pagination};

use crate::api::{self, PostQuery};
use crate::components::PostCard;
use crate::context::use_app;
use crate::models::Post;

const PER_PAGE: u32 = 10;

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app();
    let toasts = use_toasts();

    let (page, set_page) = signal(1u32);
    let (category, set_category) = signal::<Option<String>>(None);
    let (posts, set_posts) = signal(Vec::<Post>::new());
    let (total, set_total) = signal(0u64);

    ctx.ensure_categories();

    // Reload when the page or the category filter changes
    Effect::new(move |_| {
        let query = PostQuery::page(page.get()).with_category(category.get());
        web_sys::console::log_1(&format!("[HOME] Loading posts {}", query.to_query_string()).into());
        spawn_local(async move {
            match api::list_posts(&query).await {
                Ok(resp) => {
                    set_posts.set(resp.posts);
                    set_total.set(resp.total);
                }
                Err(err) => toasts.error(err.to_string()),
            }
        });
    });

    let select_category = move |slug: Option<String>| {
        set_category.set(slug);
        set_page.set(1);
    };

    view! {
        <div class="home-page">
            <div class="category-filter">
                <button
                    class=move || if category.get().is_none() { "filter-btn active" } else { "filter-btn" }
                    on:click=move |_| select_category(None)
                >
                    "All"
                </button>
                <For
                    each=move || ctx.categories.get()
                    key=|c| c.id.clone()
                    children=move |c| {
                        let slug = c.slug.clone();
                        let slug_for_class = c.slug.clone();
                        view! {
                            <button
                                class=move || if category.get().as_deref() == Some(slug_for_class.as_str()) {
                                    "filter-btn active"
                                } else {
                                    "filter-btn"
                                }
                                on:click=move |_| select_category(Some(slug.clone()))
                            >
                                {c.name.clone()}
                            </button>
                        }
                    }
                />
            </div>

            <div class="post-list">
                <For
                    each=move || posts.get()
                    key=|post| post.id.clone()
                    children=move |post| view! { <PostCard post=post/> }
                />
            </div>

            <Show when=move || posts.get().is_empty()>
                <p class="empty-hint">"No posts yet."</p>
            </Show>

            <Pagination page=page set_page=set_page total=total per_page=PER_PAGE/>
        </div>
    }
}
