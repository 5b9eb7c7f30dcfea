//! Post Card Component
//!
//! Summary card for post lists.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::markdown::excerpt;
use crate::models::Post;

const EXCERPT_CHARS: usize = 180;

#[component]
pub fn PostCard(post: Post) -> impl IntoView {
    let href = format!("/posts/{}", post.id);
    let summary = excerpt(&post.content, EXCERPT_CHARS);
    let date = post.created_at.format("%b %e, %Y").to_string();

    view! {
        <article class="post-card">
            {post.cover_image.clone().map(|url| view! {
                <img class="post-card-cover" src=url alt=""/>
            })}
            <div class="post-card-body">
                <A href=href attr:class="post-card-title">{post.title.clone()}</A>
                {post.category.clone().map(|category| view! {
                    <span class="post-card-category">{category.name}</span>
                })}
                <p class="post-card-excerpt">{summary}</p>
                <div class="post-card-meta">
                    <span class="post-card-author">{post.author.username.clone()}</span>
                    <span class="post-card-date">{date}</span>
                </div>
            </div>
        </article>
    }
}
