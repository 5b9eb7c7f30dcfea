//! Post Detail Page
//!
//! Rendered Markdown body, author controls, and the comment section.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};
use ui_widgets::{use_toasts, ConfirmButton};

use crate::api;
use crate::components::CommentSection;
use crate::context::use_app;
use crate::markdown::render_markdown;
use crate::models::Post;

#[component]
pub fn PostDetailPage() -> impl IntoView {
    let ctx = use_app();
    let toasts = use_toasts();
    let params = use_params_map();

    let (post, set_post) = signal::<Option<Post>>(None);

    Effect::new(move |_| {
        let Some(id) = params.read().get("id") else { return };
        spawn_local(async move {
            match api::get_post(&id).await {
                Ok(loaded) => set_post.set(Some(loaded)),
                Err(err) => toasts.error(err.to_string()),
            }
        });
    });

    view! {
        <div class="post-detail-page">
            {move || post.get().map(|post| {
                let own_post = ctx.user.with(|u| u.as_ref().map(|u| u.id.as_str()) == Some(post.author.id.as_str()));
                let post_id = StoredValue::new(post.id.clone());
                let edit_href = format!("/posts/{}/edit", post.id);
                let body = render_markdown(&post.content);
                let date = post.created_at.format("%b %e, %Y").to_string();

                let navigate = use_navigate();
                let on_delete = Callback::new(move |_| {
                    let navigate = navigate.clone();
                    spawn_local(async move {
                        match api::delete_post(&post_id.get_value()).await {
                            Ok(()) => {
                                toasts.success("post deleted");
                                navigate("/", Default::default());
                            }
                            Err(err) => toasts.error(err.to_string()),
                        }
                    });
                });

                view! {
                    <article class="post-detail">
                        {post.cover_image.clone().map(|url| view! {
                            <img class="post-cover" src=url alt=""/>
                        })}
                        <h1>{post.title.clone()}</h1>
                        <div class="post-meta">
                            <span class="post-author">{post.author.username.clone()}</span>
                            <span class="post-date">{date}</span>
                            {post.category.clone().map(|c| view! {
                                <span class="post-category">{c.name}</span>
                            })}
                        </div>
                        <Show when=move || own_post>
                            <div class="post-actions">
                                <A href=edit_href.clone()>"Edit"</A>
                                <ConfirmButton button_class="post-delete-btn" on_confirm=on_delete/>
                            </div>
                        </Show>
                        <div class="post-body" inner_html=body/>
                    </article>
                    <CommentSection post_id=post.id.clone()/>
                }
            })}
        </div>
    }
}
