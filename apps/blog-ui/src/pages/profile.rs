//! Profile Page
//!
//! Own posts and account actions.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use ui_widgets::{use_toasts, Pagination};

use crate::api::{self, PostQuery};
use crate::components::PostCard;
use crate::context::use_app;
use crate::models::Post;

const PER_PAGE: u32 = 10;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let ctx = use_app();
    let toasts = use_toasts();

    let (page, set_page) = signal(1u32);
    let (posts, set_posts) = signal(Vec::<Post>::new());
    let (total, set_total) = signal(0u64);

    // Load own posts whenever the page or the session changes
    Effect::new(move |_| {
        let Some(author_id) = ctx.user.with(|u| u.as_ref().map(|u| u.id.clone())) else {
            return;
        };
        let query = PostQuery::page(page.get()).with_author(author_id);
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

    view! {
        <div class="profile-page">
            {move || match ctx.user.get() {
                None => view! {
                    <p class="login-hint">"Please " <A href="/login">"log in"</A> " to see your profile."</p>
                }.into_any(),
                Some(user) => view! {
                    <header class="profile-header">
                        <h1>{user.username.clone()}</h1>
                        <p class="profile-email">{user.email.clone()}</p>
                        {user.bio.clone().map(|bio| view! { <p class="profile-bio">{bio}</p> })}
                        <button class="logout-btn" on:click=move |_| ctx.logout()>"Log out"</button>
                    </header>
                    <h2>"Your posts"</h2>
                    <div class="post-list">
                        <For
                            each=move || posts.get()
                            key=|post| post.id.clone()
                            children=move |post| view! { <PostCard post=post/> }
                        />
                    </div>
                    <Show when=move || posts.get().is_empty()>
                        <p class="empty-hint">"You have not written anything yet."</p>
                    </Show>
                    <Pagination page=page set_page=set_page total=total per_page=PER_PAGE/>
                }.into_any(),
            }}
        </div>
    }
}
