//! Post Editor Page
//!
//! Create/edit form shared by /posts/new and /posts/:id/edit.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};
use ui_widgets::use_toasts;

use crate::api;
use crate::components::ImageUploader;
use crate::context::use_app;
use crate::models::PostPayload;

#[component]
fn EditorForm() -> impl IntoView {
    let ctx = use_app();
    let toasts = use_toasts();
    let params = use_params_map();
    let navigate = use_navigate();

    let (title, set_title) = signal(String::new());
    let (content, set_content) = signal(String::new());
    let (category, set_category) = signal::<Option<String>>(None);
    let (cover_image, set_cover_image) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    // Editing an existing post: prefill the form
    Effect::new(move |_| {
        let Some(id) = params.read().get("id") else { return };
        spawn_local(async move {
            match api::get_post(&id).await {
                Ok(post) => {
                    set_title.set(post.title);
                    set_content.set(post.content);
                    set_category.set(post.category.map(|c| c.id));
                    set_cover_image.set(post.cover_image);
                }
                Err(err) => toasts.error(err.to_string()),
            }
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = title.get();
        let content = content.get();
        if title.trim().is_empty() || content.trim().is_empty() {
            toasts.error("title and content are required");
            return;
        }

        let payload = PostPayload {
            title,
            content,
            category: category.get(),
            cover_image: cover_image.get(),
        };
        let editing_id = params.read_untracked().get("id");
        let navigate = navigate.clone();
        set_saving.set(true);
        spawn_local(async move {
            let result = match &editing_id {
                Some(id) => api::update_post(id, &payload).await,
                None => api::create_post(&payload).await,
            };
            set_saving.set(false);
            match result {
                Ok(post) => {
                    toasts.success("post saved");
                    navigate(&format!("/posts/{}", post.id), Default::default());
                }
                Err(err) => toasts.error(err.to_string()),
            }
        });
    };

    let on_cover_uploaded = Callback::new(move |url: String| set_cover_image.set(Some(url)));

    view! {
        <form class="post-editor-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Title"
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />

            <select on:change=move |ev| {
                let value = event_target_value(&ev);
                set_category.set(if value.is_empty() { None } else { Some(value) });
            }>
                <option value="" selected=move || category.get().is_none()>
                    "No category"
                </option>
                <For
                    each=move || ctx.categories.get()
                    key=|c| c.id.clone()
                    children=move |c| {
                        let id = c.id.clone();
                        let id_for_selected = c.id.clone();
                        view! {
                            <option
                                value=id
                                selected=move || category.get().as_deref() == Some(id_for_selected.as_str())
                            >
                                {c.name.clone()}
                            </option>
                        }
                    }
                />
            </select>

            <ImageUploader label="Cover image" on_uploaded=on_cover_uploaded/>
            {move || cover_image.get().map(|url| view! {
                <img class="cover-preview" src=url alt=""/>
            })}

            <textarea
                class="post-content-input"
                placeholder="Write your post in Markdown..."
                prop:value=move || content.get()
                on:input=move |ev| set_content.set(event_target_value(&ev))
            />

            <button type="submit" disabled=move || saving.get()>
                {move || if saving.get() { "Saving..." } else { "Save" }}
            </button>
        </form>
    }
}

#[component]
pub fn PostEditorPage() -> impl IntoView {
    let ctx = use_app();
    ctx.ensure_categories();

    view! {
        <div class="post-editor-page">
            <Show
                when=move || ctx.logged_in()
                fallback=|| view! {
                    <p class="login-hint">"Please " <A href="/login">"log in"</A> " to write a post."</p>
                }
            >
                <EditorForm/>
            </Show>
        </div>
    }
}
