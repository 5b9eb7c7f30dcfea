//! Collections Page
//!
//! Lists the user's collections with a create form.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use ui_widgets::{use_toasts, ConfirmButton};

use crate::api;
use crate::context::use_app;
use crate::models::Collection;

#[component]
fn CollectionRow(collection: Collection, on_deleted: Callback<String>) -> impl IntoView {
    let collection_id = StoredValue::new(collection.id.clone());
    let href = format!("/collections/{}", collection.id);
    let count = collection.recipes.len();

    let on_delete = Callback::new(move |_| on_deleted.run(collection_id.get_value()));

    view! {
        <li class="collection-row">
            <A href=href attr:class="collection-link">
                <span class="collection-name">{collection.name.clone()}</span>
                <span class="collection-count">
                    {if count == 1 { "1 recipe".to_string() } else { format!("{} recipes", count) }}
                </span>
            </A>
            {collection.description.clone().map(|d| view! {
                <p class="collection-description">{d}</p>
            })}
            <ConfirmButton button_class="collection-delete-btn" on_confirm=on_delete/>
        </li>
    }
}

#[component]
fn CollectionsView() -> impl IntoView {
    let toasts = use_toasts();

    let (collections, set_collections) = signal(Vec::<Collection>::new());
    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());

    Effect::new(move |_| {
        spawn_local(async move {
            match api::list_collections().await {
                Ok(loaded) => set_collections.set(loaded),
                Err(err) => toasts.error(err.to_string()),
            }
        });
    });

    let on_create = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = name.get();
        if name.trim().is_empty() {
            toasts.error("name is required");
            return;
        }
        let description = description.get();
        spawn_local(async move {
            let description = Some(description.trim()).filter(|d| !d.is_empty());
            match api::create_collection(name.trim(), description).await {
                Ok(created) => {
                    set_collections.update(|list| list.push(created));
                    set_name.set(String::new());
                    set_description.set(String::new());
                }
                Err(err) => toasts.error(err.to_string()),
            }
        });
    };

    let on_deleted = Callback::new(move |id: String| {
        spawn_local(async move {
            match api::delete_collection(&id).await {
                Ok(()) => {
                    set_collections.update(|list| list.retain(|c| c.id != id));
                    toasts.success("collection deleted");
                }
                Err(err) => toasts.error(err.to_string()),
            }
        });
    });

    view! {
        <h1>"Collections"</h1>
        <form class="collection-create-form" on:submit=on_create>
            <input
                type="text"
                placeholder="Name"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Description (optional)"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            />
            <button type="submit">"Create"</button>
        </form>

        <ul class="collection-list">
            <For
                each=move || collections.get()
                key=|c| c.id.clone()
                children=move |c| view! { <CollectionRow collection=c on_deleted=on_deleted/> }
            />
        </ul>
        <Show when=move || collections.get().is_empty()>
            <p class="empty-hint">"No collections yet."</p>
        </Show>
    }
}

#[component]
pub fn CollectionsPage() -> impl IntoView {
    let ctx = use_app();

    view! {
        <div class="collections-page">
            <Show
                when=move || ctx.logged_in()
                fallback=|| view! {
                    <p class="login-hint">"Please " <A href="/login">"log in"</A> " to use collections."</p>
                }
            >
                <CollectionsView/>
            </Show>
        </div>
    }
}
