//! Collection Detail Page
//!
//! Recipes saved to one collection, with removal.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use ui_widgets::use_toasts;

use crate::api;
use crate::models::Collection;

#[component]
pub fn CollectionDetailPage() -> impl IntoView {
    let toasts = use_toasts();
    let params = use_params_map();

    let (collection, set_collection) = signal::<Option<Collection>>(None);

    Effect::new(move |_| {
        let Some(id) = params.read().get("id") else { return };
        spawn_local(async move {
            match api::get_collection(&id).await {
                Ok(loaded) => set_collection.set(Some(loaded)),
                Err(err) => toasts.error(err.to_string()),
            }
        });
    });

    let on_remove = move |recipe_id: String| {
        let Some(collection_id) = collection.get_untracked().map(|c| c.id) else {
            return;
        };
        spawn_local(async move {
            match api::remove_recipe_from_collection(&collection_id, &recipe_id).await {
                Ok(()) => {
                    set_collection.update(|c| {
                        if let Some(c) = c {
                            c.recipes.retain(|r| r.id != recipe_id);
                        }
                    });
                }
                Err(err) => toasts.error(err.to_string()),
            }
        });
    };

    view! {
        <div class="collection-detail-page">
            {move || collection.get().map(|collection| view! {
                <h1>{collection.name.clone()}</h1>
                {collection.description.clone().map(|d| view! {
                    <p class="collection-description">{d}</p>
                })}
                <ul class="collection-recipes">
                    <For
                        each=move || collection.recipes.clone()
                        key=|r| r.id.clone()
                        children=move |r| {
                            let recipe_id = r.id.clone();
                            let href = format!("/recipes/{}", r.id);
                            view! {
                                <li class="collection-recipe">
                                    {r.photo.clone().map(|url| view! {
                                        <img class="recipe-thumb" src=url alt=""/>
                                    })}
                                    <A href=href>{r.title.clone()}</A>
                                    <button
                                        class="recipe-remove-btn"
                                        on:click=move |_| on_remove(recipe_id.clone())
                                    >
                                        "Remove"
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
            })}
        </div>
    }
}
