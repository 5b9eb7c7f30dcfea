//! Shopping List Page
//!
//! Checkable items with optimistic toggling; a failed persist reverts
//! the checkbox.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use ui_widgets::{use_toasts, ConfirmButton};

use crate::api;
use crate::store::{store_set_item_checked, store_toggle_item, use_plan_store, PlanStateStoreFields};

#[component]
pub fn ShoppingListPage() -> impl IntoView {
    let store = use_plan_store();
    let toasts = use_toasts();
    let (loaded, set_loaded) = signal(false);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_active().await {
                Ok(list) => {
                    store.shopping_list().set(list);
                    set_loaded.set(true);
                }
                Err(err) => toasts.error(err.to_string()),
            }
        });
    });

    let on_toggle = move |item_id: String| {
        let Some(list_id) = store
            .shopping_list()
            .get_untracked()
            .map(|l| l.id)
        else {
            return;
        };
        // Optimistic: flip locally, persist, revert on failure
        let Some(new_state) = store_toggle_item(&store, &item_id) else {
            return;
        };
        spawn_local(async move {
            if let Err(err) = api::set_item_checked(&list_id, &item_id, new_state).await {
                store_set_item_checked(&store, &item_id, !new_state);
                toasts.error(err.to_string());
            }
        });
    };

    let on_delete = Callback::new(move |_| {
        let Some(list_id) = store.shopping_list().get_untracked().map(|l| l.id) else {
            return;
        };
        spawn_local(async move {
            match api::delete_list(&list_id).await {
                Ok(()) => {
                    store.shopping_list().set(None);
                    toasts.success("shopping list deleted");
                }
                Err(err) => toasts.error(err.to_string()),
            }
        });
    });

    view! {
        <div class="shopping-list-page">
            <h1>"Shopping list"</h1>
            {move || match store.shopping_list().get() {
                Some(list) => {
                    let created = list.created_at.format("%b %e, %Y").to_string();
                    let checked_count = list.items.iter().filter(|i| i.checked).count();
                    view! {
                        <div class="shopping-list-header">
                            <span>{format!("created {}", created)}</span>
                            <span>{format!("{} of {} done", checked_count, list.items.len())}</span>
                            <ConfirmButton button_class="list-delete-btn" on_confirm=on_delete/>
                        </div>
                        <ul class="shopping-items">
                            <For
                                each=move || list.items.clone()
                                key=|item| (item.id.clone(), item.checked)
                                children=move |item| {
                                    let item_id = item.id.clone();
                                    view! {
                                        <li class=if item.checked { "shopping-item checked" } else { "shopping-item" }>
                                            <label>
                                                <input
                                                    type="checkbox"
                                                    prop:checked=item.checked
                                                    on:change=move |_| on_toggle(item_id.clone())
                                                />
                                                {format!("{} {} {}", item.quantity, item.unit, item.name)}
                                            </label>
                                        </li>
                                    }
                                }
                            />
                        </ul>
                    }.into_any()
                }
                None => {
                    if loaded.get() {
                        view! {
                            <p class="empty-hint">
                                "No active list. Generate one from the " <A href="/planner">"planner"</A> "."
                            </p>
                        }.into_any()
                    } else {
                        view! { <p class="loading-hint">"Loading..."</p> }.into_any()
                    }
                }
            }}
        </div>
    }
}
