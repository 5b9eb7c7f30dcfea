//! Recipe Card Component
//!
//! Summary card for the recipe grid.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::StarDisplay;
use crate::models::Recipe;

#[component]
pub fn RecipeCard(recipe: Recipe) -> impl IntoView {
    let href = format!("/recipes/{}", recipe.id);
    let total_minutes = recipe.prep_minutes + recipe.cook_minutes;

    view! {
        <article class="recipe-card">
            {recipe.photo.clone().map(|url| view! {
                <img class="recipe-card-photo" src=url alt=""/>
            })}
            <div class="recipe-card-body">
                <A href=href attr:class="recipe-card-title">{recipe.title.clone()}</A>
                <StarDisplay rating=recipe.average_rating count=recipe.review_count/>
                <div class="recipe-card-meta">
                    <span>{format!("{} min", total_minutes)}</span>
                    <span>{format!("serves {}", recipe.servings)}</span>
                </div>
            </div>
        </article>
    }
}
