//! Planner Core
//!
//! Weekly-grid date math and shopping-list aggregation across a week of
//! planned meals.

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::{MealPlan, Recipe};

/// Monday-aligned 7-day window containing the pivot date
pub fn week_window(pivot: NaiveDate) -> [NaiveDate; 7] {
    let offset = pivot.weekday().num_days_from_monday() as i64;
    let monday = pivot - Duration::days(offset);
    std::array::from_fn(|i| monday + Duration::days(i as i64))
}

/// Move the pivot by whole weeks (negative = back)
pub fn shift_week(pivot: NaiveDate, delta_weeks: i64) -> NaiveDate {
    pivot + Duration::days(7 * delta_weeks)
}

/// Today according to the browser clock
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_default()
}

/// Recipe ids planned for one day: the three meal slots plus snacks
pub fn planned_recipe_ids(plan: &MealPlan) -> Vec<String> {
    let mut ids = Vec::new();
    for slot in [&plan.breakfast, &plan.lunch, &plan.dinner] {
        if let Some(recipe) = slot {
            ids.push(recipe.id.clone());
        }
    }
    for snack in &plan.snacks {
        ids.push(snack.id.clone());
    }
    ids
}

/// One aggregated shopping-list entry
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientNeed {
    pub ingredient_id: String,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}

/// Aggregate ingredients across a week of plans.
///
/// De-duplicates by ingredient id, summing quantities; entries keep
/// first-seen order. Planned recipes missing from `recipes` are skipped
/// (they were deleted since planning).
pub fn collect_shopping_ingredients(
    plans: &[MealPlan],
    recipes: &HashMap<String, Recipe>,
) -> Vec<IngredientNeed> {
    let mut needs: Vec<IngredientNeed> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for plan in plans {
        for recipe_id in planned_recipe_ids(plan) {
            let Some(recipe) = recipes.get(&recipe_id) else {
                continue;
            };
            for ingredient in &recipe.ingredients {
                match index.get(&ingredient.id) {
                    Some(&at) => needs[at].quantity += ingredient.quantity,
                    None => {
                        index.insert(ingredient.id.clone(), needs.len());
                        needs.push(IngredientNeed {
                            ingredient_id: ingredient.id.clone(),
                            name: ingredient.name.clone(),
                            quantity: ingredient.quantity,
                            unit: ingredient.unit.clone(),
                        });
                    }
                }
            }
        }
    }

    needs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Ingredient, RecipeRef, User};
    use chrono::Utc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make_user() -> User {
        User {
            id: "u1".to_string(),
            username: "cook".to_string(),
            email: "cook@example.com".to_string(),
            created_at: Utc::now(),
        }
    }

    fn make_recipe(id: &str, ingredients: &[(&str, &str, f64)]) -> Recipe {
        Recipe {
            id: id.to_string(),
            title: format!("Recipe {}", id),
            description: String::new(),
            photo: None,
            servings: 2,
            prep_minutes: 10,
            cook_minutes: 20,
            ingredients: ingredients
                .iter()
                .map(|(iid, name, qty)| Ingredient {
                    id: iid.to_string(),
                    name: name.to_string(),
                    quantity: *qty,
                    unit: "g".to_string(),
                })
                .collect(),
            instructions: Vec::new(),
            author: make_user(),
            average_rating: 0.0,
            review_count: 0,
            created_at: Utc::now(),
        }
    }

    fn recipe_ref(id: &str) -> RecipeRef {
        RecipeRef {
            id: id.to_string(),
            title: format!("Recipe {}", id),
            photo: None,
        }
    }

    fn make_plan(day: NaiveDate, dinner: Option<&str>, snacks: &[&str]) -> MealPlan {
        MealPlan {
            id: format!("plan-{}", day),
            date: day,
            breakfast: None,
            lunch: None,
            dinner: dinner.map(recipe_ref),
            snacks: snacks.iter().copied().map(recipe_ref).collect(),
        }
    }

    #[test]
    fn test_week_window_aligns_to_monday() {
        // 2026-08-19 is a Wednesday
        let window = week_window(date(2026, 8, 19));
        assert_eq!(window[0], date(2026, 8, 17));
        assert_eq!(window[6], date(2026, 8, 23));
        assert!(window.contains(&date(2026, 8, 19)));
    }

    #[test]
    fn test_week_window_edge_days() {
        // Monday pivots to itself, Sunday to the preceding Monday
        assert_eq!(week_window(date(2026, 8, 17))[0], date(2026, 8, 17));
        assert_eq!(week_window(date(2026, 8, 23))[0], date(2026, 8, 17));
    }

    #[test]
    fn test_week_window_is_consecutive() {
        let window = week_window(date(2026, 1, 1));
        for pair in window.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
    }

    #[test]
    fn test_shift_week() {
        let pivot = date(2026, 8, 19);
        assert_eq!(week_window(shift_week(pivot, 1))[0], date(2026, 8, 24));
        assert_eq!(week_window(shift_week(pivot, -1))[0], date(2026, 8, 10));
    }

    #[test]
    fn test_planned_ids_cover_slots_and_snacks() {
        let mut plan = make_plan(date(2026, 8, 17), Some("r1"), &["r2", "r3"]);
        plan.breakfast = Some(recipe_ref("r4"));
        let ids = planned_recipe_ids(&plan);
        assert_eq!(ids, vec!["r4", "r1", "r2", "r3"]);
    }

    #[test]
    fn test_shared_ingredient_is_deduplicated() {
        let recipes: HashMap<String, Recipe> = [
            make_recipe("r1", &[("garlic", "Garlic", 2.0), ("rice", "Rice", 100.0)]),
            make_recipe("r2", &[("garlic", "Garlic", 3.0)]),
        ]
        .into_iter()
        .map(|r| (r.id.clone(), r))
        .collect();

        let plans = vec![
            make_plan(date(2026, 8, 17), Some("r1"), &[]),
            make_plan(date(2026, 8, 18), Some("r2"), &[]),
        ];

        let needs = collect_shopping_ingredients(&plans, &recipes);

        assert_eq!(needs.len(), 2);
        assert_eq!(needs[0].ingredient_id, "garlic");
        assert_eq!(needs[0].quantity, 5.0);
        assert_eq!(needs[1].ingredient_id, "rice");
    }

    #[test]
    fn test_snacks_count_toward_the_list() {
        let recipes: HashMap<String, Recipe> = [make_recipe("r1", &[("oats", "Oats", 50.0)])]
            .into_iter()
            .map(|r| (r.id.clone(), r))
            .collect();

        let plans = vec![make_plan(date(2026, 8, 17), None, &["r1"])];
        let needs = collect_shopping_ingredients(&plans, &recipes);

        assert_eq!(needs.len(), 1);
        assert_eq!(needs[0].quantity, 50.0);
    }

    #[test]
    fn test_same_recipe_twice_sums_twice() {
        let recipes: HashMap<String, Recipe> = [make_recipe("r1", &[("egg", "Eggs", 2.0)])]
            .into_iter()
            .map(|r| (r.id.clone(), r))
            .collect();

        let plans = vec![
            make_plan(date(2026, 8, 17), Some("r1"), &[]),
            make_plan(date(2026, 8, 18), Some("r1"), &[]),
        ];
        let needs = collect_shopping_ingredients(&plans, &recipes);

        assert_eq!(needs.len(), 1);
        assert_eq!(needs[0].quantity, 4.0);
    }

    #[test]
    fn test_missing_recipe_is_skipped() {
        let recipes = HashMap::new();
        let plans = vec![make_plan(date(2026, 8, 17), Some("gone"), &[])];
        assert!(collect_shopping_ingredients(&plans, &recipes).is_empty());
    }
}
