//! Meal Planner Pages
//!
//! One component per route.

mod collection_detail;
mod collections;
mod login;
mod planner;
mod recipe_detail;
mod recipe_editor;
mod recipe_list;
mod shopping_list;

pub use collection_detail::CollectionDetailPage;
pub use collections::CollectionsPage;
pub use login::LoginPage;
pub use planner::PlannerPage;
pub use recipe_detail::RecipeDetailPage;
pub use recipe_editor::RecipeEditorPage;
pub use recipe_list::RecipeListPage;
pub use shopping_list::ShoppingListPage;
