//! Shared Meal Planner Components

mod day_view;
mod meal_calendar;
mod meal_slot;
mod navbar;
mod photo_uploader;
mod recipe_card;
mod recipe_picker;
mod review_section;
mod star_rating;

pub use day_view::DayView;
pub use meal_calendar::MealCalendar;
pub use meal_slot::MealSlot;
pub use navbar::Navbar;
pub use photo_uploader::PhotoUploader;
pub use recipe_card::RecipeCard;
pub use recipe_picker::RecipePicker;
pub use review_section::ReviewSection;
pub use star_rating::{star_string, StarDisplay, StarInput};
