//! Meal Calendar Component
//!
//! Seven-day grid computed from the pivot date.

use chrono::NaiveDate;
use leptos::prelude::*;

use crate::components::DayView;
use crate::planner::week_window;

#[component]
pub fn MealCalendar(pivot: ReadSignal<NaiveDate>) -> impl IntoView {
    view! {
        <div class="meal-calendar">
            <For
                each=move || week_window(pivot.get())
                key=|date| *date
                children=move |date| view! { <DayView date=date/> }
            />
        </div>
    }
}
