//! Star Rating Components
//!
//! Display for the server-computed average, and a 1..=5 input for the
//! review form.

use leptos::prelude::*;

/// Five-character star strip, rounding to the nearest whole star
pub fn star_string(rating: f64) -> String {
    let filled = rating.round().clamp(0.0, 5.0) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

#[component]
pub fn StarDisplay(rating: f64, #[prop(optional)] count: Option<u64>) -> impl IntoView {
    view! {
        <span class="star-display">
            <span class="stars">{star_string(rating)}</span>
            <span class="star-value">{format!("{:.1}", rating)}</span>
            {count.map(|count| view! {
                <span class="star-count">{format!("({})", count)}</span>
            })}
        </span>
    }
}

#[component]
pub fn StarInput(value: ReadSignal<u8>, set_value: WriteSignal<u8>) -> impl IntoView {
    view! {
        <span class="star-input">
            {(1u8..=5).map(|star| view! {
                <button
                    type="button"
                    class={move || if value.get() >= star { "star-btn filled" } else { "star-btn" }}
                    on:click=move |_| set_value.set(star)
                >
                    {move || if value.get() >= star { "★" } else { "☆" }}
                </button>
            }).collect_view()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_string_rounds() {
        assert_eq!(star_string(0.0), "☆☆☆☆☆");
        assert_eq!(star_string(3.4), "★★★☆☆");
        assert_eq!(star_string(3.5), "★★★★☆");
        assert_eq!(star_string(5.0), "★★★★★");
    }

    #[test]
    fn test_star_string_clamps_out_of_range() {
        assert_eq!(star_string(-1.0), "☆☆☆☆☆");
        assert_eq!(star_string(9.0), "★★★★★");
    }
}
