//! Pagination Controls
//!
//! Prev/next buttons with a page indicator, driven by the server's total
//! count. Pages are 1-based.

use leptos::prelude::*;

/// Number of pages needed for `total` items, never less than 1
pub fn page_count(total: u64, per_page: u32) -> u32 {
    if per_page == 0 {
        return 1;
    }
    let pages = total.div_ceil(per_page as u64);
    pages.clamp(1, u32::MAX as u64) as u32
}

/// Clamp a requested page into the valid 1..=count range
pub fn clamp_page(page: u32, count: u32) -> u32 {
    page.clamp(1, count.max(1))
}

#[component]
pub fn Pagination(
    page: ReadSignal<u32>,
    set_page: WriteSignal<u32>,
    /// Total item count as reported by the server
    #[prop(into)]
    total: Signal<u64>,
    per_page: u32,
) -> impl IntoView {
    let count = move || page_count(total.get(), per_page);
    let at_first = move || page.get() <= 1;
    let at_last = move || page.get() >= count();

    view! {
        <div class="pagination">
            <button
                class="page-btn"
                disabled=at_first
                on:click=move |_| set_page.update(|p| *p = clamp_page(p.saturating_sub(1), count()))
            >
                "‹ Prev"
            </button>
            <span class="page-indicator">
                {move || format!("Page {} of {}", page.get(), count())}
            </span>
            <button
                class="page-btn"
                disabled=at_last
                on:click=move |_| set_page.update(|p| *p = clamp_page(*p + 1, count()))
            >
                "Next ›"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count_rounds_up() {
        assert_eq!(page_count(0, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(95, 10), 10);
    }

    #[test]
    fn test_page_count_zero_per_page() {
        assert_eq!(page_count(50, 0), 1);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 5), 1);
        assert_eq!(clamp_page(3, 5), 3);
        assert_eq!(clamp_page(9, 5), 5);
        assert_eq!(clamp_page(2, 0), 1);
    }
}
