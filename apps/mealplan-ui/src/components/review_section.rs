//! Review Section Component
//!
//! Paginated review list with sort switching and a review form. Sorting
//! and the rating aggregate are server-side; this only renders them.

use leptos::prelude::*;
use leptos::task::spawn_local;
use ui_widgets::{use_toasts, Pagination};

use crate::api::{self, ReviewSort, REVIEWS_PER_PAGE};
use crate::components::{StarDisplay, StarInput};
use crate::context::use_app;
use crate::models::{Review, ReviewSummary};

#[component]
fn SummaryBars(summary: ReviewSummary) -> impl IntoView {
    let max = summary.distribution.iter().copied().max().unwrap_or(0).max(1);

    view! {
        <div class="review-summary">
            <StarDisplay rating=summary.average count=summary.count/>
            <div class="rating-bars">
                {summary.distribution.iter().enumerate().rev().map(|(i, &n)| {
                    let percent = (n * 100 / max) as u32;
                    view! {
                        <div class="rating-bar-row">
                            <span class="rating-bar-label">{format!("{}★", i + 1)}</span>
                            <div class="rating-bar">
                                <div class="rating-bar-fill" style=format!("width: {}%;", percent)></div>
                            </div>
                            <span class="rating-bar-count">{n}</span>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn ReviewSection(#[prop(into)] recipe_id: String) -> impl IntoView {
    let ctx = use_app();
    let toasts = use_toasts();
    let recipe_id = StoredValue::new(recipe_id);

    let (page, set_page) = signal(1u32);
    let (sort, set_sort) = signal(ReviewSort::default());
    let (reviews, set_reviews) = signal(Vec::<Review>::new());
    let (total, set_total) = signal(0u64);
    let (summary, set_summary) = signal::<Option<ReviewSummary>>(None);
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    let (rating, set_rating) = signal(0u8);
    let (comment, set_comment) = signal(String::new());

    // Reload when page, sort, or the trigger changes
    Effect::new(move |_| {
        let page = page.get();
        let sort = sort.get();
        let _ = reload_trigger.get();
        spawn_local(async move {
            match api::list_reviews(&recipe_id.get_value(), page, sort).await {
                Ok(resp) => {
                    set_reviews.set(resp.reviews);
                    set_total.set(resp.total);
                    set_summary.set(Some(resp.summary));
                }
                Err(err) => toasts.error(err.to_string()),
            }
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if !ctx.logged_in() {
            toasts.error("please log in");
            return;
        }
        let rating_now = rating.get();
        if rating_now == 0 {
            toasts.error("pick a star rating first");
            return;
        }
        let comment_now = comment.get();
        spawn_local(async move {
            match api::create_review(&recipe_id.get_value(), rating_now, Some(comment_now)).await {
                Ok(_) => {
                    set_rating.set(0);
                    set_comment.set(String::new());
                    set_page.set(1);
                    set_reload_trigger.update(|v| *v += 1);
                }
                Err(err) => toasts.error(err.to_string()),
            }
        });
    };

    view! {
        <section class="review-section">
            <h2>"Reviews"</h2>

            {move || summary.get().map(|summary| view! { <SummaryBars summary=summary/> })}

            <div class="review-sort">
                {ReviewSort::ALL.iter().map(|&option| view! {
                    <button
                        class=move || if sort.get() == option { "sort-btn active" } else { "sort-btn" }
                        on:click=move |_| {
                            set_sort.set(option);
                            set_page.set(1);
                        }
                    >
                        {option.label()}
                    </button>
                }).collect_view()}
            </div>

            <Show when=move || ctx.logged_in()>
                <form class="review-form" on:submit=on_submit>
                    <StarInput value=rating set_value=set_rating/>
                    <textarea
                        placeholder="What did you think?"
                        prop:value=move || comment.get()
                        on:input=move |ev| set_comment.set(event_target_value(&ev))
                    />
                    <button type="submit">"Post review"</button>
                </form>
            </Show>

            <div class="review-list">
                <For
                    each=move || reviews.get()
                    key=|review| review.id.clone()
                    children=move |review| {
                        let date = review.created_at.format("%b %e, %Y").to_string();
                        view! {
                            <div class="review">
                                <div class="review-meta">
                                    <span class="review-author">{review.author.username.clone()}</span>
                                    <StarDisplay rating={f64::from(review.rating)}/>
                                    <span class="review-date">{date}</span>
                                </div>
                                {review.comment.clone().map(|text| view! {
                                    <p class="review-comment">{text}</p>
                                })}
                            </div>
                        }
                    }
                />
            </div>

            <Pagination page=page set_page=set_page total=total per_page=REVIEWS_PER_PAGE/>
        </section>
    }
}
