//! Comment Section Component
//!
//! Flat comment list threaded into one level of replies, with a comment
//! form and per-comment reply forms.

use leptos::prelude::*;
use leptos::task::spawn_local;
use ui_widgets::{use_toasts, ConfirmButton};

use crate::api;
use crate::context::use_app;
use crate::models::Comment;
use crate::threading::thread_comments;

#[component]
fn CommentRow(
    comment: Comment,
    is_reply: bool,
    replying_to: ReadSignal<Option<String>>,
    set_replying_to: WriteSignal<Option<String>>,
    on_changed: Callback<()>,
) -> impl IntoView {
    let ctx = use_app();
    let toasts = use_toasts();

    let id = StoredValue::new(comment.id.clone());
    let date = comment.created_at.format("%b %e, %Y").to_string();
    let author_id = comment.author.id.clone();
    let own_comment = move || ctx.user.with(|u| u.as_ref().map(|u| u.id.clone()) == Some(author_id.clone()));

    let on_delete = Callback::new(move |_| {
        spawn_local(async move {
            match api::delete_comment(&id.get_value()).await {
                Ok(()) => on_changed.run(()),
                Err(err) => toasts.error(err.to_string()),
            }
        });
    });

    view! {
        <div class=if is_reply { "comment reply" } else { "comment" }>
            <div class="comment-meta">
                <span class="comment-author">{comment.author.username.clone()}</span>
                <span class="comment-date">{date}</span>
                <Show when=own_comment>
                    <ConfirmButton button_class="comment-delete-btn" on_confirm=on_delete/>
                </Show>
            </div>
            <p class="comment-content">{comment.content.clone()}</p>
            <Show when=move || !is_reply && ctx.logged_in()>
                <button
                    class="reply-btn"
                    on:click=move |_| {
                        let target = id.get_value();
                        set_replying_to.update(|current| {
                            *current = match current.take() {
                                Some(prev) if prev == target => None,
                                _ => Some(target.clone()),
                            };
                        });
                    }
                >
                    {move || if replying_to.get().as_deref() == Some(id.get_value().as_str()) {
                        "Cancel"
                    } else {
                        "Reply"
                    }}
                </button>
            </Show>
        </div>
    }
}

#[component]
pub fn CommentSection(#[prop(into)] post_id: String) -> impl IntoView {
    let ctx = use_app();
    let toasts = use_toasts();
    let post_id = StoredValue::new(post_id);

    let (comments, set_comments) = signal(Vec::<Comment>::new());
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (new_text, set_new_text) = signal(String::new());
    let (replying_to, set_replying_to) = signal::<Option<String>>(None);
    let (reply_text, set_reply_text) = signal(String::new());

    // Load comments on mount and after every mutation
    Effect::new(move |_| {
        let _ = reload_trigger.get();
        spawn_local(async move {
            match api::list_comments(&post_id.get_value()).await {
                Ok(loaded) => set_comments.set(loaded),
                Err(err) => toasts.error(err.to_string()),
            }
        });
    });

    let reload = Callback::new(move |_: ()| set_reload_trigger.update(|v| *v += 1));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if !ctx.logged_in() {
            toasts.error("please log in");
            return;
        }
        let content = new_text.get();
        if content.trim().is_empty() {
            return;
        }
        spawn_local(async move {
            match api::create_comment(&post_id.get_value(), &content, None).await {
                Ok(_) => {
                    set_new_text.set(String::new());
                    set_reload_trigger.update(|v| *v += 1);
                }
                Err(err) => toasts.error(err.to_string()),
            }
        });
    };

    let on_submit_reply = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(parent) = replying_to.get() else { return };
        let content = reply_text.get();
        if content.trim().is_empty() {
            return;
        }
        spawn_local(async move {
            match api::create_comment(&post_id.get_value(), &content, Some(parent)).await {
                Ok(_) => {
                    set_reply_text.set(String::new());
                    set_replying_to.set(None);
                    set_reload_trigger.update(|v| *v += 1);
                }
                Err(err) => toasts.error(err.to_string()),
            }
        });
    };

    view! {
        <section class="comment-section">
            <h2>{move || format!("{} comments", comments.get().len())}</h2>

            <Show when=move || ctx.logged_in()>
                <form class="comment-form" on:submit=on_submit>
                    <textarea
                        placeholder="Add a comment..."
                        prop:value=move || new_text.get()
                        on:input=move |ev| set_new_text.set(event_target_value(&ev))
                    />
                    <button type="submit">"Comment"</button>
                </form>
            </Show>

            <For
                each=move || thread_comments(&comments.get())
                key=|thread| thread.comment.id.clone()
                children=move |thread| {
                    let thread_id = thread.comment.id.clone();
                    view! {
                        <div class="comment-thread">
                            <CommentRow
                                comment=thread.comment
                                is_reply=false
                                replying_to=replying_to
                                set_replying_to=set_replying_to
                                on_changed=reload
                            />
                            {move || (replying_to.get().as_deref() == Some(thread_id.as_str())).then(|| view! {
                                <form class="reply-form" on:submit=on_submit_reply>
                                    <textarea
                                        placeholder="Write a reply..."
                                        prop:value=move || reply_text.get()
                                        on:input=move |ev| set_reply_text.set(event_target_value(&ev))
                                    />
                                    <button type="submit">"Reply"</button>
                                </form>
                            })}
                            <For
                                each=move || thread.replies.clone()
                                key=|reply| reply.id.clone()
                                children=move |reply| view! {
                                    <CommentRow
                                        comment=reply
                                        is_reply=true
                                        replying_to=replying_to
                                        set_replying_to=set_replying_to
                                        on_changed=reload
                                    />
                                }
                            />
                        </div>
                    }
                }
            />
        </section>
    }
}
