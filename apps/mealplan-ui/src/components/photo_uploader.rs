//! Photo Uploader Component
//!
//! File input that reads the picked file and POSTs it to the upload
//! endpoint. Oversized files come back as 413 ("file too large").

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use ui_widgets::{read_file_bytes, use_toasts};

use crate::api;

#[component]
pub fn PhotoUploader(
    /// Receives the hosted URL once the upload finishes
    #[prop(into)] on_uploaded: Callback<String>,
) -> impl IntoView {
    let toasts = use_toasts();
    let (uploading, set_uploading) = signal(false);

    let on_change = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        let filename = file.name();
        let mime = file.type_();
        set_uploading.set(true);
        spawn_local(async move {
            match read_file_bytes(&file).await {
                Ok(bytes) => match api::upload_photo(&filename, &mime, bytes).await {
                    Ok(url) => on_uploaded.run(url),
                    Err(err) => toasts.error(err.to_string()),
                },
                Err(_) => toasts.error("could not read file"),
            }
            set_uploading.set(false);
        });
    };

    view! {
        <label class="photo-uploader">
            <span class="photo-uploader-label">"Photo"</span>
            <input
                type="file"
                accept="image/*"
                on:change=on_change
                disabled=move || uploading.get()
            />
            <Show when=move || uploading.get()>
                <span class="uploading-hint">"Uploading..."</span>
            </Show>
        </label>
    }
}
