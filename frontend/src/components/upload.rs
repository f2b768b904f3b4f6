//! Image upload widget.
//!
//! Picker and loading text swap with the busy flag; the error line and the
//! thumbnail render independently of it.

use imgdrop::{
    Control, UploadHandler, UploadState, UploadTarget, LOADING_TEXT, THUMBNAIL_ALT,
    THUMBNAIL_SIZE,
};
use leptos::*;
use web_sys::{Event, HtmlInputElement};

use crate::services::BrowserHost;
use crate::store::SignalStore;
use crate::{THUMBNAIL_RADIUS, UPLOAD_ICON};

#[component]
pub fn UploadWidget() -> impl IntoView {
    let state = create_rw_signal(UploadState::default());
    let store = SignalStore(state);
    let handler = store_value(UploadHandler::new(BrowserHost::new(UploadTarget::default())));

    // busy is set here, synchronously; only the request itself is spawned
    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let file = input.files().and_then(|files| files.get(0));

        if let Some(pending) = handler.with_value(|handler| handler.select(store, file)) {
            spawn_local(async move {
                pending.send().await;
            });
        }
    };

    let thumbnail_style = format!(
        "height: {size}; width: {size}; border-radius: {radius};",
        size = THUMBNAIL_SIZE,
        radius = THUMBNAIL_RADIUS,
    );

    view! {
        <div class="file-upload">
            <div class="upload-container">
                {move || match state.with(|s| s.view().control) {
                    Control::Loading => view! {
                        <p class="upload-status">{LOADING_TEXT}</p>
                    }.into_view(),
                    Control::Picker => view! {
                        <div class="upload-icon">{UPLOAD_ICON}</div>
                        <input
                            type="file"
                            class="file-input"
                            on:change=on_file_change
                        />
                    }.into_view(),
                }}

                <Show
                    when=move || state.with(|s| s.view().error.is_some())
                    fallback=|| view! { }
                >
                    <p class="error-message">
                        {move || state.with(|s| s.error_text.clone())}
                    </p>
                </Show>

                <Show
                    when=move || state.with(|s| s.view().thumbnail.is_some())
                    fallback=|| view! { }
                >
                    <div class="upload-result">
                        <img
                            src=move || state.with(|s| s.result_url.clone().unwrap_or_default())
                            alt=THUMBNAIL_ALT
                            style=thumbnail_style.clone()
                        />
                    </div>
                </Show>
            </div>
        </div>
    }
}
