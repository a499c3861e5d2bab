//! File-picker widget that uploads a chosen PDF and reports the outcome.

use leptos::prelude::*;

use crate::state::upload::UploadState;

/// Upload panel: a button opening the native file chooser (PDF only) and
/// a status line reflecting the latest event.
///
/// A valid selection dispatches exactly one upload request. The selection
/// confirmation is written right after dispatch, not after completion, so
/// whichever of the confirmation and the async outcome lands last wins —
/// this matches the observed behavior of the service's existing client.
#[component]
pub fn UploadPanel() -> impl IntoView {
    let state = expect_context::<RwSignal<UploadState>>();

    let input_ref = NodeRef::<leptos::html::Input>::new();

    let on_pick = move |_| {
        #[cfg(feature = "csr")]
        {
            if let Some(input) = input_ref.get() {
                input.click();
            }
        }
    };

    let on_change = move |_| {
        #[cfg(feature = "csr")]
        {
            let Some(input) = input_ref.get() else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };

            if !crate::state::upload::is_supported_media_type(&file.type_()) {
                state.update(|s| {
                    s.message = crate::state::upload::UNSUPPORTED_TYPE_MESSAGE.to_owned();
                });
                return;
            }

            let name = file.name();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::send_book(file).await;
                state.update(|s| s.message = outcome.status_message());
            });

            state.update(|s| s.message = crate::state::upload::selected_message(&name));
        }
    };

    view! {
        <div class="upload-panel">
            <input
                class="upload-panel__input"
                type="file"
                accept=".pdf"
                node_ref=input_ref
                on:change=on_change
            />
            <button class="btn btn--primary" on:click=on_pick>
                "Send a book"
            </button>

            {move || {
                let message = state.get().message;
                (!message.is_empty())
                    .then(|| view! { <p class="upload-panel__status">{message}</p> })
            }}
        </div>
    }
}
