//! Home page: the demo button and the book upload panel.

use leptos::prelude::*;

use crate::components::action_button::ActionButton;
use crate::components::upload_panel::UploadPanel;

/// Single page of the demo.
#[component]
pub fn HomePage() -> impl IntoView {
    let clicked = RwSignal::new(String::new());

    let on_click = Callback::new(move |_| {
        clicked.set("Button clicked!".to_owned());
    });

    view! {
        <div class="home-page">
            <h1>"Bookdrop"</h1>
            <p class="home-page__tagline">
                "Send a scanned book to the local digitization service"
            </p>

            <ActionButton on_click=on_click>"Click me!"</ActionButton>

            {move || {
                let message = clicked.get();
                (!message.is_empty())
                    .then(|| view! { <p class="home-page__message">{message}</p> })
            }}

            <UploadPanel/>
        </div>
    }
}
