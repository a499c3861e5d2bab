//! Demo push button with a hover-driven background color.

#[cfg(test)]
#[path = "action_button_test.rs"]
mod action_button_test;

use leptos::prelude::*;

/// Background when the pointer is elsewhere.
const BACKGROUND_IDLE: &str = "#007bff";
/// Background while the pointer is over the button.
const BACKGROUND_HOVERED: &str = "#0056b3";

/// Background color for the given hover state.
pub fn background_color(hovered: bool) -> &'static str {
    if hovered {
        BACKGROUND_HOVERED
    } else {
        BACKGROUND_IDLE
    }
}

/// Push button that darkens while hovered and reverts on hover-exit.
#[component]
pub fn ActionButton(on_click: Callback<()>, children: Children) -> impl IntoView {
    let hovered = RwSignal::new(false);

    view! {
        <button
            class="action-button"
            style:background-color=move || background_color(hovered.get())
            on:click=move |_| on_click.run(())
            on:mouseenter=move |_| hovered.set(true)
            on:mouseleave=move |_| hovered.set(false)
        >
            {children()}
        </button>
    }
}
