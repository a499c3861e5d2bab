//! Reusable UI components for the demo page.

pub mod action_button;
pub mod upload_panel;
