use super::*;

// =============================================================
// Hover background
// =============================================================

#[test]
fn idle_and_hovered_backgrounds_are_distinct_fixed_values() {
    assert_eq!(background_color(false), "#007bff");
    assert_eq!(background_color(true), "#0056b3");
}

#[test]
fn background_reverts_on_hover_exit() {
    let idle = background_color(false);
    assert_ne!(idle, background_color(true));
    assert_eq!(idle, background_color(false));
}
