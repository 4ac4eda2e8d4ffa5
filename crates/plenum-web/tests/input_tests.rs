// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/constants.rs"]
mod constants;
#[path = "../src/input.rs"]
mod input;

use glam::Vec2;
use input::*;

#[test]
fn primary_rotates_and_secondary_pans() {
    assert_eq!(drag_mode_for_button(0), Some(DragMode::Rotate));
    assert_eq!(drag_mode_for_button(2), Some(DragMode::Pan));
    // middle and extra buttons are ignored
    assert_eq!(drag_mode_for_button(1), None);
    assert_eq!(drag_mode_for_button(3), None);
}

#[test]
fn shortcut_keys_map_case_insensitively() {
    assert_eq!(action_for_key("h"), Some(KeyAction::TogglePanel));
    assert_eq!(action_for_key("H"), Some(KeyAction::TogglePanel));
    assert_eq!(action_for_key("r"), Some(KeyAction::ResetCamera));
    assert_eq!(action_for_key("F"), Some(KeyAction::HomeCamera));
    assert_eq!(action_for_key("x"), None);
    assert_eq!(action_for_key("Enter"), None);
}

#[test]
fn css_position_scales_to_backing_pixels() {
    // 2x device pixel ratio
    let px = css_to_backing_px(
        Vec2::new(100.0, 50.0),
        Vec2::new(400.0, 200.0),
        Vec2::new(800.0, 400.0),
    );
    assert_eq!(px, Vec2::new(200.0, 100.0));
}

#[test]
fn collapsed_canvas_rect_maps_to_origin() {
    let px = css_to_backing_px(Vec2::new(10.0, 10.0), Vec2::ZERO, Vec2::new(1.0, 1.0));
    assert_eq!(px, Vec2::ZERO);
    assert!(px.is_finite());
}
