use crate::constants::{BUTTON_PRIMARY, BUTTON_SECONDARY};
use glam::Vec2;
use plenum_core::Viewport;
use web_sys as web;

/// What a pointer press starts on the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragMode {
    Rotate,
    Pan,
}

#[inline]
pub fn drag_mode_for_button(button: i16) -> Option<DragMode> {
    match button {
        BUTTON_PRIMARY => Some(DragMode::Rotate),
        BUTTON_SECONDARY => Some(DragMode::Pan),
        _ => None,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    TogglePanel,
    ResetCamera,
    HomeCamera,
}

#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    match key {
        "h" | "H" => Some(KeyAction::TogglePanel),
        "r" | "R" => Some(KeyAction::ResetCamera),
        "f" | "F" => Some(KeyAction::HomeCamera),
        _ => None,
    }
}

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    css_to_backing_px(
        Vec2::new(x_css, y_css),
        Vec2::new(rect.width() as f32, rect.height() as f32),
        Vec2::new(canvas.width() as f32, canvas.height() as f32),
    )
}

/// Scale a CSS-pixel position into canvas backing pixels. A collapsed rect
/// maps to the origin instead of producing NaN.
#[inline]
pub fn css_to_backing_px(css: Vec2, css_size: Vec2, backing: Vec2) -> Vec2 {
    if css_size.x <= 0.0 || css_size.y <= 0.0 {
        return Vec2::ZERO;
    }
    css / css_size * backing
}

#[inline]
pub fn canvas_viewport(canvas: &web::HtmlCanvasElement) -> Viewport {
    Viewport::new(canvas.width() as f32, canvas.height() as f32)
}
