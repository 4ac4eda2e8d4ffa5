use crate::constants::{
    COST_DISPLAY_ID, END_CAP_NAME, HEIGHT_ID, LIP_SIZE_NAME, WIDTH_A_ID, WIDTH_B_ID,
    ZIP_DIGIT_NAME,
};
use crate::form::FormValues;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

pub fn input_value(document: &web::Document, id: &str) -> String {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}

/// Value of the checked radio in group `name`, if any.
pub fn checked_radio(document: &web::Document, name: &str) -> Option<String> {
    let selector = format!("input[name=\"{}\"]:checked", name);
    document
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
        .map(|input| input.value())
}

pub fn read_form(document: &web::Document) -> FormValues {
    FormValues {
        width_a: input_value(document, WIDTH_A_ID),
        width_b: input_value(document, WIDTH_B_ID),
        height: input_value(document, HEIGHT_ID),
        end_cap: checked_radio(document, END_CAP_NAME),
        lip_size: checked_radio(document, LIP_SIZE_NAME),
        zone: checked_radio(document, ZIP_DIGIT_NAME),
    }
}

pub fn set_cost_text(document: &web::Document, text: &str) {
    if let Some(el) = document.get_element_by_id(COST_DISPLAY_ID) {
        el.set_text_content(Some(text));
    }
}

/// Attach `handler` for `event` to every radio in group `name`.
pub fn add_radio_listener(
    document: &web::Document,
    name: &str,
    event: &str,
    handler: impl FnMut() + 'static,
) {
    let selector = format!("input[name=\"{}\"]", name);
    let Ok(nodes) = document.query_selector_all(&selector) else {
        return;
    };
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    for i in 0..nodes.length() {
        if let Some(node) = nodes.item(i) {
            let _ = node.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        }
    }
    closure.forget();
}

pub fn add_listener(
    document: &web::Document,
    element_id: &str,
    event: &str,
    handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
