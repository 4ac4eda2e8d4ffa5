use crate::constants::CONTROLS_ID;
use web_sys as web;

#[inline]
pub fn is_panel_hidden(document: &web::Document) -> bool {
    document
        .get_element_by_id(CONTROLS_ID)
        .and_then(|el| el.get_attribute("style"))
        .map(|s| s.contains("display:none"))
        .unwrap_or(false)
}

/// Show or hide the control panel; the canvas keeps receiving input either way.
pub fn toggle_panel(document: &web::Document) {
    let Some(el) = document.get_element_by_id(CONTROLS_ID) else {
        return;
    };
    let style = if is_panel_hidden(document) {
        ""
    } else {
        "display:none"
    };
    let _ = el.set_attribute("style", style);
    log::debug!("[ui] controls hidden={}", !style.is_empty());
}
