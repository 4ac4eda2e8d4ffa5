use crate::constants::{DIMENSION_INPUT_IDS, END_CAP_NAME, LIP_SIZE_NAME, ZIP_DIGIT_NAME};
use crate::dom;
use crate::form;
use crate::input::{self, DragMode, KeyAction};
use crate::ui;
use crate::SharedScene;
use plenum_core::{camera_home_vec3, camera_target_vec3};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

fn on_canvas<E: FromWasmAbi + 'static>(
    canvas: &web::HtmlCanvasElement,
    event: &str,
    handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let _ = canvas.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn wire_pointer_handlers(canvas: &web::HtmlCanvasElement, scene: SharedScene) {
    // pointerdown
    {
        let scene = scene.clone();
        let canvas_m = canvas.clone();
        on_canvas(canvas, "pointerdown", move |ev: web::PointerEvent| {
            let Some(mode) = input::drag_mode_for_button(ev.button()) else {
                return;
            };
            let pos = input::pointer_canvas_px(&ev, &canvas_m);
            {
                let mut s = scene.borrow_mut();
                let controller = s.controller_mut();
                match mode {
                    DragMode::Rotate => controller.on_pointer_down(pos.x, pos.y),
                    DragMode::Pan => controller.on_pan_down(pos.x, pos.y),
                }
            }
            // keep receiving moves when the drag leaves the canvas
            let _ = canvas_m.set_pointer_capture(ev.pointer_id());
            ev.prevent_default();
        });
    }

    // pointermove
    {
        let scene = scene.clone();
        let canvas_m = canvas.clone();
        on_canvas(canvas, "pointermove", move |ev: web::PointerEvent| {
            let pos = input::pointer_canvas_px(&ev, &canvas_m);
            let viewport = input::canvas_viewport(&canvas_m);
            scene
                .borrow_mut()
                .controller_mut()
                .on_pointer_move(pos.x, pos.y, viewport);
        });
    }

    // pointerup / pointercancel
    for event in ["pointerup", "pointercancel"] {
        let scene = scene.clone();
        let canvas_m = canvas.clone();
        on_canvas(canvas, event, move |ev: web::PointerEvent| {
            scene.borrow_mut().controller_mut().on_pointer_up();
            if canvas_m.has_pointer_capture(ev.pointer_id()) {
                let _ = canvas_m.release_pointer_capture(ev.pointer_id());
            }
        });
    }

    // wheel
    {
        let scene = scene.clone();
        on_canvas(canvas, "wheel", move |ev: web::WheelEvent| {
            ev.prevent_default();
            scene
                .borrow_mut()
                .controller_mut()
                .on_wheel(ev.delta_y() as f32);
        });
    }

    // the secondary button pans, so the browser menu stays out of the way
    on_canvas(canvas, "contextmenu", move |ev: web::MouseEvent| {
        ev.prevent_default();
    });
}

/// Typing into a text or number field must not trigger camera shortcuts.
fn is_typing_target(ev: &web::KeyboardEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::HtmlInputElement>().ok())
        .map(|input| input.type_() != "radio")
        .unwrap_or(false)
}

pub fn wire_global_keydown(document: &web::Document, scene: SharedScene) {
    let Some(window) = web::window() else {
        return;
    };
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if is_typing_target(&ev) {
            return;
        }
        let Some(action) = input::action_for_key(&ev.key()) else {
            return;
        };
        match action {
            KeyAction::TogglePanel => ui::toggle_panel(&doc),
            KeyAction::ResetCamera => scene.borrow_mut().controller_mut().reset(),
            KeyAction::HomeCamera => scene
                .borrow_mut()
                .controller_mut()
                .home(camera_home_vec3(), camera_target_vec3()),
        }
        log::debug!("[keys] {:?}", action);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Rebuild from the current form values and refresh the cost text.
pub fn apply_form(document: &web::Document, scene: &SharedScene) {
    let values = dom::read_form(document);
    let mut s = scene.borrow_mut();
    s.on_zone_changed(values.zone());
    match s.on_dimension_changed(values.to_spec()) {
        Ok(cost) => dom::set_cost_text(document, &form::format_cost(cost)),
        // previous mesh and cost stay on screen
        Err(e) => log::warn!("[form] {}", e),
    }
}

fn apply_zone(document: &web::Document, scene: &SharedScene) {
    let values = dom::read_form(document);
    let cost = scene.borrow_mut().on_zone_changed(values.zone());
    dom::set_cost_text(document, &form::format_cost(cost));
}

pub fn wire_form_inputs(document: &web::Document, scene: SharedScene) {
    for id in DIMENSION_INPUT_IDS {
        let doc = document.clone();
        let scene = scene.clone();
        dom::add_listener(document, id, "input", move || apply_form(&doc, &scene));
    }
    for name in [END_CAP_NAME, LIP_SIZE_NAME] {
        let doc = document.clone();
        let scene = scene.clone();
        dom::add_radio_listener(document, name, "change", move || apply_form(&doc, &scene));
    }
    let doc = document.clone();
    dom::add_radio_listener(document, ZIP_DIGIT_NAME, "change", move || {
        apply_zone(&doc, &scene)
    });
}

pub fn wire_resize(canvas: &web::HtmlCanvasElement, scene: SharedScene) {
    let Some(window) = web::window() else {
        return;
    };
    let canvas_resize = canvas.clone();
    let closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
        scene
            .borrow_mut()
            .surface_mut()
            .resize(canvas_resize.width(), canvas_resize.height());
    }) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}
