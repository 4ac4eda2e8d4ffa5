#![cfg(target_arch = "wasm32")]
use plenum_core::{
    camera_home_vec3, camera_target_vec3, BoxSpec, OrbitConfig, OrbitController, PlenumScene,
    PricingConfig, DEFAULT_BOX, DEFAULT_ZONE,
};
use plenum_render::GpuSurface;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod form;
mod frame;
mod input;
mod ui;

/// The one scene shared by every DOM callback and the frame loop.
pub(crate) type SharedScene = Rc<RefCell<PlenumScene<GpuSurface<'static>>>>;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("plenum-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    dom::sync_canvas_backing_size(&canvas);

    let instance = wgpu::Instance::default();
    // owned canvas target, so the surface is 'static
    let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
    let gpu = GpuSurface::new(&instance, surface, canvas.width(), canvas.height()).await?;

    let controller = OrbitController::new(
        OrbitConfig::default(),
        camera_home_vec3(),
        camera_target_vec3(),
    )?;
    let [a, b, h] = DEFAULT_BOX;
    let scene = PlenumScene::new(
        gpu,
        controller,
        PricingConfig::default(),
        BoxSpec::new(a, b, h),
        DEFAULT_ZONE,
    )?;
    let scene: SharedScene = Rc::new(RefCell::new(scene));

    events::wire_pointer_handlers(&canvas, scene.clone());
    events::wire_global_keydown(&document, scene.clone());
    events::wire_form_inputs(&document, scene.clone());
    events::wire_resize(&canvas, scene.clone());
    // pick up whatever the page pre-filled
    events::apply_form(&document, &scene);

    log::info!("[init] canvas {}x{}", canvas.width(), canvas.height());
    frame::start_loop(scene);
    Ok(())
}
