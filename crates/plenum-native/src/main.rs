use glam::Vec2;
use plenum_core::{
    camera_home_vec3, camera_target_vec3, BoxSpec, OrbitConfig, OrbitController, PlenumScene,
    PricingConfig, Viewport, DEFAULT_BOX, DEFAULT_ZONE,
};
use plenum_render::GpuSurface;
use winit::{
    event::*,
    event_loop::EventLoop,
    keyboard::Key,
    window::{Window, WindowBuilder},
};

mod keys;

use keys::KeyCommand;

/// Pixels of trackpad scroll treated as one wheel notch.
const PIXELS_PER_LINE: f32 = 40.0;

struct App<'w> {
    window: &'w Window,
    scene: PlenumScene<GpuSurface<'w>>,
    cursor: Vec2,
}

impl<'w> App<'w> {
    async fn new(window: &'w Window) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let gpu = GpuSurface::new(&instance, surface, size.width, size.height).await?;
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
        Ok(Self {
            window,
            scene,
            cursor: Vec2::ZERO,
        })
    }

    fn viewport(&self) -> Viewport {
        let size = self.window.inner_size();
        Viewport::new(size.width as f32, size.height as f32)
    }

    fn on_cursor_moved(&mut self, x: f32, y: f32) {
        self.cursor = Vec2::new(x, y);
        let viewport = self.viewport();
        self.scene
            .controller_mut()
            .on_pointer_move(x, y, viewport);
    }

    fn on_mouse_input(&mut self, state: ElementState, button: MouseButton) {
        let Vec2 { x, y } = self.cursor;
        let controller = self.scene.controller_mut();
        match (state, button) {
            (ElementState::Pressed, MouseButton::Left) => controller.on_pointer_down(x, y),
            (ElementState::Pressed, MouseButton::Right) => controller.on_pan_down(x, y),
            (ElementState::Released, MouseButton::Left | MouseButton::Right) => {
                controller.on_pointer_up()
            }
            _ => {}
        }
    }

    fn on_wheel(&mut self, delta: MouseScrollDelta) {
        // winit reports scroll-up as positive; the controller expects DOM deltaY
        let dom_delta_y = match delta {
            MouseScrollDelta::LineDelta(_, y) => -y,
            MouseScrollDelta::PixelDelta(p) => -(p.y as f32) / PIXELS_PER_LINE,
        };
        self.scene.controller_mut().on_wheel(dom_delta_y);
    }

    fn on_key(&mut self, key: &str) {
        let Some(command) = keys::command_for_key(key) else {
            return;
        };
        match &command {
            KeyCommand::ResetCamera => self.scene.controller_mut().reset(),
            KeyCommand::HomeCamera => self
                .scene
                .controller_mut()
                .home(camera_home_vec3(), camera_target_vec3()),
            KeyCommand::Zone(zone) => {
                let cost = self.scene.on_zone_changed(zone);
                log::info!("[keys] zone {} -> ${:.2}", zone, cost);
            }
            shape => {
                let Some(spec) = keys::edited_spec(self.scene.spec(), shape) else {
                    return;
                };
                match self.scene.on_dimension_changed(spec) {
                    Ok(cost) => log::info!(
                        "[keys] {}x{}x{} endcap={} lip={} -> ${:.2}",
                        spec.width_a,
                        spec.width_b,
                        spec.height,
                        spec.end_cap,
                        spec.lip_size,
                        cost
                    ),
                    Err(e) => log::warn!("[keys] {}", e),
                }
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Plenum Preview (native)")
        .build(&event_loop)?;

    let mut app = pollster::block_on(App::new(&window))?;
    log::info!("[init] cost ${:.2}", app.scene.cost());

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Resized(size) => app
                .scene
                .surface_mut()
                .resize(size.width, size.height),
            WindowEvent::CursorMoved { position, .. } => {
                app.on_cursor_moved(position.x as f32, position.y as f32)
            }
            WindowEvent::MouseInput { state, button, .. } => app.on_mouse_input(state, button),
            WindowEvent::MouseWheel { delta, .. } => app.on_wheel(delta),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key: Key::Character(ref text),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => app.on_key(text.as_str()),
            _ => {}
        },
        Event::AboutToWait => match app.scene.frame() {
            Ok(()) => app.window.request_redraw(),
            Err(e) => {
                log::error!("[frame] {:?}", e);
                elwt.exit();
            }
        },
        _ => {}
    })?;
    Ok(())
}
