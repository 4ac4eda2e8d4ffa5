use crate::SharedScene;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const STATS_INTERVAL: Duration = Duration::from_secs(5);

/// Frame counter for the periodic debug log.
struct FrameStats {
    since: Instant,
    frames: u32,
}

impl FrameStats {
    fn tick(&mut self) {
        self.frames += 1;
        let elapsed = self.since.elapsed();
        if elapsed >= STATS_INTERVAL {
            log::debug!(
                "[frame] {:.1} fps",
                self.frames as f32 / elapsed.as_secs_f32()
            );
            self.since = Instant::now();
            self.frames = 0;
        }
    }
}

fn request_frame(cb: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(closure) = cb.borrow().as_ref() {
        let _ = w.request_animation_frame(closure.as_ref().unchecked_ref());
    }
}

/// Drive `scene.frame()` from `requestAnimationFrame` for the life of the page.
pub fn start_loop(scene: SharedScene) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let mut stats = FrameStats {
        since: Instant::now(),
        frames: 0,
    };
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Err(e) = scene.borrow_mut().frame() {
            log::error!("[frame] {:?}", e);
        }
        stats.tick();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
