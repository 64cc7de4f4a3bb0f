use crate::canvas::CanvasSurface;
use crate::constants::FRAME_LOG_INTERVAL;
use gallery_core::Gallery;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// State shared between the animation callback and the event handlers.
pub struct FrameContext {
    pub gallery: Rc<RefCell<Gallery>>,
    pub surfaces: Rc<RefCell<Vec<CanvasSurface>>>,
}

impl FrameContext {
    /// Render every cell once. All cells update inside this call.
    pub fn frame(&self) {
        let mut gallery = self.gallery.borrow_mut();
        let mut surfaces = self.surfaces.borrow_mut();
        match gallery.frame(Instant::now(), surfaces.as_mut_slice()) {
            Ok(Some(time)) => {
                if time.frame % FRAME_LOG_INTERVAL == 0 {
                    log::debug!(
                        "[frame] #{} elapsed={:.2}s dt={:.4}s",
                        time.frame,
                        time.elapsed,
                        time.dt
                    );
                }
            }
            Ok(None) => {}
            Err(e) => log::warn!("[frame] {}", e),
        }
    }
}

/// requestAnimationFrame loop that can be stopped and restarted from a
/// clean timing state.
pub struct FrameLoop {
    ctx: Rc<FrameContext>,
    /// Pending animation frame request; `None` while stopped.
    handle: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) -> Option<i32> {
    let window = web::window()?;
    let tick = tick.borrow();
    let cb = tick.as_ref()?;
    window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .map_err(|e| log::error!("[frame] requestAnimationFrame failed: {:?}", e))
        .ok()
}

impl FrameLoop {
    pub fn new(ctx: FrameContext) -> Rc<Self> {
        let ctx = Rc::new(ctx);
        let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

        let ctx_tick = ctx.clone();
        let handle_tick = handle.clone();
        let tick_clone = tick.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if handle_tick.get().is_none() {
                return;
            }
            ctx_tick.frame();
            handle_tick.set(request_frame(&tick_clone));
        }) as Box<dyn FnMut()>));

        Rc::new(Self { ctx, handle, tick })
    }

    pub fn is_running(&self) -> bool {
        self.handle.get().is_some()
    }

    /// Start a run from a clean timing state; no-op while running.
    pub fn start(&self) {
        if self.is_running() {
            return;
        }
        self.ctx.gallery.borrow_mut().start();
        self.handle.set(request_frame(&self.tick));
    }

    /// Cancel the pending frame and stop the gallery.
    pub fn stop(&self) {
        if let Some(id) = self.handle.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        self.ctx.gallery.borrow_mut().stop();
    }
}
