use crate::canvas::CanvasSurface;
use crate::constants::MAX_DEVICE_PIXEL_RATIO;
use crate::dom;
use crate::frame::FrameLoop;
use crate::input;
use gallery_core::Gallery;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct EventWiring {
    pub frame_loop: Rc<FrameLoop>,
    pub gallery: Rc<RefCell<Gallery>>,
    pub surfaces: Rc<RefCell<Vec<CanvasSurface>>>,
    pub canvases: Rc<Vec<web::HtmlCanvasElement>>,
    pub infos: Rc<Vec<web::Element>>,
}

pub fn wire_input_handlers(w: EventWiring) {
    for index in 0..w.canvases.len() {
        wire_cell_clicks(&w, index);
        wire_cell_hold(&w, index);
    }
    wire_global_pointer(&w);
    wire_window_resize(&w);
    wire_window_scroll(&w);
}

fn listen<E: FromWasmAbi + 'static>(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Refresh every cell's screen-space box (for pointer glow).
pub fn sync_cell_bounds(gallery: &mut Gallery, canvases: &[web::HtmlCanvasElement]) {
    for (index, canvas) in canvases.iter().enumerate() {
        if let Err(e) = gallery.set_cell_bounds(index, input::element_rect(canvas)) {
            log::warn!("[input] {}", e);
        }
    }
}

fn wire_cell_clicks(w: &EventWiring, index: usize) {
    let canvas = w.canvases[index].clone();

    let gallery = w.gallery.clone();
    let target = canvas.clone();
    listen(&canvas, "click", move |ev: web::MouseEvent| {
        let [u, v] = input::event_canvas_uv(&ev, &target);
        if let Err(e) = gallery.borrow_mut().click(index, u, v) {
            log::warn!("[input] click: {}", e);
        }
    });

    let gallery = w.gallery.clone();
    let infos = w.infos.clone();
    let target = canvas.clone();
    listen(&canvas, "dblclick", move |ev: web::MouseEvent| {
        ev.prevent_default();
        let [u, v] = input::event_canvas_uv(&ev, &target);
        let mut g = gallery.borrow_mut();
        if let Err(e) = g.double_click(index, u, v) {
            log::warn!("[input] dblclick: {}", e);
            return;
        }
        if let (Ok(cell), Some(info)) = (g.cell(index), infos.get(index)) {
            dom::set_cell_label(info, &cell.label(), &cell.spec.summary());
            log::info!("[input] cell {} is now {}", index, cell.spec.name);
        }
    });
}

fn wire_cell_hold(w: &EventWiring, index: usize) {
    let canvas = w.canvases[index].clone();

    let gallery = w.gallery.clone();
    let target = canvas.clone();
    listen(&canvas, "pointerdown", move |ev: web::PointerEvent| {
        let [u, v] = input::event_canvas_uv(&ev, &target);
        if let Err(e) = gallery
            .borrow_mut()
            .pointer_down(ev.pointer_id(), index, u, v)
        {
            log::warn!("[input] pointerdown: {}", e);
        }
    });

    let gallery = w.gallery.clone();
    let target = canvas.clone();
    listen(&canvas, "pointermove", move |ev: web::PointerEvent| {
        let [u, v] = input::event_canvas_uv(&ev, &target);
        gallery.borrow_mut().pointer_move(ev.pointer_id(), u, v);
    });

    // Leaving the cell ends the hold the same way a release does.
    for event in ["pointerup", "pointerleave"] {
        let gallery = w.gallery.clone();
        listen(&canvas, event, move |ev: web::PointerEvent| {
            if let Some(magnitude) = gallery.borrow_mut().pointer_up(ev.pointer_id()) {
                log::debug!("[input] cell {} hold burst {:.2}", index, magnitude);
            }
        });
    }

    let gallery = w.gallery.clone();
    listen(&canvas, "pointercancel", move |ev: web::PointerEvent| {
        gallery.borrow_mut().pointer_cancel(ev.pointer_id());
    });
}

/// Process-wide pointer tracking: every move marks the pointer active;
/// leaving the page, cancelling or losing focus marks it inactive.
fn wire_global_pointer(w: &EventWiring) {
    let Some(window) = web::window() else { return };

    let gallery = w.gallery.clone();
    listen(&window, "pointermove", move |ev: web::PointerEvent| {
        let (x, y) = input::client_position(&ev);
        gallery.borrow_mut().update_pointer_state(x, y, true);
    });

    let gallery = w.gallery.clone();
    listen(&window, "pointercancel", move |ev: web::PointerEvent| {
        let (x, y) = input::client_position(&ev);
        gallery.borrow_mut().update_pointer_state(x, y, false);
    });

    let gallery = w.gallery.clone();
    listen(&window, "blur", move |_ev: web::Event| {
        let mut g = gallery.borrow_mut();
        let p = *g.pointer();
        g.update_pointer_state(p.x, p.y, false);
    });

    if let Some(root) = window.document().and_then(|d| d.document_element()) {
        let gallery = w.gallery.clone();
        listen(&root, "pointerleave", move |ev: web::PointerEvent| {
            let (x, y) = input::client_position(&ev);
            gallery.borrow_mut().update_pointer_state(x, y, false);
        });
    }
}

fn wire_window_resize(w: &EventWiring) {
    let Some(window) = web::window() else { return };
    let w = w.clone();
    listen(&window, "resize", move |_ev: web::Event| {
        w.frame_loop.stop();
        let dpr = dom::device_pixel_ratio(MAX_DEVICE_PIXEL_RATIO);
        for surface in w.surfaces.borrow_mut().iter_mut() {
            surface.sync_size(dpr);
        }
        sync_cell_bounds(&mut w.gallery.borrow_mut(), &w.canvases);
        w.frame_loop.start();
        log::info!("[gallery] resized, dpr {:.2}", dpr);
    });
}

fn wire_window_scroll(w: &EventWiring) {
    let Some(window) = web::window() else { return };
    let gallery = w.gallery.clone();
    let canvases = w.canvases.clone();
    listen(&window, "scroll", move |_ev: web::Event| {
        sync_cell_bounds(&mut gallery.borrow_mut(), &canvases);
    });
}
