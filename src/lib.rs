#![cfg(target_arch = "wasm32")]
use crate::canvas::CanvasSurface;
use crate::constants::{CELL_CSS_SIZE, MAX_CELLS, MAX_DEVICE_PIXEL_RATIO, MIN_CELLS};
use anyhow::anyhow;
use gallery_core::{Gallery, GalleryConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod canvas;
mod constants;
mod dom;
mod events;
mod frame;
mod input;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("[gallery] curve-gallery-web starting");

    if let Err(e) = init() {
        log::error!("[gallery] init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow!("no document"))?;
    let root = dom::gallery_root(&document)?;

    let config = GalleryConfig {
        cell_css_size: CELL_CSS_SIZE,
        min_cells: MIN_CELLS,
        max_cells: MAX_CELLS,
        seed: None,
    };
    let (vw, vh) = dom::viewport_size(&window);
    let cell_count = config.cell_count_for_viewport(vw, vh);
    let mut gallery = Gallery::new(&config, cell_count);

    // Build the DOM first so canvases have a layout box before sizing.
    let mut canvases = Vec::with_capacity(cell_count);
    let mut infos = Vec::with_capacity(cell_count);
    for cell in gallery.cells() {
        let els = dom::create_cell(&document, &root)?;
        dom::set_cell_label(&els.info, &cell.label(), &cell.spec.summary());
        canvases.push(els.canvas);
        infos.push(els.info);
    }

    let dpr = dom::device_pixel_ratio(MAX_DEVICE_PIXEL_RATIO);
    let surfaces = canvases
        .iter()
        .map(|canvas| {
            let mut surface = CanvasSurface::new(canvas.clone());
            surface.sync_size(dpr);
            surface
        })
        .collect::<Vec<_>>();
    events::sync_cell_bounds(&mut gallery, &canvases);
    log::info!(
        "[gallery] viewport {:.0}x{:.0} -> {} cells, dpr {:.2}",
        vw,
        vh,
        cell_count,
        dpr
    );

    let gallery = Rc::new(RefCell::new(gallery));
    let surfaces = Rc::new(RefCell::new(surfaces));
    let frame_loop = frame::FrameLoop::new(frame::FrameContext {
        gallery: gallery.clone(),
        surfaces: surfaces.clone(),
    });

    events::wire_input_handlers(events::EventWiring {
        frame_loop: frame_loop.clone(),
        gallery,
        surfaces,
        canvases: Rc::new(canvases),
        infos: Rc::new(infos),
    });

    frame_loop.start();
    Ok(())
}
