use crate::constants::{CANVAS_CLASS, CELL_CLASS, GALLERY_ELEMENT_ID, INFO_CLASS};
use crate::input;
use anyhow::anyhow;
use gallery_core::CurveLabel;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The elements making up one gallery cell.
#[derive(Clone)]
pub struct CellElements {
    pub canvas: web::HtmlCanvasElement,
    pub info: web::Element,
}

/// `#gallery`, created under `<body>` when the page does not provide one.
pub fn gallery_root(document: &web::Document) -> anyhow::Result<web::Element> {
    if let Some(el) = document.get_element_by_id(GALLERY_ELEMENT_ID) {
        return Ok(el);
    }
    let body = document.body().ok_or_else(|| anyhow!("no body"))?;
    let el = document
        .create_element("div")
        .map_err(|e| anyhow!("{:?}", e))?;
    el.set_id(GALLERY_ELEMENT_ID);
    body.append_child(&el).map_err(|e| anyhow!("{:?}", e))?;
    log::info!("[gallery] created missing #{}", GALLERY_ELEMENT_ID);
    Ok(el)
}

/// Append `div.curve-cell > canvas.curve-canvas + div.curve-info` to `root`.
pub fn create_cell(document: &web::Document, root: &web::Element) -> anyhow::Result<CellElements> {
    let create = |tag: &str, class: &str| -> anyhow::Result<web::Element> {
        let el = document
            .create_element(tag)
            .map_err(|e| anyhow!("{:?}", e))?;
        el.set_class_name(class);
        Ok(el)
    };
    let cell = create("div", CELL_CLASS)?;
    let canvas = create("canvas", CANVAS_CLASS)?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!(format!("{:?}", e)))?;
    let info = create("div", INFO_CLASS)?;
    cell.append_child(&canvas).map_err(|e| anyhow!("{:?}", e))?;
    cell.append_child(&info).map_err(|e| anyhow!("{:?}", e))?;
    root.append_child(&cell).map_err(|e| anyhow!("{:?}", e))?;
    Ok(CellElements { canvas, info })
}

/// Show the curve name; attribution, description and parameters go in the
/// hover title.
pub fn set_cell_label(info: &web::Element, label: &CurveLabel, summary: &str) {
    info.set_text_content(Some(label.title));
    let title = format!(
        "{} ({})\n{}\n{}",
        label.title, label.attribution, label.description, summary
    );
    _ = info.set_attribute("title", &title);
}

pub fn device_pixel_ratio(max: f64) -> f64 {
    let raw = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    input::effective_dpr(raw, max)
}

/// Window inner size in css pixels, zero when unavailable.
pub fn viewport_size(window: &web::Window) -> (f64, f64) {
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    (dim(window.inner_width()), dim(window.inner_height()))
}

/// Match the canvas's backing store to its css box at `dpr`. Returns the css
/// size drawing should use.
pub fn sync_canvas_backing_size(
    canvas: &web::HtmlCanvasElement,
    dpr: f64,
    fallback_css: f64,
) -> (f64, f64) {
    let rect = canvas.get_bounding_client_rect();
    let (css_w, css_h) = input::css_size_or(rect.width(), rect.height(), fallback_css);
    let (w_px, h_px) = input::backing_size(css_w, css_h, dpr);
    if canvas.width() != w_px {
        canvas.set_width(w_px);
    }
    if canvas.height() != h_px {
        canvas.set_height(h_px);
    }
    (css_w, css_h)
}
