use gallery_core::CellRect;
use web_sys as web;

// ---------------- Pure coordinate helpers ----------------

/// Position of a client-space point inside `rect`, normalized to 0..1 and
/// clamped. Falls back to the center for a degenerate rect.
#[inline]
pub fn normalized_in_rect(client_x: f64, client_y: f64, rect: &CellRect) -> [f64; 2] {
    if !(rect.width > 0.0 && rect.height > 0.0) || !client_x.is_finite() || !client_y.is_finite() {
        return [0.5, 0.5];
    }
    let u = ((client_x - rect.left) / rect.width).clamp(0.0, 1.0);
    let v = ((client_y - rect.top) / rect.height).clamp(0.0, 1.0);
    [u, v]
}

/// Usable device pixel ratio: 1 for missing or nonsense values, capped at `max`.
#[inline]
pub fn effective_dpr(raw: f64, max: f64) -> f64 {
    if raw.is_finite() && raw > 0.0 {
        raw.min(max.max(1.0))
    } else {
        1.0
    }
}

/// Backing-store size in device pixels for a css box, never below 1x1.
#[inline]
pub fn backing_size(css_w: f64, css_h: f64, dpr: f64) -> (u32, u32) {
    let px = |css: f64| {
        let v = (css.max(0.0) * dpr).round();
        if v.is_finite() {
            (v as u32).max(1)
        } else {
            1
        }
    };
    (px(css_w), px(css_h))
}

/// Css size to draw at, substituting `fallback` for unlaid-out dimensions.
#[inline]
pub fn css_size_or(css_w: f64, css_h: f64, fallback: f64) -> (f64, f64) {
    let pick = |v: f64| if v.is_finite() && v > 0.0 { v } else { fallback };
    (pick(css_w), pick(css_h))
}

// ---------------- DOM wrappers ----------------

#[inline]
pub fn rect_from_dom(rect: &web::DomRect) -> CellRect {
    CellRect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

#[inline]
pub fn element_rect(el: &web::Element) -> CellRect {
    rect_from_dom(&el.get_bounding_client_rect())
}

#[inline]
pub fn client_position(ev: &web::MouseEvent) -> (f64, f64) {
    (ev.client_x() as f64, ev.client_y() as f64)
}

/// Event position normalized to `canvas`'s current layout box.
#[inline]
pub fn event_canvas_uv(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> [f64; 2] {
    let (x, y) = client_position(ev);
    normalized_in_rect(x, y, &element_rect(canvas))
}
