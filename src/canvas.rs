//! Canvas 2D implementation of the gallery's drawing [`Surface`].

use crate::constants::FALLBACK_CANVAS_CSS_PX;
use crate::dom;
use gallery_core::{Composite, GradientStop, Hsla, Stroke, Surface};
use glam::DVec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    /// `None` when the browser refused a 2d context; drawing is then a no-op.
    ctx: Option<web::CanvasRenderingContext2d>,
    css_size: (f64, f64),
}

fn context_2d(canvas: &web::HtmlCanvasElement) -> Option<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<web::CanvasRenderingContext2d>().ok())
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> Self {
        let ctx = context_2d(&canvas);
        if ctx.is_none() {
            log::warn!("[gallery] canvas 2d context unavailable; cell will stay blank");
        }
        Self {
            canvas,
            ctx,
            css_size: (FALLBACK_CANVAS_CSS_PX, FALLBACK_CANVAS_CSS_PX),
        }
    }

    /// Resize the backing store for `dpr` and scale drawing so callers work
    /// in css pixels. Resizing clears context state, so it is restored here.
    pub fn sync_size(&mut self, dpr: f64) {
        self.css_size = dom::sync_canvas_backing_size(&self.canvas, dpr, FALLBACK_CANVAS_CSS_PX);
        if let Some(ctx) = &self.ctx {
            _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
            ctx.set_line_cap("round");
            ctx.set_line_join("round");
        }
    }

    fn apply_stroke(ctx: &web::CanvasRenderingContext2d, stroke: &Stroke) {
        ctx.set_stroke_style_str(&stroke.color.to_string());
        ctx.set_line_width(stroke.width);
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (f64, f64) {
        self.css_size
    }

    fn set_composite(&mut self, mode: Composite) {
        if let Some(ctx) = &self.ctx {
            _ = ctx.set_global_composite_operation(mode.as_str());
        }
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Hsla) {
        if let Some(ctx) = &self.ctx {
            ctx.set_fill_style_str(&color.to_string());
            ctx.fill_rect(x, y, w, h);
        }
    }

    fn stroke_polyline(&mut self, points: &[DVec2], stroke: &Stroke) {
        let (Some(ctx), Some(first)) = (&self.ctx, points.first()) else {
            return;
        };
        ctx.begin_path();
        ctx.move_to(first.x, first.y);
        for p in &points[1..] {
            ctx.line_to(p.x, p.y);
        }
        Self::apply_stroke(ctx, stroke);
        ctx.stroke();
    }

    fn stroke_circle(&mut self, center: DVec2, radius: f64, stroke: &Stroke) {
        let Some(ctx) = &self.ctx else { return };
        if !(radius > 0.0) {
            return;
        }
        ctx.begin_path();
        _ = ctx.arc(center.x, center.y, radius, 0.0, TAU);
        Self::apply_stroke(ctx, stroke);
        ctx.stroke();
    }

    fn stroke_segments(&mut self, segments: &[(DVec2, DVec2)], stroke: &Stroke) {
        let Some(ctx) = &self.ctx else { return };
        if segments.is_empty() {
            return;
        }
        ctx.begin_path();
        for (a, b) in segments {
            ctx.move_to(a.x, a.y);
            ctx.line_to(b.x, b.y);
        }
        Self::apply_stroke(ctx, stroke);
        ctx.stroke();
    }

    fn fill_radial_gradient(&mut self, center: DVec2, radius: f64, stops: &[GradientStop]) {
        let Some(ctx) = &self.ctx else { return };
        if !(radius > 0.0) {
            return;
        }
        let gradient =
            match ctx.create_radial_gradient(center.x, center.y, 0.0, center.x, center.y, radius) {
                Ok(g) => g,
                Err(e) => {
                    log::warn!("[frame] radial gradient failed: {:?}", e);
                    return;
                }
            };
        for stop in stops {
            _ = gradient.add_color_stop(stop.offset.clamp(0.0, 1.0) as f32, &stop.color.to_string());
        }
        ctx.set_fill_style_canvas_gradient(&gradient);
        ctx.fill_rect(center.x - radius, center.y - radius, radius * 2.0, radius * 2.0);
    }
}
