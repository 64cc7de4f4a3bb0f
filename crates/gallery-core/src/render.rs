//! Per-frame curve rendering.
//!
//! A frame has two halves. [`prepare_frame`] is pure state work: advance the
//! hold, drop expired effects, resolve dynamic parameters, sample the curve
//! and auto-fit it into the cell. [`paint`] turns the result into draw calls
//! on a [`Surface`]. [`render_frame`] runs both.

use crate::cell::CellState;
use crate::constants::*;
use crate::effects::Effect;
use crate::interaction::{pointer_glow, PointerState};
use glam::DVec2;
use std::fmt;

/// HSL color with alpha; saturation and lightness are percentages.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Hsla {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub a: f64,
}

impl Hsla {
    pub const fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self { h, s, l, a }
    }

    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }
}

impl fmt::Display for Hsla {
    /// CSS `hsla()` notation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({:.1}, {:.1}%, {:.1}%, {:.3})",
            self.h,
            self.s,
            self.l,
            self.a.clamp(0.0, 1.0)
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Composite {
    #[default]
    SourceOver,
    Lighter,
}

impl Composite {
    pub fn as_str(self) -> &'static str {
        match self {
            Composite::SourceOver => "source-over",
            Composite::Lighter => "lighter",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Stroke {
    pub color: Hsla,
    pub width: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Hsla,
}

/// A cell's drawing target. Coordinates are in the surface's own units
/// (css pixels for a canvas), origin top-left. Strokes use round caps and
/// joins.
pub trait Surface {
    fn size(&self) -> (f64, f64);
    fn set_composite(&mut self, mode: Composite);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Hsla);
    fn stroke_polyline(&mut self, points: &[DVec2], stroke: &Stroke);
    fn stroke_circle(&mut self, center: DVec2, radius: f64, stroke: &Stroke);
    fn stroke_segments(&mut self, segments: &[(DVec2, DVec2)], stroke: &Stroke);
    fn fill_radial_gradient(&mut self, center: DVec2, radius: f64, stops: &[GradientStop]);
}

/// Transform that centers a curve's bounding box on the canvas midpoint and
/// scales it to fill the padded drawable area.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Fit {
    pub bbox_center: DVec2,
    pub scale: f64,
    pub origin: DVec2,
    pub padding: f64,
    pub drawable: DVec2,
}

impl Fit {
    pub fn new(min: DVec2, max: DVec2, width: f64, height: f64) -> Self {
        let padding = width.min(height) * PADDING_RATIO;
        let drawable = DVec2::new(width - 2.0 * padding, height - 2.0 * padding).max(DVec2::ZERO);
        let extent = max - min;
        let scale = drawable.x.min(drawable.y) / extent.x.max(extent.y).max(MIN_EXTENT);
        Self {
            bbox_center: (min + max) * 0.5,
            scale,
            origin: DVec2::new(width * 0.5, height * 0.5),
            padding,
            drawable,
        }
    }

    #[inline]
    pub fn apply(&self, p: DVec2) -> DVec2 {
        self.origin + (p - self.bbox_center) * self.scale
    }
}

/// Everything a frame decided about a cell's appearance.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct FrameOutput {
    pub elapsed: f64,
    pub stroke: Stroke,
    pub hue: f64,
    pub glow: f64,
    pub hold: f64,
    pub fit: Fit,
}

impl FrameOutput {
    /// Strongest interaction response this frame.
    pub fn boost(&self) -> f64 {
        self.hold.max(self.glow)
    }
}

/// Advance `cell` to `elapsed` and rebuild its pixel-space point buffer for a
/// `size` canvas. Deterministic for a given cell state and inputs.
pub fn prepare_frame(
    cell: &mut CellState,
    pointer: &PointerState,
    size: (f64, f64),
    dt: f64,
    elapsed: f64,
) -> FrameOutput {
    let (width, height) = size;
    cell.hold.step(elapsed, dt);
    cell.effects.prune(elapsed);

    let params = cell.modulators.resolve(&cell.spec.params, elapsed);
    let domain = cell.spec.domain;

    cell.points.clear();
    let mut min = DVec2::splat(f64::INFINITY);
    let mut max = DVec2::splat(f64::NEG_INFINITY);
    for i in 0..=SAMPLE_STEPS {
        let p = params.sample(domain.at(i, SAMPLE_STEPS));
        if !p.is_finite() {
            continue;
        }
        min = min.min(p);
        max = max.max(p);
        cell.points.push(p);
    }
    if cell.points.is_empty() {
        min = DVec2::ZERO;
        max = DVec2::ZERO;
    }

    let fit = Fit::new(min, max, width, height);
    for p in cell.points.iter_mut() {
        *p = fit.apply(*p);
    }

    let glow = pointer_glow(pointer, &cell.bounds);
    let hold = cell.hold.intensity;
    let boost = hold.max(glow);
    let hue = cell.style.hue_at(elapsed);
    let color = Hsla::new(
        hue,
        BASE_SATURATION + SATURATION_BOOST * boost,
        BASE_LIGHTNESS + LIGHTNESS_BOOST * boost,
        1.0,
    );
    let line_width = (cell.style.width_at(elapsed)
        + HOLD_WIDTH_BOOST * hold
        + GLOW_WIDTH_BOOST * glow)
        .max(0.1);

    let out = FrameOutput {
        elapsed,
        stroke: Stroke {
            color,
            width: line_width,
        },
        hue,
        glow,
        hold,
        fit,
    };
    cell.last_frame = out.clone();
    out
}

/// Draw a prepared frame. Trail fade and the main stroke composite normally;
/// glow layers and effects composite additively.
pub fn paint<S: Surface + ?Sized>(
    cell: &CellState,
    frame: &FrameOutput,
    pointer: &PointerState,
    surface: &mut S,
) {
    let (width, height) = surface.size();
    let short_side = width.min(height);

    surface.set_composite(Composite::SourceOver);
    let (h, s, l, a) = TRAIL_FILL;
    surface.fill_rect(0.0, 0.0, width, height, Hsla::new(h, s, l, a));

    surface.set_composite(Composite::Lighter);
    if frame.glow > 0.0 {
        let local = cell.bounds.to_local(pointer.position());
        let color = Hsla::new(frame.hue, 90.0, 60.0, 0.18 * frame.glow);
        surface.fill_radial_gradient(
            local,
            width.max(height) * 0.6,
            &[
                GradientStop { offset: 0.0, color },
                GradientStop {
                    offset: 1.0,
                    color: color.with_alpha(0.0),
                },
            ],
        );
    }
    if frame.hold > 0.0 {
        let center = DVec2::new(cell.hold.x * width, cell.hold.y * height);
        let radius = short_side * HOLD_AURA_RADIUS * (0.6 + 0.4 * frame.hold);
        let color = Hsla::new(frame.hue, 95.0, 65.0, 0.35 * frame.hold);
        surface.fill_radial_gradient(
            center,
            radius,
            &[
                GradientStop { offset: 0.0, color },
                GradientStop {
                    offset: 0.5,
                    color: color.with_alpha(0.15 * frame.hold),
                },
                GradientStop {
                    offset: 1.0,
                    color: color.with_alpha(0.0),
                },
            ],
        );
    }

    surface.set_composite(Composite::SourceOver);
    if cell.points.len() > 1 {
        surface.stroke_polyline(&cell.points, &frame.stroke);
    }

    surface.set_composite(Composite::Lighter);
    let boost = frame.boost();
    if boost > GLOW_LAYER_MIN_BOOST && cell.points.len() > 1 {
        let glow = Stroke {
            color: frame.stroke.color.with_alpha(GLOW_LAYER_ALPHA * boost),
            width: frame.stroke.width * GLOW_LAYER_WIDTH_SCALE,
        };
        surface.stroke_polyline(&cell.points, &glow);
    }

    for effect in cell.effects.iter() {
        let p = effect.progress(frame.elapsed);
        if !(0.0..1.0).contains(&p) {
            continue;
        }
        let center = effect.position() * DVec2::new(width, height);
        match effect {
            Effect::Ripple(r) => {
                let stroke = Stroke {
                    color: Hsla::new(r.hue, 85.0, 65.0, r.alpha_at(p)),
                    width: 1.0 + r.line_width_boost * (1.0 - p),
                };
                surface.stroke_circle(center, r.radius_at(p) * short_side, &stroke);
            }
            Effect::Burst(b) => {
                let stroke = Stroke {
                    color: Hsla::new(b.hue, 90.0, 68.0, b.alpha_at(p)),
                    width: 0.8 + 0.8 * b.line_width_boost * (1.0 - p),
                };
                let segments = b.spoke_segments(p, center, short_side);
                surface.stroke_segments(&segments, &stroke);
            }
        }
    }

    surface.set_composite(Composite::SourceOver);
}

/// Prepare and paint one cell for the current tick.
pub fn render_frame<S: Surface + ?Sized>(
    cell: &mut CellState,
    pointer: &PointerState,
    surface: &mut S,
    dt: f64,
    elapsed: f64,
) -> FrameOutput {
    let frame = prepare_frame(cell, pointer, surface.size(), dt, elapsed);
    paint(cell, &frame, pointer, surface);
    frame
}
