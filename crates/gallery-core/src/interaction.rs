//! Pointer-driven state: the process-wide pointer, per-cell hold tracking and
//! the click / double-click gate.

use crate::constants::*;
use glam::DVec2;

/// Last known pointer position in screen (client) coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PointerState {
    pub x: f64,
    pub y: f64,
    pub active: bool,
}

impl PointerState {
    pub fn update(&mut self, x: f64, y: f64, active: bool) {
        if x.is_finite() && y.is_finite() {
            self.x = x;
            self.y = y;
        }
        self.active = active;
    }

    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

/// A cell's layout box in screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct CellRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl CellRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    /// Screen point relative to the box's top-left corner.
    pub fn to_local(&self, p: DVec2) -> DVec2 {
        p - DVec2::new(self.left, self.top)
    }

    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Ambient glow in [0, 1] from the pointer's distance to the cell center.
pub fn pointer_glow(pointer: &PointerState, rect: &CellRect) -> f64 {
    if !pointer.active || rect.is_empty() {
        return 0.0;
    }
    let radius = rect.width.max(rect.height) * POINTER_GLOW_RADIUS_SCALE;
    let distance = (pointer.position() - rect.center()).length();
    let normalized = (distance / radius).clamp(0.0, 1.0);
    (1.0 - normalized)
        .powf(POINTER_GLOW_EXPONENT)
        .clamp(0.0, 1.0)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HoldPhase {
    #[default]
    Idle,
    Holding,
}

/// Sustained pointer-down on a cell. Intensity ramps up while held and
/// decays linearly after release; `x`/`y` are normalized to the cell.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct HoldState {
    pub active: bool,
    pub start: f64,
    pub intensity: f64,
    pub x: f64,
    pub y: f64,
}

impl HoldState {
    pub fn phase(&self) -> HoldPhase {
        if self.active {
            HoldPhase::Holding
        } else {
            HoldPhase::Idle
        }
    }

    pub fn press(&mut self, now: f64, x: f64, y: f64) {
        self.active = true;
        self.start = now;
        self.x = x.clamp(0.0, 1.0);
        self.y = y.clamp(0.0, 1.0);
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        if self.active {
            self.x = x.clamp(0.0, 1.0);
            self.y = y.clamp(0.0, 1.0);
        }
    }

    /// End the hold. Returns how long it lasted, or `None` if idle.
    pub fn release(&mut self, now: f64) -> Option<f64> {
        if !self.active {
            return None;
        }
        self.active = false;
        Some((now - self.start).max(0.0))
    }

    /// Advance intensity to `now`; `dt` drives the post-release decay.
    pub fn step(&mut self, now: f64, dt: f64) {
        if self.active {
            let ramp = ((now - self.start) / HOLD_RAMP_SEC).clamp(0.0, 1.0);
            self.intensity = self.intensity.max(ramp);
        } else if self.intensity > 0.0 {
            self.intensity = (self.intensity - HOLD_DECAY_PER_SEC * dt.max(0.0)).max(0.0);
        }
    }
}

/// Burst magnitude earned by a hold of `held` seconds, if long enough.
pub fn hold_burst_magnitude(held: f64) -> Option<f64> {
    (held > HOLD_BURST_MIN_SEC).then(|| (held / HOLD_RAMP_SEC).min(HOLD_BURST_MAX_MAGNITUDE))
}

/// Suppresses single clicks that trail a double-click on the same cell.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ClickGate {
    last_double_click: Option<f64>,
}

impl ClickGate {
    pub fn note_double_click(&mut self, now: f64) {
        self.last_double_click = Some(now);
    }

    pub fn accepts_click(&self, now: f64) -> bool {
        match self.last_double_click {
            Some(t) => {
                let since = now - t;
                !(0.0..CLICK_DEBOUNCE_SEC).contains(&since)
            }
            None => true,
        }
    }
}
