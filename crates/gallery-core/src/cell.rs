//! One gallery cell: its curve, modulators, style, effects and hold state.

use crate::catalog::{CurveLabel, CurveSpec};
use crate::constants::*;
use crate::effects::{Burst, Effect, EffectList, Ripple};
use crate::interaction::{hold_burst_magnitude, CellRect, ClickGate, HoldState};
use crate::modulator::ModulatorSet;
use crate::render::FrameOutput;
use glam::DVec2;
use rand::Rng;
use std::f64::consts::TAU;

/// Per-cell stroke animation constants, rolled once per cell.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyleState {
    pub base_hue: f64,
    pub hue_speed: f64,
    pub width_base: f64,
    pub width_variation: f64,
    pub width_speed: f64,
    pub width_phase: f64,
}

impl StrokeStyleState {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            base_hue: rng.gen_range(0.0..360.0),
            hue_speed: rng.gen_range(HUE_SPEED.0..HUE_SPEED.1),
            width_base: rng.gen_range(LINE_WIDTH_BASE.0..LINE_WIDTH_BASE.1),
            width_variation: rng.gen_range(LINE_WIDTH_VARIATION.0..LINE_WIDTH_VARIATION.1),
            width_speed: rng.gen_range(LINE_WIDTH_SPEED.0..LINE_WIDTH_SPEED.1),
            width_phase: rng.gen_range(0.0..TAU),
        }
    }

    pub fn hue_at(&self, elapsed: f64) -> f64 {
        (self.base_hue + elapsed * self.hue_speed).rem_euclid(360.0)
    }

    /// Line width before interaction boosts.
    pub fn width_at(&self, elapsed: f64) -> f64 {
        self.width_base + self.width_variation * (self.width_speed * elapsed + self.width_phase).sin()
    }
}

/// An input event on a cell: normalized (0..1) position and the gallery's
/// elapsed time when it happened.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellEvent {
    pub x: f64,
    pub y: f64,
    pub time: f64,
}

impl CellEvent {
    pub fn new(x: f64, y: f64, time: f64) -> Self {
        Self { x, y, time }
    }

    fn clamped(&self) -> (f64, f64) {
        let x = if self.x.is_finite() { self.x.clamp(0.0, 1.0) } else { 0.5 };
        let y = if self.y.is_finite() { self.y.clamp(0.0, 1.0) } else { 0.5 };
        (x, y)
    }
}

#[derive(Clone, Debug)]
pub struct CellState {
    pub spec: CurveSpec,
    pub modulators: ModulatorSet,
    pub style: StrokeStyleState,
    /// Pixel-space points from the latest frame; capacity is fixed at creation.
    pub points: Vec<DVec2>,
    pub effects: EffectList,
    pub hold: HoldState,
    pub click_gate: ClickGate,
    /// Layout box in screen space, used for pointer glow.
    pub bounds: CellRect,
    pub last_frame: FrameOutput,
}

/// Create a cell with a random curve.
pub fn create_curve_cell<R: Rng + ?Sized>(rng: &mut R) -> CellState {
    let spec = CurveSpec::random(rng);
    CellState::new(spec, rng)
}

impl CellState {
    pub fn new<R: Rng + ?Sized>(spec: CurveSpec, rng: &mut R) -> Self {
        let modulators = ModulatorSet::derive(&spec.params, rng);
        Self {
            spec,
            modulators,
            style: StrokeStyleState::random(rng),
            points: Vec::with_capacity(SAMPLE_STEPS + 1),
            effects: EffectList::default(),
            hold: HoldState::default(),
            click_gate: ClickGate::default(),
            bounds: CellRect::default(),
            last_frame: FrameOutput::default(),
        }
    }

    pub fn label(&self) -> CurveLabel {
        self.spec.label()
    }

    pub fn hue_at(&self, elapsed: f64) -> f64 {
        self.style.hue_at(elapsed)
    }

    /// Replace the curve and all of its modulators with a fresh random draw.
    /// Style, effects and hold state carry over.
    pub fn reroll<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let spec = CurveSpec::random(rng);
        self.modulators = ModulatorSet::derive(&spec.params, rng);
        log::debug!("[cell] re-roll {} -> {}", self.spec.name, spec.name);
        self.spec = spec;
    }

    /// Spawn a ripple unless the click trails a double-click. Returns whether
    /// a ripple was added.
    pub fn handle_click<R: Rng + ?Sized>(&mut self, ev: CellEvent, rng: &mut R) -> bool {
        if !self.click_gate.accepts_click(ev.time) {
            return false;
        }
        let (x, y) = ev.clamped();
        let hue = self.hue_at(ev.time);
        self.effects
            .push(Effect::Ripple(Ripple::spawn(rng, ev.time, x, y, hue)));
        true
    }

    pub fn handle_double_click<R: Rng + ?Sized>(&mut self, ev: CellEvent, rng: &mut R) {
        self.click_gate.note_double_click(ev.time);
        self.reroll(rng);
        let (x, y) = ev.clamped();
        let hue = self.hue_at(ev.time);
        self.effects.push(Effect::Burst(Burst::spawn(
            rng,
            ev.time,
            x,
            y,
            hue,
            DOUBLE_CLICK_BURST_MAGNITUDE,
        )));
    }

    pub fn handle_pointer_down(&mut self, ev: CellEvent) {
        let (x, y) = ev.clamped();
        self.hold.press(ev.time, x, y);
    }

    pub fn handle_pointer_move(&mut self, x: f64, y: f64) {
        if x.is_finite() && y.is_finite() {
            self.hold.move_to(x, y);
        }
    }

    /// Release the hold. A long enough hold spawns a burst at the hold point;
    /// its magnitude is returned.
    pub fn handle_pointer_up<R: Rng + ?Sized>(&mut self, time: f64, rng: &mut R) -> Option<f64> {
        let held = self.hold.release(time)?;
        let magnitude = hold_burst_magnitude(held)?;
        let hue = self.hue_at(time);
        self.effects.push(Effect::Burst(Burst::spawn(
            rng,
            time,
            self.hold.x,
            self.hold.y,
            hue,
            magnitude,
        )));
        log::debug!("[cell] hold burst held={:.2}s magnitude={:.2}", held, magnitude);
        Some(magnitude)
    }

    /// Drop the hold without a burst (gallery stop, pointer cancel).
    pub fn cancel_hold(&mut self) {
        self.hold.active = false;
    }

    /// Forget everything stamped with the previous run's clock: effects,
    /// hold state and the double-click gate. Curve and style are kept.
    pub fn reset_run(&mut self) {
        self.effects.clear();
        self.hold = HoldState::default();
        self.click_gate = ClickGate::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CurveKind, CurveParams};
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn new_cell_has_fixed_point_capacity() {
        let mut rng = StdRng::seed_from_u64(7);
        let cell = create_curve_cell(&mut rng);
        assert!(cell.points.capacity() >= SAMPLE_STEPS + 1);
        assert!(cell.effects.is_empty());
        assert_eq!(cell.modulators.len(), cell.spec.params.slot_count());
    }

    #[test]
    fn click_after_double_click_is_suppressed() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut cell = create_curve_cell(&mut rng);
        cell.handle_double_click(CellEvent::new(0.5, 0.5, 2.0), &mut rng);
        assert!(!cell.handle_click(CellEvent::new(0.5, 0.5, 2.1), &mut rng));
        assert_eq!(cell.effects.len(), 1);
        assert!(cell.handle_click(CellEvent::new(0.5, 0.5, 2.5), &mut rng));
        assert_eq!(cell.effects.len(), 2);
    }

    #[test]
    fn reroll_rebuilds_modulators_for_new_params() {
        let mut rng = StdRng::seed_from_u64(9);
        let spec = CurveSpec::new(CurveParams::Butterfly { amplitude: 50.0 });
        let mut cell = CellState::new(spec, &mut rng);
        assert_eq!(cell.spec.kind, CurveKind::Butterfly);
        for _ in 0..10 {
            cell.reroll(&mut rng);
            assert_eq!(cell.modulators.len(), cell.spec.params.slot_count());
            assert_eq!(cell.spec.name, cell.spec.kind.name());
        }
    }

    #[test]
    fn long_hold_bursts_at_hold_point() {
        let mut rng = StdRng::seed_from_u64(10);
        let mut cell = create_curve_cell(&mut rng);
        cell.handle_pointer_down(CellEvent::new(0.2, 0.7, 1.0));
        cell.handle_pointer_move(0.3, 0.6);
        let magnitude = cell.handle_pointer_up(2.1, &mut rng).expect("burst");
        assert!((magnitude - 1.0).abs() < 1e-9);
        match cell.effects.last() {
            Some(Effect::Burst(b)) => {
                assert_eq!(b.start, 2.1);
                assert_eq!((b.x, b.y), (0.3, 0.6));
            }
            other => panic!("expected burst, got {:?}", other),
        }
    }

    #[test]
    fn quick_tap_does_not_burst() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut cell = create_curve_cell(&mut rng);
        cell.handle_pointer_down(CellEvent::new(0.5, 0.5, 1.0));
        assert_eq!(cell.handle_pointer_up(1.1, &mut rng), None);
        assert!(cell.effects.is_empty());
        assert!(!cell.hold.active);
    }

    #[test]
    fn reset_run_clears_time_stamped_state() {
        let mut rng = StdRng::seed_from_u64(12);
        let mut cell = create_curve_cell(&mut rng);
        let spec = cell.spec.clone();
        cell.handle_click(CellEvent::new(0.5, 0.5, 8.0), &mut rng);
        cell.handle_pointer_down(CellEvent::new(0.4, 0.4, 8.5));
        cell.click_gate.note_double_click(9.0);
        cell.reset_run();
        assert!(cell.effects.is_empty());
        assert_eq!(cell.hold, HoldState::default());
        assert!(cell.click_gate.accepts_click(0.0));
        assert_eq!(cell.spec, spec);
    }

    #[test]
    fn hue_wraps_into_degrees() {
        let style = StrokeStyleState {
            base_hue: 350.0,
            hue_speed: 20.0,
            width_base: 1.5,
            width_variation: 0.4,
            width_speed: 1.0,
            width_phase: 0.0,
        };
        assert!((style.hue_at(1.0) - 10.0).abs() < 1e-9);
        assert!((style.width_at(0.0) - 1.5).abs() < 1e-12);
    }
}
