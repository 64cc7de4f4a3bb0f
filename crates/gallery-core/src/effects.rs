//! Transient interaction effects (ripples and bursts) and the bounded
//! per-cell list that holds them.
//!
//! Effects are plain data: a start time, a duration and the shape constants
//! rolled when they were spawned. Positions are normalized to the cell
//! (0..1) and radii are fractions of the cell's shorter side, so an effect
//! survives a canvas resize unchanged.

use crate::constants::*;
use glam::DVec2;
use rand::Rng;
use smallvec::SmallVec;
use std::f64::consts::TAU;

#[derive(Clone, Debug, PartialEq)]
pub struct Ripple {
    pub start: f64,
    pub duration: f64,
    pub x: f64,
    pub y: f64,
    pub hue: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    pub strength: f64,
    pub line_width_boost: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Burst {
    pub start: f64,
    pub duration: f64,
    pub x: f64,
    pub y: f64,
    pub hue: f64,
    pub max_radius: f64,
    pub strength: f64,
    pub count: usize,
    pub rotation: f64,
    pub spin: f64,
    pub line_width_boost: f64,
    /// Per-spoke length factors, one per `count`.
    pub spokes: SmallVec<[f64; 16]>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    Ripple(Ripple),
    Burst(Burst),
}

#[inline]
pub fn ease_out_cubic(p: f64) -> f64 {
    let q = 1.0 - p.clamp(0.0, 1.0);
    1.0 - q * q * q
}

#[inline]
pub fn ease_out_quad(p: f64) -> f64 {
    let q = 1.0 - p.clamp(0.0, 1.0);
    1.0 - q * q
}

impl Ripple {
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, now: f64, x: f64, y: f64, hue: f64) -> Self {
        Self {
            start: now,
            duration: RIPPLE_DURATION_SEC,
            x,
            y,
            hue: (hue + RIPPLE_HUE_OFFSET).rem_euclid(360.0),
            min_radius: RIPPLE_MIN_RADIUS,
            max_radius: RIPPLE_MAX_RADIUS * rng.gen_range(0.8..1.0),
            strength: rng.gen_range(0.7..1.0),
            line_width_boost: rng.gen_range(1.0..2.0),
        }
    }

    pub fn radius_at(&self, progress: f64) -> f64 {
        self.min_radius + (self.max_radius - self.min_radius) * ease_out_cubic(progress)
    }

    pub fn alpha_at(&self, progress: f64) -> f64 {
        (1.0 - progress).clamp(0.0, 1.0) * self.strength
    }
}

impl Burst {
    /// A burst whose size, lifetime and spoke count grow with `magnitude`.
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        now: f64,
        x: f64,
        y: f64,
        hue: f64,
        magnitude: f64,
    ) -> Self {
        let magnitude = magnitude.clamp(0.0, HOLD_BURST_MAX_MAGNITUDE);
        let count = BURST_BASE_SPOKES + (magnitude * 6.0).floor() as usize;
        let spokes = (0..count)
            .map(|_| rng.gen_range(BURST_SPOKE_LENGTH.0..BURST_SPOKE_LENGTH.1))
            .collect();
        let spin = rng.gen_range(BURST_SPIN.0..BURST_SPIN.1);
        Self {
            start: now,
            duration: BURST_BASE_DURATION_SEC + 0.4 * magnitude,
            x,
            y,
            hue: (hue + BURST_HUE_OFFSET).rem_euclid(360.0),
            max_radius: BURST_BASE_RADIUS * (0.6 + 0.4 * magnitude),
            strength: (0.5 + 0.5 * magnitude).min(1.0),
            count,
            rotation: rng.gen_range(0.0..TAU),
            spin: if rng.gen_bool(0.5) { spin } else { -spin },
            line_width_boost: 1.0 + magnitude,
            spokes,
        }
    }

    pub fn radius_at(&self, progress: f64) -> f64 {
        self.max_radius * ease_out_quad(progress)
    }

    pub fn alpha_at(&self, progress: f64) -> f64 {
        (1.0 - progress).clamp(0.0, 1.0) * self.strength
    }

    /// Spoke line segments in the units of `center` / `scale` (pixels when
    /// `scale` is the cell's shorter side).
    pub fn spoke_segments(&self, progress: f64, center: DVec2, scale: f64) -> Vec<(DVec2, DVec2)> {
        let radius = self.radius_at(progress) * scale;
        let turn = self.rotation + self.spin * progress;
        let n = self.count.min(self.spokes.len());
        (0..n)
            .map(|i| {
                let angle = turn + TAU * i as f64 / n as f64;
                let dir = DVec2::new(angle.cos(), angle.sin());
                let inner = center + dir * radius * BURST_INNER_RATIO;
                let outer = center + dir * radius * self.spokes[i];
                (inner, outer)
            })
            .collect()
    }
}

impl Effect {
    pub fn start(&self) -> f64 {
        match self {
            Effect::Ripple(r) => r.start,
            Effect::Burst(b) => b.start,
        }
    }

    pub fn duration(&self) -> f64 {
        match self {
            Effect::Ripple(r) => r.duration,
            Effect::Burst(b) => b.duration,
        }
    }

    /// Normalized (0..1) position inside the cell.
    pub fn position(&self) -> DVec2 {
        match self {
            Effect::Ripple(r) => DVec2::new(r.x, r.y),
            Effect::Burst(b) => DVec2::new(b.x, b.y),
        }
    }

    pub fn progress(&self, now: f64) -> f64 {
        (now - self.start()) / self.duration()
    }

    /// Finished, or carrying a progress that cannot be drawn (zero duration).
    pub fn is_expired(&self, now: f64) -> bool {
        let p = self.progress(now);
        !p.is_finite() || p >= 1.0
    }

    pub fn is_burst(&self) -> bool {
        matches!(self, Effect::Burst(_))
    }
}

/// Insertion-ordered effects of one cell, never longer than its capacity.
#[derive(Clone, Debug, PartialEq)]
pub struct EffectList {
    items: SmallVec<[Effect; 4]>,
    capacity: usize,
}

impl Default for EffectList {
    fn default() -> Self {
        Self::with_capacity(EFFECT_CAPACITY)
    }
}

impl EffectList {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: SmallVec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Append an effect, dropping the oldest insertions beyond capacity.
    pub fn push(&mut self, effect: Effect) {
        while self.items.len() >= self.capacity {
            self.items.remove(0);
        }
        self.items.push(effect);
    }

    /// Remove every expired effect; returns how many were dropped.
    pub fn prune(&mut self, now: f64) -> usize {
        let before = self.items.len();
        self.items.retain(|e| !e.is_expired(now));
        before - self.items.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Effect> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn last(&self) -> Option<&Effect> {
        self.items.last()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn ripple_at(start: f64, duration: f64) -> Effect {
        let mut rng = StdRng::seed_from_u64(1);
        let mut r = Ripple::spawn(&mut rng, start, 0.5, 0.5, 0.0);
        r.duration = duration;
        Effect::Ripple(r)
    }

    #[test]
    fn easing_hits_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_quad(0.0), 0.0);
        assert_eq!(ease_out_quad(1.0), 1.0);
        assert!(ease_out_cubic(0.5) > ease_out_quad(0.5));
    }

    #[test]
    fn ripple_grows_and_fades() {
        let mut rng = StdRng::seed_from_u64(2);
        let r = Ripple::spawn(&mut rng, 0.0, 0.2, 0.8, 350.0);
        assert_eq!(r.radius_at(0.0), r.min_radius);
        assert!((r.radius_at(1.0) - r.max_radius).abs() < 1e-12);
        assert!(r.radius_at(0.3) < r.radius_at(0.6));
        assert_eq!(r.alpha_at(1.0), 0.0);
        assert!((r.hue - 20.0).abs() < 1e-9);
    }

    #[test]
    fn burst_spokes_match_count_and_rotate() {
        let mut rng = StdRng::seed_from_u64(3);
        let b = Burst::spawn(&mut rng, 1.0, 0.5, 0.5, 0.0, 1.6);
        assert_eq!(b.spokes.len(), b.count);
        assert_eq!(b.count, BURST_BASE_SPOKES + 9);
        let center = DVec2::new(75.0, 75.0);
        let a = b.spoke_segments(0.25, center, 150.0);
        let c = b.spoke_segments(0.75, center, 150.0);
        assert_eq!(a.len(), b.count);
        let angle = |seg: &(DVec2, DVec2)| {
            let v = seg.1 - center;
            v.y.atan2(v.x)
        };
        assert!((angle(&a[0]) - angle(&c[0])).abs() > 1e-6);
    }

    #[test]
    fn burst_magnitude_is_capped() {
        let mut rng = StdRng::seed_from_u64(4);
        let big = Burst::spawn(&mut rng, 0.0, 0.5, 0.5, 0.0, 50.0);
        let capped = Burst::spawn(&mut rng, 0.0, 0.5, 0.5, 0.0, HOLD_BURST_MAX_MAGNITUDE);
        assert_eq!(big.count, capped.count);
        assert_eq!(big.max_radius, capped.max_radius);
        assert_eq!(big.duration, capped.duration);
    }

    #[test]
    fn zero_duration_expires_immediately() {
        let e = ripple_at(2.0, 0.0);
        assert!(e.is_expired(2.0));
        let mut list = EffectList::default();
        list.push(e);
        assert_eq!(list.prune(2.0), 1);
        assert!(list.is_empty());
    }

    #[test]
    fn list_evicts_oldest_insertion_first() {
        let mut list = EffectList::with_capacity(3);
        // The first effect outlives the others but is still evicted first.
        list.push(ripple_at(0.0, 100.0));
        list.push(ripple_at(1.0, 1.0));
        list.push(ripple_at(2.0, 1.0));
        list.push(ripple_at(3.0, 1.0));
        assert_eq!(list.len(), 3);
        let starts: Vec<f64> = list.iter().map(Effect::start).collect();
        assert_eq!(starts, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn list_never_exceeds_default_capacity() {
        let mut list = EffectList::default();
        for i in 0..100 {
            list.push(ripple_at(i as f64, 1000.0));
        }
        assert_eq!(list.len(), EFFECT_CAPACITY);
        assert_eq!(list.iter().next().map(Effect::start), Some(76.0));
    }
}
