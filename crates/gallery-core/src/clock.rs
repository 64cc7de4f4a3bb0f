//! Per-run frame timing.

use crate::constants::MAX_FRAME_DT_SEC;
use instant::Instant;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct FrameTime {
    pub dt: f64,
    pub elapsed: f64,
    pub frame: u64,
}

/// Tracks elapsed animation time for one run of the render loop.
///
/// Elapsed time accumulates clamped frame deltas, so a stalled tab or a
/// restart never makes the curves jump. `reset` starts a new run at zero.
#[derive(Clone, Debug, Default)]
pub struct FrameClock {
    last: Option<Instant>,
    elapsed: f64,
    frames: u64,
}

#[inline]
fn secs_between(earlier: Instant, later: Instant) -> f64 {
    if later > earlier {
        (later - earlier).as_secs_f64()
    } else {
        0.0
    }
}

impl FrameClock {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_started(&self) -> bool {
        self.last.is_some()
    }

    /// Elapsed seconds as of the latest tick.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn tick(&mut self, now: Instant) -> FrameTime {
        let dt = self
            .last
            .map(|last| secs_between(last, now).min(MAX_FRAME_DT_SEC))
            .unwrap_or(0.0);
        self.last = Some(now);
        self.elapsed += dt;
        self.frames += 1;
        FrameTime {
            dt,
            elapsed: self.elapsed,
            frame: self.frames,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn first_tick_starts_at_zero() {
        let mut clock = FrameClock::default();
        assert!(!clock.is_started());
        let t = clock.tick(Instant::now());
        assert_eq!(t.dt, 0.0);
        assert_eq!(t.elapsed, 0.0);
        assert_eq!(t.frame, 1);
        assert!(clock.is_started());
    }

    #[test]
    fn deltas_accumulate_and_long_gaps_are_clamped() {
        let mut clock = FrameClock::default();
        let t0 = Instant::now();
        clock.tick(t0);
        let t = clock.tick(t0 + Duration::from_millis(50));
        assert!((t.dt - 0.05).abs() < 1e-9);
        let t = clock.tick(t0 + Duration::from_secs(30));
        assert!((t.dt - MAX_FRAME_DT_SEC).abs() < 1e-12);
        assert!((t.elapsed - 0.15).abs() < 1e-9);
    }

    #[test]
    fn reset_restarts_from_zero() {
        let mut clock = FrameClock::default();
        let t0 = Instant::now();
        clock.tick(t0);
        clock.tick(t0 + Duration::from_millis(80));
        clock.reset();
        assert_eq!(clock.elapsed(), 0.0);
        let t = clock.tick(t0 + Duration::from_secs(5));
        assert_eq!(t.dt, 0.0);
        assert_eq!(t.elapsed, 0.0);
    }
}
