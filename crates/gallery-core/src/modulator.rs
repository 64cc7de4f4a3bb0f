//! Time-driven parameter modulation.
//!
//! Every numeric parameter of a curve gets its own [`Modulator`]: two summed
//! sinusoids with randomized speed, phase and intensity, drawn once when the
//! curve is created. Evaluating all of them at the elapsed time yields the
//! curve's dynamic parameters for that frame.

use crate::catalog::{CurveParams, ParamRole};
use crate::constants::*;
use rand::Rng;
use std::f64::consts::TAU;

#[derive(Clone, Debug, PartialEq)]
pub struct Modulator {
    pub base: f64,
    pub amplitude_base: f64,
    pub intensity: f64,
    pub secondary_intensity: f64,
    pub speed: f64,
    pub secondary_speed: f64,
    pub phase: f64,
    pub secondary_phase: f64,
    pub is_positive_constrained: bool,
    pub min_value: Option<f64>,
}

/// Swing applied around `base` before intensities are factored in.
pub fn amplitude_for(base: f64, role: ParamRole) -> f64 {
    match role {
        ParamRole::Angle => ANGLE_AMPLITUDE,
        ParamRole::Decay => (base.abs() * DECAY_AMPLITUDE_GAIN).max(DECAY_AMPLITUDE_FLOOR),
        ParamRole::Positive | ParamRole::Free => base.abs().max(DEFAULT_AMPLITUDE_FLOOR),
    }
}

/// Smallest magnitude a positive-role parameter may take after rectification.
pub fn min_value_for(base: f64, amplitude_base: f64) -> f64 {
    (amplitude_base * MIN_VALUE_AMPLITUDE_RATIO)
        .max(base.abs() * MIN_VALUE_BASE_RATIO)
        .max(MIN_VALUE_FLOOR)
}

#[inline]
fn draw<R: Rng + ?Sized>(rng: &mut R, range: (f64, f64)) -> f64 {
    rng.gen_range(range.0..range.1)
}

impl Modulator {
    pub fn derive<R: Rng + ?Sized>(base: f64, role: ParamRole, rng: &mut R) -> Self {
        let amplitude_base = amplitude_for(base, role);
        let positive = role.is_positive_constrained();
        Self {
            base,
            amplitude_base,
            intensity: draw(rng, PRIMARY_INTENSITY),
            secondary_intensity: draw(rng, SECONDARY_INTENSITY),
            speed: draw(rng, PRIMARY_SPEED),
            secondary_speed: draw(rng, SECONDARY_SPEED),
            phase: draw(rng, (0.0, TAU)),
            secondary_phase: draw(rng, (0.0, TAU)),
            is_positive_constrained: positive,
            min_value: positive.then(|| min_value_for(base, amplitude_base)),
        }
    }

    pub fn evaluate(&self, t: f64) -> f64 {
        let wobble = self.intensity * (self.speed * t + self.phase).sin()
            + self.secondary_intensity * (self.secondary_speed * t + self.secondary_phase).sin();
        let value = self.base + self.amplitude_base * wobble;
        match self.min_value {
            // Rectify instead of clamping so the curve never mirrors through zero.
            Some(min) if self.is_positive_constrained => value.abs().max(min),
            _ => value,
        }
    }
}

#[inline]
pub fn derive_modulator<R: Rng + ?Sized>(base: f64, role: ParamRole, rng: &mut R) -> Modulator {
    Modulator::derive(base, role, rng)
}

#[inline]
pub fn evaluate(modulator: &Modulator, elapsed: f64) -> f64 {
    modulator.evaluate(elapsed)
}

/// Modulators for every parameter slot of one curve, in slot order.
///
/// A slot whose base value is not finite has no modulator and resolves to its
/// base value unchanged.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ModulatorSet {
    slots: Vec<Option<Modulator>>,
}

impl ModulatorSet {
    pub fn derive<R: Rng + ?Sized>(params: &CurveParams, rng: &mut R) -> Self {
        let slots = params
            .slots()
            .into_iter()
            .map(|(slot, base)| base.is_finite().then(|| Modulator::derive(base, slot.role, rng)))
            .collect();
        Self { slots }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Modulator> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<&Modulator>> {
        self.slots.iter().map(Option::as_ref)
    }

    /// Dynamic parameters at `elapsed` seconds.
    pub fn resolve(&self, base: &CurveParams, elapsed: f64) -> CurveParams {
        let mut out = base.clone();
        self.resolve_into(&mut out, elapsed);
        out
    }

    /// Overwrite each slot of `params` with its modulated value. Slots beyond
    /// the set's length are left as they are.
    pub fn resolve_into(&self, params: &mut CurveParams, elapsed: f64) {
        let mut i = 0;
        params.for_each_slot_mut(|_, v| {
            if let Some(Some(m)) = self.slots.get(i) {
                *v = m.evaluate(elapsed);
            }
            i += 1;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CurveKind;
    use rand::{rngs::StdRng, SeedableRng};
    use std::f64::consts::PI;

    #[test]
    fn amplitude_depends_on_role() {
        assert_eq!(amplitude_for(0.1, ParamRole::Angle), PI);
        assert_eq!(amplitude_for(6.0, ParamRole::Angle), PI);
        assert!((amplitude_for(0.002, ParamRole::Decay) - 0.02).abs() < 1e-12);
        assert!((amplitude_for(0.008, ParamRole::Decay) - 0.04).abs() < 1e-12);
        assert_eq!(amplitude_for(0.2, ParamRole::Free), 0.5);
        assert_eq!(amplitude_for(-1.5, ParamRole::Free), 1.5);
        assert_eq!(amplitude_for(42.0, ParamRole::Positive), 42.0);
    }

    #[test]
    fn min_value_takes_largest_floor() {
        assert!((min_value_for(40.0, 40.0) - 14.0).abs() < 1e-12);
        assert!((min_value_for(0.002, 0.02) - 0.001).abs() < 1e-12);
        assert!((min_value_for(0.0, 0.5) - 0.025).abs() < 1e-12);
    }

    #[test]
    fn free_role_has_no_floor_and_can_cross_zero() {
        let mut rng = StdRng::seed_from_u64(5);
        let m = Modulator::derive(0.0, ParamRole::Free, &mut rng);
        assert!(!m.is_positive_constrained);
        assert!(m.min_value.is_none());
        let crossed = (0..20_000).any(|i| m.evaluate(i as f64 * 0.05) < 0.0);
        assert!(crossed);
    }

    #[test]
    fn modulation_is_continuous() {
        let mut rng = StdRng::seed_from_u64(9);
        let m = Modulator::derive(30.0, ParamRole::Positive, &mut rng);
        let dt = 1.0 / 60.0;
        let mut prev = m.evaluate(0.0);
        for i in 1..10_000 {
            let v = m.evaluate(i as f64 * dt);
            assert!((v - prev).abs() < 1.0, "jump at frame {i}: {prev} -> {v}");
            prev = v;
        }
    }

    #[test]
    fn set_aligns_with_slots_and_resolves_kind() {
        let mut rng = StdRng::seed_from_u64(21);
        for kind in CurveKind::ALL {
            let params = CurveParams::random(kind, &mut rng);
            let set = ModulatorSet::derive(&params, &mut rng);
            assert_eq!(set.len(), params.slot_count());
            assert!(set.iter().all(|m| m.is_some()));
            let resolved = set.resolve(&params, 3.5);
            assert_eq!(resolved.kind(), kind);
            for ((slot, v), m) in resolved.slots().iter().zip(set.iter()) {
                let m = m.unwrap();
                assert_eq!(*v, m.evaluate(3.5), "{:?}", slot);
            }
        }
    }

    #[test]
    fn non_finite_base_passes_through() {
        let mut rng = StdRng::seed_from_u64(1);
        let params = CurveParams::Rose {
            n: f64::NAN,
            d: 2.0,
            amplitude: 40.0,
        };
        let set = ModulatorSet::derive(&params, &mut rng);
        assert!(set.get(0).is_none());
        assert!(set.get(1).is_some());
        match set.resolve(&params, 1.0) {
            CurveParams::Rose { n, amplitude, .. } => {
                assert!(n.is_nan());
                assert!(amplitude > 0.0);
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
