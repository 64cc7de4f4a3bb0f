// Property-style checks over the curve catalog, modulators and auto-fit.

use gallery_core::*;
use glam::DVec2;
use rand::{rngs::StdRng, SeedableRng};
use std::f64::consts::PI;

const TOL: f64 = 1e-6;

fn assert_finite_over_domain(params: &CurveParams) {
    let domain = params.kind().domain();
    for i in 0..=2000 {
        let t = domain.at(i, 2000);
        let p = sample_point(params, t);
        assert!(
            p.is_finite(),
            "{:?} produced {:?} at t={}",
            params.kind(),
            p,
            t
        );
    }
}

#[test]
fn every_family_is_finite_for_random_params() {
    let mut rng = StdRng::seed_from_u64(100);
    for kind in CurveKind::ALL {
        for _ in 0..50 {
            assert_finite_over_domain(&CurveParams::random(kind, &mut rng));
        }
    }
}

#[test]
fn boundary_parameters_stay_finite() {
    let cases = [
        CurveParams::Lame {
            a: 20.0,
            b: 50.0,
            n: 0.5,
        },
        CurveParams::Lame {
            a: 20.0,
            b: 50.0,
            n: 3.0,
        },
        CurveParams::Cycloid {
            r: 10.0,
            d: 5.0,
            ripple: 2.0,
            freq: 2.0,
            shift: -10.0,
        },
        CurveParams::Spirograph {
            big_r: 20.0,
            r: 15.0,
            d: 5.0,
        },
        CurveParams::Hypotrochoid {
            big_r: 30.0,
            r: 20.0,
            d: 25.0,
        },
        CurveParams::Rose {
            n: 2.0,
            d: 1.0,
            amplitude: 30.0,
        },
        CurveParams::Polynomial {
            coeffs: smallvec::smallvec![2.0, 2.0, 2.0, 2.0],
            amplitude: 50.0,
        },
        CurveParams::Harmonograph {
            freqs: [1.0; 4],
            phases: [0.0; 4],
            decays: [0.01; 4],
            amplitude: 60.0,
        },
        CurveParams::Butterfly { amplitude: 70.0 },
        CurveParams::Cardioid {
            a: 20.0,
            b: 12.0,
            k: 7.0,
            phi: 0.0,
        },
    ];
    for params in &cases {
        assert_finite_over_domain(params);
    }
}

#[test]
fn modulated_params_stay_finite() {
    let mut rng = StdRng::seed_from_u64(101);
    for kind in CurveKind::ALL {
        for _ in 0..10 {
            let params = CurveParams::random(kind, &mut rng);
            let set = ModulatorSet::derive(&params, &mut rng);
            for step in 0..40 {
                let resolved = set.resolve(&params, step as f64 * 37.3);
                assert_finite_over_domain(&resolved);
            }
        }
    }
}

#[test]
fn rose_scenario_starts_on_the_x_axis() {
    let spec = CurveSpec::new(CurveParams::Rose {
        n: 5.0,
        d: 2.0,
        amplitude: 40.0,
    });
    assert_eq!(spec.kind, CurveKind::Rose);
    let p = spec.sample(0.0);
    assert!((p.x - 40.0).abs() < 1e-12);
    assert!(p.y.abs() < 1e-12);
}

#[test]
fn cardioid_without_wobble_is_classic() {
    let p = CurveParams::Cardioid {
        a: 10.0,
        b: 0.0,
        k: 3.0,
        phi: 0.0,
    };
    assert!(sample_point(&p, 0.0).length() < 1e-12);
    let tip = sample_point(&p, PI);
    assert!((tip - DVec2::new(-20.0, 0.0)).length() < 1e-9);
}

#[test]
fn positive_modulators_never_drop_below_floor() {
    let mut rng = StdRng::seed_from_u64(102);
    let roles = [ParamRole::Positive, ParamRole::Decay];
    let bases = [0.001, 0.004, 0.01, 0.5, 1.0, 3.0, 15.0, 70.0];
    for role in roles {
        for &base in &bases {
            for _ in 0..5 {
                let m = derive_modulator(base, role, &mut rng);
                let min = m.min_value.expect("positive role has a floor");
                assert!(min > 0.0);
                let mut t = 0.0;
                while t <= 10_000.0 {
                    let v = evaluate(&m, t);
                    assert!(v >= min, "{:?} base={} t={} v={} min={}", role, base, t, v, min);
                    t += 0.37;
                }
            }
        }
    }
}

#[test]
fn angle_modulators_swing_by_pi() {
    let mut rng = StdRng::seed_from_u64(103);
    let m = derive_modulator(1.0, ParamRole::Angle, &mut rng);
    assert_eq!(m.amplitude_base, PI);
    let bound = PI * (m.intensity + m.secondary_intensity) + 1e-9;
    for i in 0..10_000 {
        let v = m.evaluate(i as f64 * 0.1);
        assert!((v - 1.0).abs() <= bound);
    }
}

#[test]
fn auto_fit_keeps_curves_inside_drawable_area() {
    let mut rng = StdRng::seed_from_u64(104);
    let pointer = PointerState::default();
    let sizes = [(150.0, 150.0), (220.0, 140.0), (90.0, 300.0)];
    for kind in CurveKind::ALL {
        for i in 0..100 {
            let spec = CurveSpec::random_of(kind, &mut rng);
            let mut cell = CellState::new(spec, &mut rng);
            let (w, h) = sizes[i % sizes.len()];
            let out = prepare_frame(&mut cell, &pointer, (w, h), 0.016, i as f64 * 1.7);
            let fit = out.fit;
            assert!(!cell.points.is_empty());
            let mut min = DVec2::splat(f64::INFINITY);
            let mut max = DVec2::splat(f64::NEG_INFINITY);
            for p in &cell.points {
                min = min.min(*p);
                max = max.max(*p);
            }
            let extent = max - min;
            assert!(extent.x <= fit.drawable.x + TOL, "{:?} x {}", kind, extent.x);
            assert!(extent.y <= fit.drawable.y + TOL, "{:?} y {}", kind, extent.y);
            assert!(min.x >= fit.padding - TOL && max.x <= w - fit.padding + TOL);
            assert!(min.y >= fit.padding - TOL && max.y <= h - fit.padding + TOL);
        }
    }
}
