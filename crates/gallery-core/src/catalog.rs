//! Curve catalog: twelve closed-form parametric curve families.
//!
//! Each family is a variant of [`CurveParams`] carrying exactly the constants
//! its equation needs. Sampling is pure and deterministic; generation draws
//! from fixed per-family ranges.

use glam::DVec2;
use rand::Rng;
use smallvec::SmallVec;
use std::f64::consts::{PI, TAU};

/// Inline storage for array-valued parameters (coefficients, frequencies).
pub type ParamArray = SmallVec<[f64; 4]>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CurveKind {
    Lissajous,
    Spirograph,
    Lame,
    Polynomial,
    TrigSum,
    Harmonograph,
    Rose,
    Epitrochoid,
    Butterfly,
    Cardioid,
    Hypotrochoid,
    Cycloid,
}

impl CurveKind {
    pub const ALL: [CurveKind; 12] = [
        CurveKind::Lissajous,
        CurveKind::Spirograph,
        CurveKind::Lame,
        CurveKind::Polynomial,
        CurveKind::TrigSum,
        CurveKind::Harmonograph,
        CurveKind::Rose,
        CurveKind::Epitrochoid,
        CurveKind::Butterfly,
        CurveKind::Cardioid,
        CurveKind::Hypotrochoid,
        CurveKind::Cycloid,
    ];

    pub fn id(self) -> &'static str {
        match self {
            CurveKind::Lissajous => "lissajous",
            CurveKind::Spirograph => "spirograph",
            CurveKind::Lame => "lame",
            CurveKind::Polynomial => "polynomial",
            CurveKind::TrigSum => "trigSum",
            CurveKind::Harmonograph => "harmonograph",
            CurveKind::Rose => "rose",
            CurveKind::Epitrochoid => "epitrochoid",
            CurveKind::Butterfly => "butterfly",
            CurveKind::Cardioid => "cardioid",
            CurveKind::Hypotrochoid => "hypotrochoid",
            CurveKind::Cycloid => "cycloid",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CurveKind::Lissajous => "Lissajous",
            CurveKind::Spirograph => "Spirograph",
            CurveKind::Lame => "Lamé Curve",
            CurveKind::Polynomial => "Polynomial",
            CurveKind::TrigSum => "Trig Sum",
            CurveKind::Harmonograph => "Harmonograph",
            CurveKind::Rose => "Rose Curve",
            CurveKind::Epitrochoid => "Epitrochoid",
            CurveKind::Butterfly => "Butterfly",
            CurveKind::Cardioid => "Cardioid",
            CurveKind::Hypotrochoid => "Hypotrochoid",
            CurveKind::Cycloid => "Cycloid",
        }
    }

    /// Look up a kind by its id. Ids are generated internally, so anything
    /// unrecognised maps to `Lissajous` instead of failing.
    pub fn from_id(id: &str) -> Self {
        Self::ALL
            .iter()
            .copied()
            .find(|k| k.id() == id)
            .unwrap_or(CurveKind::Lissajous)
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Natural parametrization range. `Polynomial` is the one family sampled
    /// over a literal scalar interval rather than an angular period.
    pub fn domain(self) -> Domain {
        let period = match self {
            CurveKind::Polynomial => return Domain::new(-2.0, 2.0),
            CurveKind::Spirograph | CurveKind::Epitrochoid | CurveKind::Hypotrochoid => 4.0 * PI,
            CurveKind::Harmonograph | CurveKind::Butterfly => 12.0 * PI,
            CurveKind::Cycloid => 6.0 * PI,
            CurveKind::Lissajous
            | CurveKind::Lame
            | CurveKind::TrigSum
            | CurveKind::Rose
            | CurveKind::Cardioid => TAU,
        };
        Domain::new(0.0, period)
    }

    pub fn label(self) -> CurveLabel {
        let (attribution, description) = match self {
            CurveKind::Lissajous => (
                "Jules Antoine Lissajous, 1857",
                "Two perpendicular sine oscillations with independent frequencies and a phase offset.",
            ),
            CurveKind::Spirograph => (
                "Denys Fisher, 1965",
                "A pen offset from a small circle rolling inside a fixed ring.",
            ),
            CurveKind::Lame => (
                "Gabriel Lamé, 1818",
                "A superellipse whose exponent morphs between star, diamond, circle and square.",
            ),
            CurveKind::Polynomial => (
                "Generative study",
                "Cosine and sine of two shifted cubic polynomials in t.",
            ),
            CurveKind::TrigSum => (
                "Joseph Fourier, 1807",
                "Three rotating phasors summed and averaged.",
            ),
            CurveKind::Harmonograph => (
                "Hugh Blackburn, 1844",
                "Damped pendulums tracing decaying sinusoids on each axis.",
            ),
            CurveKind::Rose => (
                "Guido Grandi, 1723",
                "A polar cosine whose petal count follows the ratio n/d.",
            ),
            CurveKind::Epitrochoid => (
                "Albrecht Dürer, 1525",
                "A point on a circle rolling around the outside of another.",
            ),
            CurveKind::Butterfly => (
                "Temple H. Fay, 1989",
                "A transcendental polar curve shaped like wings.",
            ),
            CurveKind::Cardioid => (
                "Giovanni Salvemini, 1741",
                "A heart-shaped polar curve with a rippling tangential twist.",
            ),
            CurveKind::Hypotrochoid => (
                "Philippe de La Hire, 1725",
                "A point on a circle rolling around the inside of another.",
            ),
            CurveKind::Cycloid => (
                "Galileo Galilei, 1599",
                "A rolling wheel blended with its trochoid and a travelling ripple.",
            ),
        };
        CurveLabel {
            title: self.name(),
            attribution,
            description,
        }
    }
}

/// Title, attribution and description for a cell's text label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurveLabel {
    pub title: &'static str,
    pub attribution: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain {
    pub start: f64,
    pub end: f64,
}

impl Domain {
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    /// The `i`th of `steps + 1` evenly spaced values covering the domain.
    #[inline]
    pub fn at(&self, i: usize, steps: usize) -> f64 {
        self.start + self.span() * i as f64 / steps.max(1) as f64
    }
}

/// How a parameter is modulated over time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamRole {
    /// Phase offsets; swing by ±π regardless of magnitude.
    Angle,
    /// Harmonograph damping constants; tiny values that need a wider swing.
    Decay,
    /// Radii, amplitudes, frequencies and exponents; never change sign.
    Positive,
    /// Unconstrained coefficients.
    Free,
}

impl ParamRole {
    pub fn is_positive_constrained(self) -> bool {
        matches!(self, ParamRole::Positive | ParamRole::Decay)
    }
}

/// One numeric parameter position inside a [`CurveParams`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParamSlot {
    pub name: &'static str,
    pub index: Option<usize>,
    pub role: ParamRole,
}

#[derive(Clone, Debug, PartialEq)]
pub enum CurveParams {
    Lissajous {
        a: f64,
        b: f64,
        delta: f64,
        amplitude: f64,
    },
    Spirograph {
        big_r: f64,
        r: f64,
        d: f64,
    },
    Lame {
        a: f64,
        b: f64,
        n: f64,
    },
    Polynomial {
        coeffs: ParamArray,
        amplitude: f64,
    },
    TrigSum {
        freqs: ParamArray,
        phases: ParamArray,
        amplitude: f64,
    },
    Harmonograph {
        freqs: [f64; 4],
        phases: [f64; 4],
        decays: [f64; 4],
        amplitude: f64,
    },
    Rose {
        n: f64,
        d: f64,
        amplitude: f64,
    },
    Epitrochoid {
        big_r: f64,
        r: f64,
        d: f64,
    },
    Butterfly {
        amplitude: f64,
    },
    Cardioid {
        a: f64,
        b: f64,
        k: f64,
        phi: f64,
    },
    Hypotrochoid {
        big_r: f64,
        r: f64,
        d: f64,
    },
    Cycloid {
        r: f64,
        d: f64,
        ripple: f64,
        freq: f64,
        shift: f64,
    },
}

#[inline]
fn uniform<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    rng.gen_range(lo..hi)
}

#[inline]
fn visit<F: FnMut(ParamSlot, &mut f64)>(
    f: &mut F,
    name: &'static str,
    index: Option<usize>,
    role: ParamRole,
    value: &mut f64,
) {
    f(ParamSlot { name, index, role }, value);
}

fn visit_all<F: FnMut(ParamSlot, &mut f64)>(
    f: &mut F,
    name: &'static str,
    role: ParamRole,
    values: &mut [f64],
) {
    for (i, v) in values.iter_mut().enumerate() {
        visit(f, name, Some(i), role, v);
    }
}

impl CurveParams {
    pub fn kind(&self) -> CurveKind {
        match self {
            CurveParams::Lissajous { .. } => CurveKind::Lissajous,
            CurveParams::Spirograph { .. } => CurveKind::Spirograph,
            CurveParams::Lame { .. } => CurveKind::Lame,
            CurveParams::Polynomial { .. } => CurveKind::Polynomial,
            CurveParams::TrigSum { .. } => CurveKind::TrigSum,
            CurveParams::Harmonograph { .. } => CurveKind::Harmonograph,
            CurveParams::Rose { .. } => CurveKind::Rose,
            CurveParams::Epitrochoid { .. } => CurveKind::Epitrochoid,
            CurveParams::Butterfly { .. } => CurveKind::Butterfly,
            CurveParams::Cardioid { .. } => CurveKind::Cardioid,
            CurveParams::Hypotrochoid { .. } => CurveKind::Hypotrochoid,
            CurveParams::Cycloid { .. } => CurveKind::Cycloid,
        }
    }

    /// Draw a fresh parameter set for `kind` from its generation ranges.
    pub fn random<R: Rng + ?Sized>(kind: CurveKind, rng: &mut R) -> Self {
        match kind {
            CurveKind::Lissajous => CurveParams::Lissajous {
                a: uniform(rng, 1.0, 5.0),
                b: uniform(rng, 1.0, 5.0),
                delta: uniform(rng, 0.0, TAU),
                amplitude: uniform(rng, 30.0, 70.0),
            },
            CurveKind::Spirograph => CurveParams::Spirograph {
                big_r: uniform(rng, 20.0, 40.0),
                r: uniform(rng, 5.0, 15.0),
                d: uniform(rng, 5.0, 20.0),
            },
            CurveKind::Lame => CurveParams::Lame {
                a: uniform(rng, 20.0, 50.0),
                b: uniform(rng, 20.0, 50.0),
                n: uniform(rng, 0.5, 3.0),
            },
            CurveKind::Polynomial => CurveParams::Polynomial {
                coeffs: (0..4).map(|_| uniform(rng, -2.0, 2.0)).collect(),
                amplitude: uniform(rng, 20.0, 50.0),
            },
            CurveKind::TrigSum => CurveParams::TrigSum {
                freqs: (0..3).map(|_| uniform(rng, 1.0, 8.0)).collect(),
                phases: (0..3).map(|_| uniform(rng, 0.0, TAU)).collect(),
                amplitude: uniform(rng, 30.0, 60.0),
            },
            CurveKind::Harmonograph => CurveParams::Harmonograph {
                freqs: std::array::from_fn(|_| uniform(rng, 1.0, 4.0)),
                phases: std::array::from_fn(|_| uniform(rng, 0.0, TAU)),
                decays: std::array::from_fn(|_| uniform(rng, 0.001, 0.01)),
                amplitude: uniform(rng, 30.0, 60.0),
            },
            CurveKind::Rose => CurveParams::Rose {
                n: uniform(rng, 2.0, 8.0),
                d: uniform(rng, 1.0, 5.0).floor(),
                amplitude: uniform(rng, 30.0, 60.0),
            },
            CurveKind::Epitrochoid => CurveParams::Epitrochoid {
                big_r: uniform(rng, 20.0, 40.0),
                r: uniform(rng, 5.0, 15.0),
                d: uniform(rng, 10.0, 25.0),
            },
            CurveKind::Butterfly => CurveParams::Butterfly {
                amplitude: uniform(rng, 40.0, 70.0),
            },
            CurveKind::Cardioid => CurveParams::Cardioid {
                a: uniform(rng, 20.0, 50.0),
                b: uniform(rng, 2.0, 12.0),
                k: uniform(rng, 2.0, 7.0),
                phi: uniform(rng, 0.0, TAU),
            },
            CurveKind::Hypotrochoid => CurveParams::Hypotrochoid {
                big_r: uniform(rng, 30.0, 50.0),
                r: uniform(rng, 5.0, 20.0),
                d: uniform(rng, 5.0, 25.0),
            },
            CurveKind::Cycloid => CurveParams::Cycloid {
                r: uniform(rng, 10.0, 30.0),
                d: uniform(rng, 5.0, 35.0),
                ripple: uniform(rng, 2.0, 10.0),
                freq: uniform(rng, 2.0, 9.0),
                shift: uniform(rng, -10.0, 10.0),
            },
        }
    }

    /// Visit every numeric parameter in a fixed order: scalars in declaration
    /// order, array parameters element by element.
    pub fn for_each_slot_mut<F: FnMut(ParamSlot, &mut f64)>(&mut self, mut f: F) {
        use ParamRole::*;
        let f = &mut f;
        match self {
            CurveParams::Lissajous {
                a,
                b,
                delta,
                amplitude,
            } => {
                visit(f, "a", None, Positive, a);
                visit(f, "b", None, Positive, b);
                visit(f, "delta", None, Angle, delta);
                visit(f, "amplitude", None, Positive, amplitude);
            }
            CurveParams::Spirograph { big_r, r, d }
            | CurveParams::Epitrochoid { big_r, r, d }
            | CurveParams::Hypotrochoid { big_r, r, d } => {
                visit(f, "R", None, Positive, big_r);
                visit(f, "r", None, Positive, r);
                visit(f, "d", None, Positive, d);
            }
            CurveParams::Lame { a, b, n } => {
                visit(f, "a", None, Positive, a);
                visit(f, "b", None, Positive, b);
                visit(f, "n", None, Positive, n);
            }
            CurveParams::Polynomial { coeffs, amplitude } => {
                visit_all(f, "c", Free, coeffs);
                visit(f, "amplitude", None, Positive, amplitude);
            }
            CurveParams::TrigSum {
                freqs,
                phases,
                amplitude,
            } => {
                visit_all(f, "freq", Positive, freqs);
                visit_all(f, "phase", Angle, phases);
                visit(f, "amplitude", None, Positive, amplitude);
            }
            CurveParams::Harmonograph {
                freqs,
                phases,
                decays,
                amplitude,
            } => {
                visit_all(f, "f", Positive, freqs);
                visit_all(f, "p", Angle, phases);
                visit_all(f, "d", Decay, decays);
                visit(f, "amplitude", None, Positive, amplitude);
            }
            CurveParams::Rose { n, d, amplitude } => {
                visit(f, "n", None, Positive, n);
                visit(f, "d", None, Positive, d);
                visit(f, "amplitude", None, Positive, amplitude);
            }
            CurveParams::Butterfly { amplitude } => {
                visit(f, "amplitude", None, Positive, amplitude);
            }
            CurveParams::Cardioid { a, b, k, phi } => {
                visit(f, "a", None, Positive, a);
                visit(f, "b", None, Positive, b);
                visit(f, "k", None, Positive, k);
                visit(f, "phi", None, Angle, phi);
            }
            CurveParams::Cycloid {
                r,
                d,
                ripple,
                freq,
                shift,
            } => {
                visit(f, "r", None, Positive, r);
                visit(f, "d", None, Positive, d);
                visit(f, "ripple", None, Positive, ripple);
                visit(f, "freq", None, Positive, freq);
                visit(f, "shift", None, Free, shift);
            }
        }
    }

    pub fn slots(&self) -> Vec<(ParamSlot, f64)> {
        let mut out = Vec::new();
        let mut scratch = self.clone();
        scratch.for_each_slot_mut(|slot, v| out.push((slot, *v)));
        out
    }

    pub fn slot_count(&self) -> usize {
        let mut n = 0;
        self.clone().for_each_slot_mut(|_, _| n += 1);
        n
    }

    /// Evaluate the curve at parameter `t`.
    pub fn sample(&self, t: f64) -> DVec2 {
        match self {
            CurveParams::Lissajous {
                a,
                b,
                delta,
                amplitude,
            } => DVec2::new(
                amplitude * (a * t + delta).sin(),
                amplitude * (b * t).sin(),
            ),
            CurveParams::Spirograph { big_r, r, d } | CurveParams::Hypotrochoid { big_r, r, d } => {
                let ratio = (big_r - r) / r;
                DVec2::new(
                    (big_r - r) * t.cos() + d * (ratio * t).cos(),
                    (big_r - r) * t.sin() - d * (ratio * t).sin(),
                )
            }
            CurveParams::Lame { a, b, n } => {
                let (s, c) = t.sin_cos();
                let e = 2.0 / n;
                DVec2::new(
                    a * c.signum() * c.abs().powf(e),
                    b * s.signum() * s.abs().powf(e),
                )
            }
            CurveParams::Polynomial { coeffs, amplitude } => {
                let mut px = 0.0;
                let mut py = 0.0;
                for (i, c) in coeffs.iter().enumerate() {
                    px += c * t.powi(i as i32);
                    py += c * t.powi(i as i32 + 1);
                }
                DVec2::new(amplitude * px.cos(), amplitude * py.sin())
            }
            CurveParams::TrigSum {
                freqs,
                phases,
                amplitude,
            } => {
                let n = freqs.len().min(phases.len());
                if n == 0 {
                    return DVec2::ZERO;
                }
                let mut sum = DVec2::ZERO;
                for (f, p) in freqs.iter().zip(phases.iter()) {
                    let (s, c) = (f * t + p).sin_cos();
                    sum += DVec2::new(c, s);
                }
                sum * (*amplitude / n as f64)
            }
            CurveParams::Harmonograph {
                freqs: f,
                phases: p,
                decays: d,
                amplitude,
            } => {
                let term = |i: usize| (-d[i] * t).exp() * (t * f[i] + p[i]).sin();
                DVec2::new(
                    amplitude * (term(0) + term(1)),
                    amplitude * (term(2) + term(3)),
                )
            }
            CurveParams::Rose { n, d, amplitude } => {
                let rho = amplitude * ((n / d) * t).cos();
                DVec2::new(rho * t.cos(), rho * t.sin())
            }
            CurveParams::Epitrochoid { big_r, r, d } => {
                let ratio = (big_r + r) / r;
                DVec2::new(
                    (big_r + r) * t.cos() - d * (ratio * t).cos(),
                    (big_r + r) * t.sin() - d * (ratio * t).sin(),
                )
            }
            CurveParams::Butterfly { amplitude } => {
                let rho = amplitude
                    * (t.cos().exp() - 2.0 * (4.0 * t).cos() + (t / 12.0).sin().powi(5));
                DVec2::new(rho * t.cos(), rho * t.sin())
            }
            CurveParams::Cardioid { a, b, k, phi } => {
                let (ws, wc) = (k * t + phi).sin_cos();
                let rho = a * (1.0 - t.cos()) + b * ws;
                let twist = 0.35 * b * wc;
                let (s, c) = t.sin_cos();
                DVec2::new(rho * c - twist * s, rho * s + twist * c)
            }
            CurveParams::Cycloid {
                r,
                d,
                ripple,
                freq,
                shift,
            } => {
                let (s, c) = t.sin_cos();
                let rolling = DVec2::new(r * (t - s), r * (1.0 - c));
                let trochoid = DVec2::new(r * t - d * s, r - d * c);
                let blend = (rolling + trochoid) * 0.5;
                DVec2::new(blend.x, blend.y + 0.4 * ripple * (freq * t).sin() - shift)
            }
        }
    }
}

/// Evaluate `params` at `t`.
#[inline]
pub fn sample_point(params: &CurveParams, t: f64) -> DVec2 {
    params.sample(t)
}

/// One curve instance: its family, display name, base parameters and domain.
#[derive(Clone, Debug, PartialEq)]
pub struct CurveSpec {
    pub kind: CurveKind,
    pub name: &'static str,
    pub params: CurveParams,
    pub domain: Domain,
}

impl CurveSpec {
    pub fn new(params: CurveParams) -> Self {
        let kind = params.kind();
        Self {
            kind,
            name: kind.name(),
            params,
            domain: kind.domain(),
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let kind = CurveKind::random(rng);
        Self::random_of(kind, rng)
    }

    pub fn random_of<R: Rng + ?Sized>(kind: CurveKind, rng: &mut R) -> Self {
        Self::new(CurveParams::random(kind, rng))
    }

    #[inline]
    pub fn sample(&self, t: f64) -> DVec2 {
        self.params.sample(t)
    }

    pub fn label(&self) -> CurveLabel {
        self.kind.label()
    }

    /// Compact `name=value` listing of the base parameters, e.g. `n=5.00 d=2.00`.
    pub fn summary(&self) -> String {
        self.params
            .slots()
            .iter()
            .map(|(slot, v)| match slot.index {
                Some(i) => format!("{}{}={:.2}", slot.name, i + 1, v),
                None => format!("{}={:.2}", slot.name, v),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn ids_round_trip_and_unknown_falls_back() {
        for kind in CurveKind::ALL {
            assert_eq!(CurveKind::from_id(kind.id()), kind);
        }
        assert_eq!(CurveKind::from_id("nephroid"), CurveKind::Lissajous);
        assert_eq!(CurveKind::from_id(""), CurveKind::Lissajous);
    }

    #[test]
    fn polynomial_domain_is_scalar_interval() {
        assert_eq!(CurveKind::Polynomial.domain(), Domain::new(-2.0, 2.0));
        assert!((CurveKind::Harmonograph.domain().end - 12.0 * PI).abs() < 1e-12);
        assert!((CurveKind::Cycloid.domain().end - 6.0 * PI).abs() < 1e-12);
        assert_eq!(CurveKind::Rose.domain().start, 0.0);
    }

    #[test]
    fn domain_endpoints_are_inclusive() {
        let d = CurveKind::Spirograph.domain();
        assert_eq!(d.at(0, 420), 0.0);
        assert!((d.at(420, 420) - 4.0 * PI).abs() < 1e-12);
    }

    #[test]
    fn slot_counts_match_family_shape() {
        let mut rng = StdRng::seed_from_u64(3);
        let expected = [
            (CurveKind::Lissajous, 4),
            (CurveKind::Spirograph, 3),
            (CurveKind::Lame, 3),
            (CurveKind::Polynomial, 5),
            (CurveKind::TrigSum, 7),
            (CurveKind::Harmonograph, 13),
            (CurveKind::Rose, 3),
            (CurveKind::Epitrochoid, 3),
            (CurveKind::Butterfly, 1),
            (CurveKind::Cardioid, 4),
            (CurveKind::Hypotrochoid, 3),
            (CurveKind::Cycloid, 5),
        ];
        for (kind, n) in expected {
            let p = CurveParams::random(kind, &mut rng);
            assert_eq!(p.kind(), kind);
            assert_eq!(p.slot_count(), n, "{:?}", kind);
        }
    }

    #[test]
    fn rose_denominator_is_whole() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            if let CurveParams::Rose { d, .. } = CurveParams::random(CurveKind::Rose, &mut rng) {
                assert!((1.0..=4.0).contains(&d));
                assert_eq!(d.fract(), 0.0);
            }
        }
    }

    #[test]
    fn lissajous_at_zero_uses_phase_offset() {
        let p = CurveParams::Lissajous {
            a: 3.0,
            b: 2.0,
            delta: PI / 2.0,
            amplitude: 10.0,
        };
        let pt = p.sample(0.0);
        assert!((pt.x - 10.0).abs() < 1e-12);
        assert!(pt.y.abs() < 1e-12);
    }

    #[test]
    fn summary_lists_indexed_array_entries() {
        let spec = CurveSpec::new(CurveParams::TrigSum {
            freqs: smallvec::smallvec![1.0, 2.0],
            phases: smallvec::smallvec![0.0, 0.5],
            amplitude: 30.0,
        });
        assert_eq!(
            spec.summary(),
            "freq1=1.00 freq2=2.00 phase1=0.00 phase2=0.50 amplitude=30.00"
        );
        assert_eq!(spec.name, "Trig Sum");
    }
}
