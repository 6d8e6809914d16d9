//! Property tests over a reciprocal-sampling random distribution
//! (`spec.md` §8, monotonicity / bracket-correctness laws), with an
//! independent 150-bit residual-sign check kept separate from the
//! production oracle (`SPEC_FULL.md` §4, "Test harness").

use dashu_float::{round::mode, FBig};
use lambertw::{w0, wm1};
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

/// Samples densely near zero and near the branch point, sparsely at large
/// `|x|` — the region where Lambert W bracketing is hardest — by drawing a
/// uniform exponent and a uniform mantissa sign/magnitude, mirroring the
/// teacher's custom `Distribution` impls in `dashu-float/tests/random.rs`.
struct ReciprocalDistribution {
    min_exp: i32,
    max_exp: i32,
}

impl ReciprocalDistribution {
    fn new(min_exp: i32, max_exp: i32) -> Self {
        Self { min_exp, max_exp }
    }
}

impl Distribution<f64> for ReciprocalDistribution {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let exp = Uniform::new_inclusive(self.min_exp, self.max_exp).sample(rng);
        let mantissa: f64 = Uniform::new(1.0, 2.0).sample(rng);
        let sign: f64 = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        sign * mantissa * 2f64.powi(exp)
    }
}

/// Re-derive the sign of `g(w) = w·eʷ − x` at 150 bits directly from
/// `dashu_float::FBig`, independent of `lambertw::oracle`'s production
/// code path. Nearest-rounded at 150 bits is ample margin over a one-ULP
/// `f64` bracket (~52 bits), so this simpler non-directed enclosure is
/// precise enough for a test-only cross-check.
fn reference_residual_sign(x: f64, w: f64) -> core::cmp::Ordering {
    let big = |v: f64| -> FBig<mode::HalfAway> {
        FBig::<mode::Zero>::from(v)
            .with_rounding::<mode::HalfAway>()
            .with_precision(150)
            .value()
    };
    let w_big = big(w);
    let residual = w_big.clone() * w_big.exp() - big(x);
    if residual.is_zero() {
        core::cmp::Ordering::Equal
    } else if residual.is_sign_negative() {
        core::cmp::Ordering::Less
    } else {
        core::cmp::Ordering::Greater
    }
}

#[test]
fn w0_brackets_are_one_ulp_and_residual_correct_over_random_samples() {
    let dist = ReciprocalDistribution::new(-60, 60);
    let mut rng = rand::thread_rng();

    for _ in 0..2_000 {
        let x: f64 = dist.sample(&mut rng);
        if x < -0.36787944117144233 {
            continue;
        }
        let y = w0(x);
        assert!(
            y.sup == y.inf || y.sup == y.inf.next_up(),
            "non-one-ULP bracket for W0({x})"
        );

        let lo_sign = reference_residual_sign(x, y.inf);
        let hi_sign = reference_residual_sign(x, y.sup);
        assert_ne!(
            lo_sign == core::cmp::Ordering::Greater,
            hi_sign == core::cmp::Ordering::Greater,
            "residual signs not opposite across the bracket for W0({x})"
        );
    }
}

#[test]
fn wm1_brackets_are_one_ulp_and_residual_correct_over_random_samples() {
    let dist = ReciprocalDistribution::new(-60, -1);
    let mut rng = rand::thread_rng();

    for _ in 0..2_000 {
        let x: f64 = -dist.sample(&mut rng).abs();
        if x < -0.36787944117144233 || x >= 0.0 {
            continue;
        }
        let y = wm1(x);
        assert!(
            y.sup == y.inf || y.sup == y.inf.next_up(),
            "non-one-ULP bracket for Wm1({x})"
        );

        let lo_sign = reference_residual_sign(x, y.inf);
        let hi_sign = reference_residual_sign(x, y.sup);
        assert_ne!(
            lo_sign == core::cmp::Ordering::Greater,
            hi_sign == core::cmp::Ordering::Greater,
            "residual signs not opposite across the bracket for Wm1({x})"
        );
    }
}

#[test]
fn w0_is_monotonically_increasing_on_random_pairs() {
    let dist = ReciprocalDistribution::new(-40, 40);
    let mut rng = rand::thread_rng();

    for _ in 0..500 {
        let mut a: f64 = dist.sample(&mut rng);
        let mut b: f64 = dist.sample(&mut rng);
        if a > b {
            core::mem::swap(&mut a, &mut b);
        }
        if a < -0.36787944117144233 || a == b {
            continue;
        }
        let ya = w0(a);
        let yb = w0(b);
        assert!(ya.inf <= yb.inf);
        assert!(ya.sup <= yb.sup);
    }
}
