//! The arbitrary-precision sign oracle (`spec.md` §4.2).
//!
//! Backed by [`dashu_float::FBig`] — the teacher's own published
//! arbitrary-precision, arbitrary-rounding-mode float type — used here as
//! an ordinary dependency for exactly the service it is built to provide:
//! an exact-interval enclosure of `g(m) = m·eᵐ − x` at a caller-chosen
//! working precision, with directed rounding in each arithmetic step.
//!
//! Unlike the original MPFR-backed implementation, [`FBig`] is a value
//! type: there is no long-lived `mpfr_t` scratch to reuse across calls
//! (`SPEC_FULL.md` §3.5 / `spec.md` §9, "reused big-float scratch fields").
//! [`Evaluator`][crate::evaluator::Evaluator] therefore carries no oracle
//! state at all; every call constructs its `FBig` operands fresh at the
//! requested precision. This trades a per-midpoint allocation for the
//! scratch-reuse optimization — a deliberate simplification, not an
//! oversight, because `dashu_float`'s allocator-backed bignum already
//! amortizes small-integer storage internally.

use core::cmp::Ordering;

use dashu_float::{
    round::{mode, Round},
    FBig,
};
use lambertw_base::{LambertFloat, Sign};

/// Convert an arbitrary-precision value to the nearest `f64` and nudge it
/// one ULP toward `+∞`, guaranteeing the result is `>=` the true value.
///
/// `f64::from_str` is specified to be correctly rounded to nearest, so the
/// nearest-`f64` parse is off by at most half a ULP; nudging by a whole ULP
/// always reaches a valid upper bound. This is the to-nearest-plus-
/// `next_after` fallback `spec.md` §4.1 licenses when a platform can't
/// steer rounding direction natively — used here at the single point where
/// an arbitrary-precision oracle result must be widened back down to `T`.
fn to_f64_up<R: Round>(v: FBig<R>) -> f64 {
    let nearest: f64 = v.to_string().parse().expect("finite FBig value");
    LambertFloat::next_up(nearest)
}

/// `x` converted to an exact arbitrary-precision value at `precision` bits,
/// in the rounding mode `R` (the conversion from `f64` is always exact:
/// every finite `f64` has a terminating binary expansion well within
/// `precision` bits for the precisions this crate uses).
fn big<R: Round>(x: f64, precision: usize) -> FBig<R> {
    FBig::<mode::Zero>::from(x)
        .with_rounding::<R>()
        .with_precision(precision)
        .value()
}

/// Ordering of `v` against zero, for a value known to be exactly
/// representable (no further rounding needed to decide the comparison).
fn cmp_zero<R: Round>(v: &FBig<R>) -> Ordering {
    if v.is_zero() {
        Ordering::Equal
    } else if v.is_sign_negative() {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

/// A rigorous enclosure `[lo, hi]` of `g(m) = m·eᵐ − x` at the given
/// working precision, `lo` rounded down and `hi` rounded up.
///
/// Mirrors `ReferenceW2::GetMidpointSign`'s pairing of the directed `eᵐ`
/// endpoints with the sign of `m`: for `m ≥ 0`, `m·eᵐ` is increasing in
/// both the base and the exponent, so `lo = m·exp_down(m)` and
/// `hi = m·exp_up(m)`; for `m < 0`, multiplying by the negative `m` flips
/// the pairing.
fn residual_bounds(x: f64, m: f64, precision: usize) -> (FBig<mode::Down>, FBig<mode::Up>) {
    let m_down = big::<mode::Down>(m, precision);
    let m_up = big::<mode::Up>(m, precision);

    let exp_down = m_down.clone().exp();
    let exp_up = m_up.clone().exp();

    // Both arms must agree on (FBig<Down>, FBig<Up>): for m < 0 the pair
    // that is a valid lower/upper bound swaps sides, so it is re-tagged
    // with `with_rounding` (a type-level reinterpretation of the same
    // stored value, not a recomputation) rather than left as the opposite
    // concrete type.
    let (prod_lo, prod_hi) = if m >= 0.0 {
        (m_down * exp_down, m_up * exp_up)
    } else {
        (
            (m_up * exp_up).with_rounding::<mode::Down>(),
            (m_down * exp_down).with_rounding::<mode::Up>(),
        )
    };

    let x_down = big::<mode::Down>(x, precision);
    let x_up = big::<mode::Up>(x, precision);
    (
        prod_lo - x_up.with_rounding::<mode::Down>(),
        prod_hi - x_down.with_rounding::<mode::Up>(),
    )
}

/// `MidpointSign(x, m, high_prec)` of `spec.md` §4.2.
///
/// Returns the sign of `g(m) = m·eᵐ − x` at `precision` bits of working
/// precision: `Positive` if the enclosure is definitely non-negative,
/// `Negative` if definitely non-positive, `Inconclusive` if it straddles
/// zero. Short-circuits to `Positive` on the monotonicity shortcut `m ≥ x`
/// with `m > 0` and `x ≥ 0` (there, `m·eᵐ ≥ m ≥ x` trivially).
pub fn midpoint_sign(x: f64, m: f64, precision: usize) -> Sign {
    if m >= x && m > 0.0 && x >= 0.0 {
        return Sign::Positive;
    }

    let (lo, hi) = residual_bounds(x, m, precision);
    let lo_cmp = cmp_zero(&lo);
    let hi_cmp = cmp_zero(&hi);

    if lo_cmp != Ordering::Less && hi_cmp != Ordering::Less {
        Sign::Positive
    } else if lo_cmp != Ordering::Greater && hi_cmp != Ordering::Greater {
        Sign::Negative
    } else {
        Sign::Inconclusive
    }
}

/// The absolute value of `w̃·exp(w̃)/x − 1`, rounded up, at `precision` bits.
/// Used by the oracle path of the residual bound (`spec.md` §4.4 item 2)
/// when `x` is too close to zero or to the branch point for the fast
/// floating-point residual bound to be valid.
pub fn residual_ratio_upper_bound(x: f64, w_tilde: f64, precision: usize) -> f64 {
    let w_up = big::<mode::Up>(w_tilde, precision);
    let w_down = big::<mode::Down>(w_tilde, precision);
    let exp_up = w_up.clone().exp();
    let exp_down = w_down.clone().exp();

    let (num_lo, num_hi) = if w_tilde >= 0.0 {
        (w_down * exp_down, w_up * exp_up)
    } else {
        (
            (w_up * exp_up).with_rounding::<mode::Down>(),
            (w_down * exp_down).with_rounding::<mode::Up>(),
        )
    };

    let x_down = big::<mode::Down>(x, precision);
    let x_up = big::<mode::Up>(x, precision);
    let (ratio_lo, ratio_hi) = if x >= 0.0 {
        (
            num_lo / x_up.with_rounding::<mode::Down>(),
            num_hi / x_down.with_rounding::<mode::Up>(),
        )
    } else {
        (
            num_hi.with_rounding::<mode::Down>() / x_down.with_rounding::<mode::Down>(),
            num_lo.with_rounding::<mode::Up>() / x_up.with_rounding::<mode::Up>(),
        )
    };

    let one_up = big::<mode::Up>(1.0, precision);
    let one_down = big::<mode::Down>(1.0, precision);
    let diff_lo = ratio_lo - one_up.with_rounding::<mode::Down>();
    let diff_hi = ratio_hi - one_down.with_rounding::<mode::Up>();

    let bound = if cmp_zero(&diff_lo) != Ordering::Less {
        diff_hi
    } else if cmp_zero(&diff_hi) != Ordering::Greater {
        (-diff_lo).with_rounding::<mode::Up>()
    } else {
        // Straddles zero: the bound is the larger magnitude endpoint.
        let neg_lo = (-diff_lo).with_rounding::<mode::Up>();
        if neg_lo > diff_hi {
            neg_lo
        } else {
            diff_hi
        }
    };
    to_f64_up(bound)
}
