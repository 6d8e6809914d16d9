//! Derivative and residual bounds (`spec.md` §4.4).
//!
//! `derivative_bound_w0`/`derivative_bound_wm1` compute `d(x)`; `residual`
//! computes `δ(x, w̃)`; [`construct`] combines them into the proven bracket
//! `⟨w̃ − d·δ, w̃ + d·δ⟩` that seeds bisection. Most sub-expressions use the
//! [`rounding`](crate::rounding) module's directed primitives; the two
//! "closed form in η" cases (the `x < -0.01` branch of `d` for `W0`, and
//! the single formula for `Wm1`) fall back to nearest-then-nudge, the same
//! conservative-widening discipline `rounding` itself documents, rather
//! than hand-deriving each sub-term's rounding direction.

use lambertw_base::LambertFloat;

use static_assertions::const_assert;

use crate::approx::{w0, wm1};
use crate::fallback;
use crate::oracle;
use crate::rounding::{self, Direction};

/// `N` in the `exp(w̃ + N) / (x · e^N)` offset trick that avoids losing
/// relative precision when `w̃` is very negative but `x` is not
/// (`spec.md` §4.4 item 1).
const OFFSET_N: f64 = 50.0;
const EN_DOWN: f64 = 5.184_705_528_587_072e21;
const EN_UP: f64 = 5.184_705_528_587_073e21;
const_assert!(EN_DOWN < EN_UP);
/// Below this, `exp(w̃)` alone starts losing relative precision to
/// underflow and the offset trick takes over.
const OFFSET_THRESHOLD: f64 = -40.0;

/// Neighbourhood of zero outside of which the fast floating-point residual
/// bound is valid; inside it, the oracle path (`residual_ratio_upper_bound`)
/// is used instead.
const ORACLE_NEIGHBOURHOOD: f64 = 1e-6;

/// Whether `x` falls in a sub-domain where `δ(x, w̃)` must be computed by
/// the arbitrary-precision oracle rather than the fast floating-point
/// path (`spec.md` §4.4: "outside a small neighbourhood of the branch
/// point and of zero ... Arb-oracle one inside"). That is a neighbourhood
/// of zero shared by both branches, plus each branch's own near-branch
/// sub-domain from `approx::{w0, wm1}` — the fast path is only valid
/// where the rational/derivative machinery it depends on is valid too.
pub(crate) fn needs_oracle_path<T: LambertFloat>(x: T, is_w0: bool) -> bool {
    let xf = x.to_f64();
    if xf.abs() < ORACLE_NEIGHBOURHOOD {
        return true;
    }
    let near_branch_max = if is_w0 {
        w0::NEAR_BRANCH_MAX
    } else {
        wm1::NEAR_BRANCH_MAX
    };
    xf <= near_branch_max
}

/// `d(x)` for `W0` (`spec.md` §4.4), rounded up.
pub(crate) fn derivative_bound_w0<T: LambertFloat>(x: T) -> T {
    let xf = x.to_f64();

    if xf > 3.0 {
        return x;
    }

    if xf > 0.01 {
        let (_, ln1p_up) = rounding::ln_1p_up_down(x);
        let denom = rounding::add(T::ONE, ln1p_up, Direction::Up);
        let inv = rounding::div(T::ONE, denom, Direction::Down);
        return rounding::sub(T::ONE, inv, Direction::Up);
    }

    if xf >= -0.01 {
        let x2 = rounding::mul(x, x, Direction::Up);
        let three_x2 = rounding::mul(T::from_f64(3.0), x2, Direction::Up);
        return rounding::sub(three_x2, x, Direction::Up);
    }

    // x < -0.01: closed form in eta = sqrt(2ex + 2), constants
    // a = (2-e)/(2e), b = sqrt(2)(e-1)/e.
    let eta = (rounding::mul(T::TWO * T::E, x, Direction::Nearest) + T::TWO).sqrt_nearest();
    let a = T::from_f64((2.0 - core::f64::consts::E) / (2.0 * core::f64::consts::E));
    let b = T::from_f64(2.0_f64.sqrt() * (core::f64::consts::E - 1.0) / core::f64::consts::E);
    (T::ONE + a * eta + b * eta * eta).next_up()
}

/// `d(x)` for `W-1` (`spec.md` §4.4), rounded up.
pub(crate) fn derivative_bound_wm1<T: LambertFloat>(x: T) -> T {
    let neg_x = -x;
    let ln_neg_x = neg_x.ln_nearest();
    let two_thirds = T::from_f64(2.0 / 3.0);
    let sqrt_term = (T::from_f64(-2.0) - T::TWO * ln_neg_x).sqrt_nearest();
    let denom = (two_thirds - sqrt_term) + two_thirds * ln_neg_x;
    (T::ONE - T::ONE / denom).next_up()
}

/// The pair of directed bounds on `w̃·exp(w̃)/x`, paired by the sign of
/// `w̃` and of `x` exactly as `oracle::residual_bounds` pairs its
/// arbitrary-precision counterparts.
fn residual_ratio_bounds<T: LambertFloat>(x: T, w: T) -> (T, T) {
    let wf = w.to_f64();
    let use_offset = wf < OFFSET_THRESHOLD;
    let exp_arg = if use_offset {
        rounding::add(w, T::from_f64(OFFSET_N), Direction::Nearest)
    } else {
        w
    };
    let (exp_down, exp_up) = rounding::exp_up_down(exp_arg);

    let (num_lo, num_hi) = if wf >= 0.0 {
        (
            rounding::mul(w, exp_down, Direction::Down),
            rounding::mul(w, exp_up, Direction::Up),
        )
    } else {
        (
            rounding::mul(w, exp_up, Direction::Down),
            rounding::mul(w, exp_down, Direction::Up),
        )
    };

    let xf = x.to_f64();
    let (den_lo, den_hi) = if use_offset {
        if xf >= 0.0 {
            (
                rounding::mul(x, T::from_f64(EN_DOWN), Direction::Down),
                rounding::mul(x, T::from_f64(EN_UP), Direction::Up),
            )
        } else {
            (
                rounding::mul(x, T::from_f64(EN_UP), Direction::Down),
                rounding::mul(x, T::from_f64(EN_DOWN), Direction::Up),
            )
        }
    } else {
        (x, x)
    };

    if xf >= 0.0 {
        (
            rounding::div(num_lo, den_hi, Direction::Down),
            rounding::div(num_hi, den_lo, Direction::Up),
        )
    } else {
        (
            rounding::div(num_hi, den_lo, Direction::Down),
            rounding::div(num_lo, den_hi, Direction::Up),
        )
    }
}

/// `δ(x, w̃)` (`spec.md` §4.4): an upper bound on `|w̃·exp(w̃)/x − 1|`,
/// either from the fast floating-point path or, when `w` is in a
/// pathological neighbourhood, from the arbitrary-precision oracle path at
/// `oracle_precision` bits.
pub(crate) fn residual<T: LambertFloat>(x: T, w: T, oracle_precision: Option<usize>) -> T {
    if let Some(precision) = oracle_precision {
        return T::from_f64(oracle::residual_ratio_upper_bound(
            x.to_f64(),
            w.to_f64(),
            precision,
        ));
    }

    let (lo, hi) = residual_ratio_bounds(x, w);
    let diff_lo = rounding::sub(lo, T::ONE, Direction::Down);
    let diff_hi = rounding::sub(hi, T::ONE, Direction::Up);

    if diff_lo.to_f64() >= 0.0 {
        diff_hi
    } else if diff_hi.to_f64() <= 0.0 {
        -diff_lo
    } else {
        let neg_lo = -diff_lo;
        if neg_lo > diff_hi {
            neg_lo
        } else {
            diff_hi
        }
    }
}

/// A proven enclosure of `W(x)` around the initial guess `w`.
pub(crate) struct Bracket<T> {
    pub low: T,
    pub high: T,
}

/// Combine `d(x)` and `δ(x, w̃)` into the bracket `⟨w̃ − d·δ, w̃ + d·δ⟩`,
/// clamped to the branch side of the shared value `-1` at the branch
/// point (`spec.md` §4.4).
///
/// In the oracle-routed sub-domains (`oracle_precision.is_some()`), this
/// is additionally widened to a superset of `fallback`'s closed-form
/// bracket (`SPEC_FULL.md` §3.5, `ReferenceLambertW.cpp`'s fallback
/// brackets) — a second, independently-derived enclosure of the same
/// value consulted specifically where the fast residual bound is not
/// trusted.
pub(crate) fn construct<T: LambertFloat>(x: T, w: T, is_w0: bool, oracle_precision: Option<usize>) -> Bracket<T> {
    let d = if is_w0 {
        derivative_bound_w0(x)
    } else {
        derivative_bound_wm1(x)
    };
    let delta = residual(x, w, oracle_precision);
    let width = rounding::mul(d, delta, Direction::Up);

    let mut low = rounding::sub(w, width, Direction::Down);
    let mut high = rounding::add(w, width, Direction::Up);

    if oracle_precision.is_some() {
        let (fallback_low, fallback_high) = if is_w0 {
            fallback::w0_fallback_bracket(x)
        } else {
            fallback::wm1_fallback_bracket(x)
        };
        if fallback_low < low {
            low = fallback_low;
        }
        if fallback_high > high {
            high = fallback_high;
        }
    }

    if is_w0 {
        if high < T::NEG_ONE {
            high = T::NEG_ONE;
        }
    } else if high > T::NEG_ONE {
        high = T::NEG_ONE;
    }

    Bracket { low, high }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn w0_derivative_bound_is_trivial_envelope_for_large_x() {
        assert_eq!(derivative_bound_w0(10.0_f64), 10.0);
    }

    #[test]
    fn w0_derivative_bound_positive_branch_is_below_one() {
        let d = derivative_bound_w0(1.0_f64);
        assert!(d > 0.0 && d < 1.0);
    }

    #[test]
    fn wm1_derivative_bound_is_large_near_zero() {
        let d_near = derivative_bound_wm1(-1.0e-6_f64);
        let d_far = derivative_bound_wm1(-0.2_f64);
        assert!(d_near > d_far);
    }

    #[test]
    fn bracket_contains_initial_guess() {
        let w = 0.567_143_29_f64;
        let b = construct(1.0_f64, w, true, None);
        assert!(b.low <= w && w <= b.high);
    }
}
