//! Closed-form fallback brackets ported from `ReferenceLambertW.cpp`
//! (`SPEC_FULL.md` §3.5), independent of the rational-approximant initial
//! guess in [`crate::approx`].
//!
//! [`crate::bound::construct`] widens its derivative/residual-bound
//! enclosure with these in the oracle-routed sub-domains — near the
//! branch point and near zero, where the fast floating-point residual
//! bound is not trusted and the arbitrary-precision oracle is used
//! instead. Widening rather than intersecting keeps the combination safe
//! even if one of the two independently-derived enclosures turns out
//! looser than the other: the result can only ever grow to remain a
//! superset of both, never shrink past a value either one actually
//! proved.

use lambertw_base::LambertFloat;

use crate::rounding::{self, Direction};

/// `ReferenceW0`'s three-way case split for a coarse `W0` fallback
/// bracket, paired with `log1p(x)` rounded up as the bracket's high side
/// throughout, exactly as `ReferenceLambertW.cpp::ReferenceW0` computes
/// it.
pub(crate) fn w0_fallback_bracket<T: LambertFloat>(x: T) -> (T, T) {
    let xf = x.to_f64();

    let mut low = if xf > 3.0 {
        let ln_x = x.ln_nearest();
        rounding::sub(ln_x, ln_x.ln_nearest(), Direction::Down)
    } else if xf >= 0.0 {
        rounding::div(x, x + T::ONE, Direction::Down)
    } else {
        let five_x = rounding::mul(T::from_f64(5.0), x, Direction::Up);
        rounding::mul(x, T::ONE - five_x, Direction::Down)
    };
    if low < T::NEG_ONE {
        low = T::NEG_ONE;
    }

    let (_, high) = rounding::ln_1p_up_down(x);
    (low, high)
}

/// Chatzigeorgiou's bound for a coarse `W-1` fallback bracket, exactly as
/// `ReferenceLambertW.cpp::ReferenceWm1` computes it: `u = −1 − ln(−x)`
/// rounded in each direction, `low = −1 − (√(2u) + u)`,
/// `high = −1 − (√(2u) + 2u/3)`.
pub(crate) fn wm1_fallback_bracket<T: LambertFloat>(x: T) -> (T, T) {
    let neg_x = -x;
    let (ln_down, ln_up) = rounding::ln_up_down(neg_x);
    let u_up = rounding::sub(T::NEG_ONE, ln_down, Direction::Up);
    let u_down = rounding::sub(T::NEG_ONE, ln_up, Direction::Down);

    let sqrt_2u_hi = rounding::sqrt(rounding::mul(T::TWO, u_up, Direction::Up), Direction::Up);
    let low = rounding::sub(
        T::NEG_ONE,
        rounding::add(sqrt_2u_hi, u_up, Direction::Up),
        Direction::Down,
    );

    let sqrt_2u_lo = rounding::sqrt(rounding::mul(T::TWO, u_down, Direction::Down), Direction::Down);
    let two_thirds_u = rounding::mul(T::from_f64(2.0 / 3.0), u_down, Direction::Down);
    let high = rounding::sub(
        T::NEG_ONE,
        rounding::add(sqrt_2u_lo, two_thirds_u, Direction::Down),
        Direction::Up,
    );

    (low, high)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn w0_fallback_bracket_contains_the_omega_constant() {
        let (low, high) = w0_fallback_bracket(1.0_f64);
        assert!(low <= 0.567_143_290_409_783_8);
        assert!(high >= 0.567_143_290_409_783_8);
    }

    #[test]
    fn w0_fallback_bracket_clamps_above_minus_one_for_negative_x() {
        let (low, _high) = w0_fallback_bracket(-0.2_f64);
        assert!(low >= -1.0);
    }

    #[test]
    fn wm1_fallback_bracket_contains_the_reference_value() {
        let (low, high) = wm1_fallback_bracket(-0.1_f64);
        assert!(low <= -3.577_152_063_957_2);
        assert!(high >= -3.577_152_063_957_2);
    }
}
