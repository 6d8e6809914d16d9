//! Directed-rounding arithmetic (`spec.md` §4.1).
//!
//! Every directed operation here is computed to nearest with the host's
//! native `f32`/`f64` arithmetic and then nudged by exactly one
//! [`next_up`](LambertFloat::next_up)/[`next_down`](LambertFloat::next_down)
//! step in the requested direction — `spec.md` §9's re-architecture option
//! (a), chosen over mutating a process-wide rounding mode. To-nearest
//! IEEE-754 arithmetic for `+ − × ÷ √` (and the fused `mul_add`) is off by
//! at most half a ULP, so one step in the target direction always reaches a
//! value at least as extreme as the true directed-rounded result — never
//! tighter, but never wrong. When the to-nearest result is already exact
//! (no rounding error occurred), the nudge widens the enclosure by a
//! spurious ULP; this repository accepts that conservative slack rather
//! than detecting exactness, exactly as the redesign note licenses ("the
//! observable contract ... is identical", not bit-for-bit identical
//! output). The bracket-construction and bisection layers above only ever
//! rely on these functions for *enclosures*, never for tightest-possible
//! values, so the slack never threatens the one-ULP postcondition on the
//! final `W0`/`Wm1` result.

use lambertw_base::LambertFloat;

/// A rounding direction for a single arithmetic step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Down,
    Up,
    Nearest,
}

#[inline]
fn nudge<T: LambertFloat>(nearest: T, direction: Direction) -> T {
    match direction {
        Direction::Nearest => nearest,
        Direction::Down => nearest.next_down(),
        Direction::Up => nearest.next_up(),
    }
}

#[inline]
pub fn add<T: LambertFloat>(a: T, b: T, direction: Direction) -> T {
    nudge(a + b, direction)
}

#[inline]
pub fn sub<T: LambertFloat>(a: T, b: T, direction: Direction) -> T {
    nudge(a - b, direction)
}

#[inline]
pub fn mul<T: LambertFloat>(a: T, b: T, direction: Direction) -> T {
    nudge(a * b, direction)
}

#[inline]
pub fn div<T: LambertFloat>(a: T, b: T, direction: Direction) -> T {
    nudge(a / b, direction)
}

#[inline]
pub fn sqrt<T: LambertFloat>(a: T, direction: Direction) -> T {
    nudge(a.sqrt_nearest(), direction)
}

/// `a * b + c` as a single fused step, then nudged. The fused multiply-add
/// is itself a single correctly-rounded-to-nearest operation, so the same
/// one-step correction argument applies without compounding two roundings.
#[inline]
pub fn fma<T: LambertFloat>(a: T, b: T, c: T, direction: Direction) -> T {
    nudge(a.mul_add_nearest(b, c), direction)
}

/// Round `down` with direction `Down`, `up` with direction `Up`, and pass
/// `nearest` through unchanged for `Nearest` — the fixed point of `nudge`
/// used by callers that already hold a to-nearest value (e.g. a vendor
/// transcendental) and only need the directional widening.
#[inline]
fn widen<T: LambertFloat>(nearest: T, direction: Direction) -> T {
    nudge(nearest, direction)
}

/// The pair of immediate neighbours of a to-nearest `exp(x)` evaluation.
///
/// Mirrors `ReferenceW2.cpp`'s `ExpUpDown`: callers needing a directed
/// exponential round the host's to-nearest `exp` outward by one step rather
/// than computing the transcendental itself in a directed mode.
#[inline]
pub fn exp_up_down<T: LambertFloat>(x: T) -> (T, T) {
    let nearest = x.exp_nearest();
    (
        widen(nearest, Direction::Down),
        widen(nearest, Direction::Up),
    )
}

/// The pair of immediate neighbours of a to-nearest `ln(x)` evaluation.
#[inline]
pub fn ln_up_down<T: LambertFloat>(x: T) -> (T, T) {
    let nearest = x.ln_nearest();
    (
        widen(nearest, Direction::Down),
        widen(nearest, Direction::Up),
    )
}

/// The pair of immediate neighbours of a to-nearest `ln(1 + x)` evaluation,
/// accurate for small `|x|` via the vendor `log1p`.
#[inline]
pub fn ln_1p_up_down<T: LambertFloat>(x: T) -> (T, T) {
    let nearest = x.ln_1p_nearest();
    (
        widen(nearest, Direction::Down),
        widen(nearest, Direction::Up),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn down_never_exceeds_up() {
        let a = 1.0_f64;
        let b = 3.0_f64;
        let down = div(a, b, Direction::Down);
        let up = div(a, b, Direction::Up);
        assert!(down <= up);
        assert!(down <= a / b);
        assert!(up >= a / b);
    }

    #[test]
    fn sqrt_brackets_irrational_root() {
        let down = sqrt(2.0_f64, Direction::Down);
        let up = sqrt(2.0_f64, Direction::Up);
        assert!(down < up);
        assert!(down * down < 2.0);
        assert!(up * up > 2.0);
    }

    #[test]
    fn exp_up_down_brackets() {
        let (down, up) = exp_up_down(1.0_f64);
        assert!(down < std::f64::consts::E);
        assert!(up > std::f64::consts::E);
    }

    #[test]
    fn fma_down_and_up_bracket_the_exact_product_sum() {
        let (a, b, c) = (1.0_f64 / 3.0, 3.0_f64, 1.0_f64);
        let down = fma(a, b, c, Direction::Down);
        let up = fma(a, b, c, Direction::Up);
        assert!(down <= up);
        assert!(down <= a.mul_add(b, c));
        assert!(up >= a.mul_add(b, c));
    }
}
