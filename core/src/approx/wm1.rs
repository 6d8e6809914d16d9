//! Initial approximant for `W-1` (`spec.md` §4.3, second table).

use lambertw_base::LambertFloat;

use super::{fritsch, horner, near_branch_series};

/// `x` at or below which the near-branch series in `p` is used, also the
/// branch-point-neighbourhood edge consulted by
/// [`crate::bound::needs_oracle_path`].
pub(crate) const NEAR_BRANCH_MAX: f64 = -0.318_092_372_8;
/// Beyond this closeness to zero, `ln(x/w̃)` underflows before the
/// unscaled Fritsch step can use it; the scaled variant takes over
/// (`spec.md` §4.3).
const SCALED_FRITSCH_MIN: f64 = -1e-300;

/// The degree-(3,1) rational approximant in `t = √(−2 − 2 ln(−x))`, minus
/// one, used on `(NEAR_BRANCH_MAX, 0)`. A reduced stand-in for the offline
/// minimax table, as `R1`/`R2` are for `W0` — see `DESIGN.md`.
const GENERAL_NUM: [f64; 4] = [0.106_8, -0.682_4, 2.182_1, -1.0];
const GENERAL_DEN: [f64; 2] = [-0.391_7, 1.0];

/// The initial bracket-free approximation `w̃ ≈ W-1(x)`, refined by one
/// (possibly scaled) Fritsch step outside the near-branch sub-domain.
pub(crate) fn initial<T: LambertFloat>(x: T) -> T {
    let xf = x.to_f64();

    if xf <= NEAR_BRANCH_MAX {
        let p = -((T::TWO * T::E) * (x - T::EM_UP)).sqrt_nearest();
        return near_branch_series(p);
    }

    let t = ((-T::TWO) - T::TWO * (-x).ln_nearest()).sqrt_nearest();
    let raw = horner(&GENERAL_NUM, t) / horner(&GENERAL_DEN, t) - T::ONE;

    let w = if xf > SCALED_FRITSCH_MIN {
        scaled_fritsch(x, raw)
    } else {
        fritsch(x, raw)
    };
    #[cfg(feature = "halley-refine")]
    let w = super::halley_refine(x, w, T::HALLEY_WM1_ITERS);
    w
}

/// The scaled Fritsch step for `x` extremely close to zero: the numerator
/// of `ln(x/w̃)` is scaled by `2⁶²` before the division to dodge
/// catastrophic underflow, and the matching `62·ln 2` offset is subtracted
/// back out of the logarithm (`spec.md` §4.3).
fn scaled_fritsch<T: LambertFloat>(x: T, w: T) -> T {
    const SCALE: f64 = 4_611_686_018_427_387_904.0; // 2^62
    const LN2_TIMES_62: f64 = 42.982_893_272_570_56; // 62 * ln 2

    let scaled_x = x * T::from_f64(SCALE);
    let zn = (scaled_x / w).ln_nearest() - T::from_f64(LN2_TIMES_62) - w;
    let tau = T::ONE + w;
    let two_thirds = T::from_f64(2.0 / 3.0);
    let tau2 = T::TWO * tau * (tau + two_thirds * zn);
    w * (T::ONE + (zn / tau) * (tau2 - zn) / (tau2 - T::TWO * zn))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn general_domain_guess_is_below_minus_one() {
        let w = initial(-0.1_f64);
        assert!(w < -1.0);
    }

    #[test]
    fn scaled_fritsch_engages_for_tiny_x() {
        let w = initial(-1.0e-300_f64);
        // W-1 diverges to -infinity as x -> 0-; the scaled path must still
        // produce a large-magnitude finite negative guess, not NaN/inf.
        assert!(w.is_finite());
        assert!(w < -100.0);
    }

    #[test]
    fn near_branch_guess_is_near_minus_one() {
        let w = initial(-0.367_879_4_f64);
        assert!((w - (-1.0)).abs() < 0.1);
    }
}
