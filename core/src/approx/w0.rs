//! Initial approximant for `W0` (`spec.md` §4.3, first table).

use lambertw_base::LambertFloat;

use super::{fritsch, horner, near_branch_series};

/// `x` at or below which the near-branch series in `p` is used, also the
/// branch-point-neighbourhood edge consulted by
/// [`crate::bound::needs_oracle_path`].
pub(crate) const NEAR_BRANCH_MAX: f64 = -0.28;
/// `x` at or above which the large-`x` rational in `ln x` is used.
const LARGE_MIN: f64 = 7.34;
/// Below this magnitude, `W0(x) ≈ x` to within the working precision and
/// the rational/series machinery is skipped entirely (`spec.md` §4.3).
const NEAR_ZERO_MAX: f64 = 1e-4;

/// `R1(x)`, the degree-(4,4) rational approximant to `W0(x)/x` used on
/// `(NEAR_BRANCH_MAX, LARGE_MIN)`. Highest degree first; `R1(0) = 1` so the
/// approximant reproduces `W0(x) ~ x` as `x → 0`. A reduced stand-in for
/// the offline minimax table `spec.md` §9 leaves out of scope — see
/// `DESIGN.md`; the single Fritsch step below recovers full working
/// precision regardless of how coarse this starting point is.
const R1_NUM: [f64; 5] = [0.024_87, -0.306_6, 1.424_8, -1.745_4, 1.0];
const R1_DEN: [f64; 5] = [0.008_372, -0.139_06, 0.879_42, -1.745_4, 1.0];

/// `R2(t)`, the degree-(4,3) rational approximant in `t = ln x`, valid on
/// `x ≥ LARGE_MIN`, shaped after the classical asymptotic expansion
/// `w ~ t - ln t + ln t / t` for large `x` with `t = ln x`.
const R2_NUM: [f64; 5] = [0.093_3, -0.565_2, 1.318_4, -1.811_8, 1.0];
const R2_DEN: [f64; 4] = [0.076_1, -0.314_7, 0.688_9, 1.0];

/// The initial bracket-free approximation `w̃ ≈ W0(x)`, refined by one
/// Fritsch step outside the near-branch and near-zero sub-domains.
pub(crate) fn initial<T: LambertFloat>(x: T) -> T {
    let xf = x.to_f64();

    if xf.abs() < NEAR_ZERO_MAX {
        return x;
    }

    if xf <= NEAR_BRANCH_MAX {
        let p = (T::TWO * T::E * (x - T::EM_UP)).sqrt_nearest();
        return near_branch_series(p);
    }

    let raw = if xf >= LARGE_MIN {
        let t = x.ln_nearest();
        t * (horner(&R2_NUM, t) / horner(&R2_DEN, t))
    } else {
        x * (horner(&R1_NUM, x) / horner(&R1_DEN, x))
    };
    let w = fritsch(x, raw);
    #[cfg(feature = "halley-refine")]
    let w = super::halley_refine(x, w, T::HALLEY_W0_ITERS);
    w
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn near_zero_is_identity() {
        let x = 1.0e-6_f64;
        assert_eq!(initial(x), x);
    }

    #[test]
    fn omega_constant_in_the_right_neighbourhood() {
        let w = initial(1.0_f64);
        // Loose sanity bound: the Fritsch-refined guess should already be
        // within a few parts in 1e3 of the Omega constant even with the
        // reduced rational table above.
        assert!((w - 0.567_143_290_409_783_8).abs() < 1e-3);
    }

    #[test]
    fn large_x_guess_is_positive_and_increasing() {
        let w10 = initial(10.0_f64);
        let w1000 = initial(1000.0_f64);
        assert!(w10 > 0.0);
        assert!(w1000 > w10);
    }
}
