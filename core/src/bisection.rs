//! Certified bisection (`spec.md` §4.5).

use lambertw_base::{panic_ambiguous_sign, LambertFloat, Sign};

use crate::oracle;

/// Running counts kept by [`bisect`] when `feature = "stats"` is enabled
/// (`spec.md` §3.5 / §4.2's "statistics collection" testable property).
#[cfg(feature = "stats")]
#[derive(Debug, Clone, Copy, Default)]
pub struct Stats {
    pub steps: u32,
    pub fast_tier_inconclusive: u32,
}

/// The midpoint of `[low, high]` that never overflows: `low + (high -
/// low)/2`, which stays within the representable range of `T` even when
/// `low`/`high` are large in magnitude and of the same sign (unlike
/// `(low + high)/2`, which can overflow for `T::MAX`-adjacent bounds).
fn midpoint_safe<T: LambertFloat>(low: T, high: T) -> T {
    low + (high - low) / T::TWO
}

/// Narrow `[low, high]`, a proven bracket for `W(x)`, to one ULP.
///
/// `increasing` selects the branch's monotonicity (`true` for `W0`,
/// `false` for `W-1`): a residual `g(m) = m·eᵐ − x` that tests `Positive`
/// means `m` is on the `high` side of `W(x)` exactly when the branch is
/// increasing, and on the `low` side when it is decreasing.
pub(crate) fn bisect<T: LambertFloat>(
    x: T,
    mut low: T,
    mut high: T,
    increasing: bool,
    #[cfg(feature = "stats")] stats: &mut Stats,
) -> (T, T) {
    loop {
        if high <= low.next_up() {
            return (low, high);
        }
        let m = midpoint_safe(low, high);
        if m == low || m == high {
            return (low, high);
        }

        #[cfg(feature = "stats")]
        {
            stats.steps += 1;
        }

        let xf = x.to_f64();
        let mf = m.to_f64();
        let mut sign = oracle::midpoint_sign(xf, mf, T::ORACLE_FAST_BITS);
        if sign == Sign::Inconclusive {
            #[cfg(feature = "stats")]
            {
                stats.fast_tier_inconclusive += 1;
            }
            sign = oracle::midpoint_sign(xf, mf, T::ORACLE_HIGH_BITS);
        }

        match sign {
            Sign::Positive if increasing => high = m,
            Sign::Positive => low = m,
            Sign::Negative if increasing => low = m,
            Sign::Negative => high = m,
            Sign::Inconclusive => panic_ambiguous_sign(xf),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_never_overflows_near_max() {
        let low = f64::MAX / 2.0;
        let high = f64::MAX;
        let m = midpoint_safe(low, high);
        assert!(m.is_finite());
        assert!(low <= m && m <= high);
    }

    #[test]
    fn bisection_narrows_to_one_ulp_for_omega_constant() {
        #[cfg(feature = "stats")]
        let mut stats = Stats::default();
        let (low, high) = bisect(
            1.0_f64,
            0.5_f64,
            0.6_f64,
            true,
            #[cfg(feature = "stats")]
            &mut stats,
        );
        assert!(high <= low.next_up());
        assert!(low < 0.567_143_3 && high > 0.567_143_2);
    }
}
