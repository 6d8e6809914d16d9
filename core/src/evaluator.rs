//! Public entry points (`spec.md` §4.6).

use lambertw_base::{Interval, LambertFloat, Sign};

use crate::approx;
use crate::bisection;
#[cfg(feature = "stats")]
use crate::bisection::Stats;
use crate::bound;
use crate::oracle;

/// Evaluates both real branches of Lambert W for one floating-point type.
///
/// Carries no per-call scratch of its own — unlike the teacher's MPFR-era
/// ancestor, `dashu_float::FBig` is a value type, so the oracle allocates
/// fresh operands per call (`oracle` module docs) and there is nothing
/// long-lived to own here beyond the optional bisection statistics. An
/// `Evaluator` is therefore `Copy`-able and cheap to construct; it exists
/// mainly to carry `stats()` when `feature = "stats"` is enabled, and to
/// give the generic algorithm a named home mirroring `spec.md` §6's
/// `evaluator.W0(x)` / `evaluator.Wm1(x)` API.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<T: LambertFloat> {
    #[cfg(feature = "stats")]
    stats: Stats,
    _marker: core::marker::PhantomData<T>,
}

impl<T: LambertFloat> Default for Evaluator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: LambertFloat> Evaluator<T> {
    pub fn new() -> Self {
        Self {
            #[cfg(feature = "stats")]
            stats: Stats::default(),
            _marker: core::marker::PhantomData,
        }
    }

    /// Bisection-step and fast-tier-inconclusive counters accumulated
    /// across every call made through this evaluator so far
    /// (`spec.md` §4.2's testable "this ratio" property).
    #[cfg(feature = "stats")]
    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// `MidpointSign(x, m, high_prec)`, exposed so test code can reuse the
    /// production oracle directly (`spec.md` §6).
    pub fn mid_sign(&self, x: T, m: T, high_prec: bool) -> Sign {
        let precision = if high_prec {
            T::ORACLE_HIGH_BITS
        } else {
            T::ORACLE_FAST_BITS
        };
        oracle::midpoint_sign(x.to_f64(), m.to_f64(), precision)
    }

    /// The principal branch, on `[-1/e, +∞)`.
    pub fn w0(&mut self, x: T) -> Interval<T> {
        if x.is_nan() || x < T::EM_UP {
            return Interval::nan();
        }
        if x.is_infinite() {
            return Interval { inf: T::MAX, sup: T::INFINITY };
        }
        if x == T::ZERO {
            return Interval::exact(T::ZERO);
        }

        let w = approx::w0::initial(x);
        let oracle_precision = bound::needs_oracle_path(x, true).then_some(T::ORACLE_HIGH_BITS);
        let bracket = bound::construct(x, w, true, oracle_precision);

        #[cfg(feature = "stats")]
        let (low, high) = bisection::bisect(x, bracket.low, bracket.high, true, &mut self.stats);
        #[cfg(not(feature = "stats"))]
        let (low, high) = bisection::bisect(x, bracket.low, bracket.high, true);

        Interval { inf: low, sup: high }
    }

    /// The secondary branch, on `[-1/e, 0)`.
    pub fn wm1(&mut self, x: T) -> Interval<T> {
        if x.is_nan() || x < T::EM_UP || x >= T::ZERO {
            return Interval::nan();
        }

        let w = approx::wm1::initial(x);
        let oracle_precision = bound::needs_oracle_path(x, false).then_some(T::ORACLE_HIGH_BITS);
        let bracket = bound::construct(x, w, false, oracle_precision);

        #[cfg(feature = "stats")]
        let (low, high) = bisection::bisect(x, bracket.low, bracket.high, false, &mut self.stats);
        #[cfg(not(feature = "stats"))]
        let (low, high) = bisection::bisect(x, bracket.low, bracket.high, false);

        Interval { inf: low, sup: high }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn w0_domain_boundaries() {
        let mut e = Evaluator::<f64>::new();
        assert!(e.w0(f64::NEG_INFINITY).is_nan());
        assert!(e.w0(-1.0).is_nan()); // below -1/e
        assert_eq!(e.w0(0.0), Interval::exact(0.0));
        let top = e.w0(f64::INFINITY);
        assert_eq!(top.inf, f64::MAX);
        assert_eq!(top.sup, f64::INFINITY);
    }

    #[test]
    fn wm1_domain_boundaries() {
        let mut e = Evaluator::<f64>::new();
        assert!(e.wm1(0.0).is_nan());
        assert!(e.wm1(1.0).is_nan());
        assert!(e.wm1(-1.0).is_nan()); // below -1/e
    }

    #[test]
    fn w0_omega_constant_one_ulp() {
        let mut e = Evaluator::<f64>::new();
        let y = e.w0(1.0);
        assert!(y.inf <= 0.567_143_290_409_783_8);
        assert!(y.sup >= 0.567_143_290_409_783_8);
        assert!(y.sup == y.inf || y.sup == y.inf.next_up());
    }

    #[test]
    fn wm1_minus_one_tenth() {
        let mut e = Evaluator::<f64>::new();
        let y = e.wm1(-0.1);
        assert!(y.inf < -3.577 && y.sup > -3.578);
    }
}
