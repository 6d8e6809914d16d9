//! Correctly-bracketed evaluation of the real branches of the Lambert W
//! function (`spec.md` §1).
//!
//! ```
//! let y = lambertw::w0(1.0_f64);
//! assert!(y.inf < 0.5671432904097839 && y.sup >= 0.5671432904097838);
//! ```
//!
//! [`w0`]/[`wm1`] are convenience wrappers over a thread-local
//! [`Evaluator`]; callers evaluating many points from one thread can
//! instead own an `Evaluator` directly and reuse it (mirrors `dashu`'s
//! top-level `Real`/`Decimal` aliases sitting over its generic types).

#![cfg_attr(not(feature = "std"), no_std)]

pub mod approx;
pub mod bisection;
pub mod bound;
pub mod oracle;
pub mod rounding;

mod evaluator;
mod fallback;

pub use evaluator::Evaluator;
#[cfg(feature = "stats")]
pub use bisection::Stats;
pub use lambertw_base::{AmbiguousSign, Interval, LambertFloat, Sign};

#[cfg(feature = "std")]
use std::cell::RefCell;

#[cfg(feature = "std")]
thread_local! {
    static F64_EVALUATOR: RefCell<Evaluator<f64>> = RefCell::new(Evaluator::new());
    static F32_EVALUATOR: RefCell<Evaluator<f32>> = RefCell::new(Evaluator::new());
}

/// The principal branch `W0(x)` for `f64`, via a thread-local evaluator.
#[cfg(feature = "std")]
pub fn w0(x: f64) -> Interval<f64> {
    F64_EVALUATOR.with(|e| e.borrow_mut().w0(x))
}

/// The secondary branch `W-1(x)` for `f64`, via a thread-local evaluator.
#[cfg(feature = "std")]
pub fn wm1(x: f64) -> Interval<f64> {
    F64_EVALUATOR.with(|e| e.borrow_mut().wm1(x))
}

/// The principal branch `W0(x)` for `f32`, via a thread-local evaluator.
#[cfg(feature = "std")]
pub fn w0_f32(x: f32) -> Interval<f32> {
    F32_EVALUATOR.with(|e| e.borrow_mut().w0(x))
}

/// The secondary branch `W-1(x)` for `f32`, via a thread-local evaluator.
#[cfg(feature = "std")]
pub fn wm1_f32(x: f32) -> Interval<f32> {
    F32_EVALUATOR.with(|e| e.borrow_mut().wm1(x))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_functions_agree_with_owned_evaluator() {
        let mut e = Evaluator::<f64>::new();
        assert_eq!(w0(1.0), e.w0(1.0));
        assert_eq!(wm1(-0.1), e.wm1(-0.1));
    }
}
