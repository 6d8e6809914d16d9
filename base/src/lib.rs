//! Branch-independent primitives shared by the `lambertw` crate.
//!
//! This crate has no dependency on an arbitrary-precision backend; it only
//! defines the [`Interval`] bracket, the tri-valued [`Sign`], the
//! [`AmbiguousSign`] error, and the [`LambertFloat`] trait parameterizing
//! the bracket engine over `f32`/`f64`. The bracket *construction* itself —
//! directed rounding, the sign oracle, the rational approximants, bisection
//! — lives in the `lambertw` crate.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;
pub mod float;
pub mod interval;
pub mod sign;

pub use error::{panic_ambiguous_sign, AmbiguousSign};
pub use float::LambertFloat;
pub use interval::Interval;
pub use sign::Sign;
