//! Error types and fatal-path helpers.
//!
//! Out-of-domain arguments are not errors — they produce the fixed
//! `Interval::nan()` return value. The only error this crate defines is the
//! oracle-ambiguity condition, which the design expects never to fire (see
//! the module docs on [`crate::oracle`] users in the `lambertw` crate); if
//! it does fire, it indicates that a derivative or residual bound is
//! under-tight for some input, not a transient or recoverable failure.

use core::fmt::{self, Display, Formatter};

/// Both tiers of the sign oracle returned
/// [`Inconclusive`][crate::sign::Sign::Inconclusive] for the same midpoint.
///
/// The high-precision tier is chosen (150 bits for `f64`, 70 for `f32`) to
/// strictly separate the residual from zero for every representable
/// midpoint in the valid domain; reaching this condition means the
/// coefficient tables or derivative bounds are insufficiently tight for the
/// argument named here and must be recomputed offline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbiguousSign {
    /// The argument `x` for which bisection could not be narrowed further.
    pub x: f64,
}

impl Display for AmbiguousSign {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ambiguous residual sign while bracketing Lambert W at x = {:e}",
            self.x
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AmbiguousSign {}

/// Panics reporting [`AmbiguousSign`] for `x`.
///
/// Called only after both the fast and high-precision sign-oracle tiers
/// have returned `Inconclusive` for the same bisection midpoint, or when a
/// returned bracket fails its one-ULP postcondition — both are treated as
/// fatal per the design (`spec.md` §7).
#[cold]
pub fn panic_ambiguous_sign(x: f64) -> ! {
    panic!("{}", AmbiguousSign { x })
}
