//! The tri-valued sign returned by the arbitrary-precision midpoint oracle.

use core::fmt;

/// Sign of a residual `g(m) = m·eᵐ − x`, as reported by the sign oracle.
///
/// `Inconclusive` is an internal state: a bracket-construction or bisection
/// caller that receives it from the high-precision tier must treat the call
/// as a fatal numerical error (see [`crate::error::AmbiguousSign`]). It must
/// never be returned from a public entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// The residual is definitely non-positive.
    Negative,
    /// The residual is definitely non-negative.
    Positive,
    /// The enclosure straddles zero at the requested precision.
    Inconclusive,
}

impl Sign {
    /// Whether this sign is definite (not [`Sign::Inconclusive`]).
    #[inline]
    pub const fn is_definite(self) -> bool {
        !matches!(self, Sign::Inconclusive)
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Sign::Negative => "negative",
            Sign::Positive => "positive",
            Sign::Inconclusive => "inconclusive",
        })
    }
}
