//! The [`LambertFloat`] trait: the single point where the bracket engine is
//! parameterized over `f32` and `f64`.
//!
//! Mirrors the teacher corpus's generic-over-float-width traits (e.g.
//! `qu1x_lav::real::Real`): one trait, one `impl` block per primitive type,
//! all type-specific knowledge (precisions, break-points, iteration counts)
//! expressed as associated `const`s rather than duplicated free functions.

/// Per-precision constants and elementary operations needed by the bracket
/// engine, implemented for `f32` and `f64`.
///
/// All "to nearest" methods below compute the IEEE-754 round-to-nearest
/// result using the host's native operation (or `libm`, under the `libm`
/// feature, for the transcendental ones); directed rounding is layered on
/// top of these by `lambertw`'s `rounding` module using [`next_up`]/
/// [`next_down`], per `SPEC_FULL.md` §4.1.
///
/// [`next_up`]: LambertFloat::next_up
/// [`next_down`]: LambertFloat::next_down
pub trait LambertFloat:
    Copy
    + Clone
    + PartialOrd
    + PartialEq
    + core::fmt::Debug
    + core::fmt::Display
    + core::ops::Add<Output = Self>
    + core::ops::Sub<Output = Self>
    + core::ops::Mul<Output = Self>
    + core::ops::Div<Output = Self>
    + core::ops::Neg<Output = Self>
{
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;
    /// `1 + 1`.
    const TWO: Self;
    /// `-1`, the value both branches take at the branch point.
    const NEG_ONE: Self;
    /// Positive infinity.
    const INFINITY: Self;
    /// A quiet NaN.
    const NAN: Self;
    /// The largest finite value, returned as `W0(+∞).inf`.
    const MAX: Self;
    /// Euler's number.
    const E: Self;

    /// `-1/e` rounded toward `+∞` in this type: the domain boundary shared
    /// by both branches. Below this, `W0`/`Wm1` return `⟨NaN, NaN⟩`.
    const EM_UP: Self;

    /// Working precision of the fast sign-oracle tier, in bits (53 for
    /// `f64`, 24 for `f32` — the IEEE-754 equivalent).
    const ORACLE_FAST_BITS: usize;
    /// Working precision of the high-precision oracle fallback, in bits
    /// (150 for `f64`, 70 for `f32`).
    const ORACLE_HIGH_BITS: usize;

    /// Number of optional Halley refinement iterations applied to the `W0`
    /// initial bracket when `feature = "halley-refine"` is enabled.
    const HALLEY_W0_ITERS: usize;
    /// Same, for `Wm1`.
    const HALLEY_WM1_ITERS: usize;

    /// Convert a (possibly inexact) `f64` literal to this type, rounding to
    /// nearest. Used only to materialize `const`-like break-points that are
    /// shared, as `f64` literals, between the `f32` and `f64` code paths.
    fn from_f64(x: f64) -> Self;

    /// Widen to `f64`, exactly for `f32` inputs, to nearest for `f64`
    /// inputs (a no-op). Used for diagnostics and for feeding the
    /// arbitrary-precision oracle.
    fn to_f64(self) -> f64;

    /// IEEE-754 `isnan`.
    fn is_nan(self) -> bool;
    /// IEEE-754 `isinf`.
    fn is_infinite(self) -> bool;
    /// Whether the sign bit is set (true for `-0.0`).
    fn is_sign_negative(self) -> bool;

    /// The immediate successor of `self` in the direction of `+∞`.
    /// `next_up(NaN) == NaN`, `next_up(+∞) == +∞`.
    fn next_up(self) -> Self;
    /// The immediate successor of `self` in the direction of `-∞`.
    fn next_down(self) -> Self;

    /// Absolute value.
    fn abs(self) -> Self;

    /// `√self`, rounded to nearest.
    fn sqrt_nearest(self) -> Self;
    /// `eˢᵉˡᶠ`, rounded to nearest.
    fn exp_nearest(self) -> Self;
    /// `ln(self)`, rounded to nearest.
    fn ln_nearest(self) -> Self;
    /// `ln(1 + self)`, rounded to nearest, accurate for small `|self|`.
    fn ln_1p_nearest(self) -> Self;
    /// Fused `self * a + b`, rounded to nearest (a single rounding step).
    fn mul_add_nearest(self, a: Self, b: Self) -> Self;
}

macro_rules! impl_lambert_float {
    (
        $ty:ty,
        tiny = $tiny:expr, neg_tiny = $neg_tiny:expr, sign_mask = $sign_mask:expr,
        em_up = $em_up:expr, e = $e:expr,
        oracle_fast = $oracle_fast:expr, oracle_high = $oracle_high:expr,
        halley_w0 = $halley_w0:expr, halley_wm1 = $halley_wm1:expr,
        libm_sqrt = $libm_sqrt:path, libm_exp = $libm_exp:path,
        libm_ln = $libm_ln:path, libm_ln_1p = $libm_ln_1p:path,
        libm_fma = $libm_fma:path
    ) => {
        impl LambertFloat for $ty {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const TWO: Self = 2.0;
            const NEG_ONE: Self = -1.0;
            const INFINITY: Self = <$ty>::INFINITY;
            const NAN: Self = <$ty>::NAN;
            const MAX: Self = <$ty>::MAX;
            const E: Self = $e;
            const EM_UP: Self = $em_up;

            const ORACLE_FAST_BITS: usize = $oracle_fast;
            const ORACLE_HIGH_BITS: usize = $oracle_high;
            const HALLEY_W0_ITERS: usize = $halley_w0;
            const HALLEY_WM1_ITERS: usize = $halley_wm1;

            #[inline]
            fn from_f64(x: f64) -> Self {
                x as $ty
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn is_nan(self) -> bool {
                <$ty>::is_nan(self)
            }

            #[inline]
            fn is_infinite(self) -> bool {
                <$ty>::is_infinite(self)
            }

            #[inline]
            fn is_sign_negative(self) -> bool {
                <$ty>::is_sign_negative(self)
            }

            #[inline]
            fn next_up(self) -> Self {
                // Port of the standard `next_up` algorithm: walk the bit
                // pattern by one ULP toward +inf, handling the sign change
                // through zero and leaving NaN/+inf fixed.
                let bits = self.to_bits();
                if self.is_nan() || bits == Self::INFINITY.to_bits() {
                    return self;
                }
                let abs = bits & $sign_mask;
                let next_bits = if abs == 0 {
                    $tiny
                } else if bits == abs {
                    bits + 1
                } else {
                    bits - 1
                };
                Self::from_bits(next_bits)
            }

            #[inline]
            fn next_down(self) -> Self {
                let bits = self.to_bits();
                if self.is_nan() || bits == (-Self::INFINITY).to_bits() {
                    return self;
                }
                let abs = bits & $sign_mask;
                let next_bits = if abs == 0 {
                    $neg_tiny
                } else if bits == abs {
                    bits - 1
                } else {
                    bits + 1
                };
                Self::from_bits(next_bits)
            }

            #[inline]
            fn abs(self) -> Self {
                <$ty>::abs(self)
            }

            #[cfg(feature = "libm")]
            #[inline]
            fn sqrt_nearest(self) -> Self {
                $libm_sqrt(self)
            }
            #[cfg(not(feature = "libm"))]
            #[inline]
            fn sqrt_nearest(self) -> Self {
                <$ty>::sqrt(self)
            }

            #[cfg(feature = "libm")]
            #[inline]
            fn exp_nearest(self) -> Self {
                $libm_exp(self)
            }
            #[cfg(not(feature = "libm"))]
            #[inline]
            fn exp_nearest(self) -> Self {
                <$ty>::exp(self)
            }

            #[cfg(feature = "libm")]
            #[inline]
            fn ln_nearest(self) -> Self {
                $libm_ln(self)
            }
            #[cfg(not(feature = "libm"))]
            #[inline]
            fn ln_nearest(self) -> Self {
                <$ty>::ln(self)
            }

            #[cfg(feature = "libm")]
            #[inline]
            fn ln_1p_nearest(self) -> Self {
                $libm_ln_1p(self)
            }
            #[cfg(not(feature = "libm"))]
            #[inline]
            fn ln_1p_nearest(self) -> Self {
                <$ty>::ln_1p(self)
            }

            #[cfg(feature = "libm")]
            #[inline]
            fn mul_add_nearest(self, a: Self, b: Self) -> Self {
                $libm_fma(self, a, b)
            }
            #[cfg(not(feature = "libm"))]
            #[inline]
            fn mul_add_nearest(self, a: Self, b: Self) -> Self {
                <$ty>::mul_add(self, a, b)
            }
        }

    };
}

impl_lambert_float!(
    f64,
    tiny = 1u64,
    neg_tiny = 0x8000_0000_0000_0001u64,
    sign_mask = 0x7fff_ffff_ffff_ffffu64,
    em_up = -0.3678_7944_1171_4423, e = 2.718_281_828_459_045,
    oracle_fast = 53, oracle_high = 150,
    halley_w0 = 4, halley_wm1 = 3,
    libm_sqrt = libm::sqrt, libm_exp = libm::exp,
    libm_ln = libm::log, libm_ln_1p = libm::log1p,
    libm_fma = libm::fma
);

impl_lambert_float!(
    f32,
    tiny = 1u32,
    neg_tiny = 0x8000_0001u32,
    sign_mask = 0x7fff_ffffu32,
    em_up = -0.367_879_42_f32, e = 2.718_281_8_f32,
    oracle_fast = 24, oracle_high = 70,
    halley_w0 = 3, halley_wm1 = 4,
    libm_sqrt = libm::sqrtf, libm_exp = libm::expf,
    libm_ln = libm::logf, libm_ln_1p = libm::log1pf,
    libm_fma = libm::fmaf
);
