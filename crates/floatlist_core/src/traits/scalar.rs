//! Scalar bound for sample values and fractional indices.
//!
//! `num_traits::Float` is too strong for automatic differentiation: num-dual's
//! `Dual64` has no `Float` impl. [`Scalar`] asks only for field arithmetic,
//! ordering and a real part, which both plain floats and dual numbers
//! provide. Comparisons on dual numbers use the real part, so a dual
//! computation takes the same branches as the equivalent `f64` one.

use num_traits::{Num, ToPrimitive};
use std::fmt::Debug;
use std::ops::Neg;

/// Numeric type usable as a sample value and as a fractional index.
///
/// Implementors supply [`real`](Scalar::real) and
/// [`from_real`](Scalar::from_real); everything else is derived from them.
///
/// # Examples
///
/// ```
/// use floatlist_core::traits::Scalar;
///
/// fn midpoint<T: Scalar>(a: T, b: T) -> T {
///     (a + b) / (T::one() + T::one())
/// }
///
/// assert_eq!(midpoint(4.0_f64, 5.0), 4.5);
/// assert_eq!(f32::from_usize(3), 3.0);
/// assert_eq!(2.75_f64.to_usize(), Some(2));
/// ```
pub trait Scalar: Num + Copy + PartialOrd + Neg<Output = Self> + Debug {
    /// Real part as `f64`.
    fn real(self) -> f64;

    /// Constant with real part `value` (zero derivative for dual numbers).
    fn from_real(value: f64) -> Self;

    /// Returns true if the real part is NaN.
    #[inline]
    fn is_nan(self) -> bool {
        self.real().is_nan()
    }

    /// Returns true if the real part is neither infinite nor NaN.
    #[inline]
    fn is_finite(self) -> bool {
        self.real().is_finite()
    }

    /// Position `n` as a scalar.
    #[inline]
    fn from_usize(n: usize) -> Self {
        Self::from_real(n as f64)
    }

    /// Real part truncated toward zero, if it is a valid position.
    #[inline]
    fn to_usize(self) -> Option<usize> {
        ToPrimitive::to_usize(&self.real())
    }

    /// Smaller of two values by real part.
    #[inline]
    fn min(self, other: Self) -> Self {
        if other < self {
            other
        } else {
            self
        }
    }

    /// Larger of two values by real part.
    #[inline]
    fn max(self, other: Self) -> Self {
        if other > self {
            other
        } else {
            self
        }
    }
}

impl Scalar for f64 {
    #[inline]
    fn real(self) -> f64 {
        self
    }

    #[inline]
    fn from_real(value: f64) -> Self {
        value
    }
}

impl Scalar for f32 {
    #[inline]
    fn real(self) -> f64 {
        f64::from(self)
    }

    #[inline]
    fn from_real(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn from_usize(n: usize) -> Self {
        n as f32
    }
}

#[cfg(feature = "num-dual-mode")]
impl Scalar for num_dual::Dual64 {
    #[inline]
    fn real(self) -> f64 {
        self.re
    }

    #[inline]
    fn from_real(value: f64) -> Self {
        Self::from_re(value)
    }
}
