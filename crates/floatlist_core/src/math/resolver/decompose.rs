//! Index decomposition: the primitive shared by every resolver operation.

use super::BoundaryPolicy;
use crate::types::ResolveError;
use crate::traits::Scalar;

/// A fractional index resolved onto integer positions.
///
/// The interpolated value at the requested index is
/// `samples[lo] * (1 - frac) + samples[hi] * frac`.
///
/// When the index lands exactly on a stored element (an integer index, or
/// an out-of-range index clamped to an end) `lo == hi` and `frac` is zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decomposition<T> {
    /// Lower neighbour position
    pub lo: usize,
    /// Upper neighbour position
    pub hi: usize,
    /// Blend weight of `hi`, in `[0, 1)`
    pub frac: T,
}

impl<T: Scalar> Decomposition<T> {
    /// Decomposition landing exactly on `position`.
    #[inline]
    pub fn exact(position: usize) -> Self {
        Self {
            lo: position,
            hi: position,
            frac: T::zero(),
        }
    }

    /// Returns true if the index maps to a single stored element.
    #[inline]
    pub fn is_exact(&self) -> bool {
        self.lo == self.hi
    }

    /// Blend weights `(1 - frac, frac)` of `lo` and `hi`.
    #[inline]
    pub fn weights(&self) -> (T, T) {
        (T::one() - self.frac, self.frac)
    }

    /// Evaluate the linear blend against `samples`.
    ///
    /// An exact decomposition returns the stored element untouched, so a
    /// neighbouring infinity or NaN never leaks into an integer read.
    ///
    /// # Panics
    ///
    /// Panics if `lo` or `hi` is out of bounds for `samples`.
    #[inline]
    pub fn blend(&self, samples: &[T]) -> T {
        if self.is_exact() {
            return samples[self.lo];
        }
        let (w_lo, w_hi) = self.weights();
        samples[self.lo] * w_lo + samples[self.hi] * w_hi
    }
}

/// Decompose `index` against a sequence of `len` elements.
///
/// # Clamp
///
/// - `index <= 0` resolves exactly to position `0`
/// - `index >= len - 1` resolves exactly to position `len - 1`
/// - otherwise `lo = floor(index)`, `hi = lo + 1`, `frac = index - lo`
///
/// # Wrap
///
/// The index is first reduced to `k` in `[0, len)`; then `lo = floor(k)`,
/// `hi = (lo + 1) % len`, so the segment past the last element blends back
/// into the first.
///
/// # Errors
///
/// * `ResolveError::EmptySequence` - `len == 0`
/// * `ResolveError::NonFiniteIndex` - `index` is NaN, or infinite under `Wrap`
///
/// # Example
///
/// ```
/// use floatlist_core::math::resolver::{decompose, BoundaryPolicy, Decomposition};
///
/// let d = decompose(0.75_f64, 4, BoundaryPolicy::Clamp).unwrap();
/// assert_eq!((d.lo, d.hi, d.frac), (0, 1, 0.75));
///
/// // Beyond the last element saturates
/// assert_eq!(decompose(10.0_f64, 4, BoundaryPolicy::Clamp).unwrap(), Decomposition::exact(3));
///
/// // Negative indices wrap around from the end
/// let d = decompose(-0.5_f64, 4, BoundaryPolicy::Wrap).unwrap();
/// assert_eq!((d.lo, d.hi, d.frac), (3, 0, 0.5));
/// ```
pub fn decompose<T: Scalar>(
    index: T,
    len: usize,
    policy: BoundaryPolicy,
) -> Result<Decomposition<T>, ResolveError> {
    if len == 0 {
        return Err(ResolveError::EmptySequence);
    }
    if index.is_nan() {
        return Err(non_finite(index));
    }

    match policy {
        BoundaryPolicy::Clamp => Ok(decompose_clamped(index, len)),
        BoundaryPolicy::Wrap => decompose_wrapped(index, len),
    }
}

fn decompose_clamped<T: Scalar>(index: T, len: usize) -> Decomposition<T> {
    let last = len - 1;
    if index <= T::zero() {
        return Decomposition::exact(0);
    }
    if index >= T::from_usize(last) {
        return Decomposition::exact(last);
    }

    // 0 < index < last: truncation is the floor and a valid lower neighbour
    let lo = index.to_usize().unwrap_or(0).min(last - 1);
    split(lo, lo + 1, index - T::from_usize(lo))
}

fn decompose_wrapped<T: Scalar>(index: T, len: usize) -> Result<Decomposition<T>, ResolveError> {
    if !index.is_finite() {
        return Err(non_finite(index));
    }

    // k = index mod len, taken in [0, len) for negative indices too
    let n = T::from_usize(len);
    let periods = (index / n).real().floor();
    let mut k = index - n * T::from_real(periods);
    if k < T::zero() {
        k = k + n;
    }
    // Rounding can leave k at exactly n, or anywhere once the index is
    // beyond the precision of T
    if k >= n || k < T::zero() {
        k = T::zero();
    }

    let lo = k.to_usize().unwrap_or(0).min(len - 1);
    Ok(split(lo, (lo + 1) % len, k - T::from_usize(lo)))
}

#[inline]
fn split<T: Scalar>(lo: usize, hi: usize, frac: T) -> Decomposition<T> {
    if frac == T::zero() || lo == hi {
        Decomposition::exact(lo)
    } else {
        Decomposition { lo, hi, frac }
    }
}

fn non_finite<T: Scalar>(index: T) -> ResolveError {
    ResolveError::NonFiniteIndex {
        index: index.real(),
    }
}
