//! Fractional-index access for sample storage.
//!
//! Slices (and therefore `Vec<T>` and arrays through auto-deref) resolve
//! with the default [`ResolverConfig`](crate::math::resolver::ResolverConfig).
//! [`FloatList`] resolves with its own configuration.

use crate::math::resolver::IndexResolver;
use crate::sequence::FloatList;
use crate::types::ResolveError;
use super::Scalar;

/// Read access at fractional indices.
///
/// # Example
///
/// ```
/// use floatlist_core::traits::FractionalIndex;
///
/// let samples = vec![0.0_f64, 4.0, 5.0, 6.0];
/// assert!((samples.read_at(0.125).unwrap() - 0.5).abs() < 1e-12);
/// assert_eq!(samples.read_at(-1.0).unwrap(), 0.0);
/// ```
pub trait FractionalIndex<T: Scalar> {
    /// Interpolated value at `index`.
    fn read_at(&self, index: T) -> Result<T, ResolveError>;

    /// Interpolated values over the half-open range `[start, stop)`.
    fn range_at(&self, start: T, stop: T, step: T) -> Result<Vec<T>, ResolveError>;
}

/// Write access at fractional indices.
pub trait FractionalIndexMut<T: Scalar>: FractionalIndex<T> {
    /// Write `value` at `index`, spreading it over both neighbours when
    /// `index` is fractional.
    fn write_at(&mut self, index: T, value: T) -> Result<(), ResolveError>;
}

impl<T: Scalar> FractionalIndex<T> for [T] {
    fn read_at(&self, index: T) -> Result<T, ResolveError> {
        IndexResolver::default().read(self, index)
    }

    fn range_at(&self, start: T, stop: T, step: T) -> Result<Vec<T>, ResolveError> {
        IndexResolver::default().range(self, start, stop, step)
    }
}

impl<T: Scalar> FractionalIndexMut<T> for [T] {
    fn write_at(&mut self, index: T, value: T) -> Result<(), ResolveError> {
        IndexResolver::default().write(self, index, value)
    }
}

impl<T: Scalar> FractionalIndex<T> for FloatList<T> {
    fn read_at(&self, index: T) -> Result<T, ResolveError> {
        self.read(index)
    }

    fn range_at(&self, start: T, stop: T, step: T) -> Result<Vec<T>, ResolveError> {
        self.range(start, stop, step)
    }
}

impl<T: Scalar> FractionalIndexMut<T> for FloatList<T> {
    fn write_at(&mut self, index: T, value: T) -> Result<(), ResolveError> {
        self.write(index, value)
    }
}
