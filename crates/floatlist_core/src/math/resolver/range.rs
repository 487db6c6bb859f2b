//! Fractional index ranges.

use crate::types::ResolveError;
use crate::traits::Scalar;
use num_traits::ToPrimitive;

/// Finite sequence of fractional indices `start + n * step`.
///
/// The element count is fixed at construction, so the range is an
/// [`ExactSizeIterator`]. Each index is computed from `n` directly rather
/// than by repeated addition, which keeps long ranges free of accumulated
/// rounding drift. Cloning a range restarts it from the current position.
///
/// # Example
///
/// ```
/// use floatlist_core::math::resolver::FractionalRange;
///
/// let range = FractionalRange::new(0.0, 1.0, 0.25).unwrap();
/// assert_eq!(range.len(), 4);
/// assert_eq!(range.collect::<Vec<_>>(), vec![0.0, 0.25, 0.5, 0.75]);
///
/// // Negative steps count down towards stop
/// let down = FractionalRange::new(1.0, 0.0, -0.5).unwrap();
/// assert_eq!(down.collect::<Vec<_>>(), vec![1.0, 0.5]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FractionalRange<T> {
    start: T,
    step: T,
    front: usize,
    back: usize,
}

impl<T: Scalar> FractionalRange<T> {
    /// Half-open range over `[start, stop)` for positive steps, or
    /// `(stop, start]` for negative steps.
    ///
    /// Yields `ceil((stop - start) / step)` indices, or none when `stop`
    /// lies behind `start` relative to the step direction.
    ///
    /// # Errors
    ///
    /// * `ResolveError::InvalidStep` - `step` is zero or not finite
    /// * `ResolveError::InvalidRange` - `start` or `stop` is not finite
    /// * `ResolveError::RangeOverflow` - the count does not fit in `usize`
    pub fn new(start: T, stop: T, step: T) -> Result<Self, ResolveError> {
        let ratio = Self::validate(start, stop, step)?;
        let count = if ratio > 0.0 {
            Self::to_count(ratio.ceil())?
        } else {
            0
        };
        Ok(Self::with_count(start, step, count))
    }

    /// Closed range that also yields `stop` when it falls on the step grid.
    ///
    /// Yields `floor((stop - start) / step) + 1` indices when `stop` is
    /// reachable from `start`, otherwise none.
    ///
    /// # Example
    ///
    /// ```
    /// use floatlist_core::math::resolver::FractionalRange;
    ///
    /// let range = FractionalRange::inclusive(0.0, 1.0, 0.25).unwrap();
    /// assert_eq!(range.len(), 5);
    /// ```
    pub fn inclusive(start: T, stop: T, step: T) -> Result<Self, ResolveError> {
        let ratio = Self::validate(start, stop, step)?;
        let count = if ratio >= 0.0 {
            Self::to_count(ratio.floor())?.saturating_add(1)
        } else {
            0
        };
        Ok(Self::with_count(start, step, count))
    }

    /// First index of the range, regardless of iteration progress.
    #[inline]
    pub fn start(&self) -> T {
        self.start
    }

    /// Distance between consecutive indices.
    #[inline]
    pub fn step(&self) -> T {
        self.step
    }

    /// Index at absolute position `n` of the range.
    #[inline]
    pub fn index_at(&self, n: usize) -> T {
        self.start + self.step * T::from_usize(n)
    }

    fn with_count(start: T, step: T, count: usize) -> Self {
        Self {
            start,
            step,
            front: 0,
            back: count,
        }
    }

    /// Validates the arguments and returns `(stop - start) / step`.
    fn validate(start: T, stop: T, step: T) -> Result<f64, ResolveError> {
        if step == T::zero() || !step.is_finite() {
            return Err(ResolveError::InvalidStep { step: step.real() });
        }
        if !start.is_finite() || !stop.is_finite() {
            return Err(ResolveError::InvalidRange {
                start: start.real(),
                stop: stop.real(),
            });
        }
        Ok(((stop - start) / step).real())
    }

    fn to_count(count: f64) -> Result<usize, ResolveError> {
        ToPrimitive::to_usize(&count).ok_or(ResolveError::RangeOverflow { count })
    }
}

impl<T: Scalar> Iterator for FractionalRange<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.front >= self.back {
            return None;
        }
        let index = self.index_at(self.front);
        self.front += 1;
        Some(index)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T: Scalar> DoubleEndedIterator for FractionalRange<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.index_at(self.back))
    }
}

impl<T: Scalar> ExactSizeIterator for FractionalRange<T> {}

impl<T: Scalar> std::iter::FusedIterator for FractionalRange<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ========================================
    // Construction Tests
    // ========================================

    #[test]
    fn test_half_open_count() {
        assert_eq!(FractionalRange::new(0.0, 1.0, 0.2).unwrap().len(), 5);
        assert_eq!(FractionalRange::new(0.0, 1.0, 0.3).unwrap().len(), 4);
        assert_eq!(FractionalRange::new(0.0, 3.0, 1.0).unwrap().len(), 3);
    }

    #[test]
    fn test_half_open_excludes_stop() {
        let indices: Vec<f64> = FractionalRange::new(0.0, 2.0, 0.5).unwrap().collect();
        assert_eq!(indices, vec![0.0, 0.5, 1.0, 1.5]);
    }

    #[test]
    fn test_negative_step() {
        let indices: Vec<f64> = FractionalRange::new(2.0, 0.0, -0.5).unwrap().collect();
        assert_eq!(indices, vec![2.0, 1.5, 1.0, 0.5]);
    }

    #[test]
    fn test_empty_when_stop_behind_start() {
        assert_eq!(FractionalRange::new(1.0, 0.0, 0.5).unwrap().len(), 0);
        assert_eq!(FractionalRange::new(0.0, 1.0, -0.5).unwrap().len(), 0);
        assert_eq!(FractionalRange::new(1.0, 1.0, 0.5).unwrap().len(), 0);
    }

    #[test]
    fn test_inclusive_count() {
        let range = FractionalRange::inclusive(0.0, 1.0, 0.2).unwrap();
        assert_eq!(range.len(), 6);
        let last = range.last().unwrap();
        assert_relative_eq!(last, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_inclusive_single_point() {
        let indices: Vec<f64> = FractionalRange::inclusive(1.5, 1.5, 0.1).unwrap().collect();
        assert_eq!(indices, vec![1.5]);
    }

    #[test]
    fn test_inclusive_unreachable_stop() {
        assert_eq!(FractionalRange::inclusive(1.0, 0.0, 0.5).unwrap().len(), 0);
    }

    #[test]
    fn test_zero_step_is_error() {
        let result = FractionalRange::new(0.0, 1.0, 0.0);
        assert_eq!(result, Err(ResolveError::InvalidStep { step: 0.0 }));
        assert!(FractionalRange::inclusive(0.0, 1.0, 0.0).is_err());
    }

    #[test]
    fn test_non_finite_step_is_error() {
        assert!(matches!(
            FractionalRange::new(0.0, 1.0, f64::NAN),
            Err(ResolveError::InvalidStep { .. })
        ));
        assert!(matches!(
            FractionalRange::new(0.0, 1.0, f64::INFINITY),
            Err(ResolveError::InvalidStep { .. })
        ));
    }

    #[test]
    fn test_non_finite_bounds_are_error() {
        assert!(matches!(
            FractionalRange::new(0.0, f64::INFINITY, 1.0),
            Err(ResolveError::InvalidRange { .. })
        ));
        assert!(matches!(
            FractionalRange::new(f64::NAN, 1.0, 1.0),
            Err(ResolveError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_overflowing_count_is_error() {
        let result = FractionalRange::new(0.0, f64::MAX, f64::MIN_POSITIVE);
        assert!(matches!(result, Err(ResolveError::RangeOverflow { .. })));
    }

    // ========================================
    // Iteration Tests
    // ========================================

    #[test]
    fn test_no_accumulated_drift() {
        let range = FractionalRange::new(0.0, 1000.0, 0.1).unwrap();
        assert_eq!(range.len(), 10000);
        let last = range.last().unwrap();
        assert_relative_eq!(last, 999.9, epsilon = 1e-9);
    }

    #[test]
    fn test_clone_restarts_from_current_position() {
        let mut range = FractionalRange::new(0.0, 4.0, 1.0).unwrap();
        let snapshot = range.clone();
        range.next();
        range.next();
        assert_eq!(range.len(), 2);
        assert_eq!(snapshot.len(), 4);
        assert_eq!(snapshot.collect::<Vec<_>>(), vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_double_ended() {
        let mut range = FractionalRange::new(0.0, 2.0, 0.5).unwrap();
        assert_eq!(range.next_back(), Some(1.5));
        assert_eq!(range.next(), Some(0.0));
        assert_eq!(range.len(), 2);
        assert_eq!(range.rev().collect::<Vec<_>>(), vec![1.0, 0.5]);
    }

    #[test]
    fn test_fused() {
        let mut range = FractionalRange::new(0.0, 1.0, 1.0).unwrap();
        assert_eq!(range.next(), Some(0.0));
        assert_eq!(range.next(), None);
        assert_eq!(range.next(), None);
    }

    #[test]
    fn test_accessors() {
        let range = FractionalRange::new(0.5, 2.0, 0.25).unwrap();
        assert_eq!(range.start(), 0.5);
        assert_eq!(range.step(), 0.25);
        assert_eq!(range.index_at(2), 1.0);
    }

    #[test]
    fn test_with_f32() {
        let range = FractionalRange::new(0.0_f32, 1.0, 0.25).unwrap();
        assert_eq!(range.len(), 4);
    }
}
