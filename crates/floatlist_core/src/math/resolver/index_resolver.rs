//! Stateless fractional-index resolver over borrowed sample slices.

use super::{decompose, Decomposition, FractionalRange, ResolverConfig, SampleMode, WriteStrategy};
use crate::types::ResolveError;
use crate::traits::Scalar;

/// Interpolated index resolver.
///
/// Holds only a [`ResolverConfig`]; every operation borrows the sample
/// slice for the duration of the call. Any contiguous container of `T`
/// (`Vec<T>`, arrays, boxed slices) can be resolved against.
///
/// # Example
///
/// ```
/// use floatlist_core::math::resolver::IndexResolver;
///
/// let resolver = IndexResolver::default();
/// let mut samples = vec![0.0_f64, 4.0, 5.0, 6.0];
///
/// assert!((resolver.read(&samples, 0.125).unwrap() - 0.5).abs() < 1e-12);
///
/// resolver.write(&mut samples, 1.5, 7.0).unwrap();
/// assert!((resolver.read(&samples, 1.5).unwrap() - 7.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndexResolver {
    config: ResolverConfig,
}

impl IndexResolver {
    /// Create a resolver with the given configuration.
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    #[inline]
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Decompose `index` against a sequence of `len` elements using the
    /// configured boundary policy.
    #[inline]
    pub fn decompose<T: Scalar>(
        &self,
        index: T,
        len: usize,
    ) -> Result<Decomposition<T>, ResolveError> {
        decompose(index, len, self.config.boundary)
    }

    /// Read the value at a fractional index.
    ///
    /// Integer indices (and clamped out-of-range indices) return the stored
    /// element untouched. Fractional indices blend the two neighbours, or
    /// return the lower neighbour in [`SampleMode::Floor`].
    ///
    /// # Errors
    ///
    /// * `ResolveError::EmptySequence` - `samples` is empty
    /// * `ResolveError::NonFiniteIndex` - `index` cannot be resolved
    pub fn read<T: Scalar>(&self, samples: &[T], index: T) -> Result<T, ResolveError> {
        let d = self.decompose(index, samples.len())?;
        Ok(self.sample(samples, &d))
    }

    /// Write `value` at a fractional index.
    ///
    /// An exact decomposition replaces the single stored element. A
    /// fractional one updates both neighbours according to the configured
    /// [`WriteStrategy`]. Nothing is modified if the index fails to resolve.
    ///
    /// # Errors
    ///
    /// * `ResolveError::EmptySequence` - `samples` is empty
    /// * `ResolveError::NonFiniteIndex` - `index` cannot be resolved
    ///
    /// # Example
    ///
    /// ```
    /// use floatlist_core::math::resolver::{IndexResolver, ResolverConfig};
    ///
    /// let mut samples = vec![0.0, 4.0, 5.0, 6.0];
    /// IndexResolver::new(ResolverConfig::blend())
    ///     .write(&mut samples, 0.5, 2.0)
    ///     .unwrap();
    /// assert_eq!(samples, vec![1.0, 3.0, 5.0, 6.0]);
    /// ```
    pub fn write<T: Scalar>(
        &self,
        samples: &mut [T],
        index: T,
        value: T,
    ) -> Result<(), ResolveError> {
        let d = self.decompose(index, samples.len())?;
        self.apply_write(samples, &d, value);
        Ok(())
    }

    /// Read every index of `range`, materialised in order.
    ///
    /// # Errors
    ///
    /// * `ResolveError::EmptySequence` - `samples` is empty
    /// * `ResolveError::NonFiniteIndex` - an index cannot be resolved
    pub fn sample_range<T: Scalar>(
        &self,
        samples: &[T],
        range: FractionalRange<T>,
    ) -> Result<Vec<T>, ResolveError> {
        if samples.is_empty() {
            return Err(ResolveError::EmptySequence);
        }
        range.map(|index| self.read(samples, index)).collect()
    }

    /// Read the half-open fractional slice `start, start + step, ...` up to
    /// but excluding `stop`.
    ///
    /// # Errors
    ///
    /// Any error from [`FractionalRange::new`] or [`IndexResolver::sample_range`].
    ///
    /// # Example
    ///
    /// ```
    /// use floatlist_core::math::resolver::IndexResolver;
    ///
    /// let values = IndexResolver::default()
    ///     .range(&[0.0, 4.0, 5.0, 6.0], 0.0, 1.0, 0.25)
    ///     .unwrap();
    /// assert_eq!(values, vec![0.0, 1.0, 2.0, 3.0]);
    /// ```
    pub fn range<T: Scalar>(
        &self,
        samples: &[T],
        start: T,
        stop: T,
        step: T,
    ) -> Result<Vec<T>, ResolveError> {
        if samples.is_empty() {
            return Err(ResolveError::EmptySequence);
        }
        self.sample_range(samples, FractionalRange::new(start, stop, step)?)
    }

    /// Like [`IndexResolver::range`], but includes `stop` when it falls on
    /// the step grid.
    pub fn range_inclusive<T: Scalar>(
        &self,
        samples: &[T],
        start: T,
        stop: T,
        step: T,
    ) -> Result<Vec<T>, ResolveError> {
        if samples.is_empty() {
            return Err(ResolveError::EmptySequence);
        }
        self.sample_range(samples, FractionalRange::inclusive(start, stop, step)?)
    }

    /// Write `source(index)` at every index of `range`, in order.
    ///
    /// All source values are gathered and every index is decomposed before
    /// the first element of `samples` is modified, so an error leaves
    /// `samples` untouched.
    ///
    /// # Errors
    ///
    /// * `ResolveError::EmptySequence` - `samples` is empty
    /// * `ResolveError::NonFiniteIndex` - an index cannot be resolved
    /// * any error returned by `source`
    pub fn write_range<T, F>(
        &self,
        samples: &mut [T],
        range: FractionalRange<T>,
        mut source: F,
    ) -> Result<(), ResolveError>
    where
        T: Scalar,
        F: FnMut(T) -> Result<T, ResolveError>,
    {
        if samples.is_empty() {
            return Err(ResolveError::EmptySequence);
        }

        let len = samples.len();
        let plan = range
            .map(|index| Ok((self.decompose(index, len)?, source(index)?)))
            .collect::<Result<Vec<_>, ResolveError>>()?;

        for (d, value) in &plan {
            self.apply_write(samples, d, *value);
        }
        Ok(())
    }

    /// Returns true if `item` lies on the curve described by `samples`.
    ///
    /// In [`SampleMode::Linear`] this means some pair of adjacent samples
    /// brackets `item`, in either order. In [`SampleMode::Floor`] only
    /// stored values match. The closing segment of a wrapping boundary never
    /// needs checking: its endpoints are already joined by the chain of
    /// interior segments.
    ///
    /// # Example
    ///
    /// ```
    /// use floatlist_core::math::resolver::{IndexResolver, ResolverConfig};
    ///
    /// let samples = [0.0, 4.0, 5.0, 6.0];
    /// assert!(IndexResolver::default().contains(&samples, 2.5));
    /// assert!(!IndexResolver::default().contains(&samples, 6.5));
    /// assert!(!IndexResolver::new(ResolverConfig::floor()).contains(&samples, 2.5));
    /// ```
    pub fn contains<T: Scalar>(&self, samples: &[T], item: T) -> bool {
        match (self.config.mode, samples) {
            (SampleMode::Floor, _) | (_, [_]) => samples.iter().any(|&s| s == item),
            (SampleMode::Linear, _) => samples
                .windows(2)
                .any(|pair| pair[0].min(pair[1]) <= item && item <= pair[0].max(pair[1])),
        }
    }

    #[inline]
    fn sample<T: Scalar>(&self, samples: &[T], d: &Decomposition<T>) -> T {
        match self.config.mode {
            SampleMode::Linear => d.blend(samples),
            SampleMode::Floor => samples[d.lo],
        }
    }

    fn apply_write<T: Scalar>(&self, samples: &mut [T], d: &Decomposition<T>, value: T) {
        if d.is_exact() || self.config.mode == SampleMode::Floor {
            samples[d.lo] = value;
            return;
        }

        let lo = samples[d.lo];
        let hi = samples[d.hi];
        match self.config.write_strategy {
            WriteStrategy::Proportional => {
                let (w_lo, w_hi) = d.weights();
                let delta = value - (lo * w_lo + hi * w_hi);
                let norm = w_lo * w_lo + w_hi * w_hi;
                samples[d.lo] = lo + delta * w_lo / norm;
                samples[d.hi] = hi + delta * w_hi / norm;
            }
            WriteStrategy::Blend => {
                samples[d.lo] = value + (lo - value) * d.frac;
                samples[d.hi] = hi + (value - hi) * d.frac;
            }
        }
    }
}
