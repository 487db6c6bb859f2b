//! Sample container with fractional-index access.

use crate::math::resolver::{Decomposition, FractionalRange, IndexResolver, ResolverConfig};
use crate::types::ResolveError;
use crate::traits::Scalar;
use std::fmt;
use std::ops::{Index, IndexMut};

/// Ordered sequence of samples readable and writable at fractional indices.
///
/// Integer positions behave like a plain `Vec<T>` through [`Index`] and
/// [`IndexMut`]. Fractional positions go through an [`IndexResolver`]
/// configured by the list's [`ResolverConfig`].
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`, `Dual64`)
///
/// # Example
///
/// ```
/// use floatlist_core::sequence::FloatList;
///
/// let mut list = FloatList::new(vec![0.0_f64, 4.0, 5.0, 6.0]);
///
/// assert_eq!(list[3], 6.0);
/// assert!((list.read(0.75).unwrap() - 3.0).abs() < 1e-12);
///
/// list.write(1.5, 10.0).unwrap();
/// assert!((list.read(1.5).unwrap() - 10.0).abs() < 1e-12);
///
/// assert_eq!(FloatList::new(vec![0.0, 4.0, 5.0, 6.0]).to_string(), "[0, 4, 5, 6]");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FloatList<T> {
    samples: Vec<T>,
    config: ResolverConfig,
}

impl<T: Scalar> FloatList<T> {
    /// Wrap `samples` with the default configuration (clamp, linear,
    /// proportional writes).
    pub fn new(samples: Vec<T>) -> Self {
        Self::with_config(samples, ResolverConfig::default())
    }

    /// Wrap `samples` with an explicit configuration.
    pub fn with_config(samples: Vec<T>, config: ResolverConfig) -> Self {
        Self { samples, config }
    }

    /// Wrap `samples` with floored, non-interpolating access.
    pub fn floor(samples: Vec<T>) -> Self {
        Self::with_config(samples, ResolverConfig::floor())
    }

    /// Returns the active configuration.
    #[inline]
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Replace the configuration. Stored samples are unchanged.
    pub fn set_config(&mut self, config: ResolverConfig) {
        self.config = config;
    }

    /// Returns the number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the list holds no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Stored samples as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.samples
    }

    /// Mutable access to the backing vector, for ordinary sequence
    /// operations such as `push`, `remove` or `extend`.
    #[inline]
    pub fn samples_mut(&mut self) -> &mut Vec<T> {
        &mut self.samples
    }

    /// Consume the list and return the backing vector.
    pub fn into_vec(self) -> Vec<T> {
        self.samples
    }

    /// Iterate over the stored samples.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.samples.iter()
    }

    /// Stored sample at integer position `position`, if in bounds.
    #[inline]
    pub fn get(&self, position: usize) -> Option<T> {
        self.samples.get(position).copied()
    }

    /// Resolve `index` onto neighbour positions without reading.
    pub fn decompose(&self, index: T) -> Result<Decomposition<T>, ResolveError> {
        self.resolver().decompose(index, self.samples.len())
    }

    /// Read the value at a fractional index.
    ///
    /// # Errors
    ///
    /// * `ResolveError::EmptySequence` - the list is empty
    /// * `ResolveError::NonFiniteIndex` - `index` cannot be resolved
    pub fn read(&self, index: T) -> Result<T, ResolveError> {
        self.resolver().read(&self.samples, index)
    }

    /// Write `value` at a fractional index.
    ///
    /// # Errors
    ///
    /// * `ResolveError::EmptySequence` - the list is empty
    /// * `ResolveError::NonFiniteIndex` - `index` cannot be resolved
    pub fn write(&mut self, index: T, value: T) -> Result<(), ResolveError> {
        let resolver = self.resolver();
        resolver.write(&mut self.samples, index, value)
    }

    /// Read the half-open fractional slice `[start, stop)` every `step`.
    ///
    /// # Example
    ///
    /// ```
    /// use floatlist_core::sequence::FloatList;
    ///
    /// let list = FloatList::new(vec![0.0, 4.0, 5.0, 6.0]);
    /// let values = list.range(0.0, 1.0, 0.2).unwrap();
    /// assert_eq!(values.len(), 5);
    /// ```
    pub fn range(&self, start: T, stop: T, step: T) -> Result<Vec<T>, ResolveError> {
        self.resolver().range(&self.samples, start, stop, step)
    }

    /// Read the closed fractional slice `[start, stop]` every `step`.
    ///
    /// # Example
    ///
    /// ```
    /// use floatlist_core::sequence::FloatList;
    ///
    /// let list = FloatList::new(vec![0.0, 4.0, 5.0, 6.0]);
    /// let values = list.range_inclusive(0.0, 1.0, 0.2).unwrap();
    /// assert_eq!(values.len(), 6);
    /// assert_eq!(values[5], 4.0);
    /// ```
    pub fn range_inclusive(&self, start: T, stop: T, step: T) -> Result<Vec<T>, ResolveError> {
        self.resolver().range_inclusive(&self.samples, start, stop, step)
    }

    /// Copy the fractional slice `[start, stop)` of `source` into this list.
    ///
    /// Each index `i` of the range receives `source.read(i)`, written with
    /// this list's own write strategy. Nothing is modified on error.
    ///
    /// # Example
    ///
    /// ```
    /// use floatlist_core::sequence::FloatList;
    ///
    /// let mut target = FloatList::new(vec![0.0; 4]);
    /// let source = FloatList::new(vec![1.0, 2.0, 3.0, 4.0]);
    /// target.write_range(1.0, 3.0, 1.0, &source).unwrap();
    /// assert_eq!(target.as_slice(), &[0.0, 2.0, 3.0, 0.0]);
    /// ```
    pub fn write_range(
        &mut self,
        start: T,
        stop: T,
        step: T,
        source: &FloatList<T>,
    ) -> Result<(), ResolveError> {
        let range = FractionalRange::new(start, stop, step)?;
        let resolver = self.resolver();
        resolver.write_range(&mut self.samples, range, |index| source.read(index))
    }

    /// Returns true if `item` lies on the sampled curve (linear mode) or is
    /// stored in the list (floor mode).
    pub fn contains(&self, item: T) -> bool {
        self.resolver().contains(&self.samples, item)
    }

    #[inline]
    fn resolver(&self) -> IndexResolver {
        IndexResolver::new(self.config)
    }
}

impl<T: Scalar> From<Vec<T>> for FloatList<T> {
    fn from(samples: Vec<T>) -> Self {
        Self::new(samples)
    }
}

impl<T: Scalar> From<FloatList<T>> for Vec<T> {
    fn from(list: FloatList<T>) -> Self {
        list.into_vec()
    }
}

impl<T: Scalar> FromIterator<T> for FloatList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a FloatList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

impl<T> AsRef<[T]> for FloatList<T> {
    fn as_ref(&self) -> &[T] {
        &self.samples
    }
}

impl<T> Index<usize> for FloatList<T> {
    type Output = T;

    #[inline]
    fn index(&self, position: usize) -> &T {
        &self.samples[position]
    }
}

impl<T> IndexMut<usize> for FloatList<T> {
    #[inline]
    fn index_mut(&mut self, position: usize) -> &mut T {
        &mut self.samples[position]
    }
}

impl<T: fmt::Display> fmt::Display for FloatList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, sample) in self.samples.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(sample, f)?;
        }
        f.write_str("]")
    }
}
