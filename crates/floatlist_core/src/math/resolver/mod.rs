//! Interpolated index resolution over sample sequences.
//!
//! This module maps real-valued indices onto a sequence of samples. Every
//! operation is built on a single primitive, [`decompose`], which turns an
//! index into two neighbour positions and a blend weight.
//!
//! ## Components
//!
//! - [`decompose`] / [`Decomposition`]: Index to `(lo, hi, frac)`
//! - [`IndexResolver`]: Stateless read, write, range and membership over `&[T]`
//! - [`FractionalRange`]: Finite, restartable `start, start + step, ...` index sequence
//! - [`ResolverConfig`]: [`BoundaryPolicy`], [`SampleMode`] and [`WriteStrategy`]
//!
//! ## Boundary Handling
//!
//! Finite out-of-range indices are never errors. [`BoundaryPolicy::Clamp`]
//! saturates to the first or last element; [`BoundaryPolicy::Wrap`] treats
//! the sequence as periodic.
//!
//! ## AD Compatibility
//!
//! All operations are generic over [`Scalar`](crate::traits::Scalar), so they work
//! with `f32`, `f64`, and `Dual64` from num-dual.
//!
//! ## Example
//!
//! ```
//! use floatlist_core::math::resolver::{IndexResolver, ResolverConfig};
//!
//! let samples = [0.0_f64, 4.0, 5.0, 6.0];
//!
//! let clamped = IndexResolver::default();
//! assert_eq!(clamped.read(&samples, -0.5).unwrap(), 0.0);
//! assert_eq!(clamped.read(&samples, 10000.0).unwrap(), 6.0);
//!
//! let wrapped = IndexResolver::new(ResolverConfig::wrapping());
//! assert!((wrapped.read(&samples, -0.5).unwrap() - 3.0).abs() < 1e-12);
//! assert_eq!(wrapped.read(&samples, 10000.0).unwrap(), 0.0);
//! ```

mod config;
mod decompose;
mod index_resolver;
mod range;

pub use config::{BoundaryPolicy, ParsePolicyError, ResolverConfig, SampleMode, WriteStrategy};
pub use decompose::{decompose, Decomposition};
pub use index_resolver::IndexResolver;
pub use range::FractionalRange;
