//! # floatlist_core: Fractional-Index Sample Sequences
//!
//! floatlist_core provides a sequence container over real-valued samples
//! that can be read and written "between" its elements:
//! - Index resolution onto neighbour positions (`math::resolver::decompose`)
//! - Interpolated reads, redistributed writes and fractional slices
//!   (`math::resolver::IndexResolver`)
//! - The `FloatList` container (`sequence`)
//! - Storage-agnostic access traits (`traits`)
//! - Error types: `ResolveError` (`types::error`)
//!
//! ## Minimal Dependencies
//!
//! - num-traits: Traits for generic numerical computation
//! - num-dual: Dual number types and automatic differentiation (optional)
//! - thiserror: Error derivation
//! - serde: Serialisation of resolver configuration (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use floatlist_core::math::resolver::ResolverConfig;
//! use floatlist_core::sequence::FloatList;
//!
//! let mut list = FloatList::new(vec![0.0_f64, 4.0, 5.0, 6.0]);
//!
//! // Fractional reads interpolate linearly
//! assert!((list.read(0.125).unwrap() - 0.5).abs() < 1e-12);
//!
//! // Out-of-range indices clamp to the boundary elements
//! assert_eq!(list.read(-0.5).unwrap(), 0.0);
//! assert_eq!(list.read(10000.0).unwrap(), 6.0);
//!
//! // Fractional writes move both neighbours
//! list.write(0.25, 2.0).unwrap();
//! assert!((list.read(0.25).unwrap() - 2.0).abs() < 1e-12);
//!
//! // Fractional slices
//! let wave = FloatList::with_config(vec![0.0, 1.0, 0.0, -1.0], ResolverConfig::wrapping());
//! let values = wave.range(0.0, 4.0, 0.5).unwrap();
//! assert_eq!(values.len(), 8);
//! ```
//!
//! ## Feature Flags
//!
//! - `num-dual-mode` (default): Enable the `Dual64` alias and AD verification tests
//! - `serde`: Enable serialisation for `ResolverConfig` and its policies

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod sequence;
pub mod traits;
pub mod types;
