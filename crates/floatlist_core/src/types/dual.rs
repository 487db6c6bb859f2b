//! Dual number type integration for automatic differentiation.
//!
//! Every resolver operation is generic over `T: Scalar`, so a
//! sequence of dual numbers propagates derivatives through reads and
//! writes. Seeding the index gives the local slope of the sampled curve;
//! seeding a sample gives its blend weight at the queried index.
//!
//! ## Usage
//!
//! ```
//! use floatlist_core::sequence::FloatList;
//! use floatlist_core::types::dual::DualNumber;
//!
//! let list: FloatList<DualNumber> = [0.0, 4.0, 5.0, 6.0]
//!     .iter()
//!     .map(|&v| DualNumber::from(v))
//!     .collect();
//!
//! // d(read)/d(index) on the segment [0, 1] is 4 - 0
//! let value = list.read(DualNumber::new(0.25, 1.0)).unwrap();
//! assert!((value.re - 1.0).abs() < 1e-12);
//! assert!((value.eps - 4.0).abs() < 1e-12);
//! ```

/// Type alias for num-dual's Dual64 (f64-based dual numbers).
///
/// - `re`: Real part (sample value)
/// - `eps`: Dual part (derivative)
pub type DualNumber = num_dual::Dual64;
