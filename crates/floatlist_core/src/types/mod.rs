//! Core error and scalar types.
//!
//! This module provides:
//! - `error`: Structured error types for fractional-index resolution
//! - `dual`: Dual number alias for automatic differentiation (`num-dual-mode` feature)
//!
//! # Re-exports
//!
//! For convenience, [`ResolveError`] is re-exported at this module level.

#[cfg(feature = "num-dual-mode")]
pub mod dual;
pub mod error;

pub use error::ResolveError;
