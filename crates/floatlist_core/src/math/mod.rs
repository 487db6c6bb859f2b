//! Numerical algorithms for fractional-index access.
//!
//! - [`resolver`]: Index decomposition, interpolated reads, redistributed
//!   writes and fractional ranges

pub mod resolver;
