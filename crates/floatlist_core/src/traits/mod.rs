//! Core traits for fractional-index access.
//!
//! This module defines:
//! - The numeric bound shared by samples and indices (`Scalar`), satisfied
//!   by `f64`, `f32` and, with `num-dual-mode`, `Dual64`
//! - Fractional reads and writes on any sample storage (`FractionalIndex`,
//!   `FractionalIndexMut`)

pub mod sampled;
pub mod scalar;

pub use sampled::{FractionalIndex, FractionalIndexMut};
pub use scalar::Scalar;
