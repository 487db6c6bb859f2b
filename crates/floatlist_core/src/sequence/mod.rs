//! Sample sequence containers.
//!
//! [`FloatList`] owns a `Vec<T>` of samples and exposes both plain integer
//! access and fractional-index access through the resolver in
//! [`crate::math::resolver`].

mod float_list;

pub use float_list::FloatList;
