//! Property access, request parameters and attribute ordering.
//!
//! # Examples
//!
//! ```rust
//! use datatable::core::{AccessorMap, Lookup, PropertyAccessor};
//!
//! let accessor = AccessorMap::new().flag("even", |n: &i64| n % 2 == 0);
//! assert!(accessor.read(&4, "even", Lookup::Boolean).is_ok());
//! assert!(accessor.read(&4, "even", Lookup::Plain).is_err());
//! ```

pub use datatable_core::*;
