//! Filter descriptors, the filter request protocol and property binders.
//!
//! # Examples
//!
//! ```rust,no_run
//! # #[cfg(feature = "filters")]
//! use datatable::filters::{FilterPanel, FilterType, SerdeBinder};
//! ```

#[cfg(feature = "filters")]
pub use datatable_filters::*;
