//! Settings module.
//!
//! # Examples
//!
//! ```rust,no_run
//! # #[cfg(feature = "conf")]
//! use datatable::conf::DataTableSettings;
//! ```

#[cfg(feature = "conf")]
pub use datatable_conf::*;
