//! The table engine and its column descriptors.
//!
//! # Examples
//!
//! ```rust,no_run
//! # #[cfg(feature = "tables")]
//! use datatable::tables::{DataTableManager, DataTableSort};
//! ```

#[cfg(feature = "tables")]
pub use datatable_tables::*;
