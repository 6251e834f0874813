//! Pagination state and page views.
//!
//! # Examples
//!
//! ```rust
//! # #[cfg(feature = "pagination")]
//! # {
//! use datatable::pagination::PageView;
//!
//! let page = PageView::paginate(vec!['a', 'b', 'c'], 2, 2);
//! assert_eq!(page.items(), &['c']);
//! # }
//! ```

#[cfg(feature = "pagination")]
pub use datatable_pagination::*;
