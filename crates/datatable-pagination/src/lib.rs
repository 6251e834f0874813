//! Pagination for datatable
//!
//! Two pieces:
//!
//! - [`PaginationState`]: page index and page size remembered across
//!   requests, with the fallbacks applied when a request omits or garbles
//!   them
//! - [`PageView`]: the records of the current page plus navigation numbers
//!   and links
//!
//! ## Example
//!
//! ```
//! use datatable_core::{ParameterNames, QueryParams};
//! use datatable_pagination::{PageView, PaginationState};
//!
//! let mut state = PaginationState::new(3, true);
//! let props = state.update(&QueryParams::parse("page_index=2"), &ParameterNames::default());
//!
//! let page = PageView::paginate((1..=10).collect::<Vec<_>>(), props.items_per_page, props.current_page_index);
//! assert_eq!(page.items(), &[4, 5, 6]);
//! ```

#![warn(missing_docs)]

pub mod page;
pub mod state;

pub use page::{PageLink, PageLinks, PageView};
pub use state::{PaginationProperties, PaginationState, parse_page_index};
