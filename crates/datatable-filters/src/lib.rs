//! Filtering for datatable
//!
//! - **Descriptors** ([`filter`]): filter kinds, values and drop-down options
//! - **Panel** ([`panel`]): the ordered filters of one table and the
//!   reset/update/persist request protocol
//! - **Engine** ([`engine`]): AND-combined matching of records
//! - **Binders** ([`binder`]): copying resolved values onto caller objects
//!
//! ## Example
//!
//! ```
//! use datatable_core::{AccessorMap, ParameterNames, QueryParams};
//! use datatable_filters::{FilterPanel, FilterType, apply_filters};
//!
//! struct Task {
//!     title: &'static str,
//!     done: bool,
//! }
//!
//! let accessor = AccessorMap::new()
//!     .getter("title", |t: &Task| t.title)
//!     .flag("done", |t: &Task| t.done);
//!
//! let mut panel = FilterPanel::new("/tasks");
//! panel.add_filter(FilterType::Boolean, "done", "Done");
//!
//! let request = QueryParams::parse("filter_panel_updateFilters=true&filter_panel_done=true");
//! panel.resolve(&request, &ParameterNames::default());
//!
//! let tasks = vec![
//!     Task { title: "write", done: true },
//!     Task { title: "review", done: false },
//! ];
//! let open = apply_filters(tasks, panel.filters(), &accessor);
//! assert_eq!(open.len(), 1);
//! assert_eq!(open[0].title, "write");
//! ```

#![warn(missing_docs)]

pub mod binder;
pub mod engine;
pub mod error;
pub mod filter;
pub mod panel;

pub use binder::{FieldBinder, PropertyBinder, SerdeBinder};
pub use engine::{FilterMatch, apply_filters, evaluate, is_blank, matches_all};
pub use error::{BindError, Result};
pub use filter::{DataTableFilter, FilterType, ReferenceItem, ReferenceList};
pub use panel::{FilterMode, FilterPanel};
