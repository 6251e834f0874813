//! # Datatable
//!
//! A request-driven engine that turns an in-memory collection of records into
//! a filtered, sorted and paginated page for display.
//!
//! Callers declare columns and filters once per table; the engine then reads
//! every inbound request and keeps the current filter values, sort and page
//! position between requests.
//!
//! ## Feature Flags
//!
//! - `full` (default) - Everything below
//! - `tables` - The table engine ([`tables::DataTableManager`])
//! - `filters` - Filter descriptors, request protocol and binders
//! - `pagination` - Pagination state and page views
//! - `conf` - TOML/JSON settings
//!
//! ## Quick Example
//!
//! ```rust
//! # #[cfg(feature = "tables")]
//! # {
//! use datatable::prelude::*;
//!
//! #[derive(Debug, Clone)]
//! struct User {
//!     id: i64,
//!     active: bool,
//! }
//!
//! let accessor = AccessorMap::new()
//!     .getter("id", |u: &User| u.id)
//!     .flag("active", |u: &User| u.active);
//!
//! let mut table = DataTableManager::new("/users", "/users/filter", 2, true, accessor);
//! table.add_column("user.id", "id", true);
//! table.add_filter(FilterType::Boolean, "active", "user.active");
//!
//! let users: Vec<User> = (1..=5).map(|id| User { id, active: id % 2 == 1 }).collect();
//!
//! let request = QueryParams::parse("filter_panel_updateFilters=true&filter_panel_active=true");
//! table.filter_sort_and_paginate(&request, users.clone());
//! assert_eq!(table.items().iter().map(|u| u.id).collect::<Vec<_>>(), [1, 3]);
//!
//! table.filter_sort_and_paginate(&QueryParams::parse("page_index=2"), users);
//! assert_eq!(table.items().iter().map(|u| u.id).collect::<Vec<_>>(), [5]);
//! # }
//! ```

#![warn(missing_docs)]

pub mod conf;
pub mod core;
pub mod filters;
pub mod pagination;
pub mod tables;

pub use datatable_core::{AccessError, AccessorMap, AttrValue, Lookup, PropertyAccessor, QueryParams, RequestParams};

#[cfg(feature = "conf")]
pub use datatable_conf::{DataTableSettings, SettingsError};

#[cfg(feature = "filters")]
pub use datatable_filters::{
	BindError, DataTableFilter, FieldBinder, FilterMode, FilterPanel, FilterType, PropertyBinder, ReferenceList,
	SerdeBinder,
};

#[cfg(feature = "pagination")]
pub use datatable_pagination::{PageLinks, PageView, PaginationProperties};

#[cfg(feature = "tables")]
pub use datatable_tables::{ColumnType, DataTableColumn, DataTableManager, DataTableSort};

/// Common imports
///
/// ```rust
/// use datatable::prelude::*;
/// ```
pub mod prelude {
	pub use crate::{AccessError, AccessorMap, AttrValue, Lookup, PropertyAccessor, QueryParams, RequestParams};

	#[cfg(feature = "conf")]
	pub use crate::DataTableSettings;

	#[cfg(feature = "filters")]
	pub use crate::{FieldBinder, FilterPanel, FilterType, PropertyBinder, ReferenceList, SerdeBinder};

	#[cfg(feature = "pagination")]
	pub use crate::{PageView, PaginationProperties};

	#[cfg(feature = "tables")]
	pub use crate::{DataTableManager, DataTableSort};
}
