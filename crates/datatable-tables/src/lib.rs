//! Request-driven data tables
//!
//! This crate ties the datatable building blocks together into
//! [`DataTableManager`], the engine behind one displayed table. Callers declare
//! columns and filters once, then hand every inbound request to the engine,
//! which keeps the current filter values, sort and page position between
//! requests.
//!
//! # Features
//!
//! - **Columns**: text, label, action, boolean and email columns
//! - **Filtering**: AND-combined filters with a reset/update/persist protocol
//! - **Sorting**: `?sorted_attribute_name=field&asc_sort=true`
//! - **Pagination**: `?page_index=N&items_per_page=M`, or pages sliced by an
//!   external source
//!
//! # Architecture
//!
//! ```mermaid
//! graph TD
//!     A[DataTableManager] --> B[Columns]
//!     A --> C[FilterPanel]
//!     A --> D[TableState]
//!     D --> E[SortState]
//!     D --> F[PaginationState]
//!     A --> G[PageView]
//!     C --> H[Filter engine]
//!     E --> I[AttributeComparator]
//!     H --> J[PropertyAccessor]
//!     I --> J
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod column;
pub mod manager;
pub mod sort;
pub mod state;

pub use column::{ColumnType, DataTableColumn};
pub use manager::DataTableManager;
pub use sort::{DataTableSort, SortState};
pub use state::TableState;
