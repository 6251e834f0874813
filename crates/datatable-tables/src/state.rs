//! Per-table state

use crate::sort::SortState;
use datatable_pagination::PaginationState;

/// Sort and pagination state of one table
///
/// Filter values live on the table's filter panel. The state is created with
/// the engine, read and rewritten by every request, and never shared between
/// tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
	sort: SortState,
	pagination: PaginationState,
}

impl TableState {
	/// Creates the state of a table with no request seen yet
	pub fn new(default_items_per_page: usize, enable_paginator: bool) -> Self {
		Self {
			sort: SortState::new(),
			pagination: PaginationState::new(default_items_per_page, enable_paginator),
		}
	}

	/// Current sort
	pub fn sort(&self) -> &SortState {
		&self.sort
	}

	/// Current sort, for updating
	pub fn sort_mut(&mut self) -> &mut SortState {
		&mut self.sort
	}

	/// Current page position and size
	pub fn pagination(&self) -> &PaginationState {
		&self.pagination
	}

	/// Current page position and size, for updating
	pub fn pagination_mut(&mut self) -> &mut PaginationState {
		&mut self.pagination
	}
}
