//! Pagination state carried between requests

use datatable_core::{ParameterNames, RequestParams};
use serde::{Deserialize, Serialize};

/// Pagination snapshot handed to callers that paginate externally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationProperties {
	/// Current page number (1-indexed)
	pub current_page_index: usize,
	/// Number of items per page
	pub items_per_page: usize,
}

/// Page position and size of one table
///
/// The page index is kept as the text the request carried, so an absent
/// parameter leaves whatever the previous request selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
	current_page_index: String,
	items_per_page: usize,
	default_items_per_page: usize,
	enabled: bool,
}

impl PaginationState {
	/// Creates the state of a table with no request seen yet
	///
	/// # Arguments
	///
	/// * `default_items_per_page` - Page size used until a request sets one
	/// * `enabled` - Whether the table paginates at all
	pub fn new(default_items_per_page: usize, enabled: bool) -> Self {
		Self {
			current_page_index: String::new(),
			items_per_page: 0,
			default_items_per_page,
			enabled,
		}
	}

	/// Returns true if pagination is enabled
	pub fn is_enabled(&self) -> bool {
		self.enabled
	}

	/// Stored page index text, empty until a request supplies one
	pub fn page_index_text(&self) -> &str {
		&self.current_page_index
	}

	/// Stored items per page, 0 while unset
	pub fn stored_items_per_page(&self) -> usize {
		self.items_per_page
	}

	/// Page size used when neither the request nor the state sets one
	pub fn default_items_per_page(&self) -> usize {
		self.default_items_per_page
	}

	/// Logical page number (1-indexed) derived from the stored text
	pub fn current_page(&self) -> usize {
		parse_page_index(&self.current_page_index)
	}

	/// Effective page size: the stored value, or the default while unset
	pub fn items_per_page(&self) -> usize {
		if self.items_per_page == 0 {
			self.default_items_per_page
		} else {
			self.items_per_page
		}
	}

	/// Reads page index and page size from the request and stores them
	///
	/// # Examples
	///
	/// ```
	/// use datatable_core::{ParameterNames, QueryParams};
	/// use datatable_pagination::PaginationState;
	///
	/// let names = ParameterNames::default();
	/// let mut state = PaginationState::new(10, true);
	///
	/// let props = state.update(&QueryParams::parse("page_index=3&items_per_page=5"), &names);
	/// assert_eq!(props.current_page_index, 3);
	/// assert_eq!(props.items_per_page, 5);
	///
	/// // Absent parameters keep the previous request's values
	/// let props = state.update(&QueryParams::new(), &names);
	/// assert_eq!(props.current_page_index, 3);
	/// assert_eq!(props.items_per_page, 5);
	/// ```
	pub fn update<R>(&mut self, request: &R, names: &ParameterNames) -> PaginationProperties
	where
		R: RequestParams + ?Sized,
	{
		if let Some(page_index) = request.parameter(&names.page_index) {
			self.current_page_index = page_index.to_string();
		}
		self.items_per_page = self.resolve_items_per_page(request.parameter(&names.items_per_page));
		self.properties()
	}

	/// Snapshot of the current state
	pub fn properties(&self) -> PaginationProperties {
		PaginationProperties {
			current_page_index: self.current_page(),
			items_per_page: self.items_per_page(),
		}
	}

	fn resolve_items_per_page(&self, requested: Option<&str>) -> usize {
		match requested {
			Some(raw) => match raw.trim().parse::<usize>() {
				Ok(size) if size > 0 => size,
				_ => {
					tracing::warn!(
						value = %raw,
						default = self.default_items_per_page,
						"invalid items per page, using default"
					);
					self.default_items_per_page
				}
			},
			None => self.items_per_page(),
		}
	}
}

/// Parses a 1-indexed page number
///
/// Empty text means the first page. Malformed numbers and numbers below 1
/// also resolve to the first page.
///
/// ```
/// use datatable_pagination::parse_page_index;
///
/// assert_eq!(parse_page_index(""), 1);
/// assert_eq!(parse_page_index("4"), 4);
/// assert_eq!(parse_page_index("0"), 1);
/// assert_eq!(parse_page_index("abc"), 1);
/// ```
pub fn parse_page_index(text: &str) -> usize {
	if text.is_empty() {
		return 1;
	}
	match text.trim().parse::<i64>() {
		Ok(page) if page >= 1 => usize::try_from(page).unwrap_or(1),
		_ => {
			tracing::warn!(value = %text, "invalid page index, using first page");
			1
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use datatable_core::QueryParams;
	use rstest::{fixture, rstest};

	#[fixture]
	fn names() -> ParameterNames {
		ParameterNames::default()
	}

	#[rstest]
	fn test_initial_state_uses_default(names: ParameterNames) {
		// Arrange
		let mut state = PaginationState::new(3, true);

		// Act
		let props = state.update(&QueryParams::parse("page_index="), &names);

		// Assert
		assert_eq!(props.current_page_index, 1);
		assert_eq!(props.items_per_page, 3);
		assert_eq!(state.page_index_text(), "");
	}

	#[rstest]
	#[case("-2")]
	#[case("0")]
	#[case("x")]
	fn test_invalid_items_per_page_falls_back_to_default(names: ParameterNames, #[case] raw: &str) {
		// Arrange
		let mut state = PaginationState::new(25, true);
		let mut request = QueryParams::new();
		request.insert("items_per_page", raw);

		// Act
		let props = state.update(&request, &names);

		// Assert
		assert_eq!(props.items_per_page, 25);
	}

	#[rstest]
	fn test_stored_page_size_survives_absent_parameter(names: ParameterNames) {
		// Arrange
		let mut state = PaginationState::new(25, true);
		state.update(&QueryParams::parse("items_per_page=7"), &names);

		// Act
		let props = state.update(&QueryParams::parse("page_index=2"), &names);

		// Assert
		assert_eq!(props.items_per_page, 7);
		assert_eq!(props.current_page_index, 2);
	}

	#[rstest]
	fn test_page_index_text_is_stored_verbatim(names: ParameterNames) {
		let mut state = PaginationState::new(10, true);
		let props = state.update(&QueryParams::parse("page_index=abc"), &names);
		assert_eq!(state.page_index_text(), "abc");
		assert_eq!(props.current_page_index, 1);
	}

	#[rstest]
	#[case("", 1)]
	#[case("1", 1)]
	#[case(" 12 ", 12)]
	#[case("-5", 1)]
	#[case("2.5", 1)]
	fn test_parse_page_index(#[case] text: &str, #[case] expected: usize) {
		assert_eq!(parse_page_index(text), expected);
	}
}
