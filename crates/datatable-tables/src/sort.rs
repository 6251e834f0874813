//! Sort state carried between requests

use datatable_core::request::parse_bool;
use datatable_core::{AttributeComparator, ParameterNames, PropertyAccessor, RequestParams};
use serde::{Deserialize, Serialize};

/// Sort snapshot handed to callers that sort externally
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataTableSort {
	/// Attribute to sort by, `None` for input order
	pub sorted_attribute_name: Option<String>,
	/// True for ascending order
	pub ascending: bool,
}

/// Attribute and direction of the current sort
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
	attribute: Option<String>,
	ascending: bool,
}

impl SortState {
	/// Creates a state that keeps input order
	pub fn new() -> Self {
		Self::default()
	}

	/// Attribute currently sorted on
	pub fn attribute(&self) -> Option<&str> {
		self.attribute.as_deref()
	}

	/// True for ascending order
	pub fn is_ascending(&self) -> bool {
		self.ascending
	}

	/// Reads the sort parameters from the request
	///
	/// A sort attribute in the request replaces the stored one, and the
	/// direction is re-read with it: only a case-insensitive `true` means
	/// ascending. Without a sort attribute the stored sort is kept.
	///
	/// # Examples
	///
	/// ```
	/// use datatable_core::{ParameterNames, QueryParams};
	/// use datatable_tables::SortState;
	///
	/// let names = ParameterNames::default();
	/// let mut state = SortState::new();
	///
	/// let sort = state.update(&QueryParams::parse("sorted_attribute_name=name&asc_sort=true"), &names);
	/// assert_eq!(sort.sorted_attribute_name.as_deref(), Some("name"));
	/// assert!(sort.ascending);
	///
	/// // A direction alone changes nothing
	/// let sort = state.update(&QueryParams::parse("asc_sort=false"), &names);
	/// assert!(sort.ascending);
	/// ```
	pub fn update<R>(&mut self, request: &R, names: &ParameterNames) -> DataTableSort
	where
		R: RequestParams + ?Sized,
	{
		if let Some(attribute) = request.parameter(&names.sorted_attribute_name) {
			self.attribute = Some(attribute.to_string());
			self.ascending = parse_bool(request.parameter(&names.sorted_asc));
			tracing::debug!(attribute = %attribute, ascending = self.ascending, "sort updated");
		}
		self.snapshot()
	}

	/// Snapshot of the current state
	pub fn snapshot(&self) -> DataTableSort {
		DataTableSort {
			sorted_attribute_name: self.attribute.clone(),
			ascending: self.ascending,
		}
	}

	/// Comparator for the current state, `None` when no attribute is set
	pub fn comparator(&self) -> Option<AttributeComparator> {
		self.attribute
			.as_deref()
			.map(|attribute| AttributeComparator::new(attribute, self.ascending))
	}

	/// Sorts `records` in place; keeps input order when no attribute is set
	pub fn apply<T, A>(&self, records: &mut Vec<T>, accessor: &A)
	where
		A: PropertyAccessor<T> + ?Sized,
	{
		if let Some(comparator) = self.comparator() {
			comparator.sort(records, accessor);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use datatable_core::{AccessorMap, QueryParams};
	use rstest::rstest;

	#[rstest]
	#[case("sorted_attribute_name=id", false)]
	#[case("sorted_attribute_name=id&asc_sort=TRUE", true)]
	#[case("sorted_attribute_name=id&asc_sort=yes", false)]
	fn test_direction_parsing(#[case] query: &str, #[case] ascending: bool) {
		// Arrange
		let mut state = SortState {
			attribute: None,
			ascending: true,
		};

		// Act
		let sort = state.update(&QueryParams::parse(query), &ParameterNames::default());

		// Assert
		assert_eq!(sort.ascending, ascending);
	}

	#[rstest]
	fn test_no_attribute_keeps_input_order() {
		// Arrange
		let accessor = AccessorMap::new().getter("n", |n: &i64| *n);
		let state = SortState::new();
		let mut records = vec![3, 1, 2];

		// Act
		state.apply(&mut records, &accessor);

		// Assert
		assert_eq!(records, vec![3, 1, 2]);
		assert!(state.comparator().is_none());
	}

	#[rstest]
	fn test_stored_sort_is_applied() {
		// Arrange
		let accessor = AccessorMap::new().getter("n", |n: &i64| *n);
		let mut state = SortState::new();
		state.update(&QueryParams::parse("sorted_attribute_name=n"), &ParameterNames::default());
		let mut records = vec![1, 3, 2];

		// Act
		state.update(&QueryParams::new(), &ParameterNames::default());
		state.apply(&mut records, &accessor);

		// Assert
		assert_eq!(records, vec![3, 2, 1]);
	}
}
