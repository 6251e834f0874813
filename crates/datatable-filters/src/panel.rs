//! The filter panel of one table and its request protocol
//!
//! Each request puts the panel in one of three modes, chosen by two flags
//! behind the filter prefix:
//!
//! | Request | Mode | Effect on stored values |
//! |---------|------|-------------------------|
//! | `resetFilters=true` | [`FilterMode::Reset`] | All cleared; request values ignored |
//! | `updateFilters=true` | [`FilterMode::Update`] | Replaced by request values |
//! | neither | [`FilterMode::Persist`] | Left untouched |
//!
//! Under update, a boolean filter missing from the request is stored as
//! `"false"`, since an unchecked checkbox submits nothing.

use crate::engine::is_blank;
use crate::filter::{DataTableFilter, FilterType, ReferenceList};
use datatable_core::request::is_flag_set;
use datatable_core::{ParameterNames, RequestParams};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How a request affects stored filter values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
	/// Clear every value
	Reset,
	/// Read every value from the request
	Update,
	/// Keep the stored values
	Persist,
}

impl FilterMode {
	/// Derives the mode from the request flags; reset wins over update
	pub fn from_request<R>(request: &R, names: &ParameterNames) -> Self
	where
		R: RequestParams + ?Sized,
	{
		if is_flag_set(&request, &names.reset_flag()) {
			Self::Reset
		} else if is_flag_set(&request, &names.update_flag()) {
			Self::Update
		} else {
			Self::Persist
		}
	}
}

/// Ordered filters of one table plus the URL their form submits to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterPanel {
	filter_url: String,
	filters: Vec<DataTableFilter>,
}

impl FilterPanel {
	/// Creates an empty panel
	pub fn new(filter_url: impl Into<String>) -> Self {
		Self {
			filter_url: filter_url.into(),
			filters: Vec::new(),
		}
	}

	/// URL the filter form submits to
	pub fn filter_url(&self) -> &str {
		&self.filter_url
	}

	/// Replaces the form URL
	pub fn set_filter_url(&mut self, filter_url: impl Into<String>) {
		self.filter_url = filter_url.into();
	}

	/// Appends a filter
	pub fn add_filter(
		&mut self,
		filter_type: FilterType,
		parameter_name: impl Into<String>,
		label: impl Into<String>,
	) -> &mut Self {
		self.filters
			.push(DataTableFilter::new(filter_type, parameter_name, label));
		self
	}

	/// Appends a drop-down filter over `reference_list`
	pub fn add_drop_down_list_filter(
		&mut self,
		parameter_name: impl Into<String>,
		label: impl Into<String>,
		reference_list: ReferenceList,
	) -> &mut Self {
		self.filters
			.push(DataTableFilter::drop_down(parameter_name, label, reference_list));
		self
	}

	/// Filters in evaluation order
	pub fn filters(&self) -> &[DataTableFilter] {
		&self.filters
	}

	/// Finds a filter by parameter name
	pub fn filter(&self, parameter_name: &str) -> Option<&DataTableFilter> {
		self.filters
			.iter()
			.find(|filter| filter.parameter_name() == parameter_name)
	}

	/// Finds a filter by parameter name for editing its value
	pub fn filter_mut(&mut self, parameter_name: &str) -> Option<&mut DataTableFilter> {
		self.filters
			.iter_mut()
			.find(|filter| filter.parameter_name() == parameter_name)
	}

	/// Number of filters
	pub fn len(&self) -> usize {
		self.filters.len()
	}

	/// Returns true if the panel has no filters
	pub fn is_empty(&self) -> bool {
		self.filters.is_empty()
	}

	/// Clears every stored value
	pub fn clear_values(&mut self) {
		for filter in &mut self.filters {
			filter.set_value(None);
		}
	}

	/// Applies the request to the stored values and returns the mode used
	///
	/// # Examples
	///
	/// ```
	/// use datatable_core::{ParameterNames, QueryParams};
	/// use datatable_filters::{FilterMode, FilterPanel, FilterType};
	///
	/// let names = ParameterNames::default();
	/// let mut panel = FilterPanel::new("/users");
	/// panel.add_filter(FilterType::Text, "name", "Name");
	/// panel.add_filter(FilterType::Boolean, "active", "Active");
	///
	/// let request = QueryParams::parse("filter_panel_updateFilters=true&filter_panel_name=Bob");
	/// assert_eq!(panel.resolve(&request, &names), FilterMode::Update);
	/// assert_eq!(panel.filter("name").and_then(|f| f.value()), Some("Bob"));
	/// assert_eq!(panel.filter("active").and_then(|f| f.value()), Some("false"));
	///
	/// // Without flags the stored values persist
	/// let request = QueryParams::parse("filter_panel_name=Alice");
	/// assert_eq!(panel.resolve(&request, &names), FilterMode::Persist);
	/// assert_eq!(panel.filter("name").and_then(|f| f.value()), Some("Bob"));
	/// ```
	pub fn resolve<R>(&mut self, request: &R, names: &ParameterNames) -> FilterMode
	where
		R: RequestParams + ?Sized,
	{
		let mode = FilterMode::from_request(request, names);
		match mode {
			FilterMode::Reset => self.clear_values(),
			FilterMode::Update => {
				for filter in &mut self.filters {
					let field = names.filter_field(filter.parameter_name());
					let value = match request.parameter(&field) {
						Some(value) => Some(value.to_string()),
						None if filter.filter_type() == FilterType::Boolean => Some(false.to_string()),
						None => None,
					};
					filter.set_value(value);
				}
			}
			FilterMode::Persist => {}
		}
		tracing::debug!(mode = ?mode, filters = self.filters.len(), "filter values resolved");
		mode
	}

	/// Non-blank values keyed by parameter name
	pub fn active_values(&self) -> BTreeMap<String, String> {
		self.filters
			.iter()
			.filter_map(|filter| match filter.value() {
				Some(value) if !is_blank(Some(value)) => {
					Some((filter.parameter_name().to_string(), value.to_string()))
				}
				_ => None,
			})
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use datatable_core::QueryParams;
	use rstest::{fixture, rstest};

	#[fixture]
	fn panel() -> FilterPanel {
		let mut panel = FilterPanel::new("/items/filter");
		panel
			.add_filter(FilterType::Text, "name", "Name")
			.add_filter(FilterType::Boolean, "active", "Active")
			.add_drop_down_list_filter(
				"country",
				"Country",
				ReferenceList::new().with("fr", "France"),
			);
		panel
	}

	#[rstest]
	#[case("filter_panel_resetFilters=true&filter_panel_updateFilters=true", FilterMode::Reset)]
	#[case("filter_panel_updateFilters=true", FilterMode::Update)]
	#[case("filter_panel_updateFilters=TRUE", FilterMode::Persist)]
	#[case("filter_panel_resetFilters=1", FilterMode::Persist)]
	#[case("", FilterMode::Persist)]
	fn test_mode_from_request(#[case] query: &str, #[case] expected: FilterMode) {
		let request = QueryParams::parse(query);
		assert_eq!(FilterMode::from_request(&request, &ParameterNames::default()), expected);
	}

	#[rstest]
	fn test_reset_ignores_request_values(mut panel: FilterPanel) {
		// Arrange
		let names = ParameterNames::default();
		panel.resolve(
			&QueryParams::parse("filter_panel_updateFilters=true&filter_panel_name=x"),
			&names,
		);

		// Act
		let mode = panel.resolve(
			&QueryParams::parse("filter_panel_resetFilters=true&filter_panel_name=y"),
			&names,
		);

		// Assert
		assert_eq!(mode, FilterMode::Reset);
		assert!(panel.filters().iter().all(|f| f.value().is_none()));
		assert!(panel.active_values().is_empty());
	}

	#[rstest]
	fn test_update_clears_missing_text_filters(mut panel: FilterPanel) {
		// Arrange
		let names = ParameterNames::default();
		panel.resolve(
			&QueryParams::parse("filter_panel_updateFilters=true&filter_panel_name=x&filter_panel_country=fr"),
			&names,
		);

		// Act
		panel.resolve(&QueryParams::parse("filter_panel_updateFilters=true"), &names);

		// Assert
		assert_eq!(panel.filter("name").and_then(DataTableFilter::value), None);
		assert_eq!(panel.filter("country").and_then(DataTableFilter::value), None);
		assert_eq!(panel.filter("active").and_then(DataTableFilter::value), Some("false"));
	}

	#[rstest]
	fn test_active_values_skip_blank(mut panel: FilterPanel) {
		// Arrange
		let request = QueryParams::parse(
			"filter_panel_updateFilters=true&filter_panel_name=+&filter_panel_country=fr",
		);

		// Act
		panel.resolve(&request, &ParameterNames::default());

		// Assert
		let values = panel.active_values();
		assert_eq!(values.len(), 2);
		assert_eq!(values.get("country").map(String::as_str), Some("fr"));
		assert_eq!(values.get("active").map(String::as_str), Some("false"));
	}

	#[rstest]
	fn test_custom_prefix(mut panel: FilterPanel) {
		// Arrange
		let names = ParameterNames {
			filter_prefix: "f.".to_string(),
			..Default::default()
		};

		// Act
		let mode = panel.resolve(&QueryParams::parse("f.updateFilters=true&f.name=z"), &names);

		// Assert
		assert_eq!(mode, FilterMode::Update);
		assert_eq!(panel.filter("name").and_then(DataTableFilter::value), Some("z"));
	}
}
