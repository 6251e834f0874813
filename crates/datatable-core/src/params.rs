//! Wire names of the request parameters read by the engine
//!
//! | Field | Default | Meaning |
//! |-------|---------|---------|
//! | `sorted_attribute_name` | `sorted_attribute_name` | Attribute to sort by |
//! | `sorted_asc` | `asc_sort` | `true` for ascending order |
//! | `page_index` | `page_index` | 1-based page to display |
//! | `items_per_page` | `items_per_page` | Page size |
//! | `filter_prefix` | `filter_panel_` | Prefix of every filter field |
//! | `reset_filters` | `resetFilters` | Flag clearing all filters (after prefix) |
//! | `update_filters` | `updateFilters` | Flag applying submitted filters (after prefix) |

use serde::{Deserialize, Serialize};

/// Default name of the sort attribute parameter
pub const PARAM_SORTED_ATTRIBUTE_NAME: &str = "sorted_attribute_name";
/// Default name of the sort direction parameter
pub const PARAM_SORTED_ASC: &str = "asc_sort";
/// Default name of the page index parameter
pub const PARAM_PAGE_INDEX: &str = "page_index";
/// Default name of the items-per-page parameter
pub const PARAM_ITEMS_PER_PAGE: &str = "items_per_page";
/// Default prefix of filter panel parameters
pub const PARAM_FILTER_PANEL_PREFIX: &str = "filter_panel_";
/// Default name of the reset flag, without prefix
pub const PARAM_RESET_FILTERS: &str = "resetFilters";
/// Default name of the update flag, without prefix
pub const PARAM_UPDATE_FILTERS: &str = "updateFilters";

/// Request parameter names used by one table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterNames {
	/// Attribute to sort by
	pub sorted_attribute_name: String,
	/// Sort direction flag
	pub sorted_asc: String,
	/// Page index
	pub page_index: String,
	/// Items per page
	pub items_per_page: String,
	/// Prefix of all filter panel fields
	pub filter_prefix: String,
	/// Reset flag, appended to the prefix
	pub reset_filters: String,
	/// Update flag, appended to the prefix
	pub update_filters: String,
}

impl Default for ParameterNames {
	fn default() -> Self {
		Self {
			sorted_attribute_name: PARAM_SORTED_ATTRIBUTE_NAME.to_string(),
			sorted_asc: PARAM_SORTED_ASC.to_string(),
			page_index: PARAM_PAGE_INDEX.to_string(),
			items_per_page: PARAM_ITEMS_PER_PAGE.to_string(),
			filter_prefix: PARAM_FILTER_PANEL_PREFIX.to_string(),
			reset_filters: PARAM_RESET_FILTERS.to_string(),
			update_filters: PARAM_UPDATE_FILTERS.to_string(),
		}
	}
}

impl ParameterNames {
	/// Full name of the request field carrying a filter value
	///
	/// ```
	/// use datatable_core::ParameterNames;
	///
	/// let names = ParameterNames::default();
	/// assert_eq!(names.filter_field("title"), "filter_panel_title");
	/// ```
	pub fn filter_field(&self, parameter_name: &str) -> String {
		format!("{}{}", self.filter_prefix, parameter_name)
	}

	/// Full name of the reset flag
	pub fn reset_flag(&self) -> String {
		self.filter_field(&self.reset_filters)
	}

	/// Full name of the update flag
	pub fn update_flag(&self) -> String {
		self.filter_field(&self.update_filters)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_flag_names_carry_prefix() {
		let names = ParameterNames::default();
		assert_eq!(names.reset_flag(), "filter_panel_resetFilters");
		assert_eq!(names.update_flag(), "filter_panel_updateFilters");
	}

	#[rstest]
	fn test_custom_prefix() {
		// Arrange
		let names = ParameterNames {
			filter_prefix: "f_".to_string(),
			..Default::default()
		};

		// Act & Assert
		assert_eq!(names.filter_field("active"), "f_active");
		assert_eq!(names.reset_flag(), "f_resetFilters");
	}
}
