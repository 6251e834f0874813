//! Filter descriptors

use datatable_core::Lookup;
use serde::{Deserialize, Serialize};

/// Kind of input a filter is edited with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterType {
	/// Free text input
	Text,
	/// Selection from a [`ReferenceList`]
	DropDownList,
	/// Checkbox; an unchecked box sends no value
	Boolean,
}

impl FilterType {
	/// Attribute lookup used when matching records against this kind
	pub fn lookup(self) -> Lookup {
		match self {
			Self::Boolean => Lookup::Boolean,
			Self::Text | Self::DropDownList => Lookup::Plain,
		}
	}
}

/// One option of a drop-down filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceItem {
	/// Value submitted and compared against records
	pub code: String,
	/// Display name
	pub name: String,
}

impl ReferenceItem {
	/// Creates an option
	pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
		Self {
			code: code.into(),
			name: name.into(),
		}
	}
}

/// Ordered options of a drop-down filter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceList {
	items: Vec<ReferenceItem>,
}

impl ReferenceList {
	/// Creates an empty list
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends an option
	pub fn with(mut self, code: impl Into<String>, name: impl Into<String>) -> Self {
		self.items.push(ReferenceItem::new(code, name));
		self
	}

	/// Appends an option in place
	pub fn push(&mut self, item: ReferenceItem) {
		self.items.push(item);
	}

	/// Options in display order
	pub fn items(&self) -> &[ReferenceItem] {
		&self.items
	}

	/// Finds the option with the given code
	pub fn find(&self, code: &str) -> Option<&ReferenceItem> {
		self.items.iter().find(|item| item.code == code)
	}

	/// Number of options
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Returns true if there are no options
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}
}

impl FromIterator<ReferenceItem> for ReferenceList {
	fn from_iter<I: IntoIterator<Item = ReferenceItem>>(iter: I) -> Self {
		Self {
			items: iter.into_iter().collect(),
		}
	}
}

/// A filter on one record attribute
///
/// `parameter_name` names both the record attribute and, behind the filter
/// prefix, the request field carrying the value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataTableFilter {
	parameter_name: String,
	filter_type: FilterType,
	label: String,
	value: Option<String>,
	reference_list: Option<ReferenceList>,
}

impl DataTableFilter {
	/// Creates a filter without a value
	pub fn new(filter_type: FilterType, parameter_name: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			parameter_name: parameter_name.into(),
			filter_type,
			label: label.into(),
			value: None,
			reference_list: None,
		}
	}

	/// Creates a drop-down filter over `reference_list`
	pub fn drop_down(
		parameter_name: impl Into<String>,
		label: impl Into<String>,
		reference_list: ReferenceList,
	) -> Self {
		Self {
			reference_list: Some(reference_list),
			..Self::new(FilterType::DropDownList, parameter_name, label)
		}
	}

	/// Attribute and request field name
	pub fn parameter_name(&self) -> &str {
		&self.parameter_name
	}

	/// Input kind
	pub fn filter_type(&self) -> FilterType {
		self.filter_type
	}

	/// Display label key
	pub fn label(&self) -> &str {
		&self.label
	}

	/// Current value, if any
	pub fn value(&self) -> Option<&str> {
		self.value.as_deref()
	}

	/// Replaces the current value
	pub fn set_value(&mut self, value: Option<String>) {
		self.value = value;
	}

	/// Options of a drop-down filter
	pub fn reference_list(&self) -> Option<&ReferenceList> {
		self.reference_list.as_ref()
	}

	/// Returns true if the value constrains records
	pub fn is_active(&self) -> bool {
		!crate::engine::is_blank(self.value())
	}
}
