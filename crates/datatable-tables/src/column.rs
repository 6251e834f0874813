//! Column descriptors
//!
//! Columns only describe what a table displays; rendering is left to the
//! caller's templates. The kinds mirror the usual cell renderings:
//! - `Text`: the attribute value as is
//! - `Label`: the attribute value is a message key to localize
//! - `Action`: custom content (row actions, or a named render macro)
//! - `Boolean`: one of two labels depending on the value
//! - `Email`: a `mailto:` link

use datatable_core::{AttrValue, Lookup, PropertyAccessor};
use serde::{Deserialize, Serialize};

/// How a column's cells are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
	/// Plain text
	Text,
	/// Localized message key
	Label,
	/// Custom-rendered content
	Action,
	/// Boolean shown through true/false labels
	Boolean,
	/// Email address
	Email,
}

/// One displayed column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataTableColumn {
	title: String,
	attribute: Option<String>,
	sortable: bool,
	column_type: ColumnType,
	label_true: Option<String>,
	label_false: Option<String>,
}

impl DataTableColumn {
	/// Creates a column
	///
	/// # Arguments
	///
	/// * `title` - Message key of the header
	/// * `attribute` - Record attribute shown in the cells, `None` for action columns
	/// * `sortable` - Whether the header links to a sort on `attribute`
	/// * `column_type` - Cell rendering
	pub fn new(
		title: impl Into<String>,
		attribute: Option<String>,
		sortable: bool,
		column_type: ColumnType,
	) -> Self {
		Self {
			title: title.into(),
			attribute,
			sortable,
			column_type,
			label_true: None,
			label_false: None,
		}
	}

	/// Creates a boolean column; boolean columns are never sortable
	pub fn boolean(
		title: impl Into<String>,
		attribute: impl Into<String>,
		label_true: impl Into<String>,
		label_false: impl Into<String>,
	) -> Self {
		Self {
			label_true: Some(label_true.into()),
			label_false: Some(label_false.into()),
			..Self::new(title, Some(attribute.into()), false, ColumnType::Boolean)
		}
	}

	/// Message key of the header
	pub fn title(&self) -> &str {
		&self.title
	}

	/// Record attribute, or the render macro name of a free column
	pub fn attribute(&self) -> Option<&str> {
		self.attribute.as_deref()
	}

	/// Render macro name of a free column
	pub fn macro_name(&self) -> Option<&str> {
		match self.column_type {
			ColumnType::Action => self.attribute(),
			_ => None,
		}
	}

	/// Returns true if the column can be sorted on
	pub fn is_sortable(&self) -> bool {
		self.sortable
	}

	/// Cell rendering
	pub fn column_type(&self) -> ColumnType {
		self.column_type
	}

	/// Label shown for `true` in a boolean column
	pub fn label_true(&self) -> Option<&str> {
		self.label_true.as_deref()
	}

	/// Label shown for `false` in a boolean column
	pub fn label_false(&self) -> Option<&str> {
		self.label_false.as_deref()
	}

	/// Text of this column's cell for `record`
	///
	/// Boolean columns yield their true/false label. Action columns and
	/// unreadable attributes yield `None`.
	///
	/// # Examples
	///
	/// ```
	/// use datatable_core::AccessorMap;
	/// use datatable_tables::DataTableColumn;
	///
	/// let accessor = AccessorMap::new().flag("enabled", |on: &bool| *on);
	/// let column = DataTableColumn::boolean("Enabled", "enabled", "yes", "no");
	///
	/// assert_eq!(column.cell_text(&true, &accessor).as_deref(), Some("yes"));
	/// assert_eq!(column.cell_text(&false, &accessor).as_deref(), Some("no"));
	/// ```
	pub fn cell_text<T, A>(&self, record: &T, accessor: &A) -> Option<String>
	where
		A: PropertyAccessor<T> + ?Sized,
	{
		if self.column_type == ColumnType::Action {
			return None;
		}
		let attribute = self.attribute()?;
		let lookup = match self.column_type {
			ColumnType::Boolean => Lookup::Boolean,
			_ => Lookup::Plain,
		};
		let value = match accessor.read(record, attribute, lookup) {
			Ok(value) => value,
			Err(err) => {
				tracing::debug!(attribute = %attribute, error = %err, "cell attribute unreadable");
				return None;
			}
		};
		match (self.column_type, value) {
			(ColumnType::Boolean, AttrValue::Bool(true)) => self.label_true.clone(),
			(ColumnType::Boolean, AttrValue::Bool(false)) => self.label_false.clone(),
			(_, value) => value.as_text(),
		}
	}
}
