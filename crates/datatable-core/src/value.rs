//! Attribute values read from records
//!
//! Records expose their attributes as [`AttrValue`]s. Filtering compares the
//! textual form of a value ([`AttrValue::as_text`]) against the filter value,
//! while sorting compares values directly.

use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt;

/// Runtime representation of a record attribute
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
	/// The reader succeeded but the attribute holds no value
	Null,
	/// Boolean flag (e.g. `active`)
	Bool(bool),
	/// Signed integer (e.g. `id`)
	Int(i64),
	/// Floating point number (e.g. `price`)
	Float(f64),
	/// Free text (e.g. `name`, `email`)
	Text(String),
	/// Point in time, rendered as RFC 3339
	Timestamp(DateTime<Utc>),
}

impl AttrValue {
	/// Returns the textual form used for filter comparison
	///
	/// `Null` has no textual form and therefore never matches a filter.
	/// Whole floats keep their decimal point (`1.0`), so a float attribute is
	/// matched by `"1.0"` and never by `"1"`.
	///
	/// # Examples
	///
	/// ```
	/// use datatable_core::AttrValue;
	///
	/// assert_eq!(AttrValue::Bool(true).as_text().as_deref(), Some("true"));
	/// assert_eq!(AttrValue::Int(42).as_text().as_deref(), Some("42"));
	/// assert_eq!(AttrValue::Float(1.0).as_text().as_deref(), Some("1.0"));
	/// assert_eq!(AttrValue::Null.as_text(), None);
	/// ```
	pub fn as_text(&self) -> Option<String> {
		match self {
			Self::Null => None,
			Self::Bool(value) => Some(value.to_string()),
			Self::Int(value) => Some(value.to_string()),
			Self::Float(value) => Some(format!("{value:?}")),
			Self::Text(value) => Some(value.clone()),
			Self::Timestamp(value) => Some(value.to_rfc3339_opts(SecondsFormat::Secs, true)),
		}
	}

	/// Returns true for [`AttrValue::Null`]
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}

	/// Returns the boolean if this is a `Bool`
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Bool(value) => Some(*value),
			_ => None,
		}
	}

	/// Name of the value kind, used in diagnostics
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Bool(_) => "bool",
			Self::Int(_) => "int",
			Self::Float(_) => "float",
			Self::Text(_) => "text",
			Self::Timestamp(_) => "timestamp",
		}
	}
}

impl fmt::Display for AttrValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.as_text() {
			Some(text) => f.write_str(&text),
			None => f.write_str(""),
		}
	}
}

impl From<bool> for AttrValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<i32> for AttrValue {
	fn from(value: i32) -> Self {
		Self::Int(i64::from(value))
	}
}

impl From<i64> for AttrValue {
	fn from(value: i64) -> Self {
		Self::Int(value)
	}
}

impl From<u32> for AttrValue {
	fn from(value: u32) -> Self {
		Self::Int(i64::from(value))
	}
}

impl From<f64> for AttrValue {
	fn from(value: f64) -> Self {
		Self::Float(value)
	}
}

impl From<String> for AttrValue {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

impl From<&str> for AttrValue {
	fn from(value: &str) -> Self {
		Self::Text(value.to_string())
	}
}

impl From<DateTime<Utc>> for AttrValue {
	fn from(value: DateTime<Utc>) -> Self {
		Self::Timestamp(value)
	}
}

impl<V: Into<AttrValue>> From<Option<V>> for AttrValue {
	fn from(value: Option<V>) -> Self {
		value.map_or(Self::Null, Into::into)
	}
}
