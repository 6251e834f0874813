//! Populating caller filter objects from resolved filter values
//!
//! Callers that filter against an external source receive the non-blank
//! filter values as a name/value map and need them on their own query
//! object. A [`PropertyBinder`] does that assignment:
//!
//! - [`FieldBinder`]: one setter per field, registered up front
//! - [`SerdeBinder`]: any `Serialize + DeserializeOwned` type, matching
//!   top-level field names
//! - any closure `Fn(&mut K, &BTreeMap<String, String>) -> Result<()>`

use crate::error::{BindError, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Writes filter values onto a target object
pub trait PropertyBinder<K> {
	/// Sets the fields of `target` named by the keys of `values`
	fn bind(&self, target: &mut K, values: &BTreeMap<String, String>) -> Result<()>;
}

impl<K, F> PropertyBinder<K> for F
where
	F: Fn(&mut K, &BTreeMap<String, String>) -> Result<()>,
{
	fn bind(&self, target: &mut K, values: &BTreeMap<String, String>) -> Result<()> {
		self(target, values)
	}
}

type Setter<K> = Box<dyn Fn(&mut K, &str) -> std::result::Result<(), String> + Send + Sync>;

/// Binder built from explicit per-field setters
///
/// Keys without a setter are ignored.
///
/// # Examples
///
/// ```
/// use datatable_filters::{FieldBinder, PropertyBinder};
/// use std::collections::BTreeMap;
///
/// #[derive(Default)]
/// struct UserQuery {
///     name: Option<String>,
///     active: Option<bool>,
/// }
///
/// let binder = FieldBinder::new()
///     .field("name", |q: &mut UserQuery, v| q.name = Some(v.to_string()))
///     .parsed("active", |q: &mut UserQuery, v: bool| q.active = Some(v));
///
/// let values = BTreeMap::from([
///     ("name".to_string(), "Bob".to_string()),
///     ("active".to_string(), "true".to_string()),
/// ]);
/// let mut query = UserQuery::default();
/// binder.bind(&mut query, &values).unwrap();
///
/// assert_eq!(query.name.as_deref(), Some("Bob"));
/// assert_eq!(query.active, Some(true));
/// ```
pub struct FieldBinder<K> {
	setters: BTreeMap<String, Setter<K>>,
}

impl<K> FieldBinder<K> {
	/// Creates a binder without setters
	pub fn new() -> Self {
		Self {
			setters: BTreeMap::new(),
		}
	}

	/// Registers a setter taking the raw text
	pub fn field<F>(self, name: impl Into<String>, set: F) -> Self
	where
		F: Fn(&mut K, &str) + Send + Sync + 'static,
	{
		self.try_field(name, move |target: &mut K, raw: &str| {
			set(target, raw);
			Ok::<(), String>(())
		})
	}

	/// Registers a setter that parses the text first
	pub fn parsed<V, F>(self, name: impl Into<String>, set: F) -> Self
	where
		V: FromStr,
		V::Err: fmt::Display,
		F: Fn(&mut K, V) + Send + Sync + 'static,
	{
		self.try_field(name, move |target: &mut K, raw: &str| {
			let value = raw.trim().parse::<V>().map_err(|err| err.to_string())?;
			set(target, value);
			Ok::<(), String>(())
		})
	}

	/// Registers a fallible setter
	pub fn try_field<E, F>(mut self, name: impl Into<String>, set: F) -> Self
	where
		E: fmt::Display,
		F: Fn(&mut K, &str) -> std::result::Result<(), E> + Send + Sync + 'static,
	{
		self.setters.insert(
			name.into(),
			Box::new(move |target: &mut K, raw: &str| set(target, raw).map_err(|err| err.to_string())),
		);
		self
	}

	/// Names of the fields with a setter
	pub fn field_names(&self) -> impl Iterator<Item = &str> {
		self.setters.keys().map(String::as_str)
	}
}

impl<K> Default for FieldBinder<K> {
	fn default() -> Self {
		Self::new()
	}
}

impl<K> fmt::Debug for FieldBinder<K> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FieldBinder")
			.field("fields", &self.setters.keys().collect::<Vec<_>>())
			.finish()
	}
}

impl<K> PropertyBinder<K> for FieldBinder<K> {
	fn bind(&self, target: &mut K, values: &BTreeMap<String, String>) -> Result<()> {
		for (name, raw) in values {
			let Some(setter) = self.setters.get(name) else {
				tracing::debug!(field = %name, "no setter for filter value");
				continue;
			};
			setter(target, raw).map_err(|message| BindError::invalid_value(name, message))?;
		}
		Ok(())
	}
}

/// Binder for serde types, matching values to top-level fields by name
///
/// Each value is converted to the JSON type the field currently serializes
/// to. Fields currently `null`, or left out of the serialized form (e.g. by
/// `skip_serializing_if`), take the first of text, boolean, integer or float
/// the target accepts. Keys naming no field are ignored.
///
/// # Examples
///
/// ```
/// use datatable_filters::{PropertyBinder, SerdeBinder};
/// use serde::{Deserialize, Serialize};
/// use std::collections::BTreeMap;
///
/// #[derive(Default, Serialize, Deserialize)]
/// struct OrderQuery {
///     customer: String,
///     min_total: i64,
///     paid: Option<bool>,
/// }
///
/// let values = BTreeMap::from([
///     ("customer".to_string(), "ACME".to_string()),
///     ("min_total".to_string(), "100".to_string()),
///     ("paid".to_string(), "true".to_string()),
/// ]);
/// let mut query = OrderQuery::default();
/// SerdeBinder.bind(&mut query, &values).unwrap();
///
/// assert_eq!(query.customer, "ACME");
/// assert_eq!(query.min_total, 100);
/// assert_eq!(query.paid, Some(true));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SerdeBinder;

impl<K> PropertyBinder<K> for SerdeBinder
where
	K: Serialize + DeserializeOwned,
{
	fn bind(&self, target: &mut K, values: &BTreeMap<String, String>) -> Result<()> {
		let Value::Object(mut fields) = serde_json::to_value(&*target)? else {
			return Err(BindError::Custom(
				"filter object does not serialize to a map of fields".to_string(),
			));
		};
		for (name, raw) in values {
			let value = match fields.get(name) {
				Some(Value::Null) => {
					infer::<K>(&fields, name, raw).unwrap_or_else(|| Value::String(raw.clone()))
				}
				Some(current) => coerce(name, current, raw)?,
				// skipped while empty, or not a field at all
				None => match infer::<K>(&fields, name, raw) {
					Some(value) => value,
					None => {
						tracing::debug!(field = %name, "no field for filter value");
						continue;
					}
				},
			};
			fields.insert(name.clone(), value);
		}
		*target = serde_json::from_value(Value::Object(fields))?;
		Ok(())
	}
}

fn coerce(field: &str, current: &Value, raw: &str) -> Result<Value> {
	match current {
		Value::Bool(_) => raw
			.trim()
			.parse::<bool>()
			.map(Value::Bool)
			.map_err(|err| BindError::invalid_value(field, err)),
		Value::Number(number) if number.is_f64() => parse_float(raw)
			.map(Value::Number)
			.ok_or_else(|| BindError::invalid_value(field, format!("`{raw}` is not a number"))),
		Value::Number(_) => parse_integer(raw)
			.map(Value::Number)
			.ok_or_else(|| BindError::invalid_value(field, format!("`{raw}` is not an integer"))),
		_ => Ok(Value::String(raw.to_string())),
	}
}

fn infer<K: DeserializeOwned>(fields: &Map<String, Value>, field: &str, raw: &str) -> Option<Value> {
	let candidates = [
		Some(Value::String(raw.to_string())),
		raw.trim().parse::<bool>().ok().map(Value::Bool),
		parse_integer(raw).map(Value::Number),
		parse_float(raw).map(Value::Number),
	];
	candidates.into_iter().flatten().find(|candidate| {
		let mut trial = fields.clone();
		trial.insert(field.to_string(), candidate.clone());
		serde_json::from_value::<K>(Value::Object(trial)).is_ok()
	})
}

fn parse_integer(raw: &str) -> Option<Number> {
	let raw = raw.trim();
	raw.parse::<i64>()
		.map(Number::from)
		.ok()
		.or_else(|| raw.parse::<u64>().map(Number::from).ok())
}

fn parse_float(raw: &str) -> Option<Number> {
	raw.trim().parse::<f64>().ok().and_then(Number::from_f64)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde::Deserialize;

	#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
	struct ProductQuery {
		name: String,
		in_stock: bool,
		max_price: f64,
		category_id: Option<u32>,
		tag: Option<String>,
	}

	fn values(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
		pairs
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect()
	}

	#[rstest]
	fn test_serde_binder_coerces_to_field_types() {
		// Arrange
		let mut query = ProductQuery::default();
		let values = values(&[
			("name", "lamp"),
			("in_stock", "false"),
			("max_price", "19.5"),
			("category_id", "7"),
			("tag", "42"),
			("unknown", "ignored"),
		]);

		// Act
		let result = SerdeBinder.bind(&mut query, &values);

		// Assert
		assert!(result.is_ok());
		assert_eq!(
			query,
			ProductQuery {
				name: "lamp".to_string(),
				in_stock: false,
				max_price: 19.5,
				category_id: Some(7),
				tag: Some("42".to_string()),
			}
		);
	}

	#[rstest]
	#[case("in_stock", "yes")]
	#[case("max_price", "cheap")]
	fn test_serde_binder_rejects_unparseable(#[case] field: &str, #[case] raw: &str) {
		// Arrange
		let mut query = ProductQuery::default();

		// Act
		let result = SerdeBinder.bind(&mut query, &values(&[(field, raw)]));

		// Assert
		assert!(matches!(result, Err(BindError::InvalidValue { field: f, .. }) if f == field));
	}

	#[rstest]
	fn test_serde_binder_reports_unacceptable_null_field() {
		let mut query = ProductQuery::default();
		let result = SerdeBinder.bind(&mut query, &values(&[("category_id", "-3")]));
		assert!(matches!(result, Err(BindError::Serialization(_))));
	}

	#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
	struct SparseQuery {
		#[serde(skip_serializing_if = "Option::is_none")]
		customer: Option<String>,
		#[serde(default, skip_serializing_if = "Option::is_none")]
		min_total: Option<u32>,
	}

	#[rstest]
	fn test_serde_binder_sets_fields_skipped_while_empty() {
		// Arrange
		let mut query = SparseQuery::default();
		let values = values(&[("customer", "ACME"), ("min_total", "250"), ("unknown", "x")]);

		// Act
		let result = SerdeBinder.bind(&mut query, &values);

		// Assert
		assert!(result.is_ok());
		assert_eq!(
			query,
			SparseQuery {
				customer: Some("ACME".to_string()),
				min_total: Some(250),
			}
		);
	}

	#[rstest]
	fn test_serde_binder_skips_unacceptable_absent_field() {
		// Arrange
		let mut query = SparseQuery::default();

		// Act
		let result = SerdeBinder.bind(&mut query, &values(&[("min_total", "-1")]));

		// Assert
		assert!(result.is_ok());
		assert_eq!(query, SparseQuery::default());
	}

	#[rstest]
	fn test_serde_binder_rejects_non_struct() {
		let mut target: Vec<String> = Vec::new();
		let result = SerdeBinder.bind(&mut target, &values(&[("a", "b")]));
		assert!(matches!(result, Err(BindError::Custom(_))));
	}

	#[rstest]
	fn test_field_binder_reports_field_name() {
		// Arrange
		let binder = FieldBinder::new().parsed("category_id", |q: &mut ProductQuery, v: u32| {
			q.category_id = Some(v)
		});
		let mut query = ProductQuery::default();

		// Act
		let result = binder.bind(&mut query, &values(&[("category_id", "abc")]));

		// Assert
		let Err(BindError::InvalidValue { field, .. }) = result else {
			panic!("expected invalid value, got {result:?}");
		};
		assert_eq!(field, "category_id");
	}

	#[rstest]
	fn test_closure_binder() {
		let binder = |q: &mut ProductQuery, values: &BTreeMap<String, String>| -> Result<()> {
			q.name = values.get("name").cloned().unwrap_or_default();
			Ok(())
		};
		let mut query = ProductQuery::default();
		binder.bind(&mut query, &values(&[("name", "desk")])).unwrap();
		assert_eq!(query.name, "desk");
	}
}
