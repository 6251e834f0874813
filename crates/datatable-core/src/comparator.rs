//! Ordering records by a named attribute

use crate::accessor::{AccessError, Lookup, PropertyAccessor};
use crate::value::AttrValue;
use std::cmp::Ordering;

/// Orders records by one attribute in one direction
///
/// Values are read once per record. Records whose attribute cannot be read,
/// or reads as [`AttrValue::Null`], come before every present value in
/// ascending order. Descending order is the exact reverse of ascending order;
/// records with equal keys keep their input order in both directions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeComparator {
	attribute: String,
	ascending: bool,
}

impl AttributeComparator {
	/// Creates a comparator for `attribute`
	pub fn new(attribute: impl Into<String>, ascending: bool) -> Self {
		Self {
			attribute: attribute.into(),
			ascending,
		}
	}

	/// The attribute records are ordered by
	pub fn attribute(&self) -> &str {
		&self.attribute
	}

	/// True for ascending order
	pub fn is_ascending(&self) -> bool {
		self.ascending
	}

	/// Compares two attribute values according to the direction
	pub fn compare(&self, a: Option<&AttrValue>, b: Option<&AttrValue>) -> Ordering {
		let ordering = compare_values(a, b);
		if self.ascending {
			ordering
		} else {
			ordering.reverse()
		}
	}

	/// Stable-sorts `records` in place
	///
	/// # Examples
	///
	/// ```
	/// use datatable_core::{AccessorMap, AttributeComparator};
	///
	/// let accessor = AccessorMap::new().getter("len", |s: &String| s.len() as i64);
	/// let mut words: Vec<String> = vec!["ccc".into(), "a".into(), "bb".into()];
	///
	/// AttributeComparator::new("len", true).sort(&mut words, &accessor);
	/// assert_eq!(words, ["a", "bb", "ccc"]);
	///
	/// AttributeComparator::new("len", false).sort(&mut words, &accessor);
	/// assert_eq!(words, ["ccc", "bb", "a"]);
	/// ```
	pub fn sort<T, A>(&self, records: &mut Vec<T>, accessor: &A)
	where
		A: PropertyAccessor<T> + ?Sized,
	{
		let mut keyed: Vec<(Option<AttrValue>, T)> = records
			.drain(..)
			.map(|record| (self.key(&record, accessor), record))
			.collect();
		keyed.sort_by(|(a, _), (b, _)| self.compare(a.as_ref(), b.as_ref()));
		records.extend(keyed.into_iter().map(|(_, record)| record));
	}

	fn key<T, A>(&self, record: &T, accessor: &A) -> Option<AttrValue>
	where
		A: PropertyAccessor<T> + ?Sized,
	{
		match accessor.read(record, &self.attribute, Lookup::Boolean) {
			Ok(value) => Some(value),
			Err(AccessError::NotFound { .. }) => {
				tracing::debug!(attribute = %self.attribute, "no reader for sort attribute");
				None
			}
			Err(err) => {
				tracing::error!(attribute = %self.attribute, error = %err, "failed to read sort attribute");
				None
			}
		}
	}
}

/// Natural ascending order of attribute values
///
/// Missing and `Null` values sort first. Values of different kinds order by
/// kind: booleans, then numbers, then text, then timestamps. Integers and
/// floats compare exactly with each other; NaN sorts after every number.
pub fn compare_values(a: Option<&AttrValue>, b: Option<&AttrValue>) -> Ordering {
	let a = a.filter(|v| !v.is_null());
	let b = b.filter(|v| !v.is_null());
	match (a, b) {
		(None, None) => Ordering::Equal,
		(None, Some(_)) => Ordering::Less,
		(Some(_), None) => Ordering::Greater,
		(Some(a), Some(b)) => compare_present(a, b),
	}
}

fn kind_rank(value: &AttrValue) -> u8 {
	match value {
		AttrValue::Null => 0,
		AttrValue::Bool(_) => 1,
		AttrValue::Int(_) | AttrValue::Float(_) => 2,
		AttrValue::Text(_) => 3,
		AttrValue::Timestamp(_) => 4,
	}
}

fn compare_present(a: &AttrValue, b: &AttrValue) -> Ordering {
	match (a, b) {
		(AttrValue::Bool(a), AttrValue::Bool(b)) => a.cmp(b),
		(AttrValue::Int(a), AttrValue::Int(b)) => a.cmp(b),
		(AttrValue::Float(a), AttrValue::Float(b)) => compare_floats(*a, *b),
		(AttrValue::Int(a), AttrValue::Float(b)) => compare_int_float(*a, *b),
		(AttrValue::Float(a), AttrValue::Int(b)) => compare_int_float(*b, *a).reverse(),
		(AttrValue::Text(a), AttrValue::Text(b)) => a.cmp(b),
		(AttrValue::Timestamp(a), AttrValue::Timestamp(b)) => a.cmp(b),
		_ => kind_rank(a).cmp(&kind_rank(b)),
	}
}

// -0.0 and 0.0 compare equal; NaNs are equal to each other and above every number
fn compare_floats(a: f64, b: f64) -> Ordering {
	match (a.is_nan(), b.is_nan()) {
		(true, true) => Ordering::Equal,
		(true, false) => Ordering::Greater,
		(false, true) => Ordering::Less,
		(false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
	}
}

/// 2^63, the first float above every `i64`
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

fn compare_int_float(int: i64, float: f64) -> Ordering {
	if float.is_nan() || float >= I64_UPPER {
		return Ordering::Less;
	}
	if float < -I64_UPPER {
		return Ordering::Greater;
	}
	// in range, so the truncated float converts to i64 without loss
	let whole = float.trunc();
	int.cmp(&(whole as i64)).then_with(|| {
		let fraction = float - whole;
		if fraction > 0.0 {
			Ordering::Less
		} else if fraction < 0.0 {
			Ordering::Greater
		} else {
			Ordering::Equal
		}
	})
}
