//! Matching records against filter values
//!
//! A record passes when it matches every filter holding a non-blank value.
//! Matching reads the filter's attribute off the record and compares its
//! textual form against the filter value for exact equality.

use crate::filter::DataTableFilter;
use datatable_core::{AccessError, PropertyAccessor};

/// Outcome of checking one record against one filter
#[derive(Debug, Clone, PartialEq)]
pub enum FilterMatch {
	/// The filter is blank, or the attribute text equals the filter value
	Matched,
	/// The attribute was read and differs from the filter value
	Mismatched,
	/// The attribute could not be read
	Unreadable(AccessError),
}

impl FilterMatch {
	/// Returns true only for [`FilterMatch::Matched`]
	pub fn is_match(&self) -> bool {
		matches!(self, Self::Matched)
	}
}

/// Returns true if `value` is absent or holds only whitespace
pub fn is_blank(value: Option<&str>) -> bool {
	value.is_none_or(|v| v.trim().is_empty())
}

/// Checks one record against one filter
///
/// # Examples
///
/// ```
/// use datatable_core::AccessorMap;
/// use datatable_filters::{DataTableFilter, FilterMatch, FilterType, evaluate};
///
/// let accessor = AccessorMap::new().flag("active", |v: &bool| *v);
/// let mut filter = DataTableFilter::new(FilterType::Boolean, "active", "Active");
/// filter.set_value(Some("true".to_string()));
///
/// assert_eq!(evaluate(&true, &filter, &accessor), FilterMatch::Matched);
/// assert_eq!(evaluate(&false, &filter, &accessor), FilterMatch::Mismatched);
/// ```
pub fn evaluate<T, A>(record: &T, filter: &DataTableFilter, accessor: &A) -> FilterMatch
where
	A: PropertyAccessor<T> + ?Sized,
{
	let Some(expected) = filter.value().filter(|v| !v.trim().is_empty()) else {
		return FilterMatch::Matched;
	};
	match accessor.read(record, filter.parameter_name(), filter.filter_type().lookup()) {
		Ok(value) if value.as_text().as_deref() == Some(expected) => FilterMatch::Matched,
		Ok(_) => FilterMatch::Mismatched,
		Err(err) => FilterMatch::Unreadable(err),
	}
}

/// Returns true if the record matches every filter
pub fn matches_all<T, A>(record: &T, filters: &[DataTableFilter], accessor: &A) -> bool
where
	A: PropertyAccessor<T> + ?Sized,
{
	filters.iter().all(|filter| match evaluate(record, filter, accessor) {
		FilterMatch::Matched => true,
		FilterMatch::Mismatched => false,
		FilterMatch::Unreadable(err @ AccessError::NotFound { .. }) => {
			tracing::debug!(attribute = %filter.parameter_name(), error = %err, "record excluded by filter");
			false
		}
		FilterMatch::Unreadable(err) => {
			tracing::error!(attribute = %filter.parameter_name(), error = %err, "failed to read filter attribute");
			false
		}
	})
}

/// Keeps the records matching every filter, in input order
pub fn apply_filters<T, A>(records: Vec<T>, filters: &[DataTableFilter], accessor: &A) -> Vec<T>
where
	A: PropertyAccessor<T> + ?Sized,
{
	if !filters.iter().any(DataTableFilter::is_active) {
		return records;
	}
	let before = records.len();
	let kept: Vec<T> = records
		.into_iter()
		.filter(|record| matches_all(record, filters, accessor))
		.collect();
	tracing::debug!(before, after = kept.len(), "filters applied");
	kept
}
