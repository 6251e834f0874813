//! Inbound request parameters
//!
//! The engine reads everything it needs from the request through
//! [`RequestParams`]: a flat, string-keyed parameter lookup plus the request
//! locale. [`QueryParams`] is the stock implementation, built from a URL query
//! string or from key/value pairs.

use percent_encoding::percent_decode_str;
use std::collections::HashMap;

/// Read access to the parameters of one inbound request
pub trait RequestParams {
	/// Returns the value of the parameter `name`, if present
	fn parameter(&self, name: &str) -> Option<&str>;

	/// Returns the request locale (e.g. `fr-FR`), if known
	fn locale(&self) -> Option<&str> {
		None
	}
}

impl RequestParams for HashMap<String, String> {
	fn parameter(&self, name: &str) -> Option<&str> {
		self.get(name).map(String::as_str)
	}
}

impl<R: RequestParams + ?Sized> RequestParams for &R {
	fn parameter(&self, name: &str) -> Option<&str> {
		(**self).parameter(name)
	}

	fn locale(&self) -> Option<&str> {
		(**self).locale()
	}
}

/// Decoded query-string parameters of a request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
	params: HashMap<String, String>,
	locale: Option<String>,
}

impl QueryParams {
	/// Creates an empty parameter set
	pub fn new() -> Self {
		Self::default()
	}

	/// Parses a URL query string
	///
	/// Pairs are split on the first `=` only, so values may contain `=`.
	/// Keys and values are percent-decoded with `+` read as a space. When a
	/// key repeats, the first occurrence wins. A leading `?` is ignored.
	///
	/// # Examples
	///
	/// ```
	/// use datatable_core::{QueryParams, RequestParams};
	///
	/// let params = QueryParams::parse("?page_index=2&filter_panel_name=John+Doe&token=a==");
	/// assert_eq!(params.parameter("page_index"), Some("2"));
	/// assert_eq!(params.parameter("filter_panel_name"), Some("John Doe"));
	/// assert_eq!(params.parameter("token"), Some("a=="));
	/// assert_eq!(params.parameter("missing"), None);
	/// ```
	pub fn parse(query: &str) -> Self {
		let query = query.strip_prefix('?').unwrap_or(query);
		let mut params = HashMap::new();
		for pair in query.split('&').filter(|pair| !pair.is_empty()) {
			let mut parts = pair.splitn(2, '=');
			let key = decode_component(parts.next().unwrap_or_default());
			let value = decode_component(parts.next().unwrap_or_default());
			params.entry(key).or_insert(value);
		}
		Self {
			params,
			locale: None,
		}
	}

	/// Builds a parameter set from key/value pairs
	///
	/// When a key repeats, the first occurrence wins.
	pub fn from_pairs<I, K, V>(pairs: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		let mut params = HashMap::new();
		for (key, value) in pairs {
			params.entry(key.into()).or_insert_with(|| value.into());
		}
		Self {
			params,
			locale: None,
		}
	}

	/// Sets the request locale
	pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
		self.locale = Some(locale.into());
		self
	}

	/// Sets a parameter, replacing any previous value
	pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.params.insert(name.into(), value.into());
	}

	/// Number of parameters
	pub fn len(&self) -> usize {
		self.params.len()
	}

	/// Returns true if there are no parameters
	pub fn is_empty(&self) -> bool {
		self.params.is_empty()
	}
}

impl RequestParams for QueryParams {
	fn parameter(&self, name: &str) -> Option<&str> {
		self.params.get(name).map(String::as_str)
	}

	fn locale(&self) -> Option<&str> {
		self.locale.as_deref()
	}
}

fn decode_component(raw: &str) -> String {
	let spaced = raw.replace('+', " ");
	percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

/// Returns true when a flag parameter is exactly `"true"`
pub fn is_flag_set(request: &impl RequestParams, name: &str) -> bool {
	request.parameter(name) == Some("true")
}

/// Parses a boolean the lenient way: only a case-insensitive `"true"` is true
pub fn parse_bool(value: Option<&str>) -> bool {
	value.is_some_and(|v| v.eq_ignore_ascii_case("true"))
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_parse_preserves_equals_in_value() {
		// Arrange
		let query = "data=dGVzdA==";

		// Act
		let params = QueryParams::parse(query);

		// Assert
		assert_eq!(params.parameter("data"), Some("dGVzdA=="));
	}

	#[rstest]
	fn test_parse_key_without_value() {
		let params = QueryParams::parse("sorted_attribute_name=&asc_sort");
		assert_eq!(params.parameter("sorted_attribute_name"), Some(""));
		assert_eq!(params.parameter("asc_sort"), Some(""));
	}

	#[rstest]
	fn test_parse_first_occurrence_wins() {
		let params = QueryParams::parse("page_index=1&page_index=7");
		assert_eq!(params.parameter("page_index"), Some("1"));
	}

	#[rstest]
	fn test_parse_percent_decodes_keys_and_values() {
		let params = QueryParams::parse("na%6De=%C3%A9l%C3%A8ve%20un");
		assert_eq!(params.parameter("name"), Some("élève un"));
	}

	#[rstest]
	fn test_parse_empty_query() {
		assert!(QueryParams::parse("").is_empty());
		assert!(QueryParams::parse("?").is_empty());
	}

	#[rstest]
	fn test_locale() {
		let params = QueryParams::new().with_locale("fr-FR");
		assert_eq!(params.locale(), Some("fr-FR"));
		assert_eq!(QueryParams::new().locale(), None);
	}

	#[rstest]
	#[case(Some("true"), true)]
	#[case(Some("TRUE"), false)]
	#[case(Some("1"), false)]
	#[case(None, false)]
	fn test_is_flag_set(#[case] value: Option<&str>, #[case] expected: bool) {
		// Arrange
		let mut params = QueryParams::new();
		if let Some(value) = value {
			params.insert("flag", value);
		}

		// Act & Assert
		assert_eq!(is_flag_set(&params, "flag"), expected);
	}

	#[rstest]
	#[case(Some("true"), true)]
	#[case(Some("True"), true)]
	#[case(Some("yes"), false)]
	#[case(Some(""), false)]
	#[case(None, false)]
	fn test_parse_bool(#[case] value: Option<&str>, #[case] expected: bool) {
		assert_eq!(parse_bool(value), expected);
	}

	#[rstest]
	fn test_hash_map_request() {
		let mut map = HashMap::new();
		map.insert("page_index".to_string(), "3".to_string());
		assert_eq!(map.parameter("page_index"), Some("3"));
		assert_eq!(map.locale(), None);
	}
}
