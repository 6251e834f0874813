//! Property access on arbitrary records
//!
//! The engine never knows the concrete record type. Every read of a named
//! attribute goes through a [`PropertyAccessor`], which resolves a reader by
//! the following rule:
//!
//! 1. Capitalize the first character of the attribute name and look for the
//!    reader `get` + `Name` (e.g. `title` -> `getTitle`).
//! 2. If that reader is absent **and** the lookup is [`Lookup::Boolean`],
//!    retry with `is` + `Name` (e.g. `active` -> `isActive`).
//!
//! [`AccessorMap`] implements this rule over readers registered at setup time.
//! Any closure `Fn(&T, &str, Lookup) -> AccessResult` is also an accessor, for
//! callers that prefer a single `match` over attribute names.
//!
//! # Examples
//!
//! ```
//! use datatable_core::{AccessError, AccessorMap, AttrValue, Lookup, PropertyAccessor};
//!
//! struct User {
//!     name: String,
//!     active: bool,
//! }
//!
//! let accessor = AccessorMap::new()
//!     .getter("name", |u: &User| u.name.clone())
//!     .flag("active", |u: &User| u.active);
//!
//! let user = User { name: "Alice".into(), active: true };
//!
//! assert_eq!(
//!     accessor.read(&user, "name", Lookup::Plain),
//!     Ok(AttrValue::Text("Alice".into()))
//! );
//! // `isActive` is only consulted for boolean lookups
//! assert!(matches!(
//!     accessor.read(&user, "active", Lookup::Plain),
//!     Err(AccessError::NotFound { .. })
//! ));
//! assert_eq!(accessor.read(&user, "active", Lookup::Boolean), Ok(AttrValue::Bool(true)));
//! ```

use crate::value::AttrValue;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Prefix of readers consulted for every lookup
pub const GETTER_PREFIX: &str = "get";

/// Prefix of readers consulted only for boolean lookups
pub const FLAG_PREFIX: &str = "is";

/// Kind of lookup requested by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lookup {
	/// Only the `get` reader is consulted
	#[default]
	Plain,
	/// The `get` reader is consulted first, then the `is` reader
	Boolean,
}

/// Failure to read an attribute off a record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
	/// No reader exists for the attribute
	#[error("no reader found for attribute `{attribute}`")]
	NotFound {
		/// The attribute that was looked up
		attribute: String,
	},
	/// The reader exists but failed
	#[error("reader `{reader}` failed: {message}")]
	Invocation {
		/// Name of the reader that failed (e.g. `getTitle`)
		reader: String,
		/// Failure description returned by the reader
		message: String,
	},
}

impl AccessError {
	/// Creates a not-found error
	pub fn not_found(attribute: impl Into<String>) -> Self {
		Self::NotFound {
			attribute: attribute.into(),
		}
	}

	/// Creates an invocation error
	pub fn invocation(reader: impl Into<String>, message: impl Into<String>) -> Self {
		Self::Invocation {
			reader: reader.into(),
			message: message.into(),
		}
	}

	/// Returns true if no reader exists for the attribute
	pub fn is_not_found(&self) -> bool {
		matches!(self, Self::NotFound { .. })
	}
}

/// Result of reading an attribute
pub type AccessResult = Result<AttrValue, AccessError>;

/// Capability to read named attributes off records of type `T`
pub trait PropertyAccessor<T> {
	/// Reads `attribute` off `record`
	fn read(&self, record: &T, attribute: &str, lookup: Lookup) -> AccessResult;
}

impl<T, F> PropertyAccessor<T> for F
where
	F: Fn(&T, &str, Lookup) -> AccessResult,
{
	fn read(&self, record: &T, attribute: &str, lookup: Lookup) -> AccessResult {
		self(record, attribute, lookup)
	}
}

/// Builds the reader name for an attribute
///
/// Returns `None` for an empty attribute name.
///
/// ```
/// use datatable_core::accessor::{reader_name, GETTER_PREFIX, FLAG_PREFIX};
///
/// assert_eq!(reader_name(GETTER_PREFIX, "title").as_deref(), Some("getTitle"));
/// assert_eq!(reader_name(FLAG_PREFIX, "active").as_deref(), Some("isActive"));
/// assert_eq!(reader_name(GETTER_PREFIX, ""), None);
/// ```
pub fn reader_name(prefix: &str, attribute: &str) -> Option<String> {
	let mut chars = attribute.chars();
	let first = chars.next()?;
	let mut name = String::with_capacity(prefix.len() + attribute.len());
	name.push_str(prefix);
	name.extend(first.to_uppercase());
	name.push_str(chars.as_str());
	Some(name)
}

type Reader<T> = Box<dyn Fn(&T) -> Result<AttrValue, String> + Send + Sync>;

/// Registry of readers for one record type
///
/// Readers are keyed by their full name (`getTitle`, `isActive`), so two
/// attribute spellings that capitalize to the same reader resolve to it.
pub struct AccessorMap<T> {
	readers: HashMap<String, Reader<T>>,
}

impl<T> AccessorMap<T> {
	/// Creates an empty registry
	pub fn new() -> Self {
		Self {
			readers: HashMap::new(),
		}
	}

	/// Registers the `get` reader for `attribute`
	pub fn getter<V, F>(self, attribute: &str, read: F) -> Self
	where
		V: Into<AttrValue>,
		F: Fn(&T) -> V + Send + Sync + 'static,
	{
		self.try_getter(attribute, move |record| Ok(read(record)))
	}

	/// Registers a fallible `get` reader for `attribute`
	pub fn try_getter<V, F>(self, attribute: &str, read: F) -> Self
	where
		V: Into<AttrValue>,
		F: Fn(&T) -> Result<V, String> + Send + Sync + 'static,
	{
		match reader_name(GETTER_PREFIX, attribute) {
			Some(name) => self.reader(name, read),
			None => self,
		}
	}

	/// Registers the `is` reader for a boolean `attribute`
	pub fn flag<F>(self, attribute: &str, read: F) -> Self
	where
		F: Fn(&T) -> bool + Send + Sync + 'static,
	{
		match reader_name(FLAG_PREFIX, attribute) {
			Some(name) => self.reader(name, move |record| Ok::<_, String>(read(record))),
			None => self,
		}
	}

	/// Registers a reader under its full name
	pub fn reader<V, F>(mut self, name: impl Into<String>, read: F) -> Self
	where
		V: Into<AttrValue>,
		F: Fn(&T) -> Result<V, String> + Send + Sync + 'static,
	{
		self.readers.insert(
			name.into(),
			Box::new(move |record: &T| -> Result<AttrValue, String> { read(record).map(Into::into) }),
		);
		self
	}

	/// Returns true if a reader with this full name is registered
	pub fn contains_reader(&self, name: &str) -> bool {
		self.readers.contains_key(name)
	}

	/// Number of registered readers
	pub fn len(&self) -> usize {
		self.readers.len()
	}

	/// Returns true if no reader is registered
	pub fn is_empty(&self) -> bool {
		self.readers.is_empty()
	}

	fn resolve(&self, attribute: &str, lookup: Lookup) -> Option<(String, &Reader<T>)> {
		let getter = reader_name(GETTER_PREFIX, attribute)?;
		if let Some(reader) = self.readers.get(&getter) {
			return Some((getter, reader));
		}
		if lookup == Lookup::Boolean {
			let flag = reader_name(FLAG_PREFIX, attribute)?;
			if let Some(reader) = self.readers.get(&flag) {
				return Some((flag, reader));
			}
		}
		None
	}
}

impl<T> Default for AccessorMap<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> fmt::Debug for AccessorMap<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut names: Vec<&str> = self.readers.keys().map(String::as_str).collect();
		names.sort_unstable();
		f.debug_struct("AccessorMap")
			.field("readers", &names)
			.finish()
	}
}

impl<T> PropertyAccessor<T> for AccessorMap<T> {
	fn read(&self, record: &T, attribute: &str, lookup: Lookup) -> AccessResult {
		let Some((name, reader)) = self.resolve(attribute, lookup) else {
			return Err(AccessError::not_found(attribute));
		};
		reader(record).map_err(|message| AccessError::invocation(name, message))
	}
}
