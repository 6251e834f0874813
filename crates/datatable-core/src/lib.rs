//! Core building blocks for datatable
//!
//! This crate isolates everything the engine needs to know about records and
//! requests:
//!
//! - **Property access** ([`accessor`]): reading a named attribute off an
//!   arbitrary record, with the `get`/`is` reader convention
//! - **Attribute values** ([`value`]): the runtime form of what readers return
//! - **Requests** ([`request`]): flat parameter lookup plus locale
//! - **Wire names** ([`params`]): names of the request parameters the engine reads
//! - **Ordering** ([`comparator`]): stable ordering of records by one attribute

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod accessor;
pub mod comparator;
pub mod params;
pub mod request;
pub mod value;

pub use accessor::{AccessError, AccessResult, AccessorMap, Lookup, PropertyAccessor};
pub use comparator::AttributeComparator;
pub use params::ParameterNames;
pub use request::{QueryParams, RequestParams};
pub use value::AttrValue;
