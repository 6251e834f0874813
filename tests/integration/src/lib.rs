//! Integration test utilities for datatable
//!
//! Shared record types and sample data for tests that drive the facade crate.

use datatable::AccessorMap;
use serde::{Deserialize, Serialize};

/// Record type used across integration tests
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
	pub id: i64,
	pub customer: String,
	pub total: f64,
	pub paid: bool,
}

/// Externally queried filter object
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderQuery {
	pub customer: Option<String>,
	pub paid: Option<bool>,
}

/// Four orders, two of them from ACME
pub fn sample_orders() -> Vec<Order> {
	[
		(1, "ACME", 120.0, true),
		(2, "Globex", 80.5, false),
		(3, "ACME", 15.0, false),
		(4, "Initech", 300.0, true),
	]
	.into_iter()
	.map(|(id, customer, total, paid)| Order {
		id,
		customer: customer.to_string(),
		total,
		paid,
	})
	.collect()
}

/// Accessor exposing every `Order` attribute
pub fn order_accessor() -> AccessorMap<Order> {
	AccessorMap::new()
		.getter("id", |o: &Order| o.id)
		.getter("customer", |o: &Order| o.customer.clone())
		.getter("total", |o: &Order| o.total)
		.flag("paid", |o: &Order| o.paid)
}
