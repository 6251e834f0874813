//! Tests of the facade re-exports

use datatable::prelude::*;
use datatable_integration_tests::{Order, OrderQuery, order_accessor, sample_orders};
use rstest::*;

#[fixture]
fn orders() -> Vec<Order> {
	sample_orders()
}

#[fixture]
fn order_table() -> DataTableManager<Order> {
	let settings = DataTableSettings::default();
	let mut table = DataTableManager::from_settings(&settings, "/orders", "/orders/filter", order_accessor());
	table.add_column("order.id", "id", true);
	table.add_column("order.total", "total", true);
	table.add_filter(FilterType::Text, "customer", "order.customer");
	table.add_filter(FilterType::Boolean, "paid", "order.paid");
	table
}

#[rstest]
fn test_prelude_pipeline(mut order_table: DataTableManager<Order>, orders: Vec<Order>) {
	// Arrange
	let request = QueryParams::parse(
		"filter_panel_updateFilters=true&filter_panel_customer=ACME&sorted_attribute_name=total&asc_sort=true",
	);

	// Act
	order_table.filter_sort_and_paginate(&request, orders);

	// Assert
	let ids: Vec<i64> = order_table.items().iter().map(|o| o.id).collect();
	assert_eq!(ids, vec![3]);
	assert_eq!(
		order_table.update_sort_state(&QueryParams::new()),
		DataTableSort {
			sorted_attribute_name: Some("total".to_string()),
			ascending: true,
		}
	);
}

#[rstest]
fn test_prelude_delegated_binding(mut order_table: DataTableManager<Order>) {
	// Arrange
	let request = QueryParams::parse(
		"filter_panel_updateFilters=true&filter_panel_customer=Globex&filter_panel_paid=true&items_per_page=10",
	);

	// Act
	let query = order_table.update_filter_state(&request, OrderQuery::default(), &SerdeBinder);
	let props = order_table.update_pagination_state(&request);

	// Assert
	assert_eq!(
		query,
		Some(OrderQuery {
			customer: Some("Globex".to_string()),
			paid: Some(true),
		})
	);
	assert_eq!(
		props,
		Some(PaginationProperties {
			current_page_index: 1,
			items_per_page: 10,
		})
	);
}

#[rstest]
fn test_core_module_path() {
	let accessor = datatable::core::AccessorMap::new().getter("len", |s: &String| s.len() as i64);
	let value = accessor.read(&"four".to_string(), "len", Lookup::Plain);
	assert_eq!(value, Ok(AttrValue::Int(4)));
}
