//! Common test fixtures for datatable-tables tests

#![allow(dead_code)]

use datatable_core::AccessorMap;
use datatable_filters::FilterType;
use datatable_tables::DataTableManager;
use rstest::*;
use serde::{Deserialize, Serialize};

/// Test user data structure for table tests
#[derive(Debug, Clone, PartialEq)]
pub struct TestUser {
	pub id: i64,
	pub name: String,
	pub email: String,
	pub active: bool,
}

/// Filter object populated by `update_filter_state`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserFilter {
	pub name: Option<String>,
	pub active: Option<bool>,
	pub min_id: i64,
}

/// Filter object that leaves empty fields out of its serialized form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SparseUserFilter {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub active: Option<bool>,
}

pub fn user(id: i64, name: &str, active: bool) -> TestUser {
	TestUser {
		id,
		name: name.to_string(),
		email: format!("{}@example.com", name.to_lowercase()),
		active,
	}
}

pub fn ids(users: &[TestUser]) -> Vec<i64> {
	users.iter().map(|u| u.id).collect()
}

/// Fixture providing the accessor for `TestUser`
#[fixture]
pub fn user_accessor() -> AccessorMap<TestUser> {
	AccessorMap::new()
		.getter("id", |u: &TestUser| u.id)
		.getter("name", |u: &TestUser| u.name.clone())
		.getter("email", |u: &TestUser| u.email.clone())
		.flag("active", |u: &TestUser| u.active)
}

/// Fixture providing five users, odd ids active
#[fixture]
pub fn five_users() -> Vec<TestUser> {
	vec![
		user(1, "Alice", true),
		user(2, "Bob", false),
		user(3, "Charlie", true),
		user(4, "Dave", false),
		user(5, "Eve", true),
	]
}

/// Fixture providing ten users
#[fixture]
pub fn ten_users() -> Vec<TestUser> {
	(1..=10).map(|id| user(id, &format!("User{id:02}"), id % 2 == 0)).collect()
}

/// Fixture providing a table with columns and filters configured
#[fixture]
pub fn user_table(user_accessor: AccessorMap<TestUser>) -> DataTableManager<TestUser> {
	let mut table = DataTableManager::new("/admin/users", "/admin/users/filter", 2, true, user_accessor);

	table.add_column("user.id", "id", true);
	table.add_column("user.name", "name", true);
	table.add_email_column("user.email", "email", true);
	table.add_boolean_column("user.active", "active", "label.yes", "label.no");
	table.add_action_column("user.actions");

	table.add_filter(FilterType::Text, "name", "filter.name");
	table.add_filter(FilterType::Boolean, "active", "filter.active");

	table
}
