//! The table engine
//!
//! [`DataTableManager`] owns the columns, filter panel, sort and pagination
//! state of one logical table. It is used in one of two ways per request:
//!
//! - **Self-paginating**: [`DataTableManager::filter_sort_and_paginate`]
//!   filters, sorts and slices an in-memory sequence and keeps the page
//! - **Delegated**: the caller reads the updated state through
//!   [`update_pagination_state`](DataTableManager::update_pagination_state),
//!   [`update_sort_state`](DataTableManager::update_sort_state) and
//!   [`update_filter_state`](DataTableManager::update_filter_state), queries
//!   its own store, then hands the page back with
//!   [`set_items`](DataTableManager::set_items)
//!
//! Mixing both within one request leaves the state consistent, but the stored
//! page may then have been computed from inputs of another step.
//!
//! Every method that reads a request takes `&mut self`: one engine serves one
//! request at a time. Share it across threads only behind a lock.

use crate::column::{ColumnType, DataTableColumn};
use crate::sort::DataTableSort;
use crate::state::TableState;
use datatable_conf::DataTableSettings;
use datatable_core::{AccessorMap, ParameterNames, PropertyAccessor, RequestParams};
use datatable_filters::{FilterPanel, FilterType, PropertyBinder, ReferenceList, apply_filters};
use datatable_pagination::{PageLinks, PageView, PaginationProperties};
use std::fmt;

/// Filter, sort and pagination engine of one table
///
/// # Examples
///
/// ```
/// use datatable_core::{AccessorMap, QueryParams};
/// use datatable_filters::FilterType;
/// use datatable_tables::DataTableManager;
///
/// struct Book {
///     title: &'static str,
///     pages: i64,
///     available: bool,
/// }
///
/// let accessor = AccessorMap::new()
///     .getter("title", |b: &Book| b.title)
///     .getter("pages", |b: &Book| b.pages)
///     .flag("available", |b: &Book| b.available);
///
/// let mut table = DataTableManager::new("/books", "/books/filter", 2, true, accessor);
/// table.add_column("book.title", "title", true);
/// table.add_filter(FilterType::Boolean, "available", "book.available");
///
/// let books = vec![
///     Book { title: "Dune", pages: 412, available: true },
///     Book { title: "Emma", pages: 474, available: false },
///     Book { title: "Ubik", pages: 202, available: true },
///     Book { title: "Beloved", pages: 324, available: true },
/// ];
/// let request = QueryParams::parse(
///     "filter_panel_updateFilters=true&filter_panel_available=true\
///      &sorted_attribute_name=pages&asc_sort=true",
/// );
/// table.filter_sort_and_paginate(&request, books);
///
/// let titles: Vec<_> = table.items().iter().map(|b| b.title).collect();
/// assert_eq!(titles, ["Ubik", "Beloved"]);
/// assert_eq!(table.paginator().map(|p| p.num_pages()), Some(2));
/// ```
pub struct DataTableManager<T, A = AccessorMap<T>> {
	sort_url: String,
	columns: Vec<DataTableColumn>,
	filter_panel: FilterPanel,
	state: TableState,
	parameters: ParameterNames,
	accessor: A,
	page: Option<PageView<T>>,
	locale: Option<String>,
}

impl<T, A> DataTableManager<T, A>
where
	A: PropertyAccessor<T>,
{
	/// Creates an engine with the default request parameter names
	///
	/// # Arguments
	///
	/// * `sort_url` - Base URL of sort and page links
	/// * `filter_url` - URL the filter form submits to
	/// * `default_items_per_page` - Page size until a request sets one
	/// * `enable_paginator` - Whether the engine paginates at all
	/// * `accessor` - Reads record attributes by name
	pub fn new(
		sort_url: impl Into<String>,
		filter_url: impl Into<String>,
		default_items_per_page: usize,
		enable_paginator: bool,
		accessor: A,
	) -> Self {
		Self {
			sort_url: sort_url.into(),
			columns: Vec::new(),
			filter_panel: FilterPanel::new(filter_url),
			state: TableState::new(default_items_per_page, enable_paginator),
			parameters: ParameterNames::default(),
			accessor,
			page: None,
			locale: None,
		}
	}

	/// Creates an engine from settings
	pub fn from_settings(
		settings: &DataTableSettings,
		sort_url: impl Into<String>,
		filter_url: impl Into<String>,
		accessor: A,
	) -> Self {
		Self {
			parameters: settings.parameters.clone(),
			..Self::new(
				sort_url,
				filter_url,
				settings.default_items_per_page,
				settings.enable_paginator,
				accessor,
			)
		}
	}

	/// Adds a plain text column
	pub fn add_column(&mut self, title: impl Into<String>, attribute: impl Into<String>, sortable: bool) {
		self.push_column(title, Some(attribute.into()), sortable, ColumnType::Text);
	}

	/// Adds a column whose values are message keys
	pub fn add_label_column(
		&mut self,
		title: impl Into<String>,
		attribute: impl Into<String>,
		sortable: bool,
	) {
		self.push_column(title, Some(attribute.into()), sortable, ColumnType::Label);
	}

	/// Adds the column of row actions
	pub fn add_action_column(&mut self, title: impl Into<String>) {
		self.push_column(title, None, false, ColumnType::Action);
	}

	/// Adds a boolean column shown through two labels
	pub fn add_boolean_column(
		&mut self,
		title: impl Into<String>,
		attribute: impl Into<String>,
		label_true: impl Into<String>,
		label_false: impl Into<String>,
	) {
		self.columns
			.push(DataTableColumn::boolean(title, attribute, label_true, label_false));
	}

	/// Adds a column rendered by the named template macro
	pub fn add_free_column(&mut self, title: impl Into<String>, macro_name: impl Into<String>) {
		self.push_column(title, Some(macro_name.into()), false, ColumnType::Action);
	}

	/// Adds a column of email addresses
	pub fn add_email_column(
		&mut self,
		title: impl Into<String>,
		attribute: impl Into<String>,
		sortable: bool,
	) {
		self.push_column(title, Some(attribute.into()), sortable, ColumnType::Email);
	}

	fn push_column(
		&mut self,
		title: impl Into<String>,
		attribute: Option<String>,
		sortable: bool,
		column_type: ColumnType,
	) {
		self.columns
			.push(DataTableColumn::new(title, attribute, sortable, column_type));
	}

	/// Adds a filter to the filter panel
	///
	/// Use [`add_drop_down_list_filter`](Self::add_drop_down_list_filter) for
	/// drop-down filters.
	pub fn add_filter(
		&mut self,
		filter_type: FilterType,
		parameter_name: impl Into<String>,
		label: impl Into<String>,
	) {
		self.filter_panel.add_filter(filter_type, parameter_name, label);
	}

	/// Adds a drop-down filter over `reference_list`
	pub fn add_drop_down_list_filter(
		&mut self,
		parameter_name: impl Into<String>,
		label: impl Into<String>,
		reference_list: ReferenceList,
	) {
		self.filter_panel
			.add_drop_down_list_filter(parameter_name, label, reference_list);
	}

	/// Filters, sorts and paginates `records`, keeping the resulting page
	///
	/// Filter values follow the reset/update/persist protocol of
	/// [`FilterPanel::resolve`]. Without pagination the whole filtered and
	/// sorted sequence is kept as a single page.
	pub fn filter_sort_and_paginate<R>(&mut self, request: &R, records: Vec<T>)
	where
		R: RequestParams + ?Sized,
	{
		self.filter_panel.resolve(request, &self.parameters);
		let mut records = apply_filters(records, self.filter_panel.filters(), &self.accessor);

		self.state.sort_mut().update(request, &self.parameters);
		self.state.sort().apply(&mut records, &self.accessor);

		let page = if self.state.pagination().is_enabled() {
			let props = self.state.pagination_mut().update(request, &self.parameters);
			PageView::paginate(records, props.items_per_page, props.current_page_index)
		} else {
			PageView::unpaged(records)
		};
		tracing::debug!(
			page = page.number(),
			num_pages = page.num_pages(),
			count = page.count(),
			"page computed"
		);
		self.page = Some(page);
	}

	/// Reads the pagination parameters of the request
	///
	/// Returns `None` when pagination is disabled. The request locale is
	/// recorded either way.
	pub fn update_pagination_state<R>(&mut self, request: &R) -> Option<PaginationProperties>
	where
		R: RequestParams + ?Sized,
	{
		self.locale = request.locale().map(str::to_string);
		if !self.state.pagination().is_enabled() {
			return None;
		}
		Some(self.state.pagination_mut().update(request, &self.parameters))
	}

	/// Reads the sort parameters of the request
	pub fn update_sort_state<R>(&mut self, request: &R) -> DataTableSort
	where
		R: RequestParams + ?Sized,
	{
		self.state.sort_mut().update(request, &self.parameters)
	}

	/// Reads the filter values of the request and binds them onto `target`
	///
	/// Every non-blank resolved value is passed to `binder` keyed by the
	/// filter's parameter name. Returns `None` when binding fails; the stored
	/// filter values are updated regardless.
	pub fn update_filter_state<R, K, B>(&mut self, request: &R, mut target: K, binder: &B) -> Option<K>
	where
		R: RequestParams + ?Sized,
		B: PropertyBinder<K> + ?Sized,
	{
		self.filter_panel.resolve(request, &self.parameters);
		let values = self.filter_panel.active_values();
		match binder.bind(&mut target, &values) {
			Ok(()) => Some(target),
			Err(err) => {
				tracing::error!(error = %err, "failed to bind filter values");
				None
			}
		}
	}

	/// Stores a page sliced by an external source
	///
	/// `total_count` is the number of records across all pages. The page
	/// position and size come from the last
	/// [`update_pagination_state`](Self::update_pagination_state).
	pub fn set_items(&mut self, items: Vec<T>, total_count: usize) {
		let pagination = self.state.pagination();
		self.page = Some(PageView::delegated(
			items,
			total_count,
			pagination.items_per_page(),
			pagination.current_page(),
		));
	}

	/// Drops the stored page and locale; columns, filters and state are kept
	pub fn clear_items(&mut self) {
		self.page = None;
		self.locale = None;
	}

	/// Records of the stored page, empty when none is stored
	pub fn items(&self) -> &[T] {
		self.page.as_ref().map(PageView::items).unwrap_or_default()
	}

	/// The stored page
	pub fn paginator(&self) -> Option<&PageView<T>> {
		self.page.as_ref()
	}

	/// Navigation links of the stored page, built on the sort URL
	pub fn page_links(&self) -> Option<PageLinks> {
		self.page
			.as_ref()
			.map(|page| page.links(&self.sort_url, &self.parameters.page_index))
	}
}

impl<T, A> DataTableManager<T, A> {
	/// Columns in display order
	pub fn columns(&self) -> &[DataTableColumn] {
		&self.columns
	}

	/// Replaces all columns
	pub fn set_columns(&mut self, columns: Vec<DataTableColumn>) {
		self.columns = columns;
	}

	/// The filter panel
	pub fn filter_panel(&self) -> &FilterPanel {
		&self.filter_panel
	}

	/// The filter panel, for editing
	pub fn filter_panel_mut(&mut self) -> &mut FilterPanel {
		&mut self.filter_panel
	}

	/// Replaces the filter panel
	pub fn set_filter_panel(&mut self, filter_panel: FilterPanel) {
		self.filter_panel = filter_panel;
	}

	/// Base URL of sort and page links
	pub fn sort_url(&self) -> &str {
		&self.sort_url
	}

	/// Replaces the base URL of sort and page links
	pub fn set_sort_url(&mut self, sort_url: impl Into<String>) {
		self.sort_url = sort_url.into();
	}

	/// Returns true if the engine paginates
	pub fn enable_paginator(&self) -> bool {
		self.state.pagination().is_enabled()
	}

	/// Locale of the last request seen by
	/// [`update_pagination_state`](Self::update_pagination_state)
	pub fn locale(&self) -> Option<&str> {
		self.locale.as_deref()
	}

	/// Replaces the locale
	pub fn set_locale(&mut self, locale: Option<String>) {
		self.locale = locale;
	}

	/// Sort and pagination state
	pub fn state(&self) -> &TableState {
		&self.state
	}

	/// Request parameter names
	pub fn parameter_names(&self) -> &ParameterNames {
		&self.parameters
	}

	/// Prefix of the request fields of the filter form
	pub fn filter_panel_prefix(&self) -> &str {
		&self.parameters.filter_prefix
	}

	/// The attribute reader
	pub fn accessor(&self) -> &A {
		&self.accessor
	}
}

impl<T, A> fmt::Debug for DataTableManager<T, A> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DataTableManager")
			.field("sort_url", &self.sort_url)
			.field("columns", &self.columns)
			.field("filter_panel", &self.filter_panel)
			.field("state", &self.state)
			.field("parameters", &self.parameters)
			.field("items", &self.page.as_ref().map(PageView::len))
			.field("locale", &self.locale)
			.finish_non_exhaustive()
	}
}
