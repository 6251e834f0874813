//! Page views over a sequence of records
//!
//! A [`PageView`] holds the records visible on the current page together with
//! the numbers needed to render navigation. It is built either by slicing a
//! full in-memory sequence ([`PageView::paginate`]) or by wrapping a page an
//! external source already sliced ([`PageView::delegated`]).

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters left as-is in page parameter names and values
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
	.remove(b'-')
	.remove(b'_')
	.remove(b'.')
	.remove(b'~');

/// The records of one page plus navigation metadata
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<T> {
	items: Vec<T>,
	number: usize,
	num_pages: usize,
	count: usize,
	page_size: usize,
}

impl<T> PageView<T> {
	/// Slices `records` down to the requested page
	///
	/// The page number is clamped into `[1, num_pages]`. A page size of 0
	/// puts every record on a single page.
	///
	/// # Examples
	///
	/// ```
	/// use datatable_pagination::PageView;
	///
	/// let page = PageView::paginate((1..=10).collect::<Vec<_>>(), 3, 4);
	/// assert_eq!(page.items(), &[10]);
	/// assert_eq!(page.number(), 4);
	/// assert_eq!(page.num_pages(), 4);
	///
	/// // Past the end: clamped to the last page
	/// let page = PageView::paginate((1..=10).collect::<Vec<_>>(), 3, 9);
	/// assert_eq!(page.number(), 4);
	/// ```
	pub fn paginate(records: Vec<T>, page_size: usize, page: usize) -> Self {
		if page_size == 0 {
			return Self::unpaged(records);
		}
		let count = records.len();
		let num_pages = page_count(count, page_size);
		let number = page.clamp(1, num_pages);
		let start = (number - 1) * page_size;
		let items = records.into_iter().skip(start).take(page_size).collect();
		Self {
			items,
			number,
			num_pages,
			count,
			page_size,
		}
	}

	/// Wraps a page sliced by an external source
	///
	/// `count` is the total number of records across all pages. The items
	/// are kept as given; no offsets are re-derived.
	///
	/// ```
	/// use datatable_pagination::PageView;
	///
	/// let page = PageView::delegated(vec!["k", "l"], 12, 5, 3);
	/// assert_eq!(page.items(), &["k", "l"]);
	/// assert_eq!(page.num_pages(), 3);
	/// assert_eq!(page.start_index(), 11);
	/// ```
	pub fn delegated(items: Vec<T>, count: usize, page_size: usize, page: usize) -> Self {
		let page_size = if page_size == 0 { count.max(items.len()) } else { page_size };
		let num_pages = page_count(count, page_size);
		Self {
			items,
			number: page.clamp(1, num_pages),
			num_pages,
			count,
			page_size,
		}
	}

	/// Puts every record on a single page
	pub fn unpaged(records: Vec<T>) -> Self {
		let count = records.len();
		Self {
			items: records,
			number: 1,
			num_pages: 1,
			count,
			page_size: count,
		}
	}

	/// Records on this page
	pub fn items(&self) -> &[T] {
		&self.items
	}

	/// Consumes the view, returning the records on this page
	pub fn into_items(self) -> Vec<T> {
		self.items
	}

	/// Current page number (1-indexed)
	pub fn number(&self) -> usize {
		self.number
	}

	/// Total number of pages, at least 1
	pub fn num_pages(&self) -> usize {
		self.num_pages
	}

	/// Total number of records across all pages
	pub fn count(&self) -> usize {
		self.count
	}

	/// Records per page
	pub fn page_size(&self) -> usize {
		self.page_size
	}

	/// Number of records on this page
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Returns true if this page holds no records
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// 1-based position of the first record on this page, 0 when empty
	pub fn start_index(&self) -> usize {
		if self.items.is_empty() {
			0
		} else {
			(self.number - 1) * self.page_size + 1
		}
	}

	/// 1-based position of the last record on this page, 0 when empty
	pub fn end_index(&self) -> usize {
		if self.items.is_empty() {
			0
		} else {
			self.start_index() + self.items.len() - 1
		}
	}

	/// Returns true if there is a next page
	pub fn has_next(&self) -> bool {
		self.number < self.num_pages
	}

	/// Returns true if there is a previous page
	pub fn has_previous(&self) -> bool {
		self.number > 1
	}

	/// All page numbers (1-indexed)
	pub fn page_range(&self) -> std::ops::RangeInclusive<usize> {
		1..=self.num_pages
	}

	/// Builds navigation links by appending `page_param` to `base_url`
	///
	/// # Examples
	///
	/// ```
	/// use datatable_pagination::PageView;
	///
	/// let page = PageView::paginate((1..=10).collect::<Vec<_>>(), 3, 2);
	/// let links = page.links("/users?sorted_attribute_name=name", "page_index");
	///
	/// assert_eq!(
	///     links.previous.as_deref(),
	///     Some("/users?sorted_attribute_name=name&page_index=1")
	/// );
	/// assert_eq!(links.next.as_deref(), Some("/users?sorted_attribute_name=name&page_index=3"));
	/// assert_eq!(links.pages.len(), 4);
	/// assert!(links.pages[1].current);
	/// ```
	pub fn links(&self, base_url: &str, page_param: &str) -> PageLinks {
		let url_for = |number: usize| page_url(base_url, page_param, number);
		PageLinks {
			previous: self.has_previous().then(|| url_for(self.number - 1)),
			next: self.has_next().then(|| url_for(self.number + 1)),
			pages: self
				.page_range()
				.map(|number| PageLink {
					number,
					url: url_for(number),
					current: number == self.number,
				})
				.collect(),
		}
	}
}

/// Navigation links of one page view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLinks {
	/// Link to the previous page, if any
	pub previous: Option<String>,
	/// Link to the next page, if any
	pub next: Option<String>,
	/// One link per page
	pub pages: Vec<PageLink>,
}

/// Link to a single page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
	/// Page number (1-indexed)
	pub number: usize,
	/// Target URL
	pub url: String,
	/// True for the page being displayed
	pub current: bool,
}

fn page_count(count: usize, page_size: usize) -> usize {
	if count == 0 || page_size == 0 {
		1
	} else {
		count.div_ceil(page_size)
	}
}

fn page_url(base_url: &str, page_param: &str, number: usize) -> String {
	let separator = match base_url {
		"" => "?",
		url if url.ends_with('?') || url.ends_with('&') => "",
		url if url.contains('?') => "&",
		_ => "?",
	};
	format!(
		"{base_url}{separator}{}={number}",
		utf8_percent_encode(page_param, QUERY_COMPONENT)
	)
}
