//! Filter → sort → paginate over an in-memory candidate list

use hirelist_core::Candidate;
use hirelist_core::settings::DEFAULT_PAGE_SIZE;

use crate::error::{Result, TableError};
use crate::filtering::{CandidateFilter, Filterable, filter_candidates};
use crate::pagination::{Pagination, Summary};
use crate::sorting::{SortDirection, SortField, SortState, Sortable, sort_candidates};

/// Everything that determines which rows are on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableQuery {
	filter: CandidateFilter,
	sort: SortState,
	page: usize,
	page_size: usize,
}

impl Default for TableQuery {
	fn default() -> Self {
		Self {
			filter: CandidateFilter::default(),
			sort: SortState::default(),
			page: 1,
			page_size: DEFAULT_PAGE_SIZE,
		}
	}
}

impl TableQuery {
	/// Query for page 1, default sort, no filter
	pub fn new(page_size: usize) -> Result<Self> {
		if page_size == 0 {
			return Err(TableError::InvalidPageSize);
		}
		Ok(Self {
			page_size,
			..Self::default()
		})
	}

	/// Sets the filter
	pub fn with_filter(mut self, filter: CandidateFilter) -> Self {
		self.filter = filter;
		self
	}

	/// Sets the sort
	pub fn with_sort(mut self, sort: SortState) -> Self {
		self.sort = sort;
		self
	}

	/// Sets the page (1-based); 0 is treated as 1
	pub fn with_page(mut self, page: usize) -> Self {
		self.page = page.max(1);
		self
	}

	/// Requested page
	pub fn page(&self) -> usize {
		self.page
	}

	/// Rows per page
	pub fn page_size(&self) -> usize {
		self.page_size
	}

	/// Runs the pipeline over `candidates`
	pub fn run<'a>(&self, candidates: &'a [Candidate]) -> TableView<'a> {
		let mut matching = filter_candidates(candidates, &self.filter);
		sort_candidates(&mut matching, self.sort);

		let pagination = Pagination::new(self.page_size)
			.with_total(matching.len())
			.at_page(self.page);

		tracing::trace!(
			matching = matching.len(),
			page = self.page,
			sort = %self.sort.field,
			direction = %self.sort.direction,
			"table recomputed"
		);

		TableView {
			matching,
			pagination,
		}
	}
}

impl Filterable for TableQuery {
	fn filter_by(&mut self, filter: CandidateFilter) {
		self.filter = filter;
	}

	fn clear_filters(&mut self) {
		self.filter = CandidateFilter::default();
	}

	fn current_filter(&self) -> &CandidateFilter {
		&self.filter
	}
}

impl Sortable for TableQuery {
	fn sort_by(&mut self, field: SortField, direction: SortDirection) {
		self.sort = SortState::new(field, direction);
	}

	fn current_sort(&self) -> SortState {
		self.sort
	}
}

/// One rendered row: the candidate and its position in the sorted list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableRow<'a> {
	/// 1-based position within the filtered and sorted list
	pub sequence: usize,
	/// The candidate shown on this row
	pub candidate: &'a Candidate,
}

/// Result of running a [`TableQuery`]
#[derive(Debug, Clone)]
pub struct TableView<'a> {
	matching: Vec<&'a Candidate>,
	pagination: Pagination,
}

impl<'a> TableView<'a> {
	/// Every candidate that passed the filter, in sorted order
	pub fn matching(&self) -> &[&'a Candidate] {
		&self.matching
	}

	/// Rows of the current page
	pub fn rows(&self) -> Vec<TableRow<'a>> {
		let range = self.pagination.range();
		let offset = range.start;
		self.matching[range]
			.iter()
			.enumerate()
			.map(|(i, &candidate)| TableRow {
				sequence: offset + i + 1,
				candidate,
			})
			.collect()
	}

	/// Pagination state for this result
	pub fn pagination(&self) -> &Pagination {
		&self.pagination
	}

	/// Number of candidates after filtering
	pub fn total_matching(&self) -> usize {
		self.matching.len()
	}

	/// Number of pages
	pub fn total_pages(&self) -> usize {
		self.pagination.total_pages()
	}

	/// Page-number links to show
	pub fn page_window(&self, width: usize) -> Vec<usize> {
		self.pagination.window(width)
	}

	/// Summary line for the footer
	pub fn summary(&self) -> Summary {
		self.pagination.summary()
	}
}
