//! Pagination functionality for the candidates table

use std::fmt;

/// Pagination state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
	/// Number of items per page
	pub per_page: usize,
	/// Current page number (1-indexed)
	pub current_page: usize,
	/// Total number of items
	pub total_items: usize,
}

impl Pagination {
	/// Creates a new pagination configuration
	///
	/// # Arguments
	///
	/// * `per_page` - Number of items per page, clamped to at least 1
	pub fn new(per_page: usize) -> Self {
		Self {
			per_page: per_page.max(1),
			current_page: 1,
			total_items: 0,
		}
	}

	/// Sets the total number of items
	pub fn with_total(mut self, total_items: usize) -> Self {
		self.total_items = total_items;
		self
	}

	/// Sets the current page without clamping
	pub fn at_page(mut self, page: usize) -> Self {
		self.current_page = page;
		self
	}

	/// Returns the total number of pages
	pub fn total_pages(&self) -> usize {
		if self.total_items == 0 {
			0
		} else {
			self.total_items.div_ceil(self.per_page)
		}
	}

	/// Returns the start index for the current page (0-indexed)
	pub fn start_index(&self) -> usize {
		(self.current_page.saturating_sub(1)) * self.per_page
	}

	/// Returns the end index for the current page (exclusive, 0-indexed)
	pub fn end_index(&self) -> usize {
		(self.start_index() + self.per_page).min(self.total_items)
	}

	/// Index range of the current page, clipped to the item count
	pub fn range(&self) -> std::ops::Range<usize> {
		let end = self.end_index();
		self.start_index().min(end)..end
	}

	/// Whether Previous is enabled
	pub fn has_previous(&self) -> bool {
		self.current_page > 1
	}

	/// Whether Next is enabled
	pub fn has_next(&self) -> bool {
		self.current_page < self.total_pages()
	}

	/// Moves to the next page if available
	pub fn next_page(&mut self) -> bool {
		if self.has_next() {
			self.current_page += 1;
			true
		} else {
			false
		}
	}

	/// Moves to the previous page if available
	pub fn prev_page(&mut self) -> bool {
		if self.has_previous() {
			self.current_page -= 1;
			true
		} else {
			false
		}
	}

	/// Sets the current page
	pub fn set_page(&mut self, page: usize) {
		self.current_page = self.clamp(page);
	}

	/// Clamps `page` into `[1, max(total_pages, 1)]`
	pub fn clamp(&self, page: usize) -> usize {
		page.max(1).min(self.total_pages().max(1))
	}

	/// Page-number links around the current page
	pub fn window(&self, width: usize) -> Vec<usize> {
		page_window(self.current_page, self.total_pages(), width)
	}

	/// "Showing X to Y of Z" line for the current page
	pub fn summary(&self) -> Summary {
		Summary {
			first: self.start_index() + 1,
			last: (self.start_index() + self.per_page).min(self.total_items),
			total: self.total_items,
		}
	}
}

/// Computes up to `width` page numbers to show around `current`
///
/// Near the start the window is pinned to page 1, near the end it holds
/// the last pages, otherwise it is centred on `current`. Pages outside
/// `[1, total]` are never returned.
pub fn page_window(current: usize, total: usize, width: usize) -> Vec<usize> {
	let count = width.min(total);
	if count == 0 {
		return Vec::new();
	}

	let half = width / 2;
	let start = if current <= half + 1 {
		1
	} else if current + half >= total {
		total + 1 - count
	} else {
		current - half
	};

	(start..start + count).filter(|page| *page <= total).collect()
}

/// The range of rows on screen and the filtered total
///
/// Displays as `Showing {first} to {last} of {total} candidates`. With no
/// matches this reads `Showing 1 to 0 of 0 candidates`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
	/// 1-based index of the first row shown
	pub first: usize,
	/// 1-based index of the last row shown
	pub last: usize,
	/// Number of candidates after filtering
	pub total: usize,
}

impl fmt::Display for Summary {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"Showing {} to {} of {} candidates",
			self.first, self.last, self.total
		)
	}
}
