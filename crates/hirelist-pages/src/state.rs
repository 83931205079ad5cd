//! Shared page state
//!
//! [`FilterState`] is created by the page and cloned into both the filter
//! bar (which writes it) and the table (which reads it). [`ViewState`] is
//! private to the table.

use hirelist_tables::{CandidateFilter, RoleFilter, SortState};

use crate::reactive::{Signal, Subscription};

/// Role selection and search text
#[derive(Debug, Clone, Default)]
pub struct FilterState {
	/// Selected role, or "All"
	pub role: Signal<RoleFilter>,
	/// Free-text search over name and email
	pub search: Signal<String>,
}

impl FilterState {
	/// State starting at `role` with an empty search
	pub fn new(role: RoleFilter) -> Self {
		Self {
			role: Signal::new(role),
			search: Signal::new(String::new()),
		}
	}

	/// Current filter as a plain value
	pub fn snapshot(&self) -> CandidateFilter {
		CandidateFilter {
			role: self.role.get(),
			search: self.search.get(),
		}
	}

	/// Run `f` whenever the role or the search changes
	pub fn subscribe<F>(&self, f: F) -> Subscription
	where
		F: Fn() + Clone + 'static,
	{
		Subscription::batch([self.role.subscribe(f.clone()), self.search.subscribe(f)])
	}
}

/// Page number and sort of the table
#[derive(Debug, Clone)]
pub struct ViewState {
	/// Current page, 1-based
	pub page: Signal<usize>,
	/// Active sort
	pub sort: Signal<SortState>,
}

impl Default for ViewState {
	fn default() -> Self {
		Self {
			page: Signal::new(1),
			sort: Signal::new(SortState::default()),
		}
	}
}

impl ViewState {
	/// Run `f` whenever the page or the sort changes
	pub fn subscribe<F>(&self, f: F) -> Subscription
	where
		F: Fn() + Clone + 'static,
	{
		Subscription::batch([self.page.subscribe(f.clone()), self.sort.subscribe(f)])
	}
}
