//! User input events
//!
//! Every interactive element the renderer emits carries a `data-action`
//! attribute and, where needed, a `data-value`. [`UiEvent::to_dom`] produces
//! those attributes and [`UiEvent::from_dom`] turns them back into an event,
//! so the browser mount never hard-codes action names.

use hirelist_core::CandidateId;
use hirelist_tables::{RoleFilter, SortField};

use crate::actions::RowAction;
use crate::error::{PageError, Result};

/// Role select changed
pub const ACTION_SELECT_ROLE: &str = "select-role";
/// Search input changed
pub const ACTION_SEARCH: &str = "search";
/// Sortable header clicked
pub const ACTION_SORT: &str = "sort";
/// Page-number link clicked
pub const ACTION_PAGE: &str = "page";
/// Previous clicked
pub const ACTION_PREVIOUS: &str = "previous";
/// Next clicked
pub const ACTION_NEXT: &str = "next";
/// Export clicked
pub const ACTION_EXPORT: &str = "export";
/// More Filters clicked
pub const ACTION_MORE_FILTERS: &str = "more-filters";

/// Everything a user can do on the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
	/// Pick a role (or "All")
	SelectRole(RoleFilter),
	/// Type in the search box
	Search(String),
	/// Click a sortable column header
	SortBy(SortField),
	/// Click a page-number link
	GoToPage(usize),
	/// Click Previous
	PreviousPage,
	/// Click Next
	NextPage,
	/// Click Export
	Export,
	/// Click More Filters
	MoreFilters,
	/// Choose a row menu item
	RowAction(RowAction, CandidateId),
}

impl UiEvent {
	/// Parses `data-action` / `data-value` (or the control's current value)
	pub fn from_dom(action: &str, value: &str) -> Result<Self> {
		let invalid = || PageError::InvalidValue {
			action: action.to_string(),
			value: value.to_string(),
		};

		let event = match action {
			ACTION_SELECT_ROLE => Self::SelectRole(RoleFilter::parse(value)),
			ACTION_SEARCH => Self::Search(value.to_string()),
			ACTION_SORT => Self::SortBy(value.parse().map_err(|_| invalid())?),
			ACTION_PAGE => Self::GoToPage(value.trim().parse().map_err(|_| invalid())?),
			ACTION_PREVIOUS => Self::PreviousPage,
			ACTION_NEXT => Self::NextPage,
			ACTION_EXPORT => Self::Export,
			ACTION_MORE_FILTERS => Self::MoreFilters,
			other => {
				let row_action: RowAction = other.parse()?;
				Self::RowAction(row_action, value.parse().map_err(|_| invalid())?)
			}
		};
		Ok(event)
	}

	/// `data-action` and `data-value` for the element raising this event
	pub fn to_dom(&self) -> (&'static str, Option<String>) {
		match self {
			Self::SelectRole(role) => (ACTION_SELECT_ROLE, Some(role.as_str().to_string())),
			Self::Search(text) => (ACTION_SEARCH, Some(text.clone())),
			Self::SortBy(field) => (ACTION_SORT, Some(field.as_str().to_string())),
			Self::GoToPage(page) => (ACTION_PAGE, Some(page.to_string())),
			Self::PreviousPage => (ACTION_PREVIOUS, None),
			Self::NextPage => (ACTION_NEXT, None),
			Self::Export => (ACTION_EXPORT, None),
			Self::MoreFilters => (ACTION_MORE_FILTERS, None),
			Self::RowAction(action, id) => (action.as_str(), Some(id.to_string())),
		}
	}
}
