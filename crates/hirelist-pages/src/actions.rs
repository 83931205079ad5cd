//! Caller-supplied hooks for the page's placeholder actions
//!
//! The row menu items, the Export button and "More Filters" have no
//! behaviour of their own. The page forwards them to a [`PageHooks`]
//! implementation; every method defaults to doing nothing.

use std::fmt;
use std::str::FromStr;

use hirelist_core::Candidate;

use crate::debug_log;
use crate::error::PageError;

/// Items of the per-row actions menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowAction {
	/// "View details"
	ViewDetails,
	/// "Send email"
	SendEmail,
	/// "Schedule interview"
	ScheduleInterview,
	/// "Change status"
	ChangeStatus,
}

impl RowAction {
	/// Menu order
	pub const ALL: [RowAction; 4] = [
		RowAction::ViewDetails,
		RowAction::SendEmail,
		RowAction::ScheduleInterview,
		RowAction::ChangeStatus,
	];

	/// Menu label
	pub fn label(&self) -> &'static str {
		match self {
			Self::ViewDetails => "View details",
			Self::SendEmail => "Send email",
			Self::ScheduleInterview => "Schedule interview",
			Self::ChangeStatus => "Change status",
		}
	}

	/// `data-action` value
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::ViewDetails => "view-details",
			Self::SendEmail => "send-email",
			Self::ScheduleInterview => "schedule-interview",
			Self::ChangeStatus => "change-status",
		}
	}

	/// Whether a separator precedes this item in the menu
	pub fn starts_group(&self) -> bool {
		matches!(self, Self::ScheduleInterview)
	}
}

impl FromStr for RowAction {
	type Err = PageError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|action| action.as_str() == s)
			.ok_or_else(|| PageError::UnknownAction(s.to_string()))
	}
}

impl fmt::Display for RowAction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

/// Hooks invoked by the page's placeholder controls
pub trait PageHooks {
	/// A row menu item was chosen
	fn on_row_action(&self, action: RowAction, candidate: &Candidate) {
		debug_log!("{} for candidate {} (no handler)", action, candidate.id);
	}

	/// Export was clicked; receives every filtered row in sorted order
	fn on_export(&self, candidates: &[&Candidate]) {
		debug_log!("export of {} candidates (no handler)", candidates.len());
	}

	/// "More Filters" was clicked
	fn on_more_filters(&self) {
		debug_log!("more filters (no handler)");
	}
}

/// Hooks that do nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHooks;

impl PageHooks for NoopHooks {}
