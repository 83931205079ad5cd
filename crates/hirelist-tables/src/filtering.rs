//! Filtering functionality for the candidates table

use std::fmt;

use hirelist_core::Candidate;

/// Sentinel value selecting every role
pub const ALL_ROLES: &str = "All";

/// Label shown for the sentinel in the role select
pub const ALL_ROLES_LABEL: &str = "All Roles";

/// The role filter selection: everything, or one exact role name
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum RoleFilter {
	/// Keep every candidate
	#[default]
	All,
	/// Keep candidates whose role equals this string (case-sensitive)
	Role(String),
}

impl RoleFilter {
	/// Parses a stored or selected value
	///
	/// `"All"` and the empty string both mean [`RoleFilter::All`]; anything
	/// else is taken as a role name verbatim.
	pub fn parse(value: &str) -> Self {
		if value.is_empty() || value == ALL_ROLES {
			Self::All
		} else {
			Self::Role(value.to_string())
		}
	}

	/// The value written to the preference store
	pub fn as_str(&self) -> &str {
		match self {
			Self::All => ALL_ROLES,
			Self::Role(role) => role,
		}
	}

	/// Label for the role select
	pub fn label(&self) -> &str {
		match self {
			Self::All => ALL_ROLES_LABEL,
			Self::Role(role) => role,
		}
	}

	/// Exact, case-sensitive role match
	pub fn matches(&self, candidate: &Candidate) -> bool {
		match self {
			Self::All => true,
			Self::Role(role) => candidate.role == *role,
		}
	}
}

impl fmt::Display for RoleFilter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl From<&str> for RoleFilter {
	fn from(value: &str) -> Self {
		Self::parse(value)
	}
}

/// Role filter combined with a free-text search over name and email
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateFilter {
	/// Role selection
	pub role: RoleFilter,
	/// Case-insensitive substring searched in name or email
	pub search: String,
}

impl CandidateFilter {
	/// Filter on role only
	pub fn role(role: impl Into<RoleFilter>) -> Self {
		Self {
			role: role.into(),
			search: String::new(),
		}
	}

	/// Adds a search needle
	pub fn with_search(mut self, search: impl Into<String>) -> Self {
		self.search = search.into();
		self
	}

	/// Both predicates must hold
	pub fn matches(&self, candidate: &Candidate) -> bool {
		self.role.matches(candidate) && candidate.matches_search(&self.search)
	}

	/// Whether this filter keeps every candidate
	pub fn is_empty(&self) -> bool {
		self.role == RoleFilter::All && self.search.trim().is_empty()
	}
}

/// Trait for filterable tables
pub trait Filterable {
	/// Replaces the active filter
	fn filter_by(&mut self, filter: CandidateFilter);

	/// Resets to "All" with no search
	fn clear_filters(&mut self);

	/// Returns the active filter
	fn current_filter(&self) -> &CandidateFilter;
}

/// Keeps the candidates the filter accepts, preserving dataset order
pub fn filter_candidates<'a>(
	candidates: &'a [Candidate],
	filter: &CandidateFilter,
) -> Vec<&'a Candidate> {
	candidates.iter().filter(|c| filter.matches(c)).collect()
}
