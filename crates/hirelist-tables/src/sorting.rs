//! Sorting functionality for the candidates table

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use hirelist_core::Candidate;

use crate::error::TableError;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
	/// Ascending order
	Ascending,
	/// Descending order
	Descending,
}

impl SortDirection {
	/// Returns the opposite direction
	pub fn toggle(&self) -> Self {
		match self {
			Self::Ascending => Self::Descending,
			Self::Descending => Self::Ascending,
		}
	}

	/// Parses a sort direction from a query parameter
	///
	/// Returns `Ascending` for positive values and `Descending` for negative values
	/// (e.g., "name" -> Ascending, "-name" -> Descending)
	pub fn parse_from_query(s: &str) -> (Self, &str) {
		if let Some(field) = s.strip_prefix('-') {
			(Self::Descending, field)
		} else {
			(Self::Ascending, s)
		}
	}

	/// Short form used in attributes and on the command line
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Ascending => "asc",
			Self::Descending => "desc",
		}
	}

	/// Applies the direction to an ascending ordering
	pub fn apply(&self, ordering: Ordering) -> Ordering {
		match self {
			Self::Ascending => ordering,
			Self::Descending => ordering.reverse(),
		}
	}
}

impl FromStr for SortDirection {
	type Err = TableError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"asc" | "ascending" => Ok(Self::Ascending),
			"desc" | "descending" => Ok(Self::Descending),
			_ => Err(TableError::UnknownSortDirection(s.to_string())),
		}
	}
}

impl fmt::Display for SortDirection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Sortable columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
	/// Candidate name
	Name,
	/// Job role
	Role,
	/// Application date
	AppliedDate,
}

impl SortField {
	/// Every sortable column, in header order
	pub const ALL: [SortField; 3] = [SortField::Name, SortField::Role, SortField::AppliedDate];

	/// Identifier used in `data-value` attributes and query strings
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Name => "name",
			Self::Role => "role",
			Self::AppliedDate => "appliedDate",
		}
	}

	/// Column header text
	pub fn label(&self) -> &'static str {
		match self {
			Self::Name => "Name",
			Self::Role => "Role",
			Self::AppliedDate => "Applied Date",
		}
	}

	/// Ascending comparison of two candidates on this column
	pub fn compare(&self, a: &Candidate, b: &Candidate) -> Ordering {
		match self {
			Self::Name => locale_compare(&a.name, &b.name),
			Self::Role => locale_compare(&a.role, &b.role),
			Self::AppliedDate => a.applied_date.cmp(&b.applied_date),
		}
	}
}

impl FromStr for SortField {
	type Err = TableError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"name" => Ok(Self::Name),
			"role" => Ok(Self::Role),
			"appliedDate" | "applied_date" => Ok(Self::AppliedDate),
			_ => Err(TableError::UnknownSortField(s.to_string())),
		}
	}
}

impl fmt::Display for SortField {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Glyph shown next to a sortable header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
	/// Column is not the active sort
	Neutral,
	/// Active, ascending
	Ascending,
	/// Active, descending
	Descending,
}

impl SortIndicator {
	/// Text glyph for the header button
	pub fn glyph(&self) -> &'static str {
		match self {
			Self::Neutral => "↕",
			Self::Ascending => "▲",
			Self::Descending => "▼",
		}
	}

	/// Value for the `aria-sort` attribute
	pub fn aria_sort(&self) -> &'static str {
		match self {
			Self::Neutral => "none",
			Self::Ascending => "ascending",
			Self::Descending => "descending",
		}
	}
}

/// Active sort column and direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortState {
	/// Column being sorted on
	pub field: SortField,
	/// Direction of the sort
	pub direction: SortDirection,
}

impl Default for SortState {
	/// Newest applications first
	fn default() -> Self {
		Self {
			field: SortField::AppliedDate,
			direction: SortDirection::Descending,
		}
	}
}

impl SortState {
	/// Creates a sort state
	pub fn new(field: SortField, direction: SortDirection) -> Self {
		Self { field, direction }
	}

	/// State after the user clicks the header of `field`
	///
	/// Clicking the active column flips the direction; clicking another
	/// column switches to it in ascending order.
	pub fn clicked(self, field: SortField) -> Self {
		if self.field == field {
			Self {
				field,
				direction: self.direction.toggle(),
			}
		} else {
			Self {
				field,
				direction: SortDirection::Ascending,
			}
		}
	}

	/// Header glyph for `field` under this state
	pub fn indicator(&self, field: SortField) -> SortIndicator {
		if self.field != field {
			SortIndicator::Neutral
		} else {
			match self.direction {
				SortDirection::Ascending => SortIndicator::Ascending,
				SortDirection::Descending => SortIndicator::Descending,
			}
		}
	}

	/// Directed comparison of two candidates
	pub fn compare(&self, a: &Candidate, b: &Candidate) -> Ordering {
		self.direction.apply(self.field.compare(a, b))
	}

	/// Parses `"name"` / `"-appliedDate"` style query values
	pub fn parse_from_query(s: &str) -> Result<Self, TableError> {
		let (direction, field) = SortDirection::parse_from_query(s);
		Ok(Self {
			field: field.parse()?,
			direction,
		})
	}
}

/// Trait for sortable tables
pub trait Sortable {
	/// Sorts the table by the specified field and direction
	fn sort_by(&mut self, field: SortField, direction: SortDirection);

	/// Returns the current sort field and direction
	fn current_sort(&self) -> SortState;
}

/// Stable sort; candidates with equal keys keep their relative order
pub fn sort_candidates(candidates: &mut [&Candidate], state: SortState) {
	candidates.sort_by(|a, b| state.compare(a, b));
}

/// Case-folded comparison with a case-sensitive tie-break
///
/// Letters compare alphabetically regardless of case, so "alice" sorts
/// before "Bob". Strings equal after folding fall back to code-point order
/// to keep the ordering total.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
	let folded_a = a.chars().flat_map(char::to_lowercase);
	let folded_b = b.chars().flat_map(char::to_lowercase);
	folded_a.cmp(folded_b).then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_toggle() {
		assert_eq!(SortDirection::Ascending.toggle(), SortDirection::Descending);
		assert_eq!(SortDirection::Descending.toggle(), SortDirection::Ascending);
	}

	#[rstest]
	#[case("name", SortDirection::Ascending, "name")]
	#[case("-appliedDate", SortDirection::Descending, "appliedDate")]
	fn test_parse_from_query(
		#[case] input: &str,
		#[case] direction: SortDirection,
		#[case] field: &str,
	) {
		assert_eq!(SortDirection::parse_from_query(input), (direction, field));
	}

	#[rstest]
	fn test_sort_state_parse_from_query() {
		let state = SortState::parse_from_query("-role").unwrap();
		assert_eq!(state, SortState::new(SortField::Role, SortDirection::Descending));
		assert_eq!(
			SortState::parse_from_query("status"),
			Err(TableError::UnknownSortField("status".into()))
		);
	}

	#[rstest]
	#[case("asc", SortDirection::Ascending)]
	#[case("DESC", SortDirection::Descending)]
	#[case("ascending", SortDirection::Ascending)]
	fn test_direction_from_str(#[case] input: &str, #[case] expected: SortDirection) {
		assert_eq!(input.parse::<SortDirection>().unwrap(), expected);
	}

	#[rstest]
	fn test_direction_from_str_rejects_unknown() {
		assert!(matches!(
			"up".parse::<SortDirection>(),
			Err(TableError::UnknownSortDirection(_))
		));
	}

	#[rstest]
	fn test_field_round_trips_through_str() {
		for field in SortField::ALL {
			assert_eq!(field.as_str().parse::<SortField>().unwrap(), field);
		}
	}

	#[rstest]
	fn test_default_is_applied_date_descending() {
		let state = SortState::default();
		assert_eq!(state.field, SortField::AppliedDate);
		assert_eq!(state.direction, SortDirection::Descending);
	}

	#[rstest]
	fn test_click_other_field_switches_to_ascending() {
		let state = SortState::default().clicked(SortField::Name);
		assert_eq!(state, SortState::new(SortField::Name, SortDirection::Ascending));
	}

	#[rstest]
	fn test_click_same_field_toggles() {
		let first = SortState::default().clicked(SortField::Name);
		let second = first.clicked(SortField::Name);
		assert_eq!(second.direction, SortDirection::Descending);
		let third = second.clicked(SortField::Name);
		assert_eq!(third.direction, SortDirection::Ascending);
	}

	#[rstest]
	fn test_indicator() {
		let state = SortState::new(SortField::Role, SortDirection::Ascending);
		assert_eq!(state.indicator(SortField::Role), SortIndicator::Ascending);
		assert_eq!(state.indicator(SortField::Name), SortIndicator::Neutral);
		assert_eq!(
			SortState::default().indicator(SortField::AppliedDate),
			SortIndicator::Descending
		);
		assert_eq!(SortIndicator::Neutral.aria_sort(), "none");
	}

	#[rstest]
	#[case("alice", "Bob", Ordering::Less)]
	#[case("Zoe", "adam", Ordering::Greater)]
	#[case("Ann", "Ann", Ordering::Equal)]
	#[case("ann", "Ann", Ordering::Greater)]
	#[case("Émile", "Emile", Ordering::Greater)]
	fn test_locale_compare(#[case] a: &str, #[case] b: &str, #[case] expected: Ordering) {
		assert_eq!(locale_compare(a, b), expected);
	}
}
