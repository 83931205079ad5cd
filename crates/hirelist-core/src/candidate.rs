//! Candidate records and the closed status enumeration

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Unique identifier of a candidate within a dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateId(pub u64);

impl fmt::Display for CandidateId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl FromStr for CandidateId {
	type Err = std::num::ParseIntError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		s.trim().parse().map(Self)
	}
}

/// Application status of a candidate
///
/// The set is closed: anything else is rejected when the dataset is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
	/// Application received
	Applied,
	/// Phone or recruiter screen
	Screening,
	/// In the interview loop
	Interview,
	/// Offer extended
	Offer,
	/// Application closed
	Rejected,
}

impl Status {
	/// Every status, in pipeline order
	pub const ALL: [Status; 5] = [
		Status::Applied,
		Status::Screening,
		Status::Interview,
		Status::Offer,
		Status::Rejected,
	];

	/// Returns the display name, which is also the wire value
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Applied => "Applied",
			Self::Screening => "Screening",
			Self::Interview => "Interview",
			Self::Offer => "Offer",
			Self::Rejected => "Rejected",
		}
	}

	/// CSS classes for the status badge
	pub fn badge_class(&self) -> &'static str {
		match self {
			Self::Applied => "bg-blue-100 text-blue-800 hover:bg-blue-100",
			Self::Screening => "bg-purple-100 text-purple-800 hover:bg-purple-100",
			Self::Interview => "bg-amber-100 text-amber-800 hover:bg-amber-100",
			Self::Offer => "bg-green-100 text-green-800 hover:bg-green-100",
			Self::Rejected => "bg-red-100 text-red-800 hover:bg-red-100",
		}
	}
}

impl fmt::Display for Status {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Error returned when a status string is not one of the five known values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "unknown status {:?}", self.0)
	}
}

impl std::error::Error for UnknownStatus {}

impl FromStr for Status {
	type Err = UnknownStatus;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|status| status.as_str() == s)
			.ok_or_else(|| UnknownStatus(s.to_string()))
	}
}

/// A single applicant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
	/// Identifier, unique within the dataset
	pub id: CandidateId,
	/// Full name
	pub name: String,
	/// Contact address
	pub email: String,
	/// Job role applied for
	pub role: String,
	/// Pipeline status
	pub status: Status,
	/// Date the application arrived
	pub applied_date: NaiveDate,
	/// Years of experience
	pub experience: u32,
	/// Skills, in the order listed on the application
	pub skills: Vec<String>,
	/// Where the candidate is based
	pub location: String,
}

impl Candidate {
	/// Case-insensitive substring match against name or email
	///
	/// An empty (or whitespace-only) needle matches every candidate.
	pub fn matches_search(&self, needle: &str) -> bool {
		let needle = needle.trim();
		if needle.is_empty() {
			return true;
		}
		let needle = needle.to_lowercase();
		self.name.to_lowercase().contains(&needle) || self.email.to_lowercase().contains(&needle)
	}
}

/// Wire shape of a candidate, before the status is checked
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawCandidate {
	pub id: CandidateId,
	pub name: String,
	pub email: String,
	pub role: String,
	pub status: String,
	pub applied_date: NaiveDate,
	pub experience: u32,
	#[serde(default)]
	pub skills: Vec<String>,
	pub location: String,
}

impl TryFrom<RawCandidate> for Candidate {
	type Error = crate::CoreError;

	fn try_from(raw: RawCandidate) -> Result<Self, Self::Error> {
		let status = raw
			.status
			.parse::<Status>()
			.map_err(|UnknownStatus(status)| crate::CoreError::UnknownStatus { id: raw.id, status })?;
		Ok(Self {
			id: raw.id,
			name: raw.name,
			email: raw.email,
			role: raw.role,
			status,
			applied_date: raw.applied_date,
			experience: raw.experience,
			skills: raw.skills,
			location: raw.location,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn candidate(name: &str, email: &str) -> Candidate {
		Candidate {
			id: CandidateId(1),
			name: name.to_string(),
			email: email.to_string(),
			role: "Frontend Developer".to_string(),
			status: Status::Applied,
			applied_date: NaiveDate::from_ymd_opt(2023, 5, 15).unwrap(),
			experience: 3,
			skills: vec!["React".to_string()],
			location: "Berlin".to_string(),
		}
	}

	#[rstest]
	#[case("Applied", Status::Applied)]
	#[case("Screening", Status::Screening)]
	#[case("Interview", Status::Interview)]
	#[case("Offer", Status::Offer)]
	#[case("Rejected", Status::Rejected)]
	fn test_status_parse(#[case] input: &str, #[case] expected: Status) {
		assert_eq!(input.parse::<Status>().unwrap(), expected);
		assert_eq!(expected.to_string(), input);
	}

	#[rstest]
	#[case("applied")]
	#[case("Hired")]
	#[case("")]
	fn test_status_parse_rejects_unknown(#[case] input: &str) {
		let err = input.parse::<Status>().unwrap_err();
		assert_eq!(err.0, input);
	}

	#[rstest]
	fn test_badge_classes_are_distinct() {
		let mut classes: Vec<_> = Status::ALL.iter().map(Status::badge_class).collect();
		classes.sort();
		classes.dedup();
		assert_eq!(classes.len(), Status::ALL.len());
		assert!(Status::Offer.badge_class().contains("green"));
	}

	#[rstest]
	#[case("", true)]
	#[case("   ", true)]
	#[case("ali", true)]
	#[case("ALICE", true)]
	#[case("example.COM", true)]
	#[case("bob", false)]
	fn test_matches_search(#[case] needle: &str, #[case] expected: bool) {
		let c = candidate("Alice Johnson", "alice.j@example.com");
		assert_eq!(c.matches_search(needle), expected);
	}

	#[rstest]
	fn test_raw_candidate_with_unknown_status_is_rejected() {
		let raw = RawCandidate {
			id: CandidateId(7),
			name: "X".into(),
			email: "x@example.com".into(),
			role: "QA".into(),
			status: "Hired".into(),
			applied_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
			experience: 1,
			skills: vec![],
			location: "Remote".into(),
		};
		let err = Candidate::try_from(raw).unwrap_err();
		assert!(matches!(
			err,
			crate::CoreError::UnknownStatus { id: CandidateId(7), ref status } if status == "Hired"
		));
	}
}
