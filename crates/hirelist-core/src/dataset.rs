//! Read-only candidate dataset and the roles enumeration
//!
//! The dataset is built once at startup and never mutated. Construction
//! validates the invariants the table relies on: identifiers are unique,
//! role names are distinct and every status belongs to the closed set.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::candidate::{Candidate, RawCandidate};
use crate::error::{CoreError, Result};

/// Immutable list of candidates plus the ordered list of known roles
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
	candidates: Vec<Candidate>,
	roles: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawDataset {
	#[serde(default)]
	roles: Vec<String>,
	candidates: Vec<RawCandidate>,
}

impl Dataset {
	/// Builds a dataset, rejecting duplicate candidate ids and duplicate roles
	pub fn new(candidates: Vec<Candidate>, roles: Vec<String>) -> Result<Self> {
		let mut seen_roles = HashSet::with_capacity(roles.len());
		for role in &roles {
			if !seen_roles.insert(role.as_str()) {
				return Err(CoreError::DuplicateRole(role.clone()));
			}
		}

		let mut seen_ids = HashSet::with_capacity(candidates.len());
		for candidate in &candidates {
			if !seen_ids.insert(candidate.id) {
				return Err(CoreError::DuplicateCandidate(candidate.id));
			}
		}

		tracing::debug!(
			candidates = candidates.len(),
			roles = roles.len(),
			"dataset loaded"
		);

		Ok(Self { candidates, roles })
	}

	/// Parses `{ "roles": [...], "candidates": [...] }`
	///
	/// Keys follow camelCase (`appliedDate`), dates are `YYYY-MM-DD`.
	pub fn from_json_str(json: &str) -> Result<Self> {
		let raw: RawDataset = serde_json::from_str(json)?;
		let candidates = raw
			.candidates
			.into_iter()
			.map(Candidate::try_from)
			.collect::<Result<Vec<_>>>()?;
		Self::new(candidates, raw.roles)
	}

	/// Reads and parses a dataset file
	pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let json = fs::read_to_string(path).map_err(|source| CoreError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		Self::from_json_str(&json)
	}

	/// All candidates, in dataset order
	pub fn candidates(&self) -> &[Candidate] {
		&self.candidates
	}

	/// Known roles, in the order they should be offered
	pub fn roles(&self) -> &[String] {
		&self.roles
	}

	/// Whether `role` is part of the roles enumeration
	pub fn has_role(&self, role: &str) -> bool {
		self.roles.iter().any(|r| r == role)
	}

	/// Number of candidates
	pub fn len(&self) -> usize {
		self.candidates.len()
	}

	/// Whether the dataset has no candidates
	pub fn is_empty(&self) -> bool {
		self.candidates.is_empty()
	}
}
