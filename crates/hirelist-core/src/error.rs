//! Error types for the hirelist data layer

use std::path::PathBuf;

use crate::candidate::CandidateId;

/// Result type for dataset and settings operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised while loading candidates, roles or settings
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
	/// Reading a dataset or settings file failed
	#[error("failed to read {path}: {source}")]
	Io {
		/// File that could not be read
		path: PathBuf,
		/// Underlying I/O error
		#[source]
		source: std::io::Error,
	},

	/// Dataset JSON did not match the expected shape
	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	/// Settings TOML did not parse
	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	/// A candidate carries a status outside the closed enumeration
	#[error("candidate {id} has unknown status {status:?}")]
	UnknownStatus {
		/// Candidate carrying the bad value
		id: CandidateId,
		/// The rejected status text
		status: String,
	},

	/// Two candidates share an identifier
	#[error("duplicate candidate id {0}")]
	DuplicateCandidate(CandidateId),

	/// The roles enumeration lists a role twice
	#[error("duplicate role {0:?}")]
	DuplicateRole(String),

	/// A settings value is out of range
	#[error("invalid setting `{field}`: {reason}")]
	InvalidSetting {
		/// Settings key
		field: &'static str,
		/// Why the value was rejected
		reason: String,
	},
}
