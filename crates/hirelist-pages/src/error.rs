//! Error types for the candidates page

use hirelist_core::{CandidateId, CoreError};
use hirelist_tables::TableError;

/// Result type for page operations
pub type Result<T> = std::result::Result<T, PageError>;

/// Errors raised by the page, its components or the browser mount
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum PageError {
	/// The preference store rejected a read or write
	#[error("storage error: {0}")]
	Storage(String),

	/// A `data-action` attribute named no known action
	#[error("unknown action: {0}")]
	UnknownAction(String),

	/// An action carried a value it cannot use
	#[error("invalid value {value:?} for action `{action}`")]
	InvalidValue {
		/// Action name
		action: String,
		/// The rejected value
		value: String,
	},

	/// A row action referenced a candidate that is not in the dataset
	#[error("no candidate with id {0}")]
	UnknownCandidate(CandidateId),

	/// The browser environment is missing something the mount needs
	#[error("DOM error: {0}")]
	Dom(String),

	/// Dataset or settings error
	#[error(transparent)]
	Core(#[from] CoreError),

	/// Table pipeline error
	#[error(transparent)]
	Table(#[from] TableError),
}
