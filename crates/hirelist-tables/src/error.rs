//! Error types for the table pipeline

/// Result type for table operations
pub type Result<T> = std::result::Result<T, TableError>;

/// Errors raised while building a table query
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
	/// The column is not sortable or does not exist
	#[error("unknown sort field: {0}")]
	UnknownSortField(String),

	/// Direction was neither ascending nor descending
	#[error("unknown sort direction: {0}")]
	UnknownSortDirection(String),

	/// Page size must be at least one row
	#[error("page size must be at least 1")]
	InvalidPageSize,
}
