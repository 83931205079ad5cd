//! Table pipeline for hirelist
//!
//! Turns a candidate list plus the user's view state into the rows on
//! screen. The pipeline always runs in the same order:
//!
//! 1. **Filter**: role selection (exact match or "All") and optional search
//! 2. **Sort**: stable sort on name, role or applied date
//! 3. **Paginate**: fixed-size pages, 1-based, clipped to the item count
//!
//! # Architecture
//!
//! ```mermaid
//! graph TD
//!     A[TableQuery] --> B[CandidateFilter]
//!     A --> C[SortState]
//!     A --> D[Pagination]
//!     A -->|run| E[TableView]
//!     E --> F[TableRow]
//!     E --> G[Summary]
//!     E --> H[Page window]
//! ```
//!
//! # Example
//!
//! ```rust
//! use hirelist_tables::{CandidateFilter, SortField, SortState, TableQuery};
//!
//! let query = TableQuery::new(10)
//!     .unwrap()
//!     .with_filter(CandidateFilter::role("UX Designer"))
//!     .with_sort(SortState::default().clicked(SortField::Name));
//!
//! let view = query.run(&[]);
//! assert_eq!(view.summary().to_string(), "Showing 1 to 0 of 0 candidates");
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod filtering;
pub mod pagination;
pub mod pipeline;
pub mod sorting;

// Re-exports for convenience
pub use error::{Result, TableError};
pub use filtering::{ALL_ROLES, CandidateFilter, Filterable, RoleFilter, filter_candidates};
pub use pagination::{Pagination, Summary, page_window};
pub use pipeline::{TableQuery, TableRow, TableView};
pub use sorting::{
	SortDirection, SortField, SortIndicator, SortState, Sortable, locale_compare, sort_candidates,
};
