//! # Hirelist
//!
//! A candidate-tracking table: a role filter that remembers its last
//! selection, sortable columns and fixed-size pages, rendered to HTML on the
//! server or mounted in the browser through WebAssembly.
//!
//! ## Feature Flags
//!
//! - `pages` (default) - Filter bar, table component, rendering and mount
//! - `minimal` - Data model and table pipeline only
//! - `debug-hooks` - `debug_log!` output from the page in debug builds
//!
//! ## Crates
//!
//! - [`core`]: candidates, dataset loading, settings
//! - [`tables`]: filter, sort and paginate
//! - `pages`: reactive state, components, preference storage
//!
//! ## Quick Example
//!
//! ```rust
//! # #[cfg(feature = "pages")]
//! # {
//! use hirelist::{CandidatesPage, Dataset, RoleFilter, SortField, UiEvent};
//!
//! let dataset = Dataset::from_json_str(r#"{
//!     "roles": ["UX Designer"],
//!     "candidates": [{
//!         "id": 1, "name": "Sarah Williams", "email": "sarah.w@example.com",
//!         "role": "UX Designer", "status": "Offer", "appliedDate": "2023-06-02",
//!         "experience": 6, "skills": ["Figma"], "location": "Remote"
//!     }]
//! }"#).unwrap();
//!
//! let page = CandidatesPage::builder(dataset).without_store().build().unwrap();
//! page.handle(UiEvent::SelectRole(RoleFilter::parse("UX Designer"))).unwrap();
//! page.handle(UiEvent::SortBy(SortField::Name)).unwrap();
//!
//! let html = page.render_html();
//! assert!(html.contains("Sarah Williams"));
//! # }
//! ```

pub mod core;
#[cfg(feature = "pages")]
pub mod pages;
pub mod tables;

// Re-export the data model and settings
pub use hirelist_core::{
	Candidate, CandidateId, CoreError, Dataset, Settings, Status, UnknownStatus,
};

// Re-export the table pipeline
pub use hirelist_tables::{
	CandidateFilter, Pagination, RoleFilter, SortDirection, SortField, SortState, Summary,
	TableError, TableQuery, TableView,
};

// Re-export the page
#[cfg(feature = "pages")]
pub use hirelist_pages::{
	CandidatesPage, FilterState, MemoryStorage, NoopHooks, PageError, PageHooks,
	PreferenceStore, RowAction, Signal, UiEvent,
};
