//! Hirelist Pages - candidates page for the browser and for SSR
//!
//! A filter bar and a sortable, paginated candidates table over one
//! [`Dataset`](hirelist_core::Dataset). The same component tree renders to
//! an HTML string on native targets and is mounted into the DOM on `wasm32`.
//!
//! ## Architecture
//!
//! - [`reactive`]: `Signal` cells with explicit subscriptions
//! - [`state`]: role/search state shared by both components, page/sort state
//! - [`storage`]: role filter preference and its change broadcast
//! - [`components`]: filter bar and candidates table
//! - [`page`]: the page that owns the shared state
//! - [`events`]: `data-action` attributes to [`UiEvent`]s
//! - [`actions`]: row menu items and the [`PageHooks`] placeholders
//! - [`html`]: element builder and HTML serialisation
//! - `client`: DOM mount (`wasm32` only)
//!
//! ```mermaid
//! graph LR
//!     S[(PreferenceStore)] -->|load| P[CandidatesPage]
//!     P --> F[FilterBar]
//!     P --> T[CandidatesTable]
//!     F -->|writes| FS[FilterState]
//!     FS -->|reads| T
//!     F -->|save + broadcast| S
//! ```
//!
//! ## Example
//!
//! ```rust
//! use hirelist_core::Dataset;
//! use hirelist_pages::{CandidatesPage, UiEvent};
//! use hirelist_tables::RoleFilter;
//!
//! let dataset = Dataset::new(vec![], vec!["UX Designer".into()]).unwrap();
//! let page = CandidatesPage::builder(dataset).without_store().build().unwrap();
//!
//! page.handle(UiEvent::SelectRole(RoleFilter::parse("UX Designer"))).unwrap();
//! assert!(page.render_html().contains("Candidate Applications"));
//! ```

#![warn(missing_docs)]

pub mod actions;
pub mod components;
pub mod error;
pub mod events;
pub mod html;
pub mod logging;
pub mod page;
pub mod reactive;
pub mod state;
pub mod storage;

#[cfg(target_arch = "wasm32")]
pub mod client;

pub use actions::{NoopHooks, PageHooks, RowAction};
pub use components::{CandidatesTable, FilterBar, RoleOption};
pub use error::{PageError, Result};
pub use events::UiEvent;
pub use html::{Element, ElementBuilder, Node};
pub use page::{CandidatesPage, CandidatesPageBuilder, PAGE_TITLE};
pub use reactive::{Signal, Subscription};
pub use state::{FilterState, ViewState};
pub use storage::{FilterPreference, MemoryStorage, PreferenceStore, StorageEvents, local_storage};

#[cfg(target_arch = "wasm32")]
pub use client::{MountHandle, mount};

#[cfg(target_arch = "wasm32")]
pub use storage::BrowserStorage;

// Re-exported for the logging macros
#[doc(hidden)]
pub mod __private {
	pub use tracing;
	pub use web_sys;
}
