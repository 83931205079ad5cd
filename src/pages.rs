//! Reactive candidates page with SSR and a WASM mount
//!
//! ## Architecture
//!
//! - **Shared state**: the page owns the role/search signals that both the
//!   filter bar and the table read
//! - **Persistence**: the role filter is written to a [`PreferenceStore`]
//!   and a change notification is broadcast
//! - **Rendering**: one element tree, serialised for SSR or written into
//!   the DOM by `mount` on `wasm32`
//!
//! ## Example
//!
//! ```rust
//! use std::rc::Rc;
//! use hirelist::pages::{CandidatesPage, MemoryStorage, PreferenceStore, UiEvent};
//! use hirelist::{Dataset, RoleFilter};
//!
//! let storage = MemoryStorage::new();
//! let dataset = Dataset::new(vec![], vec!["Backend Developer".into()]).unwrap();
//! let page = CandidatesPage::builder(dataset)
//!     .store(Rc::new(storage.clone()))
//!     .build()
//!     .unwrap();
//!
//! page.handle(UiEvent::SelectRole(RoleFilter::parse("Backend Developer"))).unwrap();
//! assert_eq!(
//!     storage.get_item("activeJobFilter").unwrap().as_deref(),
//!     Some("Backend Developer")
//! );
//! ```

pub use hirelist_pages::*;
