//! Role filter persistence
//!
//! The role selection survives reloads through a key-value
//! [`PreferenceStore`]. In the browser that is `window.localStorage`;
//! elsewhere (SSR, tests, the CLI) it is a [`MemoryStorage`] or nothing at
//! all, in which case the filter simply starts at "All".
//!
//! Every successful write is followed by a broadcast on [`StorageEvents`].
//! The broadcast is informational: components share state through
//! [`FilterState`](crate::state::FilterState), not through storage.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use hirelist_tables::RoleFilter;

#[cfg(target_arch = "wasm32")]
use crate::error::PageError;
use crate::error::Result;
use crate::reactive::{Signal, Subscription};
use crate::{debug_log, warn_log};

/// Name of the DOM event dispatched on `window` after a write
pub const STORAGE_EVENT: &str = "storage";

/// Minimal key-value store interface (the subset of Web Storage we use)
pub trait PreferenceStore {
	/// Returns the stored value, if any
	fn get_item(&self, key: &str) -> Result<Option<String>>;

	/// Stores `value` under `key`
	fn set_item(&self, key: &str, value: &str) -> Result<()>;

	/// Deletes `key`
	fn remove_item(&self, key: &str) -> Result<()>;
}

/// In-memory store shared between clones
///
/// # Example
///
/// ```
/// use hirelist_pages::storage::{MemoryStorage, PreferenceStore};
///
/// let storage = MemoryStorage::new();
/// storage.set_item("activeJobFilter", "QA Engineer").unwrap();
/// assert_eq!(storage.get_item("activeJobFilter").unwrap().as_deref(), Some("QA Engineer"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
	data: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
	/// Create a new empty store
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a store with initial data
	pub fn with_data(data: HashMap<String, String>) -> Self {
		Self {
			data: Rc::new(RefCell::new(data)),
		}
	}

	/// Create a store holding one entry
	pub fn with_item(key: impl Into<String>, value: impl Into<String>) -> Self {
		let mut data = HashMap::new();
		data.insert(key.into(), value.into());
		Self::with_data(data)
	}

	/// Number of stored entries
	pub fn length(&self) -> usize {
		self.data.borrow().len()
	}

	/// Remove every entry
	pub fn clear(&self) {
		self.data.borrow_mut().clear();
	}
}

impl PreferenceStore for MemoryStorage {
	fn get_item(&self, key: &str) -> Result<Option<String>> {
		Ok(self.data.borrow().get(key).cloned())
	}

	fn set_item(&self, key: &str, value: &str) -> Result<()> {
		self.data
			.borrow_mut()
			.insert(key.to_string(), value.to_string());
		Ok(())
	}

	fn remove_item(&self, key: &str) -> Result<()> {
		self.data.borrow_mut().remove(key);
		Ok(())
	}
}

/// `window.localStorage`
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct BrowserStorage {
	storage: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
	/// The page's local storage, if the browser exposes one
	///
	/// Returns `None` when there is no `window`, or when storage is
	/// disabled (private mode, sandboxed iframes).
	pub fn local() -> Option<Self> {
		let window = web_sys::window()?;
		let storage = window.local_storage().ok()??;
		Some(Self { storage })
	}
}

#[cfg(target_arch = "wasm32")]
impl PreferenceStore for BrowserStorage {
	fn get_item(&self, key: &str) -> Result<Option<String>> {
		self.storage
			.get_item(key)
			.map_err(|e| PageError::Storage(format!("{e:?}")))
	}

	fn set_item(&self, key: &str, value: &str) -> Result<()> {
		self.storage
			.set_item(key, value)
			.map_err(|e| PageError::Storage(format!("{e:?}")))
	}

	fn remove_item(&self, key: &str) -> Result<()> {
		self.storage
			.remove_item(key)
			.map_err(|e| PageError::Storage(format!("{e:?}")))
	}
}

/// The platform's persistent store, if there is one
#[cfg(target_arch = "wasm32")]
pub fn local_storage() -> Option<Rc<dyn PreferenceStore>> {
	BrowserStorage::local().map(|storage| Rc::new(storage) as Rc<dyn PreferenceStore>)
}

/// The platform's persistent store (non-WASM: none)
#[cfg(not(target_arch = "wasm32"))]
pub fn local_storage() -> Option<Rc<dyn PreferenceStore>> {
	None
}

/// Broadcast fired after every preference write
///
/// Carries no payload: listeners only learn that "something in storage
/// changed". On WASM the broadcast also dispatches a `storage` event on
/// `window` for code outside this crate.
#[derive(Debug, Clone, Default)]
pub struct StorageEvents {
	revision: Signal<u64>,
}

impl StorageEvents {
	/// Create a broadcast with no listeners
	pub fn new() -> Self {
		Self::default()
	}

	/// Notify every listener
	pub fn broadcast(&self) {
		self.revision.update(|n| *n += 1);
		dispatch_window_event();
	}

	/// Run `f` after every broadcast
	pub fn subscribe<F>(&self, f: F) -> Subscription
	where
		F: Fn() + 'static,
	{
		self.revision.subscribe(f)
	}

	/// Number of broadcasts so far
	pub fn revision(&self) -> u64 {
		self.revision.get()
	}
}

#[cfg(target_arch = "wasm32")]
fn dispatch_window_event() {
	let Some(window) = web_sys::window() else {
		return;
	};
	match web_sys::Event::new(STORAGE_EVENT) {
		Ok(event) => {
			let _ = window.dispatch_event(&event);
		}
		Err(e) => warn_log!("failed to create storage event: {:?}", e),
	}
}

#[cfg(not(target_arch = "wasm32"))]
fn dispatch_window_event() {}

/// Reads and writes the role filter under a fixed key
#[derive(Clone)]
pub struct FilterPreference {
	store: Option<Rc<dyn PreferenceStore>>,
	key: String,
	events: StorageEvents,
}

impl FilterPreference {
	/// Preference backed by `store` (or by nothing) under `key`
	pub fn new(store: Option<Rc<dyn PreferenceStore>>, key: impl Into<String>) -> Self {
		Self {
			store,
			key: key.into(),
			events: StorageEvents::new(),
		}
	}

	/// Storage key
	pub fn key(&self) -> &str {
		&self.key
	}

	/// Broadcast fired after writes
	pub fn events(&self) -> &StorageEvents {
		&self.events
	}

	/// Whether a store is attached
	pub fn is_persistent(&self) -> bool {
		self.store.is_some()
	}

	/// Reads the persisted filter, never failing
	///
	/// A missing store, a read error or an absent entry all give
	/// [`RoleFilter::All`]. When `known_roles` is given, a persisted role
	/// outside it is also replaced by "All".
	pub fn load(&self, known_roles: Option<&[String]>) -> RoleFilter {
		let Some(store) = &self.store else {
			debug_log!("no preference store; role filter starts at All");
			return RoleFilter::All;
		};

		let stored = match store.get_item(&self.key) {
			Ok(stored) => stored,
			Err(e) => {
				warn_log!("reading {} failed: {}", self.key, e);
				return RoleFilter::All;
			}
		};

		let filter = stored
			.as_deref()
			.map(RoleFilter::parse)
			.unwrap_or_default();

		if let (RoleFilter::Role(role), Some(roles)) = (&filter, known_roles)
			&& !roles.iter().any(|known| known == role)
		{
			warn_log!("persisted role {:?} is not a known role; using All", role);
			return RoleFilter::All;
		}

		filter
	}

	/// Persists `filter` and broadcasts the change
	///
	/// Write failures are logged and swallowed; the in-memory selection
	/// still applies.
	pub fn save(&self, filter: &RoleFilter) {
		let Some(store) = &self.store else {
			return;
		};
		match store.set_item(&self.key, filter.as_str()) {
			Ok(()) => self.events.broadcast(),
			Err(e) => warn_log!("writing {} failed: {}", self.key, e),
		}
	}
}

impl fmt::Debug for FilterPreference {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FilterPreference")
			.field("key", &self.key)
			.field("persistent", &self.is_persistent())
			.finish_non_exhaustive()
	}
}
