//! Table and preference settings
//!
//! Settings are read from TOML. Every key is optional; missing keys take
//! the defaults below.
//!
//! ```toml
//! page_size = 10
//! page_window = 5
//! storage_key = "activeJobFilter"
//! date_format = "%-m/%-d/%Y"
//! validate_persisted_filter = false
//! reset_page_on_filter_change = true
//! ```

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Rows shown per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Maximum number of page-number links
pub const DEFAULT_PAGE_WINDOW: usize = 5;

/// Key the role filter persists under
pub const DEFAULT_STORAGE_KEY: &str = "activeJobFilter";

/// en-US short date, e.g. `5/15/2023`
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Settings for the candidates page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
	/// Rows per page
	pub page_size: usize,
	/// Maximum number of page-number links shown at once
	pub page_window: usize,
	/// Preference store key for the role filter
	pub storage_key: String,
	/// `chrono` format string for the applied date column
	pub date_format: String,
	/// Fall back to "All" when the persisted role is not a known role
	pub validate_persisted_filter: bool,
	/// Return to page 1 whenever the role or search filter changes
	pub reset_page_on_filter_change: bool,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			page_size: DEFAULT_PAGE_SIZE,
			page_window: DEFAULT_PAGE_WINDOW,
			storage_key: DEFAULT_STORAGE_KEY.to_string(),
			date_format: DEFAULT_DATE_FORMAT.to_string(),
			validate_persisted_filter: false,
			reset_page_on_filter_change: true,
		}
	}
}

impl Settings {
	/// Creates default settings
	pub fn new() -> Self {
		Self::default()
	}

	/// Parses and validates settings from TOML
	pub fn from_toml_str(source: &str) -> Result<Self> {
		let settings: Self = toml::from_str(source)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Reads, parses and validates a settings file
	pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let source = fs::read_to_string(path).map_err(|source| CoreError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		Self::from_toml_str(&source)
	}

	/// Rejects zero sizes, malformed date formats and an empty storage key
	pub fn validate(&self) -> Result<()> {
		if self.page_size == 0 {
			return Err(CoreError::InvalidSetting {
				field: "page_size",
				reason: "must be at least 1".to_string(),
			});
		}
		if self.page_window == 0 {
			return Err(CoreError::InvalidSetting {
				field: "page_window",
				reason: "must be at least 1".to_string(),
			});
		}
		// Unknown specifiers and time or zone fields both fail on a bare date
		let mut sample = String::new();
		if write!(sample, "{}", NaiveDate::default().format(&self.date_format)).is_err() {
			return Err(CoreError::InvalidSetting {
				field: "date_format",
				reason: format!("{:?} cannot format a calendar date", self.date_format),
			});
		}
		if self.storage_key.trim().is_empty() {
			return Err(CoreError::InvalidSetting {
				field: "storage_key",
				reason: "must not be empty".to_string(),
			});
		}
		Ok(())
	}

	/// Sets the page size
	pub fn with_page_size(mut self, page_size: usize) -> Self {
		self.page_size = page_size;
		self
	}

	/// Sets the preference store key
	pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
		self.storage_key = key.into();
		self
	}

	/// Enables or disables persisted-filter validation
	pub fn with_validate_persisted_filter(mut self, enabled: bool) -> Self {
		self.validate_persisted_filter = enabled;
		self
	}

	/// Enables or disables the page reset on filter change
	pub fn with_reset_page_on_filter_change(mut self, enabled: bool) -> Self {
		self.reset_page_on_filter_change = enabled;
		self
	}
}
