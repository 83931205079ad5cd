//! Candidates, dataset loading and settings
//!
//! # Examples
//!
//! ```rust
//! use hirelist::core::{Settings, settings::DEFAULT_PAGE_SIZE};
//!
//! assert_eq!(Settings::default().page_size, DEFAULT_PAGE_SIZE);
//! ```

pub use hirelist_core::*;
