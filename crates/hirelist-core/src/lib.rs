//! Data layer for hirelist
//!
//! This crate holds the read-only candidate model the table renders:
//!
//! - [`Candidate`] and the closed [`Status`] enumeration
//! - [`Dataset`]: the immutable candidate list plus the ordered roles enumeration,
//!   validated at load time (unique ids, distinct roles, known statuses)
//! - [`Settings`]: page size, window width, preference key and date format
//!
//! # Example
//!
//! ```rust
//! use hirelist_core::{Dataset, Status};
//!
//! let json = r#"{
//!     "roles": ["QA Engineer"],
//!     "candidates": [{
//!         "id": 1, "name": "Ada", "email": "ada@example.com",
//!         "role": "QA Engineer", "status": "Offer",
//!         "appliedDate": "2023-05-15", "experience": 4,
//!         "skills": ["Selenium"], "location": "Remote"
//!     }]
//! }"#;
//!
//! let dataset = Dataset::from_json_str(json).unwrap();
//! assert_eq!(dataset.candidates()[0].status, Status::Offer);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod candidate;
pub mod dataset;
pub mod error;
pub mod settings;

// Re-exports for convenience
pub use candidate::{Candidate, CandidateId, Status, UnknownStatus};
pub use dataset::Dataset;
pub use error::{CoreError, Result};
pub use settings::Settings;
