//! Page components
//!
//! - [`FilterBar`]: search box, role select and "More Filters"
//! - [`CandidatesTable`]: sortable, paginated candidates table

pub mod candidates_table;
pub mod filter_bar;

pub use candidates_table::CandidatesTable;
pub use filter_bar::{FilterBar, RoleOption};
