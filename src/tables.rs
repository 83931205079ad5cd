//! Filter, sort and paginate
//!
//! # Examples
//!
//! ```rust
//! use hirelist::tables::page_window;
//!
//! assert_eq!(page_window(6, 12, 5), vec![4, 5, 6, 7, 8]);
//! ```

pub use hirelist_tables::*;
