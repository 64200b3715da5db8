//! Searchable directories and list/detail navigation.
//!
//! The patients, doctors and today's-schedule pages all share the same shape: a
//! filtered list and an optional detail view. This module holds the pieces that
//! are independent of any one page.

pub mod navigation;
pub mod search;

pub use navigation::{Navigation, NavigationOutcome};
pub use search::{filter_indices, match_ranges, normalize_query, search, SearchCache, Searchable};
