//! Page and input mode types.
//!
//! The dashboard shows one [`Page`] at a time. Orthogonal to the page, the
//! [`InputMode`] decides whether keystrokes drive navigation or go into the
//! search box.
//!
//! # Example
//!
//! ```rust
//! use careboard::app::modes::{InputMode, Page, SearchFocus};
//!
//! let page = Page::Dashboard.next();
//! assert_eq!(page, Page::Appointments);
//! let mode = InputMode::Search(SearchFocus::Typing);
//! assert!(mode.is_search());
//! ```

use crate::domain::error::CareboardError;
use std::fmt;
use std::str::FromStr;

/// Top-level dashboard section, in sidebar order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Page {
    #[default]
    Dashboard,
    Appointments,
    Doctors,
    Patients,
    Reports,
}

impl Page {
    /// All pages in sidebar order. Digit keys `1`-`5` index into this.
    pub const ALL: [Self; 5] = [
        Self::Dashboard,
        Self::Appointments,
        Self::Doctors,
        Self::Patients,
        Self::Reports,
    ];

    /// Sidebar label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Appointments => "Appointments",
            Self::Doctors => "Doctors",
            Self::Patients => "Patients",
            Self::Reports => "Reports",
        }
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }

    /// The following page, wrapping from Reports to Dashboard.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    /// The preceding page, wrapping from Dashboard to Reports.
    #[must_use]
    pub fn prev(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Page for a 1-based sidebar index.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        index.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    /// Whether the page has a searchable directory.
    #[must_use]
    pub const fn has_directory(self) -> bool {
        matches!(self, Self::Appointments | Self::Doctors | Self::Patients)
    }

    /// Header title. The patients page switches titles once a record is open.
    #[must_use]
    pub const fn title(self, has_selected: bool) -> &'static str {
        match self {
            Self::Patients if has_selected => "Patient Details",
            Self::Patients => "Patients",
            Self::Appointments => "Appointments",
            Self::Doctors => "Doctor Management",
            Self::Dashboard => "Dashboard",
            Self::Reports => "Reports",
        }
    }

    /// Placeholder for the search box, or `None` where the page has no search.
    ///
    /// Patient search is only offered from the list, not from a detail view.
    #[must_use]
    pub const fn search_placeholder(self, in_detail: bool) -> Option<&'static str> {
        match self {
            Self::Appointments => Some("Search patient, doctor..."),
            Self::Doctors => Some("Search doctors by name, specialty..."),
            Self::Patients if !in_detail => Some("Search by Patient Name, ID, or Phone..."),
            _ => None,
        }
    }
}

/// Resolves the header title for `page`.
#[must_use]
pub const fn page_title(page: Page, has_selected: bool) -> &'static str {
    page.title(has_selected)
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Page {
    type Err = CareboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CareboardError::Config(format!("unknown page: {s}")))
    }
}

/// Focus state within search mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// Keystrokes edit the query.
    Typing,
    /// Keystrokes move through the filtered results; the query is kept.
    Navigating,
}

/// Current input handling mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    /// Page navigation and record commands.
    #[default]
    Normal,
    /// The search box is open on a directory page.
    Search(SearchFocus),
}

impl InputMode {
    #[must_use]
    pub const fn is_search(self) -> bool {
        matches!(self, Self::Search(_))
    }

    #[must_use]
    pub const fn is_typing(self) -> bool {
        matches!(self, Self::Search(SearchFocus::Typing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_cycle_in_both_directions() {
        assert_eq!(Page::Reports.next(), Page::Dashboard);
        assert_eq!(Page::Dashboard.prev(), Page::Reports);
        for page in Page::ALL {
            assert_eq!(page.next().prev(), page);
        }
    }

    #[test]
    fn digit_index_is_one_based() {
        assert_eq!(Page::from_index(1), Some(Page::Dashboard));
        assert_eq!(Page::from_index(4), Some(Page::Patients));
        assert_eq!(Page::from_index(0), None);
        assert_eq!(Page::from_index(6), None);
    }

    #[test]
    fn titles_follow_page_and_selection() {
        assert_eq!(page_title(Page::Patients, true), "Patient Details");
        assert_eq!(page_title(Page::Patients, false), "Patients");
        assert_eq!(page_title(Page::Doctors, true), "Doctor Management");
        assert_eq!(page_title(Page::Appointments, false), "Appointments");
        assert_eq!(page_title(Page::Reports, false), "Reports");
    }

    #[test]
    fn only_directory_pages_offer_search() {
        for page in Page::ALL {
            assert_eq!(page.search_placeholder(false).is_some(), page.has_directory());
        }
        assert_eq!(Page::Patients.search_placeholder(true), None);
        assert!(Page::Doctors.search_placeholder(true).is_some());
    }

    #[test]
    fn pages_parse_case_insensitively() {
        assert_eq!("patients".parse::<Page>().unwrap(), Page::Patients);
        assert_eq!(" Reports ".parse::<Page>().unwrap(), Page::Reports);
        assert!("billing".parse::<Page>().is_err());
    }
}
