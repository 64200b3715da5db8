//! List/detail navigation state machine.
//!
//! [`Navigation`] is a plain value. Every transition consumes the current value
//! and returns the next one, so callers swap it in place and can never observe
//! a half-applied transition.
//!
//! ```text
//!            select(id)                 navigate(stub), id exists
//!   List ───────────────▶ Detail(id) ◀──────────────────────────── List
//!     ▲                      │   ▲ │
//!     └──────── back ────────┘   │ └── open_item / close_item
//!                                └────────────────────────
//! ```

/// Whether a directory shows its list or one record's detail.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Navigation {
    /// Browsing the full or filtered directory.
    #[default]
    List,
    /// Viewing one record.
    Detail {
        /// Catalog id of the record; resolved against the live catalog on render.
        id: String,
        /// Open sub-item (e.g. an appointment from the history), if any.
        open_item: Option<String>,
    },
}

/// Result of an external navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The record exists and its detail view is now active.
    Entered,
    /// No record has that id; the directory stays on its list.
    NotFound,
}

impl Navigation {
    /// Opens the detail view for `id` from the list.
    ///
    /// A no-op while a detail view is already open.
    #[must_use]
    pub fn select(self, id: impl Into<String>) -> Self {
        match self {
            Self::List => Self::Detail {
                id: id.into(),
                open_item: None,
            },
            detail @ Self::Detail { .. } => detail,
        }
    }

    /// Returns to the list, dropping the selection and any open sub-item.
    #[must_use]
    pub fn back(self) -> Self {
        Self::List
    }

    /// Jumps straight to a record's detail, bypassing search.
    ///
    /// The directory first resets to its list; it then enters `Detail(id)` only
    /// if `exists(id)` confirms the record is in the catalog.
    #[must_use]
    pub fn navigate(self, id: &str, exists: impl FnOnce(&str) -> bool) -> (Self, NavigationOutcome) {
        let list = self.back();
        if exists(id) {
            (list.select(id), NavigationOutcome::Entered)
        } else {
            (list, NavigationOutcome::NotFound)
        }
    }

    /// Opens a sub-item inside the current detail view.
    #[must_use]
    pub fn open_item(self, item_id: impl Into<String>) -> Self {
        match self {
            Self::Detail { id, .. } => Self::Detail {
                id,
                open_item: Some(item_id.into()),
            },
            Self::List => Self::List,
        }
    }

    /// Closes the open sub-item, staying on the detail view.
    #[must_use]
    pub fn close_item(self) -> Self {
        match self {
            Self::Detail { id, .. } => Self::Detail { id, open_item: None },
            Self::List => Self::List,
        }
    }

    #[must_use]
    pub fn selected_id(&self) -> Option<&str> {
        match self {
            Self::Detail { id, .. } => Some(id),
            Self::List => None,
        }
    }

    #[must_use]
    pub fn open_item_id(&self) -> Option<&str> {
        match self {
            Self::Detail { open_item, .. } => open_item.as_deref(),
            Self::List => None,
        }
    }

    #[must_use]
    pub const fn is_detail(&self) -> bool {
        matches!(self, Self::Detail { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_then_back_round_trips_to_list() {
        let nav = Navigation::List.select("p3");
        assert_eq!(nav.selected_id(), Some("p3"));
        assert!(nav.is_detail());

        let nav = nav.back();
        assert_eq!(nav, Navigation::List);
        assert_eq!(nav.selected_id(), None);
    }

    #[test]
    fn select_is_ignored_inside_detail() {
        let nav = Navigation::List.select("p1").select("p2");
        assert_eq!(nav.selected_id(), Some("p1"));
    }

    #[test]
    fn back_clears_sub_selection() {
        let nav = Navigation::List.select("p1").open_item("apt-1");
        assert_eq!(nav.open_item_id(), Some("apt-1"));
        let nav = nav.back().select("p1");
        assert_eq!(nav.open_item_id(), None);
    }

    #[test]
    fn back_from_detail_returns_to_list() {
        let nav = Navigation::List.select("p3").back();
        assert_eq!(nav, Navigation::List);
        assert_eq!(nav.selected_id(), None);
        assert_eq!(Navigation::List.back(), Navigation::List);
    }

    #[test]
    fn close_item_keeps_detail() {
        let nav = Navigation::List.select("p1").open_item("apt-1").close_item();
        assert_eq!(nav.selected_id(), Some("p1"));
        assert_eq!(nav.open_item_id(), None);
    }

    #[test]
    fn open_item_requires_detail() {
        assert_eq!(Navigation::List.open_item("apt-1"), Navigation::List);
    }

    #[test]
    fn navigate_enters_known_ids_only() {
        let (nav, outcome) = Navigation::List.navigate("p3", |id| id == "p3");
        assert_eq!(outcome, NavigationOutcome::Entered);
        assert_eq!(nav.selected_id(), Some("p3"));

        let (nav, outcome) = Navigation::List.navigate("p99", |_| false);
        assert_eq!(outcome, NavigationOutcome::NotFound);
        assert_eq!(nav, Navigation::List);
    }

    #[test]
    fn navigate_replaces_an_open_detail() {
        let current = Navigation::List.select("p1").open_item("apt-1");
        let (nav, _) = current.navigate("p2", |_| true);
        assert_eq!(nav.selected_id(), Some("p2"));
        assert_eq!(nav.open_item_id(), None);
    }
}
