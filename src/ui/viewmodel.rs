//! Display-ready snapshots of the dashboard.
//!
//! A [`UIViewModel`] is computed from `AppState` for a given terminal size and
//! handed to the renderer. It carries no references into the catalog: every
//! string is already formatted and every list already windowed to fit.

use crate::domain::AppointmentStatus;

/// Complete description of one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    /// One-line transient message under the header.
    pub notice: Option<String>,
    /// Present on pages that offer search.
    pub search_bar: Option<SearchBarInfo>,
    pub body: Body,
    pub footer: FooterInfo,
}

/// Page title plus the sidebar, rendered as a tab strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    pub tabs: Vec<TabInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabInfo {
    /// Digit that jumps to the page.
    pub key: char,
    pub label: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,
    /// Shown dimmed while the query is empty.
    pub placeholder: String,
    /// Whether keystrokes currently go into the box.
    pub is_focused: bool,
}

/// The main area of the page.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// A centered message, e.g. while the catalog loads or a search has no hits.
    Empty(EmptyState),
    /// A directory list.
    Table(TableView),
    /// One record, optionally with a popup over it.
    Detail(DetailView),
    /// Stat cards and chart panels (dashboard and reports).
    Overview(OverviewView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// A windowed table with a header row.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    /// Caption above the column headers, e.g. `Patient Directory`.
    pub caption: String,
    /// Right-aligned summary next to the caption, e.g. check-in counters.
    pub summary: Option<String>,
    pub columns: Vec<Column>,
    pub rows: Vec<TableRow>,
    /// Shown instead of rows when there are none.
    pub empty_message: String,
    /// Popup drawn over the table (the doctor profile).
    pub popup: Option<PopupView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub label: &'static str,
    /// Width in characters; `0` means "take the rest of the line".
    pub width: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub cells: Vec<Cell>,
    pub is_selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    /// Character ranges matching the search query.
    pub highlight_ranges: Vec<(usize, usize)>,
    /// Status cells are colored by status.
    pub status: Option<AppointmentStatus>,
}

impl Cell {
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            highlight_ranges: Vec::new(),
            status: None,
        }
    }

    #[must_use]
    pub fn highlighted(text: impl Into<String>, highlight_ranges: Vec<(usize, usize)>) -> Self {
        Self {
            text: text.into(),
            highlight_ranges,
            status: None,
        }
    }

    #[must_use]
    pub fn status(status: AppointmentStatus) -> Self {
        Self {
            text: status.label().to_string(),
            highlight_ranges: Vec::new(),
            status: Some(status),
        }
    }
}

/// A record's detail page.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub back_label: String,
    pub heading: String,
    pub subtitle_lines: Vec<String>,
    pub section: TableView,
    pub popup: Option<PopupView>,
}

/// A bordered box of labelled fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupView {
    pub title: String,
    pub fields: Vec<(String, String)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverviewView {
    pub heading: Option<String>,
    pub cards: Vec<StatCard>,
    pub panels: Vec<Panel>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub label: String,
    pub value: String,
    /// Period-over-period change in percent.
    pub delta: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub title: String,
    pub subtitle: Option<String>,
    pub lines: Vec<PanelLine>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelLine {
    Text(String),
    /// A label with a value shown on the right.
    Entry { marker: char, text: String, trailing: String },
    /// A horizontal bar scaled against `max`.
    Bar { label: String, value: u32, max: u32 },
}
