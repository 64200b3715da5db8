//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only place where input turns into state changes.
//! It returns whether a re-render is needed and the side effects the plugin
//! shim must run.
//!
//! # Event Types
//!
//! - **Pages**: `NextPage`, `PrevPage`, `GoTo`
//! - **Navigation**: `KeyDown`, `KeyUp`, `Select`, `Back`, `ViewPatient`
//! - **Search**: `SearchMode`, `FocusSearchBar`, `FocusResults`, `ExitSearch`, `Char`, `Backspace`
//! - **Records**: `CheckIn`, `RefreshReports`
//! - **System**: `RequestCatalog`, `WorkerResponse`, `CloseFocus`
//!
//! A notice from the previous event is cleared before each new one is handled.
//!
//! # Example
//!
//! ```rust
//! use careboard::app::{handle_event, AppState, Event, Page};
//! use careboard::catalog::demo_catalog;
//! use careboard::ui::Theme;
//! use chrono::NaiveDate;
//!
//! let catalog = demo_catalog(42, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())?;
//! let mut state = AppState::new(catalog, Theme::default(), 42);
//! let (render, actions) = handle_event(&mut state, &Event::GoTo(Page::Patients))?;
//! assert!(render && actions.is_empty());
//! # Ok::<(), careboard::CareboardError>(())
//! ```

use super::modes::{InputMode, Page, SearchFocus};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::CheckInOutcome;
use crate::worker::{CatalogSource, WorkerMessage, WorkerResponse};

/// Input, lifecycle and worker events understood by the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Shows the next page in sidebar order (wraps).
    NextPage,
    /// Shows the previous page in sidebar order (wraps).
    PrevPage,
    /// Shows a specific page.
    GoTo(Page),
    /// Moves the cursor down one row (wraps to top).
    KeyDown,
    /// Moves the cursor up one row (wraps to bottom).
    KeyUp,
    /// Opens the row under the cursor.
    Select,
    /// Closes a popup or leaves a detail view.
    Back,
    /// Opens the patient of the highlighted scheduled appointment.
    ViewPatient,
    /// Checks in the highlighted scheduled appointment.
    CheckIn,
    /// Regenerates the report numbers.
    RefreshReports,
    /// Enters search mode with typing focus.
    SearchMode,
    /// Moves focus from the results back to the query.
    FocusSearchBar,
    /// Moves focus from the query to the results.
    FocusResults,
    /// Leaves search mode and clears the query.
    ExitSearch,
    /// Appends a character to the query.
    Char(char),
    /// Removes the last character of the query.
    Backspace,
    /// Hides the plugin pane.
    CloseFocus,
    /// Asks the worker for a catalog.
    ///
    /// Sent once permissions are granted.
    RequestCatalog(CatalogSource),
    /// Wraps a reply from the background worker.
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Parameters
///
/// * `state` - Mutable reference to application state
/// * `event` - Event to process
///
/// # Returns
///
/// `(should_render, actions)`. Actions are run in order by the plugin shim.
///
/// # Errors
///
/// Currently infallible; the `Result` keeps the signature stable for handlers
/// that talk to the host.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    let cleared_notice = state.notice.take().is_some();

    let (render, actions) = match event {
        Event::NextPage => (state.switch_page(state.page.next()), vec![]),
        Event::PrevPage => (state.switch_page(state.page.prev()), vec![]),
        Event::GoTo(page) => (state.switch_page(*page), vec![]),
        Event::KeyDown => (state.move_selection(true), vec![]),
        Event::KeyUp => (state.move_selection(false), vec![]),
        Event::Select => (state.select(), vec![]),
        Event::Back => (state.back(), vec![]),
        Event::ViewPatient => {
            if state.page != Page::Appointments {
                return Ok((cleared_notice, vec![]));
            }
            let Some(stub) = state.highlighted_appointment().map(|a| a.patient.clone()) else {
                tracing::debug!("no appointment highlighted");
                return Ok((cleared_notice, vec![]));
            };
            state.navigate_to_patient(&stub);
            (true, vec![])
        }
        Event::CheckIn => match state.check_in_selected() {
            CheckInOutcome::CheckedIn => (true, vec![]),
            CheckInOutcome::Ignored(status) => {
                state.notice = Some(format!(
                    "Only confirmed appointments can be checked in (this one is {status})"
                ));
                (true, vec![])
            }
            CheckInOutcome::NotFound => (false, vec![]),
        },
        Event::RefreshReports => {
            if state.page == Page::Reports {
                state.refresh_reports();
                (true, vec![])
            } else {
                (false, vec![])
            }
        }
        Event::SearchMode => {
            let entered = state.enter_search();
            if entered {
                tracing::debug!(page = ?state.page, "entering search mode");
            }
            (entered, vec![])
        }
        Event::FocusSearchBar => {
            if state.input_mode.is_search() {
                state.input_mode = InputMode::Search(SearchFocus::Typing);
                (true, vec![])
            } else {
                (false, vec![])
            }
        }
        Event::FocusResults => {
            if !state.input_mode.is_search() {
                (false, vec![])
            } else if state.query().trim().is_empty() {
                state.set_query("");
                state.input_mode = InputMode::Normal;
                (true, vec![])
            } else {
                state.input_mode = InputMode::Search(SearchFocus::Navigating);
                (true, vec![])
            }
        }
        Event::ExitSearch => {
            if state.input_mode.is_search() {
                tracing::debug!(query = %state.query(), "exiting search mode");
                state.input_mode = InputMode::Normal;
                state.set_query("");
                (true, vec![])
            } else {
                (state.back(), vec![])
            }
        }
        Event::Char(c) => {
            if !state.input_mode.is_typing() {
                return Ok((cleared_notice, vec![]));
            }
            state.push_query_char(*c);
            tracing::trace!(query = %state.query(), char = %c, "search query updated");
            (true, vec![])
        }
        Event::Backspace => {
            if !state.input_mode.is_typing() {
                return Ok((cleared_notice, vec![]));
            }
            (state.pop_query_char(), vec![])
        }
        Event::CloseFocus => (false, vec![Action::CloseFocus]),
        Event::RequestCatalog(source) => {
            tracing::debug!(source = ?source, "requesting catalog from worker");
            (
                false,
                vec![Action::PostToWorker(WorkerMessage::load_catalog(source.clone()))],
            )
        }
        Event::WorkerResponse(response) => match response {
            WorkerResponse::CatalogLoaded { catalog } => {
                if state.loaded && &state.catalog == catalog {
                    tracing::debug!("catalog unchanged, skipping render");
                    (false, vec![])
                } else {
                    tracing::debug!(
                        doctors = catalog.doctors().len(),
                        patients = catalog.patients().len(),
                        scheduled = catalog.todays_appointments().len(),
                        "catalog installed"
                    );
                    state.replace_catalog(catalog.clone());
                    (true, vec![])
                }
            }
            WorkerResponse::Error { message } => {
                tracing::error!(error = %message, "worker error");
                state.notice = Some(message.clone());
                (true, vec![])
            }
        },
    };

    Ok((render || cleared_notice, actions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{demo_catalog, Catalog};
    use crate::ui::Theme;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn state() -> AppState {
        let catalog = demo_catalog(42, today()).unwrap();
        let mut state = AppState::new(Catalog::default(), Theme::default(), 42);
        state.replace_catalog(catalog);
        state
    }

    fn send(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
        handle_event(state, &event).unwrap()
    }

    #[test]
    fn page_keys_cycle() {
        let mut state = state();
        send(&mut state, Event::PrevPage);
        assert_eq!(state.page, Page::Reports);
        send(&mut state, Event::NextPage);
        assert_eq!(state.page, Page::Dashboard);
        let (render, _) = send(&mut state, Event::GoTo(Page::Dashboard));
        assert!(!render);
    }

    #[test]
    fn typing_filters_and_escape_clears() {
        let mut state = state();
        send(&mut state, Event::GoTo(Page::Doctors));
        send(&mut state, Event::SearchMode);
        for c in "neuro".chars() {
            send(&mut state, Event::Char(c));
        }
        assert_eq!(state.query(), "neuro");
        assert!(state.doctors.filter.len() < state.catalog.doctors().len());

        send(&mut state, Event::ExitSearch);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.query(), "");
        assert_eq!(state.doctors.filter.len(), state.catalog.doctors().len());
    }

    #[test]
    fn chars_outside_search_are_ignored() {
        let mut state = state();
        send(&mut state, Event::GoTo(Page::Patients));
        let (render, _) = send(&mut state, Event::Char('x'));
        assert!(!render);
        assert_eq!(state.query(), "");
    }

    #[test]
    fn search_is_refused_on_overview_pages() {
        let mut state = state();
        let (render, _) = send(&mut state, Event::SearchMode);
        assert!(!render);
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn focus_results_with_blank_query_returns_to_normal() {
        let mut state = state();
        send(&mut state, Event::GoTo(Page::Patients));
        send(&mut state, Event::SearchMode);
        send(&mut state, Event::Char(' '));
        send(&mut state, Event::FocusResults);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.query(), "");
    }

    #[test]
    fn ignored_check_in_leaves_a_notice_for_one_event() {
        let mut state = state();
        send(&mut state, Event::GoTo(Page::Appointments));
        send(&mut state, Event::KeyDown);
        send(&mut state, Event::CheckIn);
        assert!(state.notice.as_deref().unwrap().contains("Checked-in"));

        let (render, _) = send(&mut state, Event::KeyDown);
        assert!(render);
        assert!(state.notice.is_none());
    }

    #[test]
    fn catalog_request_posts_to_worker() {
        let mut state = state();
        let source = CatalogSource::Demo { seed: 7, today: today() };
        let (render, actions) = send(&mut state, Event::RequestCatalog(source.clone()));
        assert!(!render);
        assert!(matches!(
            actions.as_slice(),
            [Action::PostToWorker(WorkerMessage::LoadCatalog { source: s, .. })] if *s == source
        ));
    }

    #[test]
    fn identical_catalog_skips_render() {
        let mut state = state();
        let catalog = state.catalog.clone();
        let (render, _) = send(
            &mut state,
            Event::WorkerResponse(WorkerResponse::CatalogLoaded { catalog }),
        );
        assert!(!render);
    }

    #[test]
    fn worker_error_keeps_catalog_and_shows_notice() {
        let mut state = state();
        let before = state.catalog.clone();
        send(
            &mut state,
            Event::WorkerResponse(WorkerResponse::Error {
                message: "load catalog: missing file".to_string(),
            }),
        );
        assert_eq!(state.catalog, before);
        assert_eq!(state.notice.as_deref(), Some("load catalog: missing file"));
    }

    #[test]
    fn close_focus_emits_action() {
        let mut state = state();
        let (render, actions) = send(&mut state, Event::CloseFocus);
        assert!(!render);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }
}
