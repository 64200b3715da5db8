//! Application state and its transitions.
//!
//! [`AppState`] is the single source of truth for the dashboard: the catalog,
//! the active page, one [`DirectoryPane`] per searchable page, the pending
//! patient handoff, and the seeded report data. The event handler calls the
//! methods here; view models are computed from it on demand (see
//! [`AppState::compute_viewmodel`]).
//!
//! Directory panes never hold copies of records. Filters keep indices into the
//! catalog slices and detail views keep ids, so a check-in is visible
//! everywhere on the next render.
//!
//! # Example
//!
//! ```rust
//! use careboard::app::{AppState, Page};
//! use careboard::catalog::demo_catalog;
//! use careboard::ui::Theme;
//! use chrono::NaiveDate;
//!
//! let catalog = demo_catalog(42, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())?;
//! let mut state = AppState::new(catalog, Theme::default(), 42);
//! state.switch_page(Page::Patients);
//! state.set_query("ava");
//! assert_eq!(state.patients.filter.len(), 1);
//! # Ok::<(), careboard::CareboardError>(())
//! ```

use super::modes::{InputMode, Page};
use crate::catalog::insights::weekly_counts;
use crate::catalog::{Catalog, ReportStats, WeeklyCount};
use crate::directory::{Navigation, NavigationOutcome, SearchCache, Searchable};
use crate::domain::{CheckInOutcome, Doctor, Patient, PatientStub, TodaysAppointment};
use crate::ui::theme::Theme;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Search, cursor and navigation state for one directory page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryPane {
    /// Current query and the indices of matching records.
    pub filter: SearchCache,
    /// Cursor position within the filtered list.
    pub selected_index: usize,
    pub navigation: Navigation,
    /// Cursor inside a detail view (the patient's history rows).
    pub detail_index: usize,
}

impl DirectoryPane {
    fn for_records<T: Searchable>(records: &[T]) -> Self {
        let mut pane = Self::default();
        pane.filter.reset(records);
        pane
    }

    /// Clears the query, the cursor and any open detail.
    pub fn reset<T: Searchable>(&mut self, records: &[T]) {
        self.filter.reset(records);
        self.selected_index = 0;
        self.navigation = Navigation::List;
        self.detail_index = 0;
    }

    /// Index into the unfiltered record slice of the row under the cursor.
    #[must_use]
    pub fn selected_record(&self) -> Option<usize> {
        self.filter.matches().get(self.selected_index).copied()
    }

    fn set_query<T: Searchable>(&mut self, records: &[T], query: &str) -> bool {
        let changed = self.filter.update(records, query);
        if changed {
            self.clamp();
        }
        changed
    }

    fn refresh<T: Searchable>(&mut self, records: &[T]) {
        self.filter.refresh(records);
        self.clamp();
    }

    fn clamp(&mut self) {
        self.selected_index = self.selected_index.min(self.filter.len().saturating_sub(1));
    }

    fn step_cursor(&mut self, forward: bool) -> bool {
        let len = self.filter.len();
        let next = step(self.selected_index, len, forward);
        let moved = next != self.selected_index;
        self.selected_index = next;
        moved
    }
}

/// Wrapping cursor step over `len` items.
const fn step(index: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        0
    } else if forward {
        (index + 1) % len
    } else if index == 0 {
        len - 1
    } else {
        index - 1
    }
}

fn generate_reports(seed: u64) -> (ReportStats, Vec<WeeklyCount>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let reports = ReportStats::generate(&mut rng);
    let weekly = weekly_counts(&mut rng);
    (reports, weekly)
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Canonical records for the session.
    pub catalog: Catalog,

    pub page: Page,

    pub input_mode: InputMode,

    pub theme: Theme,

    pub patients: DirectoryPane,

    pub doctors: DirectoryPane,

    /// Today's schedule. Only the list and cursor are used; it has no detail view.
    pub appointments: DirectoryPane,

    /// Patient requested from the appointments page.
    ///
    /// Set when "view patient" lands on a record, cleared when the user leaves
    /// that record or the patients page.
    pub handoff: Option<PatientStub>,

    /// Headline numbers on the reports page.
    pub reports: ReportStats,

    /// This week's appointment counts for the dashboard chart.
    pub weekly: Vec<WeeklyCount>,

    /// Seed behind `reports` and `weekly`; advanced by a refresh.
    pub report_seed: u64,

    /// One-line message shown until the next event.
    pub notice: Option<String>,

    /// Whether a catalog has arrived from the worker.
    pub loaded: bool,
}

impl AppState {
    /// Creates the state for `catalog`, starting on the dashboard.
    ///
    /// # Parameters
    ///
    /// * `catalog` - Initial records (empty until the worker replies)
    /// * `theme` - Color scheme for rendering
    /// * `report_seed` - Seed for the generated report numbers
    #[must_use]
    pub fn new(catalog: Catalog, theme: Theme, report_seed: u64) -> Self {
        let (reports, weekly) = generate_reports(report_seed);

        Self {
            patients: DirectoryPane::for_records(catalog.patients()),
            doctors: DirectoryPane::for_records(catalog.doctors()),
            appointments: DirectoryPane::for_records(catalog.todays_appointments()),
            catalog,
            page: Page::default(),
            input_mode: InputMode::Normal,
            theme,
            handoff: None,
            reports,
            weekly,
            report_seed,
            notice: None,
            loaded: false,
        }
    }

    /// The directory pane behind `page`, if it has one.
    #[must_use]
    pub const fn pane(&self, page: Page) -> Option<&DirectoryPane> {
        match page {
            Page::Patients => Some(&self.patients),
            Page::Doctors => Some(&self.doctors),
            Page::Appointments => Some(&self.appointments),
            Page::Dashboard | Page::Reports => None,
        }
    }

    #[must_use]
    pub const fn active_pane(&self) -> Option<&DirectoryPane> {
        self.pane(self.page)
    }

    /// Query of the active directory, or `""` on pages without search.
    #[must_use]
    pub fn query(&self) -> &str {
        self.active_pane().map_or("", |pane| pane.filter.query())
    }

    /// Whether the active directory is showing a record.
    #[must_use]
    pub fn in_detail(&self) -> bool {
        self.active_pane()
            .is_some_and(|pane| pane.navigation.is_detail())
    }

    #[must_use]
    pub fn page_title(&self) -> &'static str {
        self.page.title(self.in_detail())
    }

    /// Placeholder of the active search box, `None` where search is unavailable.
    #[must_use]
    pub fn search_placeholder(&self) -> Option<&'static str> {
        self.page.search_placeholder(self.in_detail())
    }

    /// Patient whose detail view is open, resolved against the live catalog.
    #[must_use]
    pub fn selected_patient(&self) -> Option<&Patient> {
        self.patients
            .navigation
            .selected_id()
            .and_then(|id| self.catalog.patient(id))
    }

    /// Doctor whose profile is open.
    #[must_use]
    pub fn selected_doctor(&self) -> Option<&Doctor> {
        self.doctors
            .navigation
            .selected_id()
            .and_then(|id| self.catalog.doctor(id))
    }

    /// Scheduled appointment under the cursor on the appointments page.
    #[must_use]
    pub fn highlighted_appointment(&self) -> Option<&TodaysAppointment> {
        self.appointments
            .selected_record()
            .and_then(|i| self.catalog.todays_appointments().get(i))
    }

    /// Replaces the active directory's query and refilters if it changed.
    ///
    /// Returns `true` if the visible rows were recomputed.
    pub fn set_query(&mut self, query: &str) -> bool {
        match self.page {
            Page::Patients => self.patients.set_query(self.catalog.patients(), query),
            Page::Doctors => self.doctors.set_query(self.catalog.doctors(), query),
            Page::Appointments => self
                .appointments
                .set_query(self.catalog.todays_appointments(), query),
            Page::Dashboard | Page::Reports => false,
        }
    }

    pub fn push_query_char(&mut self, c: char) -> bool {
        let mut query = self.query().to_string();
        query.push(c);
        self.set_query(&query)
    }

    pub fn pop_query_char(&mut self) -> bool {
        let mut query = self.query().to_string();
        if query.pop().is_none() {
            return false;
        }
        self.set_query(&query)
    }

    /// Opens the search box on the active page.
    ///
    /// Refused on pages without search, in patient detail, and while a doctor
    /// profile is open.
    pub fn enter_search(&mut self) -> bool {
        if self.search_placeholder().is_none() || self.in_detail() {
            return false;
        }
        self.input_mode = InputMode::Search(super::modes::SearchFocus::Typing);
        true
    }

    /// Moves the cursor one row, wrapping at either end.
    ///
    /// In patient detail the cursor walks the appointment history; with an
    /// appointment popup or doctor profile open it does nothing.
    pub fn move_selection(&mut self, forward: bool) -> bool {
        match self.page {
            Page::Patients if self.patients.navigation.is_detail() => {
                if self.patients.navigation.open_item_id().is_some() {
                    return false;
                }
                let len = self.selected_patient().map_or(0, |p| p.appointments.len());
                let next = step(self.patients.detail_index, len, forward);
                let moved = next != self.patients.detail_index;
                self.patients.detail_index = next;
                moved
            }
            Page::Patients => self.patients.step_cursor(forward),
            Page::Doctors if self.doctors.navigation.is_detail() => false,
            Page::Doctors => self.doctors.step_cursor(forward),
            Page::Appointments => self.appointments.step_cursor(forward),
            Page::Dashboard | Page::Reports => false,
        }
    }

    /// Acts on the row under the cursor.
    ///
    /// - Patients list: open the patient. Patient detail: open the history item.
    /// - Doctors list: open the profile.
    /// - Appointments: view the patient (see [`AppState::navigate_to_patient`]).
    pub fn select(&mut self) -> bool {
        match self.page {
            Page::Patients if !self.patients.navigation.is_detail() => {
                let Some(id) = self
                    .patients
                    .selected_record()
                    .and_then(|i| self.catalog.patients().get(i))
                    .map(|p| p.id.clone())
                else {
                    return false;
                };
                tracing::debug!(patient_id = %id, "patient selected");
                self.patients.navigation = std::mem::take(&mut self.patients.navigation).select(id);
                self.patients.detail_index = 0;
                self.input_mode = InputMode::Normal;
                true
            }
            Page::Patients => {
                if self.patients.navigation.open_item_id().is_some() {
                    return false;
                }
                let Some(item) = self
                    .selected_patient()
                    .and_then(|p| p.appointments.get(self.patients.detail_index))
                    .map(|a| a.id.clone())
                else {
                    return false;
                };
                self.patients.navigation =
                    std::mem::take(&mut self.patients.navigation).open_item(item);
                true
            }
            Page::Doctors if !self.doctors.navigation.is_detail() => {
                let Some(id) = self
                    .doctors
                    .selected_record()
                    .and_then(|i| self.catalog.doctors().get(i))
                    .map(|d| d.id.clone())
                else {
                    return false;
                };
                tracing::debug!(doctor_id = %id, "doctor profile opened");
                self.doctors.navigation = std::mem::take(&mut self.doctors.navigation).select(id);
                self.input_mode = InputMode::Normal;
                true
            }
            Page::Appointments => {
                let Some(stub) = self.highlighted_appointment().map(|a| a.patient.clone()) else {
                    return false;
                };
                self.navigate_to_patient(&stub);
                true
            }
            Page::Doctors | Page::Dashboard | Page::Reports => false,
        }
    }

    /// Steps back one level: closes a popup, then leaves a detail view.
    pub fn back(&mut self) -> bool {
        match self.page {
            Page::Patients if self.patients.navigation.open_item_id().is_some() => {
                self.patients.navigation = std::mem::take(&mut self.patients.navigation).close_item();
                true
            }
            Page::Patients if self.patients.navigation.is_detail() => {
                self.clear_handoff();
                self.patients.navigation = std::mem::take(&mut self.patients.navigation).back();
                self.patients.detail_index = 0;
                true
            }
            Page::Doctors if self.doctors.navigation.is_detail() => {
                self.doctors.navigation = std::mem::take(&mut self.doctors.navigation).back();
                true
            }
            _ => false,
        }
    }

    /// Drops the pending handoff.
    ///
    /// If the patients page is showing a record, it returns to the list and the
    /// history cursor resets. Returns `false` if there was no handoff.
    pub fn clear_handoff(&mut self) -> bool {
        let Some(stub) = self.handoff.take() else {
            return false;
        };
        tracing::debug!(patient_id = %stub.id, "handoff cleared");
        if self.patients.navigation.is_detail() {
            self.patients.navigation = std::mem::take(&mut self.patients.navigation).back();
            self.patients.detail_index = 0;
        }
        true
    }

    /// Shows `page`, resetting the directory of the page being left.
    ///
    /// Returns `false` if `page` is already active.
    pub fn switch_page(&mut self, page: Page) -> bool {
        if page == self.page {
            return false;
        }

        let _span = tracing::debug_span!("switch_page", from = ?self.page, to = ?page).entered();

        self.reset_pane(self.page);
        if self.page == Page::Patients {
            self.handoff = None;
        }
        self.page = page;
        self.input_mode = InputMode::Normal;
        true
    }

    fn reset_pane(&mut self, page: Page) {
        match page {
            Page::Patients => self.patients.reset(self.catalog.patients()),
            Page::Doctors => self.doctors.reset(self.catalog.doctors()),
            Page::Appointments => self.appointments.reset(self.catalog.todays_appointments()),
            Page::Dashboard | Page::Reports => {}
        }
    }

    /// Opens a patient's record from another page, bypassing search.
    ///
    /// Switches to the patients page and resets it to its list. If the stub's id
    /// resolves, the detail view opens and the stub becomes the handoff.
    /// Otherwise the list stays and a notice explains why.
    pub fn navigate_to_patient(&mut self, stub: &PatientStub) -> NavigationOutcome {
        let _span = tracing::debug_span!("navigate_to_patient", patient_id = %stub.id).entered();

        self.switch_page(Page::Patients);
        self.input_mode = InputMode::Normal;

        let catalog = &self.catalog;
        let (navigation, outcome) = std::mem::take(&mut self.patients.navigation)
            .navigate(&stub.id, |id| catalog.patient(id).is_some());
        self.patients.navigation = navigation;
        self.patients.detail_index = 0;

        match outcome {
            NavigationOutcome::Entered => {
                tracing::debug!(patient_name = %stub.name, "patient handoff accepted");
                self.handoff = Some(stub.clone());
            }
            NavigationOutcome::NotFound => {
                tracing::warn!(
                    patient_id = %stub.id,
                    patient_name = %stub.name,
                    "handoff target is not in the catalog"
                );
                self.handoff = None;
                self.notice = Some(format!("Patient {} is no longer in the directory", stub.id));
            }
        }

        outcome
    }

    /// Checks in the scheduled appointment under the cursor.
    pub fn check_in_selected(&mut self) -> CheckInOutcome {
        if self.page != Page::Appointments {
            return CheckInOutcome::NotFound;
        }
        let Some(id) = self.highlighted_appointment().map(|a| a.id.clone()) else {
            return CheckInOutcome::NotFound;
        };

        let outcome = self.catalog.check_in(&id);
        if outcome.changed() {
            tracing::info!(appointment_id = %id, "patient checked in");
        } else if let CheckInOutcome::Ignored(status) = outcome {
            tracing::debug!(appointment_id = %id, status = %status, "check-in ignored");
        }
        outcome
    }

    /// Installs a freshly loaded catalog.
    ///
    /// Queries are kept and re-applied. A detail view whose record vanished
    /// falls back to its list.
    pub fn replace_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
        self.patients.refresh(self.catalog.patients());
        self.doctors.refresh(self.catalog.doctors());
        self.appointments.refresh(self.catalog.todays_appointments());

        let patient_gone = self
            .patients
            .navigation
            .selected_id()
            .is_some_and(|id| self.catalog.patient(id).is_none());
        if patient_gone {
            self.handoff = None;
            self.patients.navigation = Navigation::List;
        }
        let history_len = self.selected_patient().map_or(0, |p| p.appointments.len());
        self.patients.detail_index = self.patients.detail_index.min(history_len.saturating_sub(1));

        let doctor_gone = self
            .doctors
            .navigation
            .selected_id()
            .is_some_and(|id| self.catalog.doctor(id).is_none());
        if doctor_gone {
            self.doctors.navigation = Navigation::List;
        }

        self.loaded = true;
    }

    /// Regenerates report numbers from the next seed.
    pub fn refresh_reports(&mut self) {
        self.report_seed = self.report_seed.wrapping_add(1);
        let (reports, weekly) = generate_reports(self.report_seed);
        self.reports = reports;
        self.weekly = weekly;
        tracing::debug!(seed = self.report_seed, "reports regenerated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AppointmentStatus;
    use chrono::NaiveDate;

    fn state() -> AppState {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let catalog = crate::catalog::demo_catalog(42, today).unwrap();
        AppState::new(catalog, Theme::default(), 42)
    }

    #[test]
    fn cursor_wraps_in_both_directions() {
        let mut state = state();
        state.switch_page(Page::Appointments);

        assert!(state.move_selection(false));
        assert_eq!(state.appointments.selected_index, 7);
        assert!(state.move_selection(true));
        assert_eq!(state.appointments.selected_index, 0);
    }

    #[test]
    fn query_change_clamps_cursor() {
        let mut state = state();
        state.switch_page(Page::Patients);
        state.patients.selected_index = 11;

        assert!(state.set_query("ava"));
        assert_eq!(state.patients.selected_index, 0);
        assert!(!state.set_query("ava"));
    }

    #[test]
    fn leaving_a_page_resets_its_directory() {
        let mut state = state();
        state.switch_page(Page::Doctors);
        state.set_query("neuro");
        state.select();
        assert!(state.in_detail());

        state.switch_page(Page::Reports);
        assert_eq!(state.doctors, DirectoryPane::for_records(state.catalog.doctors()));
    }

    #[test]
    fn history_popup_opens_and_closes() {
        let mut state = state();
        state.switch_page(Page::Patients);
        state.select();
        let first = state.selected_patient().unwrap().appointments[0].id.clone();

        assert!(state.select());
        assert_eq!(state.patients.navigation.open_item_id(), Some(first.as_str()));
        assert!(!state.move_selection(true));

        assert!(state.back());
        assert!(state.in_detail());
        assert!(state.back());
        assert!(!state.in_detail());
    }

    #[test]
    fn check_in_only_on_appointments_page() {
        let mut state = state();
        assert_eq!(state.check_in_selected(), CheckInOutcome::NotFound);

        state.switch_page(Page::Appointments);
        assert_eq!(state.check_in_selected(), CheckInOutcome::CheckedIn);
        assert_eq!(
            state.catalog.todays_appointment("t-apt1").unwrap().status,
            AppointmentStatus::CheckedIn
        );
        assert_eq!(
            state.check_in_selected(),
            CheckInOutcome::Ignored(AppointmentStatus::CheckedIn)
        );
    }

    #[test]
    fn refresh_advances_report_seed() {
        let mut state = state();
        assert_eq!(state.reports, generate_reports(42).0);
        state.refresh_reports();
        assert_eq!(state.report_seed, 43);
        assert_eq!(state.reports, generate_reports(43).0);
        assert_eq!(state.weekly, generate_reports(43).1);
    }
}
