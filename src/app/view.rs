//! View model computation.
//!
//! Turns an [`AppState`] snapshot into a [`UIViewModel`] sized for the
//! terminal. Long lists are windowed around the cursor the same way everywhere:
//! the cursor sits mid-window unless that would run past either end.

use super::modes::{InputMode, Page, SearchFocus};
use super::state::{AppState, DirectoryPane};
use crate::catalog::insights::{doctor_performance, AGE_DISTRIBUTION, WEEKLY_CHART_FLOOR};
use crate::directory::match_ranges;
use crate::domain::{Doctor, Patient};
use crate::ui::viewmodel::{
    Body, Cell, Column, DetailView, EmptyState, FooterInfo, HeaderInfo, OverviewView, Panel,
    PanelLine, PopupView, SearchBarInfo, StatCard, TabInfo, TableRow, TableView, UIViewModel,
};

/// Blank line, header, tab strip, border, caption, column headers, border, footer.
const CHROME_ROWS: usize = 8;
const SEARCH_BAR_ROWS: usize = 3;
/// Back label, heading, two subtitle lines, spacer.
const DETAIL_HEADING_ROWS: usize = 5;
const TOP_PERFORMERS: usize = 5;

/// `[start, end)` of the rows to show so that `selected` stays visible.
fn visible_window(len: usize, selected: usize, available: usize) -> (usize, usize) {
    if len <= available {
        return (0, len);
    }
    let start = selected.saturating_sub(available / 2).min(len - available);
    (start, start + available)
}

impl AppState {
    /// Computes the view model for a `rows` x `cols` terminal.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let _span = tracing::trace_span!("compute_viewmodel", rows, cols, page = ?self.page).entered();

        let search_bar = self.compute_search_bar();
        let mut chrome = CHROME_ROWS;
        if search_bar.is_some() {
            chrome += SEARCH_BAR_ROWS;
        }
        if self.notice.is_some() {
            chrome += 1;
        }
        let available = rows.saturating_sub(chrome).max(1);

        let body = if self.loaded {
            match self.page {
                Page::Dashboard => Body::Overview(self.dashboard_overview()),
                Page::Appointments => Body::Table(self.appointments_table(available)),
                Page::Doctors => Body::Table(self.doctors_table(available)),
                Page::Patients => self.patients_body(available),
                Page::Reports => Body::Overview(self.reports_overview()),
            }
        } else {
            Body::Empty(EmptyState {
                message: "Loading catalog...".to_string(),
                subtitle: "Records appear as soon as the worker replies".to_string(),
            })
        };

        UIViewModel {
            header: self.compute_header(),
            notice: self.notice.clone(),
            search_bar,
            body,
            footer: self.compute_footer(),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let tabs = Page::ALL
            .iter()
            .zip('1'..='5')
            .map(|(page, key)| TabInfo {
                key,
                label: page.label().to_string(),
                is_active: *page == self.page,
            })
            .collect();

        HeaderInfo {
            title: self.page_title().to_string(),
            tabs,
        }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        let placeholder = self.search_placeholder()?;
        Some(SearchBarInfo {
            query: self.query().to_string(),
            placeholder: placeholder.to_string(),
            is_focused: self.input_mode.is_typing(),
        })
    }

    fn compute_footer(&self) -> FooterInfo {
        let popup_open = match self.page {
            Page::Patients => self.patients.navigation.open_item_id().is_some(),
            Page::Doctors => self.doctors.navigation.is_detail(),
            _ => false,
        };

        let keybindings = match (self.input_mode, self.page) {
            (InputMode::Search(SearchFocus::Typing), _) => {
                "Esc: clear search  Enter/Down: browse results  Type to filter"
            }
            (InputMode::Search(SearchFocus::Navigating), _) => {
                "Esc: clear search  /: edit query  j/k: navigate  Enter: open"
            }
            _ if popup_open => "Esc: close  q: quit",
            (InputMode::Normal, Page::Patients) if self.in_detail() => {
                "Esc: back to list  j/k: history  Enter: appointment details  q: quit"
            }
            (InputMode::Normal, Page::Patients) => {
                "Tab/1-5: pages  j/k: navigate  /: search  Enter: open  q: quit"
            }
            (InputMode::Normal, Page::Doctors) => {
                "Tab/1-5: pages  j/k: navigate  /: search  Enter: profile  q: quit"
            }
            (InputMode::Normal, Page::Appointments) => {
                "Tab/1-5: pages  j/k: navigate  /: search  c: check in  Enter: view patient  q: quit"
            }
            (InputMode::Normal, Page::Reports) => "Tab/1-5: pages  r: refresh  q: quit",
            (InputMode::Normal, Page::Dashboard) => "Tab/1-5: pages  q: quit",
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn list_summary(pane: &DirectoryPane, total: usize, noun: &str) -> String {
        if pane.filter.query().trim().is_empty() {
            format!("{total} {noun}")
        } else {
            format!("{} of {total} {noun}", pane.filter.len())
        }
    }

    fn no_rows_message(pane: &DirectoryPane, noun: &str) -> String {
        if pane.filter.query().trim().is_empty() {
            format!("No {noun} yet")
        } else {
            format!("No {noun} match \"{}\"", pane.filter.query())
        }
    }

    fn appointments_table(&self, available: usize) -> TableView {
        let pane = &self.appointments;
        let schedule = self.catalog.todays_appointments();
        let query = pane.filter.query();
        let (start, end) = visible_window(pane.filter.len(), pane.selected_index, available);

        let rows = pane.filter.matches()[start..end]
            .iter()
            .enumerate()
            .filter_map(|(offset, &i)| {
                let appointment = schedule.get(i)?;
                Some(TableRow {
                    cells: vec![
                        Cell::plain(&appointment.time),
                        Cell::highlighted(
                            &appointment.patient.name,
                            match_ranges(&appointment.patient.name, query),
                        ),
                        Cell::highlighted(
                            &appointment.doctor.name,
                            match_ranges(&appointment.doctor.name, query),
                        ),
                        Cell::status(appointment.status),
                    ],
                    is_selected: start + offset == pane.selected_index,
                })
            })
            .collect();

        let stats = self.catalog.schedule_stats();
        TableView {
            caption: "Today's Appointments".to_string(),
            summary: Some(format!(
                "Total {}  Checked-in {}  Pending {}",
                stats.total, stats.checked_in, stats.pending
            )),
            columns: vec![
                Column { label: "Time", width: 10 },
                Column { label: "Patient", width: 22 },
                Column { label: "Doctor", width: 24 },
                Column { label: "Status", width: 0 },
            ],
            rows,
            empty_message: Self::no_rows_message(pane, "appointments"),
            popup: None,
        }
    }

    fn doctors_table(&self, available: usize) -> TableView {
        let pane = &self.doctors;
        let doctors = self.catalog.doctors();
        let query = pane.filter.query();
        let (start, end) = visible_window(pane.filter.len(), pane.selected_index, available);

        let rows = pane.filter.matches()[start..end]
            .iter()
            .enumerate()
            .filter_map(|(offset, &i)| {
                let doctor = doctors.get(i)?;
                Some(TableRow {
                    cells: vec![
                        Cell::highlighted(&doctor.name, match_ranges(&doctor.name, query)),
                        Cell::highlighted(&doctor.specialty, match_ranges(&doctor.specialty, query)),
                        Cell::plain(doctor.availability_label()),
                        Cell::plain(doctor.appointments_count.map_or_else(|| "-".to_string(), |n| n.to_string())),
                        Cell::plain(doctor.rating.map_or_else(|| "-".to_string(), |r| format!("{r:.1}"))),
                    ],
                    is_selected: start + offset == pane.selected_index,
                })
            })
            .collect();

        TableView {
            caption: "Doctors".to_string(),
            summary: Some(Self::list_summary(pane, doctors.len(), "doctors")),
            columns: vec![
                Column { label: "Name", width: 24 },
                Column { label: "Specialty", width: 22 },
                Column { label: "Status", width: 13 },
                Column { label: "Appointments", width: 14 },
                Column { label: "Rating", width: 0 },
            ],
            rows,
            empty_message: Self::no_rows_message(pane, "doctors"),
            popup: self.selected_doctor().map(doctor_profile),
        }
    }

    fn patients_body(&self, available: usize) -> Body {
        if self.patients.navigation.is_detail() {
            return self.selected_patient().map_or_else(
                || {
                    Body::Empty(EmptyState {
                        message: "Patient not found".to_string(),
                        subtitle: "Press Esc to return to the directory".to_string(),
                    })
                },
                |patient| Body::Detail(self.patient_detail(patient, available)),
            );
        }

        let pane = &self.patients;
        let patients = self.catalog.patients();
        let query = pane.filter.query();
        let (start, end) = visible_window(pane.filter.len(), pane.selected_index, available);

        let rows = pane.filter.matches()[start..end]
            .iter()
            .enumerate()
            .filter_map(|(offset, &i)| {
                let patient = patients.get(i)?;
                Some(TableRow {
                    cells: vec![
                        Cell::highlighted(&patient.name, match_ranges(&patient.name, query)),
                        Cell::highlighted(&patient.patient_id, match_ranges(&patient.patient_id, query)),
                        Cell::plain(&patient.email),
                        Cell::highlighted(&patient.phone, match_ranges(&patient.phone, query)),
                    ],
                    is_selected: start + offset == pane.selected_index,
                })
            })
            .collect();

        Body::Table(TableView {
            caption: "Patient Directory".to_string(),
            summary: Some(Self::list_summary(pane, patients.len(), "patients")),
            columns: vec![
                Column { label: "Name", width: 24 },
                Column { label: "Patient ID", width: 12 },
                Column { label: "Email", width: 28 },
                Column { label: "Phone Number", width: 0 },
            ],
            rows,
            empty_message: Self::no_rows_message(pane, "patients"),
            popup: None,
        })
    }

    fn patient_detail(&self, patient: &Patient, available: usize) -> DetailView {
        let history = &patient.appointments;
        let cursor = self.patients.detail_index;
        let (start, end) = visible_window(
            history.len(),
            cursor,
            available.saturating_sub(DETAIL_HEADING_ROWS).max(1),
        );

        let rows = history[start..end]
            .iter()
            .enumerate()
            .map(|(offset, appointment)| TableRow {
                cells: vec![
                    Cell::plain(appointment.display_date()),
                    Cell::plain(&appointment.time),
                    Cell::plain(&appointment.doctor.name),
                    Cell::plain(&appointment.doctor.specialty),
                    Cell::status(appointment.status),
                ],
                is_selected: start + offset == cursor,
            })
            .collect();

        let popup = self
            .patients
            .navigation
            .open_item_id()
            .and_then(|id| patient.appointment(id))
            .map(|appointment| PopupView {
                title: "Appointment Details".to_string(),
                fields: vec![
                    (
                        "Doctor".to_string(),
                        format!("{} ({})", appointment.doctor.name, appointment.doctor.specialty),
                    ),
                    (
                        "Date & Time".to_string(),
                        format!("{} at {}", appointment.display_date(), appointment.time),
                    ),
                    ("Status".to_string(), appointment.status.label().to_string()),
                    (
                        "Notes".to_string(),
                        appointment
                            .details
                            .clone()
                            .unwrap_or_else(|| "No additional details available.".to_string()),
                    ),
                ],
            });

        DetailView {
            back_label: "Back to patient list".to_string(),
            heading: patient.name.clone(),
            subtitle_lines: vec![
                format!("Patient ID: {}", patient.patient_id),
                format!("{} | {}", patient.email, patient.phone),
            ],
            section: TableView {
                caption: "Appointment History".to_string(),
                summary: Some(format!("{} visits", history.len())),
                columns: vec![
                    Column { label: "Date", width: 20 },
                    Column { label: "Time", width: 10 },
                    Column { label: "Doctor", width: 24 },
                    Column { label: "Specialty", width: 20 },
                    Column { label: "Status", width: 0 },
                ],
                rows,
                empty_message: "No appointment history found for this patient.".to_string(),
                popup: None,
            },
            popup,
        }
    }

    fn dashboard_overview(&self) -> OverviewView {
        let stats = self.catalog.dashboard_stats();
        let cards = vec![
            stat_card("Appointments Today", stats.appointments_today.to_string(), None),
            stat_card("Total Patients", stats.total_patients.to_string(), None),
            stat_card("Doctors on Duty", stats.doctors_on_duty.to_string(), None),
            stat_card("Pending Reports", stats.pending_lab_reports.to_string(), None),
        ];

        let week_max = self
            .weekly
            .iter()
            .map(|w| w.count)
            .max()
            .unwrap_or(0)
            .max(WEEKLY_CHART_FLOOR);
        let weekly = Panel {
            title: "Appointments This Week".to_string(),
            subtitle: None,
            lines: self
                .weekly
                .iter()
                .map(|w| PanelLine::Bar {
                    label: w.day.clone(),
                    value: w.count,
                    max: week_max,
                })
                .collect(),
        };

        let activity = Panel {
            title: "Recent Activity".to_string(),
            subtitle: None,
            lines: or_placeholder(
                self.catalog
                    .recent_activity()
                    .iter()
                    .map(|a| PanelLine::Entry {
                        marker: a.kind.marker(),
                        text: a.description.clone(),
                        trailing: a.timestamp.clone(),
                    })
                    .collect(),
                "No recent activity",
            ),
        };

        let schedule_stats = self.catalog.schedule_stats();
        let schedule = Panel {
            title: "Today's Schedule".to_string(),
            subtitle: Some(format!(
                "{} checked in, {} pending",
                schedule_stats.checked_in, schedule_stats.pending
            )),
            lines: or_placeholder(
                self.catalog
                    .todays_appointments()
                    .iter()
                    .map(|a| PanelLine::Entry {
                        marker: if a.status.can_check_in() { '○' } else { '●' },
                        text: format!("{}  {} with {}", a.time, a.patient.name, a.doctor.name),
                        trailing: a.status.label().to_string(),
                    })
                    .collect(),
                "Nothing scheduled today",
            ),
        };

        OverviewView {
            heading: None,
            cards,
            panels: vec![weekly, activity, schedule],
        }
    }

    fn reports_overview(&self) -> OverviewView {
        let reports = &self.reports;
        let cards = vec![
            stat_card(
                "Total Appointments",
                reports.total_appointments_label(),
                Some(reports.trends.appointments),
            ),
            stat_card(
                "Patient Satisfaction",
                format!("{}%", reports.patient_satisfaction),
                Some(reports.trends.satisfaction),
            ),
            stat_card(
                "Doctor Utilization",
                format!("{}%", reports.doctor_utilization),
                Some(reports.trends.utilization),
            ),
        ];

        let monthly = self.catalog.monthly_trends();
        let month_max = monthly.iter().map(|m| m.count).max().unwrap_or(0);
        let trends = Panel {
            title: "Appointment Trends".to_string(),
            subtitle: Some(format!("Last 12 Months  {:+}%", reports.trends.appointments)),
            lines: or_placeholder(
                monthly
                    .iter()
                    .map(|m| PanelLine::Bar {
                        label: m.month.clone(),
                        value: m.count,
                        max: month_max,
                    })
                    .collect(),
                "No monthly data",
            ),
        };

        let demographics = Panel {
            title: "Patient Demographics".to_string(),
            subtitle: None,
            lines: AGE_DISTRIBUTION
                .iter()
                .map(|(label, percent)| PanelLine::Bar {
                    label: (*label).to_string(),
                    value: *percent,
                    max: 100,
                })
                .collect(),
        };

        let ranked = doctor_performance(&self.catalog, TOP_PERFORMERS);
        let top = ranked.iter().map(|(_, n)| *n).max().unwrap_or(0);
        let performance = Panel {
            title: "Doctor Performance".to_string(),
            subtitle: None,
            lines: ranked
                .iter()
                .map(|(doctor, count)| PanelLine::Bar {
                    label: doctor.name.clone(),
                    value: *count,
                    max: top,
                })
                .collect(),
        };

        OverviewView {
            heading: Some("Hospital Performance".to_string()),
            cards,
            panels: vec![trends, demographics, performance],
        }
    }
}

fn or_placeholder(lines: Vec<PanelLine>, message: &str) -> Vec<PanelLine> {
    if lines.is_empty() {
        vec![PanelLine::Text(message.to_string())]
    } else {
        lines
    }
}

fn stat_card(label: &str, value: String, delta: Option<i32>) -> StatCard {
    StatCard {
        label: label.to_string(),
        value,
        delta,
    }
}

fn doctor_profile(doctor: &Doctor) -> PopupView {
    let mut fields = vec![
        ("Specialty".to_string(), doctor.specialty.clone()),
        ("Status".to_string(), doctor.availability_label().to_string()),
    ];
    if let Some(years) = doctor.experience {
        fields.push(("Experience".to_string(), format!("{years} years")));
    }
    if let Some(cases) = doctor.appointments_count {
        fields.push(("Cases Handled".to_string(), cases.to_string()));
    }
    if let Some(rating) = doctor.rating {
        let reviews = doctor.reviews.map_or_else(String::new, |n| format!(" ({n} reviews)"));
        fields.push(("Rating".to_string(), format!("{rating:.1}{reviews}")));
    }
    if let Some(hours) = &doctor.working_hours {
        fields.push(("Working Hours".to_string(), hours.clone()));
    }
    if let Some(about) = &doctor.about {
        fields.push(("About".to_string(), about.clone()));
    }

    PopupView {
        title: doctor.name.clone(),
        fields,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::demo_catalog;
    use crate::ui::Theme;
    use chrono::NaiveDate;

    fn loaded_state() -> AppState {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let catalog = demo_catalog(42, today).unwrap();
        let mut state = AppState::new(catalog.clone(), Theme::default(), 42);
        state.replace_catalog(catalog);
        state
    }

    #[test]
    fn window_keeps_cursor_visible() {
        assert_eq!(visible_window(5, 4, 10), (0, 5));
        assert_eq!(visible_window(20, 0, 6), (0, 6));
        assert_eq!(visible_window(20, 10, 6), (7, 13));
        assert_eq!(visible_window(20, 19, 6), (14, 20));
    }

    #[test]
    fn loading_state_before_catalog_arrives() {
        let state = AppState::new(Default::default(), Theme::default(), 1);
        let vm = state.compute_viewmodel(24, 80);
        assert!(matches!(vm.body, Body::Empty(_)));
        assert_eq!(vm.header.title, "Dashboard");
    }

    #[test]
    fn patients_list_highlights_matches() {
        let mut state = loaded_state();
        state.switch_page(Page::Patients);
        state.set_query("ava");

        let vm = state.compute_viewmodel(30, 100);
        let Body::Table(table) = vm.body else {
            panic!("expected table");
        };
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].cells[0].text, "Ava Patel");
        assert_eq!(table.rows[0].cells[0].highlight_ranges, vec![(0, 3)]);
        assert_eq!(table.summary.as_deref(), Some("1 of 12 patients"));
        assert_eq!(vm.search_bar.unwrap().query, "ava");
    }

    #[test]
    fn patient_detail_has_title_and_no_search() {
        let mut state = loaded_state();
        state.switch_page(Page::Patients);
        state.select();

        let vm = state.compute_viewmodel(30, 100);
        assert_eq!(vm.header.title, "Patient Details");
        assert!(vm.search_bar.is_none());
        assert!(matches!(vm.body, Body::Detail(ref d) if d.heading == "Sophia Bennett"));
    }

    #[test]
    fn schedule_summary_tracks_check_ins() {
        let mut state = loaded_state();
        state.switch_page(Page::Appointments);
        state.check_in_selected();

        let vm = state.compute_viewmodel(30, 100);
        let Body::Table(table) = vm.body else {
            panic!("expected table");
        };
        assert_eq!(table.summary.as_deref(), Some("Total 8  Checked-in 3  Pending 3"));
    }

    #[test]
    fn reports_rank_five_doctors() {
        let mut state = loaded_state();
        state.switch_page(Page::Reports);

        let Body::Overview(overview) = state.compute_viewmodel(40, 120).body else {
            panic!("expected overview");
        };
        assert_eq!(overview.cards.len(), 3);
        assert_eq!(overview.panels[2].lines.len(), 5);
    }
}
