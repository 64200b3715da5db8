//! Derived statistics and report data.
//!
//! Dashboard and schedule counters are computed from the live catalog, so a
//! check-in shows up immediately. Report headline numbers and the weekly chart
//! series have no data source; they are drawn from a seeded RNG so the same seed
//! always renders the same report.

use super::Catalog;
use crate::domain::{AppointmentStatus, Doctor, TodaysAppointment};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Lab reports have no backing records; the dashboard shows a fixed count.
const PENDING_LAB_REPORTS: usize = 12;

const WEEK_DAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Patient age bands and their share of the patient base, in percent.
pub const AGE_DISTRIBUTION: [(&str, u32); 4] = [
    ("0-18 yrs", 25),
    ("19-35 yrs", 40),
    ("36-55 yrs", 20),
    ("56+ yrs", 15),
];

/// Lower bound for the weekly chart scale, so quiet weeks don't look busy.
pub const WEEKLY_CHART_FLOOR: u32 = 40;

/// Kind of entry in the recent-activity feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Check,
    User,
    Calendar,
}

impl ActivityKind {
    /// Single-character marker used in front of feed lines.
    #[must_use]
    pub const fn marker(self) -> char {
        match self {
            Self::Check => '✓',
            Self::User => '+',
            Self::Calendar => '◷',
        }
    }
}

/// One line of the dashboard's recent-activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentActivity {
    pub id: String,
    pub description: String,
    /// Relative label such as `45m ago`.
    pub timestamp: String,
    pub kind: ActivityKind,
}

/// Appointments booked in one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyTrend {
    pub month: String,
    pub count: u32,
}

/// Appointments booked on one weekday of the current week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyCount {
    pub day: String,
    pub count: u32,
}

/// Stat cards on the dashboard page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStats {
    pub appointments_today: usize,
    pub total_patients: usize,
    pub doctors_on_duty: usize,
    pub pending_lab_reports: usize,
}

impl DashboardStats {
    #[must_use]
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            appointments_today: catalog.todays_appointments().len(),
            total_patients: catalog.patients().len(),
            doctors_on_duty: catalog.doctors().iter().filter(|d| d.available).count(),
            pending_lab_reports: PENDING_LAB_REPORTS,
        }
    }
}

/// Counters shown above today's schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleStats {
    pub total: usize,
    pub checked_in: usize,
    /// Appointments still waiting for check-in (`Confirmed`).
    pub pending: usize,
}

impl ScheduleStats {
    #[must_use]
    pub fn from_schedule(schedule: &[TodaysAppointment]) -> Self {
        let count = |status| schedule.iter().filter(|a| a.status == status).count();
        Self {
            total: schedule.len(),
            checked_in: count(AppointmentStatus::CheckedIn),
            pending: count(AppointmentStatus::Confirmed),
        }
    }
}

/// Signed period-over-period changes, in percentage points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendDeltas {
    pub appointments: i32,
    pub satisfaction: i32,
    pub utilization: i32,
}

/// Headline numbers on the reports page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportStats {
    pub total_appointments: u32,
    /// Percent, 88–97.
    pub patient_satisfaction: u32,
    /// Percent, 80–94.
    pub doctor_utilization: u32,
    pub trends: TrendDeltas,
}

impl ReportStats {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            total_appointments: rng.gen_range(1000..1500),
            patient_satisfaction: rng.gen_range(88..98),
            doctor_utilization: rng.gen_range(80..95),
            trends: TrendDeltas {
                appointments: rng.gen_range(-5..15),
                satisfaction: rng.gen_range(-5..5),
                utilization: rng.gen_range(-2..8),
            },
        }
    }

    /// Total appointments with thousands separators, e.g. `1,248`.
    #[must_use]
    pub fn total_appointments_label(&self) -> String {
        group_thousands(self.total_appointments)
    }
}

/// Appointment counts for each day of the current week, Monday first.
pub fn weekly_counts<R: Rng + ?Sized>(rng: &mut R) -> Vec<WeeklyCount> {
    WEEK_DAYS
        .iter()
        .map(|day| WeeklyCount {
            day: (*day).to_string(),
            count: rng.gen_range(5..45),
        })
        .collect()
}

/// The first `limit` roster entries ranked by booked appointments, busiest first.
///
/// Returns each doctor with their count; doctors without a count rank as zero.
#[must_use]
pub fn doctor_performance(catalog: &Catalog, limit: usize) -> Vec<(&Doctor, u32)> {
    let mut ranked: Vec<(&Doctor, u32)> = catalog
        .doctors()
        .iter()
        .take(limit)
        .map(|d| (d, d.appointments_count.unwrap_or(0)))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
