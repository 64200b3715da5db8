//! The in-memory hospital catalog.
//!
//! A [`Catalog`] owns the canonical doctor, patient and schedule records for the
//! session. It is built once (from the seeded demo generator or a fixture file),
//! validated, and then only ever mutated through [`Catalog::check_in`].
//!
//! # Modules
//!
//! - [`fixtures`]: Deterministic demo catalog generator
//! - [`loader`]: JSON/TOML fixture file loading
//! - [`insights`]: Derived statistics and report data

pub mod fixtures;
pub mod insights;
pub mod loader;

pub use fixtures::demo_catalog;
pub use insights::{
    ActivityKind, DashboardStats, MonthlyTrend, RecentActivity, ReportStats, ScheduleStats,
    WeeklyCount,
};
pub use loader::load_catalog;

use crate::domain::error::{CareboardError, Result};
use crate::domain::{CheckInOutcome, Doctor, Patient, TodaysAppointment};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Canonical record set for one session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    doctors: Vec<Doctor>,
    patients: Vec<Patient>,
    todays_appointments: Vec<TodaysAppointment>,
    #[serde(default)]
    recent_activity: Vec<RecentActivity>,
    #[serde(default)]
    monthly_trends: Vec<MonthlyTrend>,
}

impl Catalog {
    /// Builds a catalog, enforcing id uniqueness and history ordering.
    ///
    /// # Errors
    ///
    /// Returns [`CareboardError::Fixture`] if two doctors, two patients or two
    /// scheduled appointments share an id.
    pub fn new(
        doctors: Vec<Doctor>,
        mut patients: Vec<Patient>,
        todays_appointments: Vec<TodaysAppointment>,
    ) -> Result<Self> {
        ensure_unique("doctor", doctors.iter().map(|d| d.id.as_str()))?;
        ensure_unique("patient", patients.iter().map(|p| p.id.as_str()))?;
        ensure_unique(
            "scheduled appointment",
            todays_appointments.iter().map(|a| a.id.as_str()),
        )?;

        for patient in &mut patients {
            patient.sort_history();
        }

        tracing::debug!(
            doctors = doctors.len(),
            patients = patients.len(),
            todays_appointments = todays_appointments.len(),
            "catalog built"
        );

        Ok(Self {
            doctors,
            patients,
            todays_appointments,
            recent_activity: Vec::new(),
            monthly_trends: Vec::new(),
        })
    }

    /// Attaches the dashboard activity feed and the monthly trend series.
    #[must_use]
    pub fn with_reporting(
        mut self,
        recent_activity: Vec<RecentActivity>,
        monthly_trends: Vec<MonthlyTrend>,
    ) -> Self {
        self.recent_activity = recent_activity;
        self.monthly_trends = monthly_trends;
        self
    }

    #[must_use]
    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    #[must_use]
    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    #[must_use]
    pub fn todays_appointments(&self) -> &[TodaysAppointment] {
        &self.todays_appointments
    }

    #[must_use]
    pub fn recent_activity(&self) -> &[RecentActivity] {
        &self.recent_activity
    }

    #[must_use]
    pub fn monthly_trends(&self) -> &[MonthlyTrend] {
        &self.monthly_trends
    }

    #[must_use]
    pub fn doctor(&self, id: &str) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.id == id)
    }

    #[must_use]
    pub fn patient(&self, id: &str) -> Option<&Patient> {
        self.patients.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn todays_appointment(&self, id: &str) -> Option<&TodaysAppointment> {
        self.todays_appointments.iter().find(|a| a.id == id)
    }

    /// Checks in one of today's appointments.
    ///
    /// Only the appointment with `appointment_id` is touched, and only if it is
    /// currently `Confirmed`.
    pub fn check_in(&mut self, appointment_id: &str) -> CheckInOutcome {
        let _span = tracing::debug_span!("catalog_check_in", appointment_id = %appointment_id)
            .entered();

        let outcome = self
            .todays_appointments
            .iter_mut()
            .find(|a| a.id == appointment_id)
            .map_or(CheckInOutcome::NotFound, TodaysAppointment::check_in);

        tracing::debug!(outcome = ?outcome, "check-in processed");
        outcome
    }

    /// Headline numbers for the dashboard page.
    #[must_use]
    pub fn dashboard_stats(&self) -> DashboardStats {
        DashboardStats::from_catalog(self)
    }

    /// Live counters for today's schedule.
    #[must_use]
    pub fn schedule_stats(&self) -> ScheduleStats {
        ScheduleStats::from_schedule(&self.todays_appointments)
    }
}

fn ensure_unique<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CareboardError::Fixture(format!("duplicate {kind} id: {id}")));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AppointmentStatus, DoctorRef, PatientStub};

    fn scheduled(id: &str, status: AppointmentStatus) -> TodaysAppointment {
        TodaysAppointment {
            id: id.to_string(),
            patient: PatientStub::new("p1", "Sophia Bennett"),
            doctor: DoctorRef {
                name: "Dr. Emily Carter".to_string(),
            },
            time: "09:00 AM".to_string(),
            status,
        }
    }

    #[test]
    fn rejects_duplicate_doctor_ids() {
        let doctors = vec![
            Doctor::new("doc1", "Dr. Emily Carter", "Cardiologist", true),
            Doctor::new("doc1", "Dr. Daniel Harris", "Neurologist", false),
        ];
        let err = Catalog::new(doctors, vec![], vec![]).unwrap_err();
        assert!(err.to_string().contains("duplicate doctor id: doc1"));
    }

    #[test]
    fn check_in_touches_only_the_target() {
        let mut catalog = Catalog::new(
            vec![],
            vec![],
            vec![
                scheduled("t1", AppointmentStatus::Confirmed),
                scheduled("t2", AppointmentStatus::Confirmed),
                scheduled("t3", AppointmentStatus::Cancelled),
            ],
        )
        .unwrap();

        assert_eq!(catalog.check_in("t1"), CheckInOutcome::CheckedIn);
        assert_eq!(
            catalog.check_in("t3"),
            CheckInOutcome::Ignored(AppointmentStatus::Cancelled)
        );
        assert_eq!(catalog.check_in("t9"), CheckInOutcome::NotFound);

        let statuses: Vec<_> = catalog.todays_appointments().iter().map(|a| a.status).collect();
        assert_eq!(
            statuses,
            vec![
                AppointmentStatus::CheckedIn,
                AppointmentStatus::Confirmed,
                AppointmentStatus::Cancelled,
            ]
        );
    }
}
