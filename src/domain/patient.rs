//! Patient records and their appointment history.

use super::doctor::DoctorSnapshot;
use super::status::AppointmentStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Display format for appointment dates, e.g. `January 5, 2023`.
const DISPLAY_DATE_FORMAT: &str = "%B %-d, %Y";

/// A registered patient.
///
/// `id` is the catalog key; `patient_id` is the human-facing identifier printed
/// on cards and searched by the front desk (`MTC-11225`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub patient_id: String,
    pub email: String,
    pub phone: String,
    /// Appointment history, most recent first once the patient is in a catalog.
    #[serde(default)]
    pub appointments: Vec<Appointment>,
}

impl Patient {
    /// Minimal cross-reference for navigating to this patient from another view.
    #[must_use]
    pub fn stub(&self) -> PatientStub {
        PatientStub {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }

    /// Orders the history most recent first.
    ///
    /// The sort is stable, so same-day appointments keep their relative order.
    pub fn sort_history(&mut self) {
        self.appointments.sort_by(|a, b| b.date.cmp(&a.date));
    }

    /// Looks up one history item by id.
    #[must_use]
    pub fn appointment(&self, id: &str) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id == id)
    }
}

/// A historical appointment attached to a patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub doctor: DoctorSnapshot,
    pub date: NaiveDate,
    /// Wall-clock time as shown to staff, e.g. `09:15 AM`.
    pub time: String,
    pub status: AppointmentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl Appointment {
    /// Long-form date, e.g. `March 14, 2023`.
    #[must_use]
    pub fn display_date(&self) -> String {
        self.date.format(DISPLAY_DATE_FORMAT).to_string()
    }
}

/// Minimal patient reference (id + name) passed between views.
///
/// Carries navigation intent only. The receiving view resolves the id against
/// the catalog rather than trusting the name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PatientStub {
    pub id: String,
    pub name: String,
}

impl PatientStub {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visit(id: &str, date: (i32, u32, u32)) -> Appointment {
        Appointment {
            id: id.to_string(),
            doctor: DoctorSnapshot {
                name: "Dr. Emily Carter".to_string(),
                specialty: "Cardiologist".to_string(),
            },
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            time: "09:00 AM".to_string(),
            status: AppointmentStatus::Completed,
            details: None,
        }
    }

    #[test]
    fn history_sorts_most_recent_first_and_is_stable() {
        let mut patient = Patient {
            id: "p3".to_string(),
            name: "Ava Patel".to_string(),
            patient_id: "MTC-11225".to_string(),
            email: "ava.p@email.com".to_string(),
            phone: "+1 345 555 0103".to_string(),
            appointments: vec![
                visit("a", (2022, 3, 1)),
                visit("b", (2024, 1, 9)),
                visit("c", (2022, 3, 1)),
                visit("d", (2023, 7, 20)),
            ],
        };

        patient.sort_history();

        let order: Vec<&str> = patient.appointments.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(order, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn display_date_uses_long_form() {
        assert_eq!(visit("a", (2023, 1, 5)).display_date(), "January 5, 2023");
    }
}
