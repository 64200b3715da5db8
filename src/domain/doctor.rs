//! Doctor roster records.

use serde::{Deserialize, Serialize};

/// A doctor on the hospital roster.
///
/// Only `id`, `name`, `specialty` and `available` are required. The profile
/// fields are optional because a fixture may describe a doctor without them; the
/// profile view simply omits whatever is missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub specialty: String,
    pub available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appointments_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<u32>,
    /// Years of practice.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_hours: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
}

impl Doctor {
    /// Creates a doctor with no profile fields.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        specialty: impl Into<String>,
        available: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            specialty: specialty.into(),
            available,
            appointments_count: None,
            rating: None,
            reviews: None,
            experience: None,
            working_hours: None,
            about: None,
        }
    }

    /// Name-only reference used by today's schedule.
    #[must_use]
    pub fn as_ref_stub(&self) -> DoctorRef {
        DoctorRef {
            name: self.name.clone(),
        }
    }

    /// Snapshot of name and specialty, frozen into appointment history.
    #[must_use]
    pub fn snapshot(&self) -> DoctorSnapshot {
        DoctorSnapshot {
            name: self.name.clone(),
            specialty: self.specialty.clone(),
        }
    }

    /// Short availability label for list rows.
    #[must_use]
    pub const fn availability_label(&self) -> &'static str {
        if self.available {
            "Available"
        } else {
            "Unavailable"
        }
    }
}

/// Doctor reference carried by a [`TodaysAppointment`](super::TodaysAppointment).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorRef {
    pub name: String,
}

/// Denormalized doctor details stored on a historical appointment.
///
/// Not a foreign key: later roster edits never rewrite history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorSnapshot {
    pub name: String,
    pub specialty: String,
}
