//! Today's operational schedule.

use super::doctor::DoctorRef;
use super::patient::PatientStub;
use super::status::AppointmentStatus;
use serde::{Deserialize, Serialize};

/// One row of today's schedule.
///
/// `status` is the only field that changes during a session, and only through
/// [`TodaysAppointment::check_in`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodaysAppointment {
    pub id: String,
    pub patient: PatientStub,
    pub doctor: DoctorRef,
    pub time: String,
    pub status: AppointmentStatus,
}

/// Result of a check-in request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckInOutcome {
    /// The appointment moved from `Confirmed` to `Checked-in`.
    CheckedIn,
    /// The appointment was not `Confirmed`; nothing changed.
    Ignored(AppointmentStatus),
    /// No appointment with that id is on today's schedule.
    NotFound,
}

impl CheckInOutcome {
    #[must_use]
    pub const fn changed(self) -> bool {
        matches!(self, Self::CheckedIn)
    }
}

impl TodaysAppointment {
    /// Applies the `Confirmed → Checked-in` transition.
    ///
    /// Any other current status is left untouched and reported as
    /// [`CheckInOutcome::Ignored`].
    pub fn check_in(&mut self) -> CheckInOutcome {
        if self.status.can_check_in() {
            self.status = AppointmentStatus::CheckedIn;
            CheckInOutcome::CheckedIn
        } else {
            CheckInOutcome::Ignored(self.status)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(status: AppointmentStatus) -> TodaysAppointment {
        TodaysAppointment {
            id: "t-apt1".to_string(),
            patient: PatientStub::new("p1", "Sophia Bennett"),
            doctor: DoctorRef {
                name: "Dr. Emily Carter".to_string(),
            },
            time: "09:00 AM".to_string(),
            status,
        }
    }

    #[test]
    fn confirmed_becomes_checked_in() {
        let mut appt = row(AppointmentStatus::Confirmed);
        assert_eq!(appt.check_in(), CheckInOutcome::CheckedIn);
        assert_eq!(appt.status, AppointmentStatus::CheckedIn);
    }

    #[test]
    fn other_statuses_are_left_alone() {
        for status in [
            AppointmentStatus::Cancelled,
            AppointmentStatus::Rescheduled,
            AppointmentStatus::CheckedIn,
            AppointmentStatus::Completed,
        ] {
            let mut appt = row(status);
            assert_eq!(appt.check_in(), CheckInOutcome::Ignored(status));
            assert_eq!(appt.status, status);
        }
    }
}
