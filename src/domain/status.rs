//! Appointment status enumeration.

use super::error::CareboardError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of an appointment.
///
/// Serialized with the same labels that are displayed, so fixture files read
/// naturally (`"Checked-in"` rather than `"CheckedIn"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppointmentStatus {
    Confirmed,
    Cancelled,
    Rescheduled,
    #[serde(rename = "Checked-in")]
    CheckedIn,
    Completed,
}

impl AppointmentStatus {
    /// Every status, in display order.
    pub const ALL: [Self; 5] = [
        Self::Confirmed,
        Self::Cancelled,
        Self::Rescheduled,
        Self::CheckedIn,
        Self::Completed,
    ];

    /// Display label for the status.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Confirmed => "Confirmed",
            Self::Cancelled => "Cancelled",
            Self::Rescheduled => "Rescheduled",
            Self::CheckedIn => "Checked-in",
            Self::Completed => "Completed",
        }
    }

    /// Whether a check-in is currently allowed.
    #[must_use]
    pub const fn can_check_in(self) -> bool {
        matches!(self, Self::Confirmed)
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AppointmentStatus {
    type Err = CareboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CareboardError::Fixture(format!("unknown appointment status: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_in_uses_hyphenated_label() {
        assert_eq!(AppointmentStatus::CheckedIn.to_string(), "Checked-in");
        let json = serde_json::to_string(&AppointmentStatus::CheckedIn).unwrap();
        assert_eq!(json, "\"Checked-in\"");
    }

    #[test]
    fn parses_labels_case_insensitively() {
        assert_eq!(
            "checked-in".parse::<AppointmentStatus>().unwrap(),
            AppointmentStatus::CheckedIn
        );
        assert_eq!(
            " Confirmed ".parse::<AppointmentStatus>().unwrap(),
            AppointmentStatus::Confirmed
        );
        assert!("no-show".parse::<AppointmentStatus>().is_err());
    }

    #[test]
    fn only_confirmed_can_check_in() {
        let allowed: Vec<_> = AppointmentStatus::ALL
            .into_iter()
            .filter(|s| s.can_check_in())
            .collect();
        assert_eq!(allowed, vec![AppointmentStatus::Confirmed]);
    }
}
