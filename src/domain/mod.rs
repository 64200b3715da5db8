//! Domain layer for the careboard plugin.
//!
//! Record types for the hospital catalog, independent of Zellij APIs, rendering
//! or how the catalog was produced.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`status`]: Appointment status enumeration
//! - [`doctor`]: Doctor roster records and the stubs derived from them
//! - [`patient`]: Patients, appointment history and the navigation stub
//! - [`schedule`]: Today's schedule and the check-in transition
//!
//! # Examples
//!
//! ```
//! use careboard::domain::{AppointmentStatus, PatientStub};
//!
//! let stub = PatientStub::new("p3", "Ava Patel");
//! assert_eq!(stub.id, "p3");
//! assert!(AppointmentStatus::Confirmed.can_check_in());
//! ```

pub mod doctor;
pub mod error;
pub mod patient;
pub mod schedule;
pub mod status;

pub use doctor::{Doctor, DoctorRef, DoctorSnapshot};
pub use error::{CareboardError, Result};
pub use patient::{Appointment, Patient, PatientStub};
pub use schedule::{CheckInOutcome, TodaysAppointment};
pub use status::AppointmentStatus;
