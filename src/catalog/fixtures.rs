//! Deterministic demo catalog generator.
//!
//! The roster, patient list and today's schedule are fixed tables; per-doctor
//! stats and each patient's appointment history are drawn from a [`StdRng`]
//! seeded by the caller. Generated dates fall between 2022-01-01 and the `today`
//! anchor, which is passed in rather than read from the clock so that a seed
//! always reproduces the same catalog.

use super::insights::{ActivityKind, MonthlyTrend, RecentActivity};
use super::Catalog;
use crate::domain::error::{CareboardError, Result};
use crate::domain::{
    Appointment, AppointmentStatus, Doctor, Patient, TodaysAppointment,
};
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Roster rows: id, name, specialty, available, working hours, biography.
const ROSTER: [(&str, &str, &str, bool, &str, &str); 16] = [
    ("doc1", "Dr. Emily Carter", "Cardiologist", true, "Mon - Fri, 9 AM - 5 PM",
        "Patient-focused cardiologist with over 15 years of experience diagnosing and treating a wide range of cardiovascular conditions."),
    ("doc2", "Dr. Daniel Harris", "Neurologist", false, "Tue - Sat, 10 AM - 6 PM",
        "Diagnoses and treats neurological disorders, with an active interest in clinical research."),
    ("doc3", "Dr. Olivia Clark", "Pediatrician", true, "Mon, Tue, Thu, 8 AM - 4 PM",
        "Provides comprehensive care for infants, children and adolescents."),
    ("doc4", "Dr. Ethan Walker", "Orthopedic Surgeon", true, "Mon - Fri, 9 AM - 5 PM",
        "Orthopedic surgeon focused on sports medicine and joint replacement."),
    ("doc5", "Dr. Chloe Adams", "Dermatologist", true, "Wed - Sun, 9 AM - 3 PM",
        "Medical and cosmetic dermatology, from acne to skin cancer screening."),
    ("doc6", "Dr. David Roberts", "Oncologist", false, "Mon - Thu, 8 AM - 4 PM",
        "Comprehensive cancer care and support throughout treatment."),
    ("doc7", "Dr. Sarah Chen", "Psychiatrist", true, "Mon - Fri, 10 AM - 6 PM",
        "Combines therapy and evidence-based treatment to support mental wellness."),
    ("doc8", "Dr. James Wilson", "Endocrinologist", false, "Tue - Fri, 9 AM - 5 PM",
        "Metabolic disorders and diabetes management."),
    ("doc9", "Dr. Liam Smith", "Gastroenterologist", true, "Mon - Fri, 8:30 AM - 4:30 PM",
        "Digestive health and endoscopic procedures."),
    ("doc10", "Dr. Ava Johnson", "Urologist", false, "Mon - Thu, 9 AM - 5 PM",
        "Urinary tract and male reproductive system care."),
    ("doc11", "Dr. Noah Williams", "Pulmonologist", true, "Tue - Sat, 9 AM - 5 PM",
        "Respiratory disease treatment and lung health."),
    ("doc12", "Dr. Isabella Brown", "Rheumatologist", true, "Mon, Wed, Fri, 10 AM - 4 PM",
        "Autoimmune and inflammatory conditions of the joints, muscles and bones."),
    ("doc13", "Dr. Mason Jones", "Ophthalmologist", false, "Mon - Fri, 9 AM - 5 PM",
        "Eye care from routine examinations to complex surgery."),
    ("doc14", "Dr. Sophia Garcia", "Nephrologist", true, "Tue & Thu, 8 AM - 5 PM",
        "Kidney health, dialysis and chronic kidney disease management."),
    ("doc15", "Dr. Jacob Miller", "Allergist", true, "Mon - Fri, 9 AM - 3 PM",
        "Allergy and immune system disorders."),
    ("doc16", "Dr. Mia Davis", "Hematologist", false, "Mon - Thu, 9 AM - 4 PM",
        "Diagnosis and treatment of blood disorders and cancers."),
];

/// Patient rows: id, name, email local part.
const PATIENTS: [(&str, &str, &str); 12] = [
    ("p1", "Sophia Bennett", "sophia.b"),
    ("p2", "Liam Rivera", "liam.r"),
    ("p3", "Ava Patel", "ava.p"),
    ("p4", "Noah Thompson", "noah.t"),
    ("p5", "Isabella Kim", "isabella.k"),
    ("p6", "Mason Hughes", "mason.h"),
    ("p7", "Harper Wright", "harper.w"),
    ("p8", "Elijah Foster", "elijah.f"),
    ("p9", "Amelia Simmons", "amelia.s"),
    ("p10", "James Peterson", "james.p"),
    ("p11", "Charlotte Bailey", "charlotte.b"),
    ("p12", "Benjamin Reed", "benjamin.r"),
];

/// First human-facing patient number; patients are numbered consecutively.
const FIRST_PATIENT_NUMBER: u32 = 11223;

/// Today's schedule: id, patient index into `PATIENTS`, doctor index into `ROSTER`, time, status.
const SCHEDULE: [(&str, usize, usize, &str, AppointmentStatus); 8] = [
    ("t-apt1", 0, 0, "09:00 AM", AppointmentStatus::Confirmed),
    ("t-apt2", 1, 1, "09:30 AM", AppointmentStatus::CheckedIn),
    ("t-apt3", 2, 2, "10:00 AM", AppointmentStatus::Confirmed),
    ("t-apt4", 3, 3, "10:15 AM", AppointmentStatus::Cancelled),
    ("t-apt5", 4, 0, "11:00 AM", AppointmentStatus::Confirmed),
    ("t-apt6", 5, 4, "11:30 AM", AppointmentStatus::Completed),
    ("t-apt7", 6, 6, "12:00 PM", AppointmentStatus::Confirmed),
    ("t-apt8", 7, 2, "01:30 PM", AppointmentStatus::CheckedIn),
];

const VISIT_NOTES: [&str; 9] = [
    "Follow-up consultation regarding recent test results.",
    "Annual physical check-up.",
    "Initial consultation for persistent headache.",
    "Prescription refill and status check.",
    "Post-operative follow-up.",
    "Routine skin screening.",
    "Allergy testing session.",
    "Patient cancelled due to a scheduling conflict.",
    "Patient requested to reschedule for next week.",
];

const HISTORY_STATUSES: [AppointmentStatus; 3] = [
    AppointmentStatus::Completed,
    AppointmentStatus::Cancelled,
    AppointmentStatus::Confirmed,
];

const MONTHLY_TRENDS: [(&str, u32); 12] = [
    ("Jan", 120), ("Feb", 135), ("Mar", 150), ("Apr", 145), ("May", 160), ("Jun", 175),
    ("Jul", 180), ("Aug", 190), ("Sep", 185), ("Oct", 200), ("Nov", 210), ("Dec", 220),
];

const ACTIVITY: [(&str, &str, &str, ActivityKind); 5] = [
    ("act1", "Appointment confirmed for Sophia Bennett with Dr. Carter.", "10m ago", ActivityKind::Check),
    ("act2", "New patient registered: Liam Rivera.", "45m ago", ActivityKind::User),
    ("act3", "Dr. Harris updated the schedule for next week.", "1h ago", ActivityKind::Calendar),
    ("act4", "Appointment completed for Mason Hughes.", "2h ago", ActivityKind::Check),
    ("act5", "New patient registered: Ava Patel.", "3h ago", ActivityKind::User),
];

/// Builds the demo catalog for `seed`, with history dates up to `today`.
///
/// # Errors
///
/// Returns [`CareboardError::Fixture`] if `today` is before 2022-01-01, leaving
/// no range to draw history dates from.
///
/// # Examples
///
/// ```
/// use careboard::catalog::demo_catalog;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
/// let catalog = demo_catalog(42, today)?;
/// assert_eq!(catalog.patients().len(), 12);
/// assert_eq!(catalog, demo_catalog(42, today)?);
/// # Ok::<(), careboard::CareboardError>(())
/// ```
pub fn demo_catalog(seed: u64, today: NaiveDate) -> Result<Catalog> {
    let _span = tracing::debug_span!("demo_catalog", seed = seed, today = %today).entered();

    let history_start = NaiveDate::from_ymd_opt(2022, 1, 1)
        .ok_or_else(|| CareboardError::Fixture("invalid history start date".to_string()))?;
    if today < history_start {
        return Err(CareboardError::Fixture(format!(
            "today ({today}) must not be before {history_start}"
        )));
    }

    let mut rng = StdRng::seed_from_u64(seed);

    let doctors: Vec<Doctor> = ROSTER
        .iter()
        .map(|&(id, name, specialty, available, hours, about)| {
            let mut doctor = Doctor::new(id, name, specialty, available);
            doctor.appointments_count = Some(rng.gen_range(50..100));
            doctor.rating = Some(round_rating(rng.gen_range(4.5..5.0)));
            doctor.reviews = Some(rng.gen_range(150..250));
            doctor.experience = Some(rng.gen_range(10..20));
            doctor.working_hours = Some(hours.to_string());
            doctor.about = Some(about.to_string());
            doctor
        })
        .collect();

    let span_days = (today - history_start).num_days();

    let patients: Vec<Patient> = PATIENTS
        .iter()
        .zip(FIRST_PATIENT_NUMBER..)
        .zip(1u32..)
        .map(|((&(id, name, email), number), ordinal)| {
            let visits = rng.gen_range(2..=7);
            let appointments = (0..visits)
                .map(|seq| generate_visit(&mut rng, &doctors, id, seq, history_start, span_days))
                .collect();
            Patient {
                id: id.to_string(),
                name: name.to_string(),
                patient_id: format!("MTC-{number}"),
                email: format!("{email}@email.com"),
                phone: format!("+1 345 555 {:04}", 100 + ordinal),
                appointments,
            }
        })
        .collect();

    let schedule = SCHEDULE
        .iter()
        .map(|&(id, patient_idx, doctor_idx, time, status)| TodaysAppointment {
            id: id.to_string(),
            patient: patients[patient_idx].stub(),
            doctor: doctors[doctor_idx].as_ref_stub(),
            time: time.to_string(),
            status,
        })
        .collect();

    let activity = ACTIVITY
        .iter()
        .map(|&(id, description, timestamp, kind)| RecentActivity {
            id: id.to_string(),
            description: description.to_string(),
            timestamp: timestamp.to_string(),
            kind,
        })
        .collect();

    let trends = MONTHLY_TRENDS
        .iter()
        .map(|&(month, count)| MonthlyTrend {
            month: month.to_string(),
            count,
        })
        .collect();

    Ok(Catalog::new(doctors, patients, schedule)?.with_reporting(activity, trends))
}

fn generate_visit(
    rng: &mut StdRng,
    doctors: &[Doctor],
    patient_id: &str,
    seq: u32,
    history_start: NaiveDate,
    span_days: i64,
) -> Appointment {
    let doctor = &doctors[rng.gen_range(0..doctors.len())];
    let date = history_start + chrono::Duration::days(rng.gen_range(0..=span_days));
    let hour = rng.gen_range(9..17);
    let minute = rng.gen_range(0..4) * 15;
    let meridiem = if rng.gen_bool(0.5) { "AM" } else { "PM" };
    let status = HISTORY_STATUSES
        .choose(rng)
        .copied()
        .unwrap_or(AppointmentStatus::Completed);
    let details = VISIT_NOTES.choose(rng).map(|note| (*note).to_string());

    Appointment {
        id: format!("apt-{patient_id}-{seq:02}"),
        doctor: doctor.snapshot(),
        date,
        time: format!("{hour:02}:{minute:02} {meridiem}"),
        status,
        details,
    }
}

fn round_rating(raw: f32) -> f32 {
    (raw * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[test]
    fn same_seed_same_catalog() {
        assert_eq!(demo_catalog(9, today()).unwrap(), demo_catalog(9, today()).unwrap());
    }

    #[test]
    fn different_seed_changes_history() {
        let a = demo_catalog(1, today()).unwrap();
        let b = demo_catalog(2, today()).unwrap();
        assert_ne!(a.patients(), b.patients());
        assert_eq!(a.todays_appointments(), b.todays_appointments());
    }

    #[test]
    fn fixed_tables_are_reproduced() {
        let catalog = demo_catalog(42, today()).unwrap();
        assert_eq!(catalog.doctors().len(), 16);
        assert_eq!(catalog.todays_appointments().len(), 8);

        let ava = catalog.patient("p3").unwrap();
        assert_eq!(ava.name, "Ava Patel");
        assert_eq!(ava.patient_id, "MTC-11225");
        assert_eq!(ava.phone, "+1 345 555 0103");
        assert_eq!(ava.email, "ava.p@email.com");

        let last = catalog.patient("p12").unwrap();
        assert_eq!(last.patient_id, "MTC-11234");
        assert_eq!(last.phone, "+1 345 555 0112");
    }

    #[test]
    fn generated_values_respect_ranges() {
        let catalog = demo_catalog(42, today()).unwrap();
        for doctor in catalog.doctors() {
            let rating = doctor.rating.unwrap();
            assert!((4.5..=5.0).contains(&rating));
            assert!((50..100).contains(&doctor.appointments_count.unwrap()));
            assert!((150..250).contains(&doctor.reviews.unwrap()));
            assert!((10..20).contains(&doctor.experience.unwrap()));
        }
        let start = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
        for patient in catalog.patients() {
            assert!((2..=7).contains(&patient.appointments.len()));
            assert!(patient.appointments.windows(2).all(|w| w[0].date >= w[1].date));
            for visit in &patient.appointments {
                assert!(visit.date >= start && visit.date <= today());
                assert!(visit.time.ends_with("AM") || visit.time.ends_with("PM"));
                assert!(HISTORY_STATUSES.contains(&visit.status));
            }
        }
    }

    #[test]
    fn rejects_anchor_before_history_start() {
        let too_early = NaiveDate::from_ymd_opt(2021, 12, 31).unwrap();
        assert!(demo_catalog(1, too_early).is_err());
    }
}
