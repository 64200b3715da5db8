use careboard::catalog::load_catalog;
use careboard::domain::AppointmentStatus;
use careboard::CareboardError;
use std::fs;

const JSON_FIXTURE: &str = r#"{
  "doctors": [
    { "id": "doc1", "name": "Dr. Emily Carter", "specialty": "Cardiologist", "available": true }
  ],
  "patients": [{
    "id": "p1", "name": "Sophia Bennett", "patientId": "MTC-11223",
    "email": "sophia.b@email.com", "phone": "+1 345 555 0101",
    "appointments": [
      { "id": "apt-1", "doctor": { "name": "Dr. Emily Carter", "specialty": "Cardiologist" },
        "date": "2023-02-11", "time": "09:15 AM", "status": "Completed" },
      { "id": "apt-2", "doctor": { "name": "Dr. Emily Carter", "specialty": "Cardiologist" },
        "date": "2024-07-30", "time": "02:00 PM", "status": "Cancelled" }
    ]
  }],
  "todays_appointments": [{
    "id": "t-apt1", "patient": { "id": "p1", "name": "Sophia Bennett" },
    "doctor": { "name": "Dr. Emily Carter" }, "time": "09:00 AM", "status": "Confirmed"
  }]
}"#;

const TOML_FIXTURE: &str = r#"
[[doctors]]
id = "doc1"
name = "Dr. Emily Carter"
specialty = "Cardiologist"
available = false

[[patients]]
id = "p1"
name = "Sophia Bennett"
patientId = "MTC-11223"
email = "sophia.b@email.com"
phone = "+1 345 555 0101"

[[todays_appointments]]
id = "t-apt1"
time = "09:00 AM"
status = "Checked-in"
patient = { id = "p1", name = "Sophia Bennett" }
doctor = { name = "Dr. Emily Carter" }
"#;

#[test]
fn json_fixture_loads_with_history_newest_first() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(&path, JSON_FIXTURE).unwrap();

    let catalog = load_catalog(&path).unwrap();
    assert_eq!(catalog.doctors().len(), 1);
    let history: Vec<&str> = catalog.patients()[0]
        .appointments
        .iter()
        .map(|a| a.id.as_str())
        .collect();
    assert_eq!(history, vec!["apt-2", "apt-1"]);
    assert_eq!(
        catalog.todays_appointment("t-apt1").map(|a| a.status),
        Some(AppointmentStatus::Confirmed)
    );
}

#[test]
fn toml_fixture_loads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.toml");
    fs::write(&path, TOML_FIXTURE).unwrap();

    let catalog = load_catalog(&path).unwrap();
    assert!(!catalog.doctors()[0].available);
    assert!(catalog.patients()[0].appointments.is_empty());
    assert_eq!(catalog.schedule_stats().checked_in, 1);
}

#[test]
fn duplicate_patient_ids_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.toml");
    let duplicated = r#"
[[patients]]
id = "p1"
name = "Sophia Bennett"
patientId = "MTC-11223"
email = "sophia.b@email.com"
phone = "+1 345 555 0101"

[[patients]]
id = "p1"
name = "Someone Else"
patientId = "MTC-99999"
email = "someone@email.com"
phone = "+1 345 555 0199"
"#;
    fs::write(&path, duplicated).unwrap();

    let err = load_catalog(&path).unwrap_err();
    assert!(matches!(err, CareboardError::Fixture(ref msg) if msg.contains("p1")));
}

#[test]
fn unreadable_and_malformed_files_fail() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        load_catalog(dir.path().join("missing.json")),
        Err(CareboardError::Io(_))
    ));

    let bad = dir.path().join("bad.json");
    fs::write(&bad, "{ not json").unwrap();
    assert!(matches!(load_catalog(&bad), Err(CareboardError::Fixture(_))));
}
