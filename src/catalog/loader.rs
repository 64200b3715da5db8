//! Fixture file loading.
//!
//! A fixture file describes a whole catalog in JSON or TOML. Both formats share
//! one shape:
//!
//! ```json
//! {
//!   "doctors": [{ "id": "doc1", "name": "Dr. Emily Carter", "specialty": "Cardiologist", "available": true }],
//!   "patients": [{
//!     "id": "p1", "name": "Sophia Bennett", "patientId": "MTC-11223",
//!     "email": "sophia.b@email.com", "phone": "+1 345 555 0101",
//!     "appointments": [{
//!       "id": "apt-1", "doctor": { "name": "Dr. Emily Carter", "specialty": "Cardiologist" },
//!       "date": "2024-02-11", "time": "09:15 AM", "status": "Completed"
//!     }]
//!   }],
//!   "todays_appointments": [{
//!     "id": "t-apt1", "patient": { "id": "p1", "name": "Sophia Bennett" },
//!     "doctor": { "name": "Dr. Emily Carter" }, "time": "09:00 AM", "status": "Confirmed"
//!   }],
//!   "recent_activity": [],
//!   "monthly_trends": []
//! }
//! ```
//!
//! The format is chosen by file extension. Records go through [`Catalog::new`],
//! so duplicate ids are rejected and histories are re-sorted whatever order the
//! file lists them in.

use super::insights::{MonthlyTrend, RecentActivity};
use super::Catalog;
use crate::domain::error::{CareboardError, Result};
use crate::domain::{Doctor, Patient, TodaysAppointment};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    doctors: Vec<Doctor>,
    #[serde(default)]
    patients: Vec<Patient>,
    #[serde(default)]
    todays_appointments: Vec<TodaysAppointment>,
    #[serde(default)]
    recent_activity: Vec<RecentActivity>,
    #[serde(default)]
    monthly_trends: Vec<MonthlyTrend>,
}

/// Supported fixture encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FixtureFormat {
    Json,
    Toml,
}

impl FixtureFormat {
    fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            other => Err(CareboardError::Fixture(format!(
                "unsupported fixture format {:?} for {}",
                other.unwrap_or(""),
                path.display()
            ))),
        }
    }
}

/// Loads and validates a catalog fixture.
///
/// # Errors
///
/// Returns an error if the file cannot be read, has an unsupported extension,
/// fails to parse, or violates a catalog invariant.
///
/// # Examples
///
/// ```no_run
/// use careboard::catalog::load_catalog;
///
/// let catalog = load_catalog("/host/clinic/catalog.json")?;
/// println!("{} patients", catalog.patients().len());
/// # Ok::<(), careboard::CareboardError>(())
/// ```
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog> {
    let path = path.as_ref();
    let _span = tracing::debug_span!("load_catalog", path = %path.display()).entered();

    let format = FixtureFormat::from_path(path)?;
    let contents = std::fs::read_to_string(path)?;
    let file = parse(&contents, format)?;

    tracing::debug!(
        format = ?format,
        doctors = file.doctors.len(),
        patients = file.patients.len(),
        "fixture parsed"
    );

    Ok(Catalog::new(file.doctors, file.patients, file.todays_appointments)?
        .with_reporting(file.recent_activity, file.monthly_trends))
}

fn parse(contents: &str, format: FixtureFormat) -> Result<CatalogFile> {
    match format {
        FixtureFormat::Json => serde_json::from_str(contents)
            .map_err(|e| CareboardError::Fixture(format!("failed to parse JSON fixture: {e}"))),
        FixtureFormat::Toml => toml::from_str(contents)
            .map_err(|e| CareboardError::Fixture(format!("failed to parse TOML fixture: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_follows_extension() {
        assert_eq!(
            FixtureFormat::from_path(Path::new("a/catalog.JSON")).unwrap(),
            FixtureFormat::Json
        );
        assert_eq!(
            FixtureFormat::from_path(Path::new("catalog.toml")).unwrap(),
            FixtureFormat::Toml
        );
        assert!(FixtureFormat::from_path(Path::new("catalog.yaml")).is_err());
        assert!(FixtureFormat::from_path(Path::new("catalog")).is_err());
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let file = parse("{}", FixtureFormat::Json).unwrap();
        assert!(file.doctors.is_empty());
        assert!(file.todays_appointments.is_empty());
    }
}
