//! Careboard: a hospital administration dashboard as a Zellij plugin.
//!
//! Careboard keeps a catalog of doctors, patients and today's appointments and
//! presents it as five pages:
//! - Dashboard headline numbers, a weekly chart and recent activity
//! - Today's appointments with search and check-in
//! - A searchable doctor roster with profile popups
//! - A searchable patient directory with per-patient appointment history
//! - Generated performance reports
//!
//! The appointments page can jump straight into a patient's record. The jump
//! goes by patient id and reports a notice if the record no longer exists.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling, pages, input modes               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Directory     │   │ Worker Layer  │
//! │ (ui/)         │   │ (directory/)  │   │ (worker/)     │
//! │ - Rendering   │   │ - Search      │   │ - Catalog load│
//! │ - Theming     │   │ - Navigation  │   │ - IPC bridge  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Catalog & Domain Layers                            │
//! │  - Records, statuses, check-in (domain/)            │
//! │  - Demo generator, fixture loader, stats (catalog/) │
//! │  - Paths (infrastructure/), tracing (observability/)│
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! plugin location="file:/path/to/careboard.wasm" {
//!     fixture_file "~/clinic/catalog.toml"
//!     seed "42"
//!     today "2025-06-01"
//!     start_page "appointments"
//!     theme "clinic-light"
//!     trace_level "debug"
//! }
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod catalog;
pub mod directory;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;
pub mod worker;

pub use app::{handle_event, Action, AppState, Event, InputMode, Page, SearchFocus};
pub use catalog::Catalog;
pub use domain::{CareboardError, Result};
pub use ui::Theme;

use chrono::NaiveDate;
use std::collections::BTreeMap;
use worker::CatalogSource;

/// Seed used for the demo catalog and reports when none is configured.
pub const DEFAULT_SEED: u64 = 42;

/// Plugin configuration parsed from Zellij's configuration map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON or TOML catalog to load instead of the demo catalog.
    pub fixture_file: Option<String>,

    /// Seed for the demo catalog and the generated report numbers. Default: 42
    pub seed: u64,

    /// Date the demo catalog treats as today. Default: the current UTC date.
    pub today: Option<NaiveDate>,

    /// Page shown after loading. Default: dashboard
    pub start_page: Page,

    /// Built-in theme name (`clinic-dark`, `clinic-light`). Ignored if
    /// `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// Tracing filter directive, e.g. `debug`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fixture_file: None,
            seed: DEFAULT_SEED,
            today: None,
            start_page: Page::default(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Unparseable values fall back to their defaults; blank strings count as
    /// unset.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use careboard::{Config, Page};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("seed".to_string(), "7".to_string());
    /// map.insert("start_page".to_string(), "Patients".to_string());
    /// map.insert("today".to_string(), "not a date".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.seed, 7);
    /// assert_eq!(config.start_page, Page::Patients);
    /// assert_eq!(config.today, None);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
        };

        let seed = get("seed").map_or(DEFAULT_SEED, |s| {
            s.parse().unwrap_or_else(|e| {
                tracing::debug!(seed = %s, error = %e, "invalid seed, using default");
                DEFAULT_SEED
            })
        });

        let today = get("today").and_then(|s| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map_err(|e| tracing::debug!(today = %s, error = %e, "invalid date, using current date"))
                .ok()
        });

        let start_page = get("start_page").map_or_else(Page::default, |s| {
            s.parse().unwrap_or_else(|e: CareboardError| {
                tracing::debug!(error = %e, "invalid start page, using dashboard");
                Page::default()
            })
        });

        Self {
            fixture_file: get("fixture_file").map(String::from),
            seed,
            today,
            start_page,
            theme_name: get("theme").map(String::from),
            theme_file: get("theme_file").map(String::from),
            trace_level: get("trace_level").map(String::from),
        }
    }

    /// Where the worker should get the catalog from.
    #[must_use]
    pub fn catalog_source(&self) -> CatalogSource {
        self.fixture_file.as_ref().map_or_else(
            || CatalogSource::Demo {
                seed: self.seed,
                today: self.today.unwrap_or_else(|| chrono::Utc::now().date_naive()),
            },
            |path| CatalogSource::File { path: path.clone() },
        )
    }

    fn load_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            let path = infrastructure::paths::expand_tilde(theme_file);
            return Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Builds the initial state for `config`.
///
/// The catalog starts empty; it arrives from the worker once the plugin has
/// its permissions.
///
/// # Example
///
/// ```rust
/// use careboard::{initialize, Config, Page};
///
/// let config = Config { start_page: Page::Reports, ..Config::default() };
/// let state = initialize(&config);
/// assert_eq!(state.page, Page::Reports);
/// assert!(!state.loaded);
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(seed = config.seed, start_page = ?config.start_page, "initializing careboard plugin");

    let mut state = AppState::new(Catalog::default(), config.load_theme(), config.seed);
    state.page = config.start_page;
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_file_overrides_demo_source() {
        let mut map = BTreeMap::new();
        map.insert("fixture_file".to_string(), "~/clinic.json".to_string());
        map.insert("today".to_string(), "2025-06-01".to_string());

        let config = Config::from_zellij(&map);
        assert_eq!(
            config.catalog_source(),
            CatalogSource::File { path: "~/clinic.json".to_string() }
        );

        map.remove("fixture_file");
        let config = Config::from_zellij(&map);
        assert_eq!(
            config.catalog_source(),
            CatalogSource::Demo {
                seed: DEFAULT_SEED,
                today: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            }
        );
    }

    #[test]
    fn blank_and_bad_values_fall_back() {
        let mut map = BTreeMap::new();
        map.insert("seed".to_string(), "many".to_string());
        map.insert("theme".to_string(), "  ".to_string());
        map.insert("start_page".to_string(), "billing".to_string());

        let config = Config::from_zellij(&map);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn unknown_theme_uses_default() {
        let config = Config {
            theme_name: Some("neon".to_string()),
            ..Config::default()
        };
        assert_eq!(initialize(&config).theme, Theme::default());
    }
}
