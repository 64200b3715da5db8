//! Theme management and ANSI escape sequence generation.
//!
//! Two themes ship with the plugin, `clinic-light` and `clinic-dark` (the
//! default). Custom themes are TOML files with the same shape:
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#e6edf3"
//! selection_fg = "#0d1117"
//! selection_bg = "#58a6ff"
//! text_normal = "#e6edf3"
//! text_dim = "#7d8590"
//! border = "#30363d"
//! accent = "#58a6ff"
//! search_bar_border = "#58a6ff"
//! match_highlight_fg = "#0d1117"
//! match_highlight_bg = "#e3b341"
//! empty_state_fg = "#58a6ff"
//! notice_fg = "#e3b341"
//! bar = "#3fb950"
//! trend_up = "#3fb950"
//! trend_down = "#f85149"
//!
//! [colors.status]
//! confirmed = "#58a6ff"
//! checked_in = "#3fb950"
//! completed = "#7d8590"
//! cancelled = "#f85149"
//! rescheduled = "#e3b341"
//! ```
//!
//! # Example
//!
//! ```rust
//! use careboard::ui::Theme;
//!
//! let theme = Theme::from_name("clinic-light").unwrap();
//! assert_eq!(theme.name, "clinic-light");
//! let line = format!("{}Bold{}", Theme::bold(), Theme::reset());
//! assert!(line.starts_with('\u{1b}'));
//! ```

use crate::domain::error::{CareboardError, Result};
use crate::domain::AppointmentStatus;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "clinic-dark";

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex colors (`"#rrggbb"`) for every UI element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Footer, placeholders, secondary lines.
    pub text_dim: String,

    pub border: String,
    /// Active tab and card values.
    pub accent: String,

    pub search_bar_border: String,
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub empty_state_fg: String,
    pub notice_fg: String,

    /// Chart bars.
    pub bar: String,
    pub trend_up: String,
    pub trend_down: String,

    pub status: StatusColors,
}

/// One color per appointment status.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StatusColors {
    pub confirmed: String,
    pub checked_in: String,
    pub completed: String,
    pub cancelled: String,
    pub rescheduled: String,
}

impl Theme {
    /// Loads a built-in theme by name (`clinic-dark` or `clinic-light`).
    ///
    /// Returns `None` for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "clinic-dark" => include_str!("../../themes/clinic-dark.toml"),
            "clinic-light" => include_str!("../../themes/clinic-light.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Parameters
    ///
    /// * `path` - Path to the TOML file
    ///
    /// # Errors
    ///
    /// Returns [`CareboardError::Theme`] if the file cannot be read or does not
    /// parse as a theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            CareboardError::Theme(format!("failed to read {}: {e}", path.display()))
        })?;

        toml::from_str(&contents)
            .map_err(|e| CareboardError::Theme(format!("failed to parse {}: {e}", path.display())))
    }

    /// Color for an appointment status badge.
    #[must_use]
    pub fn status_color(&self, status: AppointmentStatus) -> &str {
        let palette = &self.colors.status;
        match status {
            AppointmentStatus::Confirmed => &palette.confirmed,
            AppointmentStatus::CheckedIn => &palette.checked_in,
            AppointmentStatus::Completed => &palette.completed,
            AppointmentStatus::Cancelled => &palette.cancelled,
            AppointmentStatus::Rescheduled => &palette.rescheduled,
        }
    }

    /// Parses `#rrggbb`, falling back to white on malformed input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// ANSI 24-bit foreground escape for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// The `clinic-dark` theme.
    ///
    /// # Panics
    ///
    /// Panics if the bundled theme fails to parse.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).expect("bundled clinic-dark theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_themes_parse() {
        assert_eq!(Theme::default().name, "clinic-dark");
        assert_eq!(Theme::from_name("clinic-light").unwrap().name, "clinic-light");
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn hex_colors_become_truecolor_escapes() {
        assert_eq!(Theme::fg("#ff8000"), "\u{1b}[38;2;255;128;0m");
        assert_eq!(Theme::bg("000000"), "\u{1b}[48;2;0;0;0m");
        assert_eq!(Theme::fg("bogus"), "\u{1b}[38;2;255;255;255m");
    }

    #[test]
    fn every_status_has_a_distinct_color() {
        let theme = Theme::default();
        let mut colors: Vec<&str> = AppointmentStatus::ALL
            .iter()
            .map(|s| theme.status_color(*s))
            .collect();
        colors.sort_unstable();
        colors.dedup();
        assert_eq!(colors.len(), AppointmentStatus::ALL.len());
    }

    #[test]
    fn custom_theme_file_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        let mut theme = Theme::from_name("clinic-light").unwrap();
        theme.name = "custom".to_string();
        fs::write(&path, toml::to_string(&theme).unwrap()).unwrap();

        assert_eq!(Theme::from_file(&path).unwrap(), theme);
        assert!(matches!(
            Theme::from_file(dir.path().join("missing.toml")),
            Err(CareboardError::Theme(_))
        ));
    }
}
