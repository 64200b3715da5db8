//! Error types for the careboard plugin.
//!
//! This module defines the centralized error type [`CareboardError`] and a type alias
//! [`Result`] used across the crate. Lookup misses and rejected check-ins are not
//! errors: they are reported through [`NavigationOutcome`](crate::directory::NavigationOutcome)
//! and [`CheckInOutcome`](crate::domain::CheckInOutcome) instead.

use thiserror::Error;

/// The main error type for careboard operations.
///
/// Covers everything that can actually fail in the plugin: reading and validating
/// catalog fixtures, loading themes, talking to the background worker, and parsing
/// configuration.
///
/// # Examples
///
/// ```
/// use careboard::CareboardError;
///
/// fn reject() -> Result<(), CareboardError> {
///     Err(CareboardError::Fixture("duplicate patient id: p1".to_string()))
/// }
/// assert!(reject().is_err());
/// ```
#[derive(Debug, Error)]
pub enum CareboardError {
    /// Catalog fixture data is malformed or violates a catalog invariant.
    ///
    /// Raised for unparseable fixture files, unsupported fixture formats and
    /// duplicate record ids.
    #[error("Fixture error: {0}")]
    Fixture(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background worker failed.
    ///
    /// The string carries the worker's own error message when the failure was
    /// reported back over the message channel.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for careboard operations.
pub type Result<T> = std::result::Result<T, CareboardError>;
