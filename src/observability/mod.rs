//! Tracing setup with file-based span export.
//!
//! Spans recorded with `tracing` are bridged into OpenTelemetry and written as
//! JSON lines to a size-rotated file in the plugin data directory:
//!
//! ```text
//! tracing → tracing-opentelemetry → opentelemetry_sdk → SpanLineExporter → TraceFile
//! ```
//!
//! The filter level comes from the `trace_level` plugin option and defaults to
//! `info`. If the data directory cannot be created, tracing stays disabled and
//! the plugin runs normally.
//!
//! ```rust
//! use careboard::observability::init_tracing;
//! use careboard::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("dashboard starting");
//! ```

mod exporter;
mod init;
mod trace_file;

pub use init::init_tracing;
pub use trace_file::TraceFile;
