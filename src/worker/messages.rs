//! Plugin/worker message protocol.
//!
//! Messages cross the thread boundary as JSON. Every request carries an optional
//! [`TraceContext`] so spans opened on the worker join the trace that was active
//! in the plugin when the request was built.

use crate::catalog::Catalog;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Serialized OpenTelemetry parent for cross-thread span linking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// 32-digit hex trace id.
    pub trace_id: String,
    /// 16-digit hex span id of the requesting span.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the active span's context, or `None` if there is no valid one
    /// (for example when tracing has not been initialized).
    #[must_use]
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let context = tracing::Span::current().context();
        let span = context.span();
        let span_context = span.span_context();

        if !span_context.is_valid() {
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }
}

/// Where the worker should get the catalog from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogSource {
    /// The seeded demo generator.
    Demo { seed: u64, today: NaiveDate },
    /// A JSON or TOML fixture file, as a sandbox path.
    File { path: String },
}

macro_rules! worker_message_builders {
    (
        $(
            $builder_name:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })
        ),* $(,)?
    ) => {
        impl WorkerMessage {
            $(
                #[doc = concat!("Builds a `", stringify!($variant), "` request tagged with the current trace context.")]
                #[must_use]
                pub fn $builder_name($($field: $ty),*) -> Self {
                    Self::$variant {
                        $($field,)*
                        trace_context: TraceContext::from_current(),
                    }
                }
            )*
        }
    };
}

worker_message_builders! {
    load_catalog(LoadCatalog { source: CatalogSource }),
}

/// Requests from the plugin to the worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Build or load the session catalog.
    LoadCatalog {
        source: CatalogSource,

        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

impl WorkerMessage {
    #[must_use]
    pub const fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::LoadCatalog { trace_context, .. } => trace_context.as_ref(),
        }
    }
}

/// Replies from the worker to the plugin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// The catalog was built and validated.
    CatalogLoaded { catalog: Catalog },

    /// The request failed; `message` is shown to the user.
    Error { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_catalog_request_survives_json() {
        let message = WorkerMessage::LoadCatalog {
            source: CatalogSource::Demo {
                seed: 7,
                today: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            },
            trace_context: None,
        };

        let json = serde_json::to_string(&message).unwrap();
        assert!(!json.contains("trace_context"));
        assert!(json.contains("2025-06-01"));
        let back: WorkerMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, message);
    }

    #[test]
    fn builder_without_tracing_has_no_context() {
        let message = WorkerMessage::load_catalog(CatalogSource::File {
            path: "/host/catalog.json".to_string(),
        });
        assert_eq!(message.trace_context(), None);
    }
}
