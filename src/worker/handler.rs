//! Catalog-loading worker.
//!
//! Generating the demo catalog or parsing a fixture file happens on Zellij's
//! worker thread so the dashboard keeps rendering while it runs. The worker is
//! stateless: each request builds a fresh catalog and posts it back.

use crate::catalog::{self, Catalog};
use crate::domain::error::Result;
use crate::infrastructure::paths;
use crate::worker::{CatalogSource, WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use zellij_tile::prelude::{PluginMessage, ZellijWorker};
use zellij_tile::shim::post_message_to_plugin;

/// Worker registered with the host under the `careboard` namespace.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CareboardWorker;

impl CareboardWorker {
    /// Processes one request and produces the reply.
    ///
    /// Errors never escape: they come back as [`WorkerResponse::Error`].
    #[must_use]
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = attach_parent_trace_context(&message);
        let _span = tracing::debug_span!("worker_handle_message", message_type = ?message).entered();

        match message {
            WorkerMessage::LoadCatalog { source, .. } => match load(&source) {
                Ok(catalog) => {
                    tracing::debug!(
                        doctors = catalog.doctors().len(),
                        patients = catalog.patients().len(),
                        "catalog loaded"
                    );
                    WorkerResponse::CatalogLoaded { catalog }
                }
                Err(e) => {
                    tracing::warn!(error = %e, source = ?source, "catalog load failed");
                    let message = match &source {
                        CatalogSource::File { path } => format!(
                            "load catalog {}: {e}",
                            paths::display_path(&paths::expand_tilde(path))
                        ),
                        CatalogSource::Demo { .. } => format!("load catalog: {e}"),
                    };
                    WorkerResponse::Error { message }
                }
            },
        }
    }
}

fn load(source: &CatalogSource) -> Result<Catalog> {
    match source {
        CatalogSource::Demo { seed, today } => catalog::demo_catalog(*seed, *today),
        CatalogSource::File { path } => catalog::load_catalog(paths::expand_tilde(path)),
    }
}

/// Re-enters the plugin's trace on this thread for the lifetime of the guard.
fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
    use opentelemetry::trace::{
        SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState,
    };

    let parent = message.trace_context()?;
    let trace_id = TraceId::from_hex(&parent.trace_id).ok()?;
    let span_id = SpanId::from_hex(&parent.parent_span_id).ok()?;

    let remote = SpanContext::new(trace_id, span_id, TraceFlags::SAMPLED, true, TraceState::default());
    Some(
        opentelemetry::Context::current()
            .with_remote_span_context(remote)
            .attach(),
    )
}

static WORKER_TRACING_INITIALIZED: AtomicBool = AtomicBool::new(false);

impl ZellijWorker<'_> for CareboardWorker {
    fn on_message(&mut self, message: String, payload: String) {
        if !WORKER_TRACING_INITIALIZED.swap(true, Ordering::Relaxed) {
            crate::observability::init_tracing(&crate::Config::default());
        }

        let request: WorkerMessage = match serde_json::from_str(&payload) {
            Ok(request) => request,
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker message");
                return;
            }
        };

        let response = self.handle_message(request);

        match serde_json::to_string(&response) {
            Ok(payload) => post_message_to_plugin(PluginMessage {
                name: message,
                payload,
                worker_name: None,
            }),
            Err(e) => tracing::debug!(error = %e, "failed to serialize worker response"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn demo_source_yields_catalog() {
        let mut worker = CareboardWorker;
        let response = worker.handle_message(WorkerMessage::LoadCatalog {
            source: CatalogSource::Demo {
                seed: 42,
                today: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            },
            trace_context: None,
        });

        match response {
            WorkerResponse::CatalogLoaded { catalog } => {
                assert_eq!(catalog.patients().len(), 12);
                assert_eq!(catalog.todays_appointments().len(), 8);
            }
            WorkerResponse::Error { message } => panic!("unexpected error: {message}"),
        }
    }

    #[test]
    fn missing_file_becomes_error_response() {
        let mut worker = CareboardWorker;
        let response = worker.handle_message(WorkerMessage::LoadCatalog {
            source: CatalogSource::File {
                path: "/definitely/not/here/catalog.json".to_string(),
            },
            trace_context: None,
        });

        assert!(matches!(response, WorkerResponse::Error { message } if message.starts_with("load catalog")));
    }
}
