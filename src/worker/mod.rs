//! Background worker for catalog loading.
//!
//! - `messages`: request/response protocol with trace context propagation
//! - `handler`: the Zellij worker that builds catalogs

pub mod handler;
pub mod messages;

pub use handler::CareboardWorker;
pub use messages::{CatalogSource, TraceContext, WorkerMessage, WorkerResponse};
