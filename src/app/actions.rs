//! Side effects requested by the event handler.
//!
//! [`handle_event`](crate::app::handle_event) never talks to the host directly.
//! It returns a list of [`Action`]s and the plugin shim executes them in order.
//!
//! # Example
//!
//! ```rust
//! use careboard::app::Action;
//! use careboard::worker::{CatalogSource, WorkerMessage};
//!
//! let actions = vec![Action::PostToWorker(WorkerMessage::load_catalog(
//!     CatalogSource::File { path: "/host/catalog.json".into() },
//! ))];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::worker::WorkerMessage;

/// Commands executed by the plugin runtime after an event is handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the dashboard pane.
    CloseFocus,

    /// Posts a message to the background worker.
    PostToWorker(WorkerMessage),
}
