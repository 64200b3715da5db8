//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (`main.rs`) and the domain, catalog and
//! worker layers.
//!
//! ```text
//! Key press → Event → handle_event → AppState mutation → Actions → Side effects
//!                          ↑                                   ↓
//!                          └──────── Worker responses ─────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Pages and input modes
//! - [`state`]: Central application state container
//! - [`view`]: View model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;
pub mod view;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{page_title, InputMode, Page, SearchFocus};
pub use state::{AppState, DirectoryPane};
