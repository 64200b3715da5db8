//! Sandbox filesystem helpers.
//!
//! Inside a Zellij plugin the host filesystem is mounted under `/host`. Paths
//! coming from configuration are written from the user's point of view and
//! must be translated before use.

pub mod paths;

pub use paths::{display_path, expand_tilde, get_data_dir};
