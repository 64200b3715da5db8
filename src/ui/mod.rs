//! User interface rendering layer.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → components → ANSI frame
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready snapshot types
//! - [`renderer`]: Top-level rendering entry points
//! - [`components`]: Layout and per-element renderers
//! - [`helpers`]: Text fitting, wrapping, highlighting and bars
//! - [`theme`]: Color schemes and ANSI escape generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_to_string};
pub use theme::Theme;
pub use viewmodel::{Body, FooterInfo, HeaderInfo, SearchBarInfo, UIViewModel};
