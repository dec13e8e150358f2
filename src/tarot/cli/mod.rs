//! # CLI Behavior
//!
//! One client of the `tarot` library. See the crate-level documentation in `lib.rs`
//! for the layering, and [`commands`] for the modes.
//!
//! - `setup`: clap argument definitions
//! - `commands`: dispatch, logging and context setup, per-mode handlers
//! - `render` / `templates` / `styles`: template-based output
//! - `terminal`: the line-oriented interactive terminal

pub mod commands;
pub mod render;
pub mod setup;
pub mod styles;
pub mod templates;
pub mod terminal;

pub use commands::run;
