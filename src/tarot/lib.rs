//! # Tarot Architecture
//!
//! Tarot is a **card lookup library** with a command-line client. The library knows
//! the deck, how people spell card names, and how to walk the deck menu by menu; it
//! does not know about terminals.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders templates, reads stdin         │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the loaded catalog                                  │
//! │  - Lookup, listing, random draw, navigator                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (normalize, index, lookup, nav)                       │
//! │  - Pure functions over a borrowed Catalog                   │
//! │  - Navigation talks to the user only through `Terminal`     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Data (catalog.rs)                                          │
//! │  - Read-only key → list table, loaded once from JSON        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Load Once, Borrow Everywhere
//!
//! There is no global deck. The catalog is built once at startup and every
//! component (index, resolver, navigator) borrows it. Nothing mutates it after load.
//!
//! ## Testing Strategy
//!
//! 1. **Core**: unit tests beside each module, against the bundled catalog and small
//!    hand-built ones (`test_utils`).
//! 2. **Navigation**: the transition function is tested directly; whole sessions are
//!    replayed through a scripted `Terminal`.
//! 3. **CLI**: integration tests in `tests/` drive the binary.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`catalog`]: Card data loading
//! - [`normalize`]: Free text to canonical card keys
//! - [`index`]: Category queries, search, display names
//! - [`lookup`]: Card key to content paragraphs
//! - [`breadcrumb`]: Trail of menu choices
//! - [`nav`]: Interactive navigation state machine
//! - [`model`]: Suits, lines, card types and tag vocabularies
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing, templated rendering and the line terminal for the binary (not part of the lib API)

pub mod api;
pub mod breadcrumb;
pub mod catalog;
pub mod config;
pub mod error;
pub mod index;
pub mod lookup;
pub mod model;
pub mod nav;
pub mod normalize;

#[cfg(test)]
pub(crate) mod test_utils;
