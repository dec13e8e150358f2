//! # Card Catalog
//!
//! The catalog is the read-only data table every other module works from. It is
//! loaded once at startup and then only borrowed.
//!
//! ## Storage Format
//!
//! A single JSON object whose values are all arrays of strings:
//!
//! ```text
//! {
//!   "fool":     ["majors"],               // card key -> tags
//!   "ace-cups": ["cups", "ace"],
//!   "cups":     ["Paragraph", "..."],     // tag -> content paragraphs
//!   "ace":      ["Paragraph"]
//! }
//! ```
//!
//! Cards and content share one namespace: a tag is looked up as a key to find its
//! paragraphs. Which keys are cards is decided by [`crate::model::RESERVED_TAGS`].
//!
//! Object order is kept (serde_json `preserve_order`), and every listing the index
//! produces follows it.

use crate::error::{Result, TarotError};
use crate::model::is_reserved;
use log::debug;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

const BUILTIN_DATA: &str = include_str!("../../data/cards.json");

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    order: Vec<String>,
    entries: HashMap<String, Vec<String>>,
}

impl Catalog {
    /// Parses a catalog from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        let object: Map<String, Value> = serde_json::from_str(text)?;
        let mut catalog = Catalog::default();

        for (key, value) in object {
            let values: Vec<String> = serde_json::from_value(value).map_err(|e| {
                TarotError::Data(format!("entry '{}' is not a list of strings: {}", key, e))
            })?;
            catalog.insert(key, values);
        }

        Ok(catalog)
    }

    /// Loads a catalog from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let catalog = Self::from_json(&content)?;
        debug!(
            "Loaded {} entries from {}",
            catalog.order.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// The catalog bundled into the binary.
    pub fn builtin() -> Result<Self> {
        let catalog = Self::from_json(BUILTIN_DATA)?;
        debug!("Loaded {} bundled entries", catalog.order.len());
        Ok(catalog)
    }

    /// Builds a catalog from `(key, values)` pairs, keeping their order.
    pub fn from_entries<I, K, V, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut catalog = Catalog::default();
        for (key, values) in entries {
            catalog.insert(key.into(), values.into_iter().map(Into::into).collect());
        }
        catalog
    }

    fn insert(&mut self, key: String, values: Vec<String>) {
        if !self.entries.contains_key(&key) {
            self.order.push(key.clone());
        }
        self.entries.insert(key, values);
    }

    /// Raw values stored under `key`: tags for a card, paragraphs for a tag.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// Tag set of a card. `None` when `key` is unknown or names a category tag.
    pub fn tags_of(&self, key: &str) -> Option<&[String]> {
        if is_reserved(key) {
            return None;
        }
        self.get(key)
    }

    pub fn has_tag(&self, key: &str, tag: &str) -> bool {
        self.tags_of(key)
            .is_some_and(|tags| tags.iter().any(|t| t == tag))
    }

    /// Every key in file order, category tags included.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
