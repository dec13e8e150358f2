//! # Lookup Resolver
//!
//! Resolves raw user text to the content paragraphs attached to a card.
//!
//! A card's reading is the concatenation, in tag order, of the paragraphs stored
//! under each of its tags. Tags without content are skipped; only when no tag yields
//! anything is the lookup reported as [`LookupError::EmptyContent`].

use crate::catalog::Catalog;
use crate::normalize::normalize;
use log::debug;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The normalized input names no card. Carries the input exactly as given.
    #[error("No mapping found for: {input}")]
    NotFound { input: String },

    #[error("No outputs defined for card categories: {}", tags.join(", "))]
    EmptyContent { key: String, tags: Vec<String> },
}

/// The resolved content of one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    pub key: String,
    pub blocks: Vec<String>,
}

impl Reading {
    /// Paragraphs separated by blank lines, wrapped in a leading and trailing newline.
    pub fn to_text(&self) -> String {
        format!("\n{}\n", self.blocks.join("\n\n"))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    catalog: &'a Catalog,
}

impl<'a> Resolver<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Normalizes `raw` and reads the card it names.
    pub fn resolve(&self, raw: &str) -> Result<Reading, LookupError> {
        let key = normalize(raw);
        self.read(&key).map_err(|err| match err {
            LookupError::NotFound { .. } => {
                debug!("No card for {:?} (normalized to {:?})", raw, key);
                LookupError::NotFound {
                    input: raw.to_string(),
                }
            }
            other => other,
        })
    }

    /// Reads a card by its canonical key, without normalizing.
    pub fn read(&self, key: &str) -> Result<Reading, LookupError> {
        let tags = self.catalog.tags_of(key).ok_or_else(|| LookupError::NotFound {
            input: key.to_string(),
        })?;

        let blocks: Vec<String> = tags
            .iter()
            .filter_map(|tag| self.catalog.get(tag))
            .flatten()
            .cloned()
            .collect();

        if blocks.is_empty() {
            return Err(LookupError::EmptyContent {
                key: key.to_string(),
                tags: tags.to_vec(),
            });
        }

        Ok(Reading {
            key: key.to_string(),
            blocks,
        })
    }
}
