//! # API Facade
//!
//! The single entry point for UIs. `TarotApi` owns the loaded [`Catalog`] and hands
//! out the borrowed views built over it (index, resolver, navigator).
//!
//! Like the rest of the library it returns data, never strings for the terminal:
//! a lookup returns a [`Reading`] or a [`LookupError`], and the UI decides how each
//! looks.

use crate::catalog::Catalog;
use crate::config::DataSource;
use crate::error::Result;
use crate::index::{display_name, CardIndex};
use crate::lookup::{LookupError, Reading, Resolver};
use crate::nav::Navigator;
use log::info;
use rand::Rng;
use serde::Serialize;

/// A card as it appears in listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardSummary {
    pub key: String,
    pub name: String,
}

impl CardSummary {
    fn from_key(key: &str) -> Self {
        Self {
            key: key.to_string(),
            name: display_name(key),
        }
    }
}

/// A randomly drawn card and its reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    pub card: CardSummary,
    pub reading: std::result::Result<Reading, LookupError>,
}

pub struct TarotApi {
    catalog: Catalog,
}

impl TarotApi {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Loads the catalog from the given source.
    pub fn open(source: &DataSource) -> Result<Self> {
        let catalog = match source {
            DataSource::File(path) => Catalog::load(path)?,
            DataSource::Builtin => Catalog::builtin()?,
        };
        info!("Catalog ready: {} entries from {:?}", catalog.len(), source);
        Ok(Self::new(catalog))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn index(&self) -> CardIndex<'_> {
        CardIndex::new(&self.catalog)
    }

    /// Resolves free-form user text to a reading.
    pub fn lookup(&self, raw: &str) -> std::result::Result<Reading, LookupError> {
        Resolver::new(&self.catalog).resolve(raw)
    }

    pub fn list_cards(&self) -> Vec<CardSummary> {
        self.index()
            .all_cards()
            .into_iter()
            .map(CardSummary::from_key)
            .collect()
    }

    /// Draws one card uniformly. `None` when the catalog has no cards.
    pub fn random_card<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Draw> {
        let key = self.index().random(rng)?;
        Some(Draw {
            card: CardSummary::from_key(key),
            reading: Resolver::new(&self.catalog).read(key),
        })
    }

    pub fn navigator(&self) -> Navigator<'_> {
        Navigator::new(&self.catalog)
    }
}
