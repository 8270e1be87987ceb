//! Built-in interest paths and quotes.
//!
//! The catalog is plain static data. Lookups are linear; the catalog holds a
//! handful of entries.

mod data;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{InterestPath, Quote};

/// A read-only set of interest paths and quotes.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    paths: &'static [InterestPath],
    quotes: &'static [Quote],
}

static BUILTIN: Catalog = Catalog::new(data::PATHS, data::QUOTES);

impl Catalog {
    pub const fn new(paths: &'static [InterestPath], quotes: &'static [Quote]) -> Self {
        Self { paths, quotes }
    }

    /// The catalog the service ships with.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Path ids in definition order.
    pub fn ids(&self) -> Vec<&'static str> {
        self.paths.iter().map(|p| p.id).collect()
    }

    pub fn get(&self, id: &str) -> Option<&'static InterestPath> {
        self.paths.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn paths(&self) -> &'static [InterestPath] {
        self.paths
    }

    pub fn quotes(&self) -> &'static [Quote] {
        self.quotes
    }

    /// Pick a quote uniformly at random. Falls back to a fixed quote when the
    /// catalog has none.
    pub fn random_quote<R: Rng + ?Sized>(&self, rng: &mut R) -> Quote {
        self.quotes
            .choose(rng)
            .cloned()
            .unwrap_or_else(|| Quote::new("Every expert was once a beginner.", "Unknown"))
    }
}
