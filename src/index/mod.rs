//! Identity-keyed lookup over the warm store.
//!
//! [`ReferenceIndex`] maps each record's canonical URL to its position in the
//! store's collection, one map per kind, built in a single pass. Dereferencing
//! a cross-entity link is an O(1) map hit instead of a collection scan or a
//! network round trip.
//!
//! The index is only meaningful for the store snapshot it was built from: the
//! service that owns both rebuilds the index whenever the store is
//! repopulated. A stale position (or a dangling upstream link) resolves to
//! `None`, which callers treat as "omit this reference", never as an error.

use std::collections::HashMap;

use crate::model::{Entity, Film, Person, Planet, Species, Starship, Vehicle};
use crate::store::CatalogStore;

/// Per-kind mapping from canonical URL to record position.
#[derive(Debug, Default)]
pub struct ReferenceIndex {
    people: HashMap<String, usize>,
    planets: HashMap<String, usize>,
    films: HashMap<String, usize>,
    starships: HashMap<String, usize>,
    species: HashMap<String, usize>,
    vehicles: HashMap<String, usize>,
}

fn positions<T: Entity>(records: &[T]) -> HashMap<String, usize> {
    records
        .iter()
        .enumerate()
        .map(|(position, record)| (record.url().to_owned(), position))
        .collect()
}

impl ReferenceIndex {
    /// Builds the index from the store's current contents, one pass per kind.
    pub fn build(store: &CatalogStore) -> Self {
        Self {
            people: positions(store.people()),
            planets: positions(store.planets()),
            films: positions(store.films()),
            starships: positions(store.starships()),
            species: positions(store.species()),
            vehicles: positions(store.vehicles()),
        }
    }

    /// Resolves a person reference. `None` is a silent miss, not an error.
    pub fn person<'s>(&self, store: &'s CatalogStore, url: &str) -> Option<&'s Person> {
        self.people.get(url).and_then(|&pos| store.people().get(pos))
    }

    /// Resolves a planet reference.
    pub fn planet<'s>(&self, store: &'s CatalogStore, url: &str) -> Option<&'s Planet> {
        self.planets
            .get(url)
            .and_then(|&pos| store.planets().get(pos))
    }

    /// Resolves a film reference.
    pub fn film<'s>(&self, store: &'s CatalogStore, url: &str) -> Option<&'s Film> {
        self.films.get(url).and_then(|&pos| store.films().get(pos))
    }

    /// Resolves a starship reference.
    pub fn starship<'s>(&self, store: &'s CatalogStore, url: &str) -> Option<&'s Starship> {
        self.starships
            .get(url)
            .and_then(|&pos| store.starships().get(pos))
    }

    /// Resolves a species reference.
    pub fn species<'s>(&self, store: &'s CatalogStore, url: &str) -> Option<&'s Species> {
        self.species
            .get(url)
            .and_then(|&pos| store.species().get(pos))
    }

    /// Resolves a vehicle reference.
    pub fn vehicle<'s>(&self, store: &'s CatalogStore, url: &str) -> Option<&'s Vehicle> {
        self.vehicles
            .get(url)
            .and_then(|&pos| store.vehicles().get(pos))
    }
}
