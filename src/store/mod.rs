//! Warm in-memory entity store.
//!
//! [`CatalogStore`] holds the full collection of every kind, fetched once at
//! startup by following upstream pagination until exhausted. After warm-up the
//! store is read-only: query traffic runs over the materialized collections
//! with no locking, and the store lives for the process lifetime.

use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::model::{Film, Kind, Person, Planet, Species, Starship, Vehicle};
use crate::source::{CatalogSource, FetchError};

/// Outcome of a warm-up pass.
///
/// A failed page fetch aborts that kind's population (keeping the records
/// gathered up to the last successful page) without affecting the other
/// kinds. The report is the one warm-up condition an operator must observe
/// before accepting query traffic.
#[derive(Debug, Default)]
pub struct WarmUpReport {
    /// Kinds whose population stopped early, with the error that stopped it.
    pub failures: Vec<(Kind, FetchError)>,
}

impl WarmUpReport {
    /// Returns `true` when every kind was fetched to exhaustion.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Process-wide in-memory cache of all entity collections.
///
/// Collections preserve upstream insertion order. A kind that has not been
/// populated (or failed to populate) reads as an empty collection, never as
/// an error.
///
/// # Examples
///
/// ```rust,no_run
/// use holocron::source::SwapiClient;
/// use holocron::store::CatalogStore;
///
/// # async fn example() {
/// let mut store = CatalogStore::new();
/// let report = store.warm_up(&SwapiClient::new()).await;
/// assert!(report.is_complete());
/// # }
/// ```
#[derive(Debug, Default)]
pub struct CatalogStore {
    people: Vec<Person>,
    planets: Vec<Planet>,
    films: Vec<Film>,
    starships: Vec<Starship>,
    species: Vec<Species>,
    vehicles: Vec<Vehicle>,
}

impl CatalogStore {
    /// Creates an empty store. Call [`warm_up`](Self::warm_up) before serving
    /// queries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Populates every empty collection from the upstream source.
    ///
    /// For each kind whose collection is empty, pages are fetched and
    /// concatenated in encounter order until no `next` cursor remains. Kinds
    /// that already hold data are skipped, so repeated calls never duplicate
    /// fetch work. A zero-record upstream collection is valid.
    ///
    /// Warm-up is the only mutating operation on the store and must complete
    /// before the store is shared with concurrent readers.
    pub async fn warm_up<S: CatalogSource>(&mut self, source: &S) -> WarmUpReport {
        let mut report = WarmUpReport::default();
        Self::populate(&mut self.people, Kind::People, source, &mut report).await;
        Self::populate(&mut self.planets, Kind::Planets, source, &mut report).await;
        Self::populate(&mut self.films, Kind::Films, source, &mut report).await;
        Self::populate(&mut self.starships, Kind::Starships, source, &mut report).await;
        Self::populate(&mut self.species, Kind::Species, source, &mut report).await;
        Self::populate(&mut self.vehicles, Kind::Vehicles, source, &mut report).await;

        if report.is_complete() {
            info!(total = self.total(), "catalog warm-up complete");
        } else {
            warn!(
                failed_kinds = report.failures.len(),
                "catalog warm-up finished with failures"
            );
        }
        report
    }

    async fn populate<T, S>(
        slot: &mut Vec<T>,
        kind: Kind,
        source: &S,
        report: &mut WarmUpReport,
    ) where
        T: DeserializeOwned,
        S: CatalogSource,
    {
        if !slot.is_empty() {
            debug!(%kind, records = slot.len(), "collection already warm, skipping");
            return;
        }

        let (records, failure) = load_collection(source, kind).await;
        info!(%kind, records = records.len(), "collection populated");
        *slot = records;

        if let Some(err) = failure {
            warn!(%kind, error = %err, "warm-up aborted for kind");
            report.failures.push((kind, err));
        }
    }

    /// Builds a pre-populated store without going through a source.
    #[cfg(test)]
    pub(crate) fn from_parts(
        people: Vec<Person>,
        planets: Vec<Planet>,
        films: Vec<Film>,
        starships: Vec<Starship>,
        species: Vec<Species>,
        vehicles: Vec<Vehicle>,
    ) -> Self {
        Self {
            people,
            planets,
            films,
            starships,
            species,
            vehicles,
        }
    }

    /// All person records, in upstream order.
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// All planet records, in upstream order.
    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    /// All film records, in upstream order.
    pub fn films(&self) -> &[Film] {
        &self.films
    }

    /// All starship records, in upstream order.
    pub fn starships(&self) -> &[Starship] {
        &self.starships
    }

    /// All species records, in upstream order.
    pub fn species(&self) -> &[Species] {
        &self.species
    }

    /// All vehicle records, in upstream order.
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Number of records held for `kind`. Unpopulated kinds report 0.
    pub fn len(&self, kind: Kind) -> usize {
        match kind {
            Kind::People => self.people.len(),
            Kind::Planets => self.planets.len(),
            Kind::Films => self.films.len(),
            Kind::Starships => self.starships.len(),
            Kind::Species => self.species.len(),
            Kind::Vehicles => self.vehicles.len(),
        }
    }

    /// Returns `true` when `kind` holds no records.
    pub fn is_empty(&self, kind: Kind) -> bool {
        self.len(kind) == 0
    }

    /// Total records across all kinds.
    pub fn total(&self) -> usize {
        Kind::ALL.iter().map(|&kind| self.len(kind)).sum()
    }
}

/// Follows pagination for one kind, decoding records as it goes.
///
/// On error the records gathered so far are returned alongside the error, so
/// the caller can keep the partial collection.
async fn load_collection<T, S>(source: &S, kind: Kind) -> (Vec<T>, Option<FetchError>)
where
    T: DeserializeOwned,
    S: CatalogSource,
{
    let mut records = Vec::new();
    let mut cursor: Option<String> = None;

    loop {
        let page = match source.fetch_page(kind, cursor.as_deref()).await {
            Ok(page) => page,
            Err(err) => return (records, Some(err)),
        };

        for value in page.records {
            match serde_json::from_value(value) {
                Ok(record) => records.push(record),
                Err(err) => return (records, Some(FetchError::Decode(err))),
            }
        }

        match page.next {
            Some(next) => cursor = Some(next),
            None => return (records, None),
        }
    }
}
