//! The catalog query service.
//!
//! [`Holocron`] owns the upstream source, the warm store, and the reference
//! index, and exposes every read operation: per-kind listings with filtering,
//! ordering, and pagination, by-id lookup, free-text search, and the
//! statistics reductions. All listing and statistics traffic is served from
//! memory; the only post-warm-up network access is the by-id fallback for
//! records the warm store does not hold.

use tracing::{debug, info};

use crate::index::ReferenceIndex;
use crate::model::{Entity, Kind, Record, trailing_id};
use crate::query::filters::{
    FilmFilter, PersonFilter, PlanetFilter, SpeciesFilter, StarshipFilter, VehicleFilter,
};
use crate::query::{ListOptions, MAX_PAGE_SIZE, MatchPolicy, Paginated, narrow, order, paginate};
use crate::source::{CatalogSource, FetchError};
use crate::stats::{
    self, CharacterAppearances, FieldStatistics, FilmReferenceCounts, GenderBucket, GenderCount,
    PopulationStatistics, ResidentCount, TopPlanetsByPopulation,
};
use crate::store::{CatalogStore, WarmUpReport};
use crate::view::{
    Assembler, FilmView, PersonView, PlanetView, SpeciesView, StarshipView, VehicleView,
};

/// Runs one listing pipeline stage-by-stage and wraps the page.
macro_rules! listing {
    ($self:ident, $records:expr, $filter:expr, $options:expr, $assemble:ident) => {{
        let (page, page_size) = clamp_page($options);
        let matched = narrow($records, $filter);
        let ordered = order(matched, &$options.order_by, $options.order_dir);
        let (total, slice) = paginate(ordered, page, page_size);

        let assembler = $self.assembler();
        Paginated {
            page,
            page_size,
            total,
            results: slice
                .into_iter()
                .map(|record| assembler.$assemble(record))
                .collect(),
        }
    }};
}

fn clamp_page(options: &ListOptions) -> (usize, usize) {
    (options.page.max(1), options.page_size.clamp(1, MAX_PAGE_SIZE))
}

/// The warm catalog service.
///
/// # Examples
///
/// ```rust,no_run
/// use holocron::query::ListOptions;
/// use holocron::query::filters::PersonFilter;
/// use holocron::service::Holocron;
/// use holocron::source::SwapiClient;
///
/// # async fn example() {
/// let (service, report) = Holocron::warm_up(SwapiClient::new()).await;
/// assert!(report.is_complete());
///
/// let filter = PersonFilter {
///     name: Some("sky".to_owned()),
///     ..PersonFilter::default()
/// };
/// let page = service.list_people(&filter, &ListOptions::default());
/// # }
/// ```
#[derive(Debug)]
pub struct Holocron<S> {
    source: S,
    store: CatalogStore,
    index: ReferenceIndex,
}

impl<S: CatalogSource> Holocron<S> {
    /// Populates the store from `source` and builds the reference index.
    ///
    /// The service is usable even when the report carries failures; kinds
    /// that failed to populate simply list as empty.
    pub async fn warm_up(source: S) -> (Self, WarmUpReport) {
        let mut store = CatalogStore::new();
        let report = store.warm_up(&source).await;
        let index = ReferenceIndex::build(&store);
        info!(records = store.total(), "catalog service ready");

        (
            Self {
                source,
                store,
                index,
            },
            report,
        )
    }

    /// Wraps an already-populated store. The index is built here.
    #[cfg(test)]
    pub(crate) fn with_store(source: S, store: CatalogStore) -> Self {
        let index = ReferenceIndex::build(&store);
        Self {
            source,
            store,
            index,
        }
    }

    /// The warm store, for callers that need raw records.
    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    fn assembler(&self) -> Assembler<'_> {
        Assembler::new(&self.store, &self.index)
    }

    // ── Listings ──────────────────────────────────────────────────────────────

    /// Lists people: filter, order, paginate, resolve references.
    pub fn list_people(&self, filter: &PersonFilter, options: &ListOptions) -> Paginated<PersonView> {
        listing!(self, self.store.people(), filter, options, person)
    }

    /// Lists planets.
    pub fn list_planets(&self, filter: &PlanetFilter, options: &ListOptions) -> Paginated<PlanetView> {
        listing!(self, self.store.planets(), filter, options, planet)
    }

    /// Lists films.
    pub fn list_films(&self, filter: &FilmFilter, options: &ListOptions) -> Paginated<FilmView> {
        listing!(self, self.store.films(), filter, options, film)
    }

    /// Lists starships.
    pub fn list_starships(
        &self,
        filter: &StarshipFilter,
        options: &ListOptions,
    ) -> Paginated<StarshipView> {
        listing!(self, self.store.starships(), filter, options, starship)
    }

    /// Lists species.
    pub fn list_species(
        &self,
        filter: &SpeciesFilter,
        options: &ListOptions,
    ) -> Paginated<SpeciesView> {
        listing!(self, self.store.species(), filter, options, species)
    }

    /// Lists vehicles.
    pub fn list_vehicles(
        &self,
        filter: &VehicleFilter,
        options: &ListOptions,
    ) -> Paginated<VehicleView> {
        listing!(self, self.store.vehicles(), filter, options, vehicle)
    }

    // ── Lookup and search ─────────────────────────────────────────────────────

    /// Fetches one record by kind and numeric identity.
    ///
    /// The warm store is consulted first (matching on the trailing integer of
    /// each record's canonical URL); only a store miss reaches upstream, so a
    /// fully warm catalog answers without network traffic.
    ///
    /// # Errors
    ///
    /// [`FetchError::NotFound`] when neither the store nor upstream has the
    /// record, or any transport/decode error from the fallback fetch.
    pub async fn record_by_id(&self, kind: Kind, id: u64) -> Result<Record, FetchError> {
        if let Some(record) = self.warm_record(kind, id) {
            return Ok(record);
        }

        debug!(%kind, id, "store miss, fetching single record upstream");
        let value = self.source.fetch_single(kind, id).await?;
        Ok(Record::decode(kind, value)?)
    }

    fn warm_record(&self, kind: Kind, id: u64) -> Option<Record> {
        fn scan<T: Entity + Clone>(records: &[T], id: u64, wrap: fn(T) -> Record) -> Option<Record> {
            records
                .iter()
                .find(|record| trailing_id(record.url()) == id)
                .map(|record| wrap(record.clone()))
        }

        match kind {
            Kind::People => scan(self.store.people(), id, Record::Person),
            Kind::Planets => scan(self.store.planets(), id, Record::Planet),
            Kind::Films => scan(self.store.films(), id, Record::Film),
            Kind::Starships => scan(self.store.starships(), id, Record::Starship),
            Kind::Species => scan(self.store.species(), id, Record::Species),
            Kind::Vehicles => scan(self.store.vehicles(), id, Record::Vehicle),
        }
    }

    /// Free-text search within one kind.
    ///
    /// Matches case-insensitively on the display field: `title` for films,
    /// `name` for everything else. Results keep upstream order.
    pub fn search(&self, kind: Kind, term: &str) -> Vec<Record> {
        fn matching<T: Clone>(
            records: &[T],
            term: &str,
            display: fn(&T) -> &str,
            wrap: fn(T) -> Record,
        ) -> Vec<Record> {
            records
                .iter()
                .filter(|record| MatchPolicy::Substring.admits(display(record), term))
                .map(|record| wrap(record.clone()))
                .collect()
        }

        match kind {
            Kind::People => matching(self.store.people(), term, |p| &p.name, Record::Person),
            Kind::Planets => matching(self.store.planets(), term, |p| &p.name, Record::Planet),
            Kind::Films => matching(self.store.films(), term, |f| &f.title, Record::Film),
            Kind::Starships => {
                matching(self.store.starships(), term, |s| &s.name, Record::Starship)
            }
            Kind::Species => matching(self.store.species(), term, |s| &s.name, Record::Species),
            Kind::Vehicles => {
                matching(self.store.vehicles(), term, |v| &v.name, Record::Vehicle)
            }
        }
    }

    // ── Statistics ────────────────────────────────────────────────────────────

    /// Gender breakdown of the people collection.
    pub fn gender_count(&self) -> GenderCount {
        stats::gender_count(self.store.people())
    }

    /// Height statistics, optionally restricted to a gender bucket.
    pub fn height_statistics(&self, gender: Option<GenderBucket>) -> FieldStatistics {
        stats::person_field_statistics(self.store.people(), gender, |p| &p.height)
    }

    /// Mass statistics, optionally restricted to a gender bucket.
    pub fn mass_statistics(&self, gender: Option<GenderBucket>) -> FieldStatistics {
        stats::person_field_statistics(self.store.people(), gender, |p| &p.mass)
    }

    /// Aggregate population figures over all planets.
    pub fn population_statistics(&self) -> PopulationStatistics {
        stats::population_statistics(self.store.planets())
    }

    /// Planets ranked by population, non-numeric populations listed apart.
    pub fn top_planets_by_population(&self) -> TopPlanetsByPopulation {
        stats::top_by_population(self.store.planets())
    }

    /// Planets ranked by resident count.
    pub fn top_planets_by_residents(&self) -> Vec<ResidentCount> {
        stats::top_by_residents(self.store.planets())
    }

    /// Reference-list counts for every film.
    pub fn film_reference_counts(&self) -> Vec<FilmReferenceCounts> {
        stats::film_reference_counts(self.store.films())
    }

    /// Films each matching character appears in, matched by name fragment.
    pub fn character_appearances(&self, name: &str) -> Vec<CharacterAppearances> {
        let matched: Vec<_> = self
            .store
            .people()
            .iter()
            .filter(|person| MatchPolicy::Substring.admits(&person.name, name))
            .collect();
        stats::appearances(&matched, self.store.films())
    }
}
