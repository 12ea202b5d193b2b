//! Resolved response views.
//!
//! A view is a record with its cross-entity URL lists replaced by embedded
//! summaries of the referenced records (name for a person, title and director
//! for a film, and so on). [`Assembler`] performs that replacement over the
//! warm store through the reference index, so assembling a view never touches
//! the network.
//!
//! Resolution is lossy on purpose: a URL that is not in the index (upstream
//! data is not perfectly consistent) is dropped from the embedded list rather
//! than surfaced as an error or a placeholder.

use serde::Serialize;

use crate::index::ReferenceIndex;
use crate::model::{Film, Person, Planet, Species, Starship, Vehicle};
use crate::store::CatalogStore;

/// Embedded summary of a referenced person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonRef {
    pub name: String,
}

/// Embedded summary of a referenced film.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilmRef {
    pub title: String,
    pub director: String,
}

/// Embedded summary of a referenced planet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanetRef {
    pub name: String,
    pub population: String,
}

/// Embedded summary of a referenced species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpeciesRef {
    pub name: String,
    pub classification: String,
}

/// Embedded summary of a referenced vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VehicleRef {
    pub name: String,
    pub model: String,
}

/// Embedded summary of a referenced starship, with its pilots by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StarshipRef {
    pub name: String,
    pub model: String,
    pub pilots: Vec<String>,
}

/// A person with every reference resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonView {
    pub name: String,
    pub height: String,
    pub mass: String,
    pub hair_color: String,
    pub skin_color: String,
    pub eye_color: String,
    pub birth_year: String,
    pub gender: String,
    /// Name of the homeworld planet, when present and resolvable.
    pub homeworld: Option<String>,
    pub films: Vec<FilmRef>,
    pub species: Vec<SpeciesRef>,
    pub vehicles: Vec<VehicleRef>,
    pub starships: Vec<StarshipRef>,
    pub url: String,
}

/// A planet with its residents and films resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanetView {
    pub name: String,
    pub rotation_period: String,
    pub orbital_period: String,
    pub diameter: String,
    pub climate: String,
    pub gravity: String,
    pub terrain: String,
    pub surface_water: String,
    pub population: String,
    pub residents: Vec<PersonRef>,
    pub films: Vec<FilmRef>,
    pub url: String,
}

/// A film with all five reference lists resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilmView {
    pub title: String,
    pub episode_id: i64,
    pub opening_crawl: String,
    pub director: String,
    pub producer: String,
    pub release_date: String,
    pub characters: Vec<PersonRef>,
    pub planets: Vec<PlanetRef>,
    pub starships: Vec<StarshipRef>,
    pub vehicles: Vec<VehicleRef>,
    pub species: Vec<SpeciesRef>,
    pub url: String,
}

/// A starship with its pilots and films resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StarshipView {
    pub name: String,
    pub model: String,
    pub manufacturer: String,
    pub cost_in_credits: String,
    pub length: String,
    pub max_atmosphering_speed: String,
    pub crew: String,
    pub passengers: String,
    pub cargo_capacity: String,
    pub consumables: String,
    pub hyperdrive_rating: String,
    #[serde(rename = "MGLT")]
    pub mglt: String,
    pub starship_class: String,
    pub pilots: Vec<PersonRef>,
    pub films: Vec<FilmRef>,
    pub url: String,
}

/// A species with its members and films resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeciesView {
    pub name: String,
    pub classification: String,
    pub designation: String,
    pub average_height: String,
    pub skin_colors: String,
    pub hair_colors: String,
    pub eye_colors: String,
    pub average_lifespan: String,
    /// Name of the homeworld planet, when present and resolvable.
    pub homeworld: Option<String>,
    pub language: String,
    pub people: Vec<PersonRef>,
    pub films: Vec<FilmRef>,
    pub url: String,
}

/// A vehicle with its pilots and films resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleView {
    pub name: String,
    pub model: String,
    pub manufacturer: String,
    pub cost_in_credits: String,
    pub length: String,
    pub max_atmosphering_speed: String,
    pub crew: String,
    pub passengers: String,
    pub cargo_capacity: String,
    pub consumables: String,
    pub vehicle_class: String,
    pub pilots: Vec<PersonRef>,
    pub films: Vec<FilmRef>,
    pub url: String,
}

/// Resolves reference lists against one store snapshot.
///
/// Borrowing both the store and the index ties an assembler to the snapshot
/// the index was built from; the service constructs one per request batch.
#[derive(Debug, Clone, Copy)]
pub struct Assembler<'a> {
    store: &'a CatalogStore,
    index: &'a ReferenceIndex,
}

impl<'a> Assembler<'a> {
    pub fn new(store: &'a CatalogStore, index: &'a ReferenceIndex) -> Self {
        Self { store, index }
    }

    fn person_refs(&self, urls: &[String]) -> Vec<PersonRef> {
        urls.iter()
            .filter_map(|url| self.index.person(self.store, url))
            .map(|person| PersonRef {
                name: person.name.clone(),
            })
            .collect()
    }

    fn film_refs(&self, urls: &[String]) -> Vec<FilmRef> {
        urls.iter()
            .filter_map(|url| self.index.film(self.store, url))
            .map(|film| FilmRef {
                title: film.title.clone(),
                director: film.director.clone(),
            })
            .collect()
    }

    fn planet_refs(&self, urls: &[String]) -> Vec<PlanetRef> {
        urls.iter()
            .filter_map(|url| self.index.planet(self.store, url))
            .map(|planet| PlanetRef {
                name: planet.name.clone(),
                population: planet.population.clone(),
            })
            .collect()
    }

    fn species_refs(&self, urls: &[String]) -> Vec<SpeciesRef> {
        urls.iter()
            .filter_map(|url| self.index.species(self.store, url))
            .map(|species| SpeciesRef {
                name: species.name.clone(),
                classification: species.classification.clone(),
            })
            .collect()
    }

    fn vehicle_refs(&self, urls: &[String]) -> Vec<VehicleRef> {
        urls.iter()
            .filter_map(|url| self.index.vehicle(self.store, url))
            .map(|vehicle| VehicleRef {
                name: vehicle.name.clone(),
                model: vehicle.model.clone(),
            })
            .collect()
    }

    fn starship_refs(&self, urls: &[String]) -> Vec<StarshipRef> {
        urls.iter()
            .filter_map(|url| self.index.starship(self.store, url))
            .map(|ship| StarshipRef {
                name: ship.name.clone(),
                model: ship.model.clone(),
                pilots: ship
                    .pilots
                    .iter()
                    .filter_map(|url| self.index.person(self.store, url))
                    .map(|pilot| pilot.name.clone())
                    .collect(),
            })
            .collect()
    }

    fn planet_name(&self, url: Option<&String>) -> Option<String> {
        url.and_then(|url| self.index.planet(self.store, url))
            .map(|planet| planet.name.clone())
    }

    /// Assembles the resolved view of a person.
    pub fn person(&self, person: &Person) -> PersonView {
        PersonView {
            name: person.name.clone(),
            height: person.height.clone(),
            mass: person.mass.clone(),
            hair_color: person.hair_color.clone(),
            skin_color: person.skin_color.clone(),
            eye_color: person.eye_color.clone(),
            birth_year: person.birth_year.clone(),
            gender: person.gender.clone(),
            homeworld: self.planet_name(person.homeworld.as_ref()),
            films: self.film_refs(&person.films),
            species: self.species_refs(&person.species),
            vehicles: self.vehicle_refs(&person.vehicles),
            starships: self.starship_refs(&person.starships),
            url: person.url.clone(),
        }
    }

    /// Assembles the resolved view of a planet.
    pub fn planet(&self, planet: &Planet) -> PlanetView {
        PlanetView {
            name: planet.name.clone(),
            rotation_period: planet.rotation_period.clone(),
            orbital_period: planet.orbital_period.clone(),
            diameter: planet.diameter.clone(),
            climate: planet.climate.clone(),
            gravity: planet.gravity.clone(),
            terrain: planet.terrain.clone(),
            surface_water: planet.surface_water.clone(),
            population: planet.population.clone(),
            residents: self.person_refs(&planet.residents),
            films: self.film_refs(&planet.films),
            url: planet.url.clone(),
        }
    }

    /// Assembles the resolved view of a film.
    pub fn film(&self, film: &Film) -> FilmView {
        FilmView {
            title: film.title.clone(),
            episode_id: film.episode_id,
            opening_crawl: film.opening_crawl.clone(),
            director: film.director.clone(),
            producer: film.producer.clone(),
            release_date: film.release_date.clone(),
            characters: self.person_refs(&film.characters),
            planets: self.planet_refs(&film.planets),
            starships: self.starship_refs(&film.starships),
            vehicles: self.vehicle_refs(&film.vehicles),
            species: self.species_refs(&film.species),
            url: film.url.clone(),
        }
    }

    /// Assembles the resolved view of a starship.
    pub fn starship(&self, ship: &Starship) -> StarshipView {
        StarshipView {
            name: ship.name.clone(),
            model: ship.model.clone(),
            manufacturer: ship.manufacturer.clone(),
            cost_in_credits: ship.cost_in_credits.clone(),
            length: ship.length.clone(),
            max_atmosphering_speed: ship.max_atmosphering_speed.clone(),
            crew: ship.crew.clone(),
            passengers: ship.passengers.clone(),
            cargo_capacity: ship.cargo_capacity.clone(),
            consumables: ship.consumables.clone(),
            hyperdrive_rating: ship.hyperdrive_rating.clone(),
            mglt: ship.mglt.clone(),
            starship_class: ship.starship_class.clone(),
            pilots: self.person_refs(&ship.pilots),
            films: self.film_refs(&ship.films),
            url: ship.url.clone(),
        }
    }

    /// Assembles the resolved view of a species.
    pub fn species(&self, species: &Species) -> SpeciesView {
        SpeciesView {
            name: species.name.clone(),
            classification: species.classification.clone(),
            designation: species.designation.clone(),
            average_height: species.average_height.clone(),
            skin_colors: species.skin_colors.clone(),
            hair_colors: species.hair_colors.clone(),
            eye_colors: species.eye_colors.clone(),
            average_lifespan: species.average_lifespan.clone(),
            homeworld: self.planet_name(species.homeworld.as_ref()),
            language: species.language.clone(),
            people: self.person_refs(&species.people),
            films: self.film_refs(&species.films),
            url: species.url.clone(),
        }
    }

    /// Assembles the resolved view of a vehicle.
    pub fn vehicle(&self, vehicle: &Vehicle) -> VehicleView {
        VehicleView {
            name: vehicle.name.clone(),
            model: vehicle.model.clone(),
            manufacturer: vehicle.manufacturer.clone(),
            cost_in_credits: vehicle.cost_in_credits.clone(),
            length: vehicle.length.clone(),
            max_atmosphering_speed: vehicle.max_atmosphering_speed.clone(),
            crew: vehicle.crew.clone(),
            passengers: vehicle.passengers.clone(),
            cargo_capacity: vehicle.cargo_capacity.clone(),
            consumables: vehicle.consumables.clone(),
            vehicle_class: vehicle.vehicle_class.clone(),
            pilots: self.person_refs(&vehicle.pilots),
            films: self.film_refs(&vehicle.films),
            url: vehicle.url.clone(),
        }
    }
}
