//! Typed filter descriptors, one per catalog kind.
//!
//! Each descriptor is a fixed set of optional fields with a match policy
//! declared per field at construction time, replacing runtime field-name
//! lookup. `gender` and `birth_year` are exact-match fields (their value
//! spaces are closed enumerations where substring matching would collide,
//! e.g. `"male"` inside `"female"`); every other textual field matches by
//! case-insensitive substring.

use serde::Deserialize;

use crate::model::{Film, Person, Planet, Species, Starship, Vehicle};
use crate::query::{FilterSet, MatchPolicy};
use crate::stats::parse_numeric;

/// Absent constraints admit everything.
fn admits(wanted: &Option<String>, policy: MatchPolicy, value: &str) -> bool {
    match wanted {
        None => true,
        Some(wanted) => policy.admits(value, wanted),
    }
}

/// Field filters for person listings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PersonFilter {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub hair_color: Option<String>,
    pub eye_color: Option<String>,
    pub skin_color: Option<String>,
    pub birth_year: Option<String>,
}

impl FilterSet<Person> for PersonFilter {
    fn matches(&self, person: &Person) -> bool {
        admits(&self.name, MatchPolicy::Substring, &person.name)
            && admits(&self.gender, MatchPolicy::Exact, &person.gender)
            && admits(&self.hair_color, MatchPolicy::Substring, &person.hair_color)
            && admits(&self.eye_color, MatchPolicy::Substring, &person.eye_color)
            && admits(&self.skin_color, MatchPolicy::Substring, &person.skin_color)
            && admits(&self.birth_year, MatchPolicy::Exact, &person.birth_year)
    }
}

/// Field filters for planet listings.
///
/// `min_population` is a numeric threshold rather than a textual match:
/// planets whose population is a sentinel such as `"unknown"` never satisfy
/// it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlanetFilter {
    pub name: Option<String>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub min_population: Option<u64>,
}

impl FilterSet<Planet> for PlanetFilter {
    fn matches(&self, planet: &Planet) -> bool {
        admits(&self.name, MatchPolicy::Substring, &planet.name)
            && admits(&self.climate, MatchPolicy::Substring, &planet.climate)
            && admits(&self.terrain, MatchPolicy::Substring, &planet.terrain)
            && match self.min_population {
                None => true,
                Some(min) => parse_numeric(&planet.population).is_some_and(|p| p >= min),
            }
    }
}

/// Field filters for film listings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FilmFilter {
    pub title: Option<String>,
    pub director: Option<String>,
    pub producer: Option<String>,
    pub episode_id: Option<i64>,
    /// ISO date fragment, matched as a substring of the release date.
    pub release_date: Option<String>,
}

impl FilterSet<Film> for FilmFilter {
    fn matches(&self, film: &Film) -> bool {
        admits(&self.title, MatchPolicy::Substring, &film.title)
            && admits(&self.director, MatchPolicy::Substring, &film.director)
            && admits(&self.producer, MatchPolicy::Substring, &film.producer)
            && match self.episode_id {
                None => true,
                Some(id) => {
                    MatchPolicy::Substring.admits(&film.episode_id.to_string(), &id.to_string())
                }
            }
            && admits(&self.release_date, MatchPolicy::Substring, &film.release_date)
    }
}

/// Field filters for starship listings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StarshipFilter {
    pub name: Option<String>,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    pub starship_class: Option<String>,
}

impl FilterSet<Starship> for StarshipFilter {
    fn matches(&self, ship: &Starship) -> bool {
        admits(&self.name, MatchPolicy::Substring, &ship.name)
            && admits(&self.model, MatchPolicy::Substring, &ship.model)
            && admits(&self.manufacturer, MatchPolicy::Substring, &ship.manufacturer)
            && admits(&self.starship_class, MatchPolicy::Substring, &ship.starship_class)
    }
}

/// Field filters for species listings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SpeciesFilter {
    pub name: Option<String>,
    pub classification: Option<String>,
    pub designation: Option<String>,
    pub language: Option<String>,
}

impl FilterSet<Species> for SpeciesFilter {
    fn matches(&self, species: &Species) -> bool {
        admits(&self.name, MatchPolicy::Substring, &species.name)
            && admits(
                &self.classification,
                MatchPolicy::Substring,
                &species.classification,
            )
            && admits(
                &self.designation,
                MatchPolicy::Substring,
                &species.designation,
            )
            && admits(&self.language, MatchPolicy::Substring, &species.language)
    }
}

/// Field filters for vehicle listings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VehicleFilter {
    pub name: Option<String>,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    pub vehicle_class: Option<String>,
}

impl FilterSet<Vehicle> for VehicleFilter {
    fn matches(&self, vehicle: &Vehicle) -> bool {
        admits(&self.name, MatchPolicy::Substring, &vehicle.name)
            && admits(&self.model, MatchPolicy::Substring, &vehicle.model)
            && admits(
                &self.manufacturer,
                MatchPolicy::Substring,
                &vehicle.manufacturer,
            )
            && admits(
                &self.vehicle_class,
                MatchPolicy::Substring,
                &vehicle.vehicle_class,
            )
    }
}
