//! Typed records for the six catalog kinds.
//!
//! The upstream catalog delivers every attribute as text, even the numeric
//! ones (`height`, `mass`, `population`, …), and uses sentinel strings such as
//! `"unknown"` or `"n/a"` where no value exists. The record types here mirror
//! that shape faithfully: scalar attributes stay `String`, cross-entity links
//! stay `Vec<String>` of canonical URLs, and interpretation (numeric parsing,
//! reference resolution) happens downstream in [`stats`](crate::stats) and
//! [`view`](crate::view).
//!
//! Every field carries `#[serde(default)]` so a record with missing fields
//! decodes to empty values instead of failing the whole collection.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the six catalog resource kinds.
///
/// # Examples
///
/// ```
/// use holocron::model::Kind;
///
/// let kind: Kind = "starships".parse().unwrap();
/// assert_eq!(kind, Kind::Starships);
/// assert_eq!(kind.as_str(), "starships");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    People,
    Planets,
    Films,
    Starships,
    Species,
    Vehicles,
}

impl Kind {
    /// All six kinds, in warm-up order.
    pub const ALL: [Kind; 6] = [
        Kind::People,
        Kind::Planets,
        Kind::Films,
        Kind::Starships,
        Kind::Species,
        Kind::Vehicles,
    ];

    /// Returns the upstream resource path segment for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::People => "people",
            Self::Planets => "planets",
            Self::Films => "films",
            Self::Starships => "starships",
            Self::Species => "species",
            Self::Vehicles => "vehicles",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized resource kind name.
#[derive(Debug, Error)]
#[error("unknown resource kind: {0}")]
pub struct UnknownKind(pub String);

impl std::str::FromStr for Kind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "people" => Ok(Self::People),
            "planets" => Ok(Self::Planets),
            "films" => Ok(Self::Films),
            "starships" => Ok(Self::Starships),
            "species" => Ok(Self::Species),
            "vehicles" => Ok(Self::Vehicles),
            other => Err(UnknownKind(other.to_owned())),
        }
    }
}

/// Extracts the trailing integer segment of a canonical reference URL.
///
/// Canonical references end in a positive-integer path segment
/// (`…/people/4/`). References lacking a parseable trailing integer yield 0 —
/// deterministic, never an error — so they sort first under identity ordering
/// while keeping their original relative order.
///
/// # Examples
///
/// ```
/// use holocron::model::trailing_id;
///
/// assert_eq!(trailing_id("https://swapi.dev/api/people/4/"), 4);
/// assert_eq!(trailing_id("https://swapi.dev/api/people/4"), 4);
/// assert_eq!(trailing_id("not-a-reference"), 0);
/// ```
pub fn trailing_id(url: &str) -> u64 {
    url.rsplit('/')
        .find(|segment| !segment.is_empty())
        .and_then(|segment| segment.parse().ok())
        .unwrap_or(0)
}

/// A typed catalog record with a stable canonical identity.
///
/// Implemented by all six record types. `field` exposes scalar attributes by
/// name for the order-by stage; a name the record does not carry returns
/// `None`, which sorts as the empty string.
pub trait Entity {
    /// The kind this record belongs to.
    const KIND: Kind;

    /// The canonical reference URL — unique within the kind, stable for the
    /// process lifetime.
    fn url(&self) -> &str;

    /// Returns the named scalar attribute as text, or `None` when the record
    /// has no such field.
    fn field(&self, name: &str) -> Option<Cow<'_, str>>;
}

/// A person (character) record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Person {
    pub name: String,
    pub height: String,
    pub mass: String,
    pub hair_color: String,
    pub skin_color: String,
    pub eye_color: String,
    pub birth_year: String,
    pub gender: String,
    /// Canonical URL of the homeworld planet, when the upstream data has one.
    pub homeworld: Option<String>,
    pub films: Vec<String>,
    pub species: Vec<String>,
    pub vehicles: Vec<String>,
    pub starships: Vec<String>,
    pub url: String,
}

impl Entity for Person {
    const KIND: Kind = Kind::People;

    fn url(&self) -> &str {
        &self.url
    }

    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        let value = match name {
            "name" => &self.name,
            "height" => &self.height,
            "mass" => &self.mass,
            "hair_color" => &self.hair_color,
            "skin_color" => &self.skin_color,
            "eye_color" => &self.eye_color,
            "birth_year" => &self.birth_year,
            "gender" => &self.gender,
            _ => return None,
        };
        Some(Cow::Borrowed(value))
    }
}

/// A planet record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Planet {
    pub name: String,
    pub rotation_period: String,
    pub orbital_period: String,
    pub diameter: String,
    pub climate: String,
    pub gravity: String,
    pub terrain: String,
    pub surface_water: String,
    pub population: String,
    pub residents: Vec<String>,
    pub films: Vec<String>,
    pub url: String,
}

impl Entity for Planet {
    const KIND: Kind = Kind::Planets;

    fn url(&self) -> &str {
        &self.url
    }

    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        let value = match name {
            "name" => &self.name,
            "rotation_period" => &self.rotation_period,
            "orbital_period" => &self.orbital_period,
            "diameter" => &self.diameter,
            "climate" => &self.climate,
            "gravity" => &self.gravity,
            "terrain" => &self.terrain,
            "surface_water" => &self.surface_water,
            "population" => &self.population,
            _ => return None,
        };
        Some(Cow::Borrowed(value))
    }
}

/// A film record.
///
/// `episode_id` is the one attribute the upstream catalog types as a real
/// number rather than text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Film {
    pub title: String,
    pub episode_id: i64,
    pub opening_crawl: String,
    pub director: String,
    pub producer: String,
    pub release_date: String,
    pub characters: Vec<String>,
    pub planets: Vec<String>,
    pub starships: Vec<String>,
    pub vehicles: Vec<String>,
    pub species: Vec<String>,
    pub url: String,
}

impl Entity for Film {
    const KIND: Kind = Kind::Films;

    fn url(&self) -> &str {
        &self.url
    }

    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        let value = match name {
            "title" => &self.title,
            "episode_id" => return Some(Cow::Owned(self.episode_id.to_string())),
            "opening_crawl" => &self.opening_crawl,
            "director" => &self.director,
            "producer" => &self.producer,
            "release_date" => &self.release_date,
            _ => return None,
        };
        Some(Cow::Borrowed(value))
    }
}

/// A starship record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Starship {
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
    pub pilots: Vec<String>,
    pub films: Vec<String>,
    pub url: String,
}

impl Entity for Starship {
    const KIND: Kind = Kind::Starships;

    fn url(&self) -> &str {
        &self.url
    }

    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        let value = match name {
            "name" => &self.name,
            "model" => &self.model,
            "manufacturer" => &self.manufacturer,
            "cost_in_credits" => &self.cost_in_credits,
            "length" => &self.length,
            "max_atmosphering_speed" => &self.max_atmosphering_speed,
            "crew" => &self.crew,
            "passengers" => &self.passengers,
            "cargo_capacity" => &self.cargo_capacity,
            "consumables" => &self.consumables,
            "hyperdrive_rating" => &self.hyperdrive_rating,
            "MGLT" | "mglt" => &self.mglt,
            "starship_class" => &self.starship_class,
            _ => return None,
        };
        Some(Cow::Borrowed(value))
    }
}

/// A species record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Species {
    pub name: String,
    pub classification: String,
    pub designation: String,
    pub average_height: String,
    pub skin_colors: String,
    pub hair_colors: String,
    pub eye_colors: String,
    pub average_lifespan: String,
    /// Canonical URL of the homeworld planet; null upstream for some species.
    pub homeworld: Option<String>,
    pub language: String,
    pub people: Vec<String>,
    pub films: Vec<String>,
    pub url: String,
}

impl Entity for Species {
    const KIND: Kind = Kind::Species;

    fn url(&self) -> &str {
        &self.url
    }

    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        let value = match name {
            "name" => &self.name,
            "classification" => &self.classification,
            "designation" => &self.designation,
            "average_height" => &self.average_height,
            "skin_colors" => &self.skin_colors,
            "hair_colors" => &self.hair_colors,
            "eye_colors" => &self.eye_colors,
            "average_lifespan" => &self.average_lifespan,
            "language" => &self.language,
            _ => return None,
        };
        Some(Cow::Borrowed(value))
    }
}

/// A vehicle record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vehicle {
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
    pub pilots: Vec<String>,
    pub films: Vec<String>,
    pub url: String,
}

impl Entity for Vehicle {
    const KIND: Kind = Kind::Vehicles;

    fn url(&self) -> &str {
        &self.url
    }

    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        let value = match name {
            "name" => &self.name,
            "model" => &self.model,
            "manufacturer" => &self.manufacturer,
            "cost_in_credits" => &self.cost_in_credits,
            "length" => &self.length,
            "max_atmosphering_speed" => &self.max_atmosphering_speed,
            "crew" => &self.crew,
            "passengers" => &self.passengers,
            "cargo_capacity" => &self.cargo_capacity,
            "consumables" => &self.consumables,
            "vehicle_class" => &self.vehicle_class,
            _ => return None,
        };
        Some(Cow::Borrowed(value))
    }
}

/// A record of any kind, for surfaces where the kind is chosen at runtime
/// (by-id lookups, free-text search).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Record {
    Person(Person),
    Planet(Planet),
    Film(Film),
    Starship(Starship),
    Species(Species),
    Vehicle(Vehicle),
}

impl Record {
    /// Decodes a raw upstream JSON value into the typed record for `kind`.
    pub fn decode(kind: Kind, value: serde_json::Value) -> Result<Self, serde_json::Error> {
        Ok(match kind {
            Kind::People => Self::Person(serde_json::from_value(value)?),
            Kind::Planets => Self::Planet(serde_json::from_value(value)?),
            Kind::Films => Self::Film(serde_json::from_value(value)?),
            Kind::Starships => Self::Starship(serde_json::from_value(value)?),
            Kind::Species => Self::Species(serde_json::from_value(value)?),
            Kind::Vehicles => Self::Vehicle(serde_json::from_value(value)?),
        })
    }

    /// The canonical reference URL of the wrapped record.
    pub fn url(&self) -> &str {
        match self {
            Self::Person(r) => &r.url,
            Self::Planet(r) => &r.url,
            Self::Film(r) => &r.url,
            Self::Starship(r) => &r.url,
            Self::Species(r) => &r.url,
            Self::Vehicle(r) => &r.url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kind_round_trips_through_str() {
        for kind in Kind::ALL {
            assert_eq!(kind.as_str().parse::<Kind>().unwrap(), kind);
        }
    }

    #[test]
    fn kind_rejects_unknown_name() {
        assert!("droids".parse::<Kind>().is_err());
    }

    #[test]
    fn trailing_id_with_and_without_slash() {
        assert_eq!(trailing_id("https://swapi.dev/api/planets/12/"), 12);
        assert_eq!(trailing_id("https://swapi.dev/api/planets/12"), 12);
    }

    #[test]
    fn trailing_id_defaults_to_zero() {
        assert_eq!(trailing_id(""), 0);
        assert_eq!(trailing_id("https://swapi.dev/api/planets/tatooine/"), 0);
    }

    #[test]
    fn person_decodes_with_missing_fields() {
        let person: Person = serde_json::from_value(json!({
            "name": "Luke Skywalker",
            "url": "https://swapi.dev/api/people/1/"
        }))
        .unwrap();

        assert_eq!(person.name, "Luke Skywalker");
        assert_eq!(person.height, "");
        assert!(person.homeworld.is_none());
        assert!(person.films.is_empty());
    }

    #[test]
    fn starship_mglt_uses_upstream_casing() {
        let ship: Starship = serde_json::from_value(json!({
            "name": "X-wing",
            "MGLT": "100",
            "url": "https://swapi.dev/api/starships/12/"
        }))
        .unwrap();

        assert_eq!(ship.mglt, "100");
        assert_eq!(ship.field("MGLT").unwrap(), "100");
    }

    #[test]
    fn entity_field_unknown_name_is_none() {
        let planet = Planet::default();
        assert!(planet.field("no_such_field").is_none());
    }

    #[test]
    fn film_episode_id_exposed_as_text_field() {
        let film = Film {
            episode_id: 4,
            ..Film::default()
        };
        assert_eq!(film.field("episode_id").unwrap(), "4");
    }

    #[test]
    fn record_decode_dispatches_on_kind() {
        let record = Record::decode(
            Kind::Planets,
            json!({"name": "Hoth", "url": "https://swapi.dev/api/planets/4/"}),
        )
        .unwrap();

        match record {
            Record::Planet(p) => assert_eq!(p.name, "Hoth"),
            other => panic!("expected a planet, got {other:?}"),
        }
    }
}
