//! Shared test data: a small internally-consistent galaxy.
//!
//! The fixture deliberately includes one dangling reference per flavor (a
//! film character and a starship pilot that no record carries) and one
//! sentinel population, so resolution and aggregation edge cases are covered
//! by the same data set.

use crate::model::{Film, Person, Planet, Species, Starship, Vehicle};
use crate::store::CatalogStore;

fn url(kind: &str, id: u64) -> String {
    format!("https://swapi.dev/api/{kind}/{id}/")
}

/// A warm store holding two films, four people, three planets, one starship,
/// one species, and one vehicle.
pub(crate) fn fixture_store() -> CatalogStore {
    let people = vec![
        Person {
            name: "Luke Skywalker".to_owned(),
            height: "172".to_owned(),
            mass: "77".to_owned(),
            hair_color: "blond".to_owned(),
            eye_color: "blue".to_owned(),
            birth_year: "19BBY".to_owned(),
            gender: "male".to_owned(),
            homeworld: Some(url("planets", 1)),
            films: vec![url("films", 1), url("films", 2)],
            vehicles: vec![url("vehicles", 14)],
            starships: vec![url("starships", 12)],
            url: url("people", 1),
            ..Person::default()
        },
        Person {
            name: "Leia Organa".to_owned(),
            height: "150".to_owned(),
            mass: "49".to_owned(),
            birth_year: "19BBY".to_owned(),
            gender: "female".to_owned(),
            homeworld: Some(url("planets", 2)),
            films: vec![url("films", 1)],
            url: url("people", 5),
            ..Person::default()
        },
        Person {
            name: "R2-D2".to_owned(),
            height: "96".to_owned(),
            mass: "32".to_owned(),
            gender: "n/a".to_owned(),
            homeworld: None,
            films: vec![url("films", 1)],
            species: vec![url("species", 2)],
            url: url("people", 3),
            ..Person::default()
        },
        Person {
            name: "Han Solo".to_owned(),
            height: "180".to_owned(),
            mass: "80".to_owned(),
            gender: "male".to_owned(),
            homeworld: Some(url("planets", 4)),
            films: vec![url("films", 2)],
            url: url("people", 14),
            ..Person::default()
        },
    ];

    let planets = vec![
        Planet {
            name: "Tatooine".to_owned(),
            climate: "arid".to_owned(),
            terrain: "desert".to_owned(),
            population: "200000".to_owned(),
            residents: vec![url("people", 1)],
            films: vec![url("films", 1)],
            url: url("planets", 1),
            ..Planet::default()
        },
        Planet {
            name: "Alderaan".to_owned(),
            climate: "temperate".to_owned(),
            terrain: "grasslands, mountains".to_owned(),
            population: "2000000000".to_owned(),
            residents: vec![url("people", 5)],
            films: vec![url("films", 1)],
            url: url("planets", 2),
            ..Planet::default()
        },
        Planet {
            name: "Hoth".to_owned(),
            climate: "frozen".to_owned(),
            terrain: "tundra, ice caves".to_owned(),
            population: "unknown".to_owned(),
            films: vec![url("films", 2)],
            url: url("planets", 4),
            ..Planet::default()
        },
    ];

    let films = vec![
        Film {
            title: "A New Hope".to_owned(),
            episode_id: 4,
            director: "George Lucas".to_owned(),
            producer: "Gary Kurtz, Rick McCallum".to_owned(),
            release_date: "1977-05-25".to_owned(),
            characters: vec![
                url("people", 1),
                url("people", 5),
                url("people", 3),
                // Dangling: no such person record in the fixture.
                url("people", 99),
            ],
            planets: vec![url("planets", 1), url("planets", 2)],
            starships: vec![url("starships", 12)],
            vehicles: vec![url("vehicles", 14)],
            species: vec![url("species", 2)],
            url: url("films", 1),
            ..Film::default()
        },
        Film {
            title: "The Empire Strikes Back".to_owned(),
            episode_id: 5,
            director: "Irvin Kershner".to_owned(),
            producer: "Gary Kurtz, Rick McCallum".to_owned(),
            release_date: "1980-05-17".to_owned(),
            characters: vec![url("people", 1), url("people", 14)],
            planets: vec![url("planets", 4)],
            vehicles: vec![url("vehicles", 14)],
            url: url("films", 2),
            ..Film::default()
        },
    ];

    let starships = vec![Starship {
        name: "X-wing".to_owned(),
        model: "T-65 X-wing".to_owned(),
        manufacturer: "Incom Corporation".to_owned(),
        starship_class: "Starfighter".to_owned(),
        pilots: vec![url("people", 1), url("people", 9)],
        films: vec![url("films", 1)],
        url: url("starships", 12),
        ..Starship::default()
    }];

    let species = vec![Species {
        name: "Droid".to_owned(),
        classification: "artificial".to_owned(),
        designation: "sentient".to_owned(),
        language: "n/a".to_owned(),
        people: vec![url("people", 3)],
        films: vec![url("films", 1)],
        url: url("species", 2),
        ..Species::default()
    }];

    let vehicles = vec![Vehicle {
        name: "Snowspeeder".to_owned(),
        model: "t-47 airspeeder".to_owned(),
        manufacturer: "Incom corporation".to_owned(),
        vehicle_class: "airspeeder".to_owned(),
        pilots: vec![url("people", 1)],
        films: vec![url("films", 2)],
        url: url("vehicles", 14),
        ..Vehicle::default()
    }];

    CatalogStore::from_parts(people, planets, films, starships, species, vehicles)
}
