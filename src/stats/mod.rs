//! Read-only statistical reductions over catalog collections.
//!
//! Upstream numeric fields are text and may hold sentinel values such as
//! `"unknown"`. Aggregation never coerces those: a value either parses as a
//! plain unsigned integer and joins the numeric sample, or it is excluded.
//! Every aggregator is total on empty input (zero counts, zero summaries,
//! empty top lists) rather than raising.

use serde::{Deserialize, Serialize};

use crate::model::{Film, Person, Planet};
use crate::view::FilmRef;

/// Parses a catalog numeric field, tagging sentinel text as non-numeric.
///
/// Digits-only semantics: `"200000"` parses, while `"unknown"`, `"n/a"`,
/// `"1,358"` and `"1.5"` are all excluded from numeric samples.
///
/// # Examples
///
/// ```
/// use holocron::stats::parse_numeric;
///
/// assert_eq!(parse_numeric("172"), Some(172));
/// assert_eq!(parse_numeric("unknown"), None);
/// assert_eq!(parse_numeric("1,358"), None);
/// ```
pub fn parse_numeric(value: &str) -> Option<u64> {
    if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
        value.parse().ok()
    } else {
        None
    }
}

/// Average, minimum, and maximum over the numeric subset of a field.
///
/// `count` is the size of the numeric sample, not of the input collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct NumericSummary {
    pub count: usize,
    pub avg: f64,
    pub min: u64,
    pub max: u64,
}

/// Summarizes the numeric subset of a string-typed field.
///
/// Non-numeric values are excluded from the sample, never coerced to zero.
/// An empty sample yields the all-zero summary.
pub fn numeric_summary<'a>(values: impl IntoIterator<Item = &'a str>) -> NumericSummary {
    let sample: Vec<u64> = values.into_iter().filter_map(parse_numeric).collect();
    if sample.is_empty() {
        return NumericSummary::default();
    }

    let sum: u64 = sample.iter().sum();
    NumericSummary {
        count: sample.len(),
        avg: sum as f64 / sample.len() as f64,
        min: *sample.iter().min().unwrap_or(&0),
        max: *sample.iter().max().unwrap_or(&0),
    }
}

/// A gender category for statistics selection.
///
/// `Other` covers every record whose gender is neither `"male"` nor
/// `"female"` (droids report `"n/a"`, some records report `"none"` or
/// nothing at all).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenderBucket {
    Male,
    Female,
    Other,
}

impl GenderBucket {
    /// Returns `true` when `gender` falls into this bucket
    /// (case-insensitive).
    pub fn contains(self, gender: &str) -> bool {
        let gender = gender.to_lowercase();
        match self {
            Self::Male => gender == "male",
            Self::Female => gender == "female",
            Self::Other => gender != "male" && gender != "female",
        }
    }
}

/// Population of the people collection broken down by gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenderCount {
    pub male_count: usize,
    pub female_count: usize,
    pub total: usize,
    pub no_gender_specified: usize,
}

/// Counts people per gender bucket. Empty input yields all zeros.
pub fn gender_count(people: &[Person]) -> GenderCount {
    let male_count = people
        .iter()
        .filter(|p| GenderBucket::Male.contains(&p.gender))
        .count();
    let female_count = people
        .iter()
        .filter(|p| GenderBucket::Female.contains(&p.gender))
        .count();
    let total = people.len();

    GenderCount {
        male_count,
        female_count,
        total,
        no_gender_specified: total - male_count - female_count,
    }
}

/// Numeric summary of one person field, optionally restricted to a gender
/// bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldStatistics {
    pub gender: Option<GenderBucket>,
    pub count_total: usize,
    pub avg: f64,
    pub min: u64,
    pub max: u64,
}

/// Summarizes a person field (by accessor) over an optional gender bucket.
pub fn person_field_statistics(
    people: &[Person],
    gender: Option<GenderBucket>,
    field: fn(&Person) -> &str,
) -> FieldStatistics {
    let summary = numeric_summary(
        people
            .iter()
            .filter(|p| gender.is_none_or(|bucket| bucket.contains(&p.gender)))
            .map(field),
    );

    FieldStatistics {
        gender,
        count_total: summary.count,
        avg: summary.avg,
        min: summary.min,
        max: summary.max,
    }
}

/// Aggregate population figures over the planet collection.
///
/// A planet with a non-numeric population counts as not inhabited; a planet
/// with population `"0"` also counts as not inhabited but still joins the
/// numeric sample for the average and extrema.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PopulationStatistics {
    pub total_planets: usize,
    pub inhabited: usize,
    pub not_inhabited: usize,
    pub avg_population: f64,
    pub max_population: u64,
    pub min_population: u64,
}

/// Computes population statistics. Empty input yields all zeros.
pub fn population_statistics(planets: &[Planet]) -> PopulationStatistics {
    let mut populations = Vec::new();
    let mut inhabited = 0;
    let mut not_inhabited = 0;

    for planet in planets {
        match parse_numeric(&planet.population) {
            Some(value) => {
                populations.push(value);
                if value > 0 {
                    inhabited += 1;
                } else {
                    not_inhabited += 1;
                }
            }
            None => not_inhabited += 1,
        }
    }

    let avg_population = if populations.is_empty() {
        0.0
    } else {
        populations.iter().sum::<u64>() as f64 / populations.len() as f64
    };

    PopulationStatistics {
        total_planets: planets.len(),
        inhabited,
        not_inhabited,
        avg_population,
        max_population: populations.iter().max().copied().unwrap_or(0),
        min_population: populations.iter().min().copied().unwrap_or(0),
    }
}

/// A planet with a numeric population figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanetPopulation {
    pub name: String,
    pub population: u64,
}

/// A planet whose population is a sentinel value, reported verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnchartedPlanet {
    pub name: String,
    pub population: String,
}

/// Planets ranked by population, with the non-numeric leftovers listed
/// separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopPlanetsByPopulation {
    pub with_population: Vec<PlanetPopulation>,
    pub without_population: Vec<UnchartedPlanet>,
}

/// Ranks planets by numeric population, descending. Ties and the
/// non-numeric leftovers keep upstream order.
pub fn top_by_population(planets: &[Planet]) -> TopPlanetsByPopulation {
    let mut with_population = Vec::new();
    let mut without_population = Vec::new();

    for planet in planets {
        match parse_numeric(&planet.population) {
            Some(population) => with_population.push(PlanetPopulation {
                name: planet.name.clone(),
                population,
            }),
            None => without_population.push(UnchartedPlanet {
                name: planet.name.clone(),
                population: planet.population.clone(),
            }),
        }
    }

    with_population.sort_by(|a, b| b.population.cmp(&a.population));

    TopPlanetsByPopulation {
        with_population,
        without_population,
    }
}

/// A planet with its resident count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResidentCount {
    pub name: String,
    pub residents_count: usize,
}

/// Ranks planets by number of resident references, descending.
pub fn top_by_residents(planets: &[Planet]) -> Vec<ResidentCount> {
    let mut ranked: Vec<ResidentCount> = planets
        .iter()
        .map(|planet| ResidentCount {
            name: planet.name.clone(),
            residents_count: planet.residents.len(),
        })
        .collect();

    ranked.sort_by(|a, b| b.residents_count.cmp(&a.residents_count));
    ranked
}

/// Per-film counts of each reference list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilmReferenceCounts {
    pub title: String,
    pub characters_count: usize,
    pub planets_count: usize,
    pub starships_count: usize,
    pub vehicles_count: usize,
    pub species_count: usize,
}

/// Counts the reference lists of every film, in upstream order.
pub fn film_reference_counts(films: &[Film]) -> Vec<FilmReferenceCounts> {
    films
        .iter()
        .map(|film| FilmReferenceCounts {
            title: film.title.clone(),
            characters_count: film.characters.len(),
            planets_count: film.planets.len(),
            starships_count: film.starships.len(),
            vehicles_count: film.vehicles.len(),
            species_count: film.species.len(),
        })
        .collect()
}

/// A person together with the films whose character lists reference them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterAppearances {
    pub name: String,
    pub movies: Vec<FilmRef>,
}

/// Reverse cross-reference: for each given person, the films that list the
/// person's canonical URL among their characters.
pub fn appearances(people: &[&Person], films: &[Film]) -> Vec<CharacterAppearances> {
    people
        .iter()
        .map(|person| CharacterAppearances {
            name: person.name.clone(),
            movies: films
                .iter()
                .filter(|film| film.characters.iter().any(|url| *url == person.url))
                .map(|film| FilmRef {
                    title: film.title.clone(),
                    director: film.director.clone(),
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(gender: &str, height: &str) -> Person {
        Person {
            gender: gender.to_owned(),
            height: height.to_owned(),
            ..Person::default()
        }
    }

    fn planet(name: &str, population: &str, residents: usize) -> Planet {
        Planet {
            name: name.to_owned(),
            population: population.to_owned(),
            residents: (0..residents)
                .map(|i| format!("https://swapi.dev/api/people/{i}/"))
                .collect(),
            ..Planet::default()
        }
    }

    // ── parse_numeric / numeric_summary ───────────────────────────────────────

    #[test]
    fn sentinel_values_are_excluded_not_coerced() {
        // 3 of 5 values are non-numeric; the summary covers exactly the
        // remaining 2.
        let summary = numeric_summary(["unknown", "172", "n/a", "none", "180"]);
        assert_eq!(summary.count, 2);
        assert_eq!(summary.avg, 176.0);
        assert_eq!(summary.min, 172);
        assert_eq!(summary.max, 180);
    }

    #[test]
    fn empty_sample_summarizes_to_zeros() {
        let summary = numeric_summary(["unknown", "n/a"]);
        assert_eq!(summary, NumericSummary::default());
    }

    #[test]
    fn decimals_and_thousand_separators_are_not_numeric() {
        assert_eq!(parse_numeric("1.82"), None);
        assert_eq!(parse_numeric("1,358"), None);
        assert_eq!(parse_numeric("-5"), None);
    }

    // ── gender ────────────────────────────────────────────────────────────────

    #[test]
    fn gender_count_partitions_people() {
        let people = vec![
            person("male", "172"),
            person("female", "150"),
            person("n/a", "167"),
            person("male", "180"),
        ];
        let counts = gender_count(&people);
        assert_eq!(counts.male_count, 2);
        assert_eq!(counts.female_count, 1);
        assert_eq!(counts.total, 4);
        assert_eq!(counts.no_gender_specified, 1);
    }

    #[test]
    fn other_bucket_catches_unspecified_genders() {
        assert!(GenderBucket::Other.contains("n/a"));
        assert!(GenderBucket::Other.contains("none"));
        assert!(GenderBucket::Other.contains(""));
        assert!(!GenderBucket::Other.contains("Male"));
    }

    #[test]
    fn field_statistics_respect_gender_bucket() {
        let people = vec![
            person("male", "172"),
            person("male", "unknown"),
            person("female", "150"),
        ];
        let stats = person_field_statistics(&people, Some(GenderBucket::Male), |p| &p.height);
        assert_eq!(stats.count_total, 1);
        assert_eq!(stats.avg, 172.0);
        assert_eq!(stats.min, 172);
        assert_eq!(stats.max, 172);
    }

    #[test]
    fn field_statistics_on_empty_bucket_are_zero() {
        let people = vec![person("male", "172")];
        let stats = person_field_statistics(&people, Some(GenderBucket::Female), |p| &p.height);
        assert_eq!(stats.count_total, 0);
        assert_eq!(stats.avg, 0.0);
    }

    // ── planets ───────────────────────────────────────────────────────────────

    #[test]
    fn population_statistics_classify_sentinels_as_not_inhabited() {
        let planets = vec![
            planet("Coruscant", "1000000000000", 3),
            planet("Hoth", "unknown", 0),
            planet("Wasteland", "0", 0),
        ];
        let stats = population_statistics(&planets);
        assert_eq!(stats.total_planets, 3);
        assert_eq!(stats.inhabited, 1);
        assert_eq!(stats.not_inhabited, 2);
        // "0" joins the numeric sample even though the planet is uninhabited.
        assert_eq!(stats.min_population, 0);
        assert_eq!(stats.max_population, 1_000_000_000_000);
    }

    #[test]
    fn population_statistics_on_empty_collection() {
        let stats = population_statistics(&[]);
        assert_eq!(stats.total_planets, 0);
        assert_eq!(stats.avg_population, 0.0);
        assert_eq!(stats.max_population, 0);
    }

    #[test]
    fn top_by_population_splits_and_ranks() {
        let planets = vec![
            planet("Tatooine", "200000", 0),
            planet("Hoth", "unknown", 0),
            planet("Alderaan", "2000000000", 0),
        ];
        let top = top_by_population(&planets);

        let names: Vec<_> = top.with_population.iter().map(|p| &p.name).collect();
        assert_eq!(names, vec!["Alderaan", "Tatooine"]);
        assert_eq!(top.without_population.len(), 1);
        assert_eq!(top.without_population[0].population, "unknown");
    }

    #[test]
    fn top_by_residents_ranks_descending() {
        let planets = vec![
            planet("Empty", "0", 0),
            planet("Busy", "100", 5),
            planet("Quiet", "10", 2),
        ];
        let names: Vec<_> = top_by_residents(&planets)
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["Busy", "Quiet", "Empty"]);
    }

    // ── films ─────────────────────────────────────────────────────────────────

    #[test]
    fn film_counts_cover_every_reference_list() {
        let film = Film {
            title: "A New Hope".to_owned(),
            characters: vec!["a".into(), "b".into()],
            planets: vec!["c".into()],
            ..Film::default()
        };
        let counts = film_reference_counts(std::slice::from_ref(&film));
        assert_eq!(counts[0].characters_count, 2);
        assert_eq!(counts[0].planets_count, 1);
        assert_eq!(counts[0].starships_count, 0);
    }

    #[test]
    fn appearances_match_on_canonical_url() {
        let luke = Person {
            name: "Luke Skywalker".to_owned(),
            url: "https://swapi.dev/api/people/1/".to_owned(),
            ..Person::default()
        };
        let films = vec![
            Film {
                title: "A New Hope".to_owned(),
                director: "George Lucas".to_owned(),
                characters: vec!["https://swapi.dev/api/people/1/".to_owned()],
                ..Film::default()
            },
            Film {
                title: "The Phantom Menace".to_owned(),
                characters: vec!["https://swapi.dev/api/people/11/".to_owned()],
                ..Film::default()
            },
        ];

        let credits = appearances(&[&luke], &films);
        assert_eq!(credits.len(), 1);
        assert_eq!(credits[0].movies.len(), 1);
        assert_eq!(credits[0].movies[0].title, "A New Hope");
    }
}
