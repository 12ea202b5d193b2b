//! Generic filtering, ordering, and pagination over typed collections.
//!
//! The pipeline is the same for all six kinds: narrow the collection with a
//! typed filter descriptor, order it by a requested field or by canonical
//! identity, then slice one page. Every stage is a pure function: input
//! collections are never mutated, relative order is preserved through
//! narrowing, and both orderings are stable so identical queries paginate
//! identically.

use serde::{Deserialize, Serialize};

use crate::model::{Entity, trailing_id};

pub mod filters;

/// The order-by name that selects identity ordering.
pub const IDENTITY_FIELD: &str = "url";

/// Largest page size a caller can request; larger values are clamped.
pub const MAX_PAGE_SIZE: usize = 50;

/// Default page size when the caller does not specify one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Per-field matching policy.
///
/// Fields whose value space is a closed enumeration (gender, birth year) use
/// [`Exact`](Self::Exact) so that substring collisions cannot produce
/// ambiguous matches. Every other textual field uses
/// [`Substring`](Self::Substring), enabling partial lookups by fragment.
/// Both policies are case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPolicy {
    Exact,
    Substring,
}

impl MatchPolicy {
    /// Returns `true` when `value` satisfies `wanted` under this policy.
    ///
    /// # Examples
    ///
    /// ```
    /// use holocron::query::MatchPolicy;
    ///
    /// assert!(MatchPolicy::Substring.admits("Luke Skywalker", "sky"));
    /// assert!(!MatchPolicy::Exact.admits("female", "fem"));
    /// assert!(MatchPolicy::Exact.admits("Female", "female"));
    /// ```
    pub fn admits(self, value: &str, wanted: &str) -> bool {
        let value = value.to_lowercase();
        let wanted = wanted.to_lowercase();
        match self {
            Self::Exact => value == wanted,
            Self::Substring => value.contains(&wanted),
        }
    }
}

/// A typed per-kind filter descriptor.
///
/// Implementations carry a fixed set of optional fields, each bound to a
/// declared [`MatchPolicy`]. Absent fields do not filter. Supplied fields
/// compose as a logical AND, so evaluation order never changes the result.
pub trait FilterSet<T> {
    /// Returns `true` when the record satisfies every supplied field filter.
    fn matches(&self, record: &T) -> bool;
}

/// Narrows a collection through a filter descriptor.
///
/// Returns references into the input in their original relative order; the
/// input is never mutated.
pub fn narrow<'c, T, F: FilterSet<T>>(records: &'c [T], filter: &F) -> Vec<&'c T> {
    records.iter().filter(|record| filter.matches(record)).collect()
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderDir {
    #[default]
    #[serde(alias = "ascending")]
    Asc,
    #[serde(alias = "descending")]
    Desc,
}

impl std::str::FromStr for OrderDir {
    type Err = std::convert::Infallible;

    /// `"desc"` selects descending; anything else is ascending, so malformed
    /// direction strings degrade to the default instead of erroring.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s.eq_ignore_ascii_case("desc") {
            Self::Desc
        } else {
            Self::Asc
        })
    }
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum SortKey {
    Identity(u64),
    Text(String),
}

/// Orders a narrowed collection by `order_by` in direction `dir`.
///
/// `"url"` selects identity ordering: the numeric key is the trailing integer
/// segment of each record's canonical reference, with unparseable references
/// keyed as 0. Any other name selects case-insensitive lexicographic ordering
/// on that field, with missing fields sorting as the empty string.
///
/// Both orderings are stable in both directions: records with equal keys keep
/// their prior relative order, which keeps pagination deterministic across
/// identical queries.
pub fn order<'c, T: Entity>(records: Vec<&'c T>, order_by: &str, dir: OrderDir) -> Vec<&'c T> {
    let mut keyed: Vec<(SortKey, &T)> = records
        .into_iter()
        .map(|record| {
            let key = if order_by == IDENTITY_FIELD {
                SortKey::Identity(trailing_id(record.url()))
            } else {
                SortKey::Text(
                    record
                        .field(order_by)
                        .map(|value| value.to_lowercase())
                        .unwrap_or_default(),
                )
            };
            (key, record)
        })
        .collect();

    keyed.sort_by(|a, b| match dir {
        OrderDir::Asc => a.0.cmp(&b.0),
        OrderDir::Desc => b.0.cmp(&a.0),
    });

    keyed.into_iter().map(|(_, record)| record).collect()
}

/// Slices one page out of an ordered collection.
///
/// Pagination is 1-indexed; `page` is clamped to at least 1 and `page_size`
/// to `1..=MAX_PAGE_SIZE`. The returned total is the length of the
/// ordered-but-unpaginated collection, and an out-of-range page yields an
/// empty slice rather than an error.
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> (usize, Vec<T>) {
    let total = items.len();
    let page = page.max(1);
    let page_size = page_size.clamp(1, MAX_PAGE_SIZE);
    let start = (page - 1).saturating_mul(page_size);
    let slice = items.into_iter().skip(start).take(page_size).collect();
    (total, slice)
}

/// Ordering and pagination parameters shared by every listing operation.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ListOptions {
    pub order_by: String,
    pub order_dir: OrderDir,
    pub page: usize,
    pub page_size: usize,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            order_by: IDENTITY_FIELD.to_owned(),
            order_dir: OrderDir::Asc,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of assembled results, plus the match count before pagination.
///
/// Ephemeral: built per request and discarded after the response is sent.
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub results: Vec<T>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Person;
    use crate::query::filters::PersonFilter;

    fn person(name: &str, gender: &str, url: &str) -> Person {
        Person {
            name: name.to_owned(),
            gender: gender.to_owned(),
            url: url.to_owned(),
            ..Person::default()
        }
    }

    fn crew() -> Vec<Person> {
        vec![
            person("Luke Skywalker", "male", "https://swapi.dev/api/people/1/"),
            person("Leia Organa", "female", "https://swapi.dev/api/people/5/"),
            person("Anakin Skywalker", "male", "https://swapi.dev/api/people/11/"),
            person("Han Solo", "male", "https://swapi.dev/api/people/14/"),
        ]
    }

    // ── MatchPolicy ───────────────────────────────────────────────────────────

    #[test]
    fn substring_is_case_insensitive() {
        assert!(MatchPolicy::Substring.admits("Luke Skywalker", "SKY"));
        assert!(!MatchPolicy::Substring.admits("Han Solo", "sky"));
    }

    #[test]
    fn exact_rejects_partial_values() {
        // "fem" is a substring of "female" but gender is an exact-match field.
        assert!(!MatchPolicy::Exact.admits("female", "fem"));
        assert!(MatchPolicy::Exact.admits("female", "FEMALE"));
    }

    // ── narrow ────────────────────────────────────────────────────────────────

    #[test]
    fn narrow_preserves_relative_order() {
        let crew = crew();
        let filter = PersonFilter {
            name: Some("sky".to_owned()),
            ..PersonFilter::default()
        };

        let names: Vec<_> = narrow(&crew, &filter).iter().map(|p| &p.name).collect();
        assert_eq!(names, vec!["Luke Skywalker", "Anakin Skywalker"]);
    }

    #[test]
    fn narrow_composes_filters_as_logical_and() {
        let crew = crew();
        let filter = PersonFilter {
            name: Some("o".to_owned()),
            gender: Some("male".to_owned()),
            ..PersonFilter::default()
        };

        let names: Vec<_> = narrow(&crew, &filter).iter().map(|p| &p.name).collect();
        assert_eq!(names, vec!["Han Solo"]);
    }

    #[test]
    fn filters_commute() {
        // The conjunction must yield the same set regardless of which field
        // is considered first; both orders of supplying the two constraints
        // produce identical results.
        let crew = crew();
        let a = PersonFilter {
            name: Some("a".to_owned()),
            gender: Some("male".to_owned()),
            ..PersonFilter::default()
        };
        let b = PersonFilter {
            gender: Some("male".to_owned()),
            name: Some("a".to_owned()),
            ..PersonFilter::default()
        };

        let first: Vec<_> = narrow(&crew, &a).iter().map(|p| &p.url).collect();
        let second: Vec<_> = narrow(&crew, &b).iter().map(|p| &p.url).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn exact_field_rejects_substring_intent() {
        let crew = crew();
        let filter = PersonFilter {
            gender: Some("fem".to_owned()),
            ..PersonFilter::default()
        };
        assert!(narrow(&crew, &filter).is_empty());
    }

    // ── order ─────────────────────────────────────────────────────────────────

    #[test]
    fn identity_ordering_sorts_by_trailing_integer() {
        let crew = crew();
        let refs: Vec<&Person> = crew.iter().collect();

        let ordered = order(refs, IDENTITY_FIELD, OrderDir::Desc);
        let ids: Vec<_> = ordered.iter().map(|p| &p.url).collect();
        assert_eq!(
            ids,
            vec![
                "https://swapi.dev/api/people/14/",
                "https://swapi.dev/api/people/11/",
                "https://swapi.dev/api/people/5/",
                "https://swapi.dev/api/people/1/",
            ]
        );
    }

    #[test]
    fn unparseable_identity_keys_as_zero_and_stays_stable() {
        let crew = vec![
            person("A", "male", "not-a-reference"),
            person("B", "male", "https://swapi.dev/api/people/2/"),
            person("C", "male", "also-not-a-reference"),
        ];
        let refs: Vec<&Person> = crew.iter().collect();

        let ordered = order(refs, IDENTITY_FIELD, OrderDir::Asc);
        let names: Vec<_> = ordered.iter().map(|p| &p.name).collect();
        // Both zero-keyed records sort first, in original collection order.
        assert_eq!(names, vec!["A", "C", "B"]);
    }

    #[test]
    fn field_ordering_is_case_insensitive() {
        let crew = vec![
            person("zam Wesell", "female", "https://swapi.dev/api/people/70/"),
            person("Ackbar", "male", "https://swapi.dev/api/people/27/"),
        ];
        let refs: Vec<&Person> = crew.iter().collect();

        let ordered = order(refs, "name", OrderDir::Asc);
        assert_eq!(ordered[0].name, "Ackbar");
    }

    #[test]
    fn missing_field_sorts_as_empty_string_first() {
        let crew = crew();
        let refs: Vec<&Person> = crew.iter().collect();

        // No person record carries a "terrain" field; everything keys as ""
        // and the original order is preserved.
        let ordered = order(refs, "terrain", OrderDir::Asc);
        let names: Vec<_> = ordered.iter().map(|p| &p.name).collect();
        assert_eq!(
            names,
            vec!["Luke Skywalker", "Leia Organa", "Anakin Skywalker", "Han Solo"]
        );
    }

    #[test]
    fn descending_sort_keeps_equal_keys_stable() {
        let crew = crew();
        let refs: Vec<&Person> = crew.iter().collect();

        let ordered = order(refs, "gender", OrderDir::Desc);
        let names: Vec<_> = ordered.iter().map(|p| &p.name).collect();
        // The three males tie and keep their original relative order.
        assert_eq!(
            names,
            vec!["Luke Skywalker", "Anakin Skywalker", "Han Solo", "Leia Organa"]
        );
    }

    // ── paginate ──────────────────────────────────────────────────────────────

    #[test]
    fn paginate_is_one_indexed() {
        let (total, page) = paginate(vec![1, 2, 3, 4, 5], 1, 2);
        assert_eq!(total, 5);
        assert_eq!(page, vec![1, 2]);

        let (_, page) = paginate(vec![1, 2, 3, 4, 5], 2, 2);
        assert_eq!(page, vec![3, 4]);
    }

    #[test]
    fn out_of_range_page_is_empty_with_correct_total() {
        let (total, page) = paginate(vec![1, 2, 3], 7, 10);
        assert_eq!(total, 3);
        assert!(page.is_empty());
    }

    #[test]
    fn page_size_is_clamped() {
        let items: Vec<usize> = (0..200).collect();
        let (_, page) = paginate(items.clone(), 1, 1000);
        assert_eq!(page.len(), MAX_PAGE_SIZE);

        let (_, page) = paginate(items, 1, 0);
        assert_eq!(page.len(), 1);
    }

    #[test]
    fn pagination_is_deterministic() {
        let items: Vec<usize> = (0..100).collect();
        let first = paginate(items.clone(), 2, 10);
        let second = paginate(items, 2, 10);
        assert_eq!(first, second);
    }

    #[test]
    fn order_dir_parses_permissively() {
        assert_eq!("desc".parse::<OrderDir>().unwrap(), OrderDir::Desc);
        assert_eq!("DESC".parse::<OrderDir>().unwrap(), OrderDir::Desc);
        assert_eq!("asc".parse::<OrderDir>().unwrap(), OrderDir::Asc);
        assert_eq!("sideways".parse::<OrderDir>().unwrap(), OrderDir::Asc);
    }
}
