//! # holocron
//!
//! A warm in-memory query engine for the Star Wars catalog.
//!
//! The upstream catalog is small (a few hundred records across six kinds) and
//! effectively immutable, so holocron fetches every collection once at
//! startup and serves all read traffic from memory: filtered, ordered,
//! paginated listings with cross-entity references resolved in place, plus
//! by-id lookup, free-text search, and statistical reductions.
//!
//! ## Quick Start
//!
//! The crate is runtime-agnostic: drive the async warm-up from whatever
//! executor the application already runs.
//!
//! ```rust,no_run
//! use holocron::query::ListOptions;
//! use holocron::query::filters::PersonFilter;
//! use holocron::service::Holocron;
//! use holocron::source::SwapiClient;
//!
//! # async fn run() {
//! let (service, report) = Holocron::warm_up(SwapiClient::new()).await;
//! assert!(report.is_complete());
//!
//! let filter = PersonFilter {
//!     name: Some("skywalker".to_owned()),
//!     ..PersonFilter::default()
//! };
//! let page = service.list_people(&filter, &ListOptions::default());
//! for person in &page.results {
//!     println!("{} from {:?}", person.name, person.homeworld);
//! }
//! # }
//! ```

pub mod index;
pub mod model;
pub mod query;
pub mod service;
pub mod source;
pub mod stats;
pub mod store;
pub mod view;

#[cfg(test)]
pub(crate) mod test_fixtures;

// ── Convenience re-exports ────────────────────────────────────────────────────
pub use model::{Kind, Record};
pub use query::{ListOptions, OrderDir, Paginated};
pub use service::Holocron;
pub use source::{CatalogSource, FetchError, SwapiClient};
pub use store::{CatalogStore, WarmUpReport};
