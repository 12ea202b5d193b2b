//! Upstream catalog source boundary.
//!
//! The query engine never talks to the network directly: it consumes the
//! [`CatalogSource`] trait, which hands back opaque paginated JSON collections
//! keyed by resource kind. [`SwapiClient`] is the production implementation
//! against the public SWAPI catalog; tests substitute in-memory fixtures.

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::model::Kind;

/// Default upstream base URL for [`SwapiClient`].
pub const DEFAULT_BASE_URL: &str = "https://swapi.dev/api";

/// Errors produced while fetching catalog data from the upstream source.
///
/// These surface only on the warm-up and by-id fallback paths. Query-side
/// operations never fetch and never fail.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("upstream returned status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("upstream payload could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("no {kind} record with id {id} exists upstream")]
    NotFound { kind: Kind, id: u64 },
}

/// One page of raw records from the upstream source.
///
/// `next` is an opaque cursor: pass it back to
/// [`CatalogSource::fetch_page`] to retrieve the following page. `None` means
/// the collection is exhausted. A page with zero records and no cursor is a
/// valid empty collection, not an error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPage {
    #[serde(default, alias = "results")]
    pub records: Vec<serde_json::Value>,
    #[serde(default)]
    pub next: Option<String>,
}

/// A provider of paginated JSON collections keyed by resource kind.
///
/// Implementations must treat `page_token` as opaque: the engine only ever
/// echoes back the `next` cursor from a previously returned [`RawPage`].
pub trait CatalogSource {
    /// Fetches one page of the collection for `kind`.
    ///
    /// `page_token` of `None` requests the first page.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] when the page cannot be retrieved or decoded.
    fn fetch_page(
        &self,
        kind: Kind,
        page_token: Option<&str>,
    ) -> impl Future<Output = Result<RawPage, FetchError>> + Send;

    /// Fetches a single record by its numeric identity.
    ///
    /// Used as a fallback when an identity is not present in the warm
    /// snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::NotFound`] when the remote identity is invalid,
    /// or another [`FetchError`] when the request itself fails.
    fn fetch_single(
        &self,
        kind: Kind,
        id: u64,
    ) -> impl Future<Output = Result<serde_json::Value, FetchError>> + Send;
}

/// HTTP client for the public SWAPI catalog.
///
/// # Examples
///
/// ```rust,no_run
/// use holocron::model::Kind;
/// use holocron::source::{CatalogSource, SwapiClient};
///
/// # async fn example() -> Result<(), holocron::source::FetchError> {
/// let client = SwapiClient::new();
/// let first_page = client.fetch_page(Kind::People, None).await?;
/// println!("{} records on the first page", first_page.records.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SwapiClient {
    http: reqwest::Client,
    base_url: String,
}

impl SwapiClient {
    /// Creates a client against the public catalog at [`DEFAULT_BASE_URL`].
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client against a custom base URL. A trailing slash is
    /// stripped so both `…/api` and `…/api/` behave identically.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn page_url(&self, kind: Kind, page_token: Option<&str>) -> String {
        match page_token {
            Some(cursor) => cursor.to_owned(),
            None => format!("{}/{}/", self.base_url, kind),
        }
    }

    fn single_url(&self, kind: Kind, id: u64) -> String {
        format!("{}/{}/{}/", self.base_url, kind, id)
    }
}

impl Default for SwapiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogSource for SwapiClient {
    async fn fetch_page(
        &self,
        kind: Kind,
        page_token: Option<&str>,
    ) -> Result<RawPage, FetchError> {
        let url = self.page_url(kind, page_token);
        debug!(%kind, %url, "fetching collection page");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let page: RawPage = response.json().await?;
        debug!(%kind, records = page.records.len(), has_next = page.next.is_some(), "page fetched");
        Ok(page)
    }

    async fn fetch_single(&self, kind: Kind, id: u64) -> Result<serde_json::Value, FetchError> {
        let url = self.single_url(kind, id);
        debug!(%kind, id, %url, "fetching single record");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if status.as_u16() == 404 {
            return Err(FetchError::NotFound { kind, id });
        }
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url,
            });
        }

        Ok(response.json().await?)
    }
}
