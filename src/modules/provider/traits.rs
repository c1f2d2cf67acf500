use async_trait::async_trait;

use crate::modules::catalog::{MediaDetails, MediaKind, MediaPage, PersonCredits, PersonMatch};
use crate::modules::provider::domain::{DiscoverFilter, ListKind};
use crate::shared::errors::AppResult;

#[cfg(test)]
use mockall::automock;

/// Catalog operations the aggregation services are written against.
/// The production implementation is [`TmdbClient`]; tests substitute a
/// mock so orchestration behavior can be exercised without a network.
///
/// [`TmdbClient`]: crate::modules::provider::infrastructure::tmdb::TmdbClient
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// One page of a curated listing (popular, upcoming, ...).
    async fn list(&self, kind: MediaKind, list: ListKind, page: u32) -> AppResult<MediaPage>;

    /// One page of filtered discovery results.
    async fn discover(&self, kind: MediaKind, filter: DiscoverFilter) -> AppResult<MediaPage>;

    /// Titles trending this week.
    async fn trending(&self, kind: MediaKind) -> AppResult<MediaPage>;

    /// Full detail record including credits, videos, similar and
    /// recommendation pools, external ids.
    async fn details(&self, kind: MediaKind, id: u32) -> AppResult<MediaDetails>;

    /// Combined text search across categories; person rows are not
    /// representable as media items and are dropped by the mapper.
    async fn search_multi(&self, query: &str, page: u32) -> AppResult<MediaPage>;

    /// People search by name.
    async fn search_person(&self, query: &str) -> AppResult<Vec<PersonMatch>>;

    /// A person's filmography for one content category.
    async fn person_credits(&self, kind: MediaKind, person_id: u32) -> AppResult<PersonCredits>;
}
