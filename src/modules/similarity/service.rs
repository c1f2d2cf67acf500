use std::sync::Arc;

use futures::future;
use tracing::{debug, info, warn};

use crate::modules::catalog::{ContentMerger, MediaDetails, MediaItem};
use crate::modules::provider::domain::DiscoverFilter;
use crate::modules::provider::traits::CatalogSource;
use crate::shared::errors::{AppError, AppResult};

use super::scoring::{rank, reference_signal, score_candidate, ScoredCandidate};

/// Vote-count floor for the per-genre candidate discovery queries.
const DISCOVERY_VOTE_FLOOR: u32 = 1000;

/// How a batch treats individual request failures.
///
/// `FailFast` is the historical all-or-nothing join: the first failed
/// request rejects the whole batch. `Isolate` collects per-task results
/// and drops only the failing entries, so one bad candidate cannot sink
/// the entire ranked list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    FailFast,
    Isolate,
}

/// Ranks a candidate pool against a reference title and returns the top
/// scored matches with their factor breakdowns.
pub struct SimilarityService {
    source: Arc<dyn CatalogSource>,
}

impl SimilarityService {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self { source }
    }

    /// Build the candidate pool, fetch every candidate's detail record,
    /// score, and rank.
    ///
    /// The pool is the reference's own similar and recommendation lists
    /// widened by one high-vote discovery query per reference genre; the
    /// upstream similar endpoint alone is too narrow. Candidates are
    /// deduplicated by id and the reference itself is excluded before
    /// any detail fetch goes out.
    pub async fn rank_similar(
        &self,
        reference: &MediaDetails,
        policy: FailurePolicy,
    ) -> AppResult<Vec<ScoredCandidate>> {
        let signal = reference_signal(reference);

        let mut pools: Vec<Vec<MediaItem>> =
            vec![reference.similar.clone(), reference.recommendations.clone()];

        let genre_requests: Vec<_> = reference
            .genres
            .iter()
            .map(|genre| {
                let source = Arc::clone(&self.source);
                let kind = reference.kind;
                let genre_id = genre.id;
                async move {
                    source
                        .discover(
                            kind,
                            DiscoverFilter::new()
                                .with_genres(genre_id)
                                .vote_count_gte(DISCOVERY_VOTE_FLOOR)
                                .sort_by("popularity.desc"),
                        )
                        .await
                }
            })
            .collect();

        match policy {
            FailurePolicy::FailFast => {
                for page in future::try_join_all(genre_requests).await? {
                    pools.push(page.results);
                }
            }
            FailurePolicy::Isolate => {
                for result in future::join_all(genre_requests).await {
                    match result {
                        Ok(page) => pools.push(page.results),
                        Err(e) => warn!("Genre discovery query failed, skipping: {}", e),
                    }
                }
            }
        }

        let mut candidates = ContentMerger::merge_by_id(pools);
        candidates.retain(|c| !(c.kind() == reference.kind && c.id() == reference.id));
        debug!(candidates = candidates.len(), "Built similarity candidate pool");

        let detail_requests: Vec<_> = candidates
            .iter()
            .map(|candidate| {
                let source = Arc::clone(&self.source);
                let kind = candidate.kind();
                let id = candidate.id();
                async move { source.details(kind, id).await }
            })
            .collect();

        let detailed: Vec<MediaDetails> = match policy {
            FailurePolicy::FailFast => future::try_join_all(detail_requests).await?,
            FailurePolicy::Isolate => future::join_all(detail_requests)
                .await
                .into_iter()
                .filter_map(|result: Result<MediaDetails, AppError>| match result {
                    Ok(details) => Some(details),
                    Err(e) => {
                        warn!("Candidate detail fetch failed, dropping candidate: {}", e);
                        None
                    }
                })
                .collect(),
        };

        let scored: Vec<ScoredCandidate> = detailed
            .into_iter()
            .map(|candidate| {
                let similarity_details = score_candidate(&signal, &candidate);
                ScoredCandidate {
                    similarity_score: similarity_details.total_score,
                    similarity_details,
                    candidate,
                }
            })
            .collect();

        let ranked = rank(scored);
        info!(
            reference = reference.id,
            ranked = ranked.len(),
            "Ranked similar titles"
        );
        Ok(ranked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::{ExternalIds, Genre, MediaKind, MediaPage, Movie};
    use crate::modules::provider::traits::MockCatalogSource;

    fn details(kind: MediaKind, id: u32) -> MediaDetails {
        MediaDetails {
            kind,
            id,
            title: format!("title-{}", id),
            original_language: None,
            overview: None,
            release_date: Some("2010-01-01".to_string()),
            genres: vec![],
            popularity: 0.0,
            vote_average: 0.0,
            vote_count: 0,
            poster_path: None,
            backdrop_path: None,
            runtime: None,
            revenue: None,
            budget: None,
            number_of_seasons: None,
            number_of_episodes: None,
            episode_run_time: vec![],
            networks: vec![],
            created_by: vec![],
            cast: vec![],
            crew: vec![],
            videos: vec![],
            similar: vec![],
            recommendations: vec![],
            external_ids: ExternalIds::default(),
            awards: vec![],
        }
    }

    fn movie(id: u32) -> MediaItem {
        MediaItem::Movie(Movie {
            id,
            title: Some(format!("movie-{}", id)),
            original_title: None,
            overview: None,
            release_date: None,
            popularity: None,
            vote_average: None,
            vote_count: None,
            genre_ids: vec![],
            poster_path: None,
            backdrop_path: None,
            original_language: None,
            revenue: None,
            budget: None,
            runtime: None,
        })
    }

    fn page(results: Vec<MediaItem>) -> MediaPage {
        MediaPage {
            page: 1,
            total_results: results.len() as u32,
            results,
            total_pages: 1,
        }
    }

    fn reference_with_pool() -> MediaDetails {
        let mut reference = details(MediaKind::Movie, 1);
        reference.genres = vec![Genre {
            id: 18,
            name: "Drama".to_string(),
        }];
        reference.similar = vec![movie(2)];
        reference.recommendations = vec![movie(3)];
        reference
    }

    #[tokio::test]
    async fn pool_unions_similar_recommendations_and_genre_discovery() {
        let mut source = MockCatalogSource::new();
        // genre discovery returns a fresh candidate plus the reference
        // itself, which must be excluded
        source
            .expect_discover()
            .times(1)
            .returning(|_, filter| {
                assert_eq!(filter.with_genres, Some(18));
                assert_eq!(filter.vote_count_gte, Some(DISCOVERY_VOTE_FLOOR));
                Ok(page(vec![movie(4), movie(1)]))
            });
        source
            .expect_details()
            .times(3)
            .returning(|kind, id| Ok(details(kind, id)));

        let service = SimilarityService::new(Arc::new(source));
        let ranked = service
            .rank_similar(&reference_with_pool(), FailurePolicy::FailFast)
            .await
            .unwrap();

        let mut ids: Vec<u32> = ranked.iter().map(|c| c.candidate.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![2, 3, 4]);
    }

    #[tokio::test]
    async fn fail_fast_rejects_on_one_bad_candidate() {
        let mut source = MockCatalogSource::new();
        source
            .expect_discover()
            .returning(|_, _| Ok(page(vec![])));
        source.expect_details().returning(|kind, id| {
            if id == 3 {
                Err(AppError::transport(Some(404), "gone"))
            } else {
                Ok(details(kind, id))
            }
        });

        let service = SimilarityService::new(Arc::new(source));
        let result = service
            .rank_similar(&reference_with_pool(), FailurePolicy::FailFast)
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn isolate_drops_only_the_failing_candidate() {
        let mut source = MockCatalogSource::new();
        source
            .expect_discover()
            .returning(|_, _| Ok(page(vec![])));
        source.expect_details().returning(|kind, id| {
            if id == 3 {
                Err(AppError::transport(Some(404), "gone"))
            } else {
                Ok(details(kind, id))
            }
        });

        let service = SimilarityService::new(Arc::new(source));
        let ranked = service
            .rank_similar(&reference_with_pool(), FailurePolicy::Isolate)
            .await
            .unwrap();

        let ids: Vec<u32> = ranked.iter().map(|c| c.candidate.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[tokio::test]
    async fn genre_overlap_outranks_popularity() {
        let mut source = MockCatalogSource::new();
        source
            .expect_discover()
            .returning(|_, _| Ok(page(vec![])));
        source.expect_details().returning(|kind, id| {
            let mut d = details(kind, id);
            if id == 2 {
                // shares the reference's genre
                d.genres = vec![Genre {
                    id: 18,
                    name: "Drama".to_string(),
                }];
            } else {
                // only popular
                d.vote_count = 500_000;
            }
            Ok(d)
        });

        let service = SimilarityService::new(Arc::new(source));
        let ranked = service
            .rank_similar(&reference_with_pool(), FailurePolicy::FailFast)
            .await
            .unwrap();

        // genre match (20) + full coverage (100) beats capped popularity (50)
        assert_eq!(ranked[0].candidate.id, 2);
        assert!(ranked[0].similarity_details.all_genres_match);
        assert!(ranked[0].similarity_score > ranked[1].similarity_score);
    }
}
