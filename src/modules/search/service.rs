use std::sync::Arc;

use futures::future;
use regex::Regex;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::ApiConfig;
use crate::modules::catalog::{ContentMerger, ItemMetadata, MediaKind, PersonCredits, PersonMatch};
use crate::modules::provider::domain::DiscoverFilter;
use crate::modules::provider::traits::CatalogSource;
use crate::shared::errors::{AppError, AppResult};

/// Queries containing one of these phrases take the award search path.
const AWARD_KEYWORDS: [&str; 5] = [
    "oscar",
    "academy award",
    "golden globe",
    "emmy",
    "critics choice",
];

/// How many matched people contribute their filmographies to a search.
const TOP_PEOPLE_CONSIDERED: usize = 3;

#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchOutcome {
    pub page: u32,
    pub total_pages: u32,
    pub total_results: u32,
    pub results: Vec<ItemMetadata>,
}

pub fn is_award_query(query: &str) -> bool {
    let lowered = query.to_lowercase();
    AWARD_KEYWORDS.iter().any(|keyword| lowered.contains(keyword))
}

/// Fuses direct text search with titles reached through matched people's
/// filmographies, and routes award-phrase queries to the award path.
pub struct SearchService {
    source: Arc<dyn CatalogSource>,
    image_base: String,
}

impl SearchService {
    pub fn new(source: Arc<dyn CatalogSource>, config: &ApiConfig) -> Self {
        Self {
            source,
            image_base: config.image_base_url.clone(),
        }
    }

    pub async fn search(&self, query: &str, page: u32) -> AppResult<SearchOutcome> {
        if is_award_query(query) {
            return self.search_by_award(query).await;
        }

        let (content, mut people) = tokio::try_join!(
            self.source.search_multi(query, page),
            self.source.search_person(query),
        )?;

        people.sort_by(|a, b| {
            b.popularity
                .partial_cmp(&a.popularity)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        people.truncate(TOP_PEOPLE_CONSIDERED);
        debug!(people = people.len(), "Expanding search through matched people");

        let credit_requests: Vec<_> = people
            .into_iter()
            .map(|person| {
                let source = Arc::clone(&self.source);
                async move {
                    let (movies, tv) = tokio::try_join!(
                        source.person_credits(MediaKind::Movie, person.id),
                        source.person_credits(MediaKind::Tv, person.id),
                    )?;
                    Ok::<_, AppError>((person, movies, tv))
                }
            })
            .collect();
        let credits = future::try_join_all(credit_requests).await?;

        let mut cast_content: Vec<ItemMetadata> = Vec::new();
        for (person, movie_credits, tv_credits) in credits {
            self.collect_movie_credits(&person, movie_credits, &mut cast_content);
            self.collect_tv_credits(&person, tv_credits, &mut cast_content);
        }

        // Direct hits keep only renderable rows, exactly like the credit
        // pseudo-results.
        let direct: Vec<ItemMetadata> = content
            .results
            .iter()
            .filter(|item| item.poster_path().is_some())
            .map(|item| ItemMetadata::project(item, &self.image_base))
            .collect();

        // Union with last-write-wins by id: a credit row replaces the
        // direct row for the same title and keeps its cast annotation.
        let mut results =
            ContentMerger::merge_keyed(vec![direct, cast_content], |metadata| metadata.id);
        results.sort_by(|a, b| {
            b.popularity
                .partial_cmp(&a.popularity)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        info!(results = results.len(), "Search complete");

        Ok(SearchOutcome {
            page: content.page,
            total_pages: content.total_pages,
            total_results: content.total_results,
            results,
        })
    }

    fn collect_movie_credits(
        &self,
        person: &PersonMatch,
        credits: PersonCredits,
        out: &mut Vec<ItemMetadata>,
    ) {
        for entry in credits.cast {
            if entry.item.poster_path().is_some() {
                out.push(
                    ItemMetadata::project(&entry.item, &self.image_base).with_cast_info(
                        format!("Featuring {}", person.name),
                        entry.character.unwrap_or_else(|| "Cast".to_string()),
                    ),
                );
            }
        }
        for entry in credits.crew {
            if entry.item.poster_path().is_some() && entry.job.as_deref() == Some("Director") {
                out.push(
                    ItemMetadata::project(&entry.item, &self.image_base)
                        .with_cast_info(format!("Directed by {}", person.name), "Director"),
                );
            }
        }
    }

    fn collect_tv_credits(
        &self,
        person: &PersonMatch,
        credits: PersonCredits,
        out: &mut Vec<ItemMetadata>,
    ) {
        for entry in credits.cast {
            if entry.item.poster_path().is_some() {
                out.push(
                    ItemMetadata::project(&entry.item, &self.image_base).with_cast_info(
                        format!("Featuring {}", person.name),
                        entry.character.unwrap_or_else(|| "Cast".to_string()),
                    ),
                );
            }
        }
        for entry in credits.crew {
            let job = entry.job.as_deref().unwrap_or_default();
            if entry.item.poster_path().is_some()
                && (job == "Director" || job == "Executive Producer")
            {
                out.push(
                    ItemMetadata::project(&entry.item, &self.image_base)
                        .with_cast_info(format!("{} {}", job, person.name), job),
                );
            }
        }
    }

    /// Award path: discover high-rated titles (the ones likely to carry
    /// awards), pull full details for each, and keep only those whose
    /// synthesized awards list matches the query.
    async fn search_by_award(&self, query: &str) -> AppResult<SearchOutcome> {
        let matcher = Regex::new(&format!("(?i){}", query))
            .map_err(|e| AppError::InvalidInput(format!("Unusable award query: {}", e)))?;

        let high_rated = DiscoverFilter::new()
            .vote_average_gte(7.0)
            .sort_by("vote_average.desc");

        let (movies, tv_shows) = tokio::try_join!(
            self.source.discover(MediaKind::Movie, high_rated.clone()),
            self.source.discover(MediaKind::Tv, high_rated),
        )?;

        let detail_requests: Vec<_> = movies
            .results
            .iter()
            .chain(tv_shows.results.iter())
            .map(|item| {
                let source = Arc::clone(&self.source);
                let kind = item.kind();
                let id = item.id();
                async move { source.details(kind, id).await }
            })
            .collect();
        let detailed = future::try_join_all(detail_requests).await?;

        let mut results: Vec<ItemMetadata> = detailed
            .iter()
            .filter_map(|details| {
                let matching: Vec<_> = details
                    .awards
                    .iter()
                    .filter(|award| {
                        matcher.is_match(&award.name) || matcher.is_match(&award.category)
                    })
                    .cloned()
                    .collect();
                if matching.is_empty() {
                    return None;
                }
                Some(
                    ItemMetadata::project_details(details, &self.image_base)
                        .with_matching_awards(matching),
                )
            })
            .collect();

        results.sort_by(|a, b| {
            b.vote_average
                .partial_cmp(&a.vote_average)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        info!(results = results.len(), "Award search complete");

        Ok(SearchOutcome {
            page: 1,
            total_pages: 1,
            total_results: results.len() as u32,
            results,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::{
        CreditEntry, ExternalIds, MediaDetails, MediaItem, MediaPage, Movie, TvShow,
    };
    use crate::modules::provider::traits::MockCatalogSource;

    fn config() -> ApiConfig {
        ApiConfig::new("test-key")
    }

    fn movie(id: u32, title: &str, popularity: f64) -> MediaItem {
        MediaItem::Movie(Movie {
            id,
            title: Some(title.to_string()),
            original_title: None,
            overview: None,
            release_date: None,
            popularity: Some(popularity),
            vote_average: None,
            vote_count: None,
            genre_ids: vec![],
            poster_path: Some(format!("/{}.jpg", id)),
            backdrop_path: None,
            original_language: None,
            revenue: None,
            budget: None,
            runtime: None,
        })
    }

    fn posterless_movie(id: u32) -> MediaItem {
        MediaItem::Movie(Movie {
            id,
            title: Some("no poster".to_string()),
            original_title: None,
            overview: None,
            release_date: None,
            popularity: Some(99.0),
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

    fn person(id: u32, name: &str, popularity: f64) -> PersonMatch {
        PersonMatch {
            id,
            name: name.to_string(),
            popularity,
            profile_path: None,
        }
    }

    fn details_rated(kind: MediaKind, id: u32, vote_average: f64) -> MediaDetails {
        use crate::modules::catalog::Award;
        let release_date = Some("2015-01-01".to_string());
        MediaDetails {
            kind,
            id,
            title: format!("title-{}", id),
            original_language: None,
            overview: None,
            release_date,
            genres: vec![],
            popularity: 0.0,
            vote_average,
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
            awards: Award::synthesize(kind, vote_average, Some(2015)),
        }
    }

    #[test]
    fn award_keywords_match_case_insensitively() {
        assert!(is_award_query("Oscar winners 2020"));
        assert!(is_award_query("best GOLDEN GLOBE dramas"));
        assert!(!is_award_query("space opera"));
    }

    #[tokio::test]
    async fn people_credits_become_tagged_results() {
        let mut source = MockCatalogSource::new();
        source
            .expect_search_multi()
            .returning(|_, _| Ok(page(vec![movie(1, "direct hit", 5.0)])));
        source.expect_search_person().returning(|_| {
            Ok(vec![
                person(10, "Greta Gerwig", 40.0),
                person(11, "Unknown Extra", 1.0),
                person(12, "Also Unknown", 2.0),
                person(13, "Barely Known", 3.0),
            ])
        });
        // only the top 3 people by popularity get credit lookups
        source
            .expect_person_credits()
            .times(6)
            .returning(|kind, person_id| {
                if kind == MediaKind::Movie && person_id == 10 {
                    Ok(PersonCredits {
                        cast: vec![CreditEntry {
                            item: movie(2, "acted in", 20.0),
                            character: Some("Lead".to_string()),
                            job: None,
                        }],
                        crew: vec![
                            CreditEntry {
                                item: movie(3, "directed", 30.0),
                                character: None,
                                job: Some("Director".to_string()),
                            },
                            CreditEntry {
                                item: movie(4, "edited", 50.0),
                                character: None,
                                job: Some("Editor".to_string()),
                            },
                        ],
                    })
                } else {
                    Ok(PersonCredits::default())
                }
            });

        let service = SearchService::new(Arc::new(source), &config());
        let outcome = service.search("gerwig", 1).await.unwrap();

        let ids: Vec<u32> = outcome.results.iter().map(|r| r.id).collect();
        // sorted by popularity desc; the Editor credit is not admitted
        assert_eq!(ids, vec![3, 2, 1]);

        let directed = outcome.results.iter().find(|r| r.id == 3).unwrap();
        assert_eq!(directed.cast_info.as_deref(), Some("Directed by Greta Gerwig"));
        assert_eq!(directed.role.as_deref(), Some("Director"));

        let acted = outcome.results.iter().find(|r| r.id == 2).unwrap();
        assert_eq!(acted.cast_info.as_deref(), Some("Featuring Greta Gerwig"));
        assert_eq!(acted.role.as_deref(), Some("Lead"));

        let direct = outcome.results.iter().find(|r| r.id == 1).unwrap();
        assert_eq!(direct.cast_info, None);
    }

    #[tokio::test]
    async fn credit_row_replaces_direct_row_for_same_id() {
        let mut source = MockCatalogSource::new();
        source
            .expect_search_multi()
            .returning(|_, _| Ok(page(vec![movie(7, "same title", 5.0), posterless_movie(8)])));
        source
            .expect_search_person()
            .returning(|_| Ok(vec![person(10, "Someone", 10.0)]));
        source
            .expect_person_credits()
            .returning(|kind, _| {
                if kind == MediaKind::Movie {
                    Ok(PersonCredits {
                        cast: vec![CreditEntry {
                            item: movie(7, "same title", 5.0),
                            character: None,
                            job: None,
                        }],
                        crew: vec![],
                    })
                } else {
                    Ok(PersonCredits::default())
                }
            });

        let service = SearchService::new(Arc::new(source), &config());
        let outcome = service.search("same title", 1).await.unwrap();

        // posterless direct row filtered; duplicate id collapsed to the
        // credit row, which carries the annotation
        assert_eq!(outcome.results.len(), 1);
        assert_eq!(outcome.results[0].id, 7);
        assert_eq!(
            outcome.results[0].cast_info.as_deref(),
            Some("Featuring Someone")
        );
        assert_eq!(outcome.results[0].role.as_deref(), Some("Cast"));
    }

    #[tokio::test]
    async fn award_search_filters_by_synthesized_awards() {
        let mut source = MockCatalogSource::new();
        source.expect_discover().times(2).returning(|kind, filter| {
            assert_eq!(filter.vote_average_gte, Some(7.0));
            match kind {
                MediaKind::Movie => Ok(page(vec![movie(1, "masterpiece", 1.0), movie(2, "decent", 1.0)])),
                MediaKind::Tv => Ok(page(vec![MediaItem::Tv(TvShow {
                    id: 3,
                    name: Some("acclaimed series".to_string()),
                    original_name: None,
                    overview: None,
                    first_air_date: None,
                    popularity: None,
                    vote_average: None,
                    vote_count: None,
                    genre_ids: vec![],
                    poster_path: None,
                    backdrop_path: None,
                    original_language: None,
                    origin_country: vec![],
                    number_of_seasons: None,
                    number_of_episodes: None,
                    episode_run_time: vec![],
                })])),
            }
        });
        source.expect_details().times(3).returning(|kind, id| {
            // vote 9 synthesizes a Golden Globe; 7.5 only Critics' Choice
            let vote_average = if id == 2 { 7.5 } else { 9.0 };
            Ok(details_rated(kind, id, vote_average))
        });

        let service = SearchService::new(Arc::new(source), &config());
        let outcome = service.search("golden globe", 1).await.unwrap();

        let ids: Vec<u32> = outcome.results.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&1) && ids.contains(&3));

        let awards = outcome.results[0].matching_awards.as_ref().unwrap();
        assert!(awards.iter().all(|a| a.name == "Golden Globe"));
    }

    #[tokio::test]
    async fn award_search_threshold_excludes_mid_rated_titles() {
        let mut source = MockCatalogSource::new();
        source.expect_discover().returning(|kind, _| match kind {
            MediaKind::Movie => Ok(page(vec![movie(1, "great", 1.0), movie(2, "good", 1.0)])),
            MediaKind::Tv => Ok(page(vec![])),
        });
        source.expect_details().returning(|kind, id| {
            let vote_average = if id == 1 { 9.0 } else { 7.5 };
            Ok(details_rated(kind, id, vote_average))
        });

        let service = SearchService::new(Arc::new(source), &config());
        // "academy award" only matches the >= 8 synthesis tier for movies
        let outcome = service.search("academy award", 1).await.unwrap();

        let ids: Vec<u32> = outcome.results.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1]);
    }
}
