//! Smoke tests against the real upstream APIs.
//!
//! These hit the network and need `EIGA_TMDB_API_KEY`; run with
//! `cargo test -- --ignored`.
use std::sync::Arc;

use eiga_lib::modules::catalog::MediaKind;
use eiga_lib::modules::provider::infrastructure::yts::ListParams;
use eiga_lib::{
    ApiConfig, DiscoveryService, FailurePolicy, KitsuClient, SearchService, SimilarityService,
    TmdbClient, YtsClient,
};

fn config() -> ApiConfig {
    ApiConfig::from_env().expect("EIGA_TMDB_API_KEY must be set for live tests")
}

#[tokio::test]
#[ignore] // Run with --ignored to test actual API calls
async fn browse_fan_out_returns_both_categories() {
    let config = config();
    let source = Arc::new(TmdbClient::new(&config).unwrap());
    let service = DiscoveryService::new(source, &config);

    let merged = service.fetch_all_content(1, 3).await.unwrap();

    assert!(!merged.movies.is_empty());
    assert!(!merged.tv_shows.is_empty());
    assert!(merged.total_pages.movies >= 1);

    // unique per category
    let mut ids: Vec<u32> = merged.movies.iter().map(|m| m.item.id()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), merged.movies.len());

    // metadata projection carries absolute image URLs
    assert!(merged
        .movies
        .iter()
        .filter_map(|m| m.metadata.poster_path.as_deref())
        .all(|url| url.starts_with("https://image.tmdb.org/t/p/original/")));
}

#[tokio::test]
#[ignore] // Run with --ignored to test actual API calls
async fn similar_titles_for_a_well_known_movie() {
    let config = config();
    let source = Arc::new(TmdbClient::new(&config).unwrap());

    // Inception
    let reference = source.movie_details(27205).await.unwrap();
    let service = SimilarityService::new(source);
    let ranked = service
        .rank_similar(&reference, FailurePolicy::Isolate)
        .await
        .unwrap();

    assert!(!ranked.is_empty());
    assert!(ranked.len() <= 20);
    for window in ranked.windows(2) {
        assert!(window[0].similarity_score >= window[1].similarity_score);
    }
}

#[tokio::test]
#[ignore] // Run with --ignored to test actual API calls
async fn multi_search_finds_people_credits() {
    let config = config();
    let source = Arc::new(TmdbClient::new(&config).unwrap());
    let service = SearchService::new(source, &config);

    let outcome = service.search("christopher nolan", 1).await.unwrap();
    assert!(!outcome.results.is_empty());
    assert!(outcome
        .results
        .iter()
        .any(|result| result.cast_info.is_some()));
}

#[tokio::test]
#[ignore] // Run with --ignored to test actual API calls
async fn kitsu_trending_normalizes_ratings() {
    let client = KitsuClient::new(&config()).unwrap();
    let anime = client.trending_anime(5).await.unwrap();

    assert!(!anime.is_empty());
    for entry in &anime {
        if let Some(rating) = entry.rating() {
            assert!((0.0..=10.0).contains(&rating));
        }
    }
}

#[tokio::test]
#[ignore] // Run with --ignored to test actual API calls
async fn kitsu_search_and_details_round_trip() {
    let client = KitsuClient::new(&config()).unwrap();

    let found = client.search_anime("attack on titan", 5).await.unwrap();
    assert!(!found.is_empty());

    let details = client.anime_details(&found[0].id).await.unwrap();
    assert_eq!(details.id, found[0].id);

    let seasonal = client.seasonal_anime(2023, 5).await.unwrap();
    assert!(!seasonal.is_empty());
}

#[tokio::test]
#[ignore] // Run with --ignored to test actual API calls
async fn yts_lists_movies_with_envelope_check() {
    let client = YtsClient::new(&config()).unwrap();
    let movies = client
        .list_movies(&ListParams::new().page(1, 5))
        .await
        .unwrap();

    assert!(!movies.is_empty());
    assert!(movies.len() <= 5);

    let details = client.movie_details(movies[0].id).await.unwrap();
    assert_eq!(details.id, movies[0].id);
}

#[tokio::test]
#[ignore] // Run with --ignored to test actual API calls
async fn yts_poster_lookup_swallows_misses() {
    let client = YtsClient::new(&config()).unwrap();

    let poster = client.poster_for("The Matrix").await;
    assert!(poster.is_some());

    let missing = client
        .poster_for("zzz definitely not a real film zzz")
        .await;
    assert!(missing.is_none());
}

#[tokio::test]
#[ignore] // Run with --ignored to test actual API calls
async fn trending_buckets_are_populated() {
    let config = config();
    let source = Arc::new(TmdbClient::new(&config).unwrap());
    let service = DiscoveryService::new(source, &config);

    let trending = service.fetch_trending().await.unwrap();
    assert!(!trending.trending.movies.is_empty());
    assert!(!trending.all_time.tv_shows.is_empty());
}

#[tokio::test]
#[ignore] // Run with --ignored to test actual API calls
async fn tv_similarity_uses_network_and_runtime() {
    let config = config();
    let source = Arc::new(TmdbClient::new(&config).unwrap());

    // Breaking Bad
    let reference = source.tv_details(1396).await.unwrap();
    assert_eq!(reference.kind, MediaKind::Tv);

    let service = SimilarityService::new(source);
    let ranked = service
        .rank_similar(&reference, FailurePolicy::Isolate)
        .await
        .unwrap();

    assert!(ranked
        .iter()
        .all(|c| c.similarity_details.network_match.is_some()));
}
