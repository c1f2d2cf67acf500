use std::sync::Arc;

use chrono::Datelike;
use futures::future;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::ApiConfig;
use crate::modules::catalog::{ContentMerger, ItemMetadata, MediaItem, MediaKind};
use crate::modules::provider::domain::{DiscoverFilter, ListKind};
use crate::modules::provider::traits::CatalogSource;
use crate::shared::errors::{AppError, AppResult};

/// Upstream keyword id that tags anime series in the TV discovery index.
const ANIME_KEYWORD_ID: u32 = 210024;

/// Vote-count floor for the all-time lists, so a handful of votes cannot
/// put an unknown title above the classics.
const ALL_TIME_VOTE_FLOOR: u32 = 1000;

/// One merged browse row: the raw catalog item plus its flattened
/// metadata projection with absolute image URLs.
#[derive(Debug, Clone, Serialize)]
pub struct BrowseItem {
    #[serde(flatten)]
    pub item: MediaItem,
    pub metadata: ItemMetadata,
}

/// Unified browse result: one unique item set per category plus the
/// deepest pagination horizon seen across the contributing endpoints.
/// Built fresh per fetch cycle and owned by the caller; nothing is cached
/// between cycles.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MergedContent {
    pub movies: Vec<BrowseItem>,
    pub tv_shows: Vec<BrowseItem>,
    pub total_pages: TotalPages,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TotalPages {
    pub movies: u32,
    pub tv_shows: u32,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TrendingContent {
    pub trending: TrendingBucket,
    pub this_year: CategoryBucket,
    pub all_time: CategoryBucket,
    pub upcoming: CategoryBucket,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TrendingBucket {
    pub movies: Vec<MediaItem>,
    pub tv_shows: Vec<MediaItem>,
    pub anime: Vec<MediaItem>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CategoryBucket {
    pub movies: Vec<MediaItem>,
    pub tv_shows: Vec<MediaItem>,
}

/// Fans out the browse and trending request matrices and consolidates
/// the responses into the unified content model.
///
/// Batches are all-or-nothing: every request is dispatched before any is
/// awaited, and the first failure rejects the whole batch with no
/// partial result surfacing to the caller.
pub struct DiscoveryService {
    source: Arc<dyn CatalogSource>,
    image_base: String,
}

impl DiscoveryService {
    pub fn new(source: Arc<dyn CatalogSource>, config: &ApiConfig) -> Self {
        Self {
            source,
            image_base: config.image_base_url.clone(),
        }
    }

    /// Fetch `window` consecutive pages of every listing endpoint for
    /// both categories (8 endpoint kinds, so `8 * window` requests) and
    /// merge them into one unique set per category.
    ///
    /// Each response carries its `(category, listing)` tag from dispatch
    /// time; grouping never relies on response positions.
    pub async fn fetch_all_content(&self, start_page: u32, window: u32) -> AppResult<MergedContent> {
        let start_page = start_page.max(1);
        let mut requests = Vec::with_capacity(window as usize * 8);

        for offset in 0..window {
            let page = start_page + offset;
            for kind in [MediaKind::Movie, MediaKind::Tv] {
                for list in ListKind::ALL {
                    let source = Arc::clone(&self.source);
                    requests.push(async move {
                        let response = source.list(kind, list, page).await?;
                        Ok::<_, AppError>((kind, list, response))
                    });
                }
            }
        }

        debug!(
            requests = requests.len(),
            start_page, window, "Dispatching browse fan-out"
        );
        let tagged = future::try_join_all(requests).await?;

        let mut movie_groups: [Vec<MediaItem>; 4] = Default::default();
        let mut tv_groups: [Vec<MediaItem>; 4] = Default::default();
        let mut total_pages = TotalPages { movies: 1, tv_shows: 1 };

        for (kind, list, page) in tagged {
            let pages = page.total_pages.max(1);
            match kind {
                MediaKind::Movie => {
                    total_pages.movies = total_pages.movies.max(pages);
                    movie_groups[list.index()].extend(page.results);
                }
                MediaKind::Tv => {
                    total_pages.tv_shows = total_pages.tv_shows.max(pages);
                    tv_groups[list.index()].extend(page.results);
                }
            }
        }

        let movies = self.project(ContentMerger::merge_by_id(movie_groups.into_iter().collect()));
        let tv_shows = self.project(ContentMerger::merge_by_id(tv_groups.into_iter().collect()));

        info!(
            movies = movies.len(),
            tv_shows = tv_shows.len(),
            "Merged browse content"
        );

        Ok(MergedContent {
            movies,
            tv_shows,
            total_pages,
        })
    }

    fn project(&self, items: Vec<MediaItem>) -> Vec<BrowseItem> {
        let metadata = ContentMerger::attach_metadata(&items, &self.image_base);
        items
            .into_iter()
            .zip(metadata)
            .map(|(item, metadata)| BrowseItem { item, metadata })
            .collect()
    }

    /// The landing-page fan-out: trending this week, anime, popular this
    /// year, all-time top rated, and upcoming, in one all-or-nothing
    /// batch.
    pub async fn fetch_trending(&self) -> AppResult<TrendingContent> {
        let current_year = chrono::Utc::now().year();

        let (
            trending_movies,
            trending_tv,
            anime,
            this_year_movies,
            this_year_tv,
            all_time_movies,
            all_time_tv,
            upcoming_movies,
            on_air_tv,
        ) = tokio::try_join!(
            self.source.trending(MediaKind::Movie),
            self.source.trending(MediaKind::Tv),
            self.source.discover(
                MediaKind::Tv,
                DiscoverFilter::new()
                    .sort_by("popularity.asc")
                    .with_keywords(ANIME_KEYWORD_ID),
            ),
            self.source.discover(
                MediaKind::Movie,
                DiscoverFilter::new()
                    .sort_by("popularity.desc")
                    .primary_release_year(current_year),
            ),
            self.source.discover(
                MediaKind::Tv,
                DiscoverFilter::new()
                    .sort_by("popularity.desc")
                    .first_air_date_year(current_year),
            ),
            self.source.discover(
                MediaKind::Movie,
                DiscoverFilter::new()
                    .sort_by("vote_average.desc")
                    .vote_count_gte(ALL_TIME_VOTE_FLOOR),
            ),
            self.source.discover(
                MediaKind::Tv,
                DiscoverFilter::new()
                    .sort_by("vote_average.desc")
                    .vote_count_gte(ALL_TIME_VOTE_FLOOR),
            ),
            self.source.list(MediaKind::Movie, ListKind::Upcoming, 1),
            self.source.list(MediaKind::Tv, ListKind::Upcoming, 1),
        )?;

        info!("Fetched trending content buckets");

        Ok(TrendingContent {
            trending: TrendingBucket {
                movies: trending_movies.results,
                tv_shows: trending_tv.results,
                anime: anime.results,
            },
            this_year: CategoryBucket {
                movies: this_year_movies.results,
                tv_shows: this_year_tv.results,
            },
            all_time: CategoryBucket {
                movies: all_time_movies.results,
                tv_shows: all_time_tv.results,
            },
            upcoming: CategoryBucket {
                movies: upcoming_movies.results,
                tv_shows: on_air_tv.results,
            },
        })
    }
}
