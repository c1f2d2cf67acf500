use async_trait::async_trait;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::modules::catalog::{
    MediaDetails, MediaKind, MediaPage, Movie, PersonCredits, PersonMatch, TvShow,
};
use crate::modules::provider::domain::{DiscoverFilter, ListKind};
use crate::modules::provider::infrastructure::http_client::CatalogHttpClient;
use crate::modules::provider::traits::CatalogSource;
use crate::shared::errors::AppResult;

use super::mapper::TmdbMapper;
use super::models::{
    ExternalIdsDto, MovieDetailsDto, PagedResponse, PersonDto, PersonMovieCreditsDto,
    PersonTvCreditsDto, TvDetailsDto,
};

const DETAIL_APPEND: &str = "credits,videos,similar,recommendations";

/// Movie/TV metadata provider client. Thin per-endpoint methods plus the
/// [`CatalogSource`] implementation the aggregation services consume.
pub struct TmdbClient {
    http: CatalogHttpClient,
    base_url: String,
    api_key: String,
}

impl TmdbClient {
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        Ok(Self {
            http: CatalogHttpClient::new(30)?,
            base_url: config.tmdb_base_url.clone(),
            api_key: config.tmdb_api_key.clone(),
        })
    }

    /// Build an endpoint URL with the credential and extra parameters.
    fn url(&self, endpoint: &str, params: &[(String, String)]) -> String {
        let mut all = Vec::with_capacity(params.len() + 1);
        all.push(("api_key".to_string(), self.api_key.clone()));
        all.extend_from_slice(params);
        CatalogHttpClient::build_url(&self.base_url, endpoint, &all)
    }

    pub async fn movie_details(&self, id: u32) -> AppResult<MediaDetails> {
        log::info!("TMDB: Getting movie details for ID '{}'", id);

        let details_url = self.url(
            &format!("/movie/{}", id),
            &[("append_to_response".to_string(), DETAIL_APPEND.to_string())],
        );
        let ids_url = self.url(&format!("/movie/{}/external_ids", id), &[]);

        let (dto, external_ids): (MovieDetailsDto, ExternalIdsDto) = tokio::try_join!(
            self.http.get_json(&details_url),
            self.http.get_json(&ids_url),
        )?;

        Ok(TmdbMapper::movie_details(dto, external_ids))
    }

    pub async fn tv_details(&self, id: u32) -> AppResult<MediaDetails> {
        log::info!("TMDB: Getting TV show details for ID '{}'", id);

        let details_url = self.url(
            &format!("/tv/{}", id),
            &[("append_to_response".to_string(), DETAIL_APPEND.to_string())],
        );
        let ids_url = self.url(&format!("/tv/{}/external_ids", id), &[]);

        let (dto, external_ids): (TvDetailsDto, ExternalIdsDto) = tokio::try_join!(
            self.http.get_json(&details_url),
            self.http.get_json(&ids_url),
        )?;

        Ok(TmdbMapper::tv_details(dto, external_ids))
    }

    async fn media_page(&self, kind: MediaKind, url: &str) -> AppResult<MediaPage> {
        match kind {
            MediaKind::Movie => {
                let page: PagedResponse<Movie> = self.http.get_json(url).await?;
                Ok(TmdbMapper::movie_page(page))
            }
            MediaKind::Tv => {
                let page: PagedResponse<TvShow> = self.http.get_json(url).await?;
                Ok(TmdbMapper::tv_page(page))
            }
        }
    }
}

#[async_trait]
impl CatalogSource for TmdbClient {
    async fn list(&self, kind: MediaKind, list: ListKind, page: u32) -> AppResult<MediaPage> {
        let url = self.url(
            list.endpoint(kind),
            &[("page".to_string(), page.to_string())],
        );
        self.media_page(kind, &url).await
    }

    async fn discover(&self, kind: MediaKind, filter: DiscoverFilter) -> AppResult<MediaPage> {
        let endpoint = match kind {
            MediaKind::Movie => "/discover/movie",
            MediaKind::Tv => "/discover/tv",
        };
        let url = self.url(endpoint, &filter.to_query());
        self.media_page(kind, &url).await
    }

    async fn trending(&self, kind: MediaKind) -> AppResult<MediaPage> {
        let endpoint = match kind {
            MediaKind::Movie => "/trending/movie/week",
            MediaKind::Tv => "/trending/tv/week",
        };
        let url = self.url(endpoint, &[]);
        self.media_page(kind, &url).await
    }

    async fn details(&self, kind: MediaKind, id: u32) -> AppResult<MediaDetails> {
        match kind {
            MediaKind::Movie => self.movie_details(id).await,
            MediaKind::Tv => self.tv_details(id).await,
        }
    }

    async fn search_multi(&self, query: &str, page: u32) -> AppResult<MediaPage> {
        log::info!("TMDB: Multi search for '{}' (page {})", query, page);

        let url = self.url(
            "/search/multi",
            &[
                ("query".to_string(), query.to_string()),
                ("page".to_string(), page.to_string()),
                ("include_adult".to_string(), "false".to_string()),
            ],
        );
        let raw: PagedResponse<Value> = self.http.get_json(&url).await?;
        Ok(TmdbMapper::multi_page(raw))
    }

    async fn search_person(&self, query: &str) -> AppResult<Vec<PersonMatch>> {
        log::info!("TMDB: Person search for '{}'", query);

        let url = self.url(
            "/search/person",
            &[
                ("query".to_string(), query.to_string()),
                ("include_adult".to_string(), "false".to_string()),
            ],
        );
        let page: PagedResponse<PersonDto> = self.http.get_json(&url).await?;
        Ok(TmdbMapper::person_matches(page))
    }

    async fn person_credits(&self, kind: MediaKind, person_id: u32) -> AppResult<PersonCredits> {
        match kind {
            MediaKind::Movie => {
                let url = self.url(&format!("/person/{}/movie_credits", person_id), &[]);
                let dto: PersonMovieCreditsDto = self.http.get_json(&url).await?;
                Ok(TmdbMapper::movie_credits(dto))
            }
            MediaKind::Tv => {
                let url = self.url(&format!("/person/{}/tv_credits", person_id), &[]);
                let dto: PersonTvCreditsDto = self.http.get_json(&url).await?;
                Ok(TmdbMapper::tv_credits(dto))
            }
        }
    }
}
