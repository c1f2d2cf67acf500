use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::modules::provider::infrastructure::http_client::CatalogHttpClient;
use crate::shared::errors::{AppError, AppResult};

use super::models::{CoverImages, ListParams, MovieDetailsData, MovieListData, YtsEnvelope, YtsMovie};

/// Torrent index client. Every response arrives wrapped in a
/// `{status, status_message, data}` envelope; `data` is only read after
/// checking `status == "ok"`.
pub struct YtsClient {
    http: CatalogHttpClient,
    base_url: String,
}

impl YtsClient {
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        Ok(Self {
            http: CatalogHttpClient::new(30)?,
            base_url: config.yts_base_url.clone(),
        })
    }

    async fn request<T>(&self, endpoint: &str, params: &[(String, String)]) -> AppResult<T>
    where
        T: DeserializeOwned + Default,
    {
        let url = CatalogHttpClient::build_url(&self.base_url, endpoint, params);
        let envelope: YtsEnvelope<T> = self.http.get_json(&url).await?;

        if envelope.status != "ok" {
            return Err(AppError::UpstreamStatus(
                envelope
                    .status_message
                    .unwrap_or_else(|| format!("status '{}'", envelope.status)),
            ));
        }

        envelope
            .data
            .ok_or_else(|| AppError::InvalidResponse("envelope is missing 'data'".to_string()))
    }

    pub async fn list_movies(&self, params: &ListParams) -> AppResult<Vec<YtsMovie>> {
        log::info!("YTS: Listing movies (page {}, limit {})", params.page, params.limit);

        let data: MovieListData = self
            .request("/list_movies.json", &params.to_query())
            .await?;
        Ok(data.movies)
    }

    pub async fn movie_details(&self, movie_id: u32) -> AppResult<YtsMovie> {
        log::info!("YTS: Getting movie details for ID '{}'", movie_id);

        let data: MovieDetailsData = self
            .request(
                "/movie_details.json",
                &[("movie_id".to_string(), movie_id.to_string())],
            )
            .await?;
        Ok(data.movie)
    }

    pub async fn search(&self, query: &str) -> AppResult<Vec<YtsMovie>> {
        self.list_movies(&ListParams::new().query_term(query)).await
    }

    /// Cover images for the best title match, or `None` when the lookup
    /// fails or finds nothing. Failures are logged, not propagated; a
    /// missing poster must not break the page that asked for it.
    pub async fn poster_for(&self, title: &str) -> Option<CoverImages> {
        let params = ListParams::new().query_term(title).page(1, 1);

        match self.list_movies(&params).await {
            Ok(movies) => movies.into_iter().next().map(|movie| CoverImages {
                small: movie.small_cover_image,
                medium: movie.medium_cover_image,
                large: movie.large_cover_image,
            }),
            Err(e) => {
                log::warn!("YTS: Poster lookup for '{}' failed: {}", title, e);
                None
            }
        }
    }
}
