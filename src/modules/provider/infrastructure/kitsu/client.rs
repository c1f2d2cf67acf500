use crate::config::ApiConfig;
use crate::modules::catalog::AnimeEntry;
use crate::modules::provider::infrastructure::http_client::CatalogHttpClient;
use crate::shared::errors::AppResult;

use super::mapper::KitsuMapper;
use super::models::{KitsuListResponse, KitsuSingleResponse};

// JSON:API content negotiation, required on every request.
const JSON_API_HEADERS: [(&str, &str); 2] = [
    ("Accept", "application/vnd.api+json"),
    ("Content-Type", "application/vnd.api+json"),
];

/// Anime catalog client (JSON:API upstream).
pub struct KitsuClient {
    http: CatalogHttpClient,
    base_url: String,
}

impl KitsuClient {
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        Ok(Self {
            http: CatalogHttpClient::new(30)?,
            base_url: config.kitsu_base_url.clone(),
        })
    }

    pub async fn search_anime(&self, query: &str, limit: u32) -> AppResult<Vec<AnimeEntry>> {
        log::info!("Kitsu: Searching anime for '{}' (limit {})", query, limit);

        let url = CatalogHttpClient::build_url(
            &self.base_url,
            "/anime",
            &[
                ("filter[text]".to_string(), query.to_string()),
                ("page[limit]".to_string(), limit.to_string()),
            ],
        );
        let response: KitsuListResponse = self.http.get_json_with_headers(&url, &JSON_API_HEADERS).await?;

        Ok(response.data.into_iter().map(KitsuMapper::to_domain).collect())
    }

    /// Recently started, highly rated titles: rating band 80..100 sorted
    /// by newest start date.
    pub async fn trending_anime(&self, limit: u32) -> AppResult<Vec<AnimeEntry>> {
        log::info!("Kitsu: Getting trending anime (limit {})", limit);

        let url = CatalogHttpClient::build_url(
            &self.base_url,
            "/anime",
            &[
                ("filter[averageRating]".to_string(), "80..100".to_string()),
                ("sort".to_string(), "-startDate".to_string()),
                ("page[limit]".to_string(), limit.to_string()),
            ],
        );
        let response: KitsuListResponse = self.http.get_json_with_headers(&url, &JSON_API_HEADERS).await?;

        Ok(response.data.into_iter().map(KitsuMapper::to_domain).collect())
    }

    /// Top rated titles of one season year.
    pub async fn seasonal_anime(&self, year: i32, limit: u32) -> AppResult<Vec<AnimeEntry>> {
        log::info!("Kitsu: Getting anime for season year {}", year);

        let url = CatalogHttpClient::build_url(
            &self.base_url,
            "/anime",
            &[
                ("filter[seasonYear]".to_string(), year.to_string()),
                ("sort".to_string(), "-averageRating".to_string()),
                ("page[limit]".to_string(), limit.to_string()),
            ],
        );
        let response: KitsuListResponse = self.http.get_json_with_headers(&url, &JSON_API_HEADERS).await?;

        Ok(response.data.into_iter().map(KitsuMapper::to_domain).collect())
    }

    pub async fn anime_details(&self, id: &str) -> AppResult<AnimeEntry> {
        log::info!("Kitsu: Getting anime details for ID '{}'", id);

        let url = CatalogHttpClient::build_url(
            &self.base_url,
            &format!("/anime/{}", id),
            &[("include".to_string(), "categories,characters".to_string())],
        );
        let response: KitsuSingleResponse = self.http.get_json_with_headers(&url, &JSON_API_HEADERS).await?;

        Ok(KitsuMapper::to_domain(response.data))
    }
}
