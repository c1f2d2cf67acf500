use crate::shared::errors::{AppError, AppResult};

pub const TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const TMDB_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";
pub const KITSU_BASE_URL: &str = "https://kitsu.io/api/edge";
pub const YTS_BASE_URL: &str = "https://yts.mx/api/v2";

/// Upstream endpoints and credentials. Built once and cloned into the
/// clients; never mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub tmdb_api_key: String,
    pub tmdb_base_url: String,
    pub image_base_url: String,
    pub kitsu_base_url: String,
    pub yts_base_url: String,
}

impl ApiConfig {
    pub fn new(tmdb_api_key: impl Into<String>) -> Self {
        Self {
            tmdb_api_key: tmdb_api_key.into(),
            tmdb_base_url: TMDB_BASE_URL.to_string(),
            image_base_url: TMDB_IMAGE_BASE_URL.to_string(),
            kitsu_base_url: KITSU_BASE_URL.to_string(),
            yts_base_url: YTS_BASE_URL.to_string(),
        }
    }

    /// Read the TMDB credential from `EIGA_TMDB_API_KEY` (a `.env` file is
    /// honored when present).
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let api_key = std::env::var("EIGA_TMDB_API_KEY").map_err(|_| {
            AppError::InvalidInput("EIGA_TMDB_API_KEY is not set".to_string())
        })?;
        Ok(Self::new(api_key))
    }
}
