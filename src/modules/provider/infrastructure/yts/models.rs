use serde::Deserialize;

/// Listing options for the torrent index. Built per call with the
/// consuming setters; a fresh value never shares state with a previous
/// request. `limit` is clamped to the upstream's 1..=50 range and `page`
/// to >= 1 at set time.
#[derive(Debug, Clone, PartialEq)]
pub struct ListParams {
    pub limit: u32,
    pub page: u32,
    pub quality: Option<String>,
    pub minimum_rating: u8,
    pub query_term: Option<String>,
    pub genre: Option<String>,
    pub sort_by: String,
    pub order_by: String,
    pub with_rt_ratings: bool,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            limit: 20,
            page: 1,
            quality: None,
            minimum_rating: 0,
            query_term: None,
            genre: None,
            sort_by: "date_added".to_string(),
            order_by: "desc".to_string(),
            with_rt_ratings: false,
        }
    }
}

impl ListParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query_term(mut self, query: impl Into<String>) -> Self {
        self.query_term = Some(query.into());
        self
    }

    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn quality(mut self, quality: impl Into<String>) -> Self {
        self.quality = Some(quality.into());
        self
    }

    pub fn minimum_rating(mut self, rating: u8) -> Self {
        self.minimum_rating = rating.min(9);
        self
    }

    pub fn sort(mut self, sort_by: impl Into<String>, order_by: impl Into<String>) -> Self {
        self.sort_by = sort_by.into();
        self.order_by = order_by.into();
        self
    }

    pub fn page(mut self, page: u32, limit: u32) -> Self {
        self.page = page.max(1);
        self.limit = limit.clamp(1, 50);
        self
    }

    pub fn with_rt_ratings(mut self, enabled: bool) -> Self {
        self.with_rt_ratings = enabled;
        self
    }

    /// Query pairs; unset options are omitted, never sent as "null".
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("limit".to_string(), self.limit.to_string()),
            ("page".to_string(), self.page.to_string()),
            ("minimum_rating".to_string(), self.minimum_rating.to_string()),
            ("sort_by".to_string(), self.sort_by.clone()),
            ("order_by".to_string(), self.order_by.clone()),
            (
                "with_rt_ratings".to_string(),
                self.with_rt_ratings.to_string(),
            ),
        ];
        if let Some(quality) = &self.quality {
            params.push(("quality".to_string(), quality.clone()));
        }
        if let Some(query) = &self.query_term {
            params.push(("query_term".to_string(), query.clone()));
        }
        if let Some(genre) = &self.genre {
            params.push(("genre".to_string(), genre.clone()));
        }
        params
    }
}

// Response envelope: `data` is only trustworthy when `status == "ok"`.

#[derive(Debug, Clone, Deserialize)]
pub struct YtsEnvelope<T> {
    pub status: String,
    #[serde(default)]
    pub status_message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieListData {
    #[serde(default)]
    pub movie_count: Option<u32>,
    #[serde(default)]
    pub movies: Vec<YtsMovie>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieDetailsData {
    pub movie: YtsMovie,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct YtsMovie {
    pub id: u32,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub imdb_code: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub title_english: Option<String>,
    #[serde(default)]
    pub title_long: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub year: Option<u32>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub synopsis: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub mpa_rating: Option<String>,
    #[serde(default)]
    pub background_image: Option<String>,
    #[serde(default)]
    pub small_cover_image: Option<String>,
    #[serde(default)]
    pub medium_cover_image: Option<String>,
    #[serde(default)]
    pub large_cover_image: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub torrents: Vec<Torrent>,
    #[serde(default)]
    pub date_uploaded: Option<String>,
    #[serde(default)]
    pub date_uploaded_unix: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Torrent {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub hash: Option<String>,
    #[serde(default)]
    pub quality: Option<String>,
    #[serde(default, rename = "type")]
    pub torrent_type: Option<String>,
    #[serde(default)]
    pub seeds: Option<u32>,
    #[serde(default)]
    pub peers: Option<u32>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub size_bytes: Option<u64>,
    #[serde(default)]
    pub date_uploaded: Option<String>,
    #[serde(default)]
    pub date_uploaded_unix: Option<i64>,
}

/// The three poster sizes published per title.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverImages {
    pub small: Option<String>,
    pub medium: Option<String>,
    pub large: Option<String>,
}
