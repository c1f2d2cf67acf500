use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// The two TMDB content categories. An id is only unique within one
/// category; category + id is the real key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Tv,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u32,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub popularity: Option<f64>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub vote_count: Option<u32>,
    #[serde(default)]
    pub genre_ids: Vec<u32>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub original_language: Option<String>,
    #[serde(default)]
    pub revenue: Option<u64>,
    #[serde(default)]
    pub budget: Option<u64>,
    #[serde(default)]
    pub runtime: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TvShow {
    pub id: u32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub original_name: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub popularity: Option<f64>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub vote_count: Option<u32>,
    #[serde(default)]
    pub genre_ids: Vec<u32>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub original_language: Option<String>,
    #[serde(default)]
    pub origin_country: Vec<String>,
    #[serde(default)]
    pub number_of_seasons: Option<u32>,
    #[serde(default)]
    pub number_of_episodes: Option<u32>,
    #[serde(default)]
    pub episode_run_time: Vec<u32>,
}

/// One catalog title, tagged by category. Gives the rest of the engine a
/// single shape to rank, merge, and project without caring which list or
/// endpoint produced the record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "media_type", rename_all = "lowercase")]
pub enum MediaItem {
    Movie(Movie),
    Tv(TvShow),
}

impl MediaItem {
    pub fn kind(&self) -> MediaKind {
        match self {
            MediaItem::Movie(_) => MediaKind::Movie,
            MediaItem::Tv(_) => MediaKind::Tv,
        }
    }

    pub fn id(&self) -> u32 {
        match self {
            MediaItem::Movie(m) => m.id,
            MediaItem::Tv(t) => t.id,
        }
    }

    /// Title for movies, name for series; empty when the upstream record
    /// carries neither.
    pub fn display_title(&self) -> &str {
        match self {
            MediaItem::Movie(m) => m.title.as_deref().unwrap_or(""),
            MediaItem::Tv(t) => t.name.as_deref().unwrap_or(""),
        }
    }

    /// `release_date` for movies, `first_air_date` for series.
    pub fn release_date(&self) -> Option<&str> {
        match self {
            MediaItem::Movie(m) => m.release_date.as_deref(),
            MediaItem::Tv(t) => t.first_air_date.as_deref(),
        }
    }

    pub fn release_year(&self) -> Option<i32> {
        parse_year(self.release_date())
    }

    pub fn popularity(&self) -> f64 {
        match self {
            MediaItem::Movie(m) => m.popularity,
            MediaItem::Tv(t) => t.popularity,
        }
        .unwrap_or(0.0)
    }

    pub fn vote_average(&self) -> f64 {
        match self {
            MediaItem::Movie(m) => m.vote_average,
            MediaItem::Tv(t) => t.vote_average,
        }
        .unwrap_or(0.0)
    }

    pub fn vote_count(&self) -> u32 {
        match self {
            MediaItem::Movie(m) => m.vote_count,
            MediaItem::Tv(t) => t.vote_count,
        }
        .unwrap_or(0)
    }

    pub fn genre_ids(&self) -> &[u32] {
        match self {
            MediaItem::Movie(m) => &m.genre_ids,
            MediaItem::Tv(t) => &t.genre_ids,
        }
    }

    pub fn poster_path(&self) -> Option<&str> {
        match self {
            MediaItem::Movie(m) => m.poster_path.as_deref(),
            MediaItem::Tv(t) => t.poster_path.as_deref(),
        }
    }

    pub fn backdrop_path(&self) -> Option<&str> {
        match self {
            MediaItem::Movie(m) => m.backdrop_path.as_deref(),
            MediaItem::Tv(t) => t.backdrop_path.as_deref(),
        }
    }

    pub fn overview(&self) -> Option<&str> {
        match self {
            MediaItem::Movie(m) => m.overview.as_deref(),
            MediaItem::Tv(t) => t.overview.as_deref(),
        }
    }
}

/// One page of catalog results, in upstream pagination shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MediaPage {
    pub page: u32,
    pub results: Vec<MediaItem>,
    pub total_pages: u32,
    pub total_results: u32,
}

pub(crate) fn parse_year(date: Option<&str>) -> Option<i32> {
    let date = date?;
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .map(|d| d.year())
}
