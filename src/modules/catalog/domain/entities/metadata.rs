use serde::Serialize;

use super::media_details::{Award, MediaDetails};
use super::media_item::{MediaItem, MediaKind};
use crate::modules::catalog::domain::value_objects::image::{resolve_image_url, ImageSize};

/// Flattened projection attached to every merged item: the summary fields
/// with image fragments resolved to absolute CDN URLs, plus the optional
/// search annotations (who the title was matched through, which awards
/// matched). Structural copy only; building one never fetches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemMetadata {
    pub id: u32,
    pub media_type: MediaKind,
    pub title: String,
    pub overview: Option<String>,
    pub release_date: Option<String>,
    pub popularity: f64,
    pub vote_average: f64,
    pub vote_count: u32,
    pub genre_ids: Vec<u32>,
    pub original_language: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cast_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matching_awards: Option<Vec<Award>>,
}

impl ItemMetadata {
    pub fn project(item: &MediaItem, image_base: &str) -> Self {
        Self {
            id: item.id(),
            media_type: item.kind(),
            title: item.display_title().to_string(),
            overview: item.overview().map(str::to_string),
            release_date: item.release_date().map(str::to_string),
            popularity: item.popularity(),
            vote_average: item.vote_average(),
            vote_count: item.vote_count(),
            genre_ids: item.genre_ids().to_vec(),
            original_language: match item {
                MediaItem::Movie(m) => m.original_language.clone(),
                MediaItem::Tv(t) => t.original_language.clone(),
            },
            poster_path: resolve_image_url(image_base, ImageSize::Original, item.poster_path()),
            backdrop_path: resolve_image_url(image_base, ImageSize::Original, item.backdrop_path()),
            cast_info: None,
            role: None,
            matching_awards: None,
        }
    }

    /// Same projection, built from a detail record (the award search path
    /// works on full details rather than summary rows).
    pub fn project_details(details: &MediaDetails, image_base: &str) -> Self {
        Self {
            id: details.id,
            media_type: details.kind,
            title: details.title.clone(),
            overview: details.overview.clone(),
            release_date: details.release_date.clone(),
            popularity: details.popularity,
            vote_average: details.vote_average,
            vote_count: details.vote_count,
            genre_ids: details.genres.iter().map(|g| g.id).collect(),
            original_language: details.original_language.clone(),
            poster_path: resolve_image_url(
                image_base,
                ImageSize::Original,
                details.poster_path.as_deref(),
            ),
            backdrop_path: resolve_image_url(
                image_base,
                ImageSize::Original,
                details.backdrop_path.as_deref(),
            ),
            cast_info: None,
            role: None,
            matching_awards: None,
        }
    }

    pub fn with_cast_info(mut self, cast_info: impl Into<String>, role: impl Into<String>) -> Self {
        self.cast_info = Some(cast_info.into());
        self.role = Some(role.into());
        self
    }

    pub fn with_matching_awards(mut self, awards: Vec<Award>) -> Self {
        self.matching_awards = Some(awards);
        self
    }
}
