use serde::{Deserialize, Serialize};

use super::media_item::parse_year;

/// Image URLs in the sizes the anime catalog publishes. Already absolute,
/// unlike the movie/TV poster fragments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageSet {
    #[serde(default)]
    pub original: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
    #[serde(default)]
    pub small: Option<String>,
    #[serde(default)]
    pub tiny: Option<String>,
}

/// One anime title from the anime catalog service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimeEntry {
    pub id: String,
    pub canonical_title: String,
    pub title_en: Option<String>,
    pub title_ja: Option<String>,
    /// String-encoded 0-100 scale as delivered by the upstream.
    pub average_rating: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub synopsis: Option<String>,
    pub poster_image: Option<ImageSet>,
    pub cover_image: Option<ImageSet>,
}

impl AnimeEntry {
    /// Rating on the 0-10 scale used everywhere else ("85" -> 8.5).
    pub fn rating(&self) -> Option<f64> {
        self.average_rating
            .as_deref()?
            .parse::<f64>()
            .ok()
            .map(|r| r / 10.0)
    }

    pub fn release_year(&self) -> Option<i32> {
        parse_year(self.start_date.as_deref())
    }
}
