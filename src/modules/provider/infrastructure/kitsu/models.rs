use serde::Deserialize;

use crate::modules::catalog::ImageSet;

// JSON:API envelopes

#[derive(Debug, Clone, Deserialize)]
pub struct KitsuListResponse {
    #[serde(default)]
    pub data: Vec<KitsuAnimeResource>,
    #[serde(default)]
    pub meta: Option<KitsuMeta>,
    #[serde(default)]
    pub links: Option<KitsuLinks>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KitsuSingleResponse {
    pub data: KitsuAnimeResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KitsuMeta {
    #[serde(default)]
    pub count: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KitsuLinks {
    #[serde(default)]
    pub first: Option<String>,
    #[serde(default)]
    pub prev: Option<String>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub last: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KitsuAnimeResource {
    pub id: String,
    #[serde(default, rename = "type")]
    pub resource_type: Option<String>,
    pub attributes: KitsuAnimeAttributes,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KitsuAnimeAttributes {
    #[serde(default)]
    pub titles: KitsuTitles,
    #[serde(default)]
    pub canonical_title: Option<String>,
    #[serde(default)]
    pub average_rating: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub synopsis: Option<String>,
    #[serde(default)]
    pub poster_image: Option<ImageSet>,
    #[serde(default)]
    pub cover_image: Option<ImageSet>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct KitsuTitles {
    #[serde(default)]
    pub en: Option<String>,
    #[serde(default)]
    pub en_jp: Option<String>,
    #[serde(default)]
    pub ja_jp: Option<String>,
}
