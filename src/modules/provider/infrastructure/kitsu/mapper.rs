use crate::modules::catalog::AnimeEntry;

use super::models::KitsuAnimeResource;

pub struct KitsuMapper;

impl KitsuMapper {
    pub fn to_domain(resource: KitsuAnimeResource) -> AnimeEntry {
        let attributes = resource.attributes;
        AnimeEntry {
            id: resource.id,
            canonical_title: attributes.canonical_title.unwrap_or_default(),
            title_en: attributes.titles.en,
            title_ja: attributes.titles.ja_jp,
            average_rating: attributes.average_rating,
            start_date: attributes.start_date,
            end_date: attributes.end_date,
            synopsis: attributes.synopsis,
            poster_image: attributes.poster_image,
            cover_image: attributes.cover_image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_api_resource_maps_to_entry() {
        let resource: KitsuAnimeResource = serde_json::from_value(json!({
            "id": "7442",
            "type": "anime",
            "attributes": {
                "titles": {"en": "Attack on Titan", "ja_jp": "進撃の巨人"},
                "canonicalTitle": "Attack on Titan",
                "averageRating": "85",
                "startDate": "2013-04-07",
                "synopsis": "Humanity fights for survival.",
                "posterImage": {"original": "https://media.kitsu.io/poster.jpg"}
            }
        }))
        .unwrap();

        let entry = KitsuMapper::to_domain(resource);
        assert_eq!(entry.canonical_title, "Attack on Titan");
        assert_eq!(entry.rating(), Some(8.5));
        assert_eq!(
            entry.poster_image.unwrap().original.as_deref(),
            Some("https://media.kitsu.io/poster.jpg")
        );
    }
}
