use serde_json::Value;

use crate::modules::catalog::{
    Award, CreditEntry, MediaDetails, MediaItem, MediaKind, MediaPage, Movie, PersonCredits,
    PersonMatch, TvShow,
};
use crate::modules::catalog::domain::entities::media_item::parse_year;

use super::models::{
    ExternalIdsDto, MovieDetailsDto, PagedResponse, PersonDto, PersonMovieCreditsDto,
    PersonTvCreditsDto, TvDetailsDto,
};

/// Converts transport payloads into the domain model.
pub struct TmdbMapper;

impl TmdbMapper {
    pub fn movie_page(page: PagedResponse<Movie>) -> MediaPage {
        MediaPage {
            page: page.page.unwrap_or(1),
            results: page.results.into_iter().map(MediaItem::Movie).collect(),
            total_pages: page.total_pages.unwrap_or(1),
            total_results: page.total_results.unwrap_or(0),
        }
    }

    pub fn tv_page(page: PagedResponse<TvShow>) -> MediaPage {
        MediaPage {
            page: page.page.unwrap_or(1),
            results: page.results.into_iter().map(MediaItem::Tv).collect(),
            total_pages: page.total_pages.unwrap_or(1),
            total_results: page.total_results.unwrap_or(0),
        }
    }

    /// `search/multi` rows are self-tagged via `media_type`. Person rows
    /// and rows that fail to decode are dropped; the union has no person
    /// variant and one malformed row must not sink the page.
    pub fn multi_page(page: PagedResponse<Value>) -> MediaPage {
        let total = page.results.len();
        let results: Vec<MediaItem> = page
            .results
            .into_iter()
            .filter_map(Self::multi_entry)
            .collect();
        if results.len() < total {
            log::debug!(
                "TMDB: Dropped {} non-media rows from multi search page",
                total - results.len()
            );
        }
        MediaPage {
            page: page.page.unwrap_or(1),
            results,
            total_pages: page.total_pages.unwrap_or(1),
            total_results: page.total_results.unwrap_or(0),
        }
    }

    fn multi_entry(value: Value) -> Option<MediaItem> {
        match value.get("media_type").and_then(Value::as_str) {
            Some("movie") => serde_json::from_value::<Movie>(value)
                .ok()
                .map(MediaItem::Movie),
            Some("tv") => serde_json::from_value::<TvShow>(value)
                .ok()
                .map(MediaItem::Tv),
            _ => None,
        }
    }

    pub fn person_matches(page: PagedResponse<PersonDto>) -> Vec<PersonMatch> {
        page.results
            .into_iter()
            .map(|p| PersonMatch {
                id: p.id,
                name: p.name.unwrap_or_default(),
                popularity: p.popularity.unwrap_or(0.0),
                profile_path: p.profile_path,
            })
            .collect()
    }

    pub fn movie_credits(credits: PersonMovieCreditsDto) -> PersonCredits {
        PersonCredits {
            cast: credits
                .cast
                .into_iter()
                .map(|c| CreditEntry {
                    item: MediaItem::Movie(c.movie),
                    character: c.character,
                    job: None,
                })
                .collect(),
            crew: credits
                .crew
                .into_iter()
                .map(|c| CreditEntry {
                    item: MediaItem::Movie(c.movie),
                    character: None,
                    job: c.job,
                })
                .collect(),
        }
    }

    pub fn tv_credits(credits: PersonTvCreditsDto) -> PersonCredits {
        PersonCredits {
            cast: credits
                .cast
                .into_iter()
                .map(|c| CreditEntry {
                    item: MediaItem::Tv(c.show),
                    character: c.character,
                    job: None,
                })
                .collect(),
            crew: credits
                .crew
                .into_iter()
                .map(|c| CreditEntry {
                    item: MediaItem::Tv(c.show),
                    character: None,
                    job: c.job,
                })
                .collect(),
        }
    }

    pub fn movie_details(dto: MovieDetailsDto, external_ids: ExternalIdsDto) -> MediaDetails {
        let vote_average = dto.vote_average.unwrap_or(0.0);
        let year = parse_year(dto.release_date.as_deref());
        let credits = dto.credits.unwrap_or_default();

        MediaDetails {
            kind: MediaKind::Movie,
            id: dto.id,
            title: dto.title.unwrap_or_default(),
            original_language: dto.original_language,
            overview: dto.overview,
            release_date: dto.release_date,
            genres: dto.genres,
            popularity: dto.popularity.unwrap_or(0.0),
            vote_average,
            vote_count: dto.vote_count.unwrap_or(0),
            poster_path: dto.poster_path,
            backdrop_path: dto.backdrop_path,
            runtime: dto.runtime,
            revenue: dto.revenue,
            budget: dto.budget,
            number_of_seasons: None,
            number_of_episodes: None,
            episode_run_time: Vec::new(),
            networks: Vec::new(),
            created_by: Vec::new(),
            cast: credits.cast,
            crew: credits.crew,
            videos: dto.videos.map(|v| v.results).unwrap_or_default(),
            similar: dto
                .similar
                .map(|p| Self::movie_page(p).results)
                .unwrap_or_default(),
            recommendations: dto
                .recommendations
                .map(|p| Self::movie_page(p).results)
                .unwrap_or_default(),
            external_ids,
            awards: Award::synthesize(MediaKind::Movie, vote_average, year),
        }
    }

    pub fn tv_details(dto: TvDetailsDto, external_ids: ExternalIdsDto) -> MediaDetails {
        let vote_average = dto.vote_average.unwrap_or(0.0);
        let year = parse_year(dto.first_air_date.as_deref());
        let credits = dto.credits.unwrap_or_default();

        MediaDetails {
            kind: MediaKind::Tv,
            id: dto.id,
            title: dto.name.unwrap_or_default(),
            original_language: dto.original_language,
            overview: dto.overview,
            release_date: dto.first_air_date,
            genres: dto.genres,
            popularity: dto.popularity.unwrap_or(0.0),
            vote_average,
            vote_count: dto.vote_count.unwrap_or(0),
            poster_path: dto.poster_path,
            backdrop_path: dto.backdrop_path,
            runtime: None,
            revenue: None,
            budget: None,
            number_of_seasons: dto.number_of_seasons,
            number_of_episodes: dto.number_of_episodes,
            episode_run_time: dto.episode_run_time,
            networks: dto.networks,
            created_by: dto.created_by,
            cast: credits.cast,
            crew: credits.crew,
            videos: dto.videos.map(|v| v.results).unwrap_or_default(),
            similar: dto
                .similar
                .map(|p| Self::tv_page(p).results)
                .unwrap_or_default(),
            recommendations: dto
                .recommendations
                .map(|p| Self::tv_page(p).results)
                .unwrap_or_default(),
            external_ids,
            awards: Award::synthesize(MediaKind::Tv, vote_average, year),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn multi_page_drops_person_rows() {
        let page: PagedResponse<Value> = serde_json::from_value(json!({
            "page": 1,
            "results": [
                {"media_type": "movie", "id": 1, "title": "Heat"},
                {"media_type": "person", "id": 2, "name": "Al Pacino"},
                {"media_type": "tv", "id": 3, "name": "Luther"},
            ],
            "total_pages": 1,
            "total_results": 3
        }))
        .unwrap();

        let mapped = TmdbMapper::multi_page(page);
        let ids: Vec<u32> = mapped.results.iter().map(MediaItem::id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(mapped.results[0].kind(), MediaKind::Movie);
        assert_eq!(mapped.results[1].kind(), MediaKind::Tv);
    }

    #[test]
    fn movie_details_tolerates_missing_sub_resources() {
        let dto: MovieDetailsDto = serde_json::from_value(json!({
            "id": 27205,
            "title": "Inception",
            "release_date": "2010-07-15",
            "vote_average": 8.4
        }))
        .unwrap();

        let details = TmdbMapper::movie_details(dto, ExternalIdsDto::default());
        assert!(details.cast.is_empty());
        assert!(details.similar.is_empty());
        assert_eq!(details.release_year(), Some(2010));
        // vote_average 8.4 synthesizes the top award tier
        assert_eq!(details.awards.len(), 2);
        assert_eq!(details.awards[0].year, Some(2010));
    }

    #[test]
    fn tv_details_keeps_networks_and_creators() {
        let dto: TvDetailsDto = serde_json::from_value(json!({
            "id": 1396,
            "name": "Breaking Bad",
            "first_air_date": "2008-01-20",
            "vote_average": 8.9,
            "episode_run_time": [45, 47],
            "networks": [{"id": 174, "name": "AMC"}],
            "created_by": [{"id": 66633, "name": "Vince Gilligan"}]
        }))
        .unwrap();

        let details = TmdbMapper::tv_details(dto, ExternalIdsDto::default());
        assert_eq!(details.kind, MediaKind::Tv);
        assert_eq!(details.primary_episode_run_time(), Some(45));
        assert_eq!(details.networks[0].name, "AMC");
        assert_eq!(details.awards[0].name, "Emmy Award");
    }

    #[test]
    fn credit_rows_flatten_title_fields() {
        let dto: PersonMovieCreditsDto = serde_json::from_value(json!({
            "cast": [{"id": 603, "title": "The Matrix", "character": "Neo", "poster_path": "/m.jpg"}],
            "crew": [{"id": 9340, "title": "The Animatrix", "job": "Director"}]
        }))
        .unwrap();

        let credits = TmdbMapper::movie_credits(dto);
        assert_eq!(credits.cast[0].item.display_title(), "The Matrix");
        assert_eq!(credits.cast[0].character.as_deref(), Some("Neo"));
        assert_eq!(credits.crew[0].job.as_deref(), Some("Director"));
    }
}
