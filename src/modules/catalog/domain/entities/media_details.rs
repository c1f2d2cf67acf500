use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::credits::{CastMember, Creator, CrewMember};
use super::media_item::{parse_year, MediaItem, MediaKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u32,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    pub id: u32,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub site: Option<String>,
    #[serde(default, rename = "type")]
    pub video_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternalIds {
    #[serde(default)]
    pub imdb_id: Option<String>,
    #[serde(default)]
    pub tvdb_id: Option<u32>,
    #[serde(default)]
    pub facebook_id: Option<String>,
    #[serde(default)]
    pub instagram_id: Option<String>,
    #[serde(default)]
    pub twitter_id: Option<String>,
}

/// TMDB carries no award data, so the detail layer synthesizes a plausible
/// list from the vote average. Thresholds: >= 8 gets the top-tier pair,
/// >= 7 a Critics' Choice nod, below that nothing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Award {
    pub name: String,
    pub category: String,
    pub year: Option<i32>,
}

impl Award {
    fn new(name: &str, category: &str, year: Option<i32>) -> Self {
        Self {
            name: name.to_string(),
            category: category.to_string(),
            year,
        }
    }

    pub fn synthesize(kind: MediaKind, vote_average: f64, year: Option<i32>) -> Vec<Award> {
        if vote_average >= 8.0 {
            match kind {
                MediaKind::Movie => vec![
                    Award::new("Academy Award", "Best Picture", year),
                    Award::new("Golden Globe", "Best Motion Picture", year),
                ],
                MediaKind::Tv => vec![
                    Award::new("Emmy Award", "Outstanding Drama Series", year),
                    Award::new("Golden Globe", "Best Television Series", year),
                ],
            }
        } else if vote_average >= 7.0 {
            let category = match kind {
                MediaKind::Movie => "Best Film",
                MediaKind::Tv => "Best Drama Series",
            };
            vec![Award::new("Critics' Choice", category, year)]
        } else {
            Vec::new()
        }
    }
}

/// Full detail record for one title: the summary fields plus genres with
/// names, credits, videos, the upstream similar/recommendation pools,
/// external ids, and the synthesized awards list. Constructed by the
/// provider layer and immutable afterwards; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaDetails {
    pub kind: MediaKind,
    pub id: u32,
    pub title: String,
    pub original_language: Option<String>,
    pub overview: Option<String>,
    pub release_date: Option<String>,
    pub genres: Vec<Genre>,
    pub popularity: f64,
    pub vote_average: f64,
    pub vote_count: u32,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub runtime: Option<u32>,
    pub revenue: Option<u64>,
    pub budget: Option<u64>,
    pub number_of_seasons: Option<u32>,
    pub number_of_episodes: Option<u32>,
    pub episode_run_time: Vec<u32>,
    pub networks: Vec<Network>,
    pub created_by: Vec<Creator>,
    pub cast: Vec<CastMember>,
    pub crew: Vec<CrewMember>,
    pub videos: Vec<Video>,
    pub similar: Vec<MediaItem>,
    pub recommendations: Vec<MediaItem>,
    pub external_ids: ExternalIds,
    pub awards: Vec<Award>,
}

impl MediaDetails {
    pub fn release_year(&self) -> Option<i32> {
        parse_year(self.release_date.as_deref())
    }

    pub fn genre_id_set(&self) -> HashSet<u32> {
        self.genres.iter().map(|g| g.id).collect()
    }

    pub fn network_id_set(&self) -> HashSet<u32> {
        self.networks.iter().map(|n| n.id).collect()
    }

    /// First entry of `episode_run_time`, the value the ranking uses.
    pub fn primary_episode_run_time(&self) -> Option<u32> {
        self.episode_run_time.first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_rated_movie_gets_top_tier_awards() {
        let awards = Award::synthesize(MediaKind::Movie, 8.4, Some(1994));
        let names: Vec<&str> = awards.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Academy Award", "Golden Globe"]);
        assert_eq!(awards[0].year, Some(1994));
    }

    #[test]
    fn high_rated_series_gets_emmy() {
        let awards = Award::synthesize(MediaKind::Tv, 8.9, Some(2011));
        assert_eq!(awards[0].name, "Emmy Award");
        assert_eq!(awards[0].category, "Outstanding Drama Series");
    }

    #[test]
    fn threshold_is_exactly_eight() {
        assert_eq!(Award::synthesize(MediaKind::Movie, 8.0, None).len(), 2);
        let mid = Award::synthesize(MediaKind::Movie, 7.5, None);
        assert_eq!(mid.len(), 1);
        assert_eq!(mid[0].name, "Critics' Choice");
        assert!(Award::synthesize(MediaKind::Movie, 6.9, None).is_empty());
    }
}
