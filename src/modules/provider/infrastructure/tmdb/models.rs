use serde::Deserialize;

use crate::modules::catalog::{Credits, Creator, ExternalIds, Genre, Movie, Network, TvShow, Video};

// Response envelopes

#[derive(Debug, Clone, Deserialize)]
pub struct PagedResponse<T> {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub results: Vec<T>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub total_results: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoList {
    #[serde(default)]
    pub results: Vec<Video>,
}

// Detail payloads (`append_to_response=credits,videos,similar,recommendations`)

#[derive(Debug, Clone, Deserialize)]
pub struct MovieDetailsDto {
    pub id: u32,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub original_language: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub popularity: Option<f64>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub vote_count: Option<u32>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub revenue: Option<u64>,
    #[serde(default)]
    pub budget: Option<u64>,
    #[serde(default)]
    pub credits: Option<Credits>,
    #[serde(default)]
    pub videos: Option<VideoList>,
    #[serde(default)]
    pub similar: Option<PagedResponse<Movie>>,
    #[serde(default)]
    pub recommendations: Option<PagedResponse<Movie>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TvDetailsDto {
    pub id: u32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub original_language: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub popularity: Option<f64>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub vote_count: Option<u32>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub number_of_seasons: Option<u32>,
    #[serde(default)]
    pub number_of_episodes: Option<u32>,
    #[serde(default)]
    pub episode_run_time: Vec<u32>,
    #[serde(default)]
    pub networks: Vec<Network>,
    #[serde(default)]
    pub created_by: Vec<Creator>,
    #[serde(default)]
    pub credits: Option<Credits>,
    #[serde(default)]
    pub videos: Option<VideoList>,
    #[serde(default)]
    pub similar: Option<PagedResponse<TvShow>>,
    #[serde(default)]
    pub recommendations: Option<PagedResponse<TvShow>>,
}

pub type ExternalIdsDto = ExternalIds;

// People

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonDto {
    pub id: u32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub popularity: Option<f64>,
    #[serde(default)]
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MovieCastCreditDto {
    #[serde(flatten)]
    pub movie: Movie,
    #[serde(default)]
    pub character: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MovieCrewCreditDto {
    #[serde(flatten)]
    pub movie: Movie,
    #[serde(default)]
    pub job: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TvCastCreditDto {
    #[serde(flatten)]
    pub show: TvShow,
    #[serde(default)]
    pub character: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TvCrewCreditDto {
    #[serde(flatten)]
    pub show: TvShow,
    #[serde(default)]
    pub job: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PersonMovieCreditsDto {
    #[serde(default)]
    pub cast: Vec<MovieCastCreditDto>,
    #[serde(default)]
    pub crew: Vec<MovieCrewCreditDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PersonTvCreditsDto {
    #[serde(default)]
    pub cast: Vec<TvCastCreditDto>,
    #[serde(default)]
    pub crew: Vec<TvCrewCreditDto>,
}
