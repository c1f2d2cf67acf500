use serde::{Deserialize, Serialize};

use crate::modules::catalog::MediaKind;

/// The four curated listing endpoints the browse view fans out over, for
/// each content category. The TV paths differ from the movie paths for
/// the time-based lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    Popular,
    Upcoming,
    TopRated,
    NowPlaying,
}

impl ListKind {
    pub const ALL: [ListKind; 4] = [
        ListKind::Popular,
        ListKind::Upcoming,
        ListKind::TopRated,
        ListKind::NowPlaying,
    ];

    pub fn endpoint(&self, kind: MediaKind) -> &'static str {
        match (kind, self) {
            (MediaKind::Movie, ListKind::Popular) => "/movie/popular",
            (MediaKind::Movie, ListKind::Upcoming) => "/movie/upcoming",
            (MediaKind::Movie, ListKind::TopRated) => "/movie/top_rated",
            (MediaKind::Movie, ListKind::NowPlaying) => "/movie/now_playing",
            (MediaKind::Tv, ListKind::Popular) => "/tv/popular",
            (MediaKind::Tv, ListKind::Upcoming) => "/tv/on_the_air",
            (MediaKind::Tv, ListKind::TopRated) => "/tv/top_rated",
            (MediaKind::Tv, ListKind::NowPlaying) => "/tv/airing_today",
        }
    }

    /// Position within [`ListKind::ALL`], used to group tagged fan-out
    /// responses deterministically.
    pub fn index(&self) -> usize {
        match self {
            ListKind::Popular => 0,
            ListKind::Upcoming => 1,
            ListKind::TopRated => 2,
            ListKind::NowPlaying => 3,
        }
    }
}
