use std::collections::HashSet;

use serde::Serialize;

use crate::modules::catalog::{MediaDetails, MediaKind};

/// How many top-billed cast members count as a title's signature people.
pub const TOP_CAST_CONSIDERED: usize = 5;

/// Ranked list length returned to the caller.
pub const MAX_RANKED: usize = 20;

// Weights. Shared collaborators and full genre coverage are the
// strongest signals and sit an order of magnitude above the secondary
// popularity and recency terms.
const PEOPLE_MATCH_WEIGHT: f64 = 30.0;
const GENRE_MATCH_WEIGHT: f64 = 20.0;
const FULL_GENRE_COVERAGE_BONUS: f64 = 100.0;
const YEAR_PROXIMITY_WEIGHT: f64 = 5.0;
const POPULARITY_WEIGHT: f64 = 5.0;
const NETWORK_MATCH_BONUS: f64 = 50.0;
const RUNTIME_SCORE_CAP: f64 = 20.0;

const MAX_YEAR_DISTANCE: u32 = 10;
const VOTES_PER_POPULARITY_POINT: f64 = 1000.0;
const POPULARITY_SCORE_CAP: f64 = 10.0;

/// The signals extracted once from the reference title and compared
/// against every candidate.
#[derive(Debug, Clone)]
pub struct ReferenceSignal {
    pub kind: MediaKind,
    pub id: u32,
    pub people_ids: HashSet<u32>,
    pub genre_ids: HashSet<u32>,
    pub release_year: Option<i32>,
    pub network_ids: HashSet<u32>,
    pub episode_run_time: Option<u32>,
}

pub fn reference_signal(reference: &MediaDetails) -> ReferenceSignal {
    ReferenceSignal {
        kind: reference.kind,
        id: reference.id,
        people_ids: key_people(reference),
        genre_ids: reference.genre_id_set(),
        release_year: reference.release_year(),
        network_ids: reference.network_id_set(),
        episode_run_time: reference.primary_episode_run_time(),
    }
}

/// A title's signature people: the top billed cast plus the key creative
/// crew. Movies count directors; series count creators and executive
/// producers or showrunners.
fn key_people(details: &MediaDetails) -> HashSet<u32> {
    let mut people: HashSet<u32> = details
        .cast
        .iter()
        .take(TOP_CAST_CONSIDERED)
        .map(|c| c.id)
        .collect();

    match details.kind {
        MediaKind::Movie => {
            people.extend(
                details
                    .crew
                    .iter()
                    .filter(|c| c.job.as_deref() == Some("Director"))
                    .map(|c| c.id),
            );
        }
        MediaKind::Tv => {
            people.extend(details.created_by.iter().map(|c| c.id));
            people.extend(
                details
                    .crew
                    .iter()
                    .filter(|c| {
                        matches!(
                            c.job.as_deref(),
                            Some("Executive Producer") | Some("Showrunner")
                        )
                    })
                    .map(|c| c.id),
            );
        }
    }

    people
}

/// Per-factor breakdown attached to every ranked candidate. The network
/// and runtime terms only exist for series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityDetails {
    pub people_matches: u32,
    pub genre_matches: u32,
    pub all_genres_match: bool,
    pub release_year_diff: u32,
    pub popularity_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_match: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime_score: Option<f64>,
    pub total_score: f64,
}

/// A candidate with its computed score, ready for ranking.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredCandidate {
    pub candidate: MediaDetails,
    pub similarity_score: f64,
    pub similarity_details: SimilarityDetails,
}

pub fn score_candidate(signal: &ReferenceSignal, candidate: &MediaDetails) -> SimilarityDetails {
    let candidate_people = key_people(candidate);
    let people_matches = candidate_people.intersection(&signal.people_ids).count() as u32;

    let candidate_genres = candidate.genre_id_set();
    let genre_matches = signal.genre_ids.intersection(&candidate_genres).count() as u32;
    let all_genres_match =
        !signal.genre_ids.is_empty() && signal.genre_ids.is_subset(&candidate_genres);

    // Unknown years count as maximally distant rather than poisoning the
    // total.
    let release_year_diff = match (signal.release_year, candidate.release_year()) {
        (Some(reference), Some(candidate)) => reference.abs_diff(candidate),
        _ => MAX_YEAR_DISTANCE,
    };

    let popularity_score =
        (candidate.vote_count as f64 / VOTES_PER_POPULARITY_POINT).min(POPULARITY_SCORE_CAP);

    let mut total_score = people_matches as f64 * PEOPLE_MATCH_WEIGHT
        + genre_matches as f64 * GENRE_MATCH_WEIGHT
        + if all_genres_match {
            FULL_GENRE_COVERAGE_BONUS
        } else {
            0.0
        }
        + (MAX_YEAR_DISTANCE - release_year_diff.min(MAX_YEAR_DISTANCE)) as f64
            * YEAR_PROXIMITY_WEIGHT
        + popularity_score * POPULARITY_WEIGHT;

    let (network_match, runtime_score) = match signal.kind {
        MediaKind::Movie => (None, None),
        MediaKind::Tv => {
            let shares_network = !signal.network_ids.is_disjoint(&candidate.network_id_set());
            if shares_network {
                total_score += NETWORK_MATCH_BONUS;
            }

            let runtime = match (signal.episode_run_time, candidate.primary_episode_run_time()) {
                (Some(reference), Some(candidate)) => {
                    let diff = (reference.abs_diff(candidate) as f64).min(RUNTIME_SCORE_CAP);
                    RUNTIME_SCORE_CAP - diff
                }
                _ => 0.0,
            };
            total_score += runtime;

            (Some(shares_network), Some(runtime))
        }
    };

    SimilarityDetails {
        people_matches,
        genre_matches,
        all_genres_match,
        release_year_diff,
        popularity_score,
        network_match,
        runtime_score,
        total_score,
    }
}

/// Order by total score descending and cut to the published length.
/// The sort is stable, so equally scored candidates keep their pool
/// order.
pub fn rank(mut scored: Vec<ScoredCandidate>) -> Vec<ScoredCandidate> {
    scored.sort_by(|a, b| {
        b.similarity_details
            .total_score
            .partial_cmp(&a.similarity_details.total_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored.truncate(MAX_RANKED);
    scored
}
