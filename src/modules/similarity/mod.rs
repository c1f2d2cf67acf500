pub mod scoring;
pub mod service;

pub use scoring::{
    rank, reference_signal, score_candidate, ReferenceSignal, ScoredCandidate, SimilarityDetails,
    MAX_RANKED, TOP_CAST_CONSIDERED,
};
pub use service::{FailurePolicy, SimilarityService};
