pub mod domain;

// Re-exports for easy external access
pub use domain::entities::{
    AnimeEntry, Award, CastMember, CreditEntry, Creator, Credits, CrewMember, ExternalIds, Genre,
    ImageSet, ItemMetadata, MediaDetails, MediaItem, MediaKind, MediaPage, Movie, Network,
    PersonCredits, PersonMatch, TvShow, Video,
};
pub use domain::services::ContentMerger;
pub use domain::value_objects::{resolve_image_url, ImageSize};
