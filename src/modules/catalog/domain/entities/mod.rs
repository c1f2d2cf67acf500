pub mod anime;
pub mod credits;
pub mod media_details;
pub mod media_item;
pub mod metadata;

pub use anime::{AnimeEntry, ImageSet};
pub use credits::{CastMember, CreditEntry, Creator, Credits, CrewMember, PersonCredits, PersonMatch};
pub use media_details::{Award, ExternalIds, Genre, MediaDetails, Network, Video};
pub use media_item::{MediaItem, MediaKind, MediaPage, Movie, TvShow};
pub use metadata::ItemMetadata;
