pub mod config;
pub mod modules;
pub mod shared;

pub use config::ApiConfig;
pub use modules::catalog::{ContentMerger, ItemMetadata, MediaDetails, MediaItem, MediaKind};
pub use modules::discovery::{BrowseItem, DiscoveryService, MergedContent, TrendingContent};
pub use modules::provider::{CatalogSource, KitsuClient, TmdbClient, YtsClient};
pub use modules::search::{SearchOutcome, SearchService};
pub use modules::similarity::{FailurePolicy, ScoredCandidate, SimilarityService};
pub use shared::errors::{AppError, AppResult};
pub use shared::utils::init_logger;
