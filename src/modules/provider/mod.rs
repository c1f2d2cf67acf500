pub mod domain;
pub mod infrastructure;
pub mod traits;

// Re-exports for easy external access
pub use domain::{DiscoverFilter, ListKind};
pub use infrastructure::{KitsuClient, TmdbClient, YtsClient};
pub use traits::CatalogSource;
