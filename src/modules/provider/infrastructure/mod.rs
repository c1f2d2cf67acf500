pub mod http_client;
pub mod kitsu;
pub mod tmdb;
pub mod yts;

pub use http_client::CatalogHttpClient;
pub use kitsu::KitsuClient;
pub use tmdb::TmdbClient;
pub use yts::YtsClient;
