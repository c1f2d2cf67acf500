pub mod discover_filter;
pub mod list_kind;

pub use discover_filter::DiscoverFilter;
pub use list_kind::ListKind;
