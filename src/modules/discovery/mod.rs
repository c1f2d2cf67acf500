pub mod service;

pub use service::{
    BrowseItem, CategoryBucket, DiscoveryService, MergedContent, TotalPages, TrendingBucket,
    TrendingContent,
};
