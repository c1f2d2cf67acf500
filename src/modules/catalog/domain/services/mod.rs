pub mod merge;

pub use merge::ContentMerger;
