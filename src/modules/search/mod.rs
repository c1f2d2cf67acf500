pub mod service;

pub use service::{is_award_query, SearchOutcome, SearchService};
