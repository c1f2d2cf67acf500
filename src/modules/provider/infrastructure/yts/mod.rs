pub mod client;
pub mod models;

pub use client::YtsClient;
pub use models::{CoverImages, ListParams, YtsMovie};
