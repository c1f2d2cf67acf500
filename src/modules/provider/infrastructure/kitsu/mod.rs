pub mod client;
pub mod mapper;
pub mod models;

pub use client::KitsuClient;
