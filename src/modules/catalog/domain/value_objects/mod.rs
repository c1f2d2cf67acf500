pub mod image;

pub use image::{resolve_image_url, ImageSize};
