/// Image CDN size tokens. `Original` is used for the metadata projection;
/// the smaller sizes exist for grid and card rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSize {
    Original,
    W500,
    W780,
}

impl ImageSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::Original => "original",
            ImageSize::W500 => "w500",
            ImageSize::W780 => "w780",
        }
    }
}

/// Resolve a relative catalog path fragment against the image CDN.
/// `None` in means `None` out; the fragments already start with '/'.
pub fn resolve_image_url(base: &str, size: ImageSize, path: Option<&str>) -> Option<String> {
    path.map(|p| format!("{}/{}{}", base, size.as_str(), p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_against_cdn_base() {
        let url = resolve_image_url(
            "https://image.tmdb.org/t/p",
            ImageSize::Original,
            Some("/abc.jpg"),
        );
        assert_eq!(
            url.as_deref(),
            Some("https://image.tmdb.org/t/p/original/abc.jpg")
        );
    }

    #[test]
    fn none_path_stays_none() {
        assert_eq!(
            resolve_image_url("https://image.tmdb.org/t/p", ImageSize::W500, None),
            None
        );
    }

    #[test]
    fn size_tokens() {
        assert_eq!(ImageSize::W780.as_str(), "w780");
    }
}
