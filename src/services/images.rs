//! TMDB image URLs.

const IMAGE_BASE: &str = "https://image.tmdb.org/t/p";

/// Rendition widths served by the TMDB image CDN
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSize {
    /// Cast photos and filmography thumbnails
    W185,
    /// Home grid posters
    W342,
    /// Detail page posters, Open Graph and JSON-LD images
    W500,
}

impl ImageSize {
    pub fn as_str(self) -> &'static str {
        match self {
            ImageSize::W185 => "w185",
            ImageSize::W342 => "w342",
            ImageSize::W500 => "w500",
        }
    }
}

/// Full CDN URL for an upstream image path such as `/abc.jpg`
pub fn image_url(size: ImageSize, path: &str) -> String {
    format!("{}/{}{}", IMAGE_BASE, size.as_str(), path)
}

/// Like [`image_url`], but `None` when the record has no image
pub fn optional_image_url(size: ImageSize, path: Option<&str>) -> Option<String> {
    path.filter(|p| !p.is_empty()).map(|p| image_url(size, p))
}
