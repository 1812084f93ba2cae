use std::fmt::{self, Display};

use axum::http::StatusCode;
use chrono::{Datelike, Utc};
use super::Escaped;

use crate::seo::{PageMeta, StructuredData, SITE_NAME};

/// A page body that can be wrapped in the site layout
pub trait PageContent: Display {
    /// `<head>` metadata
    fn meta(&self) -> PageMeta;

    /// JSON-LD objects, one `<script>` block each
    fn structured_data(&self) -> Vec<StructuredData>;

    fn page(self) -> PageHtml<Self>
    where
        Self: Sized,
    {
        PageHtml::new(self)
    }
}

/// Full HTML document: head metadata, navigation, content, footer
pub struct PageHtml<T: PageContent> {
    content: T,
}

impl<T: PageContent> PageHtml<T> {
    pub fn new(content: T) -> Self {
        Self { content }
    }
}

const STYLE: &str = "body{margin:0;font-family:system-ui,sans-serif;background:#f9fafb;color:#111827}\
a{color:inherit;text-decoration:none}\
.container{max-width:72rem;margin:0 auto;padding:1rem}\
nav{background:#fff;border-bottom:1px solid #e5e7eb}\
nav .container{display:flex;justify-content:space-between;align-items:center}\
.brand{font-size:1.5rem;font-weight:700;color:#2563eb}\
.links a{margin-left:1.5rem;color:#4b5563}\
.card{background:#fff;border-radius:.5rem;box-shadow:0 1px 3px rgba(0,0,0,.1);overflow:hidden}\
.grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(10rem,1fr));gap:1.5rem}\
.placeholder{background:#e5e7eb;color:#9ca3af;aspect-ratio:2/3;display:flex;align-items:center;justify-content:center}\
img{width:100%;height:auto;display:block}\
.chip{display:inline-block;padding:.25rem .75rem;border-radius:9999px;background:#dbeafe;color:#1e40af;margin:0 .5rem .5rem 0}\
footer{background:#111827;color:#d1d5db;text-align:center;padding:2rem 0;margin-top:4rem}";

impl<T: PageContent> Display for PageHtml<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let meta = self.content.meta();

        writeln!(f, "<!DOCTYPE html>")?;
        writeln!(f, "<html lang=\"en\">")?;
        writeln!(f, "<head>")?;
        writeln!(f, "<meta charset=\"utf-8\">")?;
        writeln!(
            f,
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">"
        )?;
        writeln!(f, "<title>{}</title>", Escaped(&meta.title))?;
        writeln!(
            f,
            "<meta name=\"description\" content=\"{}\">",
            Escaped(&meta.description)
        )?;
        writeln!(
            f,
            "<link rel=\"canonical\" href=\"{}\">",
            Escaped(&meta.canonical_url)
        )?;
        writeln!(f, "<meta property=\"og:site_name\" content=\"{}\">", SITE_NAME)?;
        writeln!(
            f,
            "<meta property=\"og:title\" content=\"{}\">",
            Escaped(&meta.social_title)
        )?;
        writeln!(
            f,
            "<meta property=\"og:description\" content=\"{}\">",
            Escaped(&meta.social_description)
        )?;
        writeln!(f, "<meta property=\"og:type\" content=\"{}\">", meta.og_type)?;
        writeln!(
            f,
            "<meta property=\"og:url\" content=\"{}\">",
            Escaped(&meta.canonical_url)
        )?;
        if let Some(image) = &meta.image {
            writeln!(f, "<meta property=\"og:image\" content=\"{}\">", Escaped(image))?;
        }
        writeln!(
            f,
            "<meta name=\"twitter:card\" content=\"{}\">",
            meta.twitter_card()
        )?;
        writeln!(
            f,
            "<meta name=\"twitter:title\" content=\"{}\">",
            Escaped(&meta.social_title)
        )?;
        writeln!(
            f,
            "<meta name=\"twitter:description\" content=\"{}\">",
            Escaped(&meta.social_description)
        )?;
        if let Some(image) = &meta.image {
            writeln!(f, "<meta name=\"twitter:image\" content=\"{}\">", Escaped(image))?;
        }
        for data in self.content.structured_data() {
            let json = data.to_script_json().map_err(|_| fmt::Error)?;
            writeln!(f, "<script type=\"application/ld+json\">{}</script>", json)?;
        }
        writeln!(f, "<style>{}</style>", STYLE)?;
        writeln!(f, "</head>")?;
        writeln!(f, "<body>")?;
        write_nav(f)?;
        writeln!(f, "<main>")?;
        write!(f, "{}", self.content)?;
        writeln!(f, "</main>")?;
        write_footer(f)?;
        writeln!(f, "</body>")?;
        writeln!(f, "</html>")
    }
}

fn write_nav(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "<nav><div class=\"container\">")?;
    writeln!(f, "<a href=\"/\" class=\"brand\">&#127916; {}</a>", SITE_NAME)?;
    writeln!(f, "<div class=\"links\">")?;
    writeln!(f, "<a href=\"/\">Home</a>")?;
    writeln!(f, "<a href=\"/movie/550\">Movies</a>")?;
    writeln!(f, "<a href=\"/person/287\">Actors</a>")?;
    writeln!(f, "</div>")?;
    writeln!(f, "</div></nav>")
}

fn write_footer(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "<footer><div class=\"container\">")?;
    writeln!(
        f,
        "<p>&copy; {} {} - Your Ultimate Movie Database</p>",
        Utc::now().year(),
        SITE_NAME
    )?;
    writeln!(f, "<p><small>Data provided by The Movie Database (TMDB)</small></p>")?;
    writeln!(f, "</div></footer>")
}

/// Standalone page for failed renders; never includes error details
pub fn error_page(status: StatusCode) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Something went wrong | {site}</title>\n</head>\n<body>\n\
         <main><h1>{code}</h1><p>Something went wrong while loading this page.</p>\
         <p><a href=\"/\">Back to {site}</a></p></main>\n</body>\n</html>\n",
        site = SITE_NAME,
        code = status.as_u16(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seo::{breadcrumb_structured_data, Breadcrumb};

    struct TestContent;

    impl Display for TestContent {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "<p>body</p>")
        }
    }

    impl PageContent for TestContent {
        fn meta(&self) -> PageMeta {
            PageMeta {
                title: "A & B".to_string(),
                description: "Say \"hi\"".to_string(),
                canonical_url: "https://example.com/x".to_string(),
                social_title: "A".to_string(),
                social_description: "B".to_string(),
                og_type: "website",
                image: Some("https://example.com/i.jpg".to_string()),
            }
        }

        fn structured_data(&self) -> Vec<StructuredData> {
            vec![breadcrumb_structured_data(&[Breadcrumb::new("Home", "https://example.com/")]).into()]
        }
    }

    #[test]
    fn test_layout_wraps_content() {
        let html = TestContent.page().to_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<main>\n<p>body</p></main>"));
        assert!(html.contains("Data provided by The Movie Database (TMDB)"));
        assert!(html.contains("<a href=\"/person/287\">Actors</a>"));
    }

    #[test]
    fn test_layout_escapes_meta() {
        let html = TestContent.page().to_string();
        assert!(html.contains("<title>A &amp; B</title>"));
        assert!(!html.contains("Say \"hi\""));
    }

    #[test]
    fn test_layout_social_tags() {
        let html = TestContent.page().to_string();
        assert!(html.contains("<meta property=\"og:type\" content=\"website\">"));
        assert!(html.contains("<meta name=\"twitter:card\" content=\"summary_large_image\">"));
        assert!(html.contains("<meta property=\"og:image\" content=\"https://example.com/i.jpg\">"));
    }

    #[test]
    fn test_layout_embeds_json_ld() {
        let html = TestContent.page().to_string();
        assert!(html.contains("<script type=\"application/ld+json\">{\"@context\":\"https://schema.org\",\"@type\":\"BreadcrumbList\""));
    }

    #[test]
    fn test_error_page() {
        let html = error_page(StatusCode::BAD_GATEWAY);
        assert!(html.contains("<h1>502</h1>"));
        assert!(html.contains("Something went wrong"));
    }
}
