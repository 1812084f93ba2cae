//! Server-rendered HTML pages.
//!
//! Each page type implements [`PageContent`] and [`std::fmt::Display`] for
//! its body; [`PageHtml`] adds the shared `<head>`, navigation and footer.
//! All record text goes through [`Escaped`].

use std::fmt::{self, Display, Write};

use html_escaper::HtmlEscaper;

pub mod format;
pub mod home;
pub mod layout;
pub mod movie;
pub mod person;

pub use home::HomePage;
pub use layout::{error_page, PageContent, PageHtml};
pub use movie::MovieDetailPage;
pub use person::PersonDetailPage;

/// Displays the wrapped value with HTML special characters escaped
pub(crate) struct Escaped<T>(pub T);

impl<T: Display> Display for Escaped<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(HtmlEscaper(f), "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escaped_markup() {
        let html = Escaped("<a href=\"/x\">Tom & Jerry</a>").to_string();
        assert!(html.starts_with("&lt;a href="));
        assert!(html.contains("&quot;/x&quot;"));
        assert!(html.contains("Tom &amp; Jerry"));
        assert!(html.ends_with("&lt;/a&gt;"));
        assert!(!html.contains('<'));
    }

    #[test]
    fn test_escaped_plain_text_unchanged() {
        assert_eq!(Escaped(String::from("Fight Club")).to_string(), "Fight Club");
        assert_eq!(Escaped(1999).to_string(), "1999");
    }
}
