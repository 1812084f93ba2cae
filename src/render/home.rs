use std::fmt::{self, Display};

use super::Escaped;

use super::{format, PageContent};
use crate::models::Movie;
use crate::seo::{self, PageMeta, StructuredData, SITE_NAME};
use crate::services::images::{optional_image_url, ImageSize};

/// Popular movies grid
pub struct HomePage {
    pub movies: Vec<Movie>,
    pub site_url: String,
}

impl PageContent for HomePage {
    fn meta(&self) -> PageMeta {
        seo::home_page_meta(&self.site_url)
    }

    fn structured_data(&self) -> Vec<StructuredData> {
        vec![seo::website_structured_data(&self.site_url).into()]
    }
}

fn write_card(f: &mut fmt::Formatter<'_>, movie: &Movie) -> fmt::Result {
    let title = movie.display_title();

    writeln!(f, "<a class=\"card\" href=\"/movie/{}\">", movie.id)?;
    match optional_image_url(ImageSize::W342, movie.poster_path.as_deref()) {
        Some(poster) => writeln!(
            f,
            "<img src=\"{}\" alt=\"{} poster\" loading=\"lazy\">",
            Escaped(&poster),
            Escaped(title)
        )?,
        None => writeln!(f, "<div class=\"placeholder\">No poster</div>")?,
    }
    writeln!(f, "<div class=\"container\">")?;
    writeln!(f, "<h3>{}</h3>", Escaped(title))?;
    write!(
        f,
        "<p><span class=\"star\">&#9733;</span> {}",
        format::rating(movie.vote_average)
    )?;
    if let Some(year) = movie.release_date.as_deref().and_then(format::year) {
        write!(f, " &middot; <span class=\"year\">{}</span>", year)?;
    }
    writeln!(f, "</p>")?;
    writeln!(f, "</div>")?;
    writeln!(f, "</a>")
}

impl Display for HomePage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<section class=\"hero\"><div class=\"container\">")?;
        writeln!(f, "<h1>Discover Popular Movies</h1>")?;
        writeln!(
            f,
            "<p>Explore trending films, read reviews, and find your next favorite movie</p>"
        )?;
        writeln!(f, "</div></section>")?;

        writeln!(f, "<section class=\"container\">")?;
        writeln!(f, "<h2>Trending Now</h2>")?;
        writeln!(f, "<div class=\"grid\">")?;
        for movie in &self.movies {
            write_card(f, movie)?;
        }
        writeln!(f, "</div>")?;
        writeln!(f, "</section>")?;

        writeln!(f, "<section class=\"container about\">")?;
        writeln!(f, "<h2>Your Ultimate Movie Database</h2>")?;
        writeln!(
            f,
            "<p>Welcome to {}, your comprehensive source for discovering the latest and most \
             popular movies. We provide detailed information about films, including cast \
             members, crew details, user ratings, and professional reviews.</p>",
            SITE_NAME
        )?;
        writeln!(
            f,
            "<p>Our database features thousands of movies across all genres, from action \
             packed blockbusters to indie darlings and classic cinema.</p>"
        )?;
        writeln!(f, "</section>")
    }
}
