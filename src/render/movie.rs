use std::fmt::{self, Display};

use super::Escaped;

use super::{format, PageContent};
use crate::models::{CastMember, Movie, MovieCredits};
use crate::seo::{self, Breadcrumb, PageMeta, StructuredData};
use crate::services::images::{optional_image_url, ImageSize};
use crate::services::selection::top_cast;

/// Movie detail page
pub struct MovieDetailPage {
    pub movie: Movie,
    pub credits: MovieCredits,
    pub site_url: String,
}

impl MovieDetailPage {
    fn breadcrumbs(&self) -> Vec<Breadcrumb> {
        vec![
            Breadcrumb::new("Home", seo::absolute_url(&self.site_url, "/")),
            Breadcrumb::new(
                self.movie.display_title(),
                seo::absolute_url(&self.site_url, &format!("/movie/{}", self.movie.id)),
            ),
        ]
    }
}

impl PageContent for MovieDetailPage {
    fn meta(&self) -> PageMeta {
        seo::movie_page_meta(&self.movie, &self.site_url)
    }

    fn structured_data(&self) -> Vec<StructuredData> {
        vec![
            seo::movie_structured_data(&self.movie).into(),
            seo::breadcrumb_structured_data(&self.breadcrumbs()).into(),
        ]
    }
}

fn write_cast_member(f: &mut fmt::Formatter<'_>, actor: &CastMember) -> fmt::Result {
    let name = actor.name.as_deref().unwrap_or_default();

    writeln!(f, "<a class=\"cast\" href=\"/person/{}\">", actor.id)?;
    match optional_image_url(ImageSize::W185, actor.profile_path.as_deref()) {
        Some(photo) => writeln!(
            f,
            "<img src=\"{}\" alt=\"{}\" loading=\"lazy\">",
            Escaped(&photo),
            Escaped(name)
        )?,
        None => writeln!(f, "<div class=\"placeholder\">No photo</div>")?,
    }
    writeln!(f, "<p><strong>{}</strong></p>", Escaped(name))?;
    if let Some(character) = &actor.character {
        writeln!(f, "<p><small>{}</small></p>", Escaped(character))?;
    }
    writeln!(f, "</a>")
}

impl MovieDetailPage {
    fn write_details(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let movie = &self.movie;

        writeln!(f, "<section class=\"card container details\">")?;
        writeln!(f, "<h2>Movie Details</h2>")?;
        if let Some(budget) = movie.budget.filter(|b| *b > 0) {
            writeln!(
                f,
                "<p><strong>Budget:</strong> ${}</p>",
                format::thousands(budget)
            )?;
        }
        if let Some(revenue) = movie.revenue.filter(|r| *r > 0) {
            writeln!(
                f,
                "<p><strong>Revenue:</strong> ${}</p>",
                format::thousands(revenue)
            )?;
        }
        if let Some(status) = movie.status.as_deref().filter(|s| !s.is_empty()) {
            writeln!(f, "<p><strong>Status:</strong> {}</p>", Escaped(status))?;
        }
        if let Some(language) = movie
            .original_language
            .as_deref()
            .filter(|l| !l.is_empty())
        {
            writeln!(
                f,
                "<p><strong>Original Language:</strong> {}</p>",
                Escaped(language.to_uppercase())
            )?;
        }
        writeln!(f, "</section>")
    }
}

impl Display for MovieDetailPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let movie = &self.movie;
        let title = movie.display_title();

        writeln!(f, "<article class=\"container\">")?;
        writeln!(f, "<section class=\"card movie\">")?;
        match optional_image_url(ImageSize::W500, movie.poster_path.as_deref()) {
            Some(poster) => writeln!(
                f,
                "<img src=\"{}\" alt=\"{} poster\">",
                Escaped(&poster),
                Escaped(title)
            )?,
            None => writeln!(f, "<div class=\"placeholder\">No poster available</div>")?,
        }

        writeln!(f, "<div class=\"container\">")?;
        writeln!(f, "<h1>{}</h1>", Escaped(title))?;
        if let Some(tagline) = movie.tagline.as_deref().filter(|t| !t.is_empty()) {
            writeln!(f, "<p class=\"tagline\"><em>&quot;{}&quot;</em></p>", Escaped(tagline))?;
        }

        writeln!(f, "<p class=\"facts\">")?;
        if let Some(vote_average) = movie.vote_average {
            writeln!(
                f,
                "<span class=\"rating\">&#9733; {}/10</span>",
                format::rating(Some(vote_average))
            )?;
        }
        if let Some(released) = movie.release_date.as_deref().filter(|d| !d.is_empty()) {
            writeln!(f, "<span>Released: {}</span>", Escaped(format::long_date(released)))?;
        }
        if let Some(runtime) = movie.runtime.filter(|r| *r > 0) {
            writeln!(f, "<span>Runtime: {} min</span>", runtime)?;
        }
        writeln!(f, "</p>")?;

        if !movie.genres.is_empty() {
            writeln!(f, "<p class=\"genres\">")?;
            for genre in &movie.genres {
                if let Some(name) = &genre.name {
                    writeln!(f, "<span class=\"chip\">{}</span>", Escaped(name))?;
                }
            }
            writeln!(f, "</p>")?;
        }

        writeln!(f, "<h2>Overview</h2>")?;
        let overview = movie
            .overview
            .as_deref()
            .filter(|o| !o.is_empty())
            .unwrap_or("No overview available.");
        writeln!(f, "<p>{}</p>", Escaped(overview))?;
        writeln!(f, "</div>")?;
        writeln!(f, "</section>")?;

        let cast = top_cast(&self.credits);
        if !cast.is_empty() {
            writeln!(f, "<section class=\"card container\">")?;
            writeln!(f, "<h2>Top Cast</h2>")?;
            writeln!(f, "<div class=\"grid\">")?;
            for actor in cast {
                write_cast_member(f, actor)?;
            }
            writeln!(f, "</div>")?;
            writeln!(f, "</section>")?;
        }

        self.write_details(f)?;
        writeln!(f, "</article>")
    }
}
