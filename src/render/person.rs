use std::fmt::{self, Display};

use super::Escaped;

use super::{format, PageContent};
use crate::models::{Person, PersonCredit, PersonMovieCredits};
use crate::seo::{self, Breadcrumb, PageMeta, StructuredData};
use crate::services::images::{optional_image_url, ImageSize};
use crate::services::selection::{biography_excerpt, known_for, known_for_summary, KNOWN_FOR_LIMIT};

/// Person detail page
pub struct PersonDetailPage {
    pub person: Person,
    pub credits: PersonMovieCredits,
    pub site_url: String,
}

impl PersonDetailPage {
    fn breadcrumbs(&self) -> Vec<Breadcrumb> {
        vec![
            Breadcrumb::new("Home", seo::absolute_url(&self.site_url, "/")),
            Breadcrumb::new(
                self.person.display_name(),
                seo::absolute_url(&self.site_url, &format!("/person/{}", self.person.id)),
            ),
        ]
    }
}

impl PageContent for PersonDetailPage {
    fn meta(&self) -> PageMeta {
        seo::person_page_meta(
            &self.person,
            &known_for_summary(&self.credits),
            &self.site_url,
        )
    }

    fn structured_data(&self) -> Vec<StructuredData> {
        vec![
            seo::person_structured_data(&self.person).into(),
            seo::breadcrumb_structured_data(&self.breadcrumbs()).into(),
        ]
    }
}

fn write_credit(f: &mut fmt::Formatter<'_>, credit: &PersonCredit) -> fmt::Result {
    let title = credit.movie.display_title();

    writeln!(f, "<a class=\"credit\" href=\"/movie/{}\">", credit.movie.id)?;
    match optional_image_url(ImageSize::W185, credit.movie.poster_path.as_deref()) {
        Some(poster) => writeln!(
            f,
            "<img src=\"{}\" alt=\"{}\" loading=\"lazy\">",
            Escaped(&poster),
            Escaped(title)
        )?,
        None => writeln!(f, "<div class=\"placeholder\">{}</div>", Escaped(title))?,
    }
    writeln!(f, "<p><strong>{}</strong></p>", Escaped(title))?;
    if let Some(character) = credit.character.as_deref().filter(|c| !c.is_empty()) {
        writeln!(f, "<p><small>as {}</small></p>", Escaped(character))?;
    }
    writeln!(f, "</a>")
}

impl Display for PersonDetailPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let person = &self.person;
        let name = person.display_name();

        writeln!(f, "<article class=\"container\">")?;
        writeln!(f, "<section class=\"card person\">")?;
        match optional_image_url(ImageSize::W500, person.profile_path.as_deref()) {
            Some(photo) => writeln!(
                f,
                "<img src=\"{}\" alt=\"{}\">",
                Escaped(&photo),
                Escaped(name)
            )?,
            None => writeln!(f, "<div class=\"placeholder\">No photo available</div>")?,
        }

        writeln!(f, "<div class=\"container\">")?;
        writeln!(f, "<h1>{}</h1>", Escaped(name))?;
        if let Some(department) = person
            .known_for_department
            .as_deref()
            .filter(|d| !d.is_empty())
        {
            writeln!(f, "<p><span class=\"chip\">{}</span></p>", Escaped(department))?;
        }

        if let Some(birthday) = person.birthday.as_deref().filter(|d| !d.is_empty()) {
            write!(
                f,
                "<p><strong>Born:</strong> {}",
                Escaped(format::long_date(birthday))
            )?;
            if let Some(place) = person.place_of_birth.as_deref().filter(|p| !p.is_empty()) {
                write!(f, " in {}", Escaped(place))?;
            }
            writeln!(f, "</p>")?;
        }
        if let Some(deathday) = person.deathday.as_deref().filter(|d| !d.is_empty()) {
            writeln!(
                f,
                "<p><strong>Died:</strong> {}</p>",
                Escaped(format::long_date(deathday))
            )?;
        }

        if let Some(biography) = person.biography.as_deref().filter(|b| !b.is_empty()) {
            writeln!(f, "<h2>Biography</h2>")?;
            writeln!(
                f,
                "<p class=\"biography\">{}</p>",
                Escaped(biography_excerpt(biography))
            )?;
        }
        writeln!(f, "</div>")?;
        writeln!(f, "</section>")?;

        let top_movies = known_for(&self.credits, KNOWN_FOR_LIMIT);
        if !top_movies.is_empty() {
            writeln!(f, "<section class=\"card container\">")?;
            writeln!(f, "<h2>Known For</h2>")?;
            writeln!(f, "<div class=\"grid\">")?;
            for credit in top_movies {
                write_credit(f, credit)?;
            }
            writeln!(f, "</div>")?;
            writeln!(f, "</section>")?;
        }

        writeln!(f, "</article>")
    }
}
