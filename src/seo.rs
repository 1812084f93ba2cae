//! Page titles, meta descriptions and schema.org JSON-LD for search engines.
//!
//! Every function here is pure and total: a record with any combination of
//! missing fields still yields a usable string or object. Missing values are
//! either replaced with a fixed fallback or left out of the JSON-LD.

use serde::Serialize;

use crate::models::{Movie, Person};
use crate::services::images::{optional_image_url, ImageSize};
use crate::services::selection::truncate_chars;

/// Brand used in titles and site-level metadata
pub const SITE_NAME: &str = "RaftMovies";

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Characters of overview included in a movie's meta description
pub const DESCRIPTION_OVERVIEW_LIMIT: usize = 120;

/// Stand-in for an unknown year or rating
const UNKNOWN: &str = "N/A";

const NO_KNOWN_FOR: &str = "outstanding performances";

const BEST_RATING: u8 = 10;
const WORST_RATING: u8 = 0;

// ============================================================================
// Titles & descriptions
// ============================================================================

pub fn movie_title(title: &str) -> String {
    format!("{} - Cast, Reviews & Where to Watch | {}", title, SITE_NAME)
}

/// `"{title} ({year}) - Rated {rating}/10. {overview}... {suffix}"`
///
/// The overview is cut at [`DESCRIPTION_OVERVIEW_LIMIT`] characters without
/// looking for a word boundary, so a word may be split.
pub fn movie_description(movie: &Movie) -> String {
    let year = movie.release_year().unwrap_or(UNKNOWN);
    let rating = movie
        .vote_average
        .map(|v| format!("{:.1}", v))
        .unwrap_or_else(|| UNKNOWN.to_string());
    let overview = movie.overview.as_deref().unwrap_or_default();
    let overview = truncate_chars(overview, DESCRIPTION_OVERVIEW_LIMIT).unwrap_or(overview);

    format!(
        "{} ({}) - Rated {}/10. {}... Find cast, reviews, and streaming options.",
        movie.display_title(),
        year,
        rating,
        overview
    )
}

pub fn actor_title(name: &str) -> String {
    format!("{} - Movies, Biography & Filmography | {}", name, SITE_NAME)
}

/// An empty `known_for` list reads as "Known for outstanding performances."
pub fn actor_description(name: &str, known_for: &[String]) -> String {
    let known_for = if known_for.is_empty() {
        NO_KNOWN_FOR.to_string()
    } else {
        known_for.join(", ")
    };

    format!(
        "Explore {}'s complete filmography, biography, and best movies. Known for {}.",
        name, known_for
    )
}

// ============================================================================
// JSON-LD
// ============================================================================

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MovieSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_published: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub aggregate_rating: AggregateRating,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AggregateRating {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating_count: Option<u64>,
    pub best_rating: u8,
    pub worst_rating: u8,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersonSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub death_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_place: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbList {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub item_list_element: Vec<ListItem>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ListItem {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    /// 1-based
    pub position: usize,
    pub name: String,
    pub item: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WebSiteSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: &'static str,
    pub url: String,
    pub description: &'static str,
}

/// Any JSON-LD object a page may embed
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum StructuredData {
    Movie(MovieSchema),
    Person(PersonSchema),
    Breadcrumbs(BreadcrumbList),
    WebSite(WebSiteSchema),
}

impl StructuredData {
    /// JSON safe to place inside a `<script>` element
    pub fn to_script_json(&self) -> serde_json::Result<String> {
        Ok(serde_json::to_string(self)?.replace("</", "<\\/"))
    }
}

impl From<MovieSchema> for StructuredData {
    fn from(schema: MovieSchema) -> Self {
        StructuredData::Movie(schema)
    }
}

impl From<PersonSchema> for StructuredData {
    fn from(schema: PersonSchema) -> Self {
        StructuredData::Person(schema)
    }
}

impl From<BreadcrumbList> for StructuredData {
    fn from(list: BreadcrumbList) -> Self {
        StructuredData::Breadcrumbs(list)
    }
}

impl From<WebSiteSchema> for StructuredData {
    fn from(schema: WebSiteSchema) -> Self {
        StructuredData::WebSite(schema)
    }
}

/// One step in a breadcrumb trail
#[derive(Debug, Clone, PartialEq)]
pub struct Breadcrumb {
    pub name: String,
    pub url: String,
}

impl Breadcrumb {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Rating bounds are fixed at 0-10 whatever the record says
pub fn movie_structured_data(movie: &Movie) -> MovieSchema {
    MovieSchema {
        context: SCHEMA_CONTEXT,
        kind: "Movie",
        name: movie.title.clone(),
        description: movie.overview.clone(),
        date_published: movie.release_date.clone().filter(|d| !d.is_empty()),
        image: optional_image_url(ImageSize::W500, movie.poster_path.as_deref()),
        aggregate_rating: AggregateRating {
            kind: "AggregateRating",
            rating_value: movie.vote_average,
            rating_count: movie.vote_count,
            best_rating: BEST_RATING,
            worst_rating: WORST_RATING,
        },
    }
}

pub fn person_structured_data(person: &Person) -> PersonSchema {
    PersonSchema {
        context: SCHEMA_CONTEXT,
        kind: "Person",
        name: person.name.clone(),
        birth_date: person.birthday.clone(),
        death_date: person.deathday.clone(),
        birth_place: person.place_of_birth.clone(),
        image: optional_image_url(ImageSize::W500, person.profile_path.as_deref()),
        job_title: person.known_for_department.clone(),
    }
}

pub fn breadcrumb_structured_data(items: &[Breadcrumb]) -> BreadcrumbList {
    BreadcrumbList {
        context: SCHEMA_CONTEXT,
        kind: "BreadcrumbList",
        item_list_element: items
            .iter()
            .enumerate()
            .map(|(index, crumb)| ListItem {
                kind: "ListItem",
                position: index + 1,
                name: crumb.name.clone(),
                item: crumb.url.clone(),
            })
            .collect(),
    }
}

pub fn website_structured_data(site_url: &str) -> WebSiteSchema {
    WebSiteSchema {
        context: SCHEMA_CONTEXT,
        kind: "WebSite",
        name: SITE_NAME,
        url: site_url.to_string(),
        description: "Discover popular movies, reviews, and cast information",
    }
}

// ============================================================================
// Page metadata
// ============================================================================

/// Everything that goes into a page's `<head>` besides JSON-LD
#[derive(Debug, Clone, PartialEq)]
pub struct PageMeta {
    /// `<title>`
    pub title: String,
    pub description: String,
    pub canonical_url: String,
    /// Open Graph and Twitter card title
    pub social_title: String,
    pub social_description: String,
    /// `og:type`
    pub og_type: &'static str,
    pub image: Option<String>,
}

impl PageMeta {
    /// Twitter card kind; large image only when there is an image to show
    pub fn twitter_card(&self) -> &'static str {
        if self.image.is_some() {
            "summary_large_image"
        } else {
            "summary"
        }
    }
}

pub fn absolute_url(site_url: &str, path: &str) -> String {
    format!("{}{}", site_url.trim_end_matches('/'), path)
}

pub fn home_page_meta(site_url: &str) -> PageMeta {
    PageMeta {
        title: format!(
            "{} - Discover Popular Movies, Reviews & Cast Information",
            SITE_NAME
        ),
        description: "Browse the most popular movies, read reviews, explore cast details, \
                      and find where to watch. Your ultimate movie database with ratings, \
                      trailers, and more."
            .to_string(),
        canonical_url: absolute_url(site_url, "/"),
        social_title: format!("{} - Popular Movies Database", SITE_NAME),
        social_description: "Discover trending movies, ratings, cast, and reviews".to_string(),
        og_type: "website",
        image: None,
    }
}

pub fn movie_page_meta(movie: &Movie, site_url: &str) -> PageMeta {
    let description = movie_description(movie);
    let image = optional_image_url(ImageSize::W500, movie.poster_path.as_deref())
        .unwrap_or_else(|| absolute_url(site_url, "/default-movie.jpg"));

    PageMeta {
        title: movie_title(movie.display_title()),
        description: description.clone(),
        canonical_url: absolute_url(site_url, &format!("/movie/{}", movie.id)),
        social_title: movie.display_title().to_string(),
        social_description: description,
        og_type: "video.movie",
        image: Some(image),
    }
}

pub fn person_page_meta(person: &Person, known_for: &[String], site_url: &str) -> PageMeta {
    let description = actor_description(person.display_name(), known_for);
    let image = optional_image_url(ImageSize::W500, person.profile_path.as_deref())
        .unwrap_or_else(|| absolute_url(site_url, "/default-actor.jpg"));

    PageMeta {
        title: actor_title(person.display_name()),
        description: description.clone(),
        canonical_url: absolute_url(site_url, &format!("/person/{}", person.id)),
        social_title: person.display_name().to_string(),
        social_description: description,
        og_type: "profile",
        image: Some(image),
    }
}
