use serde::{Deserialize, Serialize};

/// TMDB numeric identifier, forwarded to the upstream API as-is
pub type TmdbId = u64;

/// A movie as returned by TMDB
///
/// The same shape is used for `/movie/{id}`, list results from
/// `/movie/popular` and the movie half of a person's credits. Only `id` is
/// guaranteed; every other field may be missing upstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub id: TmdbId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    /// `YYYY-MM-DD`, sometimes an empty string for unreleased titles
    #[serde(default)]
    pub release_date: Option<String>,
    /// Minutes
    #[serde(default)]
    pub runtime: Option<u32>,
    /// 0-10 scale
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub vote_count: Option<u64>,
    #[serde(default)]
    pub budget: Option<u64>,
    #[serde(default)]
    pub revenue: Option<u64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub original_language: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub genres: Vec<Genre>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Genre {
    pub id: TmdbId,
    #[serde(default)]
    pub name: Option<String>,
}

/// Response of `/movie/{id}/credits`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MovieCredits {
    #[serde(default)]
    pub id: Option<TmdbId>,
    #[serde(default)]
    pub cast: Vec<CastMember>,
}

/// One billed actor in a movie's credits
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CastMember {
    pub id: TmdbId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub character: Option<String>,
    #[serde(default)]
    pub profile_path: Option<String>,
    /// Billing order, 0 = top billed
    #[serde(default)]
    pub order: Option<u32>,
}

/// One page of `/movie/popular`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MoviePage {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub results: Vec<Movie>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub total_results: Option<u64>,
}

impl Movie {
    /// Release year as the first four characters of the release date
    pub fn release_year(&self) -> Option<&str> {
        let date = self.release_date.as_deref()?;
        let end = date
            .char_indices()
            .nth(4)
            .map(|(idx, _)| idx)
            .unwrap_or(date.len());
        let year = &date[..end];
        (!year.is_empty()).then_some(year)
    }

    /// Title or an empty string when upstream omitted it
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_deserialization() {
        let json = r#"{
            "id": 550,
            "title": "Fight Club",
            "tagline": "Mischief. Mayhem. Soap.",
            "release_date": "1999-10-15",
            "runtime": 139,
            "vote_average": 8.433,
            "vote_count": 26280,
            "budget": 63000000,
            "revenue": 100853753,
            "status": "Released",
            "original_language": "en",
            "poster_path": "/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg",
            "genres": [{ "id": 18, "name": "Drama" }],
            "adult": false
        }"#;

        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.id, 550);
        assert_eq!(movie.title.as_deref(), Some("Fight Club"));
        assert_eq!(movie.runtime, Some(139));
        assert_eq!(movie.budget, Some(63_000_000));
        assert_eq!(movie.genres.len(), 1);
        assert_eq!(movie.genres[0].name.as_deref(), Some("Drama"));
        assert_eq!(movie.overview, None);
    }

    #[test]
    fn test_movie_with_only_id() {
        let movie: Movie = serde_json::from_str(r#"{ "id": 1 }"#).unwrap();
        assert_eq!(movie.id, 1);
        assert!(movie.genres.is_empty());
        assert_eq!(movie.release_year(), None);
        assert_eq!(movie.display_title(), "");
    }

    #[test]
    fn test_release_year() {
        let mut movie = Movie {
            release_date: Some("1999-10-15".to_string()),
            ..Default::default()
        };
        assert_eq!(movie.release_year(), Some("1999"));

        movie.release_date = Some(String::new());
        assert_eq!(movie.release_year(), None);

        movie.release_date = Some("20".to_string());
        assert_eq!(movie.release_year(), Some("20"));
    }

    #[test]
    fn test_credits_without_cast() {
        let credits: MovieCredits = serde_json::from_str(r#"{ "id": 550 }"#).unwrap();
        assert!(credits.cast.is_empty());
    }
}
