use serde::{Deserialize, Serialize};

use super::movie::{Movie, TmdbId};

/// A person as returned by `/person/{id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Person {
    pub id: TmdbId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub biography: Option<String>,
    #[serde(default)]
    pub birthday: Option<String>,
    #[serde(default)]
    pub deathday: Option<String>,
    #[serde(default)]
    pub place_of_birth: Option<String>,
    /// e.g. "Acting", "Directing"
    #[serde(default)]
    pub known_for_department: Option<String>,
    #[serde(default)]
    pub profile_path: Option<String>,
}

impl Person {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

/// A movie the person appeared in, with their role
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PersonCredit {
    #[serde(flatten)]
    pub movie: Movie,
    #[serde(default)]
    pub character: Option<String>,
    #[serde(default)]
    pub popularity: Option<f64>,
}

/// Response of `/person/{id}/movie_credits`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PersonMovieCredits {
    #[serde(default)]
    pub id: Option<TmdbId>,
    #[serde(default)]
    pub cast: Vec<PersonCredit>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_deserialization() {
        let json = r#"{
            "id": 287,
            "name": "Brad Pitt",
            "birthday": "1963-12-18",
            "deathday": null,
            "place_of_birth": "Shawnee, Oklahoma, USA",
            "known_for_department": "Acting",
            "profile_path": "/cckcYc2v0yh1tc9QjRelptcOBko.jpg"
        }"#;

        let person: Person = serde_json::from_str(json).unwrap();
        assert_eq!(person.id, 287);
        assert_eq!(person.display_name(), "Brad Pitt");
        assert_eq!(person.deathday, None);
        assert_eq!(person.biography, None);
    }

    #[test]
    fn test_credit_flattens_movie_fields() {
        let json = r#"{
            "id": 550,
            "title": "Fight Club",
            "poster_path": "/fc.jpg",
            "character": "Tyler Durden",
            "popularity": 61.4,
            "credit_id": "52fe4250c3a36847f80149f3"
        }"#;

        let credit: PersonCredit = serde_json::from_str(json).unwrap();
        assert_eq!(credit.movie.id, 550);
        assert_eq!(credit.movie.title.as_deref(), Some("Fight Club"));
        assert_eq!(credit.character.as_deref(), Some("Tyler Durden"));
        assert_eq!(credit.popularity, Some(61.4));
    }
}
