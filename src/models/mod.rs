//! Records fetched from the upstream movie database.
//!
//! These are read-only and live for a single page render. Every field other
//! than the identifier is optional because TMDB may omit any of them.

pub mod movie;
pub mod person;

pub use movie::{CastMember, Genre, Movie, MovieCredits, MoviePage, TmdbId};
pub use person::{Person, PersonCredit, PersonMovieCredits};
