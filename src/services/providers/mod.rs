//! Movie metadata provider abstraction
//!
//! Page handlers only talk to [`MovieDatabase`], so the TMDB client can be
//! swapped for a mock or an in-memory catalog in tests.

use crate::{
    error::AppResult,
    models::{Movie, MovieCredits, MoviePage, Person, PersonMovieCredits, TmdbId},
};

pub mod tmdb;

pub use tmdb::TmdbProvider;

/// Read-only access to an upstream movie database
///
/// Every call is a fresh upstream request. Implementations must not cache.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MovieDatabase: Send + Sync {
    /// One page of currently popular movies
    async fn popular_movies(&self, page: u32) -> AppResult<MoviePage>;

    /// Full details for a single movie
    async fn movie_details(&self, id: TmdbId) -> AppResult<Movie>;

    /// Cast list for a movie, in billing order
    async fn movie_credits(&self, id: TmdbId) -> AppResult<MovieCredits>;

    /// Full details for a single person
    async fn person_details(&self, id: TmdbId) -> AppResult<Person>;

    /// Movies the person acted in
    async fn person_movie_credits(&self, id: TmdbId) -> AppResult<PersonMovieCredits>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
