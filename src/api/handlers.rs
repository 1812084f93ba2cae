use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    Extension, Json,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::fmt::Write;

use crate::error::{AppError, AppResult};
use crate::middleware::RequestId;
use crate::models::TmdbId;
use crate::render::{HomePage, MovieDetailPage, PageContent, PersonDetailPage};

use super::AppState;

// Request/Response types

/// Body of the upstream diagnostic endpoint
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movie_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_movie: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Wraps page content in the site layout
fn render<T: PageContent>(content: T) -> AppResult<Html<String>> {
    let mut html = String::new();
    write!(html, "{}", content.page())
        .map_err(|_| AppError::Internal("Failed to render page".to_string()))?;
    Ok(Html(html))
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Home page: first page of popular movies
pub async fn home_page(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> AppResult<Html<String>> {
    let popular = state.catalog.popular_movies(1).await?;

    tracing::info!(
        request_id = %request_id,
        movies = popular.results.len(),
        "Rendering home page"
    );

    let page = HomePage {
        movies: popular.results,
        site_url: state.site_url.clone(),
    };
    render(page)
}

/// Movie detail page; details and credits are fetched concurrently
pub async fn movie_page(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(id): Path<TmdbId>,
) -> AppResult<Html<String>> {
    let (movie, credits) = tokio::try_join!(
        state.catalog.movie_details(id),
        state.catalog.movie_credits(id),
    )?;

    tracing::info!(
        request_id = %request_id,
        movie_id = id,
        cast = credits.cast.len(),
        "Rendering movie page"
    );

    let page = MovieDetailPage {
        movie,
        credits,
        site_url: state.site_url.clone(),
    };
    render(page)
}

/// Person detail page; details and movie credits are fetched concurrently
pub async fn person_page(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(id): Path<TmdbId>,
) -> AppResult<Html<String>> {
    let (person, credits) = tokio::try_join!(
        state.catalog.person_details(id),
        state.catalog.person_movie_credits(id),
    )?;

    tracing::info!(
        request_id = %request_id,
        person_id = id,
        credits = credits.cast.len(),
        "Rendering person page"
    );

    let page = PersonDetailPage {
        person,
        credits,
        site_url: state.site_url.clone(),
    };
    render(page)
}

/// Checks that the upstream API answers, reporting failures in the body
/// instead of the generic error page
pub async fn upstream_diagnostic(
    State(state): State<AppState>,
) -> (StatusCode, Json<DiagnosticResponse>) {
    match state.catalog.popular_movies(1).await {
        Ok(popular) => (
            StatusCode::OK,
            Json(DiagnosticResponse {
                success: true,
                movie_count: Some(popular.results.len()),
                first_movie: Some(
                    popular
                        .results
                        .first()
                        .and_then(|m| m.title.clone())
                        .unwrap_or_else(|| "No data".to_string()),
                ),
                error: None,
            }),
        ),
        Err(e) => {
            tracing::warn!(
                error = %e,
                provider = state.catalog.name(),
                "Upstream diagnostic failed"
            );
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(DiagnosticResponse {
                    success: false,
                    movie_count: None,
                    first_movie: None,
                    error: Some(e.to_string()),
                }),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::response::IntoResponse;
    use mockall::predicate::eq;

    use crate::models::{Movie, MovieCredits, MoviePage, Person, PersonMovieCredits};
    use crate::services::providers::MockMovieDatabase;

    fn state(mock: MockMovieDatabase) -> AppState {
        AppState::new(Arc::new(mock), "https://example.com/")
    }

    fn movie(id: TmdbId, title: &str) -> Movie {
        Movie {
            id,
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_movie_page_fetches_details_and_credits() {
        let mut mock = MockMovieDatabase::new();
        mock.expect_movie_details()
            .with(eq(550))
            .times(1)
            .returning(|id| Ok(movie(id, "Fight Club")));
        mock.expect_movie_credits()
            .with(eq(550))
            .times(1)
            .returning(|_| Ok(MovieCredits::default()));

        let Html(html) = movie_page(
            State(state(mock)),
            Extension(RequestId::generate()),
            Path(550),
        )
        .await
        .unwrap();

        assert!(html.contains("<title>Fight Club - Cast, Reviews &amp; Where to Watch | RaftMovies</title>"));
        assert!(html.contains("<link rel=\"canonical\" href=\"https://example.com/movie/550\">"));
    }

    #[tokio::test]
    async fn test_movie_page_fails_when_credits_fail() {
        let mut mock = MockMovieDatabase::new();
        mock.expect_movie_details()
            .returning(|id| Ok(movie(id, "Fight Club")));
        mock.expect_movie_credits()
            .returning(|_| Err(AppError::ExternalApi("TMDB API returned status 500".to_string())));

        let result = movie_page(
            State(state(mock)),
            Extension(RequestId::generate()),
            Path(550),
        )
        .await;

        let Err(err) = result else {
            panic!("expected the page to fail");
        };
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_person_page_renders() {
        let mut mock = MockMovieDatabase::new();
        mock.expect_person_details().with(eq(287)).returning(|id| {
            Ok(Person {
                id,
                name: Some("Brad Pitt".to_string()),
                ..Default::default()
            })
        });
        mock.expect_person_movie_credits()
            .with(eq(287))
            .returning(|_| Ok(PersonMovieCredits::default()));

        let Html(html) = person_page(
            State(state(mock)),
            Extension(RequestId::generate()),
            Path(287),
        )
        .await
        .unwrap();

        assert!(html.contains("<h1>Brad Pitt</h1>"));
        assert!(html.contains("\"@type\":\"Person\""));
    }

    #[tokio::test]
    async fn test_home_page_requests_first_page() {
        let mut mock = MockMovieDatabase::new();
        mock.expect_popular_movies()
            .with(eq(1))
            .times(1)
            .returning(|_| {
                Ok(MoviePage {
                    page: Some(1),
                    results: vec![movie(550, "Fight Club"), movie(680, "Pulp Fiction")],
                    ..Default::default()
                })
            });

        let Html(html) = home_page(State(state(mock)), Extension(RequestId::generate()))
            .await
            .unwrap();

        assert!(html.contains("href=\"/movie/550\""));
        assert!(html.contains("href=\"/movie/680\""));
        assert!(html.contains("\"@type\":\"WebSite\""));
    }

    #[tokio::test]
    async fn test_diagnostic_success() {
        let mut mock = MockMovieDatabase::new();
        mock.expect_popular_movies().returning(|_| {
            Ok(MoviePage {
                results: vec![movie(550, "Fight Club"), movie(680, "Pulp Fiction")],
                ..Default::default()
            })
        });

        let (status, Json(body)) = upstream_diagnostic(State(state(mock))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            DiagnosticResponse {
                success: true,
                movie_count: Some(2),
                first_movie: Some("Fight Club".to_string()),
                error: None,
            }
        );
    }

    #[tokio::test]
    async fn test_diagnostic_empty_results() {
        let mut mock = MockMovieDatabase::new();
        mock.expect_popular_movies()
            .returning(|_| Ok(MoviePage::default()));

        let (_, Json(body)) = upstream_diagnostic(State(state(mock))).await;
        assert_eq!(body.movie_count, Some(0));
        assert_eq!(body.first_movie.as_deref(), Some("No data"));
    }

    #[tokio::test]
    async fn test_diagnostic_failure() {
        let mut mock = MockMovieDatabase::new();
        mock.expect_popular_movies()
            .returning(|_| Err(AppError::ExternalApi("TMDB API returned status 401".to_string())));
        mock.expect_name().return_const("mock");

        let (status, Json(body)) = upstream_diagnostic(State(state(mock))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body.success);
        assert_eq!(
            body.error.as_deref(),
            Some("External API error: TMDB API returned status 401")
        );

        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("movieCount").is_none());
    }
}
