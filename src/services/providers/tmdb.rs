//! The Movie Database (TMDB) v3 provider
//!
//! Every request is a plain GET with the API key passed as the `api_key`
//! query parameter. Responses are decoded straight into the record types in
//! [`crate::models`]; no validation happens beyond that.

use crate::{
    error::{AppError, AppResult},
    models::{Movie, MovieCredits, MoviePage, Person, PersonMovieCredits, TmdbId},
    services::providers::MovieDatabase,
};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;

const LANGUAGE: &str = "en-US";

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl TmdbProvider {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    /// GET `path` and decode the JSON body as `T`
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> AppResult<T> {
        let url = self.endpoint(path);
        tracing::debug!(url = %url, provider = "tmdb", "Upstream request");

        let response = self
            .http_client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(params)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(path = %path, status = %status, "TMDB request failed");
            return Err(AppError::ExternalApi(format!(
                "TMDB API returned status {}: {}",
                status, body
            )));
        }

        let response_text = response.text().await?;

        serde_json::from_str(&response_text).map_err(|e| {
            tracing::error!(
                error = %e,
                path = %path,
                "Failed to deserialize TMDB response"
            );
            AppError::ExternalApi(format!("Failed to parse TMDB response: {}", e))
        })
    }
}

#[async_trait::async_trait]
impl MovieDatabase for TmdbProvider {
    async fn popular_movies(&self, page: u32) -> AppResult<MoviePage> {
        let page = page.max(1).to_string();
        let movies: MoviePage = self
            .get_json("/movie/popular", &[("page", page.as_str())])
            .await?;

        tracing::info!(
            page = %page,
            results = movies.results.len(),
            provider = "tmdb",
            "Popular movies fetched"
        );

        Ok(movies)
    }

    async fn movie_details(&self, id: TmdbId) -> AppResult<Movie> {
        self.get_json(&format!("/movie/{}", id), &[("language", LANGUAGE)])
            .await
    }

    async fn movie_credits(&self, id: TmdbId) -> AppResult<MovieCredits> {
        self.get_json(&format!("/movie/{}/credits", id), &[]).await
    }

    async fn person_details(&self, id: TmdbId) -> AppResult<Person> {
        self.get_json(&format!("/person/{}", id), &[("language", LANGUAGE)])
            .await
    }

    async fn person_movie_credits(&self, id: TmdbId) -> AppResult<PersonMovieCredits> {
        self.get_json(&format!("/person/{}/movie_credits", id), &[])
            .await
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_provider() -> TmdbProvider {
        TmdbProvider::new("test_key".to_string(), "http://test.local/3/".to_string())
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let provider = create_test_provider();
        assert_eq!(provider.endpoint("/movie/550"), "http://test.local/3/movie/550");
    }

    #[test]
    fn test_provider_name() {
        assert_eq!(create_test_provider().name(), "tmdb");
    }

    #[test]
    fn test_unreachable_upstream_is_an_error() {
        // Port is closed once the listener is dropped
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let provider = TmdbProvider::new("k".to_string(), format!("http://127.0.0.1:{}", port));
        let result = tokio_test::block_on(provider.movie_details(550));
        assert!(matches!(result, Err(AppError::HttpClient(_))));
    }

    #[test]
    fn test_popular_page_deserialization() {
        let json = r#"{
            "page": 1,
            "results": [
                { "id": 550, "title": "Fight Club", "vote_average": 8.4 },
                { "id": 680, "title": "Pulp Fiction" }
            ],
            "total_pages": 500,
            "total_results": 10000
        }"#;

        let page: MoviePage = serde_json::from_str(json).unwrap();
        assert_eq!(page.page, Some(1));
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[1].vote_average, None);
    }
}
