use std::sync::Arc;

use crate::config::Config;
use crate::services::{MovieDatabase, TmdbProvider};

/// Shared application state
///
/// Nothing here changes after startup; each request fetches its records
/// fresh through `catalog`.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn MovieDatabase>,
    /// Public base URL without trailing slash
    pub site_url: String,
}

impl AppState {
    pub fn new(catalog: Arc<dyn MovieDatabase>, site_url: impl Into<String>) -> Self {
        Self {
            catalog,
            site_url: site_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// State backed by the TMDB API
    pub fn from_config(config: &Config) -> Self {
        let provider = TmdbProvider::new(config.tmdb_api_key.clone(), config.tmdb_api_url.clone());
        Self::new(Arc::new(provider), config.site_url.clone())
    }
}
