//! Server-rendered movie catalog pages backed by The Movie Database (TMDB).

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod render;
pub mod seo;
pub mod services;
