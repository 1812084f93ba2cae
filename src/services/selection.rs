//! Which parts of a fetched record end up on a page.
//!
//! These are fixed output-length rules, applied after fetching and before
//! rendering.

use crate::models::{CastMember, MovieCredits, PersonCredit, PersonMovieCredits};

/// Cast members shown on a movie page
pub const TOP_CAST: usize = 5;

/// Credits shown in a person's "Known For" grid
pub const KNOWN_FOR_LIMIT: usize = 12;

/// Credit titles named in a person's meta description
pub const KNOWN_FOR_SUMMARY: usize = 3;

/// Characters of biography shown before the ellipsis
pub const BIOGRAPHY_LIMIT: usize = 500;

/// Top-billed cast, in upstream order
pub fn top_cast(credits: &MovieCredits) -> &[CastMember] {
    let end = credits.cast.len().min(TOP_CAST);
    &credits.cast[..end]
}

/// Credits ordered by popularity, most popular first
///
/// The sort is stable, so equally popular credits keep their upstream order.
/// Credits without a popularity score sort last.
pub fn known_for(credits: &PersonMovieCredits, limit: usize) -> Vec<&PersonCredit> {
    let mut ranked: Vec<&PersonCredit> = credits.cast.iter().collect();
    ranked.sort_by(|a, b| {
        let a = a.popularity.unwrap_or(f64::NEG_INFINITY);
        let b = b.popularity.unwrap_or(f64::NEG_INFINITY);
        b.total_cmp(&a)
    });
    ranked.truncate(limit);
    ranked
}

/// Titles of the most popular credits, for the meta description
pub fn known_for_summary(credits: &PersonMovieCredits) -> Vec<String> {
    known_for(credits, KNOWN_FOR_SUMMARY)
        .into_iter()
        .filter_map(|credit| credit.movie.title.clone())
        .collect()
}

/// First `limit` characters of `text`, if it is longer than that
pub fn truncate_chars(text: &str, limit: usize) -> Option<&str> {
    text.char_indices().nth(limit).map(|(idx, _)| &text[..idx])
}

/// Biography as displayed: cut to [`BIOGRAPHY_LIMIT`] characters plus `...`
pub fn biography_excerpt(biography: &str) -> String {
    match truncate_chars(biography, BIOGRAPHY_LIMIT) {
        Some(head) => format!("{}...", head),
        None => biography.to_string(),
    }
}
