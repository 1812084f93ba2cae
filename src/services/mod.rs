pub mod images;
pub mod providers;
pub mod selection;

pub use providers::{MovieDatabase, TmdbProvider};
