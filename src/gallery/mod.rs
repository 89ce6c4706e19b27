//! Portfolio gallery: project cards held in memory with tag filtering.

mod models;
mod seed;
mod store;

pub use models::{GalleryError, Website, WebsiteDraft, WebsiteField, parse_tags};
pub use seed::seed_websites;
pub use store::{ALL_TAG, GalleryStore};
