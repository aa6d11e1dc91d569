//! Read-only job listings fetched from the external job-search feed.

mod model;
mod query;

pub use model::{ListingPage, ListingResult};
pub use query::SearchQuery;
