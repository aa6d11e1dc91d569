//! Job-search feed client.

use std::future::Future;

use super::error::ApiError;
use super::http::{check_response, decode_json};
use super::{ClientOptions, normalize_base_url};
use crate::listings::{ListingPage, SearchQuery};

/// Opaque external source of job listings.
pub trait ListingFeed: Send + Sync {
	/// `GET /external-jobs` with only the parameters present in `query`.
	fn search(
		&self,
		query: &SearchQuery,
	) -> impl Future<Output = Result<ListingPage, ApiError>> + Send;
}

/// [`ListingFeed`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpListingFeed {
	http: reqwest::Client,
	base_url: String,
}

impl HttpListingFeed {
	/// Create a client for the job-search endpoint rooted at `base_url`.
	///
	/// # Errors
	///
	/// Returns [`ApiError`] if the HTTP client cannot be built.
	pub fn new(base_url: &str, options: &ClientOptions) -> Result<Self, ApiError> {
		Ok(Self::with_client(options.build_client()?, base_url))
	}

	/// Reuse an existing reqwest client.
	#[must_use]
	pub fn with_client(http: reqwest::Client, base_url: &str) -> Self {
		Self {
			http,
			base_url: normalize_base_url(base_url),
		}
	}

	#[must_use]
	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	fn search_url(&self, query: &SearchQuery) -> String {
		format!("{}/external-jobs{}", self.base_url, query.to_query_string())
	}
}

impl ListingFeed for HttpListingFeed {
	async fn search(&self, query: &SearchQuery) -> Result<ListingPage, ApiError> {
		let resp = check_response(self.http.get(self.search_url(query)).send().await?).await?;
		decode_json(resp).await
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	fn feed() -> HttpListingFeed {
		HttpListingFeed::with_client(reqwest::Client::new(), "http://127.0.0.1:8001")
	}

	#[test]
	fn search_url_omits_empty_location() {
		let query = SearchQuery::from_fields("Developer", "");
		assert_eq!(
			feed().search_url(&query),
			"http://127.0.0.1:8001/external-jobs?keyword=Developer"
		);
	}

	#[test]
	fn search_url_without_parameters() {
		let query = SearchQuery::from_fields("", "");
		assert_eq!(
			feed().search_url(&query),
			"http://127.0.0.1:8001/external-jobs"
		);
	}
}
