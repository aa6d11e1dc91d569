//! HTTP collaborators: the job-record API and the external job-search feed.
//!
//! Both are expressed as traits so the command handlers in
//! [`crate::runtime`] can run against in-memory fakes in tests. The reqwest
//! implementations share one client configured from [`ClientOptions`].

mod error;
mod http;
mod listings;
mod records;

use std::time::Duration;

pub use error::{ApiError, FailureKind};
pub use http::{check_response, decode_json};
pub use listings::{HttpListingFeed, ListingFeed};
pub use records::{HttpRecordApi, RecordApi};

/// Default base URL for both collaborators.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8001";

/// Settings shared by the HTTP clients.
#[derive(Debug, Clone)]
pub struct ClientOptions {
	pub user_agent: String,
	/// Per-request timeout. `None` lets a hung request wait indefinitely.
	pub timeout: Option<Duration>,
}

impl Default for ClientOptions {
	fn default() -> Self {
		Self {
			user_agent: concat!("jobtrack/", env!("CARGO_PKG_VERSION")).to_string(),
			timeout: None,
		}
	}
}

impl ClientOptions {
	/// Build the underlying reqwest client.
	///
	/// # Errors
	///
	/// Returns [`ApiError::Http`] if the TLS backend or resolver cannot be
	/// initialized.
	pub fn build_client(&self) -> Result<reqwest::Client, ApiError> {
		let mut builder = reqwest::Client::builder().user_agent(self.user_agent.clone());
		if let Some(timeout) = self.timeout {
			builder = builder.timeout(timeout);
		}
		Ok(builder.build()?)
	}
}

/// Strip trailing slashes so paths can be appended with a leading `/`.
pub(crate) fn normalize_base_url(base: &str) -> String {
	base.trim().trim_end_matches('/').to_string()
}
