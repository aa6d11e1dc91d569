//! Job-record API client.

use std::future::Future;

use super::error::ApiError;
use super::http::{check_response, decode_json};
use super::{ClientOptions, normalize_base_url};
use crate::records::{ApplicationDraft, JobApplication, JobId};

/// Remote store of job applications.
pub trait RecordApi: Send + Sync {
	/// `GET /jobs/`
	fn list(&self) -> impl Future<Output = Result<Vec<JobApplication>, ApiError>> + Send;

	/// `POST /jobs/` returning the stored record with its assigned id.
	fn create(
		&self,
		draft: &ApplicationDraft,
	) -> impl Future<Output = Result<JobApplication, ApiError>> + Send;

	/// `PUT /jobs/{id}` with the full record body.
	fn update(
		&self,
		id: &JobId,
		draft: &ApplicationDraft,
	) -> impl Future<Output = Result<JobApplication, ApiError>> + Send;

	/// `DELETE /jobs/{id}`; only the status matters.
	fn delete(&self, id: &JobId) -> impl Future<Output = Result<(), ApiError>> + Send;

	/// `GET /health`
	fn health(&self) -> impl Future<Output = Result<(), ApiError>> + Send;
}

/// [`RecordApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpRecordApi {
	http: reqwest::Client,
	base_url: String,
}

impl HttpRecordApi {
	/// Create a client for the record API rooted at `base_url`.
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

	fn collection_url(&self) -> String {
		format!("{}/jobs/", self.base_url)
	}

	fn record_url(&self, id: &JobId) -> String {
		format!(
			"{}/jobs/{}",
			self.base_url,
			urlencoding::encode(id.as_str())
		)
	}
}

impl RecordApi for HttpRecordApi {
	async fn list(&self) -> Result<Vec<JobApplication>, ApiError> {
		let resp = check_response(self.http.get(self.collection_url()).send().await?).await?;
		decode_json(resp).await
	}

	async fn create(&self, draft: &ApplicationDraft) -> Result<JobApplication, ApiError> {
		let resp = check_response(
			self.http
				.post(self.collection_url())
				.json(draft)
				.send()
				.await?,
		)
		.await?;
		decode_json(resp).await
	}

	async fn update(
		&self,
		id: &JobId,
		draft: &ApplicationDraft,
	) -> Result<JobApplication, ApiError> {
		let resp =
			check_response(self.http.put(self.record_url(id)).json(draft).send().await?).await?;
		decode_json(resp).await
	}

	async fn delete(&self, id: &JobId) -> Result<(), ApiError> {
		check_response(self.http.delete(self.record_url(id)).send().await?).await?;
		Ok(())
	}

	async fn health(&self) -> Result<(), ApiError> {
		let url = format!("{}/health", self.base_url);
		check_response(self.http.get(url).send().await?).await?;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	fn client(base: &str) -> HttpRecordApi {
		HttpRecordApi::with_client(reqwest::Client::new(), base)
	}

	#[test]
	fn collection_url_keeps_trailing_slash() {
		assert_eq!(
			client("http://127.0.0.1:8001/").collection_url(),
			"http://127.0.0.1:8001/jobs/"
		);
	}

	#[test]
	fn record_url_encodes_id() {
		let api = client("https://tracker.example.com/api");
		assert_eq!(
			api.record_url(&JobId::new("42")),
			"https://tracker.example.com/api/jobs/42"
		);
		assert_eq!(
			api.record_url(&JobId::new("a b")),
			"https://tracker.example.com/api/jobs/a%20b"
		);
	}
}
