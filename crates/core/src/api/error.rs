//! API error types.

use thiserror::Error;

/// Errors that can occur when talking to the record API or the job-search feed.
#[derive(Debug, Error)]
pub enum ApiError {
	/// The request could not complete (connection refused, DNS, TLS, ...).
	#[error("request failed: {0}")]
	Http(#[from] reqwest::Error),

	/// The request completed but the server rejected it.
	#[error("server responded with {status}: {message}")]
	Api {
		/// HTTP status code returned by the server.
		status: u16,
		/// `detail` from the error body when present, otherwise the raw body.
		message: String,
	},

	/// The response body could not be decoded.
	#[error("invalid response: {0}")]
	Parse(String),

	/// The request never left the client, e.g. the request worker had stopped.
	#[error("request was not sent: {0}")]
	NotSent(String),
}

/// Coarse failure category shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
	Network,
	Status,
	Decode,
}

impl ApiError {
	#[must_use]
	pub fn kind(&self) -> FailureKind {
		match self {
			Self::Http(err) if err.is_decode() => FailureKind::Decode,
			Self::Http(_) | Self::NotSent(_) => FailureKind::Network,
			Self::Api { .. } => FailureKind::Status,
			Self::Parse(_) => FailureKind::Decode,
		}
	}

	/// HTTP status of a rejected request.
	#[must_use]
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Api { status, .. } => Some(*status),
			Self::Http(err) => err.status().map(|status| status.as_u16()),
			Self::Parse(_) | Self::NotSent(_) => None,
		}
	}

	#[must_use]
	pub fn is_not_found(&self) -> bool {
		self.status() == Some(404)
	}
}
