use std::fmt;

use crate::api::{ApiError, FailureKind};

/// Why an alert was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
	/// A required field was missing; no request was sent.
	Validation,
	/// The request could not complete.
	Network,
	/// The server rejected the request or sent an unreadable reply.
	Rejected,
}

/// A user-visible message that must be acknowledged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
	pub kind: AlertKind,
	pub message: String,
	/// Underlying error text, if any.
	pub detail: Option<String>,
}

impl Alert {
	pub fn validation(message: impl Into<String>) -> Self {
		Self {
			kind: AlertKind::Validation,
			message: message.into(),
			detail: None,
		}
	}

	pub fn request_failed(message: impl Into<String>, err: &ApiError) -> Self {
		let kind = match err.kind() {
			FailureKind::Network => AlertKind::Network,
			FailureKind::Status | FailureKind::Decode => AlertKind::Rejected,
		};
		Self {
			kind,
			message: message.into(),
			detail: Some(err.to_string()),
		}
	}
}

impl fmt::Display for Alert {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.detail {
			Some(detail) => write!(f, "{} ({detail})", self.message),
			None => f.write_str(&self.message),
		}
	}
}
