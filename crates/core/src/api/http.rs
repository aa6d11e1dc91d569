//! Shared HTTP response helpers for the API clients.
//!
//! Status-code checks and body decoding live here so the client modules stay
//! focused on request construction.

use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Return the response unchanged on success, or [`ApiError::Api`] carrying the
/// status code and the server's error message.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
	let status = resp.status();
	if status.is_success() {
		return Ok(resp);
	}

	let body = resp.text().await.unwrap_or_default();
	Err(ApiError::Api {
		status: status.as_u16(),
		message: error_message(&body, status.canonical_reason()),
	})
}

/// Decode a JSON body, reporting malformed payloads as [`ApiError::Parse`].
pub async fn decode_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
	let bytes = resp.bytes().await?;
	serde_json::from_slice(&bytes).map_err(|err| ApiError::Parse(err.to_string()))
}

/// Pull a human-readable message out of an error body.
///
/// Understands `{"detail": "..."}` bodies (including validation error lists),
/// falling back to the trimmed raw text and finally the canonical reason.
fn error_message(body: &str, reason: Option<&str>) -> String {
	if let Ok(value) = serde_json::from_str::<serde_json::Value>(body)
		&& let Some(detail) = value.get("detail")
	{
		match detail {
			serde_json::Value::String(text) => return text.clone(),
			serde_json::Value::Array(items) => {
				let messages: Vec<&str> = items
					.iter()
					.filter_map(|item| item.get("msg").and_then(|msg| msg.as_str()))
					.collect();
				if !messages.is_empty() {
					return messages.join("; ");
				}
			}
			_ => {}
		}
	}

	let trimmed = body.trim();
	if trimmed.is_empty() {
		reason.unwrap_or("request rejected").to_string()
	} else {
		trimmed.to_string()
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	fn mock_response(status: u16, body: &str) -> reqwest::Response {
		reqwest::Response::from(
			::http::Response::builder()
				.status(status)
				.body(body.to_string())
				.unwrap(),
		)
	}

	#[tokio::test]
	async fn check_response_success() {
		let resp = mock_response(200, "[]");
		assert!(check_response(resp).await.is_ok());
	}

	#[tokio::test]
	async fn check_response_extracts_detail() {
		let resp = mock_response(404, r#"{"detail": "Job not found"}"#);
		let err = check_response(resp).await.unwrap_err();
		match err {
			ApiError::Api { status, message } => {
				assert_eq!(status, 404);
				assert_eq!(message, "Job not found");
			}
			other => panic!("unexpected error: {other:?}"),
		}
	}

	#[tokio::test]
	async fn check_response_server_error_without_body() {
		let resp = mock_response(500, "");
		let err = check_response(resp).await.unwrap_err();
		assert!(matches!(err, ApiError::Api { status: 500, ref message } if message == "Internal Server Error"));
	}

	#[tokio::test]
	async fn decode_json_reports_parse_errors() {
		let resp = mock_response(200, "<html>oops</html>");
		let err = decode_json::<Vec<u32>>(resp).await.unwrap_err();
		assert!(matches!(err, ApiError::Parse(_)));
	}

	#[test]
	fn validation_details_are_joined() {
		let body = r#"{"detail": [{"msg": "field required"}, {"msg": "value is not a valid string"}]}"#;
		assert_eq!(
			error_message(body, None),
			"field required; value is not a valid string"
		);
	}

	#[test]
	fn plain_text_body_is_kept() {
		assert_eq!(error_message("  upstream down \n", None), "upstream down");
	}
}
