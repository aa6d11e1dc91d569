use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A job listing returned by the external feed.
///
/// Fields are passed through as delivered. Nothing here is owned or validated
/// by the tracker; missing text fields decode to empty strings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingResult {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id: Option<Value>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub slug: Option<String>,
	#[serde(deserialize_with = "null_as_default")]
	pub title: String,
	#[serde(deserialize_with = "null_as_default")]
	pub company_name: String,
	#[serde(deserialize_with = "null_as_default")]
	pub location: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub job_type: Option<String>,
	#[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
	pub job_types: Vec<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub remote: Option<bool>,
	#[serde(deserialize_with = "null_as_default")]
	pub url: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub salary: Option<Value>,
	#[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
	pub tags: Vec<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub created_at: Option<Value>,
	/// Any field the feed returns that is not listed above.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

impl ListingResult {
	/// Employment type as a single label: `job_type` when present, otherwise
	/// the comma-joined `job_types` list.
	#[must_use]
	pub fn job_type_label(&self) -> String {
		match self.job_type.as_deref().map(str::trim) {
			Some(label) if !label.is_empty() => label.to_string(),
			_ => self.job_types.join(", "),
		}
	}
}

/// Response envelope of the job-search endpoint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListingPage {
	#[serde(default, deserialize_with = "null_as_default")]
	pub data: Vec<ListingResult>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub count: Option<usize>,
}

/// Treat an explicit `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Deserialize<'de> + Default,
{
	Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use serde_json::json;

	use super::*;

	const FIXTURE: &str = r#"{
		"data": [
			{
				"slug": "senior-rust-developer-berlin-123",
				"company_name": "Ferrous GmbH",
				"title": "Senior Rust Developer",
				"description": "<p>Systems work</p>",
				"remote": true,
				"url": "https://www.arbeitnow.com/jobs/ferrous/senior-rust-developer-berlin-123",
				"tags": ["Software Development"],
				"job_types": ["full time", "berufserfahren"],
				"location": "Berlin",
				"created_at": 1730000000
			},
			{
				"title": "Marketing Lead",
				"company_name": "Acme",
				"location": "Munich",
				"job_type": "Part-time",
				"url": "https://example.com/jobs/2"
			}
		],
		"count": 2
	}"#;

	#[test]
	fn parses_feed_payload() {
		let page: ListingPage = serde_json::from_str(FIXTURE).unwrap();
		assert_eq!(page.count, Some(2));
		assert_eq!(page.data.len(), 2);

		let first = &page.data[0];
		assert_eq!(first.title, "Senior Rust Developer");
		assert_eq!(first.remote, Some(true));
		assert_eq!(first.created_at, Some(json!(1_730_000_000)));
		assert_eq!(first.job_type_label(), "full time, berufserfahren");
		assert_eq!(page.data[1].job_type_label(), "Part-time");
	}

	#[test]
	fn missing_data_is_empty() {
		let page: ListingPage = serde_json::from_str("{}").unwrap();
		assert!(page.data.is_empty());
		assert_eq!(page.count, None);
	}

	#[test]
	fn unknown_fields_pass_through() {
		let listing: ListingResult = serde_json::from_value(json!({
			"title": "Engineer",
			"visa_sponsorship": true,
		}))
		.unwrap();
		assert_eq!(listing.extra.get("visa_sponsorship"), Some(&json!(true)));
		assert_eq!(listing.company_name, "");

		let encoded = serde_json::to_value(&listing).unwrap();
		assert_eq!(encoded["visa_sponsorship"], json!(true));
	}

	#[test]
	fn null_fields_decode_as_empty() {
		let page: ListingPage = serde_json::from_value(json!({
			"data": [{
				"title": "Rust Dev",
				"company_name": "Ferrous",
				"location": null,
				"job_type": null,
				"job_types": null,
				"url": "https://example.com/jobs/3",
				"tags": null,
			}],
		}))
		.unwrap();

		let listing = &page.data[0];
		assert_eq!(listing.title, "Rust Dev");
		assert_eq!(listing.location, "");
		assert!(listing.tags.is_empty());
		assert_eq!(listing.job_type_label(), "");

		let empty: ListingPage = serde_json::from_value(json!({ "data": null })).unwrap();
		assert!(empty.data.is_empty());
	}
}
