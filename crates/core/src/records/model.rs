use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identifier assigned by the record API.
///
/// The client never generates one. Numeric and string ids are both accepted on
/// the wire, rendered back verbatim in request paths and serialized in the
/// form they arrived in. Equality only looks at the rendered text, so an id
/// typed on the command line matches the same id decoded as a number.
#[derive(Debug, Clone)]
pub struct JobId {
	raw: String,
	number: Option<WireNumber>,
}

#[derive(Debug, Clone, Copy)]
enum WireNumber {
	Unsigned(u64),
	Signed(i64),
}

impl JobId {
	/// Wrap an identifier supplied from outside the record API, such as a
	/// command-line argument. It serializes as a string.
	pub fn new(raw: impl Into<String>) -> Self {
		Self {
			raw: raw.into(),
			number: None,
		}
	}

	/// Return the identifier as it appears in request paths.
	#[must_use]
	pub fn as_str(&self) -> &str {
		&self.raw
	}
}

impl From<u64> for JobId {
	fn from(value: u64) -> Self {
		Self {
			raw: value.to_string(),
			number: Some(WireNumber::Unsigned(value)),
		}
	}
}

impl From<i64> for JobId {
	fn from(value: i64) -> Self {
		Self {
			raw: value.to_string(),
			number: Some(WireNumber::Signed(value)),
		}
	}
}

impl PartialEq for JobId {
	fn eq(&self, other: &Self) -> bool {
		self.raw == other.raw
	}
}

impl Eq for JobId {}

impl Hash for JobId {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.raw.hash(state);
	}
}

impl PartialOrd for JobId {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for JobId {
	fn cmp(&self, other: &Self) -> Ordering {
		self.raw.cmp(&other.raw)
	}
}

impl fmt::Display for JobId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.raw)
	}
}

impl Serialize for JobId {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self.number {
			Some(WireNumber::Unsigned(value)) => serializer.serialize_u64(value),
			Some(WireNumber::Signed(value)) => serializer.serialize_i64(value),
			None => serializer.serialize_str(&self.raw),
		}
	}
}

impl<'de> Deserialize<'de> for JobId {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		#[derive(Deserialize)]
		#[serde(untagged)]
		enum RawId {
			Number(u64),
			Signed(i64),
			Text(String),
		}

		Ok(match RawId::deserialize(deserializer)? {
			RawId::Number(value) => Self::from(value),
			RawId::Signed(value) => Self::from(value),
			RawId::Text(value) => Self::new(value),
		})
	}
}

/// Lifecycle stage of a job application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ApplicationStatus {
	#[default]
	Applied,
	Interviewing,
	Offer,
	Rejected,
}

impl ApplicationStatus {
	/// Every status in selector order.
	pub const ALL: [Self; 4] = [
		Self::Applied,
		Self::Interviewing,
		Self::Offer,
		Self::Rejected,
	];

	/// Wire and display name.
	#[must_use]
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Applied => "Applied",
			Self::Interviewing => "Interviewing",
			Self::Offer => "Offer",
			Self::Rejected => "Rejected",
		}
	}

	/// The following status in selector order, wrapping around.
	#[must_use]
	pub fn next(self) -> Self {
		let index = self.position();
		Self::ALL[(index + 1) % Self::ALL.len()]
	}

	/// The preceding status in selector order, wrapping around.
	#[must_use]
	pub fn previous(self) -> Self {
		let index = self.position();
		Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
	}

	fn position(self) -> usize {
		Self::ALL
			.iter()
			.position(|status| *status == self)
			.unwrap_or(0)
	}
}

impl fmt::Display for ApplicationStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Raised when a status name does not match any known status.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown application status '{0}' (expected Applied, Interviewing, Offer or Rejected)")]
pub struct UnknownStatus(pub String);

impl FromStr for ApplicationStatus {
	type Err = UnknownStatus;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		let trimmed = value.trim();
		Self::ALL
			.into_iter()
			.find(|status| status.as_str().eq_ignore_ascii_case(trimmed))
			.ok_or_else(|| UnknownStatus(trimmed.to_string()))
	}
}

/// Body of create and update requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationDraft {
	pub company: String,
	pub position: String,
	pub status: ApplicationStatus,
}

/// A job application as stored by the record API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobApplication {
	pub id: JobId,
	pub company: String,
	pub position: String,
	pub status: ApplicationStatus,
}

impl JobApplication {
	/// Build the full update body for this record with only the status replaced.
	#[must_use]
	pub fn with_status(&self, status: ApplicationStatus) -> ApplicationDraft {
		ApplicationDraft {
			company: self.company.clone(),
			position: self.position.clone(),
			status,
		}
	}
}
