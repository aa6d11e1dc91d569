use std::fmt::Write;

use serde::Serialize;

/// Parameters of one job-search request.
///
/// Only non-empty, trimmed fields are kept so the request never carries blank
/// parameters.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SearchQuery {
	pub keyword: Option<String>,
	pub location: Option<String>,
	pub page: Option<u32>,
}

impl SearchQuery {
	/// Build a query from raw field text.
	#[must_use]
	pub fn from_fields(keyword: &str, location: &str) -> Self {
		Self {
			keyword: non_empty(keyword),
			location: non_empty(location),
			page: None,
		}
	}

	/// Request a specific results page. The first page is the feed default and
	/// is never sent explicitly.
	#[must_use]
	pub fn with_page(mut self, page: u32) -> Self {
		self.page = (page > 1).then_some(page);
		self
	}

	/// Whether the query carries no parameters at all.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.keyword.is_none() && self.location.is_none() && self.page.is_none()
	}

	/// Render as a URL query string including the leading `?`, or an empty
	/// string when there are no parameters.
	#[must_use]
	pub fn to_query_string(&self) -> String {
		let mut pairs = Vec::with_capacity(3);
		if let Some(keyword) = &self.keyword {
			pairs.push(("keyword", urlencoding::encode(keyword).into_owned()));
		}
		if let Some(location) = &self.location {
			pairs.push(("location", urlencoding::encode(location).into_owned()));
		}
		if let Some(page) = self.page {
			pairs.push(("page", page.to_string()));
		}

		let mut rendered = String::new();
		for (index, (key, value)) in pairs.iter().enumerate() {
			let separator = if index == 0 { '?' } else { '&' };
			let _ = write!(rendered, "{separator}{key}={value}");
		}
		rendered
	}
}

fn non_empty(value: &str) -> Option<String> {
	let trimmed = value.trim();
	(!trimmed.is_empty()).then(|| trimmed.to_string())
}
