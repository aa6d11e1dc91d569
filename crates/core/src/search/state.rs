//! View state for the job-search screen.

use std::fmt;

use tracing::debug;

use crate::api::ApiError;
use crate::listings::{ListingPage, ListingResult, SearchQuery};
use crate::runtime::Command;

pub const NO_RESULTS_MESSAGE: &str = "No jobs found. Try a different search.";
pub const REQUEST_FAILED_MESSAGE: &str = "Could not fetch jobs";

/// Lifecycle of the current search request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchPhase {
	#[default]
	Idle,
	Loading,
	Ready,
	Failed(String),
}

/// Feedback shown in place of results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchMessage {
	/// The request succeeded with zero matches.
	NoResults,
	/// The request failed; carries the error text.
	RequestFailed(String),
}

impl fmt::Display for SearchMessage {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::NoResults => f.write_str(NO_RESULTS_MESSAGE),
			Self::RequestFailed(detail) => write!(f, "{REQUEST_FAILED_MESSAGE}: {detail}"),
		}
	}
}

#[derive(Debug)]
pub struct SearchState {
	pub keyword: String,
	pub location: String,
	/// Results page to request. `1` is the feed default.
	pub page: u32,
	results: Vec<ListingResult>,
	count: Option<usize>,
	phase: SearchPhase,
	guard_in_flight: bool,
	has_searched: bool,
}

impl Default for SearchState {
	fn default() -> Self {
		Self {
			keyword: String::new(),
			location: String::new(),
			page: 1,
			results: Vec::new(),
			count: None,
			phase: SearchPhase::Idle,
			guard_in_flight: true,
			has_searched: false,
		}
	}
}

impl SearchState {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Allow or prevent a new search while one is in flight. With the guard
	/// off, overlapping responses are applied in arrival order.
	#[must_use]
	pub fn with_in_flight_guard(mut self, enabled: bool) -> Self {
		self.guard_in_flight = enabled;
		self
	}

	#[must_use]
	pub fn results(&self) -> &[ListingResult] {
		&self.results
	}

	/// Match count reported by the feed, falling back to the result length.
	#[must_use]
	pub fn count(&self) -> usize {
		self.count.unwrap_or(self.results.len())
	}

	#[must_use]
	pub fn phase(&self) -> &SearchPhase {
		&self.phase
	}

	#[must_use]
	pub fn is_loading(&self) -> bool {
		self.phase == SearchPhase::Loading
	}

	/// Whether the search control should currently accept a trigger.
	#[must_use]
	pub fn can_search(&self) -> bool {
		!(self.guard_in_flight && self.is_loading())
	}

	/// True until the first search has been issued.
	#[must_use]
	pub fn needs_initial_search(&self) -> bool {
		!self.has_searched
	}

	/// Query built from the trimmed, non-empty fields.
	#[must_use]
	pub fn query(&self) -> SearchQuery {
		SearchQuery::from_fields(&self.keyword, &self.location).with_page(self.page)
	}

	#[must_use]
	pub fn message(&self) -> Option<SearchMessage> {
		match &self.phase {
			SearchPhase::Failed(detail) => Some(SearchMessage::RequestFailed(detail.clone())),
			SearchPhase::Ready if self.results.is_empty() => Some(SearchMessage::NoResults),
			_ => None,
		}
	}

	/// Start a search for the current fields.
	///
	/// Returns `None` while another search is in flight and the guard is on.
	pub fn begin_search(&mut self) -> Option<Command> {
		if !self.can_search() {
			debug!("search ignored while a request is in flight");
			return None;
		}
		self.phase = SearchPhase::Loading;
		self.has_searched = true;
		Some(Command::SearchListings(self.query()))
	}

	/// Replace the results with the response payload.
	pub fn search_succeeded(&mut self, page: ListingPage) {
		self.results = page.data;
		self.count = page.count;
		self.phase = SearchPhase::Ready;
	}

	/// Clear the results and record the failure.
	pub fn search_failed(&mut self, err: &ApiError) {
		self.results.clear();
		self.count = None;
		self.phase = SearchPhase::Failed(err.to_string());
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	fn listing(title: &str) -> ListingResult {
		ListingResult {
			title: title.into(),
			company_name: "Acme".into(),
			..ListingResult::default()
		}
	}

	fn page(titles: &[&str]) -> ListingPage {
		ListingPage {
			data: titles.iter().map(|title| listing(title)).collect(),
			count: Some(titles.len()),
		}
	}

	#[test]
	fn begin_search_uses_trimmed_fields() {
		let mut state = SearchState::new();
		state.keyword = " Developer ".into();
		let command = state.begin_search().unwrap();
		assert_eq!(
			command,
			Command::SearchListings(SearchQuery {
				keyword: Some("Developer".into()),
				location: None,
				page: None,
			})
		);
		assert!(state.is_loading());
		assert!(!state.needs_initial_search());
	}

	#[test]
	fn guard_blocks_overlapping_search() {
		let mut state = SearchState::new();
		assert!(state.begin_search().is_some());
		assert!(!state.can_search());
		assert_eq!(state.begin_search(), None);

		state.search_succeeded(page(&["Engineer"]));
		assert!(state.begin_search().is_some());
	}

	#[test]
	fn without_guard_last_response_wins() {
		let mut state = SearchState::new().with_in_flight_guard(false);
		state.keyword = "rust".into();
		assert!(state.begin_search().is_some());
		state.keyword = "go".into();
		assert!(state.begin_search().is_some());

		// The second request answers first, then the stale first response lands.
		state.search_succeeded(page(&["Go Developer"]));
		state.search_succeeded(page(&["Rust Developer", "Rust Lead"]));
		assert_eq!(state.results().len(), 2);
		assert_eq!(state.results()[0].title, "Rust Developer");
	}

	#[test]
	fn empty_result_is_not_a_failure() {
		let mut state = SearchState::new();
		state.begin_search();
		state.search_succeeded(ListingPage::default());
		assert_eq!(state.message(), Some(SearchMessage::NoResults));
		assert_eq!(state.count(), 0);
	}

	#[test]
	fn failure_clears_results_with_distinct_message() {
		let mut state = SearchState::new();
		state.begin_search();
		state.search_succeeded(page(&["Engineer"]));
		state.begin_search();
		state.search_failed(&ApiError::Api {
			status: 500,
			message: "Error fetching jobs".into(),
		});

		assert!(state.results().is_empty());
		let message = state.message().unwrap();
		assert!(matches!(message, SearchMessage::RequestFailed(_)));
		assert_ne!(message.to_string(), SearchMessage::NoResults.to_string());
		assert!(state.can_search());
	}

	#[test]
	fn no_message_before_first_search() {
		assert_eq!(SearchState::new().message(), None);
	}
}
