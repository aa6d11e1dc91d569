//! In-memory collaborators for tests.
//!
//! Both fakes count the requests they receive so tests can assert that an
//! operation issued no remote call at all.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::api::{ApiError, ListingFeed, RecordApi};
use crate::listings::{ListingPage, ListingResult, SearchQuery};
use crate::records::{ApplicationDraft, JobApplication, JobId};

/// Server-side rejection returned by a fake in place of a real response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
	pub status: u16,
	pub message: String,
}

impl Rejection {
	#[must_use]
	pub fn new(status: u16, message: impl Into<String>) -> Self {
		Self {
			status,
			message: message.into(),
		}
	}

	fn to_error(&self) -> ApiError {
		ApiError::Api {
			status: self.status,
			message: self.message.clone(),
		}
	}
}

/// Record store that assigns sequential numeric ids.
#[derive(Debug, Default)]
pub struct FakeRecords {
	records: Mutex<Vec<JobApplication>>,
	next_id: AtomicUsize,
	calls: AtomicUsize,
	failure: Mutex<Option<Rejection>>,
}

impl FakeRecords {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Start with existing records. New ids continue after the seeded count.
	#[must_use]
	pub fn with_records(records: Vec<JobApplication>) -> Self {
		let fake = Self::new();
		fake.next_id.store(records.len(), Ordering::SeqCst);
		*lock(&fake.records) = records;
		fake
	}

	/// Make every following request fail with `rejection` until cleared.
	pub fn fail_with(&self, rejection: Option<Rejection>) {
		*lock(&self.failure) = rejection;
	}

	/// Number of requests received so far.
	#[must_use]
	pub fn calls(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}

	#[must_use]
	pub fn snapshot(&self) -> Vec<JobApplication> {
		lock(&self.records).clone()
	}

	fn enter(&self) -> Result<(), ApiError> {
		self.calls.fetch_add(1, Ordering::SeqCst);
		match lock(&self.failure).as_ref() {
			Some(rejection) => Err(rejection.to_error()),
			None => Ok(()),
		}
	}

	fn not_found() -> ApiError {
		ApiError::Api {
			status: 404,
			message: "Job not found".into(),
		}
	}
}

impl RecordApi for FakeRecords {
	async fn list(&self) -> Result<Vec<JobApplication>, ApiError> {
		self.enter()?;
		Ok(self.snapshot())
	}

	async fn create(&self, draft: &ApplicationDraft) -> Result<JobApplication, ApiError> {
		self.enter()?;
		let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
		let record = JobApplication {
			id: JobId::from(id as u64),
			company: draft.company.clone(),
			position: draft.position.clone(),
			status: draft.status,
		};
		lock(&self.records).push(record.clone());
		Ok(record)
	}

	async fn update(
		&self,
		id: &JobId,
		draft: &ApplicationDraft,
	) -> Result<JobApplication, ApiError> {
		self.enter()?;
		let mut records = lock(&self.records);
		let slot = records
			.iter_mut()
			.find(|record| &record.id == id)
			.ok_or_else(Self::not_found)?;
		slot.company = draft.company.clone();
		slot.position = draft.position.clone();
		slot.status = draft.status;
		Ok(slot.clone())
	}

	async fn delete(&self, id: &JobId) -> Result<(), ApiError> {
		self.enter()?;
		let mut records = lock(&self.records);
		let before = records.len();
		records.retain(|record| &record.id != id);
		if records.len() == before {
			return Err(Self::not_found());
		}
		Ok(())
	}

	async fn health(&self) -> Result<(), ApiError> {
		self.enter()
	}
}

/// Job feed that answers every query with the same page.
#[derive(Debug, Default)]
pub struct FakeListings {
	page: Mutex<ListingPage>,
	queries: Mutex<Vec<SearchQuery>>,
	failure: Mutex<Option<Rejection>>,
}

impl FakeListings {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn with_results(results: Vec<ListingResult>) -> Self {
		let fake = Self::new();
		*lock(&fake.page) = ListingPage {
			count: Some(results.len()),
			data: results,
		};
		fake
	}

	pub fn fail_with(&self, rejection: Option<Rejection>) {
		*lock(&self.failure) = rejection;
	}

	/// Queries received so far, oldest first.
	#[must_use]
	pub fn queries(&self) -> Vec<SearchQuery> {
		lock(&self.queries).clone()
	}

	#[must_use]
	pub fn calls(&self) -> usize {
		lock(&self.queries).len()
	}
}

impl ListingFeed for FakeListings {
	async fn search(&self, query: &SearchQuery) -> Result<ListingPage, ApiError> {
		lock(&self.queries).push(query.clone());
		if let Some(rejection) = lock(&self.failure).as_ref() {
			return Err(rejection.to_error());
		}
		Ok(lock(&self.page).clone())
	}
}

/// Build a listing with the fields the views display.
#[must_use]
pub fn listing(title: &str, company: &str, location: &str) -> ListingResult {
	ListingResult {
		title: title.into(),
		company_name: company.into(),
		location: location.into(),
		..ListingResult::default()
	}
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
	mutex.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}
