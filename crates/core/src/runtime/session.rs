//! Headless driver that runs view transitions and their requests to completion.

use std::sync::Arc;

use tracing::debug;

use super::command::{Command, Outcome};
use super::execute::execute;
use crate::api::{ApiError, ListingFeed, RecordApi};
use crate::dashboard::DashboardState;
use crate::records::{ApplicationStatus, JobId};
use crate::search::SearchState;

/// Both view states plus their collaborators, driven one request at a time.
///
/// Each operation runs the same transition the terminal UI runs, waits for
/// the request to finish, and applies its outcome before returning.
pub struct Session<R, F> {
	records: Arc<R>,
	listings: Arc<F>,
	runtime: tokio::runtime::Runtime,
	pub dashboard: DashboardState,
	pub search: SearchState,
}

impl<R, F> Session<R, F>
where
	R: RecordApi,
	F: ListingFeed,
{
	/// # Errors
	///
	/// Returns an I/O error if the tokio runtime cannot be built.
	pub fn new(records: Arc<R>, listings: Arc<F>) -> std::io::Result<Self> {
		let runtime = tokio::runtime::Builder::new_current_thread()
			.enable_all()
			.build()?;
		Ok(Self {
			records,
			listings,
			runtime,
			dashboard: DashboardState::new(),
			search: SearchState::new(),
		})
	}

	#[must_use]
	pub fn records(&self) -> &R {
		&self.records
	}

	#[must_use]
	pub fn listings(&self) -> &F {
		&self.listings
	}

	/// Load the application list as the Dashboard does on mount.
	pub fn mount_dashboard(&mut self) {
		let command = self.dashboard.begin_load();
		self.run(command);
	}

	/// Submit the current form. Returns `false` when validation blocked the
	/// request.
	pub fn submit_application(&mut self) -> bool {
		match self.dashboard.submit_form() {
			Some(command) => {
				self.run(command);
				true
			}
			None => false,
		}
	}

	/// Change the status of a loaded record. Returns `false` when nothing was
	/// sent (unknown id or unchanged status).
	pub fn change_status(&mut self, id: &JobId, status: ApplicationStatus) -> bool {
		match self.dashboard.begin_status_update(id, status) {
			Some(command) => {
				self.run(command);
				true
			}
			None => false,
		}
	}

	/// Delete a loaded record once `confirm` approves it.
	///
	/// `confirm` receives the record and is only called for known ids.
	/// Returns `false` when nothing was sent.
	pub fn delete_application(
		&mut self,
		id: &JobId,
		confirm: impl FnOnce(&crate::records::JobApplication) -> bool,
	) -> bool {
		if !self.dashboard.request_delete(id) {
			return false;
		}
		let approved = self.dashboard.pending_delete().is_some_and(confirm);
		if !approved {
			debug!(%id, "delete declined");
			self.dashboard.cancel_delete();
			return false;
		}
		match self.dashboard.confirm_delete() {
			Some(command) => {
				self.run(command);
				true
			}
			None => false,
		}
	}

	/// Search with the current fields. Returns `false` if the search was
	/// ignored.
	pub fn search(&mut self) -> bool {
		match self.search.begin_search() {
			Some(command) => {
				self.run(command);
				true
			}
			None => false,
		}
	}

	/// Run the automatic first search if none has been issued yet.
	pub fn mount_search(&mut self) -> bool {
		self.search.needs_initial_search() && self.search()
	}

	/// # Errors
	///
	/// Returns the [`ApiError`] when the record API is unreachable or unhealthy.
	pub fn check_health(&mut self) -> Result<(), ApiError> {
		match self.execute(Command::CheckHealth) {
			Outcome::HealthChecked(result) => result,
			other => Err(ApiError::Parse(format!("unexpected outcome {other:?}"))),
		}
	}

	fn run(&mut self, command: Command) {
		let outcome = self.execute(command);
		outcome.apply(&mut self.dashboard, &mut self.search);
	}

	fn execute(&self, command: Command) -> Outcome {
		self.runtime.block_on(execute(
			self.records.as_ref(),
			self.listings.as_ref(),
			command,
		))
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::dashboard::{AlertKind, LoadPhase, MISSING_FIELDS_MESSAGE};
	use crate::records::JobApplication;
	use crate::search::SearchMessage;
	use crate::testing::{FakeListings, FakeRecords, Rejection, listing};

	fn session(records: FakeRecords, listings: FakeListings) -> Session<FakeRecords, FakeListings> {
		Session::new(Arc::new(records), Arc::new(listings)).unwrap()
	}

	fn record(id: &str, company: &str, status: ApplicationStatus) -> JobApplication {
		JobApplication {
			id: JobId::new(id),
			company: company.into(),
			position: "Engineer".into(),
			status,
		}
	}

	#[test]
	fn add_reject_delete_scenario() {
		let mut session = session(FakeRecords::new(), FakeListings::new());
		session.mount_dashboard();
		assert_eq!(session.dashboard.phase(), LoadPhase::Loaded);
		assert!(session.dashboard.applications().is_empty());

		session.dashboard.form.company = "Acme".into();
		session.dashboard.form.position = "Engineer".into();
		session.dashboard.form.status = ApplicationStatus::Applied;
		assert!(session.submit_application());
		assert_eq!(session.dashboard.applications().len(), 1);
		assert_eq!(session.dashboard.stats().success_rate, 100);

		let id = session.dashboard.applications()[0].id.clone();
		assert!(session.change_status(&id, ApplicationStatus::Rejected));
		let stats = session.dashboard.stats();
		assert_eq!(stats.success_rate, 0);
		assert_eq!(stats.rejected, 1);

		assert!(session.delete_application(&id, |_| true));
		assert!(session.dashboard.applications().is_empty());
		assert!(session.records().snapshot().is_empty());
	}

	#[test]
	fn empty_fields_send_nothing() {
		let mut session = session(FakeRecords::new(), FakeListings::new());
		session.dashboard.form.company = "Acme".into();
		session.dashboard.form.position = "   ".into();

		assert!(!session.submit_application());
		assert_eq!(session.records().calls(), 0);
		let alert = session.dashboard.alert().unwrap();
		assert_eq!(alert.kind, AlertKind::Validation);
		assert_eq!(alert.message, MISSING_FIELDS_MESSAGE);
	}

	#[test]
	fn declined_delete_sends_nothing() {
		let seeded = vec![
			record("1", "Acme", ApplicationStatus::Applied),
			record("2", "Globex", ApplicationStatus::Offer),
		];
		let mut session = session(FakeRecords::with_records(seeded.clone()), FakeListings::new());
		session.mount_dashboard();
		let calls = session.records().calls();

		assert!(!session.delete_application(&JobId::new("1"), |_| false));
		assert_eq!(session.records().calls(), calls);
		assert_eq!(session.dashboard.applications(), seeded.as_slice());
		assert!(session.dashboard.pending_delete().is_none());
	}

	#[test]
	fn confirm_sees_the_record() {
		let seeded = vec![record("7", "Initech", ApplicationStatus::Interviewing)];
		let mut session = session(FakeRecords::with_records(seeded), FakeListings::new());
		session.mount_dashboard();

		let mut seen = None;
		session.delete_application(&JobId::new("7"), |record| {
			seen = Some(record.company.clone());
			false
		});
		assert_eq!(seen.as_deref(), Some("Initech"));
	}

	#[test]
	fn failed_load_alerts_and_leaves_list_empty() {
		let records = FakeRecords::with_records(vec![record("1", "Acme", ApplicationStatus::Applied)]);
		records.fail_with(Some(Rejection::new(500, "boom")));
		let mut session = session(records, FakeListings::new());
		session.mount_dashboard();

		assert_eq!(session.dashboard.phase(), LoadPhase::Failed);
		assert!(session.dashboard.applications().is_empty());
		assert_eq!(session.dashboard.alert().unwrap().kind, AlertKind::Rejected);
		assert!(!session.dashboard.is_busy());
	}

	#[test]
	fn failed_update_keeps_stored_status() {
		let seeded = vec![record("1", "Acme", ApplicationStatus::Applied)];
		let mut session = session(FakeRecords::with_records(seeded), FakeListings::new());
		session.mount_dashboard();
		session.records().fail_with(Some(Rejection::new(404, "Job not found")));

		assert!(session.change_status(&JobId::new("1"), ApplicationStatus::Offer));
		assert_eq!(
			session.dashboard.applications()[0].status,
			ApplicationStatus::Applied
		);
		assert!(session.dashboard.alert().is_some());
	}

	#[test]
	fn search_server_error_clears_results() {
		let listings = FakeListings::with_results(vec![listing("Engineer", "Acme", "Remote")]);
		let mut session = session(FakeRecords::new(), listings);
		assert!(session.mount_search());
		assert_eq!(session.search.results().len(), 1);
		assert!(!session.mount_search());

		session
			.listings()
			.fail_with(Some(Rejection::new(500, "Error fetching jobs")));
		assert!(session.search());
		assert!(session.search.results().is_empty());
		let message = session.search.message().unwrap();
		assert!(matches!(message, SearchMessage::RequestFailed(_)));
		assert_ne!(message, SearchMessage::NoResults);
	}

	#[test]
	fn search_omits_empty_location() {
		let mut session = session(FakeRecords::new(), FakeListings::new());
		session.search.keyword = "Developer".into();
		session.search();

		let queries = session.listings().queries();
		assert_eq!(queries.len(), 1);
		assert_eq!(queries[0].to_query_string(), "?keyword=Developer");
	}

	#[test]
	fn health_reports_status() {
		let mut session = session(FakeRecords::new(), FakeListings::new());
		assert!(session.check_health().is_ok());
		session.records().fail_with(Some(Rejection::new(503, "starting")));
		assert_eq!(session.check_health().unwrap_err().status(), Some(503));
	}
}
