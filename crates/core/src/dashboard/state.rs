//! View state for the dashboard: the cached application list, the add-job
//! form, delete confirmation and the current alert.
//!
//! Every change goes through a transition method so the idle, loading,
//! success and error states can be exercised without a terminal.

use tracing::debug;

use super::alert::Alert;
use crate::api::ApiError;
use crate::listings::ListingResult;
use crate::records::{
	ApplicationDraft, ApplicationStats, ApplicationStatus, JobApplication, JobId,
};
use crate::runtime::Command;

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load job applications";
pub const CREATE_FAILED_MESSAGE: &str = "Failed to add the job";
pub const UPDATE_FAILED_MESSAGE: &str = "Failed to update status";
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete the job";

/// Progress of the initial list read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
	#[default]
	Idle,
	Loading,
	Loaded,
	Failed,
}

/// Contents of the add-job form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApplicationForm {
	pub company: String,
	pub position: String,
	pub status: ApplicationStatus,
}

impl ApplicationForm {
	/// Validate the form into a request body.
	///
	/// Whitespace-only text counts as empty.
	pub fn to_draft(&self) -> Option<ApplicationDraft> {
		let company = self.company.trim();
		let position = self.position.trim();
		if company.is_empty() || position.is_empty() {
			return None;
		}
		Some(ApplicationDraft {
			company: company.to_string(),
			position: position.to_string(),
			status: self.status,
		})
	}

	fn reset(&mut self) {
		*self = Self::default();
	}
}

#[derive(Debug, Default)]
pub struct DashboardState {
	applications: Vec<JobApplication>,
	/// Add-job form fields.
	pub form: ApplicationForm,
	phase: LoadPhase,
	pending_delete: Option<JobId>,
	in_flight: usize,
	alert: Option<Alert>,
}

impl DashboardState {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn applications(&self) -> &[JobApplication] {
		&self.applications
	}

	#[must_use]
	pub fn application(&self, id: &JobId) -> Option<&JobApplication> {
		self.applications.iter().find(|record| &record.id == id)
	}

	#[must_use]
	pub fn phase(&self) -> LoadPhase {
		self.phase
	}

	#[must_use]
	pub fn stats(&self) -> ApplicationStats {
		ApplicationStats::from_applications(&self.applications)
	}

	#[must_use]
	pub fn alert(&self) -> Option<&Alert> {
		self.alert.as_ref()
	}

	pub fn dismiss_alert(&mut self) -> Option<Alert> {
		self.alert.take()
	}

	/// Record awaiting delete confirmation.
	#[must_use]
	pub fn pending_delete(&self) -> Option<&JobApplication> {
		self.pending_delete
			.as_ref()
			.and_then(|id| self.application(id))
	}

	/// Whether any dashboard request has been issued and not yet answered.
	#[must_use]
	pub fn is_busy(&self) -> bool {
		self.in_flight > 0
	}

	// ── Load ───────────────────────────────────────────────────────────

	/// Start the full list read issued on mount.
	pub fn begin_load(&mut self) -> Command {
		self.phase = LoadPhase::Loading;
		self.in_flight += 1;
		Command::LoadApplications
	}

	pub fn load_succeeded(&mut self, applications: Vec<JobApplication>) {
		self.finish_request();
		debug!(count = applications.len(), "applications loaded");
		self.applications = applications;
		self.phase = LoadPhase::Loaded;
	}

	pub fn load_failed(&mut self, err: &ApiError) {
		self.finish_request();
		self.applications.clear();
		self.phase = LoadPhase::Failed;
		self.alert = Some(Alert::request_failed(LOAD_FAILED_MESSAGE, err));
	}

	// ── Create ─────────────────────────────────────────────────────────

	/// Validate the form and build the create request.
	///
	/// Returns `None` and raises a validation alert when company or position
	/// is empty; nothing should be sent in that case.
	pub fn submit_form(&mut self) -> Option<Command> {
		let Some(draft) = self.form.to_draft() else {
			self.alert = Some(Alert::validation(MISSING_FIELDS_MESSAGE));
			return None;
		};
		self.in_flight += 1;
		Some(Command::CreateApplication(draft))
	}

	/// Append the stored record and reset the form to its defaults.
	pub fn create_succeeded(&mut self, application: JobApplication) {
		self.finish_request();
		self.applications.push(application);
		self.form.reset();
	}

	/// Keep the form populated so the user can retry.
	pub fn create_failed(&mut self, err: &ApiError) {
		self.finish_request();
		self.alert = Some(Alert::request_failed(CREATE_FAILED_MESSAGE, err));
	}

	/// Pre-fill the form from a search result. Nothing is sent until the
	/// form is submitted.
	pub fn prefill_from_listing(&mut self, listing: &ListingResult) {
		self.form = ApplicationForm {
			company: listing.company_name.trim().to_string(),
			position: listing.title.trim().to_string(),
			status: ApplicationStatus::Applied,
		};
	}

	// ── Update ─────────────────────────────────────────────────────────

	/// Build the update request for a status change on an existing row.
	///
	/// The full record is sent with only the status replaced. Returns `None`
	/// for unknown ids or when the status is unchanged. No optimistic change
	/// is applied.
	pub fn begin_status_update(
		&mut self,
		id: &JobId,
		status: ApplicationStatus,
	) -> Option<Command> {
		let record = self.application(id)?;
		if record.status == status {
			return None;
		}
		let draft = record.with_status(status);
		self.in_flight += 1;
		Some(Command::UpdateApplication {
			id: id.clone(),
			draft,
		})
	}

	/// Replace the record whose id matches `id`; all others are untouched.
	pub fn update_succeeded(&mut self, id: &JobId, updated: JobApplication) {
		self.finish_request();
		if let Some(slot) = self
			.applications
			.iter_mut()
			.find(|record| &record.id == id)
		{
			*slot = updated;
		}
	}

	pub fn update_failed(&mut self, err: &ApiError) {
		self.finish_request();
		self.alert = Some(Alert::request_failed(UPDATE_FAILED_MESSAGE, err));
	}

	// ── Delete ─────────────────────────────────────────────────────────

	/// Ask for confirmation before deleting `id`. Returns `false` for unknown
	/// ids.
	pub fn request_delete(&mut self, id: &JobId) -> bool {
		if self.application(id).is_none() {
			return false;
		}
		self.pending_delete = Some(id.clone());
		true
	}

	/// Confirm the pending delete and build the request.
	pub fn confirm_delete(&mut self) -> Option<Command> {
		let id = self.pending_delete.take()?;
		self.in_flight += 1;
		Some(Command::DeleteApplication(id))
	}

	/// Decline the pending delete. Nothing is sent.
	pub fn cancel_delete(&mut self) {
		self.pending_delete = None;
	}

	/// Remove exactly the record matching `id`.
	pub fn delete_succeeded(&mut self, id: &JobId) {
		self.finish_request();
		self.applications.retain(|record| &record.id != id);
	}

	pub fn delete_failed(&mut self, err: &ApiError) {
		self.finish_request();
		self.alert = Some(Alert::request_failed(DELETE_FAILED_MESSAGE, err));
	}

	fn finish_request(&mut self) {
		self.in_flight = self.in_flight.saturating_sub(1);
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::dashboard::AlertKind;

	fn application(id: &str, company: &str, status: ApplicationStatus) -> JobApplication {
		JobApplication {
			id: JobId::new(id),
			company: company.into(),
			position: "Engineer".into(),
			status,
		}
	}

	fn loaded(records: Vec<JobApplication>) -> DashboardState {
		let mut state = DashboardState::new();
		state.begin_load();
		state.load_succeeded(records);
		state
	}

	fn server_error() -> ApiError {
		ApiError::Api {
			status: 500,
			message: "boom".into(),
		}
	}

	#[test]
	fn load_replaces_list() {
		let state = loaded(vec![application("1", "Acme", ApplicationStatus::Applied)]);
		assert_eq!(state.phase(), LoadPhase::Loaded);
		assert_eq!(state.applications().len(), 1);
		assert!(!state.is_busy());
	}

	#[test]
	fn load_failure_alerts_and_leaves_list_empty() {
		let mut state = DashboardState::new();
		state.begin_load();
		state.load_failed(&server_error());
		assert_eq!(state.phase(), LoadPhase::Failed);
		assert!(state.applications().is_empty());
		let alert = state.alert().unwrap();
		assert_eq!(alert.message, LOAD_FAILED_MESSAGE);
		assert_eq!(alert.kind, AlertKind::Rejected);
	}

	#[test]
	fn empty_fields_block_submission() {
		let mut state = DashboardState::new();
		state.form.company = "Acme".into();
		state.form.position = "   ".into();
		assert_eq!(state.submit_form(), None);
		assert_eq!(state.alert().unwrap().kind, AlertKind::Validation);
		assert!(!state.is_busy());
	}

	#[test]
	fn create_appends_and_resets_form() {
		let mut state = loaded(Vec::new());
		state.form = ApplicationForm {
			company: " Acme ".into(),
			position: "Engineer".into(),
			status: ApplicationStatus::Interviewing,
		};
		let command = state.submit_form().unwrap();
		assert_eq!(
			command,
			Command::CreateApplication(ApplicationDraft {
				company: "Acme".into(),
				position: "Engineer".into(),
				status: ApplicationStatus::Interviewing,
			})
		);

		state.create_succeeded(application("9", "Acme", ApplicationStatus::Interviewing));
		assert_eq!(state.applications().len(), 1);
		assert_eq!(state.applications()[0].id, JobId::new("9"));
		assert_eq!(state.form, ApplicationForm::default());
	}

	#[test]
	fn create_failure_keeps_form() {
		let mut state = loaded(Vec::new());
		state.form.company = "Acme".into();
		state.form.position = "Engineer".into();
		state.submit_form().unwrap();
		state.create_failed(&server_error());
		assert_eq!(state.form.company, "Acme");
		assert!(state.applications().is_empty());
		assert_eq!(state.alert().unwrap().message, CREATE_FAILED_MESSAGE);
	}

	#[test]
	fn status_update_sends_full_record() {
		let mut state = loaded(vec![application("1", "Acme", ApplicationStatus::Applied)]);
		let command = state
			.begin_status_update(&JobId::new("1"), ApplicationStatus::Offer)
			.unwrap();
		assert_eq!(
			command,
			Command::UpdateApplication {
				id: JobId::new("1"),
				draft: ApplicationDraft {
					company: "Acme".into(),
					position: "Engineer".into(),
					status: ApplicationStatus::Offer,
				},
			}
		);
		// No optimistic update.
		assert_eq!(state.applications()[0].status, ApplicationStatus::Applied);
	}

	#[test]
	fn unchanged_or_unknown_status_update_is_skipped() {
		let mut state = loaded(vec![application("1", "Acme", ApplicationStatus::Applied)]);
		assert_eq!(
			state.begin_status_update(&JobId::new("1"), ApplicationStatus::Applied),
			None
		);
		assert_eq!(
			state.begin_status_update(&JobId::new("2"), ApplicationStatus::Offer),
			None
		);
	}

	#[test]
	fn update_replaces_only_matching_record() {
		let mut state = loaded(vec![
			application("1", "Acme", ApplicationStatus::Applied),
			application("2", "Globex", ApplicationStatus::Applied),
			application("3", "Initech", ApplicationStatus::Offer),
		]);
		let before = state.applications().to_vec();
		state.begin_status_update(&JobId::new("2"), ApplicationStatus::Rejected);
		state.update_succeeded(
			&JobId::new("2"),
			application("2", "Globex", ApplicationStatus::Rejected),
		);

		assert_eq!(state.applications()[0], before[0]);
		assert_eq!(state.applications()[2], before[2]);
		assert_eq!(state.applications()[1].status, ApplicationStatus::Rejected);
	}

	#[test]
	fn update_failure_keeps_stale_value() {
		let mut state = loaded(vec![application("1", "Acme", ApplicationStatus::Applied)]);
		state.begin_status_update(&JobId::new("1"), ApplicationStatus::Offer);
		state.update_failed(&server_error());
		assert_eq!(state.applications()[0].status, ApplicationStatus::Applied);
		assert_eq!(state.alert().unwrap().message, UPDATE_FAILED_MESSAGE);
	}

	#[test]
	fn declined_delete_sends_nothing() {
		let mut state = loaded(vec![application("1", "Acme", ApplicationStatus::Applied)]);
		assert!(state.request_delete(&JobId::new("1")));
		assert_eq!(state.pending_delete().unwrap().company, "Acme");
		state.cancel_delete();
		assert_eq!(state.confirm_delete(), None);
		assert_eq!(state.applications().len(), 1);
	}

	#[test]
	fn confirmed_delete_removes_only_matching_record() {
		let mut state = loaded(vec![
			application("1", "Acme", ApplicationStatus::Applied),
			application("2", "Globex", ApplicationStatus::Applied),
		]);
		state.request_delete(&JobId::new("1"));
		assert_eq!(
			state.confirm_delete(),
			Some(Command::DeleteApplication(JobId::new("1")))
		);
		state.delete_succeeded(&JobId::new("1"));
		assert_eq!(state.applications().len(), 1);
		assert_eq!(state.applications()[0].id, JobId::new("2"));
	}

	#[test]
	fn delete_failure_keeps_record() {
		let mut state = loaded(vec![application("1", "Acme", ApplicationStatus::Applied)]);
		state.request_delete(&JobId::new("1"));
		state.confirm_delete();
		state.delete_failed(&server_error());
		assert_eq!(state.applications().len(), 1);
		assert_eq!(state.alert().unwrap().message, DELETE_FAILED_MESSAGE);
	}

	#[test]
	fn unknown_delete_target_is_ignored() {
		let mut state = loaded(Vec::new());
		assert!(!state.request_delete(&JobId::new("404")));
		assert_eq!(state.confirm_delete(), None);
	}

	#[test]
	fn prefill_copies_listing_fields() {
		let mut state = DashboardState::new();
		state.form.status = ApplicationStatus::Offer;
		let listing = ListingResult {
			title: "Rust Developer".into(),
			company_name: "Ferrous".into(),
			..ListingResult::default()
		};
		state.prefill_from_listing(&listing);
		assert_eq!(state.form.company, "Ferrous");
		assert_eq!(state.form.position, "Rust Developer");
		assert_eq!(state.form.status, ApplicationStatus::Applied);
		assert!(!state.is_busy());
	}
}
