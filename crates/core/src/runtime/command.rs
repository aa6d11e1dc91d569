//! Remote operations issued by the views and the results routed back to them.

use crate::api::ApiError;
use crate::dashboard::DashboardState;
use crate::listings::{ListingPage, SearchQuery};
use crate::records::{ApplicationDraft, JobApplication, JobId};
use crate::search::SearchState;

/// A single request against one of the collaborators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
	LoadApplications,
	CreateApplication(ApplicationDraft),
	UpdateApplication { id: JobId, draft: ApplicationDraft },
	DeleteApplication(JobId),
	SearchListings(SearchQuery),
	CheckHealth,
}

impl Command {
	/// Short label used in logs.
	#[must_use]
	pub const fn kind(&self) -> &'static str {
		match self {
			Self::LoadApplications => "load",
			Self::CreateApplication(_) => "create",
			Self::UpdateApplication { .. } => "update",
			Self::DeleteApplication(_) => "delete",
			Self::SearchListings(_) => "search",
			Self::CheckHealth => "health",
		}
	}
	/// The outcome of this command failing before it reached either
	/// collaborator, so the issuing view can leave its loading state.
	#[must_use]
	pub fn into_failure(self, err: ApiError) -> Outcome {
		match self {
			Self::LoadApplications => Outcome::ApplicationsLoaded(Err(err)),
			Self::CreateApplication(_) => Outcome::ApplicationCreated(Err(err)),
			Self::UpdateApplication { id, .. } => Outcome::ApplicationUpdated {
				id,
				result: Err(err),
			},
			Self::DeleteApplication(id) => Outcome::ApplicationDeleted {
				id,
				result: Err(err),
			},
			Self::SearchListings(_) => Outcome::ListingsFetched(Err(err)),
			Self::CheckHealth => Outcome::HealthChecked(Err(err)),
		}
	}
}

/// Result of executing a [`Command`].
#[derive(Debug)]
pub enum Outcome {
	ApplicationsLoaded(Result<Vec<JobApplication>, ApiError>),
	ApplicationCreated(Result<JobApplication, ApiError>),
	ApplicationUpdated {
		id: JobId,
		result: Result<JobApplication, ApiError>,
	},
	ApplicationDeleted {
		id: JobId,
		result: Result<(), ApiError>,
	},
	ListingsFetched(Result<ListingPage, ApiError>),
	HealthChecked(Result<(), ApiError>),
}

impl Outcome {
	#[must_use]
	pub fn is_success(&self) -> bool {
		match self {
			Self::ApplicationsLoaded(result) => result.is_ok(),
			Self::ApplicationCreated(result) => result.is_ok(),
			Self::ApplicationUpdated { result, .. } => result.is_ok(),
			Self::ApplicationDeleted { result, .. } => result.is_ok(),
			Self::ListingsFetched(result) => result.is_ok(),
			Self::HealthChecked(result) => result.is_ok(),
		}
	}

	#[must_use]
	pub fn error(&self) -> Option<&ApiError> {
		match self {
			Self::ApplicationsLoaded(result) => result.as_ref().err(),
			Self::ApplicationCreated(result) => result.as_ref().err(),
			Self::ApplicationUpdated { result, .. } => result.as_ref().err(),
			Self::ApplicationDeleted { result, .. } => result.as_ref().err(),
			Self::ListingsFetched(result) => result.as_ref().err(),
			Self::HealthChecked(result) => result.as_ref().err(),
		}
	}

	/// Route the outcome to the transition of the view that issued it.
	///
	/// Health checks belong to neither view and are ignored here.
	pub fn apply(self, dashboard: &mut DashboardState, search: &mut SearchState) {
		match self {
			Self::ApplicationsLoaded(Ok(applications)) => dashboard.load_succeeded(applications),
			Self::ApplicationsLoaded(Err(err)) => dashboard.load_failed(&err),
			Self::ApplicationCreated(Ok(application)) => dashboard.create_succeeded(application),
			Self::ApplicationCreated(Err(err)) => dashboard.create_failed(&err),
			Self::ApplicationUpdated {
				id,
				result: Ok(application),
			} => dashboard.update_succeeded(&id, application),
			Self::ApplicationUpdated { result: Err(err), .. } => dashboard.update_failed(&err),
			Self::ApplicationDeleted { id, result: Ok(()) } => dashboard.delete_succeeded(&id),
			Self::ApplicationDeleted { result: Err(err), .. } => dashboard.delete_failed(&err),
			Self::ListingsFetched(Ok(page)) => search.search_succeeded(page),
			Self::ListingsFetched(Err(err)) => search.search_failed(&err),
			Self::HealthChecked(_) => {}
		}
	}
}
