//! Core of the `jobtrack` application tracker.
//!
//! The data model, the view-state records for the Dashboard and Search
//! screens, the HTTP collaborators they talk to and the runtime that carries
//! requests between them. Nothing here touches the terminal.

pub mod api;
pub mod app_dirs;
pub mod dashboard;
pub mod listings;
pub mod logging;
pub mod records;
pub mod runtime;
pub mod search;
#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use crate::api::{
	ApiError, ClientOptions, DEFAULT_BASE_URL, HttpListingFeed, HttpRecordApi, ListingFeed,
	RecordApi,
};
pub use crate::dashboard::{Alert, AlertKind, DashboardState};
pub use crate::listings::{ListingPage, ListingResult, SearchQuery};
pub use crate::records::{
	ApplicationDraft, ApplicationStats, ApplicationStatus, JobApplication, JobId,
};
pub use crate::runtime::{Command, Completion, Outcome, RequestWorker, Session};
pub use crate::search::{SearchMessage, SearchState};
