//! Job application records owned by the remote record API, plus the figures
//! derived from them for the dashboard.

mod model;
mod stats;

pub use model::{ApplicationDraft, ApplicationStatus, JobApplication, JobId, UnknownStatus};
pub use stats::{ApplicationStats, success_rate};
