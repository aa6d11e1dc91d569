//! Dashboard view state.

mod alert;
mod state;

pub use alert::{Alert, AlertKind};
pub use state::{
	ApplicationForm, CREATE_FAILED_MESSAGE, DELETE_FAILED_MESSAGE, DashboardState,
	LOAD_FAILED_MESSAGE, LoadPhase, MISSING_FIELDS_MESSAGE, UPDATE_FAILED_MESSAGE,
};
