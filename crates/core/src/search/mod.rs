//! Job-search view state.

mod state;

pub use state::{NO_RESULTS_MESSAGE, REQUEST_FAILED_MESSAGE, SearchMessage, SearchPhase, SearchState};
