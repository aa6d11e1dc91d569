//! Application state and behavior for the interactive tracker.
//!
//! [`App`] aggregates the view states, input widgets and the request worker.
//! Supporting modules split the implementation into input handling,
//! request plumbing and rendering.

mod actions;
mod render;
mod requests;
mod state;

pub use state::{App, AppOptions, Tab, UnknownTab};
