//! Interactive terminal front-end for `jobtrack`.
//!
//! Two tabs, Dashboard and Job Search, each drawing one view-state record
//! from `jobtrack-core`. Requests run on a background worker; the event loop
//! polls for their completions between frames.

mod app;
pub mod components;
mod config;
pub mod input;
mod runtime;
pub mod style;
#[cfg(test)]
mod test_util;

pub use app::{App, AppOptions, Tab, UnknownTab};
pub use config::{FieldLabels, PaneLabels, StatsLabels, TabLabels, UiLabels};
pub use input::FieldInput;
pub use runtime::run;
pub use style::{StyleConfig, Theme, ThemeError};
