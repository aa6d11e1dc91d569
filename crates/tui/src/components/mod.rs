//! UI building blocks shared across the panes.

pub mod popup;
pub mod stats;
pub mod tables;
pub mod tabs;

pub use popup::{Popup, render_popup};
pub use stats::render_stats;
pub use tables::{TableSpec, render_table};
pub use tabs::{TabBar, render_tab_bar};
