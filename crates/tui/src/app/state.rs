//! Core state container for the terminal front-end.
//!
//! [`App`] bundles both view-state records from `jobtrack-core` with the
//! widgets that edit them, the table selections and the request worker.

use std::fmt;
use std::str::FromStr;

use jobtrack_core::dashboard::DashboardState;
use jobtrack_core::listings::ListingResult;
use jobtrack_core::records::JobApplication;
use jobtrack_core::runtime::RequestWorker;
use jobtrack_core::search::SearchState;
use ratatui::widgets::TableState;
use throbber_widgets_tui::ThrobberState;

use crate::components::tables::clamp_selection;
use crate::config::UiLabels;
use crate::input::FieldInput;
use crate::style::{StyleConfig, Theme};

/// The two top-level screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
	#[default]
	Dashboard,
	Search,
}

impl Tab {
	pub const ALL: [Self; 2] = [Self::Dashboard, Self::Search];

	#[must_use]
	pub const fn index(self) -> usize {
		match self {
			Self::Dashboard => 0,
			Self::Search => 1,
		}
	}

	#[must_use]
	pub const fn toggle(self) -> Self {
		match self {
			Self::Dashboard => Self::Search,
			Self::Search => Self::Dashboard,
		}
	}

	#[must_use]
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Dashboard => "dashboard",
			Self::Search => "search",
		}
	}
}

impl fmt::Display for Tab {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tab `{0}` (expected dashboard or search)")]
pub struct UnknownTab(pub String);

impl FromStr for Tab {
	type Err = UnknownTab;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.trim().to_ascii_lowercase().as_str() {
			"dashboard" | "jobs" => Ok(Self::Dashboard),
			"search" | "job-search" => Ok(Self::Search),
			_ => Err(UnknownTab(value.to_string())),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DashboardFocus {
	Company,
	Position,
	Status,
	Table,
}

impl DashboardFocus {
	const ORDER: [Self; 4] = [Self::Company, Self::Position, Self::Status, Self::Table];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SearchFocus {
	Keyword,
	Location,
	Results,
}

impl SearchFocus {
	const ORDER: [Self; 3] = [Self::Keyword, Self::Location, Self::Results];
}

fn cycle<T: Copy + PartialEq>(order: &[T], current: T, forward: bool) -> T {
	let len = order.len();
	let position = order.iter().position(|item| *item == current).unwrap_or(0);
	let next = if forward {
		(position + 1) % len
	} else {
		(position + len - 1) % len
	};
	order[next]
}

/// Start-up choices for the terminal UI.
#[derive(Debug, Clone)]
pub struct AppOptions {
	pub start_tab: Tab,
	pub initial_keyword: String,
	pub initial_location: String,
	/// Search once automatically the first time the Search tab is shown.
	pub auto_search: bool,
	/// Ignore search triggers while a search is in flight.
	pub guard_search: bool,
	pub theme: Theme,
	pub labels: UiLabels,
}

impl Default for AppOptions {
	fn default() -> Self {
		Self {
			start_tab: Tab::Dashboard,
			initial_keyword: String::new(),
			initial_location: String::new(),
			auto_search: true,
			guard_search: true,
			theme: Theme::default(),
			labels: UiLabels::default(),
		}
	}
}

/// Aggregate state shared across the terminal UI.
pub struct App<'a> {
	pub dashboard: DashboardState,
	pub search: SearchState,
	pub style: StyleConfig,
	pub(crate) ui: UiLabels,
	pub(crate) tab: Tab,
	pub(crate) dashboard_focus: DashboardFocus,
	pub(crate) search_focus: SearchFocus,
	pub(crate) company_input: FieldInput<'a>,
	pub(crate) position_input: FieldInput<'a>,
	pub(crate) keyword_input: FieldInput<'a>,
	pub(crate) location_input: FieldInput<'a>,
	pub(crate) applications_table: TableState,
	pub(crate) results_table: TableState,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) worker: RequestWorker,
	pub(crate) auto_search: bool,
	pub(crate) should_quit: bool,
}

impl App<'_> {
	/// Build the UI around a running request worker.
	#[must_use]
	pub fn new(worker: RequestWorker, options: AppOptions) -> Self {
		let AppOptions {
			start_tab,
			initial_keyword,
			initial_location,
			auto_search,
			guard_search,
			theme,
			labels,
		} = options;

		let mut search = SearchState::new().with_in_flight_guard(guard_search);
		search.keyword = initial_keyword.clone();
		search.location = initial_location.clone();

		let placeholder = labels.required_placeholder.clone();
		Self {
			dashboard: DashboardState::new(),
			search,
			style: StyleConfig::with_theme(theme),
			tab: start_tab,
			dashboard_focus: DashboardFocus::Company,
			search_focus: SearchFocus::Keyword,
			company_input: FieldInput::default().with_placeholder(placeholder.clone()),
			position_input: FieldInput::default().with_placeholder(placeholder),
			keyword_input: FieldInput::new(initial_keyword),
			location_input: FieldInput::new(initial_location),
			applications_table: TableState::default(),
			results_table: TableState::default(),
			throbber_state: ThrobberState::default(),
			worker,
			auto_search,
			should_quit: false,
			ui: labels,
		}
	}

	#[must_use]
	pub fn tab(&self) -> Tab {
		self.tab
	}

	#[must_use]
	pub fn should_quit(&self) -> bool {
		self.should_quit
	}

	/// Requests submitted but not yet applied.
	#[must_use]
	pub fn in_flight(&self) -> usize {
		self.worker.in_flight()
	}

	/// Issue the start-up requests: the dashboard list read, plus the first
	/// search when starting on the Search tab.
	pub fn mount(&mut self) {
		let command = self.dashboard.begin_load();
		self.submit(command);
		if self.tab == Tab::Search {
			self.mount_search();
		}
	}

	/// Show `tab`, running the initial search the first time Search is shown.
	pub fn set_tab(&mut self, tab: Tab) {
		self.tab = tab;
		if tab == Tab::Search {
			self.mount_search();
		}
	}

	fn mount_search(&mut self) {
		if self.auto_search && self.search.needs_initial_search() {
			self.run_search();
		}
	}

	pub(crate) fn focus_next(&mut self, forward: bool) {
		match self.tab {
			Tab::Dashboard => {
				self.dashboard_focus = cycle(&DashboardFocus::ORDER, self.dashboard_focus, forward);
			}
			Tab::Search => {
				self.search_focus = cycle(&SearchFocus::ORDER, self.search_focus, forward);
			}
		}
		self.ensure_selection();
	}

	pub(crate) fn selected_application(&self) -> Option<&JobApplication> {
		let index = self.applications_table.selected()?;
		self.dashboard.applications().get(index)
	}

	pub(crate) fn selected_listing(&self) -> Option<&ListingResult> {
		let index = self.results_table.selected()?;
		self.search.results().get(index)
	}

	/// Keep both table selections valid for the current data.
	pub(crate) fn ensure_selection(&mut self) {
		clamp_selection(
			&mut self.applications_table,
			self.dashboard.applications().len(),
		);
		clamp_selection(&mut self.results_table, self.search.results().len());
	}

	/// Copy the form back into the inputs after the state reset or filled it.
	pub(crate) fn sync_form_inputs(&mut self) {
		if self.company_input.text() != self.dashboard.form.company {
			self.company_input.set_text(&self.dashboard.form.company);
		}
		if self.position_input.text() != self.dashboard.form.position {
			self.position_input.set_text(&self.dashboard.form.position);
		}
	}
}

impl Drop for App<'_> {
	fn drop(&mut self) {
		self.worker.shutdown();
	}
}
