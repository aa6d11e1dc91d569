use jobtrack_core::records::ApplicationStatus;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use super::App;
use super::state::{DashboardFocus, SearchFocus, Tab};
use crate::components::tables::{move_down, move_up};

impl App<'_> {
	/// Process a keyboard event.
	pub fn handle_key(&mut self, key: KeyEvent) {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		if ctrl && key.code == KeyCode::Char('c') {
			self.should_quit = true;
			return;
		}

		// Modal popups swallow everything else.
		if self.dashboard.alert().is_some() {
			if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
				self.dashboard.dismiss_alert();
			}
			return;
		}
		if self.dashboard.pending_delete().is_some() {
			self.handle_delete_confirmation(key);
			return;
		}

		match key.code {
			KeyCode::Esc => self.should_quit = true,
			KeyCode::F(1) => self.set_tab(Tab::Dashboard),
			KeyCode::F(2) => self.set_tab(Tab::Search),
			KeyCode::Char('t') if ctrl => self.set_tab(self.tab.toggle()),
			KeyCode::Tab => self.focus_next(true),
			KeyCode::BackTab => self.focus_next(false),
			_ => match self.tab {
				Tab::Dashboard => self.handle_dashboard_key(key),
				Tab::Search => self.handle_search_key(key),
			},
		}
	}

	fn handle_delete_confirmation(&mut self, key: KeyEvent) {
		match key.code {
			KeyCode::Char('y' | 'Y') => {
				if let Some(command) = self.dashboard.confirm_delete() {
					self.submit(command);
				}
			}
			KeyCode::Char('n' | 'N') | KeyCode::Esc => {
				debug!("delete declined");
				self.dashboard.cancel_delete();
			}
			_ => {}
		}
	}

	fn handle_dashboard_key(&mut self, key: KeyEvent) {
		match self.dashboard_focus {
			DashboardFocus::Company | DashboardFocus::Position if key.code == KeyCode::Enter => {
				self.submit_form();
			}
			DashboardFocus::Company => {
				if self.company_input.input(key) {
					self.dashboard.form.company = self.company_input.text().to_string();
				}
			}
			DashboardFocus::Position => {
				if self.position_input.input(key) {
					self.dashboard.form.position = self.position_input.text().to_string();
				}
			}
			DashboardFocus::Status => match key.code {
				KeyCode::Left | KeyCode::Up => {
					self.dashboard.form.status = self.dashboard.form.status.previous();
				}
				KeyCode::Right | KeyCode::Down | KeyCode::Char(' ') => {
					self.dashboard.form.status = self.dashboard.form.status.next();
				}
				KeyCode::Enter => self.submit_form(),
				_ => {}
			},
			DashboardFocus::Table => self.handle_table_key(key),
		}
	}

	fn handle_table_key(&mut self, key: KeyEvent) {
		let len = self.dashboard.applications().len();
		match key.code {
			KeyCode::Up | KeyCode::Char('k') => move_up(&mut self.applications_table),
			KeyCode::Down | KeyCode::Char('j') => move_down(&mut self.applications_table, len),
			KeyCode::Left => self.shift_selected_status(ApplicationStatus::previous),
			KeyCode::Right => self.shift_selected_status(ApplicationStatus::next),
			KeyCode::Char('d') | KeyCode::Delete => {
				if let Some(id) = self.selected_application().map(|record| record.id.clone()) {
					self.dashboard.request_delete(&id);
				}
			}
			KeyCode::Char('r') => {
				let command = self.dashboard.begin_load();
				self.submit(command);
			}
			_ => {}
		}
	}

	fn shift_selected_status(&mut self, shift: fn(ApplicationStatus) -> ApplicationStatus) {
		let Some(record) = self.selected_application() else {
			return;
		};
		let id = record.id.clone();
		let status = shift(record.status);
		if let Some(command) = self.dashboard.begin_status_update(&id, status) {
			self.submit(command);
		}
	}

	fn submit_form(&mut self) {
		if let Some(command) = self.dashboard.submit_form() {
			self.submit(command);
		}
	}

	fn handle_search_key(&mut self, key: KeyEvent) {
		match self.search_focus {
			SearchFocus::Keyword | SearchFocus::Location if key.code == KeyCode::Enter => {
				self.run_search();
			}
			SearchFocus::Keyword => {
				if self.keyword_input.input(key) {
					self.search.keyword = self.keyword_input.text().to_string();
				}
			}
			SearchFocus::Location => {
				if self.location_input.input(key) {
					self.search.location = self.location_input.text().to_string();
				}
			}
			SearchFocus::Results => {
				let len = self.search.results().len();
				match key.code {
					KeyCode::Up | KeyCode::Char('k') => move_up(&mut self.results_table),
					KeyCode::Down | KeyCode::Char('j') => move_down(&mut self.results_table, len),
					KeyCode::Enter => self.run_search(),
					KeyCode::Char('a') => self.add_selected_listing(),
					_ => {}
				}
			}
		}
	}

	/// Copy the selected result into the dashboard form and switch to it.
	/// Nothing is sent until the form is submitted.
	fn add_selected_listing(&mut self) {
		let Some(listing) = self.selected_listing().cloned() else {
			return;
		};
		self.dashboard.prefill_from_listing(&listing);
		self.sync_form_inputs();
		self.dashboard_focus = DashboardFocus::Company;
		self.set_tab(Tab::Dashboard);
	}
}
