use jobtrack_core::search::NO_RESULTS_MESSAGE;

/// Human-readable labels rendered within a single pane.
#[derive(Debug, Clone)]
pub struct PaneLabels {
	/// Inline hint displayed at the bottom of the pane.
	pub hint: String,
	/// Title rendered above the table.
	pub table_title: String,
	/// Column headers, left to right.
	pub columns: Vec<String>,
	/// Text shown in place of an empty table.
	pub empty_message: String,
}

impl PaneLabels {
	#[must_use]
	pub fn new(
		hint: impl Into<String>,
		table_title: impl Into<String>,
		columns: &[&str],
		empty_message: impl Into<String>,
	) -> Self {
		Self {
			hint: hint.into(),
			table_title: table_title.into(),
			columns: columns.iter().map(|column| (*column).to_string()).collect(),
			empty_message: empty_message.into(),
		}
	}
}

/// Label on the tab selector plus the text of its pane.
#[derive(Debug, Clone)]
pub struct TabLabels {
	pub tab_label: String,
	pub pane: PaneLabels,
}

impl TabLabels {
	#[must_use]
	pub fn new(tab_label: impl Into<String>, pane: PaneLabels) -> Self {
		Self {
			tab_label: tab_label.into(),
			pane,
		}
	}
}

/// Titles of the three summary cards on the dashboard.
#[derive(Debug, Clone)]
pub struct StatsLabels {
	pub total: String,
	pub rejected: String,
	pub success_rate: String,
}

impl Default for StatsLabels {
	fn default() -> Self {
		Self {
			total: "Total Applications".to_string(),
			rejected: "Rejections".to_string(),
			success_rate: "Success Rate".to_string(),
		}
	}
}

/// Input titles and button captions.
#[derive(Debug, Clone)]
pub struct FieldLabels {
	pub company: String,
	pub position: String,
	pub status: String,
	pub add: String,
	pub keyword: String,
	pub location: String,
	pub search: String,
	pub searching: String,
}

impl Default for FieldLabels {
	fn default() -> Self {
		Self {
			company: "Company".to_string(),
			position: "Position".to_string(),
			status: "Status".to_string(),
			add: "Add".to_string(),
			keyword: "Keyword".to_string(),
			location: "Location".to_string(),
			search: "Search".to_string(),
			searching: "Searching".to_string(),
		}
	}
}

/// Textual configuration used when rendering panes, tabs and popups.
#[derive(Debug, Clone)]
pub struct UiLabels {
	pub dashboard: TabLabels,
	pub search: TabLabels,
	pub stats: StatsLabels,
	pub fields: FieldLabels,
	/// Placeholder shown in empty inputs.
	pub required_placeholder: String,
	pub confirm_delete_title: String,
	pub alert_title: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		let dashboard = PaneLabels::new(
			"Enter add · ↑/↓ select · ←/→ status · d delete · r reload · Tab focus · Esc quit",
			"Applications",
			&["Company", "Position", "Status"],
			"No jobs yet. Add one above.",
		);
		let search = PaneLabels::new(
			"Enter search · ↑/↓ select · a add to tracker · Tab focus · Esc quit",
			"Results",
			&["Title", "Company", "Location", "Type"],
			NO_RESULTS_MESSAGE,
		);
		Self {
			dashboard: TabLabels::new("Dashboard", dashboard),
			search: TabLabels::new("Job Search", search),
			stats: StatsLabels::default(),
			fields: FieldLabels::default(),
			required_placeholder: "required".to_string(),
			confirm_delete_title: "Delete application".to_string(),
			alert_title: "Error".to_string(),
		}
	}
}

impl UiLabels {
	/// Tab titles in selector order.
	#[must_use]
	pub fn tab_titles(&self) -> [&str; 2] {
		[
			self.dashboard.tab_label.as_str(),
			self.search.tab_label.as_str(),
		]
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn defaults_match_table_shapes() {
		let labels = UiLabels::default();
		assert_eq!(labels.tab_titles(), ["Dashboard", "Job Search"]);
		assert_eq!(labels.dashboard.pane.columns.len(), 3);
		assert_eq!(labels.search.pane.columns.len(), 4);
		assert_eq!(
			labels.dashboard.pane.empty_message,
			"No jobs yet. Add one above."
		);
	}
}
