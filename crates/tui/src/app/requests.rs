use jobtrack_core::api::ApiError;
use jobtrack_core::runtime::{Command, Completion};
use tracing::{debug, error};

use super::App;

impl App<'_> {
	/// Hand a command to the worker. A command the worker refuses is applied
	/// as a failed request so the view leaves its loading state.
	pub(crate) fn submit(&mut self, command: Command) {
		let kind = command.kind();
		match self.worker.submit(command) {
			Ok(id) => debug!(id, kind, "request queued"),
			Err(err) => {
				error!(kind, %err, "request dropped");
				let reason = err.to_string();
				err.command
					.into_failure(ApiError::NotSent(reason))
					.apply(&mut self.dashboard, &mut self.search);
				self.sync_form_inputs();
				self.ensure_selection();
			}
		}
	}

	/// Start a search with the current fields unless one is already running
	/// and the guard is on.
	pub(crate) fn run_search(&mut self) {
		if let Some(command) = self.search.begin_search() {
			self.submit(command);
		}
	}

	/// Apply every completion that has arrived. Returns how many were applied.
	pub(crate) fn pump_completions(&mut self) -> usize {
		let mut applied = 0;
		while let Some(completion) = self.worker.try_recv() {
			self.apply_completion(completion);
			applied += 1;
		}
		applied
	}

	pub(crate) fn apply_completion(&mut self, completion: Completion) {
		debug!(id = completion.id, success = completion.outcome.is_success(), "request finished");
		completion
			.outcome
			.apply(&mut self.dashboard, &mut self.search);
		self.sync_form_inputs();
		self.ensure_selection();
	}
}
