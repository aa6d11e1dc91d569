//! Application runtime and event loop.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use jobtrack_core::api::{ListingFeed, RecordApi};
use jobtrack_core::runtime::RequestWorker;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use crate::{App, AppOptions};

/// Start the request worker, build an [`App`] and run it until the user quits.
pub fn run<R, F>(records: Arc<R>, listings: Arc<F>, options: AppOptions) -> Result<()>
where
	R: RecordApi + 'static,
	F: ListingFeed + 'static,
{
	let worker = RequestWorker::spawn(records, listings).context("failed to start request worker")?;
	let mut app = App::new(worker, options);
	app.run()
}

impl App<'_> {
	/// Pump the terminal event loop until the user exits.
	pub fn run(&mut self) -> Result<()> {
		let mut terminal = ratatui::init();
		terminal.clear()?;
		info!(tab = %self.tab, "terminal UI started");

		self.mount();

		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::spawn(move || -> Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(Duration::from_millis(50))? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let mut pending_events = VecDeque::new();

		let result: Result<()> = 'event_loop: loop {
			loop {
				match event_rx.try_recv() {
					Ok(event) => pending_events.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						break 'event_loop Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			while let Some(event) = pending_events.pop_front() {
				if let Event::Key(key) = event
					&& key.kind == KeyEventKind::Press
				{
					self.handle_key(key);
				}
				if self.should_quit {
					break;
				}
			}

			if self.should_quit {
				break Ok(());
			}

			self.pump_completions();
			self.throbber_state.calc_next();

			if let Err(err) = terminal.draw(|frame| self.draw(frame)) {
				break Err(err.into());
			}

			thread::sleep(Duration::from_millis(16));
		};

		ratatui::restore();
		info!("terminal UI stopped");

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		result
	}
}
