//! Background request worker thread.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, trace};

use super::command::{Command, Outcome};
use super::execute::execute;
use crate::api::{ListingFeed, RecordApi};

/// Result of a submitted command, tagged with the id returned by
/// [`RequestWorker::submit`].
#[derive(Debug)]
pub struct Completion {
	pub id: u64,
	pub outcome: Outcome,
}

/// The worker thread has stopped and can no longer accept commands. Carries
/// the command that was refused.
#[derive(Debug, Error)]
#[error("request worker is not running")]
pub struct WorkerStopped {
	pub command: Command,
}

struct Job {
	id: u64,
	command: Command,
}

/// Runs commands on a dedicated thread so the caller never blocks on I/O.
///
/// Submitted commands execute concurrently and complete in arrival order of
/// their responses. Nothing is cancelled: a command superseded by a newer one
/// still completes and is reported.
pub struct RequestWorker {
	/// Dropped on shutdown, which ends the worker loop.
	command_tx: Option<Sender<Job>>,
	completion_rx: Receiver<Completion>,
	handle: Option<JoinHandle<()>>,
	next_id: u64,
	in_flight: usize,
}

impl RequestWorker {
	/// Launch the worker thread with its own tokio runtime.
	///
	/// # Errors
	///
	/// Returns an I/O error if the runtime cannot be built.
	pub fn spawn<R, F>(records: Arc<R>, listings: Arc<F>) -> std::io::Result<Self>
	where
		R: RecordApi + 'static,
		F: ListingFeed + 'static,
	{
		let runtime = tokio::runtime::Builder::new_multi_thread()
			.worker_threads(2)
			.thread_name("jobtrack-request")
			.enable_all()
			.build()?;
		let (command_tx, command_rx) = mpsc::channel();
		let (completion_tx, completion_rx) = mpsc::channel();

		let handle = thread::Builder::new()
			.name("jobtrack-worker".into())
			.spawn(move || worker_loop(runtime, records, listings, command_rx, completion_tx))?;

		Ok(Self {
			command_tx: Some(command_tx),
			completion_rx,
			handle: Some(handle),
			next_id: 0,
			in_flight: 0,
		})
	}

	/// Queue a command and return the id its [`Completion`] will carry.
	///
	/// # Errors
	///
	/// Returns [`WorkerStopped`] once the worker has shut down.
	pub fn submit(&mut self, command: Command) -> Result<u64, WorkerStopped> {
		self.next_id += 1;
		let id = self.next_id;
		trace!(id, kind = command.kind(), "submitting request");
		let Some(command_tx) = &self.command_tx else {
			return Err(WorkerStopped { command });
		};
		command_tx
			.send(Job { id, command })
			.map_err(|err| WorkerStopped {
				command: err.0.command,
			})?;
		self.in_flight += 1;
		Ok(id)
	}

	/// Next finished command, if any, without blocking.
	pub fn try_recv(&mut self) -> Option<Completion> {
		match self.completion_rx.try_recv() {
			Ok(completion) => Some(self.finish(completion)),
			Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
		}
	}

	/// Wait up to `timeout` for the next finished command.
	pub fn recv_timeout(&mut self, timeout: Duration) -> Option<Completion> {
		match self.completion_rx.recv_timeout(timeout) {
			Ok(completion) => Some(self.finish(completion)),
			Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => None,
		}
	}

	/// Commands submitted whose completion has not been received yet.
	#[must_use]
	pub fn in_flight(&self) -> usize {
		self.in_flight
	}

	/// Stop accepting commands and tear down the runtime without waiting for
	/// outstanding requests.
	pub fn shutdown(&mut self) {
		self.command_tx = None;
		if let Some(handle) = self.handle.take() {
			let _ = handle.join();
		}
	}

	fn finish(&mut self, completion: Completion) -> Completion {
		self.in_flight = self.in_flight.saturating_sub(1);
		completion
	}
}

impl Drop for RequestWorker {
	fn drop(&mut self) {
		self.shutdown();
	}
}

fn worker_loop<R, F>(
	runtime: tokio::runtime::Runtime,
	records: Arc<R>,
	listings: Arc<F>,
	command_rx: Receiver<Job>,
	completion_tx: Sender<Completion>,
) where
	R: RecordApi + 'static,
	F: ListingFeed + 'static,
{
	while let Ok(Job { id, command }) = command_rx.recv() {
		let records = Arc::clone(&records);
		let listings = Arc::clone(&listings);
		let completion_tx = completion_tx.clone();
		runtime.spawn(async move {
			let outcome = execute(records.as_ref(), listings.as_ref(), command).await;
			let _ = completion_tx.send(Completion { id, outcome });
		});
	}
	debug!("request worker stopping");
	runtime.shutdown_background();
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::listings::SearchQuery;
	use crate::testing::{FakeListings, FakeRecords, Rejection, listing};

	const WAIT: Duration = Duration::from_secs(5);

	fn worker(records: FakeRecords, listings: FakeListings) -> RequestWorker {
		RequestWorker::spawn(Arc::new(records), Arc::new(listings)).unwrap()
	}

	#[test]
	fn completion_carries_submitted_id() {
		let mut worker = worker(FakeRecords::new(), FakeListings::new());
		let id = worker.submit(Command::LoadApplications).unwrap();
		assert_eq!(worker.in_flight(), 1);

		let completion = worker.recv_timeout(WAIT).unwrap();
		assert_eq!(completion.id, id);
		assert!(completion.outcome.is_success());
		assert_eq!(worker.in_flight(), 0);
	}

	#[test]
	fn every_submitted_command_completes() {
		let listings = FakeListings::with_results(vec![listing("Engineer", "Acme", "Remote")]);
		let mut worker = worker(FakeRecords::new(), listings);
		let first = worker
			.submit(Command::SearchListings(SearchQuery::from_fields("rust", "")))
			.unwrap();
		let second = worker
			.submit(Command::SearchListings(SearchQuery::from_fields("go", "")))
			.unwrap();

		let mut ids = vec![
			worker.recv_timeout(WAIT).unwrap().id,
			worker.recv_timeout(WAIT).unwrap().id,
		];
		ids.sort_unstable();
		assert_eq!(ids, vec![first, second]);
	}

	#[test]
	fn failures_are_reported_not_raised() {
		let records = FakeRecords::new();
		records.fail_with(Some(Rejection::new(503, "down")));
		let mut worker = worker(records, FakeListings::new());
		worker.submit(Command::CheckHealth).unwrap();

		let completion = worker.recv_timeout(WAIT).unwrap();
		assert_eq!(completion.outcome.error().and_then(|err| err.status()), Some(503));
	}

	#[test]
	fn submit_after_shutdown_fails() {
		let mut worker = worker(FakeRecords::new(), FakeListings::new());
		worker.shutdown();
		let refused = worker.submit(Command::LoadApplications).unwrap_err();
		assert_eq!(refused.command, Command::LoadApplications);
		assert_eq!(worker.in_flight(), 0);
		assert!(worker.try_recv().is_none());
	}
}
