use tracing::{Instrument, debug, info_span, warn};

use super::command::{Command, Outcome};
use crate::api::{ListingFeed, RecordApi};

/// Run one command against the collaborators.
///
/// Never fails: transport and server errors are carried inside the
/// [`Outcome`] so the owning view can present them.
pub async fn execute<R, F>(records: &R, listings: &F, command: Command) -> Outcome
where
	R: RecordApi,
	F: ListingFeed,
{
	let kind = command.kind();
	let span = info_span!("request", kind);
	let outcome = dispatch(records, listings, command).instrument(span).await;

	match outcome.error() {
		Some(err) => warn!(kind, %err, "request failed"),
		None => debug!(kind, "request succeeded"),
	}
	outcome
}

async fn dispatch<R, F>(records: &R, listings: &F, command: Command) -> Outcome
where
	R: RecordApi,
	F: ListingFeed,
{
	match command {
		Command::LoadApplications => Outcome::ApplicationsLoaded(records.list().await),
		Command::CreateApplication(draft) => {
			Outcome::ApplicationCreated(records.create(&draft).await)
		}
		Command::UpdateApplication { id, draft } => {
			let result = records.update(&id, &draft).await;
			Outcome::ApplicationUpdated { id, result }
		}
		Command::DeleteApplication(id) => {
			let result = records.delete(&id).await;
			Outcome::ApplicationDeleted { id, result }
		}
		Command::SearchListings(query) => Outcome::ListingsFetched(listings.search(&query).await),
		Command::CheckHealth => Outcome::HealthChecked(records.health().await),
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::listings::SearchQuery;
	use crate::records::{ApplicationDraft, ApplicationStatus, JobId};
	use crate::testing::{FakeListings, FakeRecords};

	#[tokio::test]
	async fn create_returns_server_record() {
		let records = FakeRecords::new();
		let listings = FakeListings::new();
		let draft = ApplicationDraft {
			company: "Acme".into(),
			position: "Engineer".into(),
			status: ApplicationStatus::Applied,
		};

		let outcome = execute(&records, &listings, Command::CreateApplication(draft)).await;
		match outcome {
			Outcome::ApplicationCreated(Ok(record)) => {
				assert_eq!(record.id, JobId::new("1"));
				assert_eq!(record.company, "Acme");
			}
			other => panic!("unexpected outcome: {other:?}"),
		}
		assert_eq!(records.calls(), 1);
	}

	#[tokio::test]
	async fn delete_of_missing_record_is_not_found() {
		let records = FakeRecords::new();
		let listings = FakeListings::new();
		let outcome = execute(
			&records,
			&listings,
			Command::DeleteApplication(JobId::new("99")),
		)
		.await;
		assert!(outcome.error().is_some_and(|err| err.is_not_found()));
	}

	#[tokio::test]
	async fn search_forwards_query() {
		let records = FakeRecords::new();
		let listings = FakeListings::new();
		let query = SearchQuery::from_fields("Developer", "");
		execute(&records, &listings, Command::SearchListings(query.clone())).await;
		assert_eq!(listings.queries(), vec![query]);
		assert_eq!(records.calls(), 0);
	}
}
