//! Headless subcommands.
//!
//! Each subcommand drives the same view-state transitions as the terminal
//! UI through a [`Session`], then prints what the view would show. An alert
//! left behind by a transition becomes the command's error.

use std::io::Write;

use anyhow::{Result, anyhow, bail};
use jobtrack_core::api::{ListingFeed, RecordApi};
use jobtrack_core::records::{JobApplication, JobId};
use jobtrack_core::search::SearchMessage;
use jobtrack_core::{DashboardState, Session};
use tracing::info;

use crate::cli::{CommandArg, Printer};

/// Run one subcommand to completion.
///
/// `confirm` is asked before a delete unless `--yes` was given.
pub(crate) fn run<R, F, W>(
	session: &mut Session<R, F>,
	command: CommandArg,
	printer: &mut Printer<W>,
	records_url: &str,
	confirm: impl FnOnce(&JobApplication) -> bool,
) -> Result<()>
where
	R: RecordApi,
	F: ListingFeed,
	W: Write,
{
	match command {
		CommandArg::List => {
			load(session)?;
			printer.applications(session.dashboard.applications())
		}
		CommandArg::Add {
			company,
			position,
			status,
		} => {
			session.dashboard.form.company = company;
			session.dashboard.form.position = position;
			session.dashboard.form.status = status;
			session.submit_application();
			take_alert(&mut session.dashboard)?;
			let created = session
				.dashboard
				.applications()
				.last()
				.ok_or_else(|| anyhow!("the record API returned no record"))?;
			info!(id = %created.id, "application added");
			printer.application("Added", created)
		}
		CommandArg::Status { id, status } => {
			load(session)?;
			let id = JobId::new(id);
			known(&session.dashboard, &id)?;
			let sent = session.change_status(&id, status);
			take_alert(&mut session.dashboard)?;
			let record = known(&session.dashboard, &id)?;
			let verb = if sent { "Updated" } else { "Unchanged" };
			printer.application(verb, record)
		}
		CommandArg::Delete { id, yes } => {
			load(session)?;
			let id = known(&session.dashboard, &JobId::new(id))?.id.clone();
			let deleted = session.delete_application(&id, |record| yes || confirm(record));
			if !deleted {
				return printer.message("Cancelled");
			}
			take_alert(&mut session.dashboard)?;
			printer.deleted(&id)
		}
		CommandArg::Search {
			keyword,
			location,
			page,
		} => {
			session.search.keyword = keyword;
			session.search.location = location;
			if let Some(page) = page {
				session.search.page = page;
			}
			session.search();
			let message = session.search.message();
			if let Some(failure @ SearchMessage::RequestFailed(_)) = &message {
				bail!("{failure}");
			}
			let message = message.map(|message| message.to_string());
			printer.listings(
				session.search.results(),
				session.search.count(),
				message.as_deref(),
			)
		}
		CommandArg::Health => {
			session.check_health()?;
			printer.health(records_url)
		}
	}
}

fn load<R: RecordApi, F: ListingFeed>(session: &mut Session<R, F>) -> Result<()> {
	session.mount_dashboard();
	take_alert(&mut session.dashboard)
}

/// Turn a pending alert into an error.
fn take_alert(dashboard: &mut DashboardState) -> Result<()> {
	match dashboard.dismiss_alert() {
		Some(alert) => Err(anyhow!("{alert}")),
		None => Ok(()),
	}
}

fn known<'a>(dashboard: &'a DashboardState, id: &JobId) -> Result<&'a JobApplication> {
	dashboard
		.application(id)
		.ok_or_else(|| anyhow!("no application with id {id}"))
}
