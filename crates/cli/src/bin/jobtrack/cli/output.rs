use std::io::Write;

use anyhow::Result;
use jobtrack_core::listings::ListingResult;
use jobtrack_core::records::{ApplicationStats, ApplicationStatus, JobApplication, JobId};
use serde_json::{Value, json};

use super::OutputFormat;

/// Writes subcommand results in the selected [`OutputFormat`].
pub(crate) struct Printer<W> {
	out: W,
	format: OutputFormat,
}

impl<W: Write> Printer<W> {
	pub(crate) fn new(out: W, format: OutputFormat) -> Self {
		Self { out, format }
	}

	#[cfg(test)]
	pub(crate) fn into_inner(self) -> W {
		self.out
	}

	/// Print the application list followed by the summary figures.
	pub(crate) fn applications(&mut self, applications: &[JobApplication]) -> Result<()> {
		let stats = ApplicationStats::from_applications(applications);
		match self.format {
			OutputFormat::Plain => {
				if applications.is_empty() {
					writeln!(self.out, "No jobs yet.")?;
				}
				for application in applications {
					writeln!(self.out, "{}", plain_application(application))?;
				}
				writeln!(self.out, "{}", plain_stats(&stats))?;
				Ok(())
			}
			OutputFormat::Json => self.json(&json!({
				"applications": applications,
				"stats": stats,
				"by_status": status_counts(&stats),
			})),
		}
	}

	/// Print a single record after it was created or changed.
	pub(crate) fn application(&mut self, verb: &str, application: &JobApplication) -> Result<()> {
		match self.format {
			OutputFormat::Plain => {
				writeln!(self.out, "{verb} {}", plain_application(application))?;
				Ok(())
			}
			OutputFormat::Json => self.json(&serde_json::to_value(application)?),
		}
	}

	pub(crate) fn deleted(&mut self, id: &JobId) -> Result<()> {
		match self.format {
			OutputFormat::Plain => {
				writeln!(self.out, "Deleted #{id}")?;
				Ok(())
			}
			OutputFormat::Json => self.json(&json!({ "deleted": id })),
		}
	}

	/// Print search results. `message` replaces the list when nothing matched.
	pub(crate) fn listings(
		&mut self,
		results: &[ListingResult],
		count: usize,
		message: Option<&str>,
	) -> Result<()> {
		match self.format {
			OutputFormat::Plain => {
				if let Some(message) = message {
					writeln!(self.out, "{message}")?;
					return Ok(());
				}
				for listing in results {
					let job_type = listing.job_type_label();
					let mut line = format!(
						"{} | {} | {}",
						listing.title, listing.company_name, listing.location
					);
					if !job_type.is_empty() {
						line.push_str(&format!(" | {job_type}"));
					}
					writeln!(self.out, "{line}")?;
					if !listing.url.is_empty() {
						writeln!(self.out, "  {}", listing.url)?;
					}
				}
				writeln!(self.out, "{count} job(s) found")?;
				Ok(())
			}
			OutputFormat::Json => self.json(&json!({
				"count": count,
				"data": results,
			})),
		}
	}

	/// A note that carries no data, such as a declined confirmation.
	pub(crate) fn message(&mut self, text: &str) -> Result<()> {
		match self.format {
			OutputFormat::Plain => {
				writeln!(self.out, "{text}")?;
				Ok(())
			}
			OutputFormat::Json => self.json(&json!({ "message": text })),
		}
	}

	pub(crate) fn health(&mut self, base_url: &str) -> Result<()> {
		match self.format {
			OutputFormat::Plain => {
				writeln!(self.out, "ok: {base_url}")?;
				Ok(())
			}
			OutputFormat::Json => self.json(&json!({
				"status": "ok",
				"url": base_url,
			})),
		}
	}

	fn json(&mut self, payload: &Value) -> Result<()> {
		writeln!(self.out, "{}", serde_json::to_string_pretty(payload)?)?;
		Ok(())
	}
}

fn plain_application(application: &JobApplication) -> String {
	format!(
		"#{} {} | {} | {}",
		application.id, application.company, application.position, application.status
	)
}

fn plain_stats(stats: &ApplicationStats) -> String {
	let breakdown: Vec<String> = ApplicationStatus::ALL
		.iter()
		.map(|status| format!("{status}: {}", stats.count(*status)))
		.collect();
	format!(
		"Total: {}  Rejected: {}  Success rate: {}%\n{}",
		stats.total,
		stats.rejected,
		stats.success_rate,
		breakdown.join("  ")
	)
}

fn status_counts(stats: &ApplicationStats) -> Value {
	ApplicationStatus::ALL
		.iter()
		.map(|status| (status.as_str().to_string(), json!(stats.count(*status))))
		.collect::<serde_json::Map<_, _>>()
		.into()
}
