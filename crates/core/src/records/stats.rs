use serde::Serialize;

use super::{ApplicationStatus, JobApplication};

/// Derived dashboard figures, recomputed from the current list on every render.
///
/// Every status other than `Rejected` counts toward the success rate, including
/// applications that are still `Applied` or `Interviewing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ApplicationStats {
	pub total: usize,
	pub rejected: usize,
	/// Whole percentage in `0..=100`.
	pub success_rate: u8,
	#[serde(skip)]
	by_status: [usize; 4],
}

impl ApplicationStats {
	#[must_use]
	pub fn from_applications(applications: &[JobApplication]) -> Self {
		let mut by_status = [0usize; 4];
		for application in applications {
			if let Some(slot) = ApplicationStatus::ALL
				.iter()
				.position(|status| *status == application.status)
			{
				by_status[slot] += 1;
			}
		}

		let total = applications.len();
		let rejected = by_status[3];
		Self {
			total,
			rejected,
			success_rate: success_rate(total, rejected),
			by_status,
		}
	}

	/// Number of applications currently in `status`.
	#[must_use]
	pub fn count(&self, status: ApplicationStatus) -> usize {
		ApplicationStatus::ALL
			.iter()
			.position(|candidate| *candidate == status)
			.map_or(0, |slot| self.by_status[slot])
	}
}

/// `round(100 * (total - rejected) / total)`, or `0` for an empty list.
#[must_use]
pub fn success_rate(total: usize, rejected: usize) -> u8 {
	if total == 0 {
		return 0;
	}
	let succeeded = total.saturating_sub(rejected) as f64;
	let rate = (succeeded * 100.0 / total as f64).round();
	rate.clamp(0.0, 100.0) as u8
}
