use std::time::Duration;

use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::intake::{
	filter::ExtensionFilter,
	policy::ResolutionPolicy,
	record::{CandidateFile, UploadId, UploadRecord, UploadStatus},
	timer::Timer,
};

#[derive(Debug, Error, PartialEq)]
pub enum IntakeError {
	#[error("unknown upload: {0}")]
	UnknownRecord(UploadId),

	#[error("upload {id} already resolved as {status:?}")]
	AlreadyResolved { id: UploadId, status: UploadStatus },

	#[error("upload {0} can only be resolved to a terminal status")]
	NotTerminal(UploadId),
}

/// A scheduled Pending → terminal transition for one record.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
	pub id: UploadId,
	pub delay: Duration,
	pub outcome: UploadStatus,
}

impl Resolution {
	/// Wait out the delay. Yields `None` if the owning session is cancelled
	/// first, in which case the resolution must not be applied.
	pub async fn settle<T: Timer>(self, timer: &T, cancel: &CancellationToken) -> Option<Self> {
		tokio::select! {
			biased;
			_ = cancel.cancelled() => {
				debug!(id = %self.id, "resolution dropped, session cancelled");
				None
			}
			_ = timer.sleep(self.delay) => Some(self),
		}
	}
}

/// Outcome of one `submit_batch` call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Submission {
	/// One entry per accepted file, in input order.
	pub resolutions: Vec<Resolution>,
	/// Names of files the extension filter turned away, in input order.
	pub rejected: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
	pub pending: usize,
	pub succeeded: usize,
	pub failed: usize,
}

impl Summary {
	pub fn total(&self) -> usize {
		self.pending + self.succeeded + self.failed
	}
}

/// Ordered intake records plus the rules for adding and resolving them.
///
/// Records are only ever appended; each one moves from Pending to a terminal
/// status exactly once.
#[derive(Debug, Clone)]
pub struct IntakeController<P> {
	records: Vec<UploadRecord>,
	filter: ExtensionFilter,
	policy: P,
}

impl<P: ResolutionPolicy> IntakeController<P> {
	pub fn new(filter: ExtensionFilter, policy: P) -> Self {
		Self {
			records: Vec::new(),
			filter,
			policy,
		}
	}

	pub fn submit_batch<I>(&mut self, files: I) -> Submission
	where
		I: IntoIterator<Item = CandidateFile>,
	{
		let mut submission = Submission::default();

		for file in files {
			if !self.filter.accepts(&file.name) {
				submission.rejected.push(file.name);
				continue;
			}
			let record = UploadRecord::pending(file);
			submission.resolutions.push(Resolution {
				id: record.id,
				delay: self.policy.delay(),
				outcome: self.policy.outcome(),
			});
			self.records.push(record);
		}

		if !submission.rejected.is_empty() {
			warn!(
				rejected = submission.rejected.len(),
				names = ?submission.rejected,
				"files skipped, unsupported extension"
			);
		}
		info!(
			accepted = submission.resolutions.len(),
			total_records = self.records.len(),
			"upload batch submitted"
		);

		submission
	}
}

impl<P> IntakeController<P> {
	pub fn resolve(&mut self, id: UploadId, status: UploadStatus) -> Result<&UploadRecord, IntakeError> {
		if !status.is_terminal() {
			return Err(IntakeError::NotTerminal(id));
		}
		let record = self
			.records
			.iter_mut()
			.find(|r| r.id == id)
			.ok_or(IntakeError::UnknownRecord(id))?;

		if record.status.is_terminal() {
			return Err(IntakeError::AlreadyResolved {
				id,
				status: record.status,
			});
		}

		record.status = status;
		info!(id = %id, name = %record.name, status = ?status, "upload resolved");
		Ok(record)
	}

	pub fn apply(&mut self, resolution: Resolution) -> Result<&UploadRecord, IntakeError> {
		self.resolve(resolution.id, resolution.outcome)
	}

	pub fn records(&self) -> &[UploadRecord] {
		&self.records
	}

	#[cfg(test)]
	pub fn get(&self, id: UploadId) -> Option<&UploadRecord> {
		self.records.iter().find(|r| r.id == id)
	}

	pub fn filter(&self) -> &ExtensionFilter {
		&self.filter
	}

	pub fn summary(&self) -> Summary {
		self.records.iter().fold(Summary::default(), |mut acc, r| {
			match r.status {
				UploadStatus::Pending => acc.pending += 1,
				UploadStatus::Succeeded => acc.succeeded += 1,
				UploadStatus::Failed => acc.failed += 1,
			}
			acc
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::intake::policy::{DelayWindow, RandomPolicy, ScriptedPolicy};
	use crate::intake::timer::{RecordingTimer, TokioTimer};

	fn scripted(outcomes: impl IntoIterator<Item = UploadStatus>) -> IntakeController<ScriptedPolicy> {
		IntakeController::new(
			ExtensionFilter::default(),
			ScriptedPolicy::new(Duration::from_millis(2500), outcomes),
		)
	}

	fn files(names: &[&str]) -> Vec<CandidateFile> {
		names
			.iter()
			.enumerate()
			.map(|(i, n)| CandidateFile::new(*n, (i as u64 + 1) * 100))
			.collect()
	}

	#[test]
	fn test_accepted_file_appends_one_pending_record() {
		for name in ["a.fasta", "b.fa", "c.fas"] {
			let mut ctl = scripted([]);
			let sub = ctl.submit_batch(files(&[name]));
			assert_eq!(sub.resolutions.len(), 1);
			assert_eq!(ctl.records().len(), 1);
			assert_eq!(ctl.records()[0].name, name);
			assert_eq!(ctl.records()[0].status, UploadStatus::Pending);
		}
	}

	#[test]
	fn test_rejected_file_leaves_collection_unchanged() {
		let mut ctl = scripted([]);
		ctl.submit_batch(files(&["keep.fa"]));
		let before = ctl.records().to_vec();

		let sub = ctl.submit_batch(files(&["notes.txt", "reads.FASTA", "reads.fastq"]));

		assert!(sub.resolutions.is_empty());
		assert_eq!(sub.rejected, vec!["notes.txt", "reads.FASTA", "reads.fastq"]);
		assert_eq!(ctl.records(), before.as_slice());
	}

	#[test]
	fn test_mixed_batch_keeps_relative_order() {
		let mut ctl = scripted([]);
		let batch = files(&["one.fasta", "skip.png", "two.fa", "skip.doc", "three.fas"]);
		let sub = ctl.submit_batch(batch);

		let names: Vec<&str> = ctl.records().iter().map(|r| r.name.as_str()).collect();
		assert_eq!(names, vec!["one.fasta", "two.fa", "three.fas"]);
		assert!(ctl.records().iter().all(|r| r.status == UploadStatus::Pending));
		assert_eq!(sub.resolutions.len(), 3);
		assert_eq!(sub.rejected.len(), 2);

		// resolutions line up with the records they belong to
		for (res, rec) in sub.resolutions.iter().zip(ctl.records()) {
			assert_eq!(res.id, rec.id);
		}
	}

	#[test]
	fn test_sizes_are_kept() {
		let mut ctl = scripted([]);
		ctl.submit_batch(vec![CandidateFile::new("big.fasta", 5 * 1024 * 1024 * 1024)]);
		assert_eq!(ctl.records()[0].size_bytes, 5 * 1024 * 1024 * 1024);
	}

	#[test]
	fn test_duplicate_names_are_independent() {
		let mut ctl = scripted([UploadStatus::Failed]);
		let sub = ctl.submit_batch(files(&["same.fa", "same.fa"]));
		assert_eq!(ctl.records().len(), 2);
		assert_ne!(ctl.records()[0].id, ctl.records()[1].id);

		let first = sub.resolutions[0].clone();
		ctl.apply(first).unwrap();

		assert_eq!(ctl.records()[0].status, UploadStatus::Failed);
		assert_eq!(ctl.records()[1].status, UploadStatus::Pending);
	}

	#[test]
	fn test_terminal_status_is_final() {
		let mut ctl = scripted([]);
		let sub = ctl.submit_batch(files(&["x.fa"]));
		let id = sub.resolutions[0].id;

		ctl.resolve(id, UploadStatus::Succeeded).unwrap();
		let err = ctl.resolve(id, UploadStatus::Failed).unwrap_err();

		assert_eq!(
			err,
			IntakeError::AlreadyResolved {
				id,
				status: UploadStatus::Succeeded
			}
		);
		assert_eq!(ctl.get(id).unwrap().status, UploadStatus::Succeeded);
	}

	#[test]
	fn test_cannot_resolve_back_to_pending() {
		let mut ctl = scripted([]);
		let sub = ctl.submit_batch(files(&["x.fa"]));
		let id = sub.resolutions[0].id;

		assert_eq!(ctl.resolve(id, UploadStatus::Pending), Err(IntakeError::NotTerminal(id)));
		assert_eq!(ctl.get(id).unwrap().status, UploadStatus::Pending);
	}

	#[test]
	fn test_unknown_id() {
		let mut ctl = scripted([]);
		let stray = UploadId::new();
		assert_eq!(
			ctl.resolve(stray, UploadStatus::Succeeded),
			Err(IntakeError::UnknownRecord(stray))
		);
	}

	#[test]
	fn test_summary_counts() {
		let mut ctl = scripted([UploadStatus::Succeeded, UploadStatus::Failed, UploadStatus::Succeeded]);
		let sub = ctl.submit_batch(files(&["a.fa", "b.fa", "c.fa", "d.fa"]));
		for res in sub.resolutions.into_iter().take(3) {
			ctl.apply(res).unwrap();
		}
		assert_eq!(
			ctl.summary(),
			Summary {
				pending: 1,
				succeeded: 2,
				failed: 1
			}
		);
		assert_eq!(ctl.summary().total(), 4);
	}

	#[tokio::test]
	async fn test_settle_waits_for_policy_delay() {
		let mut ctl = scripted([]);
		let sub = ctl.submit_batch(files(&["a.fa", "b.fa"]));
		let timer = RecordingTimer::default();
		let cancel = CancellationToken::new();

		for res in sub.resolutions {
			let settled = res.settle(&timer, &cancel).await.unwrap();
			ctl.apply(settled).unwrap();
		}

		assert_eq!(
			*timer.requested.borrow(),
			vec![Duration::from_millis(2500), Duration::from_millis(2500)]
		);
		assert_eq!(ctl.summary().succeeded, 2);
	}

	#[tokio::test(start_paused = true)]
	async fn test_random_resolutions_land_in_window() {
		let window = DelayWindow::default();
		let mut ctl = IntakeController::new(ExtensionFilter::default(), RandomPolicy::default());
		let names: Vec<String> = (0..20).map(|i| format!("s{i}.fasta")).collect();
		let sub = ctl.submit_batch(names.into_iter().map(|n| CandidateFile::new(n, 1)));
		let cancel = CancellationToken::new();

		for res in sub.resolutions {
			let start = tokio::time::Instant::now();
			let settled = res.settle(&TokioTimer, &cancel).await.unwrap();
			let elapsed = start.elapsed();
			assert!(elapsed >= window.min, "fired early: {elapsed:?}");
			assert!(elapsed < window.max, "fired late: {elapsed:?}");

			let id = settled.id;
			ctl.apply(settled).unwrap();
			assert!(ctl.get(id).unwrap().status.is_terminal());
			// never moves again
			assert!(ctl.resolve(id, UploadStatus::Failed).is_err());
		}

		assert_eq!(ctl.summary().pending, 0);
	}

	#[tokio::test(start_paused = true)]
	async fn test_cancelled_session_drops_resolution() {
		let mut ctl = scripted([]);
		let sub = ctl.submit_batch(files(&["a.fa"]));
		let res = sub.resolutions[0].clone();
		let cancel = CancellationToken::new();

		let canceller = async {
			tokio::time::sleep(Duration::from_millis(500)).await;
			cancel.cancel();
		};
		let (_, settled) = tokio::join!(canceller, res.settle(&TokioTimer, &cancel));

		assert!(settled.is_none());
		assert_eq!(ctl.records()[0].status, UploadStatus::Pending);
	}

	#[tokio::test]
	async fn test_already_cancelled_yields_none() {
		let mut ctl = scripted([]);
		let sub = ctl.submit_batch(files(&["a.fa"]));
		let timer = RecordingTimer::default();
		let cancel = CancellationToken::new();
		cancel.cancel();

		let settled = sub.resolutions[0].clone().settle(&timer, &cancel).await;
		assert!(settled.is_none());
	}
}
