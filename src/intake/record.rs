use std::fmt;

use chrono::{DateTime, Utc};
use ulid::Ulid;

/// Identity of one submitted file. Generated per submission, so two files
/// with the same name never share an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UploadId(Ulid);

impl UploadId {
	pub fn new() -> Self {
		Self(Ulid::new())
	}
}

impl Default for UploadId {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Display for UploadId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.0.fmt(f)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UploadStatus {
	Pending,
	Succeeded,
	Failed,
}

impl UploadStatus {
	pub fn is_terminal(self) -> bool {
		!matches!(self, UploadStatus::Pending)
	}

	/// Label used by the upload list and the dashboard table.
	pub fn label(self) -> &'static str {
		match self {
			UploadStatus::Pending => "Processing",
			UploadStatus::Succeeded => "Completed",
			UploadStatus::Failed => "Failed",
		}
	}

	pub fn badge_class(self) -> &'static str {
		match self {
			UploadStatus::Pending => "badge badge-pending",
			UploadStatus::Succeeded => "badge badge-succeeded",
			UploadStatus::Failed => "badge badge-failed",
		}
	}
}

/// A file as reported by the drop zone or the chooser. Nothing here is
/// verified; the name and size are whatever the input surface says.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
	pub name: String,
	pub size_bytes: u64,
}

impl CandidateFile {
	pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
		Self {
			name: name.into(),
			size_bytes,
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadRecord {
	pub id: UploadId,
	pub name: String,
	pub size_bytes: u64,
	pub status: UploadStatus,
	pub submitted_at: DateTime<Utc>,
}

impl UploadRecord {
	pub(crate) fn pending(file: CandidateFile) -> Self {
		Self {
			id: UploadId::new(),
			name: file.name,
			size_bytes: file.size_bytes,
			status: UploadStatus::Pending,
			submitted_at: Utc::now(),
		}
	}
}
