//! Upload intake: candidate files in, pending records out, each resolved to
//! a terminal status after a delay.

mod controller;
mod filter;
mod policy;
mod record;
mod size;
mod timer;

pub use controller::IntakeController;
pub use filter::{ExtensionFilter, DEFAULT_EXTENSIONS};
pub use policy::{DelayWindow, RandomPolicy, DEFAULT_MAX_DELAY, DEFAULT_MIN_DELAY, DEFAULT_SUCCESS_RATE};
pub use record::{CandidateFile, UploadStatus};
pub use size::format_size;
pub use timer::TokioTimer;
