use std::future::Future;
use std::time::Duration;

/// Source of delays for deferred resolutions.
pub trait Timer {
	fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// Sleeps on the tokio clock, which tests can pause and advance.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TokioTimer;

impl Timer for TokioTimer {
	fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
		tokio::time::sleep(duration)
	}
}

/// Returns at once and remembers what it was asked to wait.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingTimer {
	pub requested: std::cell::RefCell<Vec<Duration>>,
}

#[cfg(test)]
impl Timer for RecordingTimer {
	fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
		self.requested.borrow_mut().push(duration);
		std::future::ready(())
	}
}
