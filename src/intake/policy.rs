use std::time::Duration;

use rand::Rng;

use crate::intake::record::UploadStatus;

pub const DEFAULT_MIN_DELAY: Duration = Duration::from_millis(2000);
pub const DEFAULT_MAX_DELAY: Duration = Duration::from_millis(3000);
pub const DEFAULT_SUCCESS_RATE: f64 = 0.9;

/// Decides how long a pending record waits and how it ends.
pub trait ResolutionPolicy {
	fn delay(&mut self) -> Duration;
	fn outcome(&mut self) -> UploadStatus;
}

/// Half-open delay window `[min, max)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DelayWindow {
	pub min: Duration,
	pub max: Duration,
}

impl DelayWindow {
	#[cfg(test)]
	pub fn contains(&self, d: Duration) -> bool {
		d >= self.min && d < self.max
	}
}

impl Default for DelayWindow {
	fn default() -> Self {
		Self {
			min: DEFAULT_MIN_DELAY,
			max: DEFAULT_MAX_DELAY,
		}
	}
}

/// Uniform delay within the window, success with probability `success_rate`.
#[derive(Debug, Clone, PartialEq)]
pub struct RandomPolicy {
	window: DelayWindow,
	success_rate: f64,
}

impl RandomPolicy {
	/// `window.min < window.max` and `0.0 <= success_rate <= 1.0` are
	/// checked by config validation before this is built.
	pub fn new(window: DelayWindow, success_rate: f64) -> Self {
		Self {
			window,
			success_rate: success_rate.clamp(0.0, 1.0),
		}
	}

	pub fn window(&self) -> DelayWindow {
		self.window
	}
}

impl Default for RandomPolicy {
	fn default() -> Self {
		Self::new(DelayWindow::default(), DEFAULT_SUCCESS_RATE)
	}
}

impl ResolutionPolicy for RandomPolicy {
	fn delay(&mut self) -> Duration {
		let min = self.window.min.as_millis() as u64;
		let max = self.window.max.as_millis() as u64;
		if max <= min {
			return self.window.min;
		}
		Duration::from_millis(rand::rng().random_range(min..max))
	}

	fn outcome(&mut self) -> UploadStatus {
		if rand::rng().random_bool(self.success_rate) {
			UploadStatus::Succeeded
		} else {
			UploadStatus::Failed
		}
	}
}

/// Deterministic policy for tests: fixed delay, outcomes replayed in order,
/// `Succeeded` once the script runs out.
#[cfg(test)]
#[derive(Debug, Clone)]
pub(crate) struct ScriptedPolicy {
	pub delay: Duration,
	pub outcomes: std::collections::VecDeque<UploadStatus>,
}

#[cfg(test)]
impl ScriptedPolicy {
	pub fn new(delay: Duration, outcomes: impl IntoIterator<Item = UploadStatus>) -> Self {
		Self {
			delay,
			outcomes: outcomes.into_iter().collect(),
		}
	}
}

#[cfg(test)]
impl ResolutionPolicy for ScriptedPolicy {
	fn delay(&mut self) -> Duration {
		self.delay
	}

	fn outcome(&mut self) -> UploadStatus {
		self.outcomes.pop_front().unwrap_or(UploadStatus::Succeeded)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_random_delays_stay_in_window() {
		let mut policy = RandomPolicy::default();
		let window = policy.window();
		for _ in 0..500 {
			let d = policy.delay();
			assert!(window.contains(d), "delay {d:?} outside window");
		}
	}

	#[test]
	fn test_outcome_extremes() {
		let mut always = RandomPolicy::new(DelayWindow::default(), 1.0);
		let mut never = RandomPolicy::new(DelayWindow::default(), 0.0);
		for _ in 0..100 {
			assert_eq!(always.outcome(), UploadStatus::Succeeded);
			assert_eq!(never.outcome(), UploadStatus::Failed);
		}
	}

	#[test]
	fn test_outcomes_are_terminal() {
		let mut policy = RandomPolicy::default();
		for _ in 0..200 {
			assert!(policy.outcome().is_terminal());
		}
	}

	#[test]
	fn test_window_is_half_open() {
		let w = DelayWindow::default();
		assert!(w.contains(Duration::from_millis(2000)));
		assert!(w.contains(Duration::from_millis(2999)));
		assert!(!w.contains(Duration::from_millis(3000)));
		assert!(!w.contains(Duration::from_millis(1999)));
	}
}
