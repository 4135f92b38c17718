//! Time sources for usage timestamps.

use std::sync::atomic::{AtomicU64, Ordering};

/// Millisecond time source.
pub trait Clock: Send + Sync {
	fn now_millis(&self) -> u64;
}

/// Wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
	fn now_millis(&self) -> u64 {
		u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0)
	}
}

/// Manually advanced clock for deterministic tests.
#[derive(Debug, Default)]
pub struct ManualClock(AtomicU64);

impl ManualClock {
	pub fn new(start: u64) -> Self {
		Self(AtomicU64::new(start))
	}

	pub fn advance(&self, millis: u64) {
		self.0.fetch_add(millis, Ordering::Relaxed);
	}

	pub fn set(&self, millis: u64) {
		self.0.store(millis, Ordering::Relaxed);
	}
}

impl Clock for ManualClock {
	fn now_millis(&self) -> u64 {
		self.0.load(Ordering::Relaxed)
	}
}
