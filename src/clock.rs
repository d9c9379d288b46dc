//! Repeating tick timer.
//!
//! The clock doesn't sleep or spawn anything. The frame loop asks it how many
//! ticks became due since the last call and runs that many updates.

use std::time::{Duration, Instant};

/// Fixed period timer driven by the caller's notion of "now".
#[derive(Debug, Clone)]
pub struct TickClock {
	period: Duration,

	/// Moment of the next tick, `None` while the clock is stopped.
	next: Option<Instant>,
}

impl TickClock {
	/// Upper bound of ticks reported by one [`due`](Self::due) call. A frame
	/// which stalled longer than that drops the extra ticks.
	pub const MAX_CATCH_UP: u32 = 3;

	/// Return a stopped clock with `period`.
	pub fn new(period: Duration) -> Self {
		debug_assert!(!period.is_zero());
		Self { period, next: None }
	}

	/// Return the tick period.
	pub fn period(&self) -> Duration {
		self.period
	}

	/// Return `true` if the clock is ticking.
	pub fn is_running(&self) -> bool {
		self.next.is_some()
	}

	/// Start ticking. The first tick is due one period after `now`.
	pub fn start(&mut self, now: Instant) {
		self.next = Some(now + self.period);
	}

	/// Stop ticking.
	pub fn stop(&mut self) {
		self.next = None;
	}

	/// Switch to `period` and start ticking from `now`.
	pub fn restart(&mut self, now: Instant, period: Duration) {
		debug_assert!(!period.is_zero());
		self.period = period;
		self.start(now);
	}

	/// Return how many ticks are due at `now` and move the schedule past
	/// them.
	pub fn due(&mut self, now: Instant) -> u32 {
		let next = match self.next {
			Some(next) if next <= now => next,
			_ => return 0,
		};

		// Schedule from `now` to stay on the period grid without multiplying.
		let behind = (now - next).as_nanos();
		let period = self.period.as_nanos();
		let into_period = Duration::from_nanos((behind % period) as u64);
		self.next = Some(now + (self.period - into_period));

		let fired = (behind / period).saturating_add(1);
		fired.min(u128::from(Self::MAX_CATCH_UP)) as u32
	}
}
