//! Game session module.
//!
//! # Session lifecycle
//! A [`Session`] owns the one [`GameState`] of the running game together with
//! everything it needs between ticks: the fruit spawner, the high score store
//! and the tick clock. Presentation code never touches the state directly, it
//! sends commands and reads the state back for drawing.
//!
//! ```text
//!             toggle_pause            snake crashed
//!   Paused  <-------------->  Running -------------> GameOver
//!     ^                          ^                      |
//!     |   restart(resume=false)  | restart(resume=true) |
//!     +--------------------------+----------------------+
//! ```
//!
//! A new session starts [`Paused`](Status::Paused).
//!
//! # Driving the session
//! The owner calls [`Session::pump`] as often as it likes (every frame for a
//! GUI) with the current time. The session runs one tick for each clock period
//! elapsed since the previous tick, and none while paused or after game over.
//!
//! Direction requests only overwrite the pending direction, the snake turns on
//! the next tick.

use crate::{
	clock::TickClock,
	store::{self, ScoreStore},
};
use game::prelude::*;
use log::{debug, info, warn};
use std::time::Instant;

/// Session status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
	/// Ticks aren't running, the state is kept.
	Paused,

	/// Ticks are running.
	Running,

	/// The snake crashed. Only a restart leaves this status.
	GameOver {
		/// Final score.
		score: u32,
	},
}

/// Command sent to a [`Session`] by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
	/// Turn the snake on the next tick.
	Turn(Direction),

	/// Pause a running game or resume a paused one.
	TogglePause,

	/// Throw the current game away and start a fresh paused one.
	Restart,

	/// Change tick interval.
	SetDifficulty(Difficulty),
}

/// One game session.
#[derive(Debug)]
pub struct Session<F, S> {
	state: GameState,
	status: Status,
	clock: TickClock,
	spawner: F,
	store: S,
}

impl<F: SpawnFruit, S: ScoreStore> Session<F, S> {
	/// Return a paused session. The high score is read from `store`.
	pub fn new(difficulty: Difficulty, mut spawner: F, store: S) -> Self {
		let high_score = store::load_high_score(&store);
		info!("starting {} game, high score is {}", difficulty, high_score);

		Self {
			state: GameState::new(high_score, difficulty, &mut spawner),
			status: Status::Paused,
			clock: TickClock::new(difficulty.interval()),
			spawner,
			store,
		}
	}

	/// Return the game state for drawing.
	pub fn state(&self) -> &GameState {
		&self.state
	}

	/// Return session status.
	pub fn status(&self) -> Status {
		self.status
	}

	/// Return the high score store.
	pub fn store(&self) -> &S {
		&self.store
	}

	/// Run `command`.
	pub fn apply(&mut self, command: Command, now: Instant) {
		match command {
			Command::Turn(direction) => self.request_direction(direction),
			Command::TogglePause => self.toggle_pause(now),
			Command::Restart => self.restart(now, false),
			Command::SetDifficulty(difficulty) => self.set_difficulty(difficulty, now),
		}
	}

	/// Ask the snake to turn on the next tick.
	pub fn request_direction(&mut self, direction: Direction) {
		if direction != self.state.pending_direction() {
			debug!("direction {} requested", direction);
		}
		self.state.request_direction(direction);
	}

	/// Pause a running game or resume a paused one. Does nothing after game
	/// over.
	pub fn toggle_pause(&mut self, now: Instant) {
		match self.status {
			Status::Paused => self.resume(now),
			Status::Running => {
				self.clock.stop();
				self.state.set_paused(true);
				self.status = Status::Paused;
				info!("game paused");
			}
			Status::GameOver { .. } => debug!("pause toggle ignored after game over"),
		}
	}

	/// Change tick interval. A running clock restarts at the new period from
	/// `now`; the game state is left alone.
	pub fn set_difficulty(&mut self, difficulty: Difficulty, now: Instant) {
		self.state.set_difficulty(difficulty);
		if self.status == Status::Running {
			self.clock.restart(now, difficulty.interval());
		}
		info!(
			"difficulty set to {} ({} per tick)",
			difficulty,
			humantime::format_duration(difficulty.interval())
		);
	}

	/// Replace the game with a fresh one, keeping the high score and the
	/// difficulty. The new game is paused unless `resume` is set.
	pub fn restart(&mut self, now: Instant, resume: bool) {
		self.clock.stop();
		self.state = GameState::new(
			self.state.high_score(),
			self.state.difficulty(),
			&mut self.spawner,
		);
		self.status = Status::Paused;
		info!("game restarted");

		if resume {
			self.resume(now);
		}
	}

	/// Run every tick that became due by `now` and return their results.
	pub fn pump(&mut self, now: Instant) -> Vec<UpdateResult> {
		let due = self.clock.due(now);
		let mut results = Vec::with_capacity(due as usize);

		for _ in 0..due {
			match self.tick() {
				Some(result) => results.push(result),
				None => break,
			}
		}
		results
	}

	/// Run one tick right away if the game is running.
	pub fn tick(&mut self) -> Option<UpdateResult> {
		if self.status != Status::Running {
			return None;
		}

		let result = self.state.step(&mut self.spawner);
		match result {
			UpdateResult::Continued {
				high_score,
				new_high_score: true,
				..
			} => {
				if let Err(e) = store::save_high_score(&mut self.store, high_score) {
					warn!("can't save high score {}: {}", high_score, e);
				}
			}
			UpdateResult::Continued { .. } => {}
			UpdateResult::GameOver { score } => {
				self.clock.stop();
				self.state.set_paused(true);
				self.status = Status::GameOver { score };
				info!("game over with {} points", score);
			}
		}
		Some(result)
	}

	fn resume(&mut self, now: Instant) {
		self.clock.restart(now, self.state.difficulty().interval());
		self.state.set_paused(false);
		self.status = Status::Running;
		info!("game resumed");
	}
}
