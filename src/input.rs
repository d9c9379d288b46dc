//! Mapping of raw input onto session commands.
//!
//! Keys are matched by name so any windowing library can feed them: the
//! client passes `egui` key names such as `"ArrowUp"` or `"W"`.

use crate::session::Command;
use game::prelude::{Difficulty, Direction};

/// Return direction bound to the key named `name`: arrows or WASD.
pub fn direction_for_key(name: &str) -> Option<Direction> {
	match name {
		"ArrowUp" | "w" | "W" => Some(Direction::Up),
		"ArrowDown" | "s" | "S" => Some(Direction::Down),
		"ArrowLeft" | "a" | "A" => Some(Direction::Left),
		"ArrowRight" | "d" | "D" => Some(Direction::Right),
		_ => None,
	}
}

/// Return command bound to the key named `name`.
pub fn command_for_key(name: &str) -> Option<Command> {
	if let Some(direction) = direction_for_key(name) {
		return Some(Command::Turn(direction));
	}
	match name {
		"Space" | "p" | "P" => Some(Command::TogglePause),
		"r" | "R" => Some(Command::Restart),
		"1" | "Num1" => Some(Command::SetDifficulty(Difficulty::Slow)),
		"2" | "Num2" => Some(Command::SetDifficulty(Difficulty::Normal)),
		"3" | "Num3" => Some(Command::SetDifficulty(Difficulty::Fast)),
		_ => None,
	}
}

/// Touch swipe in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swipe {
	start: (f32, f32),
}

impl Swipe {
	/// Begin a swipe at the first touch point.
	pub fn start(x: f32, y: f32) -> Self {
		Self { start: (x, y) }
	}

	/// Return direction of the swipe once the touch reached `(x, y)`.
	///
	/// The axis with the larger delta wins, ties go to the vertical axis. No
	/// movement gives no direction.
	pub fn direction_to(&self, x: f32, y: f32) -> Option<Direction> {
		let (dx, dy) = (x - self.start.0, y - self.start.1);

		if dx.abs() > dy.abs() {
			Some(if dx > 0.0 { Direction::Right } else { Direction::Left })
		} else if dy > 0.0 {
			Some(Direction::Down)
		} else if dy < 0.0 {
			Some(Direction::Up)
		} else {
			None
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn keys() {
		assert_eq!(direction_for_key("ArrowUp"), Some(Direction::Up));
		assert_eq!(direction_for_key("W"), Some(Direction::Up));
		assert_eq!(direction_for_key("a"), Some(Direction::Left));
		assert_eq!(direction_for_key("ArrowRight"), Some(Direction::Right));
		assert_eq!(direction_for_key("S"), Some(Direction::Down));
		assert_eq!(direction_for_key("Q"), None);
	}

	#[test]
	fn commands() {
		assert_eq!(command_for_key("D"), Some(Command::Turn(Direction::Right)));
		assert_eq!(command_for_key("Space"), Some(Command::TogglePause));
		assert_eq!(command_for_key("R"), Some(Command::Restart));
		assert_eq!(
			command_for_key("Num3"),
			Some(Command::SetDifficulty(Difficulty::Fast))
		);
		assert_eq!(command_for_key("Escape"), None);
	}

	#[test]
	fn swipes() {
		let swipe = Swipe::start(100.0, 100.0);

		assert_eq!(swipe.direction_to(140.0, 110.0), Some(Direction::Right));
		assert_eq!(swipe.direction_to(60.0, 90.0), Some(Direction::Left));
		assert_eq!(swipe.direction_to(105.0, 150.0), Some(Direction::Down));
		assert_eq!(swipe.direction_to(95.0, 20.0), Some(Direction::Up));
		assert_eq!(swipe.direction_to(120.0, 120.0), Some(Direction::Down));
		assert_eq!(swipe.direction_to(100.0, 100.0), None);
	}
}
