//! Game board abstractions.
//!
//! Board is a fixed rectangle of square cells. (0, 0) cell is in the top left
//! corner, X-axis is going right and Y-axis is going down, same as canvas
//! pixels.

use crate::aux::{Cell, Color};
use crate::fruit::FruitKind;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Abstraction enum with available kinds of drawable game objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameObject {
	/// A segment of the snake.
	SnakeSegment,

	/// A fruit of some kind.
	Fruit(FruitKind),
}

/// One drawable point of the board.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct GridPoint {
	/// What kind of object is located in this point.
	pub object_kind: GameObject,

	/// [`Cell`] of the [`GridPoint`].
	pub cell: Cell,

	/// Sprite [`Color`] of the [`GridPoint`].
	pub color: Color,
}

impl GridPoint {
	/// Return a new [`GridPoint`].
	pub fn new(object_kind: GameObject, cell: Cell, color: Color) -> Self {
		Self {
			object_kind,
			cell,
			color,
		}
	}
}

/// Board dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
	/// Number of columns.
	pub width: i32,

	/// Number of rows.
	pub height: i32,
}

impl Board {
	/// Board width in cells.
	pub const WIDTH: i32 = 40;

	/// Board height in cells.
	pub const HEIGHT: i32 = 30;

	/// Side of one cell in pixels.
	pub const CELL_SIZE: f32 = 20.0;

	/// The board every game is played on.
	pub const STANDARD: Board = Board {
		width: Self::WIDTH,
		height: Self::HEIGHT,
	};

	/// Return `true` if `cell` lies on the board.
	pub fn contains(&self, cell: Cell) -> bool {
		cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
	}

	/// Generate a uniformly random cell framed by the board.
	pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Cell {
		Cell::new(rng.gen_range(0..self.width), rng.gen_range(0..self.height))
	}

	/// Return board size in pixels.
	pub fn pixel_size(&self) -> (f32, f32) {
		(
			self.width as f32 * Self::CELL_SIZE,
			self.height as f32 * Self::CELL_SIZE,
		)
	}

	/// Return top left and bottom right pixel corners of the square drawn for
	/// `cell`.
	pub fn pixel_rect(&self, cell: Cell) -> ((f32, f32), (f32, f32)) {
		let min = (cell.x as f32 * Self::CELL_SIZE, cell.y as f32 * Self::CELL_SIZE);
		(min, (min.0 + Self::CELL_SIZE, min.1 + Self::CELL_SIZE))
	}
}

impl Default for Board {
	fn default() -> Self {
		Self::STANDARD
	}
}
