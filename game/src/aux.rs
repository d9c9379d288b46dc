//! Auxiliary abstractions.

use serde::{Deserialize, Serialize};
use std::{fmt, ops};

/// Grid cell abstraction.
///
/// Screen coordinates are used, so (0, 0) is the top left cell of the board
/// and Y-axis is going down. Coordinates are signed to let a snake head leave
/// the board before it's checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Cell {
    /// Column of the cell.
    pub x: i32,

    /// Row of the cell.
    pub y: i32,
}

impl Cell {
    /// Return a new [`Cell`].
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Cell {
    fn from(t: (i32, i32)) -> Self {
        Self::new(t.0, t.1)
    }
}

impl ops::Add for Cell {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Direction the snake's head is moving to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Up.
    Up,

    /// Down.
    Down,

    /// Left.
    Left,

    /// Right.
    Right,
}

impl Direction {
    /// Return opposite direction.
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Return one grid step in this direction.
    pub fn offset(self) -> Cell {
        match self {
            Self::Up => Cell::new(0, -1),
            Self::Down => Cell::new(0, 1),
            Self::Left => Cell::new(-1, 0),
            Self::Right => Cell::new(1, 0),
        }
    }
}

impl Default for Direction {
    fn default() -> Self {
        Self::Right
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lower_case = format!("{:?}", self).to_lowercase();
        write!(f, "{}", lower_case)
    }
}

impl ops::Neg for Direction {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.opposite()
    }
}

/// A color in the sRGB color space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Color {
    /// Red component
    pub r: u8,

    /// Green component
    pub g: u8,

    /// Blue component
    pub b: u8,

    /// Transparency
    pub a: u8,
}

impl Color {
    /// Snake body color.
    pub const GREEN: Color = Color::new(0, 200, 0, 255);

    /// Board background color.
    pub const GRASS: Color = Color::new(24, 48, 24, 255);

    /// The red color.
    pub const RED: Color = Color::new(255, 0, 0, 255);

    /// The magenta color.
    pub const MAGENTA: Color = Color::new(200, 0, 120, 255);

    /// The blue color.
    pub const BLUE: Color = Color::new(70, 90, 255, 255);

    /// Return a new [`Color`]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }
}
