//! Fruit abstractions.

use crate::{
    aux::{Cell, Color},
    grid::Board,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a fruit. Every kind gives its own score and growth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FruitKind {
    /// Plain fruit.
    Normal,

    /// Makes the snake three segments longer.
    Cherry,

    /// Rare fruit worth more points.
    Blueberry,
}

impl FruitKind {
    /// Probability of spawning a [`FruitKind::Normal`].
    pub const NORMAL_CHANCE: f64 = 0.70;

    /// Probability of spawning a [`FruitKind::Cherry`].
    pub const CHERRY_CHANCE: f64 = 0.20;

    /// Points added to the score when the fruit is eaten.
    pub const fn score(self) -> u32 {
        match self {
            Self::Normal | Self::Cherry => 10,
            Self::Blueberry => 25,
        }
    }

    /// Net number of segments the snake gains when the fruit is eaten.
    pub const fn growth(self) -> usize {
        match self {
            Self::Normal | Self::Blueberry => 1,
            Self::Cherry => 3,
        }
    }

    /// Sprite color of the fruit.
    pub const fn color(self) -> Color {
        match self {
            Self::Normal => Color::RED,
            Self::Cherry => Color::MAGENTA,
            Self::Blueberry => Color::BLUE,
        }
    }

    /// Map a uniform roll in `[0, 1)` onto a kind using sequential
    /// thresholds.
    pub fn from_roll(roll: f64) -> Self {
        if roll < Self::NORMAL_CHANCE {
            Self::Normal
        } else if roll < Self::NORMAL_CHANCE + Self::CHERRY_CHANCE {
            Self::Cherry
        } else {
            Self::Blueberry
        }
    }
}

impl fmt::Display for FruitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lower_case = format!("{:?}", self).to_lowercase();
        write!(f, "{}", lower_case)
    }
}

/// Fruit which is going to be eaten by the snake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Fruit {
    cell: Cell,
    kind: FruitKind,
}

impl Fruit {
    /// Return a new [`Fruit`].
    pub fn new(cell: Cell, kind: FruitKind) -> Self {
        Self { cell, kind }
    }

    /// Return fruit's cell.
    pub fn cell(&self) -> Cell {
        self.cell
    }

    /// Return fruit's kind.
    pub fn kind(&self) -> FruitKind {
        self.kind
    }
}

impl fmt::Display for Fruit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind, self.cell)
    }
}

/// Source of new fruits.
///
/// Any `FnMut() -> Fruit` closure is a spawner too.
pub trait SpawnFruit {
    /// Produce one fruit.
    fn spawn(&mut self) -> Fruit;

    /// Produce `n` fruits with independent draws.
    fn spawn_batch(&mut self, n: usize) -> Vec<Fruit> {
        (0..n).map(|_| self.spawn()).collect()
    }
}

impl<F: FnMut() -> Fruit> SpawnFruit for F {
    fn spawn(&mut self) -> Fruit {
        self()
    }
}

/// Random fruit generator.
///
/// Places fruits on any cell of the board, it doesn't check whether the cell
/// is taken by the snake or by another fruit.
#[derive(Debug, Clone)]
pub struct FruitGenerator<R = StdRng> {
    board: Board,
    rng: R,
}

impl<R: Rng> FruitGenerator<R> {
    /// Return a generator drawing from `rng`.
    pub fn new(board: Board, rng: R) -> Self {
        Self { board, rng }
    }
}

impl FruitGenerator<StdRng> {
    /// Return a reproducible generator for the standard board.
    pub fn seeded(seed: u64) -> Self {
        Self::new(Board::STANDARD, StdRng::seed_from_u64(seed))
    }

    /// Return a generator for the standard board seeded from the OS.
    pub fn from_entropy() -> Self {
        Self::new(Board::STANDARD, StdRng::from_entropy())
    }
}

impl<R: Rng> SpawnFruit for FruitGenerator<R> {
    fn spawn(&mut self) -> Fruit {
        let cell = self.board.random_cell(&mut self.rng);
        let kind = FruitKind::from_roll(self.rng.gen::<f64>());
        Fruit::new(cell, kind)
    }
}
