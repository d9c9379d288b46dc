//! Snake abstractions.

use crate::aux::*;
use crate::error::EmptySnakeError;
use itertools::repeat_n;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Snake abstraction structure.
///
/// Segments are stored head first, so the newest segment is always at the
/// front and the tail is at the back. Serialized as a plain list of cells;
/// an empty list is rejected on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Cell>", into = "Vec<Cell>")]
pub struct Snake {
    segments: VecDeque<Cell>,
}

impl Snake {
    /// Return a one segment long [`Snake`] with its head at `head`.
    pub fn new(head: Cell) -> Self {
        Self {
            segments: VecDeque::from(vec![head]),
        }
    }

    /// Return a snake built from `segments`, head first. Returns `None` if
    /// there are no segments.
    pub fn from_segments(segments: impl IntoIterator<Item = Cell>) -> Option<Self> {
        Self::try_from(segments.into_iter().collect::<Vec<_>>()).ok()
    }

    /// Return the head segment.
    pub fn head(&self) -> Cell {
        self.segments[0]
    }

    /// Return the last segment.
    pub fn tail(&self) -> Cell {
        self.segments[self.segments.len() - 1]
    }

    /// Return snake's segments, head first.
    pub fn body(&self) -> &VecDeque<Cell> {
        &self.segments
    }

    /// Return snake's length (amount of segments).
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Return `true` if any segment occupies `cell`.
    pub fn contains(&self, cell: Cell) -> bool {
        self.segments.contains(&cell)
    }

    /// Move the head to `new_head`.
    ///
    /// With zero `growth` the tail is dropped, so the length stays the same.
    /// Otherwise the tail is kept and `growth - 1` more copies of it are
    /// appended, which unfold on the following moves.
    pub(crate) fn step(&mut self, new_head: Cell, growth: usize) {
        let tail = self.tail();
        self.segments.push_front(new_head);
        if growth == 0 {
            self.segments.pop_back();
        } else {
            self.segments.extend(repeat_n(tail, growth - 1));
        }
    }
}

impl TryFrom<Vec<Cell>> for Snake {
    type Error = EmptySnakeError;

    fn try_from(segments: Vec<Cell>) -> Result<Self, Self::Error> {
        if segments.is_empty() {
            Err(EmptySnakeError)
        } else {
            Ok(Self {
                segments: segments.into(),
            })
        }
    }
}

impl From<Snake> for Vec<Cell> {
    fn from(snake: Snake) -> Self {
        snake.segments.into()
    }
}
