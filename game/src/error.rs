//! Errors returned by functions related to this crate.

use std::{error, fmt};

/// Error returned if can't parse [`Difficulty`](crate::difficulty::Difficulty)
/// from a string. Holds the rejected string.
#[derive(Debug, Clone)]
pub struct ParseDifficultyError(pub String);

impl fmt::Display for ParseDifficultyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,
"can't parse Difficulty from \"{}\", expected \"slow\", \"normal\" or \"fast\"", self.0)
    }
}

impl error::Error for ParseDifficultyError {}

/// Error returned if a [`Snake`](crate::snake::Snake) is built from no
/// segments at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptySnakeError;

impl fmt::Display for EmptySnakeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "snake must have at least one segment")
    }
}

impl error::Error for EmptySnakeError {}
