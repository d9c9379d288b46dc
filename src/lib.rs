//! Fruit snake game library.
//!
//! The rules live in the `game` crate. This crate drives them: see [`session`]
//! module for the session lifecycle and the commands a front end sends.

#![warn(missing_docs)]

pub mod clock;
pub mod facts;
pub mod input;
pub mod session;
pub mod store;

pub use session::{Command, Session, Status};

/// This is an alias for standart [`Result`](std::result::Result) type which
/// represents failure.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
