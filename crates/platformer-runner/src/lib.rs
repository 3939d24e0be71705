//! Session driver for `platformer-engine`.
//!
//! `GameRunner` owns the level source, queues input, schedules fixed ticks
//! and applies the session rules (lives, restart, win/lose) around the
//! simulation core.

pub mod runner;
pub mod session;
pub mod source;

pub use runner::GameRunner;
pub use session::{Outcome, Session};
pub use source::{FileLevel, LevelSource, TextLevel};
