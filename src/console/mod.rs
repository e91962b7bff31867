//! Console capability used by the quiz driver.
//!
//! The driver talks to an abstract [`Console`] so presentation and scoring
//! logic can be exercised in tests without a real terminal.

mod terminal;

#[cfg(test)]
pub mod script;

pub use terminal::Terminal;

use std::io;
use std::time::Duration;

/// How a line of output should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Plain,
    /// Question prompts and option lists (cyan on a real terminal).
    Prompt,
    /// Correct-answer feedback (green).
    Positive,
    /// Wrong-answer feedback (red).
    Negative,
}

/// Outcome of a timed read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimedInput {
    /// A non-blank line arrived before the deadline, exactly as typed.
    Line(String),
    /// The deadline passed without usable input.
    TimedOut,
    /// The user hit Ctrl+C; the quiz should stop asking questions.
    Interrupted,
}

pub trait Console {
    /// Print one line of output.
    fn say(&mut self, text: &str, emphasis: Emphasis);

    /// Wait up to `timeout` for a line of input.
    fn read_timed(&mut self, timeout: Duration) -> io::Result<TimedInput>;
}
