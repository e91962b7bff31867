//! # quiz-runner
//!
//! A terminal quiz runner: loads pipe-delimited questions from a flat file,
//! asks each one with a response deadline, scores answers, and writes a
//! per-question result log.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quiz_runner::Quiz;
//!
//! let quiz = Quiz::from_file("questions.txt");
//! quiz.run().expect("terminal failure");
//! ```

mod app;
pub mod console;
mod data;
mod models;

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub use app::{App, Session, INVALID_INPUT, TIMES_UP};
pub use console::{Console, Emphasis, Terminal, TimedInput};
pub use data::{load_questions, parse_line, save_results, LoadError};
pub use models::{Question, QuestionKind};

/// Default response deadline per question.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// A quiz ready to run in the terminal.
pub struct Quiz {
    questions: Vec<Question>,
    timeout: Duration,
    results_path: PathBuf,
}

impl Quiz {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            timeout: DEFAULT_TIMEOUT,
            results_path: PathBuf::from("results.txt"),
        }
    }

    /// Load a quiz from a pipe-delimited question file.
    ///
    /// A file that cannot be read is reported and treated as an empty
    /// question set; [`run`](Quiz::run) then exits early without asking
    /// anything.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Self {
        let questions = match load_questions(path) {
            Ok(questions) => questions,
            Err(e) => {
                eprintln!("Error loading questions: {e}");
                Vec::new()
            }
        };
        Self::new(questions)
    }

    /// Set the per-question response deadline.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set where the result log is written.
    pub fn results_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.results_path = path.into();
        self
    }

    /// Run the quiz against the real terminal.
    pub fn run(self) -> io::Result<()> {
        let mut console = Terminal::new();
        self.run_with_console(&mut console)
    }

    /// Run the quiz against any console implementation.
    ///
    /// A failed save is reported through the console and does not fail the
    /// run; only console I/O errors propagate.
    pub fn run_with_console(self, console: &mut dyn Console) -> io::Result<()> {
        console.say("Welcome to the quiz!", Emphasis::Plain);

        if self.questions.is_empty() {
            console.say("No questions found. Exiting...", Emphasis::Plain);
            return Ok(());
        }

        let mut app = App::new(self.questions, self.timeout);
        app.run(console)?;

        let session = app.session();
        console.say(&format!("\n{}", session.summary()), Emphasis::Plain);

        match save_results(&self.results_path, &session.results) {
            Ok(()) => console.say(
                &format!("Results saved to {}", self.results_path.display()),
                Emphasis::Plain,
            ),
            Err(e) => console.say(&format!("Error saving results: {e}"), Emphasis::Negative),
        }

        Ok(())
    }
}
