use std::io;
use std::time::Duration;

use crate::console::{Console, Emphasis, TimedInput};
use crate::models::{Question, QuestionKind};

/// Substituted answer when the deadline passes without input.
pub const TIMES_UP: &str = "Time's up!";

/// Substituted answer when a multiple-choice selection is unusable.
pub const INVALID_INPUT: &str = "Invalid input";

/// Per-run tallies and the ordered result log.
#[derive(Debug, Default)]
pub struct Session {
    pub correct: usize,
    pub wrong: usize,
    pub results: Vec<String>,
}

impl Session {
    /// Compare, tally, emit feedback, and append one log line.
    ///
    /// The candidate is trimmed and compared case-insensitively; the log
    /// line keeps the answer exactly as it was passed in.
    pub fn score(&mut self, question: &Question, answer: &str, console: &mut dyn Console) {
        let is_correct = answer.trim().to_lowercase() == question.answer.to_lowercase();
        if is_correct {
            self.correct += 1;
            console.say("Correct!", Emphasis::Positive);
        } else {
            self.wrong += 1;
            console.say(
                &format!("Wrong! Correct answer: {}", question.answer),
                Emphasis::Negative,
            );
        }
        self.results.push(format!(
            "{} | Your answer: {} | Correct: {}",
            question.text,
            answer,
            if is_correct { "True" } else { "False" }
        ));
    }

    pub fn summary(&self) -> String {
        format!(
            "Quiz Complete! Correct: {}, Wrong: {}",
            self.correct, self.wrong
        )
    }
}

/// Drives the per-question loop against a [`Console`].
pub struct App {
    questions: Vec<Question>,
    timeout: Duration,
    session: Session,
}

impl App {
    pub fn new(questions: Vec<Question>, timeout: Duration) -> Self {
        Self {
            questions,
            timeout,
            session: Session::default(),
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Ask every question in file order, scoring each exactly once.
    ///
    /// Stops early only when the user interrupts; the session keeps
    /// whatever was answered up to that point.
    pub fn run(&mut self, console: &mut dyn Console) -> io::Result<()> {
        for question in &self.questions {
            match &question.kind {
                QuestionKind::FillInTheBlank => {
                    console.say(
                        &format!("\nFill in the blank: {}", question.text),
                        Emphasis::Prompt,
                    );
                }
                QuestionKind::MultipleChoice { options } => {
                    console.say(
                        &format!("\nMultiple Choice: {}", question.text),
                        Emphasis::Prompt,
                    );
                    if options.is_empty() {
                        console.say("No options available for this question!", Emphasis::Prompt);
                    } else {
                        for (index, option) in options.iter().enumerate() {
                            console.say(&format!("{}. {}", index + 1, option), Emphasis::Prompt);
                        }
                    }
                }
            }

            console.say(
                &format!("You have {} seconds to answer...", self.timeout.as_secs()),
                Emphasis::Plain,
            );
            let raw = match console.read_timed(self.timeout)? {
                TimedInput::Line(line) => line,
                TimedInput::TimedOut => TIMES_UP.to_string(),
                TimedInput::Interrupted => return Ok(()),
            };

            let answer = match &question.kind {
                QuestionKind::FillInTheBlank => raw,
                QuestionKind::MultipleChoice { options } => select_option(options, &raw),
            };
            self.session.score(question, &answer, console);
        }
        Ok(())
    }
}

/// Map a typed selection to the option it names.
///
/// Anything that is not a 1-based index into the option list (unparseable
/// text, an out-of-range number, the timeout sentinel) scores as
/// [`INVALID_INPUT`].
fn select_option(options: &[String], input: &str) -> String {
    match input.trim().parse::<usize>() {
        Ok(choice) if (1..=options.len()).contains(&choice) => options[choice - 1].clone(),
        _ => INVALID_INPUT.to_string(),
    }
}
