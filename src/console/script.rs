//! Scripted console for tests: canned inputs in, transcript out.

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use super::{Console, Emphasis, TimedInput};

pub struct ScriptedConsole {
    inputs: VecDeque<TimedInput>,
    pub transcript: Vec<(Emphasis, String)>,
}

impl ScriptedConsole {
    pub fn new(inputs: impl IntoIterator<Item = TimedInput>) -> Self {
        Self {
            inputs: inputs.into_iter().collect(),
            transcript: Vec::new(),
        }
    }

    /// Script of plain typed lines.
    pub fn typed(inputs: &[&str]) -> Self {
        Self::new(inputs.iter().map(|s| TimedInput::Line(s.to_string())))
    }

    pub fn said(&self, needle: &str) -> bool {
        self.transcript.iter().any(|(_, line)| line.contains(needle))
    }
}

impl Console for ScriptedConsole {
    fn say(&mut self, text: &str, emphasis: Emphasis) {
        self.transcript.push((emphasis, text.to_string()));
    }

    /// Scripts that run out of input behave like a silent user.
    fn read_timed(&mut self, _timeout: Duration) -> io::Result<TimedInput> {
        Ok(self.inputs.pop_front().unwrap_or(TimedInput::TimedOut))
    }
}
