use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::Stylize;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use super::{Console, Emphasis, TimedInput};

/// Tick between availability checks while waiting for input.
const POLL_TICK: Duration = Duration::from_millis(100);

/// Real terminal backed by crossterm.
pub struct Terminal;

impl Terminal {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for Terminal {
    fn say(&mut self, text: &str, emphasis: Emphasis) {
        match emphasis {
            Emphasis::Plain => println!("{text}"),
            Emphasis::Prompt => println!("{}", text.cyan()),
            Emphasis::Positive => println!("{}", text.green()),
            Emphasis::Negative => println!("{}", text.red()),
        }
    }

    /// Assemble a line from key events, giving up when the deadline passes.
    ///
    /// `event::poll` is time-bounded, so unlike a blocking line read this
    /// loop can never overshoot the deadline waiting on the console. Blank
    /// submissions are discarded and polling continues until a non-blank
    /// line arrives or time runs out.
    fn read_timed(&mut self, timeout: Duration) -> io::Result<TimedInput> {
        let _guard = RawModeGuard::acquire()?;
        let deadline = Instant::now() + timeout;
        let mut buffer = String::new();
        let mut stdout = io::stdout();

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                print_newline(&mut stdout)?;
                return Ok(TimedInput::TimedOut);
            }
            if !event::poll(remaining.min(POLL_TICK))? {
                continue;
            }
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match (key.code, key.modifiers) {
                (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => {
                    print_newline(&mut stdout)?;
                    return Ok(TimedInput::Interrupted);
                }
                (KeyCode::Char(c), m) if !m.contains(KeyModifiers::CONTROL) => {
                    buffer.push(c);
                    write!(stdout, "{c}")?;
                    stdout.flush()?;
                }
                (KeyCode::Backspace, _) => {
                    if buffer.pop().is_some() {
                        write!(stdout, "\u{8} \u{8}")?;
                        stdout.flush()?;
                    }
                }
                (KeyCode::Enter, _) => {
                    print_newline(&mut stdout)?;
                    if buffer.trim().is_empty() {
                        buffer.clear();
                    } else {
                        return Ok(TimedInput::Line(buffer));
                    }
                }
                _ => {}
            }
        }
    }
}

/// Raw mode must be released on every exit path, including unwind.
struct RawModeGuard;

impl RawModeGuard {
    fn acquire() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

fn print_newline(stdout: &mut io::Stdout) -> io::Result<()> {
    // Raw mode disables output post-processing, so emit an explicit CRLF.
    write!(stdout, "\r\n")?;
    stdout.flush()
}
