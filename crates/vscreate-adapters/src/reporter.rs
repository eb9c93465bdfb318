//! Reporter adapters - user-facing progress lines.

use std::sync::{Arc, Mutex};

use owo_colors::OwoColorize;

use vscreate_core::application::ports::{Reporter, Tint};

/// Console reporter with optional ANSI color.
///
/// Red lines go to stderr, everything else to stdout, so error lines stay
/// visible when stdout is redirected.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleReporter {
    use_color: bool,
}

impl ConsoleReporter {
    /// Create a reporter; `use_color = false` disables ANSI codes.
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn paint(&self, msg: &str, tint: Tint) -> String {
        if !self.use_color {
            return msg.to_string();
        }
        match tint {
            Tint::Green => msg.green().to_string(),
            Tint::Cyan => msg.cyan().to_string(),
            Tint::Yellow => msg.yellow().to_string(),
            Tint::Red => msg.red().to_string(),
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Reporter for ConsoleReporter {
    fn emit(&self, msg: &str, tint: Tint) {
        let line = self.paint(msg, tint);
        if tint == Tint::Red {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    }
}

/// Reporter that records every line for test assertions.
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    lines: Arc<Mutex<Vec<(String, Tint)>>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every line emitted so far, in order.
    pub fn lines(&self) -> Vec<(String, Tint)> {
        self.lines.lock().unwrap().clone()
    }

    /// Only the messages emitted with the given tint.
    pub fn lines_with(&self, tint: Tint) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|(_, t)| *t == tint)
            .map(|(msg, _)| msg)
            .collect()
    }

    /// `true` if any line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|(msg, _)| msg.contains(needle))
    }
}

impl Reporter for RecordingReporter {
    fn emit(&self, msg: &str, tint: Tint) {
        self.lines.lock().unwrap().push((msg.to_string(), tint));
    }
}
