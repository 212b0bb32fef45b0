//! User-facing notifications.
//!
//! The terminal notifier prints one styled line per message and asks for
//! confirmations on stderr, reading the answer from stdin. Colors follow the active theme: bright variants
//! on a dark background, regular ones on a light background.

use std::io::{self, BufRead, Write};

use colored::{ColoredString, Colorize};

use crate::domain::ThemeMode;

/// Kind of notification, mapped to a color and an icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
    Warning,
    Info,
}

impl Level {
    fn icon(&self) -> &'static str {
        match self {
            Level::Success => "✔",
            Level::Error => "✖",
            Level::Warning => "!",
            Level::Info => "i",
        }
    }

    fn paint(&self, text: &str, theme: ThemeMode) -> ColoredString {
        match (self, theme.is_dark()) {
            (Level::Success, true) => text.bright_green(),
            (Level::Success, false) => text.green(),
            (Level::Error, true) => text.bright_red(),
            (Level::Error, false) => text.red(),
            (Level::Warning, true) => text.bright_yellow(),
            (Level::Warning, false) => text.yellow(),
            (Level::Info, true) => text.bright_cyan(),
            (Level::Info, false) => text.blue(),
        }
    }
}

/// Notification sink used by commands
pub trait Notifier: Send + Sync {
    fn notify(&self, level: Level, title: &str, text: Option<&str>);

    /// Ask the user to confirm an action
    fn confirm(&self, title: &str, text: Option<&str>) -> bool;

    fn success(&self, title: &str, text: Option<&str>) {
        self.notify(Level::Success, title, text);
    }

    fn error(&self, title: &str, text: Option<&str>) {
        self.notify(Level::Error, title, text);
    }

    fn warning(&self, title: &str, text: Option<&str>) {
        self.notify(Level::Warning, title, text);
    }

    fn info(&self, title: &str, text: Option<&str>) {
        self.notify(Level::Info, title, text);
    }
}

/// Render a notification as a single line
pub fn format_notification(level: Level, title: &str, text: Option<&str>, theme: ThemeMode) -> String {
    let head = level.paint(&format!("{} {}", level.icon(), title), theme).bold();
    match text.filter(|t| !t.is_empty()) {
        Some(text) => format!("{} {}", head, text),
        None => head.to_string(),
    }
}

/// `y`/`yes` (any case) confirms; anything else declines
pub fn parse_confirmation(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Notifier writing to the terminal
pub struct ConsoleNotifier {
    theme: ThemeMode,
}

impl ConsoleNotifier {
    pub fn new(theme: ThemeMode) -> Self {
        Self { theme }
    }

    /// Write the prompt to `output` and read one answer line from `input`
    fn prompt<R, W>(&self, mut input: R, mut output: W, title: &str, text: Option<&str>) -> bool
    where
        R: BufRead,
        W: Write,
    {
        let prompt = format_notification(Level::Warning, title, text, self.theme);
        if write!(output, "{} [y/N] ", prompt).and_then(|_| output.flush()).is_err() {
            return false;
        }

        let mut answer = String::new();
        match input.read_line(&mut answer) {
            Ok(_) => parse_confirmation(&answer),
            Err(e) => {
                tracing::warn!(error = %e, "Could not read confirmation");
                false
            }
        }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, level: Level, title: &str, text: Option<&str>) {
        let line = format_notification(level, title, text, self.theme);
        match level {
            Level::Error | Level::Warning => eprintln!("{}", line),
            Level::Success | Level::Info => println!("{}", line),
        }
    }

    // stderr keeps the prompt out of `--json` output on stdout
    fn confirm(&self, title: &str, text: Option<&str>) -> bool {
        self.prompt(io::stdin().lock(), io::stderr().lock(), title, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_includes_title_and_text() {
        let line = format_notification(Level::Success, "Client created", Some("#7"), ThemeMode::Dark);
        assert!(line.contains("Client created"));
        assert!(line.ends_with("#7"));

        let line = format_notification(Level::Info, "Nothing found", Some(""), ThemeMode::Light);
        assert!(line.contains("Nothing found"));
    }

    #[test]
    fn test_confirmation_answers() {
        assert!(parse_confirmation("y\n"));
        assert!(parse_confirmation(" YES "));
        assert!(!parse_confirmation("n"));
        assert!(!parse_confirmation(""));
    }

    #[test]
    fn test_prompt_writes_question_and_reads_answer() {
        let notifier = ConsoleNotifier::new(ThemeMode::Light);
        let mut output = Vec::new();

        assert!(notifier.prompt(&b"yes\n"[..], &mut output, "Delete client 7?", None));

        let written = String::from_utf8(output).unwrap();
        assert!(written.contains("Delete client 7?"));
        assert!(written.ends_with("[y/N] "));
    }

    #[test]
    fn test_prompt_defaults_to_no() {
        let notifier = ConsoleNotifier::new(ThemeMode::Dark);
        assert!(!notifier.prompt(&b""[..], Vec::new(), "Delete room 3?", Some("Cannot be undone")));
        assert!(!notifier.prompt(&b"n\n"[..], Vec::new(), "Delete room 3?", None));
    }
}
