use crate::ports::outbound::StatusReporter;
use owo_colors::OwoColorize;

/// StderrReporter adapter for reporting status to stderr
///
/// Writes to stderr so it doesn't interfere with the rendered output on
/// stdout. `quiet` silences status and completion messages; warnings are
/// always shown.
#[derive(Debug, Clone, Copy)]
pub struct StderrReporter {
    quiet: bool,
    colored: bool,
}

impl StderrReporter {
    pub fn new(quiet: bool, colored: bool) -> Self {
        Self { quiet, colored }
    }

    fn warning_line(&self, message: &str) -> String {
        let line = format!("⚠️  Warning: {}", message);
        if self.colored {
            line.yellow().to_string()
        } else {
            line
        }
    }

    fn completion_line(&self, message: &str) -> String {
        if self.colored {
            message.green().to_string()
        } else {
            message.to_string()
        }
    }
}

impl Default for StderrReporter {
    fn default() -> Self {
        Self::new(false, false)
    }
}

impl StatusReporter for StderrReporter {
    fn report(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", message);
        }
    }

    fn report_warning(&self, message: &str) {
        eprintln!("{}", self.warning_line(message));
    }

    fn report_completion(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", self.completion_line(message));
        }
    }
}
