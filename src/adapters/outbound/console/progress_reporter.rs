use crate::ports::outbound::ProgressReporter;
use owo_colors::OwoColorize;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port, writing progress
/// information to stderr so it doesn't interfere with stdout output.
/// Quiet mode drops progress and completion messages; warnings always print.
#[derive(Debug, Clone, Copy)]
pub struct StderrProgressReporter {
    color: bool,
    quiet: bool,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            color: true,
            quiet: false,
        }
    }

    /// Enables or disables ANSI colors (`NO_COLOR`, pipes, CI logs).
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", message);
        }
    }

    fn report_warning(&self, message: &str) {
        if self.color {
            eprintln!("{} {}", "⚠️  Warning:".yellow().bold(), message.yellow());
        } else {
            eprintln!("⚠️  Warning: {}", message);
        }
    }

    fn report_completion(&self, message: &str) {
        if self.quiet {
            return;
        }
        if self.color {
            eprintln!("{} {}", "✅".green(), message.green());
        } else {
            eprintln!("✅ {}", message);
        }
    }
}
