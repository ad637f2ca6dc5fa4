//! Non-interactive UI for CI/headless environments.

use super::summary::summary_lines;
use super::terminal::ERROR_TAIL_LINES;
use super::theme::SetupTheme;
use super::{OutputMode, RunSummary, SpinnerHandle, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Prints plain lines without spinners or colors, which keeps CI logs
/// readable.
pub struct NonInteractiveUI {
    mode: OutputMode,
    theme: SetupTheme,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            theme: SetupTheme::plain(),
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn success(&mut self, msg: &str) {
        println!("{}", self.theme.format_success(msg));
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_warning(msg));
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            println!("  {}", message);
        }
        Box::new(NoopSpinner)
    }

    fn show_header(&mut self, title: &str) {
        println!("\n{}", self.theme.format_header(title));
        println!("{}\n", "=".repeat(40));
    }

    fn show_progress(&mut self, current: usize, total: usize) {
        if self.mode.shows_detail() {
            println!("[{}/{}]", current, total);
        }
    }

    fn show_hint(&mut self, hint: &str) {
        println!("    {}", hint);
    }

    fn show_error_block(&mut self, command: &str, output: &str) {
        eprintln!("    ┌─ Command ──────────────────────────");
        eprintln!("    │ {}", command);
        let lines: Vec<&str> = output.lines().collect();
        if !lines.is_empty() {
            eprintln!("    ├─ Output ───────────────────────────");
            let start = lines.len().saturating_sub(ERROR_TAIL_LINES);
            for line in &lines[start..] {
                eprintln!("    │ {}", line);
            }
        }
        eprintln!("    └────────────────────────────────────");
    }

    fn show_run_summary(&mut self, summary: &RunSummary) {
        println!();
        for line in summary_lines(summary, &self.theme) {
            println!("{}", line);
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner that prints only its final line (for non-interactive mode).
struct NoopSpinner;

impl SpinnerHandle for NoopSpinner {
    fn finish_success(&mut self, msg: &str) {
        println!("  {}", SetupTheme::plain().format_success(msg));
    }

    fn finish_warning(&mut self, msg: &str) {
        println!("  {}", SetupTheme::plain().format_warning(msg));
    }

    fn finish_error(&mut self, msg: &str) {
        eprintln!("  {}", SetupTheme::plain().format_error(msg));
    }
}
