//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use super::summary::summary_lines;
use super::{
    NonInteractiveUI, OutputMode, ProgressSpinner, RunSummary, SetupTheme, SpinnerHandle,
    UserInterface,
};

/// Number of trailing output lines shown under a failed command.
pub(crate) const ERROR_TAIL_LINES: usize = 20;

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    theme: SetupTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            term: Term::stdout(),
            theme: SetupTheme::detect(),
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        writeln!(self.term, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        let mut stderr = Term::stderr();
        writeln!(stderr, "{}", self.theme.format_error(msg)).ok();
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            Box::new(ProgressSpinner::new(message))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }

    fn show_header(&mut self, title: &str) {
        writeln!(self.term, "\n{}", self.theme.format_header(title)).ok();
        writeln!(self.term, "{}\n", self.theme.border.apply_to("═".repeat(40))).ok();
    }

    fn show_progress(&mut self, current: usize, total: usize) {
        if self.mode.shows_detail() {
            writeln!(
                self.term,
                "{}",
                self.theme.dim.apply_to(format!("[{}/{}]", current, total))
            )
            .ok();
        }
    }

    fn show_hint(&mut self, hint: &str) {
        writeln!(self.term, "    {}", self.theme.hint.apply_to(hint)).ok();
    }

    fn show_error_block(&mut self, command: &str, output: &str) {
        let mut stderr = Term::stderr();
        let b = &self.theme.border;
        writeln!(
            stderr,
            "    {} {}",
            b.apply_to("┌─"),
            b.apply_to("Command ──────────────────────────")
        )
        .ok();
        writeln!(
            stderr,
            "    {} {}",
            b.apply_to("│"),
            self.theme.command.apply_to(command)
        )
        .ok();

        let lines: Vec<&str> = output.lines().collect();
        if !lines.is_empty() {
            writeln!(
                stderr,
                "    {} {}",
                b.apply_to("├─"),
                b.apply_to("Output ───────────────────────────")
            )
            .ok();
            let start = lines.len().saturating_sub(ERROR_TAIL_LINES);
            for line in &lines[start..] {
                writeln!(stderr, "    {} {}", b.apply_to("│"), line).ok();
            }
        }

        writeln!(
            stderr,
            "    {}",
            b.apply_to("└────────────────────────────────────")
        )
        .ok();
    }

    fn show_run_summary(&mut self, summary: &RunSummary) {
        writeln!(self.term).ok();
        for line in summary_lines(summary, &self.theme) {
            writeln!(self.term, "{}", line).ok();
        }
    }

    fn is_interactive(&self) -> bool {
        self.term.is_term()
    }
}

/// Create the appropriate UI based on context.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
