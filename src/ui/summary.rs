//! End-of-run summary model.

use std::time::Duration;

use super::theme::SetupTheme;

/// Final status of a step, as shown in the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// Completed without problems.
    Success,
    /// Failed, but the failure was advisory.
    Warning,
    /// Failed and stopped the run.
    Failed,
    /// Skipped on request.
    Skipped,
    /// Never reached because an earlier step failed.
    NotRun,
}

impl StatusKind {
    /// Plain icon for this status.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Warning => "⚠",
            Self::Failed => "✗",
            Self::Skipped => "○",
            Self::NotRun => "·",
        }
    }

    /// Icon styled with the theme.
    pub fn styled(&self, theme: &SetupTheme) -> String {
        let style = match self {
            Self::Success => &theme.success,
            Self::Warning => &theme.warning,
            Self::Failed => &theme.error,
            Self::Skipped | Self::NotRun => &theme.dim,
        };
        style.apply_to(self.icon()).to_string()
    }
}

/// One line of the summary.
#[derive(Debug, Clone)]
pub struct StepSummary {
    /// Step title.
    pub name: String,
    /// Final status.
    pub status: StatusKind,
    /// How long the step took, if it ran.
    pub duration: Option<Duration>,
    /// Short detail (warning or failure reason).
    pub detail: Option<String>,
}

/// Summary of a whole installer run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Per-step results in execution order.
    pub step_results: Vec<StepSummary>,
    /// Wall time for the run.
    pub total_duration: Duration,
    /// Steps that ran (successfully or not).
    pub steps_run: usize,
    /// Steps skipped on request.
    pub steps_skipped: usize,
    /// Steps that finished with an advisory failure.
    pub warnings: usize,
    /// The step that stopped the run, if any.
    pub failed_step: Option<String>,
    /// Whether the run completed without a fatal failure.
    pub success: bool,
}

/// Render the summary box, one string per line.
pub fn summary_lines(summary: &RunSummary, theme: &SetupTheme) -> Vec<String> {
    let b = &theme.border;
    let mut lines = Vec::with_capacity(summary.step_results.len() + 4);

    lines.push(format!(
        "  {} {}",
        b.apply_to("┌─"),
        b.apply_to("Summary ──────────────────────────")
    ));

    for step in &summary.step_results {
        let right_side = match (&step.detail, step.duration) {
            (Some(detail), _) if step.status != StatusKind::Success => {
                theme.dim.apply_to(detail).to_string()
            }
            (_, Some(d)) => theme.duration.apply_to(format_duration(d)).to_string(),
            _ => String::new(),
        };

        lines.push(
            format!(
                "  {} {} {:<24} {}",
                b.apply_to("│"),
                step.status.styled(theme),
                step.name,
                right_side
            )
            .trim_end()
            .to_string(),
        );
    }

    lines.push(format!(
        "  {}",
        b.apply_to("├────────────────────────────────────")
    ));
    lines.push(format!(
        "  {} Total: {} {} {} run {} {} skipped {} {} warnings",
        b.apply_to("│"),
        theme
            .duration
            .apply_to(format_duration(summary.total_duration)),
        theme.dim.apply_to("·"),
        summary.steps_run,
        theme.dim.apply_to("·"),
        summary.steps_skipped,
        theme.dim.apply_to("·"),
        summary.warnings,
    ));
    lines.push(format!(
        "  {}",
        b.apply_to("└────────────────────────────────────")
    ));

    lines
}

/// Format a duration for display.
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 1.0 {
        format!("{}ms", d.as_millis())
    } else if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        let mins = secs / 60.0;
        format!("{:.1}m", mins)
    }
}
