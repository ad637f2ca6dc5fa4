//! Installer orchestration.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{error, info, warn};

use crate::config::SetupConfig;
use crate::shell::CommandRunner;
use crate::steps::{
    CreateDirectories, FailurePolicy, InstallBrowsers, InstallDependencies, ProbeTool,
    PythonVersionCheck, Step, StepContext, StepEnv, StepId, StepStatus, VerifyInstallation,
};
use crate::ui::{RunSummary, StatusKind, StepSummary, UserInterface};

/// Options for a single run.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Steps to leave out.
    pub skip: HashSet<StepId>,
}

/// A step as it appears in a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedStep {
    pub id: String,
    pub title: String,
    pub policy: String,
    pub commands: Vec<String>,
}

/// Outcome of one step in a run.
#[derive(Debug)]
pub struct StepOutcome {
    pub id: StepId,
    pub title: &'static str,
    pub status: StepStatus,
    pub duration: Option<Duration>,
}

/// Result of running the installer.
#[derive(Debug)]
pub struct RunOutcome {
    /// Per-step outcomes in execution order.
    pub steps: Vec<StepOutcome>,
    /// What was shown to the user at the end.
    pub summary: RunSummary,
}

impl RunOutcome {
    /// Whether no step failed fatally.
    pub fn success(&self) -> bool {
        !self.steps.iter().any(|s| s.status.is_fatal())
    }

    /// Process exit code: 0 on success, 1 on any fatal failure.
    pub fn exit_code(&self) -> i32 {
        if self.success() {
            0
        } else {
            1
        }
    }

    /// Outcome for a given step, if it is part of the installer.
    pub fn status(&self, id: StepId) -> Option<&StepStatus> {
        self.steps.iter().find(|s| s.id == id).map(|s| &s.status)
    }
}

/// Runs an ordered list of steps, each paired with its failure policy.
///
/// A fatal failure stops the run; remaining steps are reported as not run.
/// Advisory failures are shown as warnings and the run continues.
pub struct Installer {
    steps: Vec<(Box<dyn Step>, FailurePolicy)>,
}

impl Installer {
    /// An installer with no steps.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a step.
    pub fn with_step(mut self, step: impl Step + 'static, policy: FailurePolicy) -> Self {
        self.steps.push((Box::new(step), policy));
        self
    }

    /// The stock sequence.
    ///
    /// The tool probe is left out when no proxy tool is configured.
    pub fn standard(config: &SetupConfig) -> Self {
        let mut installer = Self::new()
            .with_step(PythonVersionCheck, FailurePolicy::Fatal)
            .with_step(InstallDependencies, FailurePolicy::Fatal)
            .with_step(InstallBrowsers, FailurePolicy::Advisory);

        if let Some(tool) = &config.proxy_tool {
            installer = installer.with_step(ProbeTool::new(tool.clone()), FailurePolicy::Advisory);
        }

        installer
            .with_step(CreateDirectories, FailurePolicy::Fatal)
            .with_step(VerifyInstallation, FailurePolicy::Fatal)
    }

    /// Step ids in execution order.
    pub fn step_ids(&self) -> Vec<StepId> {
        self.steps.iter().map(|(step, _)| step.id()).collect()
    }

    /// Describe what a run would do without executing anything.
    pub fn plan(&self, env: &StepEnv<'_>, options: &RunOptions) -> Vec<PlannedStep> {
        self.steps
            .iter()
            .filter(|(step, _)| !options.skip.contains(&step.id()))
            .map(|(step, policy)| PlannedStep {
                id: step.id().to_string(),
                title: step.title().to_string(),
                policy: policy.to_string(),
                commands: step.plan(env),
            })
            .collect()
    }

    /// Execute the steps in order.
    pub fn run(
        &self,
        env: StepEnv<'_>,
        runner: &dyn CommandRunner,
        ui: &mut dyn UserInterface,
        options: &RunOptions,
    ) -> RunOutcome {
        let start = Instant::now();
        let total = self
            .steps
            .iter()
            .filter(|(step, _)| !options.skip.contains(&step.id()))
            .count();

        ui.show_header(&format!("{} Installation", env.config.app_name));
        info!(
            interpreter = env.python.interpreter(),
            root = %env.root.display(),
            "Starting installation"
        );

        let mut outcomes = Vec::with_capacity(self.steps.len());
        let mut index = 0;
        let mut stopped = false;

        for (step, policy) in &self.steps {
            let id = step.id();

            if stopped {
                outcomes.push(StepOutcome {
                    id,
                    title: step.title(),
                    status: StepStatus::NotRun,
                    duration: None,
                });
                continue;
            }

            if options.skip.contains(&id) {
                ui.message(&format!("Skipping: {}", step.title()));
                outcomes.push(StepOutcome {
                    id,
                    title: step.title(),
                    status: StepStatus::Skipped,
                    duration: None,
                });
                continue;
            }

            index += 1;
            ui.show_progress(index, total);
            ui.message(&format!("{}...", step.title()));

            let step_start = Instant::now();
            let result = {
                let mut ctx = StepContext {
                    env,
                    runner,
                    ui: &mut *ui,
                };
                step.run(&mut ctx)
            };
            let duration = step_start.elapsed();
            let status = policy.classify(result);

            match &status {
                StepStatus::Success(report) => ui.success(&report.detail),
                StepStatus::Advisory(e) => {
                    warn!(step = %id, error = %e, "Step finished with a warning");
                    ui.warning(&e.to_string());
                    if let Some(hint) = step.failure_hint(e) {
                        ui.show_hint(&hint);
                    }
                }
                StepStatus::Fatal(e) => {
                    error!(step = %id, error = %e, "Step failed");
                    ui.error(&e.to_string());
                    if let Some(hint) = step.failure_hint(e) {
                        ui.show_hint(&hint);
                    }
                    stopped = true;
                }
                StepStatus::Skipped | StepStatus::NotRun => {}
            }

            outcomes.push(StepOutcome {
                id,
                title: step.title(),
                status,
                duration: Some(duration),
            });
        }

        let summary = summarize(&outcomes, start.elapsed());
        ui.show_run_summary(&summary);

        match &summary.failed_step {
            None => {
                ui.success("Installation completed successfully!");
                if !env.config.next_steps.is_empty() {
                    ui.message("");
                    ui.message("Quick Start:");
                    for line in &env.config.next_steps {
                        ui.message(&format!("   {}", line));
                    }
                }
            }
            Some(name) => ui.error(&format!("Installation failed at: {}", name)),
        }

        RunOutcome {
            steps: outcomes,
            summary,
        }
    }
}

impl Default for Installer {
    fn default() -> Self {
        Self::new()
    }
}

fn summarize(outcomes: &[StepOutcome], total_duration: Duration) -> RunSummary {
    let step_results = outcomes
        .iter()
        .map(|o| {
            let (status, detail) = match &o.status {
                StepStatus::Success(_) => (StatusKind::Success, None),
                StepStatus::Advisory(e) => (StatusKind::Warning, Some(e.to_string())),
                StepStatus::Fatal(e) => (StatusKind::Failed, Some(e.to_string())),
                StepStatus::Skipped => (StatusKind::Skipped, Some("skipped".to_string())),
                StepStatus::NotRun => (StatusKind::NotRun, None),
            };
            StepSummary {
                name: o.title.to_string(),
                status,
                duration: o.duration,
                detail,
            }
        })
        .collect();

    let failed_step = outcomes
        .iter()
        .find(|o| o.status.is_fatal())
        .map(|o| o.title.to_string());

    RunSummary {
        step_results,
        total_duration,
        steps_run: outcomes.iter().filter(|o| o.status.ran()).count(),
        steps_skipped: outcomes
            .iter()
            .filter(|o| matches!(o.status, StepStatus::Skipped))
            .count(),
        warnings: outcomes
            .iter()
            .filter(|o| matches!(o.status, StepStatus::Advisory(_)))
            .count(),
        success: failed_step.is_none(),
        failed_step,
    }
}
