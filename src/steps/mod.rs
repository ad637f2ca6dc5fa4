//! Installer steps.
//!
//! Each step is a type implementing [`Step`]. A step does its work through
//! the [`StepContext`] it is handed and returns a [`StepReport`] on success or
//! a [`SetupError`](crate::error::SetupError) on failure. It never decides
//! whether a failure is fatal: that is the job of the [`FailurePolicy`] the
//! runner pairs it with.
//!
//! - [`PythonVersionCheck`] - interpreter meets the minimum version
//! - [`InstallDependencies`] - pip install, stopping at the first failure
//! - [`InstallBrowsers`] - Playwright browser fetch, every browser attempted
//! - [`ProbeTool`] - optional tool presence
//! - [`CreateDirectories`] - idempotent working-directory scaffolding
//! - [`VerifyInstallation`] - import checks plus a browser smoke test

pub mod browsers;
pub mod dependencies;
pub mod directories;
pub mod policy;
pub mod probe;
pub mod python_version;
pub mod verify;

pub use browsers::InstallBrowsers;
pub use dependencies::InstallDependencies;
pub use directories::{scaffold, CreateDirectories, ScaffoldReport};
pub use policy::{FailurePolicy, StepStatus};
pub use probe::ProbeTool;
pub use python_version::PythonVersionCheck;
pub use verify::VerifyInstallation;

use std::fmt;
use std::path::Path;

use crate::config::SetupConfig;
use crate::error::{Result, SetupError};
use crate::python::PythonEnv;
use crate::shell::{CommandOptions, CommandResult, CommandRunner, CommandSpec};
use crate::ui::UserInterface;

/// Stable identifiers for the installer steps, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, clap::ValueEnum)]
pub enum StepId {
    /// Interpreter version check.
    Python,
    /// Package installation.
    Dependencies,
    /// Browser binary download.
    Browsers,
    /// Optional tool probe.
    Proxy,
    /// Working-directory scaffolding.
    Directories,
    /// Post-install verification.
    Verify,
}

impl StepId {
    /// All step ids in execution order.
    pub const ALL: [StepId; 6] = [
        StepId::Python,
        StepId::Dependencies,
        StepId::Browsers,
        StepId::Proxy,
        StepId::Directories,
        StepId::Verify,
    ];

    /// Identifier as used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::Dependencies => "dependencies",
            Self::Browsers => "browsers",
            Self::Proxy => "proxy",
            Self::Directories => "directories",
            Self::Verify => "verify",
        }
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only inputs shared by all steps.
///
/// The interpreter and the target root are explicit so nothing depends on the
/// process's ambient working directory.
#[derive(Debug, Clone, Copy)]
pub struct StepEnv<'a> {
    /// Installer configuration.
    pub config: &'a SetupConfig,
    /// The Python environment being provisioned.
    pub python: &'a PythonEnv,
    /// Directory under which working directories are created.
    pub root: &'a Path,
}

/// Everything a step needs while running.
pub struct StepContext<'a> {
    /// Shared inputs.
    pub env: StepEnv<'a>,
    /// Executes external commands.
    pub runner: &'a dyn CommandRunner,
    /// Reports progress.
    pub ui: &'a mut dyn UserInterface,
}

impl StepContext<'_> {
    /// Run a command in the target root.
    ///
    /// In verbose mode the command's output is echoed.
    pub fn run(&mut self, command: &CommandSpec) -> Result<CommandResult> {
        let options = CommandOptions {
            cwd: Some(self.env.root.to_path_buf()),
        };
        let result = self.runner.run(command, &options)?;

        if self.ui.output_mode().shows_command_output() {
            for line in result.stdout.lines().chain(result.stderr.lines()) {
                self.ui.message(&format!("    {}", line));
            }
        }

        Ok(result)
    }
}

/// What a successful step reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    /// One-line result shown after the step.
    pub detail: String,
}

impl StepReport {
    /// Create a report.
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// One installer step.
pub trait Step {
    /// Stable identifier.
    fn id(&self) -> StepId;

    /// Human-readable title, e.g. "Installing Python dependencies".
    fn title(&self) -> &'static str;

    /// Commands or actions the step would perform, for `plan`.
    fn plan(&self, env: &StepEnv<'_>) -> Vec<String>;

    /// Perform the step.
    fn run(&self, ctx: &mut StepContext<'_>) -> Result<StepReport>;

    /// Extra guidance to show when the step fails.
    fn failure_hint(&self, _error: &SetupError) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::ScriptedRunner;
    use crate::ui::{MockUI, OutputMode};

    #[test]
    fn step_ids_round_trip_through_clap() {
        use clap::ValueEnum;
        for id in StepId::ALL {
            let parsed = StepId::from_str(id.as_str(), false).unwrap();
            assert_eq!(parsed, id);
        }
    }

    #[test]
    fn step_ids_are_ordered() {
        let mut sorted = StepId::ALL;
        sorted.sort();
        assert_eq!(sorted, StepId::ALL);
    }

    #[test]
    fn context_run_uses_root_and_echoes_in_verbose() {
        let config = SetupConfig::default();
        let python = PythonEnv::new("python3");
        let temp = tempfile::TempDir::new().unwrap();
        let runner = ScriptedRunner::new();
        runner.on_success("python3 --version", "Python 3.11.2\n");
        let mut ui = MockUI::with_mode(OutputMode::Verbose);

        let mut ctx = StepContext {
            env: StepEnv {
                config: &config,
                python: &python,
                root: temp.path(),
            },
            runner: &runner,
            ui: &mut ui,
        };
        let result = ctx.run(&python.version_command()).unwrap();

        assert!(result.success);
        assert!(ui.has_message("Python 3.11.2"));
    }
}
