//! Run command implementation.
//!
//! The `authrec-setup run` command executes the installer.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::cli::args::RunArgs;
use crate::error::{Result, SetupError};
use crate::runner::{Installer, RunOptions};
use crate::shell::{CommandRunner, SystemRunner};
use crate::steps::StepEnv;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, Workspace};

/// The run command implementation.
pub struct RunCommand {
    workspace: Workspace,
    args: RunArgs,
    runner: Box<dyn CommandRunner>,
}

impl RunCommand {
    /// Create a new run command that spawns real processes.
    pub fn new(workspace: Workspace, args: RunArgs) -> Self {
        Self {
            workspace,
            args,
            runner: Box::new(SystemRunner),
        }
    }

    /// Replace the command runner.
    pub fn with_runner(mut self, runner: impl CommandRunner + 'static) -> Self {
        self.runner = Box::new(runner);
        self
    }

    fn build_options(&self) -> RunOptions {
        RunOptions {
            skip: self.args.skip.iter().copied().collect(),
        }
    }
}

/// Create the target root if it does not exist yet.
///
/// Every installer command runs with the root as its working directory, so
/// it has to exist before the first step.
fn ensure_root(root: &Path) -> Result<()> {
    if root.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(root).map_err(|source| SetupError::DirectoryCreate {
        path: root.to_path_buf(),
        source,
    })?;
    info!(root = %root.display(), "Created target root");
    Ok(())
}

impl Command for RunCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let workspace = &self.workspace;
        ensure_root(&workspace.root)?;

        let env = StepEnv {
            config: &workspace.config,
            python: &workspace.python,
            root: &workspace.root,
        };

        let installer = Installer::standard(&workspace.config);
        let outcome = installer.run(env, self.runner.as_ref(), ui, &self.build_options());

        if outcome.success() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(outcome.exit_code()))
        }
    }
}
