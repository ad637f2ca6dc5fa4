//! Plan command implementation.
//!
//! `authrec-setup plan` lists the steps a run would perform, their failure
//! policy and the commands they would invoke. Nothing is executed.

use serde::Serialize;

use crate::cli::args::PlanArgs;
use crate::error::Result;
use crate::runner::{Installer, PlannedStep, RunOptions};
use crate::steps::StepEnv;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, Workspace};

/// The plan command implementation.
pub struct PlanCommand {
    workspace: Workspace,
    args: PlanArgs,
}

/// JSON shape of `plan --json`.
#[derive(Debug, Serialize)]
struct PlanOutput<'a> {
    app_name: &'a str,
    python: &'a str,
    root: String,
    steps: Vec<PlannedStep>,
}

impl PlanCommand {
    /// Create a new plan command.
    pub fn new(workspace: Workspace, args: PlanArgs) -> Self {
        Self { workspace, args }
    }

    fn planned_steps(&self) -> Vec<PlannedStep> {
        let workspace = &self.workspace;
        let env = StepEnv {
            config: &workspace.config,
            python: &workspace.python,
            root: &workspace.root,
        };
        let options = RunOptions {
            skip: self.args.skip.iter().copied().collect(),
        };
        Installer::standard(&workspace.config).plan(&env, &options)
    }

    fn render_json(&self) -> Result<String> {
        let output = PlanOutput {
            app_name: &self.workspace.config.app_name,
            python: self.workspace.python.interpreter(),
            root: self.workspace.root.display().to_string(),
            steps: self.planned_steps(),
        };
        serde_json::to_string_pretty(&output).map_err(|e| anyhow::anyhow!(e).into())
    }
}

impl Command for PlanCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.json {
            println!("{}", self.render_json()?);
            return Ok(CommandResult::success());
        }

        ui.show_header(&format!("{} Installation Plan", self.workspace.config.app_name));
        ui.message(&format!("Interpreter: {}", self.workspace.python.interpreter()));
        ui.message(&format!("Root:        {}", self.workspace.root.display()));

        for (index, step) in self.planned_steps().iter().enumerate() {
            ui.message("");
            ui.message(&format!(
                "{}. {} [{}] ({})",
                index + 1,
                step.title,
                step.id,
                step.policy
            ));
            for command in &step.commands {
                ui.message(&format!("   $ {}", command.replace('\n', "; ")));
            }
        }

        Ok(CommandResult::success())
    }
}
