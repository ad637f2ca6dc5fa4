//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cli::args::{Cli, Commands, RunArgs};
use crate::config::{load_config, validate, SetupConfig};
use crate::error::Result;
use crate::python::PythonEnv;
use crate::shell::default_python;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Everything a command needs to know about where and with what to install.
#[derive(Debug, Clone)]
pub struct Workspace {
    /// Directory being set up.
    pub root: PathBuf,
    /// Validated configuration.
    pub config: SetupConfig,
    /// Interpreter being provisioned.
    pub python: PythonEnv,
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    root: PathBuf,
    launch_dir: PathBuf,
    config_path: Option<PathBuf>,
    python: Option<String>,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given target root.
    ///
    /// Relative paths given on the command line are resolved against the
    /// current directory.
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            launch_dir: std::env::current_dir().unwrap_or_default(),
            config_path: None,
            python: None,
        }
    }

    /// Resolve relative command-line paths against `dir` instead of the
    /// current directory.
    pub fn with_launch_dir(mut self, dir: PathBuf) -> Self {
        self.launch_dir = dir;
        self
    }

    /// Use an explicit config file instead of `<root>/.authrec/setup.yml`.
    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    /// Override the interpreter named in the config.
    pub fn with_python(mut self, python: Option<String>) -> Self {
        self.python = python;
        self
    }

    /// Load and validate the configuration, then resolve the interpreter.
    ///
    /// The interpreter comes from `--python`/`AUTHREC_PYTHON`, then the
    /// config file, then the platform default. A relative interpreter path is
    /// anchored to the launch directory when given on the command line and to
    /// the root when named in the config file.
    pub fn workspace(&self) -> Result<Workspace> {
        let root = self.launch_dir.join(&self.root);
        let config_path = self.config_path.as_ref().map(|p| self.launch_dir.join(p));
        let config = load_config(&root, config_path.as_deref())?;
        validate(&config)?;

        let interpreter = match (&self.python, &config.python) {
            (Some(python), _) => anchor_interpreter(python, &self.launch_dir),
            (None, Some(python)) => anchor_interpreter(python, &root),
            (None, None) => default_python().to_string(),
        };
        debug!(%interpreter, root = %root.display(), "Resolved workspace");

        Ok(Workspace {
            root,
            python: PythonEnv::new(interpreter),
            config,
        })
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Run(args)) => {
                let cmd = super::run::RunCommand::new(self.workspace()?, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Plan(args)) => {
                let cmd = super::plan::PlanCommand::new(self.workspace()?, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                // Default to run command with default args
                let cmd = super::run::RunCommand::new(self.workspace()?, RunArgs::default());
                cmd.execute(ui)
            }
        }
    }
}

/// Join a relative interpreter path such as `./venv/bin/python` onto `base`.
///
/// Bare program names like `python3` are left alone for `PATH` lookup.
fn anchor_interpreter(interpreter: &str, base: &Path) -> String {
    let path = Path::new(interpreter);
    if path.is_relative() && path.components().count() > 1 {
        base.join(path).to_string_lossy().into_owned()
    } else {
        interpreter.to_string()
    }
}
