//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::steps::StepId;

/// authrec-setup - Installer for the AuthRecorder Pro Python stack.
#[derive(Debug, Parser)]
#[command(name = "authrec-setup")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .authrec/setup.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory to set up (overrides current directory)
    #[arg(short, long, global = true)]
    pub root: Option<PathBuf>,

    /// Python interpreter to provision
    #[arg(long, global = true, env = "AUTHREC_PYTHON", value_name = "EXE")]
    pub python: Option<String>,

    /// Show subprocess output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the installer (default if no command specified)
    Run(RunArgs),

    /// Show what the installer would do without running anything
    Plan(PlanArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RunArgs {
    /// Skip specified steps (comma-separated)
    #[arg(long, value_delimiter = ',', value_enum)]
    pub skip: Vec<StepId>,

    /// Plain output, no spinners
    #[arg(long)]
    pub non_interactive: bool,
}

/// Arguments for the `plan` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct PlanArgs {
    /// Skip specified steps (comma-separated)
    #[arg(long, value_delimiter = ',', value_enum)]
    pub skip: Vec<StepId>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
