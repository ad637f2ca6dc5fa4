//! authrec-setup - Installer for the AuthRecorder Pro Python stack.
//!
//! Checks the target interpreter, installs the Python packages and Playwright
//! browsers the application needs, probes for the optional `mitmdump` tool,
//! creates working directories and smoke-tests the result.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, defaults, and validation
//! - [`error`] - Error types and result aliases
//! - [`python`] - Interpreter version handling and command construction
//! - [`runner`] - Ordered step execution under failure policies
//! - [`shell`] - External process execution
//! - [`steps`] - The installer steps
//! - [`ui`] - Spinners, status lines, and the run summary
//!
//! # Example
//!
//! ```
//! use authrec_setup::config::SetupConfig;
//! use authrec_setup::python::PythonEnv;
//! use authrec_setup::runner::{Installer, RunOptions};
//! use authrec_setup::shell::ScriptedRunner;
//! use authrec_setup::steps::StepEnv;
//! use authrec_setup::ui::MockUI;
//!
//! let temp = tempfile::TempDir::new().unwrap();
//! let config = SetupConfig::default();
//! let python = PythonEnv::new("python3");
//! let runner = ScriptedRunner::new();
//! runner.on_success("python3 --version", "Python 3.11.4");
//! let mut ui = MockUI::new();
//!
//! let env = StepEnv { config: &config, python: &python, root: temp.path() };
//! let outcome = Installer::standard(&config).run(env, &runner, &mut ui, &RunOptions::default());
//! assert_eq!(outcome.exit_code(), 0);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod python;
pub mod runner;
pub mod shell;
pub mod steps;
pub mod ui;

pub use error::{Result, SetupError};
