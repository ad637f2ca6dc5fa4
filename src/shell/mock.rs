//! Scripted command runner for testing.
//!
//! `ScriptedRunner` implements [`CommandRunner`] without spawning anything.
//! Responses are registered per command line; every invocation is recorded
//! so tests can assert on what ran and in which order.
//!
//! # Example
//!
//! ```
//! use authrec_setup::shell::{CommandOptions, CommandRunner, CommandSpec, ScriptedRunner};
//!
//! let runner = ScriptedRunner::new();
//! runner.on_failure("pip install broken", 1, "no such package");
//!
//! let ok = runner
//!     .run(&CommandSpec::new("pip").args(["install", "rich"]), &CommandOptions::default())
//!     .unwrap();
//! assert!(ok.success);
//!
//! let bad = runner
//!     .run(&CommandSpec::new("pip").args(["install", "broken"]), &CommandOptions::default())
//!     .unwrap();
//! assert!(!bad.success);
//! assert_eq!(runner.calls(), vec!["pip install rich", "pip install broken"]);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

use crate::error::{Result, SetupError};

use super::command::{CommandOptions, CommandResult, CommandRunner, CommandSpec};

/// A canned response for a command line.
#[derive(Debug, Clone)]
pub enum ScriptedResponse {
    /// The process ran and exited with the given code and output.
    Exit {
        code: i32,
        stdout: String,
        stderr: String,
    },
    /// The executable could not be found.
    NotFound,
}

impl ScriptedResponse {
    fn to_result(&self, command: &CommandSpec) -> Result<CommandResult> {
        match self {
            Self::Exit {
                code,
                stdout,
                stderr,
            } if *code == 0 => Ok(CommandResult::success(
                stdout.clone(),
                stderr.clone(),
                Duration::ZERO,
            )),
            Self::Exit {
                code,
                stdout,
                stderr,
            } => Ok(CommandResult::failure(
                Some(*code),
                stdout.clone(),
                stderr.clone(),
                Duration::ZERO,
            )),
            Self::NotFound => Err(SetupError::Spawn {
                program: command.program.clone(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "program not found"),
            }),
        }
    }
}

/// Command runner that replays registered responses.
///
/// Commands without a registered response succeed with empty output.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    responses: RefCell<HashMap<String, ScriptedResponse>>,
    calls: RefCell<Vec<String>>,
}

impl ScriptedRunner {
    /// Create a runner where every command succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a response for an exact command line (as rendered by `Display`).
    pub fn on(&self, command_line: &str, response: ScriptedResponse) {
        self.responses
            .borrow_mut()
            .insert(command_line.to_string(), response);
    }

    /// Register a successful run with the given stdout.
    pub fn on_success(&self, command_line: &str, stdout: &str) {
        self.on(
            command_line,
            ScriptedResponse::Exit {
                code: 0,
                stdout: stdout.to_string(),
                stderr: String::new(),
            },
        );
    }

    /// Register a non-zero exit with the given stderr.
    pub fn on_failure(&self, command_line: &str, code: i32, stderr: &str) {
        self.on(
            command_line,
            ScriptedResponse::Exit {
                code,
                stdout: String::new(),
                stderr: stderr.to_string(),
            },
        );
    }

    /// Register a missing executable.
    pub fn on_not_found(&self, command_line: &str) {
        self.on(command_line, ScriptedResponse::NotFound);
    }

    /// All command lines run so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Whether a command line was run.
    pub fn was_called(&self, command_line: &str) -> bool {
        self.calls.borrow().iter().any(|c| c == command_line)
    }

    /// Whether any command line containing `fragment` was run.
    pub fn was_called_with(&self, fragment: &str) -> bool {
        self.calls.borrow().iter().any(|c| c.contains(fragment))
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, command: &CommandSpec, _options: &CommandOptions) -> Result<CommandResult> {
        let line = command.to_string();
        self.calls.borrow_mut().push(line.clone());

        match self.responses.borrow().get(&line) {
            Some(response) => response.to_result(command),
            None => Ok(CommandResult::success(
                String::new(),
                String::new(),
                Duration::ZERO,
            )),
        }
    }
}
