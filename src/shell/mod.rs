//! External command execution.

pub mod command;
pub mod mock;
pub mod platform;

pub use command::{
    execute, CommandOptions, CommandResult, CommandRunner, CommandSpec, SystemRunner,
};
pub use mock::{ScriptedResponse, ScriptedRunner};
pub use platform::{default_python, is_ci};
