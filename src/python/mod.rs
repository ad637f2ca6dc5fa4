//! The target Python environment.
//!
//! - [`version`] - Interpreter version parsing and the minimum-version rule
//! - [`interpreter`] - Command construction for pip, Playwright and imports

pub mod interpreter;
pub mod version;

pub use interpreter::{import_name, PythonEnv};
pub use version::PythonVersion;
