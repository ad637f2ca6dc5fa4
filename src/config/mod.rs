//! Installer configuration.
//!
//! - Schema definitions and built-in defaults in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use authrec_setup::config::{load_config, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let config_dir = temp.path().join(".authrec");
//! fs::create_dir_all(&config_dir).unwrap();
//! fs::write(config_dir.join("setup.yml"), "app_name: test").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.app_name, "test");
//! assert_eq!(config.browsers, vec!["chromium", "firefox", "webkit"]);
//! ```
//!
//! # Configuration File Location
//!
//! `<root>/.authrec/setup.yml`, or the file passed with `--config`. Fields
//! left out of the file keep their built-in defaults.

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{
    default_config_path, load_config, load_config_file, parse_config, CONFIG_DIR, CONFIG_FILE,
};
pub use schema::{SetupConfig, ToolProbeConfig};
pub use validator::{validate, validate_config, ValidationError, LAUNCHABLE_BROWSERS};
