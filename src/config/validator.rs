//! Configuration validation rules.
//!
//! - Package, browser and directory names must be non-empty single tokens
//! - Directories must stay inside the target root
//! - The smoke-test browser must be one Playwright can launch and one the
//!   installer fetches
//! - The minimum interpreter must be a Python 3 release

use crate::config::schema::SetupConfig;
use crate::error::{Result, SetupError};
use std::path::{Component, Path};

/// Browser engines Playwright's sync API exposes for `launch()`.
pub const LAUNCHABLE_BROWSERS: &[&str] = &["chromium", "firefox", "webkit"];

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &str, message: String) -> Self {
        Self {
            rule: rule.to_string(),
            message,
        }
    }
}

/// Validate a configuration and return all errors.
///
/// This function collects all validation errors rather than stopping
/// at the first one, allowing users to fix multiple issues at once.
pub fn validate_config(config: &SetupConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    errors.extend(validate_names("dependency", &config.dependencies));
    errors.extend(validate_names("browser", &config.browsers));
    errors.extend(validate_directories(&config.directories));

    if !LAUNCHABLE_BROWSERS.contains(&config.smoke_browser.as_str()) {
        errors.push(ValidationError::new(
            "smoke-browser",
            format!(
                "smoke_browser '{}' must be one of: {}",
                config.smoke_browser,
                LAUNCHABLE_BROWSERS.join(", ")
            ),
        ));
    } else if !config.browsers.is_empty() && !config.browsers.contains(&config.smoke_browser) {
        errors.push(ValidationError::new(
            "smoke-browser-not-installed",
            format!(
                "smoke_browser '{}' is not in browsers ({})",
                config.smoke_browser,
                config.browsers.join(", ")
            ),
        ));
    }

    if config.min_python.major < 3 {
        errors.push(ValidationError::new(
            "min-python",
            format!(
                "min_python {} is below 3.0, which is not supported",
                config.min_python.short()
            ),
        ));
    }

    if let Some(python) = &config.python {
        if python.trim().is_empty() {
            errors.push(ValidationError::new(
                "python",
                "python must not be empty".to_string(),
            ));
        }
    }

    if let Some(tool) = &config.proxy_tool {
        if tool.program.trim().is_empty() {
            errors.push(ValidationError::new(
                "proxy-tool",
                format!("proxy_tool '{}' has no program", tool.name),
            ));
        }
    }

    errors
}

fn validate_names(kind: &str, names: &[String]) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (index, name) in names.iter().enumerate() {
        if name.trim().is_empty() {
            errors.push(ValidationError::new(
                &format!("empty-{}", kind),
                format!("{} #{} has an empty name", kind, index + 1),
            ));
        } else if name.contains(char::is_whitespace) || name.starts_with('-') {
            errors.push(ValidationError::new(
                &format!("invalid-{}", kind),
                format!("{} '{}' must be a single name", kind, name),
            ));
        }
    }

    errors
}

fn validate_directories(directories: &[String]) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for dir in directories {
        let path = Path::new(dir);
        let escapes = path
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));

        if dir.trim().is_empty() {
            errors.push(ValidationError::new(
                "empty-directory",
                "directory names must not be empty".to_string(),
            ));
        } else if escapes {
            errors.push(ValidationError::new(
                "directory-outside-root",
                format!("directory '{}' must be relative to the target root", dir),
            ));
        }
    }

    errors
}

/// Validate and return Result (for convenience).
///
/// # Errors
///
/// Returns `ConfigValidationError` if any validation rules fail.
pub fn validate(config: &SetupConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(SetupError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
