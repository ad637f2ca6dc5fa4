//! Commands issued against the target interpreter.
//!
//! All package and browser operations go through `<python> -m <tool>` so they
//! act on the environment the interpreter belongs to, not whichever `pip` or
//! `playwright` happens to be first on PATH.

use crate::shell::CommandSpec;

/// The Python environment being provisioned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PythonEnv {
    interpreter: String,
}

impl PythonEnv {
    /// Target the given interpreter executable.
    pub fn new(interpreter: impl Into<String>) -> Self {
        Self {
            interpreter: interpreter.into(),
        }
    }

    /// Interpreter executable name or path.
    pub fn interpreter(&self) -> &str {
        &self.interpreter
    }

    fn python(&self) -> CommandSpec {
        CommandSpec::new(&self.interpreter)
    }

    /// `python --version`
    pub fn version_command(&self) -> CommandSpec {
        self.python().arg("--version")
    }

    /// `python -m pip install <package>`
    pub fn pip_install(&self, package: &str) -> CommandSpec {
        self.python().args(["-m", "pip", "install", package])
    }

    /// `python -m playwright install <browser>`
    pub fn playwright_install(&self, browser: &str) -> CommandSpec {
        self.python().args(["-m", "playwright", "install", browser])
    }

    /// `python -c "import <module>"`
    pub fn import_check(&self, module: &str) -> CommandSpec {
        self.python().arg("-c").arg(format!("import {}", module))
    }

    /// Launch and close a headless browser through Playwright's sync API.
    pub fn browser_smoke_test(&self, browser: &str) -> CommandSpec {
        self.python().arg("-c").arg(smoke_script(browser))
    }
}

/// Module name used to import a package.
///
/// Distribution names may use `-` and mixed case; import names are the
/// lowercased form with `-` replaced by `_`.
pub fn import_name(package: &str) -> String {
    package.trim().to_lowercase().replace('-', "_")
}

fn smoke_script(browser: &str) -> String {
    format!(
        "from playwright.sync_api import sync_playwright\n\
         with sync_playwright() as p:\n\
         \x20   browser = p.{}.launch(headless=True)\n\
         \x20   browser.close()\n",
        browser
    )
}
