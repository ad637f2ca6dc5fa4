//! Configuration schema definitions.
//!
//! This module contains the struct definitions that map to the
//! `.authrec/setup.yml` file format. Every field has a built-in default, so
//! an absent or partial file yields the stock installer.

use serde::{Deserialize, Serialize};

use crate::python::PythonVersion;

/// Root installer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetupConfig {
    /// Application name (for display purposes)
    pub app_name: String,

    /// Interpreter to provision (defaults to `python3`, `python` on Windows)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub python: Option<String>,

    /// Oldest supported interpreter, as `major.minor`
    pub min_python: PythonVersion,

    /// Packages installed with pip, in order
    pub dependencies: Vec<String>,

    /// Browsers fetched with `playwright install`, in order
    pub browsers: Vec<String>,

    /// Browser launched by the post-install smoke test
    pub smoke_browser: String,

    /// Optional tool probed after browser installation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_tool: Option<ToolProbeConfig>,

    /// Working directories created under the target root
    pub directories: Vec<String>,

    /// Lines shown after a successful installation
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub next_steps: Vec<String>,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            app_name: "AuthRecorder Pro".to_string(),
            python: None,
            min_python: PythonVersion::new(3, 8, 0),
            dependencies: ["requests", "playwright", "rich", "jinja2", "tqdm"]
                .map(String::from)
                .to_vec(),
            browsers: ["chromium", "firefox", "webkit"].map(String::from).to_vec(),
            smoke_browser: "chromium".to_string(),
            proxy_tool: Some(ToolProbeConfig::default()),
            directories: ["outputs", "logs", "scripts"].map(String::from).to_vec(),
            next_steps: vec![
                "GUI Mode:    python authrecorder_complete.py".to_string(),
                "CLI Mode:    python authrecorder_complete.py --cli --target-url https://example.com/login"
                    .to_string(),
                "Help:        python authrecorder_complete.py --help".to_string(),
            ],
        }
    }
}

/// An optional external tool whose absence only limits some features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolProbeConfig {
    /// Display name (e.g. "mitmproxy")
    pub name: String,

    /// Executable to probe
    pub program: String,

    /// Arguments for the probe invocation
    pub args: Vec<String>,

    /// Shown when the tool is missing
    pub install_hint: String,

    /// What stops working without the tool
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_note: Option<String>,
}

impl Default for ToolProbeConfig {
    fn default() -> Self {
        Self {
            name: "mitmproxy".to_string(),
            program: "mitmdump".to_string(),
            args: vec!["--version".to_string()],
            install_hint: "pip install mitmproxy".to_string(),
            missing_note: Some("MITM features will be limited".to_string()),
        }
    }
}
