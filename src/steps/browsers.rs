//! Playwright browser installation.

use tracing::warn;

use crate::error::{Result, SetupError};

use super::{Step, StepContext, StepEnv, StepId, StepReport};

/// Fetches every configured browser.
///
/// All browsers are attempted even when an earlier one fails. Failures are
/// collected into a single [`SetupError::BrowserInstallFailed`].
#[derive(Debug, Default)]
pub struct InstallBrowsers;

impl Step for InstallBrowsers {
    fn id(&self) -> StepId {
        StepId::Browsers
    }

    fn title(&self) -> &'static str {
        "Installing Playwright browsers"
    }

    fn plan(&self, env: &StepEnv<'_>) -> Vec<String> {
        env.config
            .browsers
            .iter()
            .map(|browser| env.python.playwright_install(browser).to_string())
            .collect()
    }

    fn run(&self, ctx: &mut StepContext<'_>) -> Result<StepReport> {
        let browsers = ctx.env.config.browsers.clone();
        let mut failed = Vec::new();

        for browser in &browsers {
            let command = ctx.env.python.playwright_install(browser);
            let mut spinner = ctx.ui.start_spinner(&format!("Installing {}...", browser));

            let reason = match ctx.run(&command) {
                Ok(result) if result.success => None,
                Ok(result) => Some(result.failure_reason()),
                Err(e) => Some(e.to_string()),
            };

            match reason {
                None => {
                    let done = format!("Installing {} completed successfully", browser);
                    spinner.finish_success(&done);
                }
                Some(reason) => {
                    warn!(%browser, %reason, "Browser install failed");
                    spinner.finish_warning(&format!("Warning: Failed to install {}", browser));
                    failed.push(browser.clone());
                }
            }
        }

        if !failed.is_empty() {
            return Err(SetupError::BrowserInstallFailed { browsers: failed });
        }

        Ok(StepReport::new(format!("Installed {}", browsers.join(", "))))
    }

    fn failure_hint(&self, error: &SetupError) -> Option<String> {
        match error {
            SetupError::BrowserInstallFailed { browsers } => Some(format!(
                "Some browsers failed to install, but continuing. Retry with: playwright install {}",
                browsers.join(" ")
            )),
            _ => None,
        }
    }
}
