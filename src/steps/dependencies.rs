//! Package installation with pip.

use tracing::{debug, warn};

use crate::error::{Result, SetupError};

use super::{Step, StepContext, StepEnv, StepId, StepReport};

/// Installs each configured package in order.
///
/// Stops at the first failing install; later packages are not attempted and
/// already installed ones are left in place.
#[derive(Debug, Default)]
pub struct InstallDependencies;

impl Step for InstallDependencies {
    fn id(&self) -> StepId {
        StepId::Dependencies
    }

    fn title(&self) -> &'static str {
        "Installing Python dependencies"
    }

    fn plan(&self, env: &StepEnv<'_>) -> Vec<String> {
        env.config
            .dependencies
            .iter()
            .map(|package| env.python.pip_install(package).to_string())
            .collect()
    }

    fn run(&self, ctx: &mut StepContext<'_>) -> Result<StepReport> {
        let packages = ctx.env.config.dependencies.clone();

        for package in &packages {
            let command = ctx.env.python.pip_install(package);
            let mut spinner = ctx.ui.start_spinner(&format!("Installing {}...", package));
            debug!(%package, "Installing package");

            let result = match ctx.run(&command) {
                Ok(result) => result,
                Err(e) => {
                    spinner.finish_error(&format!("Installing {} failed", package));
                    return Err(e);
                }
            };

            if !result.success {
                spinner.finish_error(&format!("Installing {} failed", package));
                warn!(%package, code = ?result.exit_code, "Package install failed");
                ctx.ui.show_error_block(&command.to_string(), result.error_output());
                return Err(SetupError::PackageInstallFailed {
                    package: package.clone(),
                    message: result.failure_reason(),
                });
            }

            spinner.finish_success(&format!("Installing {} completed successfully", package));
        }

        Ok(StepReport::new(format!(
            "Installed {} package{}",
            packages.len(),
            if packages.len() == 1 { "" } else { "s" }
        )))
    }

    fn failure_hint(&self, error: &SetupError) -> Option<String> {
        match error {
            SetupError::PackageInstallFailed { package, .. } => Some(format!(
                "Check the package name and your network, then retry: pip install {}",
                package
            )),
            _ => None,
        }
    }
}
