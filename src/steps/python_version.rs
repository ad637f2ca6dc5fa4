//! Interpreter version check.

use tracing::debug;

use crate::error::{Result, SetupError};
use crate::python::PythonVersion;

use super::{Step, StepContext, StepEnv, StepId, StepReport};

/// Fails when the interpreter is older than `min_python` or cannot report a
/// version at all.
#[derive(Debug, Default)]
pub struct PythonVersionCheck;

impl Step for PythonVersionCheck {
    fn id(&self) -> StepId {
        StepId::Python
    }

    fn title(&self) -> &'static str {
        "Checking Python version"
    }

    fn plan(&self, env: &StepEnv<'_>) -> Vec<String> {
        vec![
            env.python.version_command().to_string(),
            format!("require Python >= {}", env.config.min_python.short()),
        ]
    }

    fn run(&self, ctx: &mut StepContext<'_>) -> Result<StepReport> {
        let python = ctx.env.python;
        let minimum = ctx.env.config.min_python;

        let result = ctx.run(&python.version_command())?;

        // Python 2 printed its version on stderr.
        let version = PythonVersion::parse_output(&result.stdout)
            .or_else(|| PythonVersion::parse_output(&result.stderr))
            .ok_or_else(|| SetupError::PythonVersionUnreadable {
                interpreter: python.interpreter().to_string(),
                message: if result.success {
                    "no version in output".to_string()
                } else {
                    result.failure_reason()
                },
            })?;

        debug!(%version, %minimum, "Detected interpreter version");

        if !version.satisfies(&minimum) {
            return Err(SetupError::UnsupportedPython {
                found: version.to_string(),
                minimum: minimum.short(),
            });
        }

        Ok(StepReport::new(format!("Python {} is compatible", version)))
    }

    fn failure_hint(&self, error: &SetupError) -> Option<String> {
        if error.is_not_found() {
            Some("Pass --python <path> or set AUTHREC_PYTHON to choose an interpreter".to_string())
        } else {
            None
        }
    }
}
