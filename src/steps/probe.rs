//! Optional tool probe.

use tracing::debug;

use crate::config::ToolProbeConfig;
use crate::error::{Result, SetupError};
use crate::shell::CommandSpec;

use super::{Step, StepContext, StepEnv, StepId, StepReport};

/// Checks whether an optional tool is installed.
///
/// The tool counts as available as soon as it can be launched; its exit
/// status is ignored.
#[derive(Debug, Clone)]
pub struct ProbeTool {
    tool: ToolProbeConfig,
}

impl ProbeTool {
    /// Probe the given tool.
    pub fn new(tool: ToolProbeConfig) -> Self {
        Self { tool }
    }

    fn command(&self) -> CommandSpec {
        CommandSpec::new(&self.tool.program).args(self.tool.args.iter().cloned())
    }
}

impl Step for ProbeTool {
    fn id(&self) -> StepId {
        StepId::Proxy
    }

    fn title(&self) -> &'static str {
        "Checking optional tools"
    }

    fn plan(&self, _env: &StepEnv<'_>) -> Vec<String> {
        vec![self.command().to_string()]
    }

    fn run(&self, ctx: &mut StepContext<'_>) -> Result<StepReport> {
        match ctx.run(&self.command()) {
            Ok(result) => {
                debug!(tool = %self.tool.name, code = ?result.exit_code, "Probe finished");
                Ok(StepReport::new(format!("{} is available", self.tool.name)))
            }
            Err(e) if e.is_not_found() => Err(SetupError::ToolNotFound {
                tool: self.tool.name.clone(),
                hint: self.tool.install_hint.clone(),
            }),
            Err(e) => Err(e),
        }
    }

    fn failure_hint(&self, error: &SetupError) -> Option<String> {
        match error {
            SetupError::ToolNotFound { .. } => self.tool.missing_note.clone(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SetupConfig;
    use crate::python::PythonEnv;
    use crate::shell::ScriptedRunner;
    use crate::ui::MockUI;
    use std::path::Path;

    fn probe(runner: &ScriptedRunner) -> Result<StepReport> {
        let config = SetupConfig::default();
        let python = PythonEnv::new("python3");
        let mut ui = MockUI::new();
        let mut ctx = StepContext {
            env: StepEnv {
                config: &config,
                python: &python,
                root: Path::new("."),
            },
            runner,
            ui: &mut ui,
        };
        ProbeTool::new(ToolProbeConfig::default()).run(&mut ctx)
    }

    #[test]
    fn found_tool_is_available() {
        let runner = ScriptedRunner::new();
        runner.on_success("mitmdump --version", "Mitmproxy: 10.1.0\n");

        let report = probe(&runner).unwrap();
        assert_eq!(report.detail, "mitmproxy is available");
    }

    #[test]
    fn nonzero_exit_still_counts_as_available() {
        let runner = ScriptedRunner::new();
        runner.on_failure("mitmdump --version", 2, "odd");
        assert!(probe(&runner).is_ok());
    }

    #[test]
    fn missing_tool_reports_install_hint() {
        let runner = ScriptedRunner::new();
        runner.on_not_found("mitmdump --version");

        let err = probe(&runner).unwrap_err();
        assert!(err.to_string().contains("pip install mitmproxy"));

        let step = ProbeTool::new(ToolProbeConfig::default());
        assert_eq!(
            step.failure_hint(&err).as_deref(),
            Some("MITM features will be limited")
        );
    }
}
