//! Post-install verification.

use tracing::debug;

use crate::error::{Result, SetupError};
use crate::python::import_name;

use super::{Step, StepContext, StepEnv, StepId, StepReport};

/// Imports every dependency, then launches and closes a headless browser.
///
/// The browser smoke test is left out when no browsers are configured.
#[derive(Debug, Default)]
pub struct VerifyInstallation;

impl Step for VerifyInstallation {
    fn id(&self) -> StepId {
        StepId::Verify
    }

    fn title(&self) -> &'static str {
        "Testing installation"
    }

    fn plan(&self, env: &StepEnv<'_>) -> Vec<String> {
        let mut plan: Vec<String> = env
            .config
            .dependencies
            .iter()
            .map(|p| env.python.import_check(&import_name(p)).to_string())
            .collect();
        if !env.config.browsers.is_empty() {
            plan.push(format!(
                "launch headless {} through playwright",
                env.config.smoke_browser
            ));
        }
        plan
    }

    fn run(&self, ctx: &mut StepContext<'_>) -> Result<StepReport> {
        let config = ctx.env.config;
        let python = ctx.env.python;

        for package in &config.dependencies {
            let module = import_name(package);
            let result = ctx.run(&python.import_check(&module))?;
            if !result.success {
                return Err(SetupError::VerificationFailed {
                    message: format!("import {} failed: {}", module, result.failure_reason()),
                });
            }
            debug!(%module, "Import ok");
        }
        ctx.ui.success("All Python dependencies imported successfully");

        if config.browsers.is_empty() {
            return Ok(StepReport::new("Imports verified, no browsers to launch"));
        }

        let browser = &config.smoke_browser;
        let mut spinner = ctx.ui.start_spinner(&format!("Launching headless {}...", browser));
        let result = match ctx.run(&python.browser_smoke_test(browser)) {
            Ok(result) => result,
            Err(e) => {
                spinner.finish_error(&format!("Launching {} failed", browser));
                return Err(e);
            }
        };
        if !result.success {
            spinner.finish_error(&format!("Launching {} failed", browser));
            ctx.ui.show_error_block(&format!("{} smoke test", browser), result.error_output());
            return Err(SetupError::VerificationFailed {
                message: format!("{} did not launch: {}", browser, result.failure_reason()),
            });
        }
        spinner.finish_success("Playwright browsers working correctly");

        Ok(StepReport::new(format!(
            "{} modules imported, {} launched",
            config.dependencies.len(),
            browser
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SetupConfig;
    use crate::python::PythonEnv;
    use crate::shell::{ScriptedResponse, ScriptedRunner};
    use crate::ui::MockUI;
    use std::path::Path;

    fn verify(config: &SetupConfig, runner: &ScriptedRunner, ui: &mut MockUI) -> Result<StepReport> {
        let python = PythonEnv::new("python3");
        let mut ctx = StepContext {
            env: StepEnv {
                config,
                python: &python,
                root: Path::new("."),
            },
            runner,
            ui,
        };
        VerifyInstallation.run(&mut ctx)
    }

    #[test]
    fn imports_then_smoke_test() {
        let runner = ScriptedRunner::new();
        let mut ui = MockUI::new();

        let report = verify(&SetupConfig::default(), &runner, &mut ui).unwrap();

        let calls = runner.calls();
        assert_eq!(calls.len(), 6);
        assert_eq!(calls[0], "python3 -c \"import requests\"");
        assert!(calls[5].contains("p.chromium.launch(headless=True)"));
        assert_eq!(report.detail, "5 modules imported, chromium launched");
        assert!(ui.has_success("All Python dependencies imported successfully"));
        assert!(ui.has_success("Playwright browsers working correctly"));
    }

    #[test]
    fn failed_import_aborts_before_smoke_test() {
        let runner = ScriptedRunner::new();
        runner.on_failure(
            "python3 -c \"import rich\"",
            1,
            "ModuleNotFoundError: No module named 'rich'",
        );
        let mut ui = MockUI::new();

        let err = verify(&SetupConfig::default(), &runner, &mut ui).unwrap_err();

        assert!(matches!(err, SetupError::VerificationFailed { .. }));
        assert!(err.to_string().contains("No module named 'rich'"));
        assert!(!runner.was_called_with("sync_playwright"));
    }

    #[test]
    fn failed_launch_is_a_verification_error() {
        let config = SetupConfig::default();
        let python = PythonEnv::new("python3");
        let runner = ScriptedRunner::new();
        runner.on_failure(
            &python.browser_smoke_test("chromium").to_string(),
            1,
            "Executable doesn't exist",
        );
        let mut ui = MockUI::new();

        let err = verify(&config, &runner, &mut ui).unwrap_err();

        assert!(err.to_string().contains("chromium did not launch"));
        assert!(ui.has_error("Launching chromium failed"));
    }

    #[test]
    fn failed_launch_shows_stdout_when_stderr_is_empty() {
        let python = PythonEnv::new("python3");
        let runner = ScriptedRunner::new();
        runner.on(
            &python.browser_smoke_test("chromium").to_string(),
            ScriptedResponse::Exit {
                code: 1,
                stdout: "Host system is missing dependencies".to_string(),
                stderr: String::new(),
            },
        );
        let mut ui = MockUI::new();

        verify(&SetupConfig::default(), &runner, &mut ui).unwrap_err();

        let blocks = ui.error_blocks();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].0, "chromium smoke test");
        assert!(blocks[0].1.contains("Host system is missing dependencies"));
    }

    #[test]
    fn unlaunchable_smoke_test_finishes_the_spinner() {
        let python = PythonEnv::new("python3");
        let runner = ScriptedRunner::new();
        runner.on_not_found(&python.browser_smoke_test("chromium").to_string());
        let mut ui = MockUI::new();

        let err = verify(&SetupConfig::default(), &runner, &mut ui).unwrap_err();

        assert!(err.is_not_found());
        assert!(ui.has_error("Launching chromium failed"));
    }

    #[test]
    fn no_browsers_skips_smoke_test() {
        let config = SetupConfig {
            browsers: Vec::new(),
            ..SetupConfig::default()
        };
        let runner = ScriptedRunner::new();
        let mut ui = MockUI::new();

        verify(&config, &runner, &mut ui).unwrap();

        assert_eq!(runner.calls().len(), 5);
    }

    #[test]
    fn import_names_are_normalised() {
        let config = SetupConfig {
            dependencies: vec!["Typing-Extensions".to_string()],
            browsers: Vec::new(),
            ..SetupConfig::default()
        };
        let runner = ScriptedRunner::new();
        let mut ui = MockUI::new();

        verify(&config, &runner, &mut ui).unwrap();

        assert_eq!(runner.calls(), vec!["python3 -c \"import typing_extensions\""]);
    }
}
