//! Library integration tests.

use authrec_setup::config::{load_config, validate, SetupConfig};
use authrec_setup::python::PythonEnv;
use authrec_setup::runner::{Installer, RunOptions};
use authrec_setup::shell::ScriptedRunner;
use authrec_setup::steps::{StepEnv, StepId, StepStatus};
use authrec_setup::ui::MockUI;
use authrec_setup::SetupError;
use std::fs;
use tempfile::TempDir;

#[test]
fn error_types_are_public() {
    let err = SetupError::ToolNotFound {
        tool: "mitmdump".into(),
        hint: "pip install mitmproxy".into(),
    };
    assert!(err.to_string().contains("mitmdump"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> authrec_setup::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use authrec_setup::cli::{Cli, Commands};
    use clap::Parser;

    let cli = Cli::parse_from(["authrec-setup", "plan", "--json"]);

    if let Some(Commands::Plan(args)) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected Plan command");
    }
}

#[test]
fn config_file_drives_the_installer() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join(".authrec")).unwrap();
    fs::write(
        temp.path().join(".authrec/setup.yml"),
        r#"
app_name: Demo
dependencies: [requests, typing-extensions]
browsers: [firefox]
smoke_browser: firefox
directories: [data/raw, reports]
proxy_tool: null
"#,
    )
    .unwrap();

    let config: SetupConfig = load_config(temp.path(), None).unwrap();
    validate(&config).unwrap();

    let python = PythonEnv::new("/venv/bin/python");
    let runner = ScriptedRunner::new();
    runner.on_success("/venv/bin/python --version", "Python 3.10.12");
    let mut ui = MockUI::new();
    let env = StepEnv {
        config: &config,
        python: &python,
        root: temp.path(),
    };

    let outcome = Installer::standard(&config).run(env, &runner, &mut ui, &RunOptions::default());

    assert_eq!(outcome.exit_code(), 0);
    assert!(outcome.status(StepId::Proxy).is_none());
    assert!(runner.was_called("/venv/bin/python -m pip install typing-extensions"));
    assert!(runner.was_called("/venv/bin/python -m playwright install firefox"));
    assert!(runner.was_called("/venv/bin/python -c \"import typing_extensions\""));
    assert!(runner.was_called_with("p.firefox.launch(headless=True)"));
    assert!(temp.path().join("data/raw").is_dir());
    assert!(ui.has_message("Created: reports/"));
    assert_eq!(ui.headers(), &["Demo Installation"]);
}

#[test]
fn fatal_step_leaves_later_steps_not_run() {
    let temp = TempDir::new().unwrap();
    let config = SetupConfig::default();
    let python = PythonEnv::new("python3");
    let runner = ScriptedRunner::new();
    runner.on_not_found("python3 --version");
    let mut ui = MockUI::new();
    let env = StepEnv {
        config: &config,
        python: &python,
        root: temp.path(),
    };

    let outcome = Installer::standard(&config).run(env, &runner, &mut ui, &RunOptions::default());

    assert_eq!(outcome.exit_code(), 1);
    assert_eq!(runner.calls(), vec!["python3 --version"]);
    for id in &StepId::ALL[1..] {
        assert!(matches!(outcome.status(*id), Some(StepStatus::NotRun)));
    }
    assert!(ui.has_hint("--python"));
    assert_eq!(ui.summaries()[0].failed_step.as_deref(), Some("Checking Python version"));
}
