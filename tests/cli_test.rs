//! Integration tests for the command-line interface.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn setup_cmd(root: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("authrec-setup"));
    cmd.arg("--root").arg(root);
    cmd.env_remove("AUTHREC_PYTHON");
    cmd.env("NO_COLOR", "1");
    cmd
}

fn write_config(root: &Path, content: &str) {
    let dir = root.join(".authrec");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("setup.yml"), content).unwrap();
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("authrec-setup"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("AuthRecorder Pro"))
        .stdout(predicate::str::contains("plan"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("authrec-setup"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_rejects_unknown_step() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = setup_cmd(temp.path());
    cmd.args(["run", "--skip", "coffee"]);
    cmd.assert().code(2);
    Ok(())
}

#[test]
fn plan_lists_steps_without_side_effects() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = setup_cmd(temp.path());
    cmd.args(["plan", "--python", "python3"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Checking Python version"))
        .stdout(predicate::str::contains("python3 -m pip install requests"))
        .stdout(predicate::str::contains("python3 -m playwright install webkit"))
        .stdout(predicate::str::contains("(best-effort)"));

    assert!(!temp.path().join("outputs").exists());
    Ok(())
}

#[test]
fn plan_json_uses_config_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    write_config(
        temp.path(),
        "dependencies: [requests]\nbrowsers: [chromium]\nproxy_tool: null\n",
    );

    let mut cmd = setup_cmd(temp.path());
    cmd.args(["plan", "--json", "--python", "python3"]);
    let output = cmd.output()?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let steps = value["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 5);
    assert_eq!(steps[1]["commands"][0], "python3 -m pip install requests");
    assert!(steps.iter().all(|s| s["id"] != "proxy"));
    Ok(())
}

#[test]
fn invalid_config_exits_one() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    write_config(temp.path(), "directories: [\"/etc\"]\n");

    let mut cmd = setup_cmd(temp.path());
    cmd.arg("plan");
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid configuration"));
    Ok(())
}

#[test]
fn missing_explicit_config_exits_one() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = setup_cmd(temp.path());
    cmd.arg("--config").arg(temp.path().join("nope.yml")).arg("plan");
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration not found"));
    Ok(())
}

#[test]
fn missing_interpreter_fails_the_run() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = setup_cmd(temp.path());
    cmd.args(["run", "--non-interactive", "--python", "definitely-not-a-python-7f3a"]);
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("definitely-not-a-python-7f3a"));

    assert!(!temp.path().join("outputs").exists());
    Ok(())
}

#[test]
fn completions_bash() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("authrec-setup"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("authrec-setup"));
    Ok(())
}

#[cfg(unix)]
mod fake_python {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    /// A shell script standing in for the interpreter. It logs every
    /// invocation to `calls.log` next to itself.
    fn fake_python(dir: &Path, body: &str) -> std::path::PathBuf {
        let path = dir.join("fakepython");
        let script = format!(
            "#!/bin/sh\necho \"$@\" >> \"$(dirname \"$0\")/calls.log\"\n{}\nexit 0\n",
            body
        );
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    fn calls(dir: &Path) -> String {
        fs::read_to_string(dir.join("calls.log")).unwrap_or_default()
    }

    const VERSION_3_11: &str = r#"if [ "$1" = "--version" ]; then echo "Python 3.11.2"; exit 0; fi"#;

    #[test]
    fn full_run_succeeds() -> Result<(), Box<dyn std::error::Error>> {
        let bin = TempDir::new()?;
        let root = TempDir::new()?;
        let python = fake_python(bin.path(), VERSION_3_11);

        let mut cmd = setup_cmd(root.path());
        cmd.arg("--python").arg(&python).args(["run", "--skip", "proxy"]);
        cmd.assert()
            .success()
            .stdout(predicate::str::contains("Python 3.11.2 is compatible"))
            .stdout(predicate::str::contains("Installation completed successfully!"));

        for dir in ["outputs", "logs", "scripts"] {
            assert!(root.path().join(dir).is_dir());
        }
        let log = calls(bin.path());
        assert!(log.contains("-m pip install tqdm"));
        assert!(log.contains("-m playwright install chromium"));
        assert!(log.contains("-c import jinja2"));
        Ok(())
    }

    #[test]
    fn fresh_root_is_created_before_the_run() -> Result<(), Box<dyn std::error::Error>> {
        let bin = TempDir::new()?;
        let temp = TempDir::new()?;
        let root = temp.path().join("fresh-project");
        let python = fake_python(bin.path(), VERSION_3_11);

        let mut cmd = setup_cmd(&root);
        cmd.arg("--python")
            .arg(&python)
            .args(["run", "--non-interactive", "--skip", "proxy"]);
        cmd.assert()
            .success()
            .stdout(predicate::str::contains("Python 3.11.2 is compatible"));

        assert!(root.join("outputs").is_dir());
        Ok(())
    }

    #[test]
    fn relative_python_resolves_from_launch_dir() -> Result<(), Box<dyn std::error::Error>> {
        let bin = TempDir::new()?;
        let root = TempDir::new()?;
        fake_python(bin.path(), VERSION_3_11);

        let mut cmd = setup_cmd(root.path());
        cmd.current_dir(bin.path())
            .args(["--python", "./fakepython"])
            .args(["run", "--non-interactive", "--skip", "proxy"]);
        cmd.assert()
            .success()
            .stdout(predicate::str::contains("Python 3.11.2 is compatible"));

        assert!(calls(bin.path()).contains("-m pip install tqdm"));
        Ok(())
    }

    #[test]
    fn second_run_reports_existing_directories() -> Result<(), Box<dyn std::error::Error>> {
        let bin = TempDir::new()?;
        let root = TempDir::new()?;
        let python = fake_python(bin.path(), VERSION_3_11);

        let mut cmd = setup_cmd(root.path());
        cmd.arg("--python").arg(&python).args(["run", "--skip", "proxy"]);
        cmd.assert()
            .success()
            .stdout(predicate::str::contains("Created: logs/"));

        let mut cmd = setup_cmd(root.path());
        cmd.arg("--python").arg(&python).args(["run", "--skip", "proxy"]);
        cmd.assert()
            .success()
            .stdout(predicate::str::contains("Exists: logs/"));
        Ok(())
    }

    #[test]
    fn old_python_exits_one_before_installing() -> Result<(), Box<dyn std::error::Error>> {
        let bin = TempDir::new()?;
        let root = TempDir::new()?;
        let python = fake_python(
            bin.path(),
            r#"if [ "$1" = "--version" ]; then echo "Python 3.7.9"; exit 0; fi"#,
        );

        let mut cmd = setup_cmd(root.path());
        cmd.arg("--python").arg(&python).arg("run");
        cmd.assert()
            .code(1)
            .stderr(predicate::str::contains("Python 3.8 or higher is required"));

        assert!(!calls(bin.path()).contains("pip"));
        Ok(())
    }

    #[test]
    fn failing_package_stops_later_installs() -> Result<(), Box<dyn std::error::Error>> {
        let bin = TempDir::new()?;
        let root = TempDir::new()?;
        let body = format!(
            "{}\nif [ \"$4\" = \"rich\" ]; then echo \"ERROR: no rich for you\" >&2; exit 1; fi",
            VERSION_3_11
        );
        let python = fake_python(bin.path(), &body);

        let mut cmd = setup_cmd(root.path());
        cmd.arg("--python").arg(&python).arg("run");
        cmd.assert()
            .code(1)
            .stderr(predicate::str::contains("no rich for you"));

        let log = calls(bin.path());
        assert!(log.contains("pip install playwright"));
        assert!(!log.contains("pip install jinja2"));
        assert!(!log.contains("playwright install"));
        Ok(())
    }

    #[test]
    fn browser_failure_only_warns() -> Result<(), Box<dyn std::error::Error>> {
        let bin = TempDir::new()?;
        let root = TempDir::new()?;
        let body = format!(
            "{}\nif [ \"$4\" = \"webkit\" ]; then echo \"download failed\" >&2; exit 1; fi",
            VERSION_3_11
        );
        let python = fake_python(bin.path(), &body);

        let mut cmd = setup_cmd(root.path());
        cmd.arg("--python").arg(&python).args(["run", "--skip", "proxy"]);
        cmd.assert()
            .success()
            .stdout(predicate::str::contains("Warning: Failed to install webkit"))
            .stderr(predicate::str::contains("Failed to install browsers: webkit"));
        Ok(())
    }

    #[test]
    fn failed_import_exits_one() -> Result<(), Box<dyn std::error::Error>> {
        let bin = TempDir::new()?;
        let root = TempDir::new()?;
        let body = format!(
            "{}\nif [ \"$2\" = \"import tqdm\" ]; then echo \"No module named 'tqdm'\" >&2; exit 1; fi",
            VERSION_3_11
        );
        let python = fake_python(bin.path(), &body);

        let mut cmd = setup_cmd(root.path());
        cmd.arg("--python").arg(&python).args(["run", "--skip", "proxy"]);
        cmd.assert()
            .code(1)
            .stderr(predicate::str::contains("Installation test failed"));

        assert!(root.path().join("outputs").is_dir());
        Ok(())
    }
}
