//! Working-directory scaffolding.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, SetupError};

use super::{Step, StepContext, StepEnv, StepId, StepReport};

/// Which directories were created and which were already present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub created: Vec<String>,
    pub existing: Vec<String>,
}

/// Create each directory under `root` if it does not exist yet.
///
/// Existing directories are left alone. The first directory that cannot be
/// created aborts with [`SetupError::DirectoryCreate`].
pub fn scaffold(root: &Path, directories: &[String]) -> Result<ScaffoldReport> {
    let mut report = ScaffoldReport::default();

    for name in directories {
        let path: PathBuf = root.join(name);
        if path.is_dir() {
            report.existing.push(name.clone());
            continue;
        }

        std::fs::create_dir_all(&path).map_err(|source| SetupError::DirectoryCreate {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), "Created directory");
        report.created.push(name.clone());
    }

    Ok(report)
}

/// Creates the configured working directories.
#[derive(Debug, Default)]
pub struct CreateDirectories;

impl Step for CreateDirectories {
    fn id(&self) -> StepId {
        StepId::Directories
    }

    fn title(&self) -> &'static str {
        "Creating directories"
    }

    fn plan(&self, env: &StepEnv<'_>) -> Vec<String> {
        env.config
            .directories
            .iter()
            .map(|d| format!("mkdir {}", env.root.join(d).display()))
            .collect()
    }

    fn run(&self, ctx: &mut StepContext<'_>) -> Result<StepReport> {
        let report = scaffold(ctx.env.root, &ctx.env.config.directories)?;

        for name in &ctx.env.config.directories {
            if report.created.contains(name) {
                ctx.ui.message(&format!("   Created: {}/", name));
            } else {
                ctx.ui.message(&format!("   Exists: {}/", name));
            }
        }

        Ok(StepReport::new(format!(
            "{} created, {} already present",
            report.created.len(),
            report.existing.len()
        )))
    }
}
