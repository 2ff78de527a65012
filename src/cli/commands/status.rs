//! The `status` command: report on the provisioned environment.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Serialize;

use crate::cli::args::StatusArgs;
use crate::error::Result;
use crate::kernel;
use crate::ui::{Output, StatusKind};
use crate::venv::VenvPaths;

use super::dispatcher::{Command, CommandResult};

/// Snapshot of the environment as it exists on disk right now.
#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub project_root: PathBuf,
    pub venv_dir: String,
    pub venv_present: bool,
    pub python: PathBuf,
    pub python_present: bool,
    pub pip: PathBuf,
    pub pip_present: bool,
    pub requirements: PathBuf,
    pub requirements_present: bool,
    pub kernel_name: String,
    /// Display name registered under `kernel_name`, when the venv can answer.
    pub kernel_display_name: Option<String>,
}

impl StatusReport {
    /// Gather the report for a project.
    pub fn gather(project_root: &Path, args: &StatusArgs) -> Self {
        let venv = VenvPaths::new(project_root, &args.venv_dir);
        let requirements = if args.requirements.is_absolute() {
            args.requirements.clone()
        } else {
            project_root.join(&args.requirements)
        };

        // The lookup shells out to Jupyter inside the venv, so it can only
        // be attempted once the interpreter exists; failures degrade to
        // "unknown" rather than failing the report.
        let kernel_display_name = if venv.python.is_file() {
            match kernel::installed_display_name(&venv, &args.kernel_name) {
                Ok(found) => found,
                Err(err) => {
                    tracing::debug!("Kernelspec lookup failed: {}", err);
                    None
                }
            }
        } else {
            None
        };

        Self {
            project_root: project_root.to_path_buf(),
            venv_dir: args.venv_dir.clone(),
            venv_present: venv.exists(),
            python_present: venv.python.is_file(),
            pip_present: venv.pip.is_file(),
            requirements_present: requirements.is_file(),
            python: venv.python,
            pip: venv.pip,
            requirements,
            kernel_name: args.kernel_name.clone(),
            kernel_display_name,
        }
    }

    fn presence(&self, present: bool) -> StatusKind {
        if present {
            StatusKind::Success
        } else {
            StatusKind::Skipped
        }
    }

    /// Render the report as human-readable lines.
    pub fn render(&self, output: &Output) {
        let theme = output.theme();

        output.println(&format!(
            "{} {}",
            theme.key.apply_to("Project root:"),
            theme.value.apply_to(self.project_root.display())
        ));
        output.status(
            self.presence(self.venv_present),
            &format!("Virtual environment: {}/", self.venv_dir),
        );
        output.status(
            self.presence(self.python_present),
            &format!("Interpreter: {}", self.python.display()),
        );
        output.status(
            self.presence(self.pip_present),
            &format!("Installer: {}", self.pip.display()),
        );
        output.status(
            self.presence(self.requirements_present),
            &format!("Manifest: {}", self.requirements.display()),
        );
        match &self.kernel_display_name {
            Some(display) => output.status(
                StatusKind::Success,
                &format!("Kernel '{}': {}", self.kernel_name, display),
            ),
            None => output.status(
                StatusKind::Skipped,
                &format!("Kernel '{}': not registered", self.kernel_name),
            ),
        }
    }
}

/// The status command implementation.
pub struct StatusCommand {
    project_root: PathBuf,
    args: StatusArgs,
}

impl StatusCommand {
    /// Create a new status command.
    pub fn new(project_root: &Path, args: StatusArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }
}

impl Command for StatusCommand {
    fn execute(&self, output: &Output) -> Result<CommandResult> {
        let report = StatusReport::gather(&self.project_root, &self.args);

        if self.args.json {
            let json = serde_json::to_string_pretty(&report)
                .context("failed to serialize status report")?;
            println!("{}", json);
        } else {
            report.render(output);
        }

        Ok(CommandResult::success())
    }
}
