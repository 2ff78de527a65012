//! The provisioning pipeline.
//!
//! A fixed linear sequence: ensure the venv exists, upgrade pip inside it,
//! install the requirements manifest, register the Jupyter kernel, print the
//! completion banner. Two conditional skips only (venv already present,
//! manifest missing); any step failure aborts the run with the failing
//! tool's exit code.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::kernel::{self, KernelSpec};
use crate::platform;
use crate::process::Invocation;
use crate::ui::{step_spinner, Output, StatusKind};
use crate::venv::{VenvPaths, DEFAULT_VENV_DIR};

/// Default requirements manifest file name.
pub const DEFAULT_REQUIREMENTS: &str = "requirements.txt";

/// Settings for a provisioning run.
#[derive(Debug, Clone)]
pub struct ProvisionOptions {
    /// Directory the venv and manifest are resolved against.
    pub project_root: PathBuf,

    /// Name of the venv directory under the project root.
    pub venv_dir: String,

    /// Requirements manifest, relative to the project root unless absolute.
    pub requirements: PathBuf,

    /// Kernel to register.
    pub kernel: KernelSpec,

    /// Print commands instead of executing them.
    pub dry_run: bool,
}

impl ProvisionOptions {
    /// Options with all defaults for the given project root.
    pub fn for_project(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            venv_dir: DEFAULT_VENV_DIR.to_string(),
            requirements: PathBuf::from(DEFAULT_REQUIREMENTS),
            kernel: KernelSpec::default(),
            dry_run: false,
        }
    }

    /// Venv paths for these options.
    pub fn venv_paths(&self) -> VenvPaths {
        VenvPaths::new(&self.project_root, &self.venv_dir)
    }

    /// Absolute path of the requirements manifest.
    pub fn requirements_path(&self) -> PathBuf {
        if self.requirements.is_absolute() {
            self.requirements.clone()
        } else {
            self.project_root.join(&self.requirements)
        }
    }
}

/// Runs the provisioning pipeline.
pub struct Provisioner<'a> {
    options: ProvisionOptions,
    output: &'a Output,
}

impl<'a> Provisioner<'a> {
    /// Create a provisioner.
    pub fn new(options: ProvisionOptions, output: &'a Output) -> Self {
        Self { options, output }
    }

    /// Run every step in order. The first failure aborts the run.
    pub fn run(&self) -> Result<()> {
        if self.options.dry_run {
            self.output.println(
                &self
                    .output
                    .theme()
                    .highlight
                    .apply_to("Dry-run mode: commands are printed, not executed")
                    .to_string(),
            );
        }

        let venv = self.options.venv_paths();

        self.ensure_venv(&venv)?;
        self.upgrade_pip(&venv)?;
        self.install_requirements(&venv)?;
        self.register_kernel(&venv)?;
        self.print_banner();

        Ok(())
    }

    /// Run an invocation, or print it in dry-run mode.
    fn invoke(&self, invocation: Invocation) -> Result<()> {
        if self.options.dry_run {
            self.output.println(
                &self
                    .output
                    .theme()
                    .command
                    .apply_to(format!("would run: {}", invocation.display()))
                    .to_string(),
            );
            return Ok(());
        }
        self.output.command(&invocation.display());
        invocation.check_call()
    }

    fn ensure_venv(&self, venv: &VenvPaths) -> Result<()> {
        if venv.exists() {
            self.output.status(
                StatusKind::Success,
                &format!(
                    "Virtual environment already exists at '{}/'",
                    self.options.venv_dir
                ),
            );
            return Ok(());
        }

        let base_python = match platform::find_base_python() {
            Ok(path) => path,
            // Dry runs stay side-effect free even without an interpreter
            Err(err) if self.options.dry_run => {
                tracing::debug!("No base interpreter for dry run: {}", err);
                PathBuf::from("python3")
            }
            Err(err) => return Err(err),
        };

        self.output.status(
            StatusKind::Running,
            &format!(
                "Creating virtual environment in '{}/'...",
                self.options.venv_dir
            ),
        );
        self.invoke(
            Invocation::new(base_python)
                .arg("-m")
                .arg("venv")
                .arg(&venv.root),
        )?;
        self.output
            .status(StatusKind::Success, "Virtual environment created.");
        Ok(())
    }

    fn upgrade_pip(&self, venv: &VenvPaths) -> Result<()> {
        // pip prints pages of progress during a self-upgrade; the original
        // script silences stdout here, and so do we.
        let invocation = Invocation::new(&venv.python)
            .arg("-m")
            .arg("pip")
            .arg("install")
            .arg("--upgrade")
            .arg("pip")
            .suppress_stdout();

        if self.options.dry_run {
            return self.invoke(invocation);
        }

        self.output.command(&invocation.display());
        let mut spinner = step_spinner(self.output, "Upgrading pip...");
        match invocation.check_call() {
            Ok(()) => {
                spinner.finish_success("pip upgraded.");
                Ok(())
            }
            Err(err) => {
                spinner.finish_error("pip upgrade failed.");
                Err(err)
            }
        }
    }

    fn install_requirements(&self, venv: &VenvPaths) -> Result<()> {
        let manifest = self.options.requirements_path();
        if !manifest.is_file() {
            self.output.warning(&format!(
                "{} not found, skipping dependency install.",
                display_name(&manifest, &self.options.project_root)
            ));
            return Ok(());
        }

        self.output.status(
            StatusKind::Running,
            &format!(
                "Installing dependencies from {}...",
                display_name(&manifest, &self.options.project_root)
            ),
        );
        self.invoke(Invocation::new(&venv.pip).arg("install").arg("-r").arg(&manifest))?;
        self.output
            .status(StatusKind::Success, "All dependencies installed.");
        Ok(())
    }

    fn register_kernel(&self, venv: &VenvPaths) -> Result<()> {
        self.output.status(
            StatusKind::Running,
            &format!(
                "Registering Jupyter kernel '{}'...",
                self.options.kernel.display_name
            ),
        );
        self.invoke(kernel::registration(venv, &self.options.kernel))?;
        self.output.status(
            StatusKind::Success,
            &format!("Kernel '{}' registered.", self.options.kernel.display_name),
        );
        Ok(())
    }

    fn print_banner(&self) {
        let theme = self.output.theme();
        let border = theme.border.apply_to("=".repeat(60)).to_string();
        let display = &self.options.kernel.display_name;

        self.output.println("");
        self.output.println(&border);
        self.output
            .println(&format!("  {}", theme.highlight.apply_to("Setup complete!")));
        self.output.println(&format!("  Kernel: {}", display));
        self.output
            .println("  Open the notebooks in Jupyter / VS Code and select");
        self.output
            .println(&format!("  the '{}' kernel to run them.", display));
        self.output.println(&border);
    }
}

/// Manifest path relative to the project root when possible, for messages.
fn display_name(path: &Path, project_root: &Path) -> String {
    path.strip_prefix(project_root)
        .unwrap_or(path)
        .display()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::OutputMode;

    #[test]
    fn default_options_match_notebook_project() {
        let options = ProvisionOptions::for_project("/proj");
        assert_eq!(options.venv_dir, "venv");
        assert_eq!(options.requirements, PathBuf::from("requirements.txt"));
        assert_eq!(options.kernel.name, "snp-venv");
        assert!(!options.dry_run);
    }

    #[test]
    fn requirements_path_joins_project_root() {
        let options = ProvisionOptions::for_project("/proj");
        assert_eq!(
            options.requirements_path(),
            PathBuf::from("/proj/requirements.txt")
        );
    }

    #[test]
    fn absolute_requirements_path_is_kept() {
        let mut options = ProvisionOptions::for_project("/proj");
        options.requirements = PathBuf::from("/elsewhere/reqs.txt");
        assert_eq!(
            options.requirements_path(),
            PathBuf::from("/elsewhere/reqs.txt")
        );
    }

    #[test]
    fn venv_paths_derive_from_options() {
        let mut options = ProvisionOptions::for_project("/proj");
        options.venv_dir = ".venv".to_string();
        assert_eq!(
            options.venv_paths().root,
            PathBuf::from("/proj").join(".venv")
        );
    }

    #[test]
    fn dry_run_touches_nothing_on_disk() {
        let temp = tempfile::TempDir::new().unwrap();
        let mut options = ProvisionOptions::for_project(temp.path());
        options.dry_run = true;

        let output = Output::new(OutputMode::Quiet);
        Provisioner::new(options.clone(), &output).run().unwrap();

        assert!(!options.venv_paths().exists());
        assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[test]
    fn display_name_strips_project_root() {
        let name = display_name(
            Path::new("/proj/requirements.txt"),
            Path::new("/proj"),
        );
        assert_eq!(name, "requirements.txt");
    }

    #[test]
    fn display_name_keeps_foreign_paths() {
        let name = display_name(Path::new("/other/reqs.txt"), Path::new("/proj"));
        assert_eq!(name, "/other/reqs.txt");
    }
}
