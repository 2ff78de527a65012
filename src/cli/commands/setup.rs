//! The `setup` command: run the provisioning pipeline.

use std::path::Path;

use crate::cli::args::SetupArgs;
use crate::error::Result;
use crate::kernel::KernelSpec;
use crate::provision::{ProvisionOptions, Provisioner};
use crate::ui::Output;

use super::dispatcher::{Command, CommandResult};

/// The setup command implementation.
pub struct SetupCommand {
    options: ProvisionOptions,
}

impl SetupCommand {
    /// Create a new setup command.
    pub fn new(project_root: &Path, args: SetupArgs) -> Self {
        Self {
            options: ProvisionOptions {
                project_root: project_root.to_path_buf(),
                venv_dir: args.venv_dir,
                requirements: args.requirements,
                kernel: KernelSpec {
                    name: args.kernel_name,
                    display_name: args.display_name,
                },
                dry_run: args.dry_run,
            },
        }
    }
}

impl Command for SetupCommand {
    fn execute(&self, output: &Output) -> Result<CommandResult> {
        Provisioner::new(self.options.clone(), output).run()?;
        Ok(CommandResult::success())
    }
}
