//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::ui::Output;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command, writing through `output`.
    fn execute(&self, output: &Output) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
///
/// Running with no subcommand performs a full `setup` with defaults, so a
/// bare `nbenv` in a notebook checkout provisions everything.
pub struct CommandDispatcher {
    project_root: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, output: &Output) -> Result<CommandResult> {
        match &cli.command {
            None => {
                let cmd = super::setup::SetupCommand::new(&self.project_root, Default::default());
                cmd.execute(output)
            }
            Some(Commands::Setup(args)) => {
                let cmd = super::setup::SetupCommand::new(&self.project_root, args.clone());
                cmd.execute(output)
            }
            Some(Commands::Status(args)) => {
                let cmd = super::status::StatusCommand::new(&self.project_root, args.clone());
                cmd.execute(output)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(output)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(2);
        assert!(!result.success);
        assert_eq!(result.exit_code, 2);
    }

    #[test]
    fn dispatcher_keeps_project_root() {
        let dispatcher = CommandDispatcher::new(PathBuf::from("/proj"));
        assert_eq!(dispatcher.project_root(), Path::new("/proj"));
    }
}
