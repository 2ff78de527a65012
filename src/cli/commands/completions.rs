//! Shell completions generation.

use clap::CommandFactory;

use crate::cli::args::{Cli, CompletionsArgs};
use crate::error::Result;
use crate::ui::Output;

use super::dispatcher::{Command, CommandResult};

/// The completions command implementation.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }
}

impl Command for CompletionsCommand {
    fn execute(&self, _output: &Output) -> Result<CommandResult> {
        let mut cmd = Cli::command();
        clap_complete::generate(self.args.shell, &mut cmd, "nbenv", &mut std::io::stdout());
        Ok(CommandResult::success())
    }
}
