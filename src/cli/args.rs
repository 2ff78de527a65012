//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::kernel::{DEFAULT_KERNEL_DISPLAY, DEFAULT_KERNEL_NAME};
use crate::provision::DEFAULT_REQUIREMENTS;
use crate::venv::DEFAULT_VENV_DIR;

/// nbenv - Python notebook environment provisioning.
#[derive(Debug, Parser)]
#[command(name = "nbenv")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Provision the environment (default if no command specified)
    Setup(SetupArgs),

    /// Show the current environment status
    Status(StatusArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `setup` command.
#[derive(Debug, Clone, clap::Args)]
pub struct SetupArgs {
    /// Name of the virtual environment directory
    #[arg(long, default_value = DEFAULT_VENV_DIR)]
    pub venv_dir: String,

    /// Requirements manifest, relative to the project root
    #[arg(long, default_value = DEFAULT_REQUIREMENTS)]
    pub requirements: PathBuf,

    /// Internal kernel name to register
    #[arg(long, env = "NBENV_KERNEL_NAME", default_value = DEFAULT_KERNEL_NAME)]
    pub kernel_name: String,

    /// Kernel name shown in the Jupyter picker
    #[arg(long, env = "NBENV_KERNEL_DISPLAY", default_value = DEFAULT_KERNEL_DISPLAY)]
    pub display_name: String,

    /// Preview commands without executing
    #[arg(long)]
    pub dry_run: bool,
}

impl Default for SetupArgs {
    fn default() -> Self {
        Self {
            venv_dir: DEFAULT_VENV_DIR.to_string(),
            requirements: PathBuf::from(DEFAULT_REQUIREMENTS),
            kernel_name: DEFAULT_KERNEL_NAME.to_string(),
            display_name: DEFAULT_KERNEL_DISPLAY.to_string(),
            dry_run: false,
        }
    }
}

/// Arguments for the `status` command.
#[derive(Debug, Clone, clap::Args)]
pub struct StatusArgs {
    /// Name of the virtual environment directory
    #[arg(long, default_value = DEFAULT_VENV_DIR)]
    pub venv_dir: String,

    /// Requirements manifest, relative to the project root
    #[arg(long, default_value = DEFAULT_REQUIREMENTS)]
    pub requirements: PathBuf,

    /// Internal kernel name to look up
    #[arg(long, env = "NBENV_KERNEL_NAME", default_value = DEFAULT_KERNEL_NAME)]
    pub kernel_name: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
