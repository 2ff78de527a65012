//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands are
//! routed via [`CommandDispatcher`]; a bare `nbenv` runs `setup` with
//! defaults.

pub mod completions;
pub mod dispatcher;
pub mod setup;
pub mod status;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use status::StatusReport;
