//! nbenv - Python notebook environment provisioning.
//!
//! nbenv replaces the ad-hoc `setup_env.py` scripts that notebook projects
//! grow: it creates a local virtual environment, installs dependencies from
//! a requirements manifest, and registers a Jupyter kernel so the notebooks
//! run on any device.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`kernel`] - Jupyter kernel registration and lookup
//! - [`platform`] - OS family detection and interpreter discovery
//! - [`process`] - Subprocess invocation with check-call semantics
//! - [`provision`] - The linear provisioning pipeline
//! - [`ui`] - Terminal output, status icons, and spinners
//! - [`venv`] - Virtual environment path model
//!
//! # Example
//!
//! ```
//! use nbenv::venv::VenvPaths;
//! use std::path::Path;
//!
//! let paths = VenvPaths::new(Path::new("project"), "venv");
//! assert!(paths.python.starts_with(&paths.root));
//! assert!(paths.pip.starts_with(&paths.root));
//! ```

pub mod cli;
pub mod error;
pub mod kernel;
pub mod platform;
pub mod process;
pub mod provision;
pub mod ui;
pub mod venv;

pub use error::{NbenvError, Result};
