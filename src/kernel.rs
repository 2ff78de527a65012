//! Jupyter kernel registration and lookup.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::{NbenvError, Result};
use crate::process::Invocation;
use crate::venv::VenvPaths;

/// Default internal kernel name.
pub const DEFAULT_KERNEL_NAME: &str = "snp-venv";

/// Default human-readable kernel display name.
pub const DEFAULT_KERNEL_DISPLAY: &str = "LSTM-SNP (Python 3.11)";

/// A named, display-labeled execution kernel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KernelSpec {
    /// Internal registry name.
    pub name: String,

    /// Name shown in the Jupyter kernel picker.
    pub display_name: String,
}

impl Default for KernelSpec {
    fn default() -> Self {
        Self {
            name: DEFAULT_KERNEL_NAME.to_string(),
            display_name: DEFAULT_KERNEL_DISPLAY.to_string(),
        }
    }
}

/// Build the user-scoped kernel registration invocation.
///
/// Runs `ipykernel install` through the venv interpreter so the kernel
/// records the venv's own Python, not whatever is first on PATH.
pub fn registration(venv: &VenvPaths, spec: &KernelSpec) -> Invocation {
    Invocation::new(&venv.python)
        .arg("-m")
        .arg("ipykernel")
        .arg("install")
        .arg("--user")
        .arg("--name")
        .arg(&spec.name)
        .arg("--display-name")
        .arg(&spec.display_name)
}

/// Look up the display name registered under `name`, if any.
pub fn installed_display_name(venv: &VenvPaths, name: &str) -> Result<Option<String>> {
    let listing = Invocation::new(&venv.python)
        .arg("-m")
        .arg("jupyter")
        .arg("kernelspec")
        .arg("list")
        .arg("--json")
        .capture_stdout()?;

    parse_kernelspec_listing(&listing, name)
}

#[derive(Debug, Deserialize)]
struct KernelspecListing {
    kernelspecs: HashMap<String, KernelspecEntry>,
}

#[derive(Debug, Deserialize)]
struct KernelspecEntry {
    spec: SpecInfo,
}

#[derive(Debug, Deserialize)]
struct SpecInfo {
    display_name: String,
}

fn parse_kernelspec_listing(json: &str, name: &str) -> Result<Option<String>> {
    let listing: KernelspecListing =
        serde_json::from_str(json).map_err(|e| NbenvError::KernelspecParse {
            message: e.to_string(),
        })?;

    Ok(listing
        .kernelspecs
        .get(name)
        .map(|entry| entry.spec.display_name.clone()))
}
