//! Platform detection and base interpreter discovery.
//!
//! Virtual environments lay out their executables differently per OS family:
//! `Scripts\python.exe` on Windows, `bin/python` everywhere else. This module
//! owns that branch, plus the PATH search for the base interpreter used to
//! create the environment in the first place.

use std::path::PathBuf;

use crate::error::{NbenvError, Result};

/// Environment variable that overrides base interpreter discovery.
pub const PYTHON_ENV_OVERRIDE: &str = "NBENV_PYTHON";

/// Subdirectory of a venv that holds its executables.
pub fn venv_bin_dir() -> &'static str {
    if cfg!(target_os = "windows") {
        "Scripts"
    } else {
        "bin"
    }
}

/// Executable file name for the current OS family.
pub fn exe_name(base: &str) -> String {
    if cfg!(target_os = "windows") {
        format!("{}.exe", base)
    } else {
        base.to_string()
    }
}

/// Locate the base Python interpreter used to create virtual environments.
///
/// Resolution order:
/// 1. `NBENV_PYTHON` environment variable (taken as-is, no existence check,
///    so a bad override fails at spawn time with the tool's own diagnostic)
/// 2. `python3`, then `python` on PATH (`python` first on Windows, where
///    `python3` is often a Store alias stub)
pub fn find_base_python() -> Result<PathBuf> {
    if let Some(path) = std::env::var_os(PYTHON_ENV_OVERRIDE) {
        tracing::debug!("Using {} override: {:?}", PYTHON_ENV_OVERRIDE, path);
        return Ok(PathBuf::from(path));
    }

    let candidates: &[&str] = if cfg!(target_os = "windows") {
        &["python", "python3", "py"]
    } else {
        &["python3", "python"]
    };

    for name in candidates {
        if let Some(path) = find_on_path(name) {
            tracing::debug!("Found base interpreter: {}", path.display());
            return Ok(path);
        }
    }

    Err(NbenvError::PythonNotFound {
        message: format!(
            "none of [{}] found on PATH; install Python 3 or set {}",
            candidates.join(", "),
            PYTHON_ENV_OVERRIDE
        ),
    })
}

/// Walk PATH looking for an executable with the given base name.
fn find_on_path(name: &str) -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH")?;
    let file_name = exe_name(name);

    for dir in std::env::split_paths(&path_var) {
        if dir.as_os_str().is_empty() {
            continue;
        }
        let candidate = dir.join(&file_name);
        if candidate.is_file() {
            return Some(candidate);
        }
    }
    None
}
